//! Push whole-cube rotations to the end of a sequence.
//!
//! A rotation is a grip change, not a turn. Each pass finds the
//! first rotation followed by real moves, conjugates that suffix by
//! the rotation and re-appends the rotation, until all configured
//! rotations have drifted to the tail. The result is compressed.

use crate::moves::{Axis, Direction, Move, MoveKind};

use super::offset::{
	offset_x2_moves, offset_x_moves, offset_xprime_moves, offset_y2_moves, offset_y_moves,
	offset_yprime_moves, offset_z2_moves, offset_z_moves, offset_zprime_moves,
};
use super::optimize::compress_moves;
use super::MAX_ITERATIONS;

fn configured(mv: &Move, axes: &[Axis]) -> bool {
	match mv.kind {
		MoveKind::Rotation(axis) => axes.contains(&axis),
		_ => false,
	}
}

/// The offset pass undoing a grip change: conjugation by the
/// rotation itself.
pub(super) fn offset_for(mv: &Move) -> fn(&[Move]) -> Vec<Move> {
	match mv.kind {
		MoveKind::Rotation(Axis::X) => match mv.direction {
			Direction::Clockwise => offset_xprime_moves,
			Direction::Double => offset_x2_moves,
			Direction::CounterClockwise => offset_x_moves,
		},
		MoveKind::Rotation(Axis::Y) => match mv.direction {
			Direction::Clockwise => offset_yprime_moves,
			Direction::Double => offset_y2_moves,
			Direction::CounterClockwise => offset_y_moves,
		},
		_ => match mv.direction {
			Direction::Clockwise => offset_zprime_moves,
			Direction::Double => offset_z2_moves,
			Direction::CounterClockwise => offset_z_moves,
		},
	}
}

/// First configured rotation that still has non-rotation moves
/// after it.
fn find_grip(moves: &[Move], axes: &[Axis]) -> Option<usize> {
	for (i, mv) in moves.iter().enumerate() {
		if i + 1 == moves.len() {
			break;
		}
		if configured(mv, axes) {
			let suffix = &moves[i + 1..];
			if suffix.iter().any(|m| !configured(m, axes)) {
				return Some(i);
			}
			break;
		}
	}
	None
}

fn degrip(moves: &[Move], axes: &[Axis]) -> Vec<Move> {
	let mut moves = moves.to_vec();

	for _ in 0..MAX_ITERATIONS {
		let Some(i) = find_grip(&moves, axes) else {
			return compress_moves(&moves);
		};

		let gripper = moves[i];
		let suffix = offset_for(&gripper)(&moves[i + 1..]);

		moves.truncate(i);
		moves.extend(suffix);
		moves.push(gripper);
	}

	compress_moves(&moves)
}

pub fn degrip_x_moves(moves: &[Move]) -> Vec<Move> {
	degrip(moves, &[Axis::X])
}

pub fn degrip_y_moves(moves: &[Move]) -> Vec<Move> {
	degrip(moves, &[Axis::Y])
}

pub fn degrip_z_moves(moves: &[Move]) -> Vec<Move> {
	degrip(moves, &[Axis::Z])
}

pub fn degrip_full_moves(moves: &[Move]) -> Vec<Move> {
	degrip(moves, &[Axis::X, Axis::Y, Axis::Z])
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::algorithm::Algorithm;
	use crate::cube::vcube::VCube;

	fn degripped(f: fn(&[Move]) -> Vec<Move>, input: &str) -> String {
		let alg: Algorithm = input.parse().unwrap();
		alg.transform(f).to_string()
	}

	#[test]
	fn rotation_drifts_to_the_tail() {
		assert_eq!(degripped(degrip_y_moves, "y R U"), "B U y");
		assert_eq!(degripped(degrip_x_moves, "x U x'"), "F");
		assert_eq!(degripped(degrip_full_moves, "z U z'"), "L");
	}

	#[test]
	fn multiple_grips_resolve() {
		assert_eq!(degripped(degrip_full_moves, "y R y R"), "B L y2");
	}

	#[test]
	fn already_degripped_input_is_only_compressed() {
		assert_eq!(degripped(degrip_full_moves, "R U R' U'"), "R U R' U'");
		assert_eq!(degripped(degrip_full_moves, "R U U' R' y"), "y");
	}

	#[test]
	fn degrip_preserves_the_cube_effect() {
		for input in ["y R U", "x U x' F2 y L", "z2 M S z' U", "y R y R"] {
			let alg: Algorithm = input.parse().unwrap();
			let out = alg.transform(degrip_full_moves);

			let mut a = VCube::new();
			a.apply(&alg).unwrap();
			let mut b = VCube::new();
			b.apply(&out).unwrap();
			assert_eq!(a.state(), b.state(), "input {}", input);
		}
	}

	#[test]
	fn x_pass_ignores_other_rotations() {
		assert_eq!(degripped(degrip_x_moves, "y R U"), "y R U");
	}
}
