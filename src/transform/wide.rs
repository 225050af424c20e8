//! Wide-turn expansion and recombination.
//!
//! A two-layer wide turn equals the opposite outer turn plus a
//! rotation, or its own outer turn plus the adjacent slice.
//! `unwide_*` expands wides into one of those spellings; `rewide`
//! folds outer-plus-rotation pairs back into wides. Deeper layered
//! wides are left alone.

use crate::moves::{Axis, Direction, Face, Layers, Move, MoveKind, SliceMove};

use super::MAX_ITERATIONS;

/// Outer-plus-rotation spelling of a clockwise wide turn.
fn rotation_parts(face: Face) -> [Move; 2] {
	let rotation = match face {
		Face::Up => Move::rotation(Axis::Y, Direction::Clockwise),
		Face::Down => Move::rotation(Axis::Y, Direction::CounterClockwise),
		Face::Right => Move::rotation(Axis::X, Direction::Clockwise),
		Face::Left => Move::rotation(Axis::X, Direction::CounterClockwise),
		Face::Front => Move::rotation(Axis::Z, Direction::Clockwise),
		Face::Back => Move::rotation(Axis::Z, Direction::CounterClockwise),
	};

	[
		Move::outer(face.opposite(), Direction::Clockwise),
		rotation,
	]
}

/// Outer-plus-slice spelling of a clockwise wide turn.
fn slice_parts(face: Face) -> [Move; 2] {
	let slice = match face {
		Face::Front => Move::slice(SliceMove::S, Direction::Clockwise),
		Face::Back => Move::slice(SliceMove::S, Direction::CounterClockwise),
		Face::Right => Move::slice(SliceMove::M, Direction::CounterClockwise),
		Face::Left => Move::slice(SliceMove::M, Direction::Clockwise),
		Face::Up => Move::slice(SliceMove::E, Direction::CounterClockwise),
		Face::Down => Move::slice(SliceMove::E, Direction::Clockwise),
	};

	[Move::outer(face, Direction::Clockwise), slice]
}

fn orient(base: Move, direction: Direction) -> Move {
	match direction {
		Direction::Clockwise => base,
		Direction::Double => base.doubled(),
		Direction::CounterClockwise => base.inverted(),
	}
}

fn inherit(base: &Move, source: &Move) -> Move {
	match source.timestamp {
		Some(t) => base.with_timestamp(t),
		None => *base,
	}
}

fn unwide(moves: &[Move], parts: fn(Face) -> [Move; 2]) -> Vec<Move> {
	let mut out = Vec::with_capacity(moves.len());

	for mv in moves {
		match mv.kind {
			MoveKind::Wide(face) if mv.layers == Layers::Default => out.extend(
				parts(face).map(|base| inherit(&orient(base, mv.direction), mv)),
			),
			_ => out.push(*mv),
		}
	}

	out
}

pub fn unwide_rotation_moves(moves: &[Move]) -> Vec<Move> {
	unwide(moves, rotation_parts)
}

pub fn unwide_slice_moves(moves: &[Move]) -> Vec<Move> {
	unwide(moves, slice_parts)
}

struct Pattern {
	pair: (Move, Move),
	replacement: Move,
}

fn wide_patterns() -> Vec<Pattern> {
	let mut out = Vec::new();

	for face in [
		Face::Up,
		Face::Right,
		Face::Front,
		Face::Down,
		Face::Left,
		Face::Back,
	] {
		for direction in [
			Direction::Clockwise,
			Direction::Double,
			Direction::CounterClockwise,
		] {
			let [outer, rotation] = rotation_parts(face).map(|base| orient(base, direction));
			out.push(Pattern {
				pair: (outer, rotation),
				replacement: Move::wide(face, direction),
			});
		}
	}

	out
}

fn close_enough(a: &Move, b: &Move, threshold: Option<u64>) -> bool {
	match (threshold, a.timestamp, b.timestamp) {
		(Some(limit), Some(ta), Some(tb)) => ta.abs_diff(tb) <= limit,
		_ => true,
	}
}

fn rewide(moves: &[Move], patterns: &[Pattern], threshold: Option<u64>) -> Vec<Move> {
	let mut moves = moves.to_vec();

	for _ in 0..MAX_ITERATIONS {
		let mut out = Vec::with_capacity(moves.len());
		let mut changed = false;
		let mut i = 0;

		while i < moves.len() {
			if i + 1 < moves.len() && close_enough(&moves[i], &moves[i + 1], threshold) {
				let (a, b) = (moves[i].untimed(), moves[i + 1].untimed());
				let matched = patterns.iter().find(|p| {
					(a == p.pair.0 && b == p.pair.1) || (a == p.pair.1 && b == p.pair.0)
				});

				if let Some(pattern) = matched {
					out.push(inherit(&pattern.replacement, &moves[i]));
					i += 2;
					changed = true;
					continue;
				}
			}
			out.push(moves[i]);
			i += 1;
		}

		moves = out;
		if !changed {
			return moves;
		}
	}

	moves
}

pub fn rewide_moves(moves: &[Move]) -> Vec<Move> {
	rewide(moves, &wide_patterns(), None)
}

/// Fold only pairs executed within `threshold` of each other.
/// Untimed pairs always fold.
pub fn rewide_timed_moves(threshold: u64) -> impl Fn(&[Move]) -> Vec<Move> {
	move |moves| rewide(moves, &wide_patterns(), Some(threshold))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::algorithm::Algorithm;
	use crate::cube::vcube::VCube;
	use crate::transform::degrip::degrip_full_moves;
	use crate::transform::rotation::remove_final_rotations;

	fn check(f: impl FnOnce(&[Move]) -> Vec<Move>, input: &str, expected: &str) {
		let alg: Algorithm = input.parse().unwrap();
		assert_eq!(alg.transform(f).to_string(), expected);
	}

	#[test]
	fn unwide_rotation_spelling() {
		check(unwide_rotation_moves, "f r u", "B z L x D y");
		check(unwide_rotation_moves, "b l d", "F z' R x' U y'");
		check(unwide_rotation_moves, "r F u b", "L x F D y F z'");
		check(unwide_rotation_moves, "Fw Rw Uw", "B z L x D y");
	}

	#[test]
	fn unwide_slice_spelling() {
		check(unwide_slice_moves, "f r u", "F S R M' U E'");
		check(unwide_slice_moves, "b l d", "B S' L M D E");
		check(unwide_slice_moves, "r F u b", "R M' F U E' B S'");
	}

	#[test]
	fn unwide_inherits_timestamps() {
		check(unwide_rotation_moves, "f@1 r@2 u@3", "B@1 z@1 L@2 x@2 D@3 y@3");
	}

	#[test]
	fn unwide_then_degrip_cleans_to_outer_turns() {
		let cleaned = |moves: &[Move]| {
			remove_final_rotations(&degrip_full_moves(&unwide_rotation_moves(moves)))
		};
		check(cleaned, "f r u", "B D B");
		check(cleaned, "b l d", "F D B");
	}

	#[test]
	fn unwide_preserves_the_cube_effect() {
		for input in ["f r u", "b l d", "r2 F u' b"] {
			let alg: Algorithm = input.parse().unwrap();

			for spelling in [unwide_rotation_moves, unwide_slice_moves] {
				let mut a = VCube::new();
				a.apply(&alg).unwrap();
				let mut b = VCube::new();
				b.apply(&alg.transform(spelling)).unwrap();
				assert_eq!(a.state(), b.state(), "input {}", input);
			}
		}
	}

	#[test]
	fn rewide_folds_both_orders() {
		check(rewide_moves, "L x", "r");
		check(rewide_moves, "x L", "r");
		check(rewide_moves, "L x f", "r f");
		check(rewide_moves, "L' x'", "r'");
		check(rewide_moves, "D2 y2", "u2");
	}

	#[test]
	fn rewide_skips_layered_moves() {
		check(rewide_moves, "L x 2F", "r 2F");
		check(rewide_moves, "2L x 2F", "2L x 2F");
	}

	#[test]
	fn rewide_takes_the_first_timestamp() {
		check(rewide_moves, "L@1 x@2 F@3", "r@1 F@3");
		check(rewide_moves, "L'@1 x'@2 F@3", "r'@1 F@3");
	}

	#[test]
	fn rewide_timed_respects_the_threshold() {
		check(rewide_timed_moves(50), "L@0 x@30 F", "r@0 F");
		check(rewide_timed_moves(50), "x@0 L@30 F", "r@0 F");
		check(rewide_timed_moves(10), "L@10 x@30 F", "L@10 x@30 F");
		check(rewide_timed_moves(50), "L x", "r");
	}

	#[test]
	fn unwide_then_rewide_round_trips() {
		let alg: Algorithm = "f r2 u'".parse().unwrap();
		assert_eq!(
			alg.transform(unwide_rotation_moves).transform(rewide_moves),
			alg
		);
	}
}
