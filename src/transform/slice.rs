//! Slice expansion and recombination.
//!
//! A slice move equals two outer-layer turns plus a rotation, or a
//! wide turn plus an outer turn. `unslice_*` expands slices into one
//! of those spellings; `reslice_*` folds the spellings back into
//! slices. Expanded moves inherit the slice's timestamp, and folded
//! slices inherit the timestamp of the first move of the pair.

use crate::moves::{Axis, Direction, Face, Move, MoveKind, SliceMove};

use super::MAX_ITERATIONS;

/// Outer-pair-plus-rotation spelling of a clockwise slice.
fn rotation_parts(slice: SliceMove) -> [Move; 3] {
	match slice {
		SliceMove::M => [
			Move::outer(Face::Left, Direction::CounterClockwise),
			Move::outer(Face::Right, Direction::Clockwise),
			Move::rotation(Axis::X, Direction::CounterClockwise),
		],
		SliceMove::S => [
			Move::outer(Face::Front, Direction::CounterClockwise),
			Move::outer(Face::Back, Direction::Clockwise),
			Move::rotation(Axis::Z, Direction::Clockwise),
		],
		SliceMove::E => [
			Move::outer(Face::Down, Direction::CounterClockwise),
			Move::outer(Face::Up, Direction::Clockwise),
			Move::rotation(Axis::Y, Direction::CounterClockwise),
		],
	}
}

/// Wide-plus-outer spelling of a clockwise slice.
fn wide_parts(slice: SliceMove) -> [Move; 2] {
	match slice {
		SliceMove::M => [
			Move::wide(Face::Right, Direction::CounterClockwise),
			Move::outer(Face::Right, Direction::Clockwise),
		],
		SliceMove::S => [
			Move::wide(Face::Front, Direction::Clockwise),
			Move::outer(Face::Front, Direction::CounterClockwise),
		],
		SliceMove::E => [
			Move::wide(Face::Up, Direction::CounterClockwise),
			Move::outer(Face::Up, Direction::Clockwise),
		],
	}
}

/// Redirect a clockwise spelling element for the slice's direction.
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

pub fn unslice_rotation_moves(moves: &[Move]) -> Vec<Move> {
	let mut out = Vec::with_capacity(moves.len());

	for mv in moves {
		match mv.kind {
			MoveKind::Slice(slice) => out.extend(
				rotation_parts(slice).map(|base| inherit(&orient(base, mv.direction), mv)),
			),
			_ => out.push(*mv),
		}
	}

	out
}

pub fn unslice_wide_moves(moves: &[Move]) -> Vec<Move> {
	let mut out = Vec::with_capacity(moves.len());

	for mv in moves {
		match mv.kind {
			MoveKind::Slice(slice) => out.extend(
				wide_parts(slice).map(|base| inherit(&orient(base, mv.direction), mv)),
			),
			_ => out.push(*mv),
		}
	}

	out
}

struct Pattern {
	pair: (Move, Move),
	replacement: Vec<Move>,
}

/// Every adjacent pair that spells a slice of the given kinds, in
/// all three directions and both spellings.
fn slice_patterns(slices: &[SliceMove]) -> Vec<Pattern> {
	let mut out = Vec::new();

	for &slice in slices {
		for direction in [
			Direction::Clockwise,
			Direction::Double,
			Direction::CounterClockwise,
		] {
			let folded = Move::slice(slice, direction);

			let [a, b, rot] = rotation_parts(slice).map(|base| orient(base, direction));
			out.push(Pattern {
				pair: (a, b),
				replacement: vec![folded, rot.inverted()],
			});

			let [wide, outer] = wide_parts(slice).map(|base| orient(base, direction));
			out.push(Pattern {
				pair: (wide, outer),
				replacement: vec![folded],
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

fn matching<'a>(
	patterns: &'a [Pattern],
	a: &Move,
	b: &Move,
	threshold: Option<u64>,
) -> Option<&'a Pattern> {
	if !close_enough(a, b, threshold) {
		return None;
	}

	let (a, b) = (a.untimed(), b.untimed());
	patterns
		.iter()
		.find(|p| (a == p.pair.0 && b == p.pair.1) || (a == p.pair.1 && b == p.pair.0))
}

fn reslice(moves: &[Move], patterns: &[Pattern], threshold: Option<u64>) -> Vec<Move> {
	let mut moves = moves.to_vec();

	for _ in 0..MAX_ITERATIONS {
		let mut out = Vec::with_capacity(moves.len());
		let mut changed = false;
		let mut i = 0;

		while i < moves.len() {
			if i + 1 < moves.len() {
				if let Some(pattern) = matching(patterns, &moves[i], &moves[i + 1], threshold) {
					out.extend(pattern.replacement.iter().map(|mv| inherit(mv, &moves[i])));
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

const ALL_SLICES: [SliceMove; 3] = [SliceMove::M, SliceMove::S, SliceMove::E];

pub fn reslice_moves(moves: &[Move]) -> Vec<Move> {
	reslice(moves, &slice_patterns(&ALL_SLICES), None)
}

pub fn reslice_m_moves(moves: &[Move]) -> Vec<Move> {
	reslice(moves, &slice_patterns(&[SliceMove::M]), None)
}

pub fn reslice_s_moves(moves: &[Move]) -> Vec<Move> {
	reslice(moves, &slice_patterns(&[SliceMove::S]), None)
}

pub fn reslice_e_moves(moves: &[Move]) -> Vec<Move> {
	reslice(moves, &slice_patterns(&[SliceMove::E]), None)
}

/// Fold only pairs executed within `threshold` of each other.
/// Untimed pairs always fold.
pub fn reslice_timed_moves(threshold: u64) -> impl Fn(&[Move]) -> Vec<Move> {
	move |moves| reslice(moves, &slice_patterns(&ALL_SLICES), Some(threshold))
}

pub fn reslice_m_timed_moves(threshold: u64) -> impl Fn(&[Move]) -> Vec<Move> {
	move |moves| reslice(moves, &slice_patterns(&[SliceMove::M]), Some(threshold))
}

pub fn reslice_s_timed_moves(threshold: u64) -> impl Fn(&[Move]) -> Vec<Move> {
	move |moves| reslice(moves, &slice_patterns(&[SliceMove::S]), Some(threshold))
}

pub fn reslice_e_timed_moves(threshold: u64) -> impl Fn(&[Move]) -> Vec<Move> {
	move |moves| reslice(moves, &slice_patterns(&[SliceMove::E]), Some(threshold))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::algorithm::Algorithm;
	use crate::cube::vcube::VCube;
	use crate::transform::optimize::compress_moves;

	fn check(f: impl FnOnce(&[Move]) -> Vec<Move>, input: &str, expected: &str) {
		let alg: Algorithm = input.parse().unwrap();
		assert_eq!(alg.transform(f).to_string(), expected);
	}

	#[test]
	fn unslice_rotation_spelling() {
		check(unslice_rotation_moves, "M2 U S E", "L2 R2 x2 U F' B z D' U y'");
		check(unslice_rotation_moves, "M'", "L R' x");
	}

	#[test]
	fn unslice_wide_spelling() {
		check(unslice_wide_moves, "M2 U S E", "r2 R2 U f F' u' U");
	}

	#[test]
	fn unslice_inherits_timestamps() {
		check(
			unslice_rotation_moves,
			"M2@1 U@2 S@3 E@4",
			"L2@1 R2@1 x2@1 U@2 F'@3 B@3 z@3 D'@4 U@4 y'@4",
		);
	}

	#[test]
	fn unslice_preserves_the_cube_effect() {
		for input in ["M S E", "M2 U S' E2 R"] {
			let alg: Algorithm = input.parse().unwrap();

			for spelling in [unslice_rotation_moves, unslice_wide_moves] {
				let mut a = VCube::new();
				a.apply(&alg).unwrap();
				let mut b = VCube::new();
				b.apply(&alg.transform(spelling)).unwrap();
				assert_eq!(a.state(), b.state(), "input {}", input);
			}
		}
	}

	#[test]
	fn reslice_folds_both_orders() {
		check(reslice_moves, "U' D", "E' y'");
		check(reslice_moves, "D U'", "E' y'");
		check(reslice_moves, "r' R", "M");
		check(reslice_moves, "R r'", "M");
	}

	#[test]
	fn reslice_single_kinds() {
		check(reslice_e_moves, "U' D F", "E' y' F");
		check(reslice_m_moves, "L' R F", "M x F");
		check(reslice_s_moves, "B' F F", "S' z F");
	}

	#[test]
	fn reslice_ignores_timestamps_by_default() {
		check(reslice_m_moves, "L'@100 R@200 F@300", "M@100 x@100 F@300");
	}

	#[test]
	fn reslice_skips_layered_moves() {
		check(reslice_m_moves, "L' R 2F", "M x 2F");
		check(reslice_m_moves, "2L' R 2F", "2L' R 2F");
	}

	#[test]
	fn reslice_timed_respects_the_threshold() {
		check(reslice_timed_moves(50), "U'@100 D@150", "E'@100 y'@100");
		check(reslice_timed_moves(10), "U'@100 D@150", "U'@100 D@150");
		check(reslice_timed_moves(50), "U' D", "E' y'");
		check(reslice_m_timed_moves(50), "L'@0 R@30 F@70", "M@0 x@0 F@70");
		check(reslice_s_timed_moves(50), "B'@0 F@30 F@70", "S'@0 z@0 F@70");
		check(reslice_e_timed_moves(50), "U'@0 D@30 F@70", "E'@0 y'@0 F@70");
	}

	#[test]
	fn unslice_then_reslice_round_trips() {
		let alg: Algorithm = "M".parse().unwrap();
		assert_eq!(alg.transform(unslice_wide_moves).transform(reslice_moves), alg);
		assert_eq!(
			alg.transform(unslice_rotation_moves)
				.transform(reslice_moves)
				.transform(compress_moves),
			alg
		);
	}
}
