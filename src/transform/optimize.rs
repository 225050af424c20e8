//! Local simplification rules and their fixed-point driver.

use crate::moves::Move;

use super::MAX_ITERATIONS;

fn same_target(a: &Move, b: &Move) -> bool {
	a.kind == b.kind && a.layers == b.layers
}

/// `R R' -> nothing`, `R2 R2 -> nothing`.
pub fn optimize_do_undo_moves(moves: &[Move]) -> Vec<Move> {
	let mut moves = moves.to_vec();

	for _ in 0..MAX_ITERATIONS {
		let mut changed = false;
		let mut i = 0;

		while i + 1 < moves.len() {
			let cancels = moves[i].untimed().inverted() == moves[i + 1].untimed();
			if cancels {
				moves.drain(i..i + 2);
				changed = true;
			} else {
				i += 1;
			}
		}

		if !changed {
			return moves;
		}
	}

	moves
}

/// `R R R -> R'`.
pub fn optimize_repeat_three_moves(moves: &[Move]) -> Vec<Move> {
	let mut moves = moves.to_vec();

	for _ in 0..MAX_ITERATIONS {
		let mut changed = false;
		let mut i = 0;

		while i + 2 < moves.len() {
			if moves[i].untimed() == moves[i + 1].untimed()
				&& moves[i].untimed() == moves[i + 2].untimed()
			{
				let replacement = moves[i].inverted();
				moves.splice(i..i + 3, [replacement]);
				changed = true;
			} else {
				i += 1;
			}
		}

		if !changed {
			return moves;
		}
	}

	moves
}

/// `R R -> R2`.
pub fn optimize_double_moves(moves: &[Move]) -> Vec<Move> {
	let mut moves = moves.to_vec();

	for _ in 0..MAX_ITERATIONS {
		let mut changed = false;
		let mut i = 0;

		while i + 1 < moves.len() {
			if !moves[i].is_double() && moves[i].untimed() == moves[i + 1].untimed() {
				let replacement = moves[i].doubled();
				moves.splice(i..i + 2, [replacement]);
				changed = true;
			} else {
				i += 1;
			}
		}

		if !changed {
			return moves;
		}
	}

	moves
}

/// `R R2 -> R'`, `R2 R -> R'`.
pub fn optimize_triple_moves(moves: &[Move]) -> Vec<Move> {
	let mut moves = moves.to_vec();

	for _ in 0..MAX_ITERATIONS {
		let mut changed = false;
		let mut i = 0;

		while i + 1 < moves.len() {
			let (a, b) = (moves[i], moves[i + 1]);

			if same_target(&a, &b) && a.is_double() != b.is_double() {
				let quarter = if a.is_double() { b } else { a };
				let replacement = quarter.inverted().with_timestamp_of(&a);
				moves.splice(i..i + 2, [replacement]);
				changed = true;
			} else {
				i += 1;
			}
		}

		if !changed {
			return moves;
		}
	}

	moves
}

/// Run all four rules until no rule fires anymore.
pub fn compress_moves(moves: &[Move]) -> Vec<Move> {
	let mut moves = moves.to_vec();

	for _ in 0..MAX_ITERATIONS {
		let mut changed = false;

		for optimizer in [
			optimize_do_undo_moves,
			optimize_repeat_three_moves,
			optimize_double_moves,
			optimize_triple_moves,
		] {
			let next = optimizer(&moves);
			if next != moves {
				moves = next;
				changed = true;
			}
		}

		if !changed {
			return moves;
		}
	}

	moves
}

/// `R2 -> R R`, the inverse of the double-fold rule.
pub fn expand_moves(moves: &[Move]) -> Vec<Move> {
	let mut out = Vec::with_capacity(moves.len());

	for mv in moves {
		if mv.is_double() {
			let quarter = mv.doubled();
			out.push(quarter);
			out.push(quarter);
		} else {
			out.push(*mv);
		}
	}

	out
}

trait TimestampOf {
	fn with_timestamp_of(&self, source: &Move) -> Move;
}

impl TimestampOf for Move {
	fn with_timestamp_of(&self, source: &Move) -> Move {
		match source.timestamp {
			Some(t) => self.with_timestamp(t),
			None => self.untimed(),
		}
	}
}
