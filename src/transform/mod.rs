//! Rewrite passes over move sequences.
//!
//! Every pass is a pure function from a move slice to a new move
//! vector, chainable through [`Algorithm::transform`].
//!
//! [`Algorithm::transform`]: crate::algorithm::Algorithm::transform

pub mod degrip;
pub mod mirror;
pub mod offset;
pub mod optimize;
pub mod rotation;
pub mod slice;
pub mod symmetry;
pub mod translate;
pub mod wide;

use crate::moves::Move;

/// Ceiling for every rewrite loop. Any accepted rewrite strictly
/// shrinks the sequence or the remaining grip count, so the bound is
/// never reached on real input.
pub const MAX_ITERATIONS: usize = 100;

/// Strip timestamps from every move.
pub fn untime_moves(moves: &[Move]) -> Vec<Move> {
	moves.iter().map(Move::untimed).collect()
}

/// Prefer `Rw`-style display for every wide move.
pub fn wide_moves(moves: &[Move]) -> Vec<Move> {
	moves.iter().map(Move::wide_notation).collect()
}

/// Prefer lowercase SiGN display for every wide move.
pub fn sign_moves(moves: &[Move]) -> Vec<Move> {
	moves.iter().map(Move::sign_notation).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::algorithm::Algorithm;

	#[test]
	fn notation_passes_only_touch_display() {
		let alg: Algorithm = "r U Rw' M2@40".parse().unwrap();

		assert_eq!(alg.transform(wide_moves).to_string(), "Rw U Rw' M2@40");
		assert_eq!(alg.transform(sign_moves).to_string(), "r U r' M2@40");
		assert_eq!(alg.transform(untime_moves).to_string(), "r U Rw' M2");

		assert_eq!(alg.transform(wide_moves), alg);
	}
}
