//! Temporal mirror of a sequence.

use crate::moves::Move;

/// The sequence undoing the input: reversed order, quarter turns
/// inverted, doubles kept.
pub fn mirror_moves(moves: &[Move]) -> Vec<Move> {
	moves.iter().rev().map(Move::inverted).collect()
}
