//! Trailing-rotation cleanup.

use crate::moves::Move;

/// Drop the whole-cube rotations a degrip pass leaves at the tail.
/// Rotations elsewhere in the sequence are kept.
pub fn remove_final_rotations(moves: &[Move]) -> Vec<Move> {
	let tail = moves
		.iter()
		.rev()
		.take_while(|mv| mv.is_rotation())
		.count();
	moves[..moves.len() - tail].to_vec()
}
