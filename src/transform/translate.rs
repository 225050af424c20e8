//! Re-express a sequence under an initial cube orientation.
//!
//! Holding the cube rotated by `orientation` and performing the
//! translated sequence reaches the original sequence's state, up to
//! the orientation itself. Each orientation rotation conjugates the
//! whole sequence through the matching offset pass.

use crate::moves::{Move, MoveError};

use super::degrip::offset_for;

/// Build the pass translating sequences for a cube first rotated by
/// `orientation`. Fails if any orientation move is not a rotation.
pub fn translate_moves(
	orientation: &[Move],
) -> Result<impl Fn(&[Move]) -> Vec<Move>, MoveError> {
	for mv in orientation {
		if !mv.is_rotation() {
			return Err(MoveError::NotARotation(*mv));
		}
	}

	let orientation = orientation.to_vec();
	Ok(move |moves: &[Move]| {
		let mut moves = moves.to_vec();
		if moves.is_empty() {
			return moves;
		}
		for gripper in &orientation {
			moves = offset_for(&gripper.inverted())(&moves);
		}
		moves
	})
}
