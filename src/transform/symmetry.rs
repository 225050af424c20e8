//! Mirror a sequence through a plane of the cube.
//!
//! Each symmetry fixes one slice plane: moves living in that plane
//! (its slice and its rotation axis) are kept as-is, the two faces
//! it separates swap labels, and every other move reverses
//! direction. The mirrored sequence traces the reflected path on a
//! reflected cube.

use crate::moves::{Axis, Face, Move, MoveKind};

fn reflect(moves: &[Move], fixed_axis: Axis, swap: [Face; 2]) -> Vec<Move> {
	moves
		.iter()
		.map(|mv| {
			let kept = match mv.kind {
				MoveKind::Rotation(axis) => axis == fixed_axis,
				MoveKind::Slice(slice) => slice.axis() == fixed_axis,
				_ => false,
			};
			if kept {
				return *mv;
			}

			let out = match mv.kind {
				MoveKind::Outer(f) if f == swap[0] => mv.with_kind(MoveKind::Outer(swap[1])),
				MoveKind::Outer(f) if f == swap[1] => mv.with_kind(MoveKind::Outer(swap[0])),
				MoveKind::Wide(f) if f == swap[0] => mv.with_kind(MoveKind::Wide(swap[1])),
				MoveKind::Wide(f) if f == swap[1] => mv.with_kind(MoveKind::Wide(swap[0])),
				_ => *mv,
			};
			out.inverted()
		})
		.collect()
}

/// Reflection through the M plane: swaps right and left.
pub fn symmetry_m_moves(moves: &[Move]) -> Vec<Move> {
	reflect(moves, Axis::X, [Face::Right, Face::Left])
}

/// Reflection through the S plane: swaps front and back.
pub fn symmetry_s_moves(moves: &[Move]) -> Vec<Move> {
	reflect(moves, Axis::Z, [Face::Front, Face::Back])
}

/// Reflection through the E plane: swaps up and down.
pub fn symmetry_e_moves(moves: &[Move]) -> Vec<Move> {
	reflect(moves, Axis::Y, [Face::Up, Face::Down])
}

/// Point reflection through the cube center, the M and S
/// reflections composed.
pub fn symmetry_c_moves(moves: &[Move]) -> Vec<Move> {
	symmetry_s_moves(&symmetry_m_moves(moves))
}
