//! Relabel sequences as if the cube had been rotated first.
//!
//! `offset_x_moves` rewrites a sequence so that running it after an
//! `x` rotation reaches the state the original sequence reached
//! before the rotation, and likewise for the other eight variants.
//! Face moves keep their layer qualifiers; slice and rotation moves
//! may pick up a direction flip where the relabeled slice runs the
//! other way.

use crate::moves::{Axis, Face, Move, MoveKind, SliceMove};

type Relabel = fn(MoveKind) -> Option<(MoveKind, bool)>;

fn map_face(kind: MoveKind, to: Face) -> MoveKind {
	match kind {
		MoveKind::Outer(_) => MoveKind::Outer(to),
		_ => MoveKind::Wide(to),
	}
}

fn relabel_moves(moves: &[Move], relabel: Relabel) -> Vec<Move> {
	moves
		.iter()
		.map(|mv| match relabel(mv.kind) {
			Some((kind, flip)) => {
				let out = mv.with_kind(kind);
				if flip {
					out.inverted()
				} else {
					out
				}
			}
			None => *mv,
		})
		.collect()
}

// Clockwise relabelings; the counter-clockwise ones are their
// inverses with the same flips.

fn x_cw(kind: MoveKind) -> Option<(MoveKind, bool)> {
	match kind {
		MoveKind::Outer(f) | MoveKind::Wide(f) => {
			let to = match f {
				Face::Up => Face::Front,
				Face::Front => Face::Down,
				Face::Down => Face::Back,
				Face::Back => Face::Up,
				_ => return None,
			};
			Some((map_face(kind, to), false))
		}
		MoveKind::Slice(SliceMove::E) => Some((MoveKind::Slice(SliceMove::S), true)),
		MoveKind::Slice(SliceMove::S) => Some((MoveKind::Slice(SliceMove::E), false)),
		MoveKind::Rotation(Axis::Y) => Some((MoveKind::Rotation(Axis::Z), false)),
		MoveKind::Rotation(Axis::Z) => Some((MoveKind::Rotation(Axis::Y), true)),
		_ => None,
	}
}

fn x_cc(kind: MoveKind) -> Option<(MoveKind, bool)> {
	match kind {
		MoveKind::Outer(f) | MoveKind::Wide(f) => {
			let to = match f {
				Face::Front => Face::Up,
				Face::Down => Face::Front,
				Face::Back => Face::Down,
				Face::Up => Face::Back,
				_ => return None,
			};
			Some((map_face(kind, to), false))
		}
		MoveKind::Slice(SliceMove::S) => Some((MoveKind::Slice(SliceMove::E), true)),
		MoveKind::Slice(SliceMove::E) => Some((MoveKind::Slice(SliceMove::S), false)),
		MoveKind::Rotation(Axis::Z) => Some((MoveKind::Rotation(Axis::Y), false)),
		MoveKind::Rotation(Axis::Y) => Some((MoveKind::Rotation(Axis::Z), true)),
		_ => None,
	}
}

fn y_cw(kind: MoveKind) -> Option<(MoveKind, bool)> {
	match kind {
		MoveKind::Outer(f) | MoveKind::Wide(f) => {
			let to = match f {
				Face::Back => Face::Left,
				Face::Right => Face::Back,
				Face::Front => Face::Right,
				Face::Left => Face::Front,
				_ => return None,
			};
			Some((map_face(kind, to), false))
		}
		MoveKind::Slice(SliceMove::S) => Some((MoveKind::Slice(SliceMove::M), true)),
		MoveKind::Slice(SliceMove::M) => Some((MoveKind::Slice(SliceMove::S), false)),
		MoveKind::Rotation(Axis::Z) => Some((MoveKind::Rotation(Axis::X), false)),
		MoveKind::Rotation(Axis::X) => Some((MoveKind::Rotation(Axis::Z), true)),
		_ => None,
	}
}

fn y_cc(kind: MoveKind) -> Option<(MoveKind, bool)> {
	match kind {
		MoveKind::Outer(f) | MoveKind::Wide(f) => {
			let to = match f {
				Face::Left => Face::Back,
				Face::Back => Face::Right,
				Face::Right => Face::Front,
				Face::Front => Face::Left,
				_ => return None,
			};
			Some((map_face(kind, to), false))
		}
		MoveKind::Slice(SliceMove::M) => Some((MoveKind::Slice(SliceMove::S), true)),
		MoveKind::Slice(SliceMove::S) => Some((MoveKind::Slice(SliceMove::M), false)),
		MoveKind::Rotation(Axis::X) => Some((MoveKind::Rotation(Axis::Z), false)),
		MoveKind::Rotation(Axis::Z) => Some((MoveKind::Rotation(Axis::X), true)),
		_ => None,
	}
}

fn z_cw(kind: MoveKind) -> Option<(MoveKind, bool)> {
	match kind {
		MoveKind::Outer(f) | MoveKind::Wide(f) => {
			let to = match f {
				Face::Up => Face::Left,
				Face::Right => Face::Up,
				Face::Down => Face::Right,
				Face::Left => Face::Down,
				_ => return None,
			};
			Some((map_face(kind, to), false))
		}
		MoveKind::Slice(SliceMove::E) => Some((MoveKind::Slice(SliceMove::M), true)),
		MoveKind::Slice(SliceMove::M) => Some((MoveKind::Slice(SliceMove::E), false)),
		MoveKind::Rotation(Axis::X) => Some((MoveKind::Rotation(Axis::Y), false)),
		MoveKind::Rotation(Axis::Y) => Some((MoveKind::Rotation(Axis::X), true)),
		_ => None,
	}
}

fn z_cc(kind: MoveKind) -> Option<(MoveKind, bool)> {
	match kind {
		MoveKind::Outer(f) | MoveKind::Wide(f) => {
			let to = match f {
				Face::Left => Face::Up,
				Face::Up => Face::Right,
				Face::Right => Face::Down,
				Face::Down => Face::Left,
				_ => return None,
			};
			Some((map_face(kind, to), false))
		}
		MoveKind::Slice(SliceMove::M) => Some((MoveKind::Slice(SliceMove::E), true)),
		MoveKind::Slice(SliceMove::E) => Some((MoveKind::Slice(SliceMove::M), false)),
		MoveKind::Rotation(Axis::Y) => Some((MoveKind::Rotation(Axis::X), false)),
		MoveKind::Rotation(Axis::X) => Some((MoveKind::Rotation(Axis::Y), true)),
		_ => None,
	}
}

pub fn offset_x_moves(moves: &[Move]) -> Vec<Move> {
	relabel_moves(moves, x_cc)
}

pub fn offset_xprime_moves(moves: &[Move]) -> Vec<Move> {
	relabel_moves(moves, x_cw)
}

pub fn offset_x2_moves(moves: &[Move]) -> Vec<Move> {
	offset_x_moves(&offset_x_moves(moves))
}

pub fn offset_y_moves(moves: &[Move]) -> Vec<Move> {
	relabel_moves(moves, y_cc)
}

pub fn offset_yprime_moves(moves: &[Move]) -> Vec<Move> {
	relabel_moves(moves, y_cw)
}

pub fn offset_y2_moves(moves: &[Move]) -> Vec<Move> {
	offset_y_moves(&offset_y_moves(moves))
}

pub fn offset_z_moves(moves: &[Move]) -> Vec<Move> {
	relabel_moves(moves, z_cc)
}

pub fn offset_zprime_moves(moves: &[Move]) -> Vec<Move> {
	relabel_moves(moves, z_cw)
}

pub fn offset_z2_moves(moves: &[Move]) -> Vec<Move> {
	offset_z_moves(&offset_z_moves(moves))
}
