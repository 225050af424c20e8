pub mod coords;
pub mod cubie;
pub mod fixed;
pub mod vcube;

use strum::EnumCount;

use crate::moves::Face;

/// Number of faces of a cube.
pub const NUM_FACES: usize = 6;

/// Facelet characters in face order.
pub const FACE_CHARS: [char; NUM_FACES] = ['U', 'R', 'F', 'D', 'L', 'B'];

/// Edge length of the classic cube driven by the fixed engine.
pub const CLASSIC_SIZE: usize = 3;

/// Number of facelets of the classic cube.
pub const CLASSIC_FACELETS: usize = NUM_FACES * CLASSIC_SIZE * CLASSIC_SIZE;

/// The solved 3x3x3 facelet string.
pub const SOLVED_3X3: &str =
	"UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

/// The solved facelet string for an arbitrary cube size.
pub fn solved_state(size: usize) -> String {
	let mut state = String::with_capacity(NUM_FACES * size * size);
	for c in FACE_CHARS {
		for _ in 0..size * size {
			state.push(c);
		}
	}
	state
}

// ===== Corner pieces =====

/// Corner positions, ordered U layer then D layer.
#[derive(
	Clone, Copy, Default, PartialEq, Eq, Debug, strum::EnumIter, strum::EnumCount, strum::Display,
)]
#[allow(clippy::upper_case_acronyms)]
#[repr(usize)]
#[rustfmt::skip]
pub enum Corner {
	#[default]
	URF, UFL, ULB, UBR,
	DFR, DLF, DBL, DRB,
}

pub const NUM_CORNERS: usize = Corner::COUNT;

/// Facelet indices of each corner, primary sticker first.
/// The primary sticker is the one on the U or D face.
#[rustfmt::skip]
pub const CORNER_FACELETS: [[usize; 3]; NUM_CORNERS] = [
	[8, 9, 20],   // URF
	[6, 18, 38],  // UFL
	[0, 36, 47],  // ULB
	[2, 45, 11],  // UBR
	[29, 26, 15], // DFR
	[27, 44, 24], // DLF
	[33, 53, 42], // DBL
	[35, 17, 51], // DRB
];

/// Home-face colors of each corner, aligned with `CORNER_FACELETS`.
#[rustfmt::skip]
pub const CORNER_COLORS: [[Face; 3]; NUM_CORNERS] = [
	[Face::Up, Face::Right, Face::Front],
	[Face::Up, Face::Front, Face::Left],
	[Face::Up, Face::Left, Face::Back],
	[Face::Up, Face::Back, Face::Right],
	[Face::Down, Face::Front, Face::Right],
	[Face::Down, Face::Left, Face::Front],
	[Face::Down, Face::Back, Face::Left],
	[Face::Down, Face::Right, Face::Back],
];

// ===== Edge pieces =====

/// Edge positions, ordered U layer, D layer, then the E slice.
#[derive(
	Clone, Copy, Default, PartialEq, Eq, Debug, strum::EnumIter, strum::EnumCount, strum::Display,
)]
#[repr(usize)]
#[rustfmt::skip]
pub enum Edge {
	#[default]
	UR, UF, UL, UB,
	DR, DF, DL, DB,
	FR, FL, BL, BR,
}

pub const NUM_EDGES: usize = Edge::COUNT;

/// Facelet indices of each edge, primary sticker first.
#[rustfmt::skip]
pub const EDGE_FACELETS: [[usize; 2]; NUM_EDGES] = [
	[5, 10],  // UR
	[7, 19],  // UF
	[3, 37],  // UL
	[1, 46],  // UB
	[32, 16], // DR
	[28, 25], // DF
	[30, 43], // DL
	[34, 52], // DB
	[23, 12], // FR
	[21, 41], // FL
	[50, 39], // BL
	[48, 14], // BR
];

/// Home-face colors of each edge, aligned with `EDGE_FACELETS`.
#[rustfmt::skip]
pub const EDGE_COLORS: [[Face; 2]; NUM_EDGES] = [
	[Face::Up, Face::Right],
	[Face::Up, Face::Front],
	[Face::Up, Face::Left],
	[Face::Up, Face::Back],
	[Face::Down, Face::Right],
	[Face::Down, Face::Front],
	[Face::Down, Face::Left],
	[Face::Down, Face::Back],
	[Face::Front, Face::Right],
	[Face::Front, Face::Left],
	[Face::Back, Face::Left],
	[Face::Back, Face::Right],
];

/// Everything that can be wrong with a facelet string or a cubie
/// configuration built from one.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
	#[error("facelet string has {0} characters, expected {1}")]
	InvalidLength(usize, usize),
	#[error("facelet string contains invalid character '{0}'")]
	InvalidCharacter(char),
	#[error("face '{0}' appears on {1} facelets, expected {2}")]
	FaceCount(char, usize, usize),
	#[error("center facelets do not form a valid orientation")]
	InvalidCenters,
	#[error("facelets at corner slot {0} do not form a corner piece")]
	UnknownCorner(usize),
	#[error("facelets at edge slot {0} do not form an edge piece")]
	UnknownEdge(usize),
	#[error("cubie conversion requires a 3x3x3 cube, got size {0}")]
	UnsupportedSize(usize),
	#[error("faces {0} and {1} are opposed and cannot share an orientation")]
	OpposedFaces(Face, Face),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn facelet_tables_cover_every_sticker_once() {
		let mut seen = [false; CLASSIC_FACELETS];

		for corner in CORNER_FACELETS {
			for idx in corner {
				assert!(!seen[idx], "facelet {} listed twice", idx);
				seen[idx] = true;
			}
		}
		for edge in EDGE_FACELETS {
			for idx in edge {
				assert!(!seen[idx], "facelet {} listed twice", idx);
				seen[idx] = true;
			}
		}

		// Only the six centers remain.
		for (idx, covered) in seen.iter().enumerate() {
			assert_eq!(*covered, idx % 9 != 4, "facelet {}", idx);
		}
	}

	#[test]
	fn color_tables_match_facelet_faces() {
		for (facelets, colors) in CORNER_FACELETS.iter().zip(CORNER_COLORS.iter()) {
			for (idx, face) in facelets.iter().zip(colors.iter()) {
				assert_eq!(idx / 9, face.index());
			}
		}
		for (facelets, colors) in EDGE_FACELETS.iter().zip(EDGE_COLORS.iter()) {
			for (idx, face) in facelets.iter().zip(colors.iter()) {
				assert_eq!(idx / 9, face.index());
			}
		}
	}

	#[test]
	fn solved_state_matches_classic_constant() {
		assert_eq!(solved_state(3), SOLVED_3X3);
		assert_eq!(solved_state(2).len(), 24);
		assert!(solved_state(4).starts_with("UUUUUUUUUUUUUUUUR"));
	}
}
