use crate::cube::{
	CubeError, CLASSIC_FACELETS, CORNER_COLORS, CORNER_FACELETS, EDGE_COLORS, EDGE_FACELETS,
	FACE_CHARS, NUM_CORNERS, NUM_EDGES, NUM_FACES, SOLVED_3X3,
};
use crate::moves::Face;

/// Piece-level cube state as Kociemba published in
/// https://kociemba.org/math/cubielevel.htm, extended with a center
/// orientation permutation so whole-cube rotations survive the
/// round trip through facelets.
///
/// `cp[i]` / `ep[i]` name the piece sitting in slot `i`, `co` / `eo`
/// its twist resp. flip, and `so[f]` the face shown where home face
/// `f`'s center sits.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct CubieCube {
	pub cp: [u8; NUM_CORNERS],
	pub co: [u8; NUM_CORNERS],
	pub ep: [u8; NUM_EDGES],
	pub eo: [u8; NUM_EDGES],
	pub so: [u8; NUM_FACES],
}

impl Default for CubieCube {
	fn default() -> Self {
		Self::solved()
	}
}

impl CubieCube {
	pub const fn solved() -> CubieCube {
		CubieCube {
			cp: [0, 1, 2, 3, 4, 5, 6, 7],
			co: [0; NUM_CORNERS],
			ep: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
			eo: [0; NUM_EDGES],
			so: [0, 1, 2, 3, 4, 5],
		}
	}

	pub fn is_solved(&self) -> bool {
		*self == Self::solved()
	}

	/// Permutation parity of the corners. Legal states have equal
	/// corner and edge parity.
	pub fn corner_parity(&self) -> bool {
		permutation_parity(&self.cp)
	}

	pub fn edge_parity(&self) -> bool {
		permutation_parity(&self.ep)
	}

	/// Render the state as a facelet string with the standard
	/// U/R/F/D/L/B labels.
	pub fn to_facelets(&self) -> String {
		// The solved scheme is 54 valid ASCII labels, so this
		// cannot fail.
		self.to_facelets_with_scheme(SOLVED_3X3)
			.unwrap_or_default()
	}

	/// Render the state against an arbitrary 54-character scheme.
	///
	/// Each output position shows the scheme character of the sticker
	/// now sitting there, looked up at the sticker's home position.
	/// Masked schemes pass their placeholder characters through.
	pub fn to_facelets_with_scheme(&self, scheme: &str) -> Result<String, CubeError> {
		let scheme: Vec<char> = scheme.chars().collect();
		if scheme.len() != CLASSIC_FACELETS {
			return Err(CubeError::InvalidLength(scheme.len(), CLASSIC_FACELETS));
		}

		let home = |source: usize| 9 * self.so[source / 9] as usize + source % 9;

		let mut facelets = [' '; CLASSIC_FACELETS];

		for face in 0..NUM_FACES {
			facelets[9 * face + 4] = scheme[home(9 * face + 4)];
		}

		for i in 0..NUM_CORNERS {
			for p in 0..3 {
				let target = CORNER_FACELETS[i][(p + self.co[i] as usize) % 3];
				let source = CORNER_FACELETS[self.cp[i] as usize][p];
				facelets[target] = scheme[home(source)];
			}
		}

		for i in 0..NUM_EDGES {
			for p in 0..2 {
				let target = EDGE_FACELETS[i][(p + self.eo[i] as usize) % 2];
				let source = EDGE_FACELETS[self.ep[i] as usize][p];
				facelets[target] = scheme[home(source)];
			}
		}

		Ok(facelets.iter().collect())
	}

	/// Parse a facelet string back into piece coordinates.
	///
	/// The center permutation is read off the six center facelets
	/// first; all sticker labels are then interpreted relative to it,
	/// so rotated renderings of the same state decode consistently.
	pub fn from_facelets(facelets: &str) -> Result<CubieCube, CubeError> {
		let chars: Vec<char> = facelets.chars().collect();
		if chars.len() != CLASSIC_FACELETS {
			return Err(CubeError::InvalidLength(chars.len(), CLASSIC_FACELETS));
		}

		let mut faces = [0usize; CLASSIC_FACELETS];
		for (i, c) in chars.iter().enumerate() {
			faces[i] = FACE_CHARS
				.iter()
				.position(|fc| fc == c)
				.ok_or(CubeError::InvalidCharacter(*c))?;
		}

		// Shown face of each home center, and its inverse for
		// relabeling the stickers.
		let mut so = [0u8; NUM_FACES];
		let mut so_inv = [NUM_FACES; NUM_FACES];
		for f in 0..NUM_FACES {
			let shown = faces[9 * f + 4];
			so[f] = shown as u8;
			if so_inv[shown] != NUM_FACES {
				return Err(CubeError::InvalidCenters);
			}
			so_inv[shown] = f;
		}

		let home = |idx: usize| so_inv[faces[idx]];

		let mut cp = [0u8; NUM_CORNERS];
		let mut co = [0u8; NUM_CORNERS];
		for i in 0..NUM_CORNERS {
			// Twist is where the U/D sticker sits.
			let ori = (0..3)
				.find(|&o| {
					let f = home(CORNER_FACELETS[i][o]);
					f == Face::Up.index() || f == Face::Down.index()
				})
				.ok_or(CubeError::UnknownCorner(i))?;

			let col1 = home(CORNER_FACELETS[i][(ori + 1) % 3]);
			let col2 = home(CORNER_FACELETS[i][(ori + 2) % 3]);

			let piece = CORNER_COLORS
				.iter()
				.position(|colors| {
					colors[1].index() == col1 && colors[2].index() == col2
				})
				.ok_or(CubeError::UnknownCorner(i))?;

			cp[i] = piece as u8;
			co[i] = ori as u8;
		}

		let mut ep = [0u8; NUM_EDGES];
		let mut eo = [0u8; NUM_EDGES];
		for i in 0..NUM_EDGES {
			let c0 = home(EDGE_FACELETS[i][0]);
			let c1 = home(EDGE_FACELETS[i][1]);

			let found = EDGE_COLORS.iter().enumerate().find_map(|(j, colors)| {
				let (a, b) = (colors[0].index(), colors[1].index());
				if (c0, c1) == (a, b) {
					Some((j, 0))
				} else if (c0, c1) == (b, a) {
					Some((j, 1))
				} else {
					None
				}
			});

			let (piece, flip) = found.ok_or(CubeError::UnknownEdge(i))?;
			ep[i] = piece as u8;
			eo[i] = flip;
		}

		Ok(CubieCube { cp, co, ep, eo, so })
	}
}

fn permutation_parity(perm: &[u8]) -> bool {
	let mut swaps = 0;
	for i in 0..perm.len() {
		for j in i + 1..perm.len() {
			if perm[i] > perm[j] {
				swaps += 1;
			}
		}
	}
	swaps % 2 == 1
}
