use std::fmt;
use std::str::FromStr;

use crate::algorithm::Algorithm;
use crate::cube::coords::PermutationCache;
use crate::cube::cubie::CubieCube;
use crate::cube::fixed::{apply_transform, transform_for};
use crate::cube::{solved_state, CubeError, CLASSIC_SIZE, FACE_CHARS, NUM_FACES};
use crate::moves::{parse_moves, Axis, Direction, Face, Move, MoveError};

/// Virtual cube tracking facelets and move history.
///
/// Defaults to the classic 3x3x3, where moves run off precomputed
/// tables; any other size goes through the coordinate engine, with
/// computed permutations memoized per cube.
#[derive(Clone, Debug, Default)]
pub struct VCube {
	size: usize,
	state: Vec<u8>,
	history: Vec<Move>,
	cache: PermutationCache,
}

impl VCube {
	pub fn new() -> VCube {
		VCube::with_size(CLASSIC_SIZE)
	}

	pub fn with_size(size: usize) -> VCube {
		VCube {
			size,
			state: solved_state(size).into_bytes(),
			history: Vec::new(),
			cache: PermutationCache::new(),
		}
	}

	/// Build a cube from a facelet string, inferring the size from
	/// its length. The string must pass the integrity check.
	pub fn from_state(state: &str) -> Result<VCube, CubeError> {
		let size = infer_size(state.len())
			.ok_or(CubeError::InvalidLength(state.len(), NUM_FACES * 9))?;

		check_integrity(state, size)?;

		Ok(VCube {
			size,
			state: state.as_bytes().to_vec(),
			history: Vec::new(),
			cache: PermutationCache::new(),
		})
	}

	pub fn from_cubies(cubies: &CubieCube) -> VCube {
		VCube {
			size: CLASSIC_SIZE,
			state: cubies.to_facelets().into_bytes(),
			history: Vec::new(),
			cache: PermutationCache::new(),
		}
	}

	pub fn size(&self) -> usize {
		self.size
	}

	pub fn state(&self) -> &str {
		// State bytes only ever come from valid facelet strings.
		std::str::from_utf8(&self.state).unwrap_or("")
	}

	pub fn history(&self) -> &[Move] {
		&self.history
	}

	pub fn clear_history(&mut self) {
		self.history.clear();
	}

	/// Parse and apply a move sequence.
	///
	/// The whole string is parsed before anything is applied, so a
	/// notation error leaves the cube untouched. A semantic error
	/// (layer beyond the cube size) surfaces mid-sequence and leaves
	/// the earlier moves applied and recorded.
	pub fn rotate(&mut self, moves: &str) -> Result<&str, MoveError> {
		let moves = parse_moves(moves)?;
		self.rotate_moves(&moves)?;
		Ok(self.state())
	}

	/// Apply parsed moves in order, stopping at the first failure.
	pub fn rotate_moves(&mut self, moves: &[Move]) -> Result<(), MoveError> {
		for mv in moves {
			self.rotate_move(*mv)?;
		}
		Ok(())
	}

	pub fn apply(&mut self, algorithm: &Algorithm) -> Result<(), MoveError> {
		self.rotate_moves(algorithm)
	}

	pub fn rotate_move(&mut self, mv: Move) -> Result<(), MoveError> {
		self.perform(mv)?;
		self.history.push(mv);
		Ok(())
	}

	fn perform(&mut self, mv: Move) -> Result<(), MoveError> {
		if self.size == CLASSIC_SIZE {
			if let Some(transform) = transform_for(&mv) {
				self.state = apply_transform(&self.state, transform);
				return Ok(());
			}
		}

		let transform = self.cache.transform(self.size, &mv)?;
		self.state = apply_transform(&self.state, transform);
		Ok(())
	}

	/// Re-label the cube by whole-cube rotations so `top`'s center
	/// faces up and, optionally, `front`'s center faces forward.
	/// Leaves the history untouched.
	pub fn orient(&mut self, top: Face, front: Option<Face>) -> Result<(), CubeError> {
		if let Some(front) = front {
			if front == top || front == top.opposite() {
				return Err(CubeError::OpposedFaces(top, front));
			}
		}

		let top_rotation = match self.center_position(top)? {
			0 => None,
			1 => Some(Move::rotation(Axis::Z, Direction::CounterClockwise)),
			2 => Some(Move::rotation(Axis::X, Direction::Clockwise)),
			3 => Some(Move::rotation(Axis::X, Direction::Double)),
			4 => Some(Move::rotation(Axis::Z, Direction::Clockwise)),
			_ => Some(Move::rotation(Axis::X, Direction::CounterClockwise)),
		};
		if let Some(mv) = top_rotation {
			self.perform(mv).map_err(|_| CubeError::InvalidCenters)?;
		}

		if let Some(front) = front {
			let front_rotation = match self.center_position(front)? {
				1 => Some(Move::rotation(Axis::Y, Direction::Clockwise)),
				4 => Some(Move::rotation(Axis::Y, Direction::CounterClockwise)),
				5 => Some(Move::rotation(Axis::Y, Direction::Double)),
				_ => None,
			};
			if let Some(mv) = front_rotation {
				self.perform(mv).map_err(|_| CubeError::InvalidCenters)?;
			}
		}

		Ok(())
	}

	/// Slot currently showing `face`'s center. Only meaningful on
	/// odd-sized cubes, where fixed centers exist.
	fn center_position(&self, face: Face) -> Result<usize, CubeError> {
		if self.size % 2 == 0 {
			return Err(CubeError::UnsupportedSize(self.size));
		}

		let area = self.size * self.size;
		let center = area / 2;
		(0..NUM_FACES)
			.find(|slot| self.state[slot * area + center] == face.letter() as u8)
			.ok_or(CubeError::InvalidCenters)
	}

	/// A cube is solved when every face shows a single label, in any
	/// orientation.
	pub fn is_solved(&self) -> bool {
		let area = self.size * self.size;
		FACE_CHARS.iter().all(|&c| {
			self.state
				.windows(area.max(1))
				.any(|w| w.iter().all(|&b| b == c as u8))
		})
	}

	/// Facelets of a face by its home slot.
	pub fn get_face(&self, face: Face) -> &str {
		let area = self.size * self.size;
		let start = face.index() * area;
		std::str::from_utf8(&self.state[start..start + area]).unwrap_or("")
	}

	/// Facelets of the face whose center currently shows `face`.
	pub fn get_face_by_center(&self, face: Face) -> Result<&str, CubeError> {
		let area = self.size * self.size;
		let slot = self.center_position(face)?;
		Ok(std::str::from_utf8(&self.state[slot * area..(slot + 1) * area]).unwrap_or(""))
	}

	pub fn to_cubies(&self) -> Result<CubieCube, CubeError> {
		if self.size != CLASSIC_SIZE {
			return Err(CubeError::UnsupportedSize(self.size));
		}
		CubieCube::from_facelets(self.state())
	}

	pub fn check_integrity(&self) -> Result<(), CubeError> {
		check_integrity(self.state(), self.size)
	}
}

impl FromStr for VCube {
	type Err = CubeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		VCube::from_state(s)
	}
}

impl PartialEq for VCube {
	fn eq(&self, other: &Self) -> bool {
		self.size == other.size && self.state == other.state
	}
}

impl Eq for VCube {}

impl fmt::Display for VCube {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for (i, face) in [
			Face::Up,
			Face::Right,
			Face::Front,
			Face::Down,
			Face::Left,
			Face::Back,
		]
		.into_iter()
		.enumerate()
		{
			if i > 0 {
				writeln!(f)?;
			}
			write!(f, "{}: {}", face.letter(), self.get_face(face))?;
		}
		Ok(())
	}
}

fn infer_size(len: usize) -> Option<usize> {
	if len == 0 || len % NUM_FACES != 0 {
		return None;
	}
	let area = len / NUM_FACES;
	let size = (area as f64).sqrt().round() as usize;
	(size * size == area).then_some(size)
}

/// Validate a facelet string: length, alphabet, and per-face counts.
pub fn check_integrity(state: &str, size: usize) -> Result<(), CubeError> {
	let expected = NUM_FACES * size * size;
	if state.len() != expected {
		return Err(CubeError::InvalidLength(state.len(), expected));
	}

	let mut counts = [0usize; NUM_FACES];
	for c in state.chars() {
		let face = FACE_CHARS
			.iter()
			.position(|&fc| fc == c)
			.ok_or(CubeError::InvalidCharacter(c))?;
		counts[face] += 1;
	}

	for (face, &count) in counts.iter().enumerate() {
		if count != size * size {
			return Err(CubeError::FaceCount(FACE_CHARS[face], count, size * size));
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cube::SOLVED_3X3;

	const T_PERM: &str = "R U R' U' R' F R2 U' R' U' R U R' F'";
	const SUPERFLIP: &str = "U R2 F B R B2 R U2 L B2 R U' D' R2 F R' L B2 U2 F2";

	#[test]
	fn starts_solved() {
		let cube = VCube::new();
		assert_eq!(cube.state(), SOLVED_3X3);
		assert!(cube.is_solved());
		assert!(cube.history().is_empty());
	}

	#[test]
	fn rotate_records_history() {
		let mut cube = VCube::new();
		cube.rotate("R U R' U'").unwrap();
		assert_eq!(cube.history().len(), 4);
		assert_eq!(
			cube.state(),
			"UULUUFUUFRRUBRRURRFFDFFUFFFDDRDDDDDDBLLLLLLLLBRRBBBBBB"
		);
	}

	#[test]
	fn sexy_move_has_order_six() {
		let mut cube = VCube::new();
		for _ in 0..4 {
			cube.rotate("R U R' U'").unwrap();
		}
		assert!(!cube.is_solved());

		for _ in 0..2 {
			cube.rotate("R U R' U'").unwrap();
		}
		assert!(cube.is_solved());
	}

	#[test]
	fn t_perm_state() {
		let mut cube = VCube::new();
		cube.rotate(T_PERM).unwrap();
		assert_eq!(
			cube.state(),
			"UUUUUUUUUBLFRRRRRRFFRFFFFFFDDDDDDDDDLRLLLLLLLRBBBBBBBB"
		);

		// Corners and edges permuted, nothing twisted or flipped.
		let cubies = cube.to_cubies().unwrap();
		assert_eq!(cubies.co, [0; 8]);
		assert_eq!(cubies.eo, [0; 12]);
		assert!(!cubies.is_solved());
	}

	#[test]
	fn superflip_flips_every_edge() {
		let mut cube = VCube::new();
		cube.rotate(SUPERFLIP).unwrap();
		assert_eq!(
			cube.state(),
			"UBULURUFURURFRBRDRFUFLFRFDFDFDLDRDBDLULBLFLDLBUBRBLBDB"
		);

		let cubies = cube.to_cubies().unwrap();
		assert_eq!(cubies.eo, [1; 12]);
		assert_eq!(cubies.cp, CubieCube::solved().cp);
		assert_eq!(cubies.ep, CubieCube::solved().ep);
	}

	#[test]
	fn notation_error_leaves_state_untouched() {
		let mut cube = VCube::new();
		assert!(cube.rotate("R Q U").is_err());
		assert!(cube.is_solved());
		assert!(cube.history().is_empty());
	}

	#[test]
	fn semantic_error_stops_mid_sequence() {
		let mut cube = VCube::new();
		let err = cube.rotate("R 4R U").unwrap_err();
		assert!(matches!(err, MoveError::LayerOutOfRange { .. }));

		// R was applied and recorded, U never ran.
		let mut expected = VCube::new();
		expected.rotate("R").unwrap();
		assert_eq!(cube, expected);
		assert_eq!(cube.history().len(), 1);
	}

	#[test]
	fn orient_restores_rotated_cube() {
		let mut cube = VCube::new();
		cube.rotate("R U R' U'").unwrap();
		let scrambled = cube.state().to_string();
		let history = cube.history().len();

		cube.rotate("x y2 z'").unwrap();
		cube.orient(Face::Up, Some(Face::Front)).unwrap();

		assert_eq!(cube.state(), scrambled);
		// orient itself records nothing.
		assert_eq!(cube.history().len(), history + 3);
	}

	#[test]
	fn orient_rejects_opposed_faces() {
		let mut cube = VCube::new();
		assert!(matches!(
			cube.orient(Face::Up, Some(Face::Down)),
			Err(CubeError::OpposedFaces(Face::Up, Face::Down))
		));
	}

	#[test]
	fn two_by_two_runs_on_the_coordinate_engine() {
		let mut cube = VCube::with_size(2);
		cube.rotate("R U").unwrap();
		assert_eq!(cube.state(), "UUFFUBRRRRFDDBDBFDLLLLUB");

		cube.rotate("U' R'").unwrap();
		assert!(cube.is_solved());
	}

	#[test]
	fn cubie_round_trip() {
		let mut cube = VCube::new();
		cube.rotate("F R").unwrap();

		let cubies = cube.to_cubies().unwrap();
		assert_eq!(VCube::from_cubies(&cubies), cube);
	}

	#[test]
	fn integrity_rejects_bad_strings() {
		assert!(matches!(
			VCube::from_state("UUU"),
			Err(CubeError::InvalidLength(3, _))
		));

		let unbalanced = SOLVED_3X3.replacen('U', "R", 1);
		assert!(matches!(
			VCube::from_state(&unbalanced),
			Err(CubeError::FaceCount('U', 8, 9))
		));
	}

	fn random_algorithm(length: usize) -> Algorithm {
		use rand::Rng;

		let bases = [
			"U", "R", "F", "D", "L", "B", "M", "S", "E", "x", "y", "z", "u", "r", "f",
			"d", "l", "b",
		];
		let suffixes = ["", "2", "'"];

		let mut rng = rand::thread_rng();
		let mut notation = String::new();
		for _ in 0..length {
			notation.push_str(bases[rng.gen_range(0..bases.len())]);
			notation.push_str(suffixes[rng.gen_range(0..suffixes.len())]);
			notation.push(' ');
		}
		notation.parse().unwrap()
	}

	#[test]
	fn random_scramble_inverts_to_solved() {
		for size in [3, 5] {
			let alg = random_algorithm(40);

			let mut cube = VCube::with_size(size);
			cube.apply(&alg).unwrap();
			cube.check_integrity().unwrap();

			cube.apply(&alg.inverted()).unwrap();
			assert!(cube.is_solved(), "sequence {}", alg);
		}
	}

	#[test]
	fn random_scramble_cubie_round_trip() {
		let alg = random_algorithm(30);

		let mut cube = VCube::new();
		cube.apply(&alg).unwrap();

		let cubies = cube.to_cubies().unwrap();
		assert_eq!(VCube::from_cubies(&cubies), cube, "sequence {}", alg);
		assert_eq!(cubies.corner_parity(), cubies.edge_parity());
	}

	#[test]
	fn face_accessors_follow_centers() {
		let mut cube = VCube::new();
		cube.rotate("y").unwrap();

		// Home slot F now shows the R stickers.
		assert_eq!(cube.get_face(Face::Front), "RRRRRRRRR");
		assert_eq!(cube.get_face_by_center(Face::Right).unwrap(), "RRRRRRRRR");
	}
}
