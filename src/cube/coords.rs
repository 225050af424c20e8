//! Size-agnostic move engine.
//!
//! Facelets are mapped to 3D coordinates (x: L to R, y: D to U,
//! z: B to F), a move selects the affected layers as a coordinate
//! mask, and a 90 degree coordinate rotation paired with an
//! orientation-aware facelet matching yields the permutation. The
//! result is a gather transform compatible with the fixed engine's
//! tables.

use std::collections::HashMap;

use crate::cube::NUM_FACES;
use crate::moves::{Axis, Face, Layers, Move, MoveError, MoveKind};

type Coord = (usize, usize, usize);

/// Facelet coordinates of every face in face order. Each face lists
/// `size * size` coordinates in facelet-scan order.
fn face_coordinates(size: usize) -> [Vec<Coord>; NUM_FACES] {
	let n = size - 1;
	let mut u = Vec::with_capacity(size * size);
	let mut r = Vec::with_capacity(size * size);
	let mut f = Vec::with_capacity(size * size);
	let mut d = Vec::with_capacity(size * size);
	let mut l = Vec::with_capacity(size * size);
	let mut b = Vec::with_capacity(size * size);

	for z in 0..size {
		for x in 0..size {
			u.push((x, n, z));
		}
	}
	for y in (0..size).rev() {
		for z in (0..size).rev() {
			r.push((n, y, z));
		}
	}
	for y in (0..size).rev() {
		for x in 0..size {
			f.push((x, y, n));
		}
	}
	for z in (0..size).rev() {
		for x in 0..size {
			d.push((x, 0, z));
		}
	}
	for y in (0..size).rev() {
		for z in 0..size {
			l.push((0, y, z));
		}
	}
	for y in (0..size).rev() {
		for x in (0..size).rev() {
			b.push((x, y, 0));
		}
	}

	[u, r, f, d, l, b]
}

const fn face_axis(face: usize) -> usize {
	match face {
		0 | 3 => 1, // U, D
		1 | 4 => 0, // R, L
		_ => 2,     // F, B
	}
}

/// Map each surface coordinate to all facelets sitting on that piece,
/// tagged with the axis their face normal lies on.
fn coord_to_facelets(size: usize) -> HashMap<Coord, Vec<(usize, usize)>> {
	let mut map: HashMap<Coord, Vec<(usize, usize)>> = HashMap::new();

	for (face, coords) in face_coordinates(size).iter().enumerate() {
		let axis = face_axis(face);
		for (local, &coord) in coords.iter().enumerate() {
			map.entry(coord)
				.or_default()
				.push((face * size * size + local, axis));
		}
	}

	map
}

/// Rotate one coordinate 90 degrees around an axis.
/// `direction` 1 is counter-clockwise seen from the positive axis.
fn rotate_coordinate(coord: Coord, axis: usize, size: usize, direction: i8) -> Coord {
	let n = size - 1;
	let (x, y, z) = coord;

	match (axis, direction) {
		(0, 1) => (x, n - z, y),
		(0, _) => (x, z, n - y),
		(1, 1) => (n - z, y, x),
		(1, _) => (z, y, n - x),
		(2, 1) => (n - y, x, z),
		_ => (y, n - x, z),
	}
}

/// Axis relabeling of a piece's facelets under a 90 degree turn.
const fn rotate_axis_label(axis: usize, rotation_axis: usize) -> usize {
	match rotation_axis {
		0 => [0, 2, 1][axis],
		1 => [2, 1, 0][axis],
		_ => [1, 0, 2][axis],
	}
}

/// Turn axis and base direction of a face: R, x, F and z turn
/// negative around their axis, their opposites positive.
const fn face_axis_and_direction(face: Face) -> (usize, i8) {
	match face {
		Face::Right => (0, -1),
		Face::Left => (0, 1),
		Face::Up => (1, 1),
		Face::Down => (1, -1),
		Face::Front => (2, -1),
		Face::Back => (2, 1),
	}
}

const fn rotation_axis_and_direction(axis: Axis) -> (usize, i8) {
	match axis {
		Axis::X => (0, -1),
		Axis::Y => (1, 1),
		Axis::Z => (2, -1),
	}
}

/// A move resolved against a cube size: which face side it turns
/// from and which 0-indexed layers it takes, or the whole cube.
enum MoveMask {
	Side(Face, Vec<usize>),
	Whole(Axis),
}

fn resolve_mask(mv: &Move, size: usize) -> Result<MoveMask, MoveError> {
	let (face, layers) = match mv.kind {
		MoveKind::Rotation(axis) => return Ok(MoveMask::Whole(axis)),
		MoveKind::Slice(slice) => {
			if size % 2 == 0 {
				return Err(MoveError::UnsupportedForSize(*mv, size));
			}
			(slice.follows(), vec![(size - 1) / 2])
		}
		MoveKind::Outer(face) | MoveKind::Wide(face) => {
			let layers = match mv.layers {
				Layers::Default => {
					if mv.is_wide_move() {
						vec![0, 1]
					} else {
						vec![0]
					}
				}
				Layers::Inner(n) => vec![n as usize - 1],
				Layers::Span(n) => (0..n as usize).collect(),
				Layers::Range(a, b) => (a as usize - 1..b as usize).collect(),
			};
			(face, layers)
		}
	};

	if let Some(&deepest) = layers.iter().max() {
		if deepest >= size {
			return Err(MoveError::LayerOutOfRange {
				mv: *mv,
				layer: deepest + 1,
				size,
			});
		}
	}

	Ok(MoveMask::Side(face, layers))
}

/// All coordinates moved by the mask.
fn mask_coordinates(mask: &MoveMask, size: usize) -> Vec<Coord> {
	let n = size - 1;
	let mut coords = Vec::new();

	match mask {
		MoveMask::Whole(_) => {
			for x in 0..size {
				for y in 0..size {
					for z in 0..size {
						coords.push((x, y, z));
					}
				}
			}
		}
		MoveMask::Side(face, layers) => {
			for &layer in layers {
				for a in 0..size {
					for b in 0..size {
						coords.push(match face {
							Face::Right => (n - layer, a, b),
							Face::Left => (layer, a, b),
							Face::Up => (a, n - layer, b),
							Face::Down => (a, layer, b),
							Face::Front => (a, b, n - layer),
							Face::Back => (a, b, layer),
						});
					}
				}
			}
		}
	}

	coords
}

/// Compute the gather transform of a move on an NxN cube.
pub fn calculate_transform(size: usize, mv: &Move) -> Result<Vec<usize>, MoveError> {
	let mask = resolve_mask(mv, size)?;

	let (axis, base_direction) = match mask {
		MoveMask::Whole(rotation) => rotation_axis_and_direction(rotation),
		MoveMask::Side(face, _) => face_axis_and_direction(face),
	};
	let direction = if mv.is_counter_clockwise() {
		-base_direction
	} else {
		base_direction
	};

	let coord_map = coord_to_facelets(size);
	let affected = mask_coordinates(&mask, size);

	let total = NUM_FACES * size * size;
	let empty = Vec::new();

	// Scatter form while composing: scatter[i] = destination of i.
	let mut scatter: Vec<usize> = (0..total).collect();

	for _ in 0..mv.direction.quarter_turns() {
		let mut step: Vec<usize> = (0..total).collect();

		for &orig in &affected {
			let moved = rotate_coordinate(orig, axis, size, direction);

			let orig_facelets = coord_map.get(&orig).unwrap_or(&empty);
			let new_facelets = coord_map.get(&moved).unwrap_or(&empty);
			if orig_facelets.len() != new_facelets.len() {
				continue;
			}

			for &(orig_idx, orig_axis) in orig_facelets {
				let rotated_axis = rotate_axis_label(orig_axis, axis);
				if let Some(&(new_idx, _)) = new_facelets
					.iter()
					.find(|(_, new_axis)| *new_axis == rotated_axis)
				{
					step[orig_idx] = new_idx;
				}
			}
		}

		for slot in scatter.iter_mut() {
			*slot = step[*slot];
		}
	}

	let mut gather = vec![0; total];
	for (i, &j) in scatter.iter().enumerate() {
		gather[j] = i;
	}

	Ok(gather)
}

/// Memoized transforms keyed by cube size and move, owned by the
/// caller so independent cubes never share hidden state.
#[derive(Clone, Default, Debug)]
pub struct PermutationCache {
	cache: HashMap<(usize, Move), Vec<usize>>,
}

impl PermutationCache {
	pub fn new() -> PermutationCache {
		PermutationCache {
			cache: HashMap::new(),
		}
	}

	/// The transform for a move, computing and caching it on first
	/// use. Timestamps and display notation do not split cache slots.
	pub fn transform(&mut self, size: usize, mv: &Move) -> Result<&[usize], MoveError> {
		let key = (size, mv.untimed().sign_notation());

		if !self.cache.contains_key(&key) {
			let transform = calculate_transform(size, mv)?;
			self.cache.insert(key, transform);
		}

		Ok(self.cache.get(&key).map(Vec::as_slice).unwrap_or(&[]))
	}

	pub fn len(&self) -> usize {
		self.cache.len()
	}

	pub fn is_empty(&self) -> bool {
		self.cache.is_empty()
	}

	pub fn clear(&mut self) {
		self.cache.clear();
	}
}

#[cfg(test)]
mod tests {
	use std::str::FromStr;

	use super::*;
	use crate::cube::fixed::{apply_transform, transform_for};
	use crate::cube::{solved_state, SOLVED_3X3};
	use crate::moves::parse_moves;

	fn run(size: usize, moves: &str) -> String {
		let mut cache = PermutationCache::new();
		let mut state = solved_state(size).into_bytes();
		for mv in parse_moves(moves).unwrap() {
			let t = cache.transform(size, &mv).unwrap();
			state = apply_transform(&state, t);
		}
		String::from_utf8(state).unwrap()
	}

	#[test]
	fn agrees_with_fixed_engine_on_classic_size() {
		let mut cache = PermutationCache::new();

		for base in [
			"U", "R", "F", "D", "L", "B", "M", "S", "E", "x", "y", "z", "u", "r", "f",
			"d", "l", "b",
		] {
			for suffix in ["", "2", "'"] {
				let mv = Move::from_str(&format!("{}{}", base, suffix)).unwrap();
				let dynamic = cache.transform(3, &mv).unwrap();
				let fixed = transform_for(&mv).unwrap();
				assert_eq!(dynamic, &fixed[..], "move {}", mv);
			}
		}
	}

	#[test]
	fn two_by_two_states() {
		assert_eq!(run(2, "R U"), "UUFFUBRRRRFDDBDBFDLLLLUB");
	}

	#[test]
	fn four_by_four_wide() {
		assert_eq!(
			run(4, "r"),
			"UUFFUUFFUUFFUUFFRRRRRRRRRRRRRRRRFFDDFFDDFFDDFFDDDDBBDDBBDDBBDDBBLLLLLLLLLLLLLLLLUUBBUUBBUUBBUUBB"
		);
	}

	#[test]
	fn five_by_five_slice_round_trip() {
		assert_eq!(run(5, "M M'"), solved_state(5));
		assert_eq!(run(5, "M M M M"), solved_state(5));
		assert_ne!(run(5, "M"), solved_state(5));
	}

	#[test]
	fn layered_moves_match_their_aliases() {
		// Third layer from the R side of a 3x3 is the L layer,
		// turned in R's direction.
		assert_eq!(run(3, "3R"), run(3, "L'"));
		assert_eq!(run(3, "2F"), run(3, "S"));
		assert_eq!(run(3, "2-3Rw"), run(3, "M' L'"));
	}

	#[test]
	fn slice_requires_odd_size() {
		let mut cache = PermutationCache::new();
		let m = Move::from_str("M").unwrap();
		assert!(matches!(
			cache.transform(4, &m),
			Err(MoveError::UnsupportedForSize(_, 4))
		));
	}

	#[test]
	fn layer_beyond_size_is_rejected() {
		let mut cache = PermutationCache::new();
		let mv = Move::from_str("4R").unwrap();
		assert!(matches!(
			cache.transform(3, &mv),
			Err(MoveError::LayerOutOfRange { layer: 4, size: 3, .. })
		));
	}

	#[test]
	fn cache_deduplicates_timed_and_notation_variants() {
		let mut cache = PermutationCache::new();
		cache.transform(3, &Move::from_str("r").unwrap()).unwrap();
		cache.transform(3, &Move::from_str("Rw").unwrap()).unwrap();
		cache
			.transform(3, &Move::from_str("r@500").unwrap())
			.unwrap();
		assert_eq!(cache.len(), 1);
	}

	#[test]
	fn classic_solved_state_round_trips() {
		assert_eq!(run(3, "R U R' U' R U R' U' R U R' U' R U R' U' R U R' U' R U R' U'"), SOLVED_3X3);
	}
}
