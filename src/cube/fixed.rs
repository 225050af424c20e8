use const_for::const_for;

use crate::cube::CLASSIC_FACELETS;
use crate::moves::{Layers, Move, MoveKind};

/// A facelet permutation in gather form: `new[i] = old[perm[i]]`.
pub type Transform = [usize; CLASSIC_FACELETS];

/// Number of base move kinds the fixed engine knows:
/// U R F D L B, M S E, x y z, u r f d l b.
pub const NUM_BASE_KINDS: usize = 18;

const fn identity_transform() -> Transform {
	let mut out = [0; CLASSIC_FACELETS];
	const_for!(i in 0..CLASSIC_FACELETS => {
		out[i] = i;
	});
	out
}

/// Compose two transforms: apply `t1` first, then `t2`.
pub const fn chain_transform(t1: Transform, t2: Transform) -> Transform {
	let mut out = identity_transform();
	const_for!(i in 0..CLASSIC_FACELETS => {
		out[i] = t1[t2[i]];
	});
	out
}

// ===== Quarter-turn base tables =====
// Facelet blocks in order U R F D L B, read row by row.

#[rustfmt::skip]
const T_U: Transform = [
	6, 3, 0, 7, 4, 1, 8, 5, 2,
	45, 46, 47, 12, 13, 14, 15, 16, 17,
	9, 10, 11, 21, 22, 23, 24, 25, 26,
	27, 28, 29, 30, 31, 32, 33, 34, 35,
	18, 19, 20, 39, 40, 41, 42, 43, 44,
	36, 37, 38, 48, 49, 50, 51, 52, 53,
];

#[rustfmt::skip]
const T_R: Transform = [
	0, 1, 20, 3, 4, 23, 6, 7, 26,
	15, 12, 9, 16, 13, 10, 17, 14, 11,
	18, 19, 29, 21, 22, 32, 24, 25, 35,
	27, 28, 51, 30, 31, 48, 33, 34, 45,
	36, 37, 38, 39, 40, 41, 42, 43, 44,
	8, 46, 47, 5, 49, 50, 2, 52, 53,
];

#[rustfmt::skip]
const T_F: Transform = [
	0, 1, 2, 3, 4, 5, 44, 41, 38,
	6, 10, 11, 7, 13, 14, 8, 16, 17,
	24, 21, 18, 25, 22, 19, 26, 23, 20,
	15, 12, 9, 30, 31, 32, 33, 34, 35,
	36, 37, 27, 39, 40, 28, 42, 43, 29,
	45, 46, 47, 48, 49, 50, 51, 52, 53,
];

#[rustfmt::skip]
const T_D: Transform = [
	0, 1, 2, 3, 4, 5, 6, 7, 8,
	9, 10, 11, 12, 13, 14, 24, 25, 26,
	18, 19, 20, 21, 22, 23, 42, 43, 44,
	33, 30, 27, 34, 31, 28, 35, 32, 29,
	36, 37, 38, 39, 40, 41, 51, 52, 53,
	45, 46, 47, 48, 49, 50, 15, 16, 17,
];

#[rustfmt::skip]
const T_L: Transform = [
	53, 1, 2, 50, 4, 5, 47, 7, 8,
	9, 10, 11, 12, 13, 14, 15, 16, 17,
	0, 19, 20, 3, 22, 23, 6, 25, 26,
	18, 28, 29, 21, 31, 32, 24, 34, 35,
	42, 39, 36, 43, 40, 37, 44, 41, 38,
	45, 46, 33, 48, 49, 30, 51, 52, 27,
];

#[rustfmt::skip]
const T_B: Transform = [
	11, 14, 17, 3, 4, 5, 6, 7, 8,
	9, 10, 35, 12, 13, 34, 15, 16, 33,
	18, 19, 20, 21, 22, 23, 24, 25, 26,
	27, 28, 29, 30, 31, 32, 36, 39, 42,
	2, 37, 38, 1, 40, 41, 0, 43, 44,
	51, 48, 45, 52, 49, 46, 53, 50, 47,
];

#[rustfmt::skip]
const T_M: Transform = [
	0, 52, 2, 3, 49, 5, 6, 46, 8,
	9, 10, 11, 12, 13, 14, 15, 16, 17,
	18, 1, 20, 21, 4, 23, 24, 7, 26,
	27, 19, 29, 30, 22, 32, 33, 25, 35,
	36, 37, 38, 39, 40, 41, 42, 43, 44,
	45, 34, 47, 48, 31, 50, 51, 28, 53,
];

#[rustfmt::skip]
const T_S: Transform = [
	0, 1, 2, 43, 40, 37, 6, 7, 8,
	9, 3, 11, 12, 4, 14, 15, 5, 17,
	18, 19, 20, 21, 22, 23, 24, 25, 26,
	27, 28, 29, 16, 13, 10, 33, 34, 35,
	36, 30, 38, 39, 31, 41, 42, 32, 44,
	45, 46, 47, 48, 49, 50, 51, 52, 53,
];

#[rustfmt::skip]
const T_E: Transform = [
	0, 1, 2, 3, 4, 5, 6, 7, 8,
	9, 10, 11, 21, 22, 23, 15, 16, 17,
	18, 19, 20, 39, 40, 41, 24, 25, 26,
	27, 28, 29, 30, 31, 32, 33, 34, 35,
	36, 37, 38, 48, 49, 50, 42, 43, 44,
	45, 46, 47, 12, 13, 14, 51, 52, 53,
];

#[rustfmt::skip]
const T_X: Transform = [
	18, 19, 20, 21, 22, 23, 24, 25, 26,
	15, 12, 9, 16, 13, 10, 17, 14, 11,
	27, 28, 29, 30, 31, 32, 33, 34, 35,
	53, 52, 51, 50, 49, 48, 47, 46, 45,
	38, 41, 44, 37, 40, 43, 36, 39, 42,
	8, 7, 6, 5, 4, 3, 2, 1, 0,
];

#[rustfmt::skip]
const T_Y: Transform = [
	6, 3, 0, 7, 4, 1, 8, 5, 2,
	45, 46, 47, 48, 49, 50, 51, 52, 53,
	9, 10, 11, 12, 13, 14, 15, 16, 17,
	29, 32, 35, 28, 31, 34, 27, 30, 33,
	18, 19, 20, 21, 22, 23, 24, 25, 26,
	36, 37, 38, 39, 40, 41, 42, 43, 44,
];

#[rustfmt::skip]
const T_Z: Transform = [
	42, 39, 36, 43, 40, 37, 44, 41, 38,
	6, 3, 0, 7, 4, 1, 8, 5, 2,
	24, 21, 18, 25, 22, 19, 26, 23, 20,
	15, 12, 9, 16, 13, 10, 17, 14, 11,
	33, 30, 27, 34, 31, 28, 35, 32, 29,
	47, 50, 53, 46, 49, 52, 45, 48, 51,
];

// Wide turns, built from the outer face of the untouched side plus
// a whole-cube rotation: r = L x, l = R x', u = D y, d = U y',
// f = B z, b = F z'.

const fn triple(t: Transform) -> Transform {
	chain_transform(t, chain_transform(t, t))
}

const T_WU: Transform = chain_transform(T_D, T_Y);
const T_WR: Transform = chain_transform(T_L, T_X);
const T_WF: Transform = chain_transform(T_B, T_Z);
const T_WD: Transform = chain_transform(T_U, triple(T_Y));
const T_WL: Transform = chain_transform(T_R, triple(T_X));
const T_WB: Transform = chain_transform(T_F, triple(T_Z));

const fn generate_transformation_table() -> [[Transform; 3]; NUM_BASE_KINDS] {
	const BASE: [Transform; NUM_BASE_KINDS] = [
		T_U, T_R, T_F, T_D, T_L, T_B,
		T_M, T_S, T_E,
		T_X, T_Y, T_Z,
		T_WU, T_WR, T_WF, T_WD, T_WL, T_WB,
	];

	let mut out = [[identity_transform(); 3]; NUM_BASE_KINDS];

	const_for!(i in 0..NUM_BASE_KINDS => {
		out[i][0] = BASE[i];
		out[i][1] = chain_transform(out[i][0], out[i][0]);
		out[i][2] = chain_transform(out[i][0], out[i][1]);
	});

	out
}

/// All fixed-engine transforms, indexed by base kind and direction
/// (clockwise, double, counter-clockwise).
pub const TRANSFORMS: [[Transform; 3]; NUM_BASE_KINDS] = generate_transformation_table();

const fn base_index(kind: MoveKind) -> usize {
	match kind {
		MoveKind::Outer(face) => face as usize,
		MoveKind::Slice(slice) => 6 + slice as usize,
		MoveKind::Rotation(axis) => 9 + axis as usize,
		MoveKind::Wide(face) => 12 + face as usize,
	}
}

/// The precomputed transform for a move, if the fixed engine covers
/// it. Layered moves need the coordinate engine.
pub fn transform_for(mv: &Move) -> Option<&'static Transform> {
	if !matches!(mv.layers, Layers::Default) {
		return None;
	}
	Some(&TRANSFORMS[base_index(mv.kind)][mv.direction as usize])
}

/// Apply a gather transform to a facelet byte string. Also fits the
/// coordinate engine's transforms, which use the same form.
pub fn apply_transform(state: &[u8], transform: &[usize]) -> Vec<u8> {
	transform.iter().map(|&i| state[i]).collect()
}

#[cfg(test)]
mod tests {
	use std::str::FromStr;

	use super::*;
	use crate::cube::SOLVED_3X3;
	use crate::moves::parse_moves;

	fn run(moves: &str) -> String {
		let mut state = SOLVED_3X3.as_bytes().to_vec();
		for mv in parse_moves(moves).unwrap() {
			let t = transform_for(&mv).unwrap();
			state = apply_transform(&state, t);
		}
		String::from_utf8(state).unwrap()
	}

	#[test]
	fn tables_are_permutations() {
		for kinds in TRANSFORMS.iter() {
			for t in kinds.iter() {
				let mut seen = [false; CLASSIC_FACELETS];
				for &i in t.iter() {
					assert!(!seen[i]);
					seen[i] = true;
				}
			}
		}
	}

	#[test]
	fn quarter_turns_have_order_four() {
		for kinds in TRANSFORMS.iter() {
			let q = kinds[0];
			let t4 = chain_transform(chain_transform(q, q), chain_transform(q, q));
			assert_eq!(t4, identity_transform());

			let d = kinds[1];
			assert_eq!(chain_transform(d, d), identity_transform());

			assert_eq!(chain_transform(q, kinds[2]), identity_transform());
		}
	}

	#[test]
	fn outer_turn_states() {
		assert_eq!(
			run("R"),
			"UUFUUFUUFRRRRRRRRRFFDFFDFFDDDBDDBDDBLLLLLLLLLUBBUBBUBB"
		);
		assert_eq!(
			run("F R"),
			"UUFUUFLLFUUURRRRRRFFRFFDFFDRRBDDBDDBLLDLLDLLDLBBUBBUBB"
		);
	}

	#[test]
	fn slice_turn_states() {
		assert_eq!(
			run("M"),
			"UBUUBUUBURRRRRRRRRFUFFUFFUFDFDDFDDFDLLLLLLLLLBDBBDBBDB"
		);
		assert_eq!(
			run("S"),
			"UUULLLUUURURRURRURFFFFFFFFFDDDRRRDDDLDLLDLLDLBBBBBBBBB"
		);
		assert_eq!(
			run("E"),
			"UUUUUUUUURRRFFFRRRFFFLLLFFFDDDDDDDDDLLLBBBLLLBBBRRRBBB"
		);
	}

	#[test]
	fn rotation_states() {
		assert_eq!(
			run("x"),
			"FFFFFFFFFRRRRRRRRRDDDDDDDDDBBBBBBBBBLLLLLLLLLUUUUUUUUU"
		);
		assert_eq!(
			run("y"),
			"UUUUUUUUUBBBBBBBBBRRRRRRRRRDDDDDDDDDFFFFFFFFFLLLLLLLLL"
		);
		assert_eq!(
			run("z"),
			"LLLLLLLLLUUUUUUUUUFFFFFFFFFRRRRRRRRRDDDDDDDDDBBBBBBBBB"
		);
	}

	#[test]
	fn wide_turn_states() {
		assert_eq!(
			run("r"),
			"UFFUFFUFFRRRRRRRRRFDDFDDFDDDBBDBBDBBLLLLLLLLLUUBUUBUUB"
		);
	}

	#[test]
	fn slices_factor_into_outer_and_rotation() {
		assert_eq!(run("M"), run("L' x' R"));
		assert_eq!(run("S"), run("F' z B"));
		assert_eq!(run("E"), run("D' y' U"));
	}

	#[test]
	fn wides_factor_into_outer_and_slice() {
		assert_eq!(run("r"), run("R M'"));
		assert_eq!(run("u"), run("U E'"));
		assert_eq!(run("f"), run("F S"));
		assert_eq!(run("l"), run("L M"));
		assert_eq!(run("d"), run("D E"));
		assert_eq!(run("b"), run("B S'"));
	}

	#[test]
	fn rotation_composition() {
		assert_eq!(run("z"), run("x' y' x"));
	}

	#[test]
	fn layered_moves_are_not_covered() {
		let mv = Move::from_str("2F").unwrap();
		assert!(transform_for(&mv).is_none());
	}
}
