//! Cube state simulation and move-sequence rewriting.
//!
//! ```
//! use cubealg::prelude::*;
//!
//! let mut cube = VCube::new();
//!
//! cube.rotate("R U R' U'").unwrap();
//! cube.rotate("U R U' R'").unwrap();
//!
//! assert!(cube.is_solved());
//! ```
//!
//! Sequences parse into [`Algorithm`] values and can be rewritten
//! with the passes under [`transform`], for example compressing
//! redundant turns or expanding slice moves:
//!
//! ```
//! use cubealg::prelude::*;
//! use cubealg::transform::optimize::compress_moves;
//!
//! let alg: Algorithm = "R U U' R' F".parse().unwrap();
//!
//! assert_eq!(alg.transform(compress_moves).to_string(), "F");
//! ```
//!
//! [`Algorithm`]: crate::algorithm::Algorithm

pub mod algorithm;
pub mod cube;
pub mod moves;
pub mod transform;

pub mod prelude {
	pub use crate::algorithm::Algorithm;
	pub use crate::cube::cubie::CubieCube;
	pub use crate::cube::vcube::VCube;
	pub use crate::cube::CubeError;
	pub use crate::moves::{
		parse_moves, Axis, Direction, Face, Layers, Move, MoveError, MoveKind, SliceMove,
	};
}
