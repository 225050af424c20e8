use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::moves::{parse_moves, Move, MoveError};

/// An ordered sequence of moves.
///
/// Thin wrapper around `Vec<Move>` adding notation parsing, display
/// and transform chaining. Derefs to a slice, so all slice methods
/// apply directly.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Algorithm {
	moves: Vec<Move>,
}

impl Algorithm {
	pub const fn new() -> Algorithm {
		Algorithm { moves: Vec::new() }
	}

	pub fn into_moves(self) -> Vec<Move> {
		self.moves
	}

	/// Apply one rewrite pass and wrap the result.
	///
	/// Chainable: `alg.transform(compress_moves).transform(mirror_moves)`.
	pub fn transform<F>(&self, process: F) -> Algorithm
	where
		F: FnOnce(&[Move]) -> Vec<Move>,
	{
		Algorithm {
			moves: process(&self.moves),
		}
	}

	/// The sequence undoing this one: reversed order, each move inverted.
	pub fn inverted(&self) -> Algorithm {
		Algorithm {
			moves: self.moves.iter().rev().map(Move::inverted).collect(),
		}
	}

	pub fn push(&mut self, mv: Move) {
		self.moves.push(mv);
	}

	pub fn extend_from_slice(&mut self, moves: &[Move]) {
		self.moves.extend_from_slice(moves);
	}
}

impl Deref for Algorithm {
	type Target = [Move];

	fn deref(&self) -> &[Move] {
		&self.moves
	}
}

impl DerefMut for Algorithm {
	fn deref_mut(&mut self) -> &mut [Move] {
		&mut self.moves
	}
}

impl From<Vec<Move>> for Algorithm {
	fn from(moves: Vec<Move>) -> Algorithm {
		Algorithm { moves }
	}
}

impl From<&[Move]> for Algorithm {
	fn from(moves: &[Move]) -> Algorithm {
		Algorithm {
			moves: moves.to_vec(),
		}
	}
}

impl FromIterator<Move> for Algorithm {
	fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Algorithm {
		Algorithm {
			moves: iter.into_iter().collect(),
		}
	}
}

impl IntoIterator for Algorithm {
	type Item = Move;
	type IntoIter = std::vec::IntoIter<Move>;

	fn into_iter(self) -> Self::IntoIter {
		self.moves.into_iter()
	}
}

impl<'a> IntoIterator for &'a Algorithm {
	type Item = &'a Move;
	type IntoIter = std::slice::Iter<'a, Move>;

	fn into_iter(self) -> Self::IntoIter {
		self.moves.iter()
	}
}

impl FromStr for Algorithm {
	type Err = MoveError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Algorithm {
			moves: parse_moves(s)?,
		})
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for (i, mv) in self.moves.iter().enumerate() {
			if i > 0 {
				write!(f, " ")?;
			}
			write!(f, "{}", mv)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_and_display() {
		let alg: Algorithm = "R U R' U'".parse().unwrap();
		assert_eq!(alg.len(), 4);
		assert_eq!(alg.to_string(), "R U R' U'");
	}

	#[test]
	fn inverted_reverses_and_inverts() {
		let alg: Algorithm = "R U2 F'".parse().unwrap();
		assert_eq!(alg.inverted().to_string(), "F U2 R'");
		assert_eq!(alg.inverted().inverted(), alg);
	}

	#[test]
	fn transform_chains() {
		let alg: Algorithm = "R U".parse().unwrap();
		let doubled = alg
			.transform(|moves| moves.iter().map(Move::doubled).collect())
			.transform(|moves| moves.iter().rev().copied().collect());
		assert_eq!(doubled.to_string(), "U2 R2");
	}
}
