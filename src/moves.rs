use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Modifier character for counter-clockwise moves.
pub const INVERT_CHAR: char = '\'';
/// Modifier character for 180 degree moves.
pub const DOUBLE_CHAR: char = '2';
/// Suffix character of wide moves in Xw notation.
pub const WIDE_CHAR: char = 'w';
/// Separator for the optional millisecond timestamp.
pub const TIME_CHAR: char = '@';

/// The six faces of the cube, in facelet-block order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[derive(strum::EnumIter, strum::EnumCount, strum::FromRepr)]
#[repr(u8)]
pub enum Face {
	Up,
	Right,
	Front,
	Down,
	Left,
	Back,
}

impl Face {
	pub const fn letter(self) -> char {
		match self {
			Face::Up => 'U',
			Face::Right => 'R',
			Face::Front => 'F',
			Face::Down => 'D',
			Face::Left => 'L',
			Face::Back => 'B',
		}
	}

	pub const fn from_letter(c: char) -> Option<Face> {
		match c {
			'U' => Some(Face::Up),
			'R' => Some(Face::Right),
			'F' => Some(Face::Front),
			'D' => Some(Face::Down),
			'L' => Some(Face::Left),
			'B' => Some(Face::Back),
			_ => None,
		}
	}

	pub const fn opposite(self) -> Face {
		match self {
			Face::Up => Face::Down,
			Face::Down => Face::Up,
			Face::Right => Face::Left,
			Face::Left => Face::Right,
			Face::Front => Face::Back,
			Face::Back => Face::Front,
		}
	}

	pub const fn index(self) -> usize {
		self as usize
	}
}

impl fmt::Display for Face {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.letter())
	}
}

/// Whole-cube rotation axes: x follows R, y follows U, z follows F.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter)]
#[repr(u8)]
pub enum Axis {
	X,
	Y,
	Z,
}

impl Axis {
	pub const fn letter(self) -> char {
		match self {
			Axis::X => 'x',
			Axis::Y => 'y',
			Axis::Z => 'z',
		}
	}
}

/// The three inner slice moves.
/// M turns with L, S turns with F, E turns with D.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter)]
#[repr(u8)]
pub enum SliceMove {
	M,
	S,
	E,
}

impl SliceMove {
	pub const fn letter(self) -> char {
		match self {
			SliceMove::M => 'M',
			SliceMove::S => 'S',
			SliceMove::E => 'E',
		}
	}

	/// The outer face whose turning direction the slice follows.
	pub const fn follows(self) -> Face {
		match self {
			SliceMove::M => Face::Left,
			SliceMove::S => Face::Front,
			SliceMove::E => Face::Down,
		}
	}

	/// The rotation axis perpendicular to the slice plane.
	pub const fn axis(self) -> Axis {
		match self {
			SliceMove::M => Axis::X,
			SliceMove::S => Axis::Z,
			SliceMove::E => Axis::Y,
		}
	}
}

/// What a move turns: an outer face, a wide block, an inner slice
/// or the whole cube.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MoveKind {
	Outer(Face),
	Wide(Face),
	Slice(SliceMove),
	Rotation(Axis),
}

/// Turn amount, ordered so that the discriminant doubles as an
/// exponent-minus-one into composed permutation tables.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter)]
#[repr(u8)]
pub enum Direction {
	Clockwise,
	Double,
	CounterClockwise,
}

impl Direction {
	pub const fn inverted(self) -> Direction {
		match self {
			Direction::Clockwise => Direction::CounterClockwise,
			Direction::CounterClockwise => Direction::Clockwise,
			Direction::Double => Direction::Double,
		}
	}

	/// Number of quarter turns performed.
	pub const fn quarter_turns(self) -> usize {
		match self {
			Direction::Clockwise | Direction::CounterClockwise => 1,
			Direction::Double => 2,
		}
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Direction::Clockwise => Ok(()),
			Direction::Double => write!(f, "{}", DOUBLE_CHAR),
			Direction::CounterClockwise => write!(f, "{}", INVERT_CHAR),
		}
	}
}

/// Layer qualifier written before the move letter, 1-indexed as in
/// big-cube notation: `2F` turns the second layer alone, `3Rw` the
/// three outermost layers, `2-3Rw` an explicit range.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Layers {
	/// No prefix: one layer for outer moves, two for wide moves,
	/// the center layer for slices, every layer for rotations.
	Default,
	/// A single inner layer, like `2F`.
	Inner(u8),
	/// The outermost n layers, like `3Rw`.
	Span(u8),
	/// An inclusive 1-indexed range, like `2-3Rw`.
	Range(u8, u8),
}

/// A single move of cube notation.
///
/// Immutable value type: every transformation (`inverted`, `doubled`,
/// notation changes) returns a new move. Equality and hashing are
/// structural on the resolved form, so `Rw` and `r` compare equal.
#[derive(Clone, Copy, Debug)]
pub struct Move {
	pub kind: MoveKind,
	pub direction: Direction,
	pub layers: Layers,
	/// Optional millisecond timestamp carried by timed recordings.
	pub timestamp: Option<u64>,
	/// Display preference only: `Rw` instead of `r`.
	wide_suffix: bool,
}

impl PartialEq for Move {
	fn eq(&self, other: &Self) -> bool {
		self.kind == other.kind
			&& self.direction == other.direction
			&& self.layers == other.layers
			&& self.timestamp == other.timestamp
	}
}

impl Eq for Move {}

impl Hash for Move {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.kind.hash(state);
		self.direction.hash(state);
		self.layers.hash(state);
		self.timestamp.hash(state);
	}
}

impl Move {
	pub const fn new(kind: MoveKind, direction: Direction) -> Move {
		Move {
			kind,
			direction,
			layers: Layers::Default,
			timestamp: None,
			wide_suffix: false,
		}
	}

	pub const fn outer(face: Face, direction: Direction) -> Move {
		Move::new(MoveKind::Outer(face), direction)
	}

	pub const fn wide(face: Face, direction: Direction) -> Move {
		Move::new(MoveKind::Wide(face), direction)
	}

	pub const fn slice(slice: SliceMove, direction: Direction) -> Move {
		Move::new(MoveKind::Slice(slice), direction)
	}

	pub const fn rotation(axis: Axis, direction: Direction) -> Move {
		Move::new(MoveKind::Rotation(axis), direction)
	}

	// Predicates

	pub const fn is_rotation(&self) -> bool {
		matches!(self.kind, MoveKind::Rotation(_))
	}

	pub const fn is_face_move(&self) -> bool {
		!self.is_rotation()
	}

	pub const fn is_inner_move(&self) -> bool {
		matches!(self.kind, MoveKind::Slice(_))
	}

	pub const fn is_outer_move(&self) -> bool {
		matches!(self.kind, MoveKind::Outer(_) | MoveKind::Wide(_))
	}

	pub const fn is_wide_move(&self) -> bool {
		matches!(self.kind, MoveKind::Wide(_))
	}

	pub const fn is_double(&self) -> bool {
		matches!(self.direction, Direction::Double)
	}

	pub const fn is_clockwise(&self) -> bool {
		!matches!(self.direction, Direction::CounterClockwise)
	}

	pub const fn is_counter_clockwise(&self) -> bool {
		matches!(self.direction, Direction::CounterClockwise)
	}

	pub const fn is_layered(&self) -> bool {
		!matches!(self.layers, Layers::Default)
	}

	// Transformations

	/// The move undoing this one. A double move is its own inverse.
	pub const fn inverted(&self) -> Move {
		Move {
			direction: self.direction.inverted(),
			..*self
		}
	}

	/// 180 degree version of a quarter move, quarter version of a double.
	pub const fn doubled(&self) -> Move {
		Move {
			direction: match self.direction {
				Direction::Double => Direction::Clockwise,
				_ => Direction::Double,
			},
			..*self
		}
	}

	pub const fn with_direction(&self, direction: Direction) -> Move {
		Move { direction, ..*self }
	}

	/// Same move relabeled onto another kind, keeping direction,
	/// layers and timestamp.
	pub const fn with_kind(&self, kind: MoveKind) -> Move {
		Move { kind, ..*self }
	}

	pub const fn with_timestamp(&self, timestamp: u64) -> Move {
		Move {
			timestamp: Some(timestamp),
			..*self
		}
	}

	pub const fn untimed(&self) -> Move {
		Move {
			timestamp: None,
			..*self
		}
	}

	/// Prefer `Rw`-style display for wide moves.
	pub const fn wide_notation(&self) -> Move {
		Move {
			wide_suffix: true,
			..*self
		}
	}

	/// Prefer lowercase SiGN-style display for wide moves.
	pub const fn sign_notation(&self) -> Move {
		Move {
			wide_suffix: false,
			..*self
		}
	}

	pub const fn is_wide_notation(&self) -> bool {
		self.wide_suffix
	}
}

impl fmt::Display for Move {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self.layers {
			Layers::Default => {}
			Layers::Inner(n) | Layers::Span(n) => write!(f, "{}", n)?,
			Layers::Range(a, b) => write!(f, "{}-{}", a, b)?,
		}

		match self.kind {
			MoveKind::Outer(face) => write!(f, "{}", face.letter())?,
			MoveKind::Wide(face) => {
				if self.wide_suffix {
					write!(f, "{}{}", face.letter(), WIDE_CHAR)?;
				} else {
					write!(f, "{}", face.letter().to_ascii_lowercase())?;
				}
			}
			MoveKind::Slice(slice) => write!(f, "{}", slice.letter())?,
			MoveKind::Rotation(axis) => write!(f, "{}", axis.letter())?,
		}

		write!(f, "{}", self.direction)?;

		if let Some(t) = self.timestamp {
			write!(f, "{}{}", TIME_CHAR, t)?;
		}

		Ok(())
	}
}

/// Errors raised for move notation and move semantics.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
	#[error("invalid move notation \"{0}\"")]
	Notation(String),
	#[error("move {mv} requires layer {layer} but the cube only has {size} layers")]
	LayerOutOfRange { mv: Move, layer: usize, size: usize },
	#[error("slice move {0} has no center layer on a {1}x{1}x{1} cube")]
	UnsupportedForSize(Move, usize),
	#[error("move {0} is not a rotation")]
	NotARotation(Move),
}

impl FromStr for Move {
	type Err = MoveError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let moves = parse_moves(s)?;
		match moves.as_slice() {
			[mv] => Ok(*mv),
			_ => Err(MoveError::Notation(s.to_string())),
		}
	}
}

/// Parse a whole sequence of moves, with or without whitespace
/// between tokens: `"R U R' U'"` and `"RUR'U'"` both work.
pub fn parse_moves(string: &str) -> Result<Vec<Move>, MoveError> {
	let mut moves = Vec::new();
	let mut chars = string.chars().peekable();

	let fail = |token: &str| MoveError::Notation(token.to_string());

	while let Some(&c) = chars.peek() {
		if c.is_whitespace() {
			chars.next();
			continue;
		}

		let mut token = String::new();

		// Optional layer prefix: "2", "3-4"
		let mut first: Option<u8> = None;
		let mut second: Option<u8> = None;
		if c.is_ascii_digit() {
			first = Some(read_layer(&mut chars, &mut token)?);
			if chars.peek() == Some(&'-') {
				token.push('-');
				chars.next();
				second = Some(read_layer(&mut chars, &mut token)?);
			}
		}

		let letter = chars.next().ok_or_else(|| fail(&token))?;
		token.push(letter);

		let mut wide_suffix = false;
		let mut kind = match letter {
			'U' | 'R' | 'F' | 'D' | 'L' | 'B' => {
				MoveKind::Outer(Face::from_letter(letter).unwrap_or(Face::Up))
			}
			'u' | 'r' | 'f' | 'd' | 'l' | 'b' => MoveKind::Wide(
				Face::from_letter(letter.to_ascii_uppercase()).unwrap_or(Face::Up),
			),
			'M' => MoveKind::Slice(SliceMove::M),
			'S' => MoveKind::Slice(SliceMove::S),
			'E' => MoveKind::Slice(SliceMove::E),
			'x' => MoveKind::Rotation(Axis::X),
			'y' => MoveKind::Rotation(Axis::Y),
			'z' => MoveKind::Rotation(Axis::Z),
			_ => return Err(fail(&token)),
		};

		if chars.peek() == Some(&WIDE_CHAR) {
			match kind {
				MoveKind::Outer(face) => {
					token.push(WIDE_CHAR);
					chars.next();
					kind = MoveKind::Wide(face);
					wide_suffix = true;
				}
				_ => return Err(fail(&format!("{}{}", token, WIDE_CHAR))),
			}
		}

		let layers = match (first, second) {
			(None, _) => Layers::Default,
			(Some(a), Some(b)) => {
				if a == 0 || b < a {
					return Err(fail(&token));
				}
				match kind {
					MoveKind::Outer(_) | MoveKind::Wide(_) => Layers::Range(a, b),
					_ => return Err(fail(&token)),
				}
			}
			(Some(n), None) => {
				if n == 0 {
					return Err(fail(&token));
				}
				match kind {
					MoveKind::Outer(_) => Layers::Inner(n),
					MoveKind::Wide(_) => Layers::Span(n),
					_ => return Err(fail(&token)),
				}
			}
		};

		let direction = match chars.peek() {
			Some(&DOUBLE_CHAR) => {
				token.push(DOUBLE_CHAR);
				chars.next();
				Direction::Double
			}
			Some(&INVERT_CHAR) => {
				token.push(INVERT_CHAR);
				chars.next();
				Direction::CounterClockwise
			}
			_ => Direction::Clockwise,
		};

		let timestamp = if chars.peek() == Some(&TIME_CHAR) {
			token.push(TIME_CHAR);
			chars.next();
			Some(read_number(&mut chars, &mut token)?)
		} else {
			None
		};

		moves.push(Move {
			kind,
			direction,
			layers,
			timestamp,
			wide_suffix,
		});
	}

	Ok(moves)
}

fn read_layer(
	chars: &mut std::iter::Peekable<std::str::Chars>,
	token: &mut String,
) -> Result<u8, MoveError> {
	let n = read_number(chars, token)?;
	u8::try_from(n).map_err(|_| MoveError::Notation(token.clone()))
}

fn read_number(
	chars: &mut std::iter::Peekable<std::str::Chars>,
	token: &mut String,
) -> Result<u64, MoveError> {
	let mut digits = String::new();
	while let Some(&c) = chars.peek() {
		if c.is_ascii_digit() {
			digits.push(c);
			token.push(c);
			chars.next();
		} else {
			break;
		}
	}

	digits
		.parse()
		.map_err(|_| MoveError::Notation(token.clone()))
}
