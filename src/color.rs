use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::ops::Neg;

/// State of a single intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Color {
    Empty = 0,
    Black = 1,
    White = -1,
}

impl Color {
    pub fn from_int(v: i8) -> Self {
        match v.signum() {
            1 => Color::Black,
            -1 => Color::White,
            _ => Color::Empty,
        }
    }

    pub fn to_int(self) -> i8 {
        self as i8
    }

    pub fn is_stone(self) -> bool {
        self != Color::Empty
    }

    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
            Color::Empty => Color::Empty,
        }
    }

    /// Character used by the board renderer.
    pub fn symbol(self) -> char {
        match self {
            Color::Empty => '.',
            Color::Black => 'x',
            Color::White => 'o',
        }
    }
}

impl Neg for Color {
    type Output = Self;

    fn neg(self) -> Self {
        self.opponent()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Empty => write!(f, "Empty"),
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}
