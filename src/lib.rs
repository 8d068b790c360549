pub mod board;
pub mod color;
pub mod error;

/// Board coordinate as (row, col).
pub type Point = (u8, u8);

pub use board::{Board, Captures};
pub use color::Color;
pub use error::BoardError;
