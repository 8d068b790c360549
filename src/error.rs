use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    OutOfBounds,
    Occupied,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Intersection out of bounds"),
            BoardError::Occupied => write!(f, "Intersection occupied by existing stone"),
        }
    }
}

impl std::error::Error for BoardError {}
