use std::fmt;

use arrayvec::ArrayVec;

use crate::Point;
use crate::color::Color;
use crate::error::BoardError;

/// Captures indexed by the capturing color.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
            Color::Empty => 0,
        }
    }

    fn add(&mut self, color: Color, count: u32) {
        match color {
            Color::Black => self.black += count,
            Color::White => self.white += count,
            Color::Empty => {}
        }
    }
}

/// A square Go board stored as a flat array.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Board {
    grid: Vec<Color>,
    size: u8,
    captures: Captures,
}

impl Board {
    /// Create an empty board of the given side length.
    pub fn new(size: u8) -> Self {
        Board {
            grid: vec![Color::Empty; size as usize * size as usize],
            size,
            captures: Captures::new(),
        }
    }

    /// Restore a board from serialized state.
    pub fn from_state(grid: Vec<Color>, size: u8, captures: Captures) -> Self {
        assert!(
            grid.len() == size as usize * size as usize,
            "malformed board grid"
        );
        Board {
            grid,
            size,
            captures,
        }
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn grid(&self) -> &[Color] {
        &self.grid
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn on_board(&self, (row, col): Point) -> bool {
        row < self.size && col < self.size
    }

    pub fn is_empty(&self) -> bool {
        self.grid.iter().all(|&c| c == Color::Empty)
    }

    /// Color at a point, or an error if the point is off the board.
    pub fn stone(&self, point: Point) -> Result<Color, BoardError> {
        if self.on_board(point) {
            Ok(self.at(point))
        } else {
            Err(BoardError::OutOfBounds)
        }
    }

    // -- Game actions --

    /// Place a stone, resolve captures, then resolve self-capture.
    ///
    /// Returns a new board with the move applied; the receiver is never
    /// modified. Enemy chains left without liberties are removed first, so a
    /// placement that captures is never treated as suicide. A placement that
    /// still leaves its own chain without liberties is legal and removes that
    /// chain immediately.
    pub fn play(&self, color: Color, point: Point) -> Result<Board, BoardError> {
        if !self.on_board(point) {
            return Err(BoardError::OutOfBounds);
        }

        if self.at(point).is_stone() {
            return Err(BoardError::Occupied);
        }

        let mut board = self.clone();
        board.set_stone(point, color);

        // Find and remove captured opponent chains
        let mut dead_stones = Vec::new();
        for chain in board.opponent_neighbor_chains(point) {
            if board.chain_liberties(&chain).is_empty() {
                dead_stones.extend(chain);
            }
        }

        board.capture_mut(&dead_stones);

        // Self-capture, computed on the post-capture grid
        let own_chain = board.chain(point);
        if board.chain_liberties(&own_chain).is_empty() {
            board.capture_mut(&own_chain);
        }

        Ok(board)
    }

    /// Remove captured stones from the board in place.
    fn capture_mut(&mut self, stones: &[Point]) {
        if stones.is_empty() {
            return;
        }

        let capturing_color = self.at(stones[0]).opponent();

        for &pt in stones {
            self.clear_stone(pt);
        }
        self.captures.add(capturing_color, stones.len() as u32);
    }

    // -- Graph algorithms --

    /// Get the 4-connected neighbors that are on the board.
    pub fn neighbors(&self, (row, col): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if row > 0 {
            result.push((row - 1, col));
        }
        if row + 1 < self.size {
            result.push((row + 1, col));
        }
        if col > 0 {
            result.push((row, col - 1));
        }
        if col + 1 < self.size {
            result.push((row, col + 1));
        }
        result
    }

    /// Flood-fill connected group of same-colored stones.
    pub fn chain(&self, point: Point) -> Vec<Point> {
        let mut visited = vec![false; self.grid.len()];
        self.chain_from(point, &mut visited)
    }

    /// Get the liberties of a single stone's connected group.
    pub fn liberties(&self, point: Point) -> Vec<Point> {
        let chain = self.chain(point);
        self.chain_liberties(&chain)
    }

    /// Get the liberties of a chain (pre-computed group of points).
    pub fn chain_liberties(&self, chain: &[Point]) -> Vec<Point> {
        let mut seen = vec![false; self.grid.len()];
        let mut libs = Vec::new();
        for &p in chain {
            for n in self.neighbors(p) {
                let ni = self.idx(n.0, n.1);
                if !seen[ni] && !self.at(n).is_stone() {
                    seen[ni] = true;
                    libs.push(n);
                }
            }
        }
        libs
    }

    /// Find all opponent chains neighboring a given point, each chain once.
    fn opponent_neighbor_chains(&self, point: Point) -> Vec<Vec<Point>> {
        let color = self.at(point);
        if !color.is_stone() {
            return Vec::new();
        }
        let opponent = color.opponent();

        let mut chains = Vec::new();
        let mut visited = vec![false; self.grid.len()];

        for n in self.neighbors(point) {
            if self.at(n) != opponent {
                continue;
            }
            if visited[self.idx(n.0, n.1)] {
                continue;
            }
            let ch = self.chain_from(n, &mut visited);
            if !ch.is_empty() {
                chains.push(ch);
            }
        }

        chains
    }

    /// Chain flood-fill using a shared visited bitset.
    fn chain_from(&self, point: Point, visited: &mut [bool]) -> Vec<Point> {
        let color = self.at(point);
        if !color.is_stone() {
            return Vec::new();
        }

        let mut result = Vec::new();
        let mut stack = vec![point];

        while let Some(p) = stack.pop() {
            let vi = self.idx(p.0, p.1);
            if visited[vi] {
                continue;
            }
            visited[vi] = true;
            result.push(p);
            for n in self.neighbors(p) {
                if self.at(n) == color && !visited[self.idx(n.0, n.1)] {
                    stack.push(n);
                }
            }
        }

        result
    }

    // -- Internal helpers --

    #[inline]
    fn idx(&self, row: u8, col: u8) -> usize {
        row as usize * self.size as usize + col as usize
    }

    #[inline]
    fn at(&self, (row, col): Point) -> Color {
        self.grid[self.idx(row, col)]
    }

    fn set_stone(&mut self, (row, col): Point, color: Color) {
        let i = self.idx(row, col);
        self.grid[i] = color;
    }

    fn clear_stone(&mut self, (row, col): Point) {
        let i = self.idx(row, col);
        self.grid[i] = Color::Empty;
    }
}

impl fmt::Display for Board {
    /// Render one character per intersection, rows joined by newlines, no
    /// trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.size {
                write!(f, "{}", self.at((row, col)).symbol())?;
            }
        }
        Ok(())
    }
}
