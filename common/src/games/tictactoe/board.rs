use thiserror::Error;

use super::types::Mark;

pub const BOARD_SIZE: usize = 9;
pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];
pub const SIDES: [usize; 4] = [1, 3, 5, 7];

/// Raised when raw input cannot describe a 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("invalid board: expected 9 cells, got {len}")]
    WrongLength { len: usize },
    #[error("invalid board: cell {index} holds unknown value {value:?}")]
    InvalidCell { index: usize, value: char },
}

/// Row-major 3x3 board, indices 0..=8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; BOARD_SIZE],
        }
    }

    pub fn from_cells(cells: &[Mark]) -> Result<Self, BoardError> {
        let cells: [Mark; BOARD_SIZE] = cells
            .try_into()
            .map_err(|_| BoardError::WrongLength { len: cells.len() })?;
        Ok(Self { cells })
    }

    /// Parses nine cell symbols such as `"XO./.X./..O"`. Row separators
    /// (`/` and line breaks) are skipped.
    pub fn parse(input: &str) -> Result<Self, BoardError> {
        let mut cells = Vec::with_capacity(BOARD_SIZE);
        for value in input.chars().filter(|c| !matches!(c, '/' | '\n' | '\r')) {
            let mark = Mark::try_from(value).map_err(|value| BoardError::InvalidCell {
                index: cells.len(),
                value,
            })?;
            cells.push(mark);
        }
        Self::from_cells(&cells)
    }

    pub fn cells(&self) -> &[Mark; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Panics if `index` is not below [`BOARD_SIZE`].
    pub fn set(&mut self, index: usize, mark: Mark) {
        debug_assert!(index < BOARD_SIZE, "cell {} is off the board", index);
        self.cells[index] = mark;
    }

    pub fn is_empty(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        (0..BOARD_SIZE).filter(|&i| self.cells[i] == Mark::Empty).collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Copy of the board with `mark` placed at `index`.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut board = *self;
        board.set(index, mark);
        board
    }
}
