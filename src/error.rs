use thiserror::Error;

use crate::grid::Cell;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MinesweeperError {
    #[error("cell {cell:?} is outside the {nrows} x {ncols} board")]
    OutOfBounds { cell: Cell, nrows: usize, ncols: usize },

    /// A sentence claimed more mines than it has cells (or a negative count).
    #[error("invalid mine count {count} for {ncells} cells")]
    InvalidCount { count: i64, ncells: usize },

    /// The knowledge base can no longer be satisfied once `cell` is classified.
    #[error("contradiction while classifying cell {cell:?}")]
    Contradiction { cell: Cell },

    #[error("too many mines - a board with {ncells} cells can have at most {ncells} mines, requested {nmines}")]
    TooManyMines { nmines: usize, ncells: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, MinesweeperError>;
