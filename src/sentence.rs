use std::collections::HashSet;
use std::fmt;

use crate::error::{MinesweeperError, Result};
use crate::grid::Cell;

///
/// A logical statement about the board: exactly `count` of `cells` are mines.
///
/// `count <= cells.len()` holds for every live sentence. It's checked on construction, and
/// any mark that would break it is reported as a contradiction rather than applied.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    cells: HashSet<Cell>,
    count: usize,
}

impl Sentence {
    pub fn new(cells: impl IntoIterator<Item = Cell>, count: usize) -> Result<Sentence> {
        let cells: HashSet<Cell> = cells.into_iter().collect();
        if count > cells.len() {
            return Err(MinesweeperError::InvalidCount { count: count as i64, ncells: cells.len() });
        }
        Ok(Sentence { cells, count })
    }

    pub fn cells(&self) -> &HashSet<Cell> {
        &self.cells
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }

    /// All cells, if every remaining cell must be a mine.
    pub fn known_mines(&self) -> HashSet<Cell> {
        if self.count == self.cells.len() {
            self.cells.clone()
        } else {
            HashSet::new()
        }
    }

    /// All cells, if none of the remaining cells can be a mine.
    pub fn known_safes(&self) -> HashSet<Cell> {
        if self.count == 0 {
            self.cells.clone()
        } else {
            HashSet::new()
        }
    }

    /// A settled sentence carries no information beyond its known mines / known safes.
    pub fn is_settled(&self) -> bool {
        self.count == 0 || self.count == self.cells.len()
    }

    pub fn mark_mine(&mut self, cell: Cell) -> Result<()> {
        if !self.cells.contains(&cell) {
            return Ok(());
        }
        if self.count == 0 {
            return Err(MinesweeperError::Contradiction { cell });
        }
        self.cells.remove(&cell);
        self.count -= 1;
        Ok(())
    }

    pub fn mark_safe(&mut self, cell: Cell) -> Result<()> {
        if !self.cells.contains(&cell) {
            return Ok(());
        }
        if self.count == self.cells.len() {
            return Err(MinesweeperError::Contradiction { cell });
        }
        self.cells.remove(&cell);
        Ok(())
    }

    pub fn is_strict_subset_of(&self, other: &Sentence) -> bool {
        self.cells.len() < other.cells.len() && self.cells.is_subset(&other.cells)
    }

    pub fn is_strict_superset_of(&self, other: &Sentence) -> bool {
        other.is_strict_subset_of(self)
    }

    ///
    /// Subset resolution: if `subset` is a strict subset of self, then the cells of self outside
    /// `subset` hold exactly self.count - subset.count mines.
    /// Returns None if `subset` isn't a strict subset.
    ///
    pub fn subtract(&self, subset: &Sentence) -> Result<Option<Sentence>> {
        if !subset.is_strict_subset_of(self) {
            return Ok(None);
        }
        let cells: HashSet<Cell> = self.cells.difference(&subset.cells).copied().collect();
        let count = self.count as i64 - subset.count as i64;
        if count < 0 || count as usize > cells.len() {
            return Err(MinesweeperError::InvalidCount { count, ncells: cells.len() });
        }
        Ok(Some(Sentence { cells, count: count as usize }))
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cells: Vec<&Cell> = self.cells.iter().collect();
        cells.sort();
        write!(f, "{{")?;
        for (idx, (i, j)) in cells.into_iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({i}, {j})")?;
        }
        write!(f, "}} = {}", self.count)
    }
}
