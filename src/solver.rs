use std::collections::HashSet;

use log::{debug, trace};
use rand::prelude::*;

use crate::error::{MinesweeperError, Result};
use crate::grid::{all_cells, check_bounds, get_neighbors, Cell};
use crate::knowledge::KnowledgeBase;
use crate::sentence::Sentence;

///
/// Minesweeper player that reasons over a knowledge base of sentences.
///
/// Terms:
/// move: a cell the player has revealed. Moves are always safe cells.
/// safe / mine: a cell proven not to be / to be a mine. The two sets never overlap.
/// live sentence: a sentence in the knowledge base. Live sentences only mention cells that
/// are neither safe nor mines - classified cells are removed from every sentence as soon as
/// they're known.
///
#[derive(Debug, Clone)]
pub struct Solver {
    nrows: usize,
    ncols: usize,
    moves_made: HashSet<Cell>,
    safes: HashSet<Cell>,
    mines: HashSet<Cell>,
    knowledge: KnowledgeBase,
}

impl Solver {
    pub fn new(nrows: usize, ncols: usize) -> Solver {
        Solver {
            nrows,
            ncols,
            moves_made: HashSet::new(),
            safes: HashSet::new(),
            mines: HashSet::new(),
            knowledge: KnowledgeBase::new(),
        }
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn moves_made(&self) -> &HashSet<Cell> {
        &self.moves_made
    }

    pub fn safes(&self) -> &HashSet<Cell> {
        &self.safes
    }

    pub fn mines(&self) -> &HashSet<Cell> {
        &self.mines
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    ///
    /// Record that `cell` was revealed and has `count` mines among its neighbors, then draw
    /// every conclusion that follows. Either the whole update is applied, or (on error) none
    /// of it is.
    ///
    pub fn process_move(&mut self, cell: Cell, count: usize) -> Result<()> {
        check_bounds(cell, self.nrows, self.ncols)?;
        let mut next = self.clone();
        next.add_knowledge(cell, count)?;
        *self = next;
        Ok(())
    }

    /// Add an externally known fact and draw every conclusion that follows.
    pub fn add_sentence(&mut self, sentence: Sentence) -> Result<()> {
        for cell in sentence.cells() {
            check_bounds(*cell, self.nrows, self.ncols)?;
        }
        let mut next = self.clone();
        let mut sentence = sentence;
        for cell in sentence.cells().clone() {
            if next.mines.contains(&cell) {
                sentence.mark_mine(cell)?;
            } else if next.safes.contains(&cell) {
                sentence.mark_safe(cell)?;
            }
        }
        next.knowledge.insert(sentence.clone());
        next.close(vec![sentence])?;
        *self = next;
        Ok(())
    }

    /// Mark a cell as a mine, here and in every sentence.
    pub fn mark_mine(&mut self, cell: Cell) -> Result<()> {
        check_bounds(cell, self.nrows, self.ncols)?;
        let mut next = self.clone();
        next.apply_mine(cell)?;
        *self = next;
        Ok(())
    }

    /// Mark a cell as safe, here and in every sentence.
    pub fn mark_safe(&mut self, cell: Cell) -> Result<()> {
        check_bounds(cell, self.nrows, self.ncols)?;
        let mut next = self.clone();
        next.apply_safe(cell)?;
        *self = next;
        Ok(())
    }

    ///
    /// Run resolution and settlement over the whole knowledge base until nothing changes.
    /// Returns whether anything new was learned.
    ///
    pub fn infer(&mut self) -> Result<bool> {
        let mut next = self.clone();
        let frontier: Vec<Sentence> = next.knowledge.iter().cloned().collect();
        let changed = next.close(frontier)?;
        *self = next;
        Ok(changed)
    }

    /// A cell known to be safe that hasn't been played yet.
    pub fn make_safe_move(&self) -> Option<Cell> {
        self.safes.difference(&self.moves_made).min().copied()
    }

    /// A random cell that hasn't been played and isn't known to be a mine.
    pub fn make_random_move(&self) -> Option<Cell> {
        self.make_random_move_with_rng(&mut thread_rng())
    }

    pub fn make_random_move_with_rng<R: Rng>(&self, rng: &mut R) -> Option<Cell> {
        let candidates: Vec<Cell> = all_cells(self.nrows, self.ncols)
            .filter(|cell| !self.moves_made.contains(cell) && !self.mines.contains(cell))
            .collect();
        candidates.choose(rng).copied()
    }

    /// A safe move if one is known, otherwise a random one.
    pub fn next_move_with_rng<R: Rng>(&self, rng: &mut R) -> Option<Cell> {
        self.make_safe_move().or_else(|| self.make_random_move_with_rng(rng))
    }

    fn add_knowledge(&mut self, cell: Cell, count: usize) -> Result<()> {
        if self.mines.contains(&cell) {
            return Err(MinesweeperError::Contradiction { cell });
        }
        // If the move removes a cell from live sentences, old sentences may now resolve
        // against each other, so they all go back on the frontier.
        let touches_knowledge = self.knowledge.iter().any(|sentence| sentence.contains(&cell));
        self.moves_made.insert(cell);
        self.apply_safe(cell)?;

        let sentence = self.new_sentence_from_move(cell, count)?;
        debug!("move {:?} with {} adjacent mines: {}", cell, count, sentence);
        self.knowledge.insert(sentence.clone());

        let frontier = if touches_knowledge {
            self.knowledge.iter().cloned().collect()
        } else {
            vec![sentence]
        };
        self.close(frontier)?;
        Ok(())
    }

    ///
    /// The sentence a move contributes: its neighbors that aren't already classified, and the
    /// count minus any neighbors already known to be mines.
    ///
    fn new_sentence_from_move(&self, cell: Cell, count: usize) -> Result<Sentence> {
        let (i, j) = cell;
        let mut remaining = count as i64;
        let mut cells: Vec<Cell> = Vec::with_capacity(8);
        for neighbor in get_neighbors(self.nrows, self.ncols, i, j) {
            if self.mines.contains(&neighbor) {
                remaining -= 1;
            } else if !self.moves_made.contains(&neighbor) && !self.safes.contains(&neighbor) {
                cells.push(neighbor);
            }
        }
        if remaining < 0 || remaining as usize > cells.len() {
            return Err(MinesweeperError::InvalidCount { count: remaining, ncells: cells.len() });
        }
        Sentence::new(cells, remaining as usize)
    }

    ///
    /// Closure loop: resolve the frontier against the knowledge base, settle, clean up, and
    /// repeat until an iteration neither derives a sentence nor classifies a cell.
    /// Returns whether anything changed.
    ///
    fn close(&mut self, mut frontier: Vec<Sentence>) -> Result<bool> {
        let mut changed = false;
        loop {
            let derived = self.knowledge.resolve(&frontier)?;
            let nclassified = self.settle()?;
            self.knowledge.remove_settled();
            trace!(
                "closure iteration: {} derived, {} classified, {} live sentences",
                derived.len(), nclassified, self.knowledge.len()
            );
            if derived.is_empty() && nclassified == 0 {
                break;
            }
            changed = true;
            // Classifying cells shrinks sentences, which can create new subset relations
            // anywhere in the knowledge base.
            frontier = if nclassified > 0 {
                self.knowledge.iter().cloned().collect()
            } else {
                derived
            };
        }
        Ok(changed)
    }

    /// Repeatedly classify the cells of all-safe and all-mine sentences until a scan finds none.
    /// Returns the number of cells classified.
    fn settle(&mut self) -> Result<usize> {
        let mut nclassified = 0;
        loop {
            let known = self.knowledge.known_cells();
            if known.is_empty() {
                break;
            }
            for cell in known.safes {
                debug!("{:?} is safe", cell);
                self.apply_safe(cell)?;
                nclassified += 1;
            }
            for cell in known.mines {
                debug!("{:?} is a mine", cell);
                self.apply_mine(cell)?;
                nclassified += 1;
            }
        }
        Ok(nclassified)
    }

    fn apply_mine(&mut self, cell: Cell) -> Result<()> {
        if self.safes.contains(&cell) {
            return Err(MinesweeperError::Contradiction { cell });
        }
        self.mines.insert(cell);
        self.knowledge.mark_mine(cell)
    }

    fn apply_safe(&mut self, cell: Cell) -> Result<()> {
        if self.mines.contains(&cell) {
            return Err(MinesweeperError::Contradiction { cell });
        }
        self.safes.insert(cell);
        self.knowledge.mark_safe(cell)
    }
}
