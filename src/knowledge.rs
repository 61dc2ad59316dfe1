use std::collections::HashSet;

use log::{debug, trace};

use crate::error::Result;
use crate::grid::Cell;
use crate::sentence::Sentence;

/// Cells a settlement scan found to be certain.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KnownCells {
    pub safes: HashSet<Cell>,
    pub mines: HashSet<Cell>,
}

impl KnownCells {
    pub fn is_empty(&self) -> bool {
        self.safes.is_empty() && self.mines.is_empty()
    }
}

///
/// The set of sentences currently believed to be true, kept in insertion order and
/// never holding two equal sentences.
///
#[derive(Debug, Default, Clone)]
pub struct KnowledgeBase {
    sentences: Vec<Sentence>,
}

impl KnowledgeBase {
    pub fn new() -> KnowledgeBase {
        KnowledgeBase::default()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sentence> {
        self.sentences.iter()
    }

    pub fn contains(&self, sentence: &Sentence) -> bool {
        self.sentences.contains(sentence)
    }

    /// Adds the sentence unless an equal one is already known. Returns whether it was added.
    pub fn insert(&mut self, sentence: Sentence) -> bool {
        if self.contains(&sentence) {
            return false;
        }
        self.sentences.push(sentence);
        true
    }

    pub fn mark_mine(&mut self, cell: Cell) -> Result<()> {
        for sentence in &mut self.sentences {
            sentence.mark_mine(cell)?;
        }
        Ok(())
    }

    pub fn mark_safe(&mut self, cell: Cell) -> Result<()> {
        for sentence in &mut self.sentences {
            sentence.mark_safe(cell)?;
        }
        Ok(())
    }

    ///
    /// One subset-resolution pass: compare every frontier sentence against every live sentence,
    /// and whenever one is a strict subset of the other, add their difference.
    /// Returns the derived sentences that weren't already known.
    ///
    pub fn resolve(&mut self, frontier: &[Sentence]) -> Result<Vec<Sentence>> {
        let mut derived: Vec<Sentence> = Vec::new();
        for new in frontier {
            // Derived sentences are compared against too, so index rather than iterate.
            let mut idx = 0;
            while idx < self.sentences.len() {
                let known = &self.sentences[idx];
                let difference = if known.is_strict_subset_of(new) {
                    new.subtract(known)?
                } else if new.is_strict_subset_of(known) {
                    known.subtract(new)?
                } else {
                    None
                };
                if let Some(sentence) = difference {
                    if !self.contains(&sentence) {
                        debug!("derived {} from {} and {}", sentence, new, self.sentences[idx]);
                        self.sentences.push(sentence.clone());
                        derived.push(sentence);
                    }
                }
                idx += 1;
            }
        }
        trace!("resolution pass derived {} sentences, {} live", derived.len(), self.len());
        Ok(derived)
    }

    /// Every cell some sentence proves to be safe or a mine.
    pub fn known_cells(&self) -> KnownCells {
        let mut known = KnownCells::default();
        for sentence in &self.sentences {
            known.safes.extend(sentence.known_safes());
            known.mines.extend(sentence.known_mines());
        }
        known
    }

    /// Drops settled sentences (including empty ones) and any duplicates left by marking.
    pub fn remove_settled(&mut self) {
        let mut kept: Vec<Sentence> = Vec::with_capacity(self.sentences.len());
        for sentence in self.sentences.drain(..) {
            if !sentence.is_settled() && !kept.contains(&sentence) {
                kept.push(sentence);
            }
        }
        self.sentences = kept;
    }
}
