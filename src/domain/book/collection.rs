// src/domain/book/collection.rs
use serde::{Deserialize, Serialize};

use super::BookRecord;

/// The entire persisted state: an ordered run of records plus the id
/// counter. The counter is monotonic and survives deletions, so ids are
/// never reused (the legacy `len + 1` scheme could collide after a delete).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookCollection {
    pub next_id: u64,
    pub books: Vec<BookRecord>,
}

impl Default for BookCollection {
    fn default() -> Self {
        Self {
            next_id: 1,
            books: Vec::new(),
        }
    }
}

impl BookCollection {
    /// Rebuild a collection from a bare record array (legacy data files),
    /// deriving the counter from the highest surviving id.
    pub fn from_books(books: Vec<BookRecord>) -> Self {
        let next_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self { next_id, books }
    }

    /// Hand out the next id and advance the counter.
    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn find_by_key(&self, key: &str) -> Option<&BookRecord> {
        self.books.iter().find(|b| b.key == key)
    }

    pub fn find_by_id_mut(&mut self, id: u64) -> Option<&mut BookRecord> {
        self.books.iter_mut().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
