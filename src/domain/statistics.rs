// src/domain/statistics.rs
use serde::{Deserialize, Serialize};

/// Aggregate reading statistics over the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingStats {
    pub total_books: u64,
    /// Per-status buckets; records with other/missing status fall in none
    pub completed: u64,
    pub reading: u64,
    pub want_to_read: u64,
    /// Mean over rated books only (rating > 0); 0 when none are rated
    pub average_rating: f64,
    /// Sum over records carrying a non-zero page count
    pub total_pages: i64,
    /// Mean over ALL records; 0 for an empty collection
    pub average_progress: f64,
    /// completed / total * 100; 0 for an empty collection
    pub completion_rate: f64,
}
