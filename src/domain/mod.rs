// src/domain/mod.rs
pub mod book;
pub mod statistics;

pub use book::{
    BookCollection, BookDraft, BookPatch, BookRecord, BookSummary, STATUS_COMPLETED,
    STATUS_READING, STATUS_WANT_TO_READ,
};
pub use statistics::ReadingStats;
