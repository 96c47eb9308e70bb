// src/domain/book/mod.rs
mod collection;
mod entity;
mod summary;

pub use collection::BookCollection;
pub use entity::{
    BookDraft, BookPatch, BookRecord, STATUS_COMPLETED, STATUS_READING, STATUS_WANT_TO_READ,
};
pub use summary::BookSummary;
