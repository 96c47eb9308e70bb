// src/services/book_service.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{BookDraft, BookPatch, BookRecord};
use crate::error::{AppError, AppResult};
use crate::repositories::BookRepository;

/// Outcome of a save: the record's id and whether it was newly created.
/// Saving a key that already exists is an idempotent no-op returning the
/// surviving record's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOutcome {
    pub id: u64,
    pub created: bool,
}

/// Snapshot of the full collection with export metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSnapshot {
    pub export_date: DateTime<Utc>,
    pub total_books: usize,
    pub books: Vec<BookRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOutcome {
    pub imported: usize,
    pub total_books: usize,
}

/// CRUD and bulk transfer over the persisted collection.
///
/// Every operation reloads the collection from the repository and, when
/// mutating, replaces it wholesale; nothing is cached across calls.
pub struct BookService {
    repo: Arc<dyn BookRepository>,
}

impl BookService {
    pub fn new(repo: Arc<dyn BookRepository>) -> Self {
        Self { repo }
    }

    pub fn list_all(&self) -> AppResult<Vec<BookRecord>> {
        Ok(self.repo.load()?.books)
    }

    pub fn count(&self) -> AppResult<usize> {
        Ok(self.repo.load()?.len())
    }

    /// Save a book. Requires `key` to be present (any string, including
    /// empty, is accepted); an existing key returns the surviving record's
    /// id without touching the collection.
    pub fn insert(&self, draft: BookDraft) -> AppResult<InsertOutcome> {
        let key = draft
            .key
            .clone()
            .ok_or_else(|| AppError::validation("Invalid book data: 'key' is required"))?;

        let mut collection = self.repo.load()?;

        if let Some(existing) = collection.find_by_key(&key) {
            return Ok(InsertOutcome {
                id: existing.id,
                created: false,
            });
        }

        let id = collection.allocate_id();
        let mut record = BookRecord::from_draft(draft, id);
        record.stamp_saved(Utc::now());
        collection.books.push(record);

        self.repo.replace(&collection)?;
        info!(id, key = %key, "book saved");

        Ok(InsertOutcome { id, created: true })
    }

    /// Merge a partial update into the record with the given id.
    pub fn update(&self, id: u64, patch: BookPatch) -> AppResult<BookRecord> {
        let mut collection = self.repo.load()?;

        let record = collection
            .find_by_id_mut(id)
            .ok_or_else(|| AppError::not_found("Book not found"))?;
        record.apply_patch(patch, Utc::now());
        let updated = record.clone();

        self.repo.replace(&collection)?;
        Ok(updated)
    }

    pub fn delete(&self, id: u64) -> AppResult<()> {
        let mut collection = self.repo.load()?;

        let before = collection.len();
        collection.books.retain(|b| b.id != id);
        if collection.len() == before {
            return Err(AppError::not_found("Book not found"));
        }

        self.repo.replace(&collection)?;
        info!(id, "book removed");
        Ok(())
    }

    pub fn export(&self) -> AppResult<ExportSnapshot> {
        let collection = self.repo.load()?;
        Ok(ExportSnapshot {
            export_date: Utc::now(),
            total_books: collection.len(),
            books: collection.books,
        })
    }

    /// Bulk append. Each record gets a fresh id as it is appended and an
    /// `imported_at` stamp. Unlike `insert`, import never dedups by key: a
    /// bulk restore must not silently drop near-duplicates. The collection
    /// is persisted once, after the whole batch.
    pub fn import(&self, drafts: Vec<BookDraft>) -> AppResult<ImportOutcome> {
        let mut collection = self.repo.load()?;
        let now = Utc::now();

        let imported = drafts.len();
        for draft in drafts {
            let id = collection.allocate_id();
            let mut record = BookRecord::from_draft(draft, id);
            record.imported_at = Some(now);
            collection.books.push(record);
        }

        self.repo.replace(&collection)?;
        info!(imported, total = collection.len(), "books imported");

        Ok(ImportOutcome {
            imported,
            total_books: collection.len(),
        })
    }
}
