// src/repositories/book_repository.rs
//
// Book persistence over a single JSON data file

use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use tracing::debug;

use crate::domain::{BookCollection, BookRecord};
use crate::error::{AppError, AppResult};

/// Whole-collection persistence seam.
///
/// The store is the single source of truth per call: callers reload the
/// full collection, mutate it in memory, and replace it wholesale. There
/// are no partial writes.
#[cfg_attr(test, mockall::automock)]
pub trait BookRepository: Send + Sync {
    fn load(&self) -> AppResult<BookCollection>;
    fn replace(&self, collection: &BookCollection) -> AppResult<()>;
}

/// JSON-file-backed repository.
///
/// The file holds `{"next_id": N, "books": [...]}`, pretty-printed UTF-8
/// with non-ASCII preserved literally. A legacy bare array of records is
/// also accepted on load. A missing file is an empty collection, not an
/// error. Writes go to a sibling temp file and are renamed into place so
/// a crash mid-write never leaves a torn file behind.
pub struct JsonFileBookRepository {
    path: PathBuf,
}

impl JsonFileBookRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse(&self, raw: &str) -> AppResult<BookCollection> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| AppError::storage(format!("data file is not valid JSON: {e}")))?;

        match value {
            Value::Array(_) => {
                let books: Vec<BookRecord> = serde_json::from_value(value)
                    .map_err(|e| AppError::storage(format!("malformed book record: {e}")))?;
                Ok(BookCollection::from_books(books))
            }
            Value::Object(_) => serde_json::from_value(value)
                .map_err(|e| AppError::storage(format!("malformed data file: {e}"))),
            _ => Err(AppError::storage(
                "data file root must be an object or an array",
            )),
        }
    }
}

impl BookRepository for JsonFileBookRepository {
    fn load(&self) -> AppResult<BookCollection> {
        if !self.path.exists() {
            return Ok(BookCollection::default());
        }

        let raw = fs::read_to_string(&self.path)?;
        self.parse(&raw)
    }

    fn replace(&self, collection: &BookCollection) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // serde_json writes non-ASCII characters literally, matching the
        // UTF-8 data files produced before this rewrite.
        let payload = serde_json::to_string_pretty(collection)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &self.path)?;

        debug!(books = collection.len(), path = %self.path.display(), "collection persisted");
        Ok(())
    }
}
