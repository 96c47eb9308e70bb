// src/domain/book/summary.rs
use serde::{Deserialize, Serialize};

/// A normalized, read-only projection of an external catalog search hit.
///
/// Fields the upstream omitted are filled with defensive defaults; nulls
/// are serialized literally so clients see a stable shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    pub key: String,
    pub title: String,
    pub author_name: Vec<String>,
    pub first_publish_year: Option<i32>,
    pub cover_id: Option<i64>,
    pub cover_url: Option<String>,
    pub isbn: Option<String>,
    pub publisher: Option<String>,
    pub language: String,
    pub pages: Option<i64>,
}
