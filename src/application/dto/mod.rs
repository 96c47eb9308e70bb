// src/application/dto/mod.rs
//
// Request/response bodies for the HTTP surface. Simple serializable
// structs; conversion from service results only.

use serde::{Deserialize, Serialize};

use crate::domain::{BookDraft, BookRecord};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveBookResponse {
    pub message: String,
    pub id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookResponse {
    pub message: String,
    pub book: BookRecord,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportRequest {
    #[serde(default)]
    pub books: Vec<BookDraft>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    pub message: String,
    pub imported: usize,
    pub total_books: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}
