// src/application/handlers/system_handlers.rs
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::application::state::AppState;
use crate::error::AppResult;

/// GET / — service descriptor with the endpoint map.
pub async fn home() -> Json<Value> {
    Json(json!({
        "message": "Personal Book Tracker API",
        "version": env!("CARGO_PKG_VERSION"),
        "features": [
            "Search Open Library",
            "Save favorites",
            "Custom books",
            "Ratings & reviews",
            "Reading status",
            "Progress tracking",
            "Export/Import"
        ],
        "endpoints": {
            "GET /api/books": "Get all saved books",
            "POST /api/books": "Save a book",
            "PUT /api/books/{id}": "Update book (rating, status, progress)",
            "DELETE /api/books/{id}": "Remove a book",
            "GET /api/books/search?q=query": "Search Open Library",
            "GET /api/books/export": "Export the collection",
            "POST /api/books/import": "Import books",
            "GET /api/books/stats": "Reading statistics",
            "GET /api/health": "Health check"
        }
    }))
}

/// GET /api/health — liveness plus a live record count.
pub async fn health(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let books_count = state.book_service.count()?;

    Ok(Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "database": "JSON file",
        "books_count": books_count,
    })))
}
