// src/application/handlers/book_handlers.rs
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::dto::{MessageResponse, SaveBookResponse, UpdateBookResponse};
use crate::application::state::AppState;
use crate::domain::{BookDraft, BookPatch, BookRecord};
use crate::error::AppResult;

/// GET /api/books — the full collection, insertion order preserved.
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<BookRecord>>> {
    Ok(Json(state.book_service.list_all()?))
}

/// POST /api/books — save a book. 201 on creation, 200 when the key is
/// already present (idempotent re-save).
pub async fn save_book(
    State(state): State<AppState>,
    Json(draft): Json<BookDraft>,
) -> AppResult<(StatusCode, Json<SaveBookResponse>)> {
    let _guard = state.write_lock.lock().await;
    let outcome = state.book_service.insert(draft)?;

    let (status, message) = if outcome.created {
        (StatusCode::CREATED, "Book saved successfully!")
    } else {
        (StatusCode::OK, "Book already saved")
    };

    Ok((
        status,
        Json(SaveBookResponse {
            message: message.to_string(),
            id: outcome.id,
        }),
    ))
}

/// PUT /api/books/{id} — partial update of the user-mutable fields.
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<BookPatch>,
) -> AppResult<Json<UpdateBookResponse>> {
    let _guard = state.write_lock.lock().await;
    let book = state.book_service.update(id, patch)?;

    Ok(Json(UpdateBookResponse {
        message: "Book updated successfully!".to_string(),
        book,
    }))
}

/// DELETE /api/books/{id}
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<MessageResponse>> {
    let _guard = state.write_lock.lock().await;
    state.book_service.delete(id)?;

    Ok(Json(MessageResponse {
        message: "Book removed successfully!".to_string(),
    }))
}
