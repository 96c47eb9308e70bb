// src/application/handlers/transfer_handlers.rs
use axum::extract::State;
use axum::Json;

use crate::application::dto::{ImportRequest, ImportResponse};
use crate::application::state::AppState;
use crate::error::AppResult;
use crate::services::ExportSnapshot;

/// GET /api/books/export — full-collection snapshot with metadata.
pub async fn export_books(State(state): State<AppState>) -> AppResult<Json<ExportSnapshot>> {
    Ok(Json(state.book_service.export()?))
}

/// POST /api/books/import — bulk append with fresh ids, no key dedup.
pub async fn import_books(
    State(state): State<AppState>,
    Json(request): Json<ImportRequest>,
) -> AppResult<Json<ImportResponse>> {
    let _guard = state.write_lock.lock().await;
    let outcome = state.book_service.import(request.books)?;

    Ok(Json(ImportResponse {
        message: format!("Imported {} books successfully!", outcome.imported),
        imported: outcome.imported,
        total_books: outcome.total_books,
    }))
}
