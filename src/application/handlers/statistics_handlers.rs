// src/application/handlers/statistics_handlers.rs
use axum::extract::State;
use axum::Json;

use crate::application::state::AppState;
use crate::domain::ReadingStats;
use crate::error::AppResult;

/// GET /api/books/stats
pub async fn reading_stats(State(state): State<AppState>) -> AppResult<Json<ReadingStats>> {
    Ok(Json(state.statistics_service.calculate()?))
}
