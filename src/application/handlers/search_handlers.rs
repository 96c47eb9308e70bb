// src/application/handlers/search_handlers.rs
use axum::extract::{Query, State};
use axum::Json;

use crate::application::dto::SearchParams;
use crate::application::state::AppState;
use crate::domain::BookSummary;
use crate::error::AppResult;

/// GET /api/books/search?q= — catalog search. A missing or blank query is
/// rejected here; the client validates again before going to the network.
pub async fn search_books(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<BookSummary>>> {
    let query = params.q.unwrap_or_default();
    let summaries = state.catalog.search(&query).await?;
    Ok(Json(summaries))
}
