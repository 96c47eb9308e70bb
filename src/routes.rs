// src/routes.rs
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::application::handlers::{
    book_handlers, search_handlers, statistics_handlers, system_handlers, transfer_handlers,
};
use crate::application::AppState;

/// Assemble the full API surface.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(system_handlers::home))
        .route("/api/health", get(system_handlers::health))
        .route(
            "/api/books",
            get(book_handlers::list_books).post(book_handlers::save_book),
        )
        .route(
            "/api/books/{id}",
            put(book_handlers::update_book).delete(book_handlers::delete_book),
        )
        .route("/api/books/search", get(search_handlers::search_books))
        .route("/api/books/export", get(transfer_handlers::export_books))
        .route("/api/books/import", post(transfer_handlers::import_books))
        .route("/api/books/stats", get(statistics_handlers::reading_stats))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
