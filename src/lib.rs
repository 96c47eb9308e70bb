// src/lib.rs
// booktrack - Personal book tracker web API
//
// Architecture:
// - Domain-centric: record and summary types live in domain/
// - Dumb persistence: repositories expose whole-collection load/replace
// - Services own the business rules (dedup, defaults, id assignment)
// - Integrations map external catalog payloads to internal DTOs
// - Application layer is the HTTP boundary (axum handlers + router)

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod integrations;
pub mod repositories;
pub mod routes;
pub mod services;

// ============================================================================
// PUBLIC API - Domain types
// ============================================================================

pub use domain::{
    BookCollection, BookDraft, BookPatch, BookRecord, BookSummary, ReadingStats,
    STATUS_COMPLETED, STATUS_READING, STATUS_WANT_TO_READ,
};

// ============================================================================
// PUBLIC API - Errors
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Components
// ============================================================================

pub use application::AppState;
pub use config::Config;
pub use integrations::{CatalogClient, OpenLibraryClient};
pub use repositories::{BookRepository, JsonFileBookRepository};
pub use routes::create_router;
pub use services::{BookService, StatisticsService};
