// src/application/state.rs
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::integrations::CatalogClient;
use crate::services::{BookService, StatisticsService};

/// Shared handler state.
///
/// `write_lock` serializes the read-modify-write cycle of every mutating
/// operation; without it two concurrent mutations could both load the old
/// collection and the second replace would overwrite the first.
#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<BookService>,
    pub statistics_service: Arc<StatisticsService>,
    pub catalog: Arc<dyn CatalogClient>,
    pub write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(
        book_service: Arc<BookService>,
        statistics_service: Arc<StatisticsService>,
        catalog: Arc<dyn CatalogClient>,
    ) -> Self {
        Self {
            book_service,
            statistics_service,
            catalog,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}
