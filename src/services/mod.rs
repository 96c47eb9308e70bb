// src/services/mod.rs
pub mod book_service;
pub mod statistics_service;

#[cfg(test)]
mod book_service_tests;

pub use book_service::{BookService, ExportSnapshot, ImportOutcome, InsertOutcome};
pub use statistics_service::StatisticsService;
