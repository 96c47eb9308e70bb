// src/integrations/openlibrary/mod.rs
mod client;

pub use client::{CatalogClient, OpenLibraryClient};

#[cfg(test)]
pub use client::MockCatalogClient;
