// src/integrations/mod.rs
//
// External integrations. Infrastructure only: these clients map external
// payloads to internal DTOs and never mutate domain state.

pub mod openlibrary;

pub use openlibrary::{CatalogClient, OpenLibraryClient};

#[cfg(test)]
pub use openlibrary::MockCatalogClient;
