// src/repositories/mod.rs
//
// Persistence layer
//
// Repositories are dumb data mappers: whole-collection load and
// whole-collection replace, no business logic, no id assignment,
// no dedup. All of that lives in the services.

pub mod book_repository;

pub use book_repository::{BookRepository, JsonFileBookRepository};

#[cfg(test)]
pub use book_repository::MockBookRepository;
