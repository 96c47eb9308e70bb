// src/application/handlers/mod.rs
//
// One handler module per resource. Handlers are thin: extract, take the
// write lock when mutating, delegate to a service, wrap the response.

pub mod book_handlers;
pub mod search_handlers;
pub mod statistics_handlers;
pub mod system_handlers;
pub mod transfer_handlers;
