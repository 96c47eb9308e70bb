// src/application/mod.rs
pub mod dto;
pub mod handlers;
pub mod state;

pub use state::AppState;
