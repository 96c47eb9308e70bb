// src/config.rs
//
// Environment-driven configuration with sensible local defaults.

use std::env;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CATALOG_BASE_URL: &str = "https://openlibrary.org";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_file: PathBuf,
    pub catalog_base_url: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// - `BOOKTRACK_PORT` (default 5000)
    /// - `BOOKTRACK_DATA_FILE` (default `{data_dir}/booktrack/books.json`)
    /// - `BOOKTRACK_CATALOG_URL` (default Open Library)
    pub fn from_env() -> AppResult<Self> {
        let port = match env::var("BOOKTRACK_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AppError::validation(format!("invalid BOOKTRACK_PORT: {raw}")))?,
            Err(_) => DEFAULT_PORT,
        };

        let data_file = match env::var("BOOKTRACK_DATA_FILE") {
            Ok(path) => PathBuf::from(path),
            Err(_) => default_data_file()?,
        };

        let catalog_base_url = env::var("BOOKTRACK_CATALOG_URL")
            .unwrap_or_else(|_| DEFAULT_CATALOG_BASE_URL.to_string());

        Ok(Self {
            port,
            data_file,
            catalog_base_url,
        })
    }
}

/// Data file lives in the platform data directory:
/// `{APP_DATA}/booktrack/books.json`.
fn default_data_file() -> AppResult<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::storage("could not determine the user data directory"))?;

    Ok(data_dir.join("booktrack").join("books.json"))
}
