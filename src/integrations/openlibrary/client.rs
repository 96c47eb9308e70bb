// src/integrations/openlibrary/client.rs
//
// Open Library search integration
//
// Infrastructure, not domain: issues the search request, tolerates every
// field being absent in the upstream payload, and maps raw docs into
// BookSummary DTOs. Never touches persisted records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::BookSummary;
use crate::error::{AppError, AppResult};

/// Result cap sent to the catalog. Deliberately above SURFACE_LIMIT so a
/// few unusable docs at the top do not starve the response.
const REQUEST_LIMIT: usize = 24;
/// How many docs are normalized and surfaced to the caller.
const SURFACE_LIMIT: usize = 20;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_BASE_URL: &str = "https://openlibrary.org";
const COVER_URL_TEMPLATE: &str = "https://covers.openlibrary.org/b/id";

/// Catalog search seam, mockable for handler tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn search(&self, query: &str) -> AppResult<Vec<BookSummary>>;
}

/// Raw search payload. The upstream schema is not contractually stable,
/// so every field is optional.
#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Vec<SearchDoc>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchDoc {
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    author_name: Option<Vec<String>>,
    #[serde(default)]
    first_publish_year: Option<i32>,
    #[serde(default)]
    cover_i: Option<i64>,
    #[serde(default)]
    isbn: Option<Vec<String>>,
    #[serde(default)]
    publisher: Option<Vec<String>>,
    #[serde(default)]
    language: Option<Vec<String>>,
    #[serde(default)]
    number_of_pages_median: Option<i64>,
}

pub struct OpenLibraryClient {
    base_url: String,
    http_client: Client,
}

impl OpenLibraryClient {
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::upstream(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.into(),
            http_client,
        })
    }
}

impl Default for OpenLibraryClient {
    fn default() -> Self {
        // The builder only fails on TLS backend misconfiguration.
        Self::new(DEFAULT_BASE_URL).expect("default HTTP client")
    }
}

#[async_trait]
impl CatalogClient for OpenLibraryClient {
    /// Single attempt, fixed timeout, no retry. A failed attempt surfaces
    /// as an Upstream error to the caller.
    async fn search(&self, query: &str) -> AppResult<Vec<BookSummary>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::validation("Search query required"));
        }

        let url = format!("{}/search.json", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("q", query), ("limit", &REQUEST_LIMIT.to_string())])
            .send()
            .await
            .map_err(|e| AppError::upstream(format!("Open Library request failed: {e}")))?;

        let payload: SearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::upstream(format!("unparseable Open Library response: {e}")))?;

        Ok(payload
            .docs
            .into_iter()
            .take(SURFACE_LIMIT)
            .map(normalize_doc)
            .collect())
    }
}

/// Map one raw doc to the stable internal shape, with defensive defaults
/// for every missing field.
fn normalize_doc(doc: SearchDoc) -> BookSummary {
    let key = doc.key.unwrap_or_default().replace("/works/", "");

    let author_name = match doc.author_name {
        Some(authors) if !authors.is_empty() => authors,
        _ => vec!["Unknown Author".to_string()],
    };

    let cover_id = doc.cover_i;
    let cover_url = cover_id.map(|id| format!("{COVER_URL_TEMPLATE}/{id}-M.jpg"));

    BookSummary {
        key,
        title: doc.title.unwrap_or_else(|| "Untitled".to_string()),
        author_name,
        first_publish_year: doc.first_publish_year,
        cover_id,
        cover_url,
        isbn: doc.isbn.and_then(|v| v.into_iter().next()),
        publisher: doc.publisher.and_then(|v| v.into_iter().next()),
        language: doc
            .language
            .and_then(|v| v.into_iter().next())
            .unwrap_or_else(|| "en".to_string()),
        pages: doc.number_of_pages_median,
    }
}
