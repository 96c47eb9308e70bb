// src/domain/book/entity.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reading status values the statistics buckets understand.
///
/// The `status` field itself is an open string: any value is accepted and
/// persisted as-is, and consumers must tolerate values outside this set.
pub const STATUS_WANT_TO_READ: &str = "want-to-read";
pub const STATUS_READING: &str = "reading";
pub const STATUS_COMPLETED: &str = "completed";

/// A saved book with the user's reading metadata.
///
/// Descriptive fields are all optional; they come from an Open Library
/// search hit or manual entry and the upstream schema is not stable.
/// Unknown incoming fields are preserved verbatim in `extra` so that
/// records written by older clients survive a load/save cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Store-assigned identifier, unique for the lifetime of the data file
    pub id: u64,

    /// External catalog identifier; natural dedup key on save
    #[serde(default)]
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_publish_year: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<i64>,

    /// 0 means unrated
    #[serde(default)]
    pub rating: i32,

    /// Open string, see the STATUS_* constants
    #[serde(default = "default_status")]
    pub status: String,

    /// Intended as a percentage, unvalidated
    #[serde(default)]
    pub progress: f64,

    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub categories: Vec<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "utc_timestamp::deserialize"
    )]
    pub saved_at: Option<DateTime<Utc>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "utc_timestamp::deserialize"
    )]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "utc_timestamp::deserialize"
    )]
    pub imported_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_status() -> String {
    STATUS_WANT_TO_READ.to_string()
}

/// Timestamp parsing for data files.
///
/// New records serialize as RFC 3339. Legacy data files carry offset-less
/// stamps (e.g. `"2024-01-05T12:30:00.123456"`); those are read as UTC.
mod utc_timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        let Some(raw) = raw else {
            return Ok(None);
        };

        if let Ok(stamped) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(Some(stamped.with_timezone(&Utc)));
        }

        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| Some(naive.and_utc()))
            .map_err(serde::de::Error::custom)
    }
}

/// Incoming partial book payload (save body, import entries).
///
/// Everything is optional; the store fills defaults and stamps timestamps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookDraft {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author_name: Option<Vec<String>>,
    #[serde(default)]
    pub first_publish_year: Option<i32>,
    #[serde(default)]
    pub cover_id: Option<i64>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub pages: Option<i64>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default, deserialize_with = "utc_timestamp::deserialize")]
    pub saved_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "utc_timestamp::deserialize")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial update over the user-mutable fields.
/// Absent fields are left untouched by `BookRecord::apply_patch`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookPatch {
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

impl BookRecord {
    /// Build a record from an incoming draft, filling defaults.
    ///
    /// Timestamps present on the draft are carried through; the caller
    /// decides whether to stamp `saved_at`/`updated_at` (save) or
    /// `imported_at` (import).
    pub fn from_draft(draft: BookDraft, id: u64) -> Self {
        // Store-managed fields may arrive inside re-imported payloads;
        // they must not shadow the freshly assigned values.
        let mut extra = draft.extra;
        extra.remove("id");
        extra.remove("imported_at");

        Self {
            id,
            key: draft.key.unwrap_or_default(),
            title: draft.title,
            author_name: draft.author_name,
            first_publish_year: draft.first_publish_year,
            cover_id: draft.cover_id,
            cover_url: draft.cover_url,
            isbn: draft.isbn,
            publisher: draft.publisher,
            language: draft.language,
            pages: draft.pages,
            rating: draft.rating.unwrap_or(0),
            status: draft.status.unwrap_or_else(default_status),
            progress: draft.progress.unwrap_or(0.0),
            notes: draft.notes.unwrap_or_default(),
            categories: draft.categories.unwrap_or_default(),
            saved_at: draft.saved_at,
            updated_at: draft.updated_at,
            imported_at: None,
            extra,
        }
    }

    /// Mark the record as freshly saved.
    pub fn stamp_saved(&mut self, now: DateTime<Utc>) {
        self.saved_at = Some(now);
        self.updated_at = Some(now);
    }

    /// Merge a partial update. Only fields present in the patch change;
    /// `updated_at` is always restamped.
    pub fn apply_patch(&mut self, patch: BookPatch, now: DateTime<Utc>) {
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(progress) = patch.progress {
            self.progress = progress;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(categories) = patch.categories {
            self.categories = categories;
        }
        self.updated_at = Some(now);
    }
}
