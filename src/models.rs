use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::LoadError;

/// Book identifier as sent by the API (numeric ids, occasionally strings)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookId {
    Number(i64),
    Text(String),
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookId::Number(n) => write!(f, "{}", n),
            BookId::Text(s) => f.write_str(s),
        }
    }
}

/// A single book record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub isbn: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    // Extra DTO fields, only shown in the detail popup
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub rent_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub stock: Option<i64>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Book {
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        price: Option<f64>,
        description: impl Into<String>,
    ) -> Self {
        Book {
            id,
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            price,
            description: description.into(),
            rent_price: None,
            stock: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Case-insensitive match of a filter query against title, author
    /// and ISBN. An empty query matches every book.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [&self.title, &self.author, &self.isbn]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// `null` and missing text fields both decode to an empty string
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Prices arrive as JSON numbers, or as strings when the backend writes
/// decimals as text
fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Counts such as stock: integers, integral floats (`3.0`) or numeric
/// strings. Anything else is dropped rather than failing the whole record.
fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    })
}

fn integral(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64).then(|| f as i64)
}

/// Timestamps arrive either as RFC 3339 strings or as epoch seconds
/// (with fractional nanos). Anything else is dropped rather than failing
/// the whole record.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Some(Value::Number(n)) => n.as_f64().and_then(|secs| {
            let whole = secs.trunc() as i64;
            let nanos = ((secs - secs.trunc()) * 1e9).round() as u32;
            Utc.timestamp_opt(whole, nanos.min(999_999_999)).single()
        }),
        _ => None,
    })
}

/// State of the one load performed per mount.
///
/// Starts in `Loading` and settles exactly once into `Loaded` or `Failed`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Vec<Book>),
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Books to render; empty unless loaded
    pub fn books(&self) -> &[Book] {
        match self {
            LoadState::Loaded(books) => books,
            _ => &[],
        }
    }

    /// Loaded books matching a filter query, in payload order
    pub fn visible(&self, query: &str) -> Vec<&Book> {
        self.books().iter().filter(|b| b.matches(query)).collect()
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Apply the load outcome. Returns false (and leaves the state alone)
    /// if the state already settled.
    pub fn settle(&mut self, outcome: Result<Vec<Book>, LoadError>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match outcome {
            Ok(books) => LoadState::Loaded(books),
            Err(e) => LoadState::Failed(e.to_string()),
        };
        true
    }
}
