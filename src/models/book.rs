//! Book (catalog entry) model and related types.
//!
//! The list query types implement the lenient defaulting the API contract
//! requires: an unparsable page falls back to 1 and an unknown search field
//! falls back to title, instead of rejecting the request.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Fixed page size for the book list.
pub const ITEMS_PER_PAGE: i64 = 10;

/// Searchable columns of the book list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    #[default]
    Title,
    Author,
}

impl SearchField {
    /// Column name in the books table. Values are fixed here, never caller input.
    pub fn column(self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
        }
    }
}

impl From<&str> for SearchField {
    fn from(s: &str) -> Self {
        match s {
            "author" => SearchField::Author,
            _ => SearchField::Title,
        }
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchField::Title => write!(f, "title"),
            SearchField::Author => write!(f, "author"),
        }
    }
}

/// Book record (DB + API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One page of the book list plus the total match count.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookList {
    pub books: Vec<Book>,
    /// Count of all records matching the filter, independent of the page window
    pub total_count: i64,
}

/// Create book request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    pub price: Option<Decimal>,
    pub details: Option<String>,
    /// Creation time override; the server assigns the current time when absent
    pub created_at: Option<DateTime<Utc>>,
}

/// Book list query parameters (API)
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct BookQuery {
    /// Page number, starting at 1
    #[serde(deserialize_with = "lenient_page")]
    #[param(value_type = Option<i64>)]
    pub page: Option<i64>,
    /// Case-insensitive substring filter; empty matches every record
    pub search_term: Option<String>,
    /// Column searched: "title" (default) or "author"
    #[serde(deserialize_with = "lenient_search_option")]
    #[param(value_type = Option<String>)]
    pub search_option: Option<SearchField>,
}

impl BookQuery {
    /// Effective page: absent, unparsable or non-positive values become 1.
    pub fn page(&self) -> i64 {
        self.page.filter(|p| *p >= 1).unwrap_or(1)
    }

    pub fn search_term(&self) -> &str {
        self.search_term.as_deref().unwrap_or("")
    }

    pub fn search_field(&self) -> SearchField {
        self.search_option.unwrap_or_default()
    }
}

/// Accept numbers or numeric strings for `page`; anything else becomes None.
fn lenient_page<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer) {
        Ok(Some(Raw::Num(n))) => Some(n),
        Ok(Some(Raw::Text(s))) => s.trim().parse().ok(),
        Ok(None) | Err(_) => None,
    })
}

/// Accept any string for `searchOption`; unknown values map to the title field.
fn lenient_search_option<'de, D>(deserializer: D) -> Result<Option<SearchField>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)
        .unwrap_or(None)
        .map(|s| SearchField::from(s.as_str())))
}
