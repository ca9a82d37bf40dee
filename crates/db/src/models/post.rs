//! Blog post entity model and DTOs.

use devfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `blogs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub author: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub featured_image: Option<String>,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new post.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBlogPost {
    pub title: String,
    /// Derived from `title` if omitted.
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: String,
    /// Defaults to the site author constant if omitted.
    pub author: Option<String>,
    pub category: Option<String>,
    /// Defaults to empty if omitted.
    pub tags: Option<Vec<String>>,
    pub featured_image: Option<String>,
    /// Defaults to `false` (draft) if omitted.
    pub published: Option<bool>,
}

/// DTO for replacing a post's editable fields.
///
/// Full replacement, not a patch: clients re-send their complete form
/// state. Nullable columns (`excerpt`, `category`, `featured_image`) are
/// written exactly as provided, so omitting one clears it; NOT NULL
/// columns with defaults fall back to those defaults when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBlogPost {
    pub title: String,
    /// Derived from `title` if omitted.
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: String,
    pub author: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub featured_image: Option<String>,
    pub published: Option<bool>,
}

/// Optional listing filters, combined with AND. Absent filters match all rows.
#[derive(Debug, Clone, Default)]
pub struct BlogPostFilter {
    pub published: Option<bool>,
    pub category: Option<String>,
}
