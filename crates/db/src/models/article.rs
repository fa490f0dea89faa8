//! Article entity model and DTOs.

use qazyna_core::interesting::InterestingKind;
use qazyna_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::interesting::impl_interesting_item;

/// A row from the `articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub content: String,
    pub author: String,
    pub reading_time_minutes: i32,
    pub is_published: bool,
    pub views: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl_interesting_item!(Article, InterestingKind::Article);

/// DTO for creating a new article.
///
/// If `slug` is absent or blank it is derived from `title` before the
/// insert. Tags are attached separately via `ArticleRepo::set_tags`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArticle {
    pub title: String,
    pub slug: Option<String>,
    pub description: String,
    pub thumbnail: Option<String>,
    pub content: String,
    pub author: String,
    /// Defaults to 5 if omitted.
    pub reading_time_minutes: Option<i32>,
    /// Defaults to true if omitted.
    pub is_published: Option<bool>,
}

/// DTO for updating an article. The slug is immutable and deliberately
/// absent here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub reading_time_minutes: Option<i32>,
    pub is_published: Option<bool>,
}
