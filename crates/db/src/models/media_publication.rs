//! Media publication entity model and DTOs.

use chrono::NaiveDate;
use qazyna_core::media_publication::{self, PublicationType};
use qazyna_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `media_publications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MediaPublication {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub publication_date: NaiveDate,
    pub author: Option<String>,
    pub source: String,
    pub source_url: Option<String>,
    pub short_description: String,
    pub full_content: Option<String>,
    pub publication_type: String,
    pub main_image: Option<String>,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MediaPublication {
    /// Publication date as `"<day> <genitive month> <year>"`, e.g.
    /// `"21 ноября 2024"`. Computed on read, never stored.
    pub fn formatted_date(&self) -> String {
        media_publication::formatted_date(self.publication_date)
    }

    /// Display label for the publication type; empty string if unrecognized.
    pub fn type_label(&self) -> &'static str {
        PublicationType::from_name(&self.publication_type)
            .map(PublicationType::label)
            .unwrap_or("")
    }

    /// Detail-page path for this publication.
    pub fn detail_path(&self) -> String {
        format!("/media/{}/", self.slug)
    }
}

/// DTO for creating a new media publication.
///
/// If `slug` is absent or blank it is derived from `title` before the
/// insert; if `publication_date` is absent it defaults to today.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMediaPublication {
    pub title: String,
    pub slug: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub author: Option<String>,
    pub source: String,
    pub source_url: Option<String>,
    pub short_description: String,
    pub full_content: Option<String>,
    /// Defaults to `"article"` if omitted.
    pub publication_type: Option<String>,
    pub main_image: Option<String>,
    /// Defaults to true if omitted.
    pub is_published: Option<bool>,
}

/// DTO for updating a media publication. The slug is immutable and
/// deliberately absent here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMediaPublication {
    pub title: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub author: Option<String>,
    pub source: Option<String>,
    pub source_url: Option<String>,
    pub short_description: Option<String>,
    pub full_content: Option<String>,
    pub publication_type: Option<String>,
    pub main_image: Option<String>,
    pub is_published: Option<bool>,
}

/// Query filters for listing media publications.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaPublicationFilter {
    pub publication_type: Option<String>,
    pub is_published: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
