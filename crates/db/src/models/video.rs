//! Video material entity model and DTOs.

use qazyna_core::interesting::InterestingKind;
use qazyna_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::interesting::impl_interesting_item;

/// A row from the `videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub thumbnail: Option<String>,
    /// Reference path to the uploaded file; extension restricted to
    /// mp4/mov/avi at the validation boundary.
    pub video_file: Option<String>,
    pub duration_seconds: Option<i32>,
    pub is_published: bool,
    pub views: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl_interesting_item!(Video, InterestingKind::Video);

/// DTO for creating a new video.
///
/// If `slug` is absent or blank it is derived from `title` before the
/// insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVideo {
    pub title: String,
    pub slug: Option<String>,
    pub description: String,
    pub thumbnail: Option<String>,
    pub video_file: Option<String>,
    pub duration_seconds: Option<i32>,
    /// Defaults to true if omitted.
    pub is_published: Option<bool>,
}

/// DTO for updating a video. The slug is immutable and deliberately
/// absent here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVideo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub video_file: Option<String>,
    pub duration_seconds: Option<i32>,
    pub is_published: Option<bool>,
}
