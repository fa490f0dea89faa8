//! Music track entity model and DTOs.

use qazyna_core::interesting::InterestingKind;
use qazyna_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::interesting::impl_interesting_item;

/// A row from the `music_tracks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MusicTrack {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub thumbnail: Option<String>,
    /// Reference path to the uploaded file; extension restricted to
    /// mp3/wav at the validation boundary.
    pub audio_file: Option<String>,
    pub duration_seconds: Option<i32>,
    pub artist: Option<String>,
    pub is_published: bool,
    pub views: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl_interesting_item!(MusicTrack, InterestingKind::Music);

/// DTO for creating a new music track.
///
/// If `slug` is absent or blank it is derived from `title` before the
/// insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMusicTrack {
    pub title: String,
    pub slug: Option<String>,
    pub description: String,
    pub thumbnail: Option<String>,
    pub audio_file: Option<String>,
    pub duration_seconds: Option<i32>,
    pub artist: Option<String>,
    /// Defaults to true if omitted.
    pub is_published: Option<bool>,
}

/// DTO for updating a music track. The slug is immutable and
/// deliberately absent here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMusicTrack {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub audio_file: Option<String>,
    pub duration_seconds: Option<i32>,
    pub artist: Option<String>,
    pub is_published: Option<bool>,
}
