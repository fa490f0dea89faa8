//! Repository for the `music_tracks` table.

use qazyna_core::error::CoreError;
use qazyna_core::interesting::{validate_audio_file, MAX_TITLE_LEN};
use qazyna_core::slug::resolve_slug;
use qazyna_core::types::DbId;
use qazyna_core::validate::{optional_max_chars, require_non_blank, require_text, MAX_PATH_LEN};
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::music::{CreateMusicTrack, MusicTrack, UpdateMusicTrack};

/// Column list for music_tracks queries.
const COLUMNS: &str = "id, title, slug, description, thumbnail, audio_file, \
    duration_seconds, artist, is_published, views, created_at, updated_at";

/// Provides CRUD operations for music materials.
pub struct MusicRepo;

impl MusicRepo {
    fn validate_create(input: &CreateMusicTrack) -> Result<(), CoreError> {
        require_text("title", &input.title, MAX_TITLE_LEN)?;
        require_non_blank("description", &input.description)?;
        optional_max_chars("artist", input.artist.as_deref(), MAX_TITLE_LEN)?;
        optional_max_chars("thumbnail", input.thumbnail.as_deref(), MAX_PATH_LEN)?;
        optional_max_chars("audio_file", input.audio_file.as_deref(), MAX_PATH_LEN)?;
        if let Some(file) = &input.audio_file {
            validate_audio_file(file)?;
        }
        Ok(())
    }

    fn validate_update(input: &UpdateMusicTrack) -> Result<(), CoreError> {
        optional_max_chars("title", input.title.as_deref(), MAX_TITLE_LEN)?;
        optional_max_chars("artist", input.artist.as_deref(), MAX_TITLE_LEN)?;
        optional_max_chars("thumbnail", input.thumbnail.as_deref(), MAX_PATH_LEN)?;
        optional_max_chars("audio_file", input.audio_file.as_deref(), MAX_PATH_LEN)?;
        if let Some(file) = &input.audio_file {
            validate_audio_file(file)?;
        }
        Ok(())
    }

    /// Create a new music track, returning the created row. A duplicate
    /// slug within this table fails with a conflict error.
    pub async fn create(pool: &PgPool, input: &CreateMusicTrack) -> DbResult<MusicTrack> {
        Self::validate_create(input)?;
        let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
        let query = format!(
            "INSERT INTO music_tracks
                (title, slug, description, thumbnail, audio_file,
                 duration_seconds, artist, is_published)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        let track = sqlx::query_as::<_, MusicTrack>(&query)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.description)
            .bind(&input.thumbnail)
            .bind(&input.audio_file)
            .bind(input.duration_seconds)
            .bind(&input.artist)
            .bind(input.is_published.unwrap_or(true))
            .fetch_one(pool)
            .await?;
        tracing::debug!(track_id = track.id, slug = %track.slug, "Created music track");
        Ok(track)
    }

    /// Find a music track by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<MusicTrack>> {
        let query = format!("SELECT {COLUMNS} FROM music_tracks WHERE id = $1");
        let track = sqlx::query_as::<_, MusicTrack>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(track)
    }

    /// Find a music track by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> DbResult<Option<MusicTrack>> {
        let query = format!("SELECT {COLUMNS} FROM music_tracks WHERE slug = $1");
        let track = sqlx::query_as::<_, MusicTrack>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await?;
        Ok(track)
    }

    /// List music tracks, newest first, optionally only published ones.
    pub async fn list(
        pool: &PgPool,
        is_published: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> DbResult<Vec<MusicTrack>> {
        let query = format!(
            "SELECT {COLUMNS} FROM music_tracks
             WHERE ($1::BOOL IS NULL OR is_published = $1)
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        let tracks = sqlx::query_as::<_, MusicTrack>(&query)
            .bind(is_published)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        Ok(tracks)
    }

    /// Update a music track. Omitted fields are left unchanged; the slug
    /// is not part of the update column set.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateMusicTrack) -> DbResult<MusicTrack> {
        Self::validate_update(input)?;
        let query = format!(
            "UPDATE music_tracks SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                thumbnail = COALESCE($3, thumbnail),
                audio_file = COALESCE($4, audio_file),
                duration_seconds = COALESCE($5, duration_seconds),
                artist = COALESCE($6, artist),
                is_published = COALESCE($7, is_published),
                updated_at = NOW()
             WHERE id = $8
             RETURNING {COLUMNS}"
        );
        let track = sqlx::query_as::<_, MusicTrack>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.thumbnail)
            .bind(&input.audio_file)
            .bind(input.duration_seconds)
            .bind(&input.artist)
            .bind(input.is_published)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "MusicTrack",
                id,
            })?;
        Ok(track)
    }

    /// Increment the view counter, returning the new count.
    pub async fn increment_views(pool: &PgPool, id: DbId) -> DbResult<i32> {
        let views: Option<(i32,)> = sqlx::query_as(
            "UPDATE music_tracks SET views = views + 1 WHERE id = $1 RETURNING views",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        views.map(|(v,)| v).ok_or_else(|| {
            CoreError::NotFound {
                entity: "MusicTrack",
                id,
            }
            .into()
        })
    }

    /// Delete a music track by ID.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM music_tracks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: "MusicTrack",
                id,
            }
            .into());
        }
        Ok(())
    }
}
