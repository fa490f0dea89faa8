//! Repository for the `videos` table.

use qazyna_core::error::CoreError;
use qazyna_core::interesting::{validate_video_file, MAX_TITLE_LEN};
use qazyna_core::slug::resolve_slug;
use qazyna_core::types::DbId;
use qazyna_core::validate::{optional_max_chars, require_non_blank, require_text, MAX_PATH_LEN};
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::video::{CreateVideo, UpdateVideo, Video};

/// Column list for videos queries.
const COLUMNS: &str = "id, title, slug, description, thumbnail, video_file, \
    duration_seconds, is_published, views, created_at, updated_at";

/// Provides CRUD operations for video materials.
pub struct VideoRepo;

impl VideoRepo {
    fn validate_create(input: &CreateVideo) -> Result<(), CoreError> {
        require_text("title", &input.title, MAX_TITLE_LEN)?;
        require_non_blank("description", &input.description)?;
        optional_max_chars("thumbnail", input.thumbnail.as_deref(), MAX_PATH_LEN)?;
        optional_max_chars("video_file", input.video_file.as_deref(), MAX_PATH_LEN)?;
        if let Some(file) = &input.video_file {
            validate_video_file(file)?;
        }
        Ok(())
    }

    fn validate_update(input: &UpdateVideo) -> Result<(), CoreError> {
        optional_max_chars("title", input.title.as_deref(), MAX_TITLE_LEN)?;
        optional_max_chars("thumbnail", input.thumbnail.as_deref(), MAX_PATH_LEN)?;
        optional_max_chars("video_file", input.video_file.as_deref(), MAX_PATH_LEN)?;
        if let Some(file) = &input.video_file {
            validate_video_file(file)?;
        }
        Ok(())
    }

    /// Create a new video, returning the created row. A duplicate slug
    /// within this table fails with a conflict error; the same slug in
    /// another material table is allowed.
    pub async fn create(pool: &PgPool, input: &CreateVideo) -> DbResult<Video> {
        Self::validate_create(input)?;
        let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
        let query = format!(
            "INSERT INTO videos
                (title, slug, description, thumbnail, video_file,
                 duration_seconds, is_published)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let video = sqlx::query_as::<_, Video>(&query)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.description)
            .bind(&input.thumbnail)
            .bind(&input.video_file)
            .bind(input.duration_seconds)
            .bind(input.is_published.unwrap_or(true))
            .fetch_one(pool)
            .await?;
        tracing::debug!(video_id = video.id, slug = %video.slug, "Created video");
        Ok(video)
    }

    /// Find a video by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Video>> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        let video = sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(video)
    }

    /// Find a video by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> DbResult<Option<Video>> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE slug = $1");
        let video = sqlx::query_as::<_, Video>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await?;
        Ok(video)
    }

    /// List videos, newest first, optionally only published ones.
    pub async fn list(
        pool: &PgPool,
        is_published: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> DbResult<Vec<Video>> {
        let query = format!(
            "SELECT {COLUMNS} FROM videos
             WHERE ($1::BOOL IS NULL OR is_published = $1)
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        let videos = sqlx::query_as::<_, Video>(&query)
            .bind(is_published)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        Ok(videos)
    }

    /// Update a video. Omitted fields are left unchanged; the slug is
    /// not part of the update column set.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateVideo) -> DbResult<Video> {
        Self::validate_update(input)?;
        let query = format!(
            "UPDATE videos SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                thumbnail = COALESCE($3, thumbnail),
                video_file = COALESCE($4, video_file),
                duration_seconds = COALESCE($5, duration_seconds),
                is_published = COALESCE($6, is_published),
                updated_at = NOW()
             WHERE id = $7
             RETURNING {COLUMNS}"
        );
        let video = sqlx::query_as::<_, Video>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.thumbnail)
            .bind(&input.video_file)
            .bind(input.duration_seconds)
            .bind(input.is_published)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(CoreError::NotFound { entity: "Video", id })?;
        Ok(video)
    }

    /// Increment the view counter, returning the new count.
    pub async fn increment_views(pool: &PgPool, id: DbId) -> DbResult<i32> {
        let views: Option<(i32,)> =
            sqlx::query_as("UPDATE videos SET views = views + 1 WHERE id = $1 RETURNING views")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        views
            .map(|(v,)| v)
            .ok_or_else(|| CoreError::NotFound { entity: "Video", id }.into())
    }

    /// Delete a video by ID.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound { entity: "Video", id }.into());
        }
        Ok(())
    }
}
