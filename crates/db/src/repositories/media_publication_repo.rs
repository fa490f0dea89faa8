//! Repository for the `media_publications` table.
//!
//! Creation resolves the slug before the insert: a caller-supplied slug
//! wins, otherwise one is derived from the title. The slug is never
//! written again after the first insert.

use qazyna_core::error::CoreError;
use qazyna_core::media_publication::{PublicationType, MAX_SHORT_LEN, MAX_TITLE_LEN};
use qazyna_core::slug::resolve_slug;
use qazyna_core::types::DbId;
use qazyna_core::validate::{optional_max_chars, require_text, MAX_PATH_LEN};
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::media_publication::{
    CreateMediaPublication, MediaPublication, MediaPublicationFilter, UpdateMediaPublication,
};

/// Column list for media_publications queries.
const COLUMNS: &str = "id, title, slug, publication_date, author, source, \
    source_url, short_description, full_content, publication_type, \
    main_image, is_published, created_at, updated_at";

/// Provides CRUD operations for media publications.
pub struct MediaPublicationRepo;

impl MediaPublicationRepo {
    fn validate_create(input: &CreateMediaPublication) -> Result<(), CoreError> {
        require_text("title", &input.title, MAX_TITLE_LEN)?;
        require_text("source", &input.source, MAX_TITLE_LEN)?;
        require_text("short_description", &input.short_description, MAX_SHORT_LEN)?;
        optional_max_chars("author", input.author.as_deref(), MAX_TITLE_LEN)?;
        optional_max_chars("source_url", input.source_url.as_deref(), MAX_PATH_LEN)?;
        optional_max_chars("main_image", input.main_image.as_deref(), MAX_PATH_LEN)?;
        if let Some(ty) = &input.publication_type {
            PublicationType::from_name(ty)?;
        }
        Ok(())
    }

    fn validate_update(input: &UpdateMediaPublication) -> Result<(), CoreError> {
        optional_max_chars("title", input.title.as_deref(), MAX_TITLE_LEN)?;
        optional_max_chars("source", input.source.as_deref(), MAX_TITLE_LEN)?;
        optional_max_chars(
            "short_description",
            input.short_description.as_deref(),
            MAX_SHORT_LEN,
        )?;
        optional_max_chars("author", input.author.as_deref(), MAX_TITLE_LEN)?;
        optional_max_chars("source_url", input.source_url.as_deref(), MAX_PATH_LEN)?;
        optional_max_chars("main_image", input.main_image.as_deref(), MAX_PATH_LEN)?;
        if let Some(ty) = &input.publication_type {
            PublicationType::from_name(ty)?;
        }
        Ok(())
    }

    /// Create a new media publication, returning the created row.
    ///
    /// The publication date defaults to today; the type defaults to
    /// `article`. A duplicate slug fails with a conflict error.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMediaPublication,
    ) -> DbResult<MediaPublication> {
        Self::validate_create(input)?;
        let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
        let query = format!(
            "INSERT INTO media_publications
                (title, slug, publication_date, author, source, source_url,
                 short_description, full_content, publication_type,
                 main_image, is_published)
             VALUES ($1, $2, COALESCE($3, CURRENT_DATE), $4, $5, $6, $7, $8,
                     COALESCE($9, 'article'), $10, $11)
             RETURNING {COLUMNS}"
        );
        let publication = sqlx::query_as::<_, MediaPublication>(&query)
            .bind(&input.title)
            .bind(&slug)
            .bind(input.publication_date)
            .bind(&input.author)
            .bind(&input.source)
            .bind(&input.source_url)
            .bind(&input.short_description)
            .bind(&input.full_content)
            .bind(&input.publication_type)
            .bind(&input.main_image)
            .bind(input.is_published.unwrap_or(true))
            .fetch_one(pool)
            .await?;
        tracing::debug!(publication_id = publication.id, slug = %publication.slug, "Created media publication");
        Ok(publication)
    }

    /// Find a publication by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<MediaPublication>> {
        let query = format!("SELECT {COLUMNS} FROM media_publications WHERE id = $1");
        let publication = sqlx::query_as::<_, MediaPublication>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(publication)
    }

    /// Find a publication by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> DbResult<Option<MediaPublication>> {
        let query = format!("SELECT {COLUMNS} FROM media_publications WHERE slug = $1");
        let publication = sqlx::query_as::<_, MediaPublication>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await?;
        Ok(publication)
    }

    /// List publications with optional type/published filters, newest
    /// publication date first.
    pub async fn list(
        pool: &PgPool,
        filter: &MediaPublicationFilter,
    ) -> DbResult<Vec<MediaPublication>> {
        let query = format!(
            "SELECT {COLUMNS} FROM media_publications
             WHERE ($1::TEXT IS NULL OR publication_type = $1)
               AND ($2::BOOL IS NULL OR is_published = $2)
             ORDER BY publication_date DESC
             LIMIT $3 OFFSET $4"
        );
        let publications = sqlx::query_as::<_, MediaPublication>(&query)
            .bind(&filter.publication_type)
            .bind(filter.is_published)
            .bind(filter.limit.unwrap_or(100))
            .bind(filter.offset.unwrap_or(0))
            .fetch_all(pool)
            .await?;
        Ok(publications)
    }

    /// Update a publication. Omitted fields are left unchanged; the slug
    /// is not part of the update column set.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMediaPublication,
    ) -> DbResult<MediaPublication> {
        Self::validate_update(input)?;
        let query = format!(
            "UPDATE media_publications SET
                title = COALESCE($1, title),
                publication_date = COALESCE($2, publication_date),
                author = COALESCE($3, author),
                source = COALESCE($4, source),
                source_url = COALESCE($5, source_url),
                short_description = COALESCE($6, short_description),
                full_content = COALESCE($7, full_content),
                publication_type = COALESCE($8, publication_type),
                main_image = COALESCE($9, main_image),
                is_published = COALESCE($10, is_published),
                updated_at = NOW()
             WHERE id = $11
             RETURNING {COLUMNS}"
        );
        let publication = sqlx::query_as::<_, MediaPublication>(&query)
            .bind(&input.title)
            .bind(input.publication_date)
            .bind(&input.author)
            .bind(&input.source)
            .bind(&input.source_url)
            .bind(&input.short_description)
            .bind(&input.full_content)
            .bind(&input.publication_type)
            .bind(&input.main_image)
            .bind(input.is_published)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "MediaPublication",
                id,
            })?;
        Ok(publication)
    }

    /// Delete a publication by ID.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM media_publications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: "MediaPublication",
                id,
            }
            .into());
        }
        Ok(())
    }
}
