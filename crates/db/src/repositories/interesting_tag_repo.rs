//! Repository for the `interesting_tags` table.
//!
//! Tag slugs are derived from the name at creation, same rules as entity
//! slugs. Both name and slug are unique; duplicates fail the write.

use qazyna_core::error::CoreError;
use qazyna_core::interesting::MAX_TAG_LEN;
use qazyna_core::slug::resolve_slug;
use qazyna_core::types::DbId;
use qazyna_core::validate::require_text;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::interesting_tag::{CreateInterestingTag, InterestingTag};

/// Column list for interesting_tags queries.
const COLUMNS: &str = "id, name, slug";

/// Provides CRUD operations for material tags.
pub struct InterestingTagRepo;

impl InterestingTagRepo {
    /// Create a new tag, returning the created row. A duplicate name or
    /// slug fails with a conflict error.
    pub async fn create(pool: &PgPool, input: &CreateInterestingTag) -> DbResult<InterestingTag> {
        require_text("name", &input.name, MAX_TAG_LEN)?;
        let slug = resolve_slug(input.slug.as_deref(), &input.name)?;
        if slug.len() > MAX_TAG_LEN {
            return Err(CoreError::Validation(format!(
                "slug must be at most {MAX_TAG_LEN} characters"
            ))
            .into());
        }
        let query = format!(
            "INSERT INTO interesting_tags (name, slug)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let tag = sqlx::query_as::<_, InterestingTag>(&query)
            .bind(&input.name)
            .bind(&slug)
            .fetch_one(pool)
            .await?;
        tracing::debug!(tag_id = tag.id, slug = %tag.slug, "Created tag");
        Ok(tag)
    }

    /// Find a tag by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<InterestingTag>> {
        let query = format!("SELECT {COLUMNS} FROM interesting_tags WHERE id = $1");
        let tag = sqlx::query_as::<_, InterestingTag>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(tag)
    }

    /// Find a tag by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> DbResult<Option<InterestingTag>> {
        let query = format!("SELECT {COLUMNS} FROM interesting_tags WHERE slug = $1");
        let tag = sqlx::query_as::<_, InterestingTag>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await?;
        Ok(tag)
    }

    /// List all tags ordered by name.
    pub async fn list(pool: &PgPool) -> DbResult<Vec<InterestingTag>> {
        let query = format!("SELECT {COLUMNS} FROM interesting_tags ORDER BY name");
        let tags = sqlx::query_as::<_, InterestingTag>(&query)
            .fetch_all(pool)
            .await?;
        Ok(tags)
    }

    /// Delete a tag by ID. Join-table rows are removed by the
    /// `ON DELETE CASCADE` foreign key.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM interesting_tags WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: "InterestingTag",
                id,
            }
            .into());
        }
        Ok(())
    }
}
