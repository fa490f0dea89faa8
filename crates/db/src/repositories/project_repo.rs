//! Repository for the `projects` table.

use qazyna_core::error::CoreError;
use qazyna_core::project::{ProjectStatus, MAX_SHORT_LEN, MAX_TITLE_LEN};
use qazyna_core::slug::resolve_slug;
use qazyna_core::types::DbId;
use qazyna_core::validate::{optional_max_chars, require_text, MAX_PATH_LEN};
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::project::{CreateProject, Project, ProjectFilter, UpdateProject};

/// Column list for projects queries.
const COLUMNS: &str = "id, title, slug, short_description, full_description, \
    status, start_date, end_date, location, main_image, is_featured, \
    created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    fn validate_create(input: &CreateProject) -> Result<(), CoreError> {
        require_text("title", &input.title, MAX_TITLE_LEN)?;
        require_text("short_description", &input.short_description, MAX_SHORT_LEN)?;
        require_text("location", &input.location, MAX_TITLE_LEN)?;
        optional_max_chars("main_image", input.main_image.as_deref(), MAX_PATH_LEN)?;
        if let Some(status) = &input.status {
            ProjectStatus::from_name(status)?;
        }
        Ok(())
    }

    fn validate_update(input: &UpdateProject) -> Result<(), CoreError> {
        optional_max_chars("title", input.title.as_deref(), MAX_TITLE_LEN)?;
        optional_max_chars(
            "short_description",
            input.short_description.as_deref(),
            MAX_SHORT_LEN,
        )?;
        optional_max_chars("location", input.location.as_deref(), MAX_TITLE_LEN)?;
        optional_max_chars("main_image", input.main_image.as_deref(), MAX_PATH_LEN)?;
        if let Some(status) = &input.status {
            ProjectStatus::from_name(status)?;
        }
        Ok(())
    }

    /// Create a new project, returning the created row.
    ///
    /// The status defaults to `current`. A duplicate slug fails with a
    /// conflict error.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> DbResult<Project> {
        Self::validate_create(input)?;
        let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
        let query = format!(
            "INSERT INTO projects
                (title, slug, short_description, full_description, status,
                 start_date, end_date, location, main_image, is_featured)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'current'), $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.short_description)
            .bind(&input.full_description)
            .bind(&input.status)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.location)
            .bind(&input.main_image)
            .bind(input.is_featured.unwrap_or(false))
            .fetch_one(pool)
            .await?;
        tracing::debug!(project_id = project.id, slug = %project.slug, "Created project");
        Ok(project)
    }

    /// Find a project by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Project>> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(project)
    }

    /// Find a project by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> DbResult<Option<Project>> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await?;
        Ok(project)
    }

    /// List projects with optional status/featured filters. Featured
    /// projects come first, then newest start date.
    pub async fn list(pool: &PgPool, filter: &ProjectFilter) -> DbResult<Vec<Project>> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE ($1::TEXT IS NULL OR status = $1)
               AND ($2::BOOL IS NULL OR is_featured = $2)
             ORDER BY is_featured DESC, start_date DESC NULLS LAST
             LIMIT $3 OFFSET $4"
        );
        let projects = sqlx::query_as::<_, Project>(&query)
            .bind(&filter.status)
            .bind(filter.is_featured)
            .bind(filter.limit.unwrap_or(100))
            .bind(filter.offset.unwrap_or(0))
            .fetch_all(pool)
            .await?;
        Ok(projects)
    }

    /// Update a project. Omitted fields are left unchanged; the slug is
    /// not part of the update column set.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateProject) -> DbResult<Project> {
        Self::validate_update(input)?;
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($1, title),
                short_description = COALESCE($2, short_description),
                full_description = COALESCE($3, full_description),
                status = COALESCE($4, status),
                start_date = COALESCE($5, start_date),
                end_date = COALESCE($6, end_date),
                location = COALESCE($7, location),
                main_image = COALESCE($8, main_image),
                is_featured = COALESCE($9, is_featured),
                updated_at = NOW()
             WHERE id = $10
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.short_description)
            .bind(&input.full_description)
            .bind(&input.status)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.location)
            .bind(&input.main_image)
            .bind(input.is_featured)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id,
            })?;
        Ok(project)
    }

    /// Delete a project by ID.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: "Project",
                id,
            }
            .into());
        }
        Ok(())
    }
}
