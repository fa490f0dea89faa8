//! Repository for the `events` table.

use qazyna_core::error::CoreError;
use qazyna_core::event::{EventStatus, MAX_SHORT_LEN, MAX_TITLE_LEN};
use qazyna_core::types::DbId;
use qazyna_core::validate::{optional_max_chars, require_non_blank, require_text, MAX_PATH_LEN};
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::event::{CreateEvent, Event, EventFilter, UpdateEvent};

/// Column list for events queries.
const COLUMNS: &str = "id, title, description, short_description, program, \
    start_date, end_date, location, address, image, status, is_active, \
    created_at, updated_at";

/// Provides CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    fn validate_create(input: &CreateEvent) -> Result<(), CoreError> {
        require_text("title", &input.title, MAX_TITLE_LEN)?;
        require_non_blank("description", &input.description)?;
        require_text("short_description", &input.short_description, MAX_SHORT_LEN)?;
        require_text("location", &input.location, MAX_TITLE_LEN)?;
        require_text("address", &input.address, MAX_SHORT_LEN)?;
        optional_max_chars("image", input.image.as_deref(), MAX_PATH_LEN)?;
        EventStatus::from_name(&input.status)?;
        Ok(())
    }

    fn validate_update(input: &UpdateEvent) -> Result<(), CoreError> {
        optional_max_chars("title", input.title.as_deref(), MAX_TITLE_LEN)?;
        optional_max_chars(
            "short_description",
            input.short_description.as_deref(),
            MAX_SHORT_LEN,
        )?;
        optional_max_chars("location", input.location.as_deref(), MAX_TITLE_LEN)?;
        optional_max_chars("address", input.address.as_deref(), MAX_SHORT_LEN)?;
        optional_max_chars("image", input.image.as_deref(), MAX_PATH_LEN)?;
        if let Some(status) = &input.status {
            EventStatus::from_name(status)?;
        }
        Ok(())
    }

    /// Create a new event, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> DbResult<Event> {
        Self::validate_create(input)?;
        let query = format!(
            "INSERT INTO events
                (title, description, short_description, program, start_date,
                 end_date, location, address, image, status, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        let event = sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.short_description)
            .bind(&input.program)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.location)
            .bind(&input.address)
            .bind(&input.image)
            .bind(&input.status)
            .bind(input.is_active.unwrap_or(true))
            .fetch_one(pool)
            .await?;
        tracing::debug!(event_id = event.id, "Created event");
        Ok(event)
    }

    /// Find an event by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Event>> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        let event = sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(event)
    }

    /// List events with optional status/active filters, newest first.
    pub async fn list(pool: &PgPool, filter: &EventFilter) -> DbResult<Vec<Event>> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE ($1::TEXT IS NULL OR status = $1)
               AND ($2::BOOL IS NULL OR is_active = $2)
             ORDER BY start_date DESC
             LIMIT $3 OFFSET $4"
        );
        let events = sqlx::query_as::<_, Event>(&query)
            .bind(&filter.status)
            .bind(filter.is_active)
            .bind(filter.limit.unwrap_or(100))
            .bind(filter.offset.unwrap_or(0))
            .fetch_all(pool)
            .await?;
        Ok(events)
    }

    /// Update an event. Omitted fields are left unchanged.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateEvent) -> DbResult<Event> {
        Self::validate_update(input)?;
        let query = format!(
            "UPDATE events SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                short_description = COALESCE($3, short_description),
                program = COALESCE($4, program),
                start_date = COALESCE($5, start_date),
                end_date = COALESCE($6, end_date),
                location = COALESCE($7, location),
                address = COALESCE($8, address),
                image = COALESCE($9, image),
                status = COALESCE($10, status),
                is_active = COALESCE($11, is_active),
                updated_at = NOW()
             WHERE id = $12
             RETURNING {COLUMNS}"
        );
        let event = sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.short_description)
            .bind(&input.program)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.location)
            .bind(&input.address)
            .bind(&input.image)
            .bind(&input.status)
            .bind(input.is_active)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(CoreError::NotFound { entity: "Event", id })?;
        Ok(event)
    }

    /// Delete an event by ID.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound { entity: "Event", id }.into());
        }
        Ok(())
    }
}
