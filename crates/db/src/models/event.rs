//! Event entity model and DTOs.

use qazyna_core::event::EventStatus;
use qazyna_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub short_description: String,
    /// Detailed event program; may contain HTML markup.
    pub program: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub location: String,
    pub address: String,
    pub image: Option<String>,
    pub status: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Event {
    /// Whether the event is upcoming.
    pub fn is_current(&self) -> bool {
        self.status == EventStatus::Current.as_str()
    }

    /// Whether the event has already been held.
    pub fn is_past(&self) -> bool {
        self.status == EventStatus::Past.as_str()
    }

    /// Display label for the event status; empty string if unrecognized.
    pub fn status_label(&self) -> &'static str {
        EventStatus::from_name(&self.status)
            .map(EventStatus::label)
            .unwrap_or("")
    }
}

/// DTO for creating a new event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub program: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub location: String,
    pub address: String,
    pub image: Option<String>,
    pub status: String,
    /// Defaults to true if omitted.
    pub is_active: Option<bool>,
}

/// DTO for updating an existing event. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub program: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub image: Option<String>,
    pub status: Option<String>,
    pub is_active: Option<bool>,
}

/// Query filters for listing events.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventFilter {
    pub status: Option<String>,
    pub is_active: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
