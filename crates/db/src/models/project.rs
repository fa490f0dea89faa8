//! Project entity model and DTOs.

use chrono::NaiveDate;
use qazyna_core::project::{self, ProjectStatus};
use qazyna_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub full_description: Option<String>,
    pub status: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location: String,
    pub main_image: Option<String>,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// Realization period for display, e.g. `"С 2010 года"` or
    /// `"2015-2020"`. Empty string when no dates are set.
    pub fn duration(&self) -> String {
        match ProjectStatus::from_name(&self.status) {
            Ok(status) => project::duration(status, self.start_date, self.end_date),
            Err(_) => String::new(),
        }
    }

    /// Display label for the project status; empty string if unrecognized.
    pub fn status_label(&self) -> &'static str {
        project::status_label(&self.status)
    }

    /// Detail-page path for this project.
    pub fn detail_path(&self) -> String {
        format!("/projects/{}/", self.slug)
    }
}

/// DTO for creating a new project.
///
/// If `slug` is absent or blank it is derived from `title` before the
/// insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub slug: Option<String>,
    pub short_description: String,
    pub full_description: Option<String>,
    /// Defaults to `"current"` if omitted.
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location: String,
    pub main_image: Option<String>,
    /// Defaults to false if omitted.
    pub is_featured: Option<bool>,
}

/// DTO for updating a project. The slug is immutable and deliberately
/// absent here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub main_image: Option<String>,
    pub is_featured: Option<bool>,
}

/// Query filters for listing projects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFilter {
    pub status: Option<String>,
    pub is_featured: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
