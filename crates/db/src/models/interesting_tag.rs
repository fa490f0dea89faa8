//! Tag model for interesting materials (many-to-many with articles).

use qazyna_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `interesting_tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InterestingTag {
    pub id: DbId,
    pub name: String,
    pub slug: String,
}

/// DTO for creating a new tag.
///
/// If `slug` is absent or blank it is derived from `name` before the
/// insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInterestingTag {
    pub name: String,
    pub slug: Option<String>,
}
