//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Slugs are never part of an update DTO: they are assigned once at
//! creation and immutable afterwards.

pub mod article;
pub mod event;
pub mod interesting;
pub mod interesting_tag;
pub mod media_publication;
pub mod music;
pub mod project;
pub mod video;
