//! Domain logic for the fund's public site content: events, media
//! publications, projects, and the polymorphic "interesting" section
//! (videos, music, articles) with tags.
//!
//! This crate has no internal dependencies and no I/O. It owns the
//! closed status/type enumerations with their display labels, slug
//! generation, field validation, upload-path conventions, and the
//! derived display helpers (formatted dates, project duration). The
//! persistence layer in `qazyna-db` calls into it before every write.

pub mod error;
pub mod event;
pub mod interesting;
pub mod media_publication;
pub mod project;
pub mod slug;
pub mod types;
pub mod upload;
pub mod validate;
