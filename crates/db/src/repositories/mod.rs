//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every create path runs
//! core validation first, then resolves the slug (derive-if-absent) for
//! slugged entities, then performs the insert. Update paths never touch
//! the slug column.

pub mod article_repo;
pub mod event_repo;
pub mod interesting_tag_repo;
pub mod media_publication_repo;
pub mod music_repo;
pub mod project_repo;
pub mod video_repo;

pub use article_repo::ArticleRepo;
pub use event_repo::EventRepo;
pub use interesting_tag_repo::InterestingTagRepo;
pub use media_publication_repo::MediaPublicationRepo;
pub use music_repo::MusicRepo;
pub use project_repo::ProjectRepo;
pub use video_repo::VideoRepo;
