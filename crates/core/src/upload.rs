//! Upload path conventions.
//!
//! Files are stored by the hosting infrastructure; this layer only
//! records the reference path. Each entity family writes under its own
//! prefix so references stay unambiguous.

/// Event images.
pub const EVENTS_PREFIX: &str = "events/";

/// Media publication main images.
pub const MEDIA_PUBLICATIONS_PREFIX: &str = "media_publications/";

/// Project main images.
pub const PROJECTS_PREFIX: &str = "projects/";

/// Thumbnails for all interesting materials.
pub const INTERESTING_THUMBS_PREFIX: &str = "interesting/thumbs/";

/// Uploaded video files.
pub const INTERESTING_VIDEOS_PREFIX: &str = "interesting/videos/";

/// Uploaded audio files.
pub const INTERESTING_MUSIC_PREFIX: &str = "interesting/music/";

/// Join a storage prefix and a bare filename into a reference path.
pub fn upload_path(prefix: &str, filename: &str) -> String {
    format!("{}{}", prefix, filename.trim_start_matches('/'))
}
