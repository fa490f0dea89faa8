//! The polymorphic "interesting materials" family: videos, music tracks,
//! and articles share one detail view addressed by a fixed type tag plus
//! the item's slug. Slugs are unique per table, not across the family.

use crate::error::CoreError;
use crate::validate::require_extension;

/// Maximum length of an item title or artist/author name.
pub const MAX_TITLE_LEN: usize = 255;

/// Maximum length of a tag name (and its slug).
pub const MAX_TAG_LEN: usize = 100;

/// Allowed extensions for uploaded video files.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi"];

/// Allowed extensions for uploaded audio files.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav"];

/// Which concrete variant of the family a record belongs to.
///
/// Each variant's tag is a fixed literal embedded in the shared detail
/// URL so one route can serve all three backing tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterestingKind {
    Video,
    Music,
    Article,
}

impl InterestingKind {
    /// Parse from a URL path segment or stored discriminator.
    pub fn from_tag(tag: &str) -> Result<Self, CoreError> {
        match tag {
            "video" => Ok(Self::Video),
            "music" => Ok(Self::Music),
            "article" => Ok(Self::Article),
            other => Err(CoreError::Validation(format!(
                "Invalid material type '{other}'. Must be one of: video, music, article"
            ))),
        }
    }

    /// The fixed type tag for this variant.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Music => "music",
            Self::Article => "article",
        }
    }
}

/// Build the detail-page path for an item: `/interesting/<tag>/<slug>/`.
///
/// Consumed by the presentation layer; the pair `(tag, slug)` uniquely
/// addresses one record because slugs are unique within each table.
pub fn detail_path(kind: InterestingKind, slug: &str) -> String {
    format!("/interesting/{}/{}/", kind.tag(), slug)
}

/// Validate a video file reference against the extension allow-list.
pub fn validate_video_file(path: &str) -> Result<(), CoreError> {
    require_extension("video_file", path, VIDEO_EXTENSIONS)
}

/// Validate an audio file reference against the extension allow-list.
pub fn validate_audio_file(path: &str) -> Result<(), CoreError> {
    require_extension("audio_file", path, AUDIO_EXTENSIONS)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- InterestingKind -----------------------------------------------------

    #[test]
    fn kind_round_trip() {
        for tag in ["video", "music", "article"] {
            assert_eq!(InterestingKind::from_tag(tag).unwrap().tag(), tag);
        }
    }

    #[test]
    fn unknown_kind_rejected() {
        assert!(InterestingKind::from_tag("podcast").is_err());
    }

    // -- detail_path ---------------------------------------------------------

    #[test]
    fn detail_path_embeds_tag_and_slug() {
        assert_eq!(
            detail_path(InterestingKind::Video, "kontsert-2024"),
            "/interesting/video/kontsert-2024/"
        );
        assert_eq!(
            detail_path(InterestingKind::Article, "kontsert-2024"),
            "/interesting/article/kontsert-2024/"
        );
    }

    #[test]
    fn same_slug_different_kinds_do_not_collide() {
        let a = detail_path(InterestingKind::Music, "vesna");
        let b = detail_path(InterestingKind::Article, "vesna");
        assert_ne!(a, b);
    }

    // -- file extensions -----------------------------------------------------

    #[test]
    fn video_extensions() {
        assert!(validate_video_file("interesting/videos/clip.mp4").is_ok());
        assert!(validate_video_file("clip.mov").is_ok());
        assert!(validate_video_file("clip.avi").is_ok());
        assert!(validate_video_file("clip.exe").is_err());
        assert!(validate_video_file("clip.mp3").is_err());
    }

    #[test]
    fn audio_extensions() {
        assert!(validate_audio_file("interesting/music/track.mp3").is_ok());
        assert!(validate_audio_file("track.wav").is_ok());
        assert!(validate_audio_file("track.mp4").is_err());
    }
}
