//! Common interface over the three "interesting materials" variants.
//!
//! Videos, music tracks, and articles live in separate tables but share
//! one detail view. The trait exposes the base attribute set plus the
//! variant's fixed type tag, so the presentation layer can treat the
//! three families uniformly.

use qazyna_core::interesting::{self, InterestingKind};
use qazyna_core::types::DbId;

/// The attribute set shared by every interesting-material variant.
pub trait InterestingItem {
    /// The fixed type tag for this variant's table.
    const KIND: InterestingKind;

    fn id(&self) -> DbId;
    fn title(&self) -> &str;
    fn slug(&self) -> &str;
    fn description(&self) -> &str;
    fn thumbnail(&self) -> Option<&str>;
    fn is_published(&self) -> bool;
    fn views(&self) -> i32;

    /// Detail-page path combining the variant's tag with its slug:
    /// `/interesting/<tag>/<slug>/`.
    fn detail_path(&self) -> String {
        interesting::detail_path(Self::KIND, self.slug())
    }
}

/// Implement [`InterestingItem`] for an entity struct whose base columns
/// follow the shared naming.
macro_rules! impl_interesting_item {
    ($ty:ty, $kind:expr) => {
        impl crate::models::interesting::InterestingItem for $ty {
            const KIND: qazyna_core::interesting::InterestingKind = $kind;

            fn id(&self) -> qazyna_core::types::DbId {
                self.id
            }
            fn title(&self) -> &str {
                &self.title
            }
            fn slug(&self) -> &str {
                &self.slug
            }
            fn description(&self) -> &str {
                &self.description
            }
            fn thumbnail(&self) -> Option<&str> {
                self.thumbnail.as_deref()
            }
            fn is_published(&self) -> bool {
                self.is_published
            }
            fn views(&self) -> i32 {
                self.views
            }
        }
    };
}

pub(crate) use impl_interesting_item;
