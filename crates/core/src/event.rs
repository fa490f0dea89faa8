//! Event status enumeration and field limits.

use crate::error::CoreError;

/// Maximum length of an event title or location.
pub const MAX_TITLE_LEN: usize = 255;

/// Maximum length of the short description and address.
pub const MAX_SHORT_LEN: usize = 500;

/// Status of an event: upcoming or already held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Current,
    Past,
}

impl EventStatus {
    /// Parse from the database `status` column.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "current" => Ok(Self::Current),
            "past" => Ok(Self::Past),
            other => Err(CoreError::Validation(format!(
                "Invalid event status '{other}'. Must be one of: current, past"
            ))),
        }
    }

    /// The database representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Past => "past",
        }
    }

    /// Human-readable display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Current => "Предстоящее",
            Self::Past => "Прошедшее",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trip() {
        assert_eq!(EventStatus::from_name("current").unwrap(), EventStatus::Current);
        assert_eq!(EventStatus::from_name("past").unwrap(), EventStatus::Past);
        assert_eq!(EventStatus::Current.as_str(), "current");
    }

    #[test]
    fn unknown_status_rejected() {
        assert!(EventStatus::from_name("cancelled").is_err());
        assert!(EventStatus::from_name("").is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(EventStatus::Current.label(), "Предстоящее");
        assert_eq!(EventStatus::Past.label(), "Прошедшее");
    }
}
