//! Project status enumeration and the duration display helper.

use chrono::{Datelike, NaiveDate};

use crate::error::CoreError;

/// Maximum length of a project title or location.
pub const MAX_TITLE_LEN: usize = 255;

/// Maximum length of the short description.
pub const MAX_SHORT_LEN: usize = 500;

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Current,
    Completed,
    Permanent,
}

impl ProjectStatus {
    /// Parse from the database `status` column.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "current" => Ok(Self::Current),
            "completed" => Ok(Self::Completed),
            "permanent" => Ok(Self::Permanent),
            other => Err(CoreError::Validation(format!(
                "Invalid project status '{other}'. Must be one of: \
                 current, completed, permanent"
            ))),
        }
    }

    /// The database representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Completed => "completed",
            Self::Permanent => "permanent",
        }
    }

    /// Human-readable display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Current => "Текущий проект",
            Self::Completed => "Завершен",
            Self::Permanent => "Постоянный",
        }
    }
}

/// Display label for a raw status value; empty string if unrecognized.
pub fn status_label(status: &str) -> &'static str {
    ProjectStatus::from_name(status)
        .map(ProjectStatus::label)
        .unwrap_or("")
}

/// Format the project's realization period for display:
///
/// - permanent with a start date: `"С <start-year> года"`
/// - completed with both dates: `"<start-year>-<end-year>"`
/// - any status with only a start date: `"С <start-year>"`
/// - otherwise: empty string
pub fn duration(
    status: ProjectStatus,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> String {
    match (status, start_date, end_date) {
        (ProjectStatus::Permanent, Some(start), _) => format!("С {} года", start.year()),
        (ProjectStatus::Completed, Some(start), Some(end)) => {
            format!("{}-{}", start.year(), end.year())
        }
        (_, Some(start), _) => format!("С {}", start.year()),
        _ => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, 6, 15).unwrap()
    }

    // -- ProjectStatus -------------------------------------------------------

    #[test]
    fn status_round_trip() {
        for name in ["current", "completed", "permanent"] {
            assert_eq!(ProjectStatus::from_name(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn unknown_status_rejected() {
        assert!(ProjectStatus::from_name("paused").is_err());
    }

    #[test]
    fn label_lookup() {
        assert_eq!(status_label("completed"), "Завершен");
        assert_eq!(status_label("bogus"), "");
    }

    // -- duration ------------------------------------------------------------

    #[test]
    fn permanent_project() {
        let d = duration(ProjectStatus::Permanent, Some(date(2010)), None);
        assert_eq!(d, "С 2010 года");
    }

    #[test]
    fn completed_project_with_both_dates() {
        let d = duration(ProjectStatus::Completed, Some(date(2015)), Some(date(2020)));
        assert_eq!(d, "2015-2020");
    }

    #[test]
    fn current_project_with_start_only() {
        let d = duration(ProjectStatus::Current, Some(date(2022)), None);
        assert_eq!(d, "С 2022");
    }

    #[test]
    fn completed_project_missing_end_date() {
        let d = duration(ProjectStatus::Completed, Some(date(2015)), None);
        assert_eq!(d, "С 2015");
    }

    #[test]
    fn no_dates_yields_empty() {
        let d = duration(ProjectStatus::Current, None, None);
        assert_eq!(d, "");
    }
}
