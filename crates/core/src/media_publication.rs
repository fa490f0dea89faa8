//! Media publication type enumeration and date formatting.

use chrono::{Datelike, NaiveDate};

use crate::error::CoreError;

/// Maximum length of a publication title, author, or source.
pub const MAX_TITLE_LEN: usize = 255;

/// Maximum length of the short description.
pub const MAX_SHORT_LEN: usize = 500;

/// Russian month names in the genitive case, used for "day month year"
/// date phrases. Indexed by `month - 1`.
const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Type of a media publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationType {
    Article,
    Interview,
    Report,
    Photo,
    Video,
}

impl PublicationType {
    /// Parse from the database `publication_type` column.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "article" => Ok(Self::Article),
            "interview" => Ok(Self::Interview),
            "report" => Ok(Self::Report),
            "photo" => Ok(Self::Photo),
            "video" => Ok(Self::Video),
            other => Err(CoreError::Validation(format!(
                "Invalid publication type '{other}'. Must be one of: \
                 article, interview, report, photo, video"
            ))),
        }
    }

    /// The database representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Interview => "interview",
            Self::Report => "report",
            Self::Photo => "photo",
            Self::Video => "video",
        }
    }

    /// Human-readable display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Article => "Статья",
            Self::Interview => "Интервью",
            Self::Report => "Репортаж",
            Self::Photo => "Фоторепортаж",
            Self::Video => "Видеоматериал",
        }
    }
}

/// Format a publication date as `"<day> <genitive month> <year>"`,
/// e.g. 2024-11-21 becomes `"21 ноября 2024"`. Computed on read, never
/// stored.
pub fn formatted_date(date: NaiveDate) -> String {
    let month = MONTHS_GENITIVE[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- PublicationType -----------------------------------------------------

    #[test]
    fn type_round_trip() {
        for name in ["article", "interview", "report", "photo", "video"] {
            let ty = PublicationType::from_name(name).unwrap();
            assert_eq!(ty.as_str(), name);
        }
    }

    #[test]
    fn unknown_type_rejected() {
        assert!(PublicationType::from_name("podcast").is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(PublicationType::Article.label(), "Статья");
        assert_eq!(PublicationType::Photo.label(), "Фоторепортаж");
    }

    // -- formatted_date ------------------------------------------------------

    #[test]
    fn november_date() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 21).unwrap();
        assert_eq!(formatted_date(date), "21 ноября 2024");
    }

    #[test]
    fn first_and_last_months() {
        let jan = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(formatted_date(jan), "1 января 2025");
        let dec = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(formatted_date(dec), "31 декабря 2023");
    }
}
