//! Slug generation and validation.
//!
//! Slugs are derived from a human-readable title exactly once, before the
//! first persisted write, and only when the caller supplied no slug of its
//! own. They are never recomputed on update. There is no collision
//! handling here: a derived slug that already exists in the target table
//! surfaces as a unique-constraint conflict from the database.

use crate::error::CoreError;

/// Maximum slug length, matching the `VARCHAR(255)` slug columns.
pub const MAX_SLUG_LEN: usize = 255;

/// Transliterate a single Cyrillic character to its Latin equivalent.
///
/// Covers the Russian alphabet plus the extra Kazakh letters that appear
/// in content titles. Returns `None` for characters outside the table.
fn transliterate(c: char) -> Option<&'static str> {
    let s = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'ё' | 'э' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' | 'ь' => "",
        'ы' => "y",
        'ю' => "yu",
        'я' => "ya",
        // Kazakh additions
        'ә' => "a",
        'ғ' => "g",
        'қ' => "q",
        'ң' => "n",
        'ө' => "o",
        'ұ' | 'ү' => "u",
        'һ' => "h",
        'і' => "i",
        _ => return None,
    };
    Some(s)
}

/// Generate a URL-safe slug from a title.
///
/// Lowercases, transliterates Cyrillic to ASCII, replaces everything else
/// that is not ASCII alphanumeric with hyphens, collapses consecutive
/// hyphens, and trims leading/trailing hyphens. Deterministic: the same
/// title always yields the same slug.
pub fn generate_slug(title: &str) -> String {
    let mut mapped = String::with_capacity(title.len());
    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            mapped.push(c);
        } else if let Some(t) = transliterate(c) {
            mapped.push_str(t);
        } else {
            mapped.push('-');
        }
    }

    // Collapse consecutive hyphens.
    let mut result = String::with_capacity(mapped.len());
    let mut prev_hyphen = false;
    for c in mapped.chars() {
        if c == '-' {
            if !prev_hyphen {
                result.push('-');
            }
            prev_hyphen = true;
        } else {
            result.push(c);
            prev_hyphen = false;
        }
    }

    let trimmed = result.trim_matches('-');
    trimmed.chars().take(MAX_SLUG_LEN).collect()
}

/// Validate an externally supplied slug (non-empty, only lowercase
/// alphanumeric + hyphens, within length limit).
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "Slug must be at most {MAX_SLUG_LEN} characters"
        )));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(
            "Slug must contain only lowercase alphanumeric characters and hyphens".into(),
        ));
    }
    Ok(())
}

/// Resolve the slug to persist for a new record: the supplied slug if
/// present and non-blank, otherwise one derived from the title.
///
/// This is the "derive slug if absent" pre-persistence step shared by
/// every slugged entity. The resulting slug is validated either way.
pub fn resolve_slug(supplied: Option<&str>, title: &str) -> Result<String, CoreError> {
    let slug = match supplied {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => generate_slug(title),
    };
    validate_slug(&slug)?;
    Ok(slug)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
