//! Locale identifier handling

use breakiter_core::{BreakError, Result};
use icu_locid::Locale;

/// Parse a caller-supplied locale identifier.
///
/// Accepts BCP-47 (`en-US`) and ICU/POSIX spellings (`en_US`,
/// `en_US.UTF-8`, `de@collation=phonebook`). The empty string and `root`
/// select the root locale.
pub fn parse_locale(identifier: &str) -> Result<Locale> {
    let trimmed = identifier.trim();
    let mut base = trimmed
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('_', "-");

    if base.is_empty() || base.eq_ignore_ascii_case("root") {
        base = String::from("und");
    }

    base.parse::<Locale>()
        .map_err(|e| BreakError::InvalidLocale {
            locale: identifier.to_string(),
            reason: e.to_string(),
        })
}
