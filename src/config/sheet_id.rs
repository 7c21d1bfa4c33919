// src/config/sheet_id.rs
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ConfigError;

static SHEET_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/spreadsheets/d/([A-Za-z0-9_-]+)").expect("invalid sheet id regex")
});

/// Extract the spreadsheet ID from a URL, or return the input unchanged if it
/// is already a bare ID (no path or query characters).
///
/// Pure and deterministic; failures carry the offending input.
pub fn extract_sheet_id(url_or_id: &str) -> Result<String, ConfigError> {
    if url_or_id.is_empty() {
        return Err(ConfigError::MissingSheetRef);
    }

    // Already just an ID: nothing URL-ish about it.
    if !url_or_id.contains(['/', '?']) {
        return Ok(url_or_id.to_string());
    }

    // https://docs.google.com/spreadsheets/d/{ID}/edit...
    if let Some(caps) = SHEET_ID_RE.captures(url_or_id) {
        if let Some(id) = caps.get(1) {
            return Ok(id.as_str().to_string());
        }
    }

    Err(ConfigError::InvalidSheetRef(url_or_id.to_string()))
}
