//! Daily note name recognition.
//!
//! # Responsibility
//! - Decide from an artifact base name alone whether a created file is a
//!   daily note.
//!
//! # Invariants
//! - Only base names of the exact shape `YYYY-MM-DD.md` match.
//! - Matching is lexical; `2024-13-99.md` passes because no calendar
//!   validation is applied.

use once_cell::sync::Lazy;
use regex::Regex;

static DAILY_NOTE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}\.md$").expect("valid daily note regex"));

/// Returns true when the base name has the daily note shape.
pub fn is_daily_note_name(name: &str) -> bool {
    DAILY_NOTE_NAME_RE.is_match(name)
}
