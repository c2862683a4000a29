//! Due-date parsing.
//!
//! Due dates are calendar dates with no time of day and no zone. The accepted
//! spelling is described by a [`DueDateFormat`] passed in by the caller, so
//! the parser does not depend on any one literal pattern.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::TodoError;

/// RFC 3339 rendering of the zero time, used when an item has no due date.
pub const ZERO_TIME: &str = "0001-01-01T00:00:00Z";

/// A strict date format: a `chrono` strftime pattern plus a human label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueDateFormat {
    pattern: &'static str,
    label: &'static str,
}

impl DueDateFormat {
    /// `YYYY-MM-DD`, zero-padded.
    pub const ISO_DATE: Self = Self::new("%Y-%m-%d", "YYYY-MM-DD");

    /// Create a format from a strftime pattern and the label shown in help text.
    #[must_use]
    pub const fn new(pattern: &'static str, label: &'static str) -> Self {
        Self { pattern, label }
    }

    /// The strftime pattern.
    #[must_use]
    pub const fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// The human-readable label, e.g. `YYYY-MM-DD`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Format a date using this pattern.
    #[must_use]
    pub fn format(&self, date: NaiveDate) -> String {
        date.format(self.pattern).to_string()
    }
}

impl Default for DueDateFormat {
    fn default() -> Self {
        Self::ISO_DATE
    }
}

/// Parse an optional due date.
///
/// An empty string means "no due date" and yields `Ok(None)`. Anything else
/// must match `format` exactly: chrono accepts unpadded fields and extra
/// year digits, so the parsed date is formatted back and compared with the
/// input.
///
/// # Errors
///
/// Returns `TodoError::MalformedDate` if the text does not match the format
/// or names a date that does not exist.
pub fn parse_due_date(input: &str, format: &DueDateFormat) -> Result<Option<NaiveDate>, TodoError> {
    if input.is_empty() {
        return Ok(None);
    }

    let date = NaiveDate::parse_from_str(input, format.pattern()).map_err(|e| {
        debug!(input, error = %e, "due date rejected by parser");
        TodoError::MalformedDate {
            input: input.to_string(),
            source: Some(e),
        }
    })?;

    if format.format(date) != input {
        debug!(input, "due date is not in canonical {} form", format.label());
        return Err(TodoError::MalformedDate {
            input: input.to_string(),
            source: None,
        });
    }

    Ok(Some(date))
}

/// RFC 3339 rendering of a due date at midnight UTC, or [`ZERO_TIME`] when absent.
#[must_use]
pub fn to_rfc3339_midnight(due: Option<NaiveDate>) -> String {
    due.map_or_else(
        || ZERO_TIME.to_string(),
        |date| format!("{}T00:00:00Z", date.format("%Y-%m-%d")),
    )
}
