//! Add command implementation.
//!
//! Parses the `--add` value and writes the confirmation.

use std::io::Write;

use tracing::info;

use crate::config::Settings;
use crate::error::TodoError;
use crate::item::parse_input;
use crate::output::render;

/// Execute the add command, returning the number of bytes written to `out`.
///
/// # Errors
///
/// Returns an error if the JSON or due date is malformed, or if writing to
/// `out` fails.
pub fn add<W: Write>(raw: &str, settings: &Settings, out: &mut W) -> Result<usize, TodoError> {
    let item = parse_input(raw, &settings.date_format)?;
    info!(has_due = item.has_due_date(), "item accepted");
    render(&item, settings.output, &settings.date_format, out)
}
