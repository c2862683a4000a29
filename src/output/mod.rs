//! Output formatting for todo-app.
//!
//! Renders a parsed item as the confirmation block printed after a
//! successful add.

mod json;
mod pretty;

use std::io::Write;

use crate::cli::args::OutputFormat;
use crate::core::DueDateFormat;
use crate::error::TodoError;
use crate::item::ParsedItem;

pub use json::format_item_json;
pub use pretty::format_item_pretty;

/// First line of every confirmation.
pub const HEADER: &str = "You entered:";

/// Format an item based on output format.
///
/// # Errors
///
/// Returns `TodoError::Render` if JSON serialization fails.
pub fn format_item(
    item: &ParsedItem,
    format: OutputFormat,
    date_format: &DueDateFormat,
) -> Result<String, TodoError> {
    match format {
        OutputFormat::Pretty => Ok(format_item_pretty(item, date_format)),
        OutputFormat::Json => format_item_json(item),
    }
}

/// Write the confirmation for `item` to `out`, returning the number of bytes written.
///
/// # Errors
///
/// Returns `TodoError::Io` if the sink rejects the write, or
/// `TodoError::Render` if formatting fails.
pub fn render<W: Write>(
    item: &ParsedItem,
    format: OutputFormat,
    date_format: &DueDateFormat,
    out: &mut W,
) -> Result<usize, TodoError> {
    let text = format_item(item, format, date_format)?;
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(text.len())
}
