use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::core::to_rfc3339_midnight;
use crate::error::TodoError;
use crate::item::ParsedItem;

use super::HEADER;

#[derive(Serialize)]
struct ItemView<'a> {
    #[serde(rename = "Todo")]
    todo: &'a str,
    #[serde(rename = "Due")]
    due: String,
}

/// Format an item as tab-indented JSON nested one level under the header.
///
/// The due date is midnight UTC in RFC 3339 form; a missing due date is the
/// zero time.
///
/// # Errors
///
/// Returns `TodoError::Render` if serialization fails.
pub fn format_item_json(item: &ParsedItem) -> Result<String, TodoError> {
    let view = ItemView {
        todo: &item.todo,
        due: to_rfc3339_midnight(item.due),
    };

    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    view.serialize(&mut serializer).map_err(TodoError::Render)?;

    let body = String::from_utf8_lossy(&buf)
        .lines()
        .map(|line| format!("\t{line}"))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!("{HEADER}\n\n{body}\n"))
}
