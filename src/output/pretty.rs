use std::fmt::Write;

use colored::Colorize;

use crate::core::DueDateFormat;
use crate::item::ParsedItem;

use super::HEADER;

/// Format an item as an indented, labelled block.
pub fn format_item_pretty(item: &ParsedItem, date_format: &DueDateFormat) -> String {
    let due = item
        .due
        .map_or_else(|| "none".dimmed().to_string(), |date| date_format.format(date));

    let mut output = format!("{HEADER}\n\n");
    writeln!(output, "\t{} {}", "Task:".cyan().bold(), item.todo).ok();
    writeln!(output, "\t{}  {due}", "Due:".yellow()).ok();
    output
}
