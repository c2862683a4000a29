//! Core parsing utilities shared by the item pipeline and the renderers.

mod datetime;

pub use datetime::{parse_due_date, to_rfc3339_midnight, DueDateFormat, ZERO_TIME};
