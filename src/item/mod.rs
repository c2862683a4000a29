//! The input processor: JSON text in, validated [`ParsedItem`] out.
//!
//! Each step returns a `Result`; deciding whether a failure ends the
//! process is left to the binary.

mod types;

use tracing::debug;

use crate::core::{parse_due_date, DueDateFormat};
use crate::error::TodoError;

pub use types::{ParsedItem, RawItem};

impl RawItem {
    /// Deserialize a raw item from JSON text.
    ///
    /// The text must be a JSON object or `null`. `todo` and `due` must be
    /// strings or `null` when present; other keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::MalformedInput` if the text is not valid JSON or
    /// does not have the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, TodoError> {
        debug!(len = raw.len(), "deserializing item");
        serde_json::from_str(raw).map_err(|e| {
            debug!(error = %e, "item rejected");
            TodoError::MalformedInput(e)
        })
    }
}

impl ParsedItem {
    /// Build a parsed item from a raw one, parsing the due date with `format`.
    ///
    /// The task text is copied as-is; an empty task is accepted.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::MalformedDate` if `due` is set but malformed.
    pub fn from_raw(raw: RawItem, format: &DueDateFormat) -> Result<Self, TodoError> {
        let due = parse_due_date(&raw.due, format)?;
        debug!(?due, "parsed due date");
        Ok(Self { todo: raw.todo, due })
    }
}

/// Deserialize and validate one item in a single step.
///
/// # Errors
///
/// Returns `TodoError::MalformedInput` for bad JSON and
/// `TodoError::MalformedDate` for a bad due date.
pub fn parse_input(raw: &str, format: &DueDateFormat) -> Result<ParsedItem, TodoError> {
    let item = RawItem::from_json(raw)?;
    ParsedItem::from_raw(item, format)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn parse(raw: &str) -> Result<ParsedItem, TodoError> {
        parse_input(raw, &DueDateFormat::ISO_DATE)
    }

    #[test]
    fn test_parse_with_due_date() {
        let item = parse(r#"{"todo": "Practice Go", "due": "2020-02-02"}"#).unwrap();
        assert_eq!(item.todo, "Practice Go");
        assert_eq!(item.due, NaiveDate::from_ymd_opt(2020, 2, 2));
        assert!(item.has_due_date());
    }

    #[test]
    fn test_missing_and_empty_due_are_identical() {
        let missing = parse(r#"{"todo": "Write spec"}"#).unwrap();
        let empty = parse(r#"{"todo": "Write spec", "due": ""}"#).unwrap();
        let null = parse(r#"{"todo": "Write spec", "due": null}"#).unwrap();
        assert_eq!(missing, empty);
        assert_eq!(missing, null);
        assert!(!missing.has_due_date());
    }

    #[test]
    fn test_empty_task_is_accepted() {
        let item = parse(r#"{"todo": ""}"#).unwrap();
        assert!(item.todo.is_empty());

        let item = parse("{}").unwrap();
        assert_eq!(item, ParsedItem { todo: String::new(), due: None });
    }

    #[test]
    fn test_task_key_is_ignored() {
        let item = parse(r#"{"todo": "A", "task": "B"}"#).unwrap();
        assert_eq!(item.todo, "A");

        let item = parse(r#"{"task": "Buy milk"}"#).unwrap();
        assert!(item.todo.is_empty());
    }

    #[test]
    fn test_repeated_key_keeps_last_value() {
        let item = parse(r#"{"todo": "a", "todo": "b"}"#).unwrap();
        assert_eq!(item.todo, "b");

        let item = parse(r#"{"todo": "X", "due": "bad", "due": "2020-02-02"}"#).unwrap();
        assert_eq!(item.due, NaiveDate::from_ymd_opt(2020, 2, 2));
    }

    #[test]
    fn test_keys_match_case_insensitively() {
        let item = parse(r#"{"Todo": "A", "DUE": "2020-02-02"}"#).unwrap();
        assert_eq!(item.todo, "A");
        assert_eq!(item.due, NaiveDate::from_ymd_opt(2020, 2, 2));

        let item = parse(r#"{"TODO": "upper", "todo": "exact"}"#).unwrap();
        assert_eq!(item.todo, "exact");
    }

    #[test]
    fn test_top_level_null_is_empty_item() {
        let item = parse("null").unwrap();
        assert_eq!(item, ParsedItem { todo: String::new(), due: None });
    }

    #[test]
    fn test_wrong_type_under_other_casing() {
        let err = parse(r#"{"Due": 20200202}"#).unwrap_err();
        assert!(matches!(err, TodoError::MalformedInput(_)));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let item = parse(r#"{"todo": "X", "priority": 3}"#).unwrap();
        assert_eq!(item.todo, "X");
    }

    #[test]
    fn test_task_preserved_verbatim() {
        let item = parse(r#"{"todo": "  spaced \"quoted\" ünïcode  "}"#).unwrap();
        assert_eq!(item.todo, "  spaced \"quoted\" ünïcode  ");
    }

    #[test]
    fn test_invalid_json() {
        for bad in ["not json", "", "{", r#"{"todo": "X",}"#, "Something worth doing"] {
            let err = parse(bad).unwrap_err();
            assert!(matches!(err, TodoError::MalformedInput(_)), "{bad}");
        }
    }

    #[test]
    fn test_wrong_shape() {
        for bad in [
            r#"{"todo": 42}"#,
            r#"{"todo": "X", "due": 20200202}"#,
            r#"{"todo": ["a"]}"#,
            r#"["todo"]"#,
            r#""todo""#,
        ] {
            let err = parse(bad).unwrap_err();
            assert!(matches!(err, TodoError::MalformedInput(_)), "{bad}");
        }
    }

    #[test]
    fn test_bad_due_date() {
        let err = parse(r#"{"todo": "X", "due": "2020-02-30"}"#).unwrap_err();
        assert!(matches!(err, TodoError::MalformedDate { .. }));
    }

    #[test]
    fn test_from_raw_copies_task() {
        let raw = RawItem {
            todo: "Ship it".to_string(),
            due: "2021-12-31".to_string(),
        };
        let item = ParsedItem::from_raw(raw, &DueDateFormat::ISO_DATE).unwrap();
        assert_eq!(item.todo, "Ship it");
        assert_eq!(item.due, NaiveDate::from_ymd_opt(2021, 12, 31));
    }
}
