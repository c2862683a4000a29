use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// A todo item exactly as received on the command line.
///
/// Keys match case-insensitively, with an exact match preferred. A repeated
/// key keeps its last value. Missing and `null` fields both become empty
/// strings, and a top-level `null` is an empty item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawItem {
    pub todo: String,
    pub due: String,
}

impl<'de> Deserialize<'de> for RawItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(fields) = Option::<Map<String, Value>>::deserialize(deserializer)? else {
            return Ok(Self::default());
        };

        Ok(Self {
            todo: string_field(&fields, "todo").map_err(D::Error::custom)?,
            due: string_field(&fields, "due").map_err(D::Error::custom)?,
        })
    }
}

/// A validated todo item, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedItem {
    pub todo: String,
    /// `None` when no due date was supplied.
    pub due: Option<NaiveDate>,
}

impl ParsedItem {
    #[must_use]
    pub const fn has_due_date(&self) -> bool {
        self.due.is_some()
    }
}

fn string_field(fields: &Map<String, Value>, name: &str) -> Result<String, serde_json::Error> {
    let value = fields.get(name).or_else(|| {
        fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    });

    match value {
        Some(value) => Ok(Option::<String>::deserialize(value)?.unwrap_or_default()),
        None => Ok(String::new()),
    }
}
