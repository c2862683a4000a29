//! Error types for todo-app.

use thiserror::Error;

/// Errors produced while reading, validating, or printing a todo item.
#[derive(Error, Debug)]
pub enum TodoError {
    /// The `--add` value is not JSON, or not an object with string fields.
    #[error("Invalid JSON passed to ./todo-app")]
    MalformedInput(#[source] serde_json::Error),

    /// The `due` field is set but does not match the due-date format.
    #[error("Badly formed due date.")]
    MalformedDate {
        /// The rejected text.
        input: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    /// The parsed item could not be serialized for display.
    #[error("Failed to render item: {0}")]
    Render(#[source] serde_json::Error),

    /// Writing the confirmation to the output stream failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// Logging or color setup failed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TodoError {
    /// Whether the error was caused by the user's input rather than the environment.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::MalformedInput(_) | Self::MalformedDate { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_messages_are_fixed() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert_eq!(
            TodoError::MalformedInput(err).to_string(),
            "Invalid JSON passed to ./todo-app"
        );

        let err = TodoError::MalformedDate {
            input: "2020/02/02".to_string(),
            source: None,
        };
        assert_eq!(err.to_string(), "Badly formed due date.");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_io_error_is_not_input_error() {
        let err = TodoError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "closed",
        ));
        assert!(!err.is_input_error());
        assert!(err.to_string().contains("closed"));
    }
}
