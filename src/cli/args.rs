use std::ffi::OsString;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::ColorSetting;

/// Item used when `--add` is not given.
pub const DEFAULT_ITEM: &str = r#"{"todo": "Something worth doing"}"#;

#[derive(Parser, Debug)]
#[command(name = "todo-app")]
#[command(about = "Validate a todo item given as JSON and echo it back")]
#[command(long_about = "todo-app - a basic CLI todo app

Reads one todo item from the --add flag, checks it, and prints what was
understood. Nothing is stored.

EXAMPLES:
  todo-app -add '{\"todo\": \"Practice Go\", \"due\": \"2020-02-02\"}'
  todo-app --add '{\"todo\": \"Write spec\"}' --output json

EXIT STATUS:
  0  the item was accepted
  1  invalid JSON, a badly formed due date, or output could not be written")]
#[command(version)]
pub struct Cli {
    /// Item to add to the todo list
    ///
    /// A JSON object: {"todo": task to do, "due": date due (YYYY-MM-DD)}.
    /// The single-dash form -add is also accepted.
    #[arg(short, long, value_name = "JSON", default_value = DEFAULT_ITEM)]
    pub add: String,

    /// Output format for the confirmation
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub output: OutputFormat,

    /// When to color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorSetting,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output format for the confirmation.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Labelled, human-readable lines.
    #[default]
    Pretty,
    /// Indented JSON.
    Json,
}

/// Rewrite the single-dash `-add` flag into clap's `--add`.
///
/// Without this, clap would read `-add` as `-a dd`. Arguments after a bare
/// `--` are left alone, as is the program name.
pub fn normalize_legacy_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            let rewritten = match arg.to_str() {
                Some("-add") => Some(OsString::from("--add")),
                Some(s) if s.starts_with("-add=") => Some(OsString::from(format!("-{s}"))),
                _ => None,
            };
            rewritten.unwrap_or(arg)
        })
        .collect()
}
