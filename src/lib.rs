//! todo-app - a basic CLI todo app
//!
//! Reads one todo item as JSON, validates it (including an optional
//! `YYYY-MM-DD` due date), and echoes back what was understood.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod item;
pub mod logging;
pub mod output;

pub use cli::args::{Cli, OutputFormat};
pub use config::Settings;
pub use error::TodoError;
pub use item::{parse_input, ParsedItem, RawItem};
