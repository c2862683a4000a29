//! Configuration management for todo-app.

mod settings;

pub use settings::{ColorSetting, Settings};
