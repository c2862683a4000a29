//! Command-line surface for todo-app.

pub mod args;
pub mod commands;
