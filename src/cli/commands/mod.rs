//! Command implementations for todo-app.

mod add;

pub use add::add;
