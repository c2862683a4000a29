use std::io;

use clap::Parser;
use colored::Colorize;

use todo_app::cli::args::{normalize_legacy_args, Cli};
use todo_app::cli::commands;
use todo_app::config::Settings;
use todo_app::error::TodoError;
use todo_app::logging;

fn main() {
    if let Err(e) = run() {
        if e.is_input_error() {
            tracing::debug!(error = ?e, "input rejected");
        } else {
            tracing::warn!(error = %e, "run failed");
        }
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TodoError> {
    let cli = Cli::parse_from(normalize_legacy_args(std::env::args_os()));
    let settings = Settings::from_cli(&cli);
    settings.apply_color();
    logging::init(&settings)?;

    let mut out = io::stdout().lock();
    commands::add(&cli.add, &settings, &mut out)?;
    Ok(())
}
