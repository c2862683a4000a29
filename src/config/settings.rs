//! Run settings for todo-app.
//!
//! There is no config file; everything comes from command-line flags.

use clap::ValueEnum;
use colored::control;

use crate::cli::args::{Cli, OutputFormat};
use crate::core::DueDateFormat;

/// Settings for a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Confirmation format.
    pub output: OutputFormat,
    /// Color output setting.
    pub color: ColorSetting,
    /// Accepted spelling of the `due` field.
    pub date_format: DueDateFormat,
    /// Number of `-v` flags given.
    pub verbosity: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            color: ColorSetting::default(),
            date_format: DueDateFormat::ISO_DATE,
            verbosity: 0,
        }
    }
}

impl Settings {
    /// Build settings from parsed flags.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            output: cli.output,
            color: cli.color,
            verbosity: cli.verbose,
            ..Self::default()
        }
    }

    /// Apply the color setting to the `colored` crate.
    ///
    /// `Auto` leaves detection to `colored`, which honors `NO_COLOR` and
    /// `CLICOLOR`.
    pub fn apply_color(&self) {
        match self.color {
            ColorSetting::Auto => control::unset_override(),
            ColorSetting::Always => control::set_override(true),
            ColorSetting::Never => control::set_override(false),
        }
    }

    /// Whether colored output is on after [`Settings::apply_color`].
    #[must_use]
    pub fn color_enabled(&self) -> bool {
        match self.color {
            ColorSetting::Auto => control::SHOULD_COLORIZE.should_colorize(),
            ColorSetting::Always => true,
            ColorSetting::Never => false,
        }
    }

    /// Log filter directive for the configured verbosity.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Color output setting.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}
