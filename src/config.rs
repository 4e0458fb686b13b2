use crossterm::tty::IsTty;
use std::path::PathBuf;

use crate::storage::DEFAULT_FILE_NAME;

/// Environment variable naming the data file.
pub const FILE_ENV: &str = "ENROLLMENTS_FILE";

/// Runtime settings for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_file: PathBuf,
    pub color: bool,
}

impl Settings {
    /// Read `ENROLLMENTS_FILE` (default `Enrollments.json`) and `NO_COLOR`.
    /// Colour is only enabled when stdout is a terminal.
    pub fn from_env() -> Self {
        let raw = std::env::var(FILE_ENV).ok();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self::resolve(raw.as_deref(), no_color, std::io::stdout().is_tty())
    }

    /// Build settings from already-read environment values.
    pub fn resolve(file: Option<&str>, no_color: bool, stdout_is_tty: bool) -> Self {
        Settings {
            data_file: resolve_data_file(file),
            color: !no_color && stdout_is_tty,
        }
    }
}

/// Turn the configured value into a path. Blank means the default file;
/// a leading `~/` is expanded against the home directory.
pub fn resolve_data_file(raw: Option<&str>) -> PathBuf {
    let raw = match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return PathBuf::from(DEFAULT_FILE_NAME),
    };
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}
