// Rust guideline compliant 2026-10-12

//! Command implementations for the Majani CLI.

use crate::output::OutputFormatter;
use chrono::{DateTime, Utc};
use majani_app::CatalogContext;
use majani_core::{Config, Coordinate};
use std::path::PathBuf;

pub mod categories;
pub mod discover;
pub mod give;
pub mod init;
pub mod post;
pub mod recent;
pub mod reserve;
pub mod show;
pub mod similar;

/// State shared by every command invocation.
pub struct CommandContext<'a> {
    /// Directory containing `.majani`, or the current directory when unset.
    pub root: Option<PathBuf>,
    /// Effective configuration.
    pub config: Config,
    /// Formatter for stdout.
    pub formatter: &'a dyn OutputFormatter,
    /// Whether status lines on stderr are colored.
    pub use_color: bool,
    /// Whether stdout is JSON; status lines are suppressed then.
    pub json: bool,
    /// Reference time for posting and relative times.
    pub now: DateTime<Utc>,
}

impl CommandContext<'_> {
    /// Locates the catalog for this invocation.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog has not been initialized.
    pub fn catalog(&self) -> anyhow::Result<CatalogContext> {
        Ok(CatalogContext::discover(self.root.as_deref())?)
    }

    /// Caller position: explicit coordinates, or the configured default origin.
    ///
    /// # Errors
    ///
    /// Returns an error if only one of `lat`/`lon` is given or the position is out of range.
    pub fn origin(&self, lat: Option<f64>, lon: Option<f64>) -> anyhow::Result<Coordinate> {
        let origin = match (lat, lon) {
            (Some(lat), Some(lon)) => Coordinate::new(lat, lon),
            (None, None) => self.config.default_origin,
            _ => {
                return Err(majani_app::AppError::InvalidInput(
                    "--lat and --lon must be given together".to_string(),
                )
                .into())
            }
        };
        origin.validate()?;
        Ok(origin)
    }

    /// Prints a status line on stderr unless output is JSON.
    pub fn success(&self, message: &str) {
        if !self.json {
            crate::terminal::print_success(message, self.use_color);
        }
    }
}
