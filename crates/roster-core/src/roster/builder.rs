//! Builder for creating and configuring Roster instances.

use std::path::{Path, PathBuf};

use super::Roster;
use crate::{
    db::SqliteProvider,
    error::{RosterError, Result},
};

/// Builder for creating and configuring Roster instances.
#[derive(Debug, Clone, Default)]
pub struct RosterBuilder {
    database_path: Option<PathBuf>,
}

impl RosterBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/roster/roster.db` or `~/.local/share/roster/roster.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured roster, creating the database directory and the
    /// tables if needed.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::FileSystem` if the database directory cannot be
    /// created.
    /// Returns `RosterError::Storage` if the schema cannot be initialized.
    pub fn build(self) -> Result<Roster> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| RosterError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let provider = SqliteProvider::new(&db_path);
        provider.bootstrap()?;

        Ok(Roster::new(provider))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("roster")
            .place_data_file("roster.db")
            .map_err(|e| RosterError::XdgDirectory(e.to_string()))
    }
}
