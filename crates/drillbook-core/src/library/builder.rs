//! Opening a [`Library`] on a SQLite file.

use std::path::{Path, PathBuf};

use log::debug;

use super::Library;
use crate::error::{DrillbookError, Result};

const DATA_PREFIX: &str = "drillbook";
const DATABASE_FILE: &str = "drillbook.db";

/// Chooses where a [`Library`] keeps its programs, drafts and catalog.
#[derive(Debug, Clone, Default)]
pub struct LibraryBuilder {
    database_path: Option<PathBuf>,
}

impl LibraryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store everything in `path` instead of the per-user data directory.
    ///
    /// `None` leaves the choice unchanged, so an optional CLI flag can be
    /// passed straight through. Without an explicit path the library lives
    /// at `drillbook/drillbook.db` under the user's data home.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Open the library, creating its directory, file and tables on first
    /// use.
    ///
    /// # Errors
    ///
    /// `FileSystem` when the directory cannot be created, `XdgDirectory`
    /// when no data home can be found, and `Database` when the schema
    /// cannot be applied.
    pub async fn build(self) -> Result<Library> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => data_home_database()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DrillbookError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        // Opening a connection applies the schema.
        let library = Library::new(db_path);
        library.with_database(|_| Ok(())).await?;

        debug!("Library opened at {}", library.db_path.display());
        Ok(library)
    }
}

fn data_home_database() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix(DATA_PREFIX)
        .place_data_file(DATABASE_FILE)
        .map_err(|e| DrillbookError::XdgDirectory(e.to_string()))
}
