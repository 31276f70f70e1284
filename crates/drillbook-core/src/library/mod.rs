//! SQLite-backed implementation of every editor collaborator.
//!
//! [`Library`] is the local stand-in for the remote persistence service. It
//! implements the boundary traits in [`crate::ports`] (routine catalog, video
//! source, focus areas, program store, draft store) and adds handler methods
//! that take [`crate::params`] structures and return display wrappers for the
//! CLI.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Port impls    │    │    Database     │
//! │  (handlers)     │───▶│ (catalog,       │───▶│   (via db/)     │
//! │                 │    │  store)         │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Chooses the database file and opens a [`Library`] on it
//! - [`catalog`]: Routine catalog, video source and focus-area enumeration
//! - [`store`]: Saved programs and editor drafts
//! - [`handlers`]: Parameter-driven operations returning display wrappers
//!
//! Every call opens its own connection inside
//! [`tokio::task::spawn_blocking`]; no connection is shared across tasks.
//!
//! # Examples
//!
//! ```rust,no_run
//! use drillbook_core::{ports::RoutineCatalog, LibraryBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let library = LibraryBuilder::new()
//!     .with_database_path(Some("drillbook.db"))
//!     .build()
//!     .await?;
//!
//! let routines = library.list_routines().await?;
//! println!("{} routines in the catalog", routines.len());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{DrillbookError, Result},
};

pub mod builder;
pub mod catalog;
pub mod handlers;
pub mod store;


pub use builder::LibraryBuilder;

/// Local library of programs, routines, videos and drafts.
pub struct Library {
    pub(crate) db_path: PathBuf,
}

impl Library {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite file backing this library.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Run `f` against a fresh connection on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(|e| DrillbookError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
