//! Database operations and SQLite management for the local store.
//!
//! This module backs every collaborator boundary of the editor with a single
//! SQLite file: saved programs (as wire payloads), the routine catalog, video
//! descriptors and editor drafts. Each query file extends [`Database`] with
//! the operations for one table.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod draft_queries;
pub mod program_queries;
pub mod routine_queries;
pub mod schema;
pub mod utils;
pub mod video_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
