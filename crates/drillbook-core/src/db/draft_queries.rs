//! Editor draft storage.
//!
//! A draft is a serialized [`ProgramDocument`]; only the columns needed for
//! listing are kept outside the JSON.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::utils::{id_column, json_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{DraftSummary, ProgramDocument},
};

const INSERT_DRAFT_SQL: &str = "INSERT INTO drafts (title, program_id, duration, document, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?5)";
const UPDATE_DRAFT_SQL: &str = "UPDATE drafts SET title = ?1, program_id = ?2, duration = ?3, document = ?4, updated_at = ?5 WHERE id = ?6";
const SELECT_DRAFT_SQL: &str = "SELECT document FROM drafts WHERE id = ?1";
const SELECT_DRAFT_SUMMARIES_SQL: &str =
    "SELECT id, title, program_id, duration, updated_at FROM drafts ORDER BY updated_at DESC, id DESC";
const DELETE_DRAFT_SQL: &str = "DELETE FROM drafts WHERE id = ?1";

impl super::Database {
    /// Stores a new draft and returns its ID.
    pub fn create_draft(&mut self, document: &ProgramDocument) -> Result<u64> {
        let json = serde_json::to_string(document)?;
        let now = Timestamp::now().to_string();

        self.connection
            .execute(
                INSERT_DRAFT_SQL,
                params![
                    &document.title,
                    document.program_id().map(|id| id as i64),
                    document.duration(),
                    &json,
                    &now
                ],
            )
            .db_context("Failed to insert draft")?;

        Ok(self.connection.last_insert_rowid() as u64)
    }

    /// Replaces a draft's document. Returns false when no such draft exists.
    pub fn update_draft(&mut self, id: u64, document: &ProgramDocument) -> Result<bool> {
        let json = serde_json::to_string(document)?;
        let now = Timestamp::now().to_string();

        let updated = self
            .connection
            .execute(
                UPDATE_DRAFT_SQL,
                params![
                    &document.title,
                    document.program_id().map(|id| id as i64),
                    document.duration(),
                    &json,
                    &now,
                    id as i64
                ],
            )
            .db_context("Failed to update draft")?;

        Ok(updated > 0)
    }

    /// Retrieves a draft's document by its ID.
    pub fn get_draft(&self, id: u64) -> Result<Option<ProgramDocument>> {
        self.connection
            .query_row(SELECT_DRAFT_SQL, params![id as i64], |row| {
                json_column::<ProgramDocument>(row, 0)
            })
            .optional()
            .db_context("Failed to query draft")
    }

    /// Lists drafts, most recently edited first.
    pub fn list_drafts(&self) -> Result<Vec<DraftSummary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_DRAFT_SUMMARIES_SQL)
            .db_context("Failed to prepare query")?;

        let drafts = stmt
            .query_map([], |row| {
                Ok(DraftSummary {
                    id: id_column(row, 0)?,
                    title: row.get(1)?,
                    program_id: row.get::<_, Option<i64>>(2)?.map(|id| id as u64),
                    duration: row.get(3)?,
                    updated_at: timestamp_column(row, 4)?,
                })
            })
            .db_context("Failed to query drafts")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch drafts")?;

        Ok(drafts)
    }

    /// Deletes a draft. Returns false when no such draft exists.
    pub fn delete_draft(&mut self, id: u64) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_DRAFT_SQL, params![id as i64])
            .db_context("Failed to delete draft")?;
        Ok(deleted > 0)
    }
}
