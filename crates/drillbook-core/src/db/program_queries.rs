//! Saved program storage and listing queries.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use super::utils::{id_column, json_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, DrillbookError, Result},
    models::{FocusArea, FocusAreaCount, ProgramDocument, ProgramSummary},
    normalize::WireProgram,
};

const INSERT_PROGRAM_SQL: &str = "INSERT INTO programs (title, description, focus_area, duration, total_drills, payload, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, '{}', ?6, ?6)";
const UPDATE_PROGRAM_SQL: &str = "UPDATE programs SET title = ?1, description = ?2, focus_area = ?3, duration = ?4, total_drills = ?5, payload = ?6, updated_at = ?7 WHERE id = ?8";
const UPDATE_PROGRAM_PAYLOAD_SQL: &str = "UPDATE programs SET payload = ?1 WHERE id = ?2";
const CHECK_PROGRAM_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM programs WHERE id = ?1)";
const SELECT_PROGRAM_PAYLOAD_SQL: &str = "SELECT payload FROM programs WHERE id = ?1";
const SELECT_PROGRAM_SUMMARIES_SQL: &str = "SELECT id, title, description, focus_area, duration, total_drills, created_at, updated_at FROM programs ORDER BY updated_at DESC, id DESC";
const DELETE_PROGRAM_SQL: &str = "DELETE FROM programs WHERE id = ?1";
const SELECT_DRAFT_DOCUMENT_SQL: &str = "SELECT document FROM drafts WHERE id = ?1";
const LINK_DRAFT_SQL: &str =
    "UPDATE drafts SET program_id = ?1, document = ?2, updated_at = ?3 WHERE id = ?4";
const SELECT_FOCUS_AREA_COUNTS_SQL: &str = "SELECT name, count FROM focus_area_counts";

impl super::Database {
    /// Stores a wire program and returns the canonical saved form.
    ///
    /// A program without an id is inserted; one with an id replaces the
    /// stored payload. The returned program carries the store id and a
    /// duration equal to its week count.
    pub fn save_program(&mut self, program: &WireProgram) -> Result<WireProgram> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        let saved = write_program(&tx, program)?;
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(saved)
    }

    /// Stores a wire program and points draft `draft_id` at it, in one
    /// transaction.
    ///
    /// Either both writes land or neither does.
    pub fn save_draft_program(
        &mut self,
        draft_id: u64,
        program: &WireProgram,
    ) -> Result<WireProgram> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        let saved = write_program(&tx, program)?;

        let mut document = tx
            .query_row(SELECT_DRAFT_DOCUMENT_SQL, params![draft_id as i64], |row| {
                json_column::<ProgramDocument>(row, 0)
            })
            .optional()
            .db_context("Failed to query draft")?
            .ok_or(DrillbookError::DraftNotFound { id: draft_id })?;
        document.program_id = saved.id;

        let json = serde_json::to_string(&document)?;
        tx.execute(
            LINK_DRAFT_SQL,
            params![
                saved.id.map(|id| id as i64),
                &json,
                Timestamp::now().to_string(),
                draft_id as i64
            ],
        )
        .db_context("Failed to link draft to program")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(saved)
    }

    /// Retrieves a saved program by its ID.
    pub fn get_program(&self, id: u64) -> Result<Option<WireProgram>> {
        self.connection
            .query_row(SELECT_PROGRAM_PAYLOAD_SQL, params![id as i64], |row| {
                json_column::<WireProgram>(row, 0)
            })
            .optional()
            .db_context("Failed to query program")
    }

    /// Lists saved programs, most recently updated first.
    pub fn list_programs(&self) -> Result<Vec<ProgramSummary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PROGRAM_SUMMARIES_SQL)
            .db_context("Failed to prepare query")?;

        let summaries = stmt
            .query_map([], |row| {
                Ok(ProgramSummary {
                    id: id_column(row, 0)?,
                    title: row.get(1)?,
                    description: row.get(2)?,
                    focus_area: FocusArea::from(row.get::<_, String>(3)?),
                    duration: row.get(4)?,
                    total_drills: row.get(5)?,
                    created_at: timestamp_column(row, 6)?,
                    updated_at: timestamp_column(row, 7)?,
                })
            })
            .db_context("Failed to query programs")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch programs")?;

        Ok(summaries)
    }

    /// Deletes a saved program. Returns false when no such program exists.
    pub fn delete_program(&mut self, id: u64) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_PROGRAM_SQL, params![id as i64])
            .db_context("Failed to delete program")?;
        Ok(deleted > 0)
    }

    /// Focus areas used by saved programs with their counts.
    pub fn focus_area_counts(&self) -> Result<Vec<FocusAreaCount>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_FOCUS_AREA_COUNTS_SQL)
            .db_context("Failed to prepare query")?;

        let counts = stmt
            .query_map([], |row| {
                Ok(FocusAreaCount {
                    name: row.get(0)?,
                    count: row.get(1)?,
                })
            })
            .db_context("Failed to query focus areas")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch focus areas")?;

        Ok(counts)
    }
}

/// Validates and writes `program` through `conn`, which the caller commits.
fn write_program(conn: &Connection, program: &WireProgram) -> Result<WireProgram> {
    if program.title.trim().is_empty() {
        return Err(DrillbookError::validation("title").with_reason("Title is required"));
    }
    if program.focus_area.trim().is_empty() {
        return Err(
            DrillbookError::validation("focus_area").with_reason("Choose a focus area")
        );
    }
    if program.weeks.is_empty() {
        return Err(DrillbookError::validation("weeks")
            .with_reason("A program needs at least one week"));
    }

    let mut saved = program.clone();
    saved.duration = saved.weeks.len() as u32;
    let total_drills = saved.authored_drill_count() as i64;
    let now = Timestamp::now().to_string();

    match saved.id {
        Some(id) => {
            let exists: bool = conn
                .query_row(CHECK_PROGRAM_EXISTS_SQL, params![id as i64], |row| row.get(0))
                .db_context("Failed to check program existence")?;
            if !exists {
                return Err(DrillbookError::ProgramNotFound { id });
            }

            let payload = serde_json::to_string(&saved)?;
            conn.execute(
                UPDATE_PROGRAM_SQL,
                params![
                    &saved.title,
                    saved.description.as_deref(),
                    &saved.focus_area,
                    saved.duration,
                    total_drills,
                    &payload,
                    &now,
                    id as i64
                ],
            )
            .db_context("Failed to update program")?;
        }
        None => {
            conn.execute(
                INSERT_PROGRAM_SQL,
                params![
                    &saved.title,
                    saved.description.as_deref(),
                    &saved.focus_area,
                    saved.duration,
                    total_drills,
                    &now
                ],
            )
            .db_context("Failed to insert program")?;

            let id = conn.last_insert_rowid() as u64;
            saved.id = Some(id);
            let payload = serde_json::to_string(&saved)?;
            conn.execute(UPDATE_PROGRAM_PAYLOAD_SQL, params![&payload, id as i64])
                .db_context("Failed to store program payload")?;
        }
    }

    Ok(saved)
}

