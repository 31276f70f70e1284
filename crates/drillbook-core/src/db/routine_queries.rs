//! Routine catalog CRUD operations.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::utils::{id_column, json_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Routine, RoutineExercise, RoutinePatch},
};

const INSERT_ROUTINE_SQL: &str = "INSERT INTO routines (name, description, exercises, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4)";
const SELECT_ROUTINE_SQL: &str = "SELECT id, name, description, exercises, created_at, updated_at FROM routines WHERE id = ?1";
const SELECT_ROUTINES_SQL: &str = "SELECT id, name, description, exercises, created_at, updated_at FROM routines ORDER BY name COLLATE NOCASE, id";
const UPDATE_ROUTINE_SQL: &str = "UPDATE routines SET name = ?1, description = ?2, exercises = ?3, updated_at = ?4 WHERE id = ?5";
const DELETE_ROUTINE_SQL: &str = "DELETE FROM routines WHERE id = ?1";

impl super::Database {
    fn build_routine_from_row(row: &rusqlite::Row) -> rusqlite::Result<Routine> {
        Ok(Routine {
            id: id_column(row, 0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            exercises: json_column(row, 3)?,
            created_at: timestamp_column(row, 4)?,
            updated_at: timestamp_column(row, 5)?,
        })
    }

    /// Creates a routine with the given exercise templates.
    pub fn create_routine(
        &mut self,
        name: &str,
        description: Option<&str>,
        exercises: &[RoutineExercise],
    ) -> Result<Routine> {
        let now = Timestamp::now();
        let exercises_json = serde_json::to_string(exercises)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        tx.execute(
            INSERT_ROUTINE_SQL,
            params![name, description, &exercises_json, now.to_string()],
        )
        .db_context("Failed to insert routine")?;
        let id = tx.last_insert_rowid() as u64;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Routine {
            id,
            name: name.to_string(),
            description: description.map(String::from),
            exercises: exercises.to_vec(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a routine by its ID.
    pub fn get_routine(&self, id: u64) -> Result<Option<Routine>> {
        self.connection
            .query_row(SELECT_ROUTINE_SQL, params![id as i64], Self::build_routine_from_row)
            .optional()
            .db_context("Failed to query routine")
    }

    /// Lists all routines by name.
    pub fn list_routines(&self) -> Result<Vec<Routine>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ROUTINES_SQL)
            .db_context("Failed to prepare query")?;

        let routines = stmt
            .query_map([], Self::build_routine_from_row)
            .db_context("Failed to query routines")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch routines")?;

        Ok(routines)
    }

    /// Applies a patch to a routine. Returns `None` when it does not exist.
    pub fn update_routine(&mut self, id: u64, patch: &RoutinePatch) -> Result<Option<Routine>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let Some(mut routine) = tx
            .query_row(SELECT_ROUTINE_SQL, params![id as i64], Self::build_routine_from_row)
            .optional()
            .db_context("Failed to query routine")?
        else {
            return Ok(None);
        };

        if let Some(name) = &patch.name {
            routine.name = name.clone();
        }
        if let Some(description) = &patch.description {
            routine.description = Some(description.clone()).filter(|d| !d.trim().is_empty());
        }
        if let Some(exercises) = &patch.exercises {
            routine.exercises = exercises.clone();
        }
        routine.updated_at = Timestamp::now();

        tx.execute(
            UPDATE_ROUTINE_SQL,
            params![
                &routine.name,
                routine.description.as_deref(),
                serde_json::to_string(&routine.exercises)?,
                routine.updated_at.to_string(),
                id as i64
            ],
        )
        .db_context("Failed to update routine")?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Some(routine))
    }

    /// Deletes a routine and returns it. Returns `None` when it does not exist.
    pub fn delete_routine(&mut self, id: u64) -> Result<Option<Routine>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let routine = tx
            .query_row(SELECT_ROUTINE_SQL, params![id as i64], Self::build_routine_from_row)
            .optional()
            .db_context("Failed to query routine")?;

        if routine.is_some() {
            tx.execute(DELETE_ROUTINE_SQL, params![id as i64])
                .db_context("Failed to delete routine")?;
        }
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(routine)
    }
}
