//! Routine catalog, video source and focus-area enumeration.

use async_trait::async_trait;
use log::debug;

use super::Library;
use crate::{
    error::{DrillbookError, Result},
    models::{FocusAreaCount, Routine, RoutineExercise, RoutinePatch, VideoDescriptor},
    ports::{FocusAreaSource, RoutineCatalog, VideoSource},
};

#[async_trait]
impl RoutineCatalog for Library {
    async fn list_routines(&self) -> Result<Vec<Routine>> {
        self.with_database(|db| db.list_routines()).await
    }

    async fn get_routine(&self, id: u64) -> Result<Routine> {
        self.with_database(move |db| db.get_routine(id))
            .await?
            .ok_or(DrillbookError::RoutineNotFound { id })
    }

    async fn create_routine(
        &self,
        name: &str,
        description: Option<&str>,
        exercises: &[RoutineExercise],
    ) -> Result<Routine> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(DrillbookError::validation("name").with_reason("Routine name is required"));
        }
        let description = description.map(String::from);
        let exercises = exercises.to_vec();

        let routine = self
            .with_database(move |db| db.create_routine(&name, description.as_deref(), &exercises))
            .await?;
        debug!("create_routine: {} '{}'", routine.id, routine.name);
        Ok(routine)
    }

    async fn update_routine(&self, id: u64, patch: &RoutinePatch) -> Result<Routine> {
        let patch = patch.clone();
        self.with_database(move |db| db.update_routine(id, &patch))
            .await?
            .ok_or(DrillbookError::RoutineNotFound { id })
    }

    async fn delete_routine(&self, id: u64) -> Result<Routine> {
        self.with_database(move |db| db.delete_routine(id))
            .await?
            .ok_or(DrillbookError::RoutineNotFound { id })
    }
}

#[async_trait]
impl VideoSource for Library {
    async fn search_videos(&self, query: &str) -> Result<Vec<VideoDescriptor>> {
        let query = query.to_string();
        self.with_database(move |db| db.search_videos(&query)).await
    }

    async fn get_video(&self, id: &str) -> Result<VideoDescriptor> {
        let id = id.to_string();
        let lookup = id.clone();
        self.with_database(move |db| db.get_video(&lookup))
            .await?
            .ok_or(DrillbookError::VideoNotFound { id })
    }
}

#[async_trait]
impl FocusAreaSource for Library {
    async fn focus_areas(&self) -> Result<Vec<FocusAreaCount>> {
        self.with_database(|db| db.focus_area_counts()).await
    }
}
