//! Collaborator boundaries of the editor.
//!
//! The editor only talks to the outside world through these traits: the
//! routine catalog, the video descriptor source, the focus-area enumeration,
//! and the program/draft store. [`crate::library::Library`] implements all of
//! them on top of SQLite; tests can substitute in-memory fakes.

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{
        DraftSummary, FocusAreaCount, ProgramDocument, ProgramSummary, Routine, RoutineExercise,
        RoutinePatch, VideoDescriptor,
    },
    normalize::WireProgram,
};

/// Named reusable exercise templates.
#[async_trait]
pub trait RoutineCatalog: Send + Sync {
    async fn list_routines(&self) -> Result<Vec<Routine>>;

    async fn get_routine(&self, id: u64) -> Result<Routine>;

    async fn create_routine(
        &self,
        name: &str,
        description: Option<&str>,
        exercises: &[RoutineExercise],
    ) -> Result<Routine>;

    async fn update_routine(&self, id: u64, patch: &RoutinePatch) -> Result<Routine>;

    /// Deletes the routine and returns it. Existing references keep their
    /// snapshot.
    async fn delete_routine(&self, id: u64) -> Result<Routine>;
}

/// Searchable video descriptors.
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Descriptors whose title or description matches `query`.
    async fn search_videos(&self, query: &str) -> Result<Vec<VideoDescriptor>>;

    async fn get_video(&self, id: &str) -> Result<VideoDescriptor>;
}

/// Focus-area tags in use, with counts.
#[async_trait]
pub trait FocusAreaSource: Send + Sync {
    async fn focus_areas(&self) -> Result<Vec<FocusAreaCount>>;
}

/// Persistence boundary for saved programs.
#[async_trait]
pub trait ProgramStore: Send + Sync {
    /// Stores the program atomically and returns the canonical saved form.
    ///
    /// A program without an id is inserted; one with an id replaces the
    /// saved program. Failures are reported as retryable where they can be.
    async fn save_program(&self, program: &WireProgram) -> Result<WireProgram>;

    async fn get_program(&self, id: u64) -> Result<WireProgram>;

    async fn list_programs(&self) -> Result<Vec<ProgramSummary>>;

    async fn delete_program(&self, id: u64) -> Result<()>;
}

/// Unsaved editor documents kept between sessions.
#[async_trait]
pub trait DraftStore: Send + Sync {
    /// Inserts a new draft and returns its id.
    async fn create_draft(&self, document: &ProgramDocument) -> Result<u64>;

    async fn update_draft(&self, id: u64, document: &ProgramDocument) -> Result<()>;

    async fn get_draft(&self, id: u64) -> Result<ProgramDocument>;

    async fn list_drafts(&self) -> Result<Vec<DraftSummary>>;

    async fn delete_draft(&self, id: u64) -> Result<()>;
}
