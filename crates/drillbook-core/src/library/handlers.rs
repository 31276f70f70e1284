//! Library handler operations that return formatted wrapper types.
//!
//! These take [`crate::params`] structures, validate them, call the port
//! implementations and wrap the outcome for display. Front ends call these
//! instead of the ports when they want rendered output.

use log::debug;

use super::{store::DraftProgramStore, Library};
use crate::{
    display::{
        CreateResult, DeleteResult, Drafts, FocusAreas, ProgramSummaries, Routines, UpdateResult,
        Videos,
    },
    editor::{Editor, EditorOptions},
    error::{DrillbookError, Result},
    ids::SequentialIds,
    models::{Draft, FocusArea, ProgramDocument, Routine, RoutinePatch, VideoDescriptor},
    normalize::{hydrate, WireProgram},
    params::{CreateDraft, CreateRoutine, CreateVideo, DeleteProgram, Id, SearchVideos, UpdateRoutine},
    ports::{DraftStore, FocusAreaSource, ProgramStore, RoutineCatalog, VideoSource},
};

impl Library {
    /// Handle listing saved programs, most recently updated first.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use drillbook_core::LibraryBuilder;
    /// # async {
    /// let library = LibraryBuilder::new().build().await?;
    /// let programs = library.list_programs_summary().await?;
    /// println!("{programs}");
    /// # Result::<(), drillbook_core::DrillbookError>::Ok(())
    /// # };
    /// ```
    pub async fn list_programs_summary(&self) -> Result<ProgramSummaries> {
        Ok(ProgramSummaries(self.list_programs().await?))
    }

    /// Handle showing one saved program in its wire form.
    pub async fn show_program(&self, params: &Id) -> Result<WireProgram> {
        self.get_program(params.id).await
    }

    /// Handle permanently deleting a saved program.
    ///
    /// Uses get-before-delete so the deleted program can be echoed back.
    ///
    /// # Errors
    ///
    /// * `DrillbookError::Validation` - When `confirmed` is false
    /// * `DrillbookError::ProgramNotFound` - When no such program exists
    pub async fn delete_program_result(
        &self,
        params: &DeleteProgram,
    ) -> Result<DeleteResult<WireProgram>> {
        if !params.confirmed {
            return Err(DrillbookError::validation("confirmed").with_reason(
                "Deleting a program is permanent. Pass the confirmation flag to proceed.",
            ));
        }

        let program = self.get_program(params.id).await?;
        self.delete_program(params.id).await?;
        Ok(DeleteResult::new(program))
    }

    /// Handle listing the focus areas in use with their program counts.
    pub async fn list_focus_areas(&self) -> Result<FocusAreas> {
        Ok(FocusAreas(self.focus_areas().await?))
    }

    /// Handle listing the routine catalog by name.
    pub async fn list_routines_summary(&self) -> Result<Routines> {
        Ok(Routines(self.list_routines().await?))
    }

    /// Handle showing one routine with its exercises.
    pub async fn show_routine(&self, params: &Id) -> Result<Routine> {
        self.get_routine(params.id).await
    }

    /// Handle creating a catalog routine.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use drillbook_core::{params::CreateRoutine, LibraryBuilder};
    /// # async {
    /// let library = LibraryBuilder::new().build().await?;
    /// let params = CreateRoutine {
    ///     name: "Warmup A".to_string(),
    ///     description: Some("Band work and throwing progression".to_string()),
    ///     exercises: vec![],
    /// };
    /// let created = library.create_routine_result(&params).await?;
    /// # Result::<(), drillbook_core::DrillbookError>::Ok(())
    /// # };
    /// ```
    pub async fn create_routine_result(
        &self,
        params: &CreateRoutine,
    ) -> Result<CreateResult<Routine>> {
        params.validate()?;
        let routine = self
            .create_routine(&params.name, params.description.as_deref(), &params.exercises)
            .await?;
        Ok(CreateResult::new(routine))
    }

    /// Handle updating a catalog routine, reporting which fields changed.
    ///
    /// Program items that reference the routine keep their snapshot until
    /// their document is refreshed against the catalog.
    pub async fn update_routine_result(
        &self,
        params: &UpdateRoutine,
    ) -> Result<UpdateResult<Routine>> {
        let patch = params.validate()?;
        let routine = self.update_routine(params.id, &patch).await?;
        Ok(UpdateResult::with_changes(routine, routine_changes(&patch)))
    }

    /// Handle deleting a catalog routine.
    pub async fn delete_routine_result(&self, params: &Id) -> Result<DeleteResult<Routine>> {
        let routine = self.delete_routine(params.id).await?;
        Ok(DeleteResult::new(routine))
    }

    /// Handle registering (or replacing) a video descriptor.
    pub async fn add_video_result(
        &self,
        params: &CreateVideo,
    ) -> Result<CreateResult<VideoDescriptor>> {
        let video = params.validate()?;
        let stored = video.clone();
        self.with_database(move |db| db.upsert_video(&stored))
            .await?;
        debug!("add_video: '{}'", video.id);
        Ok(CreateResult::new(video))
    }

    /// Handle searching video descriptors by title or description.
    pub async fn search_videos_result(&self, params: &SearchVideos) -> Result<Videos> {
        Ok(Videos(self.search_videos(&params.query).await?))
    }

    /// Handle removing a video descriptor.
    ///
    /// Program items keep the snapshot they took when the video was added.
    pub async fn delete_video_result(&self, id: &str) -> Result<DeleteResult<VideoDescriptor>> {
        let video = self.get_video(id).await?;
        let lookup = video.id.clone();
        self.with_database(move |db| db.delete_video(&lookup))
            .await?;
        Ok(DeleteResult::new(video))
    }

    /// Handle starting a new draft.
    ///
    /// The draft gets `duration` empty weeks (one when unset) and whatever
    /// metadata was supplied; nothing is validated for saving yet.
    pub async fn create_draft_result(&self, params: &CreateDraft) -> Result<CreateResult<Draft>> {
        let focus_area = params.validate()?;

        let mut ids = SequentialIds::new();
        let mut document = ProgramDocument::with_duration(&mut ids, params.duration.unwrap_or(1))?;
        document.title = params.title.clone().unwrap_or_default();
        document.description = params.description.clone();
        document.focus_area = focus_area;

        let id = self.create_draft(&document).await?;
        Ok(CreateResult::new(Draft { id, document }))
    }

    /// Handle opening a saved program as a new draft.
    ///
    /// The program is hydrated under `options.numbering`; saving the draft
    /// later updates the same program.
    pub async fn open_program_as_draft(
        &self,
        params: &Id,
        options: EditorOptions,
    ) -> Result<CreateResult<Draft>> {
        let program = self.get_program(params.id).await?;
        let document = hydrate(&program, options.numbering, &mut SequentialIds::new())?;
        let id = self.create_draft(&document).await?;
        Ok(CreateResult::new(Draft { id, document }))
    }

    /// Handle listing drafts, most recently edited first.
    pub async fn list_drafts_summary(&self) -> Result<Drafts> {
        Ok(Drafts(self.list_drafts().await?))
    }

    /// Handle showing one draft.
    pub async fn show_draft(&self, params: &Id) -> Result<Draft> {
        let document = self.get_draft(params.id).await?;
        Ok(Draft {
            id: params.id,
            document,
        })
    }

    /// Handle discarding a draft.
    pub async fn delete_draft_result(&self, params: &Id) -> Result<DeleteResult<Draft>> {
        let draft = self.show_draft(params).await?;
        self.delete_draft(params.id).await?;
        Ok(DeleteResult::new(draft))
    }

    /// Open an editing session over a stored draft.
    ///
    /// New nodes continue the draft's sequential numbering.
    pub async fn open_draft(&self, params: &Id, options: EditorOptions) -> Result<Editor> {
        let document = self.get_draft(params.id).await?;
        let ids = SequentialIds::resume_after(&document);
        Ok(Editor::open(document, Box::new(ids), options))
    }

    /// Write an editing session's document back to its draft.
    pub async fn store_draft(&self, id: u64, editor: &Editor) -> Result<()> {
        self.update_draft(id, editor.document()).await
    }

    /// Handle saving a draft as a program.
    ///
    /// The program write and the draft's link to it commit together. After
    /// that the draft is replaced by the canonical saved document; if that
    /// second write fails the draft keeps its old content but still points
    /// at the program, and saving again updates it.
    pub async fn save_draft(&self, params: &Id, options: EditorOptions) -> Result<WireProgram> {
        let mut editor = self.open_draft(params, options).await?;
        let store = DraftProgramStore {
            library: self,
            draft_id: params.id,
        };
        let saved = editor.save(&store).await?;
        self.store_draft(params.id, &editor).await?;
        Ok(saved)
    }

    /// Handle refreshing every routine reference in a draft.
    ///
    /// Returns the number of items whose snapshot was updated.
    pub async fn refresh_draft_routines(&self, params: &Id, options: EditorOptions) -> Result<usize> {
        let mut editor = self.open_draft(params, options).await?;
        let refreshed = editor.refresh_routines(self).await?;
        if refreshed > 0 {
            self.store_draft(params.id, &editor).await?;
        }
        Ok(refreshed)
    }

    /// Known focus areas followed by custom values already in use.
    pub async fn focus_area_choices(&self) -> Result<Vec<String>> {
        let mut choices: Vec<String> = FocusArea::KNOWN
            .iter()
            .map(|focus| focus.as_str().to_string())
            .collect();
        for count in self.focus_areas().await? {
            if !choices.iter().any(|c| c.eq_ignore_ascii_case(&count.name)) {
                choices.push(count.name);
            }
        }
        Ok(choices)
    }
}

fn routine_changes(patch: &RoutinePatch) -> Vec<String> {
    let mut changes = Vec::new();
    if let Some(name) = &patch.name {
        changes.push(format!("Renamed to '{name}'"));
    }
    if let Some(description) = &patch.description {
        if description.trim().is_empty() {
            changes.push("Cleared description".to_string());
        } else {
            changes.push("Updated description".to_string());
        }
    }
    if let Some(exercises) = &patch.exercises {
        changes.push(format!("Replaced exercises ({})", exercises.len()));
    }
    changes
}
