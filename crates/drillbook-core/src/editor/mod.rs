//! Single-actor editing session.
//!
//! An [`Editor`] owns one [`ProgramDocument`], the [`IdSource`] that names its
//! nodes, and the session's [`EditorOptions`]. Structural edits run
//! synchronously through [`Editor::edit`]; the only suspension points are the
//! collaborator calls (routine catalog, video source, save).
//!
//! Saving validates the scalar fields, normalizes a *borrowed* document, hands
//! the wire program to the store and only then replaces the document with the
//! hydrated canonical response. A failed or cancelled save leaves the document
//! exactly as it was.

use std::collections::HashMap;

use log::{debug, info, warn};

use crate::{
    engine::{DayRef, SupersetPolicy},
    error::{DrillbookError, ErrorCategory, Result},
    ids::{IdSource, ItemId, SequentialIds},
    models::{ProgramDocument, Routine, RoutineExercise},
    normalize::{hydrate, normalize, DayNumbering, WireProgram},
    ports::{ProgramStore, RoutineCatalog, VideoSource},
};

#[cfg(test)]
mod tests;

/// Per-session policy knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorOptions {
    /// Weekday to day-number convention used on save and hydration
    pub numbering: DayNumbering,
    /// Whether reorders keep superset members together
    pub superset_policy: SupersetPolicy,
}

/// An editing session over one program document.
pub struct Editor {
    document: ProgramDocument,
    ids: Box<dyn IdSource>,
    options: EditorOptions,
}

impl Editor {
    /// A session over a fresh, unsaved document with sequential ids.
    pub fn new(options: EditorOptions) -> Self {
        let mut ids = SequentialIds::new();
        let document = ProgramDocument::new(&mut ids);
        Self {
            document,
            ids: Box::new(ids),
            options,
        }
    }

    /// A session over an existing document.
    ///
    /// `ids` is advanced past every identity the document already uses, so
    /// later edits never reuse one.
    pub fn open(
        document: ProgramDocument,
        mut ids: Box<dyn IdSource>,
        options: EditorOptions,
    ) -> Self {
        ids.reserve_existing(&document);
        Self {
            document,
            ids,
            options,
        }
    }

    /// A session over a saved program, hydrated from the store.
    pub async fn load(
        store: &dyn ProgramStore,
        program_id: u64,
        mut ids: Box<dyn IdSource>,
        options: EditorOptions,
    ) -> Result<Self> {
        let wire = store.get_program(program_id).await?;
        let document = hydrate(&wire, options.numbering, ids.as_mut())?;
        debug!("Editor::load: program {program_id}");
        Ok(Self::open(document, ids, options))
    }

    pub fn document(&self) -> &ProgramDocument {
        &self.document
    }

    pub fn into_document(self) -> ProgramDocument {
        self.document
    }

    pub fn options(&self) -> EditorOptions {
        self.options
    }

    /// Run one mutation against the document with the session's id source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use drillbook_core::editor::{Editor, EditorOptions};
    ///
    /// let mut editor = Editor::new(EditorOptions::default());
    /// editor.edit(|doc, ids| doc.set_week_duration(4, ids)).unwrap();
    /// assert_eq!(editor.document().duration(), 4);
    /// ```
    pub fn edit<R>(
        &mut self,
        f: impl FnOnce(&mut ProgramDocument, &mut dyn IdSource) -> Result<R>,
    ) -> Result<R> {
        f(&mut self.document, self.ids.as_mut())
    }

    /// Reorder a day's items under the session's superset policy.
    pub fn reorder_items(&mut self, at: DayRef, order: &[ItemId]) -> Result<()> {
        let policy = self.options.superset_policy;
        self.document.reorder_items(at, order, policy)
    }

    /// Add a reference to a catalog routine.
    ///
    /// # Errors
    ///
    /// * `DrillbookError::RoutineNotFound` - no such routine in the catalog
    /// * `DrillbookError::WeekNotFound` - stale week index
    pub async fn add_routine_from_catalog(
        &mut self,
        catalog: &dyn RoutineCatalog,
        at: DayRef,
        routine_id: u64,
    ) -> Result<ItemId> {
        self.document.day(at)?;
        let routine = catalog.get_routine(routine_id).await?;
        self.document.add_routine(at, &routine, self.ids.as_mut())
    }

    /// Create a routine in the catalog and reference it from a day.
    pub async fn create_routine_and_add(
        &mut self,
        catalog: &dyn RoutineCatalog,
        at: DayRef,
        name: &str,
        description: Option<&str>,
        exercises: &[RoutineExercise],
    ) -> Result<(Routine, ItemId)> {
        self.document.day(at)?;
        let routine = catalog.create_routine(name, description, exercises).await?;
        let id = self.document.add_routine(at, &routine, self.ids.as_mut())?;
        Ok((routine, id))
    }

    /// Copy a video descriptor from the source into a new item.
    pub async fn add_video_from_source(
        &mut self,
        videos: &dyn VideoSource,
        at: DayRef,
        video_id: &str,
    ) -> Result<ItemId> {
        self.document.day(at)?;
        let descriptor = videos.get_video(video_id).await?;
        self.document.add_video(at, &descriptor, self.ids.as_mut())
    }

    /// Re-read every referenced routine and refresh the snapshots.
    ///
    /// Routines deleted from the catalog keep their last snapshot.
    pub async fn refresh_routines(&mut self, catalog: &dyn RoutineCatalog) -> Result<usize> {
        let mut updated = 0;
        for id in self.document.referenced_routine_ids() {
            match catalog.get_routine(id).await {
                Ok(routine) => updated += self.document.refresh_routine_snapshot(&routine),
                Err(DrillbookError::RoutineNotFound { .. }) => {
                    warn!("refresh_routines: routine {id} no longer exists");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(updated)
    }

    /// Validate, normalize and store the document.
    ///
    /// On success the document is replaced by the hydrated canonical response
    /// and the saved wire program is returned. On failure the document is
    /// untouched; store failures are reported as retryable
    /// `DrillbookError::Persistence`.
    pub async fn save(&mut self, store: &dyn ProgramStore) -> Result<WireProgram> {
        self.document.validate_metadata()?;
        let wire = normalize(&self.document, self.options.numbering);

        let saved = store.save_program(&wire).await.map_err(|e| {
            warn!("save: store rejected '{}': {e}", wire.title);
            match e.category() {
                ErrorCategory::Infrastructure => DrillbookError::Persistence {
                    message: e.to_string(),
                },
                _ => e,
            }
        })?;

        let mut document = hydrate(&saved, self.options.numbering, self.ids.as_mut())?;
        self.ids.reserve_existing(&document);
        let collapsed: HashMap<_, _> = self
            .document
            .weeks()
            .iter()
            .map(|week| (week.id.clone(), week.collapsed))
            .collect();
        for week in &mut document.weeks {
            week.collapsed = collapsed.get(&week.id).copied().unwrap_or(false);
        }

        info!(
            "save: stored '{}' as program {}",
            saved.title,
            saved.id.map(|id| id.to_string()).unwrap_or_default()
        );
        self.document = document;
        Ok(saved)
    }
}
