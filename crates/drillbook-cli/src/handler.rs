//! Command handlers: run a parsed command against the library and render
//! the result.
//!
//! Structural commands load the draft into an [`Editor`], apply one
//! operation and write the draft back. A failed operation leaves the stored
//! draft untouched.

use anyhow::{Context, Result};
use drillbook_core::{
    display::OperationStatus,
    ids::{IdSource, WeekId},
    models::{ExerciseDetails, FocusArea, ItemPatch, ProgramDocument},
    normalize::{normalize, WireProgram},
    params::{CreateRoutine, EditItem, Id},
    DrillbookError, Editor, EditorOptions, Library,
};
use log::debug;

use crate::{
    cli::{
        DraftCommands, DraftMetaArgs, FocusCommands, ItemCommands, ProgramCommands,
        ReorderWeeksArgs, RoutineCommands, ShowDraftArgs, SupersetCommands, VideoCommands,
        WeekCommands,
    },
    renderer::TerminalRenderer,
};

/// Runs commands against one library with one set of editor options.
pub struct Handler {
    library: Library,
    renderer: TerminalRenderer,
    options: EditorOptions,
}

impl Handler {
    pub fn new(library: Library, renderer: TerminalRenderer, options: EditorOptions) -> Self {
        Self {
            library,
            renderer,
            options,
        }
    }

    fn render(&self, output: impl std::fmt::Display) -> Result<()> {
        self.renderer.render(&output.to_string())
    }

    /// Open a draft, run one synchronous edit and store the draft again.
    async fn edit_draft<R>(
        &self,
        draft: u64,
        f: impl FnOnce(&mut ProgramDocument, &mut dyn IdSource) -> drillbook_core::Result<R>,
    ) -> Result<R> {
        let mut editor = self.open(draft).await?;
        let result = editor.edit(f)?;
        self.library.store_draft(draft, &editor).await?;
        debug!("edit_draft: stored draft {draft}");
        Ok(result)
    }

    async fn open(&self, draft: u64) -> Result<Editor> {
        self.library
            .open_draft(&Id { id: draft }, self.options)
            .await
            .with_context(|| format!("Failed to open draft {draft}"))
    }

    pub async fn list_programs(&self) -> Result<()> {
        let programs = self.library.list_programs_summary().await?;
        self.render(format!("# Saved Programs\n\n{programs}"))
    }

    pub async fn handle_draft_command(&self, command: DraftCommands) -> Result<()> {
        match command {
            DraftCommands::New(args) => {
                let created = self.library.create_draft_result(&args.into()).await?;
                self.render(created)
            }
            DraftCommands::List => {
                let drafts = self.library.list_drafts_summary().await?;
                self.render(format!("# Drafts\n\n{drafts}"))
            }
            DraftCommands::Show(args) => self.show_draft(args).await,
            DraftCommands::Open(args) => {
                let opened = self
                    .library
                    .open_program_as_draft(&args.into(), self.options)
                    .await?;
                self.render(opened)
            }
            DraftCommands::Set(args) => self.set_draft_metadata(args).await,
            DraftCommands::Save(args) => {
                let saved = self.library.save_draft(&args.into(), self.options).await?;
                self.render_saved(&saved)
            }
            DraftCommands::Refresh(args) => {
                let refreshed = self
                    .library
                    .refresh_draft_routines(&args.into(), self.options)
                    .await?;
                self.render(OperationStatus::success(format!(
                    "Refreshed {refreshed} routine reference(s)"
                )))
            }
            DraftCommands::Delete(args) => {
                let deleted = self.library.delete_draft_result(&args.into()).await?;
                self.render(deleted)
            }
        }
    }

    async fn show_draft(&self, args: ShowDraftArgs) -> Result<()> {
        let draft = self.library.show_draft(&Id { id: args.id }).await?;
        if args.json {
            let wire = normalize(&draft.document, self.options.numbering);
            println!("{}", serde_json::to_string_pretty(&wire)?);
            return Ok(());
        }
        self.render(draft)
    }

    async fn set_draft_metadata(&self, args: DraftMetaArgs) -> Result<()> {
        let DraftMetaArgs {
            id,
            title,
            description,
            focus,
            weeks,
        } = args;

        if let Some(focus) = &focus {
            if focus.trim().is_empty() {
                return Err(DrillbookError::validation("focus_area")
                    .with_reason("Focus area must not be blank")
                    .into());
            }
        }

        self.edit_draft(id, |document, ids| {
            if let Some(weeks) = weeks {
                document.set_week_duration(weeks, ids)?;
            }
            if let Some(title) = title {
                document.title = title.trim().to_string();
            }
            if let Some(description) = description {
                document.description = Some(description).filter(|d| !d.trim().is_empty());
            }
            if let Some(focus) = focus {
                document.focus_area = Some(FocusArea::from(focus));
            }
            Ok(())
        })
        .await?;

        self.render(OperationStatus::success(format!("Updated draft {id}")))
    }

    fn render_saved(&self, saved: &WireProgram) -> Result<()> {
        let id = saved.id.map(|id| id.to_string()).unwrap_or_default();
        self.render(OperationStatus::success(format!(
            "Saved program '{}' (ID: {id})",
            saved.title
        )))?;
        self.render(saved)
    }

    pub async fn handle_week_command(&self, command: WeekCommands) -> Result<()> {
        let message = match command {
            WeekCommands::Add(args) => {
                let index = self
                    .edit_draft(args.id, |document, ids| Ok(document.add_week(ids)))
                    .await?;
                format!("Added week {}", index + 1)
            }
            WeekCommands::Remove(args) => {
                let removed = self
                    .edit_draft(args.draft, |document, _| document.remove_week(args.index()))
                    .await?;
                format!("Removed week {} ({})", args.week, removed.name)
            }
            WeekCommands::Duplicate(args) => {
                let index = self
                    .edit_draft(args.draft, |document, ids| {
                        document.duplicate_week(args.index(), ids)
                    })
                    .await?;
                format!("Copied week {} to week {}", args.week, index + 1)
            }
            WeekCommands::Resize(args) => {
                self.edit_draft(args.draft, |document, ids| {
                    document.set_week_duration(args.weeks, ids)
                })
                .await?;
                format!("Draft {} now has {} week(s)", args.draft, args.weeks)
            }
            WeekCommands::Reorder(args) => self.reorder_weeks(args).await?,
            WeekCommands::Rename(args) => {
                let week = &args.week;
                self.edit_draft(week.draft, |document, _| {
                    document.rename_week(week.index(), args.name.clone(), args.description.clone())
                })
                .await?;
                format!("Updated week {}", week.week)
            }
            WeekCommands::Collapse(args) => {
                let week = &args.week;
                self.edit_draft(week.draft, |document, _| {
                    document.set_week_collapsed(week.index(), !args.expand)
                })
                .await?;
                let state = if args.expand { "Expanded" } else { "Collapsed" };
                format!("{state} week {}", week.week)
            }
        };
        self.render(OperationStatus::success(message))
    }

    async fn reorder_weeks(&self, args: ReorderWeeksArgs) -> Result<String> {
        let order = args.order.clone();
        self.edit_draft(args.draft, move |document, _| {
            let weeks = document.weeks();
            let mut ids: Vec<WeekId> = Vec::with_capacity(order.len());
            for position in &order {
                let week = position
                    .checked_sub(1)
                    .and_then(|index| weeks.get(index as usize))
                    .ok_or(DrillbookError::WeekNotFound {
                        index: position.saturating_sub(1) as usize,
                        len: weeks.len(),
                    })?;
                ids.push(week.id.clone());
            }
            document.reorder_weeks(&ids)
        })
        .await?;

        let order: Vec<String> = args.order.iter().map(u64::to_string).collect();
        Ok(format!("Reordered weeks: {}", order.join(", ")))
    }

    pub async fn handle_item_command(&self, command: ItemCommands) -> Result<()> {
        let message = match command {
            ItemCommands::AddExercise(args) => {
                let at = args.at.day_ref();
                let details = ExerciseDetails {
                    sets: args.sets,
                    reps: args.reps,
                    tempo: args.tempo,
                    duration: args.duration,
                    notes: args.notes,
                };
                let title = args.title;
                let description = args.description;
                let id = self
                    .edit_draft(args.at.draft, |document, ids| {
                        let id = document.add_exercise(at, title, details, ids)?;
                        if description.is_some() {
                            let patch = ItemPatch {
                                description,
                                ..Default::default()
                            };
                            document.edit_item(at, &id, &patch)?;
                        }
                        Ok(id)
                    })
                    .await?;
                format!("Added exercise {id} to {at}")
            }
            ItemCommands::AddVideo(args) => {
                let at = args.at.day_ref();
                let mut editor = self.open(args.at.draft).await?;
                let id = editor
                    .add_video_from_source(&self.library, at, &args.video_id)
                    .await?;
                self.library.store_draft(args.at.draft, &editor).await?;
                format!("Added video {id} to {at}")
            }
            ItemCommands::AddRoutine(args) => {
                let at = args.at.day_ref();
                let mut editor = self.open(args.at.draft).await?;
                let id = editor
                    .add_routine_from_catalog(&self.library, at, args.routine_id)
                    .await?;
                self.library.store_draft(args.at.draft, &editor).await?;
                format!("Added routine {} as {id} to {at}", args.routine_id)
            }
            ItemCommands::NewRoutine(args) => {
                let at = args.at.day_ref();
                let params = CreateRoutine::from(&args);
                params.validate()?;

                let mut editor = self.open(args.at.draft).await?;
                let (routine, id) = editor
                    .create_routine_and_add(
                        &self.library,
                        at,
                        &params.name,
                        params.description.as_deref(),
                        &params.exercises,
                    )
                    .await?;
                self.library.store_draft(args.at.draft, &editor).await?;
                format!(
                    "Created routine '{}' (ID: {}) and added it as {id} to {at}",
                    routine.name, routine.id
                )
            }
            ItemCommands::Edit(args) => {
                let patch = ItemPatch::try_from(EditItem::from(&args))?;
                let at = args.item.at.day_ref();
                let id = args.item.item;
                self.edit_draft(args.item.at.draft, |document, _| {
                    document.edit_item(at, &id, &patch)
                })
                .await?;
                format!("Updated item {id}")
            }
            ItemCommands::Delete(args) => {
                let at = args.at.day_ref();
                let removed = self
                    .edit_draft(args.at.draft, |document, _| document.delete_item(at, &args.item))
                    .await?;
                format!("Deleted item {} ({})", removed.id, removed.title)
            }
            ItemCommands::Move(args) => {
                let from = args.item.at.day_ref();
                let to = args.target();
                let id = &args.item.item;
                self.edit_draft(args.item.at.draft, |document, _| {
                    document.move_item(from, id, to)
                })
                .await?;
                format!("Moved item {id} to {to}")
            }
            ItemCommands::Reorder(args) => {
                let at = args.at.day_ref();
                let mut editor = self.open(args.at.draft).await?;
                editor.reorder_items(at, &args.order)?;
                self.library.store_draft(args.at.draft, &editor).await?;
                format!("Reordered {at}")
            }
        };
        self.render(OperationStatus::success(message))
    }

    pub async fn handle_superset_command(&self, command: SupersetCommands) -> Result<()> {
        match command {
            SupersetCommands::Link(args) => {
                let at = args.at.day_ref();
                let group = self
                    .edit_draft(args.at.draft, |document, ids| {
                        document.link(at, &args.first, &args.second, ids)
                    })
                    .await?;
                self.render(OperationStatus::success(format!(
                    "Linked {} and {} into superset {group}",
                    args.first, args.second
                )))
            }
            SupersetCommands::Unlink(args) => {
                let at = args.at.day_ref();
                let cleared = self
                    .edit_draft(args.at.draft, |document, _| document.unlink(at, &args.item))
                    .await?;
                self.render(OperationStatus::success(format!(
                    "Unlinked {cleared} item(s)"
                )))
            }
            SupersetCommands::Members(args) => {
                let at = args.at.day_ref();
                let editor = self.open(args.at.draft).await?;
                let members = editor.document().superset_members(at, &args.group)?;

                let mut output = format!("# Superset {}\n\n", args.group);
                if members.is_empty() {
                    output.push_str("No items in this superset.\n");
                }
                for item in members {
                    output.push_str(&item.to_string());
                }
                self.render(output)
            }
        }
    }

    pub async fn handle_program_command(&self, command: ProgramCommands) -> Result<()> {
        match command {
            ProgramCommands::List => self.list_programs().await,
            ProgramCommands::Show(args) => {
                let program = self.library.show_program(&Id { id: args.id }).await?;
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&program)?);
                    return Ok(());
                }
                self.render(program)
            }
            ProgramCommands::Delete(args) => {
                let deleted = self.library.delete_program_result(&args.into()).await?;
                self.render(deleted)
            }
        }
    }

    pub async fn handle_routine_command(&self, command: RoutineCommands) -> Result<()> {
        match command {
            RoutineCommands::Create(args) => {
                let created = self.library.create_routine_result(&args.into()).await?;
                self.render(created)
            }
            RoutineCommands::List => {
                let routines = self.library.list_routines_summary().await?;
                self.render(format!("# Routines\n\n{routines}"))
            }
            RoutineCommands::Show(args) => {
                let routine = self.library.show_routine(&args.into()).await?;
                self.render(routine)
            }
            RoutineCommands::Update(args) => {
                let updated = self.library.update_routine_result(&args.into()).await?;
                self.render(updated)
            }
            RoutineCommands::Delete(args) => {
                let deleted = self.library.delete_routine_result(&args.into()).await?;
                self.render(deleted)
            }
        }
    }

    pub async fn handle_video_command(&self, command: VideoCommands) -> Result<()> {
        match command {
            VideoCommands::Add(args) => {
                let created = self.library.add_video_result(&args.into()).await?;
                self.render(created)
            }
            VideoCommands::Search(args) => {
                let videos = self.library.search_videos_result(&args.into()).await?;
                self.render(format!("# Videos\n\n{videos}"))
            }
            VideoCommands::Delete(args) => {
                let deleted = self.library.delete_video_result(&args.id).await?;
                self.render(deleted)
            }
        }
    }

    pub async fn handle_focus_command(&self, command: FocusCommands) -> Result<()> {
        match command {
            FocusCommands::List => {
                let areas = self.library.list_focus_areas().await?;
                self.render(format!("# Focus Areas\n\n{areas}"))
            }
            FocusCommands::Choices => {
                let choices = self.library.focus_area_choices().await?;
                let lines: Vec<String> = choices.iter().map(|c| format!("- {c}\n")).collect();
                self.render(format!("# Focus Area Choices\n\n{}", lines.concat()))
            }
        }
    }
}

/// Print the JSON schema of the saved program format.
pub fn print_schema() -> Result<()> {
    let schema = schemars::schema_for!(WireProgram);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
