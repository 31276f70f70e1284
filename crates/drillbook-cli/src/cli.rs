//! Command-line argument definitions using clap.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From`, so core params stay free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Library / Editor
//! ```
//!
//! Weeks are addressed by their 1-based position and days by weekday name
//! (`mon`, `tuesday`, ...). Items are addressed by the id shown in
//! `draft show`.

use clap::{Args, Subcommand, ValueEnum};
use drillbook_core::{
    engine::{DayRef, SupersetPolicy},
    ids::{ItemId, SupersetId},
    models::{RoutineExercise, Weekday},
    normalize::DayNumbering,
    params::{
        CreateDraft, CreateRoutine, CreateVideo, DeleteProgram, EditItem, Id, SearchVideos,
        UpdateRoutine,
    },
};

// ============================================================================
// Global option values
// ============================================================================

/// Weekday numbering conventions accepted by `--day-numbering`
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DayNumberingArg {
    /// Monday is day 1, Sunday is day 7
    MondayFirst,
    /// Sunday is day 1, Saturday is day 7
    SundayFirst,
}

impl From<DayNumberingArg> for DayNumbering {
    fn from(val: DayNumberingArg) -> Self {
        match val {
            DayNumberingArg::MondayFirst => DayNumbering::MondayFirst,
            DayNumberingArg::SundayFirst => DayNumbering::SundayFirst,
        }
    }
}

/// Superset handling accepted by `--superset-policy`
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum SupersetPolicyArg {
    /// Apply item reorders exactly as given
    Loose,
    /// Pull superset members back together after a reorder
    Clustered,
}

impl From<SupersetPolicyArg> for SupersetPolicy {
    fn from(val: SupersetPolicyArg) -> Self {
        match val {
            SupersetPolicyArg::Loose => SupersetPolicy::Loose,
            SupersetPolicyArg::Clustered => SupersetPolicy::Clustered,
        }
    }
}

// ============================================================================
// Drafts
// ============================================================================

/// Start a new draft
#[derive(Args)]
pub struct NewDraftArgs {
    /// Working title
    #[arg(short, long)]
    pub title: Option<String>,
    /// Program description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Focus area: hitting, pitching, fielding, catching, baserunning,
    /// strength, conditioning, or any custom text
    #[arg(short, long)]
    pub focus: Option<String>,
    /// Number of weeks to start with
    #[arg(short, long)]
    pub weeks: Option<u32>,
}

impl From<NewDraftArgs> for CreateDraft {
    fn from(val: NewDraftArgs) -> Self {
        CreateDraft {
            title: val.title,
            description: val.description,
            focus_area: val.focus,
            duration: val.weeks,
        }
    }
}

/// Refer to a draft by ID
#[derive(Args)]
pub struct DraftIdArgs {
    /// Draft ID
    pub id: u64,
}

impl From<DraftIdArgs> for Id {
    fn from(val: DraftIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Show a draft
#[derive(Args)]
pub struct ShowDraftArgs {
    /// Draft ID
    pub id: u64,
    /// Print the saved-program JSON instead of the outline
    #[arg(long)]
    pub json: bool,
}

/// Open a saved program as a new draft
#[derive(Args)]
pub struct OpenProgramArgs {
    /// ID of the saved program
    pub program_id: u64,
}

impl From<OpenProgramArgs> for Id {
    fn from(val: OpenProgramArgs) -> Self {
        Id { id: val.program_id }
    }
}

/// Change a draft's title, description, focus area or length
#[derive(Args)]
pub struct DraftMetaArgs {
    /// Draft ID
    pub id: u64,
    #[arg(short, long)]
    pub title: Option<String>,
    /// New description (an empty string clears it)
    #[arg(short, long)]
    pub description: Option<String>,
    #[arg(short, long)]
    pub focus: Option<String>,
    /// Resize to this many weeks; extra weeks are dropped from the end
    #[arg(short, long)]
    pub weeks: Option<u32>,
}

#[derive(Subcommand)]
pub enum DraftCommands {
    /// Start a new draft
    #[command(alias = "n")]
    New(NewDraftArgs),
    /// List drafts
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a draft
    #[command(alias = "s")]
    Show(ShowDraftArgs),
    /// Open a saved program as a new draft
    #[command(alias = "o")]
    Open(OpenProgramArgs),
    /// Change draft metadata
    Set(DraftMetaArgs),
    /// Save a draft as a program
    Save(DraftIdArgs),
    /// Refresh routine references from the catalog
    Refresh(DraftIdArgs),
    /// Discard a draft
    #[command(aliases = ["d", "rm"])]
    Delete(DraftIdArgs),
}

// ============================================================================
// Weeks
// ============================================================================

/// Refer to one week of a draft
#[derive(Args)]
pub struct WeekRefArgs {
    /// Draft ID
    pub draft: u64,
    /// Week number, starting at 1
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub week: u64,
}

impl WeekRefArgs {
    /// 0-based index of the week.
    pub fn index(&self) -> usize {
        (self.week - 1) as usize
    }
}

/// Resize a draft
#[derive(Args)]
pub struct ResizeArgs {
    /// Draft ID
    pub draft: u64,
    /// New number of weeks
    pub weeks: u32,
}

/// Reorder the weeks of a draft
#[derive(Args)]
pub struct ReorderWeeksArgs {
    /// Draft ID
    pub draft: u64,
    /// Current week numbers in their new order, e.g. 3,1,2
    #[arg(long, value_delimiter = ',', required = true)]
    pub order: Vec<u64>,
}

/// Rename a week or change its description
#[derive(Args)]
pub struct RenameWeekArgs {
    #[command(flatten)]
    pub week: WeekRefArgs,
    /// New name
    #[arg(short, long)]
    pub name: Option<String>,
    /// New description (an empty string clears it)
    #[arg(short, long)]
    pub description: Option<String>,
}

/// Collapse or expand a week in outlines
#[derive(Args)]
pub struct CollapseWeekArgs {
    #[command(flatten)]
    pub week: WeekRefArgs,
    /// Expand instead of collapse
    #[arg(long)]
    pub expand: bool,
}

#[derive(Subcommand)]
pub enum WeekCommands {
    /// Append an empty week
    #[command(alias = "a")]
    Add(DraftIdArgs),
    /// Remove a week
    #[command(aliases = ["d", "rm"])]
    Remove(WeekRefArgs),
    /// Append a copy of a week
    #[command(alias = "dup")]
    Duplicate(WeekRefArgs),
    /// Set the number of weeks
    Resize(ResizeArgs),
    /// Reorder weeks
    Reorder(ReorderWeeksArgs),
    /// Rename a week
    Rename(RenameWeekArgs),
    /// Collapse or expand a week
    Collapse(CollapseWeekArgs),
}

// ============================================================================
// Items
// ============================================================================

/// Refer to one day of a draft
#[derive(Args)]
pub struct DayArgs {
    /// Draft ID
    pub draft: u64,
    /// Week number, starting at 1
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub week: u64,
    /// Day of the week, e.g. mon or monday
    pub day: Weekday,
}

impl DayArgs {
    pub fn day_ref(&self) -> DayRef {
        DayRef::new((self.week - 1) as usize, self.day)
    }
}

/// Add an exercise
#[derive(Args)]
pub struct AddExerciseArgs {
    #[command(flatten)]
    pub at: DayArgs,
    /// Exercise title
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub sets: Option<u32>,
    #[arg(long)]
    pub reps: Option<u32>,
    /// Tempo, e.g. 2-0-2
    #[arg(long)]
    pub tempo: Option<String>,
    /// Free-form duration, e.g. 30s
    #[arg(long)]
    pub duration: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

/// Add a video from the library
#[derive(Args)]
pub struct AddVideoArgs {
    #[command(flatten)]
    pub at: DayArgs,
    /// Video ID as registered with `video add`
    pub video_id: String,
}

/// Add a reference to a catalog routine
#[derive(Args)]
pub struct AddRoutineArgs {
    #[command(flatten)]
    pub at: DayArgs,
    /// Routine ID
    pub routine_id: u64,
}

/// Create a routine in the catalog and add a reference to it
#[derive(Args)]
pub struct NewRoutineItemArgs {
    #[command(flatten)]
    pub at: DayArgs,
    /// Routine name
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
    /// Exercise title; repeat for more exercises
    #[arg(short, long = "exercise")]
    pub exercises: Vec<String>,
}

impl From<&NewRoutineItemArgs> for CreateRoutine {
    fn from(val: &NewRoutineItemArgs) -> Self {
        CreateRoutine {
            name: val.name.clone(),
            description: val.description.clone(),
            exercises: exercise_templates(&val.exercises),
        }
    }
}

/// Refer to one item in a day
#[derive(Args)]
pub struct ItemRefArgs {
    #[command(flatten)]
    pub at: DayArgs,
    /// Item ID as shown by `draft show`
    pub item: ItemId,
}

/// Edit an item
#[derive(Args)]
pub struct EditItemArgs {
    #[command(flatten)]
    pub item: ItemRefArgs,
    #[arg(long)]
    pub title: Option<String>,
    /// New description (an empty string clears it)
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub sets: Option<u32>,
    #[arg(long)]
    pub reps: Option<u32>,
    #[arg(long)]
    pub tempo: Option<String>,
    #[arg(long)]
    pub duration: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<&EditItemArgs> for EditItem {
    fn from(val: &EditItemArgs) -> Self {
        EditItem {
            title: val.title.clone(),
            description: val.description.clone(),
            sets: val.sets,
            reps: val.reps,
            tempo: val.tempo.clone(),
            duration: val.duration.clone(),
            notes: val.notes.clone(),
        }
    }
}

/// Move an item to the end of another day
#[derive(Args)]
pub struct MoveItemArgs {
    #[command(flatten)]
    pub item: ItemRefArgs,
    /// Target week number (defaults to the same week)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub to_week: Option<u64>,
    /// Target day
    #[arg(long)]
    pub to_day: Weekday,
}

impl MoveItemArgs {
    pub fn target(&self) -> DayRef {
        let week = self.to_week.unwrap_or(self.item.at.week);
        DayRef::new((week - 1) as usize, self.to_day)
    }
}

/// Reorder a day's items
#[derive(Args)]
pub struct ReorderItemsArgs {
    #[command(flatten)]
    pub at: DayArgs,
    /// Every item ID of the day in the new order, comma-separated
    #[arg(long, value_delimiter = ',', required = true)]
    pub order: Vec<ItemId>,
}

#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add an exercise
    #[command(alias = "ex")]
    AddExercise(AddExerciseArgs),
    /// Add a video from the library
    AddVideo(AddVideoArgs),
    /// Add a reference to a catalog routine
    AddRoutine(AddRoutineArgs),
    /// Create a routine in the catalog and add it
    NewRoutine(NewRoutineItemArgs),
    /// Edit an item
    #[command(alias = "e")]
    Edit(EditItemArgs),
    /// Delete an item
    #[command(aliases = ["d", "rm"])]
    Delete(ItemRefArgs),
    /// Move an item to another day
    #[command(alias = "mv")]
    Move(MoveItemArgs),
    /// Reorder a day's items
    Reorder(ReorderItemsArgs),
}

// ============================================================================
// Supersets
// ============================================================================

/// Link two items of a day
#[derive(Args)]
pub struct LinkArgs {
    #[command(flatten)]
    pub at: DayArgs,
    /// First item (keeps its group if it already has one)
    pub first: ItemId,
    /// Second item
    pub second: ItemId,
}

/// List the members of a superset
#[derive(Args)]
pub struct MembersArgs {
    #[command(flatten)]
    pub at: DayArgs,
    /// Superset ID
    pub group: SupersetId,
}

#[derive(Subcommand)]
pub enum SupersetCommands {
    /// Link two items into a superset
    Link(LinkArgs),
    /// Dissolve the superset an item belongs to
    Unlink(ItemRefArgs),
    /// Show the members of a superset
    Members(MembersArgs),
}

// ============================================================================
// Saved programs
// ============================================================================

/// Show a saved program
#[derive(Args)]
pub struct ShowProgramArgs {
    /// Program ID
    pub id: u64,
    /// Print the stored JSON instead of the outline
    #[arg(long)]
    pub json: bool,
}

/// Delete a saved program permanently
#[derive(Args)]
pub struct DeleteProgramArgs {
    /// Program ID
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteProgramArgs> for DeleteProgram {
    fn from(val: DeleteProgramArgs) -> Self {
        DeleteProgram {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum ProgramCommands {
    /// List saved programs
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a saved program
    #[command(alias = "s")]
    Show(ShowProgramArgs),
    /// Delete a saved program
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteProgramArgs),
}

// ============================================================================
// Routines
// ============================================================================

/// Create a routine
#[derive(Args)]
pub struct CreateRoutineArgs {
    /// Routine name
    pub name: String,
    #[arg(short, long)]
    pub description: Option<String>,
    /// Exercise title; repeat for more exercises
    #[arg(short, long = "exercise")]
    pub exercises: Vec<String>,
}

impl From<CreateRoutineArgs> for CreateRoutine {
    fn from(val: CreateRoutineArgs) -> Self {
        CreateRoutine {
            name: val.name,
            description: val.description,
            exercises: exercise_templates(&val.exercises),
        }
    }
}

/// Refer to a routine by ID
#[derive(Args)]
pub struct RoutineIdArgs {
    /// Routine ID
    pub id: u64,
}

impl From<RoutineIdArgs> for Id {
    fn from(val: RoutineIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a routine
#[derive(Args)]
pub struct UpdateRoutineArgs {
    /// Routine ID
    pub id: u64,
    #[arg(short, long)]
    pub name: Option<String>,
    /// New description (an empty string clears it)
    #[arg(short, long)]
    pub description: Option<String>,
    /// Replacement exercise list; repeat for more exercises
    #[arg(short, long = "exercise")]
    pub exercises: Vec<String>,
}

impl From<UpdateRoutineArgs> for UpdateRoutine {
    fn from(val: UpdateRoutineArgs) -> Self {
        UpdateRoutine {
            id: val.id,
            name: val.name,
            description: val.description,
            exercises: if val.exercises.is_empty() {
                None
            } else {
                Some(exercise_templates(&val.exercises))
            },
        }
    }
}

#[derive(Subcommand)]
pub enum RoutineCommands {
    /// Create a routine
    #[command(alias = "c")]
    Create(CreateRoutineArgs),
    /// List routines
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a routine
    #[command(alias = "s")]
    Show(RoutineIdArgs),
    /// Update a routine
    #[command(alias = "u")]
    Update(UpdateRoutineArgs),
    /// Delete a routine
    #[command(aliases = ["d", "rm"])]
    Delete(RoutineIdArgs),
}

fn exercise_templates(titles: &[String]) -> Vec<RoutineExercise> {
    titles
        .iter()
        .map(|title| RoutineExercise {
            title: title.clone(),
            details: Default::default(),
        })
        .collect()
}

// ============================================================================
// Videos and focus areas
// ============================================================================

/// Register a video
#[derive(Args)]
pub struct AddVideoDescriptorArgs {
    /// External video ID
    pub id: String,
    /// Title
    pub title: String,
    #[arg(short, long)]
    pub description: Option<String>,
    /// Running time, e.g. 4:10
    #[arg(long)]
    pub duration: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
    #[arg(long)]
    pub thumbnail: Option<String>,
}

impl From<AddVideoDescriptorArgs> for CreateVideo {
    fn from(val: AddVideoDescriptorArgs) -> Self {
        CreateVideo {
            id: val.id,
            title: val.title,
            description: val.description,
            duration: val.duration,
            url: val.url,
            thumbnail: val.thumbnail,
        }
    }
}

/// Search videos
#[derive(Args)]
pub struct SearchVideosArgs {
    /// Text to look for in titles and descriptions; omit to list all
    pub query: Option<String>,
}

impl From<SearchVideosArgs> for SearchVideos {
    fn from(val: SearchVideosArgs) -> Self {
        SearchVideos {
            query: val.query.unwrap_or_default(),
        }
    }
}

/// Delete a video
#[derive(Args)]
pub struct DeleteVideoArgs {
    /// External video ID
    pub id: String,
}

#[derive(Subcommand)]
pub enum VideoCommands {
    /// Register a video
    #[command(alias = "a")]
    Add(AddVideoDescriptorArgs),
    /// Search videos
    #[command(aliases = ["s", "ls"])]
    Search(SearchVideosArgs),
    /// Delete a video
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteVideoArgs),
}

#[derive(Subcommand)]
pub enum FocusCommands {
    /// List focus areas in use with their program counts
    #[command(aliases = ["l", "ls"])]
    List,
    /// List every focus area a draft can choose
    Choices,
}
