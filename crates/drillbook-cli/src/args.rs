use std::path::PathBuf;

use clap::{Parser, Subcommand};
use drillbook_core::EditorOptions;

use crate::cli::{
    DayNumberingArg, DraftCommands, FocusCommands, ItemCommands, ProgramCommands,
    RoutineCommands, SupersetCommands, SupersetPolicyArg, VideoCommands, WeekCommands,
};

/// Author weekly training programs from the command line
///
/// A program is a list of weeks, each with seven days of drills. Programs
/// are edited as drafts and saved into the local library once they have a
/// title and a focus area. Routines and videos live in the same library and
/// can be referenced from any draft.
#[derive(Parser)]
#[command(version, about, name = "drill")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/drillbook/drillbook.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Weekday numbering used when saving and opening programs
    #[arg(long, global = true, value_enum, default_value_t = DayNumberingArg::MondayFirst)]
    pub day_numbering: DayNumberingArg,

    /// Whether item reorders keep superset members together
    #[arg(long, global = true, value_enum, default_value_t = SupersetPolicyArg::Loose)]
    pub superset_policy: SupersetPolicyArg,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Args {
    /// Editor options selected by the global flags.
    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            numbering: self.day_numbering.into(),
            superset_policy: self.superset_policy.into(),
        }
    }
}

/// Available commands for the drill CLI
///
/// - `draft`: create, inspect and save editable drafts
/// - `week`, `item`, `superset`: structural edits on a draft
/// - `program`, `routine`, `video`, `focus`: the saved library
/// - `schema`: print the JSON schema of the saved program format
#[derive(Subcommand)]
pub enum Commands {
    /// Manage drafts
    #[command(alias = "d")]
    Draft {
        #[command(subcommand)]
        command: DraftCommands,
    },
    /// Add, remove, reorder and rename weeks of a draft
    #[command(alias = "w")]
    Week {
        #[command(subcommand)]
        command: WeekCommands,
    },
    /// Add, edit, move and reorder items in a draft's days
    #[command(alias = "i")]
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
    /// Link items into supersets
    #[command(alias = "ss")]
    Superset {
        #[command(subcommand)]
        command: SupersetCommands,
    },
    /// Manage saved programs
    #[command(alias = "p")]
    Program {
        #[command(subcommand)]
        command: ProgramCommands,
    },
    /// Manage the routine catalog
    #[command(alias = "r")]
    Routine {
        #[command(subcommand)]
        command: RoutineCommands,
    },
    /// Manage video descriptors
    #[command(alias = "v")]
    Video {
        #[command(subcommand)]
        command: VideoCommands,
    },
    /// List focus areas
    Focus {
        #[command(subcommand)]
        command: FocusCommands,
    },
    /// Print the JSON schema of the saved program format
    Schema,
}
