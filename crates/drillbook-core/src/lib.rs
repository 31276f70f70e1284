//! Core library for the drillbook training program editor.
//!
//! A program is an editable tree of weeks, days and items (exercises,
//! videos, routine references). This crate provides the tree model, the
//! mutation engine that keeps it consistent, the conversion to and from the
//! flat wire format used for storage, and a SQLite-backed library that plays
//! the part of the routine catalog, video source and program store.
//!
//! - [`models`]: the document tree and the entities it references
//! - [`engine`]: structural edits on a [`models::ProgramDocument`]
//! - [`normalize`]: wire format, day numbering and hydration
//! - [`editor`]: a single-actor editing session with save
//! - [`ports`]: collaborator traits the editor depends on
//! - [`library`]: the SQLite implementation of those traits
//! - [`display`]: markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use drillbook_core::{
//!     engine::DayRef,
//!     models::{ExerciseDetails, FocusArea, Weekday},
//!     Editor, EditorOptions, LibraryBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let library = LibraryBuilder::new()
//!     .with_database_path(Some("drillbook.db"))
//!     .build()
//!     .await?;
//!
//! let mut editor = Editor::new(EditorOptions::default());
//! editor.edit(|document, ids| {
//!     document.title = "Preseason Hitting".to_string();
//!     document.focus_area = Some(FocusArea::Hitting);
//!     document.add_exercise(
//!         DayRef::new(0, Weekday::Monday),
//!         "Tee Work",
//!         ExerciseDetails::default(),
//!         ids,
//!     )
//! })?;
//!
//! let saved = editor.save(&library).await?;
//! println!("{saved}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod editor;
pub mod engine;
pub mod error;
pub mod ids;
pub mod library;
pub mod models;
pub mod normalize;
pub mod params;
pub mod ports;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, Drafts, FocusAreas, OperationStatus, ProgramSummaries, Routines,
    UpdateResult, Videos,
};
pub use editor::{Editor, EditorOptions};
pub use error::{DrillbookError, ErrorCategory, Result};
pub use library::{Library, LibraryBuilder};
pub use models::{Draft, FocusArea, Item, ItemKind, ProgramDocument, Routine, Week, Weekday};
pub use normalize::{DayNumbering, WireProgram};
