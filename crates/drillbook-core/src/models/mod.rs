//! Data models for training programs.
//!
//! This module contains the domain models of the editable program tree and of
//! the external entities it references. Display implementations for these
//! models are located in [`crate::display::models`].
//!
//! # Structure
//!
//! ```text
//! ProgramDocument
//! └── Week (1..n, position is 1-based)
//!     └── Day (exactly seven, keyed by Weekday)
//!         └── Item (ordered; exercise | video | routine | rest)
//! ```
//!
//! - A [`Week`] cannot hold fewer or more than seven days: [`WeekDays`] is a
//!   fixed array and its deserializer rejects anything else.
//! - [`ProgramDocument`] keeps its week list private so the duration always
//!   equals the number of weeks.
//! - Item kinds are a closed union ([`ItemKind`]); a routine reference stores
//!   only a snapshot of the routine's identity, never its exercises.
//!
//! # Examples
//!
//! ```rust
//! use drillbook_core::ids::SequentialIds;
//! use drillbook_core::models::{ProgramDocument, Weekday};
//!
//! let mut ids = SequentialIds::new();
//! let document = ProgramDocument::new(&mut ids);
//! assert_eq!(document.duration(), 1);
//! assert!(document.weeks()[0].day(Weekday::Monday).items.is_empty());
//! ```

pub mod day;
pub mod document;
pub mod draft;
pub mod focus;
pub mod item;
pub mod requests;
pub mod routine;
pub mod summary;
pub mod video;
pub mod week;


pub use day::{Day, Weekday};
pub use document::ProgramDocument;
pub use draft::Draft;
pub use focus::FocusArea;
pub use item::{ExerciseDetails, Item, ItemKind, RoutineRef, SupersetMembership, VideoSnapshot};
pub use requests::{ItemPatch, RoutinePatch};
pub use routine::{Routine, RoutineExercise};
pub use summary::{DraftSummary, FocusAreaCount, ProgramSummary};
pub use video::VideoDescriptor;
pub use week::{Week, WeekDays};
