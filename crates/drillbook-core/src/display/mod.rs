//! Display formatting for models, collections and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and operation outcomes are wrapped in newtypes so the same data can be
//! rendered differently in lists, confirmations and detail views.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │   Collections   │    │    Markdown     │
//! │ (Document, ...) │───▶│  & Result Types │───▶│     Output      │
//! │                 │    │                 │    │   (termimad)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: ProgramSummaries, Routines, Drafts, FocusAreas, Videos
//! - [`results`]: CreateResult, UpdateResult, DeleteResult
//! - [`status`]: OperationStatus
//! - [`datetime`]: LocalDateTime
//!
//! # Examples
//!
//! ```rust
//! use drillbook_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Linked 2 items into superset s1".to_string());
//! assert_eq!(status.to_string(), "Success: Linked 2 items into superset s1\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Drafts, FocusAreas, ProgramSummaries, Routines, Videos};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, Labeled, UpdateResult};
pub use status::OperationStatus;
