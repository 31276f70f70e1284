//! Summary types for listings.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::FocusArea;

/// Summary information about a saved program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramSummary {
    /// Program ID
    pub id: u64,
    /// Title of the program
    pub title: String,
    /// Description of the program
    pub description: Option<String>,
    /// Focus-area tag
    pub focus_area: FocusArea,
    /// Number of weeks
    pub duration: u32,
    /// Number of authored drills (rest markers excluded)
    pub total_drills: u32,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
}

/// A focus-area tag and how many saved programs use it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FocusAreaCount {
    pub name: String,
    pub count: u32,
}

/// Summary information about an editor draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftSummary {
    /// Draft ID
    pub id: u64,
    /// Title of the draft (may still be empty)
    pub title: String,
    /// Saved program the draft edits, if any
    pub program_id: Option<u64>,
    /// Number of weeks
    pub duration: u32,
    /// Last update timestamp
    pub updated_at: Timestamp,
}
