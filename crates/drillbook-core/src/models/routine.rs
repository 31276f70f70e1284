//! Routine model: a reusable exercise template owned by the routine catalog.

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ExerciseDetails;

/// One templated exercise inside a routine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RoutineExercise {
    pub title: String,

    #[serde(flatten)]
    pub details: ExerciseDetails,
}

/// A named, reusable list of exercises.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Routine {
    /// Unique identifier for the routine
    pub id: u64,

    pub name: String,

    pub description: Option<String>,

    /// Ordered exercise templates
    #[serde(default)]
    pub exercises: Vec<RoutineExercise>,

    /// Timestamp when the routine was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the routine was last updated (UTC)
    pub updated_at: Timestamp,
}
