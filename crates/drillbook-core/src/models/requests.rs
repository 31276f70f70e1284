//! Request types for updating models.

use super::RoutineExercise;

/// Partial update for an item. Unset fields are left untouched.
///
/// `title` and `description` apply to every kind; the remaining fields only
/// apply to exercise items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub tempo: Option<String>,
    pub duration: Option<String>,
    pub notes: Option<String>,
}

impl ItemPatch {
    /// Whether the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && !self.touches_exercise_fields()
    }

    /// Whether any exercise-only field is set.
    pub fn touches_exercise_fields(&self) -> bool {
        self.sets.is_some()
            || self.reps.is_some()
            || self.tempo.is_some()
            || self.duration.is_some()
            || self.notes.is_some()
    }
}

impl TryFrom<crate::params::EditItem> for ItemPatch {
    type Error = crate::DrillbookError;

    /// Convert edit parameters into a validated patch.
    ///
    /// # Errors
    ///
    /// * `DrillbookError::Validation` - When the new title is blank
    /// * `DrillbookError::Validation` - When no field is set
    fn try_from(params: crate::params::EditItem) -> Result<Self, Self::Error> {
        params.validate()?;

        Ok(Self {
            title: params.title.map(|t| t.trim().to_string()),
            description: params.description,
            sets: params.sets,
            reps: params.reps,
            tempo: params.tempo,
            duration: params.duration,
            notes: params.notes,
        })
    }
}

/// Partial update for a routine in the catalog.
#[derive(Debug, Clone, Default)]
pub struct RoutinePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub exercises: Option<Vec<RoutineExercise>>,
}
