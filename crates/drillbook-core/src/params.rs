//! Parameter structures for drillbook operations.
//!
//! These structures are shared by every front end and carry no framework
//! derives beyond serde (and `schemars` behind the `schema` feature). The CLI
//! defines its own clap `Args` structs and converts them into these with
//! `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │───▶│ Library/Editor  │
//! │  (clap derives) │    │ (validate())    │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Parameters that can be wrong in ways the type cannot express provide a
//! `validate()` method returning `DrillbookError::Validation`.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{DrillbookError, Result},
    models::{FocusArea, RoutineExercise, RoutinePatch, VideoDescriptor},
};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for starting a new draft program.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateDraft {
    /// Working title; may be filled in later
    #[serde(default)]
    pub title: Option<String>,
    pub description: Option<String>,
    /// Focus area: one of the known tags or any custom text
    pub focus_area: Option<String>,
    /// Number of weeks to start with (defaults to 1)
    pub duration: Option<u32>,
}

impl CreateDraft {
    /// Check the requested duration and parse the focus area.
    ///
    /// # Errors
    ///
    /// * `DrillbookError::Validation` - When duration is zero
    /// * `DrillbookError::Validation` - When focus area is blank
    pub fn validate(&self) -> Result<Option<FocusArea>> {
        if self.duration == Some(0) {
            return Err(DrillbookError::validation("duration")
                .with_reason("Duration must be at least one week"));
        }

        match &self.focus_area {
            None => Ok(None),
            Some(focus) if focus.trim().is_empty() => Err(DrillbookError::validation("focus_area")
                .with_reason("Focus area must not be blank")),
            Some(focus) => Ok(Some(FocusArea::from(focus.clone()))),
        }
    }
}

/// Parameters for editing an item. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct EditItem {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Exercise items only
    pub sets: Option<u32>,
    /// Exercise items only
    pub reps: Option<u32>,
    /// Exercise items only, e.g. `2-0-2`
    pub tempo: Option<String>,
    /// Exercise items only, free-form text such as `30s`
    pub duration: Option<String>,
    /// Exercise items only
    pub notes: Option<String>,
}

impl EditItem {
    /// Validate edit parameters.
    ///
    /// # Errors
    ///
    /// * `DrillbookError::Validation` - When the new title is blank
    /// * `DrillbookError::Validation` - When no field is set
    ///
    /// # Examples
    ///
    /// ```rust
    /// use drillbook_core::params::EditItem;
    ///
    /// let params = EditItem {
    ///     reps: Some(12),
    ///     ..Default::default()
    /// };
    /// assert!(params.validate().is_ok());
    /// assert!(EditItem::default().validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(
                    DrillbookError::validation("title").with_reason("Item title must not be empty")
                );
            }
        }

        let any_set = self.title.is_some()
            || self.description.is_some()
            || self.sets.is_some()
            || self.reps.is_some()
            || self.tempo.is_some()
            || self.duration.is_some()
            || self.notes.is_some();
        if !any_set {
            return Err(DrillbookError::validation("item")
                .with_reason("Nothing to change: set at least one field"));
        }

        Ok(())
    }
}

/// Parameters for creating a routine in the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateRoutine {
    /// Name of the routine (required)
    pub name: String,
    pub description: Option<String>,
    /// Ordered exercise templates
    #[serde(default)]
    pub exercises: Vec<RoutineExercise>,
}

impl CreateRoutine {
    /// # Errors
    ///
    /// * `DrillbookError::Validation` - When the name or an exercise title is
    ///   blank
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DrillbookError::validation("name").with_reason("Routine name is required"));
        }
        validate_exercises(&self.exercises)
    }
}

/// Parameters for updating a routine. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateRoutine {
    /// Routine ID to update (required)
    pub id: u64,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Replacement exercise list
    pub exercises: Option<Vec<RoutineExercise>>,
}

impl UpdateRoutine {
    /// Validate and convert into a catalog patch.
    ///
    /// # Errors
    ///
    /// * `DrillbookError::Validation` - When the new name or an exercise title
    ///   is blank
    pub fn validate(&self) -> Result<RoutinePatch> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(
                    DrillbookError::validation("name").with_reason("Routine name must not be empty")
                );
            }
        }
        if let Some(exercises) = &self.exercises {
            validate_exercises(exercises)?;
        }

        Ok(RoutinePatch {
            name: self.name.as_ref().map(|n| n.trim().to_string()),
            description: self.description.clone(),
            exercises: self.exercises.clone(),
        })
    }
}

fn validate_exercises(exercises: &[RoutineExercise]) -> Result<()> {
    match exercises.iter().position(|e| e.title.trim().is_empty()) {
        Some(index) => Err(DrillbookError::validation("exercises")
            .with_reason(format!("Exercise {} has no title", index + 1))),
        None => Ok(()),
    }
}

/// Parameters for registering a video descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateVideo {
    /// External video identifier (required)
    pub id: String,
    /// Display title (required)
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub url: Option<String>,
    pub thumbnail: Option<String>,
}

impl CreateVideo {
    /// # Errors
    ///
    /// * `DrillbookError::Validation` - When the id or title is blank
    pub fn validate(&self) -> Result<VideoDescriptor> {
        if self.id.trim().is_empty() {
            return Err(DrillbookError::validation("id").with_reason("Video id is required"));
        }
        if self.title.trim().is_empty() {
            return Err(DrillbookError::validation("title").with_reason("Video title is required"));
        }

        Ok(VideoDescriptor {
            id: self.id.trim().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            duration: self.duration.clone(),
            url: self.url.clone(),
            thumbnail: self.thumbnail.clone(),
        })
    }
}

/// Parameters for searching video descriptors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SearchVideos {
    /// Text to match against titles and descriptions; empty lists all
    #[serde(default)]
    pub query: String,
}

/// Parameters for deleting a saved program.
///
/// Deletion is permanent and requires explicit confirmation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteProgram {
    /// The ID of the program to delete
    pub id: u64,
    /// Must be true to proceed
    #[serde(default)]
    pub confirmed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExerciseDetails;

    #[test]
    fn test_create_draft_validation() {
        let params = CreateDraft {
            duration: Some(0),
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = CreateDraft {
            focus_area: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = CreateDraft {
            focus_area: Some("Pitching".to_string()),
            duration: Some(4),
            ..Default::default()
        };
        assert_eq!(params.validate().unwrap(), Some(FocusArea::Pitching));
    }

    #[test]
    fn test_edit_item_validation() {
        let blank = EditItem {
            title: Some(" ".to_string()),
            ..Default::default()
        };
        match blank.validate().unwrap_err() {
            DrillbookError::Validation { field, .. } => assert_eq!(field, "title"),
            other => panic!("Expected validation error, got {other:?}"),
        }
        assert!(EditItem::default().validate().is_err());
    }

    #[test]
    fn test_edit_item_into_patch_trims_title() {
        let params = EditItem {
            title: Some("  Tee Work ".to_string()),
            sets: Some(3),
            ..Default::default()
        };
        let patch = crate::models::ItemPatch::try_from(params).unwrap();
        assert_eq!(patch.title.as_deref(), Some("Tee Work"));
        assert_eq!(patch.sets, Some(3));
    }

    #[test]
    fn test_routine_validation() {
        let params = CreateRoutine {
            name: "Warmup A".to_string(),
            description: None,
            exercises: vec![RoutineExercise {
                title: "".to_string(),
                details: ExerciseDetails::default(),
            }],
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("Exercise 1 has no title"));

        let update = UpdateRoutine {
            id: 1,
            name: Some(" Warmup B ".to_string()),
            ..Default::default()
        };
        assert_eq!(update.validate().unwrap().name.as_deref(), Some("Warmup B"));
    }

    #[test]
    fn test_create_video_validation() {
        let params = CreateVideo {
            id: "yt-1".to_string(),
            title: String::new(),
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = CreateVideo {
            id: " yt-1 ".to_string(),
            title: "Load and Launch".to_string(),
            ..Default::default()
        };
        assert_eq!(params.validate().unwrap().id, "yt-1");
    }
}
