//! Program document: the editable Weeks → Days → Items tree.

use serde::{Deserialize, Serialize};

use super::{FocusArea, Week};
use crate::{
    error::{DrillbookError, Result},
    ids::{IdSource, ItemId},
};

/// The full editable training program plus its scalar metadata.
///
/// The week list and the duration are private so that
/// `duration == weeks.len()` holds after every structural edit; the
/// structural operations live in [`crate::engine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DocumentSnapshot", into = "DocumentSnapshot")]
pub struct ProgramDocument {
    pub(crate) program_id: Option<u64>,
    pub title: String,
    pub description: Option<String>,
    pub focus_area: Option<FocusArea>,
    pub(crate) weeks: Vec<Week>,
    pub(crate) duration: u32,
}

impl ProgramDocument {
    /// A fresh, unsaved document with one empty week.
    pub fn new(ids: &mut dyn IdSource) -> Self {
        Self {
            program_id: None,
            title: String::new(),
            description: None,
            focus_area: None,
            weeks: vec![Week::empty(ids.next_week_id(), 1)],
            duration: 1,
        }
    }

    /// A fresh document sized to `duration` empty weeks.
    pub fn with_duration(ids: &mut dyn IdSource, duration: u32) -> Result<Self> {
        let mut document = Self::new(ids);
        document.set_week_duration(duration, ids)?;
        Ok(document)
    }

    pub(crate) fn from_parts(
        program_id: Option<u64>,
        title: String,
        description: Option<String>,
        focus_area: Option<FocusArea>,
        weeks: Vec<Week>,
    ) -> Self {
        let mut document = Self {
            program_id,
            title,
            description,
            focus_area,
            weeks,
            duration: 0,
        };
        document.resync_weeks();
        document
    }

    /// Id of the saved program this document was hydrated from or saved as.
    pub fn program_id(&self) -> Option<u64> {
        self.program_id
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Week at a 0-based index.
    pub fn week(&self, index: usize) -> Result<&Week> {
        self.weeks.get(index).ok_or(DrillbookError::WeekNotFound {
            index,
            len: self.weeks.len(),
        })
    }

    pub(crate) fn week_mut(&mut self, index: usize) -> Result<&mut Week> {
        let len = self.weeks.len();
        self.weeks
            .get_mut(index)
            .ok_or(DrillbookError::WeekNotFound { index, len })
    }

    /// Number of authored items across the whole program.
    pub fn item_count(&self) -> usize {
        self.weeks.iter().map(Week::item_count).sum()
    }

    pub fn contains_item(&self, id: &ItemId) -> bool {
        self.weeks
            .iter()
            .flat_map(|week| week.days())
            .any(|day| day.position_of(id).is_some())
    }

    /// Check the scalar fields that must be set before the document is saved.
    ///
    /// # Errors
    ///
    /// * `DrillbookError::Validation` - title empty, focus area missing or
    ///   blank, or duration below one week
    pub fn validate_metadata(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(DrillbookError::validation("title").with_reason("Title is required"));
        }

        match &self.focus_area {
            None => {
                return Err(
                    DrillbookError::validation("focus_area").with_reason("Choose a focus area")
                )
            }
            Some(focus) if focus.is_blank() => {
                return Err(DrillbookError::validation("focus_area")
                    .with_reason("Custom focus area must not be blank"))
            }
            Some(_) => {}
        }

        if self.duration < 1 {
            return Err(DrillbookError::validation("duration")
                .with_reason("Duration must be at least one week"));
        }

        Ok(())
    }

    /// Renumber week positions, follow default names and resync duration.
    pub(crate) fn resync_weeks(&mut self) {
        for (index, week) in self.weeks.iter_mut().enumerate() {
            let position = index as u32 + 1;
            if week.position != position && week.has_default_name() {
                week.name = Week::default_name(position);
            }
            week.position = position;
        }
        self.duration = self.weeks.len() as u32;
    }
}

/// Serialized form of a document; rebuilt through the invariant checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DocumentSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    program_id: Option<u64>,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    focus_area: Option<FocusArea>,
    weeks: Vec<Week>,
    #[serde(default)]
    duration: u32,
}

impl TryFrom<DocumentSnapshot> for ProgramDocument {
    type Error = String;

    fn try_from(snapshot: DocumentSnapshot) -> std::result::Result<Self, Self::Error> {
        if snapshot.weeks.is_empty() {
            return Err("a program needs at least one week".to_string());
        }
        Ok(Self::from_parts(
            snapshot.program_id,
            snapshot.title,
            snapshot.description,
            snapshot.focus_area,
            snapshot.weeks,
        ))
    }
}

impl From<ProgramDocument> for DocumentSnapshot {
    fn from(document: ProgramDocument) -> Self {
        Self {
            program_id: document.program_id,
            title: document.title,
            description: document.description,
            focus_area: document.focus_area,
            weeks: document.weeks,
            duration: document.duration,
        }
    }
}
