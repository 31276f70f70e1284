//! Item model: the atomic unit of training content inside a day.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Routine, VideoDescriptor};
use crate::ids::{ItemId, SupersetId};

/// Payload of an exercise item. Every field is optional free-form data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ExerciseDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,

    /// Tempo notation such as `2-0-2`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<String>,

    /// Free-form duration text such as `30s` or `5 min`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Video fields copied from a descriptor at insertion time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoSnapshot {
    /// External video identifier
    pub video_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// Pointer to a routine plus a denormalized name/description snapshot.
///
/// The routine's exercises are never copied into the document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoutineRef {
    pub routine_id: u64,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Closed set of item kinds with their kind-specific payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    Exercise(ExerciseDetails),
    Video(VideoSnapshot),
    Routine(RoutineRef),
    Rest,
}

impl ItemKind {
    /// Wire/display name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Exercise(_) => "exercise",
            ItemKind::Video(_) => "video",
            ItemKind::Routine(_) => "routine",
            ItemKind::Rest => "rest",
        }
    }
}

/// Membership of an item in a superset group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupersetMembership {
    pub group: SupersetId,

    /// 1-based position within the group, in link order
    pub order: u32,
}

/// A single schedulable unit inside a day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub kind: ItemKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superset: Option<SupersetMembership>,
}

impl Item {
    pub fn exercise(id: ItemId, title: impl Into<String>, details: ExerciseDetails) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            kind: ItemKind::Exercise(details),
            superset: None,
        }
    }

    /// Build a video item by copying the descriptor's fields.
    pub fn video(id: ItemId, descriptor: &VideoDescriptor) -> Self {
        Self {
            id,
            title: descriptor.title.clone(),
            description: descriptor.description.clone(),
            kind: ItemKind::Video(VideoSnapshot {
                video_id: descriptor.id.clone(),
                url: descriptor.url.clone(),
                thumbnail: descriptor.thumbnail.clone(),
                duration: descriptor.duration.clone(),
            }),
            superset: None,
        }
    }

    /// Build a routine reference from a snapshot of the routine's identity.
    pub fn routine_reference(id: ItemId, routine: &Routine) -> Self {
        Self {
            id,
            title: routine.name.clone(),
            description: routine.description.clone(),
            kind: ItemKind::Routine(RoutineRef {
                routine_id: routine.id,
                name: routine.name.clone(),
                description: routine.description.clone(),
            }),
            superset: None,
        }
    }

    pub fn rest(id: ItemId) -> Self {
        Self {
            id,
            title: crate::normalize::REST_DAY_TITLE.to_string(),
            description: Some(crate::normalize::REST_DAY_DESCRIPTION.to_string()),
            kind: ItemKind::Rest,
            superset: None,
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self.kind, ItemKind::Rest)
    }

    pub fn superset_group(&self) -> Option<&SupersetId> {
        self.superset.as_ref().map(|m| &m.group)
    }

    /// Routine id when the item is a routine reference.
    pub fn routine_id(&self) -> Option<u64> {
        match &self.kind {
            ItemKind::Routine(reference) => Some(reference.routine_id),
            _ => None,
        }
    }
}
