//! Flat, persistable representation of a program.
//!
//! Keys are camelCase. Days carry a numeric `dayNumber` (see
//! [`DayNumbering`](super::DayNumbering)) and drills an explicit 1-based
//! `order`; nothing here relies on list position.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A saved or about-to-be-saved program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct WireProgram {
    /// Store-assigned id, absent before the first save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Focus-area tag; custom values are stored verbatim
    pub focus_area: String,

    /// Number of weeks
    pub duration: u32,

    pub weeks: Vec<WireWeek>,
}

impl WireProgram {
    /// Number of drills excluding rest markers.
    pub fn authored_drill_count(&self) -> usize {
        self.weeks
            .iter()
            .flat_map(|week| &week.days)
            .flat_map(|day| &day.drills)
            .filter(|drill| !drill.is_rest())
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct WireWeek {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// 1-based position
    pub week_number: u32,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub days: Vec<WireDay>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct WireDay {
    /// 1..=7 under the configured numbering
    pub day_number: u8,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub drills: Vec<WireDrill>,
}

/// One entry of a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct WireDrill {
    /// Editor item id, reused on hydration when present and unique
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// 1-based position within the day
    pub order: u32,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub payload: DrillPayload,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superset_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superset_order: Option<u32>,
}

impl WireDrill {
    pub fn is_rest(&self) -> bool {
        matches!(self.payload, DrillPayload::Rest)
    }
}

/// Kind-specific drill fields, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrillPayload {
    Exercise {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sets: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reps: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tempo: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Video {
        video_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thumbnail: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Routine {
        routine_id: u64,
        routine_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        routine_description: Option<String>,
    },
    Rest,
}
