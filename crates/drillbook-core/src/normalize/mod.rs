//! Save-time normalization and its inverse.
//!
//! [`normalize`] turns an editable [`ProgramDocument`] into the flat
//! [`WireProgram`] handed to a store:
//!
//! - a day without authored items becomes a single synthetic rest drill,
//! - otherwise rest markers are dropped and drills are numbered `1..N` in list
//!   order,
//! - weekdays become day numbers through [`DayNumbering`],
//! - the duration is recomputed from the week list.
//!
//! The document is only borrowed; a failed save therefore cannot leave it
//! half-normalized. [`hydrate`] reads a wire program back into a document.

use log::debug;

use crate::models::{Day, Item, ItemKind, ProgramDocument, Week};

pub mod hydrate;
pub mod numbering;
pub mod wire;


pub use hydrate::hydrate;
pub use numbering::DayNumbering;
pub use wire::{DrillPayload, WireDay, WireDrill, WireProgram, WireWeek};

/// Title of the synthetic drill that marks a day without training.
pub const REST_DAY_TITLE: &str = "Rest Day";

/// Description of the synthetic rest drill.
pub const REST_DAY_DESCRIPTION: &str = "Recovery day - no scheduled training";

/// Flatten a document into its wire form.
///
/// Scalar metadata is passed through as is; callers run
/// [`ProgramDocument::validate_metadata`] first.
pub fn normalize(document: &ProgramDocument, numbering: DayNumbering) -> WireProgram {
    let weeks: Vec<WireWeek> = document
        .weeks()
        .iter()
        .enumerate()
        .map(|(index, week)| normalize_week(index as u32 + 1, week, numbering))
        .collect();

    debug!(
        "normalize: '{}' with {} weeks ({})",
        document.title,
        weeks.len(),
        numbering
    );

    WireProgram {
        id: document.program_id(),
        title: document.title.clone(),
        description: document.description.clone(),
        focus_area: document
            .focus_area
            .as_ref()
            .map(|focus| focus.as_str().to_string())
            .unwrap_or_default(),
        duration: weeks.len() as u32,
        weeks,
    }
}

fn normalize_week(week_number: u32, week: &Week, numbering: DayNumbering) -> WireWeek {
    let mut days: Vec<WireDay> = week
        .days()
        .map(|day| normalize_day(day, numbering))
        .collect();
    days.sort_by_key(|day| day.day_number);

    WireWeek {
        id: Some(week.id.to_string()),
        week_number,
        title: week.name.clone(),
        description: week.description.clone(),
        days,
    }
}

fn normalize_day(day: &Day, numbering: DayNumbering) -> WireDay {
    let drills = if day.is_rest_day() {
        vec![rest_drill()]
    } else {
        day.authored_items()
            .enumerate()
            .map(|(index, item)| to_drill(index as u32 + 1, item))
            .collect()
    };

    WireDay {
        day_number: numbering.day_number(day.weekday),
        title: day.weekday.label().to_string(),
        description: None,
        drills,
    }
}

fn rest_drill() -> WireDrill {
    WireDrill {
        id: None,
        order: 1,
        title: REST_DAY_TITLE.to_string(),
        description: Some(REST_DAY_DESCRIPTION.to_string()),
        payload: DrillPayload::Rest,
        superset_id: None,
        superset_order: None,
    }
}

fn to_drill(order: u32, item: &Item) -> WireDrill {
    let payload = match &item.kind {
        ItemKind::Exercise(details) => DrillPayload::Exercise {
            sets: details.sets,
            reps: details.reps,
            tempo: details.tempo.clone(),
            duration: details.duration.clone(),
            notes: details.notes.clone(),
        },
        ItemKind::Video(video) => DrillPayload::Video {
            video_id: video.video_id.clone(),
            url: video.url.clone(),
            thumbnail: video.thumbnail.clone(),
            duration: video.duration.clone(),
        },
        ItemKind::Routine(reference) => DrillPayload::Routine {
            routine_id: reference.routine_id,
            routine_name: reference.name.clone(),
            routine_description: reference.description.clone(),
        },
        ItemKind::Rest => DrillPayload::Rest,
    };

    WireDrill {
        id: Some(item.id.to_string()),
        order,
        title: item.title.clone(),
        description: item.description.clone(),
        payload,
        superset_id: item.superset.as_ref().map(|m| m.group.to_string()),
        superset_order: item.superset.as_ref().map(|m| m.order),
    }
}
