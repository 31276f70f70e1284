//! Hydration: rebuild an editable document from a wire program.

use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use super::{DayNumbering, DrillPayload, WireDrill, WireProgram, WireWeek};
use crate::{
    error::{DrillbookError, Result},
    ids::{IdSource, ItemId, SupersetId, WeekId},
    models::{
        Day, ExerciseDetails, FocusArea, Item, ItemKind, ProgramDocument, RoutineRef,
        SupersetMembership, VideoSnapshot, Week, WeekDays,
    },
};

/// Rebuild a [`ProgramDocument`] from its wire form.
///
/// Weeks are taken in week-number order and drills in `order` order. Rest
/// drills are dropped. Persisted item and week ids are reused unless they are
/// missing or already taken, in which case `ids` supplies fresh ones.
/// Superset fields are kept; a group left with a single member is dissolved.
///
/// # Errors
///
/// * `DrillbookError::Validation` - no weeks, a blank focus area, a day
///   number outside 1..=7, or the same day number twice in one week
pub fn hydrate(
    wire: &WireProgram,
    numbering: DayNumbering,
    ids: &mut dyn IdSource,
) -> Result<ProgramDocument> {
    if wire.weeks.is_empty() {
        return Err(DrillbookError::validation("weeks")
            .with_reason("A program needs at least one week"));
    }
    if wire.focus_area.trim().is_empty() {
        return Err(
            DrillbookError::validation("focus_area").with_reason("Focus area must not be blank")
        );
    }

    let mut sorted: Vec<&WireWeek> = wire.weeks.iter().collect();
    sorted.sort_by_key(|week| week.week_number);

    let mut used_weeks: HashSet<String> = HashSet::new();
    let mut used_items: HashSet<String> = HashSet::new();
    let mut weeks = Vec::with_capacity(sorted.len());

    for (index, wire_week) in sorted.into_iter().enumerate() {
        let position = index as u32 + 1;
        let week_id = match &wire_week.id {
            Some(id) if used_weeks.insert(id.clone()) => WeekId::from(id.as_str()),
            _ => unused(&mut used_weeks, || ids.next_week_id()),
        };
        let days = hydrate_days(wire_week, position, numbering, &mut used_items, ids)?;

        let name = if wire_week.title.trim().is_empty() {
            Week::default_name(position)
        } else {
            wire_week.title.clone()
        };

        weeks.push(Week {
            id: week_id,
            position,
            name,
            description: wire_week.description.clone(),
            days,
            collapsed: false,
        });
    }

    let document = ProgramDocument::from_parts(
        wire.id,
        wire.title.clone(),
        wire.description.clone(),
        Some(FocusArea::from(wire.focus_area.clone())),
        weeks,
    );
    debug!(
        "hydrate: '{}' with {} weeks, {} items",
        document.title,
        document.duration(),
        document.item_count()
    );
    Ok(document)
}

fn hydrate_days(
    wire_week: &WireWeek,
    position: u32,
    numbering: DayNumbering,
    used_items: &mut HashSet<String>,
    ids: &mut dyn IdSource,
) -> Result<WeekDays> {
    let mut days = WeekDays::empty();
    let mut seen = HashSet::new();

    for wire_day in &wire_week.days {
        let weekday = numbering.weekday(wire_day.day_number).ok_or_else(|| {
            DrillbookError::validation("dayNumber").with_reason(format!(
                "Week {position} has day number {}, expected 1-7",
                wire_day.day_number
            ))
        })?;
        if !seen.insert(wire_day.day_number) {
            return Err(DrillbookError::validation("dayNumber").with_reason(format!(
                "Week {position} lists day number {} twice",
                wire_day.day_number
            )));
        }

        let mut drills: Vec<&WireDrill> = wire_day.drills.iter().filter(|d| !d.is_rest()).collect();
        drills.sort_by_key(|drill| drill.order);

        let day = days.get_mut(weekday);
        for drill in drills {
            let id = match &drill.id {
                Some(id) if used_items.insert(id.clone()) => ItemId::from(id.as_str()),
                _ => unused(used_items, || ids.next_item_id()),
            };
            day.items.push(to_item(id, drill));
        }
        repair_supersets(day);
    }

    Ok(days)
}

/// Draw ids until one is not taken yet, and mark it taken.
fn unused<T: ToString>(used: &mut HashSet<String>, mut next: impl FnMut() -> T) -> T {
    loop {
        let id = next();
        if used.insert(id.to_string()) {
            return id;
        }
    }
}

fn to_item(id: ItemId, drill: &WireDrill) -> Item {
    let kind = match &drill.payload {
        DrillPayload::Exercise {
            sets,
            reps,
            tempo,
            duration,
            notes,
        } => ItemKind::Exercise(ExerciseDetails {
            sets: *sets,
            reps: *reps,
            tempo: tempo.clone(),
            duration: duration.clone(),
            notes: notes.clone(),
        }),
        DrillPayload::Video {
            video_id,
            url,
            thumbnail,
            duration,
        } => ItemKind::Video(VideoSnapshot {
            video_id: video_id.clone(),
            url: url.clone(),
            thumbnail: thumbnail.clone(),
            duration: duration.clone(),
        }),
        DrillPayload::Routine {
            routine_id,
            routine_name,
            routine_description,
        } => ItemKind::Routine(RoutineRef {
            routine_id: *routine_id,
            name: routine_name.clone(),
            description: routine_description.clone(),
        }),
        DrillPayload::Rest => ItemKind::Rest,
    };

    Item {
        id,
        title: drill.title.clone(),
        description: drill.description.clone(),
        kind,
        superset: drill.superset_id.as_ref().map(|group| SupersetMembership {
            group: SupersetId::from(group.as_str()),
            order: drill.superset_order.unwrap_or(0),
        }),
    }
}

/// Dissolve single-member groups and give members without an order the
/// next free one.
fn repair_supersets(day: &mut Day) {
    let mut members: HashMap<SupersetId, usize> = HashMap::new();
    for group in day.items.iter().filter_map(Item::superset_group) {
        *members.entry(group.clone()).or_default() += 1;
    }

    let mut next_order: HashMap<SupersetId, u32> = HashMap::new();
    for membership in day.items.iter().filter_map(|item| item.superset.as_ref()) {
        let next = next_order.entry(membership.group.clone()).or_insert(1);
        *next = (*next).max(membership.order + 1);
    }

    for item in &mut day.items {
        let Some(membership) = &mut item.superset else {
            continue;
        };
        if members.get(&membership.group).copied().unwrap_or(0) < 2 {
            warn!(
                "hydrate: dropping single-member superset {} on '{}'",
                membership.group, item.title
            );
            item.superset = None;
            continue;
        }
        if membership.order == 0 {
            let next = next_order.entry(membership.group.clone()).or_insert(1);
            membership.order = *next;
            *next += 1;
        }
    }
}
