//! Tests for the mutation engine.

use jiff::Timestamp;

use super::*;
use crate::{
    ids::{IdSource, ItemId, SequentialIds, WeekId},
    models::{ExerciseDetails, Item, ItemKind, ItemPatch, ProgramDocument, Routine, RoutineExercise},
};

const MONDAY: DayRef = DayRef {
    week: 0,
    weekday: Weekday::Monday,
};
const TUESDAY: DayRef = DayRef {
    week: 0,
    weekday: Weekday::Tuesday,
};

fn fresh() -> (SequentialIds, ProgramDocument) {
    let mut ids = SequentialIds::new();
    let document = ProgramDocument::new(&mut ids);
    (ids, document)
}

fn tee_work() -> ExerciseDetails {
    ExerciseDetails {
        sets: Some(3),
        reps: Some(10),
        tempo: Some("2-0-2".to_string()),
        ..Default::default()
    }
}

fn warmup_routine() -> Routine {
    let at = Timestamp::from_second(1640995200).unwrap();
    Routine {
        id: 7,
        name: "Warmup A".to_string(),
        description: None,
        exercises: ["Arm Circles", "Leg Swings", "Jog"]
            .into_iter()
            .map(|title| RoutineExercise {
                title: title.to_string(),
                details: ExerciseDetails::default(),
            })
            .collect(),
        created_at: at,
        updated_at: at,
    }
}

fn titles(document: &ProgramDocument, at: DayRef) -> Vec<String> {
    document
        .day(at)
        .unwrap()
        .items
        .iter()
        .map(|item| item.title.clone())
        .collect()
}

fn add(document: &mut ProgramDocument, ids: &mut SequentialIds, at: DayRef, title: &str) -> ItemId {
    document
        .add_exercise(at, title, ExerciseDetails::default(), ids)
        .expect("Failed to add exercise")
}

#[test]
fn test_add_week_appends_default_named_week() {
    let (mut ids, mut document) = fresh();

    let index = document.add_week(&mut ids);

    assert_eq!(index, 1);
    assert_eq!(document.duration(), 2);
    assert_eq!(document.weeks()[1].name, "Week 2");
    assert_eq!(document.weeks()[1].position, 2);
    assert!(document.weeks()[1].days().all(|d| d.items.is_empty()));
}

#[test]
fn test_remove_week_errors() {
    let (mut ids, mut document) = fresh();

    // Only week left
    assert!(matches!(
        document.remove_week(0),
        Err(DrillbookError::LastWeek)
    ));

    // Stale index
    document.add_week(&mut ids);
    assert!(matches!(
        document.remove_week(5),
        Err(DrillbookError::WeekNotFound { index: 5, len: 2 })
    ));
    assert_eq!(document.duration(), 2);
}

#[test]
fn test_remove_week_renames_default_names_only() {
    let (mut ids, mut document) = fresh();
    document.set_week_duration(3, &mut ids).unwrap();
    document
        .rename_week(2, Some("Deload".to_string()), None)
        .unwrap();

    document.remove_week(0).unwrap();

    let names: Vec<&str> = document.weeks().iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["Week 1", "Deload"]);
    assert_eq!(document.weeks()[1].position, 2);
    assert_eq!(document.duration(), 2);
}

#[test]
fn test_duplicate_week_uses_fresh_identities() {
    let (mut ids, mut document) = fresh();
    let a = add(&mut document, &mut ids, MONDAY, "Tee Work");
    let b = add(&mut document, &mut ids, MONDAY, "Band Pulls");
    let group = document.link(MONDAY, &a, &b, &mut ids).unwrap();

    let index = document.duplicate_week(0, &mut ids).unwrap();
    assert_eq!(index, 1);
    assert_eq!(document.duration(), 2);

    let copy = &document.weeks()[1];
    assert_eq!(copy.name, "Week 2");
    assert_ne!(copy.id, document.weeks()[0].id);

    let monday = copy.day(Weekday::Monday);
    assert_eq!(monday.items.len(), 2);
    assert!(monday.items.iter().all(|item| item.id != a && item.id != b));

    let copied_group = monday.items[0].superset_group().cloned().unwrap();
    assert_ne!(copied_group, group);
    assert_eq!(monday.items[1].superset_group(), Some(&copied_group));
    assert_eq!(monday.items[1].superset.as_ref().unwrap().order, 2);
}

#[test]
fn test_duplicate_week_marks_custom_names() {
    let (mut ids, mut document) = fresh();
    document
        .rename_week(0, Some("Tryout Prep".to_string()), None)
        .unwrap();

    document.duplicate_week(0, &mut ids).unwrap();

    assert_eq!(document.weeks()[1].name, "Tryout Prep (copy)");
}

#[test]
fn test_set_week_duration_grows_and_truncates() {
    let (mut ids, mut document) = fresh();
    add(&mut document, &mut ids, MONDAY, "Week One Drill");

    // Grow to three weeks and fill the last one
    document.set_week_duration(3, &mut ids).unwrap();
    assert_eq!(document.weeks().len(), 3);
    let week3 = DayRef::new(2, Weekday::Monday);
    add(&mut document, &mut ids, week3, "Week Three Drill");

    // Shrink back to one
    document.set_week_duration(1, &mut ids).unwrap();
    assert_eq!(document.weeks().len(), 1);
    assert_eq!(document.duration(), 1);
    assert_eq!(titles(&document, MONDAY), vec!["Week One Drill"]);
    assert_eq!(document.item_count(), 1);
}

#[test]
fn test_set_week_duration_rejects_zero() {
    let (mut ids, mut document) = fresh();
    let before = document.clone();

    let err = document.set_week_duration(0, &mut ids).unwrap_err();

    assert!(matches!(err, DrillbookError::Validation { .. }));
    assert_eq!(document, before);
}

#[test]
fn test_reorder_weeks() {
    let (mut ids, mut document) = fresh();
    document.set_week_duration(3, &mut ids).unwrap();
    let week_ids: Vec<WeekId> = document.weeks().iter().map(|w| w.id.clone()).collect();

    let reversed: Vec<WeekId> = week_ids.iter().rev().cloned().collect();
    document.reorder_weeks(&reversed).unwrap();

    let now: Vec<WeekId> = document.weeks().iter().map(|w| w.id.clone()).collect();
    assert_eq!(now, reversed);
    let positions: Vec<u32> = document.weeks().iter().map(|w| w.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);
    assert_eq!(document.weeks()[0].name, "Week 1");
}

#[test]
fn test_reorder_weeks_rejects_bad_permutations() {
    let (mut ids, mut document) = fresh();
    document.set_week_duration(2, &mut ids).unwrap();
    let first = document.weeks()[0].id.clone();
    let second = document.weeks()[1].id.clone();
    let before = document.clone();

    for order in [
        vec![first.clone()],
        vec![first.clone(), first.clone()],
        vec![first.clone(), WeekId::from("w99")],
        vec![first.clone(), second.clone(), second.clone()],
    ] {
        let err = document.reorder_weeks(&order).unwrap_err();
        assert!(
            matches!(err, DrillbookError::InvalidPermutation { .. }),
            "Expected InvalidPermutation for {order:?}, got {err:?}"
        );
    }
    assert_eq!(document, before);
}

#[test]
fn test_add_item_errors_leave_document_unchanged() {
    let (mut ids, mut document) = fresh();
    let before = document.clone();

    let err = document
        .add_exercise(DayRef::new(3, Weekday::Friday), "Drill", ExerciseDetails::default(), &mut ids)
        .unwrap_err();
    assert!(matches!(err, DrillbookError::WeekNotFound { .. }));

    let err = document
        .add_exercise(MONDAY, "   ", ExerciseDetails::default(), &mut ids)
        .unwrap_err();
    assert!(matches!(err, DrillbookError::Validation { .. }));

    assert_eq!(document, before);
}

#[test]
fn test_add_item_rejects_duplicate_id() {
    let (mut ids, mut document) = fresh();
    let id = add(&mut document, &mut ids, MONDAY, "Tee Work");

    let duplicate = crate::models::Item::exercise(id, "Again", ExerciseDetails::default());
    let err = document.add_item(TUESDAY, duplicate).unwrap_err();

    assert!(matches!(err, DrillbookError::Validation { .. }));
    assert!(document.day(TUESDAY).unwrap().items.is_empty());
}

#[test]
fn test_edit_item_merges_patch() {
    let (mut ids, mut document) = fresh();
    let a = document
        .add_exercise(MONDAY, "Tee Work", tee_work(), &mut ids)
        .unwrap();
    let b = add(&mut document, &mut ids, MONDAY, "Band Pulls");
    document.link(MONDAY, &a, &b, &mut ids).unwrap();

    let patch = ItemPatch {
        reps: Some(12),
        notes: Some("Focus on the back side".to_string()),
        ..Default::default()
    };
    document.edit_item(MONDAY, &a, &patch).unwrap();

    let item = document.day(MONDAY).unwrap().item(&a).unwrap();
    assert_eq!(item.id, a);
    assert!(item.superset.is_some());
    match &item.kind {
        ItemKind::Exercise(details) => {
            assert_eq!(details.sets, Some(3));
            assert_eq!(details.reps, Some(12));
            assert_eq!(details.tempo.as_deref(), Some("2-0-2"));
            assert_eq!(details.notes.as_deref(), Some("Focus on the back side"));
        }
        other => panic!("Expected exercise, got {other:?}"),
    }
}

#[test]
fn test_edit_item_rejects_exercise_fields_on_routine() {
    let (mut ids, mut document) = fresh();
    let id = document
        .add_routine(TUESDAY, &warmup_routine(), &mut ids)
        .unwrap();
    let before = document.clone();

    let patch = ItemPatch {
        title: Some("Renamed".to_string()),
        sets: Some(4),
        ..Default::default()
    };
    let err = document.edit_item(TUESDAY, &id, &patch).unwrap_err();

    assert!(matches!(err, DrillbookError::Validation { .. }));
    assert_eq!(document, before);
}

#[test]
fn test_edit_item_not_found() {
    let (_ids, mut document) = fresh();

    let err = document
        .edit_item(MONDAY, &ItemId::from("i404"), &ItemPatch::default())
        .unwrap_err();

    match err {
        DrillbookError::ItemNotFound { id, location } => {
            assert_eq!(id.as_str(), "i404");
            assert_eq!(location, "week 1 / Monday");
        }
        other => panic!("Expected ItemNotFound, got {other:?}"),
    }
}

#[test]
fn test_add_routine_never_copies_exercises() {
    let (mut ids, mut document) = fresh();
    let routine = warmup_routine();

    document.add_routine(TUESDAY, &routine, &mut ids).unwrap();

    let tuesday = document.day(TUESDAY).unwrap();
    assert_eq!(tuesday.items.len(), 1);
    assert_eq!(tuesday.items[0].routine_id(), Some(7));
    assert_eq!(routine.exercises.len(), 3);
    assert_eq!(document.item_count(), 1);
}

#[test]
fn test_link_and_unlink() {
    let (mut ids, mut document) = fresh();
    let tee = add(&mut document, &mut ids, MONDAY, "Tee Work");
    let bands = add(&mut document, &mut ids, MONDAY, "Band Pulls");

    let group = document.link(MONDAY, &tee, &bands, &mut ids).unwrap();

    let members = document.superset_members(MONDAY, &group).unwrap();
    let orders: Vec<(String, u32)> = members
        .iter()
        .map(|m| (m.title.clone(), m.superset.as_ref().unwrap().order))
        .collect();
    assert_eq!(
        orders,
        vec![("Tee Work".to_string(), 1), ("Band Pulls".to_string(), 2)]
    );

    // Unlinking one member clears the whole group
    assert_eq!(document.unlink(MONDAY, &tee).unwrap(), 2);
    let day = document.day(MONDAY).unwrap();
    assert!(day.items.iter().all(|item| item.superset.is_none()));

    // Unlinking again is a no-op
    assert_eq!(document.unlink(MONDAY, &tee).unwrap(), 0);
}

#[test]
fn test_link_joins_existing_group() {
    let (mut ids, mut document) = fresh();
    let a = add(&mut document, &mut ids, MONDAY, "A");
    let b = add(&mut document, &mut ids, MONDAY, "B");
    let c = add(&mut document, &mut ids, MONDAY, "C");

    let group = document.link(MONDAY, &a, &b, &mut ids).unwrap();
    let joined = document.link(MONDAY, &c, &b, &mut ids).unwrap();

    assert_eq!(joined, group);
    let c_item = document.day(MONDAY).unwrap().item(&c).unwrap().clone();
    assert_eq!(c_item.superset.unwrap().order, 3);

    // Linking two members of the same group changes nothing
    let before = document.clone();
    assert_eq!(document.link(MONDAY, &a, &c, &mut ids).unwrap(), group);
    assert_eq!(document, before);
}

#[test]
fn test_link_errors() {
    let (mut ids, mut document) = fresh();
    let a = add(&mut document, &mut ids, MONDAY, "A");
    let b = add(&mut document, &mut ids, MONDAY, "B");
    let c = add(&mut document, &mut ids, MONDAY, "C");
    let d = add(&mut document, &mut ids, MONDAY, "D");
    let elsewhere = add(&mut document, &mut ids, TUESDAY, "Elsewhere");
    document.link(MONDAY, &a, &b, &mut ids).unwrap();
    document.link(MONDAY, &c, &d, &mut ids).unwrap();
    let before = document.clone();

    assert!(matches!(
        document.link(MONDAY, &a, &a, &mut ids),
        Err(DrillbookError::Validation { .. })
    ));
    assert!(matches!(
        document.link(MONDAY, &a, &c, &mut ids),
        Err(DrillbookError::SupersetConflict { .. })
    ));
    assert!(matches!(
        document.link(MONDAY, &a, &elsewhere, &mut ids),
        Err(DrillbookError::ItemNotFound { .. })
    ));
    assert_eq!(document, before);
}

#[test]
fn test_link_rejects_rest_marker() {
    let (mut ids, mut document) = fresh();
    let tee = add(&mut document, &mut ids, MONDAY, "Tee Work");
    let rest = document
        .add_item(MONDAY, Item::rest(ids.next_item_id()))
        .expect("Failed to add rest marker");
    let before = document.clone();

    assert!(matches!(
        document.link(MONDAY, &tee, &rest, &mut ids),
        Err(DrillbookError::Validation { .. })
    ));
    assert!(matches!(
        document.link(MONDAY, &rest, &tee, &mut ids),
        Err(DrillbookError::Validation { .. })
    ));
    assert_eq!(document, before);

    let wire = crate::normalize::normalize(&document, crate::normalize::DayNumbering::MondayFirst);
    let monday = &wire.weeks[0].days[0];
    assert_eq!(monday.drills.len(), 1);
    assert_eq!(monday.drills[0].superset_id, None);
}

#[test]
fn test_delete_superset_member_unlinks_group() {
    let (mut ids, mut document) = fresh();
    let a = add(&mut document, &mut ids, MONDAY, "A");
    let b = add(&mut document, &mut ids, MONDAY, "B");
    document.link(MONDAY, &a, &b, &mut ids).unwrap();

    let removed = document.delete_item(MONDAY, &a).unwrap();

    assert_eq!(removed.title, "A");
    assert!(removed.superset.is_none());
    let day = document.day(MONDAY).unwrap();
    assert_eq!(day.items.len(), 1);
    assert!(day.items[0].superset.is_none());
}

#[test]
fn test_reorder_items_loose_keeps_order() {
    let (mut ids, mut document) = fresh();
    let a = add(&mut document, &mut ids, MONDAY, "A");
    let b = add(&mut document, &mut ids, MONDAY, "B");
    let c = add(&mut document, &mut ids, MONDAY, "C");
    document.link(MONDAY, &a, &c, &mut ids).unwrap();

    document
        .reorder_items(MONDAY, &[c.clone(), b.clone(), a.clone()], SupersetPolicy::Loose)
        .unwrap();

    assert_eq!(titles(&document, MONDAY), vec!["C", "B", "A"]);
}

#[test]
fn test_reorder_items_clustered_gathers_members() {
    let (mut ids, mut document) = fresh();
    let a = add(&mut document, &mut ids, MONDAY, "A");
    let b = add(&mut document, &mut ids, MONDAY, "B");
    let c = add(&mut document, &mut ids, MONDAY, "C");
    document.link(MONDAY, &a, &c, &mut ids).unwrap();

    document
        .reorder_items(MONDAY, &[b.clone(), c.clone(), a.clone()], SupersetPolicy::Clustered)
        .unwrap();

    // Members land at the first member's slot, in superset order
    assert_eq!(titles(&document, MONDAY), vec!["B", "A", "C"]);
}

#[test]
fn test_reorder_items_rejects_bad_permutation() {
    let (mut ids, mut document) = fresh();
    let a = add(&mut document, &mut ids, MONDAY, "A");
    add(&mut document, &mut ids, MONDAY, "B");
    let before = document.clone();

    let err = document
        .reorder_items(MONDAY, &[a.clone(), a.clone()], SupersetPolicy::Loose)
        .unwrap_err();

    assert!(matches!(err, DrillbookError::InvalidPermutation { .. }));
    assert_eq!(document, before);
}

#[test]
fn test_move_item_between_days() {
    let (mut ids, mut document) = fresh();
    let a = add(&mut document, &mut ids, MONDAY, "A");
    let b = add(&mut document, &mut ids, MONDAY, "B");
    document.link(MONDAY, &a, &b, &mut ids).unwrap();

    document.move_item(MONDAY, &a, TUESDAY).unwrap();

    assert_eq!(titles(&document, MONDAY), vec!["B"]);
    assert_eq!(titles(&document, TUESDAY), vec!["A"]);
    assert!(document.day(MONDAY).unwrap().items[0].superset.is_none());
    assert!(document.day(TUESDAY).unwrap().items[0].superset.is_none());
}

#[test]
fn test_move_item_to_missing_week_is_atomic() {
    let (mut ids, mut document) = fresh();
    let a = add(&mut document, &mut ids, MONDAY, "A");
    let before = document.clone();

    let err = document
        .move_item(MONDAY, &a, DayRef::new(4, Weekday::Monday))
        .unwrap_err();

    assert!(matches!(err, DrillbookError::WeekNotFound { .. }));
    assert_eq!(document, before);
}

#[test]
fn test_refresh_routine_snapshot() {
    let (mut ids, mut document) = fresh();
    let mut routine = warmup_routine();
    document.add_routine(TUESDAY, &routine, &mut ids).unwrap();
    document
        .add_routine(DayRef::new(0, Weekday::Thursday), &routine, &mut ids)
        .unwrap();

    routine.name = "Warmup B".to_string();
    routine.description = Some("Longer".to_string());
    assert_eq!(document.refresh_routine_snapshot(&routine), 2);

    let item = &document.day(TUESDAY).unwrap().items[0];
    assert_eq!(item.title, "Warmup B");
    match &item.kind {
        ItemKind::Routine(reference) => {
            assert_eq!(reference.name, "Warmup B");
            assert_eq!(reference.description.as_deref(), Some("Longer"));
        }
        other => panic!("Expected routine reference, got {other:?}"),
    }
    assert_eq!(document.referenced_routine_ids().into_iter().collect::<Vec<_>>(), vec![7]);
}

#[test]
fn test_week_rename_and_collapse() {
    let (_ids, mut document) = fresh();

    assert!(document.rename_week(0, Some("  ".to_string()), None).is_err());
    document
        .rename_week(0, Some("Opening Week".to_string()), Some("Intro".to_string()))
        .unwrap();
    document.set_week_collapsed(0, true).unwrap();

    let week = &document.weeks()[0];
    assert_eq!(week.name, "Opening Week");
    assert_eq!(week.description.as_deref(), Some("Intro"));
    assert!(week.collapsed);
    assert!(document.set_week_collapsed(1, true).is_err());
}

#[test]
fn test_permutation_helpers() {
    let current = vec!["a", "b", "c"];
    let indices = permutation_indices(&current, &["c", "a", "b"]).unwrap();
    assert_eq!(indices, vec![2, 0, 1]);
    assert_eq!(
        apply_permutation(vec![1, 2, 3], &indices),
        vec![3, 1, 2]
    );
}
