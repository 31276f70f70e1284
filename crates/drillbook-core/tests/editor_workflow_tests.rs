mod common;

use common::create_test_library;
use drillbook_core::{
    engine::{DayRef, SupersetPolicy},
    models::{ExerciseDetails, FocusArea, ItemKind, Weekday},
    normalize::{DayNumbering, DrillPayload},
    params::CreateVideo,
    ports::{ProgramStore, RoutineCatalog},
    Editor, EditorOptions,
};

#[tokio::test]
#[allow(clippy::too_many_lines)]
async fn test_author_save_and_reload_program() {
    let (_temp_dir, library) = create_test_library().await;
    let options = EditorOptions {
        numbering: DayNumbering::SundayFirst,
        superset_policy: SupersetPolicy::Clustered,
    };

    library
        .add_video_result(&CreateVideo {
            id: "yt-7".to_string(),
            title: "Two-Seam Grip".to_string(),
            duration: Some("2:45".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to add video");

    let mut editor = Editor::new(options);
    let monday = DayRef::new(0, Weekday::Monday);
    let sunday = DayRef::new(1, Weekday::Sunday);

    // Metadata and a second week
    editor
        .edit(|document, ids| {
            document.title = "Pitching Build-up".to_string();
            document.focus_area = Some(FocusArea::Pitching);
            document.set_week_duration(2, ids)
        })
        .expect("Failed to set metadata");

    // Two exercises linked into a superset
    let (plyo, bands) = editor
        .edit(|document, ids| {
            let plyo = document.add_exercise(
                monday,
                "Plyo Ball Throws",
                ExerciseDetails {
                    sets: Some(2),
                    reps: Some(10),
                    ..Default::default()
                },
                ids,
            )?;
            let bands = document.add_exercise(monday, "Band ER", ExerciseDetails::default(), ids)?;
            document.link(monday, &plyo, &bands, ids)?;
            Ok((plyo, bands))
        })
        .expect("Failed to add exercises");

    let (routine, _) = editor
        .create_routine_and_add(&library, sunday, "Recovery Flow", None, &[])
        .await
        .expect("Failed to create routine inline");
    editor
        .add_video_from_source(&library, monday, "yt-7")
        .await
        .expect("Failed to add video");

    let saved = editor.save(&library).await.expect("Failed to save");
    let program_id = saved.id.expect("Saved program should carry an id");
    assert_eq!(saved.duration, 2);
    assert_eq!(saved.authored_drill_count(), 4);

    // Sunday-first numbering: Monday is day 2, days sorted by number
    let week_one = &saved.weeks[0];
    assert_eq!(week_one.days[0].title, "Sunday");
    let monday_wire = week_one
        .days
        .iter()
        .find(|day| day.day_number == 2)
        .expect("Monday should be day 2");
    assert_eq!(monday_wire.drills.len(), 3);
    assert_eq!(monday_wire.drills[0].superset_order, Some(1));
    assert_eq!(monday_wire.drills[1].superset_order, Some(2));
    assert!(matches!(
        monday_wire.drills[2].payload,
        DrillPayload::Video { ref video_id, .. } if video_id == "yt-7"
    ));

    let week_two_sunday = saved.weeks[1]
        .days
        .iter()
        .find(|day| day.day_number == 1)
        .expect("Sunday should be day 1");
    assert!(matches!(
        week_two_sunday.drills[0].payload,
        DrillPayload::Routine { routine_id, .. } if routine_id == routine.id
    ));

    // The session now mirrors the canonical saved form
    assert_eq!(editor.document().program_id(), Some(program_id));
    assert!(editor.document().contains_item(&plyo));
    assert!(editor.document().contains_item(&bands));

    // Reloading from the store gives back the same tree
    let reloaded = Editor::load(
        &library,
        program_id,
        Box::new(drillbook_core::ids::UuidIds),
        options,
    )
    .await
    .expect("Failed to load program");
    assert_eq!(reloaded.document(), editor.document());

    let catalog_routine = library
        .get_routine(routine.id)
        .await
        .expect("Routine should be in the catalog");
    assert_eq!(catalog_routine.name, "Recovery Flow");

    let stored = library
        .get_program(program_id)
        .await
        .expect("Failed to fetch program");
    assert_eq!(stored, saved);
}

#[tokio::test]
async fn test_resave_after_week_removal_updates_program() {
    let (_temp_dir, library) = create_test_library().await;

    let mut editor = Editor::new(EditorOptions::default());
    editor
        .edit(|document, ids| {
            document.title = "Fielding Fundamentals".to_string();
            document.focus_area = Some(FocusArea::Fielding);
            document.set_week_duration(3, ids)?;
            document.add_exercise(
                DayRef::new(2, Weekday::Wednesday),
                "Short Hops",
                ExerciseDetails::default(),
                ids,
            )
        })
        .expect("Failed to build document");
    let first = editor.save(&library).await.expect("Failed to save");

    let removed = editor
        .edit(|document, _| document.remove_week(0))
        .expect("Failed to remove week");
    assert_eq!(removed.position, 1);

    let second = editor.save(&library).await.expect("Failed to resave");
    assert_eq!(second.id, first.id);
    assert_eq!(second.duration, 2);
    assert_eq!(second.weeks[1].title, "Week 2");

    let summaries = library
        .list_programs()
        .await
        .expect("Failed to list programs");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].duration, 2);

    let wednesday = editor
        .document()
        .day(DayRef::new(1, Weekday::Wednesday))
        .expect("Failed to get day");
    assert!(matches!(wednesday.items[0].kind, ItemKind::Exercise(_)));
}
