//! Tests for the editing session, using in-memory collaborators.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use async_trait::async_trait;
use jiff::Timestamp;

use super::*;
use crate::models::{
    ExerciseDetails, FocusArea, ItemKind, ProgramSummary, RoutinePatch, VideoDescriptor,
    Weekday,
};

const MONDAY: DayRef = DayRef {
    week: 0,
    weekday: Weekday::Monday,
};
const TUESDAY: DayRef = DayRef {
    week: 0,
    weekday: Weekday::Tuesday,
};

#[derive(Default)]
struct MemoryStore {
    programs: Mutex<Vec<WireProgram>>,
    fail: AtomicBool,
}

#[async_trait]
impl ProgramStore for MemoryStore {
    async fn save_program(&self, program: &WireProgram) -> Result<WireProgram> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DrillbookError::Configuration {
                message: "store offline".to_string(),
            });
        }
        let mut programs = self.programs.lock().unwrap();
        let mut saved = program.clone();
        let id = saved.id.unwrap_or(programs.len() as u64 + 1);
        saved.id = Some(id);
        programs.retain(|p| p.id != Some(id));
        programs.push(saved.clone());
        Ok(saved)
    }

    async fn get_program(&self, id: u64) -> Result<WireProgram> {
        self.programs
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == Some(id))
            .cloned()
            .ok_or(DrillbookError::ProgramNotFound { id })
    }

    async fn list_programs(&self) -> Result<Vec<ProgramSummary>> {
        Ok(Vec::new())
    }

    async fn delete_program(&self, _id: u64) -> Result<()> {
        Ok(())
    }
}

struct MemoryCatalog {
    routines: Mutex<Vec<Routine>>,
}

impl MemoryCatalog {
    fn with_warmup() -> Self {
        let at = Timestamp::from_second(1640995200).unwrap();
        Self {
            routines: Mutex::new(vec![Routine {
                id: 1,
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
            }]),
        }
    }
}

#[async_trait]
impl RoutineCatalog for MemoryCatalog {
    async fn list_routines(&self) -> Result<Vec<Routine>> {
        Ok(self.routines.lock().unwrap().clone())
    }

    async fn get_routine(&self, id: u64) -> Result<Routine> {
        self.routines
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(DrillbookError::RoutineNotFound { id })
    }

    async fn create_routine(
        &self,
        name: &str,
        description: Option<&str>,
        exercises: &[RoutineExercise],
    ) -> Result<Routine> {
        let mut routines = self.routines.lock().unwrap();
        let at = Timestamp::now();
        let routine = Routine {
            id: routines.len() as u64 + 1,
            name: name.to_string(),
            description: description.map(str::to_string),
            exercises: exercises.to_vec(),
            created_at: at,
            updated_at: at,
        };
        routines.push(routine.clone());
        Ok(routine)
    }

    async fn update_routine(&self, id: u64, patch: &RoutinePatch) -> Result<Routine> {
        let mut routines = self.routines.lock().unwrap();
        let routine = routines
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DrillbookError::RoutineNotFound { id })?;
        if let Some(name) = &patch.name {
            routine.name = name.clone();
        }
        Ok(routine.clone())
    }

    async fn delete_routine(&self, id: u64) -> Result<Routine> {
        let mut routines = self.routines.lock().unwrap();
        let index = routines
            .iter()
            .position(|r| r.id == id)
            .ok_or(DrillbookError::RoutineNotFound { id })?;
        Ok(routines.remove(index))
    }
}

struct OneVideo;

#[async_trait]
impl VideoSource for OneVideo {
    async fn search_videos(&self, _query: &str) -> Result<Vec<VideoDescriptor>> {
        Ok(vec![self.get_video("yt-1").await?])
    }

    async fn get_video(&self, id: &str) -> Result<VideoDescriptor> {
        if id != "yt-1" {
            return Err(DrillbookError::VideoNotFound { id: id.to_string() });
        }
        Ok(VideoDescriptor {
            id: "yt-1".to_string(),
            title: "Load and Launch".to_string(),
            description: None,
            duration: None,
            url: Some("https://video.example/yt-1".to_string()),
            thumbnail: None,
        })
    }
}

fn titled_editor() -> Editor {
    let mut editor = Editor::new(EditorOptions::default());
    editor
        .edit(|doc, _| {
            doc.title = "Off-season Hitting".to_string();
            doc.focus_area = Some(FocusArea::Hitting);
            Ok(())
        })
        .unwrap();
    editor
}

#[tokio::test]
async fn test_save_replaces_document_with_canonical_form() {
    let store = MemoryStore::default();
    let mut editor = titled_editor();
    editor
        .edit(|doc, ids| doc.add_exercise(MONDAY, "Tee Work", ExerciseDetails::default(), ids))
        .unwrap();
    editor.edit(|doc, _| doc.set_week_collapsed(0, true)).unwrap();

    let saved = editor.save(&store).await.expect("Failed to save");

    assert_eq!(saved.id, Some(1));
    assert_eq!(saved.weeks[0].days.len(), 7);
    assert_eq!(editor.document().program_id(), Some(1));
    assert_eq!(editor.document().item_count(), 1);
    assert!(editor.document().weeks()[0].collapsed);

    // Saving again updates the same program
    let again = editor.save(&store).await.unwrap();
    assert_eq!(again.id, Some(1));
    assert_eq!(store.programs.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_failed_save_leaves_document_untouched() {
    let store = MemoryStore::default();
    store.fail.store(true, Ordering::SeqCst);
    let mut editor = titled_editor();
    editor
        .edit(|doc, ids| doc.add_exercise(MONDAY, "Tee Work", ExerciseDetails::default(), ids))
        .unwrap();
    let before = editor.document().clone();

    let err = editor.save(&store).await.unwrap_err();

    assert!(matches!(err, DrillbookError::Persistence { .. }));
    assert!(err.is_retryable());
    assert_eq!(editor.document(), &before);

    // Retry once the store is back
    store.fail.store(false, Ordering::SeqCst);
    assert!(editor.save(&store).await.is_ok());
}

#[tokio::test]
async fn test_save_requires_title_and_focus_area() {
    let store = MemoryStore::default();
    let mut editor = Editor::new(EditorOptions::default());

    let err = editor.save(&store).await.unwrap_err();

    assert!(matches!(err, DrillbookError::Validation { .. }));
    assert!(store.programs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_load_hydrates_saved_program() {
    let store = MemoryStore::default();
    let mut editor = titled_editor();
    editor.edit(|doc, ids| doc.set_week_duration(2, ids)).unwrap();
    editor.save(&store).await.unwrap();

    let loaded = Editor::load(
        &store,
        1,
        Box::new(SequentialIds::new()),
        EditorOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(loaded.document().duration(), 2);
    assert_eq!(loaded.document().title, "Off-season Hitting");
    assert_eq!(loaded.document().item_count(), 0);
}

#[tokio::test]
async fn test_loaded_editor_keeps_ids_unique() {
    let store = MemoryStore::default();
    let mut editor = titled_editor();
    editor
        .edit(|doc, ids| doc.add_exercise(MONDAY, "Tee Work", ExerciseDetails::default(), ids))
        .unwrap();
    editor.save(&store).await.expect("Failed to save");

    let mut loaded = Editor::load(
        &store,
        1,
        Box::new(SequentialIds::new()),
        EditorOptions::default(),
    )
    .await
    .expect("Failed to load program");

    let added = loaded
        .edit(|doc, ids| doc.add_exercise(MONDAY, "Band Pulls", ExerciseDetails::default(), ids))
        .expect("Failed to add exercise after load");
    assert_eq!(added.as_str(), "i2");

    loaded.edit(|doc, ids| Ok(doc.add_week(ids))).unwrap();
    let week_ids: Vec<_> = loaded
        .document()
        .weeks()
        .iter()
        .map(|week| week.id.clone())
        .collect();
    assert_eq!(week_ids.len(), 2);
    assert_ne!(week_ids[0], week_ids[1]);

    let reversed: Vec<_> = week_ids.iter().rev().cloned().collect();
    loaded
        .edit(|doc, _| doc.reorder_weeks(&reversed))
        .expect("Failed to reorder weeks after load");
    assert_eq!(loaded.document().weeks()[0].id, week_ids[1]);
}

#[test]
fn test_open_reserves_existing_ids() {
    let mut ids = SequentialIds::new();
    let mut document = ProgramDocument::new(&mut ids);
    document
        .add_exercise(MONDAY, "Tee Work", ExerciseDetails::default(), &mut ids)
        .unwrap();

    let mut editor = Editor::open(
        document,
        Box::new(SequentialIds::new()),
        EditorOptions::default(),
    );
    let week = editor.edit(|doc, ids| Ok(doc.add_week(ids))).unwrap();

    assert_eq!(editor.document().weeks()[week].id.as_str(), "w2");
}

#[tokio::test]
async fn test_add_routine_from_catalog() {
    let catalog = MemoryCatalog::with_warmup();
    let mut editor = titled_editor();

    let id = editor
        .add_routine_from_catalog(&catalog, TUESDAY, 1)
        .await
        .unwrap();

    let tuesday = editor.document().day(TUESDAY).unwrap();
    assert_eq!(tuesday.items.len(), 1);
    assert_eq!(tuesday.items[0].id, id);
    assert!(matches!(tuesday.items[0].kind, ItemKind::Routine(_)));
    assert_eq!(catalog.get_routine(1).await.unwrap().exercises.len(), 3);

    let err = editor
        .add_routine_from_catalog(&catalog, TUESDAY, 99)
        .await
        .unwrap_err();
    assert!(matches!(err, DrillbookError::RoutineNotFound { id: 99 }));
}

#[tokio::test]
async fn test_create_routine_inline_and_refresh() {
    let catalog = MemoryCatalog::with_warmup();
    let mut editor = titled_editor();

    let (routine, _) = editor
        .create_routine_and_add(&catalog, MONDAY, "Cooldown", Some("Stretch"), &[])
        .await
        .unwrap();
    assert_eq!(routine.id, 2);

    catalog
        .update_routine(
            2,
            &RoutinePatch {
                name: Some("Long Cooldown".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(editor.refresh_routines(&catalog).await.unwrap(), 1);
    assert_eq!(
        editor.document().day(MONDAY).unwrap().items[0].title,
        "Long Cooldown"
    );

    // A deleted routine keeps its last snapshot
    catalog.delete_routine(2).await.unwrap();
    assert_eq!(editor.refresh_routines(&catalog).await.unwrap(), 0);
}

#[tokio::test]
async fn test_add_video_from_source() {
    let mut editor = titled_editor();

    editor
        .add_video_from_source(&OneVideo, MONDAY, "yt-1")
        .await
        .unwrap();
    let err = editor
        .add_video_from_source(&OneVideo, MONDAY, "missing")
        .await
        .unwrap_err();

    assert!(matches!(err, DrillbookError::VideoNotFound { .. }));
    assert_eq!(editor.document().item_count(), 1);
}

#[test]
fn test_reorder_follows_session_policy() {
    let mut editor = Editor::new(EditorOptions {
        superset_policy: SupersetPolicy::Clustered,
        ..Default::default()
    });
    let (a, b, c) = editor
        .edit(|doc, ids| {
            let a = doc.add_exercise(MONDAY, "A", ExerciseDetails::default(), ids)?;
            let b = doc.add_exercise(MONDAY, "B", ExerciseDetails::default(), ids)?;
            let c = doc.add_exercise(MONDAY, "C", ExerciseDetails::default(), ids)?;
            doc.link(MONDAY, &a, &c, ids)?;
            Ok((a, b, c))
        })
        .unwrap();

    editor.reorder_items(MONDAY, &[c, b, a]).unwrap();

    let titles: Vec<&str> = editor
        .document()
        .day(MONDAY)
        .unwrap()
        .items
        .iter()
        .map(|i| i.title.as_str())
        .collect();
    assert_eq!(titles, vec!["A", "C", "B"]);
}
