use drillbook_core::{Library, LibraryBuilder};
use tempfile::TempDir;

/// Helper function to create a library in a temporary directory
pub async fn create_test_library() -> (TempDir, Library) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let library = LibraryBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create library");
    (temp_dir, library)
}
