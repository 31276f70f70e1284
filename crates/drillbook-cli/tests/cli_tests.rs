use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Temporary directory holding the test database
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// A `drill` command with plain output against the given database
fn drill_cmd(db_arg: &str) -> Command {
    let mut cmd = Command::cargo_bin("drill").expect("Failed to find drill binary");
    cmd.args(["--no-color", "--database-file", db_arg]);
    cmd
}

fn run_ok(db_arg: &str, args: &[&str]) -> String {
    let output = drill_cmd(db_arg)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).expect("Invalid UTF-8")
}

#[test]
fn test_cli_no_command_lists_programs() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    drill_cmd(db_path.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("# Saved Programs"))
        .stdout(predicate::str::contains("No programs found."));
}

#[test]
fn test_cli_new_draft() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    drill_cmd(db_path.to_str().unwrap())
        .args([
            "draft",
            "new",
            "--title",
            "Preseason Hitting",
            "--focus",
            "hitting",
            "--weeks",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created draft with ID: 1"))
        .stdout(predicate::str::contains("# Preseason Hitting"))
        .stdout(predicate::str::contains("- Focus: hitting"))
        .stdout(predicate::str::contains("### 2. Week 2 `w2`"));
}

#[test]
fn test_cli_new_draft_rejects_zero_weeks() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    drill_cmd(db_path.to_str().unwrap())
        .args(["draft", "new", "--weeks", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duration must be at least one week"));
}

#[test]
fn test_cli_author_and_save_program() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    run_ok(db_arg, &["draft", "new", "-t", "Preseason", "-f", "hitting"]);

    drill_cmd(db_arg)
        .args([
            "item",
            "add-exercise",
            "1",
            "1",
            "mon",
            "Tee Work",
            "--sets",
            "3",
            "--reps",
            "10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success: Added exercise i1 to week 1 / Monday",
        ));

    drill_cmd(db_arg)
        .args(["draft", "save", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved program 'Preseason' (ID: 1)"))
        .stdout(predicate::str::contains("- **Monday** (1): Tee Work"));

    drill_cmd(db_arg)
        .args(["program", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Preseason (ID: 1)"))
        .stdout(predicate::str::contains("1 weeks, 1 drills"));

    // A second save updates the same program
    run_ok(db_arg, &["draft", "set", "1", "--title", "Preseason v2"]);
    drill_cmd(db_arg)
        .args(["draft", "save", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ID: 1)"));

    drill_cmd(db_arg)
        .args(["program", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Preseason v2"));
}

#[test]
fn test_cli_save_requires_focus_area() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    run_ok(db_arg, &["draft", "new", "-t", "No Focus"]);

    drill_cmd(db_arg)
        .args(["draft", "save", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Choose a focus area"));

    drill_cmd(db_arg)
        .args(["program", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No programs found."));
}

#[test]
fn test_cli_week_commands() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    run_ok(db_arg, &["draft", "new", "-t", "Weeks"]);

    drill_cmd(db_arg)
        .args(["week", "add", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Added week 2"));

    drill_cmd(db_arg)
        .args(["week", "rename", "1", "2", "--name", "Deload"])
        .assert()
        .success();

    drill_cmd(db_arg)
        .args(["week", "reorder", "1", "--order", "2,1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reordered weeks: 2, 1"));

    drill_cmd(db_arg)
        .args(["draft", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 1. Deload `w2`"))
        .stdout(predicate::str::contains("### 2. Week 2 `w1`"));

    run_ok(db_arg, &["week", "remove", "1", "1"]);

    drill_cmd(db_arg)
        .args(["week", "remove", "1", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot remove the last remaining week"));
}

#[test]
fn test_cli_week_number_starts_at_one() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    run_ok(db_arg, &["draft", "new"]);

    drill_cmd(db_arg)
        .args(["week", "remove", "1", "0"])
        .assert()
        .failure();
}

#[test]
fn test_cli_superset_link_and_members() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    run_ok(db_arg, &["draft", "new"]);
    run_ok(db_arg, &["item", "add-exercise", "1", "1", "wed", "Squat"]);
    run_ok(db_arg, &["item", "add-exercise", "1", "1", "wed", "Box Jump"]);

    drill_cmd(db_arg)
        .args(["superset", "link", "1", "1", "wed", "i1", "i2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Linked i1 and i2 into superset s1"));

    drill_cmd(db_arg)
        .args(["superset", "members", "1", "1", "wed", "s1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[superset s1 #1]"))
        .stdout(predicate::str::contains("[superset s1 #2]"));

    drill_cmd(db_arg)
        .args(["superset", "link", "1", "1", "wed", "i1", "i9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item 'i9' not found"));
}

#[test]
fn test_cli_routine_reference() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    drill_cmd(db_arg)
        .args([
            "routine",
            "create",
            "Warmup",
            "-e",
            "Jumping Jacks",
            "-e",
            "Arm Circles",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created routine with ID: 1"))
        .stdout(predicate::str::contains("2. Arm Circles"));

    run_ok(db_arg, &["draft", "new"]);

    drill_cmd(db_arg)
        .args(["item", "add-routine", "1", "1", "tue", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Added routine 1 as i1 to week 1 / Tuesday",
        ));

    drill_cmd(db_arg)
        .args(["item", "add-routine", "1", "1", "tue", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Routine with ID 42 not found"));

    run_ok(db_arg, &["routine", "update", "1", "--name", "Dynamic Warmup"]);

    drill_cmd(db_arg)
        .args(["draft", "refresh", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Refreshed 1 routine reference(s)"));

    drill_cmd(db_arg)
        .args(["draft", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Dynamic Warmup**"));
}

#[test]
fn test_cli_video_item() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    drill_cmd(db_arg)
        .args(["video", "add", "yt-1", "Load and Launch", "--duration", "4:10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created video with ID: yt-1"));

    drill_cmd(db_arg)
        .args(["video", "search", "launch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Load and Launch"));

    run_ok(db_arg, &["draft", "new"]);

    drill_cmd(db_arg)
        .args(["item", "add-video", "1", "1", "fri", "yt-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added video i1 to week 1 / Friday"));

    drill_cmd(db_arg)
        .args(["item", "add-video", "1", "1", "fri", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Video 'missing' not found"));
}

#[test]
fn test_cli_program_json_uses_day_numbering() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    run_ok(db_arg, &["draft", "new", "-t", "Numbered", "-f", "Bat Speed"]);
    run_ok(db_arg, &["item", "add-exercise", "1", "1", "mon", "Tee Work"]);
    run_ok(
        db_arg,
        &["--day-numbering", "sunday-first", "draft", "save", "1"],
    );

    let output = run_ok(db_arg, &["program", "show", "1", "--json"]);
    let program: serde_json::Value =
        serde_json::from_str(&output).expect("Failed to parse program JSON");

    assert_eq!(program["focusArea"], "Bat Speed");
    let days = program["weeks"][0]["days"]
        .as_array()
        .expect("Failed to read days");
    let monday = days
        .iter()
        .find(|day| day["title"] == "Monday")
        .expect("Failed to find Monday");
    assert_eq!(monday["dayNumber"], 2);
    assert_eq!(monday["drills"][0]["type"], "exercise");

    drill_cmd(db_arg)
        .args(["focus", "choices"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- hitting"))
        .stdout(predicate::str::contains("- Bat Speed"));
}

#[test]
fn test_cli_program_delete_requires_confirm() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    run_ok(db_arg, &["draft", "new", "-t", "Doomed", "-f", "fielding"]);
    run_ok(db_arg, &["draft", "save", "1"]);

    drill_cmd(db_arg)
        .args(["program", "delete", "1"])
        .assert()
        .failure();

    drill_cmd(db_arg)
        .args(["program", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted program 'Doomed' (ID: 1)"));
}

#[test]
fn test_cli_schema() {
    drill_cmd_without_database()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"WireProgram\""))
        .stdout(predicate::str::contains("focusArea"));
}

fn drill_cmd_without_database() -> Command {
    Command::cargo_bin("drill").expect("Failed to find drill binary")
}
