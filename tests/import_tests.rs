// Tests for loading task files from disk.
use std::fs;
use taskpad::TaskController;
use taskpad::context::{AppContext, TestContext};
use taskpad::import::import_file;
use taskpad::model::Priority;

#[test]
fn test_import_json_file() {
    let ctx = TestContext::new();
    let path = ctx.get_data_dir().unwrap().join("tasks.json");
    fs::write(
        &path,
        r#"{"tasks": [
            {"title": "Buy groceries", "description": "Milk", "due": "2023-10-15", "priority": "High"},
            {"title": "", "description": "blank"},
            {"title": "Bad date", "description": "x", "due": "15/10/2023"}
        ]}"#,
    )
    .unwrap();

    let mut c = TaskController::default();
    let report = import_file(&mut c, &path, Some(Priority::Medium)).unwrap();
    assert_eq!(report.added, 1);
    assert_eq!(report.rejected.len(), 2);
    assert_eq!(c.tasks()[0].priority, Some(Priority::High));
    assert_eq!(c.history().undo_depth(), 1);
}

#[test]
fn test_import_toml_file() {
    let ctx = TestContext::new();
    let path = ctx.get_data_dir().unwrap().join("tasks.toml");
    fs::write(
        &path,
        "[[tasks]]\ntitle = \"Workout\"\ndescription = \"Gym\"\ntags = [\"health\"]\n",
    )
    .unwrap();

    let mut c = TaskController::default();
    let report = import_file(&mut c, &path, Some(Priority::Medium)).unwrap();
    assert_eq!(report.added, 1);
    let task = c.find("Workout").unwrap();
    assert!(task.tags.contains("health"));
    assert_eq!(task.priority, Some(Priority::Medium));
}

#[test]
fn test_import_missing_file_errors() {
    let ctx = TestContext::new();
    let path = ctx.get_data_dir().unwrap().join("absent.json");
    let mut c = TaskController::default();
    assert!(import_file(&mut c, &path, Some(Priority::Medium)).is_err());
    assert!(c.tasks().is_empty());
}
