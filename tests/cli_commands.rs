// Tests for one-shot CLI commands run against a controller.
use chrono::NaiveDate;
use clap::Parser;
use taskpad::TaskController;
use taskpad::cli::{Cli, execute};
use taskpad::config::Config;
use taskpad::model::Priority;

fn run(c: &mut TaskController, args: &[&str]) -> anyhow::Result<Vec<String>> {
    let today = NaiveDate::from_ymd_opt(2023, 10, 15).unwrap();
    let cli = Cli::try_parse_from(std::iter::once("taskpad").chain(args.iter().copied()))?;
    let command = cli.command.expect("command required");
    execute(&command, c, &Config::default(), today)
}

#[test]
fn test_add_then_list() {
    let mut c = TaskController::default();
    let out = run(&mut c, &["add", "Buy milk", "Two litres", "--due", "2023-10-16"]).unwrap();
    assert_eq!(out, vec!["Task 'Buy milk' added successfully."]);
    assert_eq!(c.tasks()[0].priority, Some(Priority::Medium));

    let out = run(&mut c, &["list"]).unwrap();
    assert_eq!(
        out,
        vec![
            "Listing all tasks:",
            "Title: Buy milk, Description: Two litres, Status: incomplete"
        ]
    );
}

#[test]
fn test_complete_and_due_soon() {
    let mut c = TaskController::default();
    run(&mut c, &["add", "Dentist", "Checkup", "--due", "2023-10-17", "-p", "high"]).unwrap();
    let out = run(&mut c, &["complete", "Dentist"]).unwrap();
    assert_eq!(out, vec!["Task 'Dentist' marked as complete."]);

    let out = run(&mut c, &["due-soon"]).unwrap();
    assert_eq!(out, vec!["Title: Dentist, Due Date: 2023-10-17, Priority: high"]);
}

#[test]
fn test_errors_surface() {
    let mut c = TaskController::default();
    assert!(run(&mut c, &["remove", "Ghost"]).is_err());
    assert!(run(&mut c, &["add", "", ""]).is_err());
    assert!(run(&mut c, &["list"]).unwrap().contains(&"No tasks available.".to_string()));
}

#[test]
fn test_due_soon_with_huge_window() {
    let mut c = TaskController::default();
    run(&mut c, &["add", "Dentist", "Checkup", "--due", "2023-10-16"]).unwrap();
    run(&mut c, &["add", "Someday", "No date"]).unwrap();

    let out = run(&mut c, &["due-soon", "--days", "4000000000"]).unwrap();
    assert_eq!(out, vec!["Title: Dentist, Due Date: 2023-10-16, Priority: medium"]);

    let out = run(&mut c, &["search", "--due-within", "4000000000"]).unwrap();
    assert_eq!(out.len(), 1);
}
