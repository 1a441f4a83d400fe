// Tests for sorting and the query surface over a populated controller.
use chrono::NaiveDate;
use std::collections::BTreeSet;
use taskpad::TaskController;
use taskpad::model::{NewTask, Priority, SortKey, TaskStatus};
use taskpad::query::{self, FilterOptions};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn populated() -> TaskController {
    let mut c = TaskController::default();
    c.add_task(
        NewTask::new("Report", "Write the quarterly report")
            .due(date("2023-10-20"))
            .priority(Priority::Low)
            .category("work/reports")
            .tag("office"),
    )
    .unwrap();
    c.add_task(NewTask::new("Groceries", "Buy milk and eggs").tag("home"))
        .unwrap();
    c.add_task(
        NewTask::new("Dentist", "Book a checkup")
            .due(date("2023-10-16"))
            .priority(Priority::High)
            .category("health"),
    )
    .unwrap();
    c.add_task(
        NewTask::new("Plan trip", "Choose dates")
            .due(date("2023-10-16"))
            .priority(Priority::Medium),
    )
    .unwrap();
    c.mark_complete("Groceries").unwrap();
    c
}

fn titles(tasks: &[taskpad::model::Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.title.as_str()).collect()
}

#[test]
fn test_sort_by_due_date_is_stable_and_undated_last() {
    let mut c = populated();
    c.sort(SortKey::DueDate);
    assert_eq!(
        titles(c.tasks()),
        vec!["Dentist", "Plan trip", "Report", "Groceries"]
    );
}

#[test]
fn test_sort_by_priority() {
    let mut c = populated();
    c.sort(SortKey::Priority);
    assert_eq!(
        titles(c.tasks()),
        vec!["Dentist", "Plan trip", "Report", "Groceries"]
    );
}

#[test]
fn test_sort_by_status_complete_first() {
    let mut c = populated();
    c.sort(SortKey::Status);
    assert_eq!(c.tasks()[0].title, "Groceries");
    assert!(c.tasks()[1..].iter().all(|t| t.status == TaskStatus::Incomplete));
}

#[test]
fn test_sort_preserves_multiset() {
    let mut c = populated();
    let mut before: Vec<String> = c.tasks().iter().map(|t| t.title.clone()).collect();
    c.sort(SortKey::Priority);
    let mut after: Vec<String> = c.tasks().iter().map(|t| t.title.clone()).collect();
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn test_keyword_search_is_case_insensitive() {
    let c = populated();
    let hits = query::by_keywords(c.tasks(), &["MILK", "quarterly"]);
    assert_eq!(titles(&hits), vec!["Report", "Groceries"]);
    assert!(query::by_keywords::<&str>(c.tasks(), &[]).is_empty());
}

#[test]
fn test_category_and_tags() {
    let c = populated();
    assert_eq!(titles(&query::by_category(c.tasks(), "health")), vec!["Dentist"]);
    assert_eq!(
        titles(&query::by_category_path(c.tasks(), &["work", "reports"])),
        vec!["Report"]
    );
    assert!(query::by_category_path(c.tasks(), &["work"]).is_empty());

    let tags: BTreeSet<String> = ["home".to_string(), "garden".to_string()].into();
    assert_eq!(titles(&query::by_tags(c.tasks(), &tags)), vec!["Groceries"]);
}

#[test]
fn test_due_soon_window() {
    let c = populated();
    let hits = query::due_soon(c.tasks(), 3, date("2023-10-15"));
    assert_eq!(titles(&hits), vec!["Dentist", "Plan trip"]);
}

#[test]
fn test_combined_filter() {
    let c = populated();
    let options = FilterOptions {
        status: Some(TaskStatus::Incomplete),
        keywords: vec!["report".into(), "dates".into()],
        ..FilterOptions::default()
    };
    assert_eq!(titles(&c.filter(&options)), vec!["Report", "Plan trip"]);
    assert_eq!(c.filter(&FilterOptions::default()).len(), 4);
}
