// Tests that listing order is insertion order minus removed tasks.
use taskpad::TaskController;

fn titles(c: &TaskController) -> Vec<String> {
    c.tasks().iter().map(|t| t.title.clone()).collect()
}

#[test]
fn test_middle_removal_keeps_remaining_order() {
    let mut c = TaskController::default();
    c.add_task(("A", "d")).unwrap();
    c.add_task(("B", "d")).unwrap();
    c.add_task(("C", "d")).unwrap();
    assert!(c.remove_task("B").unwrap());
    c.add_task(("D", "d")).unwrap();
    c.add_task(("E", "d")).unwrap();
    assert!(c.remove_task("D").unwrap());
    c.add_task(("F", "d")).unwrap();

    assert_eq!(titles(&c), vec!["A", "C", "E", "F"]);
}

#[test]
fn test_readded_title_goes_to_the_end() {
    let mut c = TaskController::default();
    for t in ["A", "B", "C", "D", "E"] {
        c.add_task((t, "d")).unwrap();
    }
    c.remove_task("C").unwrap();
    c.remove_task("A").unwrap();
    c.add_task(("C", "back again")).unwrap();

    assert_eq!(titles(&c), vec!["B", "D", "E", "C"]);
}

#[test]
fn test_order_survives_undo_of_middle_removal() {
    let mut c = TaskController::default();
    for t in ["A", "B", "C", "D"] {
        c.add_task((t, "d")).unwrap();
    }
    c.remove_task("C").unwrap();
    assert_eq!(titles(&c), vec!["A", "B", "D"]);

    c.undo().unwrap();
    assert_eq!(titles(&c), vec!["A", "B", "C", "D"]);
}
