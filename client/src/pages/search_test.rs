use super::*;

// =============================================================
// Greeting
// =============================================================

#[test]
fn morning_hours_greet_with_morning() {
    assert!(greeting_for_hour(5).starts_with("Good morning"));
    assert!(greeting_for_hour(12).starts_with("Good morning"));
    assert!(greeting_for_hour(17).starts_with("Good morning"));
}

#[test]
fn evening_hours_greet_with_evening() {
    assert!(greeting_for_hour(18).starts_with("Good evening"));
    assert!(greeting_for_hour(23).starts_with("Good evening"));
    assert!(greeting_for_hour(0).starts_with("Good evening"));
    assert!(greeting_for_hour(4).starts_with("Good evening"));
}

// =============================================================
// Book selection
// =============================================================

#[test]
fn toggling_an_unselected_book_appends_it() {
    let mut selected = vec!["a".to_owned()];
    toggle_selection(&mut selected, "b");
    assert_eq!(selected, vec!["a".to_owned(), "b".to_owned()]);
}

#[test]
fn toggling_a_selected_book_removes_it() {
    let mut selected = vec!["a".to_owned(), "b".to_owned()];
    toggle_selection(&mut selected, "a");
    assert_eq!(selected, vec!["b".to_owned()]);
}

#[test]
fn selection_order_is_preserved_across_toggles() {
    let mut selected = Vec::new();
    toggle_selection(&mut selected, "first");
    toggle_selection(&mut selected, "second");
    toggle_selection(&mut selected, "first");
    toggle_selection(&mut selected, "first");
    assert_eq!(selected, vec!["second".to_owned(), "first".to_owned()]);
}
