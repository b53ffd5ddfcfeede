//! Behaviour of the autocomplete engine as seen through its public API.

use autocomplete_input::{Autocomplete, AutocompleteError, DropdownRow, DropdownState};
use rstest::rstest;

mod common;
use common::{fruits, items, owned};

#[rstest]
#[case("apple", &["Apple", "Pineapple"])]
#[case("berry", &["Blueberry", "Blackberry", "Cranberry", "Elderberry", "Raspberry", "Strawberry"])]
#[case("MELON", &["Melon", "Watermelon"])]
#[case("an", &["Banana", "Cranberry", "Mango", "Orange", "Pomegranate", "Tangerine"])]
#[case("xyz", &[])]
#[case("", &[])]
fn test_fruit_matches(mut fruits: Autocomplete, #[case] query: &str, #[case] expected: &[&str]) {
    fruits.set_query(query);
    assert_eq!(fruits.matches(), owned(expected));
}

#[rstest]
#[case(&["Apple", "Apricot", "Banana"], "ap", &["Apple", "Apricot"])]
#[case(&["before", "after", "afternoon"], "for", &["before"])]
#[case(
    &["before", "after", "afternoon", "beforehand", "therefor"],
    "for",
    &["before", "beforehand", "therefor"]
)]
#[case(
    &["JavaScript", "TypeScript", "CoffeeScript", "Python"],
    "script",
    &["JavaScript", "TypeScript", "CoffeeScript"]
)]
#[case(
    &["GameObject", "ScriptableObject", "MonoBehaviour", "Component"],
    "OBJECT",
    &["GameObject", "ScriptableObject"]
)]
#[case(&["Apple", "Application", "Apricot", "Banana"], "app", &["Apple", "Application"])]
#[case(
    &["testtest", "contest", "fastest", "testing"],
    "test",
    &["testtest", "contest", "fastest", "testing"]
)]
#[case(&["Apple", "APRICOT", "aPpLe"], "AP", &["Apple", "APRICOT", "aPpLe"])]
fn test_substring_matching(
    #[case] candidates: &[&str],
    #[case] query: &str,
    #[case] expected: &[&str],
) {
    let mut ac = Autocomplete::new(owned(candidates));
    ac.set_query(query);
    assert_eq!(ac.matches(), owned(expected));
}

#[rstest]
fn test_scroll_down_then_back_up(mut items: Autocomplete) {
    for _ in 0..4 {
        items.navigate_next();
    }
    assert_eq!(items.selected_index(), Some(4));
    assert_eq!(items.scroll_offset(), 2);

    for _ in 0..3 {
        items.navigate_previous();
    }
    assert_eq!(items.selected_index(), Some(1));
    assert_eq!(items.scroll_offset(), 1);
}

#[rstest]
fn test_previous_from_top_wraps_to_end(#[with(7, 3)] mut items: Autocomplete) {
    items.navigate_previous();
    assert_eq!(items.selected_index(), Some(6));
    assert_eq!(items.scroll_offset(), 4);
    assert_eq!(items.current_selection(), Some("Item7"));
}

#[rstest]
fn test_previous_wrap_when_matches_fit(#[with(2, 5)] mut items: Autocomplete) {
    items.navigate_previous();
    assert_eq!(items.selected_index(), Some(1));
    assert_eq!(items.scroll_offset(), 0);
}

#[rstest]
fn test_large_list_round_trip(#[with(20, 5)] mut items: Autocomplete) {
    for _ in 0..19 {
        items.navigate_next();
    }
    assert_eq!(items.selected_index(), Some(19));
    assert_eq!(items.scroll_offset(), 15);

    for _ in 0..19 {
        items.navigate_previous();
    }
    assert_eq!(items.selected_index(), Some(0));
    assert_eq!(items.scroll_offset(), 0);
}

#[rstest]
#[case(0)]
#[case(2)]
#[case(5)]
fn test_full_cycle_returns_to_start(#[with(6, 3)] mut items: Autocomplete, #[case] start: usize) {
    for _ in 0..start {
        items.navigate_next();
    }
    let offset = items.scroll_offset();
    for _ in 0..6 {
        items.navigate_next();
        let selected = items.selected_index().unwrap();
        assert!(items.scroll_offset() <= selected);
        assert!(selected < items.scroll_offset() + 3);
    }
    assert_eq!(items.selected_index(), Some(start));
    assert_eq!(items.scroll_offset(), offset);
}

#[rstest]
#[case(5, 10, 6)]
#[case(3, 10, 4)]
#[case(7, 10, 8)]
#[case(5, 3, 3)]
#[case(5, 5, 5)]
fn test_rendered_row_count(#[case] window: usize, #[case] total: usize, #[case] rows: usize) {
    let candidates: Vec<String> = (1..=total).map(|i| "a".repeat(i)).collect();
    let mut ac = Autocomplete::new(candidates)
        .with_window_size(window)
        .unwrap();
    ac.set_query("a");
    let rendered = ac.render_dropdown();
    assert_eq!(rendered.len(), rows);
    assert_eq!(rendered.last() == Some(&DropdownRow::Overflow), total > window);
}

#[rstest]
fn test_dropdown_state_follows_query(mut fruits: Autocomplete) {
    assert_eq!(fruits.dropdown_state(), DropdownState::Closed);
    fruits.set_query("pe");
    assert_eq!(fruits.dropdown_state(), DropdownState::Open);
    fruits.navigate_next();
    assert_eq!(fruits.dropdown_state(), DropdownState::Open);
    fruits.set_query("pez");
    assert_eq!(fruits.dropdown_state(), DropdownState::Closed);
    assert!(fruits.render_dropdown().is_empty());
    fruits.set_query("");
    assert_eq!(fruits.dropdown_state(), DropdownState::Closed);
}

#[rstest]
fn test_render_highlights_first_occurrence(mut fruits: Autocomplete) {
    fruits.set_query("APPLE");
    let rows = fruits.render_dropdown();
    let spans: Vec<(&str, Option<(usize, usize)>)> = rows
        .iter()
        .map(|row| (row.text(), row.highlight()))
        .collect();
    assert_eq!(
        spans,
        vec![("Apple", Some((0, 5))), ("Pineapple", Some((4, 5)))]
    );
    assert!(rows[0].is_selected());
    assert!(!rows[1].is_selected());
}

#[test]
fn test_current_selection_after_next() {
    let mut ac = Autocomplete::new(owned(&["test1", "test2", "test3"]));
    assert_eq!(ac.current_selection(), None);
    ac.set_query("test");
    ac.navigate_next();
    assert_eq!(ac.current_selection(), Some("test2"));
    assert_eq!(ac.render_inline_completion(), Some("2"));
}

#[test]
fn test_navigation_without_matches_is_noop() {
    let mut ac = Autocomplete::new(Vec::new());
    ac.navigate_next();
    ac.navigate_previous();
    assert_eq!(ac.selected_index(), None);
    assert_eq!(ac.scroll_offset(), 0);
    assert_eq!(ac.current_selection(), None);
    assert!(ac.render_dropdown().is_empty());
}

#[test]
fn test_zero_window_rejected() {
    assert!(matches!(
        Autocomplete::new(Vec::new()).with_window_size(0),
        Err(AutocompleteError::InvalidWindowSize(0))
    ));
}
