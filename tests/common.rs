//! Shared test fixtures and utilities for autocomplete-input tests.
//!
//! This module provides helpers for loading candidate lists and rstest fixtures.

#![allow(dead_code)]

use autocomplete_input::Autocomplete;
use rstest::fixture;

/// Load a newline separated candidate list from `tests/fixtures/`.
pub fn load_candidates(name: &str) -> Vec<String> {
    let dir = env!("CARGO_MANIFEST_DIR");
    let path = format!("{dir}/tests/fixtures/{name}.txt");
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to load fixture {path}: {e}"))
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// `Item1` through `Item{count}`.
pub fn numbered(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Item{i}")).collect()
}

/// Engine over the fruit fixture with the default window size.
#[fixture]
pub fn fruits() -> Autocomplete {
    Autocomplete::new(load_candidates("fruits"))
}

/// Engine over `count` numbered items, already queried with "item".
#[fixture]
pub fn items(#[default(6)] count: usize, #[default(3)] window: usize) -> Autocomplete {
    let mut ac = Autocomplete::new(numbered(count))
        .with_window_size(window)
        .unwrap();
    ac.set_query("item");
    ac
}
