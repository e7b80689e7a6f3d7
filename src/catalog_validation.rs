//! Invariant checks for word catalogs.
//!
//! Used by guard-rail tests to keep the built-in lists within the shape the
//! composer relies on: short lowercase words, sorted without duplicates, and
//! no word shared between categories.

use crate::catalog::{Catalog, CategoryKind};
use std::collections::BTreeMap;

/// Longest word a category may hold.
pub const MAX_WORD_LEN: usize = 6;

/// Smallest list size the built-in categories are held to.
pub const MIN_CATEGORY_WORDS: usize = 200;

/// Check every category and return one message per violation.
///
/// An empty result means the catalog is well formed.
pub fn validate_catalog(catalog: &Catalog) -> Vec<String> {
    // Report everything at once so a bad edit to the lists shows all of its
    // fallout in a single test run.
    let mut errors = Vec::new();
    let mut owners: BTreeMap<&str, CategoryKind> = BTreeMap::new();

    for category in catalog.categories() {
        let name = category.name();
        if category.is_empty() {
            errors.push(format!("{name} has no words"));
            continue;
        }
        if category.len() < MIN_CATEGORY_WORDS {
            errors.push(format!(
                "{name} has {} words, expected at least {MIN_CATEGORY_WORDS}",
                category.len()
            ));
        }

        for &word in category.words {
            if !is_valid_word(word) {
                errors.push(format!(
                    "{name} word '{word}' must be 1-{MAX_WORD_LEN} lowercase letters a-z"
                ));
            }
            if let Some(owner) = owners.get(word) {
                if *owner != category.kind {
                    errors.push(format!("{name} word '{word}' already appears in {owner}"));
                }
            } else {
                owners.insert(word, category.kind);
            }
        }

        for pair in category.words.windows(2) {
            let (previous, current) = (pair[0], pair[1]);
            if previous == current {
                errors.push(format!("{name} lists '{current}' more than once"));
            } else if previous > current {
                errors.push(format!(
                    "{name} is out of order: '{previous}' comes before '{current}'"
                ));
            }
        }
    }

    errors
}

fn is_valid_word(word: &str) -> bool {
    (1..=MAX_WORD_LEN).contains(&word.len()) && word.bytes().all(|b| b.is_ascii_lowercase())
}
