//! Random memorable names from plants, animals, and colors.
//!
//! The crate exposes the built-in word catalog, a selector backed by a
//! cryptographically secure generator, and a composer that joins distinct
//! words into names such as `fox-oak` or `red-wolf-pine`. The free functions
//! here form the contract the `whimsy` binary depends on: read-only catalog
//! views that never fail, and random operations that return
//! [`WhimsyError`] on bad input or entropy failure.

pub mod catalog;
pub mod catalog_validation;
pub mod composer;
pub mod error;
pub mod selector;

pub use catalog::{Catalog, Category, CategoryKind, UnknownCategory, WordPool};
pub use catalog_validation::validate_catalog;
pub use composer::{DEFAULT_PARTS, NameComposer, SEPARATOR};
pub use error::{Result, WhimsyError};
pub use selector::SecureSelector;

/// All plant words, sorted.
pub fn plants() -> &'static [&'static str] {
    words(CategoryKind::Plants)
}

/// All animal words, sorted.
pub fn animals() -> &'static [&'static str] {
    words(CategoryKind::Animals)
}

/// All color words, sorted.
pub fn colors() -> &'static [&'static str] {
    words(CategoryKind::Colors)
}

/// Words of one built-in category.
pub fn words(kind: CategoryKind) -> &'static [&'static str] {
    Catalog::builtin()
        .category(kind)
        .map(|category| category.words)
        .unwrap_or_default()
}

/// Every built-in category in catalog order.
pub fn categories() -> &'static [Category] {
    Catalog::builtin().categories()
}

/// Largest part count accepted by [`random_name`].
pub fn max_parts() -> usize {
    Catalog::builtin().max_parts()
}

/// The flattened pool of every built-in word.
pub fn pool() -> &'static WordPool {
    WordPool::builtin()
}

pub fn random_plant() -> Result<&'static str> {
    random_word(CategoryKind::Plants)
}

pub fn random_animal() -> Result<&'static str> {
    random_word(CategoryKind::Animals)
}

pub fn random_color() -> Result<&'static str> {
    random_word(CategoryKind::Colors)
}

/// One random word from a built-in category.
pub fn random_word(kind: CategoryKind) -> Result<&'static str> {
    SecureSelector::new().pick(words(kind)).copied()
}

/// A random name of `parts` distinct words, or [`DEFAULT_PARTS`] when `None`.
///
/// Fails with [`WhimsyError::InvalidCount`] unless `1 <= parts <= max_parts()`.
pub fn random_name(parts: Option<i64>) -> Result<String> {
    NameComposer::builtin().compose(parts.unwrap_or(DEFAULT_PARTS))
}
