//! Flattened view of a catalog used as the sampling domain for names.
//!
//! The pool keeps every word in catalog order (category order, then the
//! sorted order inside each category) and a lookup from word to category.
//! The built-in pool is built once on first use and shared by every caller.

use crate::catalog::{Catalog, CategoryKind};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static BUILTIN_POOL: LazyLock<WordPool> =
    LazyLock::new(|| WordPool::from_catalog(Catalog::builtin()));

#[derive(Clone, Debug)]
/// Every word of a catalog plus a derived index keyed by word.
pub struct WordPool {
    words: Vec<&'static str>,
    by_word: BTreeMap<&'static str, CategoryKind>,
    max_parts: usize,
}

impl WordPool {
    /// Flatten a catalog into a pool.
    ///
    /// A word listed under more than one category appears in `words` once
    /// per listing; the index keeps the first category it was seen in.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut words = Vec::with_capacity(catalog.word_count());
        let mut by_word = BTreeMap::new();
        for category in catalog.categories() {
            for &word in category.words {
                words.push(word);
                by_word.entry(word).or_insert(category.kind);
            }
        }
        Self {
            words,
            by_word,
            max_parts: catalog.max_parts(),
        }
    }

    /// The shared pool over the built-in catalog.
    pub fn builtin() -> &'static WordPool {
        &BUILTIN_POOL
    }

    pub fn words(&self) -> &[&'static str] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of categories in the source catalog.
    pub fn max_parts(&self) -> usize {
        self.max_parts
    }

    pub fn contains(&self, word: &str) -> bool {
        self.by_word.contains_key(word)
    }

    /// Category a word belongs to, or `None` for words outside the pool.
    pub fn category_of(&self, word: &str) -> Option<CategoryKind> {
        self.by_word.get(word).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    #[test]
    fn builtin_pool_covers_every_category() {
        let pool = WordPool::builtin();
        assert_eq!(pool.len(), Catalog::builtin().word_count());
        assert_eq!(pool.max_parts(), 3);
        assert_eq!(pool.category_of("oak"), Some(CategoryKind::Plants));
        assert_eq!(pool.category_of("wolf"), Some(CategoryKind::Animals));
        assert_eq!(pool.category_of("red"), Some(CategoryKind::Colors));
        assert_eq!(pool.category_of("granite"), None);
        assert!(!pool.contains(""));
    }

    #[test]
    fn keeps_catalog_order() {
        static CATEGORIES: [Category; 2] = [
            Category::new(CategoryKind::Plants, &["fir", "oak"]),
            Category::new(CategoryKind::Animals, &["elk"]),
        ];
        let pool = WordPool::from_catalog(&Catalog::new(&CATEGORIES));
        assert_eq!(pool.words(), ["fir", "oak", "elk"]);
        assert_eq!(pool.max_parts(), 2);
    }

    #[test]
    fn shared_words_index_to_first_category() {
        static CATEGORIES: [Category; 2] = [
            Category::new(CategoryKind::Plants, &["rose"]),
            Category::new(CategoryKind::Colors, &["rose"]),
        ];
        let pool = WordPool::from_catalog(&Catalog::new(&CATEGORIES));
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.category_of("rose"), Some(CategoryKind::Plants));
    }
}
