//! Composes hyphenated names from distinct catalog words.

use crate::catalog::WordPool;
use crate::error::{Result, WhimsyError};
use crate::selector::SecureSelector;
use rand::rngs::OsRng;
use rand::{TryCryptoRng, TryRngCore};
use std::collections::BTreeSet;

/// Part count used when the caller does not ask for one.
pub const DEFAULT_PARTS: i64 = 2;

/// Joins parts of a composed name.
pub const SEPARATOR: &str = "-";

/// Builds names of one to `max_parts` distinct words drawn from a pool.
///
/// Words are drawn from the whole pool, not one per category, so two parts
/// may come from the same category. A draw that repeats an already chosen
/// word is discarded and drawn again.
#[derive(Debug)]
pub struct NameComposer<'a, R = OsRng> {
    pool: &'a WordPool,
    selector: SecureSelector<R>,
}

impl NameComposer<'static, OsRng> {
    /// Composer over the built-in catalog using the OS generator.
    pub fn builtin() -> Self {
        Self::new(WordPool::builtin())
    }
}

impl<'a> NameComposer<'a, OsRng> {
    pub fn new(pool: &'a WordPool) -> Self {
        Self {
            pool,
            selector: SecureSelector::new(),
        }
    }
}

impl<'a, R> NameComposer<'a, R>
where
    R: TryRngCore + TryCryptoRng,
{
    pub fn with_selector(pool: &'a WordPool, selector: SecureSelector<R>) -> Self {
        Self { pool, selector }
    }

    pub fn pool(&self) -> &'a WordPool {
        self.pool
    }

    /// Compose a name with `DEFAULT_PARTS` parts.
    pub fn compose_default(&mut self) -> Result<String> {
        self.compose(DEFAULT_PARTS)
    }

    /// Compose a name of `num_parts` distinct words joined by `-`, in draw
    /// order.
    pub fn compose(&mut self, num_parts: i64) -> Result<String> {
        let max = self.pool.max_parts();
        let parts = usize::try_from(num_parts)
            .ok()
            .filter(|parts| (1..=max).contains(parts))
            .ok_or(WhimsyError::InvalidCount {
                requested: num_parts,
                max,
            })?;

        if self.pool.is_empty() {
            return Err(WhimsyError::EmptyCatalog);
        }

        let mut chosen: Vec<&str> = Vec::with_capacity(parts);
        let mut seen = BTreeSet::new();
        while chosen.len() < parts {
            let word = *self.selector.pick(self.pool.words())?;
            if seen.insert(word) {
                chosen.push(word);
            } else {
                tracing::trace!(word, "discarded repeated word");
            }
        }

        tracing::debug!(parts, "composed name");
        Ok(chosen.join(SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category, CategoryKind};
    use crate::selector::testing::{Broken, Script};

    static SMALL: [Category; 3] = [
        Category::new(CategoryKind::Plants, &["fir", "oak"]),
        Category::new(CategoryKind::Animals, &["fox", "wolf"]),
        Category::new(CategoryKind::Colors, &["blue", "red"]),
    ];

    fn small_pool() -> WordPool {
        WordPool::from_catalog(&Catalog::new(&SMALL))
    }

    #[test]
    fn repeated_draws_are_discarded() {
        let pool = small_pool();
        // Pool order: fir oak fox wolf blue red.
        let script = Script::indices(pool.len(), [5, 5, 3, 5, 1]);
        let mut composer = NameComposer::with_selector(&pool, SecureSelector::with_rng(script));
        assert_eq!(composer.compose(3).unwrap(), "red-wolf-oak");
    }

    #[test]
    fn default_uses_two_parts() {
        let pool = small_pool();
        let script = Script::indices(pool.len(), [4, 0]);
        let mut composer = NameComposer::with_selector(&pool, SecureSelector::with_rng(script));
        assert_eq!(composer.compose_default().unwrap(), "blue-fir");
    }

    #[test]
    fn single_part_has_no_separator() {
        let pool = small_pool();
        let script = Script::indices(pool.len(), [2]);
        let mut composer = NameComposer::with_selector(&pool, SecureSelector::with_rng(script));
        assert_eq!(composer.compose(1).unwrap(), "fox");
    }

    #[test]
    fn out_of_range_counts_are_rejected() {
        let mut composer = NameComposer::builtin();
        for requested in [0, -1, 4, i64::MIN, i64::MAX] {
            match composer.compose(requested) {
                Err(WhimsyError::InvalidCount { requested: got, max }) => {
                    assert_eq!(got, requested);
                    assert_eq!(max, 3);
                }
                other => panic!("expected InvalidCount for {requested}, got {other:?}"),
            }
        }
        assert_eq!(
            composer.compose(0).unwrap_err().to_string(),
            "count must be between 1 and 3, got 0"
        );
    }

    #[test]
    fn empty_catalog_is_reported() {
        static EMPTY: [Category; 1] = [Category::new(CategoryKind::Plants, &[])];
        let pool = WordPool::from_catalog(&Catalog::new(&EMPTY));
        let mut composer = NameComposer::new(&pool);
        assert!(matches!(
            composer.compose(1),
            Err(WhimsyError::EmptyCatalog)
        ));
    }

    #[test]
    fn catalog_without_categories_rejects_every_count() {
        let pool = WordPool::from_catalog(&Catalog::new(&[]));
        let mut composer = NameComposer::new(&pool);
        assert!(matches!(
            composer.compose(1),
            Err(WhimsyError::InvalidCount { requested: 1, max: 0 })
        ));
    }

    #[test]
    fn source_failure_aborts_composition() {
        let pool = small_pool();
        let mut composer = NameComposer::with_selector(&pool, SecureSelector::with_rng(Broken));
        assert!(matches!(
            composer.compose(2),
            Err(WhimsyError::RandomSource(_))
        ));
    }

    #[test]
    fn full_width_names_use_distinct_pool_words() {
        let mut composer = NameComposer::builtin();
        for _ in 0..50 {
            let name = composer.compose(3).unwrap();
            let parts: Vec<&str> = name.split(SEPARATOR).collect();
            assert_eq!(parts.len(), 3, "{name}");
            let unique: BTreeSet<_> = parts.iter().collect();
            assert_eq!(unique.len(), 3, "{name}");
            assert!(parts.iter().all(|part| composer.pool().contains(part)));
        }
    }
}
