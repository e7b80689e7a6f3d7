//! Category and catalog types.
//!
//! A `Catalog` is an ordered, immutable set of categories backed by static
//! word slices. The built-in catalog (plants, animals, colors) lives for the
//! whole process; callers that need a different sampling domain, such as
//! tests, build their own from static slices with `Catalog::new`.

use crate::catalog::identity::CategoryKind;
use crate::catalog::words::{ANIMALS, COLORS, PLANTS};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
/// One named word list.
pub struct Category {
    #[serde(rename = "name")]
    pub kind: CategoryKind,
    pub words: &'static [&'static str],
}

impl Category {
    pub const fn new(kind: CategoryKind, words: &'static [&'static str]) -> Self {
        Self { kind, words }
    }

    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search(&word).is_ok()
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(transparent)]
/// Ordered collection of categories. Its length bounds the number of parts
/// in a composed name.
pub struct Catalog {
    categories: &'static [Category],
}

static BUILTIN_CATEGORIES: [Category; 3] = [
    Category::new(CategoryKind::Plants, PLANTS),
    Category::new(CategoryKind::Animals, ANIMALS),
    Category::new(CategoryKind::Colors, COLORS),
];

static BUILTIN: Catalog = Catalog::new(&BUILTIN_CATEGORIES);

impl Catalog {
    pub const fn new(categories: &'static [Category]) -> Self {
        Self { categories }
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    /// First category of the given kind, if the catalog has one.
    pub fn category(&self, kind: CategoryKind) -> Option<&'static Category> {
        self.categories.iter().find(|category| category.kind == kind)
    }

    /// Number of categories, which is also the largest valid part count.
    pub fn max_parts(&self) -> usize {
        self.categories.len()
    }

    /// Total number of words across all categories.
    pub fn word_count(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }
}
