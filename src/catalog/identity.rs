use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Names one of the built-in word categories.
///
/// The string form is the category name used in listings and JSON exports
/// (`plants`, `animals`, `colors`). Parsing also accepts the singular forms so
/// command-line callers can write `word plant`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum CategoryKind {
    Plants,
    Animals,
    Colors,
}

/// Returned when a string does not name a known category.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown category '{0}' (expected plants, animals, or colors)")]
pub struct UnknownCategory(pub String);

impl CategoryKind {
    /// Every category in catalog order.
    pub const ALL: [CategoryKind; 3] = [
        CategoryKind::Plants,
        CategoryKind::Animals,
        CategoryKind::Colors,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Plants => "plants",
            CategoryKind::Animals => "animals",
            CategoryKind::Colors => "colors",
        }
    }

    /// Singular label, used for headings such as `Plant:`.
    pub fn singular(&self) -> &'static str {
        match self {
            CategoryKind::Plants => "plant",
            CategoryKind::Animals => "animal",
            CategoryKind::Colors => "color",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKind {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "plants" | "plant" => Ok(CategoryKind::Plants),
            "animals" | "animal" => Ok(CategoryKind::Animals),
            "colors" | "color" => Ok(CategoryKind::Colors),
            _ => Err(UnknownCategory(value.to_string())),
        }
    }
}

impl Serialize for CategoryKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
