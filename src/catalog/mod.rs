//! Word catalog wiring.
//!
//! The built-in word lists live in `words`; this module wraps them in typed
//! categories so callers get consistent names and a read-only view. Use
//! `WordPool` when sampling across every category and `Catalog` when the
//! per-category layout matters (listings, exports, statistics).

pub mod identity;
pub mod index;
pub mod model;
mod words;

pub use identity::{CategoryKind, UnknownCategory};
pub use index::WordPool;
pub use model::{Catalog, Category};
