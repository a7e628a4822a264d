//! ICU4X boundary engine for breakiter
//!
//! [`IcuEngine`] adapts the forward-only ICU4X segmenters to the
//! bidirectional [`BreakCursor`](breakiter_core::BreakCursor) capability and
//! derives ICU-style rule statuses for each boundary.

#![warn(missing_docs)]

pub mod cursor;
pub mod engine;
pub mod locale;
pub mod status;

// Re-export key types
pub use cursor::MaterializedCursor;
pub use engine::IcuEngine;
pub use locale::parse_locale;

use breakiter_core::{BoundaryIterator, BreakType};

/// An unbound iterator for `kind` and `locale` backed by a fresh [`IcuEngine`]
pub fn boundary_iterator(kind: BreakType, locale: impl Into<String>) -> BoundaryIterator {
    BoundaryIterator::new(kind, locale, IcuEngine::new())
}
