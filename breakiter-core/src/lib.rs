//! Boundary iteration over a pluggable segmentation engine
//!
//! This crate holds the engine-independent half of breakiter:
//! - [`BoundaryEngine`] / [`BreakCursor`]: the segmentation capability an
//!   engine must provide
//! - [`BoundaryIterator`]: eagerly caches every boundary of a text and
//!   navigates it with break-iterator semantics
//! - [`rule_status`]: named rule-status ranges and the [`is_token`] classifier
//!
//! The ICU4X-backed engine lives in `breakiter-icu`; the batch splitting API
//! lives in `breakiter`.

#![warn(missing_docs)]

pub mod engine;
pub mod error;
pub mod iterator;
pub mod rule_status;
pub mod types;

// Re-export key types
pub use engine::{BoundaryEngine, BreakCursor, StatusVec};
pub use error::{BreakError, Result};
pub use iterator::BoundaryIterator;
pub use rule_status::{is_token, LineTag, RuleTag, SentenceTag, WordTag};
pub use types::{Boundary, BreakType, DONE};
