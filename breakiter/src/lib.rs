//! Locale-aware text boundary analysis
//!
//! This crate is the public face of breakiter. It offers two ways in:
//!
//! - [`BoundaryIterator`], a cursor over the character, word, line or
//!   sentence boundaries of a text, created with [`break_iterator`] or from
//!   a [`BreakConfig`].
//! - One-shot helpers such as [`split`] and [`get_word_boundaries`] that
//!   compute every boundary at once and release their resources before
//!   returning.
//!
//! ```no_run
//! use breakiter::{break_iterator, split, BreakType, DONE};
//!
//! let words = split(BreakType::Word, "en-US", "Aa Bb. Cc")?;
//! assert_eq!(words.to_vec(), vec!["Aa", "Bb", "Cc"]);
//!
//! let mut iter = break_iterator(BreakType::Sentence, "en");
//! iter.set_text("One. Two.")?;
//! while iter.move_next() != DONE {
//!     println!("sentence ends at {}", iter.current());
//! }
//! iter.dispose();
//! # Ok::<(), breakiter::ApiError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod splitter;

// Re-export key types
pub use breakiter_core::rule_status;
pub use breakiter_core::{
    is_token, Boundary, BoundaryEngine, BoundaryIterator, BreakCursor, BreakError, BreakType,
    LineTag, RuleTag, SentenceTag, WordTag, DONE,
};
pub use breakiter_icu::{parse_locale, IcuEngine};
pub use config::{BreakConfig, BreakConfigBuilder};
pub use error::{ApiError, Result};
pub use splitter::{
    get_boundaries, get_line_boundaries, get_sentence_boundaries, get_word_boundaries, split,
    Split, SplitIter,
};

/// An unbound iterator for `kind` in `locale`, backed by the ICU4X engine
pub fn break_iterator(kind: BreakType, locale: impl Into<String>) -> BoundaryIterator {
    breakiter_icu::boundary_iterator(kind, locale)
}
