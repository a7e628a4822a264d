//! One-shot batch splitting
//!
//! Every call opens its own short-lived iterator and engine, computes the
//! boundaries, and releases both before returning. Nothing is cached across
//! calls. A missing or empty text yields an empty result rather than an
//! error.

use std::slice;

use breakiter_core::{is_token, Boundary, BoundaryIterator, BreakType, Result};
use breakiter_icu::boundary_iterator;

/// Token substrings of a text, as produced by [`split`].
///
/// Restartable: every call to [`iter`](Split::iter) walks the tokens again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<'t> {
    text: &'t str,
    tokens: Vec<Boundary>,
}

impl<'t> Split<'t> {
    /// Iterate the token substrings
    pub fn iter(&self) -> SplitIter<'_, 't> {
        SplitIter {
            text: self.text,
            inner: self.tokens.iter(),
        }
    }

    /// Boundaries of the tokens
    pub fn boundaries(&self) -> &[Boundary] {
        &self.tokens
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the text had no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Collect the tokens
    pub fn to_vec(&self) -> Vec<&'t str> {
        self.iter().collect()
    }
}

impl<'a, 't> IntoIterator for &'a Split<'t> {
    type Item = &'t str;
    type IntoIter = SplitIter<'a, 't>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the substrings of a [`Split`]
#[derive(Debug, Clone)]
pub struct SplitIter<'a, 't> {
    text: &'t str,
    inner: slice::Iter<'a, Boundary>,
}

impl<'t> Iterator for SplitIter<'_, 't> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.text;
        self.inner.by_ref().find_map(|b| b.extract(text))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.inner.len()))
    }
}

/// Split `text` into the segments that count as tokens for `kind`.
///
/// For words, whitespace and punctuation runs are dropped; every other kind
/// keeps all segments.
///
/// # Errors
///
/// Fails only when the engine cannot be opened for `kind` and `locale`.
pub fn split<'t>(
    kind: BreakType,
    locale: &str,
    text: impl Into<Option<&'t str>>,
) -> Result<Split<'t>> {
    let text = text.into().unwrap_or_default();
    let tokens = with_iterator(kind, locale, text, |iter| {
        iter.segments()
            .filter(|&(_, status)| is_token(kind, status))
            .map(|(boundary, _)| boundary)
            .collect()
    })?;
    Ok(Split { text, tokens })
}

/// Every segment of `text`, in order, with no gaps and no filtering.
///
/// # Errors
///
/// Fails only when the engine cannot be opened for `kind` and `locale`.
pub fn get_boundaries<'t>(
    kind: BreakType,
    locale: &str,
    text: impl Into<Option<&'t str>>,
) -> Result<Vec<Boundary>> {
    let text = text.into().unwrap_or_default();
    with_iterator(kind, locale, text, |iter| {
        iter.segments().map(|(boundary, _)| boundary).collect()
    })
}

/// Word segments of `text`.
///
/// With `include_all` the result partitions the text; without it, segments
/// made of spaces and punctuation are dropped.
///
/// # Errors
///
/// Fails only when the engine cannot be opened for `locale`.
pub fn get_word_boundaries<'t>(
    locale: &str,
    text: impl Into<Option<&'t str>>,
    include_all: bool,
) -> Result<Vec<Boundary>> {
    let text = text.into().unwrap_or_default();
    with_iterator(BreakType::Word, locale, text, |iter| {
        iter.segments()
            .filter(|&(_, status)| include_all || is_token(BreakType::Word, status))
            .map(|(boundary, _)| boundary)
            .collect()
    })
}

/// Sentence segments of `text`
///
/// # Errors
///
/// Fails only when the engine cannot be opened for `locale`.
pub fn get_sentence_boundaries<'t>(
    locale: &str,
    text: impl Into<Option<&'t str>>,
) -> Result<Vec<Boundary>> {
    get_boundaries(BreakType::Sentence, locale, text)
}

/// Line-break segments of `text`
///
/// # Errors
///
/// Fails only when the engine cannot be opened for `locale`.
pub fn get_line_boundaries<'t>(
    locale: &str,
    text: impl Into<Option<&'t str>>,
) -> Result<Vec<Boundary>> {
    get_boundaries(BreakType::Line, locale, text)
}

fn with_iterator<T>(
    kind: BreakType,
    locale: &str,
    text: &str,
    f: impl FnOnce(&BoundaryIterator) -> T,
) -> Result<T> {
    let mut iter = boundary_iterator(kind, locale);
    let result = iter.set_text(text).map(|()| f(&iter));
    iter.dispose();
    result
}
