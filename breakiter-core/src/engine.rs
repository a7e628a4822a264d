//! Boundary engine capability
//!
//! The engine is the segmentation primitive the iterator sits on. It is
//! opened for a (break type, locale, text) triple and hands back a cursor
//! exposing the classic break-iterator primitives. Any standards-compliant
//! Unicode segmentation library can stand behind these traits.

use core::fmt;

use smallvec::SmallVec;

use crate::error::Result;
use crate::types::BreakType;

/// Rule statuses tied at a single boundary
pub type StatusVec = SmallVec<[i32; 1]>;

/// Cursor over the boundaries of one text, produced by [`BoundaryEngine::open`].
///
/// Offsets are UTF-8 byte offsets; [`DONE`](crate::DONE) marks exhaustion.
pub trait BreakCursor {
    /// Move to the first boundary (always 0) and return it
    fn first(&mut self) -> i32;

    /// Advance one boundary, or return `DONE` at the end
    fn next(&mut self) -> i32;

    /// Step back one boundary, or return `DONE` at the start
    fn previous(&mut self) -> i32;

    /// Move to the last boundary (the text length) and return it
    fn last(&mut self) -> i32;

    /// First boundary strictly after `offset`, or `DONE`
    fn following(&mut self, offset: i32) -> i32;

    /// Last boundary strictly before `offset`, or `DONE`
    fn preceding(&mut self, offset: i32) -> i32;

    /// Whether `offset` is a boundary; repositions the cursor
    fn is_boundary(&mut self, offset: i32) -> bool;

    /// Status of the rule that produced the current boundary
    fn rule_status(&self) -> i32;

    /// Every status tied at the current boundary
    fn rule_status_vector(&self) -> StatusVec;

    /// Release the cursor. Must tolerate repeated calls.
    fn close(&mut self) -> Result<()>;
}

/// Factory for [`BreakCursor`]s.
///
/// An engine may hold loaded rule data; [`close`](BoundaryEngine::close)
/// releases it. An iterator owns its engine exclusively.
pub trait BoundaryEngine: fmt::Debug + Send {
    /// Open a cursor over `text`.
    ///
    /// # Errors
    ///
    /// Fails when the locale is not understood or the engine cannot provide
    /// segmentation data for `kind`.
    fn open<'t>(
        &mut self,
        kind: BreakType,
        locale: &str,
        text: &'t str,
    ) -> Result<Box<dyn BreakCursor + 't>>;

    /// Release any resources held by the engine
    fn close(&mut self) -> Result<()> {
        Ok(())
    }

    /// A fresh, independent engine with the same configuration
    fn try_clone_engine(&self) -> Result<Box<dyn BoundaryEngine>>;
}

/// Scoped ownership of an open cursor.
///
/// `finish` is the release path; dropping an unfinished guard closes the
/// cursor as a fallback.
pub(crate) struct CursorGuard<'t> {
    cursor: Box<dyn BreakCursor + 't>,
    closed: bool,
}

impl<'t> CursorGuard<'t> {
    pub(crate) fn new(cursor: Box<dyn BreakCursor + 't>) -> Self {
        Self {
            cursor,
            closed: false,
        }
    }

    pub(crate) fn cursor(&mut self) -> &mut (dyn BreakCursor + 't) {
        self.cursor.as_mut()
    }

    pub(crate) fn finish(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        match self.cursor.close() {
            Ok(()) => tracing::trace!("closed break cursor"),
            Err(e) => tracing::warn!(error = %e, "failed to close break cursor"),
        }
    }
}

impl Drop for CursorGuard<'_> {
    fn drop(&mut self) {
        self.release();
    }
}
