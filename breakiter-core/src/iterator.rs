//! Cached boundary iterator
//!
//! [`BoundaryIterator`] computes every boundary of its text up front when the
//! text is bound, then navigates the cached array without further engine
//! calls. The cursor is an index into that array; for an empty text it sits
//! on a virtual boundary at offset 0 that has no entry.

use smallvec::smallvec;

use crate::engine::{BoundaryEngine, BreakCursor, CursorGuard, StatusVec};
use crate::error::{BreakError, Result};
use crate::rule_status::DEFAULT_STATUS;
use crate::types::{Boundary, BreakType, DONE};

const DEFAULT_STATUS_VECTOR: &[i32] = &[DEFAULT_STATUS];

/// Locale-aware iterator over the boundaries of one text at a time.
///
/// Created unbound; [`set_text`](Self::set_text) binds (or rebinds) a text.
/// Not safe for concurrent mutation: it owns one engine and one cursor.
#[derive(Debug)]
pub struct BoundaryIterator {
    kind: BreakType,
    locale: String,
    engine: Option<Box<dyn BoundaryEngine>>,
    text: String,
    /// Strictly increasing; `[0, ..., text.len()]`, or empty for empty text
    boundaries: Vec<i32>,
    /// Parallel to `boundaries`
    statuses: Vec<StatusVec>,
    position: usize,
}

impl BoundaryIterator {
    /// Create an unbound iterator for `kind` and `locale` backed by `engine`
    pub fn new<E>(kind: BreakType, locale: impl Into<String>, engine: E) -> Self
    where
        E: BoundaryEngine + 'static,
    {
        Self::from_boxed(kind, locale.into(), Box::new(engine))
    }

    fn from_boxed(kind: BreakType, locale: String, engine: Box<dyn BoundaryEngine>) -> Self {
        Self {
            kind,
            locale,
            engine: Some(engine),
            text: String::new(),
            boundaries: Vec::new(),
            statuses: Vec::new(),
            position: 0,
        }
    }

    /// Break type this iterator was created for
    pub fn kind(&self) -> BreakType {
        self.kind
    }

    /// Locale identifier this iterator was created for
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The bound text, empty while unbound
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cached boundary offsets of the bound text
    pub fn boundaries(&self) -> &[i32] {
        &self.boundaries
    }

    /// Whether [`dispose`](Self::dispose) has released the engine
    pub fn is_disposed(&self) -> bool {
        self.engine.is_none()
    }

    /// Bind `text`, recomputing every boundary and resetting the cursor.
    ///
    /// The empty string is valid and yields no boundaries. On error the
    /// previously bound text, boundaries and cursor are left untouched.
    ///
    /// # Errors
    ///
    /// [`BreakError::NullText`] for `None`, [`BreakError::Disposed`] after
    /// disposal, [`BreakError::TextTooLong`] for texts beyond `i32::MAX`
    /// bytes, any engine open error unmodified, and
    /// [`BreakError::MalformedBoundaries`] if the engine's stream is not a
    /// strictly increasing cover of the text.
    pub fn set_text<'a>(&mut self, text: impl Into<Option<&'a str>>) -> Result<()> {
        let text = text.into().ok_or(BreakError::NullText)?;
        let engine = self.engine.as_mut().ok_or(BreakError::Disposed)?;
        let len = i32::try_from(text.len()).map_err(|_| BreakError::TextTooLong { len: text.len() })?;

        let (boundaries, statuses) = if text.is_empty() {
            (Vec::new(), Vec::new())
        } else {
            collect_boundaries(engine.as_mut(), self.kind, &self.locale, text, len)?
        };

        tracing::debug!(
            kind = %self.kind,
            locale = %self.locale,
            text_len = text.len(),
            boundaries = boundaries.len(),
            "bound text"
        );

        self.text.clear();
        self.text.push_str(text);
        self.boundaries = boundaries;
        self.statuses = statuses;
        self.position = 0;
        Ok(())
    }

    /// The boundary under the cursor; 0 for an empty text
    pub fn current(&self) -> i32 {
        self.boundaries.get(self.position).copied().unwrap_or(0)
    }

    /// Advance to the next boundary.
    ///
    /// Returns [`DONE`] without moving when already on the last boundary.
    pub fn move_next(&mut self) -> i32 {
        if self.position + 1 < self.boundaries.len() {
            self.position += 1;
            self.boundaries[self.position]
        } else {
            DONE
        }
    }

    /// Step back to the previous boundary.
    ///
    /// Returns [`DONE`] without moving when already on the first boundary.
    pub fn move_previous(&mut self) -> i32 {
        if self.position > 0 && !self.boundaries.is_empty() {
            self.position -= 1;
            self.boundaries[self.position]
        } else {
            DONE
        }
    }

    /// Jump to the first boundary
    pub fn move_first(&mut self) -> i32 {
        self.position = 0;
        self.current()
    }

    /// Jump to the last boundary
    pub fn move_last(&mut self) -> i32 {
        self.position = self.last_index();
        self.current()
    }

    /// Move to the smallest boundary strictly greater than `offset`.
    ///
    /// Negative offsets clamp to the first boundary. Offsets at or past the
    /// last boundary return [`DONE`] and leave the cursor on the last one.
    pub fn move_following(&mut self, offset: i32) -> i32 {
        if self.boundaries.is_empty() {
            self.position = 0;
            return if offset < 0 { 0 } else { DONE };
        }
        if offset < 0 {
            self.position = 0;
            return self.boundaries[0];
        }
        let last = self.last_index();
        if offset >= self.boundaries[last] {
            self.position = last;
            return DONE;
        }
        // boundaries[0] == 0 <= offset < boundaries[last], so 1 <= index <= last
        self.position = self.boundaries.partition_point(|&b| b <= offset);
        self.boundaries[self.position]
    }

    /// Move to the greatest boundary strictly less than `offset`.
    ///
    /// `offset == 0` returns [`DONE`]; negative offsets clamp to the first
    /// boundary. Offsets past the last boundary return the last boundary.
    pub fn move_preceding(&mut self, offset: i32) -> i32 {
        self.position = 0;
        if self.boundaries.is_empty() {
            return if offset <= 0 { 0 } else { DONE };
        }
        if offset < 0 {
            return self.boundaries[0];
        }
        if offset == 0 {
            return DONE;
        }
        let last = self.last_index();
        if offset > self.boundaries[last] {
            self.position = last;
            return self.boundaries[last];
        }
        // boundaries[0] == 0 < offset, so the first index >= offset is at least 1
        self.position = self.boundaries.partition_point(|&b| b < offset) - 1;
        self.boundaries[self.position]
    }

    /// Whether `offset` is a boundary.
    ///
    /// Always snaps the cursor to the smallest boundary at or after `offset`,
    /// clamped into the cached range, even when the answer is `false`.
    pub fn is_boundary(&mut self, offset: i32) -> bool {
        if self.boundaries.is_empty() {
            self.position = 0;
            return false;
        }
        let index = if offset < 0 {
            0
        } else {
            self.boundaries.partition_point(|&b| b < offset)
        };
        self.position = index.min(self.last_index());
        self.boundaries[self.position] == offset
    }

    /// First rule status at the current boundary, 0 when there is none
    pub fn rule_status(&self) -> i32 {
        self.statuses
            .get(self.position)
            .and_then(|tied| tied.first())
            .copied()
            .unwrap_or(DEFAULT_STATUS)
    }

    /// Every rule status tied at the current boundary, `[0]` when there is none
    pub fn rule_status_vector(&self) -> &[i32] {
        match self.statuses.get(self.position) {
            Some(tied) if !tied.is_empty() => tied.as_slice(),
            _ => DEFAULT_STATUS_VECTOR,
        }
    }

    /// Consecutive boundary pairs of the bound text, each with the rule
    /// status of the boundary that ends it
    pub fn segments(&self) -> impl Iterator<Item = (Boundary, i32)> + '_ {
        self.boundaries
            .windows(2)
            .zip(self.statuses.iter().skip(1))
            .map(|(pair, tied)| {
                let status = tied.first().copied().unwrap_or(DEFAULT_STATUS);
                (Boundary::new(pair[0], pair[1]), status)
            })
    }

    /// An independent iterator with the same text, cache and cursor.
    ///
    /// # Errors
    ///
    /// [`BreakError::Disposed`] after disposal, or whatever the engine
    /// reports when it cannot be duplicated.
    pub fn try_clone(&self) -> Result<Self> {
        let engine = self
            .engine
            .as_ref()
            .ok_or(BreakError::Disposed)?
            .try_clone_engine()?;
        Ok(Self {
            kind: self.kind,
            locale: self.locale.clone(),
            engine: Some(engine),
            text: self.text.clone(),
            boundaries: self.boundaries.clone(),
            statuses: self.statuses.clone(),
            position: self.position,
        })
    }

    /// Release the engine. Idempotent; close failures are logged and swallowed.
    ///
    /// Cached boundaries stay readable after disposal; only rebinding fails.
    pub fn dispose(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            match engine.close() {
                Ok(()) => tracing::trace!(kind = %self.kind, "released break engine"),
                Err(e) => tracing::warn!(
                    kind = %self.kind,
                    error = %e,
                    "failed to release break engine"
                ),
            }
        }
    }

    fn last_index(&self) -> usize {
        self.boundaries.len().saturating_sub(1)
    }
}

impl Drop for BoundaryIterator {
    fn drop(&mut self) {
        if self.engine.is_some() {
            tracing::debug!(kind = %self.kind, "break iterator dropped without dispose");
            self.dispose();
        }
    }
}

/// Open a cursor over `text`, drain it, and close it again.
fn collect_boundaries(
    engine: &mut dyn BoundaryEngine,
    kind: BreakType,
    locale: &str,
    text: &str,
    len: i32,
) -> Result<(Vec<i32>, Vec<StatusVec>)> {
    let mut guard = CursorGuard::new(engine.open(kind, locale, text)?);
    tracing::trace!(%kind, locale, "opened break cursor");
    let drained = drain(guard.cursor(), len);
    guard.finish();
    drained
}

fn drain<C>(cursor: &mut C, len: i32) -> Result<(Vec<i32>, Vec<StatusVec>)>
where
    C: BreakCursor + ?Sized,
{
    let first = cursor.first();
    if first != 0 {
        return Err(BreakError::MalformedBoundaries {
            reason: format!("first boundary is {first}, expected 0"),
        });
    }

    let mut boundaries = vec![first];
    let mut statuses = vec![tied_statuses(cursor)];
    let mut previous = first;
    loop {
        let offset = cursor.next();
        if offset == DONE {
            break;
        }
        if offset <= previous || offset > len {
            return Err(BreakError::MalformedBoundaries {
                reason: format!("boundary {offset} after {previous} in text of length {len}"),
            });
        }
        boundaries.push(offset);
        statuses.push(tied_statuses(cursor));
        previous = offset;
    }

    if previous != len {
        return Err(BreakError::MalformedBoundaries {
            reason: format!("last boundary is {previous}, expected {len}"),
        });
    }
    Ok((boundaries, statuses))
}

fn tied_statuses<C>(cursor: &C) -> StatusVec
where
    C: BreakCursor + ?Sized,
{
    let tied = cursor.rule_status_vector();
    if tied.is_empty() {
        smallvec![DEFAULT_STATUS]
    } else {
        tied
    }
}
