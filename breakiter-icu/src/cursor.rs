//! Random-access cursor over a materialized ICU4X break list
//!
//! ICU4X segmenters only iterate forward, so a pass is collected once and
//! the classic bidirectional primitives are answered from the list.

use breakiter_core::{BreakCursor, BreakError, Result, StatusVec, DONE};
use smallvec::smallvec;

/// Break offsets with the status of the segment each one ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedCursor {
    offsets: Vec<i32>,
    statuses: Vec<i32>,
    index: usize,
    closed: bool,
}

impl MaterializedCursor {
    /// Build a cursor from `(byte offset, status)` breaks over a text of `len` bytes.
    ///
    /// The list is normalised to start at 0 and end at `len`; out-of-range and
    /// non-increasing breaks are dropped.
    pub fn from_breaks<I>(len: usize, breaks: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, i32)>,
    {
        let end = i32::try_from(len).map_err(|_| BreakError::TextTooLong { len })?;

        let mut offsets = vec![0];
        let mut statuses = vec![0];
        for (offset, status) in breaks {
            let Ok(offset) = i32::try_from(offset) else {
                continue;
            };
            if offset > *offsets.last().unwrap_or(&0) && offset <= end {
                offsets.push(offset);
                statuses.push(status);
            }
        }
        if *offsets.last().unwrap_or(&0) != end {
            offsets.push(end);
            statuses.push(0);
        }

        Ok(Self {
            offsets,
            statuses,
            index: 0,
            closed: false,
        })
    }

    /// Cached offsets, starting at 0 and ending at the text length
    pub fn offsets(&self) -> &[i32] {
        &self.offsets
    }

    /// Whether [`BreakCursor::close`] has been called
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn last_index(&self) -> usize {
        self.offsets.len() - 1
    }

    fn seek(&mut self, index: usize) -> i32 {
        self.index = index;
        self.offsets[index]
    }
}

impl BreakCursor for MaterializedCursor {
    fn first(&mut self) -> i32 {
        self.seek(0)
    }

    fn next(&mut self) -> i32 {
        if self.index < self.last_index() {
            self.seek(self.index + 1)
        } else {
            DONE
        }
    }

    fn previous(&mut self) -> i32 {
        if self.index > 0 {
            self.seek(self.index - 1)
        } else {
            DONE
        }
    }

    fn last(&mut self) -> i32 {
        self.seek(self.last_index())
    }

    fn following(&mut self, offset: i32) -> i32 {
        if offset < 0 {
            return self.first();
        }
        let index = self.offsets.partition_point(|&b| b <= offset);
        if index > self.last_index() {
            self.last();
            return DONE;
        }
        self.seek(index)
    }

    fn preceding(&mut self, offset: i32) -> i32 {
        let last = self.last_index();
        if offset > self.offsets[last] {
            return self.last();
        }
        match self.offsets.partition_point(|&b| b < offset) {
            0 => {
                self.first();
                DONE
            }
            index => self.seek(index - 1),
        }
    }

    fn is_boundary(&mut self, offset: i32) -> bool {
        if offset < 0 {
            self.first();
            return false;
        }
        let index = self.offsets.partition_point(|&b| b < offset);
        if index > self.last_index() {
            self.last();
            return false;
        }
        self.seek(index) == offset
    }

    fn rule_status(&self) -> i32 {
        self.statuses[self.index]
    }

    fn rule_status_vector(&self) -> StatusVec {
        smallvec![self.statuses[self.index]]
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor() -> MaterializedCursor {
        // "Good-day, kind sir !"
        let breaks = [4, 5, 8, 9, 10, 14, 15, 18, 19, 20]
            .into_iter()
            .map(|b| (b, 0));
        MaterializedCursor::from_breaks(20, breaks).unwrap()
    }

    #[test]
    fn test_normalisation() {
        let c = MaterializedCursor::from_breaks(6, [(0, 9), (3, 200), (3, 0), (2, 0), (8, 0)]).unwrap();
        assert_eq!(c.offsets(), &[0, 3, 6]);
        // The leading 0 always carries the default status
        assert_eq!(c.statuses, vec![0, 200, 0]);
    }

    #[test]
    fn test_walk_both_ways() {
        let mut c = cursor();
        assert_eq!(c.first(), 0);
        assert_eq!(c.next(), 4);
        assert_eq!(c.previous(), 0);
        assert_eq!(c.previous(), DONE);
        assert_eq!(c.last(), 20);
        assert_eq!(c.next(), DONE);
        assert_eq!(c.previous(), 19);
    }

    #[test]
    fn test_following_and_preceding() {
        let mut c = cursor();
        assert_eq!(c.following(-1), 0);
        assert_eq!(c.following(11), 14);
        assert_eq!(c.following(20), DONE);
        assert_eq!(c.preceding(14), 10);
        assert_eq!(c.preceding(0), DONE);
        assert_eq!(c.preceding(99), 20);
    }

    #[test]
    fn test_is_boundary_moves_to_following() {
        let mut c = cursor();
        assert!(!c.is_boundary(11));
        assert_eq!(c.previous(), 10);
        assert!(c.is_boundary(5));
        assert!(!c.is_boundary(50));
        assert_eq!(c.previous(), 19);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut c = cursor();
        assert!(!c.is_closed());
        c.close().unwrap();
        c.close().unwrap();
        assert!(c.is_closed());
    }
}
