//! Value types shared by the engine, the iterator and the batch splitter

use core::fmt;
use core::str::FromStr;

use crate::error::BreakError;

/// Sentinel returned when iteration is exhausted in the requested direction.
pub const DONE: i32 = -1;

/// The kind of text unit whose boundaries are located.
///
/// Fixed at iterator construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BreakType {
    /// User-perceived characters (grapheme clusters)
    Character,
    /// Words, numbers and the separators between them
    #[default]
    Word,
    /// Line-break opportunities
    Line,
    /// Sentences
    Sentence,
}

impl BreakType {
    /// All break types, in declaration order
    pub const ALL: [BreakType; 4] = [
        BreakType::Character,
        BreakType::Word,
        BreakType::Line,
        BreakType::Sentence,
    ];

    /// Lowercase name, as used in configuration files
    pub fn name(&self) -> &'static str {
        match self {
            BreakType::Character => "character",
            BreakType::Word => "word",
            BreakType::Line => "line",
            BreakType::Sentence => "sentence",
        }
    }
}

impl fmt::Display for BreakType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BreakType {
    type Err = BreakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "char" | "character" | "grapheme" => Ok(BreakType::Character),
            "word" => Ok(BreakType::Word),
            "line" => Ok(BreakType::Line),
            "sentence" => Ok(BreakType::Sentence),
            _ => Err(BreakError::UnknownBreakType(s.to_string())),
        }
    }
}

/// An offset pair delimiting one segment of text.
///
/// Offsets are UTF-8 byte offsets. `start < end` for every segment of a
/// non-empty text; `start == end == 0` only for the degenerate point of an
/// empty text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boundary {
    /// Byte offset where the segment starts
    pub start: i32,
    /// Byte offset one past the end of the segment
    pub end: i32,
}

impl Boundary {
    /// Create a new boundary
    pub fn new(start: i32, end: i32) -> Self {
        debug_assert!(
            0 <= start && start <= end,
            "boundary must satisfy 0 <= start <= end"
        );
        Self { start, end }
    }

    /// Segment length in bytes
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    /// True for the degenerate empty-text point
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slice `text` by this boundary.
    ///
    /// Returns `None` when the offsets fall outside `text` or off a char boundary.
    pub fn extract<'t>(&self, text: &'t str) -> Option<&'t str> {
        let start = usize::try_from(self.start).ok()?;
        let end = usize::try_from(self.end).ok()?;
        text.get(start..end)
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
