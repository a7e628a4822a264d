//! ICU4X implementation of the boundary engine

use breakiter_core::{BoundaryEngine, BreakCursor, BreakType, Result};
use icu_locid::Locale;
use icu_segmenter::{GraphemeClusterSegmenter, LineSegmenter, SentenceSegmenter, WordSegmenter};

use crate::cursor::MaterializedCursor;
use crate::locale::parse_locale;
use crate::status::{line_status, sentence_status, word_status};

/// Boundary engine backed by ICU4X compiled segmentation data.
///
/// Word and line segmentation use the dictionary models for scripts written
/// without spaces (Chinese, Japanese, Thai, ...). The locale is validated and
/// resolved once per identifier; the compiled rules are locale-independent.
#[derive(Debug, Clone, Default)]
pub struct IcuEngine {
    resolved: Option<(String, Locale)>,
}

impl IcuEngine {
    /// Create an engine with nothing resolved yet
    pub fn new() -> Self {
        Self::default()
    }

    /// The locale resolved by the most recent open, if any
    pub fn resolved_locale(&self) -> Option<&Locale> {
        self.resolved.as_ref().map(|(_, locale)| locale)
    }

    fn resolve(&mut self, identifier: &str) -> Result<Locale> {
        if let Some((id, locale)) = &self.resolved {
            if id == identifier {
                return Ok(locale.clone());
            }
        }
        let locale = parse_locale(identifier)?;
        self.resolved = Some((identifier.to_string(), locale.clone()));
        Ok(locale)
    }
}

impl BoundaryEngine for IcuEngine {
    fn open<'t>(
        &mut self,
        kind: BreakType,
        locale: &str,
        text: &'t str,
    ) -> Result<Box<dyn BreakCursor + 't>> {
        let resolved = self.resolve(locale)?;
        tracing::trace!(%kind, locale = %resolved, text_len = text.len(), "segmenting text");

        let cursor = MaterializedCursor::from_breaks(text.len(), segment(kind, text))?;
        Ok(Box::new(cursor))
    }

    fn close(&mut self) -> Result<()> {
        self.resolved = None;
        Ok(())
    }

    fn try_clone_engine(&self) -> Result<Box<dyn BoundaryEngine>> {
        Ok(Box::new(self.clone()))
    }
}

/// Run the ICU4X segmenter for `kind`, pairing each break with the status of
/// the segment it ends
fn segment(kind: BreakType, text: &str) -> Vec<(usize, i32)> {
    match kind {
        BreakType::Character => {
            let segmenter = GraphemeClusterSegmenter::new();
            segmenter.segment_str(text).map(|b| (b, 0)).collect()
        }
        BreakType::Word => {
            let segmenter = WordSegmenter::new_dictionary();
            let mut breaks = segmenter.segment_str(text);
            let mut out = Vec::new();
            let mut start = 0;
            while let Some(end) = breaks.next() {
                let status = word_status(breaks.word_type(), text.get(start..end).unwrap_or_default());
                out.push((end, status));
                start = end;
            }
            out
        }
        BreakType::Line => {
            let segmenter = LineSegmenter::new_dictionary();
            with_segment_status(text, segmenter.segment_str(text), line_status)
        }
        BreakType::Sentence => {
            let segmenter = SentenceSegmenter::new();
            with_segment_status(text, segmenter.segment_str(text), sentence_status)
        }
    }
}

fn with_segment_status<I>(text: &str, breaks: I, status: fn(&str) -> i32) -> Vec<(usize, i32)>
where
    I: Iterator<Item = usize>,
{
    let mut start = 0;
    breaks
        .map(|end| {
            let segment = text.get(start..end).unwrap_or_default();
            start = end;
            (end, status(segment))
        })
        .collect()
}
