//! Scripted boundary engine for exercising the iterator without ICU data

#![allow(dead_code)]

use breakiter_core::rule_status::word;
use breakiter_core::{BoundaryEngine, BreakCursor, BreakError, BreakType, Result, StatusVec, DONE};
use smallvec::smallvec;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// How the scripted engine misbehaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Split alphanumeric runs from single separator characters
    Runs,
    /// Refuse to open
    FailOpen,
    /// Report a boundary past the end of the text
    Overrun,
    /// Fail every close call
    FailClose,
}

/// Counts shared between an engine, its clones and their cursors
#[derive(Debug, Default)]
pub struct Counters {
    pub opened: AtomicUsize,
    pub cursors_closed: AtomicUsize,
    pub engines_closed: AtomicUsize,
    /// Make every following pass overrun the text
    pub poisoned: AtomicBool,
}

impl Counters {
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn cursors_closed(&self) -> usize {
        self.cursors_closed.load(Ordering::SeqCst)
    }

    pub fn engines_closed(&self) -> usize {
        self.engines_closed.load(Ordering::SeqCst)
    }

    pub fn poison(&self) {
        self.poisoned.store(true, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone)]
pub struct RunEngine {
    pub mode: Mode,
    pub counters: Arc<Counters>,
}

impl RunEngine {
    pub fn new() -> Self {
        Self::with_mode(Mode::Runs)
    }

    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            counters: Arc::new(Counters::default()),
        }
    }
}

impl BoundaryEngine for RunEngine {
    fn open<'t>(
        &mut self,
        kind: BreakType,
        locale: &str,
        text: &'t str,
    ) -> Result<Box<dyn BreakCursor + 't>> {
        if self.mode == Mode::FailOpen {
            return Err(BreakError::EngineOpen {
                kind,
                locale: locale.to_string(),
                reason: "scripted failure".to_string(),
            });
        }
        self.counters.opened.fetch_add(1, Ordering::SeqCst);

        let (mut offsets, mut statuses) = runs(text);
        if self.mode == Mode::Overrun || self.counters.poisoned.load(Ordering::SeqCst) {
            offsets.push(text.len() as i32 + 3);
            statuses.push(smallvec![0]);
        }
        Ok(Box::new(RunCursor {
            offsets,
            statuses,
            index: 0,
            fail_close: self.mode == Mode::FailClose,
            counters: Arc::clone(&self.counters),
        }))
    }

    fn close(&mut self) -> Result<()> {
        self.counters.engines_closed.fetch_add(1, Ordering::SeqCst);
        if self.mode == Mode::FailClose {
            return Err(BreakError::Close("scripted failure".to_string()));
        }
        Ok(())
    }

    fn try_clone_engine(&self) -> Result<Box<dyn BoundaryEngine>> {
        Ok(Box::new(self.clone()))
    }
}

/// Alphanumeric runs become one segment; every other char is its own segment.
fn runs(text: &str) -> (Vec<i32>, Vec<StatusVec>) {
    let mut offsets = vec![0];
    let mut statuses: Vec<StatusVec> = vec![smallvec![0]];
    let mut run: Option<i32> = None;

    for (i, ch) in text.char_indices() {
        if ch.is_alphanumeric() {
            let class = if ch.is_numeric() { word::NUMBER } else { word::LETTER };
            run = Some(run.map_or(class, |c| c.max(class)));
            continue;
        }
        if let Some(class) = run.take() {
            offsets.push(i as i32);
            statuses.push(smallvec![class]);
        }
        offsets.push((i + ch.len_utf8()) as i32);
        statuses.push(smallvec![word::NONE]);
    }
    if let Some(class) = run {
        offsets.push(text.len() as i32);
        statuses.push(smallvec![class]);
    }
    (offsets, statuses)
}

struct RunCursor {
    offsets: Vec<i32>,
    statuses: Vec<StatusVec>,
    index: usize,
    fail_close: bool,
    counters: Arc<Counters>,
}

impl BreakCursor for RunCursor {
    fn first(&mut self) -> i32 {
        self.index = 0;
        self.offsets[0]
    }

    fn next(&mut self) -> i32 {
        if self.index + 1 < self.offsets.len() {
            self.index += 1;
            self.offsets[self.index]
        } else {
            DONE
        }
    }

    fn previous(&mut self) -> i32 {
        if self.index > 0 {
            self.index -= 1;
            self.offsets[self.index]
        } else {
            DONE
        }
    }

    fn last(&mut self) -> i32 {
        self.index = self.offsets.len() - 1;
        self.offsets[self.index]
    }

    fn following(&mut self, offset: i32) -> i32 {
        match self.offsets.iter().position(|&b| b > offset) {
            Some(i) => {
                self.index = i;
                self.offsets[i]
            }
            None => DONE,
        }
    }

    fn preceding(&mut self, offset: i32) -> i32 {
        match self.offsets.iter().rposition(|&b| b < offset) {
            Some(i) => {
                self.index = i;
                self.offsets[i]
            }
            None => DONE,
        }
    }

    fn is_boundary(&mut self, offset: i32) -> bool {
        self.offsets.contains(&offset)
    }

    fn rule_status(&self) -> i32 {
        self.statuses[self.index][0]
    }

    fn rule_status_vector(&self) -> StatusVec {
        self.statuses[self.index].clone()
    }

    fn close(&mut self) -> Result<()> {
        self.counters.cursors_closed.fetch_add(1, Ordering::SeqCst);
        if self.fail_close {
            return Err(BreakError::Close("scripted failure".to_string()));
        }
        Ok(())
    }
}
