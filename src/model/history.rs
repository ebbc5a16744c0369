//! Snapshot-based undo history for the theme document.
//!
//! Every edit pushes a copy of the last committed document before it
//! mutates anything; undo restores the most recent copy wholesale.

use std::collections::VecDeque;
use std::ops::{Deref, DerefMut};

use crate::theme::ThemeDocument;

/// Maximum number of snapshots kept
pub const MAX_UNDO_DEPTH: usize = 50;

/// Bounded undo stack plus the committed baseline it snapshots from.
#[derive(Debug, Clone)]
pub struct UndoHistory {
    snapshots: VecDeque<ThemeDocument>,
    last_committed: Option<ThemeDocument>,
    suppressed: bool,
    max_size: usize,
}

impl UndoHistory {
    /// Create a new history with the default depth
    pub fn new() -> Self {
        Self::with_max_size(MAX_UNDO_DEPTH)
    }

    /// Create a new history with the specified depth
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            snapshots: VecDeque::new(),
            last_committed: None,
            suppressed: false,
            max_size,
        }
    }

    /// Snapshot the committed baseline onto the stack
    ///
    /// No-op while suppressed or before anything has been committed.
    /// Returns whether a snapshot was recorded.
    pub fn push_undo(&mut self) -> bool {
        if self.suppressed {
            return false;
        }
        let Some(baseline) = &self.last_committed else {
            return false;
        };

        self.snapshots.push_back(baseline.clone());
        while self.snapshots.len() > self.max_size {
            self.snapshots.pop_front();
        }
        true
    }

    /// Record a new baseline for the next `push_undo`
    pub fn commit(&mut self, doc: Option<ThemeDocument>) {
        self.last_committed = doc;
    }

    /// Take the most recent snapshot off the stack
    pub fn pop(&mut self) -> Option<ThemeDocument> {
        self.snapshots.pop_back()
    }

    /// Drop every snapshot (the baseline is kept)
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Stop recording until the returned guard is dropped
    pub fn suppress(&mut self) -> Suppressed<'_> {
        let previous = self.suppressed;
        self.suppressed = true;
        Suppressed {
            history: self,
            previous,
        }
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn last_committed(&self) -> Option<&ThemeDocument> {
        self.last_committed.as_ref()
    }

    /// Snapshots, oldest first
    pub fn snapshots(&self) -> impl Iterator<Item = &ThemeDocument> {
        self.snapshots.iter()
    }
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped suppression of undo recording.
///
/// Restores the previous suppression state on drop, including on early
/// returns and unwinding.
pub struct Suppressed<'a> {
    history: &'a mut UndoHistory,
    previous: bool,
}

impl Deref for Suppressed<'_> {
    type Target = UndoHistory;

    fn deref(&self) -> &UndoHistory {
        self.history
    }
}

impl DerefMut for Suppressed<'_> {
    fn deref_mut(&mut self) -> &mut UndoHistory {
        self.history
    }
}

impl Drop for Suppressed<'_> {
    fn drop(&mut self) {
        self.history.suppressed = self.previous;
    }
}
