use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::crossfade;
use crate::error::{CoreError, Result};
use crate::types::*;

/// A full copy of the clip store taken after a committed edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub clips: Vec<Clip>,
    pub next_id: u64,
    pub selected: Option<ClipId>,
    pub label: String,
}

impl Snapshot {
    pub fn capture(timeline: &Timeline, label: &str) -> Self {
        Self {
            clips: timeline.clips.clone(),
            next_id: timeline.next_id,
            selected: timeline.selected,
            label: label.to_string(),
        }
    }

    /// Write this snapshot back into `timeline`. Fades are re-derived rather
    /// than trusted.
    pub fn restore(&self, timeline: &mut Timeline) {
        timeline.clips = self.clips.clone();
        timeline.next_id = self.next_id;
        timeline.selected = self.selected;
        crossfade::resolve_crossfades(&mut timeline.clips);
    }
}

/// Snapshot-based undo/redo history.
///
/// Entries form a bounded ring; `cursor` points at the entry matching the
/// live timeline. Committing after an undo discards everything past the
/// cursor. When full, the oldest entry is evicted.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Snapshot>,
    cursor: usize,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    /// Record the current timeline as the newest entry.
    pub fn commit(&mut self, timeline: &Timeline, label: &str) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push_back(Snapshot::capture(timeline, label));
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len() - 1;
        tracing::trace!(label, cursor = self.cursor, len = self.entries.len(), "history commit");
    }

    /// Step back one entry and restore it. Returns the label of the edit undone.
    pub fn undo(&mut self, timeline: &mut Timeline) -> Result<String> {
        if !self.can_undo() {
            return Err(CoreError::NothingToUndo);
        }
        let undone = self.entries[self.cursor].label.clone();
        self.cursor -= 1;
        self.entries[self.cursor].restore(timeline);
        Ok(undone)
    }

    /// Step forward one entry and restore it. Returns the label of the edit redone.
    pub fn redo(&mut self, timeline: &mut Timeline) -> Result<String> {
        if !self.can_redo() {
            return Err(CoreError::NothingToRedo);
        }
        self.cursor += 1;
        let entry = &self.entries[self.cursor];
        entry.restore(timeline);
        Ok(entry.label.clone())
    }

    /// Put the entry under the cursor back into `timeline`, discarding any
    /// uncommitted changes.
    pub fn restore_current(&self, timeline: &mut Timeline) -> Result<()> {
        let entry = self.entries.get(self.cursor).ok_or(CoreError::NothingToUndo)?;
        entry.restore(timeline);
        Ok(())
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.entries.get(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn undo_description(&self) -> Option<&str> {
        if self.can_undo() {
            Some(self.entries[self.cursor].label.as_str())
        } else {
            None
        }
    }

    pub fn redo_description(&self) -> Option<&str> {
        if self.can_redo() {
            Some(self.entries[self.cursor + 1].label.as_str())
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
