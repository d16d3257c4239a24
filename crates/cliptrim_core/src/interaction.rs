use serde::{Deserialize, Serialize};

use crate::types::{ClipId, ResizeEdge};

/// The pointer gesture currently in progress.
///
/// At most one gesture runs at a time; edits that would conflict with it are
/// refused until it ends or is cancelled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum Interaction {
    #[default]
    Idle,
    DraggingPlayhead,
    DraggingClip(ClipDrag),
    ResizingClip(ClipResize),
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    /// The clip being moved or resized, if any.
    pub fn active_clip(&self) -> Option<ClipId> {
        match self {
            Interaction::DraggingClip(drag) => Some(drag.clip_id),
            Interaction::ResizingClip(resize) => Some(resize.clip_id),
            Interaction::Idle | Interaction::DraggingPlayhead => None,
        }
    }
}

/// A clip body drag. `origin_*` is the span when the pointer went down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipDrag {
    pub clip_id: ClipId,
    pub origin_start: f64,
    pub origin_end: f64,
    /// Movement below this many seconds is treated as a click.
    pub click_tolerance: f64,
    pub moved: bool,
}

impl ClipDrag {
    pub fn origin(&self) -> (f64, f64) {
        (self.origin_start, self.origin_end)
    }

    /// Latch `moved` once the pointer leaves the click tolerance. It never resets.
    pub fn register_delta(&mut self, delta: f64) -> bool {
        if !self.moved && delta.abs() > self.click_tolerance {
            self.moved = true;
        }
        self.moved
    }
}

/// A clip edge drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipResize {
    pub clip_id: ClipId,
    pub edge: ResizeEdge,
    pub origin_start: f64,
    pub origin_end: f64,
}

impl ClipResize {
    pub fn origin(&self) -> (f64, f64) {
        (self.origin_start, self.origin_end)
    }
}

/// How a clip drag ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum DragOutcome {
    /// The clip moved and the new position was committed to history.
    Committed,
    /// The pointer never left the click tolerance: treated as a click on the
    /// clip, which toggled its selection. Nothing was committed.
    SelectionToggled { selected: bool },
}
