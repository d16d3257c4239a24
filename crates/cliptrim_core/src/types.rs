use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ClipId
// ---------------------------------------------------------------------------

/// Monotonically assigned clip identifier. Never reused within a timeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClipId(pub u64);

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Clip
// ---------------------------------------------------------------------------

/// A contiguous range of the source asset, in seconds.
///
/// `fade_in` / `fade_out` are derived from overlaps with the neighbouring
/// clips and are rewritten by [`crate::crossfade::resolve_crossfades`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Clip {
    pub id: ClipId,
    pub start: f64,
    pub end: f64,
    pub fade_in: f64,
    pub fade_out: f64,
}

impl Clip {
    pub fn new(id: ClipId, start: f64, end: f64) -> Self {
        Self {
            id,
            start,
            end,
            fade_in: 0.0,
            fade_out: 0.0,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Closed-interval containment, `[start, end]`.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time <= self.end
    }

    /// Open-interval containment, `(start, end)`. Cut points must satisfy this.
    pub fn strictly_contains(&self, time: f64) -> bool {
        time > self.start && time < self.end
    }

    /// Length of the overlap between this clip and a clip that starts at or after it.
    pub fn overlap_with(&self, next: &Clip) -> f64 {
        (self.end.min(next.end) - next.start).max(0.0)
    }

    pub fn to_segment(&self) -> Segment {
        Segment {
            start: self.start,
            end: self.end,
            fade_in: self.fade_in,
            fade_out: self.fade_out,
        }
    }
}

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// A clip as handed to the external transcoder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub fade_in: f64,
    pub fade_out: f64,
}

impl Segment {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    pub fn has_fade(&self) -> bool {
        self.fade_in > 0.0 || self.fade_out > 0.0
    }
}

// ---------------------------------------------------------------------------
// ResizeEdge
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResizeEdge {
    Start,
    End,
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

/// The clip store: a fixed-duration asset cut into ordered clips.
///
/// Fields are crate-private so the ordering and crossfade invariants can only
/// be touched by the edit operations in this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub(crate) total_duration: f64,
    pub(crate) clips: Vec<Clip>,
    pub(crate) next_id: u64,
    pub(crate) selected: Option<ClipId>,
}

// ---------------------------------------------------------------------------
// PreviewState
// ---------------------------------------------------------------------------

/// What the preview player should show at a given instant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreviewState {
    /// False when no clip covers the instant (a dead gap).
    pub in_clip: bool,
    pub opacity: f64,
}

// ---------------------------------------------------------------------------
// Playhead
// ---------------------------------------------------------------------------

/// The media player's current position, owned outside the engine.
pub trait Playhead {
    fn position(&self) -> f64;
    fn seek(&mut self, time: f64);
}

impl Playhead for f64 {
    fn position(&self) -> f64 {
        *self
    }

    fn seek(&mut self, time: f64) {
        *self = time;
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Format seconds as `MM:SS.mmm`, the player display format.
pub fn format_timecode(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1_000.0).floor() as u64;
    let ms = total_ms % 1_000;
    let total_secs = total_ms / 1_000;
    let secs = total_secs % 60;
    let mins = total_secs / 60;
    format!("{:02}:{:02}.{:03}", mins, secs, ms)
}

/// Format seconds as `M:SS.s`, the timeline ruler label format.
pub fn format_ruler_label(seconds: f64) -> String {
    let tenths = (seconds.max(0.0) * 10.0).round() as u64;
    let mins = tenths / 600;
    let rem = tenths % 600;
    format!("{}:{:02}.{}", mins, rem / 10, rem % 10)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
