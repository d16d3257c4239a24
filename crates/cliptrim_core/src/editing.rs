use crate::error::{CoreError, Result};
use crate::snapping;
use crate::types::*;

impl Timeline {
    /// Cut the clip under `time` into `[start, time)` and `[time, end)`.
    ///
    /// Both halves receive fresh ids; the original id is retired. `time` must
    /// lie strictly inside a clip and leave at least `min_duration` on each side.
    /// Returns the ids of (left, right).
    pub fn cut_at(&mut self, time: f64, min_duration: f64) -> Result<(ClipId, ClipId)> {
        let index = self
            .clips
            .iter()
            .position(|c| c.strictly_contains(time))
            .ok_or(CoreError::NoClipAtTime(time))?;

        let original = &self.clips[index];
        if time - original.start < min_duration || original.end - time < min_duration {
            return Err(CoreError::CutTooShort(time));
        }
        let (original_id, start, end) = (original.id, original.start, original.end);

        let left_id = self.allocate_id();
        let right_id = self.allocate_id();
        self.clips.splice(
            index..=index,
            [Clip::new(left_id, start, time), Clip::new(right_id, time, end)],
        );

        if self.selected == Some(original_id) {
            self.selected = None;
        }
        self.normalize();
        Ok((left_id, right_id))
    }

    /// Remove the selected clip and pull every later clip left to close the gap.
    ///
    /// If the playhead sits after the removed clip's start it moves back by the
    /// same amount, but never before the removed clip's start. Returns the
    /// removed clip.
    pub fn delete_selected(&mut self, playhead: &mut impl Playhead) -> Result<Clip> {
        let id = self.selected.ok_or(CoreError::NothingSelected)?;
        let index = self.index_of(id).ok_or(CoreError::ClipNotFound(id))?;

        let removed = self.clips.remove(index);
        // A later clip overlapping the removed one must not be pushed below zero.
        let shift = match self.clips.get(index) {
            Some(next) => removed.duration().min(next.start),
            None => removed.duration(),
        };
        for clip in &mut self.clips[index..] {
            clip.start -= shift;
            clip.end -= shift;
        }

        let position = playhead.position();
        if position > removed.start {
            playhead.seek((position - shift).max(removed.start));
        }

        self.selected = None;
        self.normalize();
        Ok(removed)
    }

    /// Overwrite a clip's span without re-sorting. Used for in-progress drags.
    pub(crate) fn set_span(&mut self, id: ClipId, start: f64, end: f64) -> Result<()> {
        let clip = self.clip_mut(id)?;
        clip.start = start;
        clip.end = end;
        Ok(())
    }
}

/// Span of a clip dragged `delta` seconds from its origin.
///
/// The clip keeps its length: it is clamped into `[0, total]` by moving it,
/// then snapped, then clamped again so a snap can never push it out of bounds.
pub fn drag_span(
    origin: (f64, f64),
    delta: f64,
    total: f64,
    snap_points: &[f64],
    snap_threshold: f64,
) -> (f64, f64) {
    let delta = if delta.is_finite() { delta } else { 0.0 };
    let duration = origin.1 - origin.0;

    let clamped = clamp_span(origin.0 + delta, duration, total);
    let (start, _) = snapping::snap_span(clamped.0, clamped.1, snap_points, snap_threshold);
    clamp_span(start, duration, total)
}

/// Span of a clip whose `edge` is moved `delta` seconds from its origin.
///
/// The moving edge stays inside the asset and at least `min_duration` away
/// from the fixed edge.
pub fn resize_span(
    origin: (f64, f64),
    edge: ResizeEdge,
    delta: f64,
    total: f64,
    min_duration: f64,
) -> (f64, f64) {
    let delta = if delta.is_finite() { delta } else { 0.0 };
    let (start, end) = origin;

    match edge {
        ResizeEdge::Start => {
            let new_start = (start + delta).min(end - min_duration).max(0.0);
            (new_start, end)
        }
        ResizeEdge::End => {
            let new_end = (end + delta).max(start + min_duration).min(total);
            (start, new_end)
        }
    }
}

fn clamp_span(start: f64, duration: f64, total: f64) -> (f64, f64) {
    if start < 0.0 {
        (0.0, duration)
    } else if start + duration > total {
        (total - duration, total)
    } else {
        (start, start + duration)
    }
}
