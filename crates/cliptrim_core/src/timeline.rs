use std::collections::HashSet;

use tracing::warn;

use crate::crossfade;
use crate::error::{CoreError, Result};
use crate::types::*;

impl Timeline {
    /// Create a timeline over an asset of `total_duration` seconds, holding one
    /// clip that spans the whole asset.
    pub fn new(total_duration: f64) -> Result<Self> {
        Self::with_spans(total_duration, &[(0.0, total_duration)])
    }

    /// Create a timeline from explicit `(start, end)` spans. Ids are assigned
    /// in the given order; the store is then sorted and crossfades resolved.
    pub fn with_spans(total_duration: f64, spans: &[(f64, f64)]) -> Result<Self> {
        if !total_duration.is_finite() || total_duration <= 0.0 {
            return Err(CoreError::InvalidDuration(total_duration));
        }

        let mut timeline = Self {
            total_duration,
            clips: Vec::with_capacity(spans.len()),
            next_id: 0,
            selected: None,
        };

        for &(start, end) in spans {
            if !(start >= 0.0 && start < end && end <= total_duration) {
                return Err(CoreError::InvalidSpan { start, end });
            }
            let id = timeline.allocate_id();
            timeline.clips.push(Clip::new(id, start, end));
        }

        timeline.normalize();
        Ok(timeline)
    }

    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    /// Clips in ascending `start` order (outside an in-progress drag).
    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }

    pub fn clip(&self, id: ClipId) -> Option<&Clip> {
        self.clips.iter().find(|c| c.id == id)
    }

    /// The id the next created clip will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn selected_clip_id(&self) -> Option<ClipId> {
        self.selected
    }

    pub fn selected_clip(&self) -> Option<&Clip> {
        self.selected.and_then(|id| self.clip(id))
    }

    pub fn select_clip(&mut self, id: ClipId) -> Result<()> {
        if self.clip(id).is_none() {
            return Err(CoreError::ClipNotFound(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Select `id`, or deselect it if it is already selected.
    /// Returns whether the clip is selected afterwards.
    pub fn toggle_selection(&mut self, id: ClipId) -> Result<bool> {
        if self.selected == Some(id) {
            self.deselect();
            Ok(false)
        } else {
            self.select_clip(id)?;
            Ok(true)
        }
    }

    /// First clip whose `[start, end]` contains `time`.
    pub fn clip_at(&self, time: f64) -> Option<&Clip> {
        self.clips.iter().find(|c| c.contains(time))
    }

    /// False inside a gap that no clip covers.
    pub fn is_time_in_clip(&self, time: f64) -> bool {
        self.clip_at(time).is_some()
    }

    pub fn opacity_at(&self, time: f64) -> f64 {
        crossfade::opacity_at(&self.clips, time)
    }

    pub fn preview_state(&self, time: f64) -> PreviewState {
        let in_clip = self.is_time_in_clip(time);
        let opacity = if in_clip { self.opacity_at(time) } else { 1.0 };
        PreviewState { in_clip, opacity }
    }

    /// Export the store as plain segments for the transcoder.
    pub fn active_segments(&self) -> Vec<Segment> {
        self.clips.iter().map(Clip::to_segment).collect()
    }

    /// Clamp a time into `[0, total_duration]`. NaN maps to 0.
    pub fn clamp_time(&self, time: f64) -> f64 {
        if time.is_nan() {
            0.0
        } else {
            time.clamp(0.0, self.total_duration)
        }
    }

    pub(crate) fn allocate_id(&mut self) -> ClipId {
        let id = ClipId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn index_of(&self, id: ClipId) -> Option<usize> {
        self.clips.iter().position(|c| c.id == id)
    }

    pub(crate) fn clip_mut(&mut self, id: ClipId) -> Result<&mut Clip> {
        self.clips
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CoreError::ClipNotFound(id))
    }

    /// Re-sort by start and re-derive every crossfade.
    /// Check a store that was built outside `with_spans`, e.g. deserialized.
    ///
    /// Rejects bad durations, out-of-bounds or empty spans and duplicate ids.
    /// A stale `next_id` is bumped past every clip id and a dangling selection
    /// is dropped. The store is then sorted and crossfades resolved.
    pub fn validate(&mut self) -> Result<()> {
        if !self.total_duration.is_finite() || self.total_duration <= 0.0 {
            return Err(CoreError::InvalidDuration(self.total_duration));
        }

        let mut seen = HashSet::with_capacity(self.clips.len());
        for clip in &self.clips {
            let (start, end) = (clip.start, clip.end);
            if !(start >= 0.0 && start < end && end <= self.total_duration) {
                return Err(CoreError::InvalidSpan { start, end });
            }
            if !seen.insert(clip.id) {
                return Err(CoreError::DuplicateClipId(clip.id));
            }
        }

        if let Some(max) = self.clips.iter().map(|c| c.id.0).max() {
            self.next_id = self.next_id.max(max + 1);
        }
        if let Some(id) = self.selected {
            if self.index_of(id).is_none() {
                warn!(%id, "dropping selection of a missing clip");
                self.selected = None;
            }
        }

        self.normalize();
        Ok(())
    }

    pub(crate) fn normalize(&mut self) {
        self.clips.sort_by(|a, b| a.start.total_cmp(&b.start));
        crossfade::resolve_crossfades(&mut self.clips);
    }
}
