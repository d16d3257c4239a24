use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::editing::{drag_span, resize_span};
use crate::error::{CoreError, Result};
use crate::history::History;
use crate::interaction::{ClipDrag, ClipResize, DragOutcome, Interaction};
use crate::shortcuts::Shortcut;
use crate::snapping::collect_snap_points;
use crate::types::*;

/// The editing engine: a clip store plus its history and pointer state.
///
/// Every committed edit leaves the store sorted with crossfades resolved and
/// pushes a history entry. A call that returns `Err` leaves the editor exactly
/// as it was.
#[derive(Debug, Clone)]
pub struct Editor {
    timeline: Timeline,
    history: History,
    interaction: Interaction,
    config: EngineConfig,
}

impl Editor {
    /// Start editing an asset of `total_duration` seconds as a single clip.
    pub fn new(total_duration: f64, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let timeline = Timeline::new(total_duration)?;
        Self::from_timeline(timeline, config)
    }

    /// Start editing an existing store. It is validated and normalized, then
    /// its state becomes the first history entry.
    pub fn from_timeline(mut timeline: Timeline, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        timeline.validate()?;
        let mut history = History::new(config.history_capacity);
        history.commit(&timeline, "Initial state");
        debug!(
            total = timeline.total_duration(),
            clips = timeline.clip_count(),
            "editor ready"
        );
        Ok(Self {
            timeline,
            history,
            interaction: Interaction::Idle,
            config,
        })
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn clips(&self) -> &[Clip] {
        self.timeline.clips()
    }

    pub fn selected_clip_id(&self) -> Option<ClipId> {
        self.timeline.selected_clip_id()
    }

    pub fn active_segments(&self) -> Vec<Segment> {
        self.timeline.active_segments()
    }

    pub fn preview_state(&self, time: f64) -> PreviewState {
        self.timeline.preview_state(time)
    }

    pub fn can_undo(&self) -> bool {
        self.interaction.is_idle() && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.interaction.is_idle() && self.history.can_redo()
    }

    // -----------------------------------------------------------------------
    // Selection and seeking
    // -----------------------------------------------------------------------

    pub fn select_clip(&mut self, id: ClipId) -> Result<()> {
        self.ensure_idle()?;
        self.timeline.select_clip(id)
    }

    pub fn deselect(&mut self) {
        self.timeline.deselect();
    }

    /// Click on empty timeline space: move the playhead and drop the selection.
    /// Returns the clamped time.
    pub fn seek(&mut self, time: f64, playhead: &mut impl Playhead) -> Result<f64> {
        self.ensure_idle()?;
        let time = self.timeline.clamp_time(time);
        playhead.seek(time);
        self.timeline.deselect();
        Ok(time)
    }

    // -----------------------------------------------------------------------
    // Committed edits
    // -----------------------------------------------------------------------

    pub fn cut(&mut self, time: f64) -> Result<(ClipId, ClipId)> {
        self.ensure_idle()?;
        let (left, right) = self.timeline.cut_at(time, self.config.min_clip_duration)?;
        self.history.commit(&self.timeline, "Cut clip");
        debug!(time, %left, %right, "cut clip");
        Ok((left, right))
    }

    pub fn cut_at_playhead(&mut self, playhead: &impl Playhead) -> Result<(ClipId, ClipId)> {
        self.cut(playhead.position())
    }

    pub fn delete_selected(&mut self, playhead: &mut impl Playhead) -> Result<Clip> {
        self.ensure_idle()?;
        let removed = self.timeline.delete_selected(playhead)?;
        self.history.commit(&self.timeline, "Delete clip");
        debug!(id = %removed.id, start = removed.start, end = removed.end, "deleted clip");
        Ok(removed)
    }

    // -----------------------------------------------------------------------
    // Clip drag
    // -----------------------------------------------------------------------

    /// Pointer down on a clip body. `seconds_per_px` converts the configured
    /// pixel click tolerance into timeline seconds.
    pub fn begin_drag(&mut self, id: ClipId, seconds_per_px: f64) -> Result<()> {
        self.ensure_idle()?;
        let clip = self.timeline.clip(id).ok_or(CoreError::ClipNotFound(id))?;
        let scale = if seconds_per_px.is_finite() {
            seconds_per_px.abs()
        } else {
            0.0
        };

        self.interaction = Interaction::DraggingClip(ClipDrag {
            clip_id: id,
            origin_start: clip.start,
            origin_end: clip.end,
            click_tolerance: self.config.click_tolerance_px * scale,
            moved: false,
        });
        trace!(%id, "begin drag");
        Ok(())
    }

    /// Move the dragged clip to `delta` seconds from where it started.
    /// Returns the clip's new span. Nothing is committed until [`Self::end_drag`].
    pub fn update_drag(&mut self, delta: f64, playhead: &impl Playhead) -> Result<(f64, f64)> {
        let Interaction::DraggingClip(drag) = &mut self.interaction else {
            return Err(CoreError::NoInteraction);
        };
        drag.register_delta(delta);

        let points = collect_snap_points(&self.timeline, drag.clip_id, playhead.position());
        let (start, end) = drag_span(
            drag.origin(),
            delta,
            self.timeline.total_duration(),
            &points,
            self.config.snap_threshold,
        );
        self.timeline.set_span(drag.clip_id, start, end)?;
        trace!(id = %drag.clip_id, delta, start, end, "drag");
        Ok((start, end))
    }

    /// Pointer up. A drag that never left the click tolerance puts the clip
    /// back and toggles its selection instead of committing.
    pub fn end_drag(&mut self) -> Result<DragOutcome> {
        let Interaction::DraggingClip(drag) = &self.interaction else {
            return Err(CoreError::NoInteraction);
        };
        let drag = drag.clone();

        let outcome = if drag.moved {
            self.timeline.normalize();
            self.history.commit(&self.timeline, "Move clip");
            debug!(id = %drag.clip_id, "moved clip");
            DragOutcome::Committed
        } else {
            self.timeline
                .set_span(drag.clip_id, drag.origin_start, drag.origin_end)?;
            let selected = self.timeline.toggle_selection(drag.clip_id)?;
            DragOutcome::SelectionToggled { selected }
        };

        self.interaction = Interaction::Idle;
        Ok(outcome)
    }

    // -----------------------------------------------------------------------
    // Clip resize
    // -----------------------------------------------------------------------

    pub fn begin_resize(&mut self, id: ClipId, edge: ResizeEdge) -> Result<()> {
        self.ensure_idle()?;
        let clip = self.timeline.clip(id).ok_or(CoreError::ClipNotFound(id))?;

        self.interaction = Interaction::ResizingClip(ClipResize {
            clip_id: id,
            edge,
            origin_start: clip.start,
            origin_end: clip.end,
        });
        trace!(%id, ?edge, "begin resize");
        Ok(())
    }

    /// Move the grabbed edge to `delta` seconds from where it started.
    pub fn update_resize(&mut self, delta: f64) -> Result<(f64, f64)> {
        let Interaction::ResizingClip(resize) = &self.interaction else {
            return Err(CoreError::NoInteraction);
        };

        let (start, end) = resize_span(
            resize.origin(),
            resize.edge,
            delta,
            self.timeline.total_duration(),
            self.config.min_clip_duration,
        );
        self.timeline.set_span(resize.clip_id, start, end)?;
        trace!(id = %resize.clip_id, delta, start, end, "resize");
        Ok((start, end))
    }

    pub fn end_resize(&mut self) -> Result<()> {
        let Interaction::ResizingClip(resize) = &self.interaction else {
            return Err(CoreError::NoInteraction);
        };
        let id = resize.clip_id;

        self.timeline.normalize();
        self.history.commit(&self.timeline, "Resize clip");
        self.interaction = Interaction::Idle;
        debug!(%id, "resized clip");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Playhead drag
    // -----------------------------------------------------------------------

    pub fn begin_playhead_drag(&mut self, time: f64, playhead: &mut impl Playhead) -> Result<f64> {
        self.ensure_idle()?;
        self.interaction = Interaction::DraggingPlayhead;
        self.update_playhead_drag(time, playhead)
    }

    /// Seek the playhead to `time`, clamped into the asset. Returns the clamped time.
    pub fn update_playhead_drag(&mut self, time: f64, playhead: &mut impl Playhead) -> Result<f64> {
        if self.interaction != Interaction::DraggingPlayhead {
            return Err(CoreError::NoInteraction);
        }
        let time = self.timeline.clamp_time(time);
        playhead.seek(time);
        Ok(time)
    }

    pub fn end_playhead_drag(&mut self) -> Result<()> {
        if self.interaction != Interaction::DraggingPlayhead {
            return Err(CoreError::NoInteraction);
        }
        self.interaction = Interaction::Idle;
        Ok(())
    }

    /// Abandon the gesture in progress. A clip drag or resize is rolled back
    /// to the last committed state; the current selection is kept.
    pub fn cancel_interaction(&mut self) -> Result<()> {
        match &self.interaction {
            Interaction::Idle => return Err(CoreError::NoInteraction),
            Interaction::DraggingPlayhead => {}
            Interaction::DraggingClip(_) | Interaction::ResizingClip(_) => {
                let selected = self.timeline.selected_clip_id();
                self.history.restore_current(&mut self.timeline)?;
                let still_present = selected.filter(|id| self.timeline.clip(*id).is_some());
                self.timeline.selected = still_present;
            }
        }
        self.interaction = Interaction::Idle;
        debug!("interaction cancelled");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // History
    // -----------------------------------------------------------------------

    /// Returns the label of the edit that was undone.
    pub fn undo(&mut self) -> Result<String> {
        self.ensure_idle()?;
        let label = self.history.undo(&mut self.timeline)?;
        debug!(%label, cursor = self.history.cursor(), "undo");
        Ok(label)
    }

    /// Returns the label of the edit that was redone.
    pub fn redo(&mut self) -> Result<String> {
        self.ensure_idle()?;
        let label = self.history.redo(&mut self.timeline)?;
        debug!(%label, cursor = self.history.cursor(), "redo");
        Ok(label)
    }

    // -----------------------------------------------------------------------
    // Keyboard
    // -----------------------------------------------------------------------

    /// Run a keyboard shortcut. `TogglePlayback` belongs to the host player
    /// and is accepted without touching the editor.
    pub fn apply_shortcut(&mut self, shortcut: Shortcut, playhead: &mut impl Playhead) -> Result<()> {
        match shortcut {
            Shortcut::DeleteSelected => self.delete_selected(playhead).map(|_| ()),
            Shortcut::CutAtPlayhead => self.cut_at_playhead(playhead).map(|_| ()),
            Shortcut::Undo => self.undo().map(|_| ()),
            Shortcut::Redo => self.redo().map(|_| ()),
            Shortcut::TogglePlayback => Ok(()),
        }
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.interaction.is_idle() {
            Ok(())
        } else {
            Err(CoreError::InteractionInProgress)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_editor(spans: &[(f64, f64)], total: f64) -> Editor {
        let timeline = Timeline::with_spans(total, spans).unwrap();
        Editor::from_timeline(timeline, EngineConfig::default()).unwrap()
    }

    fn spans(editor: &Editor) -> Vec<(f64, f64)> {
        editor.clips().iter().map(|c| (c.start, c.end)).collect()
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    #[test]
    fn new_commits_initial_state() {
        let editor = Editor::new(60.0, EngineConfig::default()).unwrap();
        assert_eq!(editor.history().len(), 1);
        assert_eq!(editor.history().current().unwrap().label, "Initial state");
        assert!(!editor.can_undo());
        assert!(editor.interaction().is_idle());
    }

    #[test]
    fn from_timeline_normalizes_loaded_store() {
        let json = r#"{
            "totalDuration": 100.0,
            "clips": [
                {"id": 0, "start": 50.0, "end": 60.0, "fadeIn": 0.0, "fadeOut": 0.0},
                {"id": 1, "start": 0.0, "end": 10.0, "fadeIn": 0.0, "fadeOut": 0.0}
            ],
            "nextId": 2,
            "selected": null
        }"#;
        let timeline: Timeline = serde_json::from_str(json).unwrap();
        let mut editor = Editor::from_timeline(timeline, EngineConfig::default()).unwrap();
        assert_eq!(spans(&editor), vec![(0.0, 10.0), (50.0, 60.0)]);

        editor.cut(5.0).unwrap();
        editor.undo().unwrap();
        assert_eq!(spans(&editor), vec![(0.0, 10.0), (50.0, 60.0)]);
    }

    #[test]
    fn from_timeline_rejects_empty_clip() {
        let json = r#"{
            "totalDuration": 100.0,
            "clips": [{"id": 0, "start": 30.0, "end": 30.0, "fadeIn": 0.0, "fadeOut": 0.0}],
            "nextId": 1,
            "selected": null
        }"#;
        let timeline: Timeline = serde_json::from_str(json).unwrap();
        assert!(matches!(
            Editor::from_timeline(timeline, EngineConfig::default()),
            Err(CoreError::InvalidSpan { .. })
        ));
    }

    #[test]
    fn new_rejects_bad_input() {
        assert!(matches!(
            Editor::new(-1.0, EngineConfig::default()),
            Err(CoreError::InvalidDuration(_))
        ));
        let config = EngineConfig {
            history_capacity: 0,
            ..Default::default()
        };
        assert!(matches!(
            Editor::new(10.0, config),
            Err(CoreError::InvalidConfig(_))
        ));
    }

    // -----------------------------------------------------------------------
    // Cut / delete
    // -----------------------------------------------------------------------

    #[test]
    fn cut_commits_and_undoes() {
        let mut editor = Editor::new(100.0, EngineConfig::default()).unwrap();
        editor.cut(30.0).unwrap();
        assert_eq!(editor.history().len(), 2);
        assert_eq!(editor.undo().unwrap(), "Cut clip");
        assert_eq!(spans(&editor), vec![(0.0, 100.0)]);
    }

    #[test]
    fn failed_cut_does_not_commit() {
        let mut editor = Editor::new(100.0, EngineConfig::default()).unwrap();
        assert!(editor.cut(100.0).is_err());
        assert_eq!(editor.history().len(), 1);
    }

    #[test]
    fn cut_at_playhead_uses_position() {
        let mut editor = Editor::new(10.0, EngineConfig::default()).unwrap();
        let playhead = 4.0;
        editor.cut_at_playhead(&playhead).unwrap();
        assert_eq!(spans(&editor), vec![(0.0, 4.0), (4.0, 10.0)]);
    }

    #[test]
    fn delete_commits() {
        let mut editor = make_editor(&[(0.0, 40.0), (40.0, 70.0), (70.0, 100.0)], 100.0);
        editor.select_clip(ClipId(1)).unwrap();
        let mut playhead = 80.0;
        editor.delete_selected(&mut playhead).unwrap();
        assert_eq!(spans(&editor), vec![(0.0, 40.0), (40.0, 70.0)]);
        assert_eq!(playhead, 50.0);
        assert_eq!(editor.history().undo_description(), Some("Delete clip"));
    }

    #[test]
    fn seek_clamps_and_deselects() {
        let mut editor = Editor::new(10.0, EngineConfig::default()).unwrap();
        editor.select_clip(ClipId(0)).unwrap();
        let mut playhead = 0.0;
        assert_eq!(editor.seek(25.0, &mut playhead).unwrap(), 10.0);
        assert_eq!(playhead, 10.0);
        assert_eq!(editor.selected_clip_id(), None);
    }

    // -----------------------------------------------------------------------
    // Drag
    // -----------------------------------------------------------------------

    #[test]
    fn drag_moves_then_commits() {
        let mut editor = make_editor(&[(20.0, 30.0)], 100.0);
        let playhead = 90.0;

        editor.begin_drag(ClipId(0), 0.1).unwrap();
        editor.update_drag(2.0, &playhead).unwrap();
        // Updates are relative to the origin, not cumulative
        assert_eq!(editor.update_drag(5.0, &playhead).unwrap(), (25.0, 35.0));
        assert_eq!(editor.history().len(), 1);

        assert_eq!(editor.end_drag().unwrap(), DragOutcome::Committed);
        assert_eq!(spans(&editor), vec![(25.0, 35.0)]);
        assert_eq!(editor.history().len(), 2);
        assert!(editor.interaction().is_idle());
    }

    #[test]
    fn drag_ignores_nan_playhead() {
        let mut editor = make_editor(&[(20.0, 30.0)], 100.0);
        let playhead = f64::NAN;

        editor.begin_drag(ClipId(0), 0.1).unwrap();
        assert_eq!(editor.update_drag(20.0, &playhead).unwrap(), (40.0, 50.0));
        assert_eq!(editor.end_drag().unwrap(), DragOutcome::Committed);
        assert_eq!(spans(&editor), vec![(40.0, 50.0)]);
    }

    #[test]
    fn drag_reorders_and_resolves_on_release() {
        let mut editor = make_editor(&[(0.0, 10.0), (20.0, 30.0)], 100.0);
        let playhead = 90.0;

        editor.begin_drag(ClipId(1), 0.1).unwrap();
        // Clip 1 lands on [-5, 5) → clamped to [0, 10)
        editor.update_drag(-25.0, &playhead).unwrap();
        editor.update_drag(-17.0, &playhead).unwrap();
        editor.end_drag().unwrap();

        // [3, 13) now sits after [0, 10) with a 7 second overlap
        let clips = editor.clips();
        assert_eq!(clips[0].id, ClipId(0));
        assert_eq!(clips[1].id, ClipId(1));
        assert_eq!(clips[0].fade_out, 7.0);
        assert_eq!(clips[1].fade_in, 7.0);
    }

    #[test]
    fn click_toggles_selection_without_commit() {
        let mut editor = make_editor(&[(20.0, 30.0)], 100.0);
        let playhead = 0.0;

        editor.begin_drag(ClipId(0), 0.1).unwrap();
        editor.update_drag(0.3, &playhead).unwrap();
        let outcome = editor.end_drag().unwrap();

        assert_eq!(outcome, DragOutcome::SelectionToggled { selected: true });
        assert_eq!(spans(&editor), vec![(20.0, 30.0)]);
        assert_eq!(editor.selected_clip_id(), Some(ClipId(0)));
        assert_eq!(editor.history().len(), 1);

        editor.begin_drag(ClipId(0), 0.1).unwrap();
        let outcome = editor.end_drag().unwrap();
        assert_eq!(outcome, DragOutcome::SelectionToggled { selected: false });
    }

    #[test]
    fn edits_refused_while_dragging() {
        let mut editor = make_editor(&[(20.0, 30.0)], 100.0);
        let mut playhead = 0.0;
        editor.begin_drag(ClipId(0), 0.1).unwrap();

        assert!(matches!(editor.cut(25.0), Err(CoreError::InteractionInProgress)));
        assert!(matches!(editor.undo(), Err(CoreError::InteractionInProgress)));
        assert!(matches!(
            editor.begin_resize(ClipId(0), ResizeEdge::End),
            Err(CoreError::InteractionInProgress)
        ));
        assert!(editor.seek(5.0, &mut playhead).is_err());
        assert!(!editor.can_undo());
    }

    #[test]
    fn update_without_begin_fails() {
        let mut editor = make_editor(&[(20.0, 30.0)], 100.0);
        let playhead = 0.0;
        assert!(matches!(
            editor.update_drag(1.0, &playhead),
            Err(CoreError::NoInteraction)
        ));
        assert!(matches!(editor.end_drag(), Err(CoreError::NoInteraction)));
        assert!(matches!(editor.update_resize(1.0), Err(CoreError::NoInteraction)));
        assert!(matches!(editor.end_resize(), Err(CoreError::NoInteraction)));
        assert!(matches!(editor.end_playhead_drag(), Err(CoreError::NoInteraction)));
    }

    #[test]
    fn begin_drag_unknown_clip_fails() {
        let mut editor = make_editor(&[(20.0, 30.0)], 100.0);
        assert!(matches!(
            editor.begin_drag(ClipId(9), 0.1),
            Err(CoreError::ClipNotFound(_))
        ));
        assert!(editor.interaction().is_idle());
    }

    #[test]
    fn cancel_drag_restores_committed_state() {
        let mut editor = make_editor(&[(0.0, 10.0), (20.0, 30.0)], 100.0);
        editor.select_clip(ClipId(0)).unwrap();
        let playhead = 0.0;

        editor.begin_drag(ClipId(1), 0.1).unwrap();
        editor.update_drag(-15.0, &playhead).unwrap();
        editor.cancel_interaction().unwrap();

        assert_eq!(spans(&editor), vec![(0.0, 10.0), (20.0, 30.0)]);
        assert_eq!(editor.selected_clip_id(), Some(ClipId(0)));
        assert!(editor.interaction().is_idle());
        assert!(matches!(editor.cancel_interaction(), Err(CoreError::NoInteraction)));
    }

    // -----------------------------------------------------------------------
    // Resize
    // -----------------------------------------------------------------------

    #[test]
    fn resize_end_into_neighbour_creates_crossfade() {
        let mut editor = make_editor(&[(0.0, 30.0), (30.0, 60.0)], 60.0);
        editor.begin_resize(ClipId(0), ResizeEdge::End).unwrap();
        editor.update_resize(5.0).unwrap();
        editor.end_resize().unwrap();

        assert_eq!(spans(&editor), vec![(0.0, 35.0), (30.0, 60.0)]);
        assert_eq!(editor.clips()[0].fade_out, 5.0);
        assert_eq!(editor.history().undo_description(), Some("Resize clip"));
    }

    #[test]
    fn resize_start_respects_min_duration() {
        let mut editor = make_editor(&[(20.0, 30.0)], 100.0);
        editor.begin_resize(ClipId(0), ResizeEdge::Start).unwrap();
        let (start, end) = editor.update_resize(100.0).unwrap();
        editor.end_resize().unwrap();
        assert!((start - 29.9).abs() < 1e-9);
        assert_eq!(end, 30.0);
    }

    #[test]
    fn resize_start_can_reorder() {
        let mut editor = make_editor(&[(10.0, 20.0), (30.0, 40.0)], 100.0);
        editor.begin_resize(ClipId(1), ResizeEdge::Start).unwrap();
        editor.update_resize(-25.0).unwrap();
        editor.end_resize().unwrap();

        assert_eq!(editor.clips()[0].id, ClipId(1));
        assert_eq!(spans(&editor), vec![(5.0, 40.0), (10.0, 20.0)]);
        assert_eq!(editor.clips()[1].fade_in, 10.0);
    }

    // -----------------------------------------------------------------------
    // Playhead
    // -----------------------------------------------------------------------

    #[test]
    fn playhead_drag_clamps_and_never_commits() {
        let mut editor = Editor::new(10.0, EngineConfig::default()).unwrap();
        let mut playhead = 0.0;

        assert_eq!(editor.begin_playhead_drag(3.0, &mut playhead).unwrap(), 3.0);
        assert_eq!(editor.update_playhead_drag(-2.0, &mut playhead).unwrap(), 0.0);
        assert_eq!(editor.update_playhead_drag(12.0, &mut playhead).unwrap(), 10.0);
        assert_eq!(playhead, 10.0);
        editor.end_playhead_drag().unwrap();

        assert_eq!(editor.history().len(), 1);
        assert!(editor.interaction().is_idle());
    }

    // -----------------------------------------------------------------------
    // Shortcuts
    // -----------------------------------------------------------------------

    #[test]
    fn shortcuts_dispatch() {
        let mut editor = Editor::new(10.0, EngineConfig::default()).unwrap();
        let mut playhead = 4.0;

        editor.apply_shortcut(Shortcut::CutAtPlayhead, &mut playhead).unwrap();
        assert_eq!(editor.clips().len(), 2);

        editor.apply_shortcut(Shortcut::Undo, &mut playhead).unwrap();
        assert_eq!(editor.clips().len(), 1);

        editor.apply_shortcut(Shortcut::Redo, &mut playhead).unwrap();
        assert_eq!(editor.clips().len(), 2);

        let second = editor.clips()[1].id;
        editor.select_clip(second).unwrap();
        editor.apply_shortcut(Shortcut::DeleteSelected, &mut playhead).unwrap();
        assert_eq!(spans(&editor), vec![(0.0, 4.0)]);

        editor.apply_shortcut(Shortcut::TogglePlayback, &mut playhead).unwrap();
        // Initial state, cut, delete: the redo entry was overwritten by the delete
        assert_eq!(editor.history().len(), 3);
    }
}
