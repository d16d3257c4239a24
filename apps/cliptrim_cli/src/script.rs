use std::path::{Path, PathBuf};

use anyhow::Context;
use cliptrim_core::{
    format_timecode, Clip, ClipId, Editor, EngineConfig, ResizeEdge, Segment, Shortcut,
    Timeline,
};
use cliptrim_render::{build_ffmpeg_args, compile, RenderError, RenderSettings};
use serde::{Deserialize, Serialize};

/// A recorded editing session: the asset, the starting layout and the
/// commands to replay against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    pub duration: f64,
    #[serde(default)]
    pub playhead: f64,
    /// Source file the render plan reads from.
    #[serde(default)]
    pub input: Option<PathBuf>,
    /// Starting clips. Omitted means one clip over the whole asset.
    #[serde(default)]
    pub spans: Option<Vec<(f64, f64)>>,
    #[serde(default)]
    pub commands: Vec<ScriptCommand>,
}

impl Script {
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        let script = serde_json::from_str(&data)
            .with_context(|| format!("failed to parse script {}", path.display()))?;
        Ok(script)
    }

    pub fn render_settings(&self) -> RenderSettings {
        match &self.input {
            Some(input) => RenderSettings::for_input(input.clone()),
            None => RenderSettings::default(),
        }
    }
}

fn default_seconds_per_px() -> f64 {
    0.05
}

/// One engine command. Drags and resizes carry every pointer update, each
/// measured from where the gesture started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptCommand {
    /// Cut at `time`, or at the playhead when omitted.
    Cut {
        #[serde(default)]
        time: Option<f64>,
    },
    Delete,
    Select {
        id: ClipId,
    },
    Deselect,
    Seek {
        time: f64,
    },
    Scrub {
        times: Vec<f64>,
    },
    Drag {
        id: ClipId,
        deltas: Vec<f64>,
        #[serde(default = "default_seconds_per_px")]
        seconds_per_px: f64,
    },
    Resize {
        id: ClipId,
        edge: ResizeEdge,
        deltas: Vec<f64>,
    },
    Undo,
    Redo,
    Key {
        key: String,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        shift: bool,
    },
}

/// An editor plus the playhead it drives.
pub struct Session {
    pub editor: Editor,
    pub playhead: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub applied: usize,
    pub skipped: usize,
}

impl Session {
    pub fn from_script(script: &Script, config: EngineConfig) -> cliptrim_core::Result<Self> {
        let timeline = match &script.spans {
            Some(spans) => Timeline::with_spans(script.duration, spans)?,
            None => Timeline::new(script.duration)?,
        };
        let editor = Editor::from_timeline(timeline, config)?;
        let playhead = editor.timeline().clamp_time(script.playhead);
        Ok(Self { editor, playhead })
    }

    /// Replay `commands` in order. Commands that do nothing are logged and
    /// skipped; any other error stops the run.
    pub fn run(&mut self, commands: &[ScriptCommand]) -> cliptrim_core::Result<RunSummary> {
        let mut summary = RunSummary::default();

        for (index, command) in commands.iter().enumerate() {
            tracing::info!(index, ?command, "apply");
            match self.apply(command) {
                Ok(()) => summary.applied += 1,
                Err(e) if e.is_noop() => {
                    tracing::warn!(index, error = %e, "command had no effect");
                    summary.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(summary)
    }

    pub fn apply(&mut self, command: &ScriptCommand) -> cliptrim_core::Result<()> {
        let editor = &mut self.editor;
        let playhead = &mut self.playhead;

        match command {
            ScriptCommand::Cut { time } => {
                editor.cut(time.unwrap_or(*playhead))?;
            }
            ScriptCommand::Delete => {
                editor.delete_selected(playhead)?;
            }
            ScriptCommand::Select { id } => editor.select_clip(*id)?,
            ScriptCommand::Deselect => editor.deselect(),
            ScriptCommand::Seek { time } => {
                editor.seek(*time, playhead)?;
            }
            ScriptCommand::Scrub { times } => {
                let Some((first, rest)) = times.split_first() else {
                    return Ok(());
                };
                editor.begin_playhead_drag(*first, playhead)?;
                for time in rest {
                    editor.update_playhead_drag(*time, playhead)?;
                }
                editor.end_playhead_drag()?;
            }
            ScriptCommand::Drag {
                id,
                deltas,
                seconds_per_px,
            } => {
                editor.begin_drag(*id, *seconds_per_px)?;
                let updated = deltas
                    .iter()
                    .try_for_each(|delta| editor.update_drag(*delta, &*playhead).map(|_| ()));
                if let Err(e) = updated {
                    editor.cancel_interaction()?;
                    return Err(e);
                }
                let outcome = editor.end_drag()?;
                tracing::debug!(%id, ?outcome, "drag finished");
            }
            ScriptCommand::Resize { id, edge, deltas } => {
                editor.begin_resize(*id, *edge)?;
                let updated = deltas
                    .iter()
                    .try_for_each(|delta| editor.update_resize(*delta).map(|_| ()));
                if let Err(e) = updated {
                    editor.cancel_interaction()?;
                    return Err(e);
                }
                editor.end_resize()?;
            }
            ScriptCommand::Undo => {
                editor.undo()?;
            }
            ScriptCommand::Redo => {
                editor.redo()?;
            }
            ScriptCommand::Key { key, ctrl, shift } => match Shortcut::from_key(key, *ctrl, *shift) {
                Some(shortcut) => editor.apply_shortcut(shortcut, playhead)?,
                None => tracing::warn!(%key, ctrl, shift, "unbound key"),
            },
        }

        Ok(())
    }

    pub fn report(&self, settings: &RenderSettings) -> Report {
        let segments = self.editor.active_segments();
        let history = self.editor.history();

        let render = match compile(&segments, settings) {
            Ok(plan) => Some(RenderReport {
                args: build_ffmpeg_args(&plan),
                filter_graph: plan.filter_graph,
                output_duration: plan.output_duration,
            }),
            Err(RenderError::NoSegments) => {
                tracing::warn!("every clip was deleted, nothing to render");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "render plan failed");
                None
            }
        };

        Report {
            clips: self.editor.clips().to_vec(),
            selected: self.editor.selected_clip_id(),
            playhead: self.playhead,
            playhead_timecode: format_timecode(self.playhead),
            history: HistoryReport {
                len: history.len(),
                cursor: history.cursor(),
                can_undo: history.can_undo(),
                can_redo: history.can_redo(),
            },
            segments,
            render,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub clips: Vec<Clip>,
    pub selected: Option<ClipId>,
    pub playhead: f64,
    pub playhead_timecode: String,
    pub history: HistoryReport,
    pub segments: Vec<Segment>,
    pub render: Option<RenderReport>,
}

#[derive(Debug, Serialize)]
pub struct HistoryReport {
    pub len: usize,
    pub cursor: usize,
    pub can_undo: bool,
    pub can_redo: bool,
}

#[derive(Debug, Serialize)]
pub struct RenderReport {
    pub filter_graph: String,
    pub args: Vec<String>,
    pub output_duration: f64,
}
