use crate::error::{RenderError, Result};
use cliptrim_core::types::Segment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where to read from, where to write to, and which encoders to use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub video_codec: String,
    pub preset: String,
    pub audio_codec: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::for_input("input.mp4")
    }
}

impl RenderSettings {
    /// Settings for `input`, writing next to it as `trimmed_<name>`.
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        let input_path = input.into();
        let output_path = Self::output_path_for(&input_path);
        Self {
            input_path,
            output_path,
            video_codec: "libx264".to_string(),
            preset: "ultrafast".to_string(),
            audio_codec: "aac".to_string(),
        }
    }

    pub fn output_path_for(input: &Path) -> PathBuf {
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "output.mp4".to_string());
        input.with_file_name(format!("trimmed_{name}"))
    }
}

/// A compiled render plan ready for ffmpeg execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderPlan {
    pub input_path: PathBuf,
    pub filter_graph: String,
    pub output_args: Vec<String>,
    pub output_path: PathBuf,
    /// Length of the rendered file in seconds, after crossfades overlap.
    pub output_duration: f64,
}

/// Compile exported segments into an ffmpeg render plan.
///
/// Every segment is trimmed out of input 0. Without any fades the pieces are
/// concatenated in one step; otherwise they are folded left to right, joining
/// each neighbour pair with `xfade`/`acrossfade` when both sides carry a fade
/// and with a two-input `concat` when they don't.
pub fn compile(segments: &[Segment], settings: &RenderSettings) -> Result<RenderPlan> {
    if segments.is_empty() {
        return Err(RenderError::NoSegments);
    }
    for (i, seg) in segments.iter().enumerate() {
        if !(seg.start.is_finite() && seg.end.is_finite() && seg.start >= 0.0 && seg.end > seg.start) {
            return Err(RenderError::InvalidSegment(i));
        }
    }

    let mut filters: Vec<String> = Vec::new();
    for (i, seg) in segments.iter().enumerate() {
        let start = secs(seg.start);
        let duration = secs(seg.duration());
        filters.push(format!(
            "[0:v]trim=start={start}:duration={duration},setpts=PTS-STARTPTS[v{i}]"
        ));
        filters.push(format!(
            "[0:a]atrim=start={start}:duration={duration},asetpts=PTS-STARTPTS[a{i}]"
        ));
    }

    let has_fade = segments.iter().any(Segment::has_fade);
    let output_duration = if !has_fade || segments.len() == 1 {
        push_concat(&mut filters, segments)
    } else {
        push_crossfade_chain(&mut filters, segments)
    };

    let output_args = vec![
        "-map".to_string(),
        "[outv]".to_string(),
        "-map".to_string(),
        "[outa]".to_string(),
        "-c:v".to_string(),
        settings.video_codec.clone(),
        "-preset".to_string(),
        settings.preset.clone(),
        "-c:a".to_string(),
        settings.audio_codec.clone(),
    ];

    tracing::debug!(
        segments = segments.len(),
        crossfades = has_fade,
        output_duration,
        "compiled render plan"
    );

    Ok(RenderPlan {
        input_path: settings.input_path.clone(),
        filter_graph: filters.join(";"),
        output_args,
        output_path: settings.output_path.clone(),
        output_duration,
    })
}

/// One concat over every piece. Returns the output length.
fn push_concat(filters: &mut Vec<String>, segments: &[Segment]) -> f64 {
    let n = segments.len();
    let video_inputs: String = (0..n).map(|i| format!("[v{i}]")).collect();
    let audio_inputs: String = (0..n).map(|i| format!("[a{i}]")).collect();

    filters.push(format!("{video_inputs}concat=n={n}:v=1:a=0[outv]"));
    filters.push(format!("{audio_inputs}concat=n={n}:v=0:a=1[outa]"));

    segments.iter().map(Segment::duration).sum()
}

/// Pairwise fold with crossfades. Returns the output length.
fn push_crossfade_chain(filters: &mut Vec<String>, segments: &[Segment]) -> f64 {
    let mut video = "[v0]".to_string();
    let mut audio = "[a0]".to_string();
    let mut output_len = segments[0].duration();

    for i in 1..segments.len() {
        let prev = &segments[i - 1];
        let current = &segments[i];
        let fade = prev
            .fade_out
            .min(current.fade_in)
            .min(output_len)
            .min(current.duration());

        if fade > 0.0 {
            // The offset is measured on the already-joined output, not on `prev` alone.
            let offset = secs(output_len - fade);
            let duration = secs(fade);
            filters.push(format!(
                "{video}[v{i}]xfade=transition=fade:duration={duration}:offset={offset}[vx{i}]"
            ));
            filters.push(format!("{audio}[a{i}]acrossfade=d={duration}[ax{i}]"));
            output_len += current.duration() - fade;
        } else {
            filters.push(format!("{video}[v{i}]concat=n=2:v=1:a=0[vx{i}]"));
            filters.push(format!("{audio}[a{i}]concat=n=2:v=0:a=1[ax{i}]"));
            output_len += current.duration();
        }

        video = format!("[vx{i}]");
        audio = format!("[ax{i}]");
    }

    filters.push(format!("{video}copy[outv]"));
    filters.push(format!("{audio}acopy[outa]"));
    output_len
}

fn secs(value: f64) -> String {
    format!("{value:.3}")
}

/// Build the full ffmpeg argument list from a render plan.
pub fn build_ffmpeg_args(plan: &RenderPlan) -> Vec<String> {
    let mut args = vec![
        "-y".to_string(),
        "-i".to_string(),
        plan.input_path.to_string_lossy().to_string(),
        "-filter_complex".to_string(),
        plan.filter_graph.clone(),
    ];

    args.extend(plan.output_args.clone());

    args.push(plan.output_path.to_string_lossy().to_string());

    args
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
