use crate::types::*;

/// Find the nearest snap point strictly closer than `threshold` to `position`.
pub fn find_snap_point(position: f64, snap_points: &[f64], threshold: f64) -> Option<f64> {
    let mut best: Option<(f64, f64)> = None;

    for &point in snap_points {
        let dist = (position - point).abs();
        // NaN distances fail this comparison too.
        if !(dist < threshold) {
            continue;
        }
        if best.map_or(true, |(_, best_dist)| dist < best_dist) {
            best = Some((point, dist));
        }
    }

    best.map(|(point, _)| point)
}

/// Collect snap points for a moving clip: the other clips' edges, the
/// playhead, and both ends of the asset.
pub fn collect_snap_points(timeline: &Timeline, exclude: ClipId, playhead: f64) -> Vec<f64> {
    let mut points = vec![0.0, timeline.total_duration(), playhead];

    for clip in timeline.clips() {
        if clip.id == exclude {
            continue;
        }
        points.push(clip.start);
        points.push(clip.end);
    }

    points.sort_by(|a, b| a.total_cmp(b));
    points.dedup();
    points
}

/// Snap a span of fixed length. The start edge is tried first; the end edge
/// only if the start found nothing. Returns the (possibly unchanged) span.
pub fn snap_span(start: f64, end: f64, snap_points: &[f64], threshold: f64) -> (f64, f64) {
    let duration = end - start;

    if let Some(point) = find_snap_point(start, snap_points, threshold) {
        return (point, point + duration);
    }
    if let Some(point) = find_snap_point(end, snap_points, threshold) {
        return (point - duration, point);
    }
    (start, end)
}
