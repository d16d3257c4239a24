use crate::types::Clip;

/// Recompute every clip's fades from adjacent overlaps.
///
/// Only immediate neighbours are compared. A clip that overlaps one two
/// positions away gets no fade for that overlap.
///
/// Panics if `clips` is not sorted by `start` or contains a clip with
/// `start >= end`; both mean an edit operation broke the store.
pub fn resolve_crossfades(clips: &mut [Clip]) {
    for clip in clips.iter_mut() {
        assert!(
            clip.start < clip.end,
            "clip {} has non-positive length: [{}, {})",
            clip.id,
            clip.start,
            clip.end
        );
        clip.fade_in = 0.0;
        clip.fade_out = 0.0;
    }

    for i in 1..clips.len() {
        let (head, tail) = clips.split_at_mut(i);
        let current = &mut head[i - 1];
        let next = &mut tail[0];
        assert!(
            current.start <= next.start,
            "clips out of order: {} starts at {} after {} at {}",
            current.id,
            current.start,
            next.id,
            next.start
        );

        let overlap = current.overlap_with(next);
        if overlap > 0.0 {
            current.fade_out = overlap;
            next.fade_in = overlap;
        }
    }
}

/// Preview opacity at `time`.
///
/// Inside a crossfade window the earlier clip fades from 1 to 0 over the first
/// half and the later clip fades from 0 to 1 over the second half. Everywhere
/// else the result is 1.
pub fn opacity_at(clips: &[Clip], time: f64) -> f64 {
    for pair in clips.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        if current.fade_out <= 0.0 || next.fade_in <= 0.0 {
            continue;
        }

        let window_start = next.start;
        let window_end = next.start + next.fade_in;
        if time < window_start || time > window_end {
            continue;
        }

        let half = (window_end - window_start) / 2.0;
        let mid = window_start + half;
        return if time < mid {
            1.0 - (time - window_start) / half
        } else {
            (time - mid) / half
        };
    }

    1.0
}

/// Sum of all resolved fade-outs; equals the total adjacent overlap.
pub fn total_crossfade(clips: &[Clip]) -> f64 {
    clips.iter().map(|c| c.fade_out).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClipId;

    fn make_clips(spans: &[(f64, f64)]) -> Vec<Clip> {
        spans
            .iter()
            .enumerate()
            .map(|(i, &(s, e))| Clip::new(ClipId(i as u64), s, e))
            .collect()
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // -----------------------------------------------------------------------
    // resolve_crossfades
    // -----------------------------------------------------------------------

    #[test]
    fn overlapping_pair_gets_matching_fades() {
        let mut clips = make_clips(&[(0.0, 30.0), (25.0, 60.0)]);
        resolve_crossfades(&mut clips);
        assert_eq!(clips[0].fade_out, 5.0);
        assert_eq!(clips[1].fade_in, 5.0);
        assert_eq!(clips[0].fade_in, 0.0);
        assert_eq!(clips[1].fade_out, 0.0);
    }

    #[test]
    fn touching_clips_get_no_fade() {
        let mut clips = make_clips(&[(0.0, 40.0), (40.0, 70.0), (70.0, 100.0)]);
        resolve_crossfades(&mut clips);
        assert!(clips.iter().all(|c| c.fade_in == 0.0 && c.fade_out == 0.0));
    }

    #[test]
    fn stale_fades_are_cleared() {
        let mut clips = make_clips(&[(0.0, 10.0), (20.0, 30.0)]);
        clips[0].fade_out = 3.0;
        clips[1].fade_in = 3.0;
        resolve_crossfades(&mut clips);
        assert_eq!(clips[0].fade_out, 0.0);
        assert_eq!(clips[1].fade_in, 0.0);
    }

    #[test]
    fn middle_clip_overlapping_both_neighbours() {
        let mut clips = make_clips(&[(0.0, 12.0), (10.0, 23.0), (20.0, 30.0)]);
        resolve_crossfades(&mut clips);
        assert_eq!(clips[1].fade_in, 2.0);
        assert_eq!(clips[1].fade_out, 3.0);
        assert_eq!(clips[0].fade_out, 2.0);
        assert_eq!(clips[2].fade_in, 3.0);
    }

    #[test]
    fn nested_clip_fade_is_capped_at_its_length() {
        let mut clips = make_clips(&[(0.0, 30.0), (10.0, 12.0)]);
        resolve_crossfades(&mut clips);
        assert_eq!(clips[1].fade_in, 2.0);
        assert!(clips[1].fade_in <= clips[1].duration());
    }

    #[test]
    fn skip_adjacent_overlap_is_not_faded() {
        // Known limitation: clip 0 reaches into clip 2 but only neighbours are compared.
        let mut clips = make_clips(&[(0.0, 50.0), (10.0, 20.0), (40.0, 60.0)]);
        resolve_crossfades(&mut clips);
        assert_eq!(clips[0].fade_out, 10.0);
        assert_eq!(clips[1].fade_in, 10.0);
        assert_eq!(clips[1].fade_out, 0.0);
        assert_eq!(clips[2].fade_in, 0.0);
    }

    #[test]
    fn total_crossfade_sums_overlaps() {
        let mut clips = make_clips(&[(0.0, 12.0), (10.0, 23.0), (20.0, 30.0)]);
        resolve_crossfades(&mut clips);
        assert!(approx_eq(total_crossfade(&clips), 5.0));
    }

    #[test]
    #[should_panic(expected = "out of order")]
    fn unsorted_input_panics() {
        let mut clips = make_clips(&[(20.0, 30.0), (0.0, 10.0)]);
        resolve_crossfades(&mut clips);
    }

    #[test]
    #[should_panic(expected = "non-positive length")]
    fn empty_clip_panics() {
        let mut clips = make_clips(&[(5.0, 5.0)]);
        resolve_crossfades(&mut clips);
    }

    // -----------------------------------------------------------------------
    // opacity_at
    // -----------------------------------------------------------------------

    #[test]
    fn opacity_follows_two_phase_blend() {
        let mut clips = make_clips(&[(0.0, 30.0), (25.0, 60.0)]);
        resolve_crossfades(&mut clips);

        assert!(approx_eq(opacity_at(&clips, 10.0), 1.0));
        assert!(approx_eq(opacity_at(&clips, 25.0), 1.0));
        // Halfway through the fade-out phase
        assert!(approx_eq(opacity_at(&clips, 26.25), 0.5));
        // Window midpoint is the fully dark hand-over instant
        assert!(approx_eq(opacity_at(&clips, 27.5), 0.0));
        // Halfway through the fade-in phase
        assert!(approx_eq(opacity_at(&clips, 28.75), 0.5));
        assert!(approx_eq(opacity_at(&clips, 30.0), 1.0));
        assert!(approx_eq(opacity_at(&clips, 45.0), 1.0));
    }

    #[test]
    fn opacity_without_crossfades_is_one() {
        let mut clips = make_clips(&[(0.0, 10.0), (10.0, 20.0)]);
        resolve_crossfades(&mut clips);
        assert_eq!(opacity_at(&clips, 10.0), 1.0);
        assert_eq!(opacity_at(&clips, 50.0), 1.0);
        assert_eq!(opacity_at(&[], 1.0), 1.0);
    }
}
