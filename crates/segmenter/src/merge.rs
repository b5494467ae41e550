//! Second pass: coalesce elementary ranges into minimal playback segments.
//!
//! A left-fold over the range list with explicit carry state (the previous
//! range's deletion/override flags). Each range either extends the last
//! segment or opens a new one; output frame offsets are assigned as segments
//! are opened, so the result is contiguous in output time by construction.

use sc_common::{FrameNumber, SegmenterConfig};

use crate::types::{PlaybackRange, Segment};

/// Flags carried from the previous range across fold steps.
#[derive(Copy, Clone, Debug, Default)]
struct Carry {
    had_deletions: bool,
    had_override: bool,
}

/// Accumulator for the merge fold.
#[derive(Debug, Default)]
struct MergeState {
    segments: Vec<Segment>,
    carry: Carry,
}

/// Merge the ordered range list into the minimal ordered segment list.
pub fn merge_ranges(ranges: Vec<PlaybackRange>, config: &SegmenterConfig) -> Vec<Segment> {
    let state = ranges
        .into_iter()
        .fold(MergeState::default(), |state, range| {
            step(state, range, config)
        });
    state.segments
}

/// One fold step: extend the last segment with `range`, or open a new one.
fn step(mut state: MergeState, range: PlaybackRange, config: &SegmenterConfig) -> MergeState {
    let next_carry = Carry {
        had_deletions: range.has_word_deletions,
        had_override: range.has_video_override,
    };

    match state.segments.last_mut() {
        Some(last) if can_extend(last, state.carry, &range, config) => {
            extend(last, range, config);
        }
        _ => {
            let start_frame = state
                .segments
                .last()
                .map(Segment::end_frame)
                .unwrap_or(FrameNumber::ZERO);
            let id = state.segments.len() as u32;
            state.segments.push(open_segment(id, start_frame, range, config));
        }
    }

    state.carry = next_carry;
    state
}

/// The extend/new decision.
///
/// A range extends the last segment only when all of these hold: same video
/// source; the range starts no earlier than the segment's end minus the
/// overlap tolerance (rounding noise from upstream word boundaries); the gap
/// stays under the active threshold; and neither side carries a video
/// override or a distinct audio source. Overridden ranges always sit in
/// their own segment so the audio/video split stays unambiguous.
fn can_extend(
    last: &Segment,
    carry: Carry,
    range: &PlaybackRange,
    config: &SegmenterConfig,
) -> bool {
    if range.has_video_override || carry.had_override {
        return false;
    }
    if range.audio.is_some() || last.audio.is_some() {
        return false;
    }
    if last.video_source_id != range.video_source_id {
        return false;
    }
    let gap = range.video_start.as_secs() - last.source_end.as_secs();
    if range.video_start.as_secs() < last.source_end.as_secs() - config.overlap_tolerance {
        return false;
    }
    // A deleted word on either side of the join must produce a cut at the
    // fine threshold; a clean join may play through a natural speech pause.
    let threshold = if range.has_word_deletions || carry.had_deletions {
        config.deletion_merge_threshold
    } else {
        config.pause_merge_threshold
    };
    gap < threshold
}

/// Widen the last segment to cover `range` and recompute its frame length.
fn extend(last: &mut Segment, range: PlaybackRange, config: &SegmenterConfig) {
    last.source_end = range.video_end;
    last.duration_frames = (last.source_end - last.source_start).as_frame(config.fps).0;
    if !range.text.is_empty() {
        if !last.text.is_empty() {
            last.text.push(' ');
        }
        last.text.push_str(&range.text);
    }
    if !last.sentence_ids.contains(&range.sentence_id) {
        last.sentence_ids.push(range.sentence_id);
    }
}

/// Open a fresh segment at `start_frame`.
///
/// For B-roll ranges the frame length derives from the audio span — the
/// spoken audio drives how long the segment occupies, not the arbitrarily
/// chosen override video span.
fn open_segment(
    id: u32,
    start_frame: FrameNumber,
    range: PlaybackRange,
    config: &SegmenterConfig,
) -> Segment {
    let duration = match &range.audio {
        Some(audio) => audio.duration(),
        None => range.video_end - range.video_start,
    };
    Segment {
        id,
        sentence_ids: vec![range.sentence_id],
        video_source_id: range.video_source_id,
        video_path: range.video_path,
        source_start: range.video_start,
        source_end: range.video_end,
        audio: range.audio,
        start_frame,
        duration_frames: duration.as_frame(config.fps).0,
        text: range.text,
    }
}
