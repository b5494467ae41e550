//! Engine entry point: full recomputation of the segment list.

use sc_common::SegmenterConfig;
use sc_edit_state::EditState;

use crate::extract::extract_ranges;
use crate::merge::merge_ranges;
use crate::types::Segment;

/// Compute the playback segment list for the current edit state.
///
/// This is the main entry point of the engine. It runs the two passes —
/// range extraction, then segment merging — and returns a fresh,
/// independently owned segment list. The caller re-invokes it on every
/// change to the timeline, sentence, word, or source collections; there is
/// no incremental update path, deliberately.
///
/// The computation is pure and total: for a fixed edit state it always
/// returns the same list, and it never fails — inconsistent references are
/// skipped (see [`extract_ranges`](crate::extract::extract_ranges)).
pub fn build_segments(state: &EditState, config: &SegmenterConfig) -> Vec<Segment> {
    let ranges = extract_ranges(state);
    let range_count = ranges.len();
    let segments = merge_ranges(ranges, config);
    tracing::debug!(
        entries = state.entry_count(),
        ranges = range_count,
        segments = segments.len(),
        "Recomputed playback segments"
    );
    segments
}
