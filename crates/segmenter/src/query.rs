//! Read-only queries over a computed segment list.

use sc_common::FrameNumber;

use crate::types::Segment;

/// Total output duration in frames.
///
/// Returns 1 for an empty list: callers scale scrub bars and progress by
/// dividing through the total, so a zero placeholder would divide by zero.
pub fn total_duration_frames(segments: &[Segment]) -> u64 {
    segments
        .last()
        .map(|seg| seg.end_frame().0)
        .unwrap_or(1)
}

/// The segment whose output window contains `frame`, if any.
///
/// Windows are half-open, contiguous, and non-overlapping by construction,
/// so at most one segment matches.
pub fn segment_at_frame(segments: &[Segment], frame: FrameNumber) -> Option<&Segment> {
    segments.iter().find(|seg| seg.contains_frame(frame))
}
