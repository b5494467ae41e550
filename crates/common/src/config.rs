//! Configuration for the segmentation engine.

use serde::{Deserialize, Serialize};

use crate::types::Rational;

/// Tuning knobs for segment merging.
///
/// The two merge thresholds encode a product decision: how long a natural
/// speech pause may play through uncut, versus how coarse a cut a deleted
/// word is allowed to leave behind. They are configuration, not structural
/// invariants of the algorithm.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmenterConfig {
    /// Output frame rate used for all seconds-to-frames quantization.
    pub fps: Rational,
    /// Maximum source-time gap (seconds) between two clean ranges that still
    /// plays through as one segment. Covers natural speech pauses.
    pub pause_merge_threshold: f64,
    /// Maximum gap (seconds) when either side of the join had word-level
    /// deletions. Any deleted word must produce a cut at this granularity.
    pub deletion_merge_threshold: f64,
    /// Tolerated source-time overlap (seconds) between a segment's end and
    /// the next range's start. Absorbs rounding noise from upstream word
    /// boundary detection and override editing.
    pub overlap_tolerance: f64,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            fps: Rational::FPS_30,
            pause_merge_threshold: 10.0,
            deletion_merge_threshold: 0.1,
            overlap_tolerance: 0.05,
        }
    }
}
