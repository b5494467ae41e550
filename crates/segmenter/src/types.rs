//! Engine output types: elementary playback ranges and final segments.
//!
//! `PlaybackRange` is the first-pass intermediate (one maximal included run
//! within a single timeline entry); `Segment` is the final frame-positioned
//! playback unit consumed by the player, export, and thumbnail layers.

use sc_common::{FrameNumber, SentenceId, SourceId, TimeCode};
use serde::{Deserialize, Serialize};

/// A separately-sourced audio span.
///
/// Only present while a video override (B-roll) is active: the override
/// drives the visual track while the sentence's original audio — possibly
/// trimmed by word-level cuts — keeps driving timing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioSpan {
    /// The sentence's own source.
    pub source_id: SourceId,
    /// File path of the audio source.
    pub source_path: String,
    /// Audio start in source seconds.
    pub start: TimeCode,
    /// Audio end in source seconds.
    pub end: TimeCode,
}

impl AudioSpan {
    /// Audio span duration in source seconds.
    pub fn duration(&self) -> TimeCode {
        self.end - self.start
    }
}

/// A maximal run of included source time within one timeline entry.
///
/// Produced by the extraction pass strictly in entry order. Two ranges from
/// different entries are never implicitly adjacent; only the merge pass's
/// time-proximity test may join them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaybackRange {
    /// Sentence this range was cut from.
    pub sentence_id: SentenceId,
    /// Effective video source (the override's source when one is active).
    pub video_source_id: SourceId,
    /// File path of the video source.
    pub video_path: String,
    /// Video start in that source's seconds.
    pub video_start: TimeCode,
    /// Video end in that source's seconds. Always greater than `video_start`.
    pub video_end: TimeCode,
    /// Distinct audio span; set only while a video override is active.
    pub audio: Option<AudioSpan>,
    /// Concatenated text of the included words (or the whole sentence).
    pub text: String,
    /// Whether this range was produced by splitting around excluded words.
    pub has_word_deletions: bool,
    /// Whether this range carries a B-roll video override.
    pub has_video_override: bool,
}

/// A contiguous playback unit with an assigned output frame position.
///
/// Segments are back-to-back in output time: each segment's `start_frame`
/// equals the previous segment's `start_frame + duration_frames`, with the
/// first at frame 0, regardless of gaps in source time. The whole list is
/// recomputed from scratch on every edit-state change, never mutated in
/// place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Sequential identifier within one computation.
    pub id: u32,
    /// Ordered, deduplicated sentences contributing to this segment.
    pub sentence_ids: Vec<SentenceId>,
    /// Effective video source.
    pub video_source_id: SourceId,
    /// File path of the video source.
    pub video_path: String,
    /// Video start in source seconds.
    pub source_start: TimeCode,
    /// Video end in source seconds.
    pub source_end: TimeCode,
    /// Distinct audio span for B-roll segments.
    pub audio: Option<AudioSpan>,
    /// Position in output time.
    pub start_frame: FrameNumber,
    /// Length in output frames.
    pub duration_frames: u64,
    /// Concatenated display text.
    pub text: String,
}

impl Segment {
    /// First output frame past this segment.
    pub fn end_frame(&self) -> FrameNumber {
        self.start_frame + self.duration_frames
    }

    /// Whether `frame` falls inside this segment's half-open output window.
    pub fn contains_frame(&self, frame: FrameNumber) -> bool {
        frame >= self.start_frame && frame < self.end_frame()
    }

    /// Cache key for the thumbnail consumer: the video file plus the
    /// source-time position the thumbnail is taken at.
    pub fn thumbnail_key(&self) -> (&str, TimeCode) {
        (&self.video_path, self.source_start)
    }
}
