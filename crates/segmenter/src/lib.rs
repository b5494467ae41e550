//! `sc-segmenter` — Timeline segmentation for the ScriptCut engine.
//!
//! This crate converts a transcript edit state (ordered entries with
//! whole-entry exclusion, per-word exclusion, and optional B-roll overrides)
//! into the minimal ordered set of contiguous, frame-accurate playback
//! segments a player can render without physically cutting media. It handles:
//!
//! - **Range extraction**: resolving exclusions and overrides into elementary
//!   per-entry playback ranges, in timeline order
//! - **Segment merging**: coalescing adjacent ranges under the pause/deletion
//!   threshold rules and assigning output frame offsets
//! - **Queries**: total duration and segment-at-frame lookup
//! - **Cut lists**: flattening segments into source-time cut instructions
//!   for an external transcoding step
//!
//! The engine is pure and synchronous: it borrows the edit state read-only,
//! returns a fresh segment list on every call, and never fails — dangling
//! references degrade into skipped entries (logged at debug level).
//!
//! # Usage
//!
//! ```rust
//! use sc_common::{SegmenterConfig, SentenceId, SourceId, TimeCode};
//! use sc_edit_state::{EditState, Sentence, Source, TimelineEntry};
//! use sc_segmenter::build_segments;
//!
//! let mut state = EditState::new();
//! state.add_source(Source::new("src_1", "/media/interview.mp4"));
//! state
//!     .add_sentence(Sentence {
//!         id: SentenceId::new("s1"),
//!         source_id: SourceId::new("src_1"),
//!         start: TimeCode::from_secs(0.0),
//!         end: TimeCode::from_secs(1.5),
//!         text: "hello there".to_string(),
//!         word_ids: vec![],
//!     })
//!     .unwrap();
//! state.push_entry(TimelineEntry::new(SentenceId::new("s1"))).unwrap();
//!
//! let segments = build_segments(&state, &SegmenterConfig::default());
//! assert_eq!(segments.len(), 1);
//! assert_eq!(segments[0].duration_frames, 45); // 1.5s at 30fps
//! ```

pub mod engine;
pub mod export;
pub mod extract;
pub mod merge;
pub mod query;
pub mod types;

// Re-export primary API
pub use engine::build_segments;
pub use export::{cut_list, CutInstruction};
pub use extract::extract_ranges;
pub use merge::merge_ranges;
pub use query::{segment_at_frame, total_duration_frames};
pub use types::{AudioSpan, PlaybackRange, Segment};
