//! Transcript model types: sources, words, sentences, timeline entries.

use sc_common::{SentenceId, SourceId, TimeCode, WordId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An imported media source file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Unique source identifier.
    pub id: SourceId,
    /// File path on disk.
    pub path: String,
    /// Pixel width, populated lazily once the file has been probed.
    pub width: Option<u32>,
    /// Pixel height, populated lazily once the file has been probed.
    pub height: Option<u32>,
}

impl Source {
    /// Create a source with unprobed dimensions.
    pub fn new(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: SourceId::new(id),
            path: path.into(),
            width: None,
            height: None,
        }
    }
}

/// A transcribed word belonging to exactly one source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Unique word identifier.
    pub id: WordId,
    /// Source this word was transcribed from.
    pub source_id: SourceId,
    /// Word text.
    pub text: String,
    /// Start time in source seconds.
    pub start: TimeCode,
    /// End time in source seconds. Always greater than `start`.
    pub end: TimeCode,
}

/// An ordered group of words transcribed from one source.
///
/// `start`/`end` mirror the first/last word's bounds, or are authoritative
/// on their own for sentence-only transcripts with no word data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Unique sentence identifier.
    pub id: SentenceId,
    /// Source this sentence was transcribed from.
    pub source_id: SourceId,
    /// Start time in source seconds.
    pub start: TimeCode,
    /// End time in source seconds.
    pub end: TimeCode,
    /// Full sentence text as displayed in the transcript editor.
    pub text: String,
    /// Ordered word ids. Empty for sentence-only transcripts.
    pub word_ids: Vec<WordId>,
}

/// B-roll substitution: an alternate video source plays over this sentence
/// while the sentence's original audio continues to drive timing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VideoOverride {
    /// The alternate video source.
    pub source_id: SourceId,
    /// Start time in the override source's coordinate space.
    pub start: TimeCode,
    /// End time in the override source's coordinate space.
    pub end: TimeCode,
}

/// One slot in the user-visible edit order.
///
/// The timeline's entry ordering *is* the edit decision list. Referencing a
/// sentence is an owning relation, not ownership: several entries may in
/// principle reference the same sentence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// The sentence this entry plays.
    pub sentence_id: SentenceId,
    /// Whole-entry exclusion: the entry contributes nothing to playback.
    pub excluded: bool,
    /// Word-level exclusions, a subset of the sentence's words.
    pub excluded_word_ids: HashSet<WordId>,
    /// Optional B-roll video override.
    pub video_override: Option<VideoOverride>,
}

impl TimelineEntry {
    /// Create an included entry with no word exclusions and no override.
    pub fn new(sentence_id: SentenceId) -> Self {
        Self {
            sentence_id,
            excluded: false,
            excluded_word_ids: HashSet::new(),
            video_override: None,
        }
    }
}
