//! Error types for edit-state mutation (thiserror-based).

use sc_common::{SentenceId, SourceId, TimeCode, WordId};
use thiserror::Error;

/// Errors raised by `EditState` mutation methods.
///
/// These exist only on the mutation surface. The segmentation engine reads
/// the state without validating; a reference that goes dangling after a
/// successful mutation (e.g., a removed source) is skipped at segmentation
/// time, not reported.
#[derive(Error, Debug)]
pub enum StateError {
    #[error("Unknown sentence: {0}")]
    UnknownSentence(SentenceId),

    #[error("Unknown word: {0}")]
    UnknownWord(WordId),

    #[error("Word {word} belongs to source {actual}, sentence expects {expected}")]
    WordSourceMismatch {
        word: WordId,
        expected: SourceId,
        actual: SourceId,
    },

    #[error("Word {word} is not part of sentence {sentence}")]
    WordNotInSentence { word: WordId, sentence: SentenceId },

    #[error("Invalid time range: start {start} is not before end {end}")]
    InvalidTimeRange { start: TimeCode, end: TimeCode },

    #[error("Timeline index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}
