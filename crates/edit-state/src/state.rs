//! Central edit state container.
//!
//! `EditState` holds the four collections the segmentation engine reads:
//! sources, sentences, words, and the ordered timeline. All modifications go
//! through controlled mutation methods that validate references at edit time.

use sc_common::{SentenceId, SourceId, WordId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::StateError;
use crate::types::{Sentence, Source, TimelineEntry, VideoOverride, Word};

/// Central edit state container.
///
/// This is the single source of truth for playback order. The segmentation
/// engine borrows it read-only; callers must not mutate it while a
/// segmentation pass is in flight (the surrounding application snapshots or
/// otherwise freezes it for the duration of the call).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EditState {
    /// Imported media files, keyed by id.
    pub sources: HashMap<SourceId, Source>,
    /// Transcript sentences, keyed by id.
    pub sentences: HashMap<SentenceId, Sentence>,
    /// Transcript words, keyed by id.
    pub words: HashMap<WordId, Word>,
    /// Ordered timeline entries — the edit decision list.
    pub timeline: Vec<TimelineEntry>,
}

impl EditState {
    /// Create an empty edit state.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Sources ---

    /// Add (or replace) a media source.
    pub fn add_source(&mut self, source: Source) {
        tracing::debug!(source_id = %source.id, path = %source.path, "Adding source");
        self.sources.insert(source.id.clone(), source);
    }

    /// Remove a source by id. Returns the removed source, or None if not found.
    ///
    /// Sentences and overrides referencing the removed source are left in
    /// place; the segmentation engine skips them until they are repointed.
    pub fn remove_source(&mut self, source_id: &SourceId) -> Option<Source> {
        let removed = self.sources.remove(source_id);
        if removed.is_some() {
            tracing::debug!(source_id = %source_id, "Removed source");
        }
        removed
    }

    /// Find a source by id.
    pub fn find_source(&self, source_id: &SourceId) -> Option<&Source> {
        self.sources.get(source_id)
    }

    /// Record a source's pixel dimensions once probed.
    pub fn set_source_dimensions(&mut self, source_id: &SourceId, width: u32, height: u32) {
        if let Some(source) = self.sources.get_mut(source_id) {
            source.width = Some(width);
            source.height = Some(height);
            tracing::debug!(source_id = %source_id, width, height, "Probed source dimensions");
        }
    }

    // --- Words and sentences ---

    /// Add a transcribed word. Rejects inverted or empty time ranges.
    pub fn add_word(&mut self, word: Word) -> Result<(), StateError> {
        if word.start >= word.end {
            return Err(StateError::InvalidTimeRange {
                start: word.start,
                end: word.end,
            });
        }
        self.words.insert(word.id.clone(), word);
        Ok(())
    }

    /// Add a sentence. Every referenced word must exist and belong to the
    /// sentence's source.
    pub fn add_sentence(&mut self, sentence: Sentence) -> Result<(), StateError> {
        for word_id in &sentence.word_ids {
            let word = self
                .words
                .get(word_id)
                .ok_or_else(|| StateError::UnknownWord(word_id.clone()))?;
            if word.source_id != sentence.source_id {
                return Err(StateError::WordSourceMismatch {
                    word: word_id.clone(),
                    expected: sentence.source_id.clone(),
                    actual: word.source_id.clone(),
                });
            }
        }
        tracing::debug!(
            sentence_id = %sentence.id,
            source_id = %sentence.source_id,
            words = sentence.word_ids.len(),
            "Adding sentence"
        );
        self.sentences.insert(sentence.id.clone(), sentence);
        Ok(())
    }

    /// Find a sentence by id.
    pub fn find_sentence(&self, sentence_id: &SentenceId) -> Option<&Sentence> {
        self.sentences.get(sentence_id)
    }

    /// Find a word by id.
    pub fn find_word(&self, word_id: &WordId) -> Option<&Word> {
        self.words.get(word_id)
    }

    // --- Timeline ---

    /// Append a timeline entry for an existing sentence.
    pub fn push_entry(&mut self, entry: TimelineEntry) -> Result<(), StateError> {
        if !self.sentences.contains_key(&entry.sentence_id) {
            return Err(StateError::UnknownSentence(entry.sentence_id.clone()));
        }
        tracing::debug!(sentence_id = %entry.sentence_id, index = self.timeline.len(), "Appending timeline entry");
        self.timeline.push(entry);
        Ok(())
    }

    /// Move the entry at `from` to position `to`, shifting neighbors.
    pub fn move_entry(&mut self, from: usize, to: usize) -> Result<(), StateError> {
        let len = self.timeline.len();
        if from >= len {
            return Err(StateError::IndexOutOfBounds { index: from, len });
        }
        if to >= len {
            return Err(StateError::IndexOutOfBounds { index: to, len });
        }
        let entry = self.timeline.remove(from);
        self.timeline.insert(to, entry);
        tracing::debug!(from, to, "Reordered timeline entry");
        Ok(())
    }

    /// Remove the entry at `index`. Returns the removed entry.
    pub fn remove_entry(&mut self, index: usize) -> Result<TimelineEntry, StateError> {
        let len = self.timeline.len();
        if index >= len {
            return Err(StateError::IndexOutOfBounds { index, len });
        }
        let entry = self.timeline.remove(index);
        tracing::debug!(index, sentence_id = %entry.sentence_id, "Removed timeline entry");
        Ok(entry)
    }

    /// Set whole-entry exclusion.
    pub fn set_entry_excluded(&mut self, index: usize, excluded: bool) -> Result<(), StateError> {
        let entry = self.entry_mut(index)?;
        entry.excluded = excluded;
        tracing::debug!(index, excluded, "Set entry exclusion");
        Ok(())
    }

    /// Replace an entry's excluded-word set. Every word must belong to the
    /// entry's sentence.
    pub fn set_excluded_words(
        &mut self,
        index: usize,
        word_ids: HashSet<WordId>,
    ) -> Result<(), StateError> {
        let len = self.timeline.len();
        let sentence_id = self
            .timeline
            .get(index)
            .ok_or(StateError::IndexOutOfBounds { index, len })?
            .sentence_id
            .clone();
        let sentence = self
            .sentences
            .get(&sentence_id)
            .ok_or_else(|| StateError::UnknownSentence(sentence_id.clone()))?;
        for word_id in &word_ids {
            if !sentence.word_ids.contains(word_id) {
                return Err(StateError::WordNotInSentence {
                    word: word_id.clone(),
                    sentence: sentence_id,
                });
            }
        }
        tracing::debug!(index, excluded_words = word_ids.len(), "Set word exclusions");
        self.timeline[index].excluded_word_ids = word_ids;
        Ok(())
    }

    /// Set or clear an entry's video override.
    ///
    /// The override source is deliberately not required to exist yet:
    /// sources load asynchronously, and the segmentation engine skips
    /// entries whose override source is still unresolved.
    pub fn set_video_override(
        &mut self,
        index: usize,
        video_override: Option<VideoOverride>,
    ) -> Result<(), StateError> {
        let entry = self.entry_mut(index)?;
        match &video_override {
            Some(o) => {
                tracing::debug!(index, source_id = %o.source_id, start = %o.start, end = %o.end, "Set video override")
            }
            None => tracing::debug!(index, "Cleared video override"),
        }
        entry.video_override = video_override;
        Ok(())
    }

    /// Number of timeline entries, excluded ones included.
    pub fn entry_count(&self) -> usize {
        self.timeline.len()
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut TimelineEntry, StateError> {
        let len = self.timeline.len();
        self.timeline
            .get_mut(index)
            .ok_or(StateError::IndexOutOfBounds { index, len })
    }
}
