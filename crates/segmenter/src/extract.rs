//! First pass: walk the timeline and produce elementary playback ranges.
//!
//! One pass in entry order. Per-entry exclusion and word-level exclusion are
//! resolved here, down to sub-sentence ranges; video overrides are resolved
//! to their effective source. Dangling references never fail the pass — the
//! affected entry (or word) is skipped and logged, keeping playback available
//! while the edit state is transiently inconsistent (e.g., during
//! asynchronous source loading).

use sc_common::TimeCode;
use sc_edit_state::{EditState, Sentence, TimelineEntry};

use crate::types::{AudioSpan, PlaybackRange};

/// Extract the ordered elementary range list from the edit state.
///
/// Ranges come out strictly in timeline-entry order. Excluded entries
/// contribute nothing, which also creates the implicit discontinuity the
/// merge pass sees between their neighbors.
pub fn extract_ranges(state: &EditState) -> Vec<PlaybackRange> {
    let mut ranges = Vec::new();

    for entry in &state.timeline {
        if entry.excluded {
            continue;
        }

        let Some(sentence) = state.find_sentence(&entry.sentence_id) else {
            tracing::debug!(sentence_id = %entry.sentence_id, "Skipping entry: dangling sentence reference");
            continue;
        };

        // Effective video source: the override's source when one is active,
        // else the sentence's own.
        let video_source_id = match &entry.video_override {
            Some(o) => &o.source_id,
            None => &sentence.source_id,
        };
        let Some(video_source) = state.find_source(video_source_id) else {
            tracing::debug!(source_id = %video_source_id, "Skipping entry: unresolved video source");
            continue;
        };

        // Audio always follows the sentence's own source. It is recorded as
        // a distinct span only while an override is active; otherwise audio
        // and video are implicitly the same source.
        let audio_path = if entry.video_override.is_some() {
            match state.find_source(&sentence.source_id) {
                Some(source) => Some(source.path.clone()),
                None => {
                    tracing::debug!(source_id = %sentence.source_id, "Skipping entry: unresolved audio source under override");
                    continue;
                }
            }
        } else {
            None
        };

        let has_exclusions = !sentence.word_ids.is_empty()
            && sentence
                .word_ids
                .iter()
                .any(|w| entry.excluded_word_ids.contains(w));

        if !has_exclusions {
            ranges.push(whole_entry_range(
                entry,
                sentence,
                &video_source.path,
                audio_path,
            ));
        } else {
            split_word_runs(
                state,
                entry,
                sentence,
                &video_source.path,
                audio_path,
                &mut ranges,
            );
        }
    }

    ranges
}

/// Emit exactly one range covering the whole entry: the override span when
/// one is active, else the sentence span. Text is the sentence's stored
/// text, not recomputed from words.
fn whole_entry_range(
    entry: &TimelineEntry,
    sentence: &Sentence,
    video_path: &str,
    audio_path: Option<String>,
) -> PlaybackRange {
    let (video_source_id, video_start, video_end, audio) = match &entry.video_override {
        Some(o) => (
            o.source_id.clone(),
            o.start,
            o.end,
            audio_path.map(|path| AudioSpan {
                source_id: sentence.source_id.clone(),
                source_path: path,
                start: sentence.start,
                end: sentence.end,
            }),
        ),
        None => (sentence.source_id.clone(), sentence.start, sentence.end, None),
    };

    PlaybackRange {
        sentence_id: sentence.id.clone(),
        video_source_id,
        video_path: video_path.to_string(),
        video_start,
        video_end,
        audio,
        text: sentence.text.clone(),
        has_word_deletions: false,
        has_video_override: entry.video_override.is_some(),
    }
}

/// Walk the sentence's word list in order, closing a range at every excluded
/// word (and at the end of the list) whenever an included run is open.
///
/// Under an active override the *video* span of every run stays the full
/// override span — B-roll plays continuously — while the *audio* span is the
/// run's own word bounds. Word ids that don't resolve are dropped from text
/// and timing without closing the run.
fn split_word_runs(
    state: &EditState,
    entry: &TimelineEntry,
    sentence: &Sentence,
    video_path: &str,
    audio_path: Option<String>,
    ranges: &mut Vec<PlaybackRange>,
) {
    let mut run_start: Option<TimeCode> = None;
    let mut run_end = TimeCode::ZERO;
    let mut run_text: Vec<&str> = Vec::new();

    let mut close_run = |start: TimeCode, end: TimeCode, text: String| {
        let (video_source_id, video_start, video_end, audio) = match &entry.video_override {
            Some(o) => (
                o.source_id.clone(),
                o.start,
                o.end,
                audio_path.clone().map(|path| AudioSpan {
                    source_id: sentence.source_id.clone(),
                    source_path: path,
                    start,
                    end,
                }),
            ),
            None => (sentence.source_id.clone(), start, end, None),
        };
        ranges.push(PlaybackRange {
            sentence_id: sentence.id.clone(),
            video_source_id,
            video_path: video_path.to_string(),
            video_start,
            video_end,
            audio,
            text,
            has_word_deletions: true,
            has_video_override: entry.video_override.is_some(),
        });
    };

    for word_id in &sentence.word_ids {
        if entry.excluded_word_ids.contains(word_id) {
            if let Some(start) = run_start.take() {
                close_run(start, run_end, run_text.join(" "));
                run_text.clear();
            }
            continue;
        }
        let Some(word) = state.find_word(word_id) else {
            tracing::debug!(word_id = %word_id, sentence_id = %sentence.id, "Dropping unresolved word");
            continue;
        };
        if run_start.is_none() {
            run_start = Some(word.start);
        }
        run_end = word.end;
        run_text.push(&word.text);
    }

    if let Some(start) = run_start {
        close_run(start, run_end, run_text.join(" "));
    }
}
