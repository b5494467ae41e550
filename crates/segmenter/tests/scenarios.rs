//! End-to-end segmentation scenarios: edit state in, segment list out.

use sc_common::{FrameNumber, SegmenterConfig, SentenceId, SourceId, TimeCode, WordId};
use sc_edit_state::{EditState, Sentence, Source, TimelineEntry, VideoOverride, Word};
use sc_segmenter::{build_segments, cut_list, segment_at_frame, total_duration_frames};

fn add_words_and_sentence(
    state: &mut EditState,
    sentence_id: &str,
    source_id: &str,
    words: &[(&str, &str, f64, f64)],
    text: &str,
) {
    for (id, word_text, start, end) in words {
        state
            .add_word(Word {
                id: WordId::new(*id),
                source_id: SourceId::new(source_id),
                text: word_text.to_string(),
                start: TimeCode::from_secs(*start),
                end: TimeCode::from_secs(*end),
            })
            .unwrap();
    }
    let (start, end) = match words {
        [] => (0.0, 0.0),
        [only] => (only.2, only.3),
        [first, .., last] => (first.2, last.3),
    };
    state
        .add_sentence(Sentence {
            id: SentenceId::new(sentence_id),
            source_id: SourceId::new(source_id),
            start: TimeCode::from_secs(start),
            end: TimeCode::from_secs(end),
            text: text.to_string(),
            word_ids: words.iter().map(|(id, ..)| WordId::new(*id)).collect(),
        })
        .unwrap();
}

/// Single source, one sentence, three words, no exclusions.
fn three_word_state() -> EditState {
    let mut state = EditState::new();
    state.add_source(Source::new("src_1", "/media/interview.mp4"));
    add_words_and_sentence(
        &mut state,
        "s1",
        "src_1",
        &[
            ("w1", "one", 0.0, 0.5),
            ("w2", "two", 0.5, 1.0),
            ("w3", "three", 1.0, 1.5),
        ],
        "one two three",
    );
    state.push_entry(TimelineEntry::new(SentenceId::new("s1"))).unwrap();
    state
}

#[test]
fn three_words_no_exclusions_one_segment() {
    let segments = build_segments(&three_word_state(), &SegmenterConfig::default());
    assert_eq!(segments.len(), 1);
    let seg = &segments[0];
    assert!((seg.source_start.as_secs() - 0.0).abs() < 1e-9);
    assert!((seg.source_end.as_secs() - 1.5).abs() < 1e-9);
    assert_eq!(seg.start_frame, FrameNumber::ZERO);
    assert_eq!(seg.duration_frames, 45);
    assert_eq!(seg.text, "one two three");
}

#[test]
fn middle_word_excluded_two_segments() {
    let mut state = three_word_state();
    state
        .set_excluded_words(0, [WordId::new("w2")].into_iter().collect())
        .unwrap();

    let segments = build_segments(&state, &SegmenterConfig::default());
    assert_eq!(segments.len(), 2);

    // [0, 0.5) then [1.0, 1.5): the 0.5s gap exceeds the deletion threshold.
    assert!((segments[0].source_start.as_secs() - 0.0).abs() < 1e-9);
    assert!((segments[0].source_end.as_secs() - 0.5).abs() < 1e-9);
    assert_eq!(segments[0].start_frame, FrameNumber(0));
    assert_eq!(segments[0].duration_frames, 15);

    assert!((segments[1].source_start.as_secs() - 1.0).abs() < 1e-9);
    assert!((segments[1].source_end.as_secs() - 1.5).abs() < 1e-9);
    assert_eq!(segments[1].start_frame, FrameNumber(15));
    assert_eq!(segments[1].duration_frames, 15);
}

#[test]
fn abutting_sentences_merge_with_both_sentence_ids() {
    let mut state = EditState::new();
    state.add_source(Source::new("src_1", "/media/interview.mp4"));
    add_words_and_sentence(
        &mut state,
        "s1",
        "src_1",
        &[("w1", "first", 0.0, 1.0)],
        "first",
    );
    add_words_and_sentence(
        &mut state,
        "s2",
        "src_1",
        &[("w2", "second", 1.0, 2.0)],
        "second",
    );
    state.push_entry(TimelineEntry::new(SentenceId::new("s1"))).unwrap();
    state.push_entry(TimelineEntry::new(SentenceId::new("s2"))).unwrap();

    let segments = build_segments(&state, &SegmenterConfig::default());
    assert_eq!(segments.len(), 1);
    assert_eq!(
        segments[0].sentence_ids,
        vec![SentenceId::new("s1"), SentenceId::new("s2")]
    );
    assert!((segments[0].source_end.as_secs() - 2.0).abs() < 1e-9);
    assert_eq!(segments[0].text, "first second");
}

#[test]
fn override_is_isolated_and_timed_by_audio() {
    let mut state = EditState::new();
    state.add_source(Source::new("src_1", "/media/interview.mp4"));
    state.add_source(Source::new("broll_1", "/media/broll.mp4"));
    add_words_and_sentence(
        &mut state,
        "s1",
        "src_1",
        &[("w1", "spoken", 5.0, 7.0)],
        "spoken",
    );
    state.push_entry(TimelineEntry::new(SentenceId::new("s1"))).unwrap();
    state
        .set_video_override(
            0,
            Some(VideoOverride {
                source_id: SourceId::new("broll_1"),
                start: TimeCode::from_secs(20.0),
                end: TimeCode::from_secs(23.0), // 3.0s of video over 2.0s of audio
            }),
        )
        .unwrap();

    let segments = build_segments(&state, &SegmenterConfig::default());
    assert_eq!(segments.len(), 1);
    let seg = &segments[0];
    assert_eq!(seg.video_source_id, SourceId::new("broll_1"));
    assert_eq!(seg.video_path, "/media/broll.mp4");
    assert_eq!(seg.duration_frames, 60); // audio span drives frame count

    let audio = seg.audio.as_ref().expect("distinct audio under override");
    assert_eq!(audio.source_id, SourceId::new("src_1"));
    assert_eq!(audio.source_path, "/media/interview.mp4");
    assert!((audio.start.as_secs() - 5.0).abs() < 1e-9);
    assert!((audio.end.as_secs() - 7.0).abs() < 1e-9);
}

#[test]
fn recomputation_is_deterministic() {
    let mut state = three_word_state();
    state
        .set_excluded_words(0, [WordId::new("w2")].into_iter().collect())
        .unwrap();

    let config = SegmenterConfig::default();
    let first = build_segments(&state, &config);
    for _ in 0..5 {
        assert_eq!(build_segments(&state, &config), first);
    }
}

#[test]
fn all_entries_excluded_yields_empty_list_and_placeholder_duration() {
    let mut state = three_word_state();
    state.set_entry_excluded(0, true).unwrap();

    let segments = build_segments(&state, &SegmenterConfig::default());
    assert!(segments.is_empty());
    assert_eq!(total_duration_frames(&segments), 1);
}

#[test]
fn excluding_an_entry_removes_its_time_from_output() {
    let mut state = EditState::new();
    state.add_source(Source::new("src_1", "/media/interview.mp4"));
    add_words_and_sentence(&mut state, "s1", "src_1", &[("w1", "keep", 0.0, 2.0)], "keep");
    add_words_and_sentence(&mut state, "s2", "src_1", &[("w2", "drop", 2.0, 5.0)], "drop");
    state.push_entry(TimelineEntry::new(SentenceId::new("s1"))).unwrap();
    state.push_entry(TimelineEntry::new(SentenceId::new("s2"))).unwrap();

    let config = SegmenterConfig::default();
    let full = build_segments(&state, &config);
    assert_eq!(total_duration_frames(&full), 150);

    state.set_entry_excluded(1, true).unwrap();
    let trimmed = build_segments(&state, &config);
    assert_eq!(total_duration_frames(&trimmed), 60);
    assert_eq!(trimmed[0].text, "keep");
}

#[test]
fn playhead_lookup_spans_the_whole_output() {
    let mut state = three_word_state();
    state
        .set_excluded_words(0, [WordId::new("w2")].into_iter().collect())
        .unwrap();

    let segments = build_segments(&state, &SegmenterConfig::default());
    let total = total_duration_frames(&segments);
    assert_eq!(total, 30);

    for frame in 0..total {
        let seg = segment_at_frame(&segments, FrameNumber(frame))
            .unwrap_or_else(|| panic!("frame {frame} not covered"));
        assert!(seg.contains_frame(FrameNumber(frame)));
    }
    assert!(segment_at_frame(&segments, FrameNumber(total)).is_none());
}

#[test]
fn cut_list_flattens_segments_in_order() {
    let mut state = EditState::new();
    state.add_source(Source::new("src_1", "/media/a.mp4"));
    state.add_source(Source::new("src_2", "/media/b.mp4"));
    add_words_and_sentence(&mut state, "s1", "src_1", &[("w1", "one", 0.0, 1.0)], "one");
    add_words_and_sentence(&mut state, "s2", "src_2", &[("w2", "two", 3.0, 4.0)], "two");
    state.push_entry(TimelineEntry::new(SentenceId::new("s1"))).unwrap();
    state.push_entry(TimelineEntry::new(SentenceId::new("s2"))).unwrap();

    let segments = build_segments(&state, &SegmenterConfig::default());
    assert_eq!(segments.len(), 2); // different sources never merge

    let cuts = cut_list(&segments);
    assert_eq!(cuts.len(), 2);
    assert_eq!(cuts[0].source_path, "/media/a.mp4");
    assert_eq!(cuts[1].source_path, "/media/b.mp4");
    assert!((cuts[1].start.as_secs() - 3.0).abs() < 1e-9);
}

#[test]
fn custom_thresholds_change_the_merge_decision() {
    // Two clean sentences 3s apart: merged under the default 10s pause
    // threshold, split when the caller tightens it to 2s.
    let mut state = EditState::new();
    state.add_source(Source::new("src_1", "/media/a.mp4"));
    add_words_and_sentence(&mut state, "s1", "src_1", &[("w1", "one", 0.0, 1.0)], "one");
    add_words_and_sentence(&mut state, "s2", "src_1", &[("w2", "two", 4.0, 5.0)], "two");
    state.push_entry(TimelineEntry::new(SentenceId::new("s1"))).unwrap();
    state.push_entry(TimelineEntry::new(SentenceId::new("s2"))).unwrap();

    let merged = build_segments(&state, &SegmenterConfig::default());
    assert_eq!(merged.len(), 1);

    let tight = SegmenterConfig {
        pause_merge_threshold: 2.0,
        ..SegmenterConfig::default()
    };
    let split = build_segments(&state, &tight);
    assert_eq!(split.len(), 2);
}
