//! `sc-edit-state` — Transcript edit state for the ScriptCut engine.
//!
//! This crate provides:
//!
//! - **Model types**: `Source`, `Word`, `Sentence`, `TimelineEntry`,
//!   `VideoOverride` — the transcript-level edit decision list.
//! - **`EditState`**: Central container holding the keyed source/sentence/word
//!   collections and the ordered timeline, with controlled mutation methods.
//!
//! # Architecture
//!
//! ```text
//! EditState (single source of truth for playback order)
//! ├── sources: HashMap<SourceId, Source>       (imported media)
//! ├── sentences: HashMap<SentenceId, Sentence> (transcript structure)
//! ├── words: HashMap<WordId, Word>             (word-level timing)
//! └── timeline: Vec<TimelineEntry>             (ordered edit decisions)
//! ```
//!
//! The segmentation engine borrows an `EditState` read-only for the duration
//! of one computation; all mutation goes through the methods here, which
//! validate references at edit time so the engine never has to.

pub mod error;
pub mod state;
pub mod types;

// Re-export primary types at crate root for convenience.
pub use error::StateError;
pub use state::EditState;
pub use types::{Sentence, Source, TimelineEntry, VideoOverride, Word};
