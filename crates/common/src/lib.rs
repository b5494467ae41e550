//! `sc-common` — Shared types and configuration for the ScriptCut engine.
//!
//! This crate is the foundation the other engine crates depend on.
//! It defines the core abstractions:
//!
//! - **Types**: `TimeCode`, `FrameNumber`, `Rational` (newtypes keeping the
//!   two coordinate spaces — source seconds and output frames — apart)
//! - **Ids**: `SourceId`, `SentenceId`, `WordId`
//! - **Config**: `SegmenterConfig` (frame rate and merge thresholds)

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::SegmenterConfig;
pub use types::{FrameNumber, Rational, SentenceId, SourceId, TimeCode, WordId};
