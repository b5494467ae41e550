//! Cut-list flattening for the export collaborator.
//!
//! Export hands an ordered list of source-time cut instructions to an
//! external transcoding process; this module only produces that list, it
//! never invokes a transcoder or touches the filesystem.

use sc_common::TimeCode;
use serde::{Deserialize, Serialize};

use crate::types::Segment;

/// One cut for the external transcoder: play `source_path` from `start`
/// to `end` (source seconds).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CutInstruction {
    /// File path of the source to cut from.
    pub source_path: String,
    /// Cut start in source seconds.
    pub start: TimeCode,
    /// Cut end in source seconds.
    pub end: TimeCode,
}

/// Flatten a segment list into ordered cut instructions.
///
/// Each segment maps to one cut over its video span; output-frame
/// positioning is implicit in the ordering.
pub fn cut_list(segments: &[Segment]) -> Vec<CutInstruction> {
    segments
        .iter()
        .map(|seg| CutInstruction {
            source_path: seg.video_path.clone(),
            start: seg.source_start,
            end: seg.source_end,
        })
        .collect()
}
