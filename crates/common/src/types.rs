//! Core types with newtype pattern for type safety.
//!
//! Source time (seconds into a media file) and output time (frames in the
//! rendered timeline) are distinct types on purpose: mixing the two spaces
//! is a classic source of off-by-a-few-frames defects in this kind of
//! engine, so the compiler keeps them apart.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Frame number (absolute position in output time).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FrameNumber(pub u64);

impl FrameNumber {
    pub const ZERO: Self = Self(0);

    pub fn as_timecode(self, fps: Rational) -> TimeCode {
        TimeCode(self.0 as f64 / fps.as_f64())
    }
}

impl Add<u64> for FrameNumber {
    type Output = Self;
    fn add(self, rhs: u64) -> Self {
        Self(self.0 + rhs)
    }
}

impl Sub for FrameNumber {
    type Output = i64;
    fn sub(self, rhs: Self) -> i64 {
        self.0 as i64 - rhs.0 as i64
    }
}

impl fmt::Display for FrameNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

/// Time code in source seconds (f64 precision).
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct TimeCode(pub f64);

impl TimeCode {
    pub const ZERO: Self = Self(0.0);

    pub fn from_secs(secs: f64) -> Self {
        Self(secs)
    }

    pub fn as_secs(self) -> f64 {
        self.0
    }

    /// Quantize to a frame index: `round(seconds * fps)`.
    ///
    /// Every duration-from-time-delta computation in the engine goes through
    /// this one rounding point; deriving frame counts any other way drifts
    /// over a long timeline.
    pub fn as_frame(self, fps: Rational) -> FrameNumber {
        FrameNumber((self.0 * fps.as_f64()).round() as u64)
    }

    pub fn as_millis(self) -> f64 {
        self.0 * 1000.0
    }

    /// Display-only "M:SS" format: floor-based minutes and seconds,
    /// zero-padded seconds, no hours component.
    pub fn format_mmss(self) -> String {
        let total = self.0.max(0.0);
        let mins = (total / 60.0).floor() as u64;
        let secs = (total % 60.0).floor() as u64;
        format!("{mins}:{secs:02}")
    }
}

impl Add for TimeCode {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for TimeCode {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.0)
    }
}

/// Rational number for frame rates (e.g., 30000/1001 for 29.97fps).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rational {
    pub num: u32,
    pub den: u32,
}

impl Rational {
    pub const FPS_24: Self = Self { num: 24, den: 1 };
    pub const FPS_25: Self = Self { num: 25, den: 1 };
    pub const FPS_30: Self = Self { num: 30, den: 1 };
    pub const FPS_60: Self = Self { num: 60, den: 1 };

    pub fn new(num: u32, den: u32) -> Self {
        assert!(den > 0, "Rational denominator must be > 0");
        Self { num, den }
    }

    pub fn as_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

/// Identifier for an imported media source file.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceId(pub String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a transcribed sentence.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SentenceId(pub String);

impl SentenceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for SentenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a transcribed word.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordId(pub String);

impl WordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
