//! Non-fatal diagnostics carried inside result objects.
//!
//! Warnings are part of the returned value, never only a log side channel,
//! so tests can assert on them. Engines additionally log them via `tracing`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A recoverable condition observed while matching or planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Warning {
    /// A timecode's separator contradicted the counting mode in use;
    /// the configured mode won and parsing proceeded.
    SeparatorMismatch {
        /// The timecode string as given.
        timecode: String,
        /// Whether drop-frame counting was applied.
        drop_frame_applied: bool,
    },

    /// Timecode metadata was missing or unusable, so a segment's position
    /// was derived from float seconds instead of exact frame arithmetic.
    PrecisionFallback {
        /// File name of the degraded segment.
        segment: String,
        /// What forced the fallback.
        detail: String,
    },

    /// A segment carried neither usable timecode nor a start offset and
    /// was skipped entirely.
    MissingTiming {
        /// File name of the skipped segment.
        segment: String,
    },

    /// A segment's frame range extended past the timeline and was clamped.
    RangeClamped {
        /// File name of the clamped segment.
        segment: String,
        /// Requested range before clamping, end exclusive.
        requested: (i64, i64),
        /// Range actually used.
        clamped: (i64, i64),
    },

    /// A segment's frame range fell entirely outside the timeline and the
    /// segment was dropped from the plan.
    RangeOutsideTimeline {
        /// File name of the dropped segment.
        segment: String,
        /// The out-of-range span, end exclusive.
        range: (i64, i64),
    },

    /// One segment painted over frames previously owned by another.
    Overlap {
        /// First overwritten frame.
        start_frame: i64,
        /// One past the last overwritten frame.
        end_frame: i64,
        /// Segment that now owns the span.
        winner: String,
        /// Whether the winner is a VFX deliverable.
        winner_vfx: bool,
        /// Segment that lost the span.
        loser: String,
        /// Whether the loser is a VFX deliverable.
        loser_vfx: bool,
    },
}

impl Warning {
    /// True for overlap warnings; used when aggregating statistics.
    pub fn is_overlap(&self) -> bool {
        matches!(self, Self::Overlap { .. })
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeparatorMismatch {
                timecode,
                drop_frame_applied,
            } => {
                let mode = if *drop_frame_applied {
                    "drop-frame"
                } else {
                    "non-drop"
                };
                write!(f, "Timecode '{timecode}' separator contradicts {mode} counting; configured mode applied")
            }
            Self::PrecisionFallback { segment, detail } => {
                write!(f, "Segment '{segment}' timed approximately from float seconds: {detail}")
            }
            Self::MissingTiming { segment } => {
                write!(f, "Segment '{segment}' has no usable timing metadata and was skipped")
            }
            Self::RangeClamped {
                segment,
                requested,
                clamped,
            } => write!(
                f,
                "Segment '{segment}' range [{}, {}) clamped to [{}, {})",
                requested.0, requested.1, clamped.0, clamped.1
            ),
            Self::RangeOutsideTimeline { segment, range } => write!(
                f,
                "Segment '{segment}' range [{}, {}) lies outside the timeline and was dropped",
                range.0, range.1
            ),
            Self::Overlap {
                start_frame,
                end_frame,
                winner,
                loser,
                ..
            } => write!(
                f,
                "Frames [{start_frame}, {end_frame}): '{winner}' overwrites '{loser}'"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_overlap_display() {
        let w = Warning::Overlap {
            start_frame: 150,
            end_frame: 175,
            winner: "vfx_010.mov".into(),
            winner_vfx: true,
            loser: "grade_a.mov".into(),
            loser_vfx: false,
        };
        assert_eq!(
            w.to_string(),
            "Frames [150, 175): 'vfx_010.mov' overwrites 'grade_a.mov'"
        );
        assert!(w.is_overlap());
    }

    #[test]
    fn test_clamp_display() {
        let w = Warning::RangeClamped {
            segment: "tail.mov".into(),
            requested: (89_000, 91_000),
            clamped: (89_000, 90_000),
        };
        assert_eq!(
            w.to_string(),
            "Segment 'tail.mov' range [89000, 91000) clamped to [89000, 90000)"
        );
        assert!(!w.is_overlap());
    }

    #[test]
    fn test_warning_serialization() {
        let w = Warning::PrecisionFallback {
            segment: "no_tc.mov".into(),
            detail: "source timecode missing".into(),
        };
        let json = serde_json::to_string(&w).unwrap();
        let decoded: Warning = serde_json::from_str(&json).unwrap();
        assert_eq!(w, decoded);
    }
}
