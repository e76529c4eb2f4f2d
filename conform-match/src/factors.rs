//! Match factors and their weight table.
//!
//! The scoring rubric is a closed enum with an explicit weight per
//! factor, so the rubric is auditable and exhaustively testable rather
//! than a set of ad-hoc string tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One piece of evidence linking a segment to a candidate parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchFactor {
    /// Parent base filename is a substring of the segment filename.
    FilenameContains,
    /// De-suffixed segment base name is a substring of the parent filename.
    FilenamePartial,
    /// Display resolutions agree within the pixel tolerance.
    Resolution,
    /// Frame rates are exactly rational-equal.
    FrameRate,
    /// Segment timecode range is contained in the parent's range.
    TimecodeRange,
    /// Reel names are equal, case-insensitive.
    Reel,
    /// Last-resort pure filename containment, ignoring technical factors.
    FilenameFallback,
}

impl MatchFactor {
    /// Every factor, in rubric order.
    pub const ALL: [MatchFactor; 7] = [
        MatchFactor::FilenameContains,
        MatchFactor::FilenamePartial,
        MatchFactor::Resolution,
        MatchFactor::FrameRate,
        MatchFactor::TimecodeRange,
        MatchFactor::Reel,
        MatchFactor::FilenameFallback,
    ];

    /// Additive weight this factor contributes to a candidate's score.
    ///
    /// The fallback factor carries no weight: it only ever rescues a
    /// zero-score segment into a Low-confidence link.
    pub const fn weight(self) -> u32 {
        match self {
            Self::FilenameContains => 3,
            Self::FilenamePartial => 1,
            Self::Resolution => 1,
            Self::FrameRate => 1,
            Self::TimecodeRange => 1,
            Self::Reel => 1,
            Self::FilenameFallback => 0,
        }
    }

    /// Stable lowercase label, used in logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FilenameContains => "filename_contains",
            Self::FilenamePartial => "filename_partial",
            Self::Resolution => "resolution",
            Self::FrameRate => "fps",
            Self::TimecodeRange => "timecode_range",
            Self::Reel => "reel",
            Self::FilenameFallback => "filename_fallback",
        }
    }
}

impl fmt::Display for MatchFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
