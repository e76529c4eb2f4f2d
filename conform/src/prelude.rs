//! Prelude module for convenient imports.
//!
//! ```rust
//! use conform::prelude::*;
//! ```

// Core value types
pub use crate::{FrameRate, MediaDescriptor, MediaKind, Rational, Resolution, Warning};

// Error types
pub use crate::{Error, Result, TimecodeError};

// Timecode engine
pub use crate::{Timecode, TimecodeConverter};

// Matching
pub use crate::{Confidence, LinkedSegment, LinkingResult, MatchFactor, OcfParent, SegmentMatcher};

// Planning
pub use crate::{
    ConsolidatedRange, FrameOwnershipAnalyzer, PlanStatistics, ProcessingPlan, TimelineSpec,
};

// High-level API
pub use crate::{ConformOptions, ConformReport, Conformer, ParentPlan};
