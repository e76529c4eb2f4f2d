//! # Conform
//!
//! Frame-accurate reconciliation of independently-authored video segments
//! (graded clips, VFX deliverables) against camera-original master
//! recordings on a shared, frame-indexed timeline.
//!
//! This is the non-GUI, non-I/O reasoning core: it consumes pre-extracted
//! [`MediaDescriptor`] metadata and produces linking results and cut plans
//! for rendering collaborators to execute. It never opens, decodes, or
//! writes media bytes.
//!
//! ## Quick Start
//!
//! ```rust
//! use conform::{ConformOptions, Conformer, MediaDescriptor, MediaKind};
//! use conform::{FrameRate, Resolution};
//!
//! let rate = FrameRate::from_float(23.976).unwrap();
//!
//! let ocf = MediaDescriptor::new(
//!     "A001C001.mov",
//!     Resolution::new(1920, 1080),
//!     rate,
//!     14_400,
//!     MediaKind::CameraOriginal,
//! )
//! .timecodes("01:00:00:00", "01:10:00:00");
//!
//! let grade = MediaDescriptor::new(
//!     "A001C001_s01.mov",
//!     Resolution::new(1920, 1080),
//!     rate,
//!     240,
//!     MediaKind::GradedSegment,
//! )
//! .source_timecode("01:02:00:00");
//!
//! let report = Conformer::with_defaults().run(&[ocf], &[grade]);
//! assert_eq!(report.plans.len(), 1);
//! ```
//!
//! ## Architecture
//!
//! The workspace is organized into focused crates:
//! - `conform-core`: rational frame rates, media descriptors, warnings
//! - `conform-timecode`: exact SMPTE timecode and drop-frame arithmetic
//! - `conform-match`: weighted heuristic segment-to-parent linking
//! - `conform-plan`: VFX-prioritized frame-ownership planning
//!
//! This crate re-exports the public types and adds the high-level
//! [`Conformer`] that runs matching and per-parent planning in one pass.

pub mod prelude;

mod conformer;
mod options;

// Re-export core types
pub use conform_core::{
    error::{Error, Result},
    FrameRate, MediaDescriptor, MediaKind, Rational, Resolution, Warning,
};

// Re-export timecode types
pub use conform_timecode::{DropFrameConfig, Timecode, TimecodeConverter, TimecodeError};

// Re-export matching types
pub use conform_match::{
    Confidence, LinkedSegment, LinkingResult, MatchFactor, OcfParent, SegmentMatcher,
};

// Re-export planning types
pub use conform_plan::{
    AnalyzerConfig, ConsolidatedRange, FrameOwnershipAnalyzer, PlanStatistics, PlanVisualization,
    ProcessingPlan, TimelineSpec, VizBlock,
};

// High-level API
pub use conformer::{ConformReport, Conformer, ParentPlan};
pub use options::ConformOptions;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string.
pub fn version() -> &'static str {
    VERSION
}
