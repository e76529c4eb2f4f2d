//! VFX-prioritized frame-ownership planning for the conform workspace.
//!
//! Given a target timeline and an unordered set of graded and VFX
//! segments, [`FrameOwnershipAnalyzer`] produces a [`ProcessingPlan`]: a
//! sorted, non-overlapping list of [`ConsolidatedRange`]s describing which
//! segment (and which source frame) supplies every output frame, plus the
//! overlap warnings and statistics a compositing collaborator needs to
//! execute the cut.
//!
//! # Example
//!
//! ```rust
//! use conform_core::{FrameRate, MediaDescriptor, MediaKind, Resolution};
//! use conform_plan::{FrameOwnershipAnalyzer, TimelineSpec};
//!
//! let rate = FrameRate::from_rational(24, 1).unwrap();
//! let timeline = TimelineSpec::new(rate, 1000).base_timecode("00:00:00:00");
//!
//! let grade = MediaDescriptor::new(
//!     "grade_a.mov",
//!     Resolution::new(1920, 1080),
//!     rate,
//!     200,
//!     MediaKind::GradedSegment,
//! )
//! .source_timecode("00:00:04:04"); // frame 100
//!
//! let vfx = MediaDescriptor::new(
//!     "vfx_010.mov",
//!     Resolution::new(1920, 1080),
//!     rate,
//!     25,
//!     MediaKind::GradedSegment,
//! )
//! .source_timecode("00:00:06:06") // frame 150
//! .vfx(true);
//!
//! let plan = FrameOwnershipAnalyzer::new().analyze(&timeline, &[grade, vfx]);
//! assert_eq!(plan.ranges.len(), 3);
//! assert_eq!(plan.statistics.vfx_frames, 25);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod analyzer;
pub mod plan;
pub mod timeline;

pub use analyzer::{AnalyzerConfig, FrameOwnershipAnalyzer};
pub use plan::{ConsolidatedRange, PlanStatistics, PlanVisualization, ProcessingPlan, VizBlock};
pub use timeline::TimelineSpec;
