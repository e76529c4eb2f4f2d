//! Heuristic segment-to-parent linking for the conform workspace.
//!
//! Graded and VFX deliverables are named by people, not machines, so the
//! link back to a camera original is recovered from weighted evidence:
//! filename containment, resolution, exact rational frame rate, timecode
//! range containment, and reel names. See [`MatchFactor`] for the rubric
//! and [`SegmentMatcher`] for the contract.
//!
//! # Example
//!
//! ```rust
//! use conform_core::{FrameRate, MediaDescriptor, MediaKind, Resolution};
//! use conform_match::{Confidence, SegmentMatcher};
//!
//! let rate = FrameRate::from_float(23.976).unwrap();
//! let parent = MediaDescriptor::new(
//!     "A001C001.mov",
//!     Resolution::new(1920, 1080),
//!     rate,
//!     14_400,
//!     MediaKind::CameraOriginal,
//! )
//! .timecodes("01:00:00:00", "01:10:00:00");
//!
//! let segment = MediaDescriptor::new(
//!     "A001C001_s01.mov",
//!     Resolution::new(1920, 1080),
//!     rate,
//!     240,
//!     MediaKind::GradedSegment,
//! )
//! .timecodes("01:02:00:00", "01:02:10:00");
//!
//! let result = SegmentMatcher::new().link(&[parent], &[segment]);
//! assert_eq!(result.parents[0].children[0].confidence, Confidence::High);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod factors;
pub mod linking;
pub mod matcher;

pub use factors::MatchFactor;
pub use linking::{Confidence, LinkedSegment, LinkingResult, OcfParent};
pub use matcher::SegmentMatcher;
