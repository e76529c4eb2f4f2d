//! Core value types for the conform reconciliation engine.
//!
//! This crate provides the shared vocabulary of the conform workspace:
//!
//! - **[`Rational`] / [`FrameRate`]**: exact rational frame rates with
//!   strict-equality compatibility, so 24 and 23.976 are never conflated
//!   by a float tolerance.
//! - **[`MediaDescriptor`]**: pre-extracted metadata for one source file,
//!   consumed read-only by the matching and planning engines.
//! - **[`Warning`]**: non-fatal diagnostics carried inside result objects.
//!
//! # Example
//!
//! ```rust
//! use conform_core::{FrameRate, MediaDescriptor, MediaKind, Resolution};
//!
//! let rate = FrameRate::from_float(23.976).unwrap();
//! assert_eq!(rate.as_rational().num, 24000);
//! assert_eq!(rate.as_rational().den, 1001);
//!
//! let ocf = MediaDescriptor::new(
//!     "A001C001.mov",
//!     Resolution::new(1920, 1080),
//!     rate,
//!     14400,
//!     MediaKind::CameraOriginal,
//! )
//! .timecodes("01:00:00:00", "01:10:00:00")
//! .reel("A001");
//! assert!(ocf.validate().is_ok());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod media;
pub mod rational;
pub mod warning;

pub use error::{Error, Result};
pub use media::{MediaDescriptor, MediaKind, Resolution};
pub use rational::{FrameRate, Rational};
pub use warning::Warning;

/// Default pixel tolerance for resolution comparisons.
pub const RESOLUTION_TOLERANCE_PX: u32 = 5;
