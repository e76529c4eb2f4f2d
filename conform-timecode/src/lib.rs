//! Exact SMPTE timecode support for the conform workspace.
//!
//! This crate provides:
//!
//! - **[`Timecode`]**: the `HH:MM:SS:FF` / `HH:MM:SS;FF` value type with
//!   validation and frame arithmetic
//! - **Drop-frame counting**: wall-clock-aligned arithmetic for
//!   29.97/59.94-family rates, derived generically from the rate
//! - **[`TimecodeConverter`]**: the string ↔ frame-count engine used by
//!   the matcher and the ownership analyzer
//!
//! # Quick Start
//!
//! ```rust
//! use conform_core::FrameRate;
//! use conform_timecode::TimecodeConverter;
//!
//! let rate = FrameRate::from_rational(24, 1).unwrap();
//! let conv = TimecodeConverter::new(rate, false);
//!
//! assert_eq!(conv.frames_from_timecode("01:00:00:00").unwrap(), 86_400);
//! assert_eq!(conv.format_frames(86_400).unwrap(), "01:00:00:00");
//! ```
//!
//! # Drop-frame
//!
//! Drop-frame timecode periodically skips frame *numbers* so the clock
//! tracks wall time at NTSC rates:
//!
//! ```rust
//! use conform_core::FrameRate;
//! use conform_timecode::TimecodeConverter;
//!
//! let rate = FrameRate::from_float(29.97).unwrap();
//! let conv = TimecodeConverter::new(rate, true);
//!
//! // Minute 1 resumes at frame number 2; 00 and 01 are skipped.
//! assert_eq!(conv.format_frames(1800).unwrap(), "00:01:00;02");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod converter;
pub mod dropframe;
pub mod error;
pub mod smpte;

pub use converter::TimecodeConverter;
pub use dropframe::DropFrameConfig;
pub use error::{Result, TimecodeError};
pub use smpte::Timecode;

/// Maximum hours value in timecode.
pub const MAX_HOURS: u32 = 23;

/// Maximum minutes value in timecode.
pub const MAX_MINUTES: u32 = 59;

/// Maximum seconds value in timecode.
pub const MAX_SECONDS: u32 = 59;
