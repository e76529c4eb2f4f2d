//! Error types for timecode operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;

/// Errors that can occur during timecode parsing and conversion.
///
/// Malformed input always surfaces as a descriptive error; the engine
/// never silently substitutes a default timecode.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimecodeError {
    /// Invalid timecode format in a string.
    #[error("Invalid timecode format: {message}")]
    InvalidFormat {
        /// Description of the format error.
        message: String,
    },

    /// A timecode component outside its valid range.
    #[error("Invalid timecode component: {component} = {value} (max {max})")]
    InvalidComponent {
        /// Name of the invalid component (hours, minutes, seconds, frames).
        component: String,
        /// The invalid value that was provided.
        value: u32,
        /// The maximum allowed value for this component.
        max: u32,
    },

    /// A frame number that drop-frame counting skips at this position.
    #[error("Timecode '{timecode}' names a dropped frame number")]
    DroppedFrameNumber {
        /// The offending timecode string.
        timecode: String,
    },

    /// Drop-frame counting requested for a rate that does not use it.
    #[error("Drop-frame timecode is not defined for {rate}")]
    DropFrameUnsupported {
        /// Description of the unsupported rate.
        rate: String,
    },

    /// A negative frame count given where only forward counts exist.
    #[error("Negative frame count: {frames}")]
    NegativeFrameCount {
        /// The rejected frame count.
        frames: i64,
    },
}

impl TimecodeError {
    /// Create an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create an invalid component error.
    pub fn invalid_component(component: impl Into<String>, value: u32, max: u32) -> Self {
        Self::InvalidComponent {
            component: component.into(),
            value,
            max,
        }
    }

    /// Create a dropped-frame-number error.
    pub fn dropped_frame_number(timecode: impl Into<String>) -> Self {
        Self::DroppedFrameNumber {
            timecode: timecode.into(),
        }
    }

    /// Create a drop-frame-unsupported error.
    pub fn drop_frame_unsupported(rate: impl Into<String>) -> Self {
        Self::DropFrameUnsupported { rate: rate.into() }
    }
}
