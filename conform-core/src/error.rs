//! Error types for core value construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by core value construction.
///
/// Only structurally invalid input is a hard error here; everything
/// recoverable downstream is surfaced as a [`crate::Warning`] instead.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum Error {
    /// Frame rate with a non-positive numerator or denominator.
    #[error("Invalid frame rate: {numerator}/{denominator}")]
    InvalidFrameRate {
        /// Frame rate numerator.
        numerator: i64,
        /// Frame rate denominator.
        denominator: i64,
    },

    /// Frame rate given as a float that cannot be canonicalized.
    #[error("Invalid frame rate value: {value}")]
    InvalidFrameRateValue {
        /// The rejected floating-point value, formatted for display.
        value: String,
    },

    /// Media descriptor that violates a structural invariant.
    #[error("Invalid media descriptor '{file_name}': {message}")]
    InvalidDescriptor {
        /// File name of the offending descriptor.
        file_name: String,
        /// Description of the violated invariant.
        message: String,
    },
}

impl Error {
    /// Create an invalid frame rate error.
    pub fn invalid_frame_rate(numerator: i64, denominator: i64) -> Self {
        Self::InvalidFrameRate {
            numerator,
            denominator,
        }
    }

    /// Create an invalid descriptor error.
    pub fn invalid_descriptor(file_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            file_name: file_name.into(),
            message: message.into(),
        }
    }
}
