//! SMPTE 12M timecode value type.

use crate::dropframe::{self, DropFrameConfig};
use crate::error::{Result, TimecodeError};
use conform_core::FrameRate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// SMPTE timecode in `HH:MM:SS:FF` (or `HH:MM:SS;FF` drop-frame) form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timecode {
    /// Hours (0-23).
    pub hours: u32,
    /// Minutes (0-59).
    pub minutes: u32,
    /// Seconds (0-59).
    pub seconds: u32,
    /// Frames (0 to frame base - 1).
    pub frames: u32,
    /// Frame rate the fields are counted against.
    pub rate: FrameRate,
    /// Whether the fields use drop-frame counting.
    pub drop_frame: bool,
}

impl Timecode {
    /// Create a new non-drop timecode.
    pub fn new(hours: u32, minutes: u32, seconds: u32, frames: u32, rate: FrameRate) -> Result<Self> {
        let tc = Self {
            hours,
            minutes,
            seconds,
            frames,
            rate,
            drop_frame: false,
        };
        tc.validate()?;
        Ok(tc)
    }

    /// Create a new drop-frame timecode.
    ///
    /// Fails when the rate does not use drop-frame counting, or when the
    /// fields name a skipped frame number.
    pub fn new_drop_frame(
        hours: u32,
        minutes: u32,
        seconds: u32,
        frames: u32,
        rate: FrameRate,
    ) -> Result<Self> {
        if !rate.supports_drop_frame() {
            return Err(TimecodeError::drop_frame_unsupported(rate.describe(true)));
        }
        let tc = Self {
            hours,
            minutes,
            seconds,
            frames,
            rate,
            drop_frame: true,
        };
        tc.validate()?;
        Ok(tc)
    }

    /// Validate all components against their ranges, and against the
    /// skipped frame numbers when drop-frame.
    pub fn validate(&self) -> Result<()> {
        let base = self.rate.frame_base();

        if self.hours > 23 {
            return Err(TimecodeError::invalid_component("hours", self.hours, 23));
        }
        if self.minutes > 59 {
            return Err(TimecodeError::invalid_component("minutes", self.minutes, 59));
        }
        if self.seconds > 59 {
            return Err(TimecodeError::invalid_component("seconds", self.seconds, 59));
        }
        if self.frames >= base {
            return Err(TimecodeError::invalid_component(
                "frames",
                self.frames,
                base - 1,
            ));
        }

        if self.drop_frame {
            if let Some(config) = DropFrameConfig::for_rate(self.rate) {
                if dropframe::is_dropped_number(&config, self.minutes, self.seconds, self.frames) {
                    return Err(TimecodeError::dropped_frame_number(self.to_string()));
                }
            }
        }

        Ok(())
    }

    /// Frame count since 00:00:00:00 at this timecode's rate and mode.
    pub fn to_frame_count(&self) -> i64 {
        match self.active_config() {
            Some(config) => dropframe::frames_from_fields(
                &config,
                self.hours,
                self.minutes,
                self.seconds,
                self.frames,
            ),
            None => {
                let base = self.rate.frame_base() as i64;
                (self.hours as i64 * 3600 + self.minutes as i64 * 60 + self.seconds as i64) * base
                    + self.frames as i64
            }
        }
    }

    /// Build a timecode from a frame count. Hours wrap at 24.
    pub fn from_frame_count(frames: i64, rate: FrameRate, drop_frame: bool) -> Result<Self> {
        if frames < 0 {
            return Err(TimecodeError::NegativeFrameCount { frames });
        }

        let config = if drop_frame {
            DropFrameConfig::for_rate(rate)
        } else {
            None
        };

        let (hours, minutes, seconds, frame) = match config {
            Some(config) => dropframe::fields_from_frames(&config, frames),
            None => {
                let base = rate.frame_base() as i64;
                let total_seconds = frames / base;
                (
                    ((total_seconds / 3600) % 24) as u32,
                    ((total_seconds % 3600) / 60) as u32,
                    (total_seconds % 60) as u32,
                    (frames % base) as u32,
                )
            }
        };

        Ok(Self {
            hours,
            minutes,
            seconds,
            frames: frame,
            rate,
            drop_frame: drop_frame && rate.supports_drop_frame(),
        })
    }

    /// Add a signed frame offset, staying in this rate and mode.
    pub fn add_frames(&self, frames: i64) -> Result<Self> {
        Self::from_frame_count(self.to_frame_count() + frames, self.rate, self.drop_frame)
    }

    /// Signed frame difference `self - other`, valid when both share a
    /// rate and counting mode.
    pub fn difference(&self, other: &Self) -> i64 {
        self.to_frame_count() - other.to_frame_count()
    }

    /// Separator character for display: `;` for drop-frame, `:` otherwise.
    pub fn separator(&self) -> char {
        if self.drop_frame {
            ';'
        } else {
            ':'
        }
    }

    fn active_config(&self) -> Option<DropFrameConfig> {
        if self.drop_frame {
            DropFrameConfig::for_rate(self.rate)
        } else {
            None
        }
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}{}{:02}",
            self.hours,
            self.minutes,
            self.seconds,
            self.separator(),
            self.frames
        )
    }
}

impl PartialEq for Timecode {
    fn eq(&self, other: &Self) -> bool {
        self.rate == other.rate
            && self.drop_frame == other.drop_frame
            && self.to_frame_count() == other.to_frame_count()
    }
}

impl Eq for Timecode {}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.rate == other.rate && self.drop_frame == other.drop_frame {
            Some(self.to_frame_count().cmp(&other.to_frame_count()))
        } else {
            None
        }
    }
}
