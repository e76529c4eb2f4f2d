//! Drop-frame counting for NTSC-family rates.
//!
//! Drop-frame timecode keeps the timecode clock aligned with wall-clock
//! time for 29.97/59.94-family rates by skipping frame *numbers* (never
//! frames) at the start of each minute, except minutes divisible by 10.
//!
//! The parameters are derived from the rate itself rather than an
//! allow-list: a drop-capable rate has an NTSC 1/1001 denominator and a
//! nominal base divisible by 30, and drops `base / 15` numbers per minute
//! (2 at 29.97, 4 at 59.94).

use conform_core::FrameRate;
use serde::{Deserialize, Serialize};

/// Drop-frame parameters for one rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropFrameConfig {
    /// Nominal integer frame base (30 for 29.97).
    pub frame_base: u32,
    /// Frame numbers skipped per dropping minute.
    pub drop_per_minute: u32,
    /// Real frames in a dropping minute: `base * 60 - drop`.
    pub frames_per_minute: i64,
    /// Real frames in ten minutes: `base * 600 - 9 * drop`.
    pub frames_per_ten_minutes: i64,
}

impl DropFrameConfig {
    /// Derive the configuration for a rate, or `None` when the rate does
    /// not use drop-frame counting.
    pub fn for_rate(rate: FrameRate) -> Option<Self> {
        if !rate.supports_drop_frame() {
            return None;
        }
        let base = rate.frame_base();
        let drop = base / 15;
        Some(Self {
            frame_base: base,
            drop_per_minute: drop,
            frames_per_minute: (base * 60 - drop) as i64,
            frames_per_ten_minutes: (base * 600 - 9 * drop) as i64,
        })
    }
}

/// True when `(minutes, seconds, frames)` names a skipped frame number.
pub fn is_dropped_number(config: &DropFrameConfig, minutes: u32, seconds: u32, frames: u32) -> bool {
    seconds == 0 && minutes % 10 != 0 && frames < config.drop_per_minute
}

/// Convert drop-frame timecode fields to a real frame count.
///
/// `dropped = drop_per_minute * (total_minutes - total_minutes / 10)`,
/// subtracted from the naive nominal-base count.
pub fn frames_from_fields(config: &DropFrameConfig, h: u32, m: u32, s: u32, f: u32) -> i64 {
    let base = config.frame_base as i64;
    let total_minutes = (h * 60 + m) as i64;
    let dropped = config.drop_per_minute as i64 * (total_minutes - total_minutes / 10);
    (h as i64 * 3600 + m as i64 * 60 + s as i64) * base + f as i64 - dropped
}

/// Convert a real frame count to drop-frame timecode fields, re-inserting
/// the skipped numbers at non-multiple-of-10 minute boundaries.
///
/// Exact inverse of [`frames_from_fields`] for every valid input. Hours
/// wrap at 24.
pub fn fields_from_frames(config: &DropFrameConfig, frames: i64) -> (u32, u32, u32, u32) {
    let base = config.frame_base as i64;
    let full_minute = base * 60;

    let ten_minute_blocks = frames / config.frames_per_ten_minutes;
    let rem = frames % config.frames_per_ten_minutes;

    // The first minute of each 10-minute block drops nothing.
    let (minute_in_block, display) = if rem < full_minute {
        (0, rem)
    } else {
        let past_first = rem - full_minute;
        let extra_minutes = 1 + past_first / config.frames_per_minute;
        let in_minute = past_first % config.frames_per_minute;
        (extra_minutes, in_minute + config.drop_per_minute as i64)
    };

    let total_minutes = ten_minute_blocks * 10 + minute_in_block;
    let hours = ((total_minutes / 60) % 24) as u32;
    let minutes = (total_minutes % 60) as u32;
    let seconds = (display / base) as u32;
    let frame = (display % base) as u32;

    (hours, minutes, seconds, frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config_29_97() -> DropFrameConfig {
        DropFrameConfig::for_rate(FrameRate::from_float(29.97).unwrap()).unwrap()
    }

    fn config_59_94() -> DropFrameConfig {
        DropFrameConfig::for_rate(FrameRate::from_float(59.94).unwrap()).unwrap()
    }

    #[test]
    fn test_derived_parameters() {
        let c = config_29_97();
        assert_eq!(c.frame_base, 30);
        assert_eq!(c.drop_per_minute, 2);
        assert_eq!(c.frames_per_minute, 1798);
        assert_eq!(c.frames_per_ten_minutes, 17982);

        let c = config_59_94();
        assert_eq!(c.drop_per_minute, 4);
        assert_eq!(c.frames_per_minute, 3596);
        assert_eq!(c.frames_per_ten_minutes, 35964);
    }

    #[test]
    fn test_no_config_for_non_drop_rates() {
        assert!(DropFrameConfig::for_rate(FrameRate::from_float(23.976).unwrap()).is_none());
        assert!(DropFrameConfig::for_rate(FrameRate::from_float(25.0).unwrap()).is_none());
        assert!(DropFrameConfig::for_rate(FrameRate::from_float(30.0).unwrap()).is_none());
    }

    #[test]
    fn test_is_dropped_number() {
        let c = config_29_97();
        assert!(is_dropped_number(&c, 1, 0, 0));
        assert!(is_dropped_number(&c, 1, 0, 1));
        assert!(!is_dropped_number(&c, 1, 0, 2));
        assert!(!is_dropped_number(&c, 10, 0, 0));
        assert!(!is_dropped_number(&c, 0, 0, 0));
        assert!(!is_dropped_number(&c, 5, 1, 0));
    }

    #[test]
    fn test_minute_boundary_skips_two_numbers() {
        // Canonical SMPTE reference: one drop-frame minute is 1798 frames,
        // and the minute-1 boundary resumes at frame number 2.
        let c = config_29_97();
        assert_eq!(fields_from_frames(&c, 1799), (0, 0, 59, 29));
        assert_eq!(fields_from_frames(&c, 1800), (0, 1, 0, 2));
        assert_eq!(fields_from_frames(&c, 1801), (0, 1, 0, 3));
    }

    #[test]
    fn test_ten_minute_boundary_drops_nothing() {
        let c = config_29_97();
        assert_eq!(fields_from_frames(&c, 17982), (0, 10, 0, 0));
    }

    #[test]
    fn test_59_94_minute_boundary() {
        let c = config_59_94();
        assert_eq!(fields_from_frames(&c, 3600), (0, 1, 0, 4));
    }

    #[test]
    fn test_roundtrip_29_97() {
        let c = config_29_97();
        for frames in [
            0, 1, 29, 30, 1797, 1798, 1799, 1800, 1801, 17981, 17982, 17983, 107_892, 863_136,
        ] {
            let (h, m, s, f) = fields_from_frames(&c, frames);
            let back = frames_from_fields(&c, h, m, s, f);
            assert_eq!(frames, back, "roundtrip failed at {frames}");
        }
    }

    #[test]
    fn test_roundtrip_59_94() {
        let c = config_59_94();
        for frames in [0, 59, 60, 3595, 3596, 3597, 35963, 35964, 215_784] {
            let (h, m, s, f) = fields_from_frames(&c, frames);
            let back = frames_from_fields(&c, h, m, s, f);
            assert_eq!(frames, back, "roundtrip failed at {frames}");
        }
    }

    #[test]
    fn test_one_hour_drop_frame() {
        // One wall-clock hour at 29.97 is 107892 frames and reads 01:00:00;00.
        let c = config_29_97();
        assert_eq!(fields_from_frames(&c, 107_892), (1, 0, 0, 0));
        assert_eq!(frames_from_fields(&c, 1, 0, 0, 0), 107_892);
    }

    #[test]
    fn test_config_serialization() {
        let c = config_29_97();
        let json = serde_json::to_string(&c).unwrap();
        let decoded: DropFrameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, decoded);
    }
}
