//! Timecode string ↔ frame count conversion engine.
//!
//! A [`TimecodeConverter`] is constructed once per (rate, drop-frame)
//! context and then used for exact conversions on that timeline. The
//! configured mode alone decides the counting arithmetic; a string's
//! separator never changes the math (callers that care about a separator
//! contradicting the mode use [`TimecodeConverter::separator_matches`]
//! and surface a warning).

use crate::dropframe::{self, DropFrameConfig};
use crate::error::{Result, TimecodeError};
use crate::smpte::Timecode;
use conform_core::FrameRate;
use serde::{Deserialize, Serialize};

/// Exact timecode/frame conversion for one (rate, drop-frame) context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimecodeConverter {
    rate: FrameRate,
    drop_frame: bool,
}

impl TimecodeConverter {
    /// Create a converter for a rate and a requested drop-frame mode.
    ///
    /// Requesting drop-frame for a rate that does not use it (24, 25,
    /// 23.976, ...) quietly degrades to non-drop counting, which is the
    /// only counting those rates define.
    pub fn new(rate: FrameRate, drop_frame: bool) -> Self {
        Self { rate, drop_frame }
    }

    /// The configured frame rate.
    pub fn rate(&self) -> FrameRate {
        self.rate
    }

    /// Whether drop-frame counting is actually in effect: requested AND
    /// defined for this rate.
    pub fn uses_drop_frame(&self) -> bool {
        self.drop_frame && self.rate.supports_drop_frame()
    }

    /// Parse a timecode string into an absolute frame count.
    ///
    /// Accepts `HH:MM:SS:FF` and `HH:MM:SS;FF` for any rate; the
    /// configured mode decides the arithmetic. Malformed or out-of-range
    /// fields always return a descriptive error. Under drop-frame
    /// counting, a string naming a skipped frame number is an error.
    pub fn frames_from_timecode(&self, tc: &str) -> Result<i64> {
        let (h, m, s, f) = parse_fields(tc, self.rate.frame_base())?;

        match self.active_config() {
            Some(config) => {
                if dropframe::is_dropped_number(&config, m, s, f) {
                    return Err(TimecodeError::dropped_frame_number(tc.trim()));
                }
                Ok(dropframe::frames_from_fields(&config, h, m, s, f))
            }
            None => {
                let base = self.rate.frame_base() as i64;
                Ok((h as i64 * 3600 + m as i64 * 60 + s as i64) * base + f as i64)
            }
        }
    }

    /// Exact inverse of [`frames_from_timecode`]: format a frame count as
    /// a timecode in this converter's mode.
    ///
    /// [`frames_from_timecode`]: TimecodeConverter::frames_from_timecode
    pub fn timecode_from_frames(&self, frames: i64) -> Result<Timecode> {
        Timecode::from_frame_count(frames, self.rate, self.uses_drop_frame())
    }

    /// Format a frame count directly to its string rendering.
    pub fn format_frames(&self, frames: i64) -> Result<String> {
        Ok(self.timecode_from_frames(frames)?.to_string())
    }

    /// Structural and range validation only: four numeric fields with
    /// HH < 24, MM/SS < 60, FF below the frame base. Either separator is
    /// accepted regardless of the configured mode.
    pub fn is_valid_timecode(&self, tc: &str) -> bool {
        parse_fields(tc, self.rate.frame_base()).is_ok()
    }

    /// Whether a string's separator agrees with the counting mode in
    /// effect (`;` for drop-frame, `:` otherwise).
    pub fn separator_matches(&self, tc: &str) -> bool {
        tc.contains(';') == self.uses_drop_frame()
    }

    fn active_config(&self) -> Option<DropFrameConfig> {
        if self.drop_frame {
            DropFrameConfig::for_rate(self.rate)
        } else {
            None
        }
    }
}

/// Split and range-check the four timecode fields.
fn parse_fields(tc: &str, frame_base: u32) -> Result<(u32, u32, u32, u32)> {
    let tc = tc.trim();
    let parts: Vec<&str> = tc.split([':', ';']).collect();
    if parts.len() != 4 {
        return Err(TimecodeError::invalid_format(format!(
            "expected HH:MM:SS:FF or HH:MM:SS;FF, got '{tc}'"
        )));
    }

    let mut fields = [0u32; 4];
    for (i, (part, label)) in parts
        .iter()
        .zip(["hours", "minutes", "seconds", "frames"])
        .enumerate()
    {
        fields[i] = part.parse().map_err(|_| {
            TimecodeError::invalid_format(format!("invalid {label} field '{part}' in '{tc}'"))
        })?;
    }
    let [h, m, s, f] = fields;

    if h > 23 {
        return Err(TimecodeError::invalid_component("hours", h, 23));
    }
    if m > 59 {
        return Err(TimecodeError::invalid_component("minutes", m, 59));
    }
    if s > 59 {
        return Err(TimecodeError::invalid_component("seconds", s, 59));
    }
    if f >= frame_base {
        return Err(TimecodeError::invalid_component("frames", f, frame_base - 1));
    }

    Ok((h, m, s, f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn converter_24() -> TimecodeConverter {
        TimecodeConverter::new(FrameRate::from_rational(24, 1).unwrap(), false)
    }

    fn converter_29_97_df() -> TimecodeConverter {
        TimecodeConverter::new(FrameRate::from_float(29.97).unwrap(), true)
    }

    #[test]
    fn test_one_hour_at_24() {
        let conv = converter_24();
        assert_eq!(conv.frames_from_timecode("01:00:00:00").unwrap(), 86_400);
        assert_eq!(conv.format_frames(86_400).unwrap(), "01:00:00:00");
    }

    #[test]
    fn test_drop_frame_minute_boundary() {
        // Frame 1800 lands just past minute 1, where numbers 00 and 01
        // are skipped.
        let conv = converter_29_97_df();
        assert_eq!(conv.format_frames(1800).unwrap(), "00:01:00;02");
        assert_eq!(conv.frames_from_timecode("00:01:00;02").unwrap(), 1800);
    }

    #[test]
    fn test_drop_frame_accepts_colon_separator() {
        // Separator flexibility: the configured mode decides the math.
        let conv = converter_29_97_df();
        assert_eq!(
            conv.frames_from_timecode("00:01:00:02").unwrap(),
            conv.frames_from_timecode("00:01:00;02").unwrap()
        );
        assert!(!conv.separator_matches("00:01:00:02"));
        assert!(conv.separator_matches("00:01:00;02"));
    }

    #[test]
    fn test_non_drop_accepts_semicolon_separator() {
        let conv = converter_24();
        assert_eq!(conv.frames_from_timecode("00:00:01;00").unwrap(), 24);
        assert!(!conv.separator_matches("00:00:01;00"));
    }

    #[test]
    fn test_dropped_number_is_an_error() {
        let conv = converter_29_97_df();
        let err = conv.frames_from_timecode("00:01:00;00").unwrap_err();
        assert_eq!(err, TimecodeError::dropped_frame_number("00:01:00;00"));
    }

    #[test]
    fn test_drop_request_on_incapable_rate_degrades() {
        let conv = TimecodeConverter::new(FrameRate::from_float(23.976).unwrap(), true);
        assert!(!conv.uses_drop_frame());
        assert_eq!(conv.frames_from_timecode("01:00:00:00").unwrap(), 86_400);
    }

    #[test]
    fn test_malformed_inputs_error() {
        let conv = converter_24();
        assert!(conv.frames_from_timecode("01:00:00").is_err());
        assert!(conv.frames_from_timecode("01:00:00:00:00").is_err());
        assert!(conv.frames_from_timecode("aa:00:00:00").is_err());
        assert!(conv.frames_from_timecode("01:60:00:00").is_err());
        assert!(conv.frames_from_timecode("01:00:61:00").is_err());
        assert!(conv.frames_from_timecode("24:00:00:00").is_err());
        assert!(conv.frames_from_timecode("01:00:00:24").is_err());
        assert!(conv.frames_from_timecode("").is_err());
    }

    #[test]
    fn test_is_valid_timecode_structural_only() {
        let conv = converter_29_97_df();
        assert!(conv.is_valid_timecode("01:02:03;04"));
        // Colon separator is still structurally valid for a drop-frame
        // converter.
        assert!(conv.is_valid_timecode("01:02:03:04"));
        // A skipped frame number passes the structural check even though
        // frames_from_timecode rejects it.
        assert!(conv.is_valid_timecode("00:01:00;00"));
        assert!(!conv.is_valid_timecode("01:02:03;30"));
        assert!(!conv.is_valid_timecode("not a timecode"));
    }

    #[test]
    fn test_roundtrip_identity() {
        let cases = [
            (TimecodeConverter::new(FrameRate::from_rational(24, 1).unwrap(), false), 86_400),
            (TimecodeConverter::new(FrameRate::from_float(23.976).unwrap(), false), 86_400),
            (converter_29_97_df(), 1800),
            (converter_29_97_df(), 107_892),
            (TimecodeConverter::new(FrameRate::from_float(59.94).unwrap(), true), 3600),
            (TimecodeConverter::new(FrameRate::from_rational(25, 1).unwrap(), false), 90_000),
        ];
        for (conv, frames) in cases {
            let tc = conv.format_frames(frames).unwrap();
            assert_eq!(
                conv.frames_from_timecode(&tc).unwrap(),
                frames,
                "roundtrip failed for '{tc}'"
            );
        }
    }

    #[test]
    fn test_exhaustive_roundtrip_first_ten_minutes() {
        // Every frame of the first ten minutes survives the roundtrip in
        // both counting modes.
        let df = converter_29_97_df();
        let ndf = TimecodeConverter::new(FrameRate::from_rational(30, 1).unwrap(), false);
        for frames in 0..18_000 {
            let tc = df.format_frames(frames).unwrap();
            assert_eq!(df.frames_from_timecode(&tc).unwrap(), frames);
            let tc = ndf.format_frames(frames).unwrap();
            assert_eq!(ndf.frames_from_timecode(&tc).unwrap(), frames);
        }
    }

    #[test]
    fn test_converter_serialization() {
        let conv = converter_29_97_df();
        let json = serde_json::to_string(&conv).unwrap();
        let decoded: TimecodeConverter = serde_json::from_str(&json).unwrap();
        assert_eq!(conv, decoded);
    }
}
