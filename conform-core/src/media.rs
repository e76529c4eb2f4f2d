//! Media descriptor model shared by the matching and planning engines.
//!
//! A [`MediaDescriptor`] carries the pre-extracted metadata for one source
//! file. This core never opens or decodes media; descriptors are produced
//! by an external metadata provider and consumed read-only here.

use crate::error::{Error, Result};
use crate::rational::FrameRate;
use serde::{Deserialize, Serialize};

/// Kind of media a descriptor refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    /// Camera-original master recording (OCF).
    CameraOriginal,
    /// Independently authored deliverable: graded clip or VFX shot.
    GradedSegment,
}

/// Pixel dimensions of a video stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Create a new resolution.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are within `tolerance` pixels of `other`.
    pub fn matches_within(&self, other: &Resolution, tolerance: u32) -> bool {
        self.width.abs_diff(other.width) <= tolerance
            && self.height.abs_diff(other.height) <= tolerance
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Metadata for a single source file.
///
/// Immutable after construction; higher-level engines only read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaDescriptor {
    /// File name including extension, e.g. `A001C001.mov`.
    pub file_name: String,
    /// Opaque source locator (path or URI) supplied by file discovery.
    pub locator: String,
    /// Coded picture resolution.
    pub resolution: Resolution,
    /// Sample-aspect-corrected display resolution, when it differs.
    pub display_resolution: Option<Resolution>,
    /// Exact rational frame rate.
    pub frame_rate: FrameRate,
    /// Start timecode, `HH:MM:SS:FF` or `HH:MM:SS;FF`.
    pub source_timecode: Option<String>,
    /// End timecode (exclusive), same format as the start.
    pub end_timecode: Option<String>,
    /// Duration in frames at this file's own rate.
    pub duration_frames: i64,
    /// Whether this file's timecode track counts drop-frame.
    pub drop_frame: bool,
    /// Camera reel name, when the container carries one.
    pub reel: Option<String>,
    /// Explicit VFX deliverable flag. VFX output takes unconditional
    /// priority over overlapping graded segments downstream.
    pub is_vfx: bool,
    /// Container start offset in seconds from the metadata provider.
    /// Used as the approximate fallback when timecode metadata is absent.
    pub start_seconds: Option<f64>,
    /// Whether this is a camera original or a deliverable segment.
    pub kind: MediaKind,
}

impl MediaDescriptor {
    /// Create a descriptor with the required fields; optional metadata is
    /// attached with the builder-style setters.
    pub fn new(
        file_name: &str,
        resolution: Resolution,
        frame_rate: FrameRate,
        duration_frames: i64,
        kind: MediaKind,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            locator: file_name.into(),
            resolution,
            display_resolution: None,
            frame_rate,
            source_timecode: None,
            end_timecode: None,
            duration_frames,
            drop_frame: false,
            reel: None,
            is_vfx: false,
            start_seconds: None,
            kind,
        }
    }

    /// Set the source locator.
    pub fn locator(mut self, locator: &str) -> Self {
        self.locator = locator.into();
        self
    }

    /// Set the display resolution.
    pub fn display_resolution(mut self, resolution: Resolution) -> Self {
        self.display_resolution = Some(resolution);
        self
    }

    /// Set start and end timecode.
    pub fn timecodes(mut self, source: &str, end: &str) -> Self {
        self.source_timecode = Some(source.into());
        self.end_timecode = Some(end.into());
        self
    }

    /// Set only the source timecode.
    pub fn source_timecode(mut self, source: &str) -> Self {
        self.source_timecode = Some(source.into());
        self
    }

    /// Mark the timecode track as drop-frame.
    pub fn drop_frame(mut self, drop_frame: bool) -> Self {
        self.drop_frame = drop_frame;
        self
    }

    /// Set the reel name.
    pub fn reel(mut self, reel: &str) -> Self {
        self.reel = Some(reel.into());
        self
    }

    /// Flag this descriptor as a VFX deliverable.
    pub fn vfx(mut self, is_vfx: bool) -> Self {
        self.is_vfx = is_vfx;
        self
    }

    /// Set the container start offset in seconds.
    pub fn start_seconds(mut self, seconds: f64) -> Self {
        self.start_seconds = Some(seconds);
        self
    }

    /// Display resolution when present, coded resolution otherwise.
    pub fn effective_resolution(&self) -> Resolution {
        self.display_resolution.unwrap_or(self.resolution)
    }

    /// File name without its final extension, lowercased for comparison.
    pub fn base_name(&self) -> String {
        let stem = match self.file_name.rsplit_once('.') {
            Some((stem, _ext)) if !stem.is_empty() => stem,
            _ => self.file_name.as_str(),
        };
        stem.to_ascii_lowercase()
    }

    /// Validate structural invariants: non-negative duration and
    /// well-formed timecode strings (`HH:MM:SS[:;]FF` with in-range
    /// fields for this descriptor's frame base).
    pub fn validate(&self) -> Result<()> {
        if self.duration_frames < 0 {
            return Err(Error::invalid_descriptor(
                &self.file_name,
                format!("negative duration: {} frames", self.duration_frames),
            ));
        }

        let base = self.frame_rate.frame_base();
        for (label, tc) in [
            ("source timecode", &self.source_timecode),
            ("end timecode", &self.end_timecode),
        ] {
            if let Some(tc) = tc {
                if !timecode_shape_valid(tc, base) {
                    return Err(Error::invalid_descriptor(
                        &self.file_name,
                        format!("malformed {label}: '{tc}'"),
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Structural timecode check: four numeric fields, colon or semicolon
/// separated, with MM/SS below 60 and FF below the frame base. The full
/// drop-frame arithmetic lives in the timecode crate; this only guards
/// descriptor construction.
fn timecode_shape_valid(tc: &str, frame_base: u32) -> bool {
    let parts: Vec<&str> = tc.split([':', ';']).collect();
    if parts.len() != 4 {
        return false;
    }
    let fields: Option<Vec<u32>> = parts.iter().map(|p| p.parse().ok()).collect();
    match fields {
        Some(f) => f[0] < 24 && f[1] < 60 && f[2] < 60 && f[3] < frame_base,
        None => false,
    }
}
