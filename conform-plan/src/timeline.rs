//! Target timeline description.

use conform_core::{FrameRate, MediaDescriptor};
use serde::{Deserialize, Serialize};

/// Properties of the shared timeline frames are resolved against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSpec {
    /// Frame rate of the timeline.
    pub frame_rate: FrameRate,
    /// Whether the timeline's timecode track counts drop-frame.
    pub drop_frame: bool,
    /// Timecode of frame 0, when the timeline is timecode-anchored.
    pub base_timecode: Option<String>,
    /// Timeline length in frames.
    pub total_frames: i64,
}

impl TimelineSpec {
    /// Create a timeline with no timecode anchor.
    pub fn new(frame_rate: FrameRate, total_frames: i64) -> Self {
        Self {
            frame_rate,
            drop_frame: false,
            base_timecode: None,
            total_frames,
        }
    }

    /// Anchor the timeline at a base timecode.
    pub fn base_timecode(mut self, timecode: &str) -> Self {
        self.base_timecode = Some(timecode.into());
        self
    }

    /// Mark the timeline's timecode track as drop-frame.
    pub fn drop_frame(mut self, drop_frame: bool) -> Self {
        self.drop_frame = drop_frame;
        self
    }

    /// Build the timeline a camera original defines: its rate, drop-frame
    /// mode, source timecode as frame 0, and duration as the length.
    pub fn from_parent(parent: &MediaDescriptor) -> Self {
        Self {
            frame_rate: parent.frame_rate,
            drop_frame: parent.drop_frame,
            base_timecode: parent.source_timecode.clone(),
            total_frames: parent.duration_frames,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conform_core::{MediaKind, Resolution};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_parent() {
        let parent = MediaDescriptor::new(
            "A001C001.mov",
            Resolution::new(1920, 1080),
            FrameRate::from_rational(24, 1).unwrap(),
            14_400,
            MediaKind::CameraOriginal,
        )
        .timecodes("01:00:00:00", "01:10:00:00");

        let timeline = TimelineSpec::from_parent(&parent);
        assert_eq!(timeline.total_frames, 14_400);
        assert_eq!(timeline.base_timecode.as_deref(), Some("01:00:00:00"));
        assert!(!timeline.drop_frame);
    }
}
