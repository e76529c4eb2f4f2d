//! Processing plan types: consolidated ranges, statistics, visualization.

use conform_core::Warning;
use serde::{Deserialize, Serialize};

/// A maximal contiguous span of output frames supplied by one segment.
///
/// Ranges in a plan are sorted, non-overlapping, and each covers at least
/// one frame. `source_offset` is the frame index inside the owning
/// segment's own sequence that corresponds to `start_frame`; it advances
/// by exactly one per output frame across the range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidatedRange {
    /// Index of the winning segment in the analyzer's input list.
    pub segment_index: usize,
    /// File name of the winning segment.
    pub segment_name: String,
    /// Whether the winning segment is a VFX deliverable.
    pub is_vfx: bool,
    /// First timeline frame of the span.
    pub start_frame: i64,
    /// One past the last timeline frame of the span.
    pub end_frame: i64,
    /// Frame inside the winning segment that maps to `start_frame`.
    pub source_offset: i64,
}

impl ConsolidatedRange {
    /// Number of frames this range covers.
    pub fn len(&self) -> i64 {
        self.end_frame - self.start_frame
    }

    /// Always false for a well-formed range; kept for clippy symmetry.
    pub fn is_empty(&self) -> bool {
        self.end_frame <= self.start_frame
    }
}

/// Aggregate counts for one analysis pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStatistics {
    /// Segments considered.
    pub segment_count: usize,
    /// Segments flagged as VFX.
    pub vfx_segment_count: usize,
    /// Distinct overlap spans detected while painting.
    pub overlap_count: usize,
    /// Output frames owned by VFX segments.
    pub vfx_frames: i64,
    /// Output frames owned by graded segments.
    pub grade_frames: i64,
    /// Frames that were painted more than once.
    pub frames_overwritten: i64,
    /// Timeline length in frames.
    pub total_frames: i64,
}

/// One block of the visualization strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VizBlock {
    /// First frame of the block.
    pub start_frame: i64,
    /// One past the last frame of the block.
    pub end_frame: i64,
    /// Segment file name, or `None` for an unowned gap.
    pub label: Option<String>,
    /// Whether the block is VFX-owned.
    pub vfx: bool,
}

/// Optional visualization payload: the timeline rendered as ordered
/// blocks, including unowned gaps, for UI or debug output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanVisualization {
    /// Blocks in timeline order, covering `[0, total_frames)`.
    pub blocks: Vec<VizBlock>,
}

/// The frame-accurate cut plan for one timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingPlan {
    /// Non-overlapping ranges in timeline order.
    pub ranges: Vec<ConsolidatedRange>,
    /// Non-fatal diagnostics, including one entry per overlap.
    pub warnings: Vec<Warning>,
    /// Aggregate counts.
    pub statistics: PlanStatistics,
    /// Visualization payload, when requested.
    pub visualization: Option<PlanVisualization>,
}

impl ProcessingPlan {
    /// Ranges owned by VFX segments, in timeline order.
    pub fn vfx_ranges(&self) -> impl Iterator<Item = &ConsolidatedRange> {
        self.ranges.iter().filter(|r| r.is_vfx)
    }

    /// The overlap warnings alone.
    pub fn overlap_warnings(&self) -> impl Iterator<Item = &Warning> {
        self.warnings.iter().filter(|w| w.is_overlap())
    }
}
