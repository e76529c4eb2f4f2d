//! Frame-ownership analysis.
//!
//! Grading passes and VFX deliveries are produced independently and may
//! overlap on the target timeline. The analyzer resolves an unordered set
//! of segments into a non-overlapping partition describing which segment
//! (and which source frame) supplies every output frame, with VFX taking
//! unconditional priority over grades.
//!
//! Priority is an explicit contract: segments split into two tiers by
//! their VFX flag, and within a tier a later list position wins any
//! overlap. The caller controls priority by ordering its input, never by
//! timestamps. The whole pass is a pure function of its inputs: same
//! input, same plan, warnings and all.

use crate::plan::{ConsolidatedRange, PlanStatistics, PlanVisualization, ProcessingPlan, VizBlock};
use crate::timeline::TimelineSpec;
use conform_core::{MediaDescriptor, Rational, Warning};
use conform_timecode::TimecodeConverter;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Analyzer options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Attach a [`PlanVisualization`] to the plan.
    pub include_visualization: bool,
}

/// Resolves overlapping segment ranges into a deterministic cut plan.
#[derive(Debug, Clone, Default)]
pub struct FrameOwnershipAnalyzer {
    config: AnalyzerConfig,
}

/// A segment resolved onto the timeline, pre-paint.
struct Placement {
    segment_index: usize,
    is_vfx: bool,
    /// Unclamped timeline frame where the segment's frame 0 would land.
    anchor: i64,
    start: i64,
    end: i64,
}

impl FrameOwnershipAnalyzer {
    /// Create an analyzer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with explicit options.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Compute the ownership plan for one timeline.
    ///
    /// Never fails: a segment outside the timeline is dropped with a
    /// warning, and a segment with unusable timecode metadata degrades to
    /// float-based timing with a warning.
    pub fn analyze(
        &self,
        timeline: &TimelineSpec,
        segments: &[MediaDescriptor],
    ) -> ProcessingPlan {
        let total = timeline.total_frames.max(0);
        debug!(
            segments = segments.len(),
            total_frames = total,
            rate = %timeline.frame_rate,
            "analyzing frame ownership"
        );

        let mut warnings = Vec::new();
        let converter = TimecodeConverter::new(timeline.frame_rate, timeline.drop_frame);
        let base_frames = resolve_base(timeline, &converter, &mut warnings);

        let placements =
            self.resolve_placements(timeline, segments, &converter, base_frames, &mut warnings);

        let (owner, frames_overwritten) =
            paint(total, &placements, segments, &mut warnings);

        let ranges = consolidate(total, &owner, &placements, segments);

        let mut vfx_frames = 0;
        let mut grade_frames = 0;
        for range in &ranges {
            if range.is_vfx {
                vfx_frames += range.len();
            } else {
                grade_frames += range.len();
            }
        }

        let statistics = PlanStatistics {
            segment_count: segments.len(),
            vfx_segment_count: segments.iter().filter(|s| s.is_vfx).count(),
            overlap_count: warnings.iter().filter(|w| w.is_overlap()).count(),
            vfx_frames,
            grade_frames,
            frames_overwritten,
            total_frames: total,
        };

        let visualization = self
            .config
            .include_visualization
            .then(|| visualize(total, &ranges));

        ProcessingPlan {
            ranges,
            warnings,
            statistics,
            visualization,
        }
    }

    /// Resolve each segment to a clamped `[start, end)` timeline range.
    fn resolve_placements(
        &self,
        timeline: &TimelineSpec,
        segments: &[MediaDescriptor],
        converter: &TimecodeConverter,
        base_frames: Option<i64>,
        warnings: &mut Vec<Warning>,
    ) -> Vec<Placement> {
        let total = timeline.total_frames.max(0);
        let mut placements = Vec::with_capacity(segments.len());

        for (index, segment) in segments.iter().enumerate() {
            let Some(anchor) =
                resolve_start(segment, converter, base_frames, warnings)
            else {
                continue;
            };

            let duration = duration_on_timeline(segment, timeline);
            if duration <= 0 {
                debug!(segment = %segment.file_name, "zero-length segment skipped");
                continue;
            }

            let end = anchor + duration;
            if end <= 0 || anchor >= total {
                warn!(
                    segment = %segment.file_name,
                    start = anchor,
                    end,
                    "segment lies outside the timeline"
                );
                warnings.push(Warning::RangeOutsideTimeline {
                    segment: segment.file_name.clone(),
                    range: (anchor, end),
                });
                continue;
            }

            let clamped = (anchor.max(0), end.min(total));
            if clamped != (anchor, end) {
                warn!(
                    segment = %segment.file_name,
                    requested = ?(anchor, end),
                    clamped = ?clamped,
                    "segment range clamped to timeline"
                );
                warnings.push(Warning::RangeClamped {
                    segment: segment.file_name.clone(),
                    requested: (anchor, end),
                    clamped,
                });
            }

            placements.push(Placement {
                segment_index: index,
                is_vfx: segment.is_vfx,
                anchor,
                start: clamped.0,
                end: clamped.1,
            });
        }

        placements
    }
}

/// Parse the timeline's base timecode, degrading to no anchor on failure.
fn resolve_base(
    timeline: &TimelineSpec,
    converter: &TimecodeConverter,
    warnings: &mut Vec<Warning>,
) -> Option<i64> {
    let tc = timeline.base_timecode.as_ref()?;
    match converter.frames_from_timecode(tc) {
        Ok(frames) => {
            if !converter.separator_matches(tc) {
                warnings.push(Warning::SeparatorMismatch {
                    timecode: tc.clone(),
                    drop_frame_applied: converter.uses_drop_frame(),
                });
            }
            Some(frames)
        }
        Err(err) => {
            warn!(timecode = %tc, %err, "timeline base timecode unusable");
            None
        }
    }
}

/// Resolve a segment's timeline start frame: exact timecode arithmetic
/// when both the timeline and the segment are timecode-anchored, float
/// seconds with a precision warning otherwise, `None` (plus a warning)
/// when neither is available.
fn resolve_start(
    segment: &MediaDescriptor,
    converter: &TimecodeConverter,
    base_frames: Option<i64>,
    warnings: &mut Vec<Warning>,
) -> Option<i64> {
    let mut fallback_detail = "source timecode missing";

    if let Some(tc) = &segment.source_timecode {
        if let Some(base) = base_frames {
            match converter.frames_from_timecode(tc) {
                Ok(frames) => {
                    if !converter.separator_matches(tc) {
                        warnings.push(Warning::SeparatorMismatch {
                            timecode: tc.clone(),
                            drop_frame_applied: converter.uses_drop_frame(),
                        });
                    }
                    return Some(frames - base);
                }
                Err(err) => {
                    debug!(segment = %segment.file_name, %err, "source timecode unusable");
                    fallback_detail = "source timecode unusable";
                }
            }
        } else {
            fallback_detail = "timeline has no timecode anchor";
        }
    }

    match segment.start_seconds {
        Some(seconds) => {
            warn!(
                segment = %segment.file_name,
                detail = fallback_detail,
                "falling back to float-second timing"
            );
            warnings.push(Warning::PrecisionFallback {
                segment: segment.file_name.clone(),
                detail: fallback_detail.into(),
            });
            Some((seconds * converter.rate().as_f64()).round() as i64)
        }
        None => {
            warn!(segment = %segment.file_name, "no usable timing metadata");
            warnings.push(Warning::MissingTiming {
                segment: segment.file_name.clone(),
            });
            None
        }
    }
}

/// Segment duration in timeline frames, rescaled exactly when the
/// segment's own rate differs from the timeline's.
fn duration_on_timeline(segment: &MediaDescriptor, timeline: &TimelineSpec) -> i64 {
    if segment.frame_rate.is_compatible(&timeline.frame_rate) {
        return segment.duration_frames;
    }
    let segment_frame = Rational::new(
        segment.frame_rate.denominator(),
        segment.frame_rate.numerator(),
    );
    let timeline_frame = Rational::new(
        timeline.frame_rate.denominator(),
        timeline.frame_rate.numerator(),
    );
    segment_frame.rescale(segment.duration_frames, timeline_frame)
}

/// Paint ownership in two passes (grades in input order, then VFX in
/// input order on top), emitting one overlap warning per painted-over
/// span and counting overwritten frames.
fn paint(
    total: i64,
    placements: &[Placement],
    segments: &[MediaDescriptor],
    warnings: &mut Vec<Warning>,
) -> (Vec<Option<u32>>, i64) {
    let mut owner: Vec<Option<u32>> = vec![None; total as usize];
    let mut frames_overwritten = 0i64;

    let grade_slots = placements
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_vfx)
        .map(|(i, _)| i);
    let vfx_slots = placements
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_vfx)
        .map(|(i, _)| i);

    for slot in grade_slots.chain(vfx_slots) {
        let placement = &placements[slot];
        let mut spans: Vec<(i64, i64, u32)> = Vec::new();
        let mut current: Option<(i64, u32)> = None;

        for frame in placement.start..placement.end {
            let cell = frame as usize;
            let previous = owner[cell];
            owner[cell] = Some(slot as u32);

            match previous {
                Some(old) => {
                    frames_overwritten += 1;
                    match current {
                        Some((_, o)) if o == old => {}
                        Some((span_start, o)) => {
                            spans.push((span_start, frame, o));
                            current = Some((frame, old));
                        }
                        None => current = Some((frame, old)),
                    }
                }
                None => {
                    if let Some((span_start, o)) = current.take() {
                        spans.push((span_start, frame, o));
                    }
                }
            }
        }
        if let Some((span_start, o)) = current.take() {
            spans.push((span_start, placement.end, o));
        }

        for (span_start, span_end, old_slot) in spans {
            let loser = &placements[old_slot as usize];
            let winner_name = &segments[placement.segment_index].file_name;
            let loser_name = &segments[loser.segment_index].file_name;
            warn!(
                winner = %winner_name,
                loser = %loser_name,
                span = ?(span_start, span_end),
                "overlapping segment ranges"
            );
            warnings.push(Warning::Overlap {
                start_frame: span_start,
                end_frame: span_end,
                winner: winner_name.clone(),
                winner_vfx: placement.is_vfx,
                loser: loser_name.clone(),
                loser_vfx: loser.is_vfx,
            });
        }
    }

    (owner, frames_overwritten)
}

/// Collapse per-frame ownership into maximal contiguous ranges. Runs only
/// merge within one placement, whose source offset is `frame - anchor`,
/// so the offset advances exactly one per frame across a range.
fn consolidate(
    total: i64,
    owner: &[Option<u32>],
    placements: &[Placement],
    segments: &[MediaDescriptor],
) -> Vec<ConsolidatedRange> {
    let mut ranges = Vec::new();
    let mut run: Option<(u32, i64)> = None;

    for frame in 0..=total {
        let cell = if frame < total {
            owner[frame as usize]
        } else {
            None
        };

        if let (Some((slot, _)), Some(c)) = (run, cell) {
            if c == slot {
                continue;
            }
        }

        if let Some((slot, run_start)) = run.take() {
            let placement = &placements[slot as usize];
            ranges.push(ConsolidatedRange {
                segment_index: placement.segment_index,
                segment_name: segments[placement.segment_index].file_name.clone(),
                is_vfx: placement.is_vfx,
                start_frame: run_start,
                end_frame: frame,
                source_offset: run_start - placement.anchor,
            });
        }
        if let Some(c) = cell {
            run = Some((c, frame));
        }
    }

    ranges
}

/// Render the final ownership as ordered blocks covering the timeline,
/// including unowned gaps.
fn visualize(total: i64, ranges: &[ConsolidatedRange]) -> PlanVisualization {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    for range in ranges {
        if range.start_frame > cursor {
            blocks.push(VizBlock {
                start_frame: cursor,
                end_frame: range.start_frame,
                label: None,
                vfx: false,
            });
        }
        blocks.push(VizBlock {
            start_frame: range.start_frame,
            end_frame: range.end_frame,
            label: Some(range.segment_name.clone()),
            vfx: range.is_vfx,
        });
        cursor = range.end_frame;
    }
    if cursor < total {
        blocks.push(VizBlock {
            start_frame: cursor,
            end_frame: total,
            label: None,
            vfx: false,
        });
    }

    PlanVisualization { blocks }
}
