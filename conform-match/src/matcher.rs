//! Segment-to-parent linking engine.
//!
//! Segment filenames are user-edited and only loosely trace back to their
//! camera original, so linking is a weighted heuristic: every candidate
//! parent is scored against the rubric in [`MatchFactor`], the strictly
//! highest total wins, and ties resolve to the first-considered candidate.
//! Candidate order is the caller's parent input order; this insertion-order
//! tie-break is a documented contract, not an accident of iteration.

use crate::factors::MatchFactor;
use crate::linking::{Confidence, LinkedSegment, LinkingResult, OcfParent};
use conform_core::{MediaDescriptor, Warning, RESOLUTION_TOLERANCE_PX};
use conform_timecode::TimecodeConverter;
use regex::Regex;
use tracing::{debug, trace};

/// Trailing segment-number decorations stripped for the partial-name
/// factor: `_s01`, `_v002`, `-0001`, `.take3`, repeated.
const SUFFIX_PATTERN: &str = r"(?:[_\-.][a-z]{0,4}\d{1,4})+$";

/// Links segments to camera-original parents.
pub struct SegmentMatcher {
    resolution_tolerance: u32,
    suffix_pattern: Regex,
}

impl SegmentMatcher {
    /// Create a matcher with the default resolution tolerance.
    pub fn new() -> Self {
        Self {
            resolution_tolerance: RESOLUTION_TOLERANCE_PX,
            suffix_pattern: Regex::new(SUFFIX_PATTERN).unwrap(),
        }
    }

    /// Override the resolution tolerance in pixels.
    pub fn with_resolution_tolerance(mut self, pixels: u32) -> Self {
        self.resolution_tolerance = pixels;
        self
    }

    /// Link every segment to at most one parent.
    ///
    /// One parent may accept many segments; children keep segment input
    /// order. The whole result is computed in one pass and returned as an
    /// immutable snapshot.
    pub fn link(
        &self,
        parents: &[MediaDescriptor],
        segments: &[MediaDescriptor],
    ) -> LinkingResult {
        let mut warnings = Vec::new();
        for descriptor in parents.iter().chain(segments.iter()) {
            collect_separator_warning(descriptor, &mut warnings);
        }

        let mut children: Vec<Vec<LinkedSegment>> = vec![Vec::new(); parents.len()];
        let mut unmatched_segments = Vec::new();

        for segment in segments {
            match self.best_candidate(segment, parents) {
                Some((parent_index, score, factors)) => {
                    let has_contains = factors.contains(&MatchFactor::FilenameContains);
                    // from_score only returns None for score 0, and
                    // best_candidate never yields that.
                    let confidence = Confidence::from_score(score, has_contains)
                        .unwrap_or(Confidence::Low);
                    debug!(
                        segment = %segment.file_name,
                        parent = %parents[parent_index].file_name,
                        score,
                        ?confidence,
                        "linked segment"
                    );
                    children[parent_index].push(LinkedSegment {
                        segment: segment.clone(),
                        confidence,
                        factors,
                        score,
                    });
                }
                None => {
                    debug!(segment = %segment.file_name, "segment unmatched");
                    unmatched_segments.push(segment.clone());
                }
            }
        }

        let parents: Vec<OcfParent> = parents
            .iter()
            .zip(children)
            .map(|(descriptor, children)| OcfParent {
                descriptor: descriptor.clone(),
                children,
            })
            .collect();

        let unmatched_parents: Vec<MediaDescriptor> = parents
            .iter()
            .filter(|p| !p.has_children())
            .map(|p| p.descriptor.clone())
            .collect();

        let total_segments = segments.len();
        let matched_segments = total_segments - unmatched_segments.len();
        let success_rate = if total_segments == 0 {
            0.0
        } else {
            matched_segments as f64 / total_segments as f64
        };

        LinkingResult {
            parents,
            unmatched_segments,
            unmatched_parents,
            matched_segments,
            total_segments,
            success_rate,
            warnings,
        }
    }

    /// Score all candidates and pick the winner, falling back to pure
    /// filename containment when every rubric score is zero.
    fn best_candidate(
        &self,
        segment: &MediaDescriptor,
        parents: &[MediaDescriptor],
    ) -> Option<(usize, u32, Vec<MatchFactor>)> {
        let mut best: Option<(usize, u32, Vec<MatchFactor>)> = None;

        for (index, parent) in parents.iter().enumerate() {
            let (score, factors) = self.score_candidate(segment, parent);
            trace!(
                segment = %segment.file_name,
                parent = %parent.file_name,
                score,
                "candidate scored"
            );
            // Strictly greater keeps the first-considered candidate on ties.
            if score > best.as_ref().map_or(0, |(_, s, _)| *s) {
                best = Some((index, score, factors));
            }
        }

        if best.is_some() {
            return best;
        }

        // Fallback: ignore all technical factors and look for the first
        // parent whose base name survives in the segment name.
        let segment_base = segment.base_name();
        for (index, parent) in parents.iter().enumerate() {
            if segment_base.contains(&parent.base_name()) {
                debug!(
                    segment = %segment.file_name,
                    parent = %parent.file_name,
                    "filename fallback link"
                );
                return Some((index, 1, vec![MatchFactor::FilenameFallback]));
            }
        }

        None
    }

    /// Apply the rubric to one (segment, parent) pair.
    fn score_candidate(
        &self,
        segment: &MediaDescriptor,
        parent: &MediaDescriptor,
    ) -> (u32, Vec<MatchFactor>) {
        let mut factors = Vec::new();

        let segment_base = segment.base_name();
        let parent_base = parent.base_name();

        if segment_base.contains(&parent_base) {
            factors.push(MatchFactor::FilenameContains);
        } else {
            let stripped = self.strip_suffix(&segment_base);
            if !stripped.is_empty() && parent_base.contains(stripped) {
                factors.push(MatchFactor::FilenamePartial);
            }
        }

        if segment
            .effective_resolution()
            .matches_within(&parent.effective_resolution(), self.resolution_tolerance)
        {
            factors.push(MatchFactor::Resolution);
        }

        if segment.frame_rate.is_compatible(&parent.frame_rate) {
            factors.push(MatchFactor::FrameRate);
        }

        if timecode_range_contained(segment, parent) {
            factors.push(MatchFactor::TimecodeRange);
        }

        if let (Some(seg_reel), Some(par_reel)) = (&segment.reel, &parent.reel) {
            if !seg_reel.is_empty() && seg_reel.eq_ignore_ascii_case(par_reel) {
                factors.push(MatchFactor::Reel);
            }
        }

        let score = factors.iter().map(|f| f.weight()).sum();
        (score, factors)
    }

    /// Strip trailing segment-number decorations from a lowercased base
    /// name. Returns the input unchanged when nothing matches.
    fn strip_suffix<'a>(&self, base: &'a str) -> &'a str {
        match self.suffix_pattern.find(base) {
            Some(m) => &base[..m.start()],
            None => base,
        }
    }
}

impl Default for SegmentMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// True when the segment's [start, end] timecode range, converted to
/// absolute frames at the parent's rate, lies entirely inside the
/// parent's range. Drop-frame mode is inferred per string from its
/// separator. Any unparsable timecode removes this factor's contribution
/// without failing the batch.
fn timecode_range_contained(segment: &MediaDescriptor, parent: &MediaDescriptor) -> bool {
    let (Some(seg_start), Some(seg_end)) = (&segment.source_timecode, &segment.end_timecode)
    else {
        return false;
    };
    let (Some(par_start), Some(par_end)) = (&parent.source_timecode, &parent.end_timecode) else {
        return false;
    };

    let frames_at_parent_rate = |tc: &str| -> Option<i64> {
        let converter = TimecodeConverter::new(parent.frame_rate, tc.contains(';'));
        match converter.frames_from_timecode(tc) {
            Ok(frames) => Some(frames),
            Err(err) => {
                debug!(timecode = tc, %err, "timecode factor skipped");
                None
            }
        }
    };

    let (Some(ss), Some(se), Some(ps), Some(pe)) = (
        frames_at_parent_rate(seg_start),
        frames_at_parent_rate(seg_end),
        frames_at_parent_rate(par_start),
        frames_at_parent_rate(par_end),
    ) else {
        return false;
    };

    ss < se && ss >= ps && se <= pe
}

/// Warn once per descriptor whose timecode separator contradicts its own
/// drop-frame flag.
fn collect_separator_warning(descriptor: &MediaDescriptor, warnings: &mut Vec<Warning>) {
    if let Some(tc) = &descriptor.source_timecode {
        let converter = TimecodeConverter::new(descriptor.frame_rate, descriptor.drop_frame);
        if converter.is_valid_timecode(tc) && !converter.separator_matches(tc) {
            warnings.push(Warning::SeparatorMismatch {
                timecode: tc.clone(),
                drop_frame_applied: converter.uses_drop_frame(),
            });
        }
    }
}
