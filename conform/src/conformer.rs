//! High-level conform orchestration.

use crate::options::ConformOptions;
use conform_core::MediaDescriptor;
use conform_match::{LinkingResult, SegmentMatcher};
use conform_plan::{FrameOwnershipAnalyzer, ProcessingPlan, TimelineSpec};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// The ownership plan computed for one matched parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentPlan {
    /// File name of the parent the plan belongs to.
    pub parent: String,
    /// The frame-accurate cut plan on the parent's own timeline.
    pub plan: ProcessingPlan,
}

/// Result of one full conform pass: the linking snapshot plus one plan
/// per parent that received segments, in parent input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConformReport {
    /// The segment-to-parent linking snapshot.
    pub linking: LinkingResult,
    /// Per-parent plans, parent input order, active parents only.
    pub plans: Vec<ParentPlan>,
}

/// Runs matching and per-parent ownership analysis in one pass.
///
/// Each parent's plan is computed on the timeline that parent defines:
/// its source timecode anchors frame 0 and its duration bounds the
/// timeline. Children are analyzed in their linked order, which preserves
/// the caller's segment ordering as the overlap priority contract.
pub struct Conformer {
    options: ConformOptions,
}

impl Conformer {
    /// Create a conformer with explicit options.
    pub fn new(options: ConformOptions) -> Self {
        Self { options }
    }

    /// Create a conformer with default options.
    pub fn with_defaults() -> Self {
        Self::new(ConformOptions::default())
    }

    /// The options in effect.
    pub fn options(&self) -> &ConformOptions {
        &self.options
    }

    /// Link segments to parents, then compute one ownership plan per
    /// active parent.
    ///
    /// Every invocation is a pure function of its inputs; with
    /// `parallel` enabled the per-parent analyses fan out across threads
    /// but the report is identical to the sequential one.
    pub fn run(
        &self,
        parents: &[MediaDescriptor],
        segments: &[MediaDescriptor],
    ) -> ConformReport {
        info!(
            parents = parents.len(),
            segments = segments.len(),
            "running conform pass"
        );

        let matcher =
            SegmentMatcher::new().with_resolution_tolerance(self.options.resolution_tolerance);
        let linking = matcher.link(parents, segments);
        debug!(
            matched = linking.matched_segments,
            total = linking.total_segments,
            "linking complete"
        );

        let analyzer = FrameOwnershipAnalyzer::with_config(self.options.analyzer_config());
        let analyze_parent = |parent: &conform_match::OcfParent| {
            let timeline = TimelineSpec::from_parent(&parent.descriptor);
            let children: Vec<MediaDescriptor> = parent
                .children
                .iter()
                .map(|c| c.segment.clone())
                .collect();
            ParentPlan {
                parent: parent.descriptor.file_name.clone(),
                plan: analyzer.analyze(&timeline, &children),
            }
        };

        let active: Vec<&conform_match::OcfParent> = linking.active_parents().collect();
        let plans: Vec<ParentPlan> = if self.options.parallel {
            active.par_iter().map(|p| analyze_parent(p)).collect()
        } else {
            active.iter().map(|p| analyze_parent(p)).collect()
        };

        info!(plans = plans.len(), "conform pass complete");
        ConformReport { linking, plans }
    }
}
