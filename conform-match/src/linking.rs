//! Linking result types.

use crate::factors::MatchFactor;
use conform_core::{MediaDescriptor, Warning};
use serde::{Deserialize, Serialize};

/// Qualitative certainty of one segment-to-parent link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Confidence {
    /// Weak evidence, or the filename-only fallback.
    Low,
    /// Moderate corroborating evidence.
    Medium,
    /// Strong filename evidence plus corroboration.
    High,
}

impl Confidence {
    /// Map a rubric score to a confidence tier. `None` means the score
    /// is too weak to link at all.
    pub fn from_score(score: u32, has_filename_contains: bool) -> Option<Self> {
        if score >= 4 && has_filename_contains {
            Some(Self::High)
        } else if score >= 2 {
            Some(Self::Medium)
        } else if score >= 1 {
            Some(Self::Low)
        } else {
            None
        }
    }
}

/// A segment linked to its parent, with the evidence that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedSegment {
    /// The linked segment's descriptor.
    pub segment: MediaDescriptor,
    /// Confidence tier of the link.
    pub confidence: Confidence,
    /// Factors that contributed to the winning score, in rubric order.
    pub factors: Vec<MatchFactor>,
    /// The winning score.
    pub score: u32,
}

/// A camera original with its linked segments in segment input order.
///
/// A parent with no children is inert for downstream rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcfParent {
    /// The parent's descriptor.
    pub descriptor: MediaDescriptor,
    /// Linked segments, ordered by segment insertion order.
    pub children: Vec<LinkedSegment>,
}

impl OcfParent {
    /// True when at least one segment linked to this parent.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Immutable snapshot of one matching pass.
///
/// Recomputed wholesale whenever the inputs change; never mutated
/// incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkingResult {
    /// All parents in input order, each with its children.
    pub parents: Vec<OcfParent>,
    /// Segments that linked to no parent.
    pub unmatched_segments: Vec<MediaDescriptor>,
    /// Parents that received no segments.
    pub unmatched_parents: Vec<MediaDescriptor>,
    /// Number of segments that linked.
    pub matched_segments: usize,
    /// Total segments considered.
    pub total_segments: usize,
    /// Matched over total; 0.0 for an empty input.
    pub success_rate: f64,
    /// Non-fatal diagnostics gathered during matching.
    pub warnings: Vec<Warning>,
}

impl LinkingResult {
    /// Parents that actually received children, in input order.
    pub fn active_parents(&self) -> impl Iterator<Item = &OcfParent> {
        self.parents.iter().filter(|p| p.has_children())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_confidence_mapping() {
        assert_eq!(Confidence::from_score(0, false), None);
        assert_eq!(Confidence::from_score(1, false), Some(Confidence::Low));
        assert_eq!(Confidence::from_score(2, false), Some(Confidence::Medium));
        assert_eq!(Confidence::from_score(3, true), Some(Confidence::Medium));
        assert_eq!(Confidence::from_score(4, true), Some(Confidence::High));
        // A high score without the filename factor stays Medium.
        assert_eq!(Confidence::from_score(4, false), Some(Confidence::Medium));
        assert_eq!(Confidence::from_score(7, true), Some(Confidence::High));
    }

    #[test]
    fn test_confidence_ordering() {
        assert!(Confidence::Low < Confidence::Medium);
        assert!(Confidence::Medium < Confidence::High);
    }
}
