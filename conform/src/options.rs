//! High-level conform options.

use conform_core::RESOLUTION_TOLERANCE_PX;
use conform_plan::AnalyzerConfig;
use serde::{Deserialize, Serialize};

/// Options for a [`crate::Conformer`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConformOptions {
    /// Pixel tolerance for the matcher's resolution factor.
    pub resolution_tolerance: u32,
    /// Attach visualization payloads to the per-parent plans.
    pub include_visualization: bool,
    /// Fan per-parent analysis out across threads. Plans come back in
    /// parent order either way.
    pub parallel: bool,
}

impl ConformOptions {
    /// Create options with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resolution tolerance in pixels.
    pub fn resolution_tolerance(mut self, pixels: u32) -> Self {
        self.resolution_tolerance = pixels;
        self
    }

    /// Request visualization payloads.
    pub fn include_visualization(mut self, include: bool) -> Self {
        self.include_visualization = include;
        self
    }

    /// Enable or disable parallel fan-out.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The analyzer configuration these options imply.
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            include_visualization: self.include_visualization,
        }
    }
}

impl Default for ConformOptions {
    fn default() -> Self {
        Self {
            resolution_tolerance: RESOLUTION_TOLERANCE_PX,
            include_visualization: false,
            parallel: true,
        }
    }
}
