//! Extraction configuration.
//!
//! The icon heuristics run on ad hoc magic numbers; they live here as named,
//! overridable values rather than inlined literals.

/// Size and shape thresholds driving icon/vector classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconThresholds {
    /// Maximum edge length for a node to count as an icon at all.
    pub max_size: f64,
    /// Maximum width of a composite container merged into one icon.
    pub merge_width: f64,
    /// Maximum height of a composite container merged into one icon.
    pub merge_height: f64,
    /// Edge length under which a raw vector is an icon regardless of shape.
    pub small_vector: f64,
    /// Maximum long-edge / short-edge ratio considered icon-like.
    pub max_aspect: f64,
    /// Allowed width/height difference for "near square", in pixels.
    pub square_slack: f64,
}

impl Default for IconThresholds {
    fn default() -> Self {
        Self {
            max_size: 64.0,
            merge_width: 80.0,
            merge_height: 48.0,
            small_vector: 24.0,
            max_aspect: 3.0,
            square_slack: 2.0,
        }
    }
}

/// Per-call engine options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractOptions {
    pub icon: IconThresholds,
    /// Minimum consecutive-run length collapsed by repeat compression.
    pub min_repeat_run: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            icon: IconThresholds::default(),
            min_repeat_run: 2,
        }
    }
}
