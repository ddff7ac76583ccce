//! Platform accessor — a capability interface over the host design tool's
//! native scene nodes.
//!
//! The extraction engine reads native nodes exclusively through [`SceneNode`];
//! the two host dialects are normalized onto it by the adapters in [`json`].
//! Every accessor degrades to a default on missing data rather than failing.

#![forbid(unsafe_code)]

use std::fmt::Debug;
use std::rc::Rc;

pub mod json;
mod node;

pub use node::{DataNode, NodeBuilder, NodeData};

/// Shared handle to a native scene node.
pub type SceneRef = Rc<dyn SceneNode>;

/// A point in the host tool's coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// An axis-aligned rectangle in absolute (page) coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// 2D affine transform in the host tool's row-major 2×3 layout.
///
/// ```text
/// [ a  c  e ]
/// [ b  d  f ]
/// ```
///
/// `(e, f)` is the translation, i.e. the node's offset within its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Affine {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// The translation components of the transform.
    #[inline]
    #[must_use]
    pub const fn translation(&self) -> (f64, f64) {
        (self.e, self.f)
    }
}

/// Layout axis of an auto-layout container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Auto-layout mode of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
}

impl LayoutMode {
    /// The main axis of this layout mode, if the node is an auto-layout
    /// container.
    #[inline]
    #[must_use]
    pub const fn axis(self) -> Option<Axis> {
        match self {
            Self::None => None,
            Self::Horizontal => Some(Axis::Horizontal),
            Self::Vertical => Some(Axis::Vertical),
        }
    }
}

/// Per-axis sizing directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SizingMode {
    /// Size from content.
    Hug,
    /// Size from parent.
    Fill,
    /// Explicit pixel size.
    Fixed,
    /// No sizing information available.
    #[default]
    None,
}

/// Anchor constraint of a node along one axis, relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Pinned to the start edge (left/top).
    Min,
    /// Pinned to the end edge (right/bottom).
    Max,
    /// Anchored to the parent's center.
    Center,
    /// Pinned to both edges; size follows the parent.
    Stretch,
    /// Both edges kept proportional to the parent size.
    Scale,
}

/// Anchor constraints for both axes. Either may be absent on platforms that
/// do not expose constraint data for the node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Constraints {
    pub horizontal: Option<Anchor>,
    pub vertical: Option<Anchor>,
}

/// Primary-axis alignment of an auto-layout container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MainAxisAlign {
    Min,
    Center,
    Max,
    SpaceBetween,
}

/// Counter-axis alignment of an auto-layout container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossAxisAlign {
    Min,
    Center,
    Max,
    Baseline,
}

/// Per-edge padding in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    /// Whether every edge is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }
}

/// Text content and font metrics of a text leaf.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextSpec {
    pub characters: String,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub font_weight: Option<f64>,
    pub text_align: Option<String>,
    pub text_decoration: Option<String>,
    pub line_height: Option<f64>,
}

/// Read-only capability interface over one native scene node.
///
/// Adapters resolve divergent native field names before data reaches this
/// trait; algorithmic code must never branch on the host platform.
pub trait SceneNode: Debug {
    /// Stable native node id.
    fn id(&self) -> &str;
    /// Author-facing node name.
    fn name(&self) -> &str;
    /// Native type string (`FRAME`, `GROUP`, `VECTOR`, `TEXT`, ...).
    fn node_type(&self) -> &str;
    /// Whether the node is visible. Missing data counts as visible.
    fn visible(&self) -> bool;
    /// Children in native z/DOM order.
    fn children(&self) -> &[SceneRef];

    /// Position in the parent's local coordinate space.
    fn local_position(&self) -> Point;
    /// Declared size, when the platform exposes one.
    fn size(&self) -> Option<Size>;
    /// Render-time absolute bounds (effects included). Highest fidelity.
    fn render_bounds(&self) -> Option<Rect>;
    /// Absolute bounding box of the node's geometry.
    fn bounding_box(&self) -> Option<Rect>;
    /// Transform relative to the parent, when exposed.
    fn relative_transform(&self) -> Option<Affine>;

    /// Auto-layout mode of this node.
    fn layout_mode(&self) -> LayoutMode;
    /// Sizing directive along the given axis.
    fn sizing(&self, axis: Axis) -> SizingMode;
    /// Anchor constraints relative to the parent.
    fn constraints(&self) -> Constraints;
    /// Whether the node is positioned outside the parent's auto-layout flow.
    fn absolutely_positioned(&self) -> bool;

    /// Uniform gap between auto-layout children, when declared.
    fn item_spacing(&self) -> Option<f64>;
    /// Auto-layout padding, when declared.
    fn padding(&self) -> Option<Insets>;
    /// Alignment of children along the main axis.
    fn primary_axis_align(&self) -> Option<MainAxisAlign>;
    /// Alignment of children along the counter axis.
    fn counter_axis_align(&self) -> Option<CrossAxisAlign>;
    /// Raw per-item cross-axis alignment override (`MIN`/`CENTER`/`MAX`/`STRETCH`).
    fn layout_align(&self) -> Option<&str>;
    /// Flex-grow weight along the parent's main axis.
    fn layout_grow(&self) -> f64;

    /// Host-provided "this is a visual asset" signal.
    fn is_asset(&self) -> bool;
    /// Id of the backing main component for instances.
    fn main_component_id(&self) -> Option<&str>;
    /// Whether the node carries visible fills.
    fn has_fills(&self) -> bool;
    /// Text payload, present only on text leaves.
    fn text(&self) -> Option<&TextSpec>;
}
