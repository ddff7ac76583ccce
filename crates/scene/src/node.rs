//! Owned node data backing both JSON adapters, plus a builder for
//! constructing scene trees programmatically (used heavily by tests).

use crate::{
    Affine, Anchor, Axis, Constraints, CrossAxisAlign, Insets, LayoutMode, MainAxisAlign, Point,
    Rect, SceneNode, SceneRef, Size, SizingMode, TextSpec,
};
use std::rc::Rc;

/// Normalized native node fields shared by every adapter.
///
/// Adapters fill this struct eagerly from platform data; fields the platform
/// does not expose stay at their defaults.
#[derive(Debug, Clone, Default)]
pub struct NodeData {
    pub id: String,
    pub name: String,
    pub node_type: String,
    pub visible: bool,
    pub position: Point,
    pub size: Option<Size>,
    pub render_bounds: Option<Rect>,
    pub bounding_box: Option<Rect>,
    pub relative_transform: Option<Affine>,
    pub layout_mode: LayoutMode,
    pub sizing_horizontal: SizingMode,
    pub sizing_vertical: SizingMode,
    pub constraints: Constraints,
    pub absolutely_positioned: bool,
    pub item_spacing: Option<f64>,
    pub padding: Option<Insets>,
    pub primary_axis_align: Option<MainAxisAlign>,
    pub counter_axis_align: Option<CrossAxisAlign>,
    pub layout_align: Option<String>,
    pub layout_grow: f64,
    pub is_asset: bool,
    pub main_component_id: Option<String>,
    pub has_fills: bool,
    pub text: Option<TextSpec>,
}

/// Concrete [`SceneNode`] over owned [`NodeData`] and owned children.
#[derive(Debug)]
pub struct DataNode {
    data: NodeData,
    children: Vec<SceneRef>,
}

impl DataNode {
    /// Wrap node data and children into a shared scene handle.
    #[must_use]
    pub fn shared(data: NodeData, children: Vec<SceneRef>) -> SceneRef {
        Rc::new(Self { data, children })
    }
}

impl SceneNode for DataNode {
    fn id(&self) -> &str {
        &self.data.id
    }

    fn name(&self) -> &str {
        &self.data.name
    }

    fn node_type(&self) -> &str {
        &self.data.node_type
    }

    fn visible(&self) -> bool {
        self.data.visible
    }

    fn children(&self) -> &[SceneRef] {
        &self.children
    }

    fn local_position(&self) -> Point {
        self.data.position
    }

    fn size(&self) -> Option<Size> {
        self.data.size
    }

    fn render_bounds(&self) -> Option<Rect> {
        self.data.render_bounds
    }

    fn bounding_box(&self) -> Option<Rect> {
        self.data.bounding_box
    }

    fn relative_transform(&self) -> Option<Affine> {
        self.data.relative_transform
    }

    fn layout_mode(&self) -> LayoutMode {
        self.data.layout_mode
    }

    fn sizing(&self, axis: Axis) -> SizingMode {
        match axis {
            Axis::Horizontal => self.data.sizing_horizontal,
            Axis::Vertical => self.data.sizing_vertical,
        }
    }

    fn constraints(&self) -> Constraints {
        self.data.constraints
    }

    fn absolutely_positioned(&self) -> bool {
        self.data.absolutely_positioned
    }

    fn item_spacing(&self) -> Option<f64> {
        self.data.item_spacing
    }

    fn padding(&self) -> Option<Insets> {
        self.data.padding
    }

    fn primary_axis_align(&self) -> Option<MainAxisAlign> {
        self.data.primary_axis_align
    }

    fn counter_axis_align(&self) -> Option<CrossAxisAlign> {
        self.data.counter_axis_align
    }

    fn layout_align(&self) -> Option<&str> {
        self.data.layout_align.as_deref()
    }

    fn layout_grow(&self) -> f64 {
        self.data.layout_grow
    }

    fn is_asset(&self) -> bool {
        self.data.is_asset
    }

    fn main_component_id(&self) -> Option<&str> {
        self.data.main_component_id.as_deref()
    }

    fn has_fills(&self) -> bool {
        self.data.has_fills
    }

    fn text(&self) -> Option<&TextSpec> {
        self.data.text.as_ref()
    }
}

/// Fluent constructor for [`DataNode`] trees.
#[derive(Debug, Default)]
pub struct NodeBuilder {
    data: NodeData,
    children: Vec<SceneRef>,
}

impl NodeBuilder {
    /// Start a node of the given native type. Visible by default.
    #[must_use]
    pub fn new(node_type: &str) -> Self {
        Self {
            data: NodeData {
                node_type: node_type.to_owned(),
                visible: true,
                ..NodeData::default()
            },
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(mut self, id: &str) -> Self {
        self.data.id = id.to_owned();
        self
    }

    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.data.name = name.to_owned();
        self
    }

    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.data.visible = visible;
        self
    }

    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.data.position = Point { x, y };
        self
    }

    #[must_use]
    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.data.size = Some(Size { width, height });
        self
    }

    #[must_use]
    pub fn bounding_box(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.data.bounding_box = Some(Rect {
            x,
            y,
            width,
            height,
        });
        self
    }

    #[must_use]
    pub fn render_bounds(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.data.render_bounds = Some(Rect {
            x,
            y,
            width,
            height,
        });
        self
    }

    #[must_use]
    pub fn transform(mut self, affine: Affine) -> Self {
        self.data.relative_transform = Some(affine);
        self
    }

    /// Shorthand for a pure-translation relative transform.
    #[must_use]
    pub fn translated(self, tx: f64, ty: f64) -> Self {
        self.transform(Affine {
            e: tx,
            f: ty,
            ..Affine::IDENTITY
        })
    }

    #[must_use]
    pub fn layout_mode(mut self, mode: LayoutMode) -> Self {
        self.data.layout_mode = mode;
        self
    }

    #[must_use]
    pub fn sizing(mut self, horizontal: SizingMode, vertical: SizingMode) -> Self {
        self.data.sizing_horizontal = horizontal;
        self.data.sizing_vertical = vertical;
        self
    }

    #[must_use]
    pub fn constraints(mut self, horizontal: Option<Anchor>, vertical: Option<Anchor>) -> Self {
        self.data.constraints = Constraints {
            horizontal,
            vertical,
        };
        self
    }

    #[must_use]
    pub fn absolute(mut self) -> Self {
        self.data.absolutely_positioned = true;
        self
    }

    #[must_use]
    pub fn item_spacing(mut self, spacing: f64) -> Self {
        self.data.item_spacing = Some(spacing);
        self
    }

    #[must_use]
    pub fn padding(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.data.padding = Some(Insets {
            top,
            right,
            bottom,
            left,
        });
        self
    }

    #[must_use]
    pub fn primary_align(mut self, align: MainAxisAlign) -> Self {
        self.data.primary_axis_align = Some(align);
        self
    }

    #[must_use]
    pub fn counter_align(mut self, align: CrossAxisAlign) -> Self {
        self.data.counter_axis_align = Some(align);
        self
    }

    #[must_use]
    pub fn layout_align(mut self, align: &str) -> Self {
        self.data.layout_align = Some(align.to_owned());
        self
    }

    #[must_use]
    pub fn layout_grow(mut self, grow: f64) -> Self {
        self.data.layout_grow = grow;
        self
    }

    #[must_use]
    pub fn asset(mut self) -> Self {
        self.data.is_asset = true;
        self
    }

    #[must_use]
    pub fn main_component(mut self, component_id: &str) -> Self {
        self.data.main_component_id = Some(component_id.to_owned());
        self
    }

    #[must_use]
    pub fn fills(mut self) -> Self {
        self.data.has_fills = true;
        self
    }

    #[must_use]
    pub fn text(mut self, spec: TextSpec) -> Self {
        self.data.text = Some(spec);
        self
    }

    /// Shorthand for a plain text payload with no font metrics.
    #[must_use]
    pub fn characters(self, characters: &str) -> Self {
        self.text(TextSpec {
            characters: characters.to_owned(),
            ..TextSpec::default()
        })
    }

    #[must_use]
    pub fn child(mut self, child: SceneRef) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn build(self) -> SceneRef {
        DataNode::shared(self.data, self.children)
    }
}
