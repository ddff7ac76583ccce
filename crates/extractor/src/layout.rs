//! Layout classification: node type categories, the definite-size predicate,
//! and the width/height sentinel resolution.

use scene::{Anchor, Axis, LayoutMode, SceneNode, SizingMode};
use uinode::Dimension;

/// Native types that act as structural containers rather than drawn shapes.
pub(crate) fn is_structural(node_type: &str) -> bool {
    matches!(
        node_type,
        "FRAME" | "GROUP" | "COMPONENT" | "COMPONENT_SET" | "INSTANCE" | "SECTION"
    )
}

/// Native types that are raw vector primitives.
pub(crate) fn is_vector(node_type: &str) -> bool {
    matches!(
        node_type,
        "VECTOR" | "BOOLEAN_OPERATION" | "STAR" | "LINE" | "ELLIPSE" | "POLYGON"
    )
}

/// Component or instance of a reusable component.
pub(crate) fn is_component(node_type: &str) -> bool {
    matches!(node_type, "COMPONENT" | "INSTANCE")
}

fn has_stretch_or_scale(node: &dyn SceneNode) -> bool {
    let constraints = node.constraints();
    [constraints.horizontal, constraints.vertical]
        .into_iter()
        .flatten()
        .any(|anchor| matches!(anchor, Anchor::Stretch | Anchor::Scale))
}

/// Whether the node must carry a definite width/height in its style map.
///
/// True for icons, for non-structural leaves with neither auto-layout nor a
/// stretch/scale constraint, and for nodes fixed along both axes.
pub(crate) fn requires_definite_size(node: &dyn SceneNode, is_icon: bool) -> bool {
    if is_icon {
        return true;
    }
    let fixed_both = node.sizing(Axis::Horizontal) == SizingMode::Fixed
        && node.sizing(Axis::Vertical) == SizingMode::Fixed;
    if fixed_both {
        return true;
    }
    !is_structural(node.node_type())
        && node.layout_mode() == LayoutMode::None
        && !has_stretch_or_scale(node)
}

/// Resolve the output dimension along one axis: the `"100%"` sentinel for
/// fill sizing (and for text leaves without fixed horizontal sizing), a pixel
/// value otherwise.
pub(crate) fn dimension(node: &dyn SceneNode, axis: Axis, pixels: f64) -> Dimension {
    if node.sizing(axis) == SizingMode::Fill {
        return Dimension::Percent;
    }
    if axis == Axis::Horizontal
        && node.text().is_some()
        && node.sizing(Axis::Horizontal) != SizingMode::Fixed
    {
        return Dimension::Percent;
    }
    Dimension::Px(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene::NodeBuilder;

    #[test]
    fn shape_leaf_without_layout_requires_definite_size() {
        let node = NodeBuilder::new("RECTANGLE").sized(10.0, 10.0).build();
        assert!(requires_definite_size(node.as_ref(), false));
    }

    #[test]
    fn stretch_constraint_lifts_the_requirement() {
        let node = NodeBuilder::new("RECTANGLE")
            .constraints(Some(Anchor::Stretch), None)
            .build();
        assert!(!requires_definite_size(node.as_ref(), false));
    }

    #[test]
    fn auto_layout_container_needs_no_definite_size() {
        let node = NodeBuilder::new("FRAME")
            .layout_mode(LayoutMode::Horizontal)
            .build();
        assert!(!requires_definite_size(node.as_ref(), false));
        assert!(requires_definite_size(node.as_ref(), true));
    }

    #[test]
    fn fixed_on_both_axes_requires_definite_size() {
        let node = NodeBuilder::new("FRAME")
            .sizing(SizingMode::Fixed, SizingMode::Fixed)
            .build();
        assert!(requires_definite_size(node.as_ref(), false));
    }

    #[test]
    fn text_without_fixed_width_fills_horizontally() {
        let node = NodeBuilder::new("TEXT").characters("hi").build();
        assert_eq!(
            dimension(node.as_ref(), Axis::Horizontal, 120.0),
            Dimension::Percent
        );
        assert_eq!(
            dimension(node.as_ref(), Axis::Vertical, 16.0),
            Dimension::Px(16.0)
        );
    }

    #[test]
    fn fixed_text_keeps_pixel_width() {
        let node = NodeBuilder::new("TEXT")
            .characters("hi")
            .sizing(SizingMode::Fixed, SizingMode::Fixed)
            .build();
        assert_eq!(
            dimension(node.as_ref(), Axis::Horizontal, 120.0),
            Dimension::Px(120.0)
        );
    }
}
