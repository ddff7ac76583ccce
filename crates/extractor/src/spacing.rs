//! Margin inference from uniform item spacing.
//!
//! Inside an auto-layout parent with a positive uniform gap, every child but
//! the last (in layout-axis order) receives the gap as a trailing-edge
//! margin. Assigning only the trailing edge avoids the double counting a
//! per-gap split would produce.

use scene::{Axis, SceneNode, SceneRef};

/// Layout-axis sort key: absolute bounding-box position when available,
/// local position otherwise.
fn axis_position(node: &dyn SceneNode, axis: Axis) -> f64 {
    let (x, y) = node.bounding_box().map_or_else(
        || {
            let local = node.local_position();
            (local.x, local.y)
        },
        |bounds| (bounds.x, bounds.y),
    );
    match axis {
        Axis::Horizontal => x,
        Axis::Vertical => y,
    }
}

/// The trailing margin this node receives from its parent's item spacing,
/// with the axis it applies along. `None` when no margin is inferred.
pub(crate) fn trailing_margin(node: &dyn SceneNode, parent: &dyn SceneNode) -> Option<(Axis, f64)> {
    let axis = parent.layout_mode().axis()?;
    if node.absolutely_positioned() {
        return None;
    }
    let spacing = parent.item_spacing().filter(|gap| *gap > 0.0)?;

    let mut siblings: Vec<&SceneRef> = parent
        .children()
        .iter()
        .filter(|sibling| sibling.visible())
        .collect();
    if siblings.len() < 2 {
        return None;
    }
    siblings.sort_by(|lhs, rhs| {
        axis_position(lhs.as_ref(), axis).total_cmp(&axis_position(rhs.as_ref(), axis))
    });

    let last = siblings.last()?;
    if last.id() == node.id() {
        return None;
    }
    siblings
        .iter()
        .any(|sibling| sibling.id() == node.id())
        .then_some((axis, spacing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene::{LayoutMode, NodeBuilder, SceneRef};

    fn row_with_three_children() -> SceneRef {
        NodeBuilder::new("FRAME")
            .id("row")
            .layout_mode(LayoutMode::Horizontal)
            .item_spacing(8.0)
            .child(NodeBuilder::new("RECTANGLE").id("a").at(0.0, 0.0).build())
            .child(NodeBuilder::new("RECTANGLE").id("b").at(18.0, 0.0).build())
            .child(NodeBuilder::new("RECTANGLE").id("c").at(46.0, 0.0).build())
            .build()
    }

    #[test]
    fn all_but_the_last_child_get_the_gap() {
        let parent = row_with_three_children();
        let children = parent.children();
        assert_eq!(
            trailing_margin(children[0].as_ref(), parent.as_ref()),
            Some((Axis::Horizontal, 8.0))
        );
        assert_eq!(
            trailing_margin(children[1].as_ref(), parent.as_ref()),
            Some((Axis::Horizontal, 8.0))
        );
        assert_eq!(trailing_margin(children[2].as_ref(), parent.as_ref()), None);
    }

    #[test]
    fn order_follows_axis_position_not_child_index() {
        // "b" sits furthest right despite being listed first.
        let parent = NodeBuilder::new("FRAME")
            .layout_mode(LayoutMode::Horizontal)
            .item_spacing(4.0)
            .child(NodeBuilder::new("RECTANGLE").id("b").at(80.0, 0.0).build())
            .child(NodeBuilder::new("RECTANGLE").id("a").at(0.0, 0.0).build())
            .build();
        let children = parent.children();
        assert_eq!(trailing_margin(children[0].as_ref(), parent.as_ref()), None);
        assert_eq!(
            trailing_margin(children[1].as_ref(), parent.as_ref()),
            Some((Axis::Horizontal, 4.0))
        );
    }

    #[test]
    fn invisible_siblings_do_not_count() {
        let parent = NodeBuilder::new("FRAME")
            .layout_mode(LayoutMode::Vertical)
            .item_spacing(6.0)
            .child(NodeBuilder::new("RECTANGLE").id("a").at(0.0, 0.0).build())
            .child(
                NodeBuilder::new("RECTANGLE")
                    .id("hidden")
                    .at(0.0, 50.0)
                    .visible(false)
                    .build(),
            )
            .build();
        // Only one visible child → no margin at all.
        let children = parent.children();
        assert_eq!(trailing_margin(children[0].as_ref(), parent.as_ref()), None);
    }

    #[test]
    fn absolute_children_are_exempt() {
        let parent = row_with_three_children();
        let absolute_child = NodeBuilder::new("RECTANGLE").id("a").absolute().build();
        assert_eq!(
            trailing_margin(absolute_child.as_ref(), parent.as_ref()),
            None
        );
    }

    #[test]
    fn plain_parents_infer_nothing() {
        let parent = NodeBuilder::new("GROUP")
            .item_spacing(8.0)
            .child(NodeBuilder::new("RECTANGLE").id("a").build())
            .child(NodeBuilder::new("RECTANGLE").id("b").build())
            .build();
        let children = parent.children();
        assert_eq!(trailing_margin(children[0].as_ref(), parent.as_ref()), None);
    }
}
