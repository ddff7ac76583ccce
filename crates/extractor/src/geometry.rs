//! Geometry resolution.
//!
//! Positions are expressed relative to the extraction root, or relative to
//! the parent for absolutely-positioned nodes. Each field prefers render-time
//! absolute bounds, then the absolute bounding box, then the raw local
//! property — the local fallback is lowest fidelity but never fails.

use scene::{SceneNode, SceneRef};
use std::rc::Rc;

/// Resolved pixel geometry of one node.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Best available absolute position of a node.
fn absolute_position(node: &dyn SceneNode) -> (f64, f64) {
    if let Some(bounds) = node.render_bounds() {
        (bounds.x, bounds.y)
    } else if let Some(bounds) = node.bounding_box() {
        (bounds.x, bounds.y)
    } else {
        let local = node.local_position();
        (local.x, local.y)
    }
}

/// Best available size of a node.
pub(crate) fn node_size(node: &dyn SceneNode) -> (f64, f64) {
    if let Some(bounds) = node.render_bounds() {
        (bounds.width, bounds.height)
    } else if let Some(bounds) = node.bounding_box() {
        (bounds.width, bounds.height)
    } else if let Some(size) = node.size() {
        (size.width, size.height)
    } else {
        (0.0, 0.0)
    }
}

/// Offset of an absolutely-positioned node within its parent: the relative
/// transform's translation when available, else the difference of absolute
/// positions.
pub(crate) fn offset_in_parent(node: &dyn SceneNode, parent: &dyn SceneNode) -> (f64, f64) {
    if let Some(transform) = node.relative_transform() {
        transform.translation()
    } else {
        let (node_x, node_y) = absolute_position(node);
        let (parent_x, parent_y) = absolute_position(parent);
        (node_x - parent_x, node_y - parent_y)
    }
}

/// Resolve a node's pixel geometry.
///
/// The root resolves to `(0, 0)`; absolutely-positioned nodes resolve
/// parent-relative; everything else is root-relative.
pub fn resolve(node: &SceneRef, parent: Option<&SceneRef>, root: &SceneRef) -> Geometry {
    let (width, height) = node_size(node.as_ref());

    let (x, y) = if let Some(parent) = parent.filter(|_| node.absolutely_positioned()) {
        offset_in_parent(node.as_ref(), parent.as_ref())
    } else if Rc::ptr_eq(node, root) {
        (0.0, 0.0)
    } else {
        let (node_x, node_y) = absolute_position(node.as_ref());
        let (root_x, root_y) = absolute_position(root.as_ref());
        (node_x - root_x, node_y - root_y)
    };

    Geometry {
        x,
        y,
        width,
        height,
    }
}
