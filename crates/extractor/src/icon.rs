//! Icon/vector classification.
//!
//! Heuristic scoring over type, size, aspect ratio, and descendants. A node
//! classified as an icon becomes an opaque leaf: its subtree is exported as
//! one asset and never recursed into.

use crate::layout::{is_component, is_structural, is_vector};
use crate::options::IconThresholds;
use log::trace;
use scene::SceneNode;

fn aspect_ratio(width: f64, height: f64) -> f64 {
    let long = width.max(height);
    let short = width.min(height);
    if short <= 0.0 {
        f64::INFINITY
    } else {
        long / short
    }
}

fn near_square(width: f64, height: f64, slack: f64) -> bool {
    (width - height).abs() <= slack
}

fn fits(width: f64, height: f64, max: f64) -> bool {
    width <= max && height <= max
}

fn has_text_descendant(node: &dyn SceneNode) -> bool {
    node.children().iter().any(|child| {
        child.node_type() == "TEXT" || child.text().is_some() || has_text_descendant(child.as_ref())
    })
}

/// A container whose visible descendants are all vector primitives.
fn is_pure_vector_container(node: &dyn SceneNode) -> bool {
    if !is_structural(node.node_type()) {
        return false;
    }
    let mut seen_any = false;
    for child in node.children().iter().filter(|child| child.visible()) {
        seen_any = true;
        if !is_vector(child.node_type()) && !is_pure_vector_container(child.as_ref()) {
            return false;
        }
    }
    seen_any
}

/// Composite-icon merge: a small structural cluster of pure vectors with no
/// text anywhere inside.
fn merges_as_composite_icon(node: &dyn SceneNode, width: f64, height: f64, thresholds: &IconThresholds) -> bool {
    is_structural(node.node_type())
        && width <= thresholds.merge_width
        && height <= thresholds.merge_height
        && !has_text_descendant(node)
        && is_pure_vector_container(node)
}

/// Decide whether the node is an atomic icon/vector asset.
///
/// Rules are checked in priority order; the thresholds are heuristics and
/// live in [`IconThresholds`] so callers can tune them.
pub(crate) fn classify(node: &dyn SceneNode, width: f64, height: f64, thresholds: &IconThresholds) -> bool {
    if width <= 0.0 || height <= 0.0 {
        return false;
    }

    let node_type = node.node_type();
    let square = near_square(width, height, thresholds.square_slack);
    let small = fits(width, height, thresholds.max_size);
    let aspect_ok = aspect_ratio(width, height) <= thresholds.max_aspect;

    if merges_as_composite_icon(node, width, height, thresholds) {
        trace!("{}: composite vector cluster merged as icon", node.id());
        return true;
    }

    // Host asset flag, gated by size so flagged backgrounds stay containers.
    if node.is_asset()
        && ((small && aspect_ok)
            || (is_vector(node_type) && fits(width, height, thresholds.small_vector)))
    {
        return true;
    }

    if is_component(node_type) {
        return small && square;
    }

    if is_vector(node_type) {
        return fits(width, height, thresholds.small_vector) || (small && square && aspect_ok);
    }

    if is_structural(node_type) {
        return (small && square) || (small && is_pure_vector_container(node));
    }

    false
}
