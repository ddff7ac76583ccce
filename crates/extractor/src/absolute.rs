//! Absolute-position style resolution.
//!
//! Turns a parent-relative offset plus per-axis anchor constraints into
//! `position`/`left`/`right`/`top`/`bottom`/`transform` declarations.

use crate::units::{percent, px};
use scene::{Anchor, SceneNode};
use uinode::StyleMap;

/// Pixel inputs for one node: its offset and size, and the parent size.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AbsoluteInputs {
    pub offset_x: f64,
    pub offset_y: f64,
    pub width: f64,
    pub height: f64,
    pub parent_width: f64,
    pub parent_height: f64,
}

/// Edge distances along one axis.
struct AxisEdges {
    start: f64,
    end: f64,
    size: f64,
    parent_size: f64,
}

/// Which CSS properties name the two edges of an axis.
struct AxisKeys {
    start: &'static str,
    end: &'static str,
}

const HORIZONTAL_KEYS: AxisKeys = AxisKeys {
    start: "left",
    end: "right",
};
const VERTICAL_KEYS: AxisKeys = AxisKeys {
    start: "top",
    end: "bottom",
};

/// Emit the chosen edge pair for one axis. Returns whether the axis is
/// center-anchored (and thus needs a translate compensation).
fn apply_axis(
    styles: &mut StyleMap,
    keys: &AxisKeys,
    edges: &AxisEdges,
    anchor: Option<Anchor>,
) -> bool {
    match anchor {
        Some(Anchor::Max) => {
            styles.insert(keys.end.to_owned(), px(edges.end));
        }
        Some(Anchor::Center) => {
            // Δ is the distance between the node center and the parent center.
            let delta = edges.start + edges.size / 2.0 - edges.parent_size / 2.0;
            let value = if delta == 0.0 {
                "50%".to_owned()
            } else if delta < 0.0 {
                format!("calc(50% - {})", px(-delta))
            } else {
                format!("calc(50% + {})", px(delta))
            };
            styles.insert(keys.start.to_owned(), value);
            return true;
        }
        Some(Anchor::Stretch) => {
            styles.insert(keys.start.to_owned(), px(edges.start));
            styles.insert(keys.end.to_owned(), px(edges.end));
        }
        Some(Anchor::Scale) => {
            styles.insert(keys.start.to_owned(), percent(edges.start / edges.parent_size));
            styles.insert(keys.end.to_owned(), percent(edges.end / edges.parent_size));
        }
        Some(Anchor::Min) | None => {
            styles.insert(keys.start.to_owned(), px(edges.start));
        }
    }
    false
}

/// Derive the absolute-position style fragment for a node.
///
/// A zero-sized parent degrades to bare `position: absolute`; if an axis ends
/// up with neither edge emitted, its start edge is used as the safety net.
pub(crate) fn absolute_styles(node: &dyn SceneNode, inputs: &AbsoluteInputs) -> StyleMap {
    let mut styles = StyleMap::new();
    styles.insert("position".to_owned(), "absolute".to_owned());

    if inputs.parent_width <= 0.0 || inputs.parent_height <= 0.0 {
        return styles;
    }

    let constraints = node.constraints();
    let horizontal = AxisEdges {
        start: inputs.offset_x,
        end: inputs.parent_width - inputs.width - inputs.offset_x,
        size: inputs.width,
        parent_size: inputs.parent_width,
    };
    let vertical = AxisEdges {
        start: inputs.offset_y,
        end: inputs.parent_height - inputs.height - inputs.offset_y,
        size: inputs.height,
        parent_size: inputs.parent_height,
    };

    let center_x = apply_axis(&mut styles, &HORIZONTAL_KEYS, &horizontal, constraints.horizontal);
    let center_y = apply_axis(&mut styles, &VERTICAL_KEYS, &vertical, constraints.vertical);

    match (center_x, center_y) {
        (true, true) => {
            styles.insert("transform".to_owned(), "translate(-50%, -50%)".to_owned());
        }
        (true, false) => {
            styles.insert("transform".to_owned(), "translateX(-50%)".to_owned());
        }
        (false, true) => {
            styles.insert("transform".to_owned(), "translateY(-50%)".to_owned());
        }
        (false, false) => {}
    }

    if !styles.contains_key("left") && !styles.contains_key("right") {
        styles.insert("left".to_owned(), px(horizontal.start));
    }
    if !styles.contains_key("top") && !styles.contains_key("bottom") {
        styles.insert("top".to_owned(), px(vertical.start));
    }

    styles
}
