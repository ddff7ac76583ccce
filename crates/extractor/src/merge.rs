//! Style merging.
//!
//! Final map = flex-derived baseline, overridden by serialized CSS,
//! overridden by absolute-position styles. Positioning must never be lost to
//! generic serialization, and explicit customization beats inference.

use crate::units::px;
use scene::Axis;
use uinode::{EdgeValues, StyleMap, UINode};

/// Merge the three style sources under the fixed precedence order.
pub(crate) fn merge(flex: StyleMap, css: StyleMap, absolute: StyleMap) -> StyleMap {
    let mut merged = flex;
    merged.extend(css);
    merged.extend(absolute);
    merged
}

/// Remove `width`/`height` declarations from nodes that do not require
/// definite sizing.
pub(crate) fn strip_indefinite_size(styles: &mut StyleMap, requires_definite: bool) {
    if !requires_definite {
        styles.remove("width");
        styles.remove("height");
    }
}

/// Trailing-edge margin as an [`EdgeValues`] fragment.
pub(crate) fn trailing_edge(axis: Axis, gap: f64) -> EdgeValues {
    match axis {
        Axis::Horizontal => EdgeValues {
            right: Some(gap),
            ..EdgeValues::default()
        },
        Axis::Vertical => EdgeValues {
            bottom: Some(gap),
            ..EdgeValues::default()
        },
    }
}

/// Fold `layout.margin` into `customStyle` as `margin-*` declarations and
/// clear the structured field, leaving exactly one margin representation.
pub(crate) fn fold_margin(node: &mut UINode) {
    let Some(margin) = node.layout.margin.take() else {
        return;
    };
    let edges = [
        ("margin-top", margin.top),
        ("margin-right", margin.right),
        ("margin-bottom", margin.bottom),
        ("margin-left", margin.left),
    ];
    for (key, value) in edges {
        if let Some(value) = value {
            node.custom_style.insert(key.to_owned(), px(value));
        }
    }
}
