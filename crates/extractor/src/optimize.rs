//! Tree-shape optimization.
//!
//! A final bottom-up pass that strips data made redundant by auto-layout or
//! already carried by `customStyle`. Running it twice yields the same tree as
//! running it once.

use uinode::{ICON_TYPE, LayoutMode, StyleMap, UINode};

/// Declarations equal to the browser default carry no information.
const STYLE_DEFAULTS: &[(&str, &str)] = &[
    ("display", "block"),
    ("position", "static"),
    ("flex-direction", "row"),
    ("justify-content", "flex-start"),
    ("align-items", "normal"),
    ("align-self", "auto"),
    ("flex-grow", "0"),
    ("flex-shrink", "1"),
    ("flex-wrap", "nowrap"),
    ("opacity", "1"),
    ("margin", "0"),
    ("padding", "0"),
    ("text-decoration", "none"),
    ("background", "none"),
    ("border", "none"),
];

fn drop_default_declarations(styles: &mut StyleMap) {
    for (key, default) in STYLE_DEFAULTS {
        if styles.get(*key).map(String::as_str) == Some(*default) {
            styles.remove(*key);
        }
    }
}

fn has_declaration_with_prefix(styles: &StyleMap, prefix: &str) -> bool {
    styles
        .keys()
        .any(|key| key == prefix || key.starts_with(&format!("{prefix}-")))
}

/// Optimize one node and its subtree.
///
/// `inside_auto_layout` refers to the node's parent: position is implicit in
/// DOM order there, so `x`/`y` are dropped.
pub(crate) fn optimize(node: &mut UINode, inside_auto_layout: bool) {
    let child_flag = node.layout.layout_mode != LayoutMode::None;
    if let Some(children) = node.children.as_mut() {
        for child in children {
            optimize(child, child_flag);
        }
    }

    let is_icon = node.node_type == ICON_TYPE;

    if inside_auto_layout || is_icon {
        node.layout.x = None;
        node.layout.y = None;
    }
    if !is_icon {
        node.id = None;
    }
    node.name = None;

    drop_default_declarations(&mut node.custom_style);

    if has_declaration_with_prefix(&node.custom_style, "padding") {
        node.layout.padding = None;
    }
    if has_declaration_with_prefix(&node.custom_style, "margin") {
        node.layout.margin = None;
    }
}
