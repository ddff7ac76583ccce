//! MasterGo dialect adapter.
//!
//! The second host tool names the same concepts differently: `flexMode`
//! instead of `layoutMode`, `flexGrow`, edge-keyword constraints
//! (LEFT/RIGHT/TOP/BOTTOM/LEFT_RIGHT/TOP_BOTTOM), `mainAxisSizingType`/
//! `crossAxisSizingType`, and an `isIcon` asset flag. No render bounds are
//! exposed, only the absolute bounding box.

use super::{affine_field, bool_field, has_visible_fills, num_field, rect_field, str_field};
use crate::{
    Anchor, Axis, Constraints, CrossAxisAlign, DataNode, Insets, LayoutMode, MainAxisAlign,
    NodeData, Point, SceneRef, Size, SizingMode, TextSpec,
};
use log::trace;
use serde_json::Value;

/// Build a scene tree from a MasterGo plugin node document.
#[must_use]
pub fn parse(value: &Value) -> SceneRef {
    let children = value
        .get("children")
        .and_then(Value::as_array)
        .map(|nodes| nodes.iter().map(parse).collect())
        .unwrap_or_default();

    DataNode::shared(node_data(value), children)
}

fn node_data(value: &Value) -> NodeData {
    let mode = layout_mode(value);

    NodeData {
        id: str_field(value, "id").unwrap_or_default(),
        name: str_field(value, "name").unwrap_or_default(),
        node_type: str_field(value, "type").unwrap_or_default(),
        visible: bool_field(value, "visible", true),
        position: Point {
            x: num_field(value, "x").unwrap_or(0.0),
            y: num_field(value, "y").unwrap_or(0.0),
        },
        size: size_of(value),
        render_bounds: None,
        bounding_box: rect_field(value, "absoluteBoundingBox"),
        relative_transform: affine_field(value, "relativeTransform"),
        layout_mode: mode,
        sizing_horizontal: sizing(value, mode, Axis::Horizontal),
        sizing_vertical: sizing(value, mode, Axis::Vertical),
        constraints: Constraints {
            horizontal: anchor(value, "horizontal", Axis::Horizontal),
            vertical: anchor(value, "vertical", Axis::Vertical),
        },
        absolutely_positioned: bool_field(value, "absolutePosition", false),
        item_spacing: num_field(value, "itemSpacing"),
        padding: padding(value),
        primary_axis_align: main_align(value),
        counter_axis_align: cross_align(value),
        layout_align: str_field(value, "layoutAlign"),
        layout_grow: num_field(value, "flexGrow").unwrap_or(0.0),
        is_asset: bool_field(value, "isIcon", false),
        main_component_id: str_field(value, "componentId"),
        has_fills: has_visible_fills(value),
        text: text_spec(value),
    }
}

fn size_of(value: &Value) -> Option<Size> {
    Some(Size {
        width: num_field(value, "width")?,
        height: num_field(value, "height")?,
    })
}

fn layout_mode(value: &Value) -> LayoutMode {
    match str_field(value, "flexMode").as_deref() {
        Some("HORIZONTAL") => LayoutMode::Horizontal,
        Some("VERTICAL") => LayoutMode::Vertical,
        _ => LayoutMode::None,
    }
}

/// Sizing is declared per layout axis (`mainAxisSizingType` /
/// `crossAxisSizingType`) and mapped back to screen axes here.
fn sizing(value: &Value, mode: LayoutMode, axis: Axis) -> SizingMode {
    let key = match (mode, axis) {
        (LayoutMode::Horizontal, Axis::Horizontal) | (LayoutMode::Vertical, Axis::Vertical) => {
            "mainAxisSizingType"
        }
        (LayoutMode::Horizontal, Axis::Vertical) | (LayoutMode::Vertical, Axis::Horizontal) => {
            "crossAxisSizingType"
        }
        (LayoutMode::None, _) => return SizingMode::None,
    };
    match str_field(value, key).as_deref() {
        Some("AUTO") => SizingMode::Hug,
        Some("STRETCH") => SizingMode::Fill,
        Some("FIXED") => SizingMode::Fixed,
        _ => SizingMode::None,
    }
}

fn anchor(value: &Value, axis_key: &str, axis: Axis) -> Option<Anchor> {
    let keyword = value
        .get("constraints")
        .and_then(|constraints| str_field(constraints, axis_key))?;
    match (keyword.as_str(), axis) {
        ("LEFT", Axis::Horizontal) | ("TOP", Axis::Vertical) => Some(Anchor::Min),
        ("RIGHT", Axis::Horizontal) | ("BOTTOM", Axis::Vertical) => Some(Anchor::Max),
        ("CENTER", _) => Some(Anchor::Center),
        ("LEFT_RIGHT", Axis::Horizontal) | ("TOP_BOTTOM", Axis::Vertical) => Some(Anchor::Stretch),
        ("SCALE", _) => Some(Anchor::Scale),
        (other, _) => {
            trace!("unknown mastergo constraint keyword {other:?}");
            None
        }
    }
}

fn padding(value: &Value) -> Option<Insets> {
    let insets = Insets {
        top: num_field(value, "paddingTop").unwrap_or(0.0),
        right: num_field(value, "paddingRight").unwrap_or(0.0),
        bottom: num_field(value, "paddingBottom").unwrap_or(0.0),
        left: num_field(value, "paddingLeft").unwrap_or(0.0),
    };
    (!insets.is_zero()).then_some(insets)
}

fn main_align(value: &Value) -> Option<MainAxisAlign> {
    match str_field(value, "mainAxisAlignItems").as_deref() {
        Some("FLEX_START") => Some(MainAxisAlign::Min),
        Some("CENTER") => Some(MainAxisAlign::Center),
        Some("FLEX_END") => Some(MainAxisAlign::Max),
        Some("SPACE_BETWEEN") => Some(MainAxisAlign::SpaceBetween),
        _ => None,
    }
}

fn cross_align(value: &Value) -> Option<CrossAxisAlign> {
    match str_field(value, "crossAxisAlignItems").as_deref() {
        Some("FLEX_START") => Some(CrossAxisAlign::Min),
        Some("CENTER") => Some(CrossAxisAlign::Center),
        Some("FLEX_END") => Some(CrossAxisAlign::Max),
        Some("BASELINE") => Some(CrossAxisAlign::Baseline),
        _ => None,
    }
}

fn text_spec(value: &Value) -> Option<TextSpec> {
    let characters = str_field(value, "characters")?;
    let style = value.get("textStyle");
    let style_num = |key: &str| style.and_then(|inner| num_field(inner, key));
    let style_str = |key: &str| style.and_then(|inner| str_field(inner, key));
    Some(TextSpec {
        characters,
        font_size: style_num("fontSize"),
        font_family: style_str("fontFamily"),
        font_weight: style_num("fontWeight"),
        text_align: style_str("textAlign"),
        text_decoration: style_str("textDecoration"),
        line_height: style_num("lineHeight"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_flex_mode_and_axis_relative_sizing() {
        let node = parse(&json!({
            "id": "7",
            "type": "FRAME",
            "flexMode": "VERTICAL",
            "mainAxisSizingType": "AUTO",
            "crossAxisSizingType": "FIXED",
            "flexGrow": 1.0,
            "itemSpacing": 12.0,
        }));
        assert_eq!(node.layout_mode(), LayoutMode::Vertical);
        // Vertical container: main axis is vertical, cross is horizontal.
        assert_eq!(node.sizing(Axis::Vertical), SizingMode::Hug);
        assert_eq!(node.sizing(Axis::Horizontal), SizingMode::Fixed);
        assert_eq!(node.layout_grow(), 1.0);
    }

    #[test]
    fn maps_edge_keyword_constraints() {
        let node = parse(&json!({
            "id": "8",
            "type": "RECTANGLE",
            "constraints": {"horizontal": "LEFT_RIGHT", "vertical": "BOTTOM"},
            "absolutePosition": true,
            "isIcon": true,
        }));
        assert_eq!(node.constraints().horizontal, Some(Anchor::Stretch));
        assert_eq!(node.constraints().vertical, Some(Anchor::Max));
        assert!(node.absolutely_positioned());
        assert!(node.is_asset());
    }

    #[test]
    fn reads_text_style_block() {
        let node = parse(&json!({
            "id": "9",
            "type": "TEXT",
            "characters": "label",
            "textStyle": {"fontSize": 14.0, "fontFamily": "Inter", "textAlign": "CENTER"},
        }));
        let text = node.text().cloned().unwrap_or_default();
        assert_eq!(text.characters, "label");
        assert_eq!(text.font_size, Some(14.0));
        assert_eq!(text.font_family.as_deref(), Some("Inter"));
    }
}
