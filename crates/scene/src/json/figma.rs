//! Figma dialect adapter.
//!
//! Field names follow the Figma plugin API: `layoutMode`,
//! `layoutSizingHorizontal`/`Vertical`, `layoutPositioning`,
//! `primaryAxisAlignItems`/`counterAxisAlignItems`, MIN/MAX/CENTER-style
//! constraint keywords, `absoluteRenderBounds` and `absoluteBoundingBox`.

use super::{affine_field, bool_field, has_visible_fills, num_field, rect_field, str_field};
use crate::{
    Anchor, Constraints, CrossAxisAlign, DataNode, Insets, LayoutMode, MainAxisAlign, NodeData,
    Point, SceneRef, Size, SizingMode, TextSpec,
};
use log::trace;
use serde_json::Value;

/// Build a scene tree from a Figma plugin node document.
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
    let node_type = str_field(value, "type").unwrap_or_default();
    if node_type.is_empty() {
        trace!("figma node without a type field, treating as unknown");
    }

    NodeData {
        id: str_field(value, "id").unwrap_or_default(),
        name: str_field(value, "name").unwrap_or_default(),
        node_type,
        visible: bool_field(value, "visible", true),
        position: Point {
            x: num_field(value, "x").unwrap_or(0.0),
            y: num_field(value, "y").unwrap_or(0.0),
        },
        size: size_of(value),
        render_bounds: rect_field(value, "absoluteRenderBounds"),
        bounding_box: rect_field(value, "absoluteBoundingBox"),
        relative_transform: affine_field(value, "relativeTransform"),
        layout_mode: layout_mode(value),
        sizing_horizontal: sizing(value, "layoutSizingHorizontal"),
        sizing_vertical: sizing(value, "layoutSizingVertical"),
        constraints: Constraints {
            horizontal: anchor(value, "horizontal"),
            vertical: anchor(value, "vertical"),
        },
        absolutely_positioned: str_field(value, "layoutPositioning").as_deref()
            == Some("ABSOLUTE"),
        item_spacing: num_field(value, "itemSpacing"),
        padding: padding(value),
        primary_axis_align: primary_align(value),
        counter_axis_align: counter_align(value),
        layout_align: str_field(value, "layoutAlign"),
        layout_grow: num_field(value, "layoutGrow").unwrap_or(0.0),
        is_asset: bool_field(value, "isAsset", false),
        main_component_id: value
            .get("mainComponent")
            .and_then(|component| str_field(component, "id")),
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
    match str_field(value, "layoutMode").as_deref() {
        Some("HORIZONTAL") => LayoutMode::Horizontal,
        Some("VERTICAL") => LayoutMode::Vertical,
        _ => LayoutMode::None,
    }
}

fn sizing(value: &Value, key: &str) -> SizingMode {
    match str_field(value, key).as_deref() {
        Some("HUG") => SizingMode::Hug,
        Some("FILL") => SizingMode::Fill,
        Some("FIXED") => SizingMode::Fixed,
        _ => SizingMode::None,
    }
}

fn anchor(value: &Value, axis_key: &str) -> Option<Anchor> {
    let keyword = value
        .get("constraints")
        .and_then(|constraints| str_field(constraints, axis_key))?;
    match keyword.as_str() {
        "MIN" => Some(Anchor::Min),
        "MAX" => Some(Anchor::Max),
        "CENTER" => Some(Anchor::Center),
        "STRETCH" => Some(Anchor::Stretch),
        "SCALE" => Some(Anchor::Scale),
        other => {
            trace!("unknown figma constraint keyword {other:?}");
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

fn primary_align(value: &Value) -> Option<MainAxisAlign> {
    match str_field(value, "primaryAxisAlignItems").as_deref() {
        Some("MIN") => Some(MainAxisAlign::Min),
        Some("CENTER") => Some(MainAxisAlign::Center),
        Some("MAX") => Some(MainAxisAlign::Max),
        Some("SPACE_BETWEEN") => Some(MainAxisAlign::SpaceBetween),
        _ => None,
    }
}

fn counter_align(value: &Value) -> Option<CrossAxisAlign> {
    match str_field(value, "counterAxisAlignItems").as_deref() {
        Some("MIN") => Some(CrossAxisAlign::Min),
        Some("CENTER") => Some(CrossAxisAlign::Center),
        Some("MAX") => Some(CrossAxisAlign::Max),
        Some("BASELINE") => Some(CrossAxisAlign::Baseline),
        _ => None,
    }
}

fn text_spec(value: &Value) -> Option<TextSpec> {
    let characters = str_field(value, "characters")?;
    Some(TextSpec {
        characters,
        font_size: num_field(value, "fontSize"),
        font_family: value
            .get("fontName")
            .and_then(|font| str_field(font, "family")),
        font_weight: num_field(value, "fontWeight"),
        text_align: str_field(value, "textAlignHorizontal"),
        text_decoration: str_field(value, "textDecoration"),
        // Line height arrives either as a bare number or a {value, unit} pair.
        line_height: num_field(value, "lineHeight").or_else(|| {
            value
                .get("lineHeight")
                .and_then(|height| num_field(height, "value"))
        }),
    })
}
