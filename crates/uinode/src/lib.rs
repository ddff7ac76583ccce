//! Canonical UI node model — the platform-independent output of extraction.
//!
//! Downstream consumers (style serializer, codegen worker, prompt pipeline)
//! receive this tree as JSON; the serde attributes here define that contract.

#![forbid(unsafe_code)]

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// CSS-equivalent declarations keyed by property name.
///
/// A `BTreeMap` keeps serialized output deterministic across runs.
pub type StyleMap = BTreeMap<String, String>;

/// Node type string used for atomic icon/vector assets.
pub const ICON_TYPE: &str = "ICON";

/// Layout mode of a container, mirroring the host tool's auto-layout axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    /// No auto-layout; children are freely positioned.
    #[default]
    None,
    /// Flex-like row layout.
    Horizontal,
    /// Flex-like column layout.
    Vertical,
}

/// Positioning scheme for nodes taken out of the parent's layout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Positioning {
    Absolute,
}

/// A definite pixel size or the `"100%"` fill sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// Fixed size in pixels.
    Px(f64),
    /// Fill the parent along this axis; serialized as the literal `"100%"`.
    Percent,
}

impl Dimension {
    /// The pixel value, if this dimension is definite.
    #[inline]
    #[must_use]
    pub const fn as_px(&self) -> Option<f64> {
        match self {
            Self::Px(value) => Some(*value),
            Self::Percent => None,
        }
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Px(value) => serializer.serialize_f64(*value),
            Self::Percent => serializer.serialize_str("100%"),
        }
    }
}

/// Per-edge numeric values for padding or margin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EdgeValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
}

impl EdgeValues {
    /// Whether no edge carries a value.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }
}

/// Resolved geometry and layout metadata for one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Position relative to the extraction root, or to the nearest positioned
    /// ancestor for absolutely-positioned nodes. Stripped inside auto-layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    pub layout_mode: LayoutMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positioning: Option<Positioning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<EdgeValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<EdgeValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_align: Option<String>,
}

/// Text content and font metrics for text leaves.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    pub characters: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
}

/// Binding to a pre-registered reusable component.
///
/// Presence of a binding short-circuits recursion into the node's children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentBinding {
    /// Component name as registered in the mapping catalog.
    pub component: String,
    /// Import path or library the component comes from, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
}

/// A run of structurally identical consecutive siblings collapsed onto one
/// sample node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatInfo {
    /// Total run length, sample included.
    pub repeat_count: usize,
    /// Native ids of every run member, sample first.
    pub repeat_node_ids: Vec<String>,
}

/// Canonical output unit: one node of the normalized UI tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UINode {
    /// Native node id; retained only for icon/asset correlation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Native node name; stripped by the tree-shape optimizer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Native type string, or the synthetic [`ICON_TYPE`].
    #[serde(rename = "type")]
    pub node_type: String,
    pub layout: Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextContent>,
    /// Single source of truth for presentation after style merging.
    #[serde(rename = "customStyle", skip_serializing_if = "StyleMap::is_empty")]
    pub custom_style: StyleMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_component: Option<ComponentBinding>,
    #[serde(rename = "repeatInfo", skip_serializing_if = "Option::is_none")]
    pub repeat: Option<RepeatInfo>,
    /// Ordered children in native z/DOM order. Absent for icon nodes and
    /// custom-component bindings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<UINode>>,
}

/// An icon/vector asset scheduled for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconResource {
    /// Native id of the classified node, for per-node export calls.
    pub node_id: String,
    /// Native type of the classified node.
    pub node_type: String,
    /// Registry-unique export file name.
    pub file_name: String,
}

/// Result of one extraction call over a selection of root nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractOutput {
    pub nodes: Vec<UINode>,
    /// Icon registry keyed by native node id; built fresh per call.
    pub resources: BTreeMap<String, IconResource>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn to_value(node: &UINode) -> Value {
        serde_json::to_value(node).unwrap_or(Value::Null)
    }

    #[test]
    /// The width sentinel serializes as the literal string, pixel widths as numbers.
    fn dimension_serializes_as_number_or_sentinel() {
        let mut node = UINode {
            node_type: "FRAME".into(),
            ..UINode::default()
        };
        node.layout.width = Some(Dimension::Px(24.0));
        node.layout.height = Some(Dimension::Percent);
        let value = to_value(&node);
        assert_eq!(value["layout"]["width"], json!(24.0));
        assert_eq!(value["layout"]["height"], json!("100%"));
    }

    #[test]
    fn optional_fields_are_omitted_when_unset() {
        let node = UINode {
            node_type: "TEXT".into(),
            ..UINode::default()
        };
        let value = to_value(&node);
        assert!(value.get("id").is_none());
        assert!(value.get("customStyle").is_none());
        assert!(value.get("children").is_none());
        assert_eq!(value["layout"]["layoutMode"], json!("NONE"));
    }

    #[test]
    fn positioning_serializes_lowercase() {
        let mut node = UINode {
            node_type: "RECTANGLE".into(),
            ..UINode::default()
        };
        node.layout.positioning = Some(Positioning::Absolute);
        assert_eq!(to_value(&node)["layout"]["positioning"], json!("absolute"));
    }

    #[test]
    fn repeat_info_keeps_sample_first() {
        let mut node = UINode {
            node_type: "INSTANCE".into(),
            ..UINode::default()
        };
        node.repeat = Some(RepeatInfo {
            repeat_count: 3,
            repeat_node_ids: vec!["1:1".into(), "1:2".into(), "1:3".into()],
        });
        let value = to_value(&node);
        assert_eq!(value["repeatInfo"]["repeatCount"], json!(3));
        assert_eq!(value["repeatInfo"]["repeatNodeIds"][0], json!("1:1"));
    }
}
