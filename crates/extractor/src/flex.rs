//! Flex style derivation from native auto-layout metadata.
//!
//! Container-role styles go on auto-layout parents, item-role styles on their
//! children. Defaults are omitted; the fixed enum mappings below are the full
//! translation tables.

use log::debug;
use scene::{CrossAxisAlign, LayoutMode, MainAxisAlign, SceneNode};
use uinode::StyleMap;

fn justify_keyword(align: MainAxisAlign) -> &'static str {
    match align {
        MainAxisAlign::Min => "flex-start",
        MainAxisAlign::Center => "center",
        MainAxisAlign::Max => "flex-end",
        MainAxisAlign::SpaceBetween => "space-between",
    }
}

fn align_keyword(align: CrossAxisAlign) -> &'static str {
    match align {
        CrossAxisAlign::Min => "flex-start",
        CrossAxisAlign::Center => "center",
        CrossAxisAlign::Max => "flex-end",
        CrossAxisAlign::Baseline => "baseline",
    }
}

/// Container-role flex styles, empty unless the node itself is an
/// auto-layout container.
pub(crate) fn container_styles(node: &dyn SceneNode) -> StyleMap {
    let mut styles = StyleMap::new();
    let mode = node.layout_mode();
    if mode == LayoutMode::None {
        return styles;
    }

    styles.insert("display".to_owned(), "flex".to_owned());
    if mode == LayoutMode::Vertical {
        styles.insert("flex-direction".to_owned(), "column".to_owned());
    }
    if let Some(align) = node.primary_axis_align()
        && align != MainAxisAlign::Min
    {
        styles.insert(
            "justify-content".to_owned(),
            justify_keyword(align).to_owned(),
        );
    }
    if let Some(align) = node.counter_axis_align()
        && align != CrossAxisAlign::Min
    {
        styles.insert("align-items".to_owned(), align_keyword(align).to_owned());
    }
    debug!("container flex styles for {}: {styles:?}", node.id());
    styles
}

/// Item-role flex styles, empty unless the parent is an auto-layout
/// container. Absolutely-positioned nodes never receive item styles.
pub(crate) fn item_styles(node: &dyn SceneNode, parent: &dyn SceneNode) -> StyleMap {
    let mut styles = StyleMap::new();
    if parent.layout_mode() == LayoutMode::None || node.absolutely_positioned() {
        return styles;
    }

    if node.layout_grow() > 0.0 {
        styles.insert("flex-grow".to_owned(), "1".to_owned());
    }
    // `align-self` only when overriding the parent's cross-axis alignment;
    // the implicit `auto` is omitted.
    match node.layout_align() {
        Some("STRETCH") => {
            styles.insert("align-self".to_owned(), "stretch".to_owned());
        }
        Some("MIN") => {
            styles.insert("align-self".to_owned(), "flex-start".to_owned());
        }
        Some("CENTER") => {
            styles.insert("align-self".to_owned(), "center".to_owned());
        }
        Some("MAX") => {
            styles.insert("align-self".to_owned(), "flex-end".to_owned());
        }
        _ => {}
    }
    styles
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene::NodeBuilder;

    #[test]
    fn row_with_default_alignment_emits_display_only() {
        let node = NodeBuilder::new("FRAME")
            .layout_mode(LayoutMode::Horizontal)
            .primary_align(MainAxisAlign::Min)
            .counter_align(CrossAxisAlign::Min)
            .build();
        let styles = container_styles(node.as_ref());
        assert_eq!(styles.get("display").map(String::as_str), Some("flex"));
        assert!(!styles.contains_key("flex-direction"));
        assert!(!styles.contains_key("justify-content"));
        assert!(!styles.contains_key("align-items"));
    }

    #[test]
    fn column_with_alignment_maps_to_flex_keywords() {
        let node = NodeBuilder::new("FRAME")
            .layout_mode(LayoutMode::Vertical)
            .primary_align(MainAxisAlign::SpaceBetween)
            .counter_align(CrossAxisAlign::Center)
            .build();
        let styles = container_styles(node.as_ref());
        assert_eq!(
            styles.get("flex-direction").map(String::as_str),
            Some("column")
        );
        assert_eq!(
            styles.get("justify-content").map(String::as_str),
            Some("space-between")
        );
        assert_eq!(styles.get("align-items").map(String::as_str), Some("center"));
    }

    #[test]
    fn non_layout_node_derives_nothing() {
        let node = NodeBuilder::new("GROUP").build();
        assert!(container_styles(node.as_ref()).is_empty());
    }

    #[test]
    fn grown_child_gets_flex_grow_one() {
        let parent = NodeBuilder::new("FRAME")
            .layout_mode(LayoutMode::Horizontal)
            .build();
        let child = NodeBuilder::new("TEXT").layout_grow(1.0).build();
        let styles = item_styles(child.as_ref(), parent.as_ref());
        assert_eq!(styles.get("flex-grow").map(String::as_str), Some("1"));
    }

    #[test]
    fn stretch_override_emits_align_self() {
        let parent = NodeBuilder::new("FRAME")
            .layout_mode(LayoutMode::Vertical)
            .build();
        let child = NodeBuilder::new("FRAME").layout_align("STRETCH").build();
        let styles = item_styles(child.as_ref(), parent.as_ref());
        assert_eq!(styles.get("align-self").map(String::as_str), Some("stretch"));
    }

    #[test]
    fn absolute_child_gets_no_item_styles() {
        let parent = NodeBuilder::new("FRAME")
            .layout_mode(LayoutMode::Horizontal)
            .build();
        let child = NodeBuilder::new("FRAME")
            .layout_grow(1.0)
            .layout_align("STRETCH")
            .absolute()
            .build();
        assert!(item_styles(child.as_ref(), parent.as_ref()).is_empty());
    }

    #[test]
    fn inherit_alignment_is_omitted() {
        let parent = NodeBuilder::new("FRAME")
            .layout_mode(LayoutMode::Horizontal)
            .build();
        let child = NodeBuilder::new("TEXT").layout_align("INHERIT").build();
        assert!(item_styles(child.as_ref(), parent.as_ref()).is_empty());
    }
}
