//! Repeat compression.
//!
//! Consecutive siblings that are structurally and content-identical collapse
//! to one extracted sample plus a repeat count. Non-consecutive repeats are
//! left alone: literal list/grid repetition is always contiguous in a scene
//! graph, and only that case pays for compression.

use scene::SceneNode;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A maximal run of equal-signature consecutive children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Run {
    pub start: usize,
    pub len: usize,
}

/// Structural/content signature of one node.
///
/// Identity fields (id, position) are deliberately excluded; two siblings
/// match when their type, name, component binding, text content, and child
/// structure all match.
pub(crate) fn signature(node: &dyn SceneNode) -> u64 {
    let mut hasher = DefaultHasher::new();
    hash_node(node, &mut hasher);
    hasher.finish()
}

fn hash_node(node: &dyn SceneNode, hasher: &mut impl Hasher) {
    node.node_type().hash(hasher);
    node.name().hash(hasher);
    node.visible().hash(hasher);
    node.main_component_id().hash(hasher);
    if let Some(text) = node.text() {
        text.characters.hash(hasher);
    }
    let children = node.children();
    children.len().hash(hasher);
    for child in children {
        hash_node(child.as_ref(), hasher);
    }
}

/// Split a signature sequence into maximal runs (single elements included).
pub(crate) fn runs(signatures: &[u64]) -> Vec<Run> {
    let mut out = Vec::new();
    let mut start = 0;
    for index in 1..=signatures.len() {
        if index == signatures.len() || signatures[index] != signatures[start] {
            out.push(Run {
                start,
                len: index - start,
            });
            start = index;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene::{NodeBuilder, SceneRef};

    fn list_item(id: &str, label: &str) -> SceneRef {
        NodeBuilder::new("INSTANCE")
            .id(id)
            .name("ListItem")
            .main_component("c:1")
            .child(NodeBuilder::new("TEXT").characters(label).build())
            .build()
    }

    #[test]
    fn identical_items_share_a_signature_regardless_of_id() {
        let first = list_item("1", "row");
        let second = list_item("2", "row");
        assert_eq!(signature(first.as_ref()), signature(second.as_ref()));
    }

    #[test]
    fn differing_text_breaks_the_signature() {
        let first = list_item("1", "alpha");
        let second = list_item("2", "beta");
        assert_ne!(signature(first.as_ref()), signature(second.as_ref()));
    }

    #[test]
    fn runs_are_maximal_and_consecutive_only() {
        let found = runs(&[7, 7, 7, 3, 7, 7]);
        assert_eq!(
            found,
            vec![
                Run { start: 0, len: 3 },
                Run { start: 3, len: 1 },
                Run { start: 4, len: 2 },
            ]
        );
    }

    #[test]
    fn empty_input_has_no_runs() {
        assert!(runs(&[]).is_empty());
    }
}
