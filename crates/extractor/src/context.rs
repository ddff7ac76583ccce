//! Per-call extraction context.
//!
//! One context is threaded through the recursive walk instead of module-level
//! state, so concurrent extraction calls stay independent and testable. The
//! interior mutability is `RefCell`: the walk is single-threaded cooperative
//! and no borrow is held across a suspension point.

use crate::collaborators::{ComponentCatalog, StyleResolver};
use crate::options::ExtractOptions;
use log::trace;
use scene::SceneNode;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use uinode::{IconResource, StyleMap};

/// State shared across one extraction call.
pub struct ExtractContext<'call> {
    pub(crate) resolver: &'call dyn StyleResolver,
    pub(crate) catalog: &'call dyn ComponentCatalog,
    pub(crate) options: ExtractOptions,
    /// Append-only icon registry; each native id is written at most once
    /// because every node is visited exactly once.
    resources: RefCell<BTreeMap<String, IconResource>>,
    /// CSS maps cached per main component id, so repeated instances never
    /// re-run style resolution.
    css_cache: RefCell<HashMap<String, StyleMap>>,
}

impl<'call> ExtractContext<'call> {
    #[must_use]
    pub fn new(
        resolver: &'call dyn StyleResolver,
        catalog: &'call dyn ComponentCatalog,
        options: ExtractOptions,
    ) -> Self {
        Self {
            resolver,
            catalog,
            options,
            resources: RefCell::new(BTreeMap::new()),
            css_cache: RefCell::new(HashMap::new()),
        }
    }

    /// Register a node classified as an icon, generating a registry-unique
    /// export file name.
    pub(crate) fn register_icon(&self, node: &dyn SceneNode) {
        let mut registry = self.resources.borrow_mut();
        let file_name = unique_file_name(&registry, node.name());
        trace!("registering icon {} as {file_name}", node.id());
        registry.insert(
            node.id().to_owned(),
            IconResource {
                node_id: node.id().to_owned(),
                node_type: node.node_type().to_owned(),
                file_name,
            },
        );
    }

    /// Hand the registry to the caller, leaving the context empty.
    pub(crate) fn take_resources(&self) -> BTreeMap<String, IconResource> {
        self.resources.take()
    }

    pub(crate) fn cached_css(&self, component_id: &str) -> Option<StyleMap> {
        self.css_cache.borrow().get(component_id).cloned()
    }

    pub(crate) fn store_css(&self, component_id: &str, styles: StyleMap) {
        self.css_cache
            .borrow_mut()
            .insert(component_id.to_owned(), styles);
    }
}

/// Sanitize a node name into a file name unique within the registry,
/// suffixing on collision.
fn unique_file_name(registry: &BTreeMap<String, IconResource>, name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|letter| {
            if letter.is_ascii_alphanumeric() {
                letter.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let stem = stem.trim_matches('-');
    let stem = if stem.is_empty() { "icon" } else { stem };

    let taken = |candidate: &str| {
        registry
            .values()
            .any(|resource| resource.file_name == candidate)
    };

    let mut candidate = format!("{stem}.svg");
    let mut suffix = 2_u32;
    while taken(&candidate) {
        candidate = format!("{stem}-{suffix}.svg");
        suffix += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{NullStyleResolver, StaticCatalog};
    use scene::{NodeBuilder, SceneRef};

    fn icon_node(id: &str, name: &str) -> SceneRef {
        NodeBuilder::new("VECTOR").id(id).name(name).build()
    }

    #[test]
    fn file_names_are_sanitized_and_deduplicated() {
        let resolver = NullStyleResolver;
        let catalog = StaticCatalog::new();
        let ctx = ExtractContext::new(&resolver, &catalog, ExtractOptions::default());

        ctx.register_icon(icon_node("1", "Arrow / Left").as_ref());
        ctx.register_icon(icon_node("2", "Arrow / Left").as_ref());
        ctx.register_icon(icon_node("3", "").as_ref());

        let resources = ctx.take_resources();
        assert_eq!(resources["1"].file_name, "arrow---left.svg");
        assert_eq!(resources["2"].file_name, "arrow---left-2.svg");
        assert_eq!(resources["3"].file_name, "icon.svg");
    }

    #[test]
    fn registry_is_drained_on_take() {
        let resolver = NullStyleResolver;
        let catalog = StaticCatalog::new();
        let ctx = ExtractContext::new(&resolver, &catalog, ExtractOptions::default());
        ctx.register_icon(icon_node("1", "dot").as_ref());
        assert_eq!(ctx.take_resources().len(), 1);
        assert!(ctx.take_resources().is_empty());
    }
}
