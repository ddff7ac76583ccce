//! Interfaces to external collaborators.
//!
//! The engine consumes a CSS serializer and a component-mapping catalog but
//! owns neither; these traits are the seam. Test doubles live here as well so
//! extraction can run without a host platform.

use anyhow::Result;
use async_trait::async_trait;
use scene::SceneRef;
use std::collections::HashMap;
use uinode::{ComponentBinding, StyleMap};

/// Serializes a native node's presentation into CSS-equivalent declarations.
///
/// The only suspension point of the tree walk. Failures are caught per node
/// and degrade to the engine's derived styles.
#[async_trait(?Send)]
pub trait StyleResolver {
    /// Resolve the CSS declaration map for one node.
    ///
    /// # Errors
    /// Returns an error when the host-side serialization fails; the walker
    /// logs it and continues with derived styles only.
    async fn css(&self, node: &SceneRef) -> Result<StyleMap>;
}

/// Looks up pre-registered reusable components by node name.
pub trait ComponentCatalog {
    /// Mapping for the given node name, if one was registered.
    fn mapping(&self, name: &str) -> Option<ComponentBinding>;
}

/// Resolver that yields no declarations. Useful for tests and dry runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStyleResolver;

#[async_trait(?Send)]
impl StyleResolver for NullStyleResolver {
    async fn css(&self, _node: &SceneRef) -> Result<StyleMap> {
        Ok(StyleMap::new())
    }
}

/// In-memory component catalog backed by a name → binding map.
#[derive(Debug, Default, Clone)]
pub struct StaticCatalog {
    bindings: HashMap<String, ComponentBinding>,
}

impl StaticCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component under the given node name.
    pub fn register(&mut self, name: &str, binding: ComponentBinding) {
        self.bindings.insert(name.to_owned(), binding);
    }
}

impl ComponentCatalog for StaticCatalog {
    fn mapping(&self, name: &str) -> Option<ComponentBinding> {
        self.bindings.get(name).cloned()
    }
}
