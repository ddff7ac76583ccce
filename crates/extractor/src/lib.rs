//! Design-tree normalization and layout-inference engine.
//!
//! Walks a native scene graph (read through the `scene` accessor interface)
//! and produces a canonical `uinode` tree annotated with CSS-equivalent
//! layout and style information, plus a registry of icon assets to export.
//!
//! The walk is a single-threaded cooperative async recursion: the external
//! CSS-serialization call is the only suspension point, sibling subtrees are
//! awaited jointly, and output order always matches native child order.

#![forbid(unsafe_code)]

mod absolute;
mod collaborators;
mod context;
mod flex;
mod geometry;
mod icon;
mod layout;
mod merge;
mod optimize;
mod options;
mod repeat;
mod spacing;
mod units;
mod walk;

pub use collaborators::{ComponentCatalog, NullStyleResolver, StaticCatalog, StyleResolver};
pub use context::ExtractContext;
pub use geometry::Geometry;
pub use options::{ExtractOptions, IconThresholds};
pub use walk::extract_selected_nodes;
