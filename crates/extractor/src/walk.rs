//! The recursive extraction driver.
//!
//! For each native node: visibility prune, geometry resolution, icon
//! classification, component-mapping lookup, CSS serialization, flex and
//! absolute-position derivation, margin inference, style merging, then
//! concurrent recursion into children with output order re-established from
//! native child order. Repeat compression happens before recursion so run
//! members other than the sample are never extracted at all.

use crate::absolute::{self, AbsoluteInputs};
use crate::context::ExtractContext;
use crate::units::px;
use crate::{flex, geometry, icon, layout, merge, optimize, repeat, spacing};
use anyhow::Result;
use futures::future::{self, LocalBoxFuture};
use log::warn;
use scene::{Axis, Insets, LayoutMode as NativeLayoutMode, SceneNode, SceneRef, TextSpec};
use std::rc::Rc;
use uinode::{
    Dimension, EdgeValues, ExtractOutput, ICON_TYPE, LayoutMode, Positioning, RepeatInfo,
    StyleMap, TextContent, UINode,
};

/// Extract a selection of root nodes into the canonical tree plus the icon
/// registry.
///
/// Sibling subtrees are extracted concurrently; output order always matches
/// native child order regardless of completion order.
///
/// # Errors
/// Currently infallible per node (per-node CSS failures degrade and are
/// logged); the `Result` is the seam for host-platform transport failures.
pub async fn extract_selected_nodes(
    roots: &[SceneRef],
    ctx: &ExtractContext<'_>,
) -> Result<ExtractOutput> {
    let extractions = roots
        .iter()
        .map(|root| extract_node(Rc::clone(root), None, Rc::clone(root), ctx));

    let mut nodes = Vec::new();
    for extracted in future::join_all(extractions).await {
        if let Some(mut node) = extracted {
            optimize::optimize(&mut node, false);
            nodes.push(node);
        }
    }
    Ok(ExtractOutput {
        nodes,
        resources: ctx.take_resources(),
    })
}

fn layout_mode_of(node: &dyn SceneNode) -> LayoutMode {
    match node.layout_mode() {
        NativeLayoutMode::None => LayoutMode::None,
        NativeLayoutMode::Horizontal => LayoutMode::Horizontal,
        NativeLayoutMode::Vertical => LayoutMode::Vertical,
    }
}

fn nonzero(value: f64) -> Option<f64> {
    (value != 0.0).then_some(value)
}

fn edge_values(insets: Insets) -> EdgeValues {
    EdgeValues {
        top: nonzero(insets.top),
        right: nonzero(insets.right),
        bottom: nonzero(insets.bottom),
        left: nonzero(insets.left),
    }
}

fn text_content(spec: &TextSpec) -> TextContent {
    TextContent {
        characters: spec.characters.clone(),
        font_size: spec.font_size,
        font_family: spec.font_family.clone(),
        font_weight: spec.font_weight,
        text_align: spec.text_align.clone(),
        text_decoration: spec.text_decoration.clone(),
        line_height: spec.line_height,
    }
}

/// CSS serialization with the per-component cache. Failures degrade to an
/// empty map and never abort the walk.
async fn resolve_css(node: &SceneRef, ctx: &ExtractContext<'_>) -> StyleMap {
    if let Some(component_id) = node.main_component_id()
        && let Some(cached) = ctx.cached_css(component_id)
    {
        return cached;
    }
    let resolved = match ctx.resolver.css(node).await {
        Ok(styles) => styles,
        Err(error) => {
            warn!("css serialization failed for {}: {error:#}", node.id());
            StyleMap::new()
        }
    };
    if let Some(component_id) = node.main_component_id() {
        ctx.store_css(component_id, resolved.clone());
    }
    resolved
}

/// One entry in a compressed child list: the native child index to extract,
/// plus the ids of the whole run when it collapses.
struct ChildUnit {
    index: usize,
    run_ids: Option<Vec<String>>,
}

fn child_units(children: &[SceneRef], min_run: usize) -> Vec<ChildUnit> {
    let signatures: Vec<u64> = children
        .iter()
        .map(|child| repeat::signature(child.as_ref()))
        .collect();

    let mut units = Vec::new();
    for run in repeat::runs(&signatures) {
        if run.len >= min_run {
            let run_ids = children[run.start..run.start + run.len]
                .iter()
                .map(|child| child.id().to_owned())
                .collect();
            units.push(ChildUnit {
                index: run.start,
                run_ids: Some(run_ids),
            });
        } else {
            units.extend((run.start..run.start + run.len).map(|index| ChildUnit {
                index,
                run_ids: None,
            }));
        }
    }
    units
}

fn extract_node<'ctx>(
    node: SceneRef,
    parent: Option<SceneRef>,
    root: SceneRef,
    ctx: &'ctx ExtractContext<'_>,
) -> LocalBoxFuture<'ctx, Option<UINode>> {
    Box::pin(async move {
        if !node.visible() {
            return None;
        }

        let geom = geometry::resolve(&node, parent.as_ref(), &root);
        let is_icon = icon::classify(node.as_ref(), geom.width, geom.height, &ctx.options.icon);
        let positioned = node.absolutely_positioned() && parent.is_some();

        let mut out = UINode {
            id: (!node.id().is_empty()).then(|| node.id().to_owned()),
            name: (!node.name().is_empty()).then(|| node.name().to_owned()),
            node_type: if is_icon {
                ICON_TYPE.to_owned()
            } else {
                node.node_type().to_owned()
            },
            ..UINode::default()
        };
        out.layout.x = Some(geom.x);
        out.layout.y = Some(geom.y);
        out.layout.layout_mode = layout_mode_of(node.as_ref());
        if positioned {
            out.layout.positioning = Some(Positioning::Absolute);
        }
        out.layout.padding = node.padding().map(edge_values);
        out.layout.layout_align = node.layout_align().map(str::to_owned);

        if let Some(parent) = parent.as_ref()
            && let Some((axis, gap)) = spacing::trailing_margin(node.as_ref(), parent.as_ref())
        {
            out.layout.margin = Some(merge::trailing_edge(axis, gap));
        }

        let absolute_styles = if positioned {
            parent.as_ref().map_or_else(StyleMap::new, |parent| {
                let (parent_width, parent_height) = geometry::node_size(parent.as_ref());
                absolute::absolute_styles(
                    node.as_ref(),
                    &AbsoluteInputs {
                        offset_x: geom.x,
                        offset_y: geom.y,
                        width: geom.width,
                        height: geom.height,
                        parent_width,
                        parent_height,
                    },
                )
            })
        } else {
            StyleMap::new()
        };

        if is_icon {
            // Opaque leaf: the exported asset owns the presentation, so CSS
            // serialization is skipped and only derived styles remain.
            ctx.register_icon(node.as_ref());
            out.layout.width = Some(Dimension::Px(geom.width));
            out.layout.height = Some(Dimension::Px(geom.height));
            let mut styles = absolute_styles;
            styles.insert("width".to_owned(), px(geom.width));
            styles.insert("height".to_owned(), px(geom.height));
            out.custom_style = styles;
            merge::fold_margin(&mut out);
            return Some(out);
        }

        let requires_definite = layout::requires_definite_size(node.as_ref(), false);
        out.layout.width = Some(layout::dimension(node.as_ref(), Axis::Horizontal, geom.width));
        out.layout.height = Some(layout::dimension(node.as_ref(), Axis::Vertical, geom.height));
        out.text = node.text().map(text_content);
        out.custom_component = ctx.catalog.mapping(node.name());

        let css = resolve_css(&node, ctx).await;
        let mut flex_styles = flex::container_styles(node.as_ref());
        if let Some(parent) = parent.as_ref() {
            flex_styles.extend(flex::item_styles(node.as_ref(), parent.as_ref()));
        }
        let mut merged = merge::merge(flex_styles, css, absolute_styles);
        merge::strip_indefinite_size(&mut merged, requires_definite);
        out.custom_style = merged;
        merge::fold_margin(&mut out);

        // A bound component is rendered by its registered implementation;
        // never recurse into its children.
        if out.custom_component.is_some() {
            return Some(out);
        }

        let native_children = node.children();
        if !native_children.is_empty() {
            let units = child_units(native_children, ctx.options.min_repeat_run);
            let extractions = units.iter().map(|unit| {
                extract_node(
                    Rc::clone(&native_children[unit.index]),
                    Some(Rc::clone(&node)),
                    Rc::clone(&root),
                    ctx,
                )
            });
            // join_all keeps the index-to-future mapping, so results come
            // back in native child order even when completion reorders.
            let extracted = future::join_all(extractions).await;

            let mut children = Vec::new();
            for (unit, child) in units.iter().zip(extracted) {
                let Some(mut child) = child else { continue };
                if let Some(run_ids) = &unit.run_ids
                    && run_ids.len() >= ctx.options.min_repeat_run
                {
                    child.repeat = Some(RepeatInfo {
                        repeat_count: run_ids.len(),
                        repeat_node_ids: run_ids.clone(),
                    });
                }
                children.push(child);
            }
            if !children.is_empty() {
                out.children = Some(children);
            }
        }

        Some(out)
    })
}
