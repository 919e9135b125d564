//! Tree-layout geometry for the org chart.
//!
//! A single top-down pass assigns every box an absolute position: each node
//! is horizontally centered within the span its subtree needs, children are
//! laid left-to-right in registration order one row below their parent, and
//! root trees are laid left-to-right across the canvas. The pass is
//! deterministic: identical input order yields identical coordinates, and no
//! prior layout state is consulted.

use crate::model::{ChartConfig, ChartLayout, Connector, NodeBox};
use crate::{Error, Result};
use indexmap::IndexMap;
use tagboard_core::Hierarchy;

/// Recursion cap. Construction order makes the child map acyclic, so the cap
/// only triggers on pathologically deep forests.
pub const MAX_DEPTH: usize = 1000;

/// Horizontal span needed by `full_tag`'s entire subtree so that sibling
/// subtrees never overlap.
///
/// Leaves need one box edge; an inner node needs the sum of its children's
/// spans plus one inter-sibling gap per pair, floored at one box edge.
pub fn subtree_width(hierarchy: &Hierarchy, config: &ChartConfig, full_tag: &str) -> Result<f64> {
    subtree_width_at(hierarchy, config, full_tag, 0)
}

fn subtree_width_at(
    hierarchy: &Hierarchy,
    config: &ChartConfig,
    full_tag: &str,
    depth: usize,
) -> Result<f64> {
    if depth > MAX_DEPTH {
        return Err(Error::DepthExceeded {
            tag: full_tag.to_string(),
            max: MAX_DEPTH,
        });
    }
    let children = hierarchy.children_of(full_tag);
    if children.is_empty() {
        return Ok(config.box_size);
    }
    let mut width = 0.0;
    for child in children {
        width += subtree_width_at(hierarchy, config, child, depth + 1)?;
    }
    if children.len() > 1 {
        width += config.h_spacing * (children.len() - 1) as f64;
    }
    Ok(width.max(config.box_size))
}

fn place_boxes(
    hierarchy: &Hierarchy,
    config: &ChartConfig,
    full_tag: &str,
    x: f64,
    y: f64,
    depth: usize,
    boxes: &mut IndexMap<String, NodeBox>,
) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(Error::DepthExceeded {
            tag: full_tag.to_string(),
            max: MAX_DEPTH,
        });
    }
    let width = subtree_width_at(hierarchy, config, full_tag, depth)?;
    let (display_name, description) = hierarchy
        .node(full_tag)
        .map(|d| (d.display_name.clone(), d.description.clone()))
        .unwrap_or_default();

    boxes.insert(
        full_tag.to_string(),
        NodeBox {
            full_tag: full_tag.to_string(),
            display_name,
            description,
            x: x + width / 2.0 - config.box_size / 2.0,
            y,
            size: config.box_size,
        },
    );

    let mut offset = 0.0;
    for child in hierarchy.children_of(full_tag) {
        let child_width = subtree_width_at(hierarchy, config, child, depth + 1)?;
        place_boxes(
            hierarchy,
            config,
            child,
            x + offset,
            y + config.box_size + config.v_spacing,
            depth + 1,
            boxes,
        )?;
        offset += child_width + config.h_spacing;
    }
    Ok(())
}

/// Lays out the whole forest and derives the connector segments.
///
/// Connector pairs whose parent or child box is missing are skipped, not
/// fatal; under the construction rules every registered pair is placed.
pub fn layout_chart(hierarchy: &Hierarchy, config: &ChartConfig) -> Result<ChartLayout> {
    let mut boxes: IndexMap<String, NodeBox> = IndexMap::with_capacity(hierarchy.len());

    let mut x = config.margin;
    let y = config.margin;
    for root in hierarchy.roots() {
        let width = subtree_width_at(hierarchy, config, root, 0)?;
        place_boxes(hierarchy, config, root, x, y, 0, &mut boxes)?;
        x += width + config.h_spacing;
    }

    let max_x = boxes
        .values()
        .map(|b| b.x)
        .max_by(f64::total_cmp)
        .unwrap_or(0.0);
    let max_y = boxes
        .values()
        .map(|b| b.y)
        .max_by(f64::total_cmp)
        .unwrap_or(0.0);
    let width = max_x + config.box_size + config.margin;
    let height = max_y + config.box_size + config.margin;

    let mut connectors = Vec::new();
    for (parent, children) in hierarchy.children() {
        let Some(parent_box) = boxes.get(parent.as_str()) else {
            continue;
        };
        let (x1, y1) = parent_box.bottom_center();
        for child in children {
            let Some(child_box) = boxes.get(child.as_str()) else {
                continue;
            };
            let (x2, y2) = child_box.top_center();
            connectors.push(Connector {
                from: parent.clone(),
                to: child.clone(),
                x1,
                y1,
                x2,
                y2,
            });
        }
    }

    Ok(ChartLayout {
        boxes,
        connectors,
        width,
        height,
    })
}
