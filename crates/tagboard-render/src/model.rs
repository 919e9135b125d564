use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Layout constants for the org chart.
///
/// Defaults are the reference values: 120px square boxes, 40px between
/// sibling subtrees, 60px between rows, 40px canvas margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Box edge length; boxes are square.
    pub box_size: f64,
    /// Horizontal gap between sibling subtrees (and between root trees).
    pub h_spacing: f64,
    /// Vertical gap between a box and its children's row.
    pub v_spacing: f64,
    /// Top/left margin; also padded onto the canvas minimum size.
    pub margin: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            box_size: 120.0,
            h_spacing: 40.0,
            v_spacing: 60.0,
            margin: 40.0,
        }
    }
}

/// One positioned box. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeBox {
    pub full_tag: String,
    pub display_name: String,
    pub description: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl NodeBox {
    /// Anchor for outgoing connectors.
    pub fn bottom_center(&self) -> (f64, f64) {
        (self.x + self.size / 2.0, self.y + self.size)
    }

    /// Anchor for incoming connectors.
    pub fn top_center(&self) -> (f64, f64) {
        (self.x + self.size / 2.0, self.y)
    }
}

/// One parent→child connector segment, bottom-center to top-center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    pub from: String,
    pub to: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// The full chart: tag → box (in placement order), connector segments, and
/// the canvas minimum size bounding all boxes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub boxes: IndexMap<String, NodeBox>,
    pub connectors: Vec<Connector>,
    pub width: f64,
    pub height: f64,
}
