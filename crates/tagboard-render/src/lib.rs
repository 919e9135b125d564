#![forbid(unsafe_code)]

//! Layout engine + headless SVG surface for the tagboard org chart.
//!
//! [`layout_chart`] turns a reconstructed [`tagboard_core::Hierarchy`] into
//! absolute box positions, connector segments and a canvas minimum size;
//! [`svg::render_chart_svg`] is a reference rendering surface consuming that
//! result. Any other surface (a GUI canvas) can consume [`model::ChartLayout`]
//! the same way — the layout carries no rendering state.

pub mod layout;
pub mod model;
pub mod svg;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("layout recursion exceeded {max} levels at `{tag}`")]
    DepthExceeded { tag: String, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

pub use layout::{layout_chart, subtree_width};
pub use model::{ChartConfig, ChartLayout, Connector, NodeBox};
pub use svg::{SvgRenderOptions, render_chart_svg};
