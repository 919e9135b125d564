#![forbid(unsafe_code)]

//! `tagboard` is a headless engine for editing and charting tag-keyed game
//! catalogs (Race/Class/Profession style document collections).
//!
//! The core crate re-exported here reconstructs a forest from flat
//! `full_tag` dot paths. The feature-gated layers add the org-chart layout
//! engine with an SVG surface, and the document-store contract with CRUD
//! orchestration.
//!
//! # Features
//!
//! - `render`: chart layout + SVG emission (`tagboard::render`)
//! - `store`: store contract, in-memory store, CRUD orchestration
//!   (`tagboard::store`)

pub use tagboard_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use tagboard_render::{
        ChartConfig, ChartLayout, Connector, NodeBox, SvgRenderOptions, layout_chart,
        render_chart_svg, subtree_width,
    };

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Core(#[from] tagboard_core::Error),
        #[error(transparent)]
        Layout(#[from] tagboard_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Full pipeline for one collection snapshot: rebuild the forest, then
    /// lay it out.
    pub fn layout_documents(
        documents: &[tagboard_core::Document],
        config: &ChartConfig,
    ) -> Result<ChartLayout> {
        let hierarchy = tagboard_core::Hierarchy::from_documents(documents);
        Ok(layout_chart(&hierarchy, config)?)
    }

    /// Full pipeline straight to SVG.
    pub fn render_documents_svg(
        documents: &[tagboard_core::Document],
        config: &ChartConfig,
        options: &SvgRenderOptions,
    ) -> Result<String> {
        let layout = layout_documents(documents, config)?;
        Ok(render_chart_svg(&layout, options))
    }
}

#[cfg(feature = "store")]
pub mod store {
    pub use tagboard_store::memory::MemoryStore;
    pub use tagboard_store::ops::{
        collect_subtree, create_document, delete_subtree, deletion_summary, load_collection,
        update_document,
    };
    pub use tagboard_store::{DocumentStore, Outcome, redact_uri};
}
