#![forbid(unsafe_code)]

//! Semantic model for tag-keyed game catalogs (headless).
//!
//! Design goals:
//! - deterministic, testable outputs (the whole forest is rebuilt from the
//!   flat snapshot on every refresh; nothing is patched in place)
//! - the nominal hierarchy is derived from `full_tag` dot paths, never
//!   stored
//! - orphan tags (whose literal parent is absent from the snapshot) are
//!   promoted to forest roots; this is contract, not error

pub mod document;
pub mod error;
pub mod hierarchy;
pub mod outline;
pub mod tag;

pub use document::{
    COLLECTION_CLASS, COLLECTION_PROFESSION, COLLECTION_RACE, COLLECTIONS, Document,
    parse_documents,
};
pub use error::{Error, Result};
pub use hierarchy::Hierarchy;
pub use outline::{OutlineNode, build_outline};
