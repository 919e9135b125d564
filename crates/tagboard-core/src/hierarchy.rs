//! Forest reconstruction from a flat collection snapshot.
//!
//! Parent/child edges are derived from dot-delimited `full_tag` paths. A
//! document is attached to a parent only when the parent tag is already
//! present among the documents seen so far; otherwise it becomes a root of
//! the forest, even when its tag implies a missing ancestor. That orphan
//! promotion is observable behavior, not an error.

use crate::document::Document;
use crate::tag;
use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    nodes: FxHashMap<String, Document>,
    roots: Vec<String>,
    children: IndexMap<String, Vec<String>>,
}

impl Hierarchy {
    /// Builds the forest in a single pass over store order.
    ///
    /// Duplicate tags: the last payload wins in the node mapping, but a tag
    /// keeps the root/child registration from its first occurrence so each
    /// tag is laid out exactly once.
    ///
    /// The already-inserted rule makes the child map acyclic by
    /// construction: a parent edge always points at an earlier tag. Input is
    /// not assumed sorted by depth.
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut nodes: FxHashMap<String, Document> =
            FxHashMap::with_capacity_and_hasher(documents.len(), Default::default());
        let mut roots: Vec<String> = Vec::new();
        let mut children: IndexMap<String, Vec<String>> = IndexMap::new();
        let mut registered: FxHashSet<String> = FxHashSet::default();

        for doc in documents {
            let full_tag = doc.full_tag.clone();
            let first_seen = registered.insert(full_tag.clone());
            nodes.insert(full_tag.clone(), doc.clone());
            if !first_seen {
                continue;
            }
            let parent = tag::parent_tag(&full_tag)
                .filter(|p| nodes.contains_key(*p))
                .map(str::to_string);
            match parent {
                Some(parent) => children.entry(parent).or_default().push(full_tag),
                None => roots.push(full_tag),
            }
        }

        tracing::debug!(
            documents = documents.len(),
            nodes = nodes.len(),
            roots = roots.len(),
            "hierarchy rebuilt"
        );

        Self {
            nodes,
            roots,
            children,
        }
    }

    pub fn node(&self, full_tag: &str) -> Option<&Document> {
        self.nodes.get(full_tag)
    }

    /// Root tags, ordered as first encountered in the snapshot.
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// Children of `full_tag` in registration order; empty for leaves and
    /// unknown tags.
    pub fn children_of(&self, full_tag: &str) -> &[String] {
        self.children
            .get(full_tag)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The full parent-tag → ordered-child-tags map.
    pub fn children(&self) -> &IndexMap<String, Vec<String>> {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
