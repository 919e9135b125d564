//! Navigation outline: the collection rendered as a tree of tag segments.

use crate::document::Document;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineNode {
    pub label: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            children: Vec::new(),
        }
    }
}

fn find_or_create<'a>(level: &'a mut Vec<OutlineNode>, label: &str) -> &'a mut OutlineNode {
    if let Some(pos) = level.iter().position(|n| n.label == label) {
        return &mut level[pos];
    }
    level.push(OutlineNode::new(label));
    level.last_mut().expect("just pushed")
}

/// Merges every document's tag segments into a segment tree, first-encounter
/// ordered. Documents whose `full_tag` does not start with `"<collection>."`
/// are skipped; the collection segment itself is dropped from the labels.
pub fn build_outline(collection: &str, documents: &[Document]) -> Vec<OutlineNode> {
    let prefix = format!("{collection}.");
    let mut top: Vec<OutlineNode> = Vec::new();

    for doc in documents {
        let Some(path) = doc.full_tag.strip_prefix(&prefix) else {
            continue;
        };
        let mut level = &mut top;
        for segment in path.split('.') {
            let node = find_or_create(level, segment);
            level = &mut node.children;
        }
    }

    top
}
