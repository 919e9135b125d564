//! In-memory reference implementation of the store contract.
//!
//! Insertion order per collection is preserved (layout and hierarchy
//! reconstruction both depend on it) and opaque UUID ids are assigned on
//! insert. Doubles as the test harness for everything that consumes
//! [`DocumentStore`].

use crate::{DocumentStore, Outcome};
use rustc_hash::FxHashMap;
use tagboard_core::Document;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: FxHashMap<String, Vec<Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a collection snapshot wholesale, assigning ids to documents
    /// that lack one.
    pub fn seed(&mut self, collection: &str, documents: Vec<Document>) {
        let entry = self.collections.entry(collection.to_string()).or_default();
        for mut doc in documents {
            if doc.id.is_none() {
                doc.id = Some(Uuid::new_v4().to_string());
            }
            entry.push(doc);
        }
    }
}

impl DocumentStore for MemoryStore {
    fn ping(&mut self) -> Outcome {
        Outcome::success("store reachable")
    }

    fn list(&self, collection: &str) -> Vec<Document> {
        self.collections.get(collection).cloned().unwrap_or_default()
    }

    fn insert(&mut self, collection: &str, mut document: Document) -> Outcome {
        let id = Uuid::new_v4().to_string();
        document.id = Some(id.clone());
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(document);
        tracing::info!(collection, id = id.as_str(), "document inserted");
        Outcome::success(format!("Successfully inserted 1 document into '{collection}'."))
    }

    fn update(&mut self, collection: &str, id: &str, mut document: Document) -> Outcome {
        let Some(docs) = self.collections.get_mut(collection) else {
            return Outcome::failure(format!("Document {id} not found or no changes made."));
        };
        match docs.iter_mut().find(|d| d.id.as_deref() == Some(id)) {
            Some(slot) => {
                document.id = Some(id.to_string());
                *slot = document;
                tracing::info!(collection, id, "document updated");
                Outcome::success(format!("Updated document {id}."))
            }
            None => Outcome::failure(format!("Document {id} not found or no changes made.")),
        }
    }

    fn delete(&mut self, collection: &str, id: &str) -> Outcome {
        let Some(docs) = self.collections.get_mut(collection) else {
            return Outcome::failure(format!("Document {id} not found."));
        };
        let before = docs.len();
        docs.retain(|d| d.id.as_deref() != Some(id));
        if docs.len() < before {
            tracing::info!(collection, id, "document deleted");
            Outcome::success(format!("Deleted document {id}."))
        } else {
            Outcome::failure(format!("Document {id} not found."))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(full_tag: &str) -> Document {
        let mut d = Document::new("Race", full_tag, full_tag);
        d.full_tag = full_tag.to_string();
        d
    }

    #[test]
    fn insert_assigns_id_and_preserves_order() {
        let mut store = MemoryStore::new();
        assert!(store.insert("Race", doc("Race")).ok);
        assert!(store.insert("Race", doc("Race.Elf")).ok);

        let docs = store.list("Race");
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].full_tag, "Race");
        assert_eq!(docs[1].full_tag, "Race.Elf");
        assert!(docs.iter().all(|d| d.id.is_some()));
        assert_ne!(docs[0].id, docs[1].id);
    }

    #[test]
    fn unknown_collection_lists_empty() {
        let store = MemoryStore::new();
        assert!(store.list("Profession").is_empty());
    }

    #[test]
    fn update_unknown_id_reports_not_found() {
        let mut store = MemoryStore::new();
        store.insert("Race", doc("Race"));

        let outcome = store.update("Race", "missing", doc("Race"));
        assert!(!outcome.ok);
        assert!(outcome.message.contains("not found"));
    }

    #[test]
    fn update_replaces_payload_keeping_id() {
        let mut store = MemoryStore::new();
        store.insert("Race", doc("Race.Elf"));
        let id = store.list("Race")[0].id.clone().unwrap();

        let mut newer = doc("Race.Elf");
        newer.display_name = "High Elf".to_string();
        assert!(store.update("Race", &id, newer).ok);

        let docs = store.list("Race");
        assert_eq!(docs[0].display_name, "High Elf");
        assert_eq!(docs[0].id.as_deref(), Some(id.as_str()));
    }

    #[test]
    fn delete_removes_exactly_one() {
        let mut store = MemoryStore::new();
        store.insert("Race", doc("Race"));
        store.insert("Race", doc("Race.Elf"));
        let id = store.list("Race")[0].id.clone().unwrap();

        assert!(store.delete("Race", &id).ok);
        assert_eq!(store.list("Race").len(), 1);
        assert!(!store.delete("Race", &id).ok);
    }

    #[test]
    fn ping_succeeds() {
        assert!(MemoryStore::new().ping().ok);
    }
}
