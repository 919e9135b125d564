//! CRUD orchestration over an injected data source.
//!
//! These are the operations the edit dialogs hand off to: validate-then-write
//! for create/update, and prefix-match subtree deletion. The store is passed
//! in explicitly; nothing here walks an ownership chain looking for a handler.

use crate::{DocumentStore, Outcome};
use rustc_hash::FxHashSet;
use tagboard_core::{Document, Hierarchy, tag};

/// Validates, then inserts. Validation failures surface as failed outcomes,
/// like any other store failure.
pub fn create_document(
    store: &mut dyn DocumentStore,
    collection: &str,
    document: Document,
) -> Outcome {
    if let Err(err) = document.validate() {
        return Outcome::failure(err.to_string());
    }
    store.insert(collection, document)
}

/// Validates, then replaces the document with the given opaque id.
pub fn update_document(
    store: &mut dyn DocumentStore,
    collection: &str,
    id: &str,
    document: Document,
) -> Outcome {
    if let Err(err) = document.validate() {
        return Outcome::failure(err.to_string());
    }
    store.update(collection, id, document)
}

/// Wholesale snapshot reload: list the collection and rebuild the forest.
/// There is no incremental path; every refresh replaces both.
pub fn load_collection(store: &dyn DocumentStore, collection: &str) -> (Vec<Document>, Hierarchy) {
    let documents = store.list(collection);
    let hierarchy = Hierarchy::from_documents(&documents);
    (documents, hierarchy)
}

/// The deletion candidate set: the target plus every document whose
/// `full_tag` has `target_tag` as a dot-delimited prefix, deduplicated by
/// tag.
///
/// This is a string-prefix scan over the flat snapshot, independent of
/// hierarchy reconstruction: a tag that was promoted to a forest root
/// because an intermediate ancestor is missing is still collected when its
/// tag string sits under the target.
pub fn collect_subtree<'a>(documents: &'a [Document], target_tag: &str) -> Vec<&'a Document> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    documents
        .iter()
        .filter(|d| d.full_tag == target_tag || tag::is_descendant_of(&d.full_tag, target_tag))
        .filter(|d| seen.insert(d.full_tag.as_str()))
        .collect()
}

/// Deletes the subtree rooted at `target_tag`, each candidate by its opaque
/// id. Partial failures are aggregated into a failed outcome; successes are
/// summarized via [`deletion_summary`].
pub fn delete_subtree(
    store: &mut dyn DocumentStore,
    collection: &str,
    target_tag: &str,
) -> Outcome {
    let snapshot = store.list(collection);
    let targets: Vec<Document> = collect_subtree(&snapshot, target_tag)
        .into_iter()
        .cloned()
        .collect();
    if targets.is_empty() {
        return Outcome::failure(format!("No document with tag {target_tag}."));
    }

    let mut failures: Vec<String> = Vec::new();
    for doc in &targets {
        match doc.id.as_deref() {
            Some(id) => {
                let outcome = store.delete(collection, id);
                if !outcome.ok {
                    failures.push(outcome.message);
                }
            }
            None => failures.push(format!("{} has no stored id.", doc.full_tag)),
        }
    }

    tracing::info!(
        collection,
        target = target_tag,
        candidates = targets.len(),
        failed = failures.len(),
        "subtree deletion"
    );

    if failures.is_empty() {
        Outcome::success(deletion_summary(&targets))
    } else {
        Outcome::failure(failures.join(" "))
    }
}

/// Confirmation text listing the affected documents by display name, falling
/// back to the full tag.
pub fn deletion_summary(documents: &[Document]) -> String {
    fn label(doc: &Document) -> &str {
        if doc.display_name.is_empty() {
            &doc.full_tag
        } else {
            &doc.display_name
        }
    }

    match documents {
        [] => "Deleted 0 documents.".to_string(),
        [only] => format!("Deleted 1 document: {}", label(only)),
        many => {
            let names: Vec<&str> = many.iter().map(label).collect();
            format!("Deleted {} documents:\n{}", many.len(), names.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn doc(full_tag: &str) -> Document {
        let mut d = Document::new("Race", full_tag, full_tag);
        d.full_tag = full_tag.to_string();
        d
    }

    #[test]
    fn create_rejects_invalid_documents_without_touching_store() {
        let mut store = MemoryStore::new();
        let mut bad = doc("Race.Elf");
        bad.display_name = String::new();

        let outcome = create_document(&mut store, "Race", bad);
        assert!(!outcome.ok);
        assert!(outcome.message.contains("displayName"));
        assert!(store.list("Race").is_empty());
    }

    #[test]
    fn prune_removes_prefix_descendants_even_orphans() {
        // Race.Elf.Wood is missing, so Race.Elf.Wood.Deep reconstructs as a
        // forest root; the prefix scan still deletes it under Race.Elf.
        let mut store = MemoryStore::new();
        store.seed(
            "Race",
            vec![doc("Race"), doc("Race.Elf"), doc("Race.Elf.Wood.Deep")],
        );

        let (_, hierarchy) = load_collection(&store, "Race");
        assert!(hierarchy.roots().contains(&"Race.Elf.Wood.Deep".to_string()));

        let outcome = delete_subtree(&mut store, "Race", "Race.Elf");
        assert!(outcome.ok, "{}", outcome.message);

        let left: Vec<String> = store.list("Race").into_iter().map(|d| d.full_tag).collect();
        assert_eq!(left, ["Race"]);
    }

    #[test]
    fn collect_subtree_uses_dot_boundary_and_dedups() {
        let docs = vec![
            doc("Race.Elf"),
            doc("Race.Elf.Wood"),
            doc("Race.Elfkin"),
            doc("Race.Elf.Wood"),
        ];
        let tags: Vec<&str> = collect_subtree(&docs, "Race.Elf")
            .into_iter()
            .map(|d| d.full_tag.as_str())
            .collect();
        assert_eq!(tags, ["Race.Elf", "Race.Elf.Wood"]);
    }

    #[test]
    fn delete_unknown_tag_reports_failure() {
        let mut store = MemoryStore::new();
        store.seed("Race", vec![doc("Race")]);

        let outcome = delete_subtree(&mut store, "Race", "Race.Gnome");
        assert!(!outcome.ok);
        assert!(outcome.message.contains("Race.Gnome"));
        assert_eq!(store.list("Race").len(), 1);
    }

    #[test]
    fn summary_lists_names_with_tag_fallback() {
        let mut named = doc("Race.Elf");
        named.display_name = "Elf".to_string();
        let mut unnamed = doc("Race.Elf.Wood");
        unnamed.display_name = String::new();

        assert_eq!(
            deletion_summary(std::slice::from_ref(&named)),
            "Deleted 1 document: Elf"
        );
        assert_eq!(
            deletion_summary(&[named, unnamed]),
            "Deleted 2 documents:\nElf\nRace.Elf.Wood"
        );
    }

    #[test]
    fn load_collection_rebuilds_from_store_order() {
        let mut store = MemoryStore::new();
        store.seed("Race", vec![doc("Race"), doc("Race.Elf")]);

        let (documents, hierarchy) = load_collection(&store, "Race");
        assert_eq!(documents.len(), 2);
        assert_eq!(hierarchy.roots(), ["Race"]);
        assert_eq!(hierarchy.children_of("Race"), ["Race.Elf"]);
    }
}
