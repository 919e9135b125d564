//! Dot-path helpers for `full_tag` strings.
//!
//! A full tag is a dot-delimited path whose first segment names the
//! collection, e.g. `Race.Elf.Forest`. Hierarchy is nominal: nothing here
//! checks that the implied ancestors exist.

/// Returns the tag of the nominal parent: everything before the last dot.
///
/// Returns `None` for a dotless tag and for tags whose derived parent would
/// be the empty string (`"."`, `".x"`). Such tags are forest roots.
pub fn parent_tag(full_tag: &str) -> Option<&str> {
    let (parent, _) = full_tag.rsplit_once('.')?;
    if parent.is_empty() { None } else { Some(parent) }
}

/// First dot-segment of a full tag (the collection name).
pub fn collection_of(full_tag: &str) -> &str {
    full_tag.split('.').next().unwrap_or("")
}

/// Whether `full_tag` is a strict dot-delimited descendant of `ancestor`,
/// i.e. starts with `ancestor` followed by a dot.
///
/// This is a pure string test over the flat document list. It deliberately
/// ignores hierarchy reconstruction: a tag promoted to a forest root because
/// an intermediate ancestor is missing still counts as a descendant here.
pub fn is_descendant_of(full_tag: &str, ancestor: &str) -> bool {
    full_tag.len() > ancestor.len()
        && full_tag.as_bytes().get(ancestor.len()) == Some(&b'.')
        && full_tag.starts_with(ancestor)
}

/// Pre-filled tag prefix for creating a child under an existing document:
/// the parent's full tag with the collection prefix removed and a trailing
/// dot appended.
pub fn child_tag_prefix(collection: &str, parent_full_tag: &str) -> String {
    let mut path = parent_full_tag.to_string();
    let collection_prefix = format!("{collection}.");
    if let Some(rest) = path.strip_prefix(&collection_prefix) {
        path = rest.to_string();
    }
    if !path.is_empty() && !path.ends_with('.') {
        path.push('.');
    }
    path
}

/// Joins a collection name and a collection-relative tag into a full tag.
pub fn full_tag_for(collection: &str, tag: &str) -> String {
    format!("{collection}.{tag}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_is_all_but_last_segment() {
        assert_eq!(parent_tag("Race.Elf.Forest"), Some("Race.Elf"));
        assert_eq!(parent_tag("Race.Elf"), Some("Race"));
        assert_eq!(parent_tag("Race"), None);
    }

    #[test]
    fn empty_and_lone_dot_tags_have_no_parent() {
        assert_eq!(parent_tag(""), None);
        assert_eq!(parent_tag("."), None);
        assert_eq!(parent_tag(".Elf"), None);
        // A trailing dot still yields the non-empty prefix.
        assert_eq!(parent_tag("Race."), Some("Race"));
    }

    #[test]
    fn collection_is_first_segment() {
        assert_eq!(collection_of("Race.Elf"), "Race");
        assert_eq!(collection_of("Race"), "Race");
        assert_eq!(collection_of(""), "");
    }

    #[test]
    fn descendant_requires_dot_boundary() {
        assert!(is_descendant_of("Race.Elf.Wood", "Race.Elf"));
        assert!(is_descendant_of("Race.Elf", "Race"));
        assert!(!is_descendant_of("Race.Elfkin", "Race.Elf"));
        assert!(!is_descendant_of("Race.Elf", "Race.Elf"));
        assert!(!is_descendant_of("Race", "Race.Elf"));
    }

    #[test]
    fn child_prefix_strips_collection_and_adds_dot() {
        assert_eq!(child_tag_prefix("Race", "Race.Elf"), "Elf.");
        assert_eq!(child_tag_prefix("Race", "Race.Elf.Wood"), "Elf.Wood.");
        // Foreign prefix is kept verbatim, still dot-terminated.
        assert_eq!(child_tag_prefix("Race", "Class.Mage"), "Class.Mage.");
        assert_eq!(child_tag_prefix("Race", ""), "");
    }

    #[test]
    fn full_tag_joins_collection_and_tag() {
        assert_eq!(full_tag_for("Race", "Elf.Wood"), "Race.Elf.Wood");
    }
}
