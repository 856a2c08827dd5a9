//! Pure diff between two head tag sets.
//!
//! The renderer applies the resulting operations to the live document head;
//! the diff itself touches nothing and can be tested in isolation.

use rustc_hash::FxHashSet;

use super::{HeadTag, HeadTagSet, TagId};

/// One document-head mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadOp {
    /// Tag present in `next` only.
    Insert(TagId, HeadTag),
    /// Tag present in both with a different value.
    Update(TagId, HeadTag),
    /// Tag present in `prev` only.
    Remove(TagId),
}

/// Compute the operations turning `prev` into `next`.
///
/// Removals come first (in `prev` order), then inserts and updates in `next`
/// order. Tags with identical values produce no operation at all, so
/// untouched tags are provably left alone.
pub fn diff(prev: &HeadTagSet, next: &HeadTagSet) -> Vec<HeadOp> {
    let mut ops = Vec::new();

    let next_ids: FxHashSet<TagId> = next.entries().into_iter().map(|(id, _)| id).collect();
    for (id, _) in prev.entries() {
        if !next_ids.contains(&id) {
            ops.push(HeadOp::Remove(id));
        }
    }

    for (id, tag) in next.entries() {
        match prev.get(&id) {
            None => ops.push(HeadOp::Insert(id, tag)),
            Some(old) if old != tag => ops.push(HeadOp::Update(id, tag)),
            Some(_) => {}
        }
    }

    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{MetaAttr, TagPatch, merge};

    fn set(title: &str, og_title: &str) -> HeadTagSet {
        merge([TagPatch::new()
            .title(title)
            .canonical("https://x/")
            .property("og:title", og_title)])
    }

    #[test]
    fn test_identical_sets_produce_no_ops() {
        let a = set("T", "T");
        let b = set("T", "T");
        assert!(diff(&a, &b).is_empty());
    }

    #[test]
    fn test_update_changed_values_only() {
        let prev = set("old", "same");
        let next = set("new", "same");
        let ops = diff(&prev, &next);
        assert_eq!(
            ops,
            vec![HeadOp::Update(TagId::Title, HeadTag::Title("new".to_string()))]
        );
    }

    #[test]
    fn test_insert_and_remove() {
        let prev = merge([TagPatch::new()
            .title("T")
            .property("og:title", "T")
            .property("article:author", "A")]);
        let next = merge([TagPatch::new()
            .title("T")
            .property("og:title", "T")
            .property("twitter:title", "T")]);

        let ops = diff(&prev, &next);
        assert_eq!(ops.len(), 2);
        assert_eq!(
            ops[0],
            HeadOp::Remove(TagId::Meta(MetaAttr::Property, "article:author".into()))
        );
        assert!(matches!(
            &ops[1],
            HeadOp::Insert(TagId::Meta(MetaAttr::Property, key), _) if key == "twitter:title"
        ));
    }

    #[test]
    fn test_removals_precede_inserts() {
        let prev = merge([TagPatch::new().title("T")]);
        let next = merge([TagPatch::new().canonical("https://x/")]);
        let ops = diff(&prev, &next);
        assert_eq!(ops[0], HeadOp::Remove(TagId::Title));
        assert!(matches!(ops[1], HeadOp::Insert(TagId::Canonical, _)));
    }

    #[test]
    fn test_schema_replacement_is_update() {
        let prev = merge([TagPatch::new().schema(serde_json::json!({"@type": "Article"}))]);
        let next = merge([TagPatch::new().schema(serde_json::json!({"@type": "Person"}))]);
        let ops = diff(&prev, &next);
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], HeadOp::Update(TagId::Schema(0), _)));
    }
}
