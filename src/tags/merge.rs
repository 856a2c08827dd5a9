//! Merging provider contributions into one canonical tag set.

use super::{HeadTagSet, TagPatch};

/// Merge patches in ascending priority order (defaults first, extensions
/// last).
///
/// - Singular kinds (title, canonical): last non-empty value wins.
/// - Meta: suppressions apply first, then each tag either replaces an
///   existing key in place or appends. Two providers can never leave two
///   entries with the same key.
/// - Schema: a patch carrying any blocks replaces the accumulated blocks
///   outright, like the other singular kinds.
///
/// The result depends only on the input sequence; identical inputs always
/// produce identical sets.
pub fn merge<I>(patches: I) -> HeadTagSet
where
    I: IntoIterator<Item = TagPatch>,
{
    let mut out = HeadTagSet::new();
    for patch in patches {
        if let Some(title) = patch.title
            && !title.is_empty()
        {
            out.title = Some(title);
        }
        if let Some(href) = patch.canonical
            && !href.is_empty()
        {
            out.canonical = Some(href);
        }
        for (attr, key) in &patch.suppress {
            out.remove_meta(*attr, key);
        }
        for tag in patch.meta {
            out.upsert_meta(tag);
        }
        if !patch.schema.is_empty() {
            out.set_schema(patch.schema);
        }
    }
    out
}
