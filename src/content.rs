//! Pre-fetched content storage.
//!
//! Providers are synchronous and must never block on I/O, so everything they
//! read has to be fetched before the pipeline runs. `ContentIndex` is that
//! snapshot: one entry per addressable entity, keyed the same way
//! [`EntityReference`](crate::entity::EntityReference) identifies it.

use compact_str::CompactString;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::entity::EntityReference;

/// Content for a single entity, as delivered by the fetch collaborator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentData {
    /// Rendered title (post title, term name, author display name).
    pub title: String,

    /// Site-relative permalink (e.g. `/hello-world/`).
    pub link: String,

    /// Excerpt or term description.
    #[serde(default)]
    pub description: Option<String>,

    /// Publication date as ISO 8601 string.
    #[serde(default)]
    pub date: Option<String>,

    /// Author display name (posts only).
    #[serde(default)]
    pub author: Option<String>,

    /// Absolute URL of the featured image.
    #[serde(default)]
    pub image: Option<String>,
}

/// Snapshot of all fetched content, keyed by entity identity.
#[derive(Debug, Default)]
pub struct ContentIndex {
    posts: FxHashMap<CompactString, ContentData>,
    pages: FxHashMap<CompactString, ContentData>,
    categories: FxHashMap<CompactString, ContentData>,
    tags: FxHashMap<CompactString, ContentData>,
    authors: FxHashMap<CompactString, ContentData>,
    /// Keyed by (post type, slug).
    post_type_items: FxHashMap<(CompactString, CompactString), ContentData>,
    /// Keyed by (taxonomy, term slug).
    taxonomy_terms: FxHashMap<(CompactString, CompactString), ContentData>,
}

impl ContentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_post(&mut self, slug: &str, data: ContentData) {
        self.posts.insert(slug.into(), data);
    }

    pub fn insert_page(&mut self, slug: &str, data: ContentData) {
        self.pages.insert(slug.into(), data);
    }

    pub fn insert_category(&mut self, slug: &str, data: ContentData) {
        self.categories.insert(slug.into(), data);
    }

    pub fn insert_tag(&mut self, slug: &str, data: ContentData) {
        self.tags.insert(slug.into(), data);
    }

    pub fn insert_author(&mut self, slug: &str, data: ContentData) {
        self.authors.insert(slug.into(), data);
    }

    pub fn insert_post_type_item(&mut self, post_type: &str, slug: &str, data: ContentData) {
        self.post_type_items
            .insert((post_type.into(), slug.into()), data);
    }

    pub fn insert_taxonomy_term(&mut self, taxonomy: &str, slug: &str, data: ContentData) {
        self.taxonomy_terms
            .insert((taxonomy.into(), slug.into()), data);
    }

    /// Whether a post with this slug exists. Used by the resolver to decide
    /// between post and page for bare `/<slug>/` paths.
    pub fn has_post(&self, slug: &str) -> bool {
        self.posts.contains_key(slug)
    }

    /// Whether a page with this slug exists.
    pub fn has_page(&self, slug: &str) -> bool {
        self.pages.contains_key(slug)
    }

    /// Look up the content behind a resolved entity reference.
    ///
    /// Homepage, post type archives and NotFound have no single content
    /// entry; their metadata comes from configuration instead.
    pub fn lookup(&self, entity: &EntityReference) -> Option<&ContentData> {
        match entity {
            EntityReference::Post { slug } => self.posts.get(slug),
            EntityReference::Page { slug } => self.pages.get(slug),
            EntityReference::Category { slug } => self.categories.get(slug),
            EntityReference::Tag { slug } => self.tags.get(slug),
            EntityReference::Author { slug } => self.authors.get(slug),
            EntityReference::CustomPostType { post_type, slug } => self
                .post_type_items
                .get(&(post_type.clone(), slug.clone())),
            EntityReference::CustomTaxonomyTerm { taxonomy, slug } => {
                self.taxonomy_terms.get(&(taxonomy.clone(), slug.clone()))
            }
            EntityReference::CustomPostTypeArchive { .. }
            | EntityReference::Homepage
            | EntityReference::NotFound { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(title: &str, link: &str) -> ContentData {
        ContentData {
            title: title.to_string(),
            link: link.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_lookup_post_and_page() {
        let mut index = ContentIndex::new();
        index.insert_post("hello-world", data("Hello world!", "/hello-world/"));
        index.insert_page("sample-page", data("Sample Page", "/sample-page/"));

        assert!(index.has_post("hello-world"));
        assert!(!index.has_post("sample-page"));
        assert!(index.has_page("sample-page"));

        let entity = EntityReference::Post {
            slug: "hello-world".into(),
        };
        assert_eq!(index.lookup(&entity).unwrap().title, "Hello world!");
    }

    #[test]
    fn test_lookup_custom_keys() {
        let mut index = ContentIndex::new();
        index.insert_post_type_item("movie", "the-terminator", data("The Terminator", "/movie/the-terminator/"));
        index.insert_taxonomy_term("actor", "linda-hamilton", data("Linda Hamilton", "/actor/linda-hamilton/"));

        let movie = EntityReference::CustomPostType {
            post_type: "movie".into(),
            slug: "the-terminator".into(),
        };
        assert_eq!(index.lookup(&movie).unwrap().title, "The Terminator");

        let term = EntityReference::CustomTaxonomyTerm {
            taxonomy: "actor".into(),
            slug: "linda-hamilton".into(),
        };
        assert_eq!(index.lookup(&term).unwrap().title, "Linda Hamilton");
    }

    #[test]
    fn test_lookup_without_content_entry() {
        let index = ContentIndex::new();
        assert!(index.lookup(&EntityReference::Homepage).is_none());
        let archive = EntityReference::CustomPostTypeArchive {
            post_type: "movie".into(),
        };
        assert!(index.lookup(&archive).is_none());
    }
}
