//! `[routes]` section configuration.
//!
//! Declares the custom post type and custom taxonomy routes the entity
//! resolver recognizes. The built-in prefixes (`category`, `tag`, `author`)
//! are always present and do not need to be declared.
//!
//! # Example
//! ```toml
//! [[routes.post_types]]
//! name = "movie"
//! slug = "movie"
//! archive = "movies"
//! label = "Movies"
//!
//! [[routes.taxonomies]]
//! name = "actor"
//! slug = "actor"
//! ```

use serde::{Deserialize, Serialize};

/// A custom post type with a singular route and an archive route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostTypeRoute {
    /// Post type name, the key used in the content index (e.g. `movie`).
    pub name: String,

    /// URL prefix of singular items: `/<slug>/<item-slug>/`.
    pub slug: String,

    /// Archive path: `/<archive>/`.
    pub archive: String,

    /// Human-readable archive label (e.g. `Movies`), used as the archive title.
    pub label: String,
}

/// A custom taxonomy with a term route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaxonomyRoute {
    /// Taxonomy name, the key used in the content index (e.g. `actor`).
    pub name: String,

    /// URL prefix of term pages: `/<slug>/<term-slug>/`.
    pub slug: String,
}

/// `[routes]` section - custom post types and taxonomies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoutesConfig {
    /// Custom post types, each with a singular and an archive route.
    #[serde(default)]
    pub post_types: Vec<PostTypeRoute>,

    /// Custom taxonomies, each with a term route.
    #[serde(default)]
    pub taxonomies: Vec<TaxonomyRoute>,
}

/// Route prefixes reserved by the built-in archives.
pub const BUILTIN_PREFIXES: [&str; 3] = ["category", "tag", "author"];

impl RoutesConfig {
    /// All first-segment prefixes this configuration claims, built-ins first.
    ///
    /// Resolution dispatches on the first path segment, so every prefix in
    /// this list must be unique. `SiteConfig::validate` enforces that.
    pub fn claimed_prefixes(&self) -> Vec<&str> {
        let mut prefixes: Vec<&str> = BUILTIN_PREFIXES.to_vec();
        for pt in &self.post_types {
            prefixes.push(&pt.slug);
            prefixes.push(&pt.archive);
        }
        for tax in &self.taxonomies {
            prefixes.push(&tax.slug);
        }
        prefixes
    }

    /// Find the post type whose singular prefix matches `segment`.
    pub fn post_type_by_slug(&self, segment: &str) -> Option<&PostTypeRoute> {
        self.post_types.iter().find(|pt| pt.slug == segment)
    }

    /// Find the post type whose archive path matches `segment`.
    pub fn post_type_by_archive(&self, segment: &str) -> Option<&PostTypeRoute> {
        self.post_types.iter().find(|pt| pt.archive == segment)
    }

    /// Find the taxonomy whose term prefix matches `segment`.
    pub fn taxonomy_by_slug(&self, segment: &str) -> Option<&TaxonomyRoute> {
        self.taxonomies.iter().find(|tax| tax.slug == segment)
    }
}
