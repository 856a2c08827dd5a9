//! Entity resolution.
//!
//! Maps a navigated link to a typed [`EntityReference`]. Resolution is a pure
//! function of the path, the route configuration and the content index; it
//! never fetches anything.
//!
//! # Resolution order
//!
//! | Shape                  | Entity                        |
//! |------------------------|-------------------------------|
//! | `/`                    | Homepage                      |
//! | `/category/<slug>/`    | Category                      |
//! | `/tag/<slug>/`         | Tag                           |
//! | `/author/<slug>`       | Author                        |
//! | `/<cpt-slug>/<slug>/`  | CustomPostType (configured)   |
//! | `/<cpt-archive>/`      | CustomPostTypeArchive         |
//! | `/<tax-slug>/<slug>/`  | CustomTaxonomyTerm            |
//! | `/<slug>/`             | Post or Page (index lookup)   |
//!
//! Prefix disjointness is guaranteed by `SiteConfig::validate`, so dispatch
//! on the first segment cannot be ambiguous.

use compact_str::CompactString;
use std::fmt;
use thiserror::Error;

use crate::config::SiteConfig;
use crate::content::ContentIndex;

/// Reference to the currently addressed piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityReference {
    Post { slug: CompactString },
    Page { slug: CompactString },
    Category { slug: CompactString },
    Tag { slug: CompactString },
    Author { slug: CompactString },
    CustomPostType {
        post_type: CompactString,
        slug: CompactString,
    },
    CustomPostTypeArchive { post_type: CompactString },
    CustomTaxonomyTerm {
        taxonomy: CompactString,
        slug: CompactString,
    },
    Homepage,
    /// Recovery variant: the path matched no known content shape.
    NotFound { path: String },
}

impl fmt::Display for EntityReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Post { slug } => write!(f, "post:{slug}"),
            Self::Page { slug } => write!(f, "page:{slug}"),
            Self::Category { slug } => write!(f, "category:{slug}"),
            Self::Tag { slug } => write!(f, "tag:{slug}"),
            Self::Author { slug } => write!(f, "author:{slug}"),
            Self::CustomPostType { post_type, slug } => write!(f, "{post_type}:{slug}"),
            Self::CustomPostTypeArchive { post_type } => write!(f, "{post_type}:archive"),
            Self::CustomTaxonomyTerm { taxonomy, slug } => write!(f, "{taxonomy}:{slug}"),
            Self::Homepage => write!(f, "homepage"),
            Self::NotFound { path } => write!(f, "not-found:{path}"),
        }
    }
}

/// Resolution errors.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no entity matches `{path}`")]
    UnresolvedEntity { path: String },
}

/// Strip query string and fragment, keep a normalized `/`-prefixed path.
///
/// Transports append environment-identifying query parameters (cache
/// busters, preview tokens); none of them take part in resolution.
fn normalize(raw: &str) -> String {
    let path = raw.split(['?', '#']).next().unwrap_or(raw);
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Split a normalized path into its non-empty segments.
fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Resolve a navigated link to an entity reference.
///
/// Fails with [`ResolveError::UnresolvedEntity`] when the path matches no
/// known content shape. Callers that render should prefer
/// [`resolve_or_fallback`].
pub fn resolve(
    raw_link: &str,
    config: &SiteConfig,
    content: &ContentIndex,
) -> Result<EntityReference, ResolveError> {
    let path = normalize(raw_link);
    let entity = match segments(&path).as_slice() {
        [] => Some(EntityReference::Homepage),
        ["category", slug] => Some(EntityReference::Category { slug: (*slug).into() }),
        ["tag", slug] => Some(EntityReference::Tag { slug: (*slug).into() }),
        ["author", slug] => Some(EntityReference::Author { slug: (*slug).into() }),
        [first] => {
            if let Some(pt) = config.routes.post_type_by_archive(first) {
                Some(EntityReference::CustomPostTypeArchive {
                    post_type: pt.name.as_str().into(),
                })
            } else if content.has_post(first) {
                Some(EntityReference::Post { slug: (*first).into() })
            } else if content.has_page(first) {
                Some(EntityReference::Page { slug: (*first).into() })
            } else {
                None
            }
        }
        [first, slug] => {
            if let Some(pt) = config.routes.post_type_by_slug(first) {
                Some(EntityReference::CustomPostType {
                    post_type: pt.name.as_str().into(),
                    slug: (*slug).into(),
                })
            } else if let Some(tax) = config.routes.taxonomy_by_slug(first) {
                Some(EntityReference::CustomTaxonomyTerm {
                    taxonomy: tax.name.as_str().into(),
                    slug: (*slug).into(),
                })
            } else {
                None
            }
        }
        _ => None,
    };
    entity.ok_or(ResolveError::UnresolvedEntity { path })
}

/// Resolve, falling back to [`EntityReference::NotFound`] instead of failing.
///
/// Rendering must never abort on an unknown path; the NotFound entity gets a
/// default title and a `noindex` robots tag from the default provider.
pub fn resolve_or_fallback(
    raw_link: &str,
    config: &SiteConfig,
    content: &ContentIndex,
) -> EntityReference {
    resolve(raw_link, config, content).unwrap_or_else(|err| {
        log::debug!("{err}, rendering not-found head");
        EntityReference::NotFound {
            path: normalize(raw_link),
        }
    })
}
