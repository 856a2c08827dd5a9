//! The built-in metadata provider.
//!
//! Computes the framework defaults an SEO extension would otherwise
//! override: title, canonical link, Open Graph and mirrored Twitter tags,
//! and a JSON-LD block typed per entity.
//!
//! # Titles
//!
//! | Entity           | Title                           |
//! |------------------|---------------------------------|
//! | content entities | `<Entity Title> | <Site Name>`  |
//! | homepage         | `<Site Name> | <Tagline>`       |
//! | not found        | `Page not found | <Site Name>`  |

use anyhow::Result;

use super::schema;
use super::{MetadataProvider, ProvideContext};
use crate::content::ContentData;
use crate::entity::EntityReference;
use crate::tags::TagPatch;

/// The provider every site starts from, registered at
/// [`DEFAULT_TIER`](super::DEFAULT_TIER).
pub struct DefaultProvider;

impl MetadataProvider for DefaultProvider {
    fn name(&self) -> &'static str {
        "default"
    }

    fn provide(&self, entity: &EntityReference, ctx: &ProvideContext<'_>) -> Result<TagPatch> {
        let site = &ctx.config.base;
        let content = ctx.content_for(entity);
        let og = &ctx.config.meta.open_graph;

        let patch = match entity {
            EntityReference::Homepage => {
                let title = format!("{} | {}", site.title, site.tagline);
                let url = ctx.config.permalink("/");
                let mut patch = TagPatch::new()
                    .title(&title)
                    .canonical(&url)
                    .schema(schema::web_site(&site.title, &site.tagline, &url));
                if og.homepage {
                    patch = social_tags(patch, "website", &site.title, &url, None);
                    if !site.tagline.is_empty() {
                        patch = patch
                            .property("og:description", &site.tagline)
                            .property("twitter:description", &site.tagline);
                    }
                }
                patch
            }

            EntityReference::Post { slug } | EntityReference::CustomPostType { slug, .. } => {
                let heading = entity_title(content, slug);
                let url = canonical_for(ctx, content, entity);
                let mut patch = TagPatch::new()
                    .title(site_title(&heading, &site.title))
                    .canonical(&url)
                    .schema(schema::article(&heading, &url, content));
                if og.posts {
                    patch = social_tags(patch, "article", &heading, &url, content);
                    if let Some(data) = content {
                        if let Some(date) = &data.date {
                            patch = patch.property("article:published_time", date);
                        }
                        if let Some(author) = &data.author {
                            patch = patch.property("article:author", author);
                        }
                    }
                }
                patch
            }

            EntityReference::Page { slug } => {
                let heading = entity_title(content, slug);
                let url = canonical_for(ctx, content, entity);
                let mut patch = TagPatch::new()
                    .title(site_title(&heading, &site.title))
                    .canonical(&url)
                    .schema(schema::web_page(&heading, &url));
                if og.pages {
                    patch = social_tags(patch, "website", &heading, &url, content);
                }
                patch
            }

            EntityReference::Category { slug }
            | EntityReference::Tag { slug }
            | EntityReference::CustomTaxonomyTerm { slug, .. } => {
                let heading = entity_title(content, slug);
                let url = canonical_for(ctx, content, entity);
                let mut patch = TagPatch::new()
                    .title(site_title(&heading, &site.title))
                    .canonical(&url)
                    .schema(schema::collection_page(&heading, &url));
                if og.archives {
                    patch = social_tags(patch, "website", &heading, &url, content);
                }
                patch
            }

            EntityReference::Author { slug } => {
                let heading = entity_title(content, slug);
                let url = canonical_for(ctx, content, entity);
                let mut patch = TagPatch::new()
                    .title(site_title(&heading, &site.title))
                    .canonical(&url)
                    .schema(schema::person(&heading, &url));
                if og.authors {
                    patch = social_tags(patch, "profile", &heading, &url, content)
                        .property("profile:username", slug.as_str());
                }
                patch
            }

            EntityReference::CustomPostTypeArchive { post_type } => {
                let route = ctx.config.routes.post_types.iter().find(|pt| pt.name == *post_type);
                let heading = route
                    .map(|r| r.label.clone())
                    .unwrap_or_else(|| title_from_slug(post_type));
                let url = route
                    .map(|r| ctx.config.permalink(&format!("/{}/", r.archive)))
                    .unwrap_or_else(|| ctx.config.permalink(&format!("/{post_type}/")));
                let mut patch = TagPatch::new()
                    .title(site_title(&heading, &site.title))
                    .canonical(&url)
                    .schema(schema::collection_page(&heading, &url));
                if og.archives {
                    patch = social_tags(patch, "website", &heading, &url, None);
                }
                patch
            }

            EntityReference::NotFound { path } => TagPatch::new()
                .title(site_title("Page not found", &site.title))
                .canonical(ctx.config.permalink(path))
                .name("robots", "noindex"),
        };

        Ok(patch)
    }
}

/// `"<Entity Title> | <Site Name>"`.
fn site_title(heading: &str, site_name: &str) -> String {
    format!("{heading} | {site_name}")
}

/// Entity heading: fetched title, or the slug made readable when the fetch
/// collaborator has no entry.
fn entity_title(content: Option<&ContentData>, slug: &str) -> String {
    match content {
        Some(data) if !data.title.is_empty() => data.title.clone(),
        _ => title_from_slug(slug),
    }
}

/// `linda-hamilton` -> `Linda hamilton`. Best effort only; real titles come
/// from the content index.
fn title_from_slug(slug: &str) -> String {
    let spaced = slug.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

/// Canonical permalink: the fetched link when present, otherwise derived
/// from the entity shape.
fn canonical_for(
    ctx: &ProvideContext<'_>,
    content: Option<&ContentData>,
    entity: &EntityReference,
) -> String {
    if let Some(data) = content
        && !data.link.is_empty()
    {
        return ctx.config.permalink(&data.link);
    }
    let path = match entity {
        EntityReference::Post { slug } | EntityReference::Page { slug } => format!("/{slug}/"),
        EntityReference::Category { slug } => format!("/category/{slug}/"),
        EntityReference::Tag { slug } => format!("/tag/{slug}/"),
        EntityReference::Author { slug } => format!("/author/{slug}"),
        EntityReference::CustomPostType { post_type, slug } => {
            let prefix = ctx
                .config
                .routes
                .post_types
                .iter()
                .find(|pt| pt.name == *post_type)
                .map(|pt| pt.slug.as_str())
                .unwrap_or(post_type.as_str());
            format!("/{prefix}/{slug}/")
        }
        EntityReference::CustomTaxonomyTerm { taxonomy, slug } => {
            let prefix = ctx
                .config
                .routes
                .taxonomies
                .iter()
                .find(|tax| tax.name == *taxonomy)
                .map(|tax| tax.slug.as_str())
                .unwrap_or(taxonomy.as_str());
            format!("/{prefix}/{slug}/")
        }
        _ => "/".to_string(),
    };
    ctx.config.permalink(&path)
}

/// Open Graph tags plus their `twitter:` mirrors.
fn social_tags(
    patch: TagPatch,
    og_type: &str,
    heading: &str,
    url: &str,
    content: Option<&ContentData>,
) -> TagPatch {
    let image = content.and_then(|data| data.image.as_deref());
    let card = if image.is_some() { "summary_large_image" } else { "summary" };

    let mut patch = patch
        .property("og:type", og_type)
        .property("og:title", heading)
        .property("og:url", url)
        .property("twitter:card", card)
        .property("twitter:title", heading);

    if let Some(description) = content.and_then(|data| data.description.as_deref()) {
        patch = patch
            .property("og:description", description)
            .property("twitter:description", description);
    }
    if let Some(image) = image {
        patch = patch
            .property("og:image", image)
            .property("twitter:image", image);
    }
    patch
}
