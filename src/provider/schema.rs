//! JSON-LD schema blocks, typed per entity.

use serde_json::{Value, json};

use crate::content::ContentData;

const CONTEXT: &str = "https://schema.org";

/// `Article` for posts and custom post type singulars.
pub(super) fn article(headline: &str, url: &str, content: Option<&ContentData>) -> Value {
    let mut block = json!({
        "@context": CONTEXT,
        "@type": "Article",
        "headline": headline,
        "mainEntityOfPage": url,
    });
    if let Some(data) = content {
        if let Some(date) = &data.date {
            block["datePublished"] = json!(date);
        }
        if let Some(author) = &data.author {
            block["author"] = json!({ "@type": "Person", "name": author });
        }
        if let Some(image) = &data.image {
            block["image"] = json!(image);
        }
    }
    block
}

/// `WebPage` for static pages.
pub(super) fn web_page(name: &str, url: &str) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "WebPage",
        "name": name,
        "url": url,
    })
}

/// `WebSite` for the homepage.
pub(super) fn web_site(name: &str, tagline: &str, url: &str) -> Value {
    let mut block = json!({
        "@context": CONTEXT,
        "@type": "WebSite",
        "name": name,
        "url": url,
    });
    if !tagline.is_empty() {
        block["description"] = json!(tagline);
    }
    block
}

/// `CollectionPage` for term and post type archives.
pub(super) fn collection_page(name: &str, url: &str) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "CollectionPage",
        "name": name,
        "url": url,
    })
}

/// `Person` for author archives.
pub(super) fn person(name: &str, url: &str) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "Person",
        "name": name,
        "url": url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_with_content() {
        let content = ContentData {
            title: "Hello world!".to_string(),
            link: "/hello-world/".to_string(),
            date: Some("2016-11-25T18:31:11".to_string()),
            author: Some("luisherranz".to_string()),
            ..Default::default()
        };
        let block = article("Hello world!", "https://x/hello-world/", Some(&content));
        assert_eq!(block["@type"], "Article");
        assert_eq!(block["datePublished"], "2016-11-25T18:31:11");
        assert_eq!(block["author"]["name"], "luisherranz");
    }

    #[test]
    fn test_article_without_content() {
        let block = article("Movies", "https://x/movies/", None);
        assert_eq!(block["@type"], "Article");
        assert!(block.get("datePublished").is_none());
    }

    #[test]
    fn test_web_site_tagline_optional() {
        let with = web_site("Test", "A tagline", "https://x/");
        assert_eq!(with["description"], "A tagline");
        let without = web_site("Test", "", "https://x/");
        assert!(without.get("description").is_none());
    }
}
