//! Site configuration.
//!
//! # Sections
//!
//! | Section   | Purpose                                        |
//! |-----------|------------------------------------------------|
//! | `[base]`  | Site identity (name, tagline, url)             |
//! | `[routes]`| Custom post type and taxonomy routes           |
//! | `[meta]`  | Open Graph / Twitter emission per entity class |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Test WP Site"
//! tagline = "Just another WordPress site"
//! url = "https://test.example.org"
//!
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

mod base;
mod error;
mod meta;
mod routes;

pub use base::BaseConfig;
pub use error::ConfigError;
pub use meta::{MetaConfig, OpenGraphConfig};
pub use routes::{BUILTIN_PREFIXES, PostTypeRoute, RoutesConfig, TaxonomyRoute};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Complete site configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// `[base]` - site identity.
    pub base: BaseConfig,

    /// `[routes]` - custom post types and taxonomies.
    #[serde(default)]
    pub routes: RoutesConfig,

    /// `[meta]` - social meta tag emission.
    #[serde(default)]
    pub meta: MetaConfig,
}

impl SiteConfig {
    /// Parse and validate a configuration from TOML.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Route prefixes must be pairwise disjoint: resolution dispatches on the
    /// first path segment, so an overlap would make two entity types claim
    /// the same path. Overlaps are a configuration error, never a runtime
    /// tie-break.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base.title.is_empty() {
            return Err(ConfigError::Validation(
                "`base.title` must not be empty".to_string(),
            ));
        }
        if self.base.url.ends_with('/') {
            return Err(ConfigError::Validation(
                "`base.url` must not end with a slash".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for prefix in self.routes.claimed_prefixes() {
            if prefix.is_empty() || prefix.contains('/') {
                return Err(ConfigError::Validation(format!(
                    "route prefix `{prefix}` must be a single non-empty path segment"
                )));
            }
            if !seen.insert(prefix) {
                return Err(ConfigError::Validation(format!(
                    "route prefix `{prefix}` declared twice"
                )));
            }
        }
        Ok(())
    }

    /// Absolute permalink for a site-relative path.
    pub fn permalink(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base.url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let config = SiteConfig::from_toml_str(
            r#"
            [base]
            title = "Test WP Site"
            url = "https://test.example.org"
        "#,
        )
        .unwrap();
        assert_eq!(config.base.title, "Test WP Site");
        assert!(config.routes.post_types.is_empty());
    }

    #[test]
    fn test_overlapping_prefix_rejected() {
        // `tag` collides with the built-in tag archive prefix.
        let err = SiteConfig::from_toml_str(
            r#"
            [base]
            title = "Test"
            url = "https://test.example.org"

            [[routes.taxonomies]]
            name = "tag"
            slug = "tag"
        "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(format!("{err}").contains("tag"));
    }

    #[test]
    fn test_archive_singular_collision_rejected() {
        let err = SiteConfig::from_toml_str(
            r#"
            [base]
            title = "Test"
            url = "https://test.example.org"

            [[routes.post_types]]
            name = "movie"
            slug = "movie"
            archive = "movie"
            label = "Movies"
        "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_trailing_slash_url_rejected() {
        let err = SiteConfig::from_toml_str(
            r#"
            [base]
            title = "Test"
            url = "https://test.example.org/"
        "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_permalink() {
        let config = SiteConfig::from_toml_str(
            r#"
            [base]
            title = "Test"
            url = "https://test.example.org"
        "#,
        )
        .unwrap();
        assert_eq!(config.permalink("/"), "https://test.example.org/");
        assert_eq!(
            config.permalink("/hello-world/"),
            "https://test.example.org/hello-world/"
        );
        assert_eq!(
            config.permalink("https://elsewhere.org/x/"),
            "https://elsewhere.org/x/"
        );
    }
}
