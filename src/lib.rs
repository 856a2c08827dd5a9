//! Deterministic `<head>` tag synthesis for server-rendered,
//! client-hydrated sites.
//!
//! Given the currently navigated link, masthead resolves the addressed
//! content entity, runs a registry of metadata providers over it, merges
//! their contributions by priority tier and renders the result: `<title>`,
//! canonical `<link>`, Open Graph and Twitter `<meta>` tags, and a JSON-LD
//! schema block. The same tag set serializes into the initial
//! server-rendered markup and patches the live document head after a
//! client-side navigation, with no leftover tags from the previous route.
//!
//! # Components
//!
//! | Module     | Role                                              |
//! |------------|---------------------------------------------------|
//! | `config`   | Site identity, route and social tag configuration |
//! | `content`  | Pre-fetched content snapshot                       |
//! | `entity`   | Path → typed entity reference resolution          |
//! | `provider` | Default + extension metadata providers            |
//! | `tags`     | Tag data model, merge, diff, serialization        |
//! | `router`   | Navigation state, one writer / many readers       |
//! | `renderer` | SSR markup and atomic live-head patching          |
//! | `engine`   | The pipeline, wired end to end                    |
//!
//! # Example
//!
//! ```
//! use masthead::{ContentData, ContentIndex, HeadEngine, SiteConfig};
//! use masthead::provider::{DEFAULT_TIER, DefaultProvider, ProviderRegistry};
//!
//! let config = SiteConfig::from_toml_str(r#"
//!     [base]
//!     title = "Test WP Site"
//!     tagline = "Just another WordPress site"
//!     url = "https://test.example.org"
//! "#).unwrap();
//!
//! let mut content = ContentIndex::new();
//! content.insert_post("hello-world", ContentData {
//!     title: "Hello world!".to_string(),
//!     link: "/hello-world/".to_string(),
//!     ..Default::default()
//! });
//!
//! let registry = ProviderRegistry::builder()
//!     .register(DEFAULT_TIER, DefaultProvider)
//!     .build()
//!     .unwrap();
//!
//! let engine = HeadEngine::new(config, content, registry).unwrap();
//! let head = engine.server_render("/hello-world/").unwrap();
//! assert!(head.contains("<title>Hello world! | Test WP Site</title>"));
//!
//! engine.hydrate().unwrap();
//! engine.navigate("/").unwrap();
//! assert_eq!(
//!     engine.title().as_deref(),
//!     Some("Test WP Site | Just another WordPress site"),
//! );
//! ```

pub mod config;
pub mod content;
pub mod engine;
pub mod entity;
pub mod provider;
pub mod renderer;
pub mod router;
pub mod tags;

pub use config::SiteConfig;
pub use content::{ContentData, ContentIndex};
pub use engine::HeadEngine;
pub use entity::{EntityReference, ResolveError, resolve, resolve_or_fallback};
pub use renderer::{ApplyError, HeadRenderer, Phase};
pub use router::{Link, Router};
pub use tags::{HeadTag, HeadTagSet, MetaAttr, MetaTag, TagPatch};
