//! `[meta]` section configuration.
//!
//! Controls which entity classes get Open Graph / Twitter card tags. Schema
//! and canonical links are always emitted and are not configurable here.

use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[meta]` section - social meta tag emission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetaConfig {
    /// Which entity classes emit `og:*` (and mirrored `twitter:*`) tags.
    #[serde(default)]
    pub open_graph: OpenGraphConfig,
}

/// `[meta.open_graph]` - per-class Open Graph toggles.
///
/// Defaults follow the common WordPress SEO plugin setup: social tags on
/// singular views and the homepage, none on archive-only views.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct OpenGraphConfig {
    /// Posts and custom post type singulars (`og:type = article`).
    #[serde(default = "yes")]
    #[educe(Default = true)]
    pub posts: bool,

    /// Pages (`og:type = website`).
    #[serde(default = "yes")]
    #[educe(Default = true)]
    pub pages: bool,

    /// The homepage (`og:type = website`).
    #[serde(default = "yes")]
    #[educe(Default = true)]
    pub homepage: bool,

    /// Author archives (`og:type = profile`, plus `profile:*` sub-properties).
    #[serde(default)]
    pub authors: bool,

    /// Category/tag/taxonomy-term and post type archives.
    #[serde(default)]
    pub archives: bool,
}

fn yes() -> bool {
    true
}
