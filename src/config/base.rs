//! `[base]` section configuration.
//!
//! Basic site identity used in titles, canonical links and JSON-LD.

use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section - site identity.
///
/// # Example
/// ```toml
/// [base]
/// title = "Test WP Site"
/// tagline = "Just another WordPress site"
/// url = "https://test.example.org"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site name, the `| <Site Name>` suffix of every content title.
    pub title: String,

    /// Site tagline, shown after the site name on the homepage title.
    #[serde(default)]
    pub tagline: String,

    /// Absolute site URL, base of every canonical link.
    /// No trailing slash; `permalink()` joins paths onto it.
    pub url: String,
}
