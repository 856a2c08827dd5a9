//! Metadata providers.
//!
//! A provider turns the current entity into a partial head tag set. The
//! crate ships one, [`DefaultProvider`]; SEO extensions register additional
//! providers at higher tiers and override or extend its output through the
//! merge rules in [`crate::tags::merge`].
//!
//! # Registration
//!
//! Providers are registered once at startup into a [`ProviderRegistry`]:
//!
//! ```
//! use masthead::provider::{DEFAULT_TIER, DefaultProvider, ProviderRegistry};
//!
//! let registry = ProviderRegistry::builder()
//!     .register(DEFAULT_TIER, DefaultProvider)
//!     .build()
//!     .unwrap();
//! ```
//!
//! Tiers are explicit integers and must be unique: two providers on the same
//! tier would make singular-tag precedence an accident of registration
//! order, so the builder rejects the configuration outright.

mod default;
mod schema;

pub use default::DefaultProvider;

use thiserror::Error;

use crate::config::SiteConfig;
use crate::content::{ContentData, ContentIndex};
use crate::entity::EntityReference;
use crate::tags::TagPatch;

/// Tier of the built-in default provider. Extensions register above it.
pub const DEFAULT_TIER: u32 = 0;

/// Everything a provider may read. All content is pre-fetched; providers
/// never block.
pub struct ProvideContext<'a> {
    pub config: &'a SiteConfig,
    pub content: &'a ContentIndex,
}

impl ProvideContext<'_> {
    /// Content entry for the entity, when one exists.
    pub fn content_for(&self, entity: &EntityReference) -> Option<&ContentData> {
        self.content.lookup(entity)
    }
}

/// A unit of head tag computation.
///
/// Implementations must be pure with respect to a single call: the patch
/// depends only on the entity and the context.
pub trait MetadataProvider: Send + Sync {
    /// Stable name, used in logs and registry errors.
    fn name(&self) -> &'static str;

    fn provide(
        &self,
        entity: &EntityReference,
        ctx: &ProvideContext<'_>,
    ) -> anyhow::Result<TagPatch>;
}

/// Registry construction errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("providers `{first}` and `{second}` both registered at tier {tier}")]
    DuplicateTier {
        tier: u32,
        first: &'static str,
        second: &'static str,
    },
}

struct Registered {
    tier: u32,
    provider: Box<dyn MetadataProvider>,
}

/// Ordered provider registry, built once at startup and never mutated.
pub struct ProviderRegistry {
    /// Ascending tier order.
    providers: Vec<Registered>,
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(
                self.providers
                    .iter()
                    .map(|r| (r.tier, r.provider.name())),
            )
            .finish()
    }
}

impl ProviderRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Run every provider against the entity, ascending tier order.
    ///
    /// A failing provider is logged and skipped; the remaining providers
    /// still contribute. The caller merges the returned patches.
    pub fn run(&self, entity: &EntityReference, ctx: &ProvideContext<'_>) -> Vec<TagPatch> {
        let mut patches = Vec::with_capacity(self.providers.len());
        for registered in &self.providers {
            match registered.provider.provide(entity, ctx) {
                Ok(patch) => patches.push(patch),
                Err(err) => {
                    log::warn!(
                        "provider `{}` failed for {entity}: {err:#}",
                        registered.provider.name()
                    );
                }
            }
        }
        patches
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

/// Builder for [`ProviderRegistry`].
#[derive(Default)]
pub struct RegistryBuilder {
    providers: Vec<Registered>,
}

impl RegistryBuilder {
    pub fn register(mut self, tier: u32, provider: impl MetadataProvider + 'static) -> Self {
        self.providers.push(Registered {
            tier,
            provider: Box::new(provider),
        });
        self
    }

    /// Finish registration, rejecting duplicate tiers.
    pub fn build(mut self) -> Result<ProviderRegistry, RegistryError> {
        self.providers.sort_by_key(|r| r.tier);
        for pair in self.providers.windows(2) {
            if pair[0].tier == pair[1].tier {
                return Err(RegistryError::DuplicateTier {
                    tier: pair[0].tier,
                    first: pair[0].provider.name(),
                    second: pair[1].provider.name(),
                });
            }
        }
        Ok(ProviderRegistry {
            providers: self.providers,
        })
    }
}
