//! The synthesis pipeline.
//!
//! ```text
//! Router change ──► resolve() ──► ProviderRegistry::run() ──► merge()
//!                                                                │
//!                        ┌───────────────────────────────────────┘
//!                        ▼
//!            HeadRenderer (SSR markup, or diff + patch after navigation)
//! ```
//!
//! One [`HeadEngine`] serves one document. `server_render` produces the
//! initial `<head>`, `hydrate` attaches the client runtime, `navigate`
//! re-runs the pipeline and patches the live head. Navigations are
//! serialized by the renderer lock; a navigation that was superseded while
//! computing is dropped before it can apply stale tags.

use parking_lot::Mutex;

use crate::config::{ConfigError, SiteConfig};
use crate::content::ContentIndex;
use crate::entity::resolve_or_fallback;
use crate::provider::{ProvideContext, ProviderRegistry};
use crate::renderer::{ApplyError, DocumentHead, HeadRenderer, Phase};
use crate::router::Router;
use crate::tags::{HeadTagSet, TagPatch, merge};

/// Head tag synthesis for one server-rendered, client-hydrated document.
pub struct HeadEngine {
    config: SiteConfig,
    content: ContentIndex,
    registry: ProviderRegistry,
    router: Router,
    renderer: Mutex<HeadRenderer>,
}

impl HeadEngine {
    /// Build an engine. The configuration is validated up front; overlapping
    /// route prefixes never reach the resolver.
    pub fn new(
        config: SiteConfig,
        content: ContentIndex,
        registry: ProviderRegistry,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            content,
            registry,
            router: Router::new("/"),
            renderer: Mutex::new(HeadRenderer::new()),
        })
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn phase(&self) -> Phase {
        self.renderer.lock().phase()
    }

    /// Text of the live `<title>`, if any.
    pub fn title(&self) -> Option<String> {
        self.renderer.lock().title().map(str::to_string)
    }

    /// Inner markup of the live document head.
    pub fn head_markup(&self) -> String {
        self.renderer.lock().head().markup()
    }

    /// Run resolver, providers and merger for a path.
    ///
    /// Never fails: an unresolvable path becomes the NotFound entity, and if
    /// every provider fails the minimal title+canonical set is used instead.
    pub fn compute(&self, path: &str) -> HeadTagSet {
        let entity = resolve_or_fallback(path, &self.config, &self.content);
        let ctx = ProvideContext {
            config: &self.config,
            content: &self.content,
        };
        let patches = self.registry.run(&entity, &ctx);
        if patches.is_empty() {
            log::error!("no provider produced tags for {entity}, using minimal head");
            return self.minimal_set(path);
        }
        merge(patches)
    }

    /// Serialize the initial `<head>` markup for a server-rendered response.
    pub fn server_render(&self, path: &str) -> Result<String, ApplyError> {
        self.router.set(path);
        let set = self.compute(&self.router.current().path);
        self.renderer.lock().server_render(set)
    }

    /// Attach the client runtime to the server-rendered document.
    pub fn hydrate(&self) -> Result<(), ApplyError> {
        self.renderer.lock().hydrate()
    }

    /// Client-side navigation: update the router, re-synthesize, patch the
    /// live head.
    pub fn navigate(&self, raw: &str) -> Result<(), ApplyError> {
        let generation = self.router.set(raw);
        let path = self.router.current().path.clone();
        self.apply_navigation(generation, &path)
    }

    fn apply_navigation(&self, generation: u64, path: &str) -> Result<(), ApplyError> {
        let set = self.compute(path);
        let mut renderer = self.renderer.lock();
        if self.router.generation() != generation {
            // A newer navigation is in flight; applying this one would put
            // stale tags over its result.
            log::debug!("navigation to {path} superseded, head update dropped");
            return Ok(());
        }
        renderer.navigate(set)
    }

    /// Title and canonical only, the degraded head used when the provider
    /// pipeline produces nothing.
    fn minimal_set(&self, path: &str) -> HeadTagSet {
        merge([TagPatch::new()
            .title(&self.config.base.title)
            .canonical(self.config.permalink(path))])
    }

    /// Snapshot accessor for the live head, test and debugging aid.
    pub fn with_head<R>(&self, f: impl FnOnce(&DocumentHead) -> R) -> R {
        f(self.renderer.lock().head())
    }
}
