//! Navigation state.
//!
//! One writer (the navigation action), many readers. The current link lives
//! in an [`ArcSwap`], so readers always observe a fully written value:
//! once [`Router::set`] returns, every subsequent [`Router::current`] sees
//! the new link.
//!
//! Each navigation bumps a generation counter. The engine captures the
//! generation before computing a head update and drops the update if a newer
//! navigation arrived in between (last navigation wins, stale tags are never
//! applied over newer ones).

use arc_swap::ArcSwap;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// A normalized navigated link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Path with query string and fragment stripped, always `/`-prefixed.
    pub path: String,
}

impl Link {
    /// Normalize a raw link. Query parameters identify the environment, not
    /// the content, so they never reach the resolver.
    pub fn parse(raw: &str) -> Self {
        let path = raw.split(['?', '#']).next().unwrap_or(raw);
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        Self { path }
    }
}

type Subscriber = Box<dyn Fn(&Link) + Send + Sync>;

/// Process-wide navigation context.
pub struct Router {
    current: ArcSwap<Link>,
    generation: AtomicU64,
    subscribers: RwLock<Vec<Subscriber>>,
}

impl Router {
    pub fn new(initial: &str) -> Self {
        Self {
            current: ArcSwap::from_pointee(Link::parse(initial)),
            generation: AtomicU64::new(0),
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// The current link.
    pub fn current(&self) -> Arc<Link> {
        self.current.load_full()
    }

    /// Generation of the latest navigation.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Navigate. Returns the generation of this navigation; observers are
    /// notified after the link is visible to readers.
    pub fn set(&self, raw: &str) -> u64 {
        let link = Link::parse(raw);
        self.current.store(Arc::new(link.clone()));
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        for subscriber in self.subscribers.read().iter() {
            subscriber(&link);
        }
        generation
    }

    /// Register a change observer. Registration happens at startup; there is
    /// no deregistration.
    pub fn subscribe(&self, subscriber: impl Fn(&Link) + Send + Sync + 'static) {
        self.subscribers.write().push(Box::new(subscriber));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_parse_strips_query_and_fragment() {
        assert_eq!(Link::parse("/hello-world/?x=1#top").path, "/hello-world/");
        assert_eq!(Link::parse("sample-page/").path, "/sample-page/");
    }

    #[test]
    fn test_read_after_write() {
        let router = Router::new("/");
        assert_eq!(router.current().path, "/");

        router.set("/hello-world/?preview_token=abc123");
        assert_eq!(router.current().path, "/hello-world/");
    }

    #[test]
    fn test_generation_increments() {
        let router = Router::new("/");
        assert_eq!(router.generation(), 0);
        let first = router.set("/a/");
        let second = router.set("/b/");
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(router.generation(), 2);
    }

    #[test]
    fn test_subscribers_observe_new_link() {
        let router = Router::new("/");
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        router.subscribe(move |link| sink.lock().unwrap().push(link.path.clone()));

        router.set("/a/");
        router.set("/b/?q=1");
        assert_eq!(*seen.lock().unwrap(), vec!["/a/".to_string(), "/b/".to_string()]);
    }
}
