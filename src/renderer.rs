//! Head rendering and in-place patching.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized ──server_render──► ServerRendered ──hydrate──► Hydrated
//!                                                                 │
//!                                              ┌──────────────────┘
//!                                              ▼
//!                                          Navigating ──commit──► Settled
//!                                              ▲                    │
//!                                              └──────navigate──────┘
//! ```
//!
//! `server_render` serializes the initial tag set into `<head>` markup.
//! `hydrate` attaches without touching a single element, so first paint is
//! byte-for-byte what the server sent. Each `navigate` diffs the previous
//! set against the next one and rebuilds the element list in full before
//! committing; a failure mid-apply leaves the previous head in place.

use thiserror::Error;

use crate::tags::{HeadOp, HeadTagSet, TagId, diff, render_head, render_tag};

/// Renderer lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    ServerRendered,
    Hydrated,
    Navigating,
    Settled,
}

/// Head application errors.
#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("`{action}` is not valid in phase {phase:?}")]
    Phase { action: &'static str, phase: Phase },

    #[error("document head lost tag {0:?} mid-apply")]
    MissingElement(TagId),

    #[error(transparent)]
    Render(#[from] anyhow::Error),
}

/// One live element in the document head.
#[derive(Debug, Clone)]
pub struct HeadElement {
    pub id: TagId,
    pub markup: String,
    /// Creation stamp. An element that survives a navigation untouched keeps
    /// its serial; replaced and inserted elements get a fresh one.
    pub serial: u64,
}

/// The document `<head>`, modeled as an ordered element list.
#[derive(Debug, Default)]
pub struct DocumentHead {
    elements: Vec<HeadElement>,
}

impl DocumentHead {
    pub fn elements(&self) -> &[HeadElement] {
        &self.elements
    }

    /// Concatenated markup of all elements, the inner HTML of `<head>`.
    pub fn markup(&self) -> String {
        self.elements.iter().map(|e| e.markup.as_str()).collect()
    }
}

/// Synthesizes and maintains the document head across SSR, hydration and
/// client-side navigations.
pub struct HeadRenderer {
    phase: Phase,
    current: HeadTagSet,
    head: DocumentHead,
    next_serial: u64,
}

impl Default for HeadRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadRenderer {
    pub fn new() -> Self {
        Self {
            phase: Phase::Uninitialized,
            current: HeadTagSet::new(),
            head: DocumentHead::default(),
            next_serial: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn head(&self) -> &DocumentHead {
        &self.head
    }

    /// Current tag set, as last applied.
    pub fn current(&self) -> &HeadTagSet {
        &self.current
    }

    /// Text of the live `<title>`, if any.
    pub fn title(&self) -> Option<&str> {
        self.current.title.as_deref()
    }

    /// Serialize the initial tag set and return the full `<head>` markup.
    ///
    /// Valid only once, before hydration.
    pub fn server_render(&mut self, set: HeadTagSet) -> Result<String, ApplyError> {
        self.expect_phase(Phase::Uninitialized, "server_render")?;

        let markup = render_head(&set)?;
        let mut elements = Vec::new();
        for (id, tag) in set.entries() {
            elements.push(HeadElement {
                id,
                markup: render_tag(&tag)?,
                serial: self.take_serial(),
            });
        }
        self.head.elements = elements;
        self.current = set;
        self.phase = Phase::ServerRendered;
        Ok(markup)
    }

    /// Attach the client runtime. Touches no element: first-paint tags stay
    /// exactly as the server produced them.
    pub fn hydrate(&mut self) -> Result<(), ApplyError> {
        self.expect_phase(Phase::ServerRendered, "hydrate")?;
        self.phase = Phase::Hydrated;
        Ok(())
    }

    /// Apply the tag set of a newly navigated entity.
    ///
    /// The full next element list is built first and committed in one move;
    /// on any error the previous set and elements remain in place.
    pub fn navigate(&mut self, next: HeadTagSet) -> Result<(), ApplyError> {
        if !matches!(self.phase, Phase::Hydrated | Phase::Settled) {
            return Err(ApplyError::Phase {
                action: "navigate",
                phase: self.phase,
            });
        }
        self.phase = Phase::Navigating;

        let ops = diff(&self.current, &next);
        match self.apply_ops(&next, &ops) {
            Ok(elements) => {
                self.head.elements = elements;
                self.current = next;
                self.phase = Phase::Settled;
                Ok(())
            }
            Err(err) => {
                // Nothing was committed; the previous head stays intact.
                self.phase = Phase::Settled;
                Err(err)
            }
        }
    }

    /// Build the next element list from the diff, reusing untouched elements.
    fn apply_ops(
        &mut self,
        next: &HeadTagSet,
        ops: &[HeadOp],
    ) -> Result<Vec<HeadElement>, ApplyError> {
        let mut pool: Vec<HeadElement> = self.head.elements.clone();

        for op in ops {
            match op {
                HeadOp::Remove(id) => pool.retain(|e| e.id != *id),
                HeadOp::Insert(id, tag) | HeadOp::Update(id, tag) => {
                    let element = HeadElement {
                        id: id.clone(),
                        markup: render_tag(tag)?,
                        serial: self.take_serial(),
                    };
                    match pool.iter_mut().find(|e| e.id == *id) {
                        Some(existing) => *existing = element,
                        None => pool.push(element),
                    }
                }
            }
        }

        // Element order follows the new set.
        next.entries()
            .into_iter()
            .map(|(id, _)| {
                pool.iter()
                    .find(|e| e.id == id)
                    .cloned()
                    .ok_or(ApplyError::MissingElement(id))
            })
            .collect()
    }

    fn expect_phase(&self, expected: Phase, action: &'static str) -> Result<(), ApplyError> {
        if self.phase != expected {
            return Err(ApplyError::Phase {
                action,
                phase: self.phase,
            });
        }
        Ok(())
    }

    fn take_serial(&mut self) -> u64 {
        self.next_serial += 1;
        self.next_serial
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{TagPatch, merge};

    fn set(title: &str, og_title: Option<&str>) -> HeadTagSet {
        let mut patch = TagPatch::new().title(title).canonical("https://x/");
        if let Some(og) = og_title {
            patch = patch.property("og:title", og);
        }
        merge([patch])
    }

    #[test]
    fn test_server_render_then_hydrate_keeps_markup() {
        let mut renderer = HeadRenderer::new();
        let markup = renderer.server_render(set("Home", Some("Home"))).unwrap();
        assert_eq!(renderer.phase(), Phase::ServerRendered);
        assert_eq!(markup, format!("<head>{}</head>", renderer.head().markup()));

        let serials: Vec<u64> = renderer.head().elements().iter().map(|e| e.serial).collect();
        renderer.hydrate().unwrap();
        assert_eq!(renderer.phase(), Phase::Hydrated);

        let after: Vec<u64> = renderer.head().elements().iter().map(|e| e.serial).collect();
        assert_eq!(serials, after);
    }

    #[test]
    fn test_phase_misuse_rejected() {
        let mut renderer = HeadRenderer::new();
        assert!(matches!(
            renderer.hydrate(),
            Err(ApplyError::Phase { action: "hydrate", .. })
        ));
        assert!(matches!(
            renderer.navigate(set("X", None)),
            Err(ApplyError::Phase { action: "navigate", .. })
        ));

        renderer.server_render(set("Home", None)).unwrap();
        assert!(matches!(
            renderer.server_render(set("Home", None)),
            Err(ApplyError::Phase { action: "server_render", .. })
        ));
    }

    #[test]
    fn test_navigate_removes_stale_and_keeps_untouched() {
        let mut renderer = HeadRenderer::new();
        renderer.server_render(set("Home", Some("Home"))).unwrap();
        renderer.hydrate().unwrap();

        let canonical_serial = renderer
            .head()
            .elements()
            .iter()
            .find(|e| e.id == TagId::Canonical)
            .unwrap()
            .serial;

        // Same canonical, new title, og:title gone.
        renderer.navigate(set("Post", None)).unwrap();
        assert_eq!(renderer.phase(), Phase::Settled);
        assert_eq!(renderer.title(), Some("Post"));

        let head = renderer.head();
        assert_eq!(head.elements().len(), 2);
        assert!(!head.markup().contains("og:title"));

        // The canonical element was not touched by the patch.
        let canonical = head
            .elements()
            .iter()
            .find(|e| e.id == TagId::Canonical)
            .unwrap();
        assert_eq!(canonical.serial, canonical_serial);
    }

    #[test]
    fn test_navigate_back_and_forth_is_idempotent() {
        let mut renderer = HeadRenderer::new();
        renderer.server_render(set("Home", Some("Home"))).unwrap();
        renderer.hydrate().unwrap();

        renderer.navigate(set("Post", Some("Post"))).unwrap();
        let first = renderer.head().markup();

        renderer.navigate(set("Home", Some("Home"))).unwrap();
        renderer.navigate(set("Post", Some("Post"))).unwrap();
        assert_eq!(renderer.head().markup(), first);
    }

    #[test]
    fn test_navigation_to_same_set_touches_nothing() {
        let mut renderer = HeadRenderer::new();
        renderer.server_render(set("Home", Some("Home"))).unwrap();
        renderer.hydrate().unwrap();

        let serials: Vec<u64> = renderer.head().elements().iter().map(|e| e.serial).collect();
        renderer.navigate(set("Home", Some("Home"))).unwrap();
        let after: Vec<u64> = renderer.head().elements().iter().map(|e| e.serial).collect();
        assert_eq!(serials, after);
    }
}
