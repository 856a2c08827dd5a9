//! Head tag data model.
//!
//! A [`HeadTagSet`] is the canonical, merged set of tags for one entity; a
//! [`TagPatch`] is one provider's partial contribution. Kinds and their
//! cardinality:
//!
//! | Kind      | Cardinality | Identity                  |
//! |-----------|-------------|---------------------------|
//! | title     | at most one | fixed                     |
//! | canonical | at most one | fixed                     |
//! | meta      | many        | (attribute kind, key)     |
//! | schema    | usually one | position                  |
//!
//! Meta tags are ordered and unique per key; re-adding an existing key
//! replaces the value in place, so ordering stays deterministic across
//! merges.

mod diff;
mod merge;
mod render;

pub use diff::{HeadOp, diff};
pub use merge::merge;
pub use render::{render_head, render_tag};

use compact_str::CompactString;
use serde_json::Value;
use smallvec::SmallVec;

/// Which HTML attribute carries a meta tag's key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaAttr {
    /// `<meta property="..." content="...">` (Open Graph family, Twitter).
    Property,
    /// `<meta name="..." content="...">` (robots, description).
    Name,
}

impl MetaAttr {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Name => "name",
        }
    }
}

/// A single `<meta>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub attr: MetaAttr,
    pub key: CompactString,
    pub content: String,
}

impl MetaTag {
    pub fn property(key: &str, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Property,
            key: key.into(),
            content: content.into(),
        }
    }

    pub fn name(key: &str, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Name,
            key: key.into(),
            content: content.into(),
        }
    }
}

/// One renderable head tag.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadTag {
    Title(String),
    Canonical(String),
    Meta(MetaTag),
    Schema(Value),
}

/// Identity of a tag within a set, the diff key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagId {
    Title,
    Canonical,
    Meta(MetaAttr, CompactString),
    Schema(usize),
}

/// Inline-allocated meta tag list; typical sets fit without spilling.
pub type MetaList = SmallVec<[MetaTag; 8]>;

/// The canonical, merged head tag set for one entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadTagSet {
    pub title: Option<String>,
    pub canonical: Option<String>,
    meta: MetaList,
    /// Zero or one in practice; more are tolerated if several providers emit
    /// blocks in one patch.
    schema: Vec<Value>,
}

impl HeadTagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.canonical.is_none()
            && self.meta.is_empty()
            && self.schema.is_empty()
    }

    pub fn meta(&self) -> &[MetaTag] {
        &self.meta
    }

    pub fn schema(&self) -> &[Value] {
        &self.schema
    }

    /// Value of a meta key, if present.
    pub fn meta_content(&self, attr: MetaAttr, key: &str) -> Option<&str> {
        self.meta
            .iter()
            .find(|m| m.attr == attr && m.key == key)
            .map(|m| m.content.as_str())
    }

    /// Insert a meta tag, replacing the value in place when the key exists.
    pub fn upsert_meta(&mut self, tag: MetaTag) {
        match self
            .meta
            .iter_mut()
            .find(|m| m.attr == tag.attr && m.key == tag.key)
        {
            Some(existing) => existing.content = tag.content,
            None => self.meta.push(tag),
        }
    }

    /// Remove a meta key if present.
    pub fn remove_meta(&mut self, attr: MetaAttr, key: &str) {
        self.meta.retain(|m| !(m.attr == attr && m.key == key));
    }

    pub(crate) fn set_schema(&mut self, blocks: Vec<Value>) {
        self.schema = blocks;
    }

    /// All tags in canonical order: title, canonical, meta, schema.
    pub fn entries(&self) -> Vec<(TagId, HeadTag)> {
        let mut entries = Vec::with_capacity(2 + self.meta.len() + self.schema.len());
        if let Some(title) = &self.title {
            entries.push((TagId::Title, HeadTag::Title(title.clone())));
        }
        if let Some(href) = &self.canonical {
            entries.push((TagId::Canonical, HeadTag::Canonical(href.clone())));
        }
        for meta in &self.meta {
            entries.push((
                TagId::Meta(meta.attr, meta.key.clone()),
                HeadTag::Meta(meta.clone()),
            ));
        }
        for (i, block) in self.schema.iter().enumerate() {
            entries.push((TagId::Schema(i), HeadTag::Schema(block.clone())));
        }
        entries
    }

    /// Look up one tag by identity.
    pub fn get(&self, id: &TagId) -> Option<HeadTag> {
        match id {
            TagId::Title => self.title.clone().map(HeadTag::Title),
            TagId::Canonical => self.canonical.clone().map(HeadTag::Canonical),
            TagId::Meta(attr, key) => self
                .meta
                .iter()
                .find(|m| m.attr == *attr && m.key == *key)
                .cloned()
                .map(HeadTag::Meta),
            TagId::Schema(i) => self.schema.get(*i).cloned().map(HeadTag::Schema),
        }
    }
}

/// One provider's partial contribution, merged by [`merge`].
#[derive(Debug, Clone, Default)]
pub struct TagPatch {
    pub title: Option<String>,
    pub canonical: Option<String>,
    pub meta: MetaList,
    pub schema: Vec<Value>,
    /// Meta keys whose earlier contributions this patch suppresses outright
    /// (the override flag for multi-valued kinds). Suppression runs before
    /// this patch's own meta tags are applied.
    pub suppress: Vec<(MetaAttr, CompactString)>,
}

impl TagPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn canonical(mut self, href: impl Into<String>) -> Self {
        self.canonical = Some(href.into());
        self
    }

    pub fn meta(mut self, tag: MetaTag) -> Self {
        self.meta.push(tag);
        self
    }

    pub fn property(self, key: &str, content: impl Into<String>) -> Self {
        self.meta(MetaTag::property(key, content))
    }

    pub fn name(self, key: &str, content: impl Into<String>) -> Self {
        self.meta(MetaTag::name(key, content))
    }

    pub fn schema(mut self, block: Value) -> Self {
        self.schema.push(block);
        self
    }

    pub fn suppress_property(mut self, key: &str) -> Self {
        self.suppress.push((MetaAttr::Property, key.into()));
        self
    }
}
