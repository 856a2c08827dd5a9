//! Head tag serialization.
//!
//! Every tag renders through the same writer path, so the `<head>` produced
//! for SSR and the per-element markup patched in after a client navigation
//! are byte-identical for identical tag sets.

use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::Cursor;

use super::{HeadTag, HeadTagSet};

type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Render one tag to markup.
pub fn render_tag(tag: &HeadTag) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    write_tag(&mut writer, tag)?;
    into_string(writer)
}

/// Render a full `<head>` element for server-side markup.
pub fn render_head(set: &HeadTagSet) -> Result<String> {
    let mut out = String::from("<head>");
    for (_, tag) in set.entries() {
        out.push_str(&render_tag(&tag)?);
    }
    out.push_str("</head>");
    Ok(out)
}

fn write_tag(writer: &mut XmlWriter, tag: &HeadTag) -> Result<()> {
    match tag {
        HeadTag::Title(text) => write_text_element(writer, "title", text),
        HeadTag::Canonical(href) => {
            write_empty_elem(writer, "link", &[("rel", "canonical"), ("href", href)])
        }
        HeadTag::Meta(meta) => write_empty_elem(
            writer,
            "meta",
            &[(meta.attr.as_str(), meta.key.as_str()), ("content", &meta.content)],
        ),
        HeadTag::Schema(block) => {
            let json = serde_json::to_string(block)?;
            let mut elem = BytesStart::new("script");
            elem.push_attribute(("type", "application/ld+json"));
            writer.write_event(Event::Start(elem))?;
            // Script payload, not XML text: written as-is, no escaping.
            writer.write_event(Event::Text(BytesText::from_escaped(json.as_str())))?;
            writer.write_event(Event::End(BytesEnd::new("script")))?;
            Ok(())
        }
    }
}

/// Write a text element: `<tag>text</tag>`.
#[inline]
fn write_text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write an empty element with attributes: `<tag attr1="val1" ... />`.
#[inline]
fn write_empty_elem(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

fn into_string(writer: XmlWriter) -> Result<String> {
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}
