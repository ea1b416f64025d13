//! Shared reading and writing primitives for the hand-written element codecs.

use std::fmt::Display;
use std::str::FromStr;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use roxmltree::Node;

use crate::error::DescriptorError;
use crate::keyed::{Keyed, KeyedCollection};
use crate::lang::{Icons, TextMap};

pub(crate) type XmlWriter = Writer<Vec<u8>>;

/// Serialization counterpart of the per-type `read` constructors: writes the
/// value as a single XML element under the given tag.
pub(crate) trait WriteXml {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError>;
}

pub(crate) fn element_children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(|child| child.is_element())
}

pub(crate) fn skip_unexpected(parent: Node, child: Node) {
    tracing::debug!(
        parent = parent.tag_name().name(),
        element = child.tag_name().name(),
        "skipping unexpected element"
    );
}

/// Whitespace collapsing as performed by the binding runtime's collapsed
/// string adapter: leading/trailing whitespace removed, runs folded to one
/// space.
pub(crate) fn collapsed(raw: &str) -> String {
    raw.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapsed character content of an element. Token-valued fields (class
/// names, JNDI names, role names) all go through this.
pub(crate) fn text_of(node: Node) -> String {
    collapsed(node.text().unwrap_or(""))
}

/// Character content verbatim, for string-valued elements such as
/// descriptions and environment entry values.
pub(crate) fn raw_text_of(node: Node) -> String {
    node.text().unwrap_or("").to_string()
}

pub(crate) fn id_of(node: Node) -> Option<String> {
    node.attribute("id").map(collapsed)
}

pub(crate) fn attr_bool(node: Node, name: &str) -> Option<bool> {
    node.attribute(name)
        .map(|value| matches!(collapsed(value).as_str(), "true" | "1"))
}

pub(crate) fn bool_of(node: Node) -> Result<bool, DescriptorError> {
    let text = text_of(node);
    match text.as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(DescriptorError::invalid_value(node, &text)),
    }
}

pub(crate) fn number_of<T: FromStr>(node: Node) -> Result<T, DescriptorError> {
    let text = text_of(node);
    text.parse()
        .map_err(|_| DescriptorError::invalid_value(node, &text))
}

pub(crate) fn element_start<'a>(tag: &'a str, id: Option<&str>) -> BytesStart<'a> {
    let mut start = BytesStart::new(tag);
    if let Some(id) = id {
        start.push_attribute(("id", id));
    }
    start
}

pub(crate) fn open(
    writer: &mut XmlWriter,
    tag: &str,
    id: Option<&str>,
) -> Result<(), DescriptorError> {
    writer.write_event(Event::Start(element_start(tag, id)))?;
    Ok(())
}

pub(crate) fn close(writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

pub(crate) fn write_text(
    writer: &mut XmlWriter,
    tag: &str,
    value: &str,
) -> Result<(), DescriptorError> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    if !value.is_empty() {
        writer.write_event(Event::Text(BytesText::new(value)))?;
    }
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

pub(crate) fn write_opt(
    writer: &mut XmlWriter,
    tag: &str,
    value: Option<&str>,
) -> Result<(), DescriptorError> {
    if let Some(value) = value {
        write_text(writer, tag, value)?;
    }
    Ok(())
}

pub(crate) fn write_opt_value<T: Display>(
    writer: &mut XmlWriter,
    tag: &str,
    value: Option<T>,
) -> Result<(), DescriptorError> {
    if let Some(value) = value {
        write_text(writer, tag, &value.to_string())?;
    }
    Ok(())
}

pub(crate) fn write_strings(
    writer: &mut XmlWriter,
    tag: &str,
    values: &[String],
) -> Result<(), DescriptorError> {
    for value in values {
        write_text(writer, tag, value)?;
    }
    Ok(())
}

pub(crate) fn write_all<T: WriteXml>(
    writer: &mut XmlWriter,
    tag: &str,
    items: &[T],
) -> Result<(), DescriptorError> {
    for item in items {
        item.write_xml(writer, tag)?;
    }
    Ok(())
}

pub(crate) fn write_keyed<V: Keyed + WriteXml>(
    writer: &mut XmlWriter,
    tag: &str,
    items: &KeyedCollection<V>,
) -> Result<(), DescriptorError> {
    for item in items.iter() {
        item.write_xml(writer, tag)?;
    }
    Ok(())
}

pub(crate) fn write_text_map(
    writer: &mut XmlWriter,
    tag: &str,
    texts: &TextMap,
) -> Result<(), DescriptorError> {
    for text in texts.iter() {
        text.write_xml(writer, tag)?;
    }
    Ok(())
}

pub(crate) fn write_icons(writer: &mut XmlWriter, icons: &Icons) -> Result<(), DescriptorError> {
    for icon in icons.iter() {
        icon.write_xml(writer, "icon")?;
    }
    Ok(())
}
