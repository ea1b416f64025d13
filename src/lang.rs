//! Language-tagged text and icon sets, and the folding that collapses them to
//! a single default-locale value.

use indexmap::IndexMap;
use quick_xml::events::{BytesEnd, BytesText, Event};
use roxmltree::Node;

use crate::error::DescriptorError;
use crate::xml::{
    element_children, element_start, id_of, raw_text_of, skip_unexpected, text_of, write_opt,
    WriteXml, XmlWriter,
};

const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// A single language-tagged string (description, display-name, ...). The
/// language comes from the `xml:lang` attribute and is absent for the
/// default locale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Text {
    pub lang: Option<String>,
    pub value: String,
}

impl Text {
    pub fn new(lang: Option<&str>, value: impl Into<String>) -> Self {
        Self {
            lang: lang.map(str::to_string),
            value: value.into(),
        }
    }

    pub(crate) fn read(node: Node) -> Self {
        Self {
            lang: node
                .attribute((XML_NAMESPACE, "lang"))
                .map(str::to_string),
            value: raw_text_of(node),
        }
    }
}

impl WriteXml for Text {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        let mut start = element_start(tag, None);
        if let Some(lang) = &self.lang {
            start.push_attribute(("xml:lang", lang.as_str()));
        }
        writer.write_event(Event::Start(start))?;
        if !self.value.is_empty() {
            writer.write_event(Event::Text(BytesText::new(&self.value)))?;
        }
        writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }
}

/// The set of language-tagged variants of one text element, at most one per
/// language, in document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextMap {
    map: IndexMap<String, Text>,
}

impl TextMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variant, replacing any previous value for the same language.
    pub fn add(&mut self, text: Text) -> Option<Text> {
        self.map.insert(text.lang.clone().unwrap_or_default(), text)
    }

    /// Replaces the whole set.
    pub fn set(&mut self, texts: impl IntoIterator<Item = Text>) {
        self.map.clear();
        for text in texts {
            self.add(text);
        }
    }

    /// The default-locale value: the variant with no explicit language, or
    /// failing that the first variant.
    pub fn local(&self) -> Option<&str> {
        self.map
            .get("")
            .or_else(|| self.map.values().next())
            .map(|text| text.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Text> {
        self.map.values()
    }

    pub fn as_map(&self) -> &IndexMap<String, Text> {
        &self.map
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Extend<Text> for TextMap {
    fn extend<I: IntoIterator<Item = Text>>(&mut self, iter: I) {
        for text in iter {
            self.add(text);
        }
    }
}

impl FromIterator<Text> for TextMap {
    fn from_iter<I: IntoIterator<Item = Text>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

/// iconType: small-icon?, large-icon?, with `xml:lang` and `id` attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Icon {
    pub small_icon: Option<String>,
    pub large_icon: Option<String>,
    pub lang: Option<String>,
    pub id: Option<String>,
}

impl Icon {
    pub(crate) fn read(node: Node) -> Self {
        let mut icon = Icon {
            lang: node
                .attribute((XML_NAMESPACE, "lang"))
                .map(str::to_string),
            id: id_of(node),
            ..Icon::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "small-icon" => icon.small_icon = Some(text_of(child)),
                "large-icon" => icon.large_icon = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        icon
    }
}

impl WriteXml for Icon {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        let mut start = element_start(tag, self.id.as_deref());
        if let Some(lang) = &self.lang {
            start.push_attribute(("xml:lang", lang.as_str()));
        }
        writer.write_event(Event::Start(start))?;
        write_opt(writer, "small-icon", self.small_icon.as_deref())?;
        write_opt(writer, "large-icon", self.large_icon.as_deref())?;
        writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }
}

/// The language-tagged icon set of a descriptor element, one per language.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Icons {
    map: IndexMap<String, Icon>,
}

impl Icons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, icon: Icon) -> Option<Icon> {
        self.map.insert(icon.lang.clone().unwrap_or_default(), icon)
    }

    /// The default-locale icon, by the same rule as [`TextMap::local`].
    pub fn local(&self) -> Option<&Icon> {
        self.map.get("").or_else(|| self.map.values().next())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Icon> {
        self.map.values()
    }

    pub fn as_map(&self) -> &IndexMap<String, Icon> {
        &self.map
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Extend<Icon> for Icons {
    fn extend<I: IntoIterator<Item = Icon>>(&mut self, iter: I) {
        for icon in iter {
            self.add(icon);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_to_untagged_variant() {
        let mut texts = TextMap::new();
        texts.add(Text::new(Some("de"), "Angestelltendienst"));
        texts.add(Text::new(None, "Employee service"));
        texts.add(Text::new(Some("fr"), "Service des employés"));

        assert_eq!(texts.local(), Some("Employee service"));
        assert_eq!(texts.len(), 3);
    }

    #[test]
    fn falls_back_to_first_variant() {
        let mut texts = TextMap::new();
        texts.add(Text::new(Some("de"), "Angestelltendienst"));
        texts.add(Text::new(Some("fr"), "Service des employés"));

        assert_eq!(texts.local(), Some("Angestelltendienst"));
    }

    #[test]
    fn one_variant_per_language() {
        let mut texts = TextMap::new();
        texts.add(Text::new(None, "first"));
        texts.add(Text::new(None, "second"));

        assert_eq!(texts.len(), 1);
        assert_eq!(texts.local(), Some("second"));
    }

    #[test]
    fn icons_fold_like_texts() {
        let mut icons = Icons::new();
        icons.add(Icon {
            small_icon: Some("small-de.png".to_string()),
            lang: Some("de".to_string()),
            ..Icon::default()
        });
        icons.add(Icon {
            small_icon: Some("small.png".to_string()),
            ..Icon::default()
        });

        assert_eq!(
            icons.local().and_then(|icon| icon.small_icon.as_deref()),
            Some("small.png")
        );
    }
}
