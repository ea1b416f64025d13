use std::fmt;

use indexmap::IndexMap;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use roxmltree::Node;

use crate::error::DescriptorError;
use crate::xml::{text_of, XmlWriter};

// The prefix xml is by definition bound to the namespace name
// http://www.w3.org/XML/1998/namespace.
// (Namespaces in XML 1.0, §3, Reserved Prefixes and Namespace Names)
const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Qualified name carried by QName-valued descriptor elements
/// (wsdl-service, service-qname, soap-header, message-type, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct QName {
    pub namespace: Option<String>,
    pub local: String,
    pub prefix: Option<String>,
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(namespace) = self.namespace.as_ref() {
            write!(f, "{{{}}}:{}", namespace, self.local)
        } else {
            write!(f, "{}", self.local)
        }
    }
}

impl QName {
    pub fn new(
        namespace: impl Into<String>,
        local: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            namespace: Some(namespace.into()),
            local: local.into(),
            prefix: Some(prefix.into()),
        }
    }

    pub fn unqualified(local: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local: local.into(),
            prefix: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.local.is_empty()
    }

    /// Parses a lexical QName against the namespace declarations in scope at
    /// the given node. An unresolvable prefix is an error.
    pub fn parse(source: &str, context: Node) -> Result<Self, DescriptorError> {
        if let Some((prefix, local)) = source.rsplit_once(':') {
            let namespace = if prefix == "xml" {
                XML_NAMESPACE
            } else {
                context
                    .lookup_namespace_uri(Some(prefix))
                    .ok_or_else(|| DescriptorError::PrefixNotResolved(prefix.into()))?
            };
            Ok(Self::new(namespace, local, prefix))
        } else {
            // If there is a default namespace declaration in scope, an
            // unprefixed QName takes the default namespace as its namespace
            // name. (Namespaces in XML 1.0, §6.2)
            Ok(Self {
                namespace: context.lookup_namespace_uri(None).map(str::to_string),
                local: source.to_string(),
                prefix: None,
            })
        }
    }
}

pub(crate) fn qname_of(node: Node) -> Result<QName, DescriptorError> {
    QName::parse(&text_of(node), node)
}

pub(crate) fn write_qname(
    writer: &mut XmlWriter,
    tag: &str,
    qname: &QName,
) -> Result<(), DescriptorError> {
    let mut start = BytesStart::new(tag);
    let text = match (&qname.prefix, &qname.namespace) {
        (Some(prefix), Some(namespace)) => {
            start.push_attribute((format!("xmlns:{prefix}").as_str(), namespace.as_str()));
            format!("{prefix}:{}", qname.local)
        }
        (Some(prefix), None) => format!("{prefix}:{}", qname.local),
        (None, Some(namespace)) => {
            start.push_attribute(("xmlns", namespace.as_str()));
            qname.local.clone()
        }
        (None, None) => qname.local.clone(),
    };
    writer.write_event(Event::Start(start))?;
    if !text.is_empty() {
        writer.write_event(Event::Text(BytesText::new(&text)))?;
    }
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Capability for resolving a namespace prefix to a namespace URI.
///
/// Handler-chain name patterns are written with prefixes whose declarations
/// live at the document level, outside the element carrying the pattern, so
/// the conversion has to be handed a resolver for the surrounding context.
pub trait NamespaceResolver {
    fn resolve(&self, prefix: &str) -> Option<&str>;
}

impl NamespaceResolver for Node<'_, '_> {
    fn resolve(&self, prefix: &str) -> Option<&str> {
        if prefix == "xml" {
            return Some(XML_NAMESPACE);
        }
        self.lookup_namespace_uri(Some(prefix))
    }
}

impl NamespaceResolver for IndexMap<String, String> {
    fn resolve(&self, prefix: &str) -> Option<&str> {
        self.get(prefix).map(String::as_str)
    }
}

/// Converts the prefixed-string form used by handler-chain name patterns
/// (`ns1:EmployeeService`, `*`) into a resolved [`QName`].
///
/// An empty string yields an empty QName; a missing colon yields an
/// unprefixed name with no namespace; a prefix the resolver cannot map
/// resolves softly to "no namespace" rather than failing.
pub fn parse_prefixed_qname(source: &str, resolver: &dyn NamespaceResolver) -> QName {
    let source = source.trim();
    if source.is_empty() {
        return QName::default();
    }
    match source.split_once(':') {
        None => QName::unqualified(source),
        Some((prefix, local)) => QName {
            namespace: resolver.resolve(prefix).map(str::to_string),
            local: local.to_string(),
            prefix: Some(prefix.to_string()),
        },
    }
}

/// Inverse of [`parse_prefixed_qname`]: `prefix:local` if a prefix is set,
/// the bare local part otherwise. An empty local part yields an empty string
/// and the literal wildcard passes through unchanged.
pub fn format_prefixed_qname(qname: &QName) -> String {
    if qname.local.is_empty() {
        return String::new();
    }
    if qname.local == "*" {
        return "*".to_string();
    }
    match &qname.prefix {
        Some(prefix) => format!("{prefix}:{}", qname.local),
        None => qname.local.clone(),
    }
}

pub(crate) fn write_prefixed_qname(
    writer: &mut XmlWriter,
    tag: &str,
    qname: &QName,
) -> Result<(), DescriptorError> {
    let mut start = BytesStart::new(tag);
    if let (Some(prefix), Some(namespace)) = (&qname.prefix, &qname.namespace) {
        start.push_attribute((format!("xmlns:{prefix}").as_str(), namespace.as_str()));
    }
    let text = format_prefixed_qname(qname);
    writer.write_event(Event::Start(start))?;
    if !text.is_empty() {
        writer.write_event(Event::Text(BytesText::new(&text)))?;
    }
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> IndexMap<String, String> {
        let mut map = IndexMap::new();
        map.insert("ns1".to_string(), "urn:example".to_string());
        map
    }

    #[test]
    fn resolves_prefixed_name() {
        let qname = parse_prefixed_qname("ns1:foo", &resolver());
        assert_eq!(qname, QName::new("urn:example", "foo", "ns1"));
        assert_eq!(format_prefixed_qname(&qname), "ns1:foo");
    }

    #[test]
    fn unknown_prefix_resolves_to_no_namespace() {
        let qname = parse_prefixed_qname("nope:foo", &resolver());
        assert_eq!(qname.namespace, None);
        assert_eq!(qname.local, "foo");
        assert_eq!(qname.prefix.as_deref(), Some("nope"));
    }

    #[test]
    fn wildcard_passes_through() {
        let qname = parse_prefixed_qname("*", &resolver());
        assert_eq!(qname, QName::unqualified("*"));
        assert_eq!(format_prefixed_qname(&qname), "*");
    }

    #[test]
    fn empty_round_trips_to_empty() {
        let qname = parse_prefixed_qname("", &resolver());
        assert!(qname.is_empty());
        assert_eq!(format_prefixed_qname(&qname), "");
    }

    #[test]
    fn unprefixed_name_has_no_namespace() {
        let qname = parse_prefixed_qname("foo", &resolver());
        assert_eq!(qname, QName::unqualified("foo"));
        assert_eq!(format_prefixed_qname(&qname), "foo");
    }
}
