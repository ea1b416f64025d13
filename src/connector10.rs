//! The connector 1.0 DTD generation of ra.xml. The 1.0 and 1.5/1.6 grammars
//! differ enough (no inbound side, the outbound fields live directly on the
//! resource adapter) that each version gets its own types instead of a shared
//! base.

use quick_xml::events::{BytesEnd, Event};
use roxmltree::Node;

use crate::connector::{ConfigProperty, License, SecurityPermission, TransactionSupportType};
use crate::error::DescriptorError;
use crate::lang::{Icon, Icons, Text, TextMap};
use crate::xml::{
    bool_of, close, element_children, element_start, id_of, open, skip_unexpected, text_of,
    write_all, write_icons, write_opt, write_opt_value, write_text, write_text_map, WriteXml,
    XmlWriter,
};
use crate::Descriptor;

/// The connector 1.0 root element. The DTD carries no namespace.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Connector10 {
    pub display_name: TextMap,
    pub description: TextMap,
    pub icon: Icons,
    pub vendor_name: Option<String>,
    pub spec_version: Option<String>,
    pub eis_type: Option<String>,
    pub version: Option<String>,
    pub license: Option<License>,
    pub resourceadapter: Option<ResourceAdapter10>,
    pub id: Option<String>,
}

impl Connector10 {
    /// The connector specification version, `"1.0"` unless the descriptor
    /// says otherwise.
    pub fn spec_version(&self) -> &str {
        self.spec_version.as_deref().unwrap_or("1.0")
    }
}

impl Descriptor for Connector10 {
    const TAG_NAME: &'static str = "connector";
    const NAMESPACE: &'static str = "";

    fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut connector = Connector10 {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "display-name" => {
                    connector.display_name.add(Text::read(child));
                }
                "description" => {
                    connector.description.add(Text::read(child));
                }
                "icon" => {
                    connector.icon.add(Icon::read(child));
                }
                "vendor-name" => connector.vendor_name = Some(text_of(child)),
                "spec-version" => connector.spec_version = Some(text_of(child)),
                "eis-type" => connector.eis_type = Some(text_of(child)),
                "version" => connector.version = Some(text_of(child)),
                "license" => connector.license = Some(License::read(child)?),
                "resourceadapter" => {
                    connector.resourceadapter = Some(ResourceAdapter10::read(child)?)
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(connector)
    }

    fn write(&self, writer: &mut XmlWriter) -> Result<(), DescriptorError> {
        let start = element_start(Self::TAG_NAME, self.id.as_deref());
        writer.write_event(Event::Start(start))?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_text_map(writer, "description", &self.description)?;
        write_icons(writer, &self.icon)?;
        write_opt(writer, "vendor-name", self.vendor_name.as_deref())?;
        write_text(writer, "spec-version", self.spec_version())?;
        write_opt(writer, "eis-type", self.eis_type.as_deref())?;
        write_opt(writer, "version", self.version.as_deref())?;
        if let Some(license) = &self.license {
            license.write_xml(writer, "license")?;
        }
        if let Some(resourceadapter) = &self.resourceadapter {
            resourceadapter.write_xml(writer, "resourceadapter")?;
        }
        writer.write_event(Event::End(BytesEnd::new(Self::TAG_NAME)))?;
        Ok(())
    }
}

/// The 1.0 resourceadapter element: a single outbound connection factory
/// described inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceAdapter10 {
    pub managedconnectionfactory_class: Option<String>,
    pub connectionfactory_interface: Option<String>,
    pub connectionfactory_impl_class: Option<String>,
    pub connection_interface: Option<String>,
    pub connection_impl_class: Option<String>,
    pub transaction_support: Option<TransactionSupportType>,
    pub config_property: Vec<ConfigProperty>,
    pub auth_mechanism: Vec<AuthMechanism>,
    pub reauthentication_support: Option<bool>,
    pub security_permission: Vec<SecurityPermission>,
    pub id: Option<String>,
}

impl ResourceAdapter10 {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut adapter = ResourceAdapter10 {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "managedconnectionfactory-class" => {
                    adapter.managedconnectionfactory_class = Some(text_of(child))
                }
                "connectionfactory-interface" => {
                    adapter.connectionfactory_interface = Some(text_of(child))
                }
                "connectionfactory-impl-class" => {
                    adapter.connectionfactory_impl_class = Some(text_of(child))
                }
                "connection-interface" => adapter.connection_interface = Some(text_of(child)),
                "connection-impl-class" => {
                    adapter.connection_impl_class = Some(text_of(child))
                }
                "transaction-support" => {
                    adapter.transaction_support = Some(TransactionSupportType::read(child)?)
                }
                "config-property" => adapter.config_property.push(ConfigProperty::read(child)?),
                "auth-mechanism" => adapter.auth_mechanism.push(AuthMechanism::read(child)),
                "reauthentication-support" => {
                    adapter.reauthentication_support = Some(bool_of(child)?)
                }
                "security-permission" => adapter
                    .security_permission
                    .push(SecurityPermission::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(adapter)
    }
}

impl WriteXml for ResourceAdapter10 {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_opt(
            writer,
            "managedconnectionfactory-class",
            self.managedconnectionfactory_class.as_deref(),
        )?;
        write_opt(
            writer,
            "connectionfactory-interface",
            self.connectionfactory_interface.as_deref(),
        )?;
        write_opt(
            writer,
            "connectionfactory-impl-class",
            self.connectionfactory_impl_class.as_deref(),
        )?;
        write_opt(
            writer,
            "connection-interface",
            self.connection_interface.as_deref(),
        )?;
        write_opt(
            writer,
            "connection-impl-class",
            self.connection_impl_class.as_deref(),
        )?;
        write_opt(
            writer,
            "transaction-support",
            self.transaction_support.map(TransactionSupportType::as_str),
        )?;
        write_all(writer, "config-property", &self.config_property)?;
        write_all(writer, "auth-mechanism", &self.auth_mechanism)?;
        write_opt_value(
            writer,
            "reauthentication-support",
            self.reauthentication_support,
        )?;
        write_all(writer, "security-permission", &self.security_permission)?;
        close(writer, tag)
    }
}

/// The 1.0 auth-mechanism element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthMechanism {
    pub description: TextMap,
    pub auth_mech_type: String,
    pub credential_interface: Option<String>,
    pub id: Option<String>,
}

impl AuthMechanism {
    pub(crate) fn read(node: Node) -> Self {
        let mut mechanism = AuthMechanism {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    mechanism.description.add(Text::read(child));
                }
                "auth-mech-type" => mechanism.auth_mech_type = text_of(child),
                "credential-interface" => {
                    mechanism.credential_interface = Some(text_of(child))
                }
                _ => skip_unexpected(node, child),
            }
        }
        mechanism
    }
}

impl WriteXml for AuthMechanism {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(writer, "auth-mech-type", &self.auth_mech_type)?;
        write_opt(
            writer,
            "credential-interface",
            self.credential_interface.as_deref(),
        )?;
        close(writer, tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_version_defaults_to_1_0() {
        let connector = Connector10::default();
        assert_eq!(connector.spec_version(), "1.0");

        let connector = Connector10 {
            spec_version: Some("1.1".to_string()),
            ..Connector10::default()
        };
        assert_eq!(connector.spec_version(), "1.1");
    }
}
