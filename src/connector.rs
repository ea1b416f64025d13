//! ra.xml: the resource adapter (connector) descriptor, schema versions 1.5
//! and 1.6. The 1.0 DTD generation is a separate set of types in
//! [`crate::connector10`].

use quick_xml::events::{BytesEnd, Event};
use roxmltree::Node;

use crate::error::DescriptorError;
use crate::lang::{Icon, Icons, Text, TextMap};
use crate::xml::{
    attr_bool, bool_of, close, collapsed, element_children, element_start, id_of, open,
    skip_unexpected, text_of, write_all, write_icons, write_opt, write_opt_value, write_strings,
    write_text, write_text_map, WriteXml, XmlWriter,
};
use crate::{Descriptor, JAVAEE_NAMESPACE};

/// connectorType (connector 1.5/1.6): the root of ra.xml.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Connector {
    pub module_name: Option<String>,
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub vendor_name: Option<String>,
    pub eis_type: Option<String>,
    pub resourceadapter_version: Option<String>,
    pub license: Option<License>,
    pub resourceadapter: Option<ResourceAdapter>,
    pub required_work_context: Vec<String>,
    pub version: Option<String>,
    pub metadata_complete: Option<bool>,
    pub id: Option<String>,
}

impl Connector {
    /// The connector schema version, `"1.5"` unless the descriptor says
    /// otherwise.
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or("1.5")
    }
}

impl Descriptor for Connector {
    const TAG_NAME: &'static str = "connector";
    const NAMESPACE: &'static str = JAVAEE_NAMESPACE;

    fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut connector = Connector {
            version: node.attribute("version").map(collapsed),
            metadata_complete: attr_bool(node, "metadata-complete"),
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "module-name" => connector.module_name = Some(text_of(child)),
                "description" => {
                    connector.description.add(Text::read(child));
                }
                "display-name" => {
                    connector.display_name.add(Text::read(child));
                }
                "icon" => {
                    connector.icon.add(Icon::read(child));
                }
                "vendor-name" => connector.vendor_name = Some(text_of(child)),
                "eis-type" => connector.eis_type = Some(text_of(child)),
                "resourceadapter-version" => {
                    connector.resourceadapter_version = Some(text_of(child))
                }
                "license" => connector.license = Some(License::read(child)?),
                "resourceadapter" => {
                    connector.resourceadapter = Some(ResourceAdapter::read(child)?)
                }
                "required-work-context" => {
                    connector.required_work_context.push(text_of(child))
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(connector)
    }

    fn write(&self, writer: &mut XmlWriter) -> Result<(), DescriptorError> {
        let mut start = element_start(Self::TAG_NAME, self.id.as_deref());
        start.push_attribute(("xmlns", Self::NAMESPACE));
        start.push_attribute(("version", self.version()));
        if let Some(metadata_complete) = self.metadata_complete {
            start.push_attribute(("metadata-complete", metadata_complete.to_string().as_str()));
        }
        writer.write_event(Event::Start(start))?;
        write_opt(writer, "module-name", self.module_name.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_opt(writer, "vendor-name", self.vendor_name.as_deref())?;
        write_opt(writer, "eis-type", self.eis_type.as_deref())?;
        write_opt(
            writer,
            "resourceadapter-version",
            self.resourceadapter_version.as_deref(),
        )?;
        if let Some(license) = &self.license {
            license.write_xml(writer, "license")?;
        }
        if let Some(resourceadapter) = &self.resourceadapter {
            resourceadapter.write_xml(writer, "resourceadapter")?;
        }
        write_strings(writer, "required-work-context", &self.required_work_context)?;
        writer.write_event(Event::End(BytesEnd::new(Self::TAG_NAME)))?;
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct License {
    pub description: TextMap,
    pub license_required: Option<bool>,
    pub id: Option<String>,
}

impl License {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut license = License {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    license.description.add(Text::read(child));
                }
                "license-required" => license.license_required = Some(bool_of(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(license)
    }
}

impl WriteXml for License {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_opt_value(writer, "license-required", self.license_required)?;
        close(writer, tag)
    }
}

/// resourceadapterType (1.5/1.6).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceAdapter {
    pub resourceadapter_class: Option<String>,
    pub config_property: Vec<ConfigProperty>,
    pub outbound_resourceadapter: Option<OutboundResourceAdapter>,
    pub inbound_resourceadapter: Option<InboundResourceAdapter>,
    pub adminobject: Vec<AdminObject>,
    pub security_permission: Vec<SecurityPermission>,
    pub id: Option<String>,
}

impl ResourceAdapter {
    pub fn new(resourceadapter_class: impl Into<String>) -> Self {
        Self {
            resourceadapter_class: Some(resourceadapter_class.into()),
            ..Self::default()
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut adapter = ResourceAdapter {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "resourceadapter-class" => {
                    adapter.resourceadapter_class = Some(text_of(child))
                }
                "config-property" => adapter.config_property.push(ConfigProperty::read(child)?),
                "outbound-resourceadapter" => {
                    adapter.outbound_resourceadapter =
                        Some(OutboundResourceAdapter::read(child)?)
                }
                "inbound-resourceadapter" => {
                    adapter.inbound_resourceadapter = Some(InboundResourceAdapter::read(child)?)
                }
                "adminobject" => adapter.adminobject.push(AdminObject::read(child)?),
                "security-permission" => adapter
                    .security_permission
                    .push(SecurityPermission::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(adapter)
    }
}

impl WriteXml for ResourceAdapter {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_opt(
            writer,
            "resourceadapter-class",
            self.resourceadapter_class.as_deref(),
        )?;
        write_all(writer, "config-property", &self.config_property)?;
        if let Some(outbound) = &self.outbound_resourceadapter {
            outbound.write_xml(writer, "outbound-resourceadapter")?;
        }
        if let Some(inbound) = &self.inbound_resourceadapter {
            inbound.write_xml(writer, "inbound-resourceadapter")?;
        }
        write_all(writer, "adminobject", &self.adminobject)?;
        write_all(writer, "security-permission", &self.security_permission)?;
        close(writer, tag)
    }
}

/// config-propertyType, including the 1.6 dynamic-update flags.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigProperty {
    pub description: TextMap,
    pub config_property_name: String,
    pub config_property_type: Option<String>,
    pub config_property_value: Option<String>,
    pub config_property_ignore: Option<bool>,
    pub config_property_supports_dynamic_updates: Option<bool>,
    pub config_property_confidential: Option<bool>,
    pub id: Option<String>,
}

impl ConfigProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            config_property_name: name.into(),
            config_property_value: Some(value.into()),
            ..Self::default()
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut property = ConfigProperty {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    property.description.add(Text::read(child));
                }
                "config-property-name" => property.config_property_name = text_of(child),
                "config-property-type" => property.config_property_type = Some(text_of(child)),
                "config-property-value" => {
                    property.config_property_value = Some(text_of(child))
                }
                "config-property-ignore" => {
                    property.config_property_ignore = Some(bool_of(child)?)
                }
                "config-property-supports-dynamic-updates" => {
                    property.config_property_supports_dynamic_updates = Some(bool_of(child)?)
                }
                "config-property-confidential" => {
                    property.config_property_confidential = Some(bool_of(child)?)
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(property)
    }
}

impl WriteXml for ConfigProperty {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(writer, "config-property-name", &self.config_property_name)?;
        write_opt(
            writer,
            "config-property-type",
            self.config_property_type.as_deref(),
        )?;
        write_opt(
            writer,
            "config-property-value",
            self.config_property_value.as_deref(),
        )?;
        write_opt_value(
            writer,
            "config-property-ignore",
            self.config_property_ignore,
        )?;
        write_opt_value(
            writer,
            "config-property-supports-dynamic-updates",
            self.config_property_supports_dynamic_updates,
        )?;
        write_opt_value(
            writer,
            "config-property-confidential",
            self.config_property_confidential,
        )?;
        close(writer, tag)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransactionSupportType {
    NoTransaction,
    LocalTransaction,
    XaTransaction,
}

impl TransactionSupportType {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionSupportType::NoTransaction => "NoTransaction",
            TransactionSupportType::LocalTransaction => "LocalTransaction",
            TransactionSupportType::XaTransaction => "XATransaction",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "NoTransaction" => Ok(TransactionSupportType::NoTransaction),
            "LocalTransaction" => Ok(TransactionSupportType::LocalTransaction),
            "XATransaction" => Ok(TransactionSupportType::XaTransaction),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutboundResourceAdapter {
    pub connection_definition: Vec<ConnectionDefinition>,
    pub transaction_support: Option<TransactionSupportType>,
    pub authentication_mechanism: Vec<AuthenticationMechanism>,
    pub reauthentication_support: Option<bool>,
    pub id: Option<String>,
}

impl OutboundResourceAdapter {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut outbound = OutboundResourceAdapter {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "connection-definition" => outbound
                    .connection_definition
                    .push(ConnectionDefinition::read(child)?),
                "transaction-support" => {
                    outbound.transaction_support = Some(TransactionSupportType::read(child)?)
                }
                "authentication-mechanism" => outbound
                    .authentication_mechanism
                    .push(AuthenticationMechanism::read(child)),
                "reauthentication-support" => {
                    outbound.reauthentication_support = Some(bool_of(child)?)
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(outbound)
    }
}

impl WriteXml for OutboundResourceAdapter {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_all(writer, "connection-definition", &self.connection_definition)?;
        write_opt(
            writer,
            "transaction-support",
            self.transaction_support.map(TransactionSupportType::as_str),
        )?;
        write_all(
            writer,
            "authentication-mechanism",
            &self.authentication_mechanism,
        )?;
        write_opt_value(
            writer,
            "reauthentication-support",
            self.reauthentication_support,
        )?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConnectionDefinition {
    pub managedconnectionfactory_class: String,
    pub config_property: Vec<ConfigProperty>,
    pub connectionfactory_interface: Option<String>,
    pub connectionfactory_impl_class: Option<String>,
    pub connection_interface: Option<String>,
    pub connection_impl_class: Option<String>,
    pub id: Option<String>,
}

impl ConnectionDefinition {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut definition = ConnectionDefinition {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "managedconnectionfactory-class" => {
                    definition.managedconnectionfactory_class = text_of(child)
                }
                "config-property" => {
                    definition.config_property.push(ConfigProperty::read(child)?)
                }
                "connectionfactory-interface" => {
                    definition.connectionfactory_interface = Some(text_of(child))
                }
                "connectionfactory-impl-class" => {
                    definition.connectionfactory_impl_class = Some(text_of(child))
                }
                "connection-interface" => {
                    definition.connection_interface = Some(text_of(child))
                }
                "connection-impl-class" => {
                    definition.connection_impl_class = Some(text_of(child))
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(definition)
    }
}

impl WriteXml for ConnectionDefinition {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(
            writer,
            "managedconnectionfactory-class",
            &self.managedconnectionfactory_class,
        )?;
        write_all(writer, "config-property", &self.config_property)?;
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
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthenticationMechanism {
    pub description: TextMap,
    pub authentication_mechanism_type: String,
    pub credential_interface: Option<String>,
    pub id: Option<String>,
}

impl AuthenticationMechanism {
    pub(crate) fn read(node: Node) -> Self {
        let mut mechanism = AuthenticationMechanism {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    mechanism.description.add(Text::read(child));
                }
                "authentication-mechanism-type" => {
                    mechanism.authentication_mechanism_type = text_of(child)
                }
                "credential-interface" => {
                    mechanism.credential_interface = Some(text_of(child))
                }
                _ => skip_unexpected(node, child),
            }
        }
        mechanism
    }
}

impl WriteXml for AuthenticationMechanism {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(
            writer,
            "authentication-mechanism-type",
            &self.authentication_mechanism_type,
        )?;
        write_opt(
            writer,
            "credential-interface",
            self.credential_interface.as_deref(),
        )?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InboundResourceAdapter {
    pub messageadapter: Option<MessageAdapter>,
    pub id: Option<String>,
}

impl InboundResourceAdapter {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut inbound = InboundResourceAdapter {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "messageadapter" => inbound.messageadapter = Some(MessageAdapter::read(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(inbound)
    }
}

impl WriteXml for InboundResourceAdapter {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        if let Some(adapter) = &self.messageadapter {
            adapter.write_xml(writer, "messageadapter")?;
        }
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageAdapter {
    pub messagelistener: Vec<MessageListener>,
    pub id: Option<String>,
}

impl MessageAdapter {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut adapter = MessageAdapter {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "messagelistener" => adapter.messagelistener.push(MessageListener::read(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(adapter)
    }
}

impl WriteXml for MessageAdapter {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_all(writer, "messagelistener", &self.messagelistener)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageListener {
    pub messagelistener_type: String,
    pub activationspec: Option<ActivationSpec>,
    pub id: Option<String>,
}

impl MessageListener {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut listener = MessageListener {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "messagelistener-type" => listener.messagelistener_type = text_of(child),
                "activationspec" => listener.activationspec = Some(ActivationSpec::read(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(listener)
    }
}

impl WriteXml for MessageListener {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "messagelistener-type", &self.messagelistener_type)?;
        if let Some(spec) = &self.activationspec {
            spec.write_xml(writer, "activationspec")?;
        }
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivationSpec {
    pub activationspec_class: String,
    pub required_config_property: Vec<RequiredConfigProperty>,
    pub config_property: Vec<ConfigProperty>,
    pub id: Option<String>,
}

impl ActivationSpec {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut spec = ActivationSpec {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "activationspec-class" => spec.activationspec_class = text_of(child),
                "required-config-property" => spec
                    .required_config_property
                    .push(RequiredConfigProperty::read(child)),
                "config-property" => spec.config_property.push(ConfigProperty::read(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(spec)
    }
}

impl WriteXml for ActivationSpec {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "activationspec-class", &self.activationspec_class)?;
        write_all(
            writer,
            "required-config-property",
            &self.required_config_property,
        )?;
        write_all(writer, "config-property", &self.config_property)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequiredConfigProperty {
    pub description: TextMap,
    pub config_property_name: String,
    pub id: Option<String>,
}

impl RequiredConfigProperty {
    pub(crate) fn read(node: Node) -> Self {
        let mut property = RequiredConfigProperty {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    property.description.add(Text::read(child));
                }
                "config-property-name" => property.config_property_name = text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        property
    }
}

impl WriteXml for RequiredConfigProperty {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(writer, "config-property-name", &self.config_property_name)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminObject {
    pub adminobject_interface: String,
    pub adminobject_class: String,
    pub config_property: Vec<ConfigProperty>,
    pub id: Option<String>,
}

impl AdminObject {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut object = AdminObject {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "adminobject-interface" => object.adminobject_interface = text_of(child),
                "adminobject-class" => object.adminobject_class = text_of(child),
                "config-property" => object.config_property.push(ConfigProperty::read(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(object)
    }
}

impl WriteXml for AdminObject {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "adminobject-interface", &self.adminobject_interface)?;
        write_text(writer, "adminobject-class", &self.adminobject_class)?;
        write_all(writer, "config-property", &self.config_property)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SecurityPermission {
    pub description: TextMap,
    pub security_permission_spec: String,
    pub id: Option<String>,
}

impl SecurityPermission {
    pub(crate) fn read(node: Node) -> Self {
        let mut permission = SecurityPermission {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    permission.description.add(Text::read(child));
                }
                "security-permission-spec" => {
                    permission.security_permission_spec = text_of(child)
                }
                _ => skip_unexpected(node, child),
            }
        }
        permission
    }
}

impl WriteXml for SecurityPermission {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(
            writer,
            "security-permission-spec",
            &self.security_permission_spec,
        )?;
        close(writer, tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_defaults_to_1_5() {
        let connector = Connector::default();
        assert_eq!(connector.version(), "1.5");

        let connector = Connector {
            version: Some("1.6".to_string()),
            ..Connector::default()
        };
        assert_eq!(connector.version(), "1.6");
    }
}
