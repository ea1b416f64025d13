//! The jndiEnvironmentRefsGroup: environment entries, EJB/resource/service
//! references and resource definitions shared by every JNDI consumer
//! (application, application-client, web-app, session/message-driven/entity
//! beans, interceptors).

use roxmltree::Node;

use crate::error::DescriptorError;
use crate::keyed::Keyed;
use crate::lang::{Text, TextMap};
use crate::xml::{
    bool_of, close, element_children, id_of, number_of, open, raw_text_of, skip_unexpected,
    text_of, write_all, write_opt, write_opt_value, write_text, write_text_map, WriteXml,
    XmlWriter,
};

/// Normalizes a reference name to the `java:comp/env/` namespace the way the
/// deployment tooling resolves unqualified JNDI names.
pub(crate) fn jndi_key(name: &str) -> String {
    if name.starts_with("java:") {
        name.to_string()
    } else {
        format!("java:comp/env/{name}")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InjectionTarget {
    pub injection_target_class: String,
    pub injection_target_name: String,
}

impl InjectionTarget {
    pub fn new(class: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            injection_target_class: class.into(),
            injection_target_name: name.into(),
        }
    }

    pub(crate) fn read(node: Node) -> Self {
        let mut target = InjectionTarget::default();
        for child in element_children(node) {
            match child.tag_name().name() {
                "injection-target-class" => target.injection_target_class = text_of(child),
                "injection-target-name" => target.injection_target_name = text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        target
    }
}

impl WriteXml for InjectionTarget {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, None)?;
        write_text(
            writer,
            "injection-target-class",
            &self.injection_target_class,
        )?;
        write_text(writer, "injection-target-name", &self.injection_target_name)?;
        close(writer, tag)
    }
}

/// propertyType: a name/value pair used by resource definitions and
/// persistence context properties.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
    pub id: Option<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            id: None,
        }
    }

    pub(crate) fn read(node: Node) -> Self {
        let mut property = Property {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "name" => property.name = text_of(child),
                "value" => property.value = raw_text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        property
    }
}

impl WriteXml for Property {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "name", &self.name)?;
        write_text(writer, "value", &self.value)?;
        close(writer, tag)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EjbRefType {
    Entity,
    Session,
}

impl EjbRefType {
    pub fn as_str(self) -> &'static str {
        match self {
            EjbRefType::Entity => "Entity",
            EjbRefType::Session => "Session",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "Entity" => Ok(EjbRefType::Entity),
            "Session" => Ok(EjbRefType::Session),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResAuth {
    Application,
    Container,
}

impl ResAuth {
    pub fn as_str(self) -> &'static str {
        match self {
            ResAuth::Application => "Application",
            ResAuth::Container => "Container",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "Application" => Ok(ResAuth::Application),
            "Container" => Ok(ResAuth::Container),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResSharingScope {
    Shareable,
    Unshareable,
}

impl ResSharingScope {
    pub fn as_str(self) -> &'static str {
        match self {
            ResSharingScope::Shareable => "Shareable",
            ResSharingScope::Unshareable => "Unshareable",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "Shareable" => Ok(ResSharingScope::Shareable),
            "Unshareable" => Ok(ResSharingScope::Unshareable),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PersistenceContextType {
    Transaction,
    Extended,
}

impl PersistenceContextType {
    pub fn as_str(self) -> &'static str {
        match self {
            PersistenceContextType::Transaction => "Transaction",
            PersistenceContextType::Extended => "Extended",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "Transaction" => Ok(PersistenceContextType::Transaction),
            "Extended" => Ok(PersistenceContextType::Extended),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MessageDestinationUsage {
    Consumes,
    Produces,
    ConsumesProduces,
}

impl MessageDestinationUsage {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageDestinationUsage::Consumes => "Consumes",
            MessageDestinationUsage::Produces => "Produces",
            MessageDestinationUsage::ConsumesProduces => "ConsumesProduces",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "Consumes" => Ok(MessageDestinationUsage::Consumes),
            "Produces" => Ok(MessageDestinationUsage::Produces),
            "ConsumesProduces" => Ok(MessageDestinationUsage::ConsumesProduces),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

/// isolation-levelType, mirroring the JDBC transaction isolation constants.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IsolationLevel {
    ReadUncommitted,
    ReadCommitted,
    RepeatableRead,
    Serializable,
}

impl IsolationLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            IsolationLevel::ReadUncommitted => "TRANSACTION_READ_UNCOMMITTED",
            IsolationLevel::ReadCommitted => "TRANSACTION_READ_COMMITTED",
            IsolationLevel::RepeatableRead => "TRANSACTION_REPEATABLE_READ",
            IsolationLevel::Serializable => "TRANSACTION_SERIALIZABLE",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "TRANSACTION_READ_UNCOMMITTED" => Ok(IsolationLevel::ReadUncommitted),
            "TRANSACTION_READ_COMMITTED" => Ok(IsolationLevel::ReadCommitted),
            "TRANSACTION_REPEATABLE_READ" => Ok(IsolationLevel::RepeatableRead),
            "TRANSACTION_SERIALIZABLE" => Ok(IsolationLevel::Serializable),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnvEntry {
    pub description: TextMap,
    pub env_entry_name: String,
    pub env_entry_type: Option<String>,
    pub env_entry_value: Option<String>,
    pub mapped_name: Option<String>,
    pub injection_target: Vec<InjectionTarget>,
    pub lookup_name: Option<String>,
    pub id: Option<String>,
}

impl Keyed for EnvEntry {
    type Key = String;

    fn key(&self) -> String {
        jndi_key(&self.env_entry_name)
    }
}

impl EnvEntry {
    pub fn new(
        name: impl Into<String>,
        entry_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            env_entry_name: name.into(),
            env_entry_type: Some(entry_type.into()),
            env_entry_value: Some(value.into()),
            ..Self::default()
        }
    }

    pub(crate) fn read(node: Node) -> Self {
        let mut entry = EnvEntry {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    entry.description.add(Text::read(child));
                }
                "env-entry-name" => entry.env_entry_name = text_of(child),
                "env-entry-type" => entry.env_entry_type = Some(text_of(child)),
                "env-entry-value" => entry.env_entry_value = Some(raw_text_of(child)),
                "mapped-name" => entry.mapped_name = Some(text_of(child)),
                "injection-target" => entry.injection_target.push(InjectionTarget::read(child)),
                "lookup-name" => entry.lookup_name = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        entry
    }
}

impl WriteXml for EnvEntry {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(writer, "env-entry-name", &self.env_entry_name)?;
        write_opt(writer, "env-entry-type", self.env_entry_type.as_deref())?;
        write_opt(writer, "env-entry-value", self.env_entry_value.as_deref())?;
        write_opt(writer, "mapped-name", self.mapped_name.as_deref())?;
        write_all(writer, "injection-target", &self.injection_target)?;
        write_opt(writer, "lookup-name", self.lookup_name.as_deref())?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EjbRef {
    pub description: TextMap,
    pub ejb_ref_name: String,
    pub ejb_ref_type: Option<EjbRefType>,
    pub home: Option<String>,
    pub remote: Option<String>,
    pub ejb_link: Option<String>,
    pub mapped_name: Option<String>,
    pub injection_target: Vec<InjectionTarget>,
    pub lookup_name: Option<String>,
    pub id: Option<String>,
}

impl Keyed for EjbRef {
    type Key = String;

    fn key(&self) -> String {
        jndi_key(&self.ejb_ref_name)
    }
}

impl EjbRef {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut ejb_ref = EjbRef {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    ejb_ref.description.add(Text::read(child));
                }
                "ejb-ref-name" => ejb_ref.ejb_ref_name = text_of(child),
                "ejb-ref-type" => ejb_ref.ejb_ref_type = Some(EjbRefType::read(child)?),
                "home" => ejb_ref.home = Some(text_of(child)),
                "remote" => ejb_ref.remote = Some(text_of(child)),
                "ejb-link" => ejb_ref.ejb_link = Some(text_of(child)),
                "mapped-name" => ejb_ref.mapped_name = Some(text_of(child)),
                "injection-target" => {
                    ejb_ref.injection_target.push(InjectionTarget::read(child))
                }
                "lookup-name" => ejb_ref.lookup_name = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(ejb_ref)
    }
}

impl WriteXml for EjbRef {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(writer, "ejb-ref-name", &self.ejb_ref_name)?;
        write_opt(
            writer,
            "ejb-ref-type",
            self.ejb_ref_type.map(EjbRefType::as_str),
        )?;
        write_opt(writer, "home", self.home.as_deref())?;
        write_opt(writer, "remote", self.remote.as_deref())?;
        write_opt(writer, "ejb-link", self.ejb_link.as_deref())?;
        write_opt(writer, "mapped-name", self.mapped_name.as_deref())?;
        write_all(writer, "injection-target", &self.injection_target)?;
        write_opt(writer, "lookup-name", self.lookup_name.as_deref())?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EjbLocalRef {
    pub description: TextMap,
    pub ejb_ref_name: String,
    pub ejb_ref_type: Option<EjbRefType>,
    pub local_home: Option<String>,
    pub local: Option<String>,
    pub ejb_link: Option<String>,
    pub mapped_name: Option<String>,
    pub injection_target: Vec<InjectionTarget>,
    pub lookup_name: Option<String>,
    pub id: Option<String>,
}

impl Keyed for EjbLocalRef {
    type Key = String;

    fn key(&self) -> String {
        jndi_key(&self.ejb_ref_name)
    }
}

impl EjbLocalRef {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut ejb_ref = EjbLocalRef {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    ejb_ref.description.add(Text::read(child));
                }
                "ejb-ref-name" => ejb_ref.ejb_ref_name = text_of(child),
                "ejb-ref-type" => ejb_ref.ejb_ref_type = Some(EjbRefType::read(child)?),
                "local-home" => ejb_ref.local_home = Some(text_of(child)),
                "local" => ejb_ref.local = Some(text_of(child)),
                "ejb-link" => ejb_ref.ejb_link = Some(text_of(child)),
                "mapped-name" => ejb_ref.mapped_name = Some(text_of(child)),
                "injection-target" => {
                    ejb_ref.injection_target.push(InjectionTarget::read(child))
                }
                "lookup-name" => ejb_ref.lookup_name = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(ejb_ref)
    }
}

impl WriteXml for EjbLocalRef {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(writer, "ejb-ref-name", &self.ejb_ref_name)?;
        write_opt(
            writer,
            "ejb-ref-type",
            self.ejb_ref_type.map(EjbRefType::as_str),
        )?;
        write_opt(writer, "local-home", self.local_home.as_deref())?;
        write_opt(writer, "local", self.local.as_deref())?;
        write_opt(writer, "ejb-link", self.ejb_link.as_deref())?;
        write_opt(writer, "mapped-name", self.mapped_name.as_deref())?;
        write_all(writer, "injection-target", &self.injection_target)?;
        write_opt(writer, "lookup-name", self.lookup_name.as_deref())?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceRef {
    pub description: TextMap,
    pub res_ref_name: String,
    pub res_type: Option<String>,
    pub res_auth: Option<ResAuth>,
    pub res_sharing_scope: Option<ResSharingScope>,
    pub mapped_name: Option<String>,
    pub injection_target: Vec<InjectionTarget>,
    pub lookup_name: Option<String>,
    pub id: Option<String>,
}

impl Keyed for ResourceRef {
    type Key = String;

    fn key(&self) -> String {
        jndi_key(&self.res_ref_name)
    }
}

impl ResourceRef {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut resource_ref = ResourceRef {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    resource_ref.description.add(Text::read(child));
                }
                "res-ref-name" => resource_ref.res_ref_name = text_of(child),
                "res-type" => resource_ref.res_type = Some(text_of(child)),
                "res-auth" => resource_ref.res_auth = Some(ResAuth::read(child)?),
                "res-sharing-scope" => {
                    resource_ref.res_sharing_scope = Some(ResSharingScope::read(child)?)
                }
                "mapped-name" => resource_ref.mapped_name = Some(text_of(child)),
                "injection-target" => resource_ref
                    .injection_target
                    .push(InjectionTarget::read(child)),
                "lookup-name" => resource_ref.lookup_name = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(resource_ref)
    }
}

impl WriteXml for ResourceRef {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(writer, "res-ref-name", &self.res_ref_name)?;
        write_opt(writer, "res-type", self.res_type.as_deref())?;
        write_opt(writer, "res-auth", self.res_auth.map(ResAuth::as_str))?;
        write_opt(
            writer,
            "res-sharing-scope",
            self.res_sharing_scope.map(ResSharingScope::as_str),
        )?;
        write_opt(writer, "mapped-name", self.mapped_name.as_deref())?;
        write_all(writer, "injection-target", &self.injection_target)?;
        write_opt(writer, "lookup-name", self.lookup_name.as_deref())?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceEnvRef {
    pub description: TextMap,
    pub resource_env_ref_name: String,
    pub resource_env_ref_type: Option<String>,
    pub mapped_name: Option<String>,
    pub injection_target: Vec<InjectionTarget>,
    pub lookup_name: Option<String>,
    pub id: Option<String>,
}

impl Keyed for ResourceEnvRef {
    type Key = String;

    fn key(&self) -> String {
        jndi_key(&self.resource_env_ref_name)
    }
}

impl ResourceEnvRef {
    pub(crate) fn read(node: Node) -> Self {
        let mut resource_ref = ResourceEnvRef {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    resource_ref.description.add(Text::read(child));
                }
                "resource-env-ref-name" => resource_ref.resource_env_ref_name = text_of(child),
                "resource-env-ref-type" => {
                    resource_ref.resource_env_ref_type = Some(text_of(child))
                }
                "mapped-name" => resource_ref.mapped_name = Some(text_of(child)),
                "injection-target" => resource_ref
                    .injection_target
                    .push(InjectionTarget::read(child)),
                "lookup-name" => resource_ref.lookup_name = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        resource_ref
    }
}

impl WriteXml for ResourceEnvRef {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(writer, "resource-env-ref-name", &self.resource_env_ref_name)?;
        write_opt(
            writer,
            "resource-env-ref-type",
            self.resource_env_ref_type.as_deref(),
        )?;
        write_opt(writer, "mapped-name", self.mapped_name.as_deref())?;
        write_all(writer, "injection-target", &self.injection_target)?;
        write_opt(writer, "lookup-name", self.lookup_name.as_deref())?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageDestinationRef {
    pub description: TextMap,
    pub message_destination_ref_name: String,
    pub message_destination_type: Option<String>,
    pub message_destination_usage: Option<MessageDestinationUsage>,
    pub message_destination_link: Option<String>,
    pub mapped_name: Option<String>,
    pub injection_target: Vec<InjectionTarget>,
    pub lookup_name: Option<String>,
    pub id: Option<String>,
}

impl Keyed for MessageDestinationRef {
    type Key = String;

    fn key(&self) -> String {
        jndi_key(&self.message_destination_ref_name)
    }
}

impl MessageDestinationRef {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut destination_ref = MessageDestinationRef {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    destination_ref.description.add(Text::read(child));
                }
                "message-destination-ref-name" => {
                    destination_ref.message_destination_ref_name = text_of(child)
                }
                "message-destination-type" => {
                    destination_ref.message_destination_type = Some(text_of(child))
                }
                "message-destination-usage" => {
                    destination_ref.message_destination_usage =
                        Some(MessageDestinationUsage::read(child)?)
                }
                "message-destination-link" => {
                    destination_ref.message_destination_link = Some(text_of(child))
                }
                "mapped-name" => destination_ref.mapped_name = Some(text_of(child)),
                "injection-target" => destination_ref
                    .injection_target
                    .push(InjectionTarget::read(child)),
                "lookup-name" => destination_ref.lookup_name = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(destination_ref)
    }
}

impl WriteXml for MessageDestinationRef {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(
            writer,
            "message-destination-ref-name",
            &self.message_destination_ref_name,
        )?;
        write_opt(
            writer,
            "message-destination-type",
            self.message_destination_type.as_deref(),
        )?;
        write_opt(
            writer,
            "message-destination-usage",
            self.message_destination_usage
                .map(MessageDestinationUsage::as_str),
        )?;
        write_opt(
            writer,
            "message-destination-link",
            self.message_destination_link.as_deref(),
        )?;
        write_opt(writer, "mapped-name", self.mapped_name.as_deref())?;
        write_all(writer, "injection-target", &self.injection_target)?;
        write_opt(writer, "lookup-name", self.lookup_name.as_deref())?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersistenceContextRef {
    pub description: TextMap,
    pub persistence_context_ref_name: String,
    pub persistence_unit_name: Option<String>,
    pub persistence_context_type: Option<PersistenceContextType>,
    pub persistence_property: Vec<Property>,
    pub mapped_name: Option<String>,
    pub injection_target: Vec<InjectionTarget>,
    pub id: Option<String>,
}

impl Keyed for PersistenceContextRef {
    type Key = String;

    fn key(&self) -> String {
        jndi_key(&self.persistence_context_ref_name)
    }
}

impl PersistenceContextRef {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut context_ref = PersistenceContextRef {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    context_ref.description.add(Text::read(child));
                }
                "persistence-context-ref-name" => {
                    context_ref.persistence_context_ref_name = text_of(child)
                }
                "persistence-unit-name" => {
                    context_ref.persistence_unit_name = Some(text_of(child))
                }
                "persistence-context-type" => {
                    context_ref.persistence_context_type =
                        Some(PersistenceContextType::read(child)?)
                }
                "persistence-property" => {
                    context_ref.persistence_property.push(Property::read(child))
                }
                "mapped-name" => context_ref.mapped_name = Some(text_of(child)),
                "injection-target" => context_ref
                    .injection_target
                    .push(InjectionTarget::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(context_ref)
    }
}

impl WriteXml for PersistenceContextRef {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(
            writer,
            "persistence-context-ref-name",
            &self.persistence_context_ref_name,
        )?;
        write_opt(
            writer,
            "persistence-unit-name",
            self.persistence_unit_name.as_deref(),
        )?;
        write_opt(
            writer,
            "persistence-context-type",
            self.persistence_context_type
                .map(PersistenceContextType::as_str),
        )?;
        write_all(writer, "persistence-property", &self.persistence_property)?;
        write_opt(writer, "mapped-name", self.mapped_name.as_deref())?;
        write_all(writer, "injection-target", &self.injection_target)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersistenceUnitRef {
    pub description: TextMap,
    pub persistence_unit_ref_name: String,
    pub persistence_unit_name: Option<String>,
    pub mapped_name: Option<String>,
    pub injection_target: Vec<InjectionTarget>,
    pub id: Option<String>,
}

impl Keyed for PersistenceUnitRef {
    type Key = String;

    fn key(&self) -> String {
        jndi_key(&self.persistence_unit_ref_name)
    }
}

impl PersistenceUnitRef {
    pub(crate) fn read(node: Node) -> Self {
        let mut unit_ref = PersistenceUnitRef {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    unit_ref.description.add(Text::read(child));
                }
                "persistence-unit-ref-name" => {
                    unit_ref.persistence_unit_ref_name = text_of(child)
                }
                "persistence-unit-name" => unit_ref.persistence_unit_name = Some(text_of(child)),
                "mapped-name" => unit_ref.mapped_name = Some(text_of(child)),
                "injection-target" => {
                    unit_ref.injection_target.push(InjectionTarget::read(child))
                }
                _ => skip_unexpected(node, child),
            }
        }
        unit_ref
    }
}

impl WriteXml for PersistenceUnitRef {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(
            writer,
            "persistence-unit-ref-name",
            &self.persistence_unit_ref_name,
        )?;
        write_opt(
            writer,
            "persistence-unit-name",
            self.persistence_unit_name.as_deref(),
        )?;
        write_opt(writer, "mapped-name", self.mapped_name.as_deref())?;
        write_all(writer, "injection-target", &self.injection_target)?;
        close(writer, tag)
    }
}

/// data-sourceType: a Java EE 6 `@DataSourceDefinition` in descriptor form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSource {
    pub description: Option<String>,
    pub name: String,
    pub class_name: Option<String>,
    pub server_name: Option<String>,
    pub port_number: Option<i32>,
    pub database_name: Option<String>,
    pub url: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub property: Vec<Property>,
    pub login_timeout: Option<i32>,
    pub transactional: Option<bool>,
    pub isolation_level: Option<IsolationLevel>,
    pub initial_pool_size: Option<i32>,
    pub max_pool_size: Option<i32>,
    pub min_pool_size: Option<i32>,
    pub max_idle_time: Option<i32>,
    pub max_statements: Option<i32>,
    pub id: Option<String>,
}

impl Keyed for DataSource {
    type Key = String;

    fn key(&self) -> String {
        jndi_key(&self.name)
    }
}

impl DataSource {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut data_source = DataSource {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => data_source.description = Some(raw_text_of(child)),
                "name" => data_source.name = text_of(child),
                "class-name" => data_source.class_name = Some(text_of(child)),
                "server-name" => data_source.server_name = Some(text_of(child)),
                "port-number" => data_source.port_number = Some(number_of(child)?),
                "database-name" => data_source.database_name = Some(text_of(child)),
                "url" => data_source.url = Some(text_of(child)),
                "user" => data_source.user = Some(text_of(child)),
                "password" => data_source.password = Some(text_of(child)),
                "property" => data_source.property.push(Property::read(child)),
                "login-timeout" => data_source.login_timeout = Some(number_of(child)?),
                "transactional" => data_source.transactional = Some(bool_of(child)?),
                "isolation-level" => {
                    data_source.isolation_level = Some(IsolationLevel::read(child)?)
                }
                "initial-pool-size" => data_source.initial_pool_size = Some(number_of(child)?),
                "max-pool-size" => data_source.max_pool_size = Some(number_of(child)?),
                "min-pool-size" => data_source.min_pool_size = Some(number_of(child)?),
                "max-idle-time" => data_source.max_idle_time = Some(number_of(child)?),
                "max-statements" => data_source.max_statements = Some(number_of(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(data_source)
    }
}

impl WriteXml for DataSource {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_opt(writer, "description", self.description.as_deref())?;
        write_text(writer, "name", &self.name)?;
        write_opt(writer, "class-name", self.class_name.as_deref())?;
        write_opt(writer, "server-name", self.server_name.as_deref())?;
        write_opt_value(writer, "port-number", self.port_number)?;
        write_opt(writer, "database-name", self.database_name.as_deref())?;
        write_opt(writer, "url", self.url.as_deref())?;
        write_opt(writer, "user", self.user.as_deref())?;
        write_opt(writer, "password", self.password.as_deref())?;
        write_all(writer, "property", &self.property)?;
        write_opt_value(writer, "login-timeout", self.login_timeout)?;
        write_opt_value(writer, "transactional", self.transactional)?;
        write_opt(
            writer,
            "isolation-level",
            self.isolation_level.map(IsolationLevel::as_str),
        )?;
        write_opt_value(writer, "initial-pool-size", self.initial_pool_size)?;
        write_opt_value(writer, "max-pool-size", self.max_pool_size)?;
        write_opt_value(writer, "min-pool-size", self.min_pool_size)?;
        write_opt_value(writer, "max-idle-time", self.max_idle_time)?;
        write_opt_value(writer, "max-statements", self.max_statements)?;
        close(writer, tag)
    }
}

/// jms-connection-factoryType (Java EE 7 resource definition).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JmsConnectionFactory {
    pub name: String,
    pub description: TextMap,
    pub class_name: Option<String>,
    pub interface_name: Option<String>,
    pub resource_adapter: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub client_id: Option<String>,
    pub transactional: bool,
    pub max_pool_size: Option<i32>,
    pub min_pool_size: Option<i32>,
    pub property: Vec<Property>,
    pub id: Option<String>,
}

impl Keyed for JmsConnectionFactory {
    type Key = String;

    fn key(&self) -> String {
        jndi_key(&self.name)
    }
}

impl JmsConnectionFactory {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut factory = JmsConnectionFactory {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "name" => factory.name = text_of(child),
                "description" => {
                    factory.description.add(Text::read(child));
                }
                "class-name" => factory.class_name = Some(text_of(child)),
                "interface-name" => factory.interface_name = Some(text_of(child)),
                "resource-adapter" => factory.resource_adapter = Some(text_of(child)),
                "user" => factory.user = Some(text_of(child)),
                "password" => factory.password = Some(text_of(child)),
                "clientId" => factory.client_id = Some(text_of(child)),
                "transactional" => factory.transactional = bool_of(child)?,
                "max-pool-size" => factory.max_pool_size = Some(number_of(child)?),
                "min-pool-size" => factory.min_pool_size = Some(number_of(child)?),
                "property" => factory.property.push(Property::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(factory)
    }
}

impl WriteXml for JmsConnectionFactory {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "name", &self.name)?;
        write_text_map(writer, "description", &self.description)?;
        write_opt(writer, "class-name", self.class_name.as_deref())?;
        write_opt(writer, "interface-name", self.interface_name.as_deref())?;
        write_opt(writer, "resource-adapter", self.resource_adapter.as_deref())?;
        write_opt(writer, "user", self.user.as_deref())?;
        write_opt(writer, "password", self.password.as_deref())?;
        write_opt(writer, "clientId", self.client_id.as_deref())?;
        write_text(writer, "transactional", &self.transactional.to_string())?;
        write_opt_value(writer, "max-pool-size", self.max_pool_size)?;
        write_opt_value(writer, "min-pool-size", self.min_pool_size)?;
        write_all(writer, "property", &self.property)?;
        close(writer, tag)
    }
}

/// jms-destinationType (Java EE 7 resource definition).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JmsDestination {
    pub description: Option<String>,
    pub name: String,
    pub interface_name: Option<String>,
    pub class_name: Option<String>,
    pub resource_adapter: Option<String>,
    pub destination_name: Option<String>,
    pub property: Vec<Property>,
    pub id: Option<String>,
}

impl Keyed for JmsDestination {
    type Key = String;

    fn key(&self) -> String {
        jndi_key(&self.name)
    }
}

impl JmsDestination {
    pub(crate) fn read(node: Node) -> Self {
        let mut destination = JmsDestination {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => destination.description = Some(raw_text_of(child)),
                "name" => destination.name = text_of(child),
                "interface-name" => destination.interface_name = Some(text_of(child)),
                "class-name" => destination.class_name = Some(text_of(child)),
                "resource-adapter" => destination.resource_adapter = Some(text_of(child)),
                "destination-name" => destination.destination_name = Some(text_of(child)),
                "property" => destination.property.push(Property::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        destination
    }
}

impl WriteXml for JmsDestination {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_opt(writer, "description", self.description.as_deref())?;
        write_text(writer, "name", &self.name)?;
        write_opt(writer, "interface-name", self.interface_name.as_deref())?;
        write_opt(writer, "class-name", self.class_name.as_deref())?;
        write_opt(writer, "resource-adapter", self.resource_adapter.as_deref())?;
        write_opt(writer, "destination-name", self.destination_name.as_deref())?;
        write_all(writer, "property", &self.property)?;
        close(writer, tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unqualified_names_normalize_to_comp_env() {
        let factory = JmsConnectionFactory {
            name: "jms/MyFactory".to_string(),
            ..JmsConnectionFactory::default()
        };
        assert_eq!(factory.key(), "java:comp/env/jms/MyFactory");
    }

    #[test]
    fn qualified_names_are_left_alone() {
        let factory = JmsConnectionFactory {
            name: "java:app/jms/MyFactory".to_string(),
            ..JmsConnectionFactory::default()
        };
        assert_eq!(factory.key(), "java:app/jms/MyFactory");
    }
}
