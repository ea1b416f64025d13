//! The enterprise bean types of ejb-jar.xml: session, message-driven and
//! entity beans.

use indexmap::IndexMap;
use roxmltree::Node;

use crate::common::{Empty, LifecycleCallback, SecurityRoleRef};
use crate::ejb_jar::{
    AroundInvoke, AroundTimeout, AsyncMethod, ConcurrentMethod, InitMethod, NamedMethod,
    RemoveMethod, SecurityIdentity, Timeout, Timer,
};
use crate::env::{
    DataSource, EjbLocalRef, EjbRef, EnvEntry, JmsConnectionFactory, JmsDestination,
    MessageDestinationRef, PersistenceContextRef, PersistenceUnitRef, ResourceEnvRef,
    ResourceRef,
};
use crate::error::DescriptorError;
use crate::keyed::KeyedCollection;
use crate::lang::{Icon, Icons, Text, TextMap};
use crate::service_ref::ServiceRef;
use crate::xml::{
    bool_of, close, element_children, id_of, open, raw_text_of, skip_unexpected, text_of,
    write_all, write_icons, write_keyed, write_opt, write_opt_value, write_strings, write_text,
    write_text_map, WriteXml, XmlWriter,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionType {
    Stateful,
    Stateless,
    Singleton,
    Managed,
}

impl SessionType {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionType::Stateful => "Stateful",
            SessionType::Stateless => "Stateless",
            SessionType::Singleton => "Singleton",
            SessionType::Managed => "Managed",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "Stateful" => Ok(SessionType::Stateful),
            "Stateless" => Ok(SessionType::Stateless),
            "Singleton" => Ok(SessionType::Singleton),
            "Managed" => Ok(SessionType::Managed),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

impl Default for SessionType {
    fn default() -> Self {
        SessionType::Stateless
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransactionType {
    Bean,
    Container,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Bean => "Bean",
            TransactionType::Container => "Container",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "Bean" => Ok(TransactionType::Bean),
            "Container" => Ok(TransactionType::Container),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConcurrencyManagementType {
    Bean,
    Container,
}

impl ConcurrencyManagementType {
    pub fn as_str(self) -> &'static str {
        match self {
            ConcurrencyManagementType::Bean => "Bean",
            ConcurrencyManagementType::Container => "Container",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "Bean" => Ok(ConcurrencyManagementType::Bean),
            "Container" => Ok(ConcurrencyManagementType::Container),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

/// session-beanType (ejb-jar 3.1).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionBean {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub ejb_name: String,
    pub mapped_name: Option<String>,
    pub home: Option<String>,
    pub remote: Option<String>,
    pub local_home: Option<String>,
    pub local: Option<String>,
    pub business_local: Vec<String>,
    pub business_remote: Vec<String>,
    pub local_bean: Option<Empty>,
    pub service_endpoint: Option<String>,
    pub ejb_class: Option<String>,
    pub session_type: Option<SessionType>,
    pub stateful_timeout: Option<Timeout>,
    pub timeout_method: Option<NamedMethod>,
    pub timer: Vec<Timer>,
    pub init_on_startup: Option<bool>,
    pub concurrency_management_type: Option<ConcurrencyManagementType>,
    pub concurrent_method: Vec<ConcurrentMethod>,
    pub depends_on: Option<Vec<String>>,
    pub init_method: Vec<InitMethod>,
    pub remove_method: Vec<RemoveMethod>,
    pub async_method: Vec<AsyncMethod>,
    pub transaction_type: Option<TransactionType>,
    pub after_begin_method: Option<NamedMethod>,
    pub before_completion_method: Option<NamedMethod>,
    pub after_completion_method: Option<NamedMethod>,
    pub around_invoke: Vec<AroundInvoke>,
    pub around_timeout: Vec<AroundTimeout>,
    pub env_entry: KeyedCollection<EnvEntry>,
    pub ejb_ref: KeyedCollection<EjbRef>,
    pub ejb_local_ref: KeyedCollection<EjbLocalRef>,
    pub service_ref: KeyedCollection<ServiceRef>,
    pub resource_ref: KeyedCollection<ResourceRef>,
    pub resource_env_ref: KeyedCollection<ResourceEnvRef>,
    pub message_destination_ref: KeyedCollection<MessageDestinationRef>,
    pub persistence_context_ref: KeyedCollection<PersistenceContextRef>,
    pub persistence_unit_ref: KeyedCollection<PersistenceUnitRef>,
    pub post_construct: Vec<LifecycleCallback>,
    pub pre_destroy: Vec<LifecycleCallback>,
    pub data_source: KeyedCollection<DataSource>,
    pub jms_connection_factory: KeyedCollection<JmsConnectionFactory>,
    pub jms_destination: KeyedCollection<JmsDestination>,
    pub post_activate: Vec<LifecycleCallback>,
    pub pre_passivate: Vec<LifecycleCallback>,
    pub security_role_ref: Vec<SecurityRoleRef>,
    pub security_identity: Option<SecurityIdentity>,
    pub passivation_capable: Option<bool>,
    pub id: Option<String>,
}

impl SessionBean {
    pub fn new(
        ejb_name: impl Into<String>,
        ejb_class: impl Into<String>,
        session_type: SessionType,
    ) -> Self {
        Self {
            ejb_name: ejb_name.into(),
            ejb_class: Some(ejb_class.into()),
            session_type: Some(session_type),
            ..Self::default()
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut bean = SessionBean {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    bean.description.add(Text::read(child));
                }
                "display-name" => {
                    bean.display_name.add(Text::read(child));
                }
                "icon" => {
                    bean.icon.add(Icon::read(child));
                }
                "ejb-name" => bean.ejb_name = text_of(child),
                "mapped-name" => bean.mapped_name = Some(text_of(child)),
                "home" => bean.home = Some(text_of(child)),
                "remote" => bean.remote = Some(text_of(child)),
                "local-home" => bean.local_home = Some(text_of(child)),
                "local" => bean.local = Some(text_of(child)),
                "business-local" => bean.business_local.push(text_of(child)),
                "business-remote" => bean.business_remote.push(text_of(child)),
                "local-bean" => bean.local_bean = Some(Empty::read(child)),
                "service-endpoint" => bean.service_endpoint = Some(text_of(child)),
                "ejb-class" => bean.ejb_class = Some(text_of(child)),
                "session-type" => bean.session_type = Some(SessionType::read(child)?),
                "stateful-timeout" => bean.stateful_timeout = Some(Timeout::read(child)?),
                "timeout-method" => bean.timeout_method = Some(NamedMethod::read(child)),
                "timer" => bean.timer.push(Timer::read(child)?),
                "init-on-startup" => bean.init_on_startup = Some(bool_of(child)?),
                "concurrency-management-type" => {
                    bean.concurrency_management_type =
                        Some(ConcurrencyManagementType::read(child)?)
                }
                "concurrent-method" => {
                    bean.concurrent_method.push(ConcurrentMethod::read(child)?)
                }
                "depends-on" => {
                    let names = element_children(child)
                        .filter(|name| name.tag_name().name() == "ejb-name")
                        .map(text_of)
                        .collect();
                    bean.depends_on = Some(names);
                }
                "init-method" => bean.init_method.push(InitMethod::read(child)),
                "remove-method" => bean.remove_method.push(RemoveMethod::read(child)?),
                "async-method" => bean.async_method.push(AsyncMethod::read(child)),
                "transaction-type" => {
                    bean.transaction_type = Some(TransactionType::read(child)?)
                }
                "after-begin-method" => bean.after_begin_method = Some(NamedMethod::read(child)),
                "before-completion-method" => {
                    bean.before_completion_method = Some(NamedMethod::read(child))
                }
                "after-completion-method" => {
                    bean.after_completion_method = Some(NamedMethod::read(child))
                }
                "around-invoke" => bean.around_invoke.push(AroundInvoke::read(child)),
                "around-timeout" => bean.around_timeout.push(AroundTimeout::read(child)),
                "env-entry" => {
                    bean.env_entry.push(EnvEntry::read(child));
                }
                "ejb-ref" => {
                    bean.ejb_ref.push(EjbRef::read(child)?);
                }
                "ejb-local-ref" => {
                    bean.ejb_local_ref.push(EjbLocalRef::read(child)?);
                }
                "service-ref" => {
                    bean.service_ref.push(ServiceRef::read(child)?);
                }
                "resource-ref" => {
                    bean.resource_ref.push(ResourceRef::read(child)?);
                }
                "resource-env-ref" => {
                    bean.resource_env_ref.push(ResourceEnvRef::read(child));
                }
                "message-destination-ref" => {
                    bean.message_destination_ref
                        .push(MessageDestinationRef::read(child)?);
                }
                "persistence-context-ref" => {
                    bean.persistence_context_ref
                        .push(PersistenceContextRef::read(child)?);
                }
                "persistence-unit-ref" => {
                    bean.persistence_unit_ref
                        .push(PersistenceUnitRef::read(child));
                }
                "post-construct" => bean.post_construct.push(LifecycleCallback::read(child)),
                "pre-destroy" => bean.pre_destroy.push(LifecycleCallback::read(child)),
                "data-source" => {
                    bean.data_source.push(DataSource::read(child)?);
                }
                "jms-connection-factory" => {
                    bean.jms_connection_factory
                        .push(JmsConnectionFactory::read(child)?);
                }
                "jms-destination" => {
                    bean.jms_destination.push(JmsDestination::read(child));
                }
                "post-activate" => bean.post_activate.push(LifecycleCallback::read(child)),
                "pre-passivate" => bean.pre_passivate.push(LifecycleCallback::read(child)),
                "security-role-ref" => {
                    bean.security_role_ref.push(SecurityRoleRef::read(child))
                }
                "security-identity" => {
                    bean.security_identity = Some(SecurityIdentity::read(child))
                }
                "passivation-capable" => bean.passivation_capable = Some(bool_of(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(bean)
    }
}

impl WriteXml for SessionBean {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_text(writer, "ejb-name", &self.ejb_name)?;
        write_opt(writer, "mapped-name", self.mapped_name.as_deref())?;
        write_opt(writer, "home", self.home.as_deref())?;
        write_opt(writer, "remote", self.remote.as_deref())?;
        write_opt(writer, "local-home", self.local_home.as_deref())?;
        write_opt(writer, "local", self.local.as_deref())?;
        write_strings(writer, "business-local", &self.business_local)?;
        write_strings(writer, "business-remote", &self.business_remote)?;
        if let Some(local_bean) = &self.local_bean {
            local_bean.write_xml(writer, "local-bean")?;
        }
        write_opt(writer, "service-endpoint", self.service_endpoint.as_deref())?;
        write_opt(writer, "ejb-class", self.ejb_class.as_deref())?;
        write_opt(
            writer,
            "session-type",
            self.session_type.map(SessionType::as_str),
        )?;
        if let Some(timeout) = &self.stateful_timeout {
            timeout.write_xml(writer, "stateful-timeout")?;
        }
        if let Some(method) = &self.timeout_method {
            method.write_xml(writer, "timeout-method")?;
        }
        write_all(writer, "timer", &self.timer)?;
        write_opt_value(writer, "init-on-startup", self.init_on_startup)?;
        write_opt(
            writer,
            "concurrency-management-type",
            self.concurrency_management_type
                .map(ConcurrencyManagementType::as_str),
        )?;
        write_all(writer, "concurrent-method", &self.concurrent_method)?;
        if let Some(depends_on) = &self.depends_on {
            open(writer, "depends-on", None)?;
            write_strings(writer, "ejb-name", depends_on)?;
            close(writer, "depends-on")?;
        }
        write_all(writer, "init-method", &self.init_method)?;
        write_all(writer, "remove-method", &self.remove_method)?;
        write_all(writer, "async-method", &self.async_method)?;
        write_opt(
            writer,
            "transaction-type",
            self.transaction_type.map(TransactionType::as_str),
        )?;
        if let Some(method) = &self.after_begin_method {
            method.write_xml(writer, "after-begin-method")?;
        }
        if let Some(method) = &self.before_completion_method {
            method.write_xml(writer, "before-completion-method")?;
        }
        if let Some(method) = &self.after_completion_method {
            method.write_xml(writer, "after-completion-method")?;
        }
        write_all(writer, "around-invoke", &self.around_invoke)?;
        write_all(writer, "around-timeout", &self.around_timeout)?;
        write_keyed(writer, "env-entry", &self.env_entry)?;
        write_keyed(writer, "ejb-ref", &self.ejb_ref)?;
        write_keyed(writer, "ejb-local-ref", &self.ejb_local_ref)?;
        write_keyed(writer, "service-ref", &self.service_ref)?;
        write_keyed(writer, "resource-ref", &self.resource_ref)?;
        write_keyed(writer, "resource-env-ref", &self.resource_env_ref)?;
        write_keyed(
            writer,
            "message-destination-ref",
            &self.message_destination_ref,
        )?;
        write_keyed(
            writer,
            "persistence-context-ref",
            &self.persistence_context_ref,
        )?;
        write_keyed(writer, "persistence-unit-ref", &self.persistence_unit_ref)?;
        write_all(writer, "post-construct", &self.post_construct)?;
        write_all(writer, "pre-destroy", &self.pre_destroy)?;
        write_keyed(writer, "data-source", &self.data_source)?;
        write_keyed(
            writer,
            "jms-connection-factory",
            &self.jms_connection_factory,
        )?;
        write_keyed(writer, "jms-destination", &self.jms_destination)?;
        write_all(writer, "post-activate", &self.post_activate)?;
        write_all(writer, "pre-passivate", &self.pre_passivate)?;
        write_all(writer, "security-role-ref", &self.security_role_ref)?;
        if let Some(identity) = &self.security_identity {
            identity.write_xml(writer, "security-identity")?;
        }
        write_opt_value(writer, "passivation-capable", self.passivation_capable)?;
        close(writer, tag)
    }
}

/// activation-configType: the activation properties handed to a message
/// listener's resource adapter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivationConfig {
    pub description: TextMap,
    pub activation_config_property: Vec<ActivationConfigProperty>,
    pub id: Option<String>,
}

impl ActivationConfig {
    pub fn add_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.activation_config_property.push(ActivationConfigProperty {
            activation_config_property_name: name.into(),
            activation_config_property_value: value.into(),
        });
    }

    /// The properties as an ordered name/value map; a repeated name keeps the
    /// last value.
    pub fn to_properties(&self) -> IndexMap<String, String> {
        self.activation_config_property
            .iter()
            .map(|property| {
                (
                    property.activation_config_property_name.clone(),
                    property.activation_config_property_value.clone(),
                )
            })
            .collect()
    }

    pub(crate) fn read(node: Node) -> Self {
        let mut config = ActivationConfig {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    config.description.add(Text::read(child));
                }
                "activation-config-property" => config
                    .activation_config_property
                    .push(ActivationConfigProperty::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        config
    }
}

impl WriteXml for ActivationConfig {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_all(
            writer,
            "activation-config-property",
            &self.activation_config_property,
        )?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivationConfigProperty {
    pub activation_config_property_name: String,
    pub activation_config_property_value: String,
}

impl ActivationConfigProperty {
    pub(crate) fn read(node: Node) -> Self {
        let mut property = ActivationConfigProperty::default();
        for child in element_children(node) {
            match child.tag_name().name() {
                "activation-config-property-name" => {
                    property.activation_config_property_name = text_of(child)
                }
                "activation-config-property-value" => {
                    property.activation_config_property_value = raw_text_of(child)
                }
                _ => skip_unexpected(node, child),
            }
        }
        property
    }
}

impl WriteXml for ActivationConfigProperty {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, None)?;
        write_text(
            writer,
            "activation-config-property-name",
            &self.activation_config_property_name,
        )?;
        write_text(
            writer,
            "activation-config-property-value",
            &self.activation_config_property_value,
        )?;
        close(writer, tag)
    }
}

/// The EJB 2.x message-driven-destination element, still read and written
/// for descriptors predating activation-config.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageDrivenDestination {
    pub destination_type: Option<String>,
    pub subscription_durability: Option<String>,
    pub id: Option<String>,
}

impl MessageDrivenDestination {
    pub(crate) fn read(node: Node) -> Self {
        let mut destination = MessageDrivenDestination {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "destination-type" => destination.destination_type = Some(text_of(child)),
                "subscription-durability" => {
                    destination.subscription_durability = Some(text_of(child))
                }
                _ => skip_unexpected(node, child),
            }
        }
        destination
    }
}

impl WriteXml for MessageDrivenDestination {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_opt(writer, "destination-type", self.destination_type.as_deref())?;
        write_opt(
            writer,
            "subscription-durability",
            self.subscription_durability.as_deref(),
        )?;
        close(writer, tag)
    }
}

/// message-driven-beanType (ejb-jar 3.1, with the EJB 2.x messaging elements
/// retained).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageDrivenBean {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub ejb_name: String,
    pub mapped_name: Option<String>,
    pub ejb_class: Option<String>,
    pub messaging_type: Option<String>,
    pub timeout_method: Option<NamedMethod>,
    pub timer: Vec<Timer>,
    pub transaction_type: Option<TransactionType>,
    pub message_selector: Option<String>,
    pub acknowledge_mode: Option<String>,
    pub message_driven_destination: Option<MessageDrivenDestination>,
    pub message_destination_type: Option<String>,
    pub message_destination_link: Option<String>,
    pub activation_config: Option<ActivationConfig>,
    pub around_invoke: Vec<AroundInvoke>,
    pub around_timeout: Vec<AroundTimeout>,
    pub env_entry: KeyedCollection<EnvEntry>,
    pub ejb_ref: KeyedCollection<EjbRef>,
    pub ejb_local_ref: KeyedCollection<EjbLocalRef>,
    pub service_ref: KeyedCollection<ServiceRef>,
    pub resource_ref: KeyedCollection<ResourceRef>,
    pub resource_env_ref: KeyedCollection<ResourceEnvRef>,
    pub message_destination_ref: KeyedCollection<MessageDestinationRef>,
    pub persistence_context_ref: KeyedCollection<PersistenceContextRef>,
    pub persistence_unit_ref: KeyedCollection<PersistenceUnitRef>,
    pub post_construct: Vec<LifecycleCallback>,
    pub pre_destroy: Vec<LifecycleCallback>,
    pub data_source: KeyedCollection<DataSource>,
    pub jms_connection_factory: KeyedCollection<JmsConnectionFactory>,
    pub jms_destination: KeyedCollection<JmsDestination>,
    pub security_role_ref: Vec<SecurityRoleRef>,
    pub security_identity: Option<SecurityIdentity>,
    pub id: Option<String>,
}

impl MessageDrivenBean {
    pub fn new(ejb_name: impl Into<String>, ejb_class: impl Into<String>) -> Self {
        Self {
            ejb_name: ejb_name.into(),
            ejb_class: Some(ejb_class.into()),
            ..Self::default()
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut bean = MessageDrivenBean {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    bean.description.add(Text::read(child));
                }
                "display-name" => {
                    bean.display_name.add(Text::read(child));
                }
                "icon" => {
                    bean.icon.add(Icon::read(child));
                }
                "ejb-name" => bean.ejb_name = text_of(child),
                "mapped-name" => bean.mapped_name = Some(text_of(child)),
                "ejb-class" => bean.ejb_class = Some(text_of(child)),
                "messaging-type" => bean.messaging_type = Some(text_of(child)),
                "timeout-method" => bean.timeout_method = Some(NamedMethod::read(child)),
                "timer" => bean.timer.push(Timer::read(child)?),
                "transaction-type" => {
                    bean.transaction_type = Some(TransactionType::read(child)?)
                }
                "message-selector" => bean.message_selector = Some(raw_text_of(child)),
                "acknowledge-mode" => bean.acknowledge_mode = Some(text_of(child)),
                "message-driven-destination" => {
                    bean.message_driven_destination =
                        Some(MessageDrivenDestination::read(child))
                }
                "message-destination-type" => {
                    bean.message_destination_type = Some(text_of(child))
                }
                "message-destination-link" => {
                    bean.message_destination_link = Some(text_of(child))
                }
                "activation-config" => {
                    bean.activation_config = Some(ActivationConfig::read(child))
                }
                "around-invoke" => bean.around_invoke.push(AroundInvoke::read(child)),
                "around-timeout" => bean.around_timeout.push(AroundTimeout::read(child)),
                "env-entry" => {
                    bean.env_entry.push(EnvEntry::read(child));
                }
                "ejb-ref" => {
                    bean.ejb_ref.push(EjbRef::read(child)?);
                }
                "ejb-local-ref" => {
                    bean.ejb_local_ref.push(EjbLocalRef::read(child)?);
                }
                "service-ref" => {
                    bean.service_ref.push(ServiceRef::read(child)?);
                }
                "resource-ref" => {
                    bean.resource_ref.push(ResourceRef::read(child)?);
                }
                "resource-env-ref" => {
                    bean.resource_env_ref.push(ResourceEnvRef::read(child));
                }
                "message-destination-ref" => {
                    bean.message_destination_ref
                        .push(MessageDestinationRef::read(child)?);
                }
                "persistence-context-ref" => {
                    bean.persistence_context_ref
                        .push(PersistenceContextRef::read(child)?);
                }
                "persistence-unit-ref" => {
                    bean.persistence_unit_ref
                        .push(PersistenceUnitRef::read(child));
                }
                "post-construct" => bean.post_construct.push(LifecycleCallback::read(child)),
                "pre-destroy" => bean.pre_destroy.push(LifecycleCallback::read(child)),
                "data-source" => {
                    bean.data_source.push(DataSource::read(child)?);
                }
                "jms-connection-factory" => {
                    bean.jms_connection_factory
                        .push(JmsConnectionFactory::read(child)?);
                }
                "jms-destination" => {
                    bean.jms_destination.push(JmsDestination::read(child));
                }
                "security-role-ref" => {
                    bean.security_role_ref.push(SecurityRoleRef::read(child))
                }
                "security-identity" => {
                    bean.security_identity = Some(SecurityIdentity::read(child))
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(bean)
    }
}

impl WriteXml for MessageDrivenBean {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_text(writer, "ejb-name", &self.ejb_name)?;
        write_opt(writer, "mapped-name", self.mapped_name.as_deref())?;
        write_opt(writer, "ejb-class", self.ejb_class.as_deref())?;
        write_opt(writer, "messaging-type", self.messaging_type.as_deref())?;
        if let Some(method) = &self.timeout_method {
            method.write_xml(writer, "timeout-method")?;
        }
        write_all(writer, "timer", &self.timer)?;
        write_opt(
            writer,
            "transaction-type",
            self.transaction_type.map(TransactionType::as_str),
        )?;
        write_opt(writer, "message-selector", self.message_selector.as_deref())?;
        write_opt(writer, "acknowledge-mode", self.acknowledge_mode.as_deref())?;
        if let Some(destination) = &self.message_driven_destination {
            destination.write_xml(writer, "message-driven-destination")?;
        }
        write_opt(
            writer,
            "message-destination-type",
            self.message_destination_type.as_deref(),
        )?;
        write_opt(
            writer,
            "message-destination-link",
            self.message_destination_link.as_deref(),
        )?;
        if let Some(config) = &self.activation_config {
            config.write_xml(writer, "activation-config")?;
        }
        write_all(writer, "around-invoke", &self.around_invoke)?;
        write_all(writer, "around-timeout", &self.around_timeout)?;
        write_keyed(writer, "env-entry", &self.env_entry)?;
        write_keyed(writer, "ejb-ref", &self.ejb_ref)?;
        write_keyed(writer, "ejb-local-ref", &self.ejb_local_ref)?;
        write_keyed(writer, "service-ref", &self.service_ref)?;
        write_keyed(writer, "resource-ref", &self.resource_ref)?;
        write_keyed(writer, "resource-env-ref", &self.resource_env_ref)?;
        write_keyed(
            writer,
            "message-destination-ref",
            &self.message_destination_ref,
        )?;
        write_keyed(
            writer,
            "persistence-context-ref",
            &self.persistence_context_ref,
        )?;
        write_keyed(writer, "persistence-unit-ref", &self.persistence_unit_ref)?;
        write_all(writer, "post-construct", &self.post_construct)?;
        write_all(writer, "pre-destroy", &self.pre_destroy)?;
        write_keyed(writer, "data-source", &self.data_source)?;
        write_keyed(
            writer,
            "jms-connection-factory",
            &self.jms_connection_factory,
        )?;
        write_keyed(writer, "jms-destination", &self.jms_destination)?;
        write_all(writer, "security-role-ref", &self.security_role_ref)?;
        if let Some(identity) = &self.security_identity {
            identity.write_xml(writer, "security-identity")?;
        }
        close(writer, tag)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PersistenceType {
    Bean,
    Container,
}

impl PersistenceType {
    pub fn as_str(self) -> &'static str {
        match self {
            PersistenceType::Bean => "Bean",
            PersistenceType::Container => "Container",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "Bean" => Ok(PersistenceType::Bean),
            "Container" => Ok(PersistenceType::Container),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CmpVersion {
    Cmp1,
    Cmp2,
}

impl CmpVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            CmpVersion::Cmp1 => "1.x",
            CmpVersion::Cmp2 => "2.x",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "1.x" => Ok(CmpVersion::Cmp1),
            "2.x" => Ok(CmpVersion::Cmp2),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResultTypeMapping {
    Local,
    Remote,
}

impl ResultTypeMapping {
    pub fn as_str(self) -> &'static str {
        match self {
            ResultTypeMapping::Local => "Local",
            ResultTypeMapping::Remote => "Remote",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "Local" => Ok(ResultTypeMapping::Local),
            "Remote" => Ok(ResultTypeMapping::Remote),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CmpField {
    pub description: TextMap,
    pub field_name: String,
    pub id: Option<String>,
}

impl CmpField {
    pub(crate) fn read(node: Node) -> Self {
        let mut field = CmpField {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    field.description.add(Text::read(child));
                }
                "field-name" => field.field_name = text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        field
    }
}

impl WriteXml for CmpField {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(writer, "field-name", &self.field_name)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryMethod {
    pub method_name: String,
    pub method_params: Option<crate::ejb_jar::MethodParams>,
    pub id: Option<String>,
}

impl QueryMethod {
    pub(crate) fn read(node: Node) -> Self {
        let mut method = QueryMethod {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "method-name" => method.method_name = text_of(child),
                "method-params" => {
                    method.method_params = Some(crate::ejb_jar::MethodParams::read(child))
                }
                _ => skip_unexpected(node, child),
            }
        }
        method
    }
}

impl WriteXml for QueryMethod {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "method-name", &self.method_name)?;
        if let Some(params) = &self.method_params {
            params.write_xml(writer, "method-params")?;
        }
        close(writer, tag)
    }
}

/// queryType: an EJB QL finder or select query of a CMP 2.x entity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query {
    pub description: Option<Text>,
    pub query_method: QueryMethod,
    pub result_type_mapping: Option<ResultTypeMapping>,
    pub ejb_ql: String,
    pub id: Option<String>,
}

impl Query {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut query = Query {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => query.description = Some(Text::read(child)),
                "query-method" => query.query_method = QueryMethod::read(child),
                "result-type-mapping" => {
                    query.result_type_mapping = Some(ResultTypeMapping::read(child)?)
                }
                "ejb-ql" => query.ejb_ql = raw_text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(query)
    }
}

impl WriteXml for Query {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        if let Some(description) = &self.description {
            description.write_xml(writer, "description")?;
        }
        self.query_method.write_xml(writer, "query-method")?;
        write_opt(
            writer,
            "result-type-mapping",
            self.result_type_mapping.map(ResultTypeMapping::as_str),
        )?;
        write_text(writer, "ejb-ql", &self.ejb_ql)?;
        close(writer, tag)
    }
}

/// entity-beanType (ejb-jar 3.1 / CMP 2.x).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntityBean {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub ejb_name: String,
    pub mapped_name: Option<String>,
    pub home: Option<String>,
    pub remote: Option<String>,
    pub local_home: Option<String>,
    pub local: Option<String>,
    pub ejb_class: Option<String>,
    pub persistence_type: Option<PersistenceType>,
    pub prim_key_class: Option<String>,
    pub reentrant: Option<bool>,
    pub cmp_version: Option<CmpVersion>,
    pub abstract_schema_name: Option<String>,
    pub cmp_field: Vec<CmpField>,
    pub primkey_field: Option<String>,
    pub env_entry: KeyedCollection<EnvEntry>,
    pub ejb_ref: KeyedCollection<EjbRef>,
    pub ejb_local_ref: KeyedCollection<EjbLocalRef>,
    pub service_ref: KeyedCollection<ServiceRef>,
    pub resource_ref: KeyedCollection<ResourceRef>,
    pub resource_env_ref: KeyedCollection<ResourceEnvRef>,
    pub message_destination_ref: KeyedCollection<MessageDestinationRef>,
    pub persistence_context_ref: KeyedCollection<PersistenceContextRef>,
    pub persistence_unit_ref: KeyedCollection<PersistenceUnitRef>,
    pub post_construct: Vec<LifecycleCallback>,
    pub pre_destroy: Vec<LifecycleCallback>,
    pub data_source: KeyedCollection<DataSource>,
    pub security_role_ref: Vec<SecurityRoleRef>,
    pub security_identity: Option<SecurityIdentity>,
    pub query: Vec<Query>,
    pub id: Option<String>,
}

impl EntityBean {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut bean = EntityBean {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    bean.description.add(Text::read(child));
                }
                "display-name" => {
                    bean.display_name.add(Text::read(child));
                }
                "icon" => {
                    bean.icon.add(Icon::read(child));
                }
                "ejb-name" => bean.ejb_name = text_of(child),
                "mapped-name" => bean.mapped_name = Some(text_of(child)),
                "home" => bean.home = Some(text_of(child)),
                "remote" => bean.remote = Some(text_of(child)),
                "local-home" => bean.local_home = Some(text_of(child)),
                "local" => bean.local = Some(text_of(child)),
                "ejb-class" => bean.ejb_class = Some(text_of(child)),
                "persistence-type" => {
                    bean.persistence_type = Some(PersistenceType::read(child)?)
                }
                "prim-key-class" => bean.prim_key_class = Some(text_of(child)),
                "reentrant" => bean.reentrant = Some(bool_of(child)?),
                "cmp-version" => bean.cmp_version = Some(CmpVersion::read(child)?),
                "abstract-schema-name" => bean.abstract_schema_name = Some(text_of(child)),
                "cmp-field" => bean.cmp_field.push(CmpField::read(child)),
                "primkey-field" => bean.primkey_field = Some(text_of(child)),
                "env-entry" => {
                    bean.env_entry.push(EnvEntry::read(child));
                }
                "ejb-ref" => {
                    bean.ejb_ref.push(EjbRef::read(child)?);
                }
                "ejb-local-ref" => {
                    bean.ejb_local_ref.push(EjbLocalRef::read(child)?);
                }
                "service-ref" => {
                    bean.service_ref.push(ServiceRef::read(child)?);
                }
                "resource-ref" => {
                    bean.resource_ref.push(ResourceRef::read(child)?);
                }
                "resource-env-ref" => {
                    bean.resource_env_ref.push(ResourceEnvRef::read(child));
                }
                "message-destination-ref" => {
                    bean.message_destination_ref
                        .push(MessageDestinationRef::read(child)?);
                }
                "persistence-context-ref" => {
                    bean.persistence_context_ref
                        .push(PersistenceContextRef::read(child)?);
                }
                "persistence-unit-ref" => {
                    bean.persistence_unit_ref
                        .push(PersistenceUnitRef::read(child));
                }
                "post-construct" => bean.post_construct.push(LifecycleCallback::read(child)),
                "pre-destroy" => bean.pre_destroy.push(LifecycleCallback::read(child)),
                "data-source" => {
                    bean.data_source.push(DataSource::read(child)?);
                }
                "security-role-ref" => {
                    bean.security_role_ref.push(SecurityRoleRef::read(child))
                }
                "security-identity" => {
                    bean.security_identity = Some(SecurityIdentity::read(child))
                }
                "query" => bean.query.push(Query::read(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(bean)
    }
}

impl WriteXml for EntityBean {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_text(writer, "ejb-name", &self.ejb_name)?;
        write_opt(writer, "mapped-name", self.mapped_name.as_deref())?;
        write_opt(writer, "home", self.home.as_deref())?;
        write_opt(writer, "remote", self.remote.as_deref())?;
        write_opt(writer, "local-home", self.local_home.as_deref())?;
        write_opt(writer, "local", self.local.as_deref())?;
        write_opt(writer, "ejb-class", self.ejb_class.as_deref())?;
        write_opt(
            writer,
            "persistence-type",
            self.persistence_type.map(PersistenceType::as_str),
        )?;
        write_opt(writer, "prim-key-class", self.prim_key_class.as_deref())?;
        write_opt_value(writer, "reentrant", self.reentrant)?;
        write_opt(writer, "cmp-version", self.cmp_version.map(CmpVersion::as_str))?;
        write_opt(
            writer,
            "abstract-schema-name",
            self.abstract_schema_name.as_deref(),
        )?;
        write_all(writer, "cmp-field", &self.cmp_field)?;
        write_opt(writer, "primkey-field", self.primkey_field.as_deref())?;
        write_keyed(writer, "env-entry", &self.env_entry)?;
        write_keyed(writer, "ejb-ref", &self.ejb_ref)?;
        write_keyed(writer, "ejb-local-ref", &self.ejb_local_ref)?;
        write_keyed(writer, "service-ref", &self.service_ref)?;
        write_keyed(writer, "resource-ref", &self.resource_ref)?;
        write_keyed(writer, "resource-env-ref", &self.resource_env_ref)?;
        write_keyed(
            writer,
            "message-destination-ref",
            &self.message_destination_ref,
        )?;
        write_keyed(
            writer,
            "persistence-context-ref",
            &self.persistence_context_ref,
        )?;
        write_keyed(writer, "persistence-unit-ref", &self.persistence_unit_ref)?;
        write_all(writer, "post-construct", &self.post_construct)?;
        write_all(writer, "pre-destroy", &self.pre_destroy)?;
        write_keyed(writer, "data-source", &self.data_source)?;
        write_all(writer, "security-role-ref", &self.security_role_ref)?;
        if let Some(identity) = &self.security_identity {
            identity.write_xml(writer, "security-identity")?;
        }
        write_all(writer, "query", &self.query)?;
        close(writer, tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_config_folds_to_properties() {
        let mut config = ActivationConfig::default();
        config.add_property("a", "1");
        config.add_property("b", "2");

        let properties = config.to_properties();
        assert_eq!(properties.len(), 2);
        assert_eq!(properties.get("a").map(String::as_str), Some("1"));
        assert_eq!(properties.get("b").map(String::as_str), Some("2"));
    }

    #[test]
    fn repeated_property_names_keep_the_last_value() {
        let mut config = ActivationConfig::default();
        config.add_property("destinationType", "javax.jms.Queue");
        config.add_property("destinationType", "javax.jms.Topic");

        let properties = config.to_properties();
        assert_eq!(properties.len(), 1);
        assert_eq!(
            properties.get("destinationType").map(String::as_str),
            Some("javax.jms.Topic")
        );
    }
}
