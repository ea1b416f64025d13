//! ejb-jar.xml: the enterprise-bean deployment descriptor, minus the bean
//! types themselves (see [`crate::beans`]).

use quick_xml::events::{BytesEnd, Event};
use roxmltree::Node;

use crate::beans::{EntityBean, MessageDrivenBean, SessionBean};
use crate::common::{Empty, RunAs, SecurityRole};
use crate::env::{
    DataSource, EjbLocalRef, EjbRef, EnvEntry, MessageDestinationRef, PersistenceContextRef,
    PersistenceUnitRef, ResourceEnvRef, ResourceRef,
};
use crate::error::DescriptorError;
use crate::keyed::{Keyed, KeyedCollection};
use crate::lang::{Icon, Icons, Text, TextMap};
use crate::service_ref::ServiceRef;
use crate::xml::{
    attr_bool, bool_of, close, collapsed, element_children, element_start, id_of, number_of,
    open, skip_unexpected, text_of, write_all, write_icons, write_keyed, write_opt,
    write_opt_value, write_strings, write_text, write_text_map, WriteXml, XmlWriter,
};
use crate::{Descriptor, JAVAEE_NAMESPACE};

/// ejb-jarType: the root of ejb-jar.xml.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EjbJar {
    pub module_name: Option<String>,
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub enterprise_beans: KeyedCollection<EnterpriseBean>,
    pub interceptors: Option<Interceptors>,
    pub relationships: Option<Relationships>,
    pub assembly_descriptor: Option<AssemblyDescriptor>,
    pub ejb_client_jar: Option<String>,
    pub version: Option<String>,
    pub metadata_complete: Option<bool>,
    pub id: Option<String>,
}

impl EjbJar {
    pub fn add_enterprise_bean(&mut self, bean: EnterpriseBean) {
        self.enterprise_beans.push(bean);
    }
}

impl Descriptor for EjbJar {
    const TAG_NAME: &'static str = "ejb-jar";
    const NAMESPACE: &'static str = JAVAEE_NAMESPACE;

    fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut ejb_jar = EjbJar {
            version: node.attribute("version").map(collapsed),
            metadata_complete: attr_bool(node, "metadata-complete"),
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "module-name" => ejb_jar.module_name = Some(text_of(child)),
                "description" => {
                    ejb_jar.description.add(Text::read(child));
                }
                "display-name" => {
                    ejb_jar.display_name.add(Text::read(child));
                }
                "icon" => {
                    ejb_jar.icon.add(Icon::read(child));
                }
                "enterprise-beans" => {
                    for bean in element_children(child) {
                        match bean.tag_name().name() {
                            "entity" => {
                                ejb_jar
                                    .enterprise_beans
                                    .push(EnterpriseBean::Entity(EntityBean::read(bean)?));
                            }
                            "session" => {
                                ejb_jar
                                    .enterprise_beans
                                    .push(EnterpriseBean::Session(SessionBean::read(bean)?));
                            }
                            "message-driven" => {
                                ejb_jar.enterprise_beans.push(
                                    EnterpriseBean::MessageDriven(MessageDrivenBean::read(
                                        bean,
                                    )?),
                                );
                            }
                            _ => skip_unexpected(child, bean),
                        }
                    }
                }
                "interceptors" => ejb_jar.interceptors = Some(Interceptors::read(child)?),
                "relationships" => ejb_jar.relationships = Some(Relationships::read(child)?),
                "assembly-descriptor" => {
                    ejb_jar.assembly_descriptor = Some(AssemblyDescriptor::read(child)?)
                }
                "ejb-client-jar" => ejb_jar.ejb_client_jar = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(ejb_jar)
    }

    fn write(&self, writer: &mut XmlWriter) -> Result<(), DescriptorError> {
        let mut start = element_start(Self::TAG_NAME, self.id.as_deref());
        start.push_attribute(("xmlns", Self::NAMESPACE));
        if let Some(metadata_complete) = self.metadata_complete {
            start.push_attribute(("metadata-complete", metadata_complete.to_string().as_str()));
        }
        if let Some(version) = &self.version {
            start.push_attribute(("version", version.as_str()));
        }
        writer.write_event(Event::Start(start))?;
        write_opt(writer, "module-name", self.module_name.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        open(writer, "enterprise-beans", None)?;
        for bean in self.enterprise_beans.iter() {
            bean.write_xml(writer, bean.tag_name())?;
        }
        close(writer, "enterprise-beans")?;
        if let Some(interceptors) = &self.interceptors {
            interceptors.write_xml(writer, "interceptors")?;
        }
        if let Some(relationships) = &self.relationships {
            relationships.write_xml(writer, "relationships")?;
        }
        if let Some(assembly) = &self.assembly_descriptor {
            assembly.write_xml(writer, "assembly-descriptor")?;
        }
        write_opt(writer, "ejb-client-jar", self.ejb_client_jar.as_deref())?;
        writer.write_event(Event::End(BytesEnd::new(Self::TAG_NAME)))?;
        Ok(())
    }
}

/// The enterprise-beans choice: entity, session or message-driven, in
/// document order, keyed by ejb-name.
#[derive(Clone, Debug, PartialEq)]
pub enum EnterpriseBean {
    Entity(EntityBean),
    Session(SessionBean),
    MessageDriven(MessageDrivenBean),
}

impl EnterpriseBean {
    pub fn ejb_name(&self) -> &str {
        match self {
            EnterpriseBean::Entity(bean) => &bean.ejb_name,
            EnterpriseBean::Session(bean) => &bean.ejb_name,
            EnterpriseBean::MessageDriven(bean) => &bean.ejb_name,
        }
    }

    pub fn ejb_class(&self) -> Option<&str> {
        match self {
            EnterpriseBean::Entity(bean) => bean.ejb_class.as_deref(),
            EnterpriseBean::Session(bean) => bean.ejb_class.as_deref(),
            EnterpriseBean::MessageDriven(bean) => bean.ejb_class.as_deref(),
        }
    }

    fn tag_name(&self) -> &'static str {
        match self {
            EnterpriseBean::Entity(_) => "entity",
            EnterpriseBean::Session(_) => "session",
            EnterpriseBean::MessageDriven(_) => "message-driven",
        }
    }
}

impl Keyed for EnterpriseBean {
    type Key = String;

    fn key(&self) -> String {
        self.ejb_name().to_string()
    }
}

impl WriteXml for EnterpriseBean {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        match self {
            EnterpriseBean::Entity(bean) => bean.write_xml(writer, tag),
            EnterpriseBean::Session(bean) => bean.write_xml(writer, tag),
            EnterpriseBean::MessageDriven(bean) => bean.write_xml(writer, tag),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Interceptors {
    pub description: TextMap,
    pub interceptor: Vec<Interceptor>,
    pub id: Option<String>,
}

impl Interceptors {
    /// Looks an interceptor up by its class name.
    pub fn interceptor(&self, class_name: &str) -> Option<&Interceptor> {
        self.interceptor
            .iter()
            .find(|interceptor| interceptor.interceptor_class == class_name)
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut interceptors = Interceptors {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    interceptors.description.add(Text::read(child));
                }
                "interceptor" => interceptors.interceptor.push(Interceptor::read(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(interceptors)
    }
}

impl WriteXml for Interceptors {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_all(writer, "interceptor", &self.interceptor)?;
        close(writer, tag)
    }
}

/// interceptorType: an interceptor class with its callbacks and its own
/// JNDI environment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Interceptor {
    pub description: TextMap,
    pub interceptor_class: String,
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
    pub post_construct: Vec<crate::common::LifecycleCallback>,
    pub pre_destroy: Vec<crate::common::LifecycleCallback>,
    pub data_source: KeyedCollection<DataSource>,
    pub post_activate: Vec<crate::common::LifecycleCallback>,
    pub pre_passivate: Vec<crate::common::LifecycleCallback>,
    pub after_begin: Vec<crate::common::LifecycleCallback>,
    pub before_completion: Vec<crate::common::LifecycleCallback>,
    pub after_completion: Vec<crate::common::LifecycleCallback>,
    pub id: Option<String>,
}

impl Interceptor {
    pub fn new(interceptor_class: impl Into<String>) -> Self {
        Self {
            interceptor_class: interceptor_class.into(),
            ..Self::default()
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        use crate::common::LifecycleCallback;

        let mut interceptor = Interceptor {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    interceptor.description.add(Text::read(child));
                }
                "interceptor-class" => interceptor.interceptor_class = text_of(child),
                "around-invoke" => interceptor.around_invoke.push(AroundInvoke::read(child)),
                "around-timeout" => {
                    interceptor.around_timeout.push(AroundTimeout::read(child))
                }
                "env-entry" => {
                    interceptor.env_entry.push(EnvEntry::read(child));
                }
                "ejb-ref" => {
                    interceptor.ejb_ref.push(EjbRef::read(child)?);
                }
                "ejb-local-ref" => {
                    interceptor.ejb_local_ref.push(EjbLocalRef::read(child)?);
                }
                "service-ref" => {
                    interceptor.service_ref.push(ServiceRef::read(child)?);
                }
                "resource-ref" => {
                    interceptor.resource_ref.push(ResourceRef::read(child)?);
                }
                "resource-env-ref" => {
                    interceptor.resource_env_ref.push(ResourceEnvRef::read(child));
                }
                "message-destination-ref" => {
                    interceptor
                        .message_destination_ref
                        .push(MessageDestinationRef::read(child)?);
                }
                "persistence-context-ref" => {
                    interceptor
                        .persistence_context_ref
                        .push(PersistenceContextRef::read(child)?);
                }
                "persistence-unit-ref" => {
                    interceptor
                        .persistence_unit_ref
                        .push(PersistenceUnitRef::read(child));
                }
                "post-construct" => {
                    interceptor.post_construct.push(LifecycleCallback::read(child))
                }
                "pre-destroy" => {
                    interceptor.pre_destroy.push(LifecycleCallback::read(child))
                }
                "data-source" => {
                    interceptor.data_source.push(DataSource::read(child)?);
                }
                "post-activate" => {
                    interceptor.post_activate.push(LifecycleCallback::read(child))
                }
                "pre-passivate" => {
                    interceptor.pre_passivate.push(LifecycleCallback::read(child))
                }
                "after-begin" => {
                    interceptor.after_begin.push(LifecycleCallback::read(child))
                }
                "before-completion" => {
                    interceptor
                        .before_completion
                        .push(LifecycleCallback::read(child))
                }
                "after-completion" => {
                    interceptor
                        .after_completion
                        .push(LifecycleCallback::read(child))
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(interceptor)
    }
}

impl WriteXml for Interceptor {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(writer, "interceptor-class", &self.interceptor_class)?;
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
        write_all(writer, "post-activate", &self.post_activate)?;
        write_all(writer, "pre-passivate", &self.pre_passivate)?;
        write_all(writer, "after-begin", &self.after_begin)?;
        write_all(writer, "before-completion", &self.before_completion)?;
        write_all(writer, "after-completion", &self.after_completion)?;
        close(writer, tag)
    }
}

/// around-invokeType. The class is absent when the method lives on the bean
/// class itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AroundInvoke {
    pub class: Option<String>,
    pub method_name: String,
}

impl AroundInvoke {
    pub fn new(class: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            class: Some(class.into()),
            method_name: method_name.into(),
        }
    }

    pub(crate) fn read(node: Node) -> Self {
        let mut around = AroundInvoke::default();
        for child in element_children(node) {
            match child.tag_name().name() {
                "class" => around.class = Some(text_of(child)),
                "method-name" => around.method_name = text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        around
    }
}

impl WriteXml for AroundInvoke {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, None)?;
        write_opt(writer, "class", self.class.as_deref())?;
        write_text(writer, "method-name", &self.method_name)?;
        close(writer, tag)
    }
}

/// around-timeoutType.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AroundTimeout {
    pub class: Option<String>,
    pub method_name: String,
}

impl AroundTimeout {
    pub fn new(class: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            class: Some(class.into()),
            method_name: method_name.into(),
        }
    }

    pub(crate) fn read(node: Node) -> Self {
        let mut around = AroundTimeout::default();
        for child in element_children(node) {
            match child.tag_name().name() {
                "class" => around.class = Some(text_of(child)),
                "method-name" => around.method_name = text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        around
    }
}

impl WriteXml for AroundTimeout {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, None)?;
        write_opt(writer, "class", self.class.as_deref())?;
        write_text(writer, "method-name", &self.method_name)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssemblyDescriptor {
    pub security_role: Vec<SecurityRole>,
    pub method_permission: Vec<MethodPermission>,
    pub container_transaction: Vec<ContainerTransaction>,
    pub interceptor_binding: Vec<InterceptorBinding>,
    pub message_destination: Vec<crate::common::MessageDestination>,
    pub exclude_list: Option<ExcludeList>,
    pub application_exception: KeyedCollection<ApplicationException>,
    pub id: Option<String>,
}

impl AssemblyDescriptor {
    /// Looks up the application-exception declaration for an exception class.
    pub fn application_exception(&self, class: &str) -> Option<&ApplicationException> {
        self.application_exception.get(class)
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut assembly = AssemblyDescriptor {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "security-role" => assembly.security_role.push(SecurityRole::read(child)),
                "method-permission" => {
                    assembly.method_permission.push(MethodPermission::read(child)?)
                }
                "container-transaction" => assembly
                    .container_transaction
                    .push(ContainerTransaction::read(child)?),
                "interceptor-binding" => assembly
                    .interceptor_binding
                    .push(InterceptorBinding::read(child)?),
                "message-destination" => assembly
                    .message_destination
                    .push(crate::common::MessageDestination::read(child)),
                "exclude-list" => assembly.exclude_list = Some(ExcludeList::read(child)?),
                "application-exception" => {
                    assembly
                        .application_exception
                        .push(ApplicationException::read(child)?);
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(assembly)
    }
}

impl WriteXml for AssemblyDescriptor {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_all(writer, "security-role", &self.security_role)?;
        write_all(writer, "method-permission", &self.method_permission)?;
        write_all(writer, "container-transaction", &self.container_transaction)?;
        write_all(writer, "interceptor-binding", &self.interceptor_binding)?;
        write_all(writer, "message-destination", &self.message_destination)?;
        if let Some(exclude_list) = &self.exclude_list {
            exclude_list.write_xml(writer, "exclude-list")?;
        }
        write_keyed(
            writer,
            "application-exception",
            &self.application_exception,
        )?;
        close(writer, tag)
    }
}

/// application-exceptionType: marks an exception class as an application
/// exception, with its rollback behavior.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplicationException {
    pub exception_class: String,
    pub rollback: Option<bool>,
    pub inherited: Option<bool>,
    pub id: Option<String>,
}

impl Keyed for ApplicationException {
    type Key = String;

    fn key(&self) -> String {
        self.exception_class.clone()
    }
}

impl ApplicationException {
    pub fn new(exception_class: impl Into<String>, rollback: bool) -> Self {
        Self {
            exception_class: exception_class.into(),
            rollback: Some(rollback),
            inherited: None,
            id: None,
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut exception = ApplicationException {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "exception-class" => exception.exception_class = text_of(child),
                "rollback" => exception.rollback = Some(bool_of(child)?),
                "inherited" => exception.inherited = Some(bool_of(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(exception)
    }
}

impl WriteXml for ApplicationException {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "exception-class", &self.exception_class)?;
        write_opt_value(writer, "rollback", self.rollback)?;
        write_opt_value(writer, "inherited", self.inherited)?;
        close(writer, tag)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransAttribute {
    NotSupported,
    Supports,
    Required,
    RequiresNew,
    Mandatory,
    Never,
}

impl TransAttribute {
    pub fn as_str(self) -> &'static str {
        match self {
            TransAttribute::NotSupported => "NotSupported",
            TransAttribute::Supports => "Supports",
            TransAttribute::Required => "Required",
            TransAttribute::RequiresNew => "RequiresNew",
            TransAttribute::Mandatory => "Mandatory",
            TransAttribute::Never => "Never",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "NotSupported" => Ok(TransAttribute::NotSupported),
            "Supports" => Ok(TransAttribute::Supports),
            "Required" => Ok(TransAttribute::Required),
            "RequiresNew" => Ok(TransAttribute::RequiresNew),
            "Mandatory" => Ok(TransAttribute::Mandatory),
            "Never" => Ok(TransAttribute::Never),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContainerTransaction {
    pub description: TextMap,
    pub method: Vec<Method>,
    pub trans_attribute: Option<TransAttribute>,
    pub id: Option<String>,
}

impl ContainerTransaction {
    pub fn new(trans_attribute: TransAttribute, method: Method) -> Self {
        Self {
            method: vec![method],
            trans_attribute: Some(trans_attribute),
            ..Self::default()
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut transaction = ContainerTransaction {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    transaction.description.add(Text::read(child));
                }
                "method" => transaction.method.push(Method::read(child)?),
                "trans-attribute" => {
                    transaction.trans_attribute = Some(TransAttribute::read(child)?)
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(transaction)
    }
}

impl WriteXml for ContainerTransaction {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_all(writer, "method", &self.method)?;
        write_opt(
            writer,
            "trans-attribute",
            self.trans_attribute.map(TransAttribute::as_str),
        )?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MethodPermission {
    pub description: TextMap,
    pub role_name: Vec<String>,
    pub unchecked: Option<Empty>,
    pub method: Vec<Method>,
    pub id: Option<String>,
}

impl MethodPermission {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut permission = MethodPermission {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    permission.description.add(Text::read(child));
                }
                "role-name" => permission.role_name.push(text_of(child)),
                "unchecked" => permission.unchecked = Some(Empty::read(child)),
                "method" => permission.method.push(Method::read(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(permission)
    }
}

impl WriteXml for MethodPermission {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_strings(writer, "role-name", &self.role_name)?;
        if let Some(unchecked) = &self.unchecked {
            unchecked.write_xml(writer, "unchecked")?;
        }
        write_all(writer, "method", &self.method)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExcludeList {
    pub description: TextMap,
    pub method: Vec<Method>,
    pub id: Option<String>,
}

impl ExcludeList {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut exclude = ExcludeList {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    exclude.description.add(Text::read(child));
                }
                "method" => exclude.method.push(Method::read(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(exclude)
    }
}

impl WriteXml for ExcludeList {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_all(writer, "method", &self.method)?;
        close(writer, tag)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MethodIntf {
    Home,
    Remote,
    LocalHome,
    Local,
    ServiceEndpoint,
    Timer,
    MessageEndpoint,
}

impl MethodIntf {
    pub fn as_str(self) -> &'static str {
        match self {
            MethodIntf::Home => "Home",
            MethodIntf::Remote => "Remote",
            MethodIntf::LocalHome => "LocalHome",
            MethodIntf::Local => "Local",
            MethodIntf::ServiceEndpoint => "ServiceEndpoint",
            MethodIntf::Timer => "Timer",
            MethodIntf::MessageEndpoint => "MessageEndpoint",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "Home" => Ok(MethodIntf::Home),
            "Remote" => Ok(MethodIntf::Remote),
            "LocalHome" => Ok(MethodIntf::LocalHome),
            "Local" => Ok(MethodIntf::Local),
            "ServiceEndpoint" => Ok(MethodIntf::ServiceEndpoint),
            "Timer" => Ok(MethodIntf::Timer),
            "MessageEndpoint" => Ok(MethodIntf::MessageEndpoint),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

/// methodType: designates one or more methods of a bean, `*` included.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Method {
    pub description: TextMap,
    pub ejb_name: String,
    pub method_intf: Option<MethodIntf>,
    pub method_name: String,
    pub method_params: Option<MethodParams>,
    pub id: Option<String>,
}

impl Method {
    pub fn new(ejb_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            ejb_name: ejb_name.into(),
            method_name: method_name.into(),
            ..Self::default()
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut method = Method {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    method.description.add(Text::read(child));
                }
                "ejb-name" => method.ejb_name = text_of(child),
                "method-intf" => method.method_intf = Some(MethodIntf::read(child)?),
                "method-name" => method.method_name = text_of(child),
                "method-params" => method.method_params = Some(MethodParams::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(method)
    }
}

impl WriteXml for Method {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(writer, "ejb-name", &self.ejb_name)?;
        write_opt(writer, "method-intf", self.method_intf.map(MethodIntf::as_str))?;
        write_text(writer, "method-name", &self.method_name)?;
        if let Some(params) = &self.method_params {
            params.write_xml(writer, "method-params")?;
        }
        close(writer, tag)
    }
}

/// method-paramsType: the fully-qualified parameter types of a method, used
/// to disambiguate overloads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MethodParams {
    pub method_param: Vec<String>,
    pub id: Option<String>,
}

impl MethodParams {
    pub fn new(params: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            method_param: params.into_iter().map(Into::into).collect(),
            id: None,
        }
    }

    pub(crate) fn read(node: Node) -> Self {
        let mut params = MethodParams {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "method-param" => params.method_param.push(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        params
    }
}

impl WriteXml for MethodParams {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_strings(writer, "method-param", &self.method_param)?;
        close(writer, tag)
    }
}

/// named-methodType: a method reference by name and optional parameter list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamedMethod {
    pub method_name: String,
    pub method_params: Option<MethodParams>,
    pub id: Option<String>,
}

impl NamedMethod {
    pub fn new(method_name: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
            ..Self::default()
        }
    }

    pub(crate) fn read(node: Node) -> Self {
        let mut method = NamedMethod {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "method-name" => method.method_name = text_of(child),
                "method-params" => method.method_params = Some(MethodParams::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        method
    }
}

impl WriteXml for NamedMethod {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "method-name", &self.method_name)?;
        if let Some(params) = &self.method_params {
            params.write_xml(writer, "method-params")?;
        }
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InterceptorOrder {
    pub interceptor_class: Vec<String>,
    pub id: Option<String>,
}

impl InterceptorOrder {
    pub(crate) fn read(node: Node) -> Self {
        let mut order = InterceptorOrder {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "interceptor-class" => order.interceptor_class.push(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        order
    }
}

impl WriteXml for InterceptorOrder {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_strings(writer, "interceptor-class", &self.interceptor_class)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InterceptorBinding {
    pub description: TextMap,
    pub ejb_name: String,
    pub interceptor_class: Vec<String>,
    pub interceptor_order: Option<InterceptorOrder>,
    pub exclude_default_interceptors: Option<bool>,
    pub exclude_class_interceptors: Option<bool>,
    pub method: Option<NamedMethod>,
    pub id: Option<String>,
}

impl InterceptorBinding {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut binding = InterceptorBinding {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    binding.description.add(Text::read(child));
                }
                "ejb-name" => binding.ejb_name = text_of(child),
                "interceptor-class" => binding.interceptor_class.push(text_of(child)),
                "interceptor-order" => {
                    binding.interceptor_order = Some(InterceptorOrder::read(child))
                }
                "exclude-default-interceptors" => {
                    binding.exclude_default_interceptors = Some(bool_of(child)?)
                }
                "exclude-class-interceptors" => {
                    binding.exclude_class_interceptors = Some(bool_of(child)?)
                }
                "method" => binding.method = Some(NamedMethod::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(binding)
    }
}

impl WriteXml for InterceptorBinding {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(writer, "ejb-name", &self.ejb_name)?;
        write_strings(writer, "interceptor-class", &self.interceptor_class)?;
        if let Some(order) = &self.interceptor_order {
            order.write_xml(writer, "interceptor-order")?;
        }
        write_opt_value(
            writer,
            "exclude-default-interceptors",
            self.exclude_default_interceptors,
        )?;
        write_opt_value(
            writer,
            "exclude-class-interceptors",
            self.exclude_class_interceptors,
        )?;
        if let Some(method) = &self.method {
            method.write_xml(writer, "method")?;
        }
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SecurityIdentity {
    pub description: TextMap,
    pub use_caller_identity: Option<Empty>,
    pub run_as: Option<RunAs>,
    pub id: Option<String>,
}

impl SecurityIdentity {
    pub(crate) fn read(node: Node) -> Self {
        let mut identity = SecurityIdentity {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    identity.description.add(Text::read(child));
                }
                "use-caller-identity" => identity.use_caller_identity = Some(Empty::read(child)),
                "run-as" => identity.run_as = Some(RunAs::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        identity
    }
}

impl WriteXml for SecurityIdentity {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        if let Some(use_caller) = &self.use_caller_identity {
            use_caller.write_xml(writer, "use-caller-identity")?;
        }
        if let Some(run_as) = &self.run_as {
            run_as.write_xml(writer, "run-as")?;
        }
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Relationships {
    pub description: TextMap,
    pub ejb_relation: Vec<EjbRelation>,
    pub id: Option<String>,
}

impl Relationships {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut relationships = Relationships {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    relationships.description.add(Text::read(child));
                }
                "ejb-relation" => relationships.ejb_relation.push(EjbRelation::read(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(relationships)
    }
}

impl WriteXml for Relationships {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_all(writer, "ejb-relation", &self.ejb_relation)?;
        close(writer, tag)
    }
}

/// ejb-relationType: a container-managed relationship between two entity
/// beans, always described by exactly two roles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EjbRelation {
    pub description: TextMap,
    pub ejb_relation_name: Option<String>,
    pub ejb_relationship_role: Vec<EjbRelationshipRole>,
    pub id: Option<String>,
}

impl EjbRelation {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut relation = EjbRelation {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    relation.description.add(Text::read(child));
                }
                "ejb-relation-name" => relation.ejb_relation_name = Some(text_of(child)),
                "ejb-relationship-role" => relation
                    .ejb_relationship_role
                    .push(EjbRelationshipRole::read(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(relation)
    }
}

impl WriteXml for EjbRelation {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_opt(writer, "ejb-relation-name", self.ejb_relation_name.as_deref())?;
        write_all(writer, "ejb-relationship-role", &self.ejb_relationship_role)?;
        close(writer, tag)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Multiplicity {
    One,
    Many,
}

impl Multiplicity {
    pub fn as_str(self) -> &'static str {
        match self {
            Multiplicity::One => "One",
            Multiplicity::Many => "Many",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "One" => Ok(Multiplicity::One),
            "Many" => Ok(Multiplicity::Many),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EjbRelationshipRole {
    pub description: TextMap,
    pub ejb_relationship_role_name: Option<String>,
    pub multiplicity: Option<Multiplicity>,
    pub cascade_delete: Option<Empty>,
    pub relationship_role_source: Option<RelationshipRoleSource>,
    pub cmr_field: Option<CmrField>,
    pub id: Option<String>,
}

impl EjbRelationshipRole {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut role = EjbRelationshipRole {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    role.description.add(Text::read(child));
                }
                "ejb-relationship-role-name" => {
                    role.ejb_relationship_role_name = Some(text_of(child))
                }
                "multiplicity" => role.multiplicity = Some(Multiplicity::read(child)?),
                "cascade-delete" => role.cascade_delete = Some(Empty::read(child)),
                "relationship-role-source" => {
                    role.relationship_role_source = Some(RelationshipRoleSource::read(child))
                }
                "cmr-field" => role.cmr_field = Some(CmrField::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(role)
    }
}

impl WriteXml for EjbRelationshipRole {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_opt(
            writer,
            "ejb-relationship-role-name",
            self.ejb_relationship_role_name.as_deref(),
        )?;
        write_opt(
            writer,
            "multiplicity",
            self.multiplicity.map(Multiplicity::as_str),
        )?;
        if let Some(cascade) = &self.cascade_delete {
            cascade.write_xml(writer, "cascade-delete")?;
        }
        if let Some(source) = &self.relationship_role_source {
            source.write_xml(writer, "relationship-role-source")?;
        }
        if let Some(field) = &self.cmr_field {
            field.write_xml(writer, "cmr-field")?;
        }
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RelationshipRoleSource {
    pub description: TextMap,
    pub ejb_name: String,
    pub id: Option<String>,
}

impl RelationshipRoleSource {
    pub(crate) fn read(node: Node) -> Self {
        let mut source = RelationshipRoleSource {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    source.description.add(Text::read(child));
                }
                "ejb-name" => source.ejb_name = text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        source
    }
}

impl WriteXml for RelationshipRoleSource {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(writer, "ejb-name", &self.ejb_name)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CmrField {
    pub description: TextMap,
    pub cmr_field_name: String,
    pub cmr_field_type: Option<String>,
    pub id: Option<String>,
}

impl CmrField {
    pub(crate) fn read(node: Node) -> Self {
        let mut field = CmrField {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    field.description.add(Text::read(child));
                }
                "cmr-field-name" => field.cmr_field_name = text_of(child),
                "cmr-field-type" => field.cmr_field_type = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        field
    }
}

impl WriteXml for CmrField {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(writer, "cmr-field-name", &self.cmr_field_name)?;
        write_opt(writer, "cmr-field-type", self.cmr_field_type.as_deref())?;
        close(writer, tag)
    }
}

/// time-unit-typeType, mirroring the `java.util.concurrent.TimeUnit` names.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimeUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl TimeUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Days => "Days",
            TimeUnit::Hours => "Hours",
            TimeUnit::Minutes => "Minutes",
            TimeUnit::Seconds => "Seconds",
            TimeUnit::Milliseconds => "Milliseconds",
            TimeUnit::Microseconds => "Microseconds",
            TimeUnit::Nanoseconds => "Nanoseconds",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "Days" => Ok(TimeUnit::Days),
            "Hours" => Ok(TimeUnit::Hours),
            "Minutes" => Ok(TimeUnit::Minutes),
            "Seconds" => Ok(TimeUnit::Seconds),
            "Milliseconds" => Ok(TimeUnit::Milliseconds),
            "Microseconds" => Ok(TimeUnit::Microseconds),
            "Nanoseconds" => Ok(TimeUnit::Nanoseconds),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

/// stateful-timeoutType / access-timeoutType.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timeout {
    pub timeout: i64,
    pub unit: TimeUnit,
    pub id: Option<String>,
}

impl Timeout {
    pub fn new(timeout: i64, unit: TimeUnit) -> Self {
        Self {
            timeout,
            unit,
            id: None,
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut value = 0;
        let mut unit = TimeUnit::Minutes;
        for child in element_children(node) {
            match child.tag_name().name() {
                "timeout" => value = number_of(child)?,
                "unit" => unit = TimeUnit::read(child)?,
                _ => skip_unexpected(node, child),
            }
        }
        Ok(Timeout {
            timeout: value,
            unit,
            id: id_of(node),
        })
    }
}

impl WriteXml for Timeout {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "timeout", &self.timeout.to_string())?;
        write_text(writer, "unit", self.unit.as_str())?;
        close(writer, tag)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConcurrentLockType {
    Read,
    Write,
}

impl ConcurrentLockType {
    pub fn as_str(self) -> &'static str {
        match self {
            ConcurrentLockType::Read => "Read",
            ConcurrentLockType::Write => "Write",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "Read" => Ok(ConcurrentLockType::Read),
            "Write" => Ok(ConcurrentLockType::Write),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConcurrentMethod {
    pub method: Option<NamedMethod>,
    pub lock: Option<ConcurrentLockType>,
    pub access_timeout: Option<Timeout>,
    pub id: Option<String>,
}

impl ConcurrentMethod {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut concurrent = ConcurrentMethod {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "method" => concurrent.method = Some(NamedMethod::read(child)),
                "lock" => concurrent.lock = Some(ConcurrentLockType::read(child)?),
                "access-timeout" => concurrent.access_timeout = Some(Timeout::read(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(concurrent)
    }
}

impl WriteXml for ConcurrentMethod {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        if let Some(method) = &self.method {
            method.write_xml(writer, "method")?;
        }
        write_opt(writer, "lock", self.lock.map(ConcurrentLockType::as_str))?;
        if let Some(timeout) = &self.access_timeout {
            timeout.write_xml(writer, "access-timeout")?;
        }
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InitMethod {
    pub create_method: NamedMethod,
    pub bean_method: NamedMethod,
    pub id: Option<String>,
}

impl InitMethod {
    pub(crate) fn read(node: Node) -> Self {
        let mut init = InitMethod {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "create-method" => init.create_method = NamedMethod::read(child),
                "bean-method" => init.bean_method = NamedMethod::read(child),
                _ => skip_unexpected(node, child),
            }
        }
        init
    }
}

impl WriteXml for InitMethod {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        self.create_method.write_xml(writer, "create-method")?;
        self.bean_method.write_xml(writer, "bean-method")?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RemoveMethod {
    pub bean_method: NamedMethod,
    pub retain_if_exception: Option<bool>,
    pub id: Option<String>,
}

impl RemoveMethod {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut remove = RemoveMethod {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "bean-method" => remove.bean_method = NamedMethod::read(child),
                "retain-if-exception" => remove.retain_if_exception = Some(bool_of(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(remove)
    }
}

impl WriteXml for RemoveMethod {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        self.bean_method.write_xml(writer, "bean-method")?;
        write_opt_value(writer, "retain-if-exception", self.retain_if_exception)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AsyncMethod {
    pub method_name: String,
    pub method_params: Option<MethodParams>,
    pub id: Option<String>,
}

impl AsyncMethod {
    pub(crate) fn read(node: Node) -> Self {
        let mut method = AsyncMethod {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "method-name" => method.method_name = text_of(child),
                "method-params" => method.method_params = Some(MethodParams::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        method
    }
}

impl WriteXml for AsyncMethod {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "method-name", &self.method_name)?;
        if let Some(params) = &self.method_params {
            params.write_xml(writer, "method-params")?;
        }
        close(writer, tag)
    }
}

/// timerType: an automatically created timer with its schedule.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timer {
    pub description: TextMap,
    pub schedule: TimerSchedule,
    pub start: Option<String>,
    pub end: Option<String>,
    pub timeout_method: NamedMethod,
    pub persistent: Option<bool>,
    pub timezone: Option<String>,
    pub info: Option<String>,
    pub id: Option<String>,
}

impl Timer {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut timer = Timer {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    timer.description.add(Text::read(child));
                }
                "schedule" => timer.schedule = TimerSchedule::read(child),
                "start" => timer.start = Some(text_of(child)),
                "end" => timer.end = Some(text_of(child)),
                "timeout-method" => timer.timeout_method = NamedMethod::read(child),
                "persistent" => timer.persistent = Some(bool_of(child)?),
                "timezone" => timer.timezone = Some(text_of(child)),
                "info" => timer.info = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(timer)
    }
}

impl WriteXml for Timer {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        self.schedule.write_xml(writer, "schedule")?;
        write_opt(writer, "start", self.start.as_deref())?;
        write_opt(writer, "end", self.end.as_deref())?;
        self.timeout_method.write_xml(writer, "timeout-method")?;
        write_opt_value(writer, "persistent", self.persistent)?;
        write_opt(writer, "timezone", self.timezone.as_deref())?;
        write_opt(writer, "info", self.info.as_deref())?;
        close(writer, tag)
    }
}

/// timer-scheduleType: the cron-like calendar expression of a timer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimerSchedule {
    pub second: Option<String>,
    pub minute: Option<String>,
    pub hour: Option<String>,
    pub day_of_month: Option<String>,
    pub month: Option<String>,
    pub day_of_week: Option<String>,
    pub year: Option<String>,
    pub id: Option<String>,
}

impl TimerSchedule {
    pub(crate) fn read(node: Node) -> Self {
        let mut schedule = TimerSchedule {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "second" => schedule.second = Some(text_of(child)),
                "minute" => schedule.minute = Some(text_of(child)),
                "hour" => schedule.hour = Some(text_of(child)),
                "day-of-month" => schedule.day_of_month = Some(text_of(child)),
                "month" => schedule.month = Some(text_of(child)),
                "day-of-week" => schedule.day_of_week = Some(text_of(child)),
                "year" => schedule.year = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        schedule
    }
}

impl WriteXml for TimerSchedule {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_opt(writer, "second", self.second.as_deref())?;
        write_opt(writer, "minute", self.minute.as_deref())?;
        write_opt(writer, "hour", self.hour.as_deref())?;
        write_opt(writer, "day-of-month", self.day_of_month.as_deref())?;
        write_opt(writer, "month", self.month.as_deref())?;
        write_opt(writer, "day-of-week", self.day_of_week.as_deref())?;
        write_opt(writer, "year", self.year.as_deref())?;
        close(writer, tag)
    }
}
