//! web.xml and web-fragment.xml roots, with the fragment-ordering types.

use quick_xml::events::{BytesEnd, Event};
use roxmltree::Node;

use crate::common::{Empty, Listener, MessageDestination, ParamValue, SecurityRole};
use crate::env::{
    DataSource, EjbLocalRef, EjbRef, EnvEntry, JmsConnectionFactory, JmsDestination,
    MessageDestinationRef, PersistenceContextRef, PersistenceUnitRef, ResourceEnvRef,
    ResourceRef,
};
use crate::error::DescriptorError;
use crate::keyed::KeyedCollection;
use crate::lang::{Icon, Icons, Text, TextMap};
use crate::service_ref::ServiceRef;
use crate::web_common::{
    ErrorPage, Filter, FilterMapping, JspConfig, LocaleEncodingMappingList, LoginConfig,
    MimeMapping, SecurityConstraint, Servlet, ServletMapping, SessionConfig, Taglib,
    WelcomeFileList,
};
use crate::xml::{
    attr_bool, close, collapsed, element_children, element_start, id_of, open, skip_unexpected,
    text_of, write_all, write_icons, write_keyed, write_opt, write_strings, write_text,
    write_text_map, WriteXml, XmlWriter,
};
use crate::{common::LifecycleCallback, Descriptor, JAVAEE_NAMESPACE};

/// One step of an absolute-orderingType: a named fragment or the `others`
/// placeholder, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderingEntry {
    Name(String),
    Others,
}

/// absolute-orderingType (web.xml).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AbsoluteOrdering {
    pub entries: Vec<OrderingEntry>,
    pub id: Option<String>,
}

impl AbsoluteOrdering {
    pub(crate) fn read(node: Node) -> Self {
        let mut ordering = AbsoluteOrdering {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "name" => ordering.entries.push(OrderingEntry::Name(text_of(child))),
                "others" => ordering.entries.push(OrderingEntry::Others),
                _ => skip_unexpected(node, child),
            }
        }
        ordering
    }
}

impl WriteXml for AbsoluteOrdering {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        for entry in &self.entries {
            match entry {
                OrderingEntry::Name(name) => write_text(writer, "name", name)?,
                OrderingEntry::Others => {
                    open(writer, "others", None)?;
                    close(writer, "others")?;
                }
            }
        }
        close(writer, tag)
    }
}

/// ordering-orderingType: one side (before/after) of a relative ordering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderingOrdering {
    pub name: Vec<String>,
    pub others: bool,
}

impl OrderingOrdering {
    pub(crate) fn read(node: Node) -> Self {
        let mut ordering = OrderingOrdering::default();
        for child in element_children(node) {
            match child.tag_name().name() {
                "name" => ordering.name.push(text_of(child)),
                "others" => ordering.others = true,
                _ => skip_unexpected(node, child),
            }
        }
        ordering
    }
}

impl WriteXml for OrderingOrdering {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, None)?;
        write_strings(writer, "name", &self.name)?;
        if self.others {
            open(writer, "others", None)?;
            close(writer, "others")?;
        }
        close(writer, tag)
    }
}

/// orderingType (web-fragment.xml relative ordering).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ordering {
    pub after: Option<OrderingOrdering>,
    pub before: Option<OrderingOrdering>,
    pub id: Option<String>,
}

impl Ordering {
    pub(crate) fn read(node: Node) -> Self {
        let mut ordering = Ordering {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "after" => ordering.after = Some(OrderingOrdering::read(child)),
                "before" => ordering.before = Some(OrderingOrdering::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        ordering
    }
}

impl WriteXml for Ordering {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        if let Some(after) = &self.after {
            after.write_xml(writer, "after")?;
        }
        if let Some(before) = &self.before {
            before.write_xml(writer, "before")?;
        }
        close(writer, tag)
    }
}

/// web-appType: the root of web.xml.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WebApp {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub distributable: Option<Empty>,
    pub context_param: Vec<ParamValue>,
    pub filter: Vec<Filter>,
    pub filter_mapping: Vec<FilterMapping>,
    pub listener: Vec<Listener>,
    pub servlet: Vec<Servlet>,
    pub servlet_mapping: Vec<ServletMapping>,
    pub session_config: Option<SessionConfig>,
    pub mime_mapping: Vec<MimeMapping>,
    pub welcome_file_list: Option<WelcomeFileList>,
    pub error_page: Vec<ErrorPage>,
    pub taglib: Vec<Taglib>,
    pub jsp_config: Option<JspConfig>,
    pub security_constraint: Vec<SecurityConstraint>,
    pub login_config: Option<LoginConfig>,
    pub security_role: Vec<SecurityRole>,
    pub locale_encoding_mapping_list: Option<LocaleEncodingMappingList>,
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
    pub message_destination: KeyedCollection<MessageDestination>,
    pub absolute_ordering: Option<AbsoluteOrdering>,
    pub data_source: KeyedCollection<DataSource>,
    pub module_name: Option<String>,
    pub version: Option<String>,
    pub metadata_complete: Option<bool>,
    pub id: Option<String>,
}

impl WebApp {
    fn read_children(&mut self, node: Node) -> Result<(), DescriptorError> {
        for child in element_children(node) {
            if !self.read_child(child)? {
                skip_unexpected(node, child);
            }
        }
        Ok(())
    }

    /// Maps one child element shared between web-app and web-fragment,
    /// reporting whether the element was recognized.
    fn read_child(&mut self, child: Node) -> Result<bool, DescriptorError> {
        match child.tag_name().name() {
            "description" => {
                self.description.add(Text::read(child));
            }
            "display-name" => {
                self.display_name.add(Text::read(child));
            }
            "icon" => {
                self.icon.add(Icon::read(child));
            }
            "distributable" => self.distributable = Some(Empty::read(child)),
            "context-param" => self.context_param.push(ParamValue::read(child)),
            "filter" => self.filter.push(Filter::read(child)?),
            "filter-mapping" => self.filter_mapping.push(FilterMapping::read(child)?),
            "listener" => self.listener.push(Listener::read(child)),
            "servlet" => self.servlet.push(Servlet::read(child)?),
            "servlet-mapping" => self.servlet_mapping.push(ServletMapping::read(child)),
            "session-config" => self.session_config = Some(SessionConfig::read(child)?),
            "mime-mapping" => self.mime_mapping.push(MimeMapping::read(child)),
            "welcome-file-list" => self.welcome_file_list = Some(WelcomeFileList::read(child)),
            "error-page" => self.error_page.push(ErrorPage::read(child)?),
            "taglib" => self.taglib.push(Taglib::read(child)),
            "jsp-config" => self.jsp_config = Some(JspConfig::read(child)?),
            "security-constraint" => {
                self.security_constraint.push(SecurityConstraint::read(child)?)
            }
            "login-config" => self.login_config = Some(LoginConfig::read(child)),
            "security-role" => self.security_role.push(SecurityRole::read(child)),
            "locale-encoding-mapping-list" => {
                self.locale_encoding_mapping_list = Some(LocaleEncodingMappingList::read(child))
            }
            "env-entry" => {
                self.env_entry.push(EnvEntry::read(child));
            }
            "ejb-ref" => {
                self.ejb_ref.push(EjbRef::read(child)?);
            }
            "ejb-local-ref" => {
                self.ejb_local_ref.push(EjbLocalRef::read(child)?);
            }
            "service-ref" => {
                self.service_ref.push(ServiceRef::read(child)?);
            }
            "resource-ref" => {
                self.resource_ref.push(ResourceRef::read(child)?);
            }
            "resource-env-ref" => {
                self.resource_env_ref.push(ResourceEnvRef::read(child));
            }
            "message-destination-ref" => {
                self.message_destination_ref
                    .push(MessageDestinationRef::read(child)?);
            }
            "persistence-context-ref" => {
                self.persistence_context_ref
                    .push(PersistenceContextRef::read(child)?);
            }
            "persistence-unit-ref" => {
                self.persistence_unit_ref
                    .push(PersistenceUnitRef::read(child));
            }
            "post-construct" => self.post_construct.push(LifecycleCallback::read(child)),
            "pre-destroy" => self.pre_destroy.push(LifecycleCallback::read(child)),
            "message-destination" => {
                self.message_destination
                    .push(MessageDestination::read(child));
            }
            "absolute-ordering" => {
                self.absolute_ordering = Some(AbsoluteOrdering::read(child))
            }
            "data-source" => {
                self.data_source.push(DataSource::read(child)?);
            }
            "module-name" => self.module_name = Some(text_of(child)),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn write_children(&self, writer: &mut XmlWriter) -> Result<(), DescriptorError> {
        self.write_shared_children(writer)?;
        if let Some(ordering) = &self.absolute_ordering {
            ordering.write_xml(writer, "absolute-ordering")?;
        }
        write_keyed(writer, "data-source", &self.data_source)?;
        write_opt(writer, "module-name", self.module_name.as_deref())?;
        Ok(())
    }

    /// Writes the children shared between web-app and web-fragment, up to the
    /// point where the two schemas diverge.
    fn write_shared_children(&self, writer: &mut XmlWriter) -> Result<(), DescriptorError> {
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        if let Some(distributable) = &self.distributable {
            distributable.write_xml(writer, "distributable")?;
        }
        write_all(writer, "context-param", &self.context_param)?;
        write_all(writer, "filter", &self.filter)?;
        write_all(writer, "filter-mapping", &self.filter_mapping)?;
        write_all(writer, "listener", &self.listener)?;
        write_all(writer, "servlet", &self.servlet)?;
        write_all(writer, "servlet-mapping", &self.servlet_mapping)?;
        if let Some(config) = &self.session_config {
            config.write_xml(writer, "session-config")?;
        }
        write_all(writer, "mime-mapping", &self.mime_mapping)?;
        if let Some(list) = &self.welcome_file_list {
            list.write_xml(writer, "welcome-file-list")?;
        }
        write_all(writer, "error-page", &self.error_page)?;
        write_all(writer, "taglib", &self.taglib)?;
        if let Some(config) = &self.jsp_config {
            config.write_xml(writer, "jsp-config")?;
        }
        write_all(writer, "security-constraint", &self.security_constraint)?;
        if let Some(config) = &self.login_config {
            config.write_xml(writer, "login-config")?;
        }
        write_all(writer, "security-role", &self.security_role)?;
        if let Some(list) = &self.locale_encoding_mapping_list {
            list.write_xml(writer, "locale-encoding-mapping-list")?;
        }
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
        write_keyed(writer, "message-destination", &self.message_destination)?;
        Ok(())
    }
}

impl Descriptor for WebApp {
    const TAG_NAME: &'static str = "web-app";
    const NAMESPACE: &'static str = JAVAEE_NAMESPACE;

    fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut web_app = WebApp {
            version: node.attribute("version").map(collapsed),
            metadata_complete: attr_bool(node, "metadata-complete"),
            id: id_of(node),
            ..Self::default()
        };
        web_app.read_children(node)?;
        Ok(web_app)
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
        self.write_children(writer)?;
        writer.write_event(Event::End(BytesEnd::new(Self::TAG_NAME)))?;
        Ok(())
    }
}

/// web-fragmentType: the root of META-INF/web-fragment.xml. Shares the
/// web-app child set, with a fragment name, relative ordering and the
/// Java EE 7 JMS resource definitions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WebFragment {
    pub name: Option<String>,
    pub web_app: WebApp,
    pub ordering: Option<Ordering>,
    pub jms_connection_factory: KeyedCollection<JmsConnectionFactory>,
    pub jms_destination: KeyedCollection<JmsDestination>,
    pub version: Option<String>,
    pub id: Option<String>,
}

impl Descriptor for WebFragment {
    const TAG_NAME: &'static str = "web-fragment";
    const NAMESPACE: &'static str = JAVAEE_NAMESPACE;

    fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut fragment = WebFragment {
            version: node.attribute("version").map(collapsed),
            id: id_of(node),
            ..Self::default()
        };
        fragment.web_app.metadata_complete = attr_bool(node, "metadata-complete");
        for child in element_children(node) {
            match child.tag_name().name() {
                "name" => fragment.name = Some(text_of(child)),
                "ordering" => fragment.ordering = Some(Ordering::read(child)),
                "jms-connection-factory" => {
                    fragment
                        .jms_connection_factory
                        .push(JmsConnectionFactory::read(child)?);
                }
                "jms-destination" => {
                    fragment.jms_destination.push(JmsDestination::read(child));
                }
                // Everything else is the shared web-app content.
                _ => {
                    if !fragment.web_app.read_child(child)? {
                        skip_unexpected(node, child);
                    }
                }
            }
        }
        Ok(fragment)
    }

    fn write(&self, writer: &mut XmlWriter) -> Result<(), DescriptorError> {
        let mut start = element_start(Self::TAG_NAME, self.id.as_deref());
        start.push_attribute(("xmlns", Self::NAMESPACE));
        if let Some(metadata_complete) = self.web_app.metadata_complete {
            start.push_attribute(("metadata-complete", metadata_complete.to_string().as_str()));
        }
        if let Some(version) = &self.version {
            start.push_attribute(("version", version.as_str()));
        }
        writer.write_event(Event::Start(start))?;
        self.web_app.write_shared_children(writer)?;
        if let Some(ordering) = &self.ordering {
            ordering.write_xml(writer, "ordering")?;
        }
        write_keyed(writer, "data-source", &self.web_app.data_source)?;
        write_keyed(
            writer,
            "jms-connection-factory",
            &self.jms_connection_factory,
        )?;
        write_keyed(writer, "jms-destination", &self.jms_destination)?;
        write_opt(writer, "name", self.name.as_deref())?;
        writer.write_event(Event::End(BytesEnd::new(Self::TAG_NAME)))?;
        Ok(())
    }
}
