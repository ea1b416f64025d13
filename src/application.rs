//! application.xml: the Java EE application (EAR) descriptor.

use quick_xml::events::{BytesEnd, Event};
use roxmltree::Node;

use crate::common::{MessageDestination, SecurityRole};
use crate::env::{
    DataSource, EjbLocalRef, EjbRef, EnvEntry, MessageDestinationRef, PersistenceContextRef,
    PersistenceUnitRef, ResourceEnvRef, ResourceRef,
};
use crate::error::DescriptorError;
use crate::keyed::KeyedCollection;
use crate::lang::{Icon, Icons, Text, TextMap};
use crate::service_ref::ServiceRef;
use crate::xml::{
    bool_of, close, collapsed, element_children, element_start, id_of, open, skip_unexpected,
    text_of, write_all, write_icons, write_keyed, write_opt, write_opt_value, write_text,
    write_text_map, WriteXml, XmlWriter,
};
use crate::{Descriptor, JAVAEE_NAMESPACE};

/// applicationType: the root of application.xml.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Application {
    pub application_name: Option<String>,
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub initialize_in_order: Option<bool>,
    pub module: Vec<Module>,
    pub security_role: Vec<SecurityRole>,
    pub library_directory: Option<String>,
    pub env_entry: KeyedCollection<EnvEntry>,
    pub ejb_ref: KeyedCollection<EjbRef>,
    pub ejb_local_ref: KeyedCollection<EjbLocalRef>,
    pub service_ref: KeyedCollection<ServiceRef>,
    pub resource_ref: KeyedCollection<ResourceRef>,
    pub resource_env_ref: KeyedCollection<ResourceEnvRef>,
    pub message_destination_ref: KeyedCollection<MessageDestinationRef>,
    pub persistence_context_ref: KeyedCollection<PersistenceContextRef>,
    pub persistence_unit_ref: KeyedCollection<PersistenceUnitRef>,
    pub message_destination: KeyedCollection<MessageDestination>,
    pub data_source: KeyedCollection<DataSource>,
    pub version: Option<String>,
    pub id: Option<String>,
}

impl Application {
    fn write_children(&self, writer: &mut XmlWriter) -> Result<(), DescriptorError> {
        write_opt(writer, "application-name", self.application_name.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_opt_value(writer, "initialize-in-order", self.initialize_in_order)?;
        write_all(writer, "module", &self.module)?;
        write_all(writer, "security-role", &self.security_role)?;
        write_opt(writer, "library-directory", self.library_directory.as_deref())?;
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
        write_keyed(writer, "message-destination", &self.message_destination)?;
        write_keyed(writer, "data-source", &self.data_source)?;
        Ok(())
    }
}

impl Descriptor for Application {
    const TAG_NAME: &'static str = "application";
    const NAMESPACE: &'static str = JAVAEE_NAMESPACE;

    fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut application = Application {
            version: node.attribute("version").map(collapsed),
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "application-name" => application.application_name = Some(text_of(child)),
                "description" => {
                    application.description.add(Text::read(child));
                }
                "display-name" => {
                    application.display_name.add(Text::read(child));
                }
                "icon" => {
                    application.icon.add(Icon::read(child));
                }
                "initialize-in-order" => {
                    application.initialize_in_order = Some(bool_of(child)?)
                }
                "module" => application.module.push(Module::read(child)),
                "security-role" => application.security_role.push(SecurityRole::read(child)),
                "library-directory" => application.library_directory = Some(text_of(child)),
                "env-entry" => {
                    application.env_entry.push(EnvEntry::read(child));
                }
                "ejb-ref" => {
                    application.ejb_ref.push(EjbRef::read(child)?);
                }
                "ejb-local-ref" => {
                    application.ejb_local_ref.push(EjbLocalRef::read(child)?);
                }
                "service-ref" => {
                    application.service_ref.push(ServiceRef::read(child)?);
                }
                "resource-ref" => {
                    application.resource_ref.push(ResourceRef::read(child)?);
                }
                "resource-env-ref" => {
                    application.resource_env_ref.push(ResourceEnvRef::read(child));
                }
                "message-destination-ref" => {
                    application
                        .message_destination_ref
                        .push(MessageDestinationRef::read(child)?);
                }
                "persistence-context-ref" => {
                    application
                        .persistence_context_ref
                        .push(PersistenceContextRef::read(child)?);
                }
                "persistence-unit-ref" => {
                    application
                        .persistence_unit_ref
                        .push(PersistenceUnitRef::read(child));
                }
                "message-destination" => {
                    application
                        .message_destination
                        .push(MessageDestination::read(child));
                }
                "data-source" => {
                    application.data_source.push(DataSource::read(child)?);
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(application)
    }

    fn write(&self, writer: &mut XmlWriter) -> Result<(), DescriptorError> {
        let mut start = element_start(Self::TAG_NAME, self.id.as_deref());
        start.push_attribute(("xmlns", Self::NAMESPACE));
        if let Some(version) = &self.version {
            start.push_attribute(("version", version.as_str()));
        }
        writer.write_event(Event::Start(start))?;
        self.write_children(writer)?;
        writer.write_event(Event::End(BytesEnd::new(Self::TAG_NAME)))?;
        Ok(())
    }
}

/// moduleType: a choice of connector, ejb, java or web module, with an
/// optional alternate deployment descriptor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Module {
    pub connector: Option<String>,
    pub ejb: Option<String>,
    pub java: Option<String>,
    pub web: Option<Web>,
    pub alt_dd: Option<String>,
    pub id: Option<String>,
}

impl Module {
    pub fn ejb_module(path: impl Into<String>) -> Self {
        Self {
            ejb: Some(path.into()),
            ..Self::default()
        }
    }

    pub(crate) fn read(node: Node) -> Self {
        let mut module = Module {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "connector" => module.connector = Some(text_of(child)),
                "ejb" => module.ejb = Some(text_of(child)),
                "java" => module.java = Some(text_of(child)),
                "web" => module.web = Some(Web::read(child)),
                "alt-dd" => module.alt_dd = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        module
    }
}

impl WriteXml for Module {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_opt(writer, "connector", self.connector.as_deref())?;
        write_opt(writer, "ejb", self.ejb.as_deref())?;
        write_opt(writer, "java", self.java.as_deref())?;
        if let Some(web) = &self.web {
            web.write_xml(writer, "web")?;
        }
        write_opt(writer, "alt-dd", self.alt_dd.as_deref())?;
        close(writer, tag)
    }
}

/// webType: the web-module branch of moduleType.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Web {
    pub web_uri: String,
    pub context_root: Option<String>,
    pub id: Option<String>,
}

impl Web {
    pub fn new(web_uri: impl Into<String>, context_root: impl Into<String>) -> Self {
        Self {
            web_uri: web_uri.into(),
            context_root: Some(context_root.into()),
            id: None,
        }
    }

    pub(crate) fn read(node: Node) -> Self {
        let mut web = Web {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "web-uri" => web.web_uri = text_of(child),
                "context-root" => web.context_root = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        web
    }
}

impl WriteXml for Web {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "web-uri", &self.web_uri)?;
        write_opt(writer, "context-root", self.context_root.as_deref())?;
        close(writer, tag)
    }
}
