//! application-client.xml: the Java EE application client descriptor.

use quick_xml::events::{BytesEnd, Event};
use roxmltree::Node;

use crate::common::{LifecycleCallback, MessageDestination};
use crate::env::{
    DataSource, EjbLocalRef, EjbRef, EnvEntry, MessageDestinationRef, PersistenceContextRef,
    PersistenceUnitRef, ResourceEnvRef, ResourceRef,
};
use crate::error::DescriptorError;
use crate::keyed::KeyedCollection;
use crate::lang::{Icon, Icons, Text, TextMap};
use crate::service_ref::ServiceRef;
use crate::xml::{
    attr_bool, collapsed, element_children, element_start, id_of, skip_unexpected, text_of,
    write_all, write_icons, write_keyed, write_opt, write_text_map, XmlWriter,
};
use crate::{Descriptor, JAVAEE_NAMESPACE};

/// application-clientType: the root of application-client.xml.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationClient {
    pub module_name: Option<String>,
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
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
    pub callback_handler: Option<String>,
    pub message_destination: KeyedCollection<MessageDestination>,
    pub data_source: KeyedCollection<DataSource>,
    pub version: Option<String>,
    pub metadata_complete: Option<bool>,
    pub id: Option<String>,
}

impl Descriptor for ApplicationClient {
    const TAG_NAME: &'static str = "application-client";
    const NAMESPACE: &'static str = JAVAEE_NAMESPACE;

    fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut client = ApplicationClient {
            version: node.attribute("version").map(collapsed),
            metadata_complete: attr_bool(node, "metadata-complete"),
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "module-name" => client.module_name = Some(text_of(child)),
                "description" => {
                    client.description.add(Text::read(child));
                }
                "display-name" => {
                    client.display_name.add(Text::read(child));
                }
                "icon" => {
                    client.icon.add(Icon::read(child));
                }
                "env-entry" => {
                    client.env_entry.push(EnvEntry::read(child));
                }
                "ejb-ref" => {
                    client.ejb_ref.push(EjbRef::read(child)?);
                }
                "ejb-local-ref" => {
                    client.ejb_local_ref.push(EjbLocalRef::read(child)?);
                }
                "service-ref" => {
                    client.service_ref.push(ServiceRef::read(child)?);
                }
                "resource-ref" => {
                    client.resource_ref.push(ResourceRef::read(child)?);
                }
                "resource-env-ref" => {
                    client.resource_env_ref.push(ResourceEnvRef::read(child));
                }
                "message-destination-ref" => {
                    client
                        .message_destination_ref
                        .push(MessageDestinationRef::read(child)?);
                }
                "persistence-context-ref" => {
                    client
                        .persistence_context_ref
                        .push(PersistenceContextRef::read(child)?);
                }
                "persistence-unit-ref" => {
                    client
                        .persistence_unit_ref
                        .push(PersistenceUnitRef::read(child));
                }
                "post-construct" => client.post_construct.push(LifecycleCallback::read(child)),
                "pre-destroy" => client.pre_destroy.push(LifecycleCallback::read(child)),
                "callback-handler" => client.callback_handler = Some(text_of(child)),
                "message-destination" => {
                    client
                        .message_destination
                        .push(MessageDestination::read(child));
                }
                "data-source" => {
                    client.data_source.push(DataSource::read(child)?);
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(client)
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
        write_opt(writer, "callback-handler", self.callback_handler.as_deref())?;
        write_keyed(writer, "message-destination", &self.message_destination)?;
        write_keyed(writer, "data-source", &self.data_source)?;
        writer.write_event(Event::End(BytesEnd::new(Self::TAG_NAME)))?;
        Ok(())
    }
}
