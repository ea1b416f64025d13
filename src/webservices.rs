//! webservices.xml: the server-side JAX-WS/JAX-RPC endpoint descriptor.

use quick_xml::events::{BytesEnd, Event};
use roxmltree::Node;

use crate::error::DescriptorError;
use crate::lang::{Icon, Icons, Text, TextMap};
use crate::qname::{qname_of, write_qname, QName};
use crate::service_ref::{Addressing, Handler, HandlerChains, RespectBinding};
use crate::xml::{
    bool_of, close, collapsed, element_children, element_start, id_of, number_of, open,
    skip_unexpected, text_of, write_all, write_icons, write_opt, write_opt_value, write_text,
    write_text_map, WriteXml, XmlWriter,
};
use crate::{Descriptor, JAVAEE_NAMESPACE};

/// webservicesType: the root of webservices.xml.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Webservices {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub webservice_description: Vec<WebserviceDescription>,
    pub version: Option<String>,
    pub id: Option<String>,
}

impl Webservices {
    /// The webservices schema version, `"1.2"` unless the descriptor says
    /// otherwise.
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or("1.2")
    }
}

impl Descriptor for Webservices {
    const TAG_NAME: &'static str = "webservices";
    const NAMESPACE: &'static str = JAVAEE_NAMESPACE;

    fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut webservices = Webservices {
            version: node.attribute("version").map(collapsed),
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    webservices.description.add(Text::read(child));
                }
                "display-name" => {
                    webservices.display_name.add(Text::read(child));
                }
                "icon" => {
                    webservices.icon.add(Icon::read(child));
                }
                "webservice-description" => webservices
                    .webservice_description
                    .push(WebserviceDescription::read(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(webservices)
    }

    fn write(&self, writer: &mut XmlWriter) -> Result<(), DescriptorError> {
        let mut start = element_start(Self::TAG_NAME, self.id.as_deref());
        start.push_attribute(("xmlns", Self::NAMESPACE));
        start.push_attribute(("version", self.version()));
        writer.write_event(Event::Start(start))?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_all(
            writer,
            "webservice-description",
            &self.webservice_description,
        )?;
        writer.write_event(Event::End(BytesEnd::new(Self::TAG_NAME)))?;
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WebserviceDescription {
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub icon: Option<Icon>,
    pub webservice_description_name: String,
    pub wsdl_file: Option<String>,
    pub jaxrpc_mapping_file: Option<String>,
    pub port_component: Vec<PortComponent>,
    pub id: Option<String>,
}

impl WebserviceDescription {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut description = WebserviceDescription {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => description.description = Some(text_of(child)),
                "display-name" => description.display_name = Some(text_of(child)),
                "icon" => description.icon = Some(Icon::read(child)),
                "webservice-description-name" => {
                    description.webservice_description_name = text_of(child)
                }
                "wsdl-file" => description.wsdl_file = Some(text_of(child)),
                "jaxrpc-mapping-file" => {
                    description.jaxrpc_mapping_file = Some(text_of(child))
                }
                "port-component" => {
                    description.port_component.push(PortComponent::read(child)?)
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(description)
    }
}

impl WriteXml for WebserviceDescription {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_opt(writer, "description", self.description.as_deref())?;
        write_opt(writer, "display-name", self.display_name.as_deref())?;
        if let Some(icon) = &self.icon {
            icon.write_xml(writer, "icon")?;
        }
        write_text(
            writer,
            "webservice-description-name",
            &self.webservice_description_name,
        )?;
        write_opt(writer, "wsdl-file", self.wsdl_file.as_deref())?;
        write_opt(
            writer,
            "jaxrpc-mapping-file",
            self.jaxrpc_mapping_file.as_deref(),
        )?;
        write_all(writer, "port-component", &self.port_component)?;
        close(writer, tag)
    }
}

/// port-componentType: one endpoint of a webservice description.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PortComponent {
    pub description: Option<Text>,
    pub display_name: Option<Text>,
    pub icon: Option<Icon>,
    pub port_component_name: String,
    pub wsdl_service: Option<QName>,
    pub wsdl_port: Option<QName>,
    pub enable_mtom: Option<bool>,
    pub mtom_threshold: Option<i32>,
    pub addressing: Option<Addressing>,
    pub respect_binding: Option<RespectBinding>,
    pub protocol_binding: Option<String>,
    pub service_endpoint_interface: Option<String>,
    pub service_impl_bean: Option<ServiceImplBean>,
    pub handler: Vec<Handler>,
    pub handler_chains: Option<HandlerChains>,
    pub id: Option<String>,
}

impl PortComponent {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut port = PortComponent {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => port.description = Some(Text::read(child)),
                "display-name" => port.display_name = Some(Text::read(child)),
                "icon" => port.icon = Some(Icon::read(child)),
                "port-component-name" => port.port_component_name = text_of(child),
                "wsdl-service" => port.wsdl_service = Some(qname_of(child)?),
                "wsdl-port" => port.wsdl_port = Some(qname_of(child)?),
                "enable-mtom" => port.enable_mtom = Some(bool_of(child)?),
                "mtom-threshold" => port.mtom_threshold = Some(number_of(child)?),
                "addressing" => port.addressing = Some(Addressing::read(child)?),
                "respect-binding" => port.respect_binding = Some(RespectBinding::read(child)?),
                "protocol-binding" => port.protocol_binding = Some(text_of(child)),
                "service-endpoint-interface" => {
                    port.service_endpoint_interface = Some(text_of(child))
                }
                "service-impl-bean" => {
                    port.service_impl_bean = Some(ServiceImplBean::read(child))
                }
                "handler" => port.handler.push(Handler::read(child)?),
                "handler-chains" => port.handler_chains = Some(HandlerChains::read(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(port)
    }
}

impl WriteXml for PortComponent {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        if let Some(description) = &self.description {
            description.write_xml(writer, "description")?;
        }
        if let Some(display_name) = &self.display_name {
            display_name.write_xml(writer, "display-name")?;
        }
        if let Some(icon) = &self.icon {
            icon.write_xml(writer, "icon")?;
        }
        write_text(writer, "port-component-name", &self.port_component_name)?;
        if let Some(service) = &self.wsdl_service {
            write_qname(writer, "wsdl-service", service)?;
        }
        if let Some(port) = &self.wsdl_port {
            write_qname(writer, "wsdl-port", port)?;
        }
        write_opt_value(writer, "enable-mtom", self.enable_mtom)?;
        write_opt_value(writer, "mtom-threshold", self.mtom_threshold)?;
        if let Some(addressing) = &self.addressing {
            addressing.write_xml(writer, "addressing")?;
        }
        if let Some(respect_binding) = &self.respect_binding {
            respect_binding.write_xml(writer, "respect-binding")?;
        }
        write_opt(writer, "protocol-binding", self.protocol_binding.as_deref())?;
        write_opt(
            writer,
            "service-endpoint-interface",
            self.service_endpoint_interface.as_deref(),
        )?;
        if let Some(bean) = &self.service_impl_bean {
            bean.write_xml(writer, "service-impl-bean")?;
        }
        write_all(writer, "handler", &self.handler)?;
        if let Some(chains) = &self.handler_chains {
            chains.write_xml(writer, "handler-chains")?;
        }
        close(writer, tag)
    }
}

/// service-impl-beanType: the EJB or servlet implementing the endpoint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceImplBean {
    pub ejb_link: Option<String>,
    pub servlet_link: Option<String>,
    pub id: Option<String>,
}

impl ServiceImplBean {
    pub(crate) fn read(node: Node) -> Self {
        let mut bean = ServiceImplBean {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "ejb-link" => bean.ejb_link = Some(text_of(child)),
                "servlet-link" => bean.servlet_link = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        bean
    }
}

impl WriteXml for ServiceImplBean {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_opt(writer, "ejb-link", self.ejb_link.as_deref())?;
        write_opt(writer, "servlet-link", self.servlet_link.as_deref())?;
        close(writer, tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_defaults_to_1_2() {
        let webservices = Webservices::default();
        assert_eq!(webservices.version(), "1.2");

        let webservices = Webservices {
            version: Some("1.3".to_string()),
            ..Webservices::default()
        };
        assert_eq!(webservices.version(), "1.3");
    }
}
