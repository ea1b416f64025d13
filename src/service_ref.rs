//! Web-services-client types: service-ref and the handler-chain machinery
//! shared with the webservices.xml descriptor.

use roxmltree::Node;

use crate::error::DescriptorError;
use crate::keyed::Keyed;
use crate::lang::{Icon, Icons, Text, TextMap};
use crate::qname::{
    parse_prefixed_qname, qname_of, write_prefixed_qname, write_qname, QName,
};
use crate::xml::{
    bool_of, close, collapsed, element_children, id_of, number_of, open, skip_unexpected,
    text_of, write_all, write_icons, write_opt, write_opt_value, write_strings, write_text,
    write_text_map, WriteXml, XmlWriter,
};

/// addressingType (web services client schema 1.3).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Addressing {
    pub enabled: Option<bool>,
    pub required: Option<bool>,
    pub responses: Option<AddressingResponses>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AddressingResponses {
    Anonymous,
    NonAnonymous,
    All,
}

impl AddressingResponses {
    pub fn as_str(self) -> &'static str {
        match self {
            AddressingResponses::Anonymous => "ANONYMOUS",
            AddressingResponses::NonAnonymous => "NON_ANONYMOUS",
            AddressingResponses::All => "ALL",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "ANONYMOUS" => Ok(AddressingResponses::Anonymous),
            "NON_ANONYMOUS" => Ok(AddressingResponses::NonAnonymous),
            "ALL" => Ok(AddressingResponses::All),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

impl Addressing {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut addressing = Addressing::default();
        for child in element_children(node) {
            match child.tag_name().name() {
                "enabled" => addressing.enabled = Some(bool_of(child)?),
                "required" => addressing.required = Some(bool_of(child)?),
                "responses" => addressing.responses = Some(AddressingResponses::read(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(addressing)
    }
}

impl WriteXml for Addressing {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, None)?;
        write_opt_value(writer, "enabled", self.enabled)?;
        write_opt_value(writer, "required", self.required)?;
        write_opt(
            writer,
            "responses",
            self.responses.map(AddressingResponses::as_str),
        )?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RespectBinding {
    pub enabled: Option<bool>,
}

impl RespectBinding {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut binding = RespectBinding::default();
        for child in element_children(node) {
            match child.tag_name().name() {
                "enabled" => binding.enabled = Some(bool_of(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(binding)
    }
}

impl WriteXml for RespectBinding {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, None)?;
        write_opt_value(writer, "enabled", self.enabled)?;
        close(writer, tag)
    }
}

/// handlerType: a JAX-WS/JAX-RPC handler declaration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Handler {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub handler_name: String,
    pub handler_class: String,
    pub init_param: Vec<crate::common::ParamValue>,
    pub soap_header: Vec<QName>,
    pub soap_role: Vec<String>,
    pub port_name: Vec<String>,
    pub id: Option<String>,
}

impl Handler {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut handler = Handler {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    handler.description.add(Text::read(child));
                }
                "display-name" => {
                    handler.display_name.add(Text::read(child));
                }
                "icon" => {
                    handler.icon.add(Icon::read(child));
                }
                "handler-name" => handler.handler_name = text_of(child),
                "handler-class" => handler.handler_class = text_of(child),
                "init-param" => handler
                    .init_param
                    .push(crate::common::ParamValue::read(child)),
                "soap-header" => handler.soap_header.push(qname_of(child)?),
                "soap-role" => handler.soap_role.push(text_of(child)),
                "port-name" => handler.port_name.push(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(handler)
    }
}

impl WriteXml for Handler {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_text(writer, "handler-name", &self.handler_name)?;
        write_text(writer, "handler-class", &self.handler_class)?;
        write_all(writer, "init-param", &self.init_param)?;
        for header in &self.soap_header {
            write_qname(writer, "soap-header", header)?;
        }
        write_strings(writer, "soap-role", &self.soap_role)?;
        write_strings(writer, "port-name", &self.port_name)?;
        close(writer, tag)
    }
}

/// handler-chainType. The name patterns are prefixed QNames whose prefixes
/// resolve against declarations in scope at the pattern element, which is why
/// reading goes through the namespace-resolver adapter rather than plain
/// QName parsing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandlerChain {
    pub service_name_pattern: Option<QName>,
    pub port_name_pattern: Option<QName>,
    pub protocol_bindings: Vec<String>,
    pub handler: Vec<Handler>,
    pub id: Option<String>,
}

impl HandlerChain {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut chain = HandlerChain {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "service-name-pattern" => {
                    chain.service_name_pattern =
                        Some(parse_prefixed_qname(&text_of(child), &child))
                }
                "port-name-pattern" => {
                    chain.port_name_pattern = Some(parse_prefixed_qname(&text_of(child), &child))
                }
                "protocol-bindings" => {
                    chain.protocol_bindings = collapsed(&text_of(child))
                        .split(' ')
                        .filter(|token| !token.is_empty())
                        .map(str::to_string)
                        .collect()
                }
                "handler" => chain.handler.push(Handler::read(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(chain)
    }
}

impl WriteXml for HandlerChain {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        if let Some(pattern) = &self.service_name_pattern {
            write_prefixed_qname(writer, "service-name-pattern", pattern)?;
        }
        if let Some(pattern) = &self.port_name_pattern {
            write_prefixed_qname(writer, "port-name-pattern", pattern)?;
        }
        if !self.protocol_bindings.is_empty() {
            write_text(writer, "protocol-bindings", &self.protocol_bindings.join(" "))?;
        }
        write_all(writer, "handler", &self.handler)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandlerChains {
    pub handler_chain: Vec<HandlerChain>,
    pub id: Option<String>,
}

impl HandlerChains {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut chains = HandlerChains {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "handler-chain" => chains.handler_chain.push(HandlerChain::read(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(chains)
    }
}

impl WriteXml for HandlerChains {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_all(writer, "handler-chain", &self.handler_chain)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PortComponentRef {
    pub service_endpoint_interface: String,
    pub enable_mtom: Option<bool>,
    pub mtom_threshold: Option<i32>,
    pub addressing: Option<Addressing>,
    pub respect_binding: Option<RespectBinding>,
    pub port_component_link: Option<String>,
    pub id: Option<String>,
}

impl PortComponentRef {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut port_ref = PortComponentRef {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "service-endpoint-interface" => {
                    port_ref.service_endpoint_interface = text_of(child)
                }
                "enable-mtom" => port_ref.enable_mtom = Some(bool_of(child)?),
                "mtom-threshold" => port_ref.mtom_threshold = Some(number_of(child)?),
                "addressing" => port_ref.addressing = Some(Addressing::read(child)?),
                "respect-binding" => {
                    port_ref.respect_binding = Some(RespectBinding::read(child)?)
                }
                "port-component-link" => port_ref.port_component_link = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(port_ref)
    }
}

impl WriteXml for PortComponentRef {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(
            writer,
            "service-endpoint-interface",
            &self.service_endpoint_interface,
        )?;
        write_opt_value(writer, "enable-mtom", self.enable_mtom)?;
        write_opt_value(writer, "mtom-threshold", self.mtom_threshold)?;
        if let Some(addressing) = &self.addressing {
            addressing.write_xml(writer, "addressing")?;
        }
        if let Some(respect_binding) = &self.respect_binding {
            respect_binding.write_xml(writer, "respect-binding")?;
        }
        write_opt(
            writer,
            "port-component-link",
            self.port_component_link.as_deref(),
        )?;
        close(writer, tag)
    }
}

/// service-refType: a reference to a web service consumed by a JNDI consumer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceRef {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub service_ref_name: String,
    pub service_interface: Option<String>,
    pub service_ref_type: Option<String>,
    pub wsdl_file: Option<String>,
    pub jaxrpc_mapping_file: Option<String>,
    pub service_qname: Option<QName>,
    pub port_component_ref: Vec<PortComponentRef>,
    pub handler: Vec<Handler>,
    pub handler_chains: Option<HandlerChains>,
    pub mapped_name: Option<String>,
    pub injection_target: Vec<crate::env::InjectionTarget>,
    pub lookup_name: Option<String>,
    pub id: Option<String>,
}

impl Keyed for ServiceRef {
    type Key = String;

    fn key(&self) -> String {
        crate::env::jndi_key(&self.service_ref_name)
    }
}

impl ServiceRef {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut service_ref = ServiceRef {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    service_ref.description.add(Text::read(child));
                }
                "display-name" => {
                    service_ref.display_name.add(Text::read(child));
                }
                "icon" => {
                    service_ref.icon.add(Icon::read(child));
                }
                "service-ref-name" => service_ref.service_ref_name = text_of(child),
                "service-interface" => service_ref.service_interface = Some(text_of(child)),
                "service-ref-type" => service_ref.service_ref_type = Some(text_of(child)),
                "wsdl-file" => service_ref.wsdl_file = Some(text_of(child)),
                "jaxrpc-mapping-file" => {
                    service_ref.jaxrpc_mapping_file = Some(text_of(child))
                }
                "service-qname" => service_ref.service_qname = Some(qname_of(child)?),
                "port-component-ref" => service_ref
                    .port_component_ref
                    .push(PortComponentRef::read(child)?),
                "handler" => service_ref.handler.push(Handler::read(child)?),
                "handler-chains" => {
                    service_ref.handler_chains = Some(HandlerChains::read(child)?)
                }
                "mapped-name" => service_ref.mapped_name = Some(text_of(child)),
                "injection-target" => service_ref
                    .injection_target
                    .push(crate::env::InjectionTarget::read(child)),
                "lookup-name" => service_ref.lookup_name = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(service_ref)
    }
}

impl WriteXml for ServiceRef {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_text(writer, "service-ref-name", &self.service_ref_name)?;
        write_opt(
            writer,
            "service-interface",
            self.service_interface.as_deref(),
        )?;
        write_opt(writer, "service-ref-type", self.service_ref_type.as_deref())?;
        write_opt(writer, "wsdl-file", self.wsdl_file.as_deref())?;
        write_opt(
            writer,
            "jaxrpc-mapping-file",
            self.jaxrpc_mapping_file.as_deref(),
        )?;
        if let Some(qname) = &self.service_qname {
            write_qname(writer, "service-qname", qname)?;
        }
        write_all(writer, "port-component-ref", &self.port_component_ref)?;
        write_all(writer, "handler", &self.handler)?;
        if let Some(chains) = &self.handler_chains {
            chains.write_xml(writer, "handler-chains")?;
        }
        write_opt(writer, "mapped-name", self.mapped_name.as_deref())?;
        write_all(writer, "injection-target", &self.injection_target)?;
        write_opt(writer, "lookup-name", self.lookup_name.as_deref())?;
        close(writer, tag)
    }
}
