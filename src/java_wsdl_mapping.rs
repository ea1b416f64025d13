//! The JAX-RPC mapping file (jaxrpc-mapping-file): the bridge between WSDL
//! names and Java types. Still carried in the j2ee namespace.

use quick_xml::events::{BytesEnd, Event};
use roxmltree::Node;

use crate::common::Empty;
use crate::error::DescriptorError;
use crate::qname::{qname_of, write_qname, QName};
use crate::xml::{
    close, collapsed, element_children, element_start, id_of, number_of, open, skip_unexpected,
    text_of, write_all, write_opt, write_opt_value, write_text, WriteXml, XmlWriter,
};
use crate::Descriptor;

const J2EE_NAMESPACE: &str = "http://java.sun.com/xml/ns/j2ee";

/// java-wsdl-mappingType: the root of a JAX-RPC mapping file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JavaWsdlMapping {
    pub package_mapping: Vec<PackageMapping>,
    pub java_xml_type_mapping: Vec<JavaXmlTypeMapping>,
    pub exception_mapping: Vec<ExceptionMapping>,
    pub service_interface_mapping: Vec<ServiceInterfaceMapping>,
    pub service_endpoint_interface_mapping: Vec<ServiceEndpointInterfaceMapping>,
    pub version: Option<String>,
    pub id: Option<String>,
}

impl JavaWsdlMapping {
    /// The mapping-file schema version, `"1.1"` unless the descriptor says
    /// otherwise.
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or("1.1")
    }
}

impl Descriptor for JavaWsdlMapping {
    const TAG_NAME: &'static str = "java-wsdl-mapping";
    const NAMESPACE: &'static str = J2EE_NAMESPACE;

    fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut mapping = JavaWsdlMapping {
            version: node.attribute("version").map(collapsed),
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "package-mapping" => mapping.package_mapping.push(PackageMapping::read(child)),
                "java-xml-type-mapping" => mapping
                    .java_xml_type_mapping
                    .push(JavaXmlTypeMapping::read(child)?),
                "exception-mapping" => {
                    mapping.exception_mapping.push(ExceptionMapping::read(child)?)
                }
                "service-interface-mapping" => mapping
                    .service_interface_mapping
                    .push(ServiceInterfaceMapping::read(child)?),
                "service-endpoint-interface-mapping" => mapping
                    .service_endpoint_interface_mapping
                    .push(ServiceEndpointInterfaceMapping::read(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(mapping)
    }

    fn write(&self, writer: &mut XmlWriter) -> Result<(), DescriptorError> {
        let mut start = element_start(Self::TAG_NAME, self.id.as_deref());
        start.push_attribute(("xmlns", Self::NAMESPACE));
        start.push_attribute(("version", self.version()));
        writer.write_event(Event::Start(start))?;
        write_all(writer, "package-mapping", &self.package_mapping)?;
        write_all(writer, "java-xml-type-mapping", &self.java_xml_type_mapping)?;
        write_all(writer, "exception-mapping", &self.exception_mapping)?;
        write_all(
            writer,
            "service-interface-mapping",
            &self.service_interface_mapping,
        )?;
        write_all(
            writer,
            "service-endpoint-interface-mapping",
            &self.service_endpoint_interface_mapping,
        )?;
        writer.write_event(Event::End(BytesEnd::new(Self::TAG_NAME)))?;
        Ok(())
    }
}

/// package-mappingType: maps a Java package onto an XML namespace.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PackageMapping {
    pub package_type: String,
    pub namespace_uri: String,
    pub id: Option<String>,
}

impl PackageMapping {
    pub fn new(package_type: impl Into<String>, namespace_uri: impl Into<String>) -> Self {
        Self {
            package_type: package_type.into(),
            namespace_uri: namespace_uri.into(),
            id: None,
        }
    }

    pub(crate) fn read(node: Node) -> Self {
        let mut mapping = PackageMapping {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "package-type" => mapping.package_type = text_of(child),
                "namespaceURI" => mapping.namespace_uri = text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        mapping
    }
}

impl WriteXml for PackageMapping {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "package-type", &self.package_type)?;
        write_text(writer, "namespaceURI", &self.namespace_uri)?;
        close(writer, tag)
    }
}

/// java-xml-type-mappingType.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JavaXmlTypeMapping {
    pub java_type: String,
    pub root_type_qname: Option<QName>,
    pub anonymous_type_qname: Option<String>,
    pub qname_scope: String,
    pub variable_mapping: Vec<VariableMapping>,
    pub id: Option<String>,
}

impl JavaXmlTypeMapping {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut mapping = JavaXmlTypeMapping {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "java-type" => mapping.java_type = text_of(child),
                "root-type-qname" => mapping.root_type_qname = Some(qname_of(child)?),
                "anonymous-type-qname" => {
                    mapping.anonymous_type_qname = Some(text_of(child))
                }
                "qname-scope" => mapping.qname_scope = text_of(child),
                "variable-mapping" => {
                    mapping.variable_mapping.push(VariableMapping::read(child))
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(mapping)
    }
}

impl WriteXml for JavaXmlTypeMapping {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "java-type", &self.java_type)?;
        if let Some(qname) = &self.root_type_qname {
            write_qname(writer, "root-type-qname", qname)?;
        }
        write_opt(
            writer,
            "anonymous-type-qname",
            self.anonymous_type_qname.as_deref(),
        )?;
        write_text(writer, "qname-scope", &self.qname_scope)?;
        write_all(writer, "variable-mapping", &self.variable_mapping)?;
        close(writer, tag)
    }
}

/// variable-mappingType: maps one Java field onto an XML element, attribute
/// or wildcard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariableMapping {
    pub java_variable_name: String,
    pub data_member: Option<Empty>,
    pub xml_attribute_name: Option<String>,
    pub xml_element_name: Option<String>,
    pub xml_wildcard: Option<Empty>,
    pub id: Option<String>,
}

impl VariableMapping {
    pub(crate) fn read(node: Node) -> Self {
        let mut mapping = VariableMapping {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "java-variable-name" => mapping.java_variable_name = text_of(child),
                "data-member" => mapping.data_member = Some(Empty::read(child)),
                "xml-attribute-name" => mapping.xml_attribute_name = Some(text_of(child)),
                "xml-element-name" => mapping.xml_element_name = Some(text_of(child)),
                "xml-wildcard" => mapping.xml_wildcard = Some(Empty::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        mapping
    }
}

impl WriteXml for VariableMapping {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "java-variable-name", &self.java_variable_name)?;
        if let Some(member) = &self.data_member {
            member.write_xml(writer, "data-member")?;
        }
        write_opt(
            writer,
            "xml-attribute-name",
            self.xml_attribute_name.as_deref(),
        )?;
        write_opt(writer, "xml-element-name", self.xml_element_name.as_deref())?;
        if let Some(wildcard) = &self.xml_wildcard {
            wildcard.write_xml(writer, "xml-wildcard")?;
        }
        close(writer, tag)
    }
}

/// exception-mappingType.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExceptionMapping {
    pub exception_type: String,
    pub wsdl_message: Option<QName>,
    pub wsdl_message_part_name: Option<String>,
    pub constructor_parameter_order: Option<ConstructorParameterOrder>,
    pub id: Option<String>,
}

impl ExceptionMapping {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut mapping = ExceptionMapping {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "exception-type" => mapping.exception_type = text_of(child),
                "wsdl-message" => mapping.wsdl_message = Some(qname_of(child)?),
                "wsdl-message-part-name" => {
                    mapping.wsdl_message_part_name = Some(text_of(child))
                }
                "constructor-parameter-order" => {
                    mapping.constructor_parameter_order =
                        Some(ConstructorParameterOrder::read(child))
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(mapping)
    }
}

impl WriteXml for ExceptionMapping {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "exception-type", &self.exception_type)?;
        if let Some(message) = &self.wsdl_message {
            write_qname(writer, "wsdl-message", message)?;
        }
        write_opt(
            writer,
            "wsdl-message-part-name",
            self.wsdl_message_part_name.as_deref(),
        )?;
        if let Some(order) = &self.constructor_parameter_order {
            order.write_xml(writer, "constructor-parameter-order")?;
        }
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConstructorParameterOrder {
    pub element_name: Vec<String>,
    pub id: Option<String>,
}

impl ConstructorParameterOrder {
    pub(crate) fn read(node: Node) -> Self {
        let mut order = ConstructorParameterOrder {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "element-name" => order.element_name.push(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        order
    }
}

impl WriteXml for ConstructorParameterOrder {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        for name in &self.element_name {
            write_text(writer, "element-name", name)?;
        }
        close(writer, tag)
    }
}

/// service-interface-mappingType.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceInterfaceMapping {
    pub service_interface: String,
    pub wsdl_service_name: Option<QName>,
    pub port_mapping: Vec<PortMapping>,
    pub id: Option<String>,
}

impl ServiceInterfaceMapping {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut mapping = ServiceInterfaceMapping {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "service-interface" => mapping.service_interface = text_of(child),
                "wsdl-service-name" => mapping.wsdl_service_name = Some(qname_of(child)?),
                "port-mapping" => mapping.port_mapping.push(PortMapping::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(mapping)
    }
}

impl WriteXml for ServiceInterfaceMapping {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "service-interface", &self.service_interface)?;
        if let Some(name) = &self.wsdl_service_name {
            write_qname(writer, "wsdl-service-name", name)?;
        }
        write_all(writer, "port-mapping", &self.port_mapping)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PortMapping {
    pub port_name: String,
    pub java_port_name: String,
    pub id: Option<String>,
}

impl PortMapping {
    pub(crate) fn read(node: Node) -> Self {
        let mut mapping = PortMapping {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "port-name" => mapping.port_name = text_of(child),
                "java-port-name" => mapping.java_port_name = text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        mapping
    }
}

impl WriteXml for PortMapping {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "port-name", &self.port_name)?;
        write_text(writer, "java-port-name", &self.java_port_name)?;
        close(writer, tag)
    }
}

/// service-endpoint-interface-mappingType.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceEndpointInterfaceMapping {
    pub service_endpoint_interface: String,
    pub wsdl_port_type: Option<QName>,
    pub wsdl_binding: Option<QName>,
    pub service_endpoint_method_mapping: Vec<ServiceEndpointMethodMapping>,
    pub id: Option<String>,
}

impl ServiceEndpointInterfaceMapping {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut mapping = ServiceEndpointInterfaceMapping {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "service-endpoint-interface" => {
                    mapping.service_endpoint_interface = text_of(child)
                }
                "wsdl-port-type" => mapping.wsdl_port_type = Some(qname_of(child)?),
                "wsdl-binding" => mapping.wsdl_binding = Some(qname_of(child)?),
                "service-endpoint-method-mapping" => mapping
                    .service_endpoint_method_mapping
                    .push(ServiceEndpointMethodMapping::read(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(mapping)
    }
}

impl WriteXml for ServiceEndpointInterfaceMapping {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(
            writer,
            "service-endpoint-interface",
            &self.service_endpoint_interface,
        )?;
        if let Some(port_type) = &self.wsdl_port_type {
            write_qname(writer, "wsdl-port-type", port_type)?;
        }
        if let Some(binding) = &self.wsdl_binding {
            write_qname(writer, "wsdl-binding", binding)?;
        }
        write_all(
            writer,
            "service-endpoint-method-mapping",
            &self.service_endpoint_method_mapping,
        )?;
        close(writer, tag)
    }
}

/// service-endpoint-method-mappingType.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceEndpointMethodMapping {
    pub java_method_name: String,
    pub wsdl_operation: String,
    pub wrapped_element: Option<Empty>,
    pub method_param_parts_mapping: Vec<MethodParamPartsMapping>,
    pub wsdl_return_value_mapping: Option<WsdlReturnValueMapping>,
    pub id: Option<String>,
}

impl ServiceEndpointMethodMapping {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut mapping = ServiceEndpointMethodMapping {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "java-method-name" => mapping.java_method_name = text_of(child),
                "wsdl-operation" => mapping.wsdl_operation = text_of(child),
                "wrapped-element" => mapping.wrapped_element = Some(Empty::read(child)),
                "method-param-parts-mapping" => mapping
                    .method_param_parts_mapping
                    .push(MethodParamPartsMapping::read(child)?),
                "wsdl-return-value-mapping" => {
                    mapping.wsdl_return_value_mapping =
                        Some(WsdlReturnValueMapping::read(child)?)
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(mapping)
    }
}

impl WriteXml for ServiceEndpointMethodMapping {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "java-method-name", &self.java_method_name)?;
        write_text(writer, "wsdl-operation", &self.wsdl_operation)?;
        if let Some(wrapped) = &self.wrapped_element {
            wrapped.write_xml(writer, "wrapped-element")?;
        }
        write_all(
            writer,
            "method-param-parts-mapping",
            &self.method_param_parts_mapping,
        )?;
        if let Some(return_value) = &self.wsdl_return_value_mapping {
            return_value.write_xml(writer, "wsdl-return-value-mapping")?;
        }
        close(writer, tag)
    }
}

/// method-param-parts-mappingType.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MethodParamPartsMapping {
    pub param_position: Option<i32>,
    pub param_type: String,
    pub wsdl_message_mapping: Option<WsdlMessageMapping>,
    pub id: Option<String>,
}

impl MethodParamPartsMapping {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut mapping = MethodParamPartsMapping {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "param-position" => mapping.param_position = Some(number_of(child)?),
                "param-type" => mapping.param_type = text_of(child),
                "wsdl-message-mapping" => {
                    mapping.wsdl_message_mapping = Some(WsdlMessageMapping::read(child)?)
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(mapping)
    }
}

impl WriteXml for MethodParamPartsMapping {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_opt_value(writer, "param-position", self.param_position)?;
        write_text(writer, "param-type", &self.param_type)?;
        if let Some(message) = &self.wsdl_message_mapping {
            message.write_xml(writer, "wsdl-message-mapping")?;
        }
        close(writer, tag)
    }
}

/// wsdl-message-mappingType.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WsdlMessageMapping {
    pub wsdl_message: Option<QName>,
    pub wsdl_message_part_name: String,
    pub parameter_mode: String,
    pub soap_header: Option<Empty>,
    pub id: Option<String>,
}

impl WsdlMessageMapping {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut mapping = WsdlMessageMapping {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "wsdl-message" => mapping.wsdl_message = Some(qname_of(child)?),
                "wsdl-message-part-name" => {
                    mapping.wsdl_message_part_name = text_of(child)
                }
                "parameter-mode" => mapping.parameter_mode = text_of(child),
                "soap-header" => mapping.soap_header = Some(Empty::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(mapping)
    }
}

impl WriteXml for WsdlMessageMapping {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        if let Some(message) = &self.wsdl_message {
            write_qname(writer, "wsdl-message", message)?;
        }
        write_text(
            writer,
            "wsdl-message-part-name",
            &self.wsdl_message_part_name,
        )?;
        write_text(writer, "parameter-mode", &self.parameter_mode)?;
        if let Some(header) = &self.soap_header {
            header.write_xml(writer, "soap-header")?;
        }
        close(writer, tag)
    }
}

/// wsdl-return-value-mappingType.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WsdlReturnValueMapping {
    pub method_return_value: String,
    pub wsdl_message: Option<QName>,
    pub wsdl_message_part_name: Option<String>,
    pub id: Option<String>,
}

impl WsdlReturnValueMapping {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut mapping = WsdlReturnValueMapping {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "method-return-value" => mapping.method_return_value = text_of(child),
                "wsdl-message" => mapping.wsdl_message = Some(qname_of(child)?),
                "wsdl-message-part-name" => {
                    mapping.wsdl_message_part_name = Some(text_of(child))
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(mapping)
    }
}

impl WriteXml for WsdlReturnValueMapping {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "method-return-value", &self.method_return_value)?;
        if let Some(message) = &self.wsdl_message {
            write_qname(writer, "wsdl-message", message)?;
        }
        write_opt(
            writer,
            "wsdl-message-part-name",
            self.wsdl_message_part_name.as_deref(),
        )?;
        close(writer, tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_defaults_to_1_1() {
        let mapping = JavaWsdlMapping::default();
        assert_eq!(mapping.version(), "1.1");

        let mapping = JavaWsdlMapping {
            version: Some("1.2".to_string()),
            ..JavaWsdlMapping::default()
        };
        assert_eq!(mapping.version(), "1.2");
    }
}
