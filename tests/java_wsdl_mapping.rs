use jee_descriptors::{from_xml_str, to_xml_string, JavaWsdlMapping, QName};

const MAPPING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<java-wsdl-mapping xmlns="http://java.sun.com/xml/ns/j2ee"
                   xmlns:storens="urn:example:store" version="1.1">
  <package-mapping>
    <package-type>org.example.store.ws</package-type>
    <namespaceURI>urn:example:store</namespaceURI>
  </package-mapping>
  <service-interface-mapping>
    <service-interface>org.example.store.ws.StoreService</service-interface>
    <wsdl-service-name>storens:StoreService</wsdl-service-name>
    <port-mapping>
      <port-name>StorePort</port-name>
      <java-port-name>storePort</java-port-name>
    </port-mapping>
  </service-interface-mapping>
  <service-endpoint-interface-mapping>
    <service-endpoint-interface>org.example.store.ws.StoreEndpoint</service-endpoint-interface>
    <wsdl-port-type>storens:StorePortType</wsdl-port-type>
    <wsdl-binding>storens:StoreBinding</wsdl-binding>
    <service-endpoint-method-mapping>
      <java-method-name>findProduct</java-method-name>
      <wsdl-operation>findProduct</wsdl-operation>
      <wrapped-element/>
      <method-param-parts-mapping>
        <param-position>0</param-position>
        <param-type>java.lang.String</param-type>
        <wsdl-message-mapping>
          <wsdl-message>storens:findProductRequest</wsdl-message>
          <wsdl-message-part-name>sku</wsdl-message-part-name>
          <parameter-mode>IN</parameter-mode>
        </wsdl-message-mapping>
      </method-param-parts-mapping>
      <wsdl-return-value-mapping>
        <method-return-value>org.example.store.ws.Product</method-return-value>
        <wsdl-message>storens:findProductResponse</wsdl-message>
        <wsdl-message-part-name>product</wsdl-message-part-name>
      </wsdl-return-value-mapping>
    </service-endpoint-method-mapping>
  </service-endpoint-interface-mapping>
</java-wsdl-mapping>
"#;

#[test]
fn reads_the_package_and_service_mappings() {
    let mapping: JavaWsdlMapping = from_xml_str(MAPPING).unwrap();

    assert_eq!(mapping.version(), "1.1");
    assert_eq!(mapping.package_mapping[0].package_type, "org.example.store.ws");
    assert_eq!(mapping.package_mapping[0].namespace_uri, "urn:example:store");

    let service = &mapping.service_interface_mapping[0];
    assert_eq!(
        service.wsdl_service_name,
        Some(QName::new("urn:example:store", "StoreService", "storens"))
    );
    assert_eq!(service.port_mapping[0].java_port_name, "storePort");
}

#[test]
fn reads_the_endpoint_method_mapping() {
    let mapping: JavaWsdlMapping = from_xml_str(MAPPING).unwrap();
    let endpoint = &mapping.service_endpoint_interface_mapping[0];

    assert_eq!(
        endpoint.wsdl_port_type,
        Some(QName::new("urn:example:store", "StorePortType", "storens"))
    );

    let method = &endpoint.service_endpoint_method_mapping[0];
    assert_eq!(method.java_method_name, "findProduct");
    assert!(method.wrapped_element.is_some());

    let param = &method.method_param_parts_mapping[0];
    assert_eq!(param.param_position, Some(0));
    let message = param.wsdl_message_mapping.as_ref().unwrap();
    assert_eq!(message.wsdl_message_part_name, "sku");
    assert_eq!(message.parameter_mode, "IN");

    let return_value = method.wsdl_return_value_mapping.as_ref().unwrap();
    assert_eq!(return_value.method_return_value, "org.example.store.ws.Product");
    assert_eq!(return_value.wsdl_message_part_name.as_deref(), Some("product"));
}

#[test]
fn round_trips_through_the_writer() {
    let parsed: JavaWsdlMapping = from_xml_str(MAPPING).unwrap();
    let written = to_xml_string(&parsed).unwrap();
    let reparsed: JavaWsdlMapping = from_xml_str(&written).unwrap();

    assert_eq!(parsed, reparsed);
}
