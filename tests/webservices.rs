use jee_descriptors::{from_xml_str, to_xml_string, QName, Webservices};

const WEBSERVICES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<webservices xmlns="http://java.sun.com/xml/ns/javaee"
             xmlns:ws="urn:example:store" version="1.2">
  <description>Store endpoints</description>
  <webservice-description>
    <webservice-description-name>StoreService</webservice-description-name>
    <wsdl-file>WEB-INF/wsdl/store.wsdl</wsdl-file>
    <jaxrpc-mapping-file>WEB-INF/store-mapping.xml</jaxrpc-mapping-file>
    <port-component>
      <port-component-name>StorePort</port-component-name>
      <wsdl-service>ws:StoreService</wsdl-service>
      <wsdl-port>ws:StorePort</wsdl-port>
      <enable-mtom>true</enable-mtom>
      <mtom-threshold>1024</mtom-threshold>
      <protocol-binding>##SOAP11_HTTP</protocol-binding>
      <service-endpoint-interface>org.example.store.StoreEndpoint</service-endpoint-interface>
      <service-impl-bean>
        <servlet-link>store</servlet-link>
      </service-impl-bean>
      <handler-chains>
        <handler-chain>
          <service-name-pattern>ws:StoreService</service-name-pattern>
          <port-name-pattern>*</port-name-pattern>
          <protocol-bindings>##SOAP11_HTTP ##SOAP12_HTTP</protocol-bindings>
          <handler>
            <handler-name>audit</handler-name>
            <handler-class>org.example.store.AuditHandler</handler-class>
            <init-param>
              <param-name>level</param-name>
              <param-value>fine</param-value>
            </init-param>
            <soap-role>ultimateReceiver</soap-role>
          </handler>
        </handler-chain>
      </handler-chains>
    </port-component>
  </webservice-description>
</webservices>
"#;

#[test]
fn reads_the_port_component() {
    let webservices: Webservices = from_xml_str(WEBSERVICES).unwrap();

    assert_eq!(webservices.version(), "1.2");
    assert_eq!(webservices.description.local(), Some("Store endpoints"));

    let description = &webservices.webservice_description[0];
    assert_eq!(description.webservice_description_name, "StoreService");
    assert_eq!(
        description.wsdl_file.as_deref(),
        Some("WEB-INF/wsdl/store.wsdl")
    );

    let port = &description.port_component[0];
    assert_eq!(port.port_component_name, "StorePort");
    assert_eq!(
        port.wsdl_service,
        Some(QName::new("urn:example:store", "StoreService", "ws"))
    );
    assert_eq!(
        port.wsdl_port,
        Some(QName::new("urn:example:store", "StorePort", "ws"))
    );
    assert_eq!(port.enable_mtom, Some(true));
    assert_eq!(port.mtom_threshold, Some(1024));
    assert_eq!(
        port.service_impl_bean.as_ref().unwrap().servlet_link.as_deref(),
        Some("store")
    );
}

#[test]
fn resolves_handler_chain_name_patterns() {
    let webservices: Webservices = from_xml_str(WEBSERVICES).unwrap();
    let port = &webservices.webservice_description[0].port_component[0];
    let chain = &port.handler_chains.as_ref().unwrap().handler_chain[0];

    // The prefix in the pattern resolves against the document-level
    // declaration, not one local to the pattern element.
    assert_eq!(
        chain.service_name_pattern,
        Some(QName::new("urn:example:store", "StoreService", "ws"))
    );
    assert_eq!(chain.port_name_pattern, Some(QName::unqualified("*")));
    assert_eq!(
        chain.protocol_bindings,
        ["##SOAP11_HTTP", "##SOAP12_HTTP"]
    );

    assert_eq!(chain.handler[0].handler_name, "audit");
    assert_eq!(chain.handler[0].soap_role, ["ultimateReceiver"]);
}

#[test]
fn round_trips_through_the_writer() {
    let parsed: Webservices = from_xml_str(WEBSERVICES).unwrap();
    let written = to_xml_string(&parsed).unwrap();
    let reparsed: Webservices = from_xml_str(&written).unwrap();

    assert_eq!(parsed, reparsed);
}
