use jee_descriptors::beans::SessionType;
use jee_descriptors::ejb_jar::TransAttribute;
use jee_descriptors::{from_xml_str, to_xml_string, EjbJar, EnterpriseBean};

const EJB_JAR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ejb-jar xmlns="http://java.sun.com/xml/ns/javaee" version="3.1" metadata-complete="false">
  <module-name>invoicing</module-name>
  <description>Invoicing backend</description>
  <enterprise-beans>
    <session>
      <ejb-name>InvoiceService</ejb-name>
      <business-local>org.example.invoicing.Invoicing</business-local>
      <ejb-class>org.example.invoicing.InvoiceServiceBean</ejb-class>
      <session-type>Stateless</session-type>
      <transaction-type>Container</transaction-type>
      <around-invoke>
        <class>org.example.invoicing.Auditor</class>
        <method-name>audit</method-name>
      </around-invoke>
      <env-entry>
        <env-entry-name>invoicePrefix</env-entry-name>
        <env-entry-type>java.lang.String</env-entry-type>
        <env-entry-value>INV-</env-entry-value>
      </env-entry>
      <resource-ref>
        <res-ref-name>jdbc/InvoiceDB</res-ref-name>
        <res-type>javax.sql.DataSource</res-type>
        <res-auth>Container</res-auth>
      </resource-ref>
    </session>
    <message-driven>
      <ejb-name>InvoiceListener</ejb-name>
      <ejb-class>org.example.invoicing.InvoiceListenerBean</ejb-class>
      <messaging-type>javax.jms.MessageListener</messaging-type>
      <transaction-type>Container</transaction-type>
      <activation-config>
        <activation-config-property>
          <activation-config-property-name>destinationType</activation-config-property-name>
          <activation-config-property-value>javax.jms.Queue</activation-config-property-value>
        </activation-config-property>
      </activation-config>
    </message-driven>
  </enterprise-beans>
  <interceptors>
    <interceptor>
      <interceptor-class>org.example.invoicing.Auditor</interceptor-class>
      <around-invoke>
        <method-name>audit</method-name>
      </around-invoke>
    </interceptor>
  </interceptors>
  <assembly-descriptor>
    <container-transaction>
      <method>
        <ejb-name>InvoiceService</ejb-name>
        <method-name>*</method-name>
      </method>
      <trans-attribute>Required</trans-attribute>
    </container-transaction>
    <application-exception>
      <exception-class>org.example.invoicing.InvoiceRejected</exception-class>
      <rollback>true</rollback>
    </application-exception>
  </assembly-descriptor>
</ejb-jar>
"#;

#[test]
fn reads_beans_in_document_order() {
    let ejb_jar: EjbJar = from_xml_str(EJB_JAR).unwrap();

    assert_eq!(ejb_jar.module_name.as_deref(), Some("invoicing"));
    assert_eq!(ejb_jar.version.as_deref(), Some("3.1"));
    assert_eq!(ejb_jar.metadata_complete, Some(false));
    assert_eq!(ejb_jar.description.local(), Some("Invoicing backend"));

    let names: Vec<_> = ejb_jar
        .enterprise_beans
        .iter()
        .map(EnterpriseBean::ejb_name)
        .collect();
    assert_eq!(names, ["InvoiceService", "InvoiceListener"]);

    let Some(EnterpriseBean::Session(session)) =
        ejb_jar.enterprise_beans.get("InvoiceService")
    else {
        panic!("InvoiceService should be a session bean");
    };
    assert_eq!(session.session_type, Some(SessionType::Stateless));
    assert_eq!(
        session.business_local,
        ["org.example.invoicing.Invoicing".to_string()]
    );
    assert_eq!(session.around_invoke.len(), 1);
    assert_eq!(session.around_invoke[0].method_name, "audit");
    assert!(session
        .env_entry
        .contains_key("java:comp/env/invoicePrefix"));
    assert!(session
        .resource_ref
        .contains_key("java:comp/env/jdbc/InvoiceDB"));
}

#[test]
fn reads_the_assembly_descriptor() {
    let ejb_jar: EjbJar = from_xml_str(EJB_JAR).unwrap();
    let assembly = ejb_jar.assembly_descriptor.as_ref().unwrap();

    assert_eq!(assembly.container_transaction.len(), 1);
    assert_eq!(
        assembly.container_transaction[0].trans_attribute,
        Some(TransAttribute::Required)
    );
    assert_eq!(assembly.container_transaction[0].method[0].method_name, "*");

    let exception = assembly
        .application_exception("org.example.invoicing.InvoiceRejected")
        .unwrap();
    assert_eq!(exception.rollback, Some(true));
}

#[test]
fn reads_activation_config_properties() {
    let ejb_jar: EjbJar = from_xml_str(EJB_JAR).unwrap();
    let Some(EnterpriseBean::MessageDriven(listener)) =
        ejb_jar.enterprise_beans.get("InvoiceListener")
    else {
        panic!("InvoiceListener should be a message-driven bean");
    };

    let properties = listener.activation_config.as_ref().unwrap().to_properties();
    assert_eq!(
        properties.get("destinationType").map(String::as_str),
        Some("javax.jms.Queue")
    );
}

#[test]
fn round_trips_through_the_writer() {
    let parsed: EjbJar = from_xml_str(EJB_JAR).unwrap();
    let written = to_xml_string(&parsed).unwrap();
    let reparsed: EjbJar = from_xml_str(&written).unwrap();

    assert_eq!(parsed, reparsed);
}

#[test]
fn rejects_a_mismatched_root_element() {
    let error = from_xml_str::<EjbJar>("<web-app/>").unwrap_err();
    assert!(error.to_string().contains("web-app"));
}
