use jee_descriptors::connector::TransactionSupportType;
use jee_descriptors::{from_xml_str, to_xml_string, Connector, Connector10};

const RA_16: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<connector xmlns="http://java.sun.com/xml/ns/javaee" version="1.6" metadata-complete="true">
  <description>JMS resource adapter</description>
  <display-name>Example JMS Adapter</display-name>
  <vendor-name>Example</vendor-name>
  <eis-type>JMS</eis-type>
  <resourceadapter-version>2.4</resourceadapter-version>
  <license>
    <description>ASL 2.0</description>
    <license-required>false</license-required>
  </license>
  <resourceadapter>
    <resourceadapter-class>org.example.jms.JmsResourceAdapter</resourceadapter-class>
    <config-property>
      <config-property-name>BrokerUrl</config-property-name>
      <config-property-type>java.lang.String</config-property-type>
      <config-property-value>tcp://localhost:61616</config-property-value>
      <config-property-supports-dynamic-updates>true</config-property-supports-dynamic-updates>
      <config-property-confidential>false</config-property-confidential>
    </config-property>
    <outbound-resourceadapter>
      <connection-definition>
        <managedconnectionfactory-class>org.example.jms.ManagedJmsConnectionFactory</managedconnectionfactory-class>
        <connectionfactory-interface>javax.jms.ConnectionFactory</connectionfactory-interface>
        <connectionfactory-impl-class>org.example.jms.JmsConnectionFactoryImpl</connectionfactory-impl-class>
        <connection-interface>javax.jms.Connection</connection-interface>
        <connection-impl-class>org.example.jms.JmsConnectionImpl</connection-impl-class>
      </connection-definition>
      <transaction-support>XATransaction</transaction-support>
      <authentication-mechanism>
        <authentication-mechanism-type>BasicPassword</authentication-mechanism-type>
        <credential-interface>javax.resource.spi.security.PasswordCredential</credential-interface>
      </authentication-mechanism>
      <reauthentication-support>false</reauthentication-support>
    </outbound-resourceadapter>
    <inbound-resourceadapter>
      <messageadapter>
        <messagelistener>
          <messagelistener-type>javax.jms.MessageListener</messagelistener-type>
          <activationspec>
            <activationspec-class>org.example.jms.JmsActivationSpec</activationspec-class>
            <required-config-property>
              <config-property-name>destination</config-property-name>
            </required-config-property>
          </activationspec>
        </messagelistener>
      </messageadapter>
    </inbound-resourceadapter>
    <adminobject>
      <adminobject-interface>javax.jms.Queue</adminobject-interface>
      <adminobject-class>org.example.jms.JmsQueue</adminobject-class>
    </adminobject>
    <security-permission>
      <security-permission-spec>grant { permission java.net.SocketPermission "*", "connect"; };</security-permission-spec>
    </security-permission>
  </resourceadapter>
  <required-work-context>javax.resource.spi.work.TransactionContext</required-work-context>
</connector>
"#;

const RA_10: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<connector>
  <display-name>Legacy CICS Adapter</display-name>
  <vendor-name>Example</vendor-name>
  <spec-version>1.0</spec-version>
  <eis-type>CICS</eis-type>
  <version>3.1</version>
  <resourceadapter>
    <managedconnectionfactory-class>org.example.cics.ManagedCicsConnectionFactory</managedconnectionfactory-class>
    <connectionfactory-interface>javax.resource.cci.ConnectionFactory</connectionfactory-interface>
    <connectionfactory-impl-class>org.example.cics.CicsConnectionFactory</connectionfactory-impl-class>
    <connection-interface>javax.resource.cci.Connection</connection-interface>
    <connection-impl-class>org.example.cics.CicsConnection</connection-impl-class>
    <transaction-support>LocalTransaction</transaction-support>
    <config-property>
      <config-property-name>HostName</config-property-name>
      <config-property-type>java.lang.String</config-property-type>
      <config-property-value>cics.example.org</config-property-value>
    </config-property>
    <auth-mechanism>
      <auth-mech-type>BasicPassword</auth-mech-type>
      <credential-interface>javax.resource.spi.security.PasswordCredential</credential-interface>
    </auth-mechanism>
    <reauthentication-support>false</reauthentication-support>
  </resourceadapter>
</connector>
"#;

#[test]
fn reads_the_outbound_side() {
    let connector: Connector = from_xml_str(RA_16).unwrap();

    assert_eq!(connector.version(), "1.6");
    assert_eq!(connector.metadata_complete, Some(true));
    assert_eq!(connector.vendor_name.as_deref(), Some("Example"));
    assert_eq!(connector.resourceadapter_version.as_deref(), Some("2.4"));
    assert_eq!(
        connector.license.as_ref().unwrap().license_required,
        Some(false)
    );

    let adapter = connector.resourceadapter.as_ref().unwrap();
    assert_eq!(
        adapter.resourceadapter_class.as_deref(),
        Some("org.example.jms.JmsResourceAdapter")
    );
    assert_eq!(
        adapter.config_property[0].config_property_supports_dynamic_updates,
        Some(true)
    );

    let outbound = adapter.outbound_resourceadapter.as_ref().unwrap();
    assert_eq!(
        outbound.transaction_support,
        Some(TransactionSupportType::XaTransaction)
    );
    assert_eq!(
        outbound.connection_definition[0].connectionfactory_interface.as_deref(),
        Some("javax.jms.ConnectionFactory")
    );
    assert_eq!(
        outbound.authentication_mechanism[0].authentication_mechanism_type,
        "BasicPassword"
    );
}

#[test]
fn reads_the_inbound_side() {
    let connector: Connector = from_xml_str(RA_16).unwrap();
    let adapter = connector.resourceadapter.as_ref().unwrap();

    let inbound = adapter.inbound_resourceadapter.as_ref().unwrap();
    let listener = &inbound.messageadapter.as_ref().unwrap().messagelistener[0];
    assert_eq!(listener.messagelistener_type, "javax.jms.MessageListener");

    let spec = listener.activationspec.as_ref().unwrap();
    assert_eq!(spec.activationspec_class, "org.example.jms.JmsActivationSpec");
    assert_eq!(
        spec.required_config_property[0].config_property_name,
        "destination"
    );

    assert_eq!(adapter.adminobject[0].adminobject_interface, "javax.jms.Queue");
    assert_eq!(
        connector.required_work_context,
        ["javax.resource.spi.work.TransactionContext"]
    );
}

#[test]
fn round_trips_through_the_writer() {
    let parsed: Connector = from_xml_str(RA_16).unwrap();
    let written = to_xml_string(&parsed).unwrap();
    let reparsed: Connector = from_xml_str(&written).unwrap();

    assert_eq!(parsed, reparsed);
}

#[test]
fn reads_the_1_0_generation() {
    let connector: Connector10 = from_xml_str(RA_10).unwrap();

    assert_eq!(connector.spec_version(), "1.0");
    assert_eq!(connector.eis_type.as_deref(), Some("CICS"));
    assert_eq!(connector.version.as_deref(), Some("3.1"));

    let adapter = connector.resourceadapter.as_ref().unwrap();
    assert_eq!(
        adapter.managedconnectionfactory_class.as_deref(),
        Some("org.example.cics.ManagedCicsConnectionFactory")
    );
    assert_eq!(
        adapter.transaction_support,
        Some(TransactionSupportType::LocalTransaction)
    );
    assert_eq!(adapter.auth_mechanism[0].auth_mech_type, "BasicPassword");
    assert_eq!(adapter.reauthentication_support, Some(false));
}

#[test]
fn the_1_0_generation_round_trips() {
    let parsed: Connector10 = from_xml_str(RA_10).unwrap();
    let written = to_xml_string(&parsed).unwrap();
    let reparsed: Connector10 = from_xml_str(&written).unwrap();

    assert_eq!(parsed, reparsed);
}
