use jee_descriptors::{from_xml_str, to_xml_string, FacesConfig};

const FACES_CONFIG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<faces-config xmlns="http://java.sun.com/xml/ns/javaee" version="2.0">
  <application>
    <message-bundle>org.example.store.Messages</message-bundle>
    <locale-config>
      <default-locale>en</default-locale>
      <supported-locale>de</supported-locale>
      <supported-locale>fr</supported-locale>
    </locale-config>
    <resource-bundle>
      <base-name>org.example.store.Resources</base-name>
      <var>msg</var>
    </resource-bundle>
  </application>
  <converter>
    <converter-id>money</converter-id>
    <converter-class>org.example.store.MoneyConverter</converter-class>
  </converter>
  <managed-bean eager="true">
    <managed-bean-name>cart</managed-bean-name>
    <managed-bean-class>org.example.store.CartBean</managed-bean-class>
    <managed-bean-scope>session</managed-bean-scope>
    <managed-property>
      <property-name>maxItems</property-name>
      <value>10</value>
    </managed-property>
  </managed-bean>
  <navigation-rule>
    <from-view-id>/cart.xhtml</from-view-id>
    <navigation-case>
      <from-outcome>checkout</from-outcome>
      <to-view-id>/checkout.xhtml</to-view-id>
      <redirect/>
    </navigation-case>
  </navigation-rule>
  <lifecycle>
    <phase-listener>org.example.store.AuditPhaseListener</phase-listener>
  </lifecycle>
</faces-config>
"#;

#[test]
fn reads_the_application_section() {
    let config: FacesConfig = from_xml_str(FACES_CONFIG).unwrap();

    assert_eq!(config.version.as_deref(), Some("2.0"));

    let application = &config.application[0];
    assert_eq!(application.message_bundle, ["org.example.store.Messages"]);

    let locales = application.locale_config.as_ref().unwrap();
    assert_eq!(locales.default_locale.as_deref(), Some("en"));
    assert_eq!(locales.supported_locale, ["de", "fr"]);

    let bundle = application.resource_bundle.as_ref().unwrap();
    assert_eq!(bundle.base_name, "org.example.store.Resources");
    assert_eq!(bundle.var, "msg");
}

#[test]
fn reads_managed_beans_and_navigation() {
    let config: FacesConfig = from_xml_str(FACES_CONFIG).unwrap();

    let bean = &config.managed_bean[0];
    assert_eq!(bean.managed_bean_name, "cart");
    assert_eq!(bean.managed_bean_scope.as_deref(), Some("session"));
    assert_eq!(bean.eager, Some(true));
    assert_eq!(bean.managed_property[0].property_name, "maxItems");
    assert_eq!(bean.managed_property[0].value.as_deref(), Some("10"));

    let rule = &config.navigation_rule[0];
    assert_eq!(rule.from_view_id.as_deref(), Some("/cart.xhtml"));
    let case = &rule.navigation_case[0];
    assert_eq!(case.from_outcome.as_deref(), Some("checkout"));
    assert_eq!(case.to_view_id, "/checkout.xhtml");
    assert!(case.redirect.is_some());

    assert_eq!(
        config.converter[0].converter_id.as_deref(),
        Some("money")
    );
    assert_eq!(
        config.lifecycle[0].phase_listener,
        ["org.example.store.AuditPhaseListener"]
    );
}

#[test]
fn round_trips_through_the_writer() {
    let parsed: FacesConfig = from_xml_str(FACES_CONFIG).unwrap();
    let written = to_xml_string(&parsed).unwrap();
    let reparsed: FacesConfig = from_xml_str(&written).unwrap();

    assert_eq!(parsed, reparsed);
}
