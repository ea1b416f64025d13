use jee_descriptors::{from_xml_str, to_xml_string, Application, EnvEntry};

const APPLICATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<application xmlns="http://java.sun.com/xml/ns/javaee" version="6">
  <application-name>store</application-name>
  <description>Web store</description>
  <display-name>Store</display-name>
  <initialize-in-order>true</initialize-in-order>
  <module>
    <ejb>store-ejb.jar</ejb>
  </module>
  <module>
    <web>
      <web-uri>store-web.war</web-uri>
      <context-root>/store</context-root>
    </web>
  </module>
  <module>
    <connector>store-ra.rar</connector>
    <alt-dd>META-INF/alt-ra.xml</alt-dd>
  </module>
  <security-role>
    <role-name>manager</role-name>
  </security-role>
  <library-directory>lib</library-directory>
  <data-source>
    <name>jdbc/StoreDB</name>
    <class-name>org.h2.jdbcx.JdbcDataSource</class-name>
    <url>jdbc:h2:mem:store</url>
    <transactional>true</transactional>
    <max-pool-size>8</max-pool-size>
  </data-source>
</application>
"#;

#[test]
fn reads_modules_in_document_order() {
    let application: Application = from_xml_str(APPLICATION).unwrap();

    assert_eq!(application.version.as_deref(), Some("6"));
    assert_eq!(application.application_name.as_deref(), Some("store"));
    assert_eq!(application.description.local(), Some("Web store"));
    assert_eq!(application.initialize_in_order, Some(true));
    assert_eq!(application.library_directory.as_deref(), Some("lib"));

    assert_eq!(application.module.len(), 3);
    assert_eq!(application.module[0].ejb.as_deref(), Some("store-ejb.jar"));

    let web = application.module[1].web.as_ref().unwrap();
    assert_eq!(web.web_uri, "store-web.war");
    assert_eq!(web.context_root.as_deref(), Some("/store"));

    assert_eq!(
        application.module[2].connector.as_deref(),
        Some("store-ra.rar")
    );
    assert_eq!(
        application.module[2].alt_dd.as_deref(),
        Some("META-INF/alt-ra.xml")
    );
}

#[test]
fn keys_resources_under_comp_env() {
    let application: Application = from_xml_str(APPLICATION).unwrap();

    let data_source = application
        .data_source
        .get("java:comp/env/jdbc/StoreDB")
        .unwrap();
    assert_eq!(data_source.url.as_deref(), Some("jdbc:h2:mem:store"));
    assert_eq!(data_source.max_pool_size, Some(8));
}

#[test]
fn fresh_instances_expose_empty_collections() {
    let mut application = Application::default();
    assert!(application.module.is_empty());
    assert!(application.env_entry.is_empty());

    application
        .env_entry
        .push(EnvEntry::new("greeting", "java.lang.String", "hello"));
    assert_eq!(application.env_entry.len(), 1);
    assert!(application.env_entry.contains_key("java:comp/env/greeting"));
}

#[test]
fn round_trips_through_the_writer() {
    let parsed: Application = from_xml_str(APPLICATION).unwrap();
    let written = to_xml_string(&parsed).unwrap();
    let reparsed: Application = from_xml_str(&written).unwrap();

    assert_eq!(parsed, reparsed);
}
