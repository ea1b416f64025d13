use jee_descriptors::{from_xml_str, to_xml_string, ApplicationClient};

const APPLICATION_CLIENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<application-client xmlns="http://java.sun.com/xml/ns/javaee" version="6" metadata-complete="true">
  <display-name>Admin console</display-name>
  <env-entry>
    <env-entry-name>reportDir</env-entry-name>
    <env-entry-type>java.lang.String</env-entry-type>
    <env-entry-value>/var/reports</env-entry-value>
  </env-entry>
  <resource-ref>
    <res-ref-name>mail/Alerts</res-ref-name>
    <res-type>javax.mail.Session</res-type>
    <res-auth>Container</res-auth>
  </resource-ref>
  <callback-handler>org.example.admin.ConsoleCallbackHandler</callback-handler>
</application-client>
"#;

#[test]
fn reads_the_client_environment() {
    let client: ApplicationClient = from_xml_str(APPLICATION_CLIENT).unwrap();

    assert_eq!(client.version.as_deref(), Some("6"));
    assert_eq!(client.metadata_complete, Some(true));
    assert_eq!(client.display_name.local(), Some("Admin console"));
    assert_eq!(
        client.callback_handler.as_deref(),
        Some("org.example.admin.ConsoleCallbackHandler")
    );

    let entry = client.env_entry.get("java:comp/env/reportDir").unwrap();
    assert_eq!(entry.env_entry_value.as_deref(), Some("/var/reports"));
    assert!(client.resource_ref.contains_key("java:comp/env/mail/Alerts"));
}

#[test]
fn round_trips_through_the_writer() {
    let parsed: ApplicationClient = from_xml_str(APPLICATION_CLIENT).unwrap();
    let written = to_xml_string(&parsed).unwrap();
    let reparsed: ApplicationClient = from_xml_str(&written).unwrap();

    assert_eq!(parsed, reparsed);
}
