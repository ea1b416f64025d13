use jee_descriptors::web::OrderingEntry;
use jee_descriptors::web_common::{Dispatcher, TransportGuarantee};
use jee_descriptors::{from_xml_str, to_xml_string, WebApp, WebFragment};

const WEB_APP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<web-app xmlns="http://java.sun.com/xml/ns/javaee" version="3.0" metadata-complete="false">
  <display-name>Storefront</display-name>
  <distributable/>
  <context-param>
    <param-name>theme</param-name>
    <param-value>dark</param-value>
  </context-param>
  <filter>
    <filter-name>audit</filter-name>
    <filter-class>org.example.web.AuditFilter</filter-class>
    <async-supported>true</async-supported>
    <init-param>
      <param-name>level</param-name>
      <param-value>info</param-value>
    </init-param>
  </filter>
  <filter-mapping>
    <filter-name>audit</filter-name>
    <url-pattern>/*</url-pattern>
    <dispatcher>REQUEST</dispatcher>
    <dispatcher>FORWARD</dispatcher>
  </filter-mapping>
  <listener>
    <listener-class>org.example.web.StartupListener</listener-class>
  </listener>
  <servlet>
    <servlet-name>catalog</servlet-name>
    <servlet-class>org.example.web.CatalogServlet</servlet-class>
    <load-on-startup>1</load-on-startup>
    <async-supported>true</async-supported>
  </servlet>
  <servlet-mapping>
    <servlet-name>catalog</servlet-name>
    <url-pattern>/catalog/*</url-pattern>
  </servlet-mapping>
  <session-config>
    <session-timeout>30</session-timeout>
    <cookie-config>
      <name>SID</name>
      <http-only>true</http-only>
      <secure>true</secure>
    </cookie-config>
    <tracking-mode>COOKIE</tracking-mode>
  </session-config>
  <mime-mapping>
    <extension>wsdl</extension>
    <mime-type>text/xml</mime-type>
  </mime-mapping>
  <welcome-file-list>
    <welcome-file>index.jsp</welcome-file>
    <welcome-file>index.html</welcome-file>
  </welcome-file-list>
  <error-page>
    <error-code>404</error-code>
    <location>/missing.jsp</location>
  </error-page>
  <error-page>
    <exception-type>java.lang.IllegalStateException</exception-type>
    <location>/error.jsp</location>
  </error-page>
  <jsp-config>
    <jsp-property-group>
      <url-pattern>*.jspx</url-pattern>
      <is-xml>true</is-xml>
    </jsp-property-group>
  </jsp-config>
  <security-constraint>
    <web-resource-collection>
      <web-resource-name>admin</web-resource-name>
      <url-pattern>/admin/*</url-pattern>
      <http-method>GET</http-method>
      <http-method>POST</http-method>
    </web-resource-collection>
    <auth-constraint>
      <role-name>admin</role-name>
    </auth-constraint>
    <user-data-constraint>
      <transport-guarantee>CONFIDENTIAL</transport-guarantee>
    </user-data-constraint>
  </security-constraint>
  <login-config>
    <auth-method>FORM</auth-method>
    <realm-name>store</realm-name>
    <form-login-config>
      <form-login-page>/login.jsp</form-login-page>
      <form-error-page>/login-failed.jsp</form-error-page>
    </form-login-config>
  </login-config>
  <security-role>
    <role-name>admin</role-name>
  </security-role>
  <env-entry>
    <env-entry-name>maxResults</env-entry-name>
    <env-entry-type>java.lang.Integer</env-entry-type>
    <env-entry-value>50</env-entry-value>
  </env-entry>
  <absolute-ordering>
    <name>core</name>
    <others/>
  </absolute-ordering>
</web-app>
"#;

const WEB_FRAGMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<web-fragment xmlns="http://java.sun.com/xml/ns/javaee" version="3.0">
  <name>metrics</name>
  <ordering>
    <after>
      <others/>
    </after>
    <before>
      <name>audit</name>
    </before>
  </ordering>
  <listener>
    <listener-class>org.example.metrics.MetricsListener</listener-class>
  </listener>
  <servlet>
    <servlet-name>metrics</servlet-name>
    <servlet-class>org.example.metrics.MetricsServlet</servlet-class>
  </servlet>
  <servlet-mapping>
    <servlet-name>metrics</servlet-name>
    <url-pattern>/metrics</url-pattern>
  </servlet-mapping>
</web-fragment>
"#;

#[test]
fn reads_the_servlet_layer() {
    let web_app: WebApp = from_xml_str(WEB_APP).unwrap();

    assert_eq!(web_app.version.as_deref(), Some("3.0"));
    assert_eq!(web_app.metadata_complete, Some(false));
    assert!(web_app.distributable.is_some());

    assert_eq!(web_app.filter.len(), 1);
    assert_eq!(web_app.filter[0].filter_name, "audit");
    assert_eq!(web_app.filter[0].async_supported, Some(true));
    assert_eq!(web_app.filter[0].init_param[0].param_value, "info");
    assert_eq!(
        web_app.filter_mapping[0].dispatcher,
        [Dispatcher::Request, Dispatcher::Forward]
    );

    assert_eq!(web_app.servlet.len(), 1);
    assert_eq!(
        web_app.servlet[0].servlet_class.as_deref(),
        Some("org.example.web.CatalogServlet")
    );
    assert_eq!(web_app.servlet[0].load_on_startup, Some(1));
    assert_eq!(web_app.servlet_mapping[0].url_pattern, ["/catalog/*"]);
}

#[test]
fn reads_session_and_error_configuration() {
    let web_app: WebApp = from_xml_str(WEB_APP).unwrap();

    let session = web_app.session_config.as_ref().unwrap();
    assert_eq!(session.session_timeout, Some(30));
    let cookie = session.cookie_config.as_ref().unwrap();
    assert_eq!(cookie.name.as_deref(), Some("SID"));
    assert_eq!(cookie.http_only, Some(true));

    let welcome = web_app.welcome_file_list.as_ref().unwrap();
    assert_eq!(welcome.welcome_file, ["index.jsp", "index.html"]);

    assert_eq!(web_app.error_page[0].error_code, Some(404));
    assert_eq!(
        web_app.error_page[1].exception_type.as_deref(),
        Some("java.lang.IllegalStateException")
    );

    let jsp_config = web_app.jsp_config.as_ref().unwrap();
    assert_eq!(jsp_config.jsp_property_group[0].is_xml, Some(true));
}

#[test]
fn reads_the_security_configuration() {
    let web_app: WebApp = from_xml_str(WEB_APP).unwrap();

    let constraint = &web_app.security_constraint[0];
    assert_eq!(
        constraint.web_resource_collection[0].url_pattern,
        ["/admin/*"]
    );
    assert_eq!(
        constraint.auth_constraint.as_ref().unwrap().role_name,
        ["admin"]
    );
    assert_eq!(
        constraint
            .user_data_constraint
            .as_ref()
            .unwrap()
            .transport_guarantee,
        Some(TransportGuarantee::Confidential)
    );

    let login = web_app.login_config.as_ref().unwrap();
    assert_eq!(login.auth_method.as_deref(), Some("FORM"));
    assert_eq!(
        login.form_login_config.as_ref().unwrap().form_login_page,
        "/login.jsp"
    );
}

#[test]
fn reads_the_absolute_ordering() {
    let web_app: WebApp = from_xml_str(WEB_APP).unwrap();

    let ordering = web_app.absolute_ordering.as_ref().unwrap();
    assert_eq!(
        ordering.entries,
        [
            OrderingEntry::Name("core".to_string()),
            OrderingEntry::Others
        ]
    );
}

#[test]
fn web_app_round_trips_through_the_writer() {
    let parsed: WebApp = from_xml_str(WEB_APP).unwrap();
    let written = to_xml_string(&parsed).unwrap();
    let reparsed: WebApp = from_xml_str(&written).unwrap();

    assert_eq!(parsed, reparsed);
}

#[test]
fn fragment_keeps_its_name_and_relative_ordering() {
    let fragment: WebFragment = from_xml_str(WEB_FRAGMENT).unwrap();

    assert_eq!(fragment.name.as_deref(), Some("metrics"));

    let ordering = fragment.ordering.as_ref().unwrap();
    assert!(ordering.after.as_ref().unwrap().others);
    assert_eq!(ordering.before.as_ref().unwrap().name, ["audit"]);

    assert_eq!(fragment.web_app.servlet[0].servlet_name, "metrics");
    assert_eq!(
        fragment.web_app.listener[0].listener_class,
        "org.example.metrics.MetricsListener"
    );
}

#[test]
fn fragment_round_trips_through_the_writer() {
    let parsed: WebFragment = from_xml_str(WEB_FRAGMENT).unwrap();
    let written = to_xml_string(&parsed).unwrap();
    let reparsed: WebFragment = from_xml_str(&written).unwrap();

    assert_eq!(parsed, reparsed);
}
