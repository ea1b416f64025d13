//! Types shared by web.xml and web-fragment.xml: servlets, filters,
//! listeners, session and JSP configuration, security constraints.

use roxmltree::Node;

use crate::common::{RunAs, SecurityRoleRef};
use crate::error::DescriptorError;
use crate::lang::{Icon, Icons, Text, TextMap};
use crate::xml::{
    bool_of, close, element_children, id_of, number_of, open, skip_unexpected, text_of,
    write_all, write_icons, write_opt, write_opt_value, write_strings, write_text,
    write_text_map, WriteXml, XmlWriter,
};

/// filterType.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub filter_name: String,
    pub filter_class: Option<String>,
    pub async_supported: Option<bool>,
    pub init_param: Vec<crate::common::ParamValue>,
    pub id: Option<String>,
}

impl Filter {
    pub fn new(filter_name: impl Into<String>, filter_class: impl Into<String>) -> Self {
        Self {
            filter_name: filter_name.into(),
            filter_class: Some(filter_class.into()),
            ..Self::default()
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut filter = Filter {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    filter.description.add(Text::read(child));
                }
                "display-name" => {
                    filter.display_name.add(Text::read(child));
                }
                "icon" => {
                    filter.icon.add(Icon::read(child));
                }
                "filter-name" => filter.filter_name = text_of(child),
                "filter-class" => filter.filter_class = Some(text_of(child)),
                "async-supported" => filter.async_supported = Some(bool_of(child)?),
                "init-param" => filter
                    .init_param
                    .push(crate::common::ParamValue::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(filter)
    }
}

impl WriteXml for Filter {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_text(writer, "filter-name", &self.filter_name)?;
        write_opt(writer, "filter-class", self.filter_class.as_deref())?;
        write_opt_value(writer, "async-supported", self.async_supported)?;
        write_all(writer, "init-param", &self.init_param)?;
        close(writer, tag)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dispatcher {
    Forward,
    Include,
    Request,
    Async,
    Error,
}

impl Dispatcher {
    pub fn as_str(self) -> &'static str {
        match self {
            Dispatcher::Forward => "FORWARD",
            Dispatcher::Include => "INCLUDE",
            Dispatcher::Request => "REQUEST",
            Dispatcher::Async => "ASYNC",
            Dispatcher::Error => "ERROR",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "FORWARD" => Ok(Dispatcher::Forward),
            "INCLUDE" => Ok(Dispatcher::Include),
            "REQUEST" => Ok(Dispatcher::Request),
            "ASYNC" => Ok(Dispatcher::Async),
            "ERROR" => Ok(Dispatcher::Error),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

/// filter-mappingType: maps a filter onto url patterns and/or servlet names.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterMapping {
    pub filter_name: String,
    pub url_pattern: Vec<String>,
    pub servlet_name: Vec<String>,
    pub dispatcher: Vec<Dispatcher>,
    pub id: Option<String>,
}

impl FilterMapping {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut mapping = FilterMapping {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "filter-name" => mapping.filter_name = text_of(child),
                "url-pattern" => mapping.url_pattern.push(text_of(child)),
                "servlet-name" => mapping.servlet_name.push(text_of(child)),
                "dispatcher" => mapping.dispatcher.push(Dispatcher::read(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(mapping)
    }
}

impl WriteXml for FilterMapping {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "filter-name", &self.filter_name)?;
        write_strings(writer, "url-pattern", &self.url_pattern)?;
        write_strings(writer, "servlet-name", &self.servlet_name)?;
        for dispatcher in &self.dispatcher {
            write_text(writer, "dispatcher", dispatcher.as_str())?;
        }
        close(writer, tag)
    }
}

/// servletType.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Servlet {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub servlet_name: String,
    pub servlet_class: Option<String>,
    pub jsp_file: Option<String>,
    pub init_param: Vec<crate::common::ParamValue>,
    pub load_on_startup: Option<i32>,
    pub enabled: Option<bool>,
    pub async_supported: Option<bool>,
    pub run_as: Option<RunAs>,
    pub security_role_ref: Vec<SecurityRoleRef>,
    pub multipart_config: Option<MultipartConfig>,
    pub id: Option<String>,
}

impl Servlet {
    pub fn new(servlet_name: impl Into<String>, servlet_class: impl Into<String>) -> Self {
        Self {
            servlet_name: servlet_name.into(),
            servlet_class: Some(servlet_class.into()),
            ..Self::default()
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut servlet = Servlet {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    servlet.description.add(Text::read(child));
                }
                "display-name" => {
                    servlet.display_name.add(Text::read(child));
                }
                "icon" => {
                    servlet.icon.add(Icon::read(child));
                }
                "servlet-name" => servlet.servlet_name = text_of(child),
                "servlet-class" => servlet.servlet_class = Some(text_of(child)),
                "jsp-file" => servlet.jsp_file = Some(text_of(child)),
                "init-param" => servlet
                    .init_param
                    .push(crate::common::ParamValue::read(child)),
                "load-on-startup" => servlet.load_on_startup = Some(number_of(child)?),
                "enabled" => servlet.enabled = Some(bool_of(child)?),
                "async-supported" => servlet.async_supported = Some(bool_of(child)?),
                "run-as" => servlet.run_as = Some(RunAs::read(child)),
                "security-role-ref" => {
                    servlet.security_role_ref.push(SecurityRoleRef::read(child))
                }
                "multipart-config" => {
                    servlet.multipart_config = Some(MultipartConfig::read(child)?)
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(servlet)
    }
}

impl WriteXml for Servlet {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_text(writer, "servlet-name", &self.servlet_name)?;
        write_opt(writer, "servlet-class", self.servlet_class.as_deref())?;
        write_opt(writer, "jsp-file", self.jsp_file.as_deref())?;
        write_all(writer, "init-param", &self.init_param)?;
        write_opt_value(writer, "load-on-startup", self.load_on_startup)?;
        write_opt_value(writer, "enabled", self.enabled)?;
        write_opt_value(writer, "async-supported", self.async_supported)?;
        if let Some(run_as) = &self.run_as {
            run_as.write_xml(writer, "run-as")?;
        }
        write_all(writer, "security-role-ref", &self.security_role_ref)?;
        if let Some(config) = &self.multipart_config {
            config.write_xml(writer, "multipart-config")?;
        }
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServletMapping {
    pub servlet_name: String,
    pub url_pattern: Vec<String>,
    pub id: Option<String>,
}

impl ServletMapping {
    pub(crate) fn read(node: Node) -> Self {
        let mut mapping = ServletMapping {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "servlet-name" => mapping.servlet_name = text_of(child),
                "url-pattern" => mapping.url_pattern.push(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        mapping
    }
}

impl WriteXml for ServletMapping {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "servlet-name", &self.servlet_name)?;
        write_strings(writer, "url-pattern", &self.url_pattern)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipartConfig {
    pub location: Option<String>,
    pub max_file_size: Option<i64>,
    pub max_request_size: Option<i64>,
    pub file_size_threshold: Option<i32>,
}

impl MultipartConfig {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut config = MultipartConfig::default();
        for child in element_children(node) {
            match child.tag_name().name() {
                "location" => config.location = Some(text_of(child)),
                "max-file-size" => config.max_file_size = Some(number_of(child)?),
                "max-request-size" => config.max_request_size = Some(number_of(child)?),
                "file-size-threshold" => {
                    config.file_size_threshold = Some(number_of(child)?)
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(config)
    }
}

impl WriteXml for MultipartConfig {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, None)?;
        write_opt(writer, "location", self.location.as_deref())?;
        write_opt_value(writer, "max-file-size", self.max_file_size)?;
        write_opt_value(writer, "max-request-size", self.max_request_size)?;
        write_opt_value(writer, "file-size-threshold", self.file_size_threshold)?;
        close(writer, tag)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrackingMode {
    Cookie,
    Url,
    Ssl,
}

impl TrackingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TrackingMode::Cookie => "COOKIE",
            TrackingMode::Url => "URL",
            TrackingMode::Ssl => "SSL",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "COOKIE" => Ok(TrackingMode::Cookie),
            "URL" => Ok(TrackingMode::Url),
            "SSL" => Ok(TrackingMode::Ssl),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CookieConfig {
    pub name: Option<String>,
    pub domain: Option<String>,
    pub path: Option<String>,
    pub comment: Option<String>,
    pub http_only: Option<bool>,
    pub secure: Option<bool>,
    pub max_age: Option<i32>,
    pub id: Option<String>,
}

impl CookieConfig {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut config = CookieConfig {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "name" => config.name = Some(text_of(child)),
                "domain" => config.domain = Some(text_of(child)),
                "path" => config.path = Some(text_of(child)),
                "comment" => config.comment = Some(text_of(child)),
                "http-only" => config.http_only = Some(bool_of(child)?),
                "secure" => config.secure = Some(bool_of(child)?),
                "max-age" => config.max_age = Some(number_of(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(config)
    }
}

impl WriteXml for CookieConfig {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_opt(writer, "name", self.name.as_deref())?;
        write_opt(writer, "domain", self.domain.as_deref())?;
        write_opt(writer, "path", self.path.as_deref())?;
        write_opt(writer, "comment", self.comment.as_deref())?;
        write_opt_value(writer, "http-only", self.http_only)?;
        write_opt_value(writer, "secure", self.secure)?;
        write_opt_value(writer, "max-age", self.max_age)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionConfig {
    pub session_timeout: Option<i32>,
    pub cookie_config: Option<CookieConfig>,
    pub tracking_mode: Vec<TrackingMode>,
    pub id: Option<String>,
}

impl SessionConfig {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut config = SessionConfig {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "session-timeout" => config.session_timeout = Some(number_of(child)?),
                "cookie-config" => config.cookie_config = Some(CookieConfig::read(child)?),
                "tracking-mode" => config.tracking_mode.push(TrackingMode::read(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(config)
    }
}

impl WriteXml for SessionConfig {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_opt_value(writer, "session-timeout", self.session_timeout)?;
        if let Some(config) = &self.cookie_config {
            config.write_xml(writer, "cookie-config")?;
        }
        for mode in &self.tracking_mode {
            write_text(writer, "tracking-mode", mode.as_str())?;
        }
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MimeMapping {
    pub extension: String,
    pub mime_type: String,
    pub id: Option<String>,
}

impl MimeMapping {
    pub(crate) fn read(node: Node) -> Self {
        let mut mapping = MimeMapping {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "extension" => mapping.extension = text_of(child),
                "mime-type" => mapping.mime_type = text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        mapping
    }
}

impl WriteXml for MimeMapping {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "extension", &self.extension)?;
        write_text(writer, "mime-type", &self.mime_type)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WelcomeFileList {
    pub welcome_file: Vec<String>,
    pub id: Option<String>,
}

impl WelcomeFileList {
    pub(crate) fn read(node: Node) -> Self {
        let mut list = WelcomeFileList {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "welcome-file" => list.welcome_file.push(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        list
    }
}

impl WriteXml for WelcomeFileList {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_strings(writer, "welcome-file", &self.welcome_file)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorPage {
    pub error_code: Option<i32>,
    pub exception_type: Option<String>,
    pub location: String,
    pub id: Option<String>,
}

impl ErrorPage {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut page = ErrorPage {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "error-code" => page.error_code = Some(number_of(child)?),
                "exception-type" => page.exception_type = Some(text_of(child)),
                "location" => page.location = text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(page)
    }
}

impl WriteXml for ErrorPage {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_opt_value(writer, "error-code", self.error_code)?;
        write_opt(writer, "exception-type", self.exception_type.as_deref())?;
        write_text(writer, "location", &self.location)?;
        close(writer, tag)
    }
}

/// The servlet 2.3 taglib element, also nested in jsp-config from 2.4 on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Taglib {
    pub taglib_uri: String,
    pub taglib_location: String,
    pub id: Option<String>,
}

impl Taglib {
    pub(crate) fn read(node: Node) -> Self {
        let mut taglib = Taglib {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "taglib-uri" => taglib.taglib_uri = text_of(child),
                "taglib-location" => taglib.taglib_location = text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        taglib
    }
}

impl WriteXml for Taglib {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "taglib-uri", &self.taglib_uri)?;
        write_text(writer, "taglib-location", &self.taglib_location)?;
        close(writer, tag)
    }
}

/// jsp-property-groupType.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JspPropertyGroup {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub url_pattern: Vec<String>,
    pub el_ignored: Option<bool>,
    pub page_encoding: Option<String>,
    pub scripting_invalid: Option<bool>,
    pub is_xml: Option<bool>,
    pub include_prelude: Vec<String>,
    pub include_coda: Vec<String>,
    pub deferred_syntax_allowed_as_literal: Option<bool>,
    pub trim_directive_whitespaces: Option<bool>,
    pub default_content_type: Option<String>,
    pub buffer: Option<String>,
    pub error_on_undeclared_namespace: Option<bool>,
    pub id: Option<String>,
}

impl JspPropertyGroup {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut group = JspPropertyGroup {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    group.description.add(Text::read(child));
                }
                "display-name" => {
                    group.display_name.add(Text::read(child));
                }
                "icon" => {
                    group.icon.add(Icon::read(child));
                }
                "url-pattern" => group.url_pattern.push(text_of(child)),
                "el-ignored" => group.el_ignored = Some(bool_of(child)?),
                "page-encoding" => group.page_encoding = Some(text_of(child)),
                "scripting-invalid" => group.scripting_invalid = Some(bool_of(child)?),
                "is-xml" => group.is_xml = Some(bool_of(child)?),
                "include-prelude" => group.include_prelude.push(text_of(child)),
                "include-coda" => group.include_coda.push(text_of(child)),
                "deferred-syntax-allowed-as-literal" => {
                    group.deferred_syntax_allowed_as_literal = Some(bool_of(child)?)
                }
                "trim-directive-whitespaces" => {
                    group.trim_directive_whitespaces = Some(bool_of(child)?)
                }
                "default-content-type" => group.default_content_type = Some(text_of(child)),
                "buffer" => group.buffer = Some(text_of(child)),
                "error-on-undeclared-namespace" => {
                    group.error_on_undeclared_namespace = Some(bool_of(child)?)
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(group)
    }
}

impl WriteXml for JspPropertyGroup {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_strings(writer, "url-pattern", &self.url_pattern)?;
        write_opt_value(writer, "el-ignored", self.el_ignored)?;
        write_opt(writer, "page-encoding", self.page_encoding.as_deref())?;
        write_opt_value(writer, "scripting-invalid", self.scripting_invalid)?;
        write_opt_value(writer, "is-xml", self.is_xml)?;
        write_strings(writer, "include-prelude", &self.include_prelude)?;
        write_strings(writer, "include-coda", &self.include_coda)?;
        write_opt_value(
            writer,
            "deferred-syntax-allowed-as-literal",
            self.deferred_syntax_allowed_as_literal,
        )?;
        write_opt_value(
            writer,
            "trim-directive-whitespaces",
            self.trim_directive_whitespaces,
        )?;
        write_opt(
            writer,
            "default-content-type",
            self.default_content_type.as_deref(),
        )?;
        write_opt(writer, "buffer", self.buffer.as_deref())?;
        write_opt_value(
            writer,
            "error-on-undeclared-namespace",
            self.error_on_undeclared_namespace,
        )?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct JspConfig {
    pub taglib: Vec<Taglib>,
    pub jsp_property_group: Vec<JspPropertyGroup>,
    pub id: Option<String>,
}

impl JspConfig {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut config = JspConfig {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "taglib" => config.taglib.push(Taglib::read(child)),
                "jsp-property-group" => {
                    config.jsp_property_group.push(JspPropertyGroup::read(child)?)
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(config)
    }
}

impl WriteXml for JspConfig {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_all(writer, "taglib", &self.taglib)?;
        write_all(writer, "jsp-property-group", &self.jsp_property_group)?;
        close(writer, tag)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransportGuarantee {
    None,
    Integral,
    Confidential,
}

impl TransportGuarantee {
    pub fn as_str(self) -> &'static str {
        match self {
            TransportGuarantee::None => "NONE",
            TransportGuarantee::Integral => "INTEGRAL",
            TransportGuarantee::Confidential => "CONFIDENTIAL",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "NONE" => Ok(TransportGuarantee::None),
            "INTEGRAL" => Ok(TransportGuarantee::Integral),
            "CONFIDENTIAL" => Ok(TransportGuarantee::Confidential),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WebResourceCollection {
    pub web_resource_name: String,
    pub description: TextMap,
    pub url_pattern: Vec<String>,
    pub http_method: Vec<String>,
    pub http_method_omission: Vec<String>,
    pub id: Option<String>,
}

impl WebResourceCollection {
    pub(crate) fn read(node: Node) -> Self {
        let mut collection = WebResourceCollection {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "web-resource-name" => collection.web_resource_name = text_of(child),
                "description" => {
                    collection.description.add(Text::read(child));
                }
                "url-pattern" => collection.url_pattern.push(text_of(child)),
                "http-method" => collection.http_method.push(text_of(child)),
                "http-method-omission" => {
                    collection.http_method_omission.push(text_of(child))
                }
                _ => skip_unexpected(node, child),
            }
        }
        collection
    }
}

impl WriteXml for WebResourceCollection {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "web-resource-name", &self.web_resource_name)?;
        write_text_map(writer, "description", &self.description)?;
        write_strings(writer, "url-pattern", &self.url_pattern)?;
        write_strings(writer, "http-method", &self.http_method)?;
        write_strings(writer, "http-method-omission", &self.http_method_omission)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthConstraint {
    pub description: TextMap,
    pub role_name: Vec<String>,
    pub id: Option<String>,
}

impl AuthConstraint {
    pub(crate) fn read(node: Node) -> Self {
        let mut constraint = AuthConstraint {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    constraint.description.add(Text::read(child));
                }
                "role-name" => constraint.role_name.push(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        constraint
    }
}

impl WriteXml for AuthConstraint {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_strings(writer, "role-name", &self.role_name)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserDataConstraint {
    pub description: TextMap,
    pub transport_guarantee: Option<TransportGuarantee>,
    pub id: Option<String>,
}

impl UserDataConstraint {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut constraint = UserDataConstraint {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    constraint.description.add(Text::read(child));
                }
                "transport-guarantee" => {
                    constraint.transport_guarantee = Some(TransportGuarantee::read(child)?)
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(constraint)
    }
}

impl WriteXml for UserDataConstraint {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_opt(
            writer,
            "transport-guarantee",
            self.transport_guarantee.map(TransportGuarantee::as_str),
        )?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SecurityConstraint {
    pub display_name: TextMap,
    pub web_resource_collection: Vec<WebResourceCollection>,
    pub auth_constraint: Option<AuthConstraint>,
    pub user_data_constraint: Option<UserDataConstraint>,
    pub id: Option<String>,
}

impl SecurityConstraint {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut constraint = SecurityConstraint {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "display-name" => {
                    constraint.display_name.add(Text::read(child));
                }
                "web-resource-collection" => constraint
                    .web_resource_collection
                    .push(WebResourceCollection::read(child)),
                "auth-constraint" => {
                    constraint.auth_constraint = Some(AuthConstraint::read(child))
                }
                "user-data-constraint" => {
                    constraint.user_data_constraint = Some(UserDataConstraint::read(child)?)
                }
                _ => skip_unexpected(node, child),
            }
        }
        Ok(constraint)
    }
}

impl WriteXml for SecurityConstraint {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_all(
            writer,
            "web-resource-collection",
            &self.web_resource_collection,
        )?;
        if let Some(auth) = &self.auth_constraint {
            auth.write_xml(writer, "auth-constraint")?;
        }
        if let Some(data) = &self.user_data_constraint {
            data.write_xml(writer, "user-data-constraint")?;
        }
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormLoginConfig {
    pub form_login_page: String,
    pub form_error_page: String,
    pub id: Option<String>,
}

impl FormLoginConfig {
    pub(crate) fn read(node: Node) -> Self {
        let mut config = FormLoginConfig {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "form-login-page" => config.form_login_page = text_of(child),
                "form-error-page" => config.form_error_page = text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        config
    }
}

impl WriteXml for FormLoginConfig {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "form-login-page", &self.form_login_page)?;
        write_text(writer, "form-error-page", &self.form_error_page)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginConfig {
    pub auth_method: Option<String>,
    pub realm_name: Option<String>,
    pub form_login_config: Option<FormLoginConfig>,
    pub id: Option<String>,
}

impl LoginConfig {
    pub(crate) fn read(node: Node) -> Self {
        let mut config = LoginConfig {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "auth-method" => config.auth_method = Some(text_of(child)),
                "realm-name" => config.realm_name = Some(text_of(child)),
                "form-login-config" => {
                    config.form_login_config = Some(FormLoginConfig::read(child))
                }
                _ => skip_unexpected(node, child),
            }
        }
        config
    }
}

impl WriteXml for LoginConfig {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_opt(writer, "auth-method", self.auth_method.as_deref())?;
        write_opt(writer, "realm-name", self.realm_name.as_deref())?;
        if let Some(form) = &self.form_login_config {
            form.write_xml(writer, "form-login-config")?;
        }
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocaleEncodingMapping {
    pub locale: String,
    pub encoding: String,
    pub id: Option<String>,
}

impl LocaleEncodingMapping {
    pub(crate) fn read(node: Node) -> Self {
        let mut mapping = LocaleEncodingMapping {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "locale" => mapping.locale = text_of(child),
                "encoding" => mapping.encoding = text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        mapping
    }
}

impl WriteXml for LocaleEncodingMapping {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "locale", &self.locale)?;
        write_text(writer, "encoding", &self.encoding)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocaleEncodingMappingList {
    pub locale_encoding_mapping: Vec<LocaleEncodingMapping>,
    pub id: Option<String>,
}

impl LocaleEncodingMappingList {
    pub(crate) fn read(node: Node) -> Self {
        let mut list = LocaleEncodingMappingList {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "locale-encoding-mapping" => list
                    .locale_encoding_mapping
                    .push(LocaleEncodingMapping::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        list
    }
}

impl WriteXml for LocaleEncodingMappingList {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_all(
            writer,
            "locale-encoding-mapping",
            &self.locale_encoding_mapping,
        )?;
        close(writer, tag)
    }
}
