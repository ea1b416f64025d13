//! Model, parser and writer for Java EE / Jakarta EE deployment descriptors:
//! application.xml, application-client.xml, ejb-jar.xml, ra.xml, web.xml,
//! web-fragment.xml, webservices.xml, the JAX-RPC mapping file,
//! faces-config.xml and JSP .tld files.
//!
//! Each schema complex type is mirrored by a plain struct with public fields;
//! reading walks a [`roxmltree`] document, writing emits [`quick_xml`]
//! events in schema order. Nothing here validates: required elements,
//! cardinalities and cross-references are the consuming deployer's business.

pub mod app_client;
pub mod application;
pub mod beans;
pub mod common;
pub mod connector;
pub mod connector10;
pub mod ejb_jar;
pub mod env;
pub mod error;
pub mod faces;
pub mod java_wsdl_mapping;
pub mod keyed;
pub mod lang;
pub mod qname;
pub mod service_ref;
pub mod tld;
pub mod web;
pub mod web_common;
pub mod webservices;

mod xml;

pub use app_client::ApplicationClient;
pub use application::{Application, Module, Web};
pub use beans::{
    ActivationConfig, EntityBean, MessageDrivenBean, SessionBean, SessionType, TransactionType,
};
pub use connector::{Connector, ResourceAdapter};
pub use connector10::Connector10;
pub use ejb_jar::{
    ApplicationException, AssemblyDescriptor, EjbJar, EnterpriseBean, Interceptor, Method,
    MethodParams,
};
pub use env::{DataSource, EnvEntry, IsolationLevel, JmsConnectionFactory, JmsDestination};
pub use error::DescriptorError;
pub use faces::FacesConfig;
pub use java_wsdl_mapping::{JavaWsdlMapping, ServiceEndpointInterfaceMapping};
pub use keyed::{Keyed, KeyedCollection};
pub use lang::{Icon, Icons, Text, TextMap};
pub use qname::{
    format_prefixed_qname, parse_prefixed_qname, NamespaceResolver, QName,
};
pub use service_ref::{Handler, HandlerChain, HandlerChains, ServiceRef};
pub use tld::TldTaglib;
pub use web::{WebApp, WebFragment};
pub use web_common::{Filter, Servlet, TransportGuarantee};
pub use webservices::{PortComponent, Webservices};

use quick_xml::Writer;
use roxmltree::Node;

/// The Java EE 5+ descriptor namespace. Reading matches element local names
/// only, so the J2EE 1.4 and Jakarta generations of the same grammar bind to
/// the same types.
pub const JAVAEE_NAMESPACE: &str = "http://java.sun.com/xml/ns/javaee";

/// A deployment-descriptor document root.
pub trait Descriptor: Sized {
    const TAG_NAME: &'static str;
    const NAMESPACE: &'static str;

    /// Maps the root element of a parsed document into the model.
    fn read(node: Node) -> Result<Self, DescriptorError>;

    /// Writes the document, root element included, as XML events.
    fn write(&self, writer: &mut Writer<Vec<u8>>) -> Result<(), DescriptorError>;
}

/// Reads a descriptor from an already-parsed document, rejecting a document
/// whose root element is not the expected one.
pub fn read_descriptor<T: Descriptor>(
    document: &roxmltree::Document,
) -> Result<T, DescriptorError> {
    let root = document.root_element();
    if root.tag_name().name() != T::TAG_NAME {
        return Err(DescriptorError::UnexpectedRoot {
            expected: T::TAG_NAME,
            found: root.tag_name().name().to_string(),
        });
    }
    T::read(root)
}

/// Parses a descriptor document from its XML text.
pub fn from_xml_str<T: Descriptor>(source: &str) -> Result<T, DescriptorError> {
    let document = roxmltree::Document::parse(source)?;
    read_descriptor(&document)
}

/// Serializes a descriptor back to XML text.
pub fn to_xml_string<T: Descriptor>(descriptor: &T) -> Result<String, DescriptorError> {
    let mut writer = Writer::new(Vec::new());
    descriptor.write(&mut writer)?;
    Ok(String::from_utf8(writer.into_inner()).expect("XML writer emits UTF-8"))
}
