//! JSP tag library descriptors (.tld files).

use quick_xml::events::{BytesEnd, Event};
use roxmltree::Node;

use crate::common::{Listener, ParamValue};
use crate::error::DescriptorError;
use crate::lang::{Icon, Icons, Text, TextMap};
use crate::xml::{
    bool_of, close, collapsed, element_children, element_start, id_of, open, skip_unexpected,
    text_of, write_all, write_icons, write_opt, write_opt_value, write_text, write_text_map,
    WriteXml, XmlWriter,
};
use crate::{Descriptor, JAVAEE_NAMESPACE};

/// tldTaglibType: the root of a .tld file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TldTaglib {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub tlib_version: Option<String>,
    pub jsp_version: Option<String>,
    pub short_name: Option<String>,
    pub uri: Option<String>,
    pub validator: Option<TldValidator>,
    pub listener: Vec<Listener>,
    pub tag: Vec<Tag>,
    pub tag_file: Vec<TagFile>,
    pub function: Vec<Function>,
    pub version: Option<String>,
    pub id: Option<String>,
}

impl Descriptor for TldTaglib {
    const TAG_NAME: &'static str = "taglib";
    const NAMESPACE: &'static str = JAVAEE_NAMESPACE;

    fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut taglib = TldTaglib {
            version: node.attribute("version").map(collapsed),
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    taglib.description.add(Text::read(child));
                }
                "display-name" => {
                    taglib.display_name.add(Text::read(child));
                }
                "icon" => {
                    taglib.icon.add(Icon::read(child));
                }
                "tlib-version" => taglib.tlib_version = Some(text_of(child)),
                "jsp-version" => taglib.jsp_version = Some(text_of(child)),
                "short-name" => taglib.short_name = Some(text_of(child)),
                "uri" => taglib.uri = Some(text_of(child)),
                "validator" => taglib.validator = Some(TldValidator::read(child)),
                "listener" => taglib.listener.push(Listener::read(child)),
                "tag" => taglib.tag.push(Tag::read(child)?),
                "tag-file" => taglib.tag_file.push(TagFile::read(child)),
                "function" => taglib.function.push(Function::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(taglib)
    }

    fn write(&self, writer: &mut XmlWriter) -> Result<(), DescriptorError> {
        let mut start = element_start(Self::TAG_NAME, self.id.as_deref());
        start.push_attribute(("xmlns", Self::NAMESPACE));
        if let Some(version) = &self.version {
            start.push_attribute(("version", version.as_str()));
        }
        writer.write_event(Event::Start(start))?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_opt(writer, "tlib-version", self.tlib_version.as_deref())?;
        write_opt(writer, "jsp-version", self.jsp_version.as_deref())?;
        write_opt(writer, "short-name", self.short_name.as_deref())?;
        write_opt(writer, "uri", self.uri.as_deref())?;
        if let Some(validator) = &self.validator {
            validator.write_xml(writer, "validator")?;
        }
        write_all(writer, "listener", &self.listener)?;
        write_all(writer, "tag", &self.tag)?;
        write_all(writer, "tag-file", &self.tag_file)?;
        write_all(writer, "function", &self.function)?;
        writer.write_event(Event::End(BytesEnd::new(Self::TAG_NAME)))?;
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TldValidator {
    pub description: TextMap,
    pub validator_class: String,
    pub init_param: Vec<ParamValue>,
    pub id: Option<String>,
}

impl TldValidator {
    pub(crate) fn read(node: Node) -> Self {
        let mut validator = TldValidator {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    validator.description.add(Text::read(child));
                }
                "validator-class" => validator.validator_class = text_of(child),
                "init-param" => validator.init_param.push(ParamValue::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        validator
    }
}

impl WriteXml for TldValidator {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(writer, "validator-class", &self.validator_class)?;
        write_all(writer, "init-param", &self.init_param)?;
        close(writer, tag)
    }
}

/// body-contentType.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BodyContent {
    TagDependent,
    Jsp,
    Empty,
    Scriptless,
}

impl BodyContent {
    pub fn as_str(self) -> &'static str {
        match self {
            BodyContent::TagDependent => "tagdependent",
            BodyContent::Jsp => "JSP",
            BodyContent::Empty => "empty",
            BodyContent::Scriptless => "scriptless",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "tagdependent" => Ok(BodyContent::TagDependent),
            "JSP" => Ok(BodyContent::Jsp),
            "empty" => Ok(BodyContent::Empty),
            "scriptless" => Ok(BodyContent::Scriptless),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

/// variable-scopeType.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VariableScope {
    Nested,
    AtBegin,
    AtEnd,
}

impl VariableScope {
    pub fn as_str(self) -> &'static str {
        match self {
            VariableScope::Nested => "NESTED",
            VariableScope::AtBegin => "AT_BEGIN",
            VariableScope::AtEnd => "AT_END",
        }
    }

    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let text = text_of(node);
        match text.as_str() {
            "NESTED" => Ok(VariableScope::Nested),
            "AT_BEGIN" => Ok(VariableScope::AtBegin),
            "AT_END" => Ok(VariableScope::AtEnd),
            _ => Err(DescriptorError::invalid_value(node, &text)),
        }
    }
}

/// tldTagType.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tag {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub name: String,
    pub tag_class: String,
    pub tei_class: Option<String>,
    pub body_content: Option<BodyContent>,
    pub variable: Vec<TagVariable>,
    pub attribute: Vec<TagAttribute>,
    pub dynamic_attributes: Option<bool>,
    pub example: Option<String>,
    pub id: Option<String>,
}

impl Tag {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut tag = Tag {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    tag.description.add(Text::read(child));
                }
                "display-name" => {
                    tag.display_name.add(Text::read(child));
                }
                "icon" => {
                    tag.icon.add(Icon::read(child));
                }
                "name" => tag.name = text_of(child),
                "tag-class" => tag.tag_class = text_of(child),
                "tei-class" => tag.tei_class = Some(text_of(child)),
                "body-content" => tag.body_content = Some(BodyContent::read(child)?),
                "variable" => tag.variable.push(TagVariable::read(child)?),
                "attribute" => tag.attribute.push(TagAttribute::read(child)?),
                "dynamic-attributes" => tag.dynamic_attributes = Some(bool_of(child)?),
                "example" => tag.example = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(tag)
    }
}

impl WriteXml for Tag {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_text(writer, "name", &self.name)?;
        write_text(writer, "tag-class", &self.tag_class)?;
        write_opt(writer, "tei-class", self.tei_class.as_deref())?;
        write_opt(
            writer,
            "body-content",
            self.body_content.map(BodyContent::as_str),
        )?;
        write_all(writer, "variable", &self.variable)?;
        write_all(writer, "attribute", &self.attribute)?;
        write_opt_value(writer, "dynamic-attributes", self.dynamic_attributes)?;
        write_opt(writer, "example", self.example.as_deref())?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TagVariable {
    pub description: TextMap,
    pub name_given: Option<String>,
    pub name_from_attribute: Option<String>,
    pub variable_class: Option<String>,
    pub declare: Option<bool>,
    pub scope: Option<VariableScope>,
    pub id: Option<String>,
}

impl TagVariable {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut variable = TagVariable {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    variable.description.add(Text::read(child));
                }
                "name-given" => variable.name_given = Some(text_of(child)),
                "name-from-attribute" => {
                    variable.name_from_attribute = Some(text_of(child))
                }
                "variable-class" => variable.variable_class = Some(text_of(child)),
                "declare" => variable.declare = Some(bool_of(child)?),
                "scope" => variable.scope = Some(VariableScope::read(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(variable)
    }
}

impl WriteXml for TagVariable {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_opt(writer, "name-given", self.name_given.as_deref())?;
        write_opt(
            writer,
            "name-from-attribute",
            self.name_from_attribute.as_deref(),
        )?;
        write_opt(writer, "variable-class", self.variable_class.as_deref())?;
        write_opt_value(writer, "declare", self.declare)?;
        write_opt(writer, "scope", self.scope.map(VariableScope::as_str))?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TldDeferredValue {
    pub value_type: Option<String>,
    pub id: Option<String>,
}

impl TldDeferredValue {
    pub(crate) fn read(node: Node) -> Self {
        let mut value = TldDeferredValue {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "type" => value.value_type = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        value
    }
}

impl WriteXml for TldDeferredValue {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_opt(writer, "type", self.value_type.as_deref())?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TldDeferredMethod {
    pub method_signature: Option<String>,
    pub id: Option<String>,
}

impl TldDeferredMethod {
    pub(crate) fn read(node: Node) -> Self {
        let mut method = TldDeferredMethod {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "method-signature" => method.method_signature = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        method
    }
}

impl WriteXml for TldDeferredMethod {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_opt(writer, "method-signature", self.method_signature.as_deref())?;
        close(writer, tag)
    }
}

/// tldAttributeType.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TagAttribute {
    pub description: TextMap,
    pub name: String,
    pub required: Option<bool>,
    pub rtexprvalue: Option<bool>,
    pub attribute_type: Option<String>,
    pub deferred_value: Option<TldDeferredValue>,
    pub deferred_method: Option<TldDeferredMethod>,
    pub fragment: Option<bool>,
    pub id: Option<String>,
}

impl TagAttribute {
    pub(crate) fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut attribute = TagAttribute {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    attribute.description.add(Text::read(child));
                }
                "name" => attribute.name = text_of(child),
                "required" => attribute.required = Some(bool_of(child)?),
                "rtexprvalue" => attribute.rtexprvalue = Some(bool_of(child)?),
                "type" => attribute.attribute_type = Some(text_of(child)),
                "deferred-value" => {
                    attribute.deferred_value = Some(TldDeferredValue::read(child))
                }
                "deferred-method" => {
                    attribute.deferred_method = Some(TldDeferredMethod::read(child))
                }
                "fragment" => attribute.fragment = Some(bool_of(child)?),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(attribute)
    }
}

impl WriteXml for TagAttribute {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(writer, "name", &self.name)?;
        write_opt_value(writer, "required", self.required)?;
        write_opt_value(writer, "rtexprvalue", self.rtexprvalue)?;
        write_opt(writer, "type", self.attribute_type.as_deref())?;
        if let Some(value) = &self.deferred_value {
            value.write_xml(writer, "deferred-value")?;
        }
        if let Some(method) = &self.deferred_method {
            method.write_xml(writer, "deferred-method")?;
        }
        write_opt_value(writer, "fragment", self.fragment)?;
        close(writer, tag)
    }
}

/// tldTagFileType.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TagFile {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub name: String,
    pub path: String,
    pub example: Option<String>,
    pub id: Option<String>,
}

impl TagFile {
    pub(crate) fn read(node: Node) -> Self {
        let mut file = TagFile {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    file.description.add(Text::read(child));
                }
                "display-name" => {
                    file.display_name.add(Text::read(child));
                }
                "icon" => {
                    file.icon.add(Icon::read(child));
                }
                "name" => file.name = text_of(child),
                "path" => file.path = text_of(child),
                "example" => file.example = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        file
    }
}

impl WriteXml for TagFile {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_text(writer, "name", &self.name)?;
        write_text(writer, "path", &self.path)?;
        write_opt(writer, "example", self.example.as_deref())?;
        close(writer, tag)
    }
}

/// tldFunctionType.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Function {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub name: String,
    pub function_class: String,
    pub function_signature: String,
    pub example: Option<String>,
    pub id: Option<String>,
}

impl Function {
    pub(crate) fn read(node: Node) -> Self {
        let mut function = Function {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    function.description.add(Text::read(child));
                }
                "display-name" => {
                    function.display_name.add(Text::read(child));
                }
                "icon" => {
                    function.icon.add(Icon::read(child));
                }
                "name" => function.name = text_of(child),
                "function-class" => function.function_class = text_of(child),
                "function-signature" => function.function_signature = text_of(child),
                "example" => function.example = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        function
    }
}

impl WriteXml for Function {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_text(writer, "name", &self.name)?;
        write_text(writer, "function-class", &self.function_class)?;
        write_text(writer, "function-signature", &self.function_signature)?;
        write_opt(writer, "example", self.example.as_deref())?;
        close(writer, tag)
    }
}
