//! Small schema types shared across the application, ejb-jar and web
//! descriptor families.

use roxmltree::Node;

use crate::error::DescriptorError;
use crate::keyed::Keyed;
use crate::lang::{Icon, Icons, Text, TextMap};
use crate::xml::{
    close, element_children, id_of, open, raw_text_of, skip_unexpected, text_of, write_icons,
    write_opt, write_text, write_text_map, WriteXml, XmlWriter,
};

/// param-valueType: context-param, init-param and friends.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamValue {
    pub description: TextMap,
    pub param_name: String,
    pub param_value: String,
    pub id: Option<String>,
}

impl ParamValue {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            param_name: name.into(),
            param_value: value.into(),
            ..Self::default()
        }
    }

    pub(crate) fn read(node: Node) -> Self {
        let mut param = ParamValue {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    param.description.add(Text::read(child));
                }
                "param-name" => param.param_name = text_of(child),
                "param-value" => param.param_value = raw_text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        param
    }
}

impl WriteXml for ParamValue {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(writer, "param-name", &self.param_name)?;
        write_text(writer, "param-value", &self.param_value)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SecurityRole {
    pub description: TextMap,
    pub role_name: String,
    pub id: Option<String>,
}

impl SecurityRole {
    pub fn new(role_name: impl Into<String>) -> Self {
        Self {
            role_name: role_name.into(),
            ..Self::default()
        }
    }

    pub(crate) fn read(node: Node) -> Self {
        let mut role = SecurityRole {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    role.description.add(Text::read(child));
                }
                "role-name" => role.role_name = text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        role
    }
}

impl WriteXml for SecurityRole {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(writer, "role-name", &self.role_name)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SecurityRoleRef {
    pub description: TextMap,
    pub role_name: String,
    pub role_link: Option<String>,
    pub id: Option<String>,
}

impl SecurityRoleRef {
    pub(crate) fn read(node: Node) -> Self {
        let mut role_ref = SecurityRoleRef {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    role_ref.description.add(Text::read(child));
                }
                "role-name" => role_ref.role_name = text_of(child),
                "role-link" => role_ref.role_link = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        role_ref
    }
}

impl WriteXml for SecurityRoleRef {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(writer, "role-name", &self.role_name)?;
        write_opt(writer, "role-link", self.role_link.as_deref())?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunAs {
    pub description: TextMap,
    pub role_name: String,
    pub id: Option<String>,
}

impl RunAs {
    pub(crate) fn read(node: Node) -> Self {
        let mut run_as = RunAs {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    run_as.description.add(Text::read(child));
                }
                "role-name" => run_as.role_name = text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        run_as
    }
}

impl WriteXml for RunAs {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text(writer, "role-name", &self.role_name)?;
        close(writer, tag)
    }
}

/// lifecycle-callbackType: post-construct, pre-destroy, post-activate,
/// pre-passivate. The class is absent when the callback lives on the bean
/// class itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LifecycleCallback {
    pub lifecycle_callback_class: Option<String>,
    pub lifecycle_callback_method: String,
}

impl LifecycleCallback {
    pub fn new(class: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            lifecycle_callback_class: Some(class.into()),
            lifecycle_callback_method: method.into(),
        }
    }

    pub(crate) fn read(node: Node) -> Self {
        let mut callback = LifecycleCallback::default();
        for child in element_children(node) {
            match child.tag_name().name() {
                "lifecycle-callback-class" => {
                    callback.lifecycle_callback_class = Some(text_of(child))
                }
                "lifecycle-callback-method" => {
                    callback.lifecycle_callback_method = text_of(child)
                }
                _ => skip_unexpected(node, child),
            }
        }
        callback
    }
}

impl WriteXml for LifecycleCallback {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, None)?;
        write_opt(
            writer,
            "lifecycle-callback-class",
            self.lifecycle_callback_class.as_deref(),
        )?;
        write_text(
            writer,
            "lifecycle-callback-method",
            &self.lifecycle_callback_method,
        )?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageDestination {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub message_destination_name: String,
    pub mapped_name: Option<String>,
    pub lookup_name: Option<String>,
    pub id: Option<String>,
}

impl Keyed for MessageDestination {
    type Key = String;

    fn key(&self) -> String {
        self.message_destination_name.clone()
    }
}

impl MessageDestination {
    pub(crate) fn read(node: Node) -> Self {
        let mut destination = MessageDestination {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    destination.description.add(Text::read(child));
                }
                "display-name" => {
                    destination.display_name.add(Text::read(child));
                }
                "icon" => {
                    destination.icon.add(Icon::read(child));
                }
                "message-destination-name" => {
                    destination.message_destination_name = text_of(child)
                }
                "mapped-name" => destination.mapped_name = Some(text_of(child)),
                "lookup-name" => destination.lookup_name = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        destination
    }
}

impl WriteXml for MessageDestination {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_text(
            writer,
            "message-destination-name",
            &self.message_destination_name,
        )?;
        write_opt(writer, "mapped-name", self.mapped_name.as_deref())?;
        write_opt(writer, "lookup-name", self.lookup_name.as_deref())?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Listener {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub listener_class: String,
    pub id: Option<String>,
}

impl Listener {
    pub fn new(listener_class: impl Into<String>) -> Self {
        Self {
            listener_class: listener_class.into(),
            ..Self::default()
        }
    }

    pub(crate) fn read(node: Node) -> Self {
        let mut listener = Listener {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    listener.description.add(Text::read(child));
                }
                "display-name" => {
                    listener.display_name.add(Text::read(child));
                }
                "icon" => {
                    listener.icon.add(Icon::read(child));
                }
                "listener-class" => listener.listener_class = text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        listener
    }
}

impl WriteXml for Listener {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_text(writer, "listener-class", &self.listener_class)?;
        close(writer, tag)
    }
}

/// emptyType: an element whose presence is its whole content
/// (local-bean, distributable, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Empty {
    pub id: Option<String>,
}

impl Empty {
    pub(crate) fn read(node: Node) -> Self {
        Empty { id: id_of(node) }
    }
}

impl WriteXml for Empty {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        close(writer, tag)
    }
}
