//! faces-config.xml: the JavaServer Faces application configuration file.
//! Covers the configuration children the runtime consumes; the open
//! `*-extension` grab-bags are not modeled.

use quick_xml::events::{BytesEnd, Event};
use roxmltree::Node;

use crate::error::DescriptorError;
use crate::lang::{Icon, Icons, Text, TextMap};
use crate::xml::{
    attr_bool, close, collapsed, element_children, element_start, id_of, open, skip_unexpected,
    text_of, write_all, write_icons, write_opt, write_strings, write_text, write_text_map,
    WriteXml, XmlWriter,
};
use crate::{Descriptor, JAVAEE_NAMESPACE};

/// faces-configType: the root of faces-config.xml.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesConfig {
    pub application: Vec<FacesApplication>,
    pub ordering: Vec<FacesOrdering>,
    pub absolute_ordering: Option<FacesAbsoluteOrdering>,
    pub factory: Vec<FacesFactory>,
    pub component: Vec<FacesComponent>,
    pub converter: Vec<FacesConverter>,
    pub managed_bean: Vec<FacesManagedBean>,
    pub name: Option<String>,
    pub navigation_rule: Vec<FacesNavigationRule>,
    pub referenced_bean: Vec<FacesReferencedBean>,
    pub render_kit: Vec<FacesRenderKit>,
    pub lifecycle: Vec<FacesLifecycle>,
    pub validator: Vec<FacesValidator>,
    pub behavior: Vec<FacesBehavior>,
    pub metadata_complete: Option<bool>,
    pub version: Option<String>,
    pub id: Option<String>,
}

impl Descriptor for FacesConfig {
    const TAG_NAME: &'static str = "faces-config";
    const NAMESPACE: &'static str = JAVAEE_NAMESPACE;

    fn read(node: Node) -> Result<Self, DescriptorError> {
        let mut config = FacesConfig {
            version: node.attribute("version").map(collapsed),
            metadata_complete: attr_bool(node, "metadata-complete"),
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "application" => config.application.push(FacesApplication::read(child)),
                "ordering" => config.ordering.push(FacesOrdering::read(child)),
                "absolute-ordering" => {
                    config.absolute_ordering = Some(FacesAbsoluteOrdering::read(child))
                }
                "factory" => config.factory.push(FacesFactory::read(child)),
                "component" => config.component.push(FacesComponent::read(child)),
                "converter" => config.converter.push(FacesConverter::read(child)),
                "managed-bean" => config.managed_bean.push(FacesManagedBean::read(child)),
                "name" => config.name = Some(text_of(child)),
                "navigation-rule" => {
                    config.navigation_rule.push(FacesNavigationRule::read(child))
                }
                "referenced-bean" => {
                    config.referenced_bean.push(FacesReferencedBean::read(child))
                }
                "render-kit" => config.render_kit.push(FacesRenderKit::read(child)),
                "lifecycle" => config.lifecycle.push(FacesLifecycle::read(child)),
                "validator" => config.validator.push(FacesValidator::read(child)),
                "behavior" => config.behavior.push(FacesBehavior::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        Ok(config)
    }

    fn write(&self, writer: &mut XmlWriter) -> Result<(), DescriptorError> {
        let mut start = element_start(Self::TAG_NAME, self.id.as_deref());
        start.push_attribute(("xmlns", Self::NAMESPACE));
        if let Some(metadata_complete) = self.metadata_complete {
            start.push_attribute(("metadata-complete", metadata_complete.to_string().as_str()));
        }
        if let Some(version) = &self.version {
            start.push_attribute(("version", version.as_str()));
        }
        writer.write_event(Event::Start(start))?;
        write_all(writer, "application", &self.application)?;
        write_all(writer, "ordering", &self.ordering)?;
        if let Some(ordering) = &self.absolute_ordering {
            ordering.write_xml(writer, "absolute-ordering")?;
        }
        write_all(writer, "factory", &self.factory)?;
        write_all(writer, "component", &self.component)?;
        write_all(writer, "converter", &self.converter)?;
        write_all(writer, "managed-bean", &self.managed_bean)?;
        write_opt(writer, "name", self.name.as_deref())?;
        write_all(writer, "navigation-rule", &self.navigation_rule)?;
        write_all(writer, "referenced-bean", &self.referenced_bean)?;
        write_all(writer, "render-kit", &self.render_kit)?;
        write_all(writer, "lifecycle", &self.lifecycle)?;
        write_all(writer, "validator", &self.validator)?;
        write_all(writer, "behavior", &self.behavior)?;
        writer.write_event(Event::End(BytesEnd::new(Self::TAG_NAME)))?;
        Ok(())
    }
}

/// faces-config-orderingType (relative ordering of configuration resources).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacesOrderingOrdering {
    pub name: Vec<String>,
    pub others: bool,
}

impl FacesOrderingOrdering {
    fn read(node: Node) -> Self {
        let mut ordering = FacesOrderingOrdering::default();
        for child in element_children(node) {
            match child.tag_name().name() {
                "name" => ordering.name.push(text_of(child)),
                "others" => ordering.others = true,
                _ => skip_unexpected(node, child),
            }
        }
        ordering
    }
}

impl WriteXml for FacesOrderingOrdering {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, None)?;
        write_strings(writer, "name", &self.name)?;
        if self.others {
            open(writer, "others", None)?;
            close(writer, "others")?;
        }
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesOrdering {
    pub after: Option<FacesOrderingOrdering>,
    pub before: Option<FacesOrderingOrdering>,
    pub id: Option<String>,
}

impl FacesOrdering {
    fn read(node: Node) -> Self {
        let mut ordering = FacesOrdering {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "after" => ordering.after = Some(FacesOrderingOrdering::read(child)),
                "before" => ordering.before = Some(FacesOrderingOrdering::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        ordering
    }
}

impl WriteXml for FacesOrdering {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        if let Some(after) = &self.after {
            after.write_xml(writer, "after")?;
        }
        if let Some(before) = &self.before {
            before.write_xml(writer, "before")?;
        }
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacesAbsoluteOrdering {
    pub entries: Vec<crate::web::OrderingEntry>,
    pub id: Option<String>,
}

impl FacesAbsoluteOrdering {
    fn read(node: Node) -> Self {
        let mut ordering = FacesAbsoluteOrdering {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "name" => ordering
                    .entries
                    .push(crate::web::OrderingEntry::Name(text_of(child))),
                "others" => ordering.entries.push(crate::web::OrderingEntry::Others),
                _ => skip_unexpected(node, child),
            }
        }
        ordering
    }
}

impl WriteXml for FacesAbsoluteOrdering {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        for entry in &self.entries {
            match entry {
                crate::web::OrderingEntry::Name(name) => write_text(writer, "name", name)?,
                crate::web::OrderingEntry::Others => {
                    open(writer, "others", None)?;
                    close(writer, "others")?;
                }
            }
        }
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesLocaleConfig {
    pub default_locale: Option<String>,
    pub supported_locale: Vec<String>,
    pub id: Option<String>,
}

impl FacesLocaleConfig {
    fn read(node: Node) -> Self {
        let mut config = FacesLocaleConfig {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "default-locale" => config.default_locale = Some(text_of(child)),
                "supported-locale" => config.supported_locale.push(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        config
    }
}

impl WriteXml for FacesLocaleConfig {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_opt(writer, "default-locale", self.default_locale.as_deref())?;
        write_strings(writer, "supported-locale", &self.supported_locale)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesResourceBundle {
    pub description: TextMap,
    pub display_name: TextMap,
    pub base_name: String,
    pub var: String,
    pub id: Option<String>,
}

impl FacesResourceBundle {
    fn read(node: Node) -> Self {
        let mut bundle = FacesResourceBundle {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    bundle.description.add(Text::read(child));
                }
                "display-name" => {
                    bundle.display_name.add(Text::read(child));
                }
                "base-name" => bundle.base_name = text_of(child),
                "var" => bundle.var = text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        bundle
    }
}

impl WriteXml for FacesResourceBundle {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_text(writer, "base-name", &self.base_name)?;
        write_text(writer, "var", &self.var)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesSystemEventListener {
    pub system_event_listener_class: String,
    pub system_event_class: String,
    pub source_class: Option<String>,
    pub id: Option<String>,
}

impl FacesSystemEventListener {
    fn read(node: Node) -> Self {
        let mut listener = FacesSystemEventListener {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "system-event-listener-class" => {
                    listener.system_event_listener_class = text_of(child)
                }
                "system-event-class" => listener.system_event_class = text_of(child),
                "source-class" => listener.source_class = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        listener
    }
}

impl WriteXml for FacesSystemEventListener {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(
            writer,
            "system-event-listener-class",
            &self.system_event_listener_class,
        )?;
        write_text(writer, "system-event-class", &self.system_event_class)?;
        write_opt(writer, "source-class", self.source_class.as_deref())?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesDefaultValidators {
    pub validator_id: Vec<String>,
    pub id: Option<String>,
}

impl FacesDefaultValidators {
    fn read(node: Node) -> Self {
        let mut validators = FacesDefaultValidators {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "validator-id" => validators.validator_id.push(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        validators
    }
}

impl WriteXml for FacesDefaultValidators {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_strings(writer, "validator-id", &self.validator_id)?;
        close(writer, tag)
    }
}

/// faces-config-applicationType.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesApplication {
    pub action_listener: Vec<String>,
    pub default_render_kit_id: Vec<String>,
    pub message_bundle: Vec<String>,
    pub navigation_handler: Vec<String>,
    pub view_handler: Vec<String>,
    pub state_manager: Vec<String>,
    pub el_resolver: Vec<String>,
    pub property_resolver: Vec<String>,
    pub variable_resolver: Vec<String>,
    pub resource_handler: Vec<String>,
    pub system_event_listener: Vec<FacesSystemEventListener>,
    pub locale_config: Option<FacesLocaleConfig>,
    pub resource_bundle: Option<FacesResourceBundle>,
    pub default_validators: Option<FacesDefaultValidators>,
    pub id: Option<String>,
}

impl FacesApplication {
    fn read(node: Node) -> Self {
        let mut application = FacesApplication {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "action-listener" => application.action_listener.push(text_of(child)),
                "default-render-kit-id" => {
                    application.default_render_kit_id.push(text_of(child))
                }
                "message-bundle" => application.message_bundle.push(text_of(child)),
                "navigation-handler" => application.navigation_handler.push(text_of(child)),
                "view-handler" => application.view_handler.push(text_of(child)),
                "state-manager" => application.state_manager.push(text_of(child)),
                "el-resolver" => application.el_resolver.push(text_of(child)),
                "property-resolver" => application.property_resolver.push(text_of(child)),
                "variable-resolver" => application.variable_resolver.push(text_of(child)),
                "resource-handler" => application.resource_handler.push(text_of(child)),
                "system-event-listener" => application
                    .system_event_listener
                    .push(FacesSystemEventListener::read(child)),
                "locale-config" => {
                    application.locale_config = Some(FacesLocaleConfig::read(child))
                }
                "resource-bundle" => {
                    application.resource_bundle = Some(FacesResourceBundle::read(child))
                }
                "default-validators" => {
                    application.default_validators = Some(FacesDefaultValidators::read(child))
                }
                _ => skip_unexpected(node, child),
            }
        }
        application
    }
}

impl WriteXml for FacesApplication {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_strings(writer, "action-listener", &self.action_listener)?;
        write_strings(writer, "default-render-kit-id", &self.default_render_kit_id)?;
        write_strings(writer, "message-bundle", &self.message_bundle)?;
        write_strings(writer, "navigation-handler", &self.navigation_handler)?;
        write_strings(writer, "view-handler", &self.view_handler)?;
        write_strings(writer, "state-manager", &self.state_manager)?;
        write_strings(writer, "el-resolver", &self.el_resolver)?;
        write_strings(writer, "property-resolver", &self.property_resolver)?;
        write_strings(writer, "variable-resolver", &self.variable_resolver)?;
        write_strings(writer, "resource-handler", &self.resource_handler)?;
        write_all(writer, "system-event-listener", &self.system_event_listener)?;
        if let Some(config) = &self.locale_config {
            config.write_xml(writer, "locale-config")?;
        }
        if let Some(bundle) = &self.resource_bundle {
            bundle.write_xml(writer, "resource-bundle")?;
        }
        if let Some(validators) = &self.default_validators {
            validators.write_xml(writer, "default-validators")?;
        }
        close(writer, tag)
    }
}

/// faces-config-factoryType.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesFactory {
    pub application_factory: Vec<String>,
    pub exception_handler_factory: Vec<String>,
    pub external_context_factory: Vec<String>,
    pub faces_context_factory: Vec<String>,
    pub partial_view_context_factory: Vec<String>,
    pub lifecycle_factory: Vec<String>,
    pub view_declaration_language_factory: Vec<String>,
    pub tag_handler_delegate_factory: Vec<String>,
    pub render_kit_factory: Vec<String>,
    pub visit_context_factory: Vec<String>,
    pub id: Option<String>,
}

impl FacesFactory {
    fn read(node: Node) -> Self {
        let mut factory = FacesFactory {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "application-factory" => factory.application_factory.push(text_of(child)),
                "exception-handler-factory" => {
                    factory.exception_handler_factory.push(text_of(child))
                }
                "external-context-factory" => {
                    factory.external_context_factory.push(text_of(child))
                }
                "faces-context-factory" => factory.faces_context_factory.push(text_of(child)),
                "partial-view-context-factory" => {
                    factory.partial_view_context_factory.push(text_of(child))
                }
                "lifecycle-factory" => factory.lifecycle_factory.push(text_of(child)),
                "view-declaration-language-factory" => {
                    factory.view_declaration_language_factory.push(text_of(child))
                }
                "tag-handler-delegate-factory" => {
                    factory.tag_handler_delegate_factory.push(text_of(child))
                }
                "render-kit-factory" => factory.render_kit_factory.push(text_of(child)),
                "visit-context-factory" => factory.visit_context_factory.push(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        factory
    }
}

impl WriteXml for FacesFactory {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_strings(writer, "application-factory", &self.application_factory)?;
        write_strings(
            writer,
            "exception-handler-factory",
            &self.exception_handler_factory,
        )?;
        write_strings(
            writer,
            "external-context-factory",
            &self.external_context_factory,
        )?;
        write_strings(writer, "faces-context-factory", &self.faces_context_factory)?;
        write_strings(
            writer,
            "partial-view-context-factory",
            &self.partial_view_context_factory,
        )?;
        write_strings(writer, "lifecycle-factory", &self.lifecycle_factory)?;
        write_strings(
            writer,
            "view-declaration-language-factory",
            &self.view_declaration_language_factory,
        )?;
        write_strings(
            writer,
            "tag-handler-delegate-factory",
            &self.tag_handler_delegate_factory,
        )?;
        write_strings(writer, "render-kit-factory", &self.render_kit_factory)?;
        write_strings(writer, "visit-context-factory", &self.visit_context_factory)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesFacet {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub facet_name: String,
    pub id: Option<String>,
}

impl FacesFacet {
    fn read(node: Node) -> Self {
        let mut facet = FacesFacet {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    facet.description.add(Text::read(child));
                }
                "display-name" => {
                    facet.display_name.add(Text::read(child));
                }
                "icon" => {
                    facet.icon.add(Icon::read(child));
                }
                "facet-name" => facet.facet_name = text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        facet
    }
}

impl WriteXml for FacesFacet {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_text(writer, "facet-name", &self.facet_name)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesAttribute {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub attribute_name: String,
    pub attribute_class: String,
    pub default_value: Option<String>,
    pub suggested_value: Option<String>,
    pub id: Option<String>,
}

impl FacesAttribute {
    fn read(node: Node) -> Self {
        let mut attribute = FacesAttribute {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    attribute.description.add(Text::read(child));
                }
                "display-name" => {
                    attribute.display_name.add(Text::read(child));
                }
                "icon" => {
                    attribute.icon.add(Icon::read(child));
                }
                "attribute-name" => attribute.attribute_name = text_of(child),
                "attribute-class" => attribute.attribute_class = text_of(child),
                "default-value" => attribute.default_value = Some(text_of(child)),
                "suggested-value" => attribute.suggested_value = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        attribute
    }
}

impl WriteXml for FacesAttribute {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_text(writer, "attribute-name", &self.attribute_name)?;
        write_text(writer, "attribute-class", &self.attribute_class)?;
        write_opt(writer, "default-value", self.default_value.as_deref())?;
        write_opt(writer, "suggested-value", self.suggested_value.as_deref())?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesProperty {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub property_name: String,
    pub property_class: String,
    pub default_value: Option<String>,
    pub suggested_value: Option<String>,
    pub id: Option<String>,
}

impl FacesProperty {
    fn read(node: Node) -> Self {
        let mut property = FacesProperty {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    property.description.add(Text::read(child));
                }
                "display-name" => {
                    property.display_name.add(Text::read(child));
                }
                "icon" => {
                    property.icon.add(Icon::read(child));
                }
                "property-name" => property.property_name = text_of(child),
                "property-class" => property.property_class = text_of(child),
                "default-value" => property.default_value = Some(text_of(child)),
                "suggested-value" => property.suggested_value = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        property
    }
}

impl WriteXml for FacesProperty {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_text(writer, "property-name", &self.property_name)?;
        write_text(writer, "property-class", &self.property_class)?;
        write_opt(writer, "default-value", self.default_value.as_deref())?;
        write_opt(writer, "suggested-value", self.suggested_value.as_deref())?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesComponent {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub component_type: String,
    pub component_class: String,
    pub facet: Vec<FacesFacet>,
    pub attribute: Vec<FacesAttribute>,
    pub property: Vec<FacesProperty>,
    pub id: Option<String>,
}

impl FacesComponent {
    fn read(node: Node) -> Self {
        let mut component = FacesComponent {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    component.description.add(Text::read(child));
                }
                "display-name" => {
                    component.display_name.add(Text::read(child));
                }
                "icon" => {
                    component.icon.add(Icon::read(child));
                }
                "component-type" => component.component_type = text_of(child),
                "component-class" => component.component_class = text_of(child),
                "facet" => component.facet.push(FacesFacet::read(child)),
                "attribute" => component.attribute.push(FacesAttribute::read(child)),
                "property" => component.property.push(FacesProperty::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        component
    }
}

impl WriteXml for FacesComponent {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_text(writer, "component-type", &self.component_type)?;
        write_text(writer, "component-class", &self.component_class)?;
        write_all(writer, "facet", &self.facet)?;
        write_all(writer, "attribute", &self.attribute)?;
        write_all(writer, "property", &self.property)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesConverter {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub converter_id: Option<String>,
    pub converter_for_class: Option<String>,
    pub converter_class: Option<String>,
    pub attribute: Vec<FacesAttribute>,
    pub property: Vec<FacesProperty>,
    pub id: Option<String>,
}

impl FacesConverter {
    fn read(node: Node) -> Self {
        let mut converter = FacesConverter {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    converter.description.add(Text::read(child));
                }
                "display-name" => {
                    converter.display_name.add(Text::read(child));
                }
                "icon" => {
                    converter.icon.add(Icon::read(child));
                }
                "converter-id" => converter.converter_id = Some(text_of(child)),
                "converter-for-class" => converter.converter_for_class = Some(text_of(child)),
                "converter-class" => converter.converter_class = Some(text_of(child)),
                "attribute" => converter.attribute.push(FacesAttribute::read(child)),
                "property" => converter.property.push(FacesProperty::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        converter
    }
}

impl WriteXml for FacesConverter {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_opt(writer, "converter-id", self.converter_id.as_deref())?;
        write_opt(
            writer,
            "converter-for-class",
            self.converter_for_class.as_deref(),
        )?;
        write_opt(writer, "converter-class", self.converter_class.as_deref())?;
        write_all(writer, "attribute", &self.attribute)?;
        write_all(writer, "property", &self.property)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacesNullValue {
    pub id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesMapEntry {
    pub key: String,
    pub null_value: Option<FacesNullValue>,
    pub value: Option<String>,
    pub id: Option<String>,
}

impl FacesMapEntry {
    fn read(node: Node) -> Self {
        let mut entry = FacesMapEntry {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "key" => entry.key = text_of(child),
                "null-value" => entry.null_value = Some(FacesNullValue { id: id_of(child) }),
                "value" => entry.value = Some(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        entry
    }
}

impl WriteXml for FacesMapEntry {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "key", &self.key)?;
        if let Some(null_value) = &self.null_value {
            open(writer, "null-value", null_value.id.as_deref())?;
            close(writer, "null-value")?;
        }
        write_opt(writer, "value", self.value.as_deref())?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesMapEntries {
    pub key_class: Option<String>,
    pub value_class: Option<String>,
    pub map_entry: Vec<FacesMapEntry>,
    pub id: Option<String>,
}

impl FacesMapEntries {
    fn read(node: Node) -> Self {
        let mut entries = FacesMapEntries {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "key-class" => entries.key_class = Some(text_of(child)),
                "value-class" => entries.value_class = Some(text_of(child)),
                "map-entry" => entries.map_entry.push(FacesMapEntry::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        entries
    }
}

impl WriteXml for FacesMapEntries {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_opt(writer, "key-class", self.key_class.as_deref())?;
        write_opt(writer, "value-class", self.value_class.as_deref())?;
        write_all(writer, "map-entry", &self.map_entry)?;
        close(writer, tag)
    }
}

/// One entry of a list-entries element: an explicit null or a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FacesListEntry {
    NullValue,
    Value(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesListEntries {
    pub value_class: Option<String>,
    pub entries: Vec<FacesListEntry>,
    pub id: Option<String>,
}

impl FacesListEntries {
    fn read(node: Node) -> Self {
        let mut entries = FacesListEntries {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "value-class" => entries.value_class = Some(text_of(child)),
                "null-value" => entries.entries.push(FacesListEntry::NullValue),
                "value" => entries.entries.push(FacesListEntry::Value(text_of(child))),
                _ => skip_unexpected(node, child),
            }
        }
        entries
    }
}

impl WriteXml for FacesListEntries {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_opt(writer, "value-class", self.value_class.as_deref())?;
        for entry in &self.entries {
            match entry {
                FacesListEntry::NullValue => {
                    open(writer, "null-value", None)?;
                    close(writer, "null-value")?;
                }
                FacesListEntry::Value(value) => write_text(writer, "value", value)?,
            }
        }
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesManagedProperty {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub property_name: String,
    pub property_class: Option<String>,
    pub map_entries: Option<FacesMapEntries>,
    pub null_value: Option<FacesNullValue>,
    pub value: Option<String>,
    pub list_entries: Option<FacesListEntries>,
    pub id: Option<String>,
}

impl FacesManagedProperty {
    fn read(node: Node) -> Self {
        let mut property = FacesManagedProperty {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    property.description.add(Text::read(child));
                }
                "display-name" => {
                    property.display_name.add(Text::read(child));
                }
                "icon" => {
                    property.icon.add(Icon::read(child));
                }
                "property-name" => property.property_name = text_of(child),
                "property-class" => property.property_class = Some(text_of(child)),
                "map-entries" => property.map_entries = Some(FacesMapEntries::read(child)),
                "null-value" => {
                    property.null_value = Some(FacesNullValue { id: id_of(child) })
                }
                "value" => property.value = Some(text_of(child)),
                "list-entries" => property.list_entries = Some(FacesListEntries::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        property
    }
}

impl WriteXml for FacesManagedProperty {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_text(writer, "property-name", &self.property_name)?;
        write_opt(writer, "property-class", self.property_class.as_deref())?;
        if let Some(entries) = &self.map_entries {
            entries.write_xml(writer, "map-entries")?;
        }
        if let Some(null_value) = &self.null_value {
            open(writer, "null-value", null_value.id.as_deref())?;
            close(writer, "null-value")?;
        }
        write_opt(writer, "value", self.value.as_deref())?;
        if let Some(entries) = &self.list_entries {
            entries.write_xml(writer, "list-entries")?;
        }
        close(writer, tag)
    }
}

/// faces-config-managed-beanType.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesManagedBean {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub managed_bean_name: String,
    pub managed_bean_class: String,
    pub managed_bean_scope: Option<String>,
    pub managed_property: Vec<FacesManagedProperty>,
    pub map_entries: Option<FacesMapEntries>,
    pub list_entries: Option<FacesListEntries>,
    pub eager: Option<bool>,
    pub id: Option<String>,
}

impl FacesManagedBean {
    fn read(node: Node) -> Self {
        let mut bean = FacesManagedBean {
            eager: attr_bool(node, "eager"),
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    bean.description.add(Text::read(child));
                }
                "display-name" => {
                    bean.display_name.add(Text::read(child));
                }
                "icon" => {
                    bean.icon.add(Icon::read(child));
                }
                "managed-bean-name" => bean.managed_bean_name = text_of(child),
                "managed-bean-class" => bean.managed_bean_class = text_of(child),
                "managed-bean-scope" => bean.managed_bean_scope = Some(text_of(child)),
                "managed-property" => {
                    bean.managed_property.push(FacesManagedProperty::read(child))
                }
                "map-entries" => bean.map_entries = Some(FacesMapEntries::read(child)),
                "list-entries" => bean.list_entries = Some(FacesListEntries::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        bean
    }
}

impl WriteXml for FacesManagedBean {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        let mut start = element_start(tag, self.id.as_deref());
        if let Some(eager) = self.eager {
            start.push_attribute(("eager", eager.to_string().as_str()));
        }
        writer.write_event(Event::Start(start))?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_text(writer, "managed-bean-name", &self.managed_bean_name)?;
        write_text(writer, "managed-bean-class", &self.managed_bean_class)?;
        write_opt(
            writer,
            "managed-bean-scope",
            self.managed_bean_scope.as_deref(),
        )?;
        write_all(writer, "managed-property", &self.managed_property)?;
        if let Some(entries) = &self.map_entries {
            entries.write_xml(writer, "map-entries")?;
        }
        if let Some(entries) = &self.list_entries {
            entries.write_xml(writer, "list-entries")?;
        }
        writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesViewParam {
    pub name: String,
    pub value: String,
    pub id: Option<String>,
}

impl FacesViewParam {
    fn read(node: Node) -> Self {
        let mut param = FacesViewParam {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "name" => param.name = text_of(child),
                "value" => param.value = text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        param
    }
}

impl WriteXml for FacesViewParam {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text(writer, "name", &self.name)?;
        write_text(writer, "value", &self.value)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesRedirect {
    pub view_param: Vec<FacesViewParam>,
    pub include_view_params: Option<bool>,
    pub id: Option<String>,
}

impl FacesRedirect {
    fn read(node: Node) -> Self {
        let mut redirect = FacesRedirect {
            include_view_params: attr_bool(node, "include-view-params"),
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "view-param" => redirect.view_param.push(FacesViewParam::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        redirect
    }
}

impl WriteXml for FacesRedirect {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        let mut start = element_start(tag, self.id.as_deref());
        if let Some(include) = self.include_view_params {
            start.push_attribute(("include-view-params", include.to_string().as_str()));
        }
        writer.write_event(Event::Start(start))?;
        write_all(writer, "view-param", &self.view_param)?;
        writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesNavigationCase {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub from_action: Option<String>,
    pub from_outcome: Option<String>,
    pub condition: Option<String>,
    pub to_view_id: String,
    pub redirect: Option<FacesRedirect>,
    pub id: Option<String>,
}

impl FacesNavigationCase {
    fn read(node: Node) -> Self {
        let mut case = FacesNavigationCase {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    case.description.add(Text::read(child));
                }
                "display-name" => {
                    case.display_name.add(Text::read(child));
                }
                "icon" => {
                    case.icon.add(Icon::read(child));
                }
                "from-action" => case.from_action = Some(text_of(child)),
                "from-outcome" => case.from_outcome = Some(text_of(child)),
                "if" => case.condition = Some(text_of(child)),
                "to-view-id" => case.to_view_id = text_of(child),
                "redirect" => case.redirect = Some(FacesRedirect::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        case
    }
}

impl WriteXml for FacesNavigationCase {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_opt(writer, "from-action", self.from_action.as_deref())?;
        write_opt(writer, "from-outcome", self.from_outcome.as_deref())?;
        write_opt(writer, "if", self.condition.as_deref())?;
        write_text(writer, "to-view-id", &self.to_view_id)?;
        if let Some(redirect) = &self.redirect {
            redirect.write_xml(writer, "redirect")?;
        }
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesNavigationRule {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub from_view_id: Option<String>,
    pub navigation_case: Vec<FacesNavigationCase>,
    pub id: Option<String>,
}

impl FacesNavigationRule {
    fn read(node: Node) -> Self {
        let mut rule = FacesNavigationRule {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    rule.description.add(Text::read(child));
                }
                "display-name" => {
                    rule.display_name.add(Text::read(child));
                }
                "icon" => {
                    rule.icon.add(Icon::read(child));
                }
                "from-view-id" => rule.from_view_id = Some(text_of(child)),
                "navigation-case" => {
                    rule.navigation_case.push(FacesNavigationCase::read(child))
                }
                _ => skip_unexpected(node, child),
            }
        }
        rule
    }
}

impl WriteXml for FacesNavigationRule {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_opt(writer, "from-view-id", self.from_view_id.as_deref())?;
        write_all(writer, "navigation-case", &self.navigation_case)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesReferencedBean {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub referenced_bean_name: String,
    pub referenced_bean_class: String,
    pub id: Option<String>,
}

impl FacesReferencedBean {
    fn read(node: Node) -> Self {
        let mut bean = FacesReferencedBean {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    bean.description.add(Text::read(child));
                }
                "display-name" => {
                    bean.display_name.add(Text::read(child));
                }
                "icon" => {
                    bean.icon.add(Icon::read(child));
                }
                "referenced-bean-name" => bean.referenced_bean_name = text_of(child),
                "referenced-bean-class" => bean.referenced_bean_class = text_of(child),
                _ => skip_unexpected(node, child),
            }
        }
        bean
    }
}

impl WriteXml for FacesReferencedBean {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_text(writer, "referenced-bean-name", &self.referenced_bean_name)?;
        write_text(writer, "referenced-bean-class", &self.referenced_bean_class)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesClientBehaviorRenderer {
    pub client_behavior_renderer_type: String,
    pub client_behavior_renderer_class: String,
}

impl FacesClientBehaviorRenderer {
    fn read(node: Node) -> Self {
        let mut renderer = FacesClientBehaviorRenderer::default();
        for child in element_children(node) {
            match child.tag_name().name() {
                "client-behavior-renderer-type" => {
                    renderer.client_behavior_renderer_type = text_of(child)
                }
                "client-behavior-renderer-class" => {
                    renderer.client_behavior_renderer_class = text_of(child)
                }
                _ => skip_unexpected(node, child),
            }
        }
        renderer
    }
}

impl WriteXml for FacesClientBehaviorRenderer {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, None)?;
        write_text(
            writer,
            "client-behavior-renderer-type",
            &self.client_behavior_renderer_type,
        )?;
        write_text(
            writer,
            "client-behavior-renderer-class",
            &self.client_behavior_renderer_class,
        )?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesRenderer {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub component_family: String,
    pub renderer_type: String,
    pub renderer_class: String,
    pub facet: Vec<FacesFacet>,
    pub attribute: Vec<FacesAttribute>,
    pub id: Option<String>,
}

impl FacesRenderer {
    fn read(node: Node) -> Self {
        let mut renderer = FacesRenderer {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    renderer.description.add(Text::read(child));
                }
                "display-name" => {
                    renderer.display_name.add(Text::read(child));
                }
                "icon" => {
                    renderer.icon.add(Icon::read(child));
                }
                "component-family" => renderer.component_family = text_of(child),
                "renderer-type" => renderer.renderer_type = text_of(child),
                "renderer-class" => renderer.renderer_class = text_of(child),
                "facet" => renderer.facet.push(FacesFacet::read(child)),
                "attribute" => renderer.attribute.push(FacesAttribute::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        renderer
    }
}

impl WriteXml for FacesRenderer {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_text(writer, "component-family", &self.component_family)?;
        write_text(writer, "renderer-type", &self.renderer_type)?;
        write_text(writer, "renderer-class", &self.renderer_class)?;
        write_all(writer, "facet", &self.facet)?;
        write_all(writer, "attribute", &self.attribute)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesRenderKit {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub render_kit_id: Option<String>,
    pub render_kit_class: Option<String>,
    pub renderer: Vec<FacesRenderer>,
    pub client_behavior_renderer: Vec<FacesClientBehaviorRenderer>,
    pub id: Option<String>,
}

impl FacesRenderKit {
    fn read(node: Node) -> Self {
        let mut kit = FacesRenderKit {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    kit.description.add(Text::read(child));
                }
                "display-name" => {
                    kit.display_name.add(Text::read(child));
                }
                "icon" => {
                    kit.icon.add(Icon::read(child));
                }
                "render-kit-id" => kit.render_kit_id = Some(text_of(child)),
                "render-kit-class" => kit.render_kit_class = Some(text_of(child)),
                "renderer" => kit.renderer.push(FacesRenderer::read(child)),
                "client-behavior-renderer" => kit
                    .client_behavior_renderer
                    .push(FacesClientBehaviorRenderer::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        kit
    }
}

impl WriteXml for FacesRenderKit {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_opt(writer, "render-kit-id", self.render_kit_id.as_deref())?;
        write_opt(writer, "render-kit-class", self.render_kit_class.as_deref())?;
        write_all(writer, "renderer", &self.renderer)?;
        write_all(
            writer,
            "client-behavior-renderer",
            &self.client_behavior_renderer,
        )?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesLifecycle {
    pub phase_listener: Vec<String>,
    pub id: Option<String>,
}

impl FacesLifecycle {
    fn read(node: Node) -> Self {
        let mut lifecycle = FacesLifecycle {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "phase-listener" => lifecycle.phase_listener.push(text_of(child)),
                _ => skip_unexpected(node, child),
            }
        }
        lifecycle
    }
}

impl WriteXml for FacesLifecycle {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_strings(writer, "phase-listener", &self.phase_listener)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesValidator {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub validator_id: String,
    pub validator_class: String,
    pub attribute: Vec<FacesAttribute>,
    pub property: Vec<FacesProperty>,
    pub id: Option<String>,
}

impl FacesValidator {
    fn read(node: Node) -> Self {
        let mut validator = FacesValidator {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    validator.description.add(Text::read(child));
                }
                "display-name" => {
                    validator.display_name.add(Text::read(child));
                }
                "icon" => {
                    validator.icon.add(Icon::read(child));
                }
                "validator-id" => validator.validator_id = text_of(child),
                "validator-class" => validator.validator_class = text_of(child),
                "attribute" => validator.attribute.push(FacesAttribute::read(child)),
                "property" => validator.property.push(FacesProperty::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        validator
    }
}

impl WriteXml for FacesValidator {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_text(writer, "validator-id", &self.validator_id)?;
        write_text(writer, "validator-class", &self.validator_class)?;
        write_all(writer, "attribute", &self.attribute)?;
        write_all(writer, "property", &self.property)?;
        close(writer, tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacesBehavior {
    pub description: TextMap,
    pub display_name: TextMap,
    pub icon: Icons,
    pub behavior_id: String,
    pub behavior_class: String,
    pub attribute: Vec<FacesAttribute>,
    pub property: Vec<FacesProperty>,
    pub id: Option<String>,
}

impl FacesBehavior {
    fn read(node: Node) -> Self {
        let mut behavior = FacesBehavior {
            id: id_of(node),
            ..Self::default()
        };
        for child in element_children(node) {
            match child.tag_name().name() {
                "description" => {
                    behavior.description.add(Text::read(child));
                }
                "display-name" => {
                    behavior.display_name.add(Text::read(child));
                }
                "icon" => {
                    behavior.icon.add(Icon::read(child));
                }
                "behavior-id" => behavior.behavior_id = text_of(child),
                "behavior-class" => behavior.behavior_class = text_of(child),
                "attribute" => behavior.attribute.push(FacesAttribute::read(child)),
                "property" => behavior.property.push(FacesProperty::read(child)),
                _ => skip_unexpected(node, child),
            }
        }
        behavior
    }
}

impl WriteXml for FacesBehavior {
    fn write_xml(&self, writer: &mut XmlWriter, tag: &str) -> Result<(), DescriptorError> {
        open(writer, tag, self.id.as_deref())?;
        write_text_map(writer, "description", &self.description)?;
        write_text_map(writer, "display-name", &self.display_name)?;
        write_icons(writer, &self.icon)?;
        write_text(writer, "behavior-id", &self.behavior_id)?;
        write_text(writer, "behavior-class", &self.behavior_class)?;
        write_all(writer, "attribute", &self.attribute)?;
        write_all(writer, "property", &self.property)?;
        close(writer, tag)
    }
}
