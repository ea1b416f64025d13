use jee_descriptors::tld::BodyContent;
use jee_descriptors::{from_xml_str, to_xml_string, TldTaglib};

const TAGLIB: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<taglib xmlns="http://java.sun.com/xml/ns/javaee" version="2.1">
  <description>Store display tags</description>
  <tlib-version>1.2</tlib-version>
  <short-name>store</short-name>
  <uri>http://example.org/taglibs/store</uri>
  <validator>
    <validator-class>org.example.tags.StoreTagValidator</validator-class>
    <init-param>
      <param-name>strict</param-name>
      <param-value>true</param-value>
    </init-param>
  </validator>
  <tag>
    <name>price</name>
    <tag-class>org.example.tags.PriceTag</tag-class>
    <body-content>empty</body-content>
    <attribute>
      <name>value</name>
      <required>true</required>
      <rtexprvalue>true</rtexprvalue>
      <type>java.math.BigDecimal</type>
    </attribute>
    <attribute>
      <name>format</name>
      <deferred-value>
        <type>java.lang.String</type>
      </deferred-value>
    </attribute>
    <dynamic-attributes>false</dynamic-attributes>
  </tag>
  <tag-file>
    <name>banner</name>
    <path>/META-INF/tags/banner.tag</path>
  </tag-file>
  <function>
    <name>discount</name>
    <function-class>org.example.tags.Functions</function-class>
    <function-signature>java.math.BigDecimal discount(java.math.BigDecimal, int)</function-signature>
  </function>
</taglib>
"#;

#[test]
fn reads_the_taglib_header() {
    let taglib: TldTaglib = from_xml_str(TAGLIB).unwrap();

    assert_eq!(taglib.version.as_deref(), Some("2.1"));
    assert_eq!(taglib.tlib_version.as_deref(), Some("1.2"));
    assert_eq!(taglib.short_name.as_deref(), Some("store"));
    assert_eq!(taglib.uri.as_deref(), Some("http://example.org/taglibs/store"));

    let validator = taglib.validator.as_ref().unwrap();
    assert_eq!(validator.validator_class, "org.example.tags.StoreTagValidator");
    assert_eq!(validator.init_param[0].param_name, "strict");
}

#[test]
fn reads_tags_attributes_and_functions() {
    let taglib: TldTaglib = from_xml_str(TAGLIB).unwrap();

    let tag = &taglib.tag[0];
    assert_eq!(tag.name, "price");
    assert_eq!(tag.body_content, Some(BodyContent::Empty));
    assert_eq!(tag.dynamic_attributes, Some(false));

    assert_eq!(tag.attribute[0].name, "value");
    assert_eq!(tag.attribute[0].required, Some(true));
    assert_eq!(
        tag.attribute[0].attribute_type.as_deref(),
        Some("java.math.BigDecimal")
    );
    assert_eq!(
        tag.attribute[1]
            .deferred_value
            .as_ref()
            .unwrap()
            .value_type
            .as_deref(),
        Some("java.lang.String")
    );

    assert_eq!(taglib.tag_file[0].path, "/META-INF/tags/banner.tag");
    assert_eq!(
        taglib.function[0].function_signature,
        "java.math.BigDecimal discount(java.math.BigDecimal, int)"
    );
}

#[test]
fn round_trips_through_the_writer() {
    let parsed: TldTaglib = from_xml_str(TAGLIB).unwrap();
    let written = to_xml_string(&parsed).unwrap();
    let reparsed: TldTaglib = from_xml_str(&written).unwrap();

    assert_eq!(parsed, reparsed);
}
