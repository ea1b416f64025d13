use thiserror::Error;

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("failed to parse XML document")]
    Parse(#[from] roxmltree::Error),

    #[error("failed to write XML document")]
    Write(#[from] quick_xml::Error),

    #[error("unexpected root element <{found}>, expected <{expected}>")]
    UnexpectedRoot { expected: &'static str, found: String },

    #[error("invalid value {value:?} for <{element}>")]
    InvalidValue { element: String, value: String },

    #[error("failed to resolve prefix {0:?} to a namespace URI")]
    PrefixNotResolved(String),
}

impl DescriptorError {
    pub(crate) fn invalid_value(node: roxmltree::Node, value: &str) -> Self {
        DescriptorError::InvalidValue {
            element: node.tag_name().name().to_string(),
            value: value.to_string(),
        }
    }
}
