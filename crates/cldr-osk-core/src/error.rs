// cldr-osk Conversion Errors

/// Fatal conversion errors
///
/// Invalid position codes are not listed here: they are recovered where they
/// occur and only reported through the log.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("<{element}> at line {line} is missing required attribute '{attribute}'")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
        line: u32,
    },

    #[error("Malformed escape sequence: {0}")]
    MalformedEscape(String),

    #[error("No symbolic name for U+{codepoint:04X} in key {iso}")]
    UnresolvedSymbol { codepoint: u32, iso: String },

    #[error("Key {0} has an empty value")]
    EmptyValue(String),
}
