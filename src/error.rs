use thiserror::Error;

/// Errors that can occur while reading a form export document.
///
/// The conversion core itself never fails; decoding the source document is
/// the only fallible step on the input side.
#[derive(Error, Debug, Clone)]
pub enum DecodeError {
    #[error("Failed to read form export file: {0}")]
    Io(String),

    #[error("Failed to parse form export JSON: {0}")]
    Json(String),

    #[error("Form export contains no form entry under key '0'")]
    MissingForm,
}

/// Errors that can occur while rendering the converted element tree.
#[derive(Error, Debug, Clone)]
pub enum EncodeError {
    #[error("Failed to render webform YAML: {0}")]
    Yaml(String),

    #[error("Failed to write webform YAML file: {0}")]
    Io(String),
}

/// Errors that can occur when converting a custom user format into a flat
/// `FieldRecord` sequence.
#[derive(Error, Debug, Clone)]
pub enum FieldConversionError {
    #[error("Invalid custom field data: {0}")]
    ValidationError(String),
}
