use crate::element::ElementNode;
use crate::error::{DecodeError, EncodeError};
use crate::field::FieldRecord;
use serde::{Deserialize, Serialize};
use std::fs;

/// One form inside an export: its metadata and the flat field sequence the
/// converter consumes.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FormDefinition {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldRecord>,
}

/// A Gravity Forms export document. The export wraps each form under a
/// numeric string key next to envelope metadata; only the first form (key
/// `"0"`) is read, matching the source system's single-form exports.
#[derive(Debug, Clone)]
pub struct FormExport {
    pub form: FormDefinition,
}

impl FormExport {
    /// Loads an export from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, DecodeError> {
        let content = fs::read_to_string(path).map_err(|e| DecodeError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Parses an export from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        let document: serde_json::Value =
            serde_json::from_str(json).map_err(|e| DecodeError::Json(e.to_string()))?;
        let form = document.get("0").ok_or(DecodeError::MissingForm)?;
        let form: FormDefinition =
            serde_json::from_value(form.clone()).map_err(|e| DecodeError::Json(e.to_string()))?;
        Ok(Self { form })
    }

    pub fn title(&self) -> Option<&str> {
        self.form.title.as_deref()
    }

    pub fn fields(&self) -> &[FieldRecord] {
        &self.form.fields
    }
}

/// Renders a converted element tree as a Drupal Webform YAML document,
/// preserving insertion order.
pub fn render_yaml(elements: &ElementNode) -> Result<String, EncodeError> {
    serde_yaml_ng::to_string(elements).map_err(|e| EncodeError::Yaml(e.to_string()))
}
