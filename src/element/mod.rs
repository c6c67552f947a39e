//! Mapping of one source field record into one output element node.

mod composite;
pub mod node;
mod states;

pub use node::{ATTRIBUTE_PREFIX, ElementNode, Value};

use crate::converter::TypeMap;
use crate::field::{FieldKind, FieldRecord};
use crate::report::{ConversionReport, GapKind};

/// Builds output element nodes from field records against an injected type
/// map. Pure per call apart from gap recording; the full field sequence is
/// only consulted to resolve conditional-rule references.
pub struct ElementBuilder<'a> {
    type_map: &'a TypeMap,
}

impl<'a> ElementBuilder<'a> {
    pub fn new(type_map: &'a TypeMap) -> Self {
        Self { type_map }
    }

    /// Maps one field at the given 1-based sequence position into an element
    /// node, including conditional-logic translation and composite
    /// expansion.
    pub fn build(
        &self,
        field: &FieldRecord,
        ordinal: usize,
        fields: &[FieldRecord],
        report: &mut ConversionReport,
    ) -> ElementNode {
        let mut element = ElementNode::new();

        // Pure-markup fields render their content, not a title.
        if field.kind != FieldKind::Content {
            if let Some(label) = &field.label {
                element.set_attr("title", label.as_str());
            }
        }

        match self.type_map.resolve(&field.kind) {
            Some(target_type) => element.set_attr("type", target_type),
            None => {
                // Placeholder, so that a composite expansion's container
                // type replaces it in place and `#type` keeps its
                // conventional slot right after `#title`.
                element.set_attr("type", "");
                if !field.kind.is_composite() {
                    report.record(GapKind::UnknownFieldType, field.kind.source_name());
                }
            }
        }

        if let Some(content) = &field.content {
            element.set_attr("markup", content.as_str());
        }

        if field.is_required == Some(true) {
            element.set_attr("required", true);
        }

        if let Some(max_length) = &field.max_length {
            if is_truthy(max_length) {
                element.set_attr("maxlength", Value::from(max_length.clone()));
            }
        }

        if let Some(min_length) = &field.min_length {
            if is_truthy(min_length) {
                element.set_attr("minLength", Value::from(min_length.clone()));
            }
        }

        if let Some(placeholder) = &field.placeholder {
            if !placeholder.is_empty() {
                element.set_attr("placeholder", placeholder.as_str());
            }
        }

        // List fields are composite; their choices become child elements
        // instead of an options map.
        if field.kind != FieldKind::List {
            if let Some(choices) = &field.choices {
                let mut options = ElementNode::new();
                for choice in choices {
                    options.insert(choice.value.clone(), choice.text.as_str());
                }
                element.set_attr("options", options);
            }
        }

        if let Some(logic) = &field.conditional_logic {
            if let Some(value) = states::translate(logic, fields, report) {
                element.set_attr("states", value);
            }
        }

        composite::expand(field, ordinal, &mut element);

        element
    }
}

/// Source-format truthiness: `false`, `0`, `""`, and `null` count as absent.
/// Loosely typed attributes are only copied into the output when truthy.
pub(crate) fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}
