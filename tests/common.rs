//! Common test utilities for building field sequences and export fixtures.
use webform_convert::prelude::*;

/// A bare page-break field.
#[allow(dead_code)]
pub fn page(id: u64) -> FieldRecord {
    FieldRecord::new(FieldKind::Page, FieldId::from(id))
}

/// A section heading with a label and description.
#[allow(dead_code)]
pub fn section(id: u64, label: &str, description: &str) -> FieldRecord {
    let mut field = FieldRecord::new(FieldKind::Section, FieldId::from(id));
    field.label = Some(label.to_string());
    field.description = Some(description.to_string());
    field
}

/// A labeled single-line text input.
#[allow(dead_code)]
pub fn text(id: u64, label: &str) -> FieldRecord {
    let mut field = FieldRecord::new(FieldKind::Text, FieldId::from(id));
    field.label = Some(label.to_string());
    field
}

/// A required, labeled single-line text input.
#[allow(dead_code)]
pub fn required_text(id: u64, label: &str) -> FieldRecord {
    let mut field = text(id, label);
    field.is_required = Some(true);
    field
}

/// Builds a choices list from `(value, text)` pairs in order.
#[allow(dead_code)]
pub fn choices(entries: &[(&str, &str)]) -> Vec<Choice> {
    entries
        .iter()
        .map(|(value, text)| Choice {
            value: value.to_string(),
            text: text.to_string(),
        })
        .collect()
}

/// A labeled select with the given `(value, text)` choices.
#[allow(dead_code)]
pub fn select(id: u64, label: &str, entries: &[(&str, &str)]) -> FieldRecord {
    let mut field = FieldRecord::new(FieldKind::Select, FieldId::from(id));
    field.label = Some(label.to_string());
    field.choices = Some(choices(entries));
    field
}

/// A single conditional rule against a numeric field id.
#[allow(dead_code)]
pub fn rule(field_id: u64, operator: &str, value: serde_json::Value) -> ConditionalRule {
    ConditionalRule {
        field_id: FieldId::from(field_id),
        operator: ConditionOperator::from(operator.to_string()),
        value,
    }
}

/// A `show`-action conditional block over the given rules.
#[allow(dead_code)]
pub fn show_logic(rules: Vec<ConditionalRule>) -> ConditionalLogic {
    ConditionalLogic {
        action_type: ConditionAction::Show,
        rules,
    }
}

/// A realistic single-form export document, envelope metadata included.
#[allow(dead_code)]
pub const SAMPLE_EXPORT: &str = r#"{
    "0": {
        "title": "Contact Us",
        "fields": [
            { "id": 1, "type": "page", "label": "" },
            { "id": 2, "type": "section", "label": "About You", "description": "Who is writing in" },
            { "id": 3, "type": "name", "label": "Full Name", "isRequired": true },
            { "id": 4, "type": "email", "label": "Email", "isRequired": true, "placeholder": "you@example.com" },
            { "id": 5, "type": "page", "label": "" },
            {
                "id": 6,
                "type": "select",
                "label": "Topic",
                "choices": [
                    { "text": "Sales", "value": "sales" },
                    { "text": "Support", "value": "support" }
                ]
            },
            {
                "id": 7,
                "type": "textarea",
                "label": "Message",
                "isRequired": true,
                "maxLength": 500,
                "conditionalLogic": {
                    "actionType": "show",
                    "rules": [ { "fieldId": "6", "operator": "is", "value": "support" } ]
                }
            }
        ]
    },
    "version": "2.4.17"
}"#;
