//! Expansion of composite source fields into container elements with
//! synthesized children.
//!
//! A composite field is a single record in the source that renders as
//! several inputs in the target: a name becomes first/last name text
//! fields, a signer becomes name and email fields, a list becomes one text
//! field per choice. Expansion runs after the generic attribute mapping and
//! overrides the element's `#type` with the container type.

use super::node::ElementNode;
use crate::field::{FieldKind, FieldRecord};
use crate::key::normalized_prefix;

const NAME_CONTAINER_TYPE: &str = "webform_flexbox";
const SIGNER_CONTAINER_TYPE: &str = "webform_section";
const LIST_CONTAINER_TYPE: &str = "fieldset";

const TEXT_INPUT_TYPE: &str = "textfield";
const EMAIL_INPUT_TYPE: &str = "email";

/// Applies the expansion for the field's kind, if it has one. `ordinal` is
/// the field's 1-based position in the overall sequence and keeps the
/// synthesized child keys unique.
pub(crate) fn expand(field: &FieldRecord, ordinal: usize, element: &mut ElementNode) {
    let required = field.is_required == Some(true);

    match &field.kind {
        FieldKind::Name => {
            element.set_attr("type", NAME_CONTAINER_TYPE);
            element.insert_child(
                format!("first_name_{}", ordinal),
                sub_input("First Name", TEXT_INPUT_TYPE, required),
            );
            element.insert_child(
                format!("last_name_{}", ordinal),
                sub_input("Last Name", TEXT_INPUT_TYPE, required),
            );
        }
        FieldKind::Signer => {
            element.set_attr("type", SIGNER_CONTAINER_TYPE);
            element.insert_child(
                format!("name_{}", ordinal),
                sub_input("Name", TEXT_INPUT_TYPE, required),
            );
            element.insert_child(
                format!("email_{}", ordinal),
                sub_input("Email", EMAIL_INPUT_TYPE, required),
            );
        }
        FieldKind::List => {
            element.set_attr("type", LIST_CONTAINER_TYPE);
            if let Some(choices) = &field.choices {
                for (index, choice) in choices.iter().enumerate() {
                    let key = format!("{}_{}_{}", normalized_prefix(&choice.text), ordinal, index);
                    element.insert_child(key, sub_input(&choice.text, TEXT_INPUT_TYPE, required));
                }
            }
        }
        _ => {}
    }
}

fn sub_input(title: &str, input_type: &str, required: bool) -> ElementNode {
    let mut node = ElementNode::new();
    node.set_attr("title", title);
    node.set_attr("type", input_type);
    if required {
        node.set_attr("required", true);
    }
    node
}
