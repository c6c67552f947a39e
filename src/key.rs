//! Synthetic key generation and selector resolution.
//!
//! Every output element is keyed by a stable, human-readable identifier
//! derived from the source field. The label-derived prefix is cosmetic; the
//! appended ordinal position is what guarantees uniqueness across the
//! sequence.

use crate::field::{FieldId, FieldRecord};

/// Sentinel selector emitted when a conditional rule references a field id
/// that does not exist in the sequence. Missing references must not abort a
/// conversion; the sentinel is carried verbatim into the output.
pub const SELECTOR_NOT_FOUND: &str = "not found";

/// Normalizes a label into the key prefix: first 8 characters, lowercased,
/// anything that is not an ASCII word character or whitespace replaced by
/// `_`, then literal spaces replaced by `_`.
pub fn normalized_prefix(label: &str) -> String {
    label
        .chars()
        .take(8)
        .flat_map(char::to_lowercase)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                '_'
            }
        })
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

/// Derives the output key for a field at the given 1-based position in the
/// overall flat sequence. Falls back to `<type>_<id>` when the field has no
/// label.
pub fn generate_key(field: &FieldRecord, ordinal: usize) -> String {
    match field.label.as_deref() {
        Some(label) if !label.is_empty() => {
            format!("{}_{}", normalized_prefix(label), ordinal)
        }
        _ => format!("{}_{}", field.kind.source_name(), field.id),
    }
}

/// Resolves a rule's field-id reference into the rendered input selector,
/// `:input[name="<generatedKey>"]`, by scanning the full sequence from the
/// start with its own running ordinal. Returns [`SELECTOR_NOT_FOUND`] when
/// no field matches.
pub fn resolve_input_selector(fields: &[FieldRecord], target_id: &FieldId) -> String {
    fields
        .iter()
        .enumerate()
        .find(|(_, field)| field.id == *target_id)
        .map(|(index, field)| format!(":input[name=\"{}\"]", generate_key(field, index + 1)))
        .unwrap_or_else(|| SELECTOR_NOT_FOUND.to_string())
}
