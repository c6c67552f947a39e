//! The grouping state machine: a single forward pass that folds the flat
//! field sequence into nested page and section containers.
//!
//! The fold state is passed in and returned by value at every step, and a
//! group is closed by `take()`ing its slot, so a group can only ever be
//! flushed once and no open/closing flags need resetting.

use super::typemap::TypeMap;
use crate::element::{ElementBuilder, ElementNode};
use crate::field::{FieldKind, FieldRecord};
use crate::key::generate_key;
use crate::report::ConversionReport;

/// An open group: the key it will be inserted under once finished, and the
/// node accumulating its children.
pub(super) struct GroupSlot {
    key: String,
    node: ElementNode,
}

/// The carried fold state. A page and a section may be open at the same
/// time; the section always closes first and lands inside the page.
pub(super) struct FoldState {
    elements: ElementNode,
    page: Option<GroupSlot>,
    section: Option<GroupSlot>,
    page_count: u32,
}

impl FoldState {
    pub(super) fn new() -> Self {
        Self {
            elements: ElementNode::new(),
            page: None,
            section: None,
            page_count: 0,
        }
    }

    /// Consumes the state after the final step. Both slots are already
    /// closed by then: end-of-sequence ends every open group.
    pub(super) fn finish(self) -> ElementNode {
        debug_assert!(self.page.is_none() && self.section.is_none());
        self.elements
    }
}

/// Advances the fold by one field. `ordinal` is the field's 1-based position
/// in `fields`; `next_kind` is the type of the following field, if any.
pub(super) fn step(
    mut state: FoldState,
    field: &FieldRecord,
    ordinal: usize,
    next_kind: Option<&FieldKind>,
    builder: &ElementBuilder<'_>,
    type_map: &TypeMap,
    fields: &[FieldRecord],
    report: &mut ConversionReport,
) -> FoldState {
    let section_ends = match next_kind {
        Some(FieldKind::Section) | Some(FieldKind::Page) | None => true,
        Some(_) => false,
    };
    let page_ends = matches!(next_kind, Some(FieldKind::Page) | None);

    match field.kind {
        FieldKind::Page => {
            state.page_count += 1;
            state.page = Some(GroupSlot {
                key: generate_key(field, ordinal),
                node: page_node(state.page_count, type_map),
            });
        }
        FieldKind::Section => {
            state.section = Some(GroupSlot {
                key: generate_key(field, ordinal),
                node: section_node(field, type_map),
            });
        }
        _ => {
            let element = builder.build(field, ordinal, fields, report);
            let key = generate_key(field, ordinal);
            // Section beats page beats top level.
            if let Some(section) = state.section.as_mut() {
                section.node.insert_child(key, element);
            } else if let Some(page) = state.page.as_mut() {
                page.node.insert_child(key, element);
            } else {
                state.elements.insert_child(key, element);
            }
        }
    }

    // A section must close at or before the page that contains it, so its
    // end-condition is evaluated first.
    if section_ends {
        if let Some(section) = state.section.take() {
            if let Some(page) = state.page.as_mut() {
                page.node.insert_child(section.key, section.node);
            } else {
                state.elements.insert_child(section.key, section.node);
            }
        }
    }

    if page_ends {
        if let Some(page) = state.page.take() {
            state.elements.insert_child(page.key, page.node);
        }
    }

    state
}

fn page_node(page_count: u32, type_map: &TypeMap) -> ElementNode {
    let mut node = ElementNode::new();
    node.set_attr("title", format!("Page {}", page_count));
    node.set_attr("type", type_map.resolve(&FieldKind::Page).unwrap_or(""));
    node
}

fn section_node(field: &FieldRecord, type_map: &TypeMap) -> ElementNode {
    let mut node = ElementNode::new();
    if let Some(label) = &field.label {
        node.set_attr("title", label.as_str());
    }
    node.set_attr("type", type_map.resolve(&FieldKind::Section).unwrap_or(""));
    if let Some(description) = &field.description {
        node.set_attr("description", description.as_str());
    }
    node
}
