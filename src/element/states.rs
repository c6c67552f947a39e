//! Translation of flat conditional-logic blocks into nested webform
//! visibility states.
//!
//! The source format keys its rules by raw field id; the target format wants
//! a `#states` node whose `visible` list references rendered input selectors.
//! Only `show` actions have a translation; everything else is recorded as a
//! gap and left out rather than guessed at.

use super::node::{ElementNode, Value};
use crate::field::{ConditionAction, ConditionOperator, ConditionalLogic, FieldRecord};
use crate::key::{SELECTOR_NOT_FOUND, resolve_input_selector};
use crate::report::{ConversionReport, GapKind};

/// Builds the `#states` value for a field, or `None` when the action has no
/// translation. Rule entries are joined by a literal `"or"` combinator;
/// rules with untranslatable operators are skipped without leaving a
/// dangling combinator behind.
pub(crate) fn translate(
    logic: &ConditionalLogic,
    fields: &[FieldRecord],
    report: &mut ConversionReport,
) -> Option<Value> {
    if logic.action_type != ConditionAction::Show {
        report.record(
            GapKind::DroppedHideAction,
            format!(
                "action '{}' has no visibility-states translation",
                logic.action_type.source_name()
            ),
        );
        return None;
    }

    let mut visible: Vec<Value> = Vec::new();
    for rule in &logic.rules {
        let predicate = match &rule.operator {
            ConditionOperator::Is => Value::from(rule.value.clone()),
            ConditionOperator::GreaterThan => comparison("greater", &rule.value),
            ConditionOperator::LessThan => comparison("less", &rule.value),
            ConditionOperator::LessThanOrEqual => comparison("less_equal", &rule.value),
            ConditionOperator::Other(name) => {
                report.record(GapKind::UnsupportedOperator, name.clone());
                continue;
            }
        };

        let selector = resolve_input_selector(fields, &rule.field_id);
        if selector == SELECTOR_NOT_FOUND {
            report.record(GapKind::UnresolvedReference, rule.field_id.to_string());
        }

        if !visible.is_empty() {
            visible.push(Value::from("or"));
        }

        let mut value_node = ElementNode::new();
        value_node.insert("value", predicate);
        let mut condition = ElementNode::new();
        condition.insert(selector, value_node);
        visible.push(Value::Node(condition));
    }

    let mut states = ElementNode::new();
    states.insert("visible", Value::List(visible));
    Some(Value::Node(states))
}

fn comparison(keyword: &str, value: &serde_json::Value) -> Value {
    let mut node = ElementNode::new();
    node.insert(keyword, Value::from(value.clone()));
    Value::Node(node)
}
