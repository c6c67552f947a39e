use serde::{Deserialize, Serialize};
use std::fmt;

/// The identifier of a field within one export. The source format writes ids
/// as numbers (`3`, `7.3`) or strings (`"3"`) interchangeably, and rule
/// references do not always match the spelling of the field they point at,
/// so equality is loose across the two representations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldId {
    Number(serde_json::Number),
    Text(String),
}

impl PartialEq for FieldId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldId::Number(a), FieldId::Number(b)) => a == b,
            (FieldId::Text(a), FieldId::Text(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldId::Number(n) => write!(f, "{}", n),
            FieldId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for FieldId {
    fn from(id: u64) -> Self {
        FieldId::Number(serde_json::Number::from(id))
    }
}

impl From<&str> for FieldId {
    fn from(id: &str) -> Self {
        FieldId::Text(id.to_string())
    }
}

/// The field-type vocabulary of the source format.
///
/// Unrecognized type strings are preserved in `Unknown` so that the key
/// fallback scheme and gap reporting can echo the original spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Page,
    Section,
    Text,
    Textarea,
    Email,
    Content,
    Select,
    Date,
    Radio,
    FileUpload,
    Checkbox,
    Phone,
    List,
    Name,
    Signer,
    Unknown(String),
}

impl FieldKind {
    /// The type string as it appears in the source document.
    pub fn source_name(&self) -> &str {
        match self {
            FieldKind::Page => "page",
            FieldKind::Section => "section",
            FieldKind::Text => "text",
            FieldKind::Textarea => "textarea",
            FieldKind::Email => "email",
            FieldKind::Content => "content",
            FieldKind::Select => "select",
            FieldKind::Date => "date",
            FieldKind::Radio => "radio",
            FieldKind::FileUpload => "fileupload",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Phone => "phone",
            FieldKind::List => "list",
            FieldKind::Name => "name",
            FieldKind::Signer => "signer",
            FieldKind::Unknown(name) => name,
        }
    }

    /// Whether this field opens a group rather than describing an input.
    pub fn is_structural(&self) -> bool {
        matches!(self, FieldKind::Page | FieldKind::Section)
    }

    /// Whether this field expands into synthesized child elements.
    pub fn is_composite(&self) -> bool {
        matches!(self, FieldKind::Name | FieldKind::Signer | FieldKind::List)
    }
}

impl From<String> for FieldKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "page" => FieldKind::Page,
            "section" => FieldKind::Section,
            "text" => FieldKind::Text,
            "textarea" => FieldKind::Textarea,
            "email" => FieldKind::Email,
            "content" => FieldKind::Content,
            "select" => FieldKind::Select,
            "date" => FieldKind::Date,
            "radio" => FieldKind::Radio,
            "fileupload" => FieldKind::FileUpload,
            "checkbox" => FieldKind::Checkbox,
            "phone" => FieldKind::Phone,
            "list" => FieldKind::List,
            "name" => FieldKind::Name,
            "signer" => FieldKind::Signer,
            _ => FieldKind::Unknown(name),
        }
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.source_name().to_string()
    }
}

/// One entry of a choice-bearing field (`select`, `radio`, `checkbox`, `list`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub text: String,
    pub value: String,
}

/// The visibility action a conditional-logic block requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConditionAction {
    Show,
    Hide,
    Other(String),
}

impl ConditionAction {
    pub fn source_name(&self) -> &str {
        match self {
            ConditionAction::Show => "show",
            ConditionAction::Hide => "hide",
            ConditionAction::Other(name) => name,
        }
    }
}

impl From<String> for ConditionAction {
    fn from(name: String) -> Self {
        match name.as_str() {
            "show" => ConditionAction::Show,
            "hide" => ConditionAction::Hide,
            _ => ConditionAction::Other(name),
        }
    }
}

impl From<ConditionAction> for String {
    fn from(action: ConditionAction) -> Self {
        action.source_name().to_string()
    }
}

/// The comparison operator of one conditional rule. Operators outside the
/// translated set are preserved for gap reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConditionOperator {
    Is,
    GreaterThan,
    LessThan,
    LessThanOrEqual,
    Other(String),
}

impl ConditionOperator {
    pub fn source_name(&self) -> &str {
        match self {
            ConditionOperator::Is => "is",
            ConditionOperator::GreaterThan => ">",
            ConditionOperator::LessThan => "<",
            ConditionOperator::LessThanOrEqual => "<=",
            ConditionOperator::Other(name) => name,
        }
    }
}

impl From<String> for ConditionOperator {
    fn from(name: String) -> Self {
        match name.as_str() {
            "is" => ConditionOperator::Is,
            ">" => ConditionOperator::GreaterThan,
            "<" => ConditionOperator::LessThan,
            "<=" => ConditionOperator::LessThanOrEqual,
            _ => ConditionOperator::Other(name),
        }
    }
}

impl From<ConditionOperator> for String {
    fn from(operator: ConditionOperator) -> Self {
        operator.source_name().to_string()
    }
}

/// A predicate over another field's submitted value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalRule {
    pub field_id: FieldId,
    pub operator: ConditionOperator,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// The conditional-visibility block a field can carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalLogic {
    pub action_type: ConditionAction,
    #[serde(default)]
    pub rules: Vec<ConditionalRule>,
}

/// One entry of the flat field sequence: a page break, a section heading,
/// or a single form input.
///
/// Unknown keys in the export are ignored; the loosely typed source
/// attributes (`maxLength`, `minLength`) are kept as raw JSON values and
/// copied verbatim into the output when truthy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRecord {
    pub id: FieldId,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub is_required: Option<bool>,
    #[serde(default)]
    pub max_length: Option<serde_json::Value>,
    #[serde(default)]
    pub min_length: Option<serde_json::Value>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
    #[serde(default)]
    pub conditional_logic: Option<ConditionalLogic>,
}

impl FieldRecord {
    /// Creates a bare record of the given kind with no optional attributes.
    pub fn new(kind: FieldKind, id: FieldId) -> Self {
        Self {
            id,
            kind,
            label: None,
            description: None,
            content: None,
            is_required: None,
            max_length: None,
            min_length: None,
            placeholder: None,
            choices: None,
            conditional_logic: None,
        }
    }
}
