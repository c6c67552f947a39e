use indexmap::IndexMap;
use serde::Serialize;

/// Attribute keys carry this prefix, which is what keeps them from ever
/// colliding with child-element keys inside the same node.
pub const ATTRIBUTE_PREFIX: char = '#';

/// An owned value inside an element node: a render-array attribute, a rule
/// predicate, or a nested node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    List(Vec<Value>),
    Node(ElementNode),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&ElementNode> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<ElementNode> for Value {
    fn from(node: ElementNode) -> Self {
        Value::Node(node)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => {
                let mut node = ElementNode::new();
                for (key, entry) in entries {
                    node.insert(key, Value::from(entry));
                }
                Value::Node(node)
            }
        }
    }
}

/// One target-schema tree node: an ordered mapping whose `#`-prefixed keys
/// are attributes and whose remaining keys name nested child nodes. The
/// top-level output document is itself an `ElementNode` holding only
/// children. Insertion order is preserved all the way into serialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ElementNode {
    entries: IndexMap<String, Value>,
}

impl ElementNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a raw entry under the given key, replacing any previous value
    /// while keeping its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Sets the attribute `#<name>`.
    pub fn set_attr(&mut self, name: &str, value: impl Into<Value>) {
        self.entries
            .insert(format!("{}{}", ATTRIBUTE_PREFIX, name), value.into());
    }

    /// Looks up the attribute `#<name>`.
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.entries.get(&format!("{}{}", ATTRIBUTE_PREFIX, name))
    }

    /// Inserts a nested child element under an unprefixed key.
    pub fn insert_child(&mut self, key: impl Into<String>, node: ElementNode) {
        self.entries.insert(key.into(), Value::Node(node));
    }

    /// Looks up a nested child element by its unprefixed key.
    pub fn child(&self, key: &str) -> Option<&ElementNode> {
        self.entries.get(key).and_then(Value::as_node)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// All keys in insertion order, attributes included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Child entries only, in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &ElementNode)> {
        self.entries.iter().filter_map(|(key, value)| {
            if key.starts_with(ATTRIBUTE_PREFIX) {
                None
            } else {
                value.as_node().map(|node| (key.as_str(), node))
            }
        })
    }

    pub fn child_count(&self) -> usize {
        self.children().count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
