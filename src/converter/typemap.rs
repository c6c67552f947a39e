use crate::field::FieldKind;
use ahash::AHashMap;

/// The source-type to target-type mapping table, injected into a conversion
/// rather than baked in as a global, so individual conversions can override
/// or extend it.
#[derive(Debug, Clone)]
pub struct TypeMap {
    entries: AHashMap<String, String>,
}

impl Default for TypeMap {
    fn default() -> Self {
        let mut entries = AHashMap::new();
        for (source, target) in [
            ("page", "wizard_page"),
            ("section", "section"),
            ("text", "textfield"),
            ("textarea", "textarea"),
            ("email", "email"),
            ("content", "markup"),
            ("select", "select"),
            ("date", "date"),
            ("radio", "radios"),
            ("fileupload", "managed_file"),
            ("checkbox", "checkbox"),
            ("phone", "tel"),
            ("list", "fieldset"),
        ] {
            entries.insert(source.to_string(), target.to_string());
        }
        Self { entries }
    }
}

impl TypeMap {
    /// Creates a map seeded with the default table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a mapping.
    pub fn insert(&mut self, source_type: &str, target_type: &str) {
        self.entries
            .insert(source_type.to_string(), target_type.to_string());
    }

    /// Looks up the target type for a field kind, by its source spelling.
    pub fn resolve(&self, kind: &FieldKind) -> Option<&str> {
        self.entries.get(kind.source_name()).map(String::as_str)
    }
}
