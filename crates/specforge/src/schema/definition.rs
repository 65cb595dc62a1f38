//! Named flat schema definition.

use serde::{Deserialize, Serialize};

use super::field::SchemaField;

/// A named, flat view of a parsed schema: the shape exchanged with
/// generation requests and emitted for callers that do not consume trees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDefinition {
    pub name: String,
    /// Source format the schema was recovered from (csv, tsv, ...).
    #[serde(default)]
    pub source_type: String,
    #[serde(default)]
    pub fields: Vec<SchemaField>,
}

impl SchemaDefinition {
    /// Create a definition from parsed fields.
    pub fn new(
        name: impl Into<String>,
        source_type: impl Into<String>,
        fields: Vec<SchemaField>,
    ) -> Self {
        Self {
            name: name.into(),
            source_type: source_type.into(),
            fields,
        }
    }

    /// Number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Look up a field by its dotted path.
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }
}
