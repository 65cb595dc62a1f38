//! Flat schema field.

use serde::{Deserialize, Serialize};

/// One field of a flattened schema.
///
/// Derived functionally from a [`SchemaNode`](super::SchemaNode) at flatten
/// time; carries no back-reference to the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaField {
    /// Dotted path from the root, e.g. "patient.id".
    pub name: String,
    /// Raw datatype spelling; "string" when the source row carried none.
    pub data_type: String,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub is_array: bool,
    /// Length embedded in the datatype, e.g. 50 for "String (50)".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SchemaField {
    /// Create a plain string field with no constraints.
    pub fn string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: "string".to_string(),
            is_required: false,
            is_array: false,
            max_length: None,
            description: None,
        }
    }
}
