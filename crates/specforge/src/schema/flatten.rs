//! Tree flattening.
//!
//! Pre-order traversal producing one [`SchemaField`] per node, grouping
//! nodes included, so the flat list never merges or drops anything:
//! `flatten_forest(f).len() == count_nodes(f)` for every forest.

use crate::parse::normalize::{classify_cardinality, max_length};

use super::field::SchemaField;
use super::node::SchemaNode;

/// Flatten a whole forest in document order.
pub fn flatten_forest(forest: &[SchemaNode]) -> Vec<SchemaField> {
    let mut fields = Vec::new();
    for node in forest {
        flatten_into(node, "", &mut fields);
    }
    fields
}

/// Flatten a single subtree.
pub fn flatten_node(node: &SchemaNode) -> Vec<SchemaField> {
    let mut fields = Vec::new();
    flatten_into(node, "", &mut fields);
    fields
}

fn flatten_into(node: &SchemaNode, parent_path: &str, fields: &mut Vec<SchemaField>) {
    let path = if parent_path.is_empty() {
        node.name.clone()
    } else {
        format!("{}.{}", parent_path, node.name)
    };

    // Classification comes from the node's own cardinality/datatype, never
    // inherited from ancestors.
    let occurrence = classify_cardinality(node.cardinality.as_deref());

    fields.push(SchemaField {
        name: path.clone(),
        data_type: node
            .data_type
            .clone()
            .unwrap_or_else(|| "string".to_string()),
        is_required: occurrence.required,
        is_array: occurrence.array,
        max_length: max_length(node.data_type.as_deref()),
        description: node.definition.clone(),
    });

    for child in &node.children {
        flatten_into(child, &path, fields);
    }
}
