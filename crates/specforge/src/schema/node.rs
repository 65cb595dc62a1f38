//! Hierarchical schema tree node.

use serde::{Deserialize, Serialize};

/// Structural role of a node, fixed when the builder constructs it.
///
/// The tag is not part of the wire shape; trees deserialized from existing
/// documents recover their classification through the legacy vocabulary
/// check in [`SchemaNode::is_grouping`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeKind {
    /// Pure container with no scalar value of its own.
    Grouping,
    /// A concrete field (which may still carry children; legacy documents
    /// indent rows under typed fields and the builder keeps them).
    #[default]
    Field,
}

/// A node in the recovered schema tree.
///
/// Built once per parse call and read-only afterward; flattening and
/// generation never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
    /// Element name from the first non-blank indented cell.
    pub name: String,
    /// Nesting depth, derived from the column offset. Levels may jump by
    /// more than one between consecutive rows.
    #[serde(default)]
    pub level: usize,
    /// Structural role chosen at construction time.
    #[serde(skip)]
    pub kind: NodeKind,
    /// Raw datatype spelling, length suffix included (e.g. "String (50)").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    /// Raw cardinality spelling, canonicalized to the triple-dot form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardinality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// Literal sample value extracted from the remarks column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fhir_mapping: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub significance: Option<String>,
    /// Child nodes in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SchemaNode>,
}

impl SchemaNode {
    /// Create a bare node; the builder fills in the metadata.
    pub fn new(name: impl Into<String>, level: usize) -> Self {
        Self {
            name: name.into(),
            level,
            kind: NodeKind::Field,
            data_type: None,
            cardinality: None,
            definition: None,
            sample_value: None,
            fhir_mapping: None,
            significance: None,
            children: Vec::new(),
        }
    }

    /// Whether this node is a grouping container.
    ///
    /// The construction-time tag decides; for nodes that arrived without one
    /// (deserialized legacy documents) the case-insensitive "Grouping"
    /// datatype vocabulary is checked instead.
    pub fn is_grouping(&self) -> bool {
        self.kind == NodeKind::Grouping
            || self
                .data_type
                .as_deref()
                .is_some_and(|d| d.trim().eq_ignore_ascii_case("grouping"))
    }

    /// Whether generation should nest into this node.
    ///
    /// A node with children nests only when it carries no datatype or is a
    /// grouping; a typed field that acquired children still generates as a
    /// leaf (legacy behavior, kept).
    pub fn is_container(&self) -> bool {
        if self.children.is_empty() {
            return false;
        }
        match self.data_type.as_deref() {
            None => true,
            Some(d) if d.trim().is_empty() => true,
            Some(_) => self.is_grouping(),
        }
    }

    /// Number of nodes in this subtree, itself included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SchemaNode::node_count).sum::<usize>()
    }
}

/// Number of nodes across a whole forest.
pub fn count_nodes(forest: &[SchemaNode]) -> usize {
    forest.iter().map(SchemaNode::node_count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_grouping_from_kind() {
        let mut node = SchemaNode::new("patient", 0);
        node.kind = NodeKind::Grouping;
        assert!(node.is_grouping());
    }

    #[test]
    fn test_is_grouping_legacy_vocabulary() {
        // Deserialized trees lose the tag; the datatype check recovers it.
        let mut node = SchemaNode::new("patient", 0);
        node.data_type = Some("grouping".to_string());
        assert!(node.is_grouping());

        node.data_type = Some("GROUPING".to_string());
        assert!(node.is_grouping());

        node.data_type = Some("String".to_string());
        assert!(!node.is_grouping());
    }

    #[test]
    fn test_typed_field_with_children_is_not_container() {
        let mut node = SchemaNode::new("id", 0);
        node.data_type = Some("String".to_string());
        node.children.push(SchemaNode::new("stray", 1));
        assert!(!node.is_container());
    }

    #[test]
    fn test_untyped_node_with_children_is_container() {
        let mut node = SchemaNode::new("wrapper", 0);
        node.children.push(SchemaNode::new("child", 1));
        assert!(node.is_container());
    }

    #[test]
    fn test_node_count() {
        let mut root = SchemaNode::new("a", 0);
        let mut b = SchemaNode::new("b", 1);
        b.children.push(SchemaNode::new("c", 2));
        root.children.push(b);
        root.children.push(SchemaNode::new("d", 1));
        assert_eq!(root.node_count(), 4);
        assert_eq!(count_nodes(std::slice::from_ref(&root)), 4);
    }

    #[test]
    fn test_wire_shape_omits_kind_and_empty_children() {
        let mut node = SchemaNode::new("id", 1);
        node.kind = NodeKind::Grouping;
        node.data_type = Some("Grouping".to_string());

        let json = serde_json::to_value(&node).unwrap();
        assert!(json.get("kind").is_none());
        assert!(json.get("children").is_none());
        assert_eq!(json["dataType"], "Grouping");

        // Round trip: the tag defaults to Field but the vocabulary check
        // still classifies the node as a grouping.
        let back: SchemaNode = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind, NodeKind::Field);
        assert!(back.is_grouping());
    }
}
