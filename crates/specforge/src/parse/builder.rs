//! Hierarchy recovery from column-indented rows.
//!
//! A stack machine walks the row stream once. Each row becomes a node whose
//! nesting level is the column offset of its first non-blank cell; the stack
//! holds the currently-open ancestors. Levels may jump by more than one and
//! typed field rows may acquire children; both are legacy realities the
//! builder tolerates rather than corrects.

use crate::input::RowTable;
use crate::schema::{NodeKind, SchemaNode};

use super::columns::ColumnRoles;
use super::normalize::{
    extract_sample_value, normalize_cardinality, normalize_data_type, trim_all,
};

/// How many columns past the ElementName column to scan for the first
/// non-blank cell. Rows with nothing in the window are dropped.
const LEVEL_WINDOW: usize = 20;

/// Builds a schema forest from tokenized rows.
pub struct HierarchyBuilder {
    roles: ColumnRoles,
}

impl HierarchyBuilder {
    /// Create a builder with detected column roles.
    pub fn new(roles: ColumnRoles) -> Self {
        Self { roles }
    }

    /// Build the forest for a whole table.
    pub fn build(&self, table: &RowTable) -> Vec<SchemaNode> {
        self.build_rows(table.rows())
    }

    /// Build the forest from raw rows.
    ///
    /// Empty or fully malformed input yields an empty forest, never an
    /// error; callers fall back to a simpler field list when no roots come
    /// out.
    pub fn build_rows(&self, rows: &[Vec<String>]) -> Vec<SchemaNode> {
        let mut roots: Vec<SchemaNode> = Vec::new();
        let mut stack: Vec<SchemaNode> = Vec::new();
        // Only the first non-blank row is eligible for header elision; once
        // it has been judged (either way), later header-like rows are
        // ordinary data nodes.
        let mut header_candidate = true;

        for row in rows {
            if RowTable::is_blank_row(row) {
                continue;
            }

            if header_candidate {
                header_candidate = false;
                if self.looks_like_header(row) {
                    continue;
                }
            }

            let Some((name, level)) = self.element_and_level(row) else {
                continue;
            };

            let node = self.make_node(row, name, level);

            while stack.last().is_some_and(|top| top.level >= level) {
                if let Some(finished) = stack.pop() {
                    Self::attach(finished, &mut stack, &mut roots);
                }
            }

            stack.push(node);
        }

        while let Some(finished) = stack.pop() {
            Self::attach(finished, &mut stack, &mut roots);
        }

        roots
    }

    /// Attach a finished node to the node below it, or to the forest.
    fn attach(node: SchemaNode, stack: &mut Vec<SchemaNode>, roots: &mut Vec<SchemaNode>) {
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => roots.push(node),
        }
    }

    /// Header test for the first non-blank row: the designated ElementName
    /// cell or its right neighbor contains "Element" or "Name".
    fn looks_like_header(&self, row: &[String]) -> bool {
        let start = self.roles.element_name;
        row.iter()
            .skip(start)
            .take(2)
            .filter_map(|cell| trim_all(cell))
            .any(|cell| {
                let lower = cell.to_lowercase();
                lower.contains("element") || lower.contains("name")
            })
    }

    /// Find the element name and level for a row: the first non-blank cell
    /// within the window, its offset from the ElementName column being the
    /// level.
    fn element_and_level(&self, row: &[String]) -> Option<(String, usize)> {
        let start = self.roles.element_name;
        for col in start..start + LEVEL_WINDOW {
            if let Some(trimmed) = row.get(col).and_then(|cell| trim_all(cell)) {
                return Some((trimmed, col - start));
            }
        }
        None
    }

    fn make_node(&self, row: &[String], name: String, level: usize) -> SchemaNode {
        let data_type = ColumnRoles::cell(row, self.roles.data_type).and_then(normalize_data_type);
        let cardinality =
            ColumnRoles::cell(row, self.roles.cardinality).and_then(normalize_cardinality);
        let definition = ColumnRoles::cell(row, self.roles.definition).and_then(trim_all);
        let sample_value =
            ColumnRoles::cell(row, self.roles.remarks).and_then(extract_sample_value);
        let significance = ColumnRoles::cell(row, self.roles.significance).and_then(trim_all);
        let fhir_mapping = ColumnRoles::cell(row, self.roles.fhir_mapping).and_then(trim_all);

        let kind = if data_type
            .as_deref()
            .is_some_and(|d| d.eq_ignore_ascii_case("grouping"))
        {
            NodeKind::Grouping
        } else {
            NodeKind::Field
        };

        SchemaNode {
            name,
            level,
            kind,
            data_type,
            cardinality,
            definition,
            sample_value,
            fhir_mapping,
            significance,
            children: Vec::new(),
        }
    }
}
