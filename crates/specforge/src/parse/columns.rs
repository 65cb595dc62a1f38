//! Column role detection.
//!
//! Legacy documents carry their metadata in whichever columns the authoring
//! spreadsheet happened to use. The roles are recovered from the first
//! non-blank row by keyword containment; absent roles simply disable the
//! matching feature for that document.

use crate::parse::normalize::trim_all;

/// Semantic column indices for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnRoles {
    /// Column where element names (and the indentation hierarchy) start.
    pub element_name: usize,
    pub data_type: Option<usize>,
    pub cardinality: Option<usize>,
    pub definition: Option<usize>,
    pub remarks: Option<usize>,
    pub significance: Option<usize>,
    pub fhir_mapping: Option<usize>,
}

impl ColumnRoles {
    /// Detect roles from the first non-blank row's cells.
    ///
    /// Columns are scanned in ascending order and a later match overwrites
    /// an earlier one, so the rightmost matching column wins for each role.
    pub fn detect(cells: &[String]) -> Self {
        let mut roles = ColumnRoles::default();

        for (index, cell) in cells.iter().enumerate() {
            let value = match trim_all(cell) {
                Some(v) => v.to_lowercase().replace([' ', '\n', '\r'], ""),
                None => continue,
            };

            if value.contains("elementname") {
                roles.element_name = index;
            } else if value.contains("definition") && !value.contains("fhir") {
                roles.definition = Some(index);
            } else if value.contains("remarks") || value.contains("samplevalue") {
                roles.remarks = Some(index);
            } else if value.contains("significance") {
                roles.significance = Some(index);
            } else if value.contains("cardinality") {
                roles.cardinality = Some(index);
            } else if value.contains("datatype") || value.contains("data type") {
                roles.data_type = Some(index);
            } else if value.contains("fhirmapping") || value.contains("fhir mapping") {
                roles.fhir_mapping = Some(index);
            }
        }

        roles
    }

    /// Fetch a cell by optional role index; blank cells read as None.
    pub fn cell<'a>(row: &'a [String], index: Option<usize>) -> Option<&'a str> {
        let value = row.get(index?)?;
        if value.trim().is_empty() {
            None
        } else {
            Some(value.as_str())
        }
    }
}
