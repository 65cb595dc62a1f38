//! Generation request and schema source resolution.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpecForgeError};
use crate::schema::{SchemaDefinition, SchemaField, SchemaNode};

/// Request for one sample generation call.
///
/// Exactly one schema form must resolve: a non-empty hierarchical forest
/// wins over a flat definition; neither present is an invalid request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Hierarchical schema forest, as produced by the parser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchical_schema: Option<Vec<SchemaNode>>,
    /// Flat schema definition, as produced by flattening or the header
    /// fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_definition: Option<SchemaDefinition>,
    /// Number of records to generate; must be at least 1.
    #[serde(default = "default_record_count")]
    pub record_count: u32,
    /// RNG seed. Identical seed + identical schema gives byte-identical
    /// output; omitted means a randomly seeded call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Whether to consult the external value provider.
    #[serde(default)]
    pub use_ai: bool,
}

fn default_record_count() -> u32 {
    1
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            hierarchical_schema: None,
            schema_definition: None,
            record_count: 1,
            seed: None,
            use_ai: false,
        }
    }
}

impl GenerationRequest {
    /// Request generation from a hierarchical forest.
    pub fn from_tree(forest: Vec<SchemaNode>) -> Self {
        Self {
            hierarchical_schema: Some(forest),
            ..Self::default()
        }
    }

    /// Request generation from a flat definition.
    pub fn from_definition(definition: SchemaDefinition) -> Self {
        Self {
            schema_definition: Some(definition),
            ..Self::default()
        }
    }

    /// Set the number of records.
    pub fn with_record_count(mut self, count: u32) -> Self {
        self.record_count = count;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable the external value provider.
    pub fn with_ai(mut self, use_ai: bool) -> Self {
        self.use_ai = use_ai;
        self
    }

    /// Validate the request and resolve which schema form drives synthesis.
    pub fn source(&self) -> Result<SchemaSource<'_>> {
        if self.record_count == 0 {
            return Err(SpecForgeError::InvalidRequest(
                "recordCount must be at least 1".to_string(),
            ));
        }

        if let Some(forest) = &self.hierarchical_schema
            && !forest.is_empty()
        {
            return Ok(SchemaSource::Tree(forest));
        }

        if let Some(definition) = &self.schema_definition {
            return Ok(SchemaSource::Fields(&definition.fields));
        }

        Err(SpecForgeError::InvalidRequest(
            "either hierarchicalSchema or schemaDefinition must be provided".to_string(),
        ))
    }
}

/// The schema form a generation call runs against.
#[derive(Debug, Clone, Copy)]
pub enum SchemaSource<'a> {
    Tree(&'a [SchemaNode]),
    Fields(&'a [SchemaField]),
}
