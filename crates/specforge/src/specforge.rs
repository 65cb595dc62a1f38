//! Main SpecForge struct and public API.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::generate::{GenerationRequest, Record, generate_samples};
use crate::input::{RowTable, SourceMetadata, Tokenizer, TokenizerConfig};
use crate::llm::SampleValueProvider;
use crate::parse::{ColumnRoles, HierarchyBuilder};
use crate::schema::{SchemaDefinition, SchemaField, SchemaNode, flatten_forest};

/// Configuration for SpecForge parsing.
#[derive(Debug, Clone, Default)]
pub struct SpecForgeConfig {
    /// Tokenizer configuration.
    pub tokenizer: TokenizerConfig,
}

/// Which strategy produced a parsed schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseStrategy {
    /// Column-indentation hierarchy was recovered.
    Hierarchical,
    /// Fallback: the first non-blank row was read as a plain header.
    Simple,
}

/// Result of parsing one specification document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSchema {
    /// Flat, named view of the schema (always populated).
    pub definition: SchemaDefinition,
    /// Recovered tree; empty when the simple fallback was used.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roots: Vec<SchemaNode>,
    /// Metadata about the source text.
    pub source: SourceMetadata,
    /// Strategy that produced the fields.
    pub strategy: ParseStrategy,
}

impl ParsedSchema {
    /// Number of top-level roots in the recovered tree.
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Number of flat fields.
    pub fn field_count(&self) -> usize {
        self.definition.fields.len()
    }
}

/// The main schema-recovery and sample-synthesis engine.
///
/// Parsing is pure over its inputs; one instance may serve any number of
/// concurrent calls. Generation seeds a fresh RNG per call.
pub struct SpecForge {
    tokenizer: Tokenizer,
    provider: Option<Arc<dyn SampleValueProvider>>,
}

impl SpecForge {
    /// Create a new instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(SpecForgeConfig::default())
    }

    /// Create an instance with custom configuration.
    pub fn with_config(config: SpecForgeConfig) -> Self {
        Self {
            tokenizer: Tokenizer::with_config(config.tokenizer),
            provider: None,
        }
    }

    /// Attach an external value provider for AI-assisted generation.
    ///
    /// The provider is only consulted by requests that set `useAi`; its
    /// failures always fall back to deterministic synthesis.
    pub fn with_provider(mut self, provider: impl SampleValueProvider + 'static) -> Self {
        self.provider = Some(Arc::new(provider));
        self
    }

    /// Parse a specification document into a schema.
    ///
    /// Tries hierarchical recovery first; when no roots come out the
    /// simple header fallback produces a flat string-field list instead.
    /// Empty input yields an empty definition, not an error.
    pub fn parse(&self, name: &str, content: &str) -> Result<ParsedSchema> {
        let table = self.tokenizer.tokenize(content)?;
        let source = SourceMetadata::from_content(content, &table);

        let roles = table
            .first_non_blank()
            .map(ColumnRoles::detect)
            .unwrap_or_default();
        let roots = HierarchyBuilder::new(roles).build(&table);

        let (fields, strategy) = if roots.is_empty() {
            (simple_header_fields(&table), ParseStrategy::Simple)
        } else {
            (flatten_forest(&roots), ParseStrategy::Hierarchical)
        };

        let definition = SchemaDefinition::new(name, table.format(), fields);

        Ok(ParsedSchema {
            definition,
            roots,
            source,
            strategy,
        })
    }

    /// Generate sample records with this instance's provider.
    pub fn generate(&self, request: &GenerationRequest) -> Result<Vec<Record>> {
        generate_samples(request, self.provider.as_deref())
    }
}

impl Default for SpecForge {
    fn default() -> Self {
        Self::new()
    }
}

/// Header-based fallback: every non-blank cell of the first non-blank row
/// becomes an unconstrained string field.
fn simple_header_fields(table: &RowTable) -> Vec<SchemaField> {
    let Some(header) = table.first_non_blank() else {
        return Vec::new();
    };

    header
        .iter()
        .filter(|cell| !cell.trim().is_empty())
        .map(|cell| SchemaField::string(cell.trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hierarchical_document() {
        let content = "\
Element Name,,Data Type,Cardinality
patient,,Grouping,1
,id,String (10),1
,name,String,0 … 1
";
        let forge = SpecForge::new();
        let parsed = forge.parse("patient-spec", content).unwrap();

        assert_eq!(parsed.strategy, ParseStrategy::Hierarchical);
        assert_eq!(parsed.root_count(), 1);
        assert_eq!(parsed.field_count(), 3);
        assert_eq!(parsed.definition.name, "patient-spec");
        assert_eq!(parsed.definition.source_type, "csv");
        assert_eq!(parsed.definition.fields[1].name, "patient.id");
    }

    #[test]
    fn test_parse_falls_back_to_simple_header() {
        // A lone header row: elided by the builder, so zero roots come out
        // and the simple strategy reads it as plain field names.
        let content = "name,age,city\n";
        let forge = SpecForge::new();
        let parsed = forge.parse("plain", content).unwrap();

        assert_eq!(parsed.strategy, ParseStrategy::Simple);
        assert_eq!(parsed.root_count(), 0);
        let names: Vec<&str> = parsed
            .definition
            .fields
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["name", "age", "city"]);
        assert!(parsed.definition.fields.iter().all(|f| f.data_type == "string"));
    }

    #[test]
    fn test_parse_empty_input_is_not_an_error() {
        let forge = SpecForge::new();
        let parsed = forge.parse("empty", "").unwrap();
        assert_eq!(parsed.strategy, ParseStrategy::Simple);
        assert_eq!(parsed.field_count(), 0);
        assert_eq!(parsed.source.row_count, 0);
    }

    #[test]
    fn test_generate_via_facade() {
        let content = "\
Element Name,,Data Type,Cardinality
patient,,Grouping,1
,id,String,1
";
        let forge = SpecForge::new();
        let parsed = forge.parse("p", content).unwrap();

        let request = GenerationRequest::from_tree(parsed.roots)
            .with_seed(7)
            .with_record_count(2);
        let records = forge.generate(&request).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["id"].as_str(), Some("sample_id"));
    }

    #[test]
    fn test_parsed_schema_round_trips_through_json() {
        let content = "\
Element Name,,Data Type,Cardinality
patient,,Grouping,1
,id,String,1
";
        let forge = SpecForge::new();
        let parsed = forge.parse("p", content).unwrap();

        let json = serde_json::to_string(&parsed).unwrap();
        let back: ParsedSchema = serde_json::from_str(&json).unwrap();
        assert_eq!(back.definition, parsed.definition);
        assert_eq!(back.root_count(), 1);
        // The construction-time tag is not serialized; the legacy
        // vocabulary check still classifies the deserialized root.
        assert!(back.roots[0].is_grouping());
        assert_eq!(back.roots[0].children, parsed.roots[0].children);
    }
}
