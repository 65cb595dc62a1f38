//! SpecForge: schema recovery and sample synthesis for legacy
//! interface-specification spreadsheets.
//!
//! Institutions publish interface specifications as semi-structured
//! spreadsheets: hierarchy is encoded by which column a cell occupies,
//! cardinality and type metadata is free text, and sample values hide in
//! prose remarks. SpecForge recovers a typed schema tree from that format
//! and deterministically synthesizes structurally valid sample records
//! from the tree or its flattened form.
//!
//! # Core Principles
//!
//! - **Degrade, never crash**: malformed cells normalize to nothing, empty
//!   input parses to an empty schema, and a failed hierarchy falls back to
//!   a plain header read.
//! - **Deterministic**: the same seed and schema always produce
//!   byte-identical records; the RNG is scoped to a single call.
//! - **Best-effort assistance**: an optional external value provider can
//!   supply realistic values, but its failures silently defer to
//!   deterministic synthesis.
//!
//! # Example
//!
//! ```
//! use specforge::{GenerationRequest, SpecForge};
//!
//! let content = "\
//! Element Name,,Data Type,Cardinality
//! patient,,Grouping,1
//! ,id,String (10),1
//! ";
//!
//! let forge = SpecForge::new();
//! let parsed = forge.parse("patient-spec", content).unwrap();
//! assert_eq!(parsed.field_count(), 2);
//!
//! let request = GenerationRequest::from_tree(parsed.roots).with_seed(7);
//! let records = forge.generate(&request).unwrap();
//! assert_eq!(records.len(), 1);
//! ```

pub mod error;
pub mod generate;
pub mod input;
pub mod llm;
pub mod parse;
pub mod schema;

mod specforge;

pub use crate::specforge::{ParseStrategy, ParsedSchema, SpecForge, SpecForgeConfig};
pub use error::{Result, SpecForgeError};
pub use generate::{GenerationRequest, Record, SampleSynthesizer, SampleValue, generate_samples};
pub use input::{RowTable, SourceMetadata, Tokenizer, TokenizerConfig};
pub use llm::{MockProvider, SampleValueProvider, StubProvider};
pub use parse::{ColumnRoles, HierarchyBuilder, Occurrence, classify_cardinality};
pub use schema::{
    NodeKind, SchemaDefinition, SchemaField, SchemaNode, count_nodes, flatten_forest, flatten_node,
};
