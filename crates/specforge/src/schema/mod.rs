//! Schema tree and flat field representations.

mod definition;
mod field;
mod flatten;
mod node;

pub use definition::SchemaDefinition;
pub use field::SchemaField;
pub use flatten::{flatten_forest, flatten_node};
pub use node::{NodeKind, SchemaNode, count_nodes};
