//! Seeded recursive sample synthesis.

use crate::llm::SampleValueProvider;
use crate::parse::normalize::{classify_cardinality, strip_wrapping_quotes};
use crate::schema::{SchemaField, SchemaNode};

use super::record::{Record, SampleValue};
use super::request::SchemaSource;
use super::values::value_for_type;

/// Recursive record generator over one call-scoped RNG.
///
/// One synthesizer serves exactly one generation call: the RNG is seeded at
/// construction and never shared, which is what makes seeded output
/// byte-identical and concurrent calls race-free.
pub struct SampleSynthesizer<'a> {
    rng: fastrand::Rng,
    use_ai: bool,
    provider: Option<&'a dyn SampleValueProvider>,
}

impl<'a> SampleSynthesizer<'a> {
    /// Create a synthesizer for one generation call.
    pub fn new(
        seed: Option<u64>,
        use_ai: bool,
        provider: Option<&'a dyn SampleValueProvider>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self {
            rng,
            use_ai,
            provider,
        }
    }

    /// Generate `record_count` records from the resolved schema form.
    pub fn generate(&mut self, source: SchemaSource<'_>, record_count: u32) -> Vec<Record> {
        (0..record_count)
            .map(|_| match source {
                SchemaSource::Tree(forest) => self.record_from_tree(forest),
                SchemaSource::Fields(fields) => self.record_from_fields(fields),
            })
            .collect()
    }

    /// One record from a hierarchical forest.
    ///
    /// Wrapper elision: a forest whose single root is a non-array grouping
    /// with children emits those children at the top level instead of
    /// nesting them under the wrapper's name. Only that exact shape.
    fn record_from_tree(&mut self, forest: &[SchemaNode]) -> Record {
        let mut record = Record::new();

        if let [root] = forest
            && root.is_grouping()
            && !root.children.is_empty()
            && !classify_cardinality(root.cardinality.as_deref()).array
        {
            for child in &root.children {
                self.visit_node(child, &mut record);
            }
            return record;
        }

        for node in forest {
            self.visit_node(node, &mut record);
        }
        record
    }

    fn visit_node(&mut self, node: &SchemaNode, parent: &mut Record) {
        let occurrence = classify_cardinality(node.cardinality.as_deref());

        // Required fields always appear; optional ones get one coin flip
        // per record.
        if !occurrence.required && self.rng.f64() > 0.5 {
            return;
        }

        if node.is_container() {
            if occurrence.array {
                let count = self.rng.u32(1..=3);
                let mut items = Vec::new();
                for _ in 0..count {
                    let mut element = Record::new();
                    for child in &node.children {
                        self.visit_node(child, &mut element);
                    }
                    if !element.is_empty() {
                        items.push(SampleValue::Object(element));
                    }
                }
                if !items.is_empty() {
                    parent.insert(node.name.clone(), SampleValue::Array(items));
                }
            } else {
                let mut nested = Record::new();
                for child in &node.children {
                    self.visit_node(child, &mut nested);
                }
                if !nested.is_empty() {
                    parent.insert(node.name.clone(), SampleValue::Object(nested));
                }
            }
        } else if occurrence.array {
            let count = self.rng.u32(1..=3);
            let items = (0..count)
                .map(|_| {
                    self.leaf_value(
                        &node.name,
                        node.data_type.as_deref(),
                        node.definition.as_deref(),
                        node.sample_value.as_deref(),
                    )
                })
                .collect();
            parent.insert(node.name.clone(), SampleValue::Array(items));
        } else {
            let value = self.leaf_value(
                &node.name,
                node.data_type.as_deref(),
                node.definition.as_deref(),
                node.sample_value.as_deref(),
            );
            parent.insert(node.name.clone(), value);
        }
    }

    /// One record from a flat field list.
    fn record_from_fields(&mut self, fields: &[SchemaField]) -> Record {
        let mut record = Record::new();
        for field in fields {
            self.visit_field(field, &mut record);
        }
        record
    }

    fn visit_field(&mut self, field: &SchemaField, parent: &mut Record) {
        if !field.is_required && self.rng.f64() > 0.5 {
            return;
        }

        if field.is_array {
            let count = self.rng.u32(1..=3);
            let items = (0..count)
                .map(|_| {
                    self.leaf_value(
                        &field.name,
                        Some(&field.data_type),
                        field.description.as_deref(),
                        None,
                    )
                })
                .collect();
            parent.insert(field.name.clone(), SampleValue::Array(items));
        } else {
            let value = self.leaf_value(
                &field.name,
                Some(&field.data_type),
                field.description.as_deref(),
                None,
            );
            parent.insert(field.name.clone(), value);
        }
    }

    /// Value precedence: literal sample value, then the external provider
    /// (when enabled), then deterministic datatype dispatch. Provider
    /// failures and declines fall through silently.
    fn leaf_value(
        &mut self,
        name: &str,
        data_type: Option<&str>,
        description: Option<&str>,
        sample_value: Option<&str>,
    ) -> SampleValue {
        if let Some(sample) = sample_value
            && !sample.trim().is_empty()
        {
            return SampleValue::String(strip_wrapping_quotes(sample));
        }

        if self.use_ai
            && let Some(provider) = self.provider
            && let Ok(Some(value)) = provider.generate_value(name, data_type, description)
        {
            return SampleValue::String(strip_wrapping_quotes(&value));
        }

        value_for_type(&mut self.rng, data_type, name)
    }
}
