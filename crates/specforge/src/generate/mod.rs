//! Deterministic sample record synthesis.

mod record;
mod request;
mod synthesizer;
mod values;

pub use record::{Record, SampleValue};
pub use request::{GenerationRequest, SchemaSource};
pub use synthesizer::SampleSynthesizer;

use crate::error::Result;
use crate::llm::SampleValueProvider;

/// Run one generation call.
///
/// Validates the request, seeds a fresh call-scoped RNG, and produces
/// exactly `recordCount` records. The provider is only consulted when the
/// request enables AI-assist.
pub fn generate_samples(
    request: &GenerationRequest,
    provider: Option<&dyn SampleValueProvider>,
) -> Result<Vec<Record>> {
    let source = request.source()?;
    let mut synthesizer = SampleSynthesizer::new(request.seed, request.use_ai, provider);
    Ok(synthesizer.generate(source, request.record_count))
}
