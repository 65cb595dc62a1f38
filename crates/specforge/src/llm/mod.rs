//! External value generation hook.
//!
//! Sample synthesis can consult a pluggable provider (an LLM-backed service
//! in the enclosing system) for realistic field values. The hook is strictly
//! best-effort: any failure, timeout, or declined field falls back to
//! deterministic synthesis, and the core itself performs no network I/O;
//! real providers live with the caller.

mod mock;
mod provider;
mod stub;

pub use mock::MockProvider;
pub use provider::SampleValueProvider;
pub use stub::StubProvider;
