//! Synthetic source trait definition.

use rand::Rng;

use crate::error::Result;

/// Trait for generators that produce a synthetic record stream.
///
/// The random source is passed in by the caller and scoped to a single
/// pipeline invocation, so two invocations with different seeds never
/// share state. Given the same random source state, implementations must
/// produce the same records.
pub trait SyntheticSource: Send + Sync {
    /// Record type produced by this source.
    type Record;

    /// Source name, used in logs.
    fn name(&self) -> &str;

    /// Generate the full record sequence.
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Self::Record>>;
}
