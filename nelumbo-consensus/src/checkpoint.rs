//! Checkpoint-based trust decisions for candidate chains.
//!
//! Initial sync does not need to deep-validate the historic chain: the
//! hard-coded chain parameters name an assume-valid block, and every
//! ancestor of that block may skip script and signature checks. The
//! parameters also name a minimum cumulative work, and candidate chains
//! that fail to reach it are discarded before any per-block processing.
//!
//! The gate is advisory. It never mutates chain state, and a
//! skip-deep-validation answer only waives script and signature checks:
//! structural checks, proof of work, and the era reward check always run.

pub mod ancestry;
mod types;

pub use ancestry::{AncestryError, AncestryIndex, BlockIndex};
pub use types::Disposition;

#[cfg(test)]
mod tests;

use nelumbo_chain::{block, parameters::ChainParams, work::difficulty::PartialCumulativeWork};

/// Decides how much validation a candidate chain tip needs.
#[derive(Clone, Debug)]
pub struct CheckpointGate {
    /// The hard-coded parameters the gate trusts.
    params: ChainParams,
}

impl CheckpointGate {
    /// Returns a new gate that trusts `params`.
    pub fn new(params: ChainParams) -> Self {
        CheckpointGate { params }
    }

    /// Returns the chain parameters the gate was built from.
    pub fn params(&self) -> &ChainParams {
        &self.params
    }

    /// Classifies the candidate chain tip `hash`, whose chain carries
    /// cumulative `work`.
    ///
    /// The trust rule wins over the work rule: an ancestor of the
    /// assume-valid block is never rejected, no matter how little work its
    /// chain carried when it was classified.
    ///
    /// # Correctness
    ///
    /// Exactly one ancestry query is made per classification, so the answer
    /// is as consistent as the [`AncestryIndex`] view it is derived from.
    pub fn classify(
        &self,
        hash: block::Hash,
        work: PartialCumulativeWork,
        ancestry: &impl AncestryIndex,
    ) -> Disposition {
        // One query covers both "is the assume-valid block" and "is below
        // it": `is_ancestor` is inclusive of equality.
        if ancestry.is_ancestor(hash, self.params.assume_valid()) {
            return Disposition::SkipDeepValidation;
        }

        if work < self.params.minimum_chain_work() {
            return Disposition::Rejected;
        }

        Disposition::FullyValidate
    }
}
