//! Supporting types for checkpoint-based trust decisions

use Disposition::*;

/// The amount of validation a candidate chain tip needs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Disposition {
    /// The candidate has not been classified yet.
    ///
    /// Every candidate starts out unchecked; [`classify`] never returns this
    /// variant.
    ///
    /// [`classify`]: super::CheckpointGate::classify
    #[default]
    Unchecked,

    /// The candidate is the assume-valid block or one of its ancestors.
    ///
    /// Script and signature checks may be skipped for it. Structural checks,
    /// proof of work, and the era reward check still run, so an assume-valid
    /// hash cannot waive the reward schedule.
    SkipDeepValidation,

    /// The candidate needs every check.
    FullyValidate,

    /// The candidate's chain carries too little total work to be worth any
    /// per-block processing.
    Rejected,
}

impl Disposition {
    /// Returns `true` if the candidate may skip script and signature checks.
    pub fn skips_deep_validation(&self) -> bool {
        matches!(self, SkipDeepValidation)
    }

    /// Returns `true` if the candidate's chain should be discarded.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Rejected)
    }
}
