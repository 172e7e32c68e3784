//! Chain work for the Lotus protocol.
//!
//! Cumulative work values are used to compare competing chains and to apply
//! the minimum-chain-work threshold during initial sync. This module does not
//! implement the block header difficulty fields; the checkpoint gate and the
//! chain parameters only need cumulative work arithmetic.

use std::fmt;

pub use crate::work::u256::U256;

/// A 128 bit measure of the amount of work a chain contains.
///
/// Cumulative work constants are published as 256-bit values, but we store
/// work as u128, rather than the implied u256. We don't expect the total
/// chain work to ever exceed 2^128. (Each extra bit represents twice as much
/// work.)
#[derive(Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Work(u128);

impl Work {
    /// Return the inner `u128` value.
    pub fn as_u128(self) -> u128 {
        self.0
    }
}

impl fmt::Debug for Work {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // There isn't a standard way to show different representations of the
        // same value
        f.debug_tuple("Work")
            // Use hex, because minimum-work constants are published in hex.
            .field(&format_args!("{:#x}", self.0))
            // Use decimal, to compare with node RPC output
            .field(&format_args!("{}", self.0))
            // Use log2, to compare chains at a glance
            .field(&format_args!("{:.5}", (self.0 as f64).log2()))
            .finish()
    }
}

impl TryFrom<U256> for Work {
    type Error = ();

    /// Converts a 256-bit work value into `Work`.
    ///
    /// Returns an error if the value needs more than 128 bits. Published
    /// chain work values fit comfortably; one that does not is a sign of a
    /// corrupted constant, and callers treat it as a configuration fault.
    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.bits() > 128 {
            return Err(());
        }

        Ok(Work(value.low_u128()))
    }
}

impl std::ops::Add for Work {
    type Output = PartialCumulativeWork;

    fn add(self, rhs: Work) -> PartialCumulativeWork {
        PartialCumulativeWork::from(self) + rhs
    }
}

/// Partial work used to track relative work in non-finalized chains
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct PartialCumulativeWork(u128);

impl PartialCumulativeWork {
    /// Return the inner `u128` value.
    pub fn as_u128(self) -> u128 {
        self.0
    }
}

impl From<Work> for PartialCumulativeWork {
    fn from(work: Work) -> Self {
        PartialCumulativeWork(work.0)
    }
}

impl std::ops::Add<Work> for PartialCumulativeWork {
    type Output = PartialCumulativeWork;

    fn add(self, rhs: Work) -> Self::Output {
        let result = self
            .0
            .checked_add(rhs.0)
            .expect("Work values do not overflow");

        PartialCumulativeWork(result)
    }
}

impl std::ops::AddAssign<Work> for PartialCumulativeWork {
    fn add_assign(&mut self, rhs: Work) {
        *self = *self + rhs;
    }
}

impl std::ops::Sub<Work> for PartialCumulativeWork {
    type Output = PartialCumulativeWork;

    fn sub(self, rhs: Work) -> Self::Output {
        let result = self.0
            .checked_sub(rhs.0)
            .expect("PartialCumulativeWork values do not underflow: all subtracted Work values must have been previously added to the PartialCumulativeWork");

        PartialCumulativeWork(result)
    }
}

impl std::ops::SubAssign<Work> for PartialCumulativeWork {
    fn sub_assign(&mut self, rhs: Work) {
        *self = *self - rhs;
    }
}
