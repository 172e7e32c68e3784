//! Reward eras and the per-era coinbase address rotations.
//!
//! This module contains the consensus parameters which decide where each
//! block's coinbase reward must be paid.
//!
//! The reward schedule is split into named eras. Each era starts at a
//! particular block height and carries its own ordered address list; blocks
//! inside the era walk that list one address per block, restarting at the
//! front of the list whenever a new era begins.
//!
//! Typically, these parameters are accessed via a function that takes a
//! `Network` and `block::Height`.

pub mod constants;

use std::fmt;

use itertools::Itertools;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{block::Height, parameters::Network, transparent::Address};

#[cfg(any(test, feature = "proptest-impl"))]
use proptest_derive::Arbitrary;

/// A named Lotus reward era.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub enum EraName {
    /// The launch era.
    Genesis,
    /// The second era.
    Exodus,
    /// The third era.
    Leviticus,
    /// The fourth era.
    Numbers,
    /// The fifth and final era, which never ends.
    Deuteronomy,
}

impl fmt::Display for EraName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Same as the debug representation for now
        fmt::Debug::fmt(self, f)
    }
}

/// A contiguous run of blocks paying coinbase rewards to one address
/// rotation.
///
/// An era's end is implied by the next era's start; the final era has no
/// end.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Era {
    /// The era's name.
    name: EraName,
    /// The height of the first block inside the era.
    first_height: Height,
    /// The reward addresses the era rotates through, one per block.
    addresses: Vec<Address>,
}

impl Era {
    /// Returns the era's name.
    pub fn name(&self) -> EraName {
        self.name
    }

    /// Returns the height of the first block inside the era.
    pub fn first_height(&self) -> Height {
        self.first_height
    }

    /// Returns the era's reward addresses, in rotation order.
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }
}

/// An ordered list of reward eras, covering every block height.
///
/// This is actually a partition of the whole height range, but the source
/// records are const, so we use a vector, and do the coverage checks on
/// initialisation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EraTable {
    /// The eras, sorted by `first_height` ascending, starting at height 0.
    eras: Vec<Era>,
}

lazy_static! {
    /// The hard-coded era table for Mainnet.
    pub static ref ERA_TABLE_MAINNET: EraTable = EraTable::new(Network::Mainnet);

    /// The hard-coded era table for Testnet.
    ///
    /// Testnet currently pays rewards to the same addresses as Mainnet. The
    /// table is still selected per network, so a future divergence only
    /// needs new constants.
    pub static ref ERA_TABLE_TESTNET: EraTable = EraTable::new(Network::Testnet);
}

impl EraTable {
    /// Returns the hard-coded era table for `network`.
    ///
    /// # Panics
    ///
    /// If the hard-coded records are invalid.
    pub fn new(network: Network) -> Self {
        let records = match network {
            Network::Mainnet => constants::mainnet::ERAS,
            Network::Testnet => constants::testnet::ERAS,
        };

        EraTable::from_list(records).expect("hard-coded era table parses and validates")
    }

    /// Returns the shared instance of the hard-coded era table for
    /// `network`.
    pub fn for_network(network: Network) -> &'static EraTable {
        match network {
            Network::Mainnet => &ERA_TABLE_MAINNET,
            Network::Testnet => &ERA_TABLE_TESTNET,
        }
    }

    /// Creates a new era table from `list`.
    ///
    /// The first era must start at height 0, era starts must be strictly
    /// ascending, and every era must carry at least one well-formed reward
    /// address. Together those checks guarantee that every height belongs
    /// to exactly one era, and that the rotation index is always in range.
    pub fn from_list<'a>(
        list: impl IntoIterator<Item = (EraName, Height, &'a [&'a str])>,
    ) -> Result<Self, EraTableError> {
        let mut eras = Vec::new();

        for (name, first_height, addresses) in list {
            if addresses.is_empty() {
                Err(EraTableError::NoAddresses(name))?;
            }

            let addresses = addresses
                .iter()
                .map(|address| {
                    address.parse().map_err(|_| EraTableError::InvalidAddress {
                        era: name,
                        address: address.to_string(),
                    })
                })
                .collect::<Result<Vec<Address>, _>>()?;

            eras.push(Era {
                name,
                first_height,
                addresses,
            });
        }

        match eras.first() {
            Some(era) if era.first_height == Height(0) => {}
            Some(era) => Err(EraTableError::FirstEraStartsTooLate(era.first_height))?,
            None => Err(EraTableError::Empty)?,
        }

        for (previous, next) in eras.iter().tuple_windows() {
            if previous.first_height >= next.first_height {
                Err(EraTableError::UnsortedEraStarts {
                    previous: previous.first_height,
                    next: next.first_height,
                })?;
            }
        }

        Ok(EraTable { eras })
    }

    /// Returns the eras, sorted by starting height.
    pub fn eras(&self) -> &[Era] {
        &self.eras
    }

    /// Returns the era containing `height`.
    ///
    /// Validated tables cover every height, so this only returns `None` for
    /// a table whose invariants have been broken.
    pub fn era_containing(&self, height: Height) -> Option<&Era> {
        // The partition point counts the eras starting at or below `height`;
        // the era containing `height` is the last of them.
        let started = self.eras.partition_point(|era| era.first_height <= height);

        started.checked_sub(1).map(|index| &self.eras[index])
    }

    /// Returns the address the coinbase at `height` must pay.
    ///
    /// Each era walks its address list one address per block, starting over
    /// at the front of the list when it wraps, and when a new era begins.
    pub fn reward_address(&self, height: Height) -> Option<&Address> {
        let era = self.era_containing(height)?;

        let blocks_into_era = (height.0 - era.first_height.0) as usize;
        Some(&era.addresses[blocks_into_era % era.addresses.len()])
    }
}

/// Errors loading or validating a hard-coded era table.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum EraTableError {
    /// The record list had no eras at all.
    #[error("an era table must contain at least one era")]
    Empty,

    /// The lowest era did not start at the genesis height.
    #[error("the first era must start at height 0, found {0:?}")]
    FirstEraStartsTooLate(Height),

    /// Consecutive era starts were equal or out of order.
    #[error("era starts must be strictly ascending: {previous:?} does not precede {next:?}")]
    UnsortedEraStarts {
        /// The earlier record's starting height.
        previous: Height,
        /// The later record's starting height.
        next: Height,
    },

    /// An era had no reward addresses to rotate through.
    #[error("era {0} has no reward addresses")]
    NoAddresses(EraName),

    /// An era listed an address that does not decode.
    #[error("era {era} has an unparseable reward address: {address:?}")]
    InvalidAddress {
        /// The era the address was listed under.
        era: EraName,
        /// The offending address string.
        address: String,
    },
}
