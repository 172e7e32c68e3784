//! Hard-coded chain parameters for each Lotus network.

use hex::FromHex;
use thiserror::Error;

use crate::{
    block,
    parameters::Network,
    work::difficulty::{PartialCumulativeWork, Work, U256},
};

/// The number of bytes in a gigabyte.
const GB: u64 = 1024 * 1024 * 1024;

/// The hash of a Mainnet block known to be in the valid chain.
const MAINNET_ASSUME_VALID_HASH: &str =
    "00000000000000000bbf74c9cbc94a1b2efd539b191be565961c7867a3672101";

/// The minimum cumulative work for a candidate Mainnet chain.
const MAINNET_MINIMUM_CHAIN_WORK: &str =
    "00000000000000000000000000000000000000000153873c309a54a154807f7b";

/// The approximate size of the Mainnet block data, in gigabytes.
const MAINNET_ASSUMED_BLOCKCHAIN_SIZE_GB: u64 = 209;

/// The approximate size of the Mainnet chain state, in gigabytes.
const MAINNET_ASSUMED_CHAINSTATE_SIZE_GB: u64 = 3;

/// The hash of a Testnet block known to be in the valid chain.
const TESTNET_ASSUME_VALID_HASH: &str =
    "00000000000922af6e587f3cddd4a3d715e046563935d85a2b5b6bfcd1c25ef7";

/// The minimum cumulative work for a candidate Testnet chain.
const TESTNET_MINIMUM_CHAIN_WORK: &str =
    "00000000000000000000000000000000000000000000006e7d5c32f4d4fec4f8";

/// The approximate size of the Testnet block data, in gigabytes.
const TESTNET_ASSUMED_BLOCKCHAIN_SIZE_GB: u64 = 55;

/// The approximate size of the Testnet chain state, in gigabytes.
const TESTNET_ASSUMED_CHAINSTATE_SIZE_GB: u64 = 2;

/// The hard-coded consensus and operator parameters for one Lotus network.
///
/// Loaded once per network and never mutated afterwards.
///
/// The assume-valid hash is trusted, not verified: a wrong or stale value
/// cannot be detected here. Operators accept that trade-off when they rely
/// on the hard-coded defaults.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChainParams {
    /// The network these parameters apply to.
    network: Network,
    /// The hash of a block known to be in the valid chain.
    assume_valid: block::Hash,
    /// The cumulative work a candidate chain must reach to be worth
    /// validating.
    minimum_chain_work: PartialCumulativeWork,
    /// A disk usage hint: the approximate size of the block data, in bytes.
    assumed_blockchain_size: u64,
    /// A disk usage hint: the approximate size of the chain state, in
    /// bytes.
    assumed_chainstate_size: u64,
}

impl ChainParams {
    /// Returns the hard-coded parameters for `network`.
    ///
    /// # Panics
    ///
    /// If the hard-coded constants are invalid.
    pub fn new(network: Network) -> Self {
        let (assume_valid, minimum_chain_work, blockchain_gb, chainstate_gb) = match network {
            Network::Mainnet => (
                MAINNET_ASSUME_VALID_HASH,
                MAINNET_MINIMUM_CHAIN_WORK,
                MAINNET_ASSUMED_BLOCKCHAIN_SIZE_GB,
                MAINNET_ASSUMED_CHAINSTATE_SIZE_GB,
            ),
            Network::Testnet => (
                TESTNET_ASSUME_VALID_HASH,
                TESTNET_MINIMUM_CHAIN_WORK,
                TESTNET_ASSUMED_BLOCKCHAIN_SIZE_GB,
                TESTNET_ASSUMED_CHAINSTATE_SIZE_GB,
            ),
        };

        ChainParams::from_parts(
            network,
            assume_valid,
            minimum_chain_work,
            blockchain_gb,
            chainstate_gb,
        )
        .expect("hard-coded chain parameters parse and validate")
    }

    /// Builds chain parameters from textual constants.
    ///
    /// `assume_valid` and `minimum_chain_work` are 64 character hex strings
    /// in big-endian display order; the sizes are whole gigabytes.
    pub fn from_parts(
        network: Network,
        assume_valid: &'static str,
        minimum_chain_work: &'static str,
        assumed_blockchain_size_gb: u64,
        assumed_chainstate_size_gb: u64,
    ) -> Result<Self, ChainParamsError> {
        let assume_valid_hash: block::Hash = assume_valid
            .parse()
            .map_err(|_| ChainParamsError::InvalidAssumeValidHash(assume_valid))?;

        let work_bytes = <[u8; 32]>::from_hex(minimum_chain_work)
            .map_err(|_| ChainParamsError::InvalidMinimumChainWork(minimum_chain_work))?;
        let work = Work::try_from(U256::from_big_endian(&work_bytes))
            .map_err(|()| ChainParamsError::MinimumChainWorkTooLarge(minimum_chain_work))?;

        Ok(ChainParams {
            network,
            assume_valid: assume_valid_hash,
            minimum_chain_work: work.into(),
            assumed_blockchain_size: assumed_blockchain_size_gb * GB,
            assumed_chainstate_size: assumed_chainstate_size_gb * GB,
        })
    }

    /// Returns the network these parameters apply to.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Returns the hash of a block assumed to be in the valid chain.
    ///
    /// Blocks at or below it may skip expensive script and signature
    /// checks; structural checks and proof of work never are.
    pub fn assume_valid(&self) -> block::Hash {
        self.assume_valid
    }

    /// Returns the minimum cumulative work for a candidate chain.
    ///
    /// Chains with less total work are discarded without any per-block
    /// processing.
    pub fn minimum_chain_work(&self) -> PartialCumulativeWork {
        self.minimum_chain_work
    }

    /// Returns the approximate disk size of the block data, in bytes.
    ///
    /// An operator-facing hint with no consensus weight.
    pub fn assumed_blockchain_size(&self) -> u64 {
        self.assumed_blockchain_size
    }

    /// Returns the approximate disk size of the chain state, in bytes.
    ///
    /// An operator-facing hint with no consensus weight.
    pub fn assumed_chainstate_size(&self) -> u64 {
        self.assumed_chainstate_size
    }
}

/// Errors loading hard-coded chain parameters.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ChainParamsError {
    /// The assume-valid block hash constant did not parse.
    #[error("assume-valid hash is not a 64 character hex string: {0:?}")]
    InvalidAssumeValidHash(&'static str),

    /// The minimum chain work constant did not parse.
    #[error("minimum chain work is not a 64 character hex string: {0:?}")]
    InvalidMinimumChainWork(&'static str),

    /// The minimum chain work constant needs more than 128 bits.
    #[error("minimum chain work does not fit in 128 bits: {0:?}")]
    MinimumChainWorkTooLarge(&'static str),
}
