//! Consensus parameters for each Lotus network.
//!
//! Some consensus parameters change based on the active reward era. Each
//! era starts at a particular block height. Typically, these parameters
//! are accessed via a function that takes a `Network` and `block::Height`.

pub mod chain;
pub mod genesis;
mod network;
pub mod subsidy;

pub use chain::ChainParams;
pub use genesis::*;
pub use network::Network;
pub use subsidy::{Era, EraName, EraTable};

#[cfg(test)]
mod tests;
