//! Block verification for the Lotus chain.
//!
//! Verification occurs in multiple stages:
//!   - structural checks on the coinbase transaction (this module)
//!   - the era reward check against the hard-coded address tables
//!   - context-dependent checks of the chain state (in the caller)
//!
//! The functions here are pure and deterministic, so callers can drive them
//! from any block acceptance pipeline.

pub mod check;
pub mod subsidy;
