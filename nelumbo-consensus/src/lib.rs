//! Implementation of Lotus consensus checks.
//!
//! More specifically, this crate implements *semantic* validity checks,
//! as defined below.
//!
//! ## Verification levels.
//!
//! This implementation of the Lotus consensus rules is oriented around
//! three telescoping notions of validity:
//!
//! 1. *Structural Validity*, or whether the format and structure of the
//!    object are valid. For instance, a coinbase transaction must have
//!    exactly one input, and that input must be a coinbase input.
//!
//! 2. *Semantic Validity*, or whether the object could potentially be
//!    valid, depending on the chain state. For instance, a coinbase
//!    transaction must commit to its own block height, and must pay the
//!    reward address the era tables prescribe for that height.
//!
//! 3. *Contextual Validity*, or whether a semantically valid block is
//!    actually valid in the context of a particular chain state. For
//!    instance, a block is only final once enough work builds on top of
//!    it.
//!
//! *Structural validity* is enforced by the definitions of data
//! structures in `nelumbo-chain`. *Semantic validity* is enforced by the
//! code in this crate. *Contextual validity* is enforced by the caller
//! when objects are committed to the chain state; the [`checkpoint`]
//! module decides how much semantic validation a candidate chain needs
//! in the first place.

#![warn(missing_docs)]
#![allow(clippy::try_err)]
#![forbid(unsafe_code)]

pub mod block;
pub mod checkpoint;
pub mod error;

pub use checkpoint::{AncestryIndex, BlockIndex, CheckpointGate, Disposition};
