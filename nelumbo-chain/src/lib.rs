//! Core Lotus data structures. 🪷
//!
//! This crate provides definitions of core datastructures for the Lotus
//! network, such as blocks, transactions, addresses, and the consensus
//! parameters every validating node must agree on: the era-scoped coinbase
//! reward tables and the per-network chain constants.
// Each lazy_static variable uses additional recursion
#![recursion_limit = "256"]
#![warn(missing_docs)]
#![allow(clippy::try_err)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate serde;

pub mod amount;
pub mod block;
pub mod parameters;
pub mod serialization;
pub mod transaction;
pub mod transparent;
pub mod work;
