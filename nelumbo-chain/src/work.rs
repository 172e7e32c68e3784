//! Proof-of-work implementation.

pub mod difficulty;

mod u256;

#[cfg(any(test, feature = "proptest-impl"))]
mod arbitrary;
