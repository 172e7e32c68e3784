//! Blocks and block-related structures (hashes, heights).

mod hash;
mod height;

#[cfg(any(test, feature = "proptest-impl"))]
mod arbitrary;

pub use hash::Hash;
pub use height::Height;
