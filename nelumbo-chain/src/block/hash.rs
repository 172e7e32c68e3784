//! Block hashes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::serialization::SerializationError;

/// A hash of a block header, used to identify blocks and link blocks into a
/// chain. ⛓️
///
/// Technically, this is the hash of the block _header_, but since the header
/// commits to the merkle root of the transactions, it is frequently used to
/// identify the entire block.
///
/// The inner bytes are in "internal" byte order: [`fmt::Display`] and
/// [`std::str::FromStr`] convert to and from the reversed, big-endian order
/// used by node RPCs and block explorers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "proptest-impl"),
    derive(proptest_derive::Arbitrary)
)]
pub struct Hash(pub [u8; 32]);

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        f.debug_tuple("block::Hash")
            .field(&hex::encode(reversed))
            .finish()
    }
}

impl fmt::Display for Hash {
    /// Lotus displays block hashes in big-endian byte-order, following the
    /// u256 convention set by Bitcoin (SHA256sum).
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        f.write_str(&hex::encode(reversed))
    }
}

impl std::str::FromStr for Hash {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut internal_byte_order = [0u8; 32];
        hex::decode_to_slice(s, &mut internal_byte_order[..])
            .map_err(|_| SerializationError::Parse("hex decoding error"))?;

        internal_byte_order.reverse();

        Ok(Hash(internal_byte_order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_order_round_trips() {
        let _init_guard = nelumbo_test::init();

        let hash: Hash = "00000000000000000bbf74c9cbc94a1b2efd539b191be565961c7867a3672101"
            .parse()
            .expect("valid test vector should parse");

        // Display reverses back to the original big-endian form.
        assert_eq!(
            format!("{hash}"),
            "00000000000000000bbf74c9cbc94a1b2efd539b191be565961c7867a3672101"
        );

        // The internal byte order is reversed, so the leading display zeroes
        // end up at the back of the array.
        assert_eq!(hash.0[31], 0x00);
        assert_eq!(hash.0[0], 0x01);
    }

    #[test]
    fn debug_uses_display_order() {
        let _init_guard = nelumbo_test::init();

        let hash: Hash = "00000000000922af6e587f3cddd4a3d715e046563935d85a2b5b6bfcd1c25ef7"
            .parse()
            .expect("valid test vector should parse");

        assert_eq!(
            format!("{hash:?}"),
            "block::Hash(\"00000000000922af6e587f3cddd4a3d715e046563935d85a2b5b6bfcd1c25ef7\")"
        );
    }

    #[test]
    fn rejects_bad_hex() {
        let _init_guard = nelumbo_test::init();

        // too short
        assert!("00000000000000000bbf74c9".parse::<Hash>().is_err());
        // not hex
        assert!("zz000000000000000bbf74c9cbc94a1b2efd539b191be565961c7867a3672101"
            .parse::<Hash>()
            .is_err());
    }
}
