//! Transparent Lotus address types.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::{
    parameters::Network,
    serialization::SerializationError,
    transparent::{cashaddr, opcodes::OpCode, Script},
};

/// The human-readable prefix at the start of every native Lotus address.
pub const LOTUS_PREFIX: &str = "lotus";

/// The payload type tag of addresses that carry a raw output script.
///
/// No other payload type has been assigned.
const PAYLOAD_TYPE_SCRIPT: u8 = 0x00;

/// Transparent Lotus addresses.
///
/// Lotus addresses appear in two textual families. The native family is the
/// `lotus` prefix, a network token character, then a base58 payload whose
/// checksum binds the prefix and token. The legacy family is the Bitcoin
/// Cash cashaddr format, kept because the earliest reward addresses were
/// issued in it; it is decoded but never displayed.
///
/// Both families decode to the same canonical form, so the same destination
/// parsed from either family compares equal.
#[derive(
    Clone, Eq, PartialEq, Hash, serde_with::SerializeDisplay, serde_with::DeserializeFromStr,
)]
pub enum Address {
    /// P2SH (Pay to Script Hash) addresses
    PayToScriptHash {
        /// Production or test network
        network: Network,
        /// 20 bytes specifying a script hash.
        script_hash: [u8; 20],
    },

    /// P2PKH (Pay to Public Key Hash) addresses
    PayToPublicKeyHash {
        /// Production or test network
        network: Network,
        /// 20 bytes specifying a public key hash, which is a RIPEMD-160
        /// hash of a SHA-256 hash of a compressed ECDSA key encoding.
        pub_key_hash: [u8; 20],
    },
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut debug_struct = f.debug_struct("TransparentAddress");

        match self {
            Address::PayToScriptHash {
                network,
                script_hash,
            } => debug_struct
                .field("network", network)
                .field("script_hash", &hex::encode(script_hash))
                .finish(),
            Address::PayToPublicKeyHash {
                network,
                pub_key_hash,
            } => debug_struct
                .field("network", network)
                .field("pub_key_hash", &hex::encode(pub_key_hash))
                .finish(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let token = self.network().address_token();

        let mut body = vec![PAYLOAD_TYPE_SCRIPT];
        body.extend(self.script().as_raw_bytes());

        let body_checksum = checksum(token, &body);
        body.extend(body_checksum);

        write!(
            f,
            "{LOTUS_PREFIX}{token}{}",
            bs58::encode(body).into_string()
        )
    }
}

impl std::str::FromStr for Address {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Native addresses always carry the lotus prefix; the legacy family
        // never does.
        match s.strip_prefix(LOTUS_PREFIX) {
            Some(tokened_payload) => Address::parse_native(tokened_payload),
            None => cashaddr::decode(s),
        }
    }
}

impl Address {
    /// Create an address for the given public key hash and network.
    pub fn from_pub_key_hash(network: Network, pub_key_hash: [u8; 20]) -> Self {
        Self::PayToPublicKeyHash {
            network,
            pub_key_hash,
        }
    }

    /// Create an address for the given script hash and network.
    pub fn from_script_hash(network: Network, script_hash: [u8; 20]) -> Self {
        Self::PayToScriptHash {
            network,
            script_hash,
        }
    }

    /// Returns the network for this address.
    pub fn network(&self) -> Network {
        match self {
            Address::PayToScriptHash { network, .. } => *network,
            Address::PayToPublicKeyHash { network, .. } => *network,
        }
    }

    /// Returns `true` if the address is `PayToScriptHash`, and `false` if it is `PayToPublicKeyHash`.
    pub fn is_script_hash(&self) -> bool {
        matches!(self, Address::PayToScriptHash { .. })
    }

    /// Returns the hash bytes for this address, regardless of the address type.
    pub fn hash_bytes(&self) -> [u8; 20] {
        match *self {
            Address::PayToScriptHash { script_hash, .. } => script_hash,
            Address::PayToPublicKeyHash { pub_key_hash, .. } => pub_key_hash,
        }
    }

    /// Turns the address into the `scriptPubKey` script that pays it.
    pub fn script(&self) -> Script {
        let mut script_bytes = Vec::new();

        match self {
            // https://developer.bitcoin.org/devguide/transactions.html#pay-to-script-hash-p2sh
            Address::PayToScriptHash { .. } => {
                script_bytes.push(OpCode::Hash160 as u8);
                script_bytes.push(OpCode::Push20Bytes as u8);
                script_bytes.extend(self.hash_bytes());
                script_bytes.push(OpCode::Equal as u8);
            }
            // https://developer.bitcoin.org/devguide/transactions.html#pay-to-public-key-hash-p2pkh
            Address::PayToPublicKeyHash { .. } => {
                script_bytes.push(OpCode::Dup as u8);
                script_bytes.push(OpCode::Hash160 as u8);
                script_bytes.push(OpCode::Push20Bytes as u8);
                script_bytes.extend(self.hash_bytes());
                script_bytes.push(OpCode::EqualVerify as u8);
                script_bytes.push(OpCode::CheckSig as u8);
            }
        };

        Script::new(&script_bytes)
    }

    /// Parse the part of a native address after the `lotus` prefix: a
    /// network token character, then a base58 payload and checksum.
    fn parse_native(tokened_payload: &str) -> Result<Self, SerializationError> {
        let token = tokened_payload
            .chars()
            .next()
            .ok_or(SerializationError::Parse("missing network token"))?;
        let network = Network::iter()
            .find(|network| network.address_token() == token)
            .ok_or(SerializationError::Parse("unknown network token"))?;

        let body = bs58::decode(&tokened_payload[token.len_utf8()..])
            .into_vec()
            .map_err(|_| SerializationError::Parse("invalid base58 payload"))?;

        // a type byte, at least the smaller P2SH script, and 4 checksum bytes
        if body.len() < 28 {
            Err(SerializationError::Parse("lotus address payload too short"))?;
        }

        let (payload, body_checksum) = body.split_at(body.len() - 4);
        if checksum(token, payload) != body_checksum {
            Err(SerializationError::Parse("invalid lotus address checksum"))?;
        }

        match payload[0] {
            PAYLOAD_TYPE_SCRIPT => Address::from_raw_script(network, &payload[1..]),
            _ => Err(SerializationError::Parse("unknown lotus payload type")),
        }
    }

    /// Interpret a raw output script as an address, if it has one of the
    /// two standard forms.
    fn from_raw_script(network: Network, script: &[u8]) -> Result<Self, SerializationError> {
        let mut hash = [0; 20];

        match script.len() {
            25 if script[0] == OpCode::Dup as u8
                && script[1] == OpCode::Hash160 as u8
                && script[2] == OpCode::Push20Bytes as u8
                && script[23] == OpCode::EqualVerify as u8
                && script[24] == OpCode::CheckSig as u8 =>
            {
                hash.copy_from_slice(&script[3..23]);
                Ok(Address::from_pub_key_hash(network, hash))
            }
            23 if script[0] == OpCode::Hash160 as u8
                && script[1] == OpCode::Push20Bytes as u8
                && script[22] == OpCode::Equal as u8 =>
            {
                hash.copy_from_slice(&script[2..22]);
                Ok(Address::from_script_hash(network, hash))
            }
            _ => Err(SerializationError::Parse("nonstandard lotus address script")),
        }
    }
}

/// The 4 byte checksum binding a native address payload to the lotus
/// prefix and network token.
fn checksum(token: char, payload: &[u8]) -> [u8; 4] {
    let mut hasher = Sha256::new();
    hasher.update(LOTUS_PREFIX.as_bytes());
    hasher.update([token as u8]);
    hasher.update(payload);
    let digest = hasher.finalize();

    let mut checksum = [0; 4];
    checksum.copy_from_slice(&digest[..4]);
    checksum
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn native_encoding_round_trips(address in any::<Address>()) {
            let _init_guard = nelumbo_test::init();

            let reparsed: Address = address
                .to_string()
                .parse()
                .expect("displayed addresses always reparse");

            prop_assert_eq!(address, reparsed);
        }
    }
}
