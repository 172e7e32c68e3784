//! Decoding for the legacy cashaddr address family.
//!
//! The earliest Lotus reward addresses were issued before the native
//! `lotus` format existed, in the Bitcoin Cash cashaddr format, and they
//! remain consensus data. This module only decodes; addresses are always
//! displayed in the native format.

use crate::{parameters::Network, serialization::SerializationError, transparent::Address};

/// The 32 character cashaddr alphabet, in value order.
const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// The checksum prefix assumed when an address string has no explicit prefix.
///
/// Reward addresses in configuration are stored without their prefix, and
/// were issued with production network checksums.
const DEFAULT_PREFIX: &str = "bitcoincash";

/// The explicit prefix of test network cashaddr strings.
const TESTNET_PREFIX: &str = "bchtest";

/// The version byte of a 160-bit pay-to-public-key-hash payload.
const VERSION_P2PKH: u8 = 0x00;

/// The version byte of a 160-bit pay-to-script-hash payload.
const VERSION_P2SH: u8 = 0x08;

/// Decode a cashaddr string, with or without its `prefix:` part, into an
/// [`Address`].
///
/// Only the two 160-bit hash payloads used by reward addresses are
/// accepted.
pub(super) fn decode(input: &str) -> Result<Address, SerializationError> {
    let (prefix, payload) = match input.split_once(':') {
        Some((prefix, payload)) => (prefix, payload),
        None => (DEFAULT_PREFIX, input),
    };

    let network = match prefix {
        DEFAULT_PREFIX => Network::Mainnet,
        TESTNET_PREFIX => Network::Testnet,
        _ => Err(SerializationError::Parse("unknown cashaddr prefix"))?,
    };

    let values = payload
        .bytes()
        .map(|byte| {
            CHARSET
                .iter()
                .position(|&charset_byte| charset_byte == byte)
                .map(|value| value as u8)
                .ok_or(SerializationError::Parse("invalid cashaddr character"))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    // 8 checksum values follow the data values
    if values.len() <= 8 {
        Err(SerializationError::Parse("cashaddr payload too short"))?;
    }
    if polymod(expand_prefix(prefix).chain(values.iter().copied())) != 0 {
        Err(SerializationError::Parse("invalid cashaddr checksum"))?;
    }

    let data = regroup_bits(&values[..values.len() - 8])?;

    match (data.first(), data.len()) {
        (Some(&VERSION_P2PKH), 21) => {
            let mut pub_key_hash = [0; 20];
            pub_key_hash.copy_from_slice(&data[1..]);
            Ok(Address::from_pub_key_hash(network, pub_key_hash))
        }
        (Some(&VERSION_P2SH), 21) => {
            let mut script_hash = [0; 20];
            script_hash.copy_from_slice(&data[1..]);
            Ok(Address::from_script_hash(network, script_hash))
        }
        _ => Err(SerializationError::Parse("unsupported cashaddr payload")),
    }
}

/// Returns the 5-bit checksum input values for `prefix`.
fn expand_prefix(prefix: &str) -> impl Iterator<Item = u8> + '_ {
    prefix
        .bytes()
        .map(|byte| byte & 0x1f)
        .chain(std::iter::once(0))
}

/// The 40-bit cashaddr checksum over 5-bit `values`.
///
/// A correctly checksummed address gives 0 when its prefix expansion and
/// payload values are fed through together.
fn polymod(values: impl Iterator<Item = u8>) -> u64 {
    let mut checksum: u64 = 1;

    for value in values {
        let top = checksum >> 35;
        checksum = ((checksum & 0x07_ffff_ffff) << 5) ^ u64::from(value);

        if top & 0x01 != 0 {
            checksum ^= 0x98_f2bc_8e61;
        }
        if top & 0x02 != 0 {
            checksum ^= 0x79_b76d_99e2;
        }
        if top & 0x04 != 0 {
            checksum ^= 0xf3_3e5f_b3c4;
        }
        if top & 0x08 != 0 {
            checksum ^= 0xae_2eab_e2a8;
        }
        if top & 0x10 != 0 {
            checksum ^= 0x1e_4f43_e470;
        }
    }

    checksum ^ 1
}

/// Regroup 5-bit `values` into bytes, rejecting incomplete or nonzero
/// padding.
fn regroup_bits(values: &[u8]) -> Result<Vec<u8>, SerializationError> {
    let mut accumulator: u32 = 0;
    let mut bits: u32 = 0;
    let mut bytes = Vec::with_capacity(values.len() * 5 / 8);

    for &value in values {
        accumulator = (accumulator << 5) | u32::from(value);
        bits += 5;

        while bits >= 8 {
            bits -= 8;
            bytes.push((accumulator >> bits) as u8);
        }
    }

    // a whole unconsumed value, or set padding bits, means the string was
    // not produced by a conforming encoder
    if bits >= 5 || accumulator & ((1 << bits) - 1) != 0 {
        Err(SerializationError::Parse("invalid cashaddr padding"))?;
    }

    Ok(bytes)
}
