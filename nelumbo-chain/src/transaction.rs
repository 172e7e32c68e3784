//! Transactions and the coinbase height commitment.

mod hash;

pub use hash::Hash;

use serde::{Deserialize, Serialize};

use crate::{amount::Amount, block, transparent, transparent::opcodes::OpCode};

/// The tag that marks a coinbase height commitment output.
pub const COINBASE_COMMITMENT_TAG: &[u8; 5] = b"logos";

/// A Lotus transaction.
///
/// Only the parts of a transaction that reward validation inspects are
/// modeled: transparent inputs and outputs. Scripts are carried as opaque
/// bytes.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The transparent inputs to the transaction.
    pub inputs: Vec<transparent::Input>,
    /// The transparent outputs from the transaction.
    pub outputs: Vec<transparent::Output>,
}

impl Transaction {
    /// Returns `true` if this transaction has valid inputs for a coinbase
    /// transaction, that is, has a single input and it is a coinbase input.
    pub fn has_valid_coinbase_transaction_inputs(&self) -> bool {
        self.inputs.len() == 1
            && matches!(
                self.inputs.first(),
                Some(transparent::Input::Coinbase { .. })
            )
    }

    /// Returns `true` if this transaction contains any coinbase inputs.
    pub fn has_any_coinbase_inputs(&self) -> bool {
        self.inputs
            .iter()
            .any(|input| matches!(input, transparent::Input::Coinbase { .. }))
    }

    /// Build a coinbase transaction for `height`.
    ///
    /// The returned transaction carries the mandatory height commitment as
    /// its first output, followed by `reward_outputs`.
    pub fn new_coinbase(
        height: block::Height,
        data: Vec<u8>,
        reward_outputs: Vec<transparent::Output>,
    ) -> Transaction {
        let mut outputs = vec![transparent::Output {
            value: Amount::zero(),
            lock_script: coinbase_commitment_script(height),
        }];
        outputs.extend(reward_outputs);

        Transaction {
            inputs: vec![transparent::Input::Coinbase {
                data: transparent::CoinbaseData(data),
                sequence: u32::MAX,
            }],
            outputs,
        }
    }
}

/// Returns the output script that commits to `height` in a coinbase
/// transaction.
///
/// The first output of every coinbase transaction must carry this script:
/// OP_RETURN, a push of the commitment tag, then the height as a minimally
/// pushed script number.
pub fn coinbase_commitment_script(height: block::Height) -> transparent::Script {
    let mut script_bytes = vec![OpCode::Return as u8, OpCode::Push5Bytes as u8];
    script_bytes.extend(COINBASE_COMMITMENT_TAG);

    match height.0 {
        // OP_0 pushes an empty number
        0 => script_bytes.push(0x00),
        // OP_1 through OP_16 push small numbers as single opcodes
        height @ 1..=16 => script_bytes.push(0x50 + height as u8),
        height => {
            let mut number_bytes = Vec::new();
            let mut remaining = height;
            while remaining > 0 {
                number_bytes.push((remaining & 0xff) as u8);
                remaining >>= 8;
            }

            // a set high bit means negative in script numbers, so heights
            // that end on one need a zero continuation byte
            if number_bytes.last().expect("height is nonzero") & 0x80 != 0 {
                number_bytes.push(0x00);
            }

            script_bytes.push(number_bytes.len() as u8);
            script_bytes.extend(number_bytes);
        }
    }

    transparent::Script::new(&script_bytes)
}
