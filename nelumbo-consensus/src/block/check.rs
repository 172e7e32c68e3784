//! Consensus check functions

use nelumbo_chain::{
    block::Height,
    parameters::EraTable,
    transaction::{self, Transaction},
    transparent,
};

use crate::error::*;

use super::subsidy;

/// Returns `Ok(())` if there is exactly one coinbase transaction in
/// `transactions`, and that coinbase transaction is the first transaction in
/// the block.
///
/// The first (and only the first) transaction in a block is a coinbase
/// transaction, which collects the block subsidy and any transaction fees
/// paid by transactions included in this block.
pub fn coinbase_is_first(transactions: &[Transaction]) -> Result<(), BlockError> {
    let first = transactions.first().ok_or(BlockError::NoTransactions)?;
    let mut rest = transactions.iter().skip(1);
    if !first.has_valid_coinbase_transaction_inputs() {
        Err(TransactionError::CoinbasePosition)?;
    }
    if rest.any(|tx| tx.has_any_coinbase_inputs()) {
        Err(TransactionError::CoinbaseAfterFirst)?;
    }

    Ok(())
}

/// Returns `Ok(())` if `coinbase` pays the reward address required at
/// `height`.
///
/// Every era lists its reward addresses in rotation order, and each block
/// must pay the one selected by its height. Missing the required address is
/// a hard failure: a chain with a single such block is invalid, no matter
/// how much work it carries.
pub fn era_reward_is_valid(
    coinbase: &Transaction,
    height: Height,
    era_table: &EraTable,
) -> Result<(), BlockError> {
    if !coinbase.has_valid_coinbase_transaction_inputs() {
        Err(SubsidyError::NoCoinbase)?;
    }

    let expected_address = subsidy::expected_reward_address(era_table, height)?;
    let matching_outputs = subsidy::find_output_with_address(coinbase, expected_address);

    // The required output pays the exact rotation address; the value split
    // between the miner and the reward outputs is checked elsewhere.
    if !matching_outputs.is_empty() {
        Ok(())
    } else {
        Err(SubsidyError::MissingEraReward)?
    }
}

/// Returns `Ok(())` if the first output of `coinbase` commits to `height`.
///
/// Unlike Bitcoin, Lotus commits the height in the first coinbase output
/// script rather than in the coinbase input data.
pub fn coinbase_commitment_is_valid(
    coinbase: &Transaction,
    height: Height,
) -> Result<(), BlockError> {
    if !coinbase.has_valid_coinbase_transaction_inputs() {
        Err(SubsidyError::NoCoinbase)?;
    }

    let commitment = coinbase
        .outputs
        .first()
        .ok_or(SubsidyError::MissingCommitment)?;
    let script = commitment.lock_script.as_raw_bytes();

    let expected = transaction::coinbase_commitment_script(height);
    let expected = expected.as_raw_bytes();

    // OP_RETURN and the tag push identify a commitment output; the rest of
    // the expected script is the height push.
    let tag_len = 2 + transaction::COINBASE_COMMITMENT_TAG.len();
    if script.len() < tag_len || script[..tag_len] != expected[..tag_len] {
        Err(SubsidyError::MissingCommitment)?;
    }

    // Extra data is allowed after the height push, so miners can commit to
    // more than the height.
    if !script.starts_with(expected) {
        Err(SubsidyError::WrongCommitmentHeight)?;
    }

    Ok(())
}

/// Returns `Ok(())` if the free-form data in every coinbase input of
/// `coinbase` is within the consensus length limits.
pub fn coinbase_data_is_valid(coinbase: &Transaction) -> Result<(), BlockError> {
    for input in &coinbase.inputs {
        if let transparent::Input::Coinbase { data, .. } = input {
            let len = data.as_ref().len();
            if !(transparent::MIN_COINBASE_DATA_LEN..=transparent::MAX_COINBASE_DATA_LEN)
                .contains(&len)
            {
                Err(TransactionError::CoinbaseDataLen { len })?;
            }
        }
    }

    Ok(())
}
