//! Errors that can occur when checking consensus rules.
//!
//! Each error variant corresponds to a consensus rule, so enumerating
//! all possible verification failures enumerates the consensus rules we
//! implement, and ensures that we don't reject blocks or transactions
//! for a non-enumerated reason.

use thiserror::Error;

/// Errors in the coinbase reward rules.
#[derive(Error, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum SubsidyError {
    #[error("no coinbase transaction in block")]
    NoCoinbase,

    #[error("no coinbase output pays the reward address required at this height")]
    MissingEraReward,

    #[error("no era covers this height")]
    HeightOutOfRange,

    #[error("the first coinbase output does not carry a height commitment")]
    MissingCommitment,

    #[error("the coinbase height commitment does not commit to this height")]
    WrongCommitmentHeight,
}

/// Errors in the shape or position of transactions within a block.
#[derive(Error, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum TransactionError {
    #[error("first transaction must be coinbase")]
    CoinbasePosition,

    #[error("coinbase input found in non-coinbase transaction")]
    CoinbaseAfterFirst,

    #[error("coinbase data length {len} must be between 2 and 100 bytes")]
    CoinbaseDataLen { len: usize },

    #[error("coinbase transaction failed subsidy validation")]
    Subsidy(#[from] SubsidyError),
}

impl From<SubsidyError> for BlockError {
    fn from(err: SubsidyError) -> BlockError {
        BlockError::Transaction(TransactionError::Subsidy(err))
    }
}

/// Errors in block-level consensus rules.
#[derive(Error, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum BlockError {
    #[error("block contains invalid transactions")]
    Transaction(#[from] TransactionError),

    #[error("block has no transactions")]
    NoTransactions,
}
