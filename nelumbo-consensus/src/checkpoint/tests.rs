//! Tests for the checkpoint gate and the block index.

use std::cell::Cell;

use color_eyre::Report;

use nelumbo_chain::{
    block::{self, Height},
    parameters::{ChainParams, Network, GENESIS_PREVIOUS_BLOCK_HASH},
    work::difficulty::{PartialCumulativeWork, Work, U256},
};

use super::*;

fn hash(byte: u8) -> block::Hash {
    block::Hash([byte; 32])
}

fn single_work(value: u128) -> Work {
    Work::try_from(U256::from(value)).expect("small test values always fit in Work")
}

fn work(value: u128) -> PartialCumulativeWork {
    single_work(value).into()
}

/// An [`AncestryIndex`] that counts its queries and always answers `answer`.
struct CountingIndex {
    calls: Cell<usize>,
    answer: bool,
}

impl AncestryIndex for CountingIndex {
    fn is_ancestor(&self, _ancestor: block::Hash, _descendant: block::Hash) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.answer
    }
}

#[test]
fn ancestors_of_the_assume_valid_block_skip_deep_validation() -> Result<(), Report> {
    let _init_guard = nelumbo_test::init();

    let params = ChainParams::new(Network::Mainnet);
    let assume_valid = params.assume_valid();
    let gate = CheckpointGate::new(params);

    let mut index = BlockIndex::new();
    index.insert(hash(1), GENESIS_PREVIOUS_BLOCK_HASH)?;
    index.insert(hash(2), hash(1))?;
    index.insert(assume_valid, hash(2))?;
    index.insert(hash(4), assume_valid)?;

    // The trusted prefix skips deep validation even with no recorded work.
    assert_eq!(
        gate.classify(assume_valid, work(0), &index),
        Disposition::SkipDeepValidation,
    );
    assert!(gate
        .classify(hash(1), work(0), &index)
        .skips_deep_validation());
    assert_eq!(
        gate.classify(hash(2), work(0), &index),
        Disposition::SkipDeepValidation,
    );

    // Descendants of the assume-valid block get no trust from it.
    assert_eq!(
        gate.classify(hash(4), work(0), &index),
        Disposition::Rejected,
    );
    assert_eq!(
        gate.classify(hash(4), gate.params().minimum_chain_work(), &index),
        Disposition::FullyValidate,
    );

    Ok(())
}

#[test]
fn low_work_chains_are_rejected() {
    let _init_guard = nelumbo_test::init();

    for network in Network::iter() {
        let params = ChainParams::new(network);
        let minimum = params.minimum_chain_work();
        let gate = CheckpointGate::new(params);

        // Nothing is in the index, so the trust rule never applies.
        let index = BlockIndex::new();

        assert!(gate.classify(hash(9), work(0), &index).is_rejected());
        assert_eq!(
            gate.classify(hash(9), minimum - single_work(1), &index),
            Disposition::Rejected,
        );

        // Reaching the published threshold is enough.
        assert_eq!(
            gate.classify(hash(9), minimum, &index),
            Disposition::FullyValidate,
        );
        assert_eq!(
            gate.classify(hash(9), minimum + single_work(1), &index),
            Disposition::FullyValidate,
        );
    }
}

#[test]
fn the_index_walks_the_right_branch() -> Result<(), Report> {
    let _init_guard = nelumbo_test::init();

    let mut index = BlockIndex::new();

    // Two branches off the same root, and an unrelated second tree:
    //
    //   1 - 2 - 4
    //    \
    //     3 - 5
    //
    //   6
    assert_eq!(
        index.insert(hash(1), GENESIS_PREVIOUS_BLOCK_HASH)?,
        Height(0)
    );
    assert_eq!(index.insert(hash(2), hash(1))?, Height(1));
    assert_eq!(index.insert(hash(3), hash(1))?, Height(1));
    assert_eq!(index.insert(hash(4), hash(2))?, Height(2));
    assert_eq!(index.insert(hash(5), hash(3))?, Height(2));
    assert_eq!(
        index.insert(hash(6), GENESIS_PREVIOUS_BLOCK_HASH)?,
        Height(0)
    );

    assert_eq!(index.height(hash(4)), Some(Height(2)));
    assert_eq!(index.height(hash(9)), None);

    // Every block is its own ancestor.
    for byte in 1..=6 {
        assert!(index.is_ancestor(hash(byte), hash(byte)));
    }

    // Ancestry holds along a branch, and only along it.
    assert!(index.is_ancestor(hash(1), hash(4)));
    assert!(index.is_ancestor(hash(2), hash(4)));
    assert!(!index.is_ancestor(hash(3), hash(4)));
    assert!(!index.is_ancestor(hash(4), hash(2)));
    assert!(!index.is_ancestor(hash(5), hash(4)));

    // Separate trees never share ancestry.
    assert!(!index.is_ancestor(hash(6), hash(4)));
    assert!(!index.is_ancestor(hash(1), hash(6)));

    // Unknown hashes are nobody's ancestor, and nobody's descendant.
    assert!(!index.is_ancestor(hash(9), hash(4)));
    assert!(!index.is_ancestor(hash(1), hash(9)));

    Ok(())
}

#[test]
fn the_index_rejects_conflicting_inserts() {
    let _init_guard = nelumbo_test::init();

    let mut index = BlockIndex::new();
    index
        .insert(hash(1), GENESIS_PREVIOUS_BLOCK_HASH)
        .expect("a fresh index accepts a root");

    assert_eq!(
        index.insert(hash(1), GENESIS_PREVIOUS_BLOCK_HASH),
        Err(AncestryError::DuplicateBlock(hash(1))),
    );
    assert_eq!(
        index.insert(hash(2), hash(9)),
        Err(AncestryError::UnknownParent(hash(9))),
    );

    // The failed inserts left the index unchanged.
    assert_eq!(index.height(hash(1)), Some(Height(0)));
    assert_eq!(index.height(hash(2)), None);
}

#[test]
fn classification_makes_exactly_one_ancestry_query() {
    let _init_guard = nelumbo_test::init();

    let gate = CheckpointGate::new(ChainParams::new(Network::Testnet));

    let trusted = CountingIndex {
        calls: Cell::new(0),
        answer: true,
    };
    assert_eq!(
        gate.classify(hash(1), work(0), &trusted),
        Disposition::SkipDeepValidation,
    );
    assert_eq!(trusted.calls.get(), 1);

    let untrusted = CountingIndex {
        calls: Cell::new(0),
        answer: false,
    };
    assert_eq!(
        gate.classify(hash(1), work(0), &untrusted),
        Disposition::Rejected,
    );
    assert_eq!(
        gate.classify(hash(1), gate.params().minimum_chain_work(), &untrusted),
        Disposition::FullyValidate,
    );
    assert_eq!(untrusted.calls.get(), 2);
}

#[test]
fn candidates_start_unchecked() {
    let _init_guard = nelumbo_test::init();

    assert_eq!(Disposition::default(), Disposition::Unchecked);

    let gate = CheckpointGate::new(ChainParams::new(Network::Mainnet));
    assert_eq!(gate.params().network(), Network::Mainnet);
}

mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// With no trusted prefix, classification depends only on the work
        /// threshold.
        #[test]
        fn work_threshold_splits_all_candidates(
            candidate_work in any::<PartialCumulativeWork>(),
        ) {
            let _init_guard = nelumbo_test::init();

            let params = ChainParams::new(Network::Mainnet);
            let minimum = params.minimum_chain_work();
            let gate = CheckpointGate::new(params);
            let index = BlockIndex::new();

            let expected = if candidate_work < minimum {
                Disposition::Rejected
            } else {
                Disposition::FullyValidate
            };

            prop_assert_eq!(gate.classify(hash(0xaa), candidate_work, &index), expected);
        }
    }
}
