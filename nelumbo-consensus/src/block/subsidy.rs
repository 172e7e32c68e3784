//! Block subsidies and era reward addresses.

use nelumbo_chain::{
    amount::{Amount, NonNegative, COIN},
    block::Height,
    parameters::EraTable,
    transaction::Transaction,
    transparent::{Address, Output},
};

use crate::error::SubsidyError;

/// `BlockSubsidy(height)` for every height.
///
/// Lotus mints a constant 260 XPI per block; there is no halving schedule.
pub fn block_subsidy() -> Amount<NonNegative> {
    Amount::try_from(260 * COIN).expect("260 XPI is a valid nonnegative amount")
}

/// Returns the reward address a coinbase transaction at `height` must pay.
///
/// A miss here means the era table does not cover `height`. That is a fault
/// in the hard-coded parameters, not in the block being validated, so it is
/// logged loudly before the error propagates.
pub fn expected_reward_address(
    era_table: &EraTable,
    height: Height,
) -> Result<&Address, SubsidyError> {
    match era_table.reward_address(height) {
        Some(address) => Ok(address),
        None => {
            tracing::error!(?height, "era table does not cover this height");
            Err(SubsidyError::HeightOutOfRange)
        }
    }
}

/// Returns a list of outputs in `transaction`, which pay the canonical lock
/// script of `address`.
pub fn find_output_with_address(transaction: &Transaction, address: &Address) -> Vec<Output> {
    let lock_script = address.script();

    transaction
        .outputs
        .iter()
        .filter(|o| o.lock_script == lock_script)
        .cloned()
        .collect()
}

#[cfg(test)]
mod test {
    use color_eyre::Report;

    use nelumbo_chain::parameters::Network;

    use super::*;

    #[test]
    fn block_subsidy_is_260_xpi() -> Result<(), Report> {
        let _init_guard = nelumbo_test::init();

        assert_eq!(block_subsidy(), 260 * COIN);
        assert_eq!(i64::from(block_subsidy()), 260_000_000);

        Ok(())
    }

    #[test]
    fn genesis_reward_goes_to_the_first_listed_address() -> Result<(), Report> {
        let _init_guard = nelumbo_test::init();

        for network in Network::iter() {
            let era_table = EraTable::for_network(network);

            let expected = expected_reward_address(era_table, Height(0))
                .expect("the era tables cover the genesis height");

            // The launch era pays its first address at the genesis height.
            let first_listed: Address =
                "pzmv0yp3kuwcd2cdv9lpu8nsdmzwud9s0upp4rxwc9".parse()?;
            assert_eq!(*expected, first_listed);
        }

        Ok(())
    }

    #[test]
    fn outputs_match_by_lock_script() -> Result<(), Report> {
        let _init_guard = nelumbo_test::init();

        let paid: Address = "lotus_16PSJNf1EDEfGvaYzaXJCJZrXH4pgiTo7kyW61iGi".parse()?;
        let unpaid = Address::from_pub_key_hash(Network::Mainnet, [0x7f; 20]);

        let coinbase = Transaction::new_coinbase(
            Height(1),
            b"nelumbo test".to_vec(),
            vec![Output {
                value: block_subsidy(),
                lock_script: paid.script(),
            }],
        );

        assert_eq!(find_output_with_address(&coinbase, &paid).len(), 1);
        assert_eq!(
            find_output_with_address(&coinbase, &paid)[0].lock_script,
            paid.script()
        );
        assert!(find_output_with_address(&coinbase, &unpaid).is_empty());

        Ok(())
    }
}
