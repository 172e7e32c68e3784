//! Consensus parameter tests.

use std::collections::HashSet;

use crate::block::Height;

use super::subsidy::constants::ERA_NUM_ADDRESSES;
use super::*;

use EraName::*;
use Network::*;

/// Check that the hard-coded era tables load, cover every height, and keep
/// their eras in order.
#[test]
fn era_tables_validate() {
    let _init_guard = nelumbo_test::init();

    for network in Network::iter() {
        let table = EraTable::new(network);

        let names: Vec<EraName> = table.eras().iter().map(Era::name).collect();
        assert_eq!(
            names,
            vec![Genesis, Exodus, Leviticus, Numbers, Deuteronomy]
        );

        let starts: Vec<u32> = table.eras().iter().map(|era| era.first_height().0).collect();
        assert_eq!(starts, vec![0, 131_400, 262_800, 394_200, 525_600]);

        let unique_starts: HashSet<u32> = starts.iter().copied().collect();
        assert_eq!(unique_starts.len(), table.eras().len());

        for era in table.eras() {
            assert_eq!(era.addresses().len(), ERA_NUM_ADDRESSES);
        }
    }
}

#[test]
fn era_extremes_mainnet() {
    let _init_guard = nelumbo_test::init();
    era_extremes(Mainnet)
}

#[test]
fn era_extremes_testnet() {
    let _init_guard = nelumbo_test::init();
    era_extremes(Testnet)
}

/// Test `era_containing` and `reward_address` for `network` with extreme
/// and boundary heights.
fn era_extremes(network: Network) {
    let table = EraTable::for_network(network);

    assert_eq!(
        table.era_containing(Height(0)).map(Era::name),
        Some(Genesis)
    );
    assert_eq!(
        table.era_containing(Height::MAX).map(Era::name),
        Some(Deuteronomy)
    );

    // Each era starts exactly where the previous one stops.
    for pair in table.eras().windows(2) {
        let (previous, next) = (&pair[0], &pair[1]);

        assert_eq!(
            table.era_containing(next.first_height()).map(Era::name),
            Some(next.name())
        );
        assert_eq!(
            table
                .era_containing(Height(next.first_height().0 - 1))
                .map(Era::name),
            Some(previous.name())
        );
    }

    assert_eq!(
        table.reward_address(Height(0)),
        Some(&table.eras()[0].addresses()[0])
    );
}

/// Check that the rotation walks each era's list in order, wraps, and
/// restarts at the front of the list when a new era begins.
#[test]
fn rotation_walks_each_era_list() {
    let _init_guard = nelumbo_test::init();

    let table = EraTable::for_network(Mainnet);

    for era in table.eras() {
        let first = era.first_height().0;
        let len = era.addresses().len() as u32;

        assert_eq!(
            table.reward_address(Height(first)),
            Some(&era.addresses()[0])
        );
        assert_eq!(
            table.reward_address(Height(first + len - 1)),
            Some(&era.addresses()[len as usize - 1])
        );
        // The rotation wraps back to the front of the list.
        assert_eq!(
            table.reward_address(Height(first + len)),
            Some(&era.addresses()[0])
        );
    }
}

/// Check that rebuilding the tables and parameters produces equal values
/// and identical query results.
#[test]
fn loading_is_idempotent() {
    let _init_guard = nelumbo_test::init();

    let sample_heights = [
        0,
        1,
        12,
        13,
        131_399,
        131_400,
        262_800,
        394_200,
        525_600,
        525_613,
        Height::MAX.0,
    ];

    for network in Network::iter() {
        let first = EraTable::new(network);
        let second = EraTable::new(network);
        assert_eq!(first, second);

        for height in sample_heights {
            assert_eq!(
                first.reward_address(Height(height)),
                second.reward_address(Height(height))
            );
            assert_eq!(
                first.reward_address(Height(height)),
                EraTable::for_network(network).reward_address(Height(height))
            );
        }

        assert_eq!(ChainParams::new(network), ChainParams::new(network));
    }
}

#[test]
fn era_table_loader_rejects_bad_tables() {
    let _init_guard = nelumbo_test::init();

    let addresses: &[&str] = &["lotus_16PSJNf1EDEfGvaYzaXJCJZrXH4pgiTo7kyW61iGi"];

    let empty: [(EraName, Height, &[&str]); 0] = [];
    assert_eq!(
        EraTable::from_list(empty),
        Err(subsidy::EraTableError::Empty)
    );

    assert_eq!(
        EraTable::from_list([(Genesis, Height(1), addresses)]),
        Err(subsidy::EraTableError::FirstEraStartsTooLate(Height(1)))
    );

    assert_eq!(
        EraTable::from_list([
            (Genesis, Height(0), addresses),
            (Exodus, Height(131_400), addresses),
            (Leviticus, Height(100), addresses),
        ]),
        Err(subsidy::EraTableError::UnsortedEraStarts {
            previous: Height(131_400),
            next: Height(100),
        })
    );

    assert_eq!(
        EraTable::from_list([(Genesis, Height(0), addresses), (Exodus, Height(0), addresses)]),
        Err(subsidy::EraTableError::UnsortedEraStarts {
            previous: Height(0),
            next: Height(0),
        })
    );

    let no_addresses: &[&str] = &[];
    assert_eq!(
        EraTable::from_list([(Genesis, Height(0), no_addresses)]),
        Err(subsidy::EraTableError::NoAddresses(Genesis))
    );

    let unparseable: &[&str] = &["notanaddress"];
    assert_eq!(
        EraTable::from_list([(Genesis, Height(0), unparseable)]),
        Err(subsidy::EraTableError::InvalidAddress {
            era: Genesis,
            address: "notanaddress".to_string(),
        })
    );
}

/// Check the loaded chain parameters against the published constants.
#[test]
fn chain_params_load_the_published_constants() {
    let _init_guard = nelumbo_test::init();

    const GB: u64 = 1024 * 1024 * 1024;

    let mainnet = ChainParams::new(Mainnet);
    assert_eq!(mainnet.network(), Mainnet);
    assert_eq!(
        mainnet.assume_valid().to_string(),
        "00000000000000000bbf74c9cbc94a1b2efd539b191be565961c7867a3672101"
    );
    assert_eq!(
        mainnet.minimum_chain_work().as_u128(),
        0x0153873c309a54a154807f7b
    );
    assert_eq!(mainnet.assumed_blockchain_size(), 209 * GB);
    assert_eq!(mainnet.assumed_chainstate_size(), 3 * GB);

    let testnet = ChainParams::new(Testnet);
    assert_eq!(testnet.network(), Testnet);
    assert_eq!(
        testnet.assume_valid().to_string(),
        "00000000000922af6e587f3cddd4a3d715e046563935d85a2b5b6bfcd1c25ef7"
    );
    assert_eq!(
        testnet.minimum_chain_work().as_u128(),
        0x6e7d5c32f4d4fec4f8
    );
    assert_eq!(testnet.assumed_blockchain_size(), 55 * GB);
    assert_eq!(testnet.assumed_chainstate_size(), 2 * GB);
}

#[test]
fn chain_params_loader_rejects_bad_constants() {
    let _init_guard = nelumbo_test::init();

    let good_hash = "00000000000000000bbf74c9cbc94a1b2efd539b191be565961c7867a3672101";
    let good_work = "00000000000000000000000000000000000000000153873c309a54a154807f7b";

    assert_eq!(
        ChainParams::from_parts(Mainnet, "nothex", good_work, 1, 1),
        Err(chain::ChainParamsError::InvalidAssumeValidHash("nothex"))
    );

    assert_eq!(
        ChainParams::from_parts(Mainnet, good_hash, "nothex", 1, 1),
        Err(chain::ChainParamsError::InvalidMinimumChainWork("nothex"))
    );

    // 2^128 is one bit too wide for the u128-backed work type.
    let too_wide = "0000000000000000000000000000000100000000000000000000000000000000";
    assert_eq!(
        ChainParams::from_parts(Mainnet, good_hash, too_wide, 1, 1),
        Err(chain::ChainParamsError::MinimumChainWorkTooLarge(too_wide))
    );
}

#[test]
fn network_strings_round_trip() {
    let _init_guard = nelumbo_test::init();

    assert_eq!("Mainnet".parse::<Network>().unwrap(), Mainnet);
    assert_eq!("testnet".parse::<Network>().unwrap(), Testnet);
    assert_eq!("TESTNET".parse::<Network>().unwrap(), Testnet);
    assert!("miannet".parse::<Network>().is_err());

    assert_eq!(Mainnet.to_string(), "Mainnet");
    assert_eq!(Testnet.lowercase_name(), "testnet");

    assert_eq!(Network::iter().collect::<Vec<_>>(), vec![Mainnet, Testnet]);

    assert_eq!(Mainnet.address_token(), '_');
    assert_eq!(Testnet.address_token(), 'T');
    assert!(!Mainnet.is_a_test_network());
    assert!(Testnet.is_a_test_network());
}

mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// Check that every height falls inside exactly one era, with a
        /// reward address drawn from that era's list.
        #[test]
        fn every_height_has_a_reward_address(height in any::<Height>()) {
            let _init_guard = nelumbo_test::init();

            for network in Network::iter() {
                let table = EraTable::for_network(network);

                let era = table
                    .era_containing(height)
                    .expect("validated tables cover every height");
                prop_assert!(era.first_height() <= height);

                let index = table
                    .eras()
                    .iter()
                    .position(|candidate| candidate.first_height() == era.first_height())
                    .expect("the era came from this table");
                if let Some(next) = table.eras().get(index + 1) {
                    prop_assert!(height < next.first_height());
                }

                let address = table
                    .reward_address(height)
                    .expect("validated tables cover every height");
                prop_assert!(era.addresses().contains(address));
            }
        }
    }
}
