use proptest::prelude::*;

use crate::parameters::Network;

use super::Address;

impl Arbitrary for Address {
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        any::<(bool, bool, [u8; 20])>()
            .prop_map(|(is_mainnet, is_p2pkh, hash_bytes)| {
                let network = if is_mainnet {
                    Network::Mainnet
                } else {
                    Network::Testnet
                };

                if is_p2pkh {
                    Address::from_pub_key_hash(network, hash_bytes)
                } else {
                    Address::from_script_hash(network, hash_bytes)
                }
            })
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}
