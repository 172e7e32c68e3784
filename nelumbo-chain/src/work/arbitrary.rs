//! Randomised property testing strategies for work types.

use proptest::prelude::*;

use super::difficulty::{PartialCumulativeWork, Work, U256};

impl Arbitrary for Work {
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        any::<u128>()
            .prop_map(|value| {
                Work::try_from(U256::from(value)).expect("u128 values always fit in Work")
            })
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

impl Arbitrary for PartialCumulativeWork {
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        any::<Work>().prop_map(PartialCumulativeWork::from).boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}
