//! Randomised property testing strategies for [`Amount`]s.

use proptest::prelude::*;

use super::*;

impl<C> Arbitrary for Amount<C>
where
    C: Constraint + fmt::Debug,
{
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        C::valid_range().prop_map(|v| Self(v, PhantomData)).boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}
