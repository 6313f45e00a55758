macro_rules! impl_wide_arith {
    ($wide:ty) => {
        /// Divides `x` by `d`, rounding half to even.
        ///
        /// Every narrowing step in the conversion pipeline funnels
        /// through this one rule; bit-exact agreement with IEEE 754
        /// decimal to binary conversion hinges on it being applied
        /// uniformly.
        pub(super) const fn div_half_even(x: $wide, d: $wide) -> $wide {
            debug_assert!(d >= 2);

            let q = x / d;
            let r = x % d;
            // `r > d - r` is `2*r > d` without the overflow.
            if r > d - r || (r == d - r && q & 1 != 0) {
                q + 1
            } else {
                q
            }
        }

        /// Returns the minimum number of bits required to
        /// represent `x`.
        ///
        /// It returns 0 for `x == 0`.
        pub(super) const fn bitlen(x: $wide) -> u32 {
            <$wide>::BITS - x.leading_zeros()
        }
    };
}
pub(crate) use impl_wide_arith;
