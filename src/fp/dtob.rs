//! Decimal to binary rescaling.
//!
//! The converter eliminates a triple's base-10 exponent by
//! compensated scaling: multiplying or dividing the mantissa by
//! powers of ten while trading powers of two against a binary
//! exponent, inside an accumulator wide enough to keep the
//! cumulative rounding error far below the target precision.

macro_rules! impl_dtob {
    (
        $name:ident,
        $decimal:ident,
        $binary:ident,
        $uint:ty,
        $wide:ty,
        $unbiased:ty,
        $arith:ident $(,)?
    ) => {
        impl $decimal {
            /// Scaling step sizes, largest first. Each pairs `k`
            /// decimal digits with a compensating power of two
            /// `m` such that `2^m >= 10^k`.
            const STEPS: &'static [($unbiased, u32)] = &[(9, 30), (6, 20), (3, 10), (1, 4)];

            /// Rescales the decimal triple into a normalized
            /// base-2 triple.
            ///
            /// The mantissa of a nonzero result either has its
            /// leading bit in the implicit position, or is
            /// subnormal with the exponent pinned at the format
            /// minimum. Magnitudes beyond the format resolve to
            /// the infinity and zero sentinels rather than
            /// failing.
            pub const fn to_binary(self) -> $binary {
                // Nothing to scale. This also covers `0e+huge`,
                // which would otherwise walk the whole exponent.
                if self.coeff == 0 {
                    return $binary {
                        sign: self.sign,
                        mantissa: 0,
                        exp: 0,
                    };
                }

                let mut acc = self.coeff as $wide;
                let mut exp10 = self.exp;
                let mut exp2: $unbiased = 0;

                if exp10 > 0 {
                    let (a, e10, e2) = Self::shrink_exp10(acc, exp10, exp2);
                    acc = a;
                    exp10 = e10;
                    exp2 = e2;
                } else if exp10 < 0 {
                    let (a, e10, e2) = Self::grow_exp10(acc, exp10, exp2);
                    acc = a;
                    exp10 = e10;
                    exp2 = e2;
                }
                debug_assert!(exp10 == 0);

                if acc == 0 {
                    // Underflowed to exact zero.
                    return $binary {
                        sign: self.sign,
                        mantissa: 0,
                        exp: 0,
                    };
                }

                // Narrow to the target precision, rounding each
                // bit shifted out.
                let mut pos: $unbiased = $name::P as $unbiased - 1;
                while acc >= (1 as $wide) << $name::P {
                    acc = $arith::div_half_even(acc, 2);
                    pos += 1;
                }
                // Raise the leading bit to the implicit position
                // while the exponent allows it; stopping early
                // leaves a subnormal mantissa.
                while acc < (1 as $wide) << ($name::P - 1) && exp2 + pos > $name::EMIN {
                    acc *= 2;
                    pos -= 1;
                }
                exp2 += pos;

                // Below the normal range: shift into the
                // subnormal encoding, clamping at the minimum
                // exponent.
                while exp2 < $name::EMIN {
                    acc = $arith::div_half_even(acc, 2);
                    exp2 += 1;
                }

                debug_assert!($arith::bitlen(acc) <= $name::P);
                $binary {
                    sign: self.sign,
                    mantissa: acc as $uint,
                    exp: exp2,
                }
            }

            /// Retires a positive decimal exponent.
            ///
            /// Multiplies the accumulator by `10^k` per step;
            /// when a multiply has no headroom, first divides by
            /// the compensating `2^m` and moves `m` into the
            /// binary exponent. A binary exponent past the
            /// format maximum saturates to the infinity sentinel
            /// `(1, 0, EMAX + 1)`.
            const fn shrink_exp10(
                mut acc: $wide,
                mut exp10: $unbiased,
                mut exp2: $unbiased,
            ) -> ($wide, $unbiased, $unbiased) {
                let mut steps = Self::STEPS;
                while let Some((&(k, m), rest)) = steps.split_first() {
                    let pow10 = (10 as $wide).pow(k as u32);
                    while exp10 >= k {
                        if acc > <$wide>::MAX / ((1 as $wide) << m) {
                            if exp2 > $name::EMAX - m as $unbiased {
                                return (1, 0, $name::EMAX + 1);
                            }
                            acc = $arith::div_half_even(acc, (1 as $wide) << m);
                            exp2 += m as $unbiased;
                        }
                        acc *= pow10;
                        exp10 -= k;
                    }
                    steps = rest;
                }
                (acc, exp10, exp2)
            }

            /// Retires a negative decimal exponent.
            ///
            /// Pushes the accumulator to the top of its width by
            /// powers of two (moving them out of the binary
            /// exponent), then divides by `10^k` per step. Once
            /// the binary exponent proves every remaining bit
            /// sits below half the smallest subnormal, the value
            /// collapses to the exact zero sentinel `(0, 0, 0)`.
            const fn grow_exp10(
                mut acc: $wide,
                mut exp10: $unbiased,
                mut exp2: $unbiased,
            ) -> ($wide, $unbiased, $unbiased) {
                let mut steps = Self::STEPS;
                while let Some((&(k, m), rest)) = steps.split_first() {
                    let pow10 = (10 as $wide).pow(k as u32);
                    while exp10 <= -k {
                        while acc <= <$wide>::MAX / ((1 as $wide) << m) {
                            if exp2 < $name::ETINY - <$wide>::BITS as $unbiased {
                                return (0, 0, 0);
                            }
                            acc *= (1 as $wide) << m;
                            exp2 -= m as $unbiased;
                        }
                        acc = $arith::div_half_even(acc, pow10);
                        exp10 += k;
                    }
                    steps = rest;
                }
                (acc, exp10, exp2)
            }
        }
    };
}
pub(crate) use impl_dtob;
