//! Extended-precision helpers for the 64-bit format, which scales
//! its mantissa through a 128-bit accumulator.

use super::arith::impl_wide_arith;

impl_wide_arith!(u128);
