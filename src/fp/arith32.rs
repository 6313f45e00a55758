//! Extended-precision helpers for the 32-bit format, which scales
//! its mantissa through a 64-bit accumulator.

use super::arith::impl_wide_arith;

impl_wide_arith!(u64);
