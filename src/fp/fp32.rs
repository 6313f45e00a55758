use core::mem::size_of;

use super::{arith32, base::impl_fp};
use crate::util::const_assert;

/// A binary32 (`f32`) bit pattern.
///
/// Laid out as `sign(1) | exponent(8) | mantissa(23)`, most
/// significant bit first. Equality is bitwise; IEEE semantics
/// belong to the native value returned by
/// [`to_f32`][Self::to_f32].
#[derive(Copy, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct Fp32(u32);
const_assert!(size_of::<Fp32>() == 32 / 8);

/// A base-10 triple for the binary32 format:
/// `(-1)^sign · coeff · 10^exp`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Decimal32 {
    /// Sign of the represented value.
    pub sign: bool,
    /// Unsigned decimal coefficient.
    pub coeff: u32,
    /// Base-10 exponent.
    pub exp: i32,
}

/// A base-2 triple for the binary32 format:
/// `(-1)^sign · mantissa · 2^(exp - 23)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Binary32 {
    /// Sign of the represented value.
    pub sign: bool,
    /// Unsigned base-2 mantissa, including the leading bit.
    pub mantissa: u32,
    /// Unbiased base-2 exponent.
    pub exp: i32,
}

impl_fp! {
    name = Fp32,
    decimal = Decimal32,
    binary = Binary32,
    native = f32,
    uint = u32,
    wide = u64,
    biased_exp = u16,
    unbiased_exp = i32,
    arith = arith32,
    to_native = to_f32,
    from_native = from_f32,
    mantissa_bits = 23,
    exponent_bits = 8,
}

// Layout invariants of the binary32 interchange format.
const_assert!(Fp32::BIAS == 127);
const_assert!(Fp32::EMAX == 127);
const_assert!(Fp32::EMIN == -126);
const_assert!(Fp32::ETINY == -149);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::const_assert;

    const ONE: Fp32 = Fp32::from_ascii_or(b"1", Fp32::nan());
    const_assert!(ONE.to_bits() == 0x3F800000);

    #[track_caller]
    fn parsed(s: &str) -> (usize, bool, u32, i32) {
        match Decimal32::parse_ascii(s.as_bytes()) {
            Ok((n, d)) => (n, d.sign, d.coeff, d.exp),
            Err(_) => (0, false, 0, 0),
        }
    }

    #[test]
    fn test_parse_literal() {
        let tests: &[(&str, (usize, bool, u32, i32))] = &[
            ("126", (3, false, 126, 0)),
            ("-0.5", (4, true, 5, -1)),
            ("1.2e+20", (7, false, 12, 19)),
            ("", (0, false, 0, 0)),
            ("1..2", (0, false, 0, 0)),
        ];
        for (i, &(s, want)) in tests.iter().enumerate() {
            assert_eq!(parsed(s), want, "#{i}: parse({s:?})");
        }
    }

    #[test]
    fn test_parse_boundary_rounding() {
        // 4294967295 == 2^32 - 1; the coefficient is narrower
        // than binary64's, so the fold starts much earlier.
        let tests: &[(&str, (usize, bool, u32, i32))] = &[
            ("4294967294", (10, false, 4294967294, 0)),
            ("4294967295", (10, false, 4294967295, 0)),
            ("4294967296", (10, false, 429496730, 1)),
            ("42949672950", (11, false, 4294967295, 1)),
            ("42949672954", (11, false, 4294967295, 1)),
            ("42949672955", (11, false, 429496730, 2)),
            ("42949672959", (11, false, 429496730, 2)),
        ];
        for (i, &(s, want)) in tests.iter().enumerate() {
            assert_eq!(parsed(s), want, "#{i}: parse({s:?})");
        }
    }

    #[test]
    fn test_to_binary() {
        let b = Decimal32 {
            sign: false,
            coeff: 1,
            exp: 0,
        }
        .to_binary();
        assert_eq!(b.mantissa, 1 << 23);
        assert_eq!(b.exp, 0);

        let b = Decimal32 {
            sign: true,
            coeff: 625,
            exp: -4,
        }
        .to_binary();
        // 0.0625 == 2^-4.
        assert!(b.sign);
        assert_eq!(b.mantissa, 1 << 23);
        assert_eq!(b.exp, -4);
    }

    #[test]
    fn test_special_literals() {
        assert_eq!(Fp32::from_ascii(b"-inf").unwrap(), Fp32::inf(true));
        assert!(Fp32::from_ascii(b"NAN").unwrap().is_nan());
        assert_eq!(Fp32::nan().to_bits(), 0x7FC00000);
        assert!(Fp32::from_ascii(b"+nan").is_err());
    }

    #[test]
    fn test_native_round_trip() {
        let fp = Fp32::from_ascii(b"0.5").unwrap();
        assert_eq!(fp.to_f32(), 0.5);
        assert_eq!(Fp32::from_f32(0.5), fp);
    }

    #[test]
    fn test_parse_matches_reference() {
        fn prop(bits: u32) -> quickcheck::TestResult {
            let f = f32::from_bits(bits);
            if !f.is_finite() {
                return quickcheck::TestResult::discard();
            }
            let s = format!("{f:e}");
            let got = match Fp32::from_ascii(s.as_bytes()) {
                Ok(got) => got,
                Err(_) => return quickcheck::TestResult::failed(),
            };
            quickcheck::TestResult::from_bool(got.to_bits() == f.to_bits())
        }
        quickcheck::quickcheck(prop as fn(u32) -> quickcheck::TestResult);
    }

    // Every positive subnormal, formatted shortest and parsed
    // back. Slow; takes a few tens of seconds.
    #[test]
    #[cfg(feature = "slow-tests")]
    fn test_subnormal_sweep() {
        for bits in 1..=0x007FFFFFu32 {
            let f = f32::from_bits(bits);
            let s = format!("{f:e}");
            let got = Fp32::from_ascii(s.as_bytes()).unwrap();
            assert_eq!(got.to_bits(), bits, "{s}");
        }
    }
}
