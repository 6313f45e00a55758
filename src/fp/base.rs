macro_rules! impl_fp {
    (
        name = $name:ident,
        decimal = $decimal:ident,
        binary = $binary:ident,
        native = $native:ty,
        uint = $uint:ty,
        wide = $wide:ty,
        biased_exp = $biased:ty,
        unbiased_exp = $unbiased:ty,
        arith = $arith:ident,
        to_native = $to_native:ident,
        from_native = $from_native:ident,
        mantissa_bits = $t:literal,
        exponent_bits = $w:literal $(,)?
    ) => {
        $crate::fp::base::impl_fp_consts!($name, $uint, $biased, $unbiased, $t, $w);
        $crate::fp::base::impl_fp_repr!(
            $name, $decimal, $binary, $native, $uint, $biased, $unbiased, $to_native,
            $from_native
        );
        $crate::fp::dtob::impl_dtob!($name, $decimal, $binary, $uint, $wide, $unbiased, $arith);
        $crate::fp::atof::impl_atof!($name, $decimal, $uint, $unbiased);
    };
}
pub(crate) use impl_fp;

macro_rules! impl_fp_consts {
    (
        $name:ident,
        $uint:ty,
        $biased:ty,
        $unbiased:ty,
        $t:literal,
        $w:literal $(,)?
    ) => {
        impl $name {
            /// The storage width in bits.
            pub(crate) const K: u32 = (size_of::<$name>() * 8) as u32;
            /// The size of the sign bit in bits.
            const S: u32 = 1;
            /// The width of the exponent field in bits.
            pub(crate) const W: u32 = $w;
            /// The width of the trailing mantissa field in bits.
            pub(crate) const T: u32 = $t;
            /// The number of bits of precision, including the
            /// implicit leading bit.
            pub(crate) const P: u32 = Self::T + 1;

            /// The bias added to the exponent when encoded.
            pub(crate) const BIAS: $unbiased = (1 << (Self::W - 1)) - 1;

            /// The maximum unbiased exponent of a normal value.
            pub(crate) const EMAX: $unbiased = ((1 << Self::W) - 2) - Self::BIAS;

            /// The minimum unbiased exponent of a normal value.
            ///
            /// Subnormal values are encoded against this same
            /// exponent, without the implicit leading mantissa
            /// bit.
            pub(crate) const EMIN: $unbiased = 1 - Self::BIAS;

            /// The unbiased exponent of the smallest subnormal
            /// value, where only the least significant mantissa
            /// bit is set.
            pub(crate) const ETINY: $unbiased = Self::EMIN - Self::T as $unbiased;

            /// The shift needed to set the sign bit.
            pub(crate) const SIGN_SHIFT: u32 = Self::K - Self::S;
            /// Masks the biased exponent field, before shifting.
            pub(crate) const EXP_MASK: $biased = (1 << Self::W) - 1;
            /// Masks the trailing mantissa field.
            pub(crate) const MANT_MASK: $uint = (1 << Self::T) - 1;
        }
    };
}
pub(crate) use impl_fp_consts;

macro_rules! impl_fp_repr {
    (
        $name:ident,
        $decimal:ident,
        $binary:ident,
        $native:ty,
        $uint:ty,
        $biased:ty,
        $unbiased:ty,
        $to_native:ident,
        $from_native:ident $(,)?
    ) => {
        // To/from reprs.
        impl $name {
            /// Creates a value from its raw bit pattern.
            pub const fn from_bits(bits: $uint) -> Self {
                Self(bits)
            }

            /// Returns the raw bit pattern.
            pub const fn to_bits(self) -> $uint {
                self.0
            }

            /// Reinterprets the bit pattern as the native
            /// floating point value.
            ///
            /// This is the only point at which the crate touches
            /// a native float, and it is a plain bit copy.
            pub const fn $to_native(self) -> $native {
                <$native>::from_bits(self.0)
            }

            /// Captures the bit pattern of a native floating
            /// point value.
            pub const fn $from_native(f: $native) -> Self {
                Self(f.to_bits())
            }

            /// Creates a zero.
            ///
            /// Zero is signed, so `negative` selects between
            /// `0.0` and `-0.0`.
            pub const fn zero(negative: bool) -> Self {
                Self::from_parts(negative, 0, 0)
            }

            /// Creates an infinity.
            pub const fn inf(negative: bool) -> Self {
                Self::from_parts(negative, Self::EXP_MASK, 0)
            }

            /// Creates the canonical quiet NaN.
            pub const fn nan() -> Self {
                Self::from_parts(false, Self::EXP_MASK, 1 << (Self::T - 1))
            }

            const fn signbit(self) -> bool {
                self.0 >> Self::SIGN_SHIFT != 0
            }

            /// Returns the biased exponent field.
            pub(crate) const fn biased_exp(self) -> $biased {
                ((self.0 >> Self::T) as $biased) & Self::EXP_MASK
            }

            /// Returns the trailing mantissa field, without the
            /// implicit leading bit.
            pub(crate) const fn mantissa_field(self) -> $uint {
                self.0 & Self::MANT_MASK
            }

            /// Reports whether the value is a NaN.
            pub const fn is_nan(self) -> bool {
                self.biased_exp() == Self::EXP_MASK && self.mantissa_field() != 0
            }

            /// Reports whether the value is an infinity.
            pub const fn is_infinite(self) -> bool {
                self.biased_exp() == Self::EXP_MASK && self.mantissa_field() == 0
            }

            /// Reports whether the value is neither infinite nor
            /// NaN.
            pub const fn is_finite(self) -> bool {
                self.biased_exp() != Self::EXP_MASK
            }

            /// Reports whether the value is positive or negative
            /// zero.
            pub const fn is_zero(self) -> bool {
                self.0 << Self::S == 0
            }

            /// Reports whether the value is subnormal.
            pub const fn is_subnormal(self) -> bool {
                self.biased_exp() == 0 && self.mantissa_field() != 0
            }

            /// Reports whether the sign bit is set.
            pub const fn is_sign_negative(self) -> bool {
                self.signbit()
            }

            /// Classifies the value.
            pub const fn classify(self) -> ::core::num::FpCategory {
                use ::core::num::FpCategory;

                if self.is_nan() {
                    FpCategory::Nan
                } else if self.is_infinite() {
                    FpCategory::Infinite
                } else if self.is_zero() {
                    FpCategory::Zero
                } else if self.biased_exp() == 0 {
                    FpCategory::Subnormal
                } else {
                    FpCategory::Normal
                }
            }

            /// Assembles `sign | exponent | mantissa` into the
            /// bit pattern.
            pub(crate) const fn from_parts(negative: bool, exp: $biased, mantissa: $uint) -> Self {
                debug_assert!(exp <= Self::EXP_MASK);
                debug_assert!(mantissa <= Self::MANT_MASK);

                let sign = (negative as $uint) << Self::SIGN_SHIFT;
                let exp = (exp as $uint) << Self::T;
                Self(sign | exp | mantissa)
            }

            /// Encodes a normalized base-2 triple:
            ///
            /// - A zero mantissa, or an exponent below the
            ///   smallest subnormal exponent, becomes a signed
            ///   zero.
            /// - An exponent above the largest normal exponent
            ///   becomes a signed infinity.
            /// - A mantissa with its leading bit in the implicit
            ///   position is encoded as a normal value.
            /// - Anything else is a subnormal: the exponent field
            ///   is zero and the mantissa keeps its leading
            ///   zeros.
            ///
            /// The triple must be in the shape produced by
            /// [`to_binary`][Self::to_binary] or the decimal
            /// conversion.
            pub const fn from_binary(b: $binary) -> Self {
                if b.mantissa == 0 || b.exp < Self::ETINY {
                    return Self::zero(b.sign);
                }

                if b.exp > Self::EMAX {
                    return Self::inf(b.sign);
                }

                if b.mantissa & ((1 as $uint) << Self::T) != 0 {
                    debug_assert!(b.exp >= Self::EMIN);

                    let field = b.mantissa & Self::MANT_MASK;
                    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
                    let exp = (b.exp + Self::BIAS) as $biased;
                    return Self::from_parts(b.sign, exp, field);
                }

                debug_assert!(b.exp == Self::EMIN);
                Self::from_parts(b.sign, 0, b.mantissa)
            }

            /// Re-extracts the sign, mantissa, and unbiased
            /// exponent from a finite bit pattern.
            ///
            /// Normal values have the implicit leading bit
            /// restored; zeros and subnormals report the minimum
            /// normal exponent, mirroring
            /// [`from_binary`][Self::from_binary].
            pub const fn to_binary(self) -> $binary {
                debug_assert!(self.is_finite());

                let exp = self.biased_exp();
                if exp == 0 {
                    $binary {
                        sign: self.signbit(),
                        mantissa: self.mantissa_field(),
                        exp: Self::EMIN,
                    }
                } else {
                    $binary {
                        sign: self.signbit(),
                        mantissa: self.mantissa_field() | ((1 as $uint) << Self::T),
                        exp: exp as $unbiased - Self::BIAS,
                    }
                }
            }

            /// Converts a decimal triple: rescale to base 2, then
            /// pack.
            pub const fn from_decimal(d: $decimal) -> Self {
                Self::from_binary(d.to_binary())
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::write!(f, concat!(stringify!($name), "({:#x})"), self.0)
            }
        }
    };
}
pub(crate) use impl_fp_repr;
