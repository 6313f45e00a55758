//! Literal lexing: code units to decimal triples.
//!
//! The scanners are generated once per code unit width (`u8`,
//! `u16`, `u32`); each expects ASCII digit values regardless of
//! the unit width and reports how many units it consumed. All
//! error plumbing is explicit `match`es so that every function
//! stays callable in constant evaluation.

macro_rules! impl_atof {
    ($name:ident, $decimal:ident, $uint:ty, $unbiased:ty $(,)?) => {
        $crate::fp::atof::impl_atof_for!(
            $name, $decimal, $uint, $unbiased, u8, from_ascii, from_ascii_or, parse_ascii,
            mantissa_ascii, exponent_ascii
        );
        $crate::fp::atof::impl_atof_for!(
            $name, $decimal, $uint, $unbiased, u16, from_utf16, from_utf16_or, parse_utf16,
            mantissa_utf16, exponent_utf16
        );
        $crate::fp::atof::impl_atof_for!(
            $name, $decimal, $uint, $unbiased, u32, from_utf32, from_utf32_or, parse_utf32,
            mantissa_utf32, exponent_utf32
        );

        impl $name {
            /// Parses a literal from a string.
            ///
            /// Shorthand for [`from_ascii`][Self::from_ascii] on
            /// the string's bytes.
            pub const fn parse(s: &str) -> Result<Self, $crate::conv::ParseError> {
                Self::from_ascii(s.as_bytes())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::conv::ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::parse(s)
            }
        }
    };
}
pub(crate) use impl_atof;

macro_rules! impl_atof_for {
    (
        $name:ident,
        $decimal:ident,
        $uint:ty,
        $unbiased:ty,
        $char:ty,
        $from:ident,
        $from_or:ident,
        $parse:ident,
        $mantissa:ident,
        $exponent:ident $(,)?
    ) => {
        impl $decimal {
            /// Parses the mantissa portion of a literal: an
            /// optional sign, digits, and at most one decimal
            /// point.
            ///
            /// Digits that do not fit the coefficient are folded
            /// into the exponent; the first dropped digit rounds
            /// the retained coefficient half to even. Returns the
            /// number of code units consumed and the triple.
            pub(crate) const fn $mantissa(
                s: &[$char],
            ) -> Result<(usize, Self), $crate::conv::ParseError> {
                use $crate::conv::ParseError;

                const ZERO: $char = b'0' as $char;
                const PLUS: $char = b'+' as $char;
                const MINUS: $char = b'-' as $char;
                const DOT: $char = b'.' as $char;

                let mut sign = false;
                let mut coeff: $uint = 0;
                let mut exp: $unbiased = 0;

                // Set once the first digit is seen.
                let mut digits = false;
                // Set once the decimal point is seen.
                let mut frac = false;
                // Set once `coeff` stops accepting digits.
                let mut full = false;

                let mut rest = s;
                if let Some((&c, r)) = rest.split_first() {
                    if c == PLUS || c == MINUS {
                        sign = c == MINUS;
                        rest = r;
                    }
                }

                while let Some((&c, r)) = rest.split_first() {
                    let d = c.wrapping_sub(ZERO);
                    if d < 10 {
                        digits = true;
                        if full {
                            // Dropped digit: scale the exponent
                            // instead.
                            exp = exp.saturating_add(1);
                        } else {
                            let next = match coeff.checked_mul(10) {
                                Some(x) => x.checked_add(d as $uint),
                                None => None,
                            };
                            match next {
                                Some(x) => coeff = x,
                                None => {
                                    // The coefficient is full.
                                    // This first dropped digit
                                    // decides the rounding of what
                                    // was retained: up past half,
                                    // and away from an odd
                                    // coefficient at exactly half.
                                    full = true;
                                    exp = exp.saturating_add(1);
                                    if d > 5 || (d == 5 && coeff & 1 != 0) {
                                        coeff = match coeff.checked_add(1) {
                                            Some(x) => x,
                                            None => {
                                                // 999... rolled over:
                                                // drop one more digit.
                                                // The top value's last
                                                // digit, rounded, can
                                                // carry into the
                                                // retained part.
                                                exp = exp.saturating_add(1);
                                                if <$uint>::MAX % 10 + 1 >= 5 {
                                                    <$uint>::MAX / 10 + 1
                                                } else {
                                                    <$uint>::MAX / 10
                                                }
                                            }
                                        };
                                    }
                                }
                            }
                        }
                        if frac {
                            exp = exp.saturating_sub(1);
                        }
                    } else if c == DOT {
                        if frac {
                            return Err(ParseError::invalid("second decimal point"));
                        }
                        frac = true;
                    } else if c == PLUS || c == MINUS {
                        return Err(ParseError::invalid("misplaced sign"));
                    } else {
                        break;
                    }
                    rest = r;
                }

                if !digits {
                    return Err(ParseError::invalid("expected digit"));
                }

                Ok((s.len() - rest.len(), Self { sign, coeff, exp }))
            }

            /// Parses an explicit exponent: an optional sign
            /// followed by at least one digit.
            ///
            /// Overflow of the accumulated magnitude is a hard
            /// failure, never a saturation: later stages rely on
            /// a well-defined error path rather than a corrupted
            /// magnitude.
            pub(crate) const fn $exponent(
                s: &[$char],
            ) -> Result<(usize, $unbiased), $crate::conv::ParseError> {
                use $crate::conv::ParseError;

                const ZERO: $char = b'0' as $char;
                const PLUS: $char = b'+' as $char;
                const MINUS: $char = b'-' as $char;

                let mut sign = false;
                let mut exp: $unbiased = 0;
                let mut digits = false;

                let mut rest = s;
                if let Some((&c, r)) = rest.split_first() {
                    if c == PLUS || c == MINUS {
                        sign = c == MINUS;
                        rest = r;
                    }
                }

                while let Some((&c, r)) = rest.split_first() {
                    let d = c.wrapping_sub(ZERO);
                    if d < 10 {
                        digits = true;
                        exp = match exp.checked_mul(10) {
                            Some(exp) => exp,
                            None => return Err(ParseError::exp_overflow()),
                        };
                        exp = match exp.checked_add(d as $unbiased) {
                            Some(exp) => exp,
                            None => return Err(ParseError::exp_overflow()),
                        };
                    } else if c == PLUS || c == MINUS {
                        return Err(ParseError::invalid("misplaced sign"));
                    } else {
                        break;
                    }
                    rest = r;
                }

                if !digits {
                    return Err(ParseError::invalid("expected digit"));
                }

                Ok((s.len() - rest.len(), if sign { -exp } else { exp }))
            }

            /// Parses a full literal: a mantissa, then an
            /// optional `e`/`E` exponent.
            ///
            /// Returns the number of code units consumed and the
            /// decimal triple. Consuming less than the whole
            /// input is not an error here; whole-input validation
            /// belongs to the conversion entry points.
            pub const fn $parse(
                s: &[$char],
            ) -> Result<(usize, Self), $crate::conv::ParseError> {
                use $crate::conv::ParseError;

                const E_LOWER: $char = b'e' as $char;
                const E_UPPER: $char = b'E' as $char;

                let (mut consumed, mut num) = match Self::$mantissa(s) {
                    Ok(v) => v,
                    Err(err) => return Err(err),
                };

                let (_, rest) = s.split_at(consumed);
                if let Some((&c, r)) = rest.split_first() {
                    if c == E_LOWER || c == E_UPPER {
                        match Self::$exponent(r) {
                            Ok((n, e)) => {
                                consumed += 1 + n;
                                num.exp = match num.exp.checked_add(e) {
                                    Some(exp) => exp,
                                    None => return Err(ParseError::exp_overflow()),
                                };
                            }
                            Err(err) => return Err(err),
                        }
                    }
                }

                Ok((consumed, num))
            }
        }

        impl $name {
            /// Converts a whole literal into a bit pattern.
            ///
            /// The numeric grammar must consume the entire input.
            /// When it does not, the spellings `Inf`, `+Inf`,
            /// `-Inf`, and `NaN` (case-insensitive, exact) are
            /// recognized as a fallback; everything else is an
            /// error.
            pub const fn $from(s: &[$char]) -> Result<Self, $crate::conv::ParseError> {
                use $crate::conv::ParseError;

                /// Case-insensitive comparison against a
                /// lowercase ASCII pattern.
                const fn eq_fold(s: &[$char], lit: &[u8]) -> bool {
                    if s.len() != lit.len() {
                        return false;
                    }
                    let mut s = s;
                    let mut lit = lit;
                    while let (Some((&c, s_rest)), Some((&l, lit_rest))) =
                        (s.split_first(), lit.split_first())
                    {
                        let c = if c >= b'A' as $char && c <= b'Z' as $char {
                            c + 0x20
                        } else {
                            c
                        };
                        if c != l as $char {
                            return false;
                        }
                        s = s_rest;
                        lit = lit_rest;
                    }
                    true
                }

                if s.is_empty() {
                    return Err(ParseError::empty());
                }

                match $decimal::$parse(s) {
                    Ok((n, num)) => {
                        if n == s.len() {
                            return Ok(Self::from_decimal(num));
                        }
                    }
                    Err(_) => {}
                }

                // The numeric grammar did not take the whole
                // input; try the spelled-out forms.
                let mut sign = false;
                let mut signed = false;
                let mut body = s;
                if let Some((&c, r)) = s.split_first() {
                    if c == b'+' as $char || c == b'-' as $char {
                        sign = c == b'-' as $char;
                        signed = true;
                        body = r;
                    }
                }
                if eq_fold(body, b"inf") {
                    return Ok(Self::inf(sign));
                }
                // NaN takes no sign.
                if !signed && eq_fold(body, b"nan") {
                    return Ok(Self::nan());
                }

                Err(ParseError::invalid("unrecognized literal"))
            }

            /// Converts a whole literal, substituting `default`
            /// on any error.
            pub const fn $from_or(s: &[$char], default: Self) -> Self {
                match Self::$from(s) {
                    Ok(v) => v,
                    Err(_) => default,
                }
            }
        }
    };
}
pub(crate) use impl_atof_for;
