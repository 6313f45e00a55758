//! `rbfp` is a pure Rust, no-std conversion from decimal floating
//! point literals to IEEE 754 binary bit patterns.
//!
//! The pipeline has three stages, none of which touches a native
//! float until the final bit reinterpretation:
//!
//! 1. A lexer turns a character sequence into a decimal triple
//! (sign, coefficient, base-10 exponent), folding digits that do
//! not fit the coefficient into the exponent with round half to
//! even.
//! 2. A base converter eliminates the decimal exponent by
//! compensated scaling over an extended-precision accumulator,
//! yielding a normalized base-2 triple.
//! 3. A packer rounds and assembles the triple into the format's
//! `sign | exponent | mantissa` bit layout.
//!
//! The whole pipeline is `const fn` and usable in constant
//! evaluation, and accepts 8, 16, and 32-bit code units carrying
//! ASCII digit values.
//!
//! # Cargo Features
//!
//! - `std`: Implements `std::error::Error` for [`ParseError`].
//! Enabled by default.
//!
//! - `slow-tests`: Exhaustive sweeps in the test suite.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(feature = "std", test)), deny(clippy::std_instead_of_core))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(clippy::alloc_instead_of_core)]
#![deny(clippy::expect_used)]
#![deny(clippy::implicit_saturating_sub)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::panic)]
#![deny(clippy::string_slice)]
#![deny(clippy::undocumented_unsafe_blocks)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::wildcard_imports)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(unused_lifetimes)]
#![deny(unused_qualifications)]

mod conv;
mod fp;
#[cfg(test)]
mod littest;
mod util;

pub use conv::ParseError;
#[doc(inline)]
pub use fp::{Binary32, Binary64, Decimal32, Decimal64, Fp32, Fp64};

/// Simplifies importing common items.
pub mod prelude {
    pub use super::{Fp32, Fp64};
}
