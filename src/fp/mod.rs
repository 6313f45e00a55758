//! IEEE 754 binary floating point bit patterns built from decimal
//! literals with fixed width integer arithmetic.

mod arith;
mod arith32;
mod arith64;
mod atof;
mod base;
mod dtob;
mod fp32;
mod fp64;

pub use fp32::{Binary32, Decimal32, Fp32};
pub use fp64::{Binary64, Decimal64, Fp64};
