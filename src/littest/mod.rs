#![cfg(test)]

//! Corpus-driven conversion tests.
//!
//! A small line format, one literal per line, with the standard
//! library's correctly-rounded float parser as the trusted
//! reference backend: every numeric expectation in the corpus is
//! checked against it in addition to our own result.

mod parse;

use anyhow::{bail, ensure, Result};

use self::parse::{Case, Expect, Format};
use crate::{Fp32, Fp64};

static CASES: &str = include_str!("cases.lit");

#[test]
fn run_cases() -> Result<()> {
    let cases = parse::parse(CASES)?;
    assert!(!cases.is_empty());
    for case in &cases {
        match case.format {
            Format::B64 => check64(case)?,
            Format::B32 => check32(case)?,
        }
    }
    Ok(())
}

fn check64(case: &Case<'_>) -> Result<()> {
    let want = match case.expect {
        Expect::Bits(bits) => Some(bits),
        Expect::Inf => Some(Fp64::inf(false).to_bits()),
        Expect::NegInf => Some(Fp64::inf(true).to_bits()),
        Expect::Nan => Some(Fp64::nan().to_bits()),
        Expect::Error => None,
    };

    match (Fp64::from_ascii(case.literal.as_bytes()), want) {
        (Ok(got), Some(want)) => {
            ensure!(
                got.to_bits() == want,
                "#{}: `{}`: got {:#018x}, want {:#018x}",
                case.line,
                case.literal,
                got.to_bits(),
                want,
            );
        }
        (Err(_), None) => {}
        (Ok(got), None) => {
            bail!(
                "#{}: `{}`: expected an error, got {got:?}",
                case.line,
                case.literal
            );
        }
        (Err(err), Some(want)) => {
            bail!(
                "#{}: `{}`: want {want:#018x}, got error: {err}",
                case.line,
                case.literal
            );
        }
    }

    // NaN payloads are not pinned down by the reference parser;
    // everything else is.
    if matches!(case.expect, Expect::Bits(_) | Expect::Inf | Expect::NegInf) {
        let reference: f64 = case.literal.parse()?;
        ensure!(
            Some(reference.to_bits()) == want,
            "#{}: `{}`: reference disagrees with corpus: {:#018x}",
            case.line,
            case.literal,
            reference.to_bits(),
        );
    }
    Ok(())
}

fn check32(case: &Case<'_>) -> Result<()> {
    let want = match case.expect {
        Expect::Bits(bits) => {
            ensure!(
                bits <= u64::from(u32::MAX),
                "#{}: bits too wide for binary32",
                case.line
            );
            Some(bits as u32)
        }
        Expect::Inf => Some(Fp32::inf(false).to_bits()),
        Expect::NegInf => Some(Fp32::inf(true).to_bits()),
        Expect::Nan => Some(Fp32::nan().to_bits()),
        Expect::Error => None,
    };

    match (Fp32::from_ascii(case.literal.as_bytes()), want) {
        (Ok(got), Some(want)) => {
            ensure!(
                got.to_bits() == want,
                "#{}: `{}`: got {:#010x}, want {:#010x}",
                case.line,
                case.literal,
                got.to_bits(),
                want,
            );
        }
        (Err(_), None) => {}
        (Ok(got), None) => {
            bail!(
                "#{}: `{}`: expected an error, got {got:?}",
                case.line,
                case.literal
            );
        }
        (Err(err), Some(want)) => {
            bail!(
                "#{}: `{}`: want {want:#010x}, got error: {err}",
                case.line,
                case.literal
            );
        }
    }

    if matches!(case.expect, Expect::Bits(_) | Expect::Inf | Expect::NegInf) {
        let reference: f32 = case.literal.parse()?;
        ensure!(
            Some(reference.to_bits()) == want,
            "#{}: `{}`: reference disagrees with corpus: {:#010x}",
            case.line,
            case.literal,
            reference.to_bits(),
        );
    }
    Ok(())
}
