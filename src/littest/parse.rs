use anyhow::{bail, Context, Result};

/// A parsed corpus line.
#[derive(Copy, Clone, Debug)]
pub(super) struct Case<'a> {
    pub line: usize,
    pub format: Format,
    pub literal: &'a str,
    pub expect: Expect,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) enum Format {
    B32,
    B64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) enum Expect {
    Bits(u64),
    Inf,
    NegInf,
    Nan,
    Error,
}

pub(super) fn parse(s: &str) -> Result<Vec<Case<'_>>> {
    let mut cases = Vec::new();
    for (i, line) in s.lines().enumerate() {
        let line_no = i + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with("--") {
            continue;
        }

        let (format, rest) = line
            .split_once(' ')
            .with_context(|| format!("#{line_no}: missing format: `{line}`"))?;
        let format = match format {
            "b32" => Format::B32,
            "b64" => Format::B64,
            _ => bail!("#{line_no}: unknown format: `{format}`"),
        };

        let (literal, expect) = rest
            .split_once("->")
            .with_context(|| format!("#{line_no}: missing `->`: `{rest}`"))?;
        let literal = literal.trim();
        let expect = match expect.trim() {
            "error" => Expect::Error,
            "inf" => Expect::Inf,
            "-inf" => Expect::NegInf,
            "nan" => Expect::Nan,
            bits => {
                let hex = bits
                    .strip_prefix("0x")
                    .with_context(|| format!("#{line_no}: expected hex bits: `{bits}`"))?;
                let bits = u64::from_str_radix(hex, 16)
                    .with_context(|| format!("#{line_no}: bad bits: `{bits}`"))?;
                Expect::Bits(bits)
            }
        };

        cases.push(Case {
            line: line_no,
            format,
            literal,
            expect,
        });
    }
    Ok(cases)
}
