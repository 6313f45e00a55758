use core::fmt;

/// An error returned when parsing a floating point literal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    kind: ErrorKind,
}

impl ParseError {
    pub(crate) const fn empty() -> Self {
        Self {
            kind: ErrorKind::Empty,
        }
    }

    pub(crate) const fn invalid(_reason: &'static str) -> Self {
        Self {
            kind: ErrorKind::Invalid,
        }
    }

    pub(crate) const fn exp_overflow() -> Self {
        Self {
            kind: ErrorKind::ExpOverflow,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum ErrorKind {
    Empty,
    Invalid,
    ExpOverflow,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "cannot parse a float from an empty string"),
            Self::Invalid => write!(f, "invalid floating point literal"),
            Self::ExpOverflow => write!(f, "exponent out of range"),
        }
    }
}
