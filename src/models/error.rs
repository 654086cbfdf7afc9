//! Error types for address parsing and subnet computation.

use thiserror::Error;

/// Why a dotted-quad string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The string did not split into exactly four parts (count found).
    SegmentCount(usize),
    /// A part was empty or contained something other than decimal digits.
    NonNumeric(String),
    /// A part was numeric but larger than 255.
    OctetOutOfRange(String),
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErrorKind::SegmentCount(n) => write!(f, "expected 4 octets, found {n}"),
            ParseErrorKind::NonNumeric(seg) => write!(f, "'{seg}' is not a number"),
            ParseErrorKind::OctetOutOfRange(seg) => write!(f, "'{seg}' is not a valid octet"),
        }
    }
}

/// Errors returned by the subnet calculator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    /// Malformed address text.
    #[error("invalid address '{input}': {kind}")]
    Parse { input: String, kind: ParseErrorKind },

    /// Prefix length outside 0..=32.
    #[error("invalid prefix length {0}, must be between 0 and 32")]
    InvalidPrefix(i64),
}

impl SubnetError {
    pub(crate) fn parse(input: &str, kind: ParseErrorKind) -> Self {
        SubnetError::Parse {
            input: input.to_string(),
            kind,
        }
    }

    /// True for malformed address text.
    pub fn is_parse(&self) -> bool {
        matches!(self, SubnetError::Parse { .. })
    }

    /// True for an out of range prefix length.
    pub fn is_invalid_prefix(&self) -> bool {
        matches!(self, SubnetError::InvalidPrefix(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SubnetError::parse("1.2.3", ParseErrorKind::SegmentCount(3));
        assert_eq!(
            err.to_string(),
            "invalid address '1.2.3': expected 4 octets, found 3"
        );
        assert!(err.is_parse());

        let err = SubnetError::InvalidPrefix(33);
        assert_eq!(
            err.to_string(),
            "invalid prefix length 33, must be between 0 and 32"
        );
        assert!(err.is_invalid_prefix());
    }
}
