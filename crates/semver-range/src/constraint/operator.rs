//! Operator types for version requirements

use std::fmt;

use crate::ParseError;

/// Operators that may prefix a version in a requirement string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Bare version or `=`, matches on the (major, minor, patch) triple
    Equal,
    /// Greater than (>)
    GreaterThan,
    /// Less than (<)
    LessThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Caret range (^)
    Caret,
    /// Tilde range (~)
    Tilde,
}

/// Recognized prefixes, longest first.
const PREFIXES: &[(&str, Operator)] = &[
    (">=", Operator::GreaterThanOrEqual),
    ("<=", Operator::LessThanOrEqual),
    ("^", Operator::Caret),
    ("~", Operator::Tilde),
    (">", Operator::GreaterThan),
    ("<", Operator::LessThan),
    ("=", Operator::Equal),
];

impl Operator {
    /// Parse an operator from its exact string form. The empty string is a bare version.
    pub fn from_str(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Ok(Operator::Equal);
        }
        PREFIXES
            .iter()
            .find(|(prefix, _)| *prefix == s)
            .map(|(_, op)| *op)
            .ok_or_else(|| ParseError::InvalidOperator(s.to_string()))
    }

    /// Split a requirement token into its operator and the version text after it.
    ///
    /// The operator is everything before the first ASCII digit and has to be
    /// one of the supported prefixes exactly.
    pub fn split_token(token: &str) -> Result<(Self, &str), ParseError> {
        let split = token
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(token.len());
        let (prefix, rest) = token.split_at(split);
        Ok((Self::from_str(prefix)?, rest))
    }

    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThanOrEqual => "<=",
            Operator::Caret => "^",
            Operator::Tilde => "~",
        }
    }

    /// Get all supported operators
    pub fn supported_operators() -> &'static [&'static str] {
        &[">=", "<=", "^", "~", ">", "<", "="]
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
