//! Semantic version parsing and precedence ordering

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::ParseError;

lazy_static! {
    // MAJOR ['.' MINOR ['.' PATCH]] ['-' PRERELEASE] ['+' BUILD]
    static ref VERSION_RE: Regex = Regex::new(
        r"^(\d+)(?:\.(\d+)(?:\.(\d+))?)?(?:-([^+\s]*))?(?:\+(\S*))?$"
    ).unwrap();
}

/// A single dot-separated prerelease identifier
///
/// Variant order matters: numeric identifiers always have lower precedence
/// than alphanumeric ones, which the derived `Ord` relies on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    /// All ASCII digits, compared numerically
    Numeric(u64),
    /// Anything else, compared by ASCII byte order
    AlphaNumeric(String),
}

impl Identifier {
    fn parse(raw: &str, version: &str) -> Result<Self, ParseError> {
        if raw.is_empty() {
            return Err(ParseError::InvalidVersion(version.to_string()));
        }
        if raw.bytes().all(|b| b.is_ascii_digit()) {
            return raw
                .parse()
                .map(Identifier::Numeric)
                .map_err(|_| ParseError::InvalidVersion(version.to_string()));
        }
        Ok(Identifier::AlphaNumeric(raw.to_string()))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => f.write_str(s),
        }
    }
}

/// A parsed semantic version
///
/// Minor and patch remember whether they were written out, since caret and
/// tilde ranges derive their upper bound from the most specific component
/// given. For ordering and equality an omitted component counts as 0, and
/// build metadata is ignored entirely.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: Option<u64>,
    patch: Option<u64>,
    prerelease: Vec<Identifier>,
    build: Vec<String>,
}

impl Version {
    /// Create a release version with all three components present
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor: Some(minor),
            patch: Some(patch),
            prerelease: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Parse a semantic version string such as `1.2`, `1.2.3-beta.1` or `1.2.3+build.5`
    pub fn from_semver(version: &str) -> Result<Self, ParseError> {
        let trimmed = version.trim();
        let caps = VERSION_RE
            .captures(trimmed)
            .ok_or_else(|| ParseError::InvalidVersion(version.to_string()))?;

        let number = |index: usize| -> Result<Option<u64>, ParseError> {
            caps.get(index)
                .map(|m| m.as_str().parse::<u64>())
                .transpose()
                .map_err(|_| ParseError::InvalidVersion(version.to_string()))
        };

        let major = number(1)?.ok_or_else(|| ParseError::InvalidVersion(version.to_string()))?;
        let minor = number(2)?;
        let patch = number(3)?;

        let prerelease = match caps.get(4) {
            Some(m) => m
                .as_str()
                .split('.')
                .map(|part| Identifier::parse(part, version))
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        let build = match caps.get(5) {
            Some(m) => m
                .as_str()
                .split('.')
                .map(|part| {
                    if part.is_empty() {
                        Err(ParseError::InvalidVersion(version.to_string()))
                    } else {
                        Ok(part.to_string())
                    }
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Ok(Version {
            major,
            minor,
            patch,
            prerelease,
            build,
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    /// Minor component, 0 when omitted
    pub fn minor(&self) -> u64 {
        self.minor.unwrap_or(0)
    }

    /// Patch component, 0 when omitted
    pub fn patch(&self) -> u64 {
        self.patch.unwrap_or(0)
    }

    /// Check if the minor component was written out
    pub fn has_minor(&self) -> bool {
        self.minor.is_some()
    }

    /// Check if the patch component was written out
    pub fn has_patch(&self) -> bool {
        self.patch.is_some()
    }

    pub fn prerelease(&self) -> &[Identifier] {
        &self.prerelease
    }

    pub fn build(&self) -> &[String] {
        &self.build
    }

    /// Check if this version carries prerelease identifiers
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// The (major, minor, patch) triple with omitted components as 0
    pub fn tuple(&self) -> (u64, u64, u64) {
        (self.major, self.minor(), self.patch())
    }

    /// Check if both versions share the same (major, minor, patch) triple
    pub fn tuple_equals(&self, other: &Version) -> bool {
        self.tuple() == other.tuple()
    }

    /// Compare only the numeric triples, ignoring prerelease and build
    pub fn compare_tuple(&self, other: &Version) -> Ordering {
        self.tuple().cmp(&other.tuple())
    }

    /// Full semantic version precedence
    pub fn compare(&self, other: &Version) -> Ordering {
        self.compare_tuple(other)
            .then_with(|| compare_prerelease(&self.prerelease, &other.prerelease))
    }
}

/// A release sorts after any prerelease of the same triple. Between two
/// prereleases the derived `Identifier` order applies element-wise, and a
/// shorter list that is a prefix of the other sorts first.
fn compare_prerelease(a: &[Identifier], b: &[Identifier]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tuple().hash(state);
        self.prerelease.hash(state);
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::from_semver(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        if let Some(minor) = self.minor {
            write!(f, ".{}", minor)?;
        }
        if let Some(patch) = self.patch {
            write!(f, ".{}", patch)?;
        }
        for (i, identifier) in self.prerelease.iter().enumerate() {
            f.write_str(if i == 0 { "-" } else { "." })?;
            write!(f, "{}", identifier)?;
        }
        for (i, part) in self.build.iter().enumerate() {
            f.write_str(if i == 0 { "+" } else { "." })?;
            f.write_str(part)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Version::from_semver(&raw).map_err(serde::de::Error::custom)
    }
}
