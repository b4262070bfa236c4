//! Requirement strings parsed into OR-ed groups of AND-ed requirements

use std::fmt;
use std::str::FromStr;

use super::{Bounds, Operator};
use crate::{Comparator, ParseError, Version};

/// A single `operator version` requirement
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair {
    operator: Operator,
    version: Version,
}

impl Pair {
    pub fn new(operator: Operator, version: Version) -> Self {
        Pair { operator, version }
    }

    /// Parse a token such as `>=1.2.3`, `^1.2` or a bare `1.2.3`
    pub fn parse(token: &str) -> Result<Self, ParseError> {
        let (operator, version) = Operator::split_token(token)?;
        Ok(Pair::new(operator, Version::from_semver(version)?))
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Rewrite caret and tilde requirements into their `>=` and `<` bounds.
    /// The `<` pair is left out when the upper bound would overflow. Other
    /// requirements are returned as they are.
    pub fn expand(&self) -> Vec<Pair> {
        let bounds = match self.operator {
            Operator::Caret => Bounds::caret(&self.version),
            Operator::Tilde => Bounds::tilde(&self.version),
            _ => return vec![self.clone()],
        };
        let mut pairs = vec![Pair::new(Operator::GreaterThanOrEqual, bounds.lower().clone())];
        if let Some(upper) = bounds.upper() {
            pairs.push(Pair::new(Operator::LessThan, upper.clone()));
        }
        pairs
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator {
            Operator::Equal => write!(f, "{}", self.version),
            op => write!(f, "{}{}", op, self.version),
        }
    }
}

/// Requirements that must all hold
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Group {
    pairs: Vec<Pair>,
}

impl Group {
    pub fn new(pairs: Vec<Pair>) -> Self {
        Group { pairs }
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Check whether every requirement in the group holds for `candidate`.
    ///
    /// Each pair is checked on its own with [`Comparator::matches`], so a
    /// prerelease candidate must share its (major, minor, patch) triple with
    /// every pair as written: `>=1.2.3 <=1.3.2` rejects `1.3.2-pre`.
    pub fn satisfied_by(&self, candidate: &Version) -> bool {
        self.pairs
            .iter()
            .all(|pair| Comparator::matches(candidate, pair.operator, &pair.version))
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", pair)?;
        }
        Ok(())
    }
}

/// A parsed requirement string such as `^1.2 <1.3.2 || >=2`
///
/// Groups are separated by `||` and any one of them may match. Within a
/// group the whitespace separated requirements must all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct VersionRange {
    requirements: Vec<Group>,
}

impl VersionRange {
    pub fn new(requirements: Vec<Group>) -> Self {
        // Empty groups would match everything
        let requirements = requirements
            .into_iter()
            .filter(|g| !g.pairs.is_empty())
            .collect();
        VersionRange { requirements }
    }

    /// Parse a requirement string.
    ///
    /// Blank segments between `||` are skipped, so `"|| 1.2.4 ||"` is the
    /// same as `"1.2.4"`. A string with no requirements at all parses to a
    /// range nothing satisfies.
    pub fn from_requirement_string(requirement: &str) -> Result<Self, ParseError> {
        let mut requirements = Vec::new();

        for segment in requirement.split("||") {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }

            let pairs = segment
                .split_whitespace()
                .map(|token| {
                    Pair::parse(token).inspect_err(|err| {
                        log::trace!("Rejected requirement token {:?}: {}", token, err);
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            requirements.push(Group::new(pairs));
        }

        log::trace!(
            "Parsed requirement {:?} into {} group(s)",
            requirement,
            requirements.len()
        );

        Ok(VersionRange { requirements })
    }

    /// The parsed groups in source order
    pub fn requirements(&self) -> &[Group] {
        &self.requirements
    }

    /// Check if the range has no groups and therefore matches nothing
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Check whether any group is satisfied by `version`
    pub fn satisfied_by(&self, version: &Version) -> bool {
        self.requirements.iter().any(|group| group.satisfied_by(version))
    }
}

impl FromStr for VersionRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionRange::from_requirement_string(s)
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.requirements.iter().enumerate() {
            if i > 0 {
                f.write_str(" || ")?;
            }
            write!(f, "{}", group)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for VersionRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for VersionRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        VersionRange::from_requirement_string(&raw).map_err(serde::de::Error::custom)
    }
}
