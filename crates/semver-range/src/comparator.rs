//! Version comparison utilities

use std::cmp::Ordering;

use crate::{Bounds, Operator, Version};

/// Comparator for parsed versions
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) == Ordering::Greater
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) != Ordering::Less
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) == Ordering::Less
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) != Ordering::Greater
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) == Ordering::Equal
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        !Self::equal_to(version1, version2)
    }

    /// Semantic version precedence, build metadata ignored
    pub fn compare(version1: &Version, version2: &Version) -> Ordering {
        version1.compare(version2)
    }

    /// Compare the (major, minor, patch) triples only
    pub fn compare_tuple(version1: &Version, version2: &Version) -> Ordering {
        version1.compare_tuple(version2)
    }

    /// Check whether `candidate` satisfies the single requirement `operator requirement`.
    ///
    /// A prerelease candidate only satisfies a requirement whose version has
    /// the same (major, minor, patch) triple. For caret and tilde that is the
    /// version as written, never the synthesized upper bound, so `^1.2.3-beta`
    /// admits `1.2.3-rc.1` but not `2.0.0-rc.1`.
    pub fn matches(candidate: &Version, operator: Operator, requirement: &Version) -> bool {
        Self::within(candidate, operator, requirement)
            && (!candidate.is_prerelease() || candidate.tuple_equals(requirement))
    }

    /// Check the relation between `candidate` and `requirement` without
    /// excluding prereleases.
    ///
    /// Inequalities take prerelease precedence into account only when both
    /// versions share a triple; otherwise the triples alone decide. Caret and
    /// tilde are checked against their expanded bounds.
    pub fn within(candidate: &Version, operator: Operator, requirement: &Version) -> bool {
        let ordering = if candidate.tuple_equals(requirement) {
            Self::compare(candidate, requirement)
        } else {
            Self::compare_tuple(candidate, requirement)
        };

        match operator {
            Operator::Equal => candidate.tuple_equals(requirement),
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::GreaterThanOrEqual => ordering != Ordering::Less,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::LessThanOrEqual => ordering != Ordering::Greater,
            Operator::Caret => Self::within_bounds(candidate, &Bounds::caret(requirement)),
            Operator::Tilde => Self::within_bounds(candidate, &Bounds::tilde(requirement)),
        }
    }

    fn within_bounds(candidate: &Version, bounds: &Bounds) -> bool {
        Self::within(candidate, Operator::GreaterThanOrEqual, bounds.lower())
            && bounds
                .upper()
                .is_none_or(|upper| Self::within(candidate, Operator::LessThan, upper))
    }
}
