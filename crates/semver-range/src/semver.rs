//! Semver facade providing high-level version operations on strings

use crate::{ParseError, Version, VersionRange};

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a requirement string
    pub fn satisfies(version: &str, requirement: &str) -> bool {
        let range = match VersionRange::from_requirement_string(requirement) {
            Ok(r) => r,
            Err(err) => {
                log::trace!("Skipping unparseable requirement {:?}: {}", requirement, err);
                return false;
            }
        };

        Self::satisfies_parsed(version, &range)
    }

    /// Return all versions that satisfy the given requirement, in input order
    pub fn satisfied_by(versions: &[&str], requirement: &str) -> Vec<String> {
        let range = match VersionRange::from_requirement_string(requirement) {
            Ok(r) => r,
            Err(err) => {
                log::trace!("Skipping unparseable requirement {:?}: {}", requirement, err);
                return Vec::new();
            }
        };

        versions
            .iter()
            .filter(|v| Self::satisfies_parsed(v, &range))
            .map(|v| v.to_string())
            .collect()
    }

    /// Parse a requirement string once for repeated checks
    pub fn parse_range(requirement: &str) -> Result<VersionRange, ParseError> {
        VersionRange::from_requirement_string(requirement)
    }

    /// Check a version against a pre-parsed range
    pub fn satisfies_parsed(version: &str, range: &VersionRange) -> bool {
        match parse_logged(version) {
            Some(v) => range.satisfied_by(&v),
            None => false,
        }
    }

    /// Highest version satisfying the requirement
    pub fn max_satisfying(versions: &[&str], requirement: &str) -> Option<String> {
        let range = match VersionRange::from_requirement_string(requirement) {
            Ok(r) => r,
            Err(err) => {
                log::trace!("Skipping unparseable requirement {:?}: {}", requirement, err);
                return None;
            }
        };

        versions
            .iter()
            .filter_map(|v| Some((parse_logged(v)?, *v)))
            .filter(|(parsed, _)| range.satisfied_by(parsed))
            .max_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, v)| v.to_string())
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed: Vec<(Version, &str)> = versions
            .iter()
            .filter_map(|v| Some((parse_logged(v)?, *v)))
            .collect();

        // Stable, so versions equal by precedence keep their input order
        parsed.sort_by(|(a, _), (b, _)| {
            if ascending {
                a.cmp(b)
            } else {
                b.cmp(a)
            }
        });

        parsed.into_iter().map(|(_, v)| v.to_string()).collect()
    }
}

fn parse_logged(version: &str) -> Option<Version> {
    match Version::from_semver(version) {
        Ok(v) => Some(v),
        Err(err) => {
            log::trace!("Skipping unparseable version {:?}: {}", version, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfies_positive() {
        // Basic constraints
        assert!(Semver::satisfies("1.0.0", "1.0.0"));
        assert!(Semver::satisfies("1.0.0", "=1.0.0"));
        assert!(Semver::satisfies("1.0.0-beta", "1.0.0"));

        // Greater than/less than
        assert!(Semver::satisfies("1.0.0", ">=1.0.0"));
        assert!(Semver::satisfies("1.0.1", ">=1.0.0"));
        assert!(Semver::satisfies("1.1.0", ">=1.0.0"));
        assert!(Semver::satisfies("1.0.1", ">1.0.0"));
        assert!(Semver::satisfies("1.1.0", ">1.0.0"));
        assert!(Semver::satisfies("2.0.0", "<=2.0.0"));
        assert!(Semver::satisfies("1.9999.9999", "<=2.0.0"));
        assert!(Semver::satisfies("0.2.9", "<=2.0.0"));
        assert!(Semver::satisfies("1.9999.9999", "<2.0.0"));
        assert!(Semver::satisfies("0.2.9", "<2.0.0"));

        // Prerelease on the boundary triple
        assert!(Semver::satisfies("1.2.3-beta", "<=1.2.3"));
        assert!(Semver::satisfies("1.2.3-beta", "<1.2.3"));
        assert!(Semver::satisfies("1.2.3-beta", "^1.2.3-alpha"));

        // Or constraints
        assert!(Semver::satisfies("1.2.4", "0.1.20 || 1.2.4"));
        assert!(Semver::satisfies("0.0.0", ">=0.2.3 || <0.0.1"));
        assert!(Semver::satisfies("0.2.3", ">=0.2.3 || <0.0.1"));
        assert!(Semver::satisfies("0.2.4", ">=0.2.3 || <0.0.1"));

        // Tilde
        assert!(Semver::satisfies("2.4.5", "~2.4"));
        assert!(Semver::satisfies("1.2.3", "~1"));
        assert!(Semver::satisfies("1.4.7", "~1.0"));

        // Simple version checks
        assert!(Semver::satisfies("1.0.0", ">=1"));
        assert!(Semver::satisfies("1.2.8", ">1.2"));
        assert!(Semver::satisfies("1.1.1", "<1.2"));

        // Combined constraints
        assert!(Semver::satisfies("1.2.3", "~1.2.1 >=1.2.3"));
        assert!(Semver::satisfies("1.2.3", "~1.2.1 =1.2.3"));
        assert!(Semver::satisfies("1.2.3", "~1.2.1 1.2.3"));
        assert!(Semver::satisfies("1.2.3", "~1.2.1 >=1.2.3 1.2.3"));
        assert!(Semver::satisfies("1.2.3", ">=1.2.1 1.2.3"));
        assert!(Semver::satisfies("1.2.3", ">=1.2.3 >=1.2.1"));

        // Caret
        assert!(Semver::satisfies("1.8.1", "^1.2.3"));
        assert!(Semver::satisfies("0.1.2", "^0.1.2"));
        assert!(Semver::satisfies("0.1.2", "^0.1"));
        assert!(Semver::satisfies("1.4.2", "^1.2"));
        assert!(Semver::satisfies("1.4.2", "^1.2 ^1"));
        assert!(Semver::satisfies("1.2.3", "^1.2.3+build"));
    }

    #[test]
    fn test_satisfies_negative() {
        // Exact version mismatch
        assert!(!Semver::satisfies("1.0.1", "1.0.0"));

        // Greater than/less than failures
        assert!(!Semver::satisfies("0.0.0", ">=1.0.0"));
        assert!(!Semver::satisfies("0.1.0", ">1.0.0"));
        assert!(!Semver::satisfies("3.0.0", "<=2.0.0"));
        assert!(!Semver::satisfies("2.2.9", "<2.0.0"));

        // Prerelease off the boundary triple
        assert!(!Semver::satisfies("1.3.0-beta", ">1.2"));
        assert!(!Semver::satisfies("2.0.0-alpha", "^1.2.3"));
        assert!(!Semver::satisfies("0.0.1-beta", "^0.0.1-alpha <0.0.1-alpha.1"));

        // Or constraints
        assert!(!Semver::satisfies("1.2.3", "0.1.20 || 1.2.4"));
        assert!(!Semver::satisfies("0.0.3", ">=0.2.3 || <0.0.1"));

        // Tilde
        assert!(!Semver::satisfies("3.0.0", "~2.4"));
        assert!(!Semver::satisfies("2.3.9", "~2.4"));
        assert!(!Semver::satisfies("0.2.3", "~1"));

        // Caret
        assert!(!Semver::satisfies("1.2.2", "^1.2.3"));
        assert!(!Semver::satisfies("1.1.9", "^1.2"));
        assert!(!Semver::satisfies("2.0.0", "^1.2.3+build"));

        // Unparseable input never satisfies
        assert!(!Semver::satisfies("v1.2.3", "1.2.3"));
        assert!(!Semver::satisfies("1.2.3", "1.2.*"));
        assert!(!Semver::satisfies("1.2.3", ""));
    }

    #[test]
    fn test_satisfied_by() {
        let versions = vec!["1.0", "1.2", "1.9999.9999", "2.0", "2.1", "0.9999.9999"];
        let result = Semver::satisfied_by(&versions, "~1.0");
        assert_eq!(result, vec!["1.0"]);

        let result = Semver::satisfied_by(&versions, "~1");
        assert_eq!(result, vec!["1.0", "1.2", "1.9999.9999"]);

        let versions2 = vec![
            "1.0",
            "1.1",
            "2.9999.9999",
            "3.0",
            "3.1",
            "3.9999.9999",
            "4.0",
            "4.1",
        ];
        let result2 = Semver::satisfied_by(&versions2, ">1.0 <3.0 || >=4.0");
        assert_eq!(result2, vec!["1.1", "2.9999.9999", "4.0", "4.1"]);

        let versions3 = vec!["0.1.1", "0.1.9999", "0.2.0", "0.2.1", "0.3.0", "not-a-version"];
        let result3 = Semver::satisfied_by(&versions3, "^0.2.0");
        assert_eq!(result3, vec!["0.2.0", "0.2.1"]);

        assert!(Semver::satisfied_by(&versions3, "!0.2").is_empty());
    }

    #[test]
    fn test_max_satisfying() {
        let versions = vec!["1.2.3", "1.4.0-rc.1", "1.3.9", "2.0.0", "1.3.9+build"];
        assert_eq!(Semver::max_satisfying(&versions, "^1.2"), Some("1.3.9+build".to_string()));
        assert_eq!(Semver::max_satisfying(&versions, ">=3"), None);
        assert_eq!(Semver::max_satisfying(&versions, "~~1"), None);

        // 1.4.0-rc.1 is off the triple of >=1.2.3
        let max = Semver::max_satisfying(&versions, ">=1.2.3 <=1.4.0");
        assert_eq!(max, Some("1.3.9+build".to_string()));
        let max = Semver::max_satisfying(&versions, ">=1.4.0-beta");
        assert_eq!(max, Some("2.0.0".to_string()));
    }

    #[test]
    fn test_sort() {
        let versions = vec!["1.0", "0.1", "0.1", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let sorted = Semver::sort(&versions);
        assert_eq!(sorted, vec!["0.1", "0.1", "1.0", "2.4.0-alpha", "2.4.0", "3.2.1"]);

        let versions2 = vec![
            "1.0.0-rc.1",
            "junk",
            "1.0.0-beta.11",
            "1.0.0-beta.2",
            "1.0.0+b",
            "1.0.0+a",
        ];
        let sorted2 = Semver::sort(&versions2);
        assert_eq!(
            sorted2,
            vec!["1.0.0-beta.2", "1.0.0-beta.11", "1.0.0-rc.1", "1.0.0+b", "1.0.0+a"]
        );
    }

    #[test]
    fn test_rsort() {
        let versions = vec!["1.0", "0.1", "0.1", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let rsorted = Semver::rsort(&versions);
        assert_eq!(rsorted, vec!["3.2.1", "2.4.0", "2.4.0-alpha", "1.0", "0.1", "0.1"]);
    }

    #[test]
    fn test_parsed_range_reuse() {
        let parsed = Semver::parse_range("^1.2").unwrap();
        assert!(Semver::satisfies_parsed("1.2.3", &parsed));
        assert!(Semver::satisfies_parsed("1.9.0", &parsed));
        assert!(!Semver::satisfies_parsed("2.0.0", &parsed));
        assert!(!Semver::satisfies_parsed("1.9.x", &parsed));
    }
}
