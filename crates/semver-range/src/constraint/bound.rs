//! Lower and upper bounds for caret and tilde ranges

use std::fmt;

use crate::Version;

/// The half-open interval `[lower, upper)` a caret or tilde requirement covers.
///
/// A bumped component that would overflow `u64` carries into the next one
/// up, so `~1.<max>` ends below `2.0.0`. Only an overflowing major leaves
/// the interval without an upper bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds {
    lower: Version,
    upper: Option<Version>,
}

impl Bounds {
    /// Bounds for `^version`: the upper bound bumps the first nonzero
    /// component among those written out, so `^1.2` is `>=1.2 <2.0.0`,
    /// `^0.2` is `>=0.2 <0.3.0` and `^0.0.3` is `>=0.0.3 <0.0.4`.
    pub fn caret(version: &Version) -> Self {
        let (major, minor, patch) = version.tuple();

        let upper = if major > 0 {
            bump_major(major)
        } else if version.has_minor() && minor > 0 {
            bump_minor(0, minor)
        } else if version.has_patch() {
            bump_patch(0, minor, patch)
        } else if version.has_minor() {
            // ^0.0
            Some(Version::new(0, 1, 0))
        } else {
            // ^0
            Some(Version::new(1, 0, 0))
        };

        Bounds {
            lower: version.clone(),
            upper,
        }
    }

    /// Bounds for `~version`: allows patch level changes when a minor
    /// component was given, minor level changes otherwise.
    pub fn tilde(version: &Version) -> Self {
        let (major, minor, _) = version.tuple();

        let upper = if version.has_minor() {
            bump_minor(major, minor)
        } else {
            bump_major(major)
        };

        Bounds {
            lower: version.clone(),
            upper,
        }
    }

    /// Inclusive lower bound, carrying the requirement's prerelease
    pub fn lower(&self) -> &Version {
        &self.lower
    }

    /// Exclusive upper bound, always a release version. `None` when the
    /// major component would have to go past `u64::MAX`.
    pub fn upper(&self) -> Option<&Version> {
        self.upper.as_ref()
    }
}

fn bump_major(major: u64) -> Option<Version> {
    major.checked_add(1).map(|major| Version::new(major, 0, 0))
}

fn bump_minor(major: u64, minor: u64) -> Option<Version> {
    match minor.checked_add(1) {
        Some(minor) => Some(Version::new(major, minor, 0)),
        None => bump_major(major),
    }
}

fn bump_patch(major: u64, minor: u64, patch: u64) -> Option<Version> {
    match patch.checked_add(1) {
        Some(patch) => Some(Version::new(major, minor, patch)),
        None => bump_minor(major, minor),
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">={}", self.lower)?;
        if let Some(upper) = &self.upper {
            write!(f, " <{}", upper)?;
        }
        Ok(())
    }
}
