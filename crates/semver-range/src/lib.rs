//! Semantic version parsing and requirement range matching
//!
//! This crate parses semantic versions and requirement strings such as
//! `^1.2 <1.3.2 || >=2.0.0-rc.1` and decides whether a version satisfies them.

pub mod constraint;
mod comparator;
mod error;
mod semver;
mod version;

pub use comparator::Comparator;
pub use constraint::{Bounds, Group, Operator, Pair, VersionRange};
pub use error::ParseError;
pub use semver::Semver;
pub use version::{Identifier, Version};
