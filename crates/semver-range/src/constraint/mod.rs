//! Requirement types for version matching

mod bound;
mod operator;
mod range;

pub use bound::Bounds;
pub use operator::Operator;
pub use range::{Group, Pair, VersionRange};
