//! Query builder utilities
//!
//! This module composes dynamic SELECT statements from caller-supplied
//! criteria: projection, configured child join, wildcard-aware predicates,
//! and a hard row limit.

pub mod builder;
pub mod criteria;
pub mod join;

#[cfg(test)]
mod tests;

pub use builder::{BuiltQuery, SelectQuery};
pub use criteria::{Comparison, Criteria};
pub use join::JoinKind;
