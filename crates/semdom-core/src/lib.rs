//! Core pipeline logic: code canonicalization, coverage aggregation,
//! and mapping-inventory analysis.

pub mod aggregate;
pub mod analysis;
pub mod normalize;

pub use aggregate::{AggregateStore, aggregate};
pub use analysis::{DOMAIN_NUMBER_RANGE, MappingAnalysis, analyze_mapping};
pub use normalize::normalize;
