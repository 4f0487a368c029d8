pub mod annotation;
pub mod coverage;
pub mod error;
pub mod ids;

pub use annotation::Annotation;
pub use coverage::{CoverageOutcome, DomainAggregate, DomainEntry, LnMapping, UnmatchedCode};
pub use error::{ModelError, Result};
pub use ids::{CanonicalCode, SemDomCode};
