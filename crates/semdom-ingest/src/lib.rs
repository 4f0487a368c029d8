//! Input adapters for the coverage pipeline: the lexicon mapping CSV,
//! the annotated corpus XML, and the FLEx semantic-domain XML export.

pub mod corpus;
pub mod error;
pub mod lexicon;
pub mod mapping;

pub use corpus::extract_annotations;
pub use error::IngestError;
pub use lexicon::{CodeIndexEntry, SemanticDomain, collect_code_index, load_semantic_domains};
pub use mapping::load_mapping;
