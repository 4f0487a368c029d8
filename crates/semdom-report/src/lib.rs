//! Rendering of pipeline results: the coverage CSV, the unmatched-code
//! listing, and the generated lexicon mapping CSV.

pub mod coverage_csv;
pub mod mapping_csv;
pub mod unmatched;

pub use coverage_csv::{COVERAGE_HEADER, render_coverage_csv, write_coverage_csv};
pub use mapping_csv::{render_mapping_csv, write_mapping_csv};
pub use unmatched::{render_unmatched, write_unmatched};
