//! Coverage report rendering.

use std::path::Path;

use anyhow::{Context, Result};

use semdom_model::{CoverageOutcome, DomainAggregate};

/// Header of the coverage CSV.
pub const COVERAGE_HEADER: [&str; 7] = [
    "SemDom",
    "SemDom_Name",
    "Total_Raw_Codes",
    "Total_Unique_Words",
    "Total_Unique_References",
    "Raw_Codes",
    "Concordance",
];

/// Render the coverage report as CSV, one row per attested domain.
///
/// Rows are sorted by SemDom code and all collection-valued columns are
/// rendered in sorted order, so identical inputs produce byte-identical
/// output.
pub fn render_coverage_csv(outcome: &CoverageOutcome) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(COVERAGE_HEADER)
        .context("write coverage header")?;

    for (code, aggregate) in &outcome.domains {
        let total_codes = aggregate.raw_codes.len().to_string();
        let total_words = aggregate.unique_words().to_string();
        let total_refs = aggregate.unique_references().to_string();
        let raw_codes = raw_code_list(aggregate);
        let concordance = concordance(aggregate);
        writer
            .write_record([
                code.as_str(),
                aggregate.display_name(),
                total_codes.as_str(),
                total_words.as_str(),
                total_refs.as_str(),
                raw_codes.as_str(),
                concordance.as_str(),
            ])
            .with_context(|| format!("write coverage row for {code}"))?;
    }

    let bytes = writer.into_inner().context("flush coverage csv")?;
    String::from_utf8(bytes).context("coverage csv is not UTF-8")
}

/// Write the coverage report to `path`.
pub fn write_coverage_csv(path: &Path, outcome: &CoverageOutcome) -> Result<()> {
    let rendered = render_coverage_csv(outcome)?;
    std::fs::write(path, rendered)
        .with_context(|| format!("write coverage report: {}", path.display()))
}

fn raw_code_list(aggregate: &DomainAggregate) -> String {
    aggregate
        .raw_codes
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// Format the word → references concordance. References within one
/// word's entry are `; `-joined; entries are `, `-joined so the two
/// levels stay distinguishable.
fn concordance(aggregate: &DomainAggregate) -> String {
    aggregate
        .word_refs
        .iter()
        .map(|(word, references)| {
            let refs = references
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join("; ");
            format!("{word} ({refs})")
        })
        .collect::<Vec<_>>()
        .join(", ")
}
