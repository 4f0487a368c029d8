//! Unmatched-code listing.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use semdom_model::CoverageOutcome;

const BANNER: &str = "======================================================================";

/// Render the unmatched-code listing: every corpus code with no mapping
/// entry, paired with the canonical form that failed to match.
pub fn render_unmatched(outcome: &CoverageOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "UNMATCHED LN CODES");
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out);
    for unmatched in &outcome.unmatched {
        let _ = writeln!(out, "{} -> {}", unmatched.raw, unmatched.canonical);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Total unmatched codes: {}", outcome.unmatched_count());
    out
}

/// Write the unmatched-code listing to `path`.
pub fn write_unmatched(path: &Path, outcome: &CoverageOutcome) -> Result<()> {
    std::fs::write(path, render_unmatched(outcome))
        .with_context(|| format!("write unmatched listing: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::render_unmatched;
    use semdom_model::{CanonicalCode, CoverageOutcome, UnmatchedCode};

    #[test]
    fn lists_raw_and_canonical_forms() {
        let mut outcome = CoverageOutcome::default();
        outcome.unmatched.insert(UnmatchedCode {
            raw: "999".to_string(),
            canonical: CanonicalCode::new("999"),
        });
        let rendered = render_unmatched(&outcome);
        assert!(rendered.contains("999 -> 999"));
        assert!(rendered.contains("Total unmatched codes: 1"));
    }
}
