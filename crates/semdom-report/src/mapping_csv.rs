//! Generated-mapping CSV writer for the lexicon export path.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use semdom_ingest::CodeIndexEntry;

/// Render the Louw-Nida mapping CSV from the flattened code index.
///
/// Codes come out sorted (BTreeMap order); multi-valued SemDom and
/// SemDom_Name cells are `;`-joined in sorted order. Every field is
/// quoted, matching the format the coverage loader consumes.
pub fn render_mapping_csv(index: &BTreeMap<String, CodeIndexEntry>) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());
    writer
        .write_record(["LouwNida_Code", "SemDom", "SemDom_Name"])
        .context("write mapping header")?;

    for (code, entry) in index {
        let semdom = join_sorted(&entry.abbreviations);
        let semdom_name = join_sorted(&entry.names);
        writer
            .write_record([code.as_str(), semdom.as_str(), semdom_name.as_str()])
            .with_context(|| format!("write mapping row for {code}"))?;
    }

    let bytes = writer.into_inner().context("flush mapping csv")?;
    String::from_utf8(bytes).context("mapping csv is not UTF-8")
}

/// Write the generated mapping CSV to `path`.
pub fn write_mapping_csv(path: &Path, index: &BTreeMap<String, CodeIndexEntry>) -> Result<()> {
    let rendered = render_mapping_csv(index)?;
    std::fs::write(path, rendered)
        .with_context(|| format!("write mapping csv: {}", path.display()))
}

fn join_sorted(values: &std::collections::BTreeSet<String>) -> String {
    values
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::render_mapping_csv;
    use semdom_ingest::CodeIndexEntry;

    #[test]
    fn renders_quoted_sorted_rows() {
        let mut index = BTreeMap::new();
        let mut entry = CodeIndexEntry::default();
        entry.abbreviations.insert("3.2".to_string());
        entry.abbreviations.insert("3.1".to_string());
        entry.names.insert("Relations".to_string());
        entry.names.insert("Cause".to_string());
        index.insert("89 Relations".to_string(), entry);

        let rendered = render_mapping_csv(&index).expect("render");
        assert!(rendered.starts_with("\"LouwNida_Code\",\"SemDom\",\"SemDom_Name\"\n"));
        assert!(rendered.contains("\"89 Relations\",\"3.1;3.2\",\"Cause;Relations\""));
    }
}
