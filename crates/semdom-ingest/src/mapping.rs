//! Lexicon mapping loader.
//!
//! Reads the `LouwNida_Code` / `SemDom` / `SemDom_Name` table exported
//! from the lexicon and builds the canonical-code join index used by
//! the aggregator.

use std::path::Path;

use tracing::{debug, warn};

use semdom_core::normalize;
use semdom_model::{CanonicalCode, DomainEntry, LnMapping, SemDomCode};

use crate::error::IngestError;

pub const COLUMN_CODE: &str = "LouwNida_Code";
pub const COLUMN_SEMDOM: &str = "SemDom";
pub const COLUMN_SEMDOM_NAME: &str = "SemDom_Name";

/// Load the lexicon mapping from a CSV file.
///
/// The code field may carry trailing annotation text (`"14A Weather"`);
/// only the token before the first space is the base code, which is
/// normalized before insertion. `SemDom` and `SemDom_Name` are
/// `;`-separated lists paired positionally; a length mismatch is
/// tolerated by truncating to the shorter list and logged as a
/// warning. A base code appearing on two rows keeps the last row only,
/// also logged.
///
/// A lettered base such as `14A` additionally answers for its bare
/// number `14`, because corpus decimal forms (`14.2`) normalize to the
/// number alone. Explicit bare-number rows always take precedence over
/// these derived keys.
pub fn load_mapping(path: &Path) -> Result<LnMapping, IngestError> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::io(path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());
    let headers = reader
        .headers()
        .map_err(|e| IngestError::csv(path, &e))?
        .clone();

    let idx_code = find_column(&headers, COLUMN_CODE, path)?;
    let idx_semdom = find_column(&headers, COLUMN_SEMDOM, path)?;
    let idx_name = find_column(&headers, COLUMN_SEMDOM_NAME, path)?;

    let mut mapping = LnMapping::new();
    let mut derived = LnMapping::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::csv(path, &e))?;

        let full_code = record
            .get(idx_code)
            .unwrap_or("")
            .trim()
            .trim_matches('"');
        if full_code.is_empty() {
            continue;
        }
        // The base token is everything before the first space; fields
        // without a space are the base token themselves.
        let base = full_code.split(' ').next().unwrap_or(full_code);
        let canonical = normalize(base);

        let semdoms: Vec<&str> = split_multi(record.get(idx_semdom).unwrap_or(""));
        let names: Vec<&str> = split_multi(record.get(idx_name).unwrap_or(""));
        if semdoms.len() != names.len() {
            warn!(
                code = %canonical,
                semdoms = semdoms.len(),
                names = names.len(),
                "SemDom and SemDom_Name lists differ in length; truncating to the shorter"
            );
        }

        let mut entries = Vec::new();
        for (semdom, name) in semdoms.iter().zip(names.iter()) {
            match SemDomCode::new(*semdom) {
                Ok(code) => entries.push(DomainEntry {
                    code,
                    name: (*name).to_string(),
                }),
                Err(_) => warn!(code = %canonical, "skipping empty SemDom value"),
            }
        }
        if entries.is_empty() {
            debug!(code = %canonical, "row has no usable semantic domains; skipped");
            continue;
        }

        if let Some(number) = bare_number_of(canonical.as_str()) {
            derived.insert(CanonicalCode::new(number), entries.clone());
        }
        if mapping.insert(canonical.clone(), entries).is_some() {
            warn!(code = %canonical, "duplicate base code in mapping; last row wins");
        }
    }

    // Derived bare-number keys only fill gaps; an explicit row for the
    // bare number keeps its own entries.
    for (key, entries) in derived {
        mapping.entry(key).or_insert(entries);
    }

    debug!(entries = mapping.len(), path = %path.display(), "loaded lexicon mapping");
    Ok(mapping)
}

/// For a lettered base code (`14A`), the bare number (`14`); `None`
/// for codes that are already bare or carry no digits.
fn bare_number_of(code: &str) -> Option<&str> {
    let digits_end = code.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }
    Some(&code[..digits_end])
}

fn split_multi(field: &str) -> Vec<&str> {
    field.split(';').map(str::trim).collect()
}

fn find_column(
    headers: &csv::StringRecord,
    name: &str,
    path: &Path,
) -> Result<usize, IngestError> {
    headers
        .iter()
        .position(|h| h.trim_matches('\u{feff}') == name)
        .ok_or_else(|| IngestError::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })
}
