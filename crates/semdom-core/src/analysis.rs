//! Structural analysis of a loaded lexicon mapping: which Louw-Nida
//! domain numbers are represented, and how many lettered subdomains
//! each number carries.

use std::collections::{BTreeMap, BTreeSet};

use semdom_model::LnMapping;

/// The Louw-Nida taxonomy numbers its top-level domains 1 through 93.
pub const DOMAIN_NUMBER_RANGE: std::ops::RangeInclusive<u32> = 1..=93;

/// Summary of the mapping's code inventory.
#[derive(Debug, Clone, Default)]
pub struct MappingAnalysis {
    /// Canonical subdomain codes grouped by their leading number.
    pub by_number: BTreeMap<u32, BTreeSet<String>>,
    /// Numbers in 1..=93 with no code in the mapping.
    pub missing_numbers: Vec<u32>,
    /// Total canonical codes analyzed (codes without a leading number
    /// are skipped and not counted).
    pub total_codes: usize,
}

impl MappingAnalysis {
    pub fn numbers_found(&self) -> usize {
        self.by_number.len()
    }

    pub fn average_subdomains(&self) -> f64 {
        if self.by_number.is_empty() {
            return 0.0;
        }
        self.total_codes as f64 / self.by_number.len() as f64
    }

    /// Number with the most subdomains, with its count.
    pub fn max_subdomains(&self) -> Option<(u32, usize)> {
        self.by_number
            .iter()
            .max_by_key(|(_, codes)| codes.len())
            .map(|(number, codes)| (*number, codes.len()))
    }
}

/// Group the mapping's canonical codes by leading domain number and
/// report the numbers of 1..=93 that are not represented at all.
pub fn analyze_mapping(mapping: &LnMapping) -> MappingAnalysis {
    let mut by_number: BTreeMap<u32, BTreeSet<String>> = BTreeMap::new();
    let mut total_codes = 0usize;

    for code in mapping.keys() {
        let Some(number) = leading_number(code.as_str()) else {
            continue;
        };
        by_number
            .entry(number)
            .or_default()
            .insert(code.as_str().to_string());
        total_codes += 1;
    }

    let missing_numbers = DOMAIN_NUMBER_RANGE
        .filter(|n| !by_number.contains_key(n))
        .collect();

    MappingAnalysis {
        by_number,
        missing_numbers,
        total_codes,
    }
}

fn leading_number(code: &str) -> Option<u32> {
    let digits: String = code.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}
