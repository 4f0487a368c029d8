#![deny(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};

use crate::ids::{CanonicalCode, SemDomCode};

/// One semantic domain a canonical Louw-Nida code belongs to.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DomainEntry {
    pub code: SemDomCode,
    pub name: String,
}

/// Lexicon mapping from canonical Louw-Nida codes to their semantic
/// domains. One code may list several domains; one domain is usually
/// reached from several codes.
pub type LnMapping = BTreeMap<CanonicalCode, Vec<DomainEntry>>;

/// Corpus evidence accumulated for a single semantic domain.
///
/// Created lazily by the aggregator on the first contributing
/// annotation and only ever grown afterwards. All members are
/// BTree-backed so iteration order is stable for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct DomainAggregate {
    /// Domain names seen for this code; normally collapses to one.
    pub names: BTreeSet<String>,
    /// Raw corpus codes (original spelling) that landed in this domain.
    pub raw_codes: BTreeSet<String>,
    /// Concordance: each attested word with the references it occurs in.
    pub word_refs: BTreeMap<String, BTreeSet<String>>,
    /// All references attesting this domain, independent of word.
    pub references: BTreeSet<String>,
}

impl DomainAggregate {
    /// First domain name in sorted order, used as the display name.
    pub fn display_name(&self) -> &str {
        self.names.iter().next().map_or("", String::as_str)
    }

    pub fn unique_words(&self) -> usize {
        self.word_refs.len()
    }

    pub fn unique_references(&self) -> usize {
        self.references.len()
    }
}

/// A corpus code that matched nothing in the lexicon mapping, kept
/// together with the canonical form that failed to match.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct UnmatchedCode {
    pub raw: String,
    pub canonical: CanonicalCode,
}

/// Result of one aggregation pass: per-domain evidence plus the codes
/// that found no mapping entry.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct CoverageOutcome {
    pub domains: BTreeMap<SemDomCode, DomainAggregate>,
    pub unmatched: BTreeSet<UnmatchedCode>,
}

impl CoverageOutcome {
    pub fn attested_domains(&self) -> usize {
        self.domains.len()
    }

    pub fn unmatched_count(&self) -> usize {
        self.unmatched.len()
    }
}
