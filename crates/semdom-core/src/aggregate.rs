//! Coverage aggregation: join corpus annotations against the lexicon
//! mapping and accumulate per-domain evidence.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use semdom_model::{
    Annotation, CoverageOutcome, DomainAggregate, LnMapping, SemDomCode, UnmatchedCode,
};

use crate::normalize::normalize;

/// Mutable per-domain aggregate store with creation-on-first-write
/// semantics: a domain's bucket exists once the first annotation lands
/// in it and is never removed during a run.
#[derive(Debug, Default)]
pub struct AggregateStore {
    domains: BTreeMap<SemDomCode, DomainAggregate>,
}

impl AggregateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bucket for `code`, created empty on first access.
    pub fn bucket(&mut self, code: &SemDomCode) -> &mut DomainAggregate {
        self.domains.entry(code.clone()).or_default()
    }

    pub fn into_domains(self) -> BTreeMap<SemDomCode, DomainAggregate> {
        self.domains
    }
}

/// Aggregate extracted annotations against the lexicon mapping.
///
/// Each annotation is normalized and looked up once. A match feeds
/// every domain the canonical code maps to: the buckets record the
/// domain name, the *original* raw code spelling, the word with its
/// reference, and the reference on its own. A miss records the
/// `(raw, canonical)` pair in the unmatched set instead; an annotation
/// never contributes to both sides.
pub fn aggregate(mapping: &LnMapping, annotations: &[Annotation]) -> CoverageOutcome {
    let mut store = AggregateStore::new();
    let mut unmatched = BTreeSet::new();

    for annotation in annotations {
        let canonical = normalize(&annotation.raw_code);
        match mapping.get(&canonical) {
            Some(entries) => {
                for entry in entries {
                    let bucket = store.bucket(&entry.code);
                    bucket.names.insert(entry.name.clone());
                    bucket.raw_codes.insert(annotation.raw_code.clone());
                    bucket
                        .word_refs
                        .entry(annotation.word.clone())
                        .or_default()
                        .insert(annotation.reference.clone());
                    bucket.references.insert(annotation.reference.clone());
                }
            }
            None => {
                debug!(
                    raw = %annotation.raw_code,
                    canonical = %canonical,
                    "no mapping entry for corpus code"
                );
                unmatched.insert(UnmatchedCode {
                    raw: annotation.raw_code.clone(),
                    canonical,
                });
            }
        }
    }

    CoverageOutcome {
        domains: store.into_domains(),
        unmatched,
    }
}
