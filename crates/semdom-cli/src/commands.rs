//! Subcommand orchestration: wire the loaders, the aggregator, and the
//! report writers together.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use semdom_core::{MappingAnalysis, aggregate, analyze_mapping};
use semdom_ingest::{collect_code_index, extract_annotations, load_mapping, load_semantic_domains};
use semdom_model::CoverageOutcome;
use semdom_report::{write_coverage_csv, write_mapping_csv, write_unmatched};

use crate::cli::{AnalyzeArgs, CoverageArgs, MapLexiconArgs};

/// File name of the coverage report inside the output directory.
pub const COVERAGE_FILE: &str = "semdom_coverage.csv";
/// File name of the unmatched-code listing inside the output directory.
pub const UNMATCHED_FILE: &str = "unmatched_codes.txt";

#[derive(Debug)]
pub struct CoverageResult {
    pub mapping_entries: usize,
    pub annotations: usize,
    pub outcome: CoverageOutcome,
    pub coverage_path: PathBuf,
    pub unmatched_path: PathBuf,
}

pub fn run_coverage(args: &CoverageArgs) -> Result<CoverageResult> {
    let load_span = info_span!("load", mapping = %args.mapping_csv.display());
    let mapping = load_span.in_scope(|| load_mapping(&args.mapping_csv))?;
    info!(entries = mapping.len(), "loaded lexicon mapping");

    let extract_span = info_span!("extract", corpus = %args.corpus_xml.display());
    let annotations = extract_span.in_scope(|| extract_annotations(&args.corpus_xml))?;
    info!(annotations = annotations.len(), "extracted corpus annotations");

    let outcome = info_span!("aggregate").in_scope(|| aggregate(&mapping, &annotations));
    info!(
        domains = outcome.attested_domains(),
        unmatched = outcome.unmatched_count(),
        "aggregated coverage"
    );

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("create output directory: {}", output_dir.display()))?;
    let coverage_path = output_dir.join(COVERAGE_FILE);
    let unmatched_path = output_dir.join(UNMATCHED_FILE);
    write_coverage_csv(&coverage_path, &outcome)?;
    write_unmatched(&unmatched_path, &outcome)?;

    Ok(CoverageResult {
        mapping_entries: mapping.len(),
        annotations: annotations.len(),
        outcome,
        coverage_path,
        unmatched_path,
    })
}

#[derive(Debug)]
pub struct MapLexiconResult {
    pub top_level_domains: usize,
    pub codes: usize,
    pub output_path: PathBuf,
}

pub fn run_map_lexicon(args: &MapLexiconArgs) -> Result<MapLexiconResult> {
    let parse_span = info_span!("parse", lexicon = %args.lexicon_xml.display());
    let domains = parse_span.in_scope(|| load_semantic_domains(&args.lexicon_xml))?;
    let index = collect_code_index(&domains);
    info!(
        top_level = domains.len(),
        codes = index.len(),
        "collected Louw-Nida code index"
    );

    write_mapping_csv(&args.output_csv, &index)?;
    Ok(MapLexiconResult {
        top_level_domains: domains.len(),
        codes: index.len(),
        output_path: args.output_csv.clone(),
    })
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<MappingAnalysis> {
    let mapping = load_mapping(&args.mapping_csv)?;
    Ok(analyze_mapping(&mapping))
}
