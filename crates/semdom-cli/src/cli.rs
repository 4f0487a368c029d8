//! CLI argument definitions for the coverage tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "semdom-coverage",
    version,
    about = "Louw-Nida semantic-domain coverage analysis",
    long_about = "Reconcile a lexicon's Louw-Nida semantic-domain codes against an \
                  annotated corpus.\n\n\
                  Reports which semantic domains are attested, which words and \
                  references evidence each domain, and which corpus codes have no \
                  lexicon entry."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run coverage analysis of a corpus against a lexicon mapping.
    Coverage(CoverageArgs),

    /// Generate the Louw-Nida mapping CSV from a FLEx semantic-domain XML export.
    MapLexicon(MapLexiconArgs),

    /// Analyze a mapping CSV: missing domain numbers and subdomain counts.
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
pub struct CoverageArgs {
    /// Path to the lexicon mapping CSV (LouwNida_Code, SemDom, SemDom_Name).
    #[arg(value_name = "MAPPING_CSV")]
    pub mapping_csv: PathBuf,

    /// Path to the annotated corpus XML.
    #[arg(value_name = "CORPUS_XML")]
    pub corpus_xml: PathBuf,

    /// Directory for the coverage report and unmatched-code listing
    /// (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct MapLexiconArgs {
    /// Path to the FLEx semantic-domain XML export.
    #[arg(value_name = "LEXICON_XML")]
    pub lexicon_xml: PathBuf,

    /// Path of the mapping CSV to write.
    #[arg(value_name = "OUTPUT_CSV")]
    pub output_csv: PathBuf,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the lexicon mapping CSV to analyze.
    #[arg(value_name = "MAPPING_CSV")]
    pub mapping_csv: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
