//! Louw-Nida semantic-domain coverage CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use semdom_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use semdom_cli::commands::{run_analyze, run_coverage, run_map_lexicon};
use semdom_cli::logging::{LogConfig, LogFormat, init_logging};
use semdom_cli::summary::{print_analysis, print_coverage_summary, print_map_lexicon_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Coverage(args) => match run_coverage(&args) {
            Ok(result) => {
                print_coverage_summary(&result);
                0
            }
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
        Command::MapLexicon(args) => match run_map_lexicon(&args) {
            Ok(result) => {
                print_map_lexicon_summary(&result);
                0
            }
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
        Command::Analyze(args) => match run_analyze(&args) {
            Ok(analysis) => {
                print_analysis(&analysis);
                0
            }
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
