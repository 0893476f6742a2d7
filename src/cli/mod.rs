//! Command-line parsing for the metric analyser.
//!
//! The command takes no positional arguments; every option has a default and
//! can also come from the environment (or a `.env` file).

use std::path::PathBuf;

use clap::Parser;

use crate::domain::AnalyserConfig;

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "metric-analyser",
    version,
    about = "Analyse download performance and find the under-performing periods"
)]
pub struct Cli {
    /// Directory holding the measurement JSON files.
    #[arg(long, env = "METRIC_ANALYSER_INPUT_DIR", default_value = "./input")]
    pub input_dir: PathBuf,

    /// Directory receiving one `<name>.output` report per input file.
    #[arg(long, env = "METRIC_ANALYSER_OUTPUT_DIR", default_value = "./output")]
    pub output_dir: PathBuf,

    /// Worker threads used to analyse datasets (defaults to one per CPU).
    #[arg(long, env = "METRIC_ANALYSER_THREADS")]
    pub threads: Option<usize>,

    /// Print reports to stdout instead of writing them to the output directory.
    #[arg(long)]
    pub print: bool,

    /// Enable debug logging.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors (overrides RUST_LOG).
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn config(&self) -> AnalyserConfig {
        AnalyserConfig {
            input_dir: self.input_dir.clone(),
            output_dir: self.output_dir.clone(),
            threads: self.threads,
            print: self.print,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags_reach_config() {
        let cli = Cli::try_parse_from([
            "metric-analyser",
            "--input-dir",
            "data/in",
            "--output-dir",
            "data/out",
            "--threads",
            "3",
            "--print",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.input_dir, PathBuf::from("data/in"));
        assert_eq!(config.output_dir, PathBuf::from("data/out"));
        assert_eq!(config.threads, Some(3));
        assert!(config.print);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["metric-analyser", "-v", "-q"]).is_err());
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["metric-analyser", "input"]).is_err());
    }
}
