#![warn(missing_docs)]
//! Bootdiff CLI Library
//!
//! Command-line infrastructure for the resampling statistics engine:
//! argument parsing, `bootdiff.toml` configuration discovery, sample-group
//! loading, and report rendering. The computation itself lives in
//! `bootdiff-stats`.

mod config;
mod input;
mod report;

pub use config::{BootdiffConfig, OutputConfig, ResamplingConfig};
pub use input::{InputError, SampleGroup, load_groups, parse_groups};
pub use report::{
    IntervalReport, OutputFormat, PermutationReport, format_interval_human,
    format_permutation_human,
};

use bootdiff_stats::{CiConfig, compute_diff_ci, compute_permutation};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Which resampling procedure to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Procedure {
    /// Bias-corrected bootstrap confidence interval for the difference
    /// of two means.
    Interval,
    /// Shuffle-based permutation significance test.
    Permutation,
}

impl std::fmt::Display for Procedure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Procedure::Interval => write!(f, "interval"),
            Procedure::Permutation => write!(f, "permutation"),
        }
    }
}

/// Bootdiff CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "bootdiff")]
#[command(
    author,
    version,
    about = "Bootdiff - resampling statistics for the difference of two means"
)]
pub struct Cli {
    /// Input file with FASTA-style sample groups
    pub input: PathBuf,

    /// Resampling procedure to run
    #[arg(long, value_enum, default_value_t = Procedure::Interval)]
    pub procedure: Procedure,

    /// Number of resampling iterations
    #[arg(long)]
    pub resamples: Option<usize>,

    /// Confidence level (0.0 to 1.0)
    #[arg(long)]
    pub confidence: Option<f64>,

    /// Random seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format: human, json
    #[arg(long)]
    pub format: Option<String>,

    /// Config file path (defaults to discovering bootdiff.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the bootdiff CLI with arguments from the environment.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the bootdiff CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("bootdiff=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("bootdiff=info")
            .init();
    }

    // Discover bootdiff.toml configuration (CLI flags override)
    let config = match &cli.config {
        Some(path) => BootdiffConfig::load(path)?,
        None => BootdiffConfig::discover().unwrap_or_default(),
    };

    let num_resamples = cli.resamples.unwrap_or(config.resampling.num_resamples);
    let confidence_level = cli.confidence.unwrap_or(config.resampling.confidence_level);
    let seed = cli.seed.or(config.resampling.seed);
    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse()
        .map_err(|message: String| anyhow::anyhow!(message))?;

    let groups = load_groups(&cli.input)?;
    if groups.len() > 2 {
        tracing::warn!(
            "input has {} groups; only the first two are used",
            groups.len()
        );
    }
    let a = &groups[0];
    let b = &groups[1];
    tracing::debug!(
        group_a = %a.name,
        len_a = a.values.len(),
        group_b = %b.name,
        len_b = b.values.len(),
        "loaded sample groups"
    );

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let rendered = match cli.procedure {
        Procedure::Interval => {
            let ci_config = CiConfig {
                num_resamples,
                confidence_level,
            };
            let result = compute_diff_ci(&a.values, &b.values, &ci_config, &mut rng)?;
            if let Some(warning) = &result.warning {
                tracing::warn!("{warning}");
            }
            let report = IntervalReport::new(a, b, &ci_config, &result);
            match format {
                OutputFormat::Human => format_interval_human(&report),
                OutputFormat::Json => serde_json::to_string_pretty(&report)?,
            }
        }
        Procedure::Permutation => {
            let result = compute_permutation(&a.values, &b.values, num_resamples, &mut rng)?;
            let report = PermutationReport::new(a, b, &result);
            match format {
                OutputFormat::Human => format_permutation_human(&report),
                OutputFormat::Json => serde_json::to_string_pretty(&report)?,
            }
        }
    };

    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["bootdiff", "input.vals"]);
        assert_eq!(cli.procedure, Procedure::Interval);
        assert_eq!(cli.resamples, None);
        assert_eq!(cli.seed, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "bootdiff",
            "input.vals",
            "--procedure",
            "permutation",
            "--resamples",
            "500",
            "--confidence",
            "0.95",
            "--seed",
            "7",
            "--format",
            "json",
        ]);
        assert_eq!(cli.procedure, Procedure::Permutation);
        assert_eq!(cli.resamples, Some(500));
        assert_eq!(cli.confidence, Some(0.95));
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.format.as_deref(), Some("json"));
    }
}
