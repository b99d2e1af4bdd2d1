// crates/mcda_cli/src/args.rs
//
// CLI argument surface. Selectors are parsed by clap (unknown → usage error);
// weight and impact lists stay strings here so the engine's validator reports
// them with its own error taxonomy.

use clap::Parser;
use std::path::{Path, PathBuf};

use mcda_core::{RankingMethod, VikorParams, WeightingStrategy};

/// Parsed CLI arguments.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "mcda",
    version,
    disable_help_subcommand = true,
    about = "Rank alternatives with TOPSIS or VIKOR from a JSON decision problem"
)]
pub struct Args {
    /// Decision problem JSON: {columns, rows, impacts?, weights?, pairwise?}.
    #[arg(long)]
    pub input: PathBuf,

    /// Weighting strategy when no explicit weights are given.
    #[arg(long, default_value = "equal", value_parser = parse_weighting)]
    pub weighting: WeightingStrategy,

    /// Ranking method.
    #[arg(long, default_value = "topsis", value_parser = parse_method)]
    pub method: RankingMethod,

    /// Comma-separated weights, e.g. "0.25,0.25,0.5" (overrides the file).
    #[arg(long)]
    pub weights: Option<String>,

    /// Comma-separated impacts, e.g. "+,-,+" (overrides the file).
    #[arg(long)]
    pub impacts: Option<String>,

    /// VIKOR strategy weight in [0, 1].
    #[arg(long, value_parser = parse_v)]
    pub v: Option<f64>,

    /// Run TOPSIS and VIKOR and report rank differences.
    #[arg(long)]
    pub compare: bool,

    /// Write the JSON result here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Debug-level diagnostics on stderr.
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Warnings and errors only on stderr.
    #[arg(long)]
    pub quiet: bool,
}

impl Args {
    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    pub fn out_path(&self) -> Option<&Path> {
        self.out.as_deref()
    }
}

fn parse_weighting(s: &str) -> Result<WeightingStrategy, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn parse_method(s: &str) -> Result<RankingMethod, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn parse_v(s: &str) -> Result<f64, String> {
    let v: f64 = s.trim().parse().map_err(|_| format!("not a number: {s:?}"))?;
    VikorParams::new(v).map(VikorParams::v).map_err(|e| format!("{e}"))
}

/// Split a comma-separated flag value. Blank items are kept so the validator
/// reports them; an all-blank value is an empty list.
pub fn split_list(s: &str) -> Vec<String> {
    if s.trim().is_empty() {
        return Vec::new();
    }
    s.split(',').map(|p| p.trim().to_string()).collect()
}
