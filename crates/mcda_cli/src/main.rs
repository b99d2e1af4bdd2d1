// crates/mcda_cli/src/main.rs
//
// Thin glue: parse flags → load problem JSON → run pipeline → write pretty JSON.
// Diagnostics go to stderr through tracing; stdout carries only the result.

#![forbid(unsafe_code)]

mod args;
mod input;

mod exitcodes {
    /// Stable exit codes for scripts.
    pub const OK: i32 = 0;
    pub const VALIDATION: i32 = 2;
    pub const IO: i32 = 4;
    pub const USAGE: i32 = 64;
}

use std::fs;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use args::Args;
use input::{LoadError, Problem};
use mcda_core::McdaError;
use mcda_pipeline::DecisionPipeline;

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// Problem file shape or engine validation failure.
    Validation(String),
    /// Read/write failures.
    Io(String),
}

impl From<McdaError> for MainError {
    fn from(e: McdaError) -> Self {
        MainError::Validation(format!("{}: {e}", e.code()))
    }
}

impl From<LoadError> for MainError {
    fn from(e: LoadError) -> Self {
        match e {
            LoadError::Read(_) => MainError::Io(e.to_string()),
            LoadError::Json(_) => MainError::Validation(e.to_string()),
        }
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(a) => a,
        Err(e) => {
            // --help / --version land here too and go to stdout.
            let _ = e.print();
            let rc = if e.use_stderr() { exitcodes::USAGE } else { exitcodes::OK };
            return ExitCode::from(rc as u8);
        }
    };

    init_tracing(&args);

    let rc = match run_once(&args) {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            let rc = map_error(&e);
            match e {
                MainError::Validation(m) | MainError::Io(m) => error!(target: "mcda::cli", "{m}"),
            }
            rc
        }
    };
    ExitCode::from(rc as u8)
}

/// stderr subscriber; `RUST_LOG` wins over the flag-derived level.
fn init_tracing(args: &Args) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

fn map_error(e: &MainError) -> i32 {
    use exitcodes::*;
    match e {
        MainError::Validation(_) => VALIDATION,
        MainError::Io(_) => IO,
    }
}

fn run_once(args: &Args) -> Result<(), MainError> {
    // 1) Load + overrides
    let problem = Problem::load(&args.input)?;
    let resolved = problem.resolve(args)?;
    info!(
        target: "mcda::cli",
        input = %args.input.display(),
        alternatives = resolved.table.n_alternatives(),
        criteria = resolved.table.n_criteria(),
        "problem loaded"
    );

    // 2) Pipeline
    let pipeline = DecisionPipeline::new(args.weighting, args.method).with_verbose(args.verbose);
    let json = if args.compare {
        let cmp = pipeline.compare_methods(&resolved.table, &resolved.impacts, &resolved.options)?;
        info!(
            target: "mcda::cli",
            mean_rank_difference = cmp.mean_rank_difference(),
            full_agreement = cmp.full_agreement(),
            "comparison done"
        );
        to_pretty(&cmp)?
    } else {
        let result = pipeline.run(&resolved.table, &resolved.impacts, &resolved.options)?;
        let best: Vec<&str> = result.best().into_iter().map(|i| result.label(i)).collect();
        info!(target: "mcda::cli", method = %args.method, ?best, "ranking done");
        if let Some(status) = result.vikor_status() {
            info!(target: "mcda::cli", "{}", status.narrative);
        }
        if let Some(report) = result.consistency.as_ref().filter(|r| !r.acceptable) {
            warn!(target: "mcda::cli", cr = ?report.consistency_ratio, "AHP judgments are inconsistent");
        }
        to_pretty(&result)?
    };

    // 3) Emit
    write_output(args, &json)
}

fn to_pretty<T: serde::Serialize>(value: &T) -> Result<String, MainError> {
    serde_json::to_string_pretty(value).map_err(|e| MainError::Io(format!("serialize: {e}")))
}

fn write_output(args: &Args, json: &str) -> Result<(), MainError> {
    match args.out_path() {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .map_err(|e| MainError::Io(format!("write {}: {e}", path.display())))?;
            info!(target: "mcda::cli", out = %path.display(), "result written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").map_err(|e| MainError::Io(format!("stdout: {e}")))?;
        }
    }
    Ok(())
}
