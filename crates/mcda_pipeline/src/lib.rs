//! mcda_pipeline: decision pipeline surface (validate → weights → rank, and method comparison).
//! Stays I/O-free: callers hand in an in-memory `CriteriaTable` and get typed results back.
//! Math lives in `mcda_algo`; shapes and selectors live in `mcda_core`.

#![forbid(unsafe_code)]

pub mod compare;

pub use compare::ComparisonResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use mcda_algo::{deriver_for, rank_topsis, rank_vikor, ConsistencyReport, RankingResult};
use mcda_core::{
    validate::{check_dimensions, check_pairwise_size, validate_inputs},
    CriteriaTable, ImpactVector, McdaError, McdaResult, PairwiseMatrix, RankingMethod,
    VikorParams, WeightVector, WeightingStrategy,
};

/// Stage log: `info!` when the pipeline is verbose, `debug!` otherwise.
macro_rules! stage {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            info!(target: "mcda::pipeline", $($arg)+);
        } else {
            debug!(target: "mcda::pipeline", $($arg)+);
        }
    };
}

/// Per-call inputs beyond the table and impacts.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunOptions {
    /// Explicit weights; skips the configured weighting strategy. Normalized to sum 1.
    pub weights: Option<Vec<f64>>,
    /// Pairwise judgments; required when the strategy is AHP.
    pub pairwise: Option<PairwiseMatrix>,
    /// VIKOR strategy weight; `VikorParams::DEFAULT_V` when absent.
    pub v: Option<f64>,
}

impl RunOptions {
    pub fn with_weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn with_pairwise(mut self, pairwise: PairwiseMatrix) -> Self {
        self.pairwise = Some(pairwise);
        self
    }

    pub fn with_v(mut self, v: f64) -> Self {
        self.v = Some(v);
        self
    }
}

/// Weights and impacts resolved once per call, shared by every ranker it runs.
struct Prepared {
    impacts: ImpactVector,
    weights: WeightVector,
    consistency: Option<ConsistencyReport>,
}

/// Configured orchestrator. Configuration is fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecisionPipeline {
    weighting: WeightingStrategy,
    method: RankingMethod,
    verbose: bool,
}

impl DecisionPipeline {
    pub fn new(weighting: WeightingStrategy, method: RankingMethod) -> Self {
        Self { weighting, method, verbose: false }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build from wire identifiers (`"entropy"`, `"vikor"`, ...).
    pub fn from_names(weighting: &str, method: &str, verbose: bool) -> McdaResult<Self> {
        Ok(Self::new(weighting.parse()?, method.parse()?).with_verbose(verbose))
    }

    pub fn weighting(&self) -> WeightingStrategy {
        self.weighting
    }

    pub fn method(&self) -> RankingMethod {
        self.method
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Validate, resolve weights, rank with the configured method.
    pub fn run<S: AsRef<str>>(
        &self,
        table: &CriteriaTable,
        impacts: &[S],
        opts: &RunOptions,
    ) -> McdaResult<RankingResult> {
        let prepared = self.prepare(table, impacts, opts)?;
        let result = self.rank_with(self.method, table, &prepared, opts)?;
        stage!(
            self.verbose,
            method = %self.method,
            best = ?result.best(),
            "ranking complete"
        );
        Ok(result)
    }

    /// Run TOPSIS and VIKOR on the same weights and report per-alternative rank differences.
    pub fn compare_methods<S: AsRef<str>>(
        &self,
        table: &CriteriaTable,
        impacts: &[S],
        opts: &RunOptions,
    ) -> McdaResult<ComparisonResult> {
        let prepared = self.prepare(table, impacts, opts)?;
        let topsis = self.rank_with(RankingMethod::Topsis, table, &prepared, opts)?;
        let vikor = self.rank_with(RankingMethod::Vikor, table, &prepared, opts)?;
        let comparison = ComparisonResult::new(topsis, vikor)?;
        stage!(
            self.verbose,
            mean_rank_difference = comparison.mean_rank_difference(),
            full_agreement = comparison.full_agreement(),
            "methods compared"
        );
        Ok(comparison)
    }

    // ---------------- Stages ---------------------------------------------------------------------

    fn prepare<S: AsRef<str>>(
        &self,
        table: &CriteriaTable,
        impacts: &[S],
        opts: &RunOptions,
    ) -> McdaResult<Prepared> {
        // --- VALIDATE ---
        let impacts = validate_inputs(table, opts.weights.as_deref(), impacts)?;
        if self.weighting == WeightingStrategy::Ahp {
            let pairwise = opts.pairwise.as_ref().ok_or(McdaError::MissingPairwiseMatrix)?;
            check_pairwise_size(table, pairwise)?;
        }
        stage!(
            self.verbose,
            alternatives = table.n_alternatives(),
            criteria = table.n_criteria(),
            impacts = %impacts,
            "inputs validated"
        );

        // --- WEIGHTS ---
        let (weights, consistency) = match &opts.weights {
            Some(explicit) => {
                let weights = WeightVector::from_raw(explicit.clone())?;
                stage!(self.verbose, weights = %weights, "using caller-supplied weights");
                (weights, None)
            }
            None => {
                let derived = deriver_for(self.weighting, self.verbose)
                    .derive(table, opts.pairwise.as_ref())?;
                stage!(
                    self.verbose,
                    strategy = %self.weighting,
                    weights = %derived.weights,
                    "weights derived"
                );
                (derived.weights, derived.consistency)
            }
        };
        check_dimensions(table, &weights, &impacts)?;

        Ok(Prepared { impacts, weights, consistency })
    }

    fn rank_with(
        &self,
        method: RankingMethod,
        table: &CriteriaTable,
        prepared: &Prepared,
        opts: &RunOptions,
    ) -> McdaResult<RankingResult> {
        // --- RANK ---
        let result = match method {
            RankingMethod::Topsis => {
                if opts.v.is_some() {
                    debug!(target: "mcda::pipeline", "v applies to VIKOR only; ignored for TOPSIS");
                }
                rank_topsis(table, &prepared.weights, &prepared.impacts)?
            }
            RankingMethod::Vikor => rank_vikor(
                table,
                &prepared.weights,
                &prepared.impacts,
                opts.v.unwrap_or(VikorParams::DEFAULT_V),
                self.verbose,
            )?,
        };
        Ok(result.with_consistency(prepared.consistency.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CriteriaTable {
        CriteriaTable::from_columns(vec![
            ("Price", vec![250.0, 200.0, 300.0]),
            ("Storage", vec![16.0, 20.0, 12.0]),
            ("Weight", vec![12.0, 8.0, 10.0]),
        ])
        .unwrap()
    }

    #[test]
    fn from_names_parses_selectors() {
        let p = DecisionPipeline::from_names("Entropy", "vikor", true).unwrap();
        assert_eq!(p.weighting(), WeightingStrategy::Entropy);
        assert_eq!(p.method(), RankingMethod::Vikor);
        assert!(p.verbose());
        assert!(matches!(
            DecisionPipeline::from_names("equal", "electre", false),
            Err(McdaError::UnsupportedMethod(_))
        ));
    }

    #[test]
    fn explicit_weights_are_normalized_and_used() {
        let p = DecisionPipeline::new(WeightingStrategy::Entropy, RankingMethod::Topsis);
        let opts = RunOptions::default().with_weights(vec![2.0, 1.0, 1.0]);
        let r = p.run(&table(), &["-", "+", "-"], &opts).unwrap();
        assert_eq!(r.weights.as_slice(), &[0.5, 0.25, 0.25]);
        assert!(r.consistency.is_none());
    }

    #[test]
    fn ahp_report_travels_with_the_result() {
        let pw = PairwiseMatrix::parse(&[["1", "2", "4"], ["1/2", "1", "2"], ["1/4", "1/2", "1"]]).unwrap();
        let p = DecisionPipeline::new(WeightingStrategy::Ahp, RankingMethod::Vikor);
        let r = p.run(&table(), &["-", "+", "-"], &RunOptions::default().with_pairwise(pw)).unwrap();
        let report = r.consistency.as_ref().unwrap();
        assert!(report.acceptable);
        assert!((r.weights.as_slice()[0] - 4.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn v_is_forwarded_to_vikor() {
        let p = DecisionPipeline::new(WeightingStrategy::Equal, RankingMethod::Vikor);
        let t = table();
        let imp = ["-", "+", "-"];
        let r0 = p.run(&t, &imp, &RunOptions::default().with_v(0.0)).unwrap();
        let vk = r0.vikor().unwrap();
        assert_eq!(vk.q_rank, vk.r_rank);
        assert!(p.run(&t, &imp, &RunOptions::default().with_v(-0.1)).is_err());
    }
}
