//! crates/mcda_algo/src/weighting/ahp.rs
//! Pairwise-comparison (AHP) weights: column-sum normalization, row means as the
//! principal-eigenvector estimate, and Saaty's consistency ratio.
//!
//! Judgments are never rejected for inconsistency or broken reciprocity; both are
//! reported (and logged) so the caller can decide.

#[cfg(feature = "serde")]
use serde::Serialize;

use mcda_core::{
    validate::check_pairwise_size, CriteriaTable, McdaError, McdaResult, PairwiseMatrix,
    WeightVector, WeightingStrategy,
};
use tracing::{debug, info, warn};

use super::{DerivedWeights, WeightDeriver};

/// Consistency ratios at or above this flag the judgments as unreliable.
pub const CR_THRESHOLD: f64 = 0.10;

/// |a_jk · a_kj − 1| above this is reported as a reciprocity violation.
const RECIPROCITY_TOLERANCE: f64 = 1e-6;

/// Saaty random index for n = 1..=15.
const RANDOM_INDEX: [f64; 15] = [
    0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.48, 1.56, 1.57, 1.59,
];

// ---------------- Types -------------------------------------------------------------------------

/// How far the judgments are from a perfectly consistent matrix.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ConsistencyReport {
    pub n: usize,
    pub lambda_max: f64,
    pub consistency_index: f64,
    /// `None` when n is past the end of the random-index table.
    pub random_index: Option<f64>,
    pub consistency_ratio: Option<f64>,
    pub acceptable: bool,
}

/// Random index for an `n × n` matrix, if tabulated.
pub fn random_index(n: usize) -> Option<f64> {
    n.checked_sub(1).and_then(|i| RANDOM_INDEX.get(i)).copied()
}

// ---------------- Derivation --------------------------------------------------------------------

pub fn derive_weights_ahp(
    pairwise: &PairwiseMatrix,
    verbose: bool,
) -> McdaResult<(WeightVector, ConsistencyReport)> {
    let n = pairwise.size();

    let deviation = pairwise.reciprocity_deviation();
    if deviation > RECIPROCITY_TOLERANCE {
        warn!(
            target: "mcda::weights",
            deviation,
            "pairwise matrix is not reciprocal; using judgments as given"
        );
    }

    let col_sums: Vec<f64> = (0..n).map(|k| (0..n).map(|j| pairwise.get(j, k)).sum()).collect();
    let raw: Vec<f64> = (0..n)
        .map(|j| (0..n).map(|k| pairwise.get(j, k) / col_sums[k]).sum::<f64>() / n as f64)
        .collect();
    let weights = WeightVector::from_raw(raw)
        .map_err(|e| McdaError::MalformedPairwiseMatrix(format!("eigenvector estimate: {e}")))?;

    let report = consistency(pairwise, &weights);

    if verbose {
        info!(
            target: "mcda::weights",
            n,
            weights = %weights,
            lambda_max = report.lambda_max,
            ci = report.consistency_index,
            cr = ?report.consistency_ratio,
            "AHP weights"
        );
    } else {
        debug!(
            target: "mcda::weights",
            n,
            weights = %weights,
            cr = ?report.consistency_ratio,
            "AHP weights"
        );
    }
    match report.consistency_ratio {
        Some(cr) if !report.acceptable => {
            warn!(target: "mcda::weights", cr, threshold = CR_THRESHOLD, "pairwise judgments are inconsistent");
        }
        None => {
            debug!(target: "mcda::weights", n, "no random index for this size; consistency ratio unknown");
        }
        _ => {}
    }

    Ok((weights, report))
}

fn consistency(pairwise: &PairwiseMatrix, weights: &WeightVector) -> ConsistencyReport {
    let n = pairwise.size();
    let w = weights.as_slice();

    let lambda_max = (0..n)
        .map(|j| {
            let aw: f64 = (0..n).map(|k| pairwise.get(j, k) * w[k]).sum();
            aw / w[j]
        })
        .sum::<f64>()
        / n as f64;
    let consistency_index = if n > 1 { (lambda_max - n as f64) / (n as f64 - 1.0) } else { 0.0 };

    let random_index = random_index(n);
    let consistency_ratio = match random_index {
        _ if n <= 2 => Some(0.0),
        Some(ri) => Some(consistency_index / ri),
        None => None,
    };
    let acceptable = consistency_ratio.map_or(true, |cr| cr < CR_THRESHOLD);

    ConsistencyReport {
        n,
        lambda_max,
        consistency_index,
        random_index,
        consistency_ratio,
        acceptable,
    }
}

// ---------------- Strategy ----------------------------------------------------------------------

#[derive(Clone, Copy, Debug, Default)]
pub struct AhpWeights {
    pub verbose: bool,
}

impl WeightDeriver for AhpWeights {
    fn strategy(&self) -> WeightingStrategy {
        WeightingStrategy::Ahp
    }

    fn derive(
        &self,
        table: &CriteriaTable,
        pairwise: Option<&PairwiseMatrix>,
    ) -> McdaResult<DerivedWeights> {
        let pairwise = pairwise.ok_or(McdaError::MissingPairwiseMatrix)?;
        check_pairwise_size(table, pairwise)?;
        let (weights, report) = derive_weights_ahp(pairwise, self.verbose)?;
        Ok(DerivedWeights { weights, consistency: Some(report) })
    }
}

// ---------------- Tests -------------------------------------------------------------------------
