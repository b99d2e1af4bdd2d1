//! Shannon-entropy weighting.
//!
//! For column `j`: `p_ij = x_ij / Σ_i x_ij`, `E_j = -(1/ln m) Σ_i p_ij ln p_ij`
//! (with `0 ln 0 = 0`), diversification `d_j = 1 - E_j`, `w_j = d_j / Σ d`.
//!
//! Edge rules:
//! - An all-zero column is treated as a uniform distribution (`E = 1`, `d = 0`).
//! - A single alternative carries no information: every `E = 1`.
//! - When every `d` is 0 (all criteria constant) the weights fall back to `1/n`.
//! - Negative values have no proportion interpretation and are rejected.

use mcda_core::{
    CriteriaTable, McdaError, McdaResult, PairwiseMatrix, WeightVector, WeightingStrategy,
};
use tracing::debug;

use super::{DerivedWeights, WeightDeriver};

/// Diversification below this is rounding noise from a constant column.
const DIVERSIFICATION_FLOOR: f64 = 1e-12;

pub fn derive_weights_entropy(table: &CriteriaTable) -> McdaResult<WeightVector> {
    let m = table.n_alternatives();
    let n = table.n_criteria();

    for (i, row) in table.rows().iter().enumerate() {
        if let Some(j) = row.iter().position(|&v| v < 0.0) {
            return Err(McdaError::InvalidValue {
                row: i,
                column: j,
                reason: "entropy weighting requires non-negative values".into(),
            });
        }
    }

    let diversification: Vec<f64> = (0..n)
        .map(|j| 1.0 - column_entropy(table, j, m))
        .map(|d| if d > DIVERSIFICATION_FLOOR { d } else { 0.0 })
        .collect();
    let total: f64 = diversification.iter().sum();

    debug!(
        target: "mcda::weights",
        alternatives = m,
        criteria = n,
        ?diversification,
        "entropy diversification"
    );

    if total <= 0.0 {
        debug!(target: "mcda::weights", "no criterion discriminates; using equal weights");
        return WeightVector::equal(n);
    }
    WeightVector::from_raw(diversification.into_iter().map(|d| d / total).collect())
}

/// Normalized entropy of column `j` in [0, 1].
fn column_entropy(table: &CriteriaTable, j: usize, m: usize) -> f64 {
    if m <= 1 {
        return 1.0;
    }
    let sum: f64 = table.column(j).sum();
    if sum == 0.0 {
        return 1.0;
    }
    let k = 1.0 / (m as f64).ln();
    let h: f64 = table
        .column(j)
        .map(|x| x / sum)
        .filter(|&p| p > 0.0)
        .map(|p| p * p.ln())
        .sum();
    -k * h
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EntropyWeights;

impl WeightDeriver for EntropyWeights {
    fn strategy(&self) -> WeightingStrategy {
        WeightingStrategy::Entropy
    }

    fn derive(
        &self,
        table: &CriteriaTable,
        _pairwise: Option<&PairwiseMatrix>,
    ) -> McdaResult<DerivedWeights> {
        derive_weights_entropy(table).map(DerivedWeights::plain)
    }
}
