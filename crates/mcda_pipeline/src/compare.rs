//! crates/mcda_pipeline/src/compare.rs
//! TOPSIS vs VIKOR on the same table and weights: both results plus `|rank_T − rank_V|`
//! per alternative (`Rank_Difference`).

#[cfg(feature = "serde")]
use serde::Serialize;

use mcda_algo::{ColumnValues, RankingResult, ScoreColumn};
use mcda_core::{McdaError, McdaResult};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ComparisonResult {
    pub topsis: RankingResult,
    pub vikor: RankingResult,
    pub rank_difference: Vec<u32>,
}

impl ComparisonResult {
    /// Pair two results over the same alternatives.
    pub fn new(topsis: RankingResult, vikor: RankingResult) -> McdaResult<Self> {
        if topsis.len() != vikor.len() {
            return Err(McdaError::InvalidDimension {
                what: "compared alternatives",
                expected: topsis.len(),
                found: vikor.len(),
            });
        }
        let rank_difference = topsis
            .rank
            .iter()
            .zip(&vikor.rank)
            .map(|(t, v)| t.abs_diff(*v))
            .collect();
        Ok(Self { topsis, vikor, rank_difference })
    }

    pub fn mean_rank_difference(&self) -> f64 {
        if self.rank_difference.is_empty() {
            return 0.0;
        }
        let total: u32 = self.rank_difference.iter().sum();
        f64::from(total) / self.rank_difference.len() as f64
    }

    /// Both methods assign every alternative the same rank.
    pub fn full_agreement(&self) -> bool {
        self.rank_difference.iter().all(|&d| d == 0)
    }

    /// Rows on which the methods disagree, in table order.
    pub fn disagreements(&self) -> Vec<usize> {
        (0..self.rank_difference.len()).filter(|&i| self.rank_difference[i] != 0).collect()
    }

    pub fn score_column(&self) -> ScoreColumn {
        ScoreColumn {
            name: "Rank_Difference",
            values: ColumnValues::Rank(self.rank_difference.clone()),
        }
    }
}
