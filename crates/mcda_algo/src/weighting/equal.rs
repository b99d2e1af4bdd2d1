//! Equal weighting: `1/n` per criterion.

use mcda_core::{CriteriaTable, McdaResult, PairwiseMatrix, WeightVector, WeightingStrategy};

use super::{DerivedWeights, WeightDeriver};

pub fn derive_weights_equal(n_criteria: usize) -> McdaResult<WeightVector> {
    WeightVector::equal(n_criteria)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EqualWeights;

impl WeightDeriver for EqualWeights {
    fn strategy(&self) -> WeightingStrategy {
        WeightingStrategy::Equal
    }

    fn derive(
        &self,
        table: &CriteriaTable,
        _pairwise: Option<&PairwiseMatrix>,
    ) -> McdaResult<DerivedWeights> {
        derive_weights_equal(table.n_criteria()).map(DerivedWeights::plain)
    }
}
