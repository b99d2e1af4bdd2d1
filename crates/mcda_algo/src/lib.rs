// crates/mcda_algo/src/lib.rs
#![forbid(unsafe_code)]

// Core data model (re-exported so callers can depend on this crate alone)
pub use mcda_core::{
    CriteriaTable, Impact, ImpactVector, McdaError, McdaResult, PairwiseMatrix, RankingMethod,
    VikorParams, WeightVector, WeightingStrategy,
};

// ----------------------------- Results (public surface) ------------------------------

pub mod result;

pub use result::{
    ColumnValues, CompromiseKind, CompromiseStatus, MethodDetail, RankingResult, ScoreColumn,
    TopsisScores, VikorScores,
};

// ----------------------------- Weighting (public surface) ----------------------------

pub mod weighting {
    // File modules (actual implementations)
    pub mod ahp;
    pub mod entropy;
    pub mod equal;

    pub use ahp::{derive_weights_ahp, random_index, AhpWeights, ConsistencyReport, CR_THRESHOLD};
    pub use entropy::{derive_weights_entropy, EntropyWeights};
    pub use equal::{derive_weights_equal, EqualWeights};

    use mcda_core::{CriteriaTable, McdaResult, PairwiseMatrix, WeightVector, WeightingStrategy};

    /// Weights produced by a strategy, plus the AHP consistency report when one applies.
    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct DerivedWeights {
        pub weights: WeightVector,
        pub consistency: Option<ConsistencyReport>,
    }

    impl DerivedWeights {
        pub fn plain(weights: WeightVector) -> Self {
            Self { weights, consistency: None }
        }
    }

    /// Common capability of every weighting strategy: table (and optional
    /// pairwise judgments) in, normalized weights out.
    pub trait WeightDeriver {
        fn strategy(&self) -> WeightingStrategy;

        fn derive(
            &self,
            table: &CriteriaTable,
            pairwise: Option<&PairwiseMatrix>,
        ) -> McdaResult<DerivedWeights>;
    }

    /// Deriver for a configured strategy.
    pub fn deriver_for(strategy: WeightingStrategy, verbose: bool) -> Box<dyn WeightDeriver> {
        match strategy {
            WeightingStrategy::Equal => Box::new(EqualWeights),
            WeightingStrategy::Entropy => Box::new(EntropyWeights),
            WeightingStrategy::Ahp => Box::new(AhpWeights { verbose }),
        }
    }
}

pub use weighting::{
    derive_weights_ahp, derive_weights_entropy, derive_weights_equal, deriver_for,
    ConsistencyReport, DerivedWeights, WeightDeriver,
};

// ----------------------------- Ranking (public surface) ------------------------------

pub mod ranking {
    // File modules (actual implementations)
    pub mod topsis;
    pub mod vikor;

    pub use topsis::rank_topsis;
    pub use vikor::rank_vikor;

    use mcda_core::{CriteriaTable, ImpactVector};

    /// Per-criterion `(ideal, anti_ideal)` values: column max/min for benefit
    /// criteria, min/max for cost criteria.
    pub fn ideal_points(table: &CriteriaTable, impacts: &ImpactVector) -> (Vec<f64>, Vec<f64>) {
        impacts
            .iter()
            .enumerate()
            .map(|(j, impact)| {
                let (lo, hi) = table.column_extremes(j);
                impact.extremes(lo, hi)
            })
            .unzip()
    }
}

pub use ranking::{ideal_points, rank_topsis, rank_vikor};
