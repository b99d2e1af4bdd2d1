//! Ranking results: the input table annotated with method scores and ranks.
//!
//! Rows keep the original table order. Ranks are an annotation (1 = best),
//! never a reordering. Method-specific metadata lives in fixed, typed fields.

#[cfg(feature = "serde")]
use serde::Serialize;

use mcda_core::{CriteriaTable, ImpactVector, RankingMethod, WeightVector};

use crate::weighting::ConsistencyReport;

/// Table + weights + impacts used, the overall rank column, and per-method detail.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RankingResult {
    pub table: CriteriaTable,
    pub weights: WeightVector,
    pub impacts: ImpactVector,
    pub rank: Vec<u32>,
    pub detail: MethodDetail,
    /// AHP consistency of the judgments the weights came from, when they did.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub consistency: Option<ConsistencyReport>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "method", rename_all = "snake_case"))]
pub enum MethodDetail {
    Topsis(TopsisScores),
    Vikor(VikorScores),
}

/// Closeness coefficient in [0, 1] (1 = ideal) and the two distances it came from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TopsisScores {
    pub closeness: Vec<f64>,
    pub distance_ideal: Vec<f64>,
    pub distance_anti_ideal: Vec<f64>,
}

/// Group utility `s`, individual regret `r`, compromise index `q` (lower is better for all).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct VikorScores {
    pub s: Vec<f64>,
    pub r: Vec<f64>,
    pub q: Vec<f64>,
    pub s_rank: Vec<u32>,
    pub r_rank: Vec<u32>,
    pub q_rank: Vec<u32>,
    pub is_compromise: Vec<bool>,
    pub status: CompromiseStatus,
}

/// Which acceptance outcome produced the compromise set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CompromiseKind {
    /// C1 and C2 hold: the best alternative by Q alone.
    Single,
    /// C1 fails: every alternative whose Q is within DQ of the best.
    AdvantageNotAcceptable,
    /// Only C2 fails: best by Q, S and R together.
    StabilityNotAcceptable,
}

/// VIKOR acceptance-condition outcome. Indices refer to table rows.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CompromiseStatus {
    /// C1, acceptable advantage.
    pub c1_satisfied: bool,
    /// C2, acceptable stability.
    pub c2_satisfied: bool,
    pub dq: f64,
    /// `Q(2nd) - Q(1st)`; absent for a single alternative.
    pub q_advantage: Option<f64>,
    pub best_by_q: usize,
    pub best_by_s: usize,
    pub best_by_r: usize,
    /// More than one alternative shares the best S (resp. R); the first in table order was taken.
    pub best_by_s_tied: bool,
    pub best_by_r_tied: bool,
    /// Ordered by Q rank, then table order.
    pub compromise_set: Vec<usize>,
    pub kind: CompromiseKind,
    pub narrative: String,
}

/// Typed values of one named result column.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ColumnValues {
    Real(Vec<f64>),
    Rank(Vec<u32>),
    Flag(Vec<bool>),
}

/// A method column as glue layers render it next to the input table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScoreColumn {
    pub name: &'static str,
    pub values: ColumnValues,
}

impl ScoreColumn {
    fn real(name: &'static str, v: &[f64]) -> Self {
        Self { name, values: ColumnValues::Real(v.to_vec()) }
    }

    fn rank(name: &'static str, v: &[u32]) -> Self {
        Self { name, values: ColumnValues::Rank(v.to_vec()) }
    }
}

impl RankingResult {
    pub fn method(&self) -> RankingMethod {
        match self.detail {
            MethodDetail::Topsis(_) => RankingMethod::Topsis,
            MethodDetail::Vikor(_) => RankingMethod::Vikor,
        }
    }

    /// Number of ranked alternatives.
    pub fn len(&self) -> usize {
        self.rank.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rank.is_empty()
    }

    pub fn topsis(&self) -> Option<&TopsisScores> {
        match &self.detail {
            MethodDetail::Topsis(t) => Some(t),
            MethodDetail::Vikor(_) => None,
        }
    }

    pub fn vikor(&self) -> Option<&VikorScores> {
        match &self.detail {
            MethodDetail::Vikor(v) => Some(v),
            MethodDetail::Topsis(_) => None,
        }
    }

    /// Acceptance-condition record, without touching any column.
    pub fn vikor_status(&self) -> Option<&CompromiseStatus> {
        self.vikor().map(|v| &v.status)
    }

    /// Rows holding rank 1, in table order.
    pub fn best(&self) -> Vec<usize> {
        (0..self.rank.len()).filter(|&i| self.rank[i] == 1).collect()
    }

    /// Attach the consistency report of AHP-derived weights.
    pub fn with_consistency(mut self, report: Option<ConsistencyReport>) -> Self {
        self.consistency = report;
        self
    }

    pub fn label(&self, i: usize) -> &str {
        &self.table.alternatives()[i]
    }

    /// Method columns in the order they are appended to the input table.
    pub fn score_columns(&self) -> Vec<ScoreColumn> {
        match &self.detail {
            MethodDetail::Topsis(t) => vec![
                ScoreColumn::real("Distance_Ideal", &t.distance_ideal),
                ScoreColumn::real("Distance_Anti_Ideal", &t.distance_anti_ideal),
                ScoreColumn::real("Topsis_Score", &t.closeness),
                ScoreColumn::rank("Rank", &self.rank),
            ],
            MethodDetail::Vikor(v) => vec![
                ScoreColumn::real("S", &v.s),
                ScoreColumn::real("R", &v.r),
                ScoreColumn::real("Q", &v.q),
                ScoreColumn::rank("Q_Rank", &v.q_rank),
                ScoreColumn::rank("S_Rank", &v.s_rank),
                ScoreColumn::rank("R_Rank", &v.r_rank),
                ScoreColumn::rank("Rank", &self.rank),
                ScoreColumn {
                    name: "Is_Compromise",
                    values: ColumnValues::Flag(v.is_compromise.clone()),
                },
            ],
        }
    }
}
