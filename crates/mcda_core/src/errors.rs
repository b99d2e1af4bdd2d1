//! Error taxonomy shared by every layer of the engine.
//!
//! All variants describe caller-input problems. They are reported synchronously
//! and never retried; no partial results accompany an error.

use thiserror::Error;

/// Unified error for validation, weighting and ranking.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum McdaError {
    /// A count (weights, impacts, row width, pairwise size) does not match the criterion count.
    #[error("invalid dimension for {what}: expected {expected}, found {found}")]
    InvalidDimension {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// An impact symbol that is neither benefit nor cost.
    #[error("invalid impact symbol {0:?} (expected '+'/'benefit' or '-'/'cost')")]
    InvalidImpactSymbol(String),

    /// Pairwise matrix not square, non-positive, or holding an unparseable literal.
    #[error("malformed pairwise matrix: {0}")]
    MalformedPairwiseMatrix(String),

    /// AHP weighting requested without a pairwise comparison matrix.
    #[error("ahp weighting requires a pairwise comparison matrix")]
    MissingPairwiseMatrix,

    /// Unrecognized method or weighting-strategy identifier.
    #[error("unsupported method or weighting strategy: {0:?}")]
    UnsupportedMethod(String),

    /// Zero alternatives or zero criteria.
    #[error("criteria table is empty")]
    EmptyTable,

    /// A cell that is not a finite number, or a value the chosen algorithm cannot accept.
    #[error("invalid value at row {row}, column {column}: {reason}")]
    InvalidValue {
        row: usize,
        column: usize,
        reason: String,
    },

    /// Caller-supplied weights that are negative, non-finite, or all zero.
    #[error("invalid weights: {0}")]
    InvalidWeights(String),

    /// A tuning parameter outside its domain.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

pub type McdaResult<T> = Result<T, McdaError>;

impl McdaError {
    /// Short, stable, machine-readable code (snake_case) for glue layers.
    pub fn code(&self) -> &'static str {
        match self {
            McdaError::InvalidDimension { .. } => "invalid_dimension",
            McdaError::InvalidImpactSymbol(_) => "invalid_impact_symbol",
            McdaError::MalformedPairwiseMatrix(_) => "malformed_pairwise_matrix",
            McdaError::MissingPairwiseMatrix => "missing_pairwise_matrix",
            McdaError::UnsupportedMethod(_) => "unsupported_method",
            McdaError::EmptyTable => "empty_table",
            McdaError::InvalidValue { .. } => "invalid_value",
            McdaError::InvalidWeights(_) => "invalid_weights",
            McdaError::InvalidParameter { .. } => "invalid_parameter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_counts() {
        let e = McdaError::InvalidDimension { what: "impacts", expected: 3, found: 1 };
        assert_eq!(e.to_string(), "invalid dimension for impacts: expected 3, found 1");
        assert_eq!(e.code(), "invalid_dimension");
    }

    #[test]
    fn codes_are_distinct_for_taxonomy() {
        let codes = [
            McdaError::InvalidImpactSymbol("x".into()).code(),
            McdaError::MalformedPairwiseMatrix("m".into()).code(),
            McdaError::MissingPairwiseMatrix.code(),
            McdaError::UnsupportedMethod("electre".into()).code(),
        ];
        let mut sorted = codes.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), codes.len());
    }
}
