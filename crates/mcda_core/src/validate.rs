//! Matrix Validator: shape and symbol checks before any computation.
//!
//! Pure checks, no side effects. Counts are checked before symbols so a
//! too-short impact list reports `InvalidDimension` even when its symbols are
//! also bad.

use crate::errors::{McdaError, McdaResult};
use crate::impacts::ImpactVector;
use crate::pairwise::PairwiseMatrix;
use crate::table::CriteriaTable;
use crate::weights::WeightVector;

/// Every row has exactly `n` finite values and the matrix is non-empty.
pub fn check_matrix(values: &[Vec<f64>], n: usize) -> McdaResult<()> {
    if values.is_empty() || n == 0 {
        return Err(McdaError::EmptyTable);
    }
    for (i, row) in values.iter().enumerate() {
        if row.len() != n {
            return Err(McdaError::InvalidDimension {
                what: "row values",
                expected: n,
                found: row.len(),
            });
        }
        if let Some((j, v)) = row.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(McdaError::InvalidValue {
                row: i,
                column: j,
                reason: format!("{v} is not a finite number"),
            });
        }
    }
    Ok(())
}

/// Weight count equals criterion count.
pub fn check_weight_count(table: &CriteriaTable, found: usize) -> McdaResult<()> {
    expect_count("weights", table.n_criteria(), found)
}

/// Impact count equals criterion count and every symbol is recognized.
pub fn check_impacts<S: AsRef<str>>(table: &CriteriaTable, impacts: &[S]) -> McdaResult<ImpactVector> {
    expect_count("impacts", table.n_criteria(), impacts.len())?;
    ImpactVector::parse(impacts)
}

/// Full validator contract: table shape, optional weight count, impact count and symbols.
///
/// Returns the parsed impacts so callers never re-parse symbols.
pub fn validate_inputs<S: AsRef<str>>(
    table: &CriteriaTable,
    weights: Option<&[f64]>,
    impacts: &[S],
) -> McdaResult<ImpactVector> {
    check_matrix(table.rows(), table.n_criteria())?;
    if let Some(w) = weights {
        check_weight_count(table, w.len())?;
    }
    check_impacts(table, impacts)
}

/// Typed variant used by the rankers once inputs are already parsed.
pub fn check_dimensions(
    table: &CriteriaTable,
    weights: &WeightVector,
    impacts: &ImpactVector,
) -> McdaResult<()> {
    check_weight_count(table, weights.len())?;
    expect_count("impacts", table.n_criteria(), impacts.len())
}

/// Pairwise matrix compares exactly the table's criteria.
pub fn check_pairwise_size(table: &CriteriaTable, pairwise: &PairwiseMatrix) -> McdaResult<()> {
    expect_count("pairwise matrix size", table.n_criteria(), pairwise.size())
}

fn expect_count(what: &'static str, expected: usize, found: usize) -> McdaResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(McdaError::InvalidDimension { what, expected, found })
    }
}
