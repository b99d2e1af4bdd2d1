//! Pairwise comparison matrix for AHP weighting.
//!
//! Cells arrive either as plain numbers or as ratio literals such as `"1/3"`.
//! Literals are resolved when the cell is parsed; a `PairwiseMatrix` only ever
//! holds positive finite ratios.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{McdaError, McdaResult};
#[cfg(feature = "serde")]
use crate::table::RawCell;

/// One judgment cell, tagged by how it was written.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCell"))]
pub enum PairwiseCell {
    Numeric(f64),
    Ratio { num: f64, den: f64 },
}

impl PairwiseCell {
    pub fn value(self) -> f64 {
        match self {
            PairwiseCell::Numeric(v) => v,
            PairwiseCell::Ratio { num, den } => num / den,
        }
    }
}

impl FromStr for PairwiseCell {
    type Err = McdaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let bad = || McdaError::MalformedPairwiseMatrix(format!("unparseable cell {t:?}"));
        match t.split_once('/') {
            Some((n, d)) => {
                let num: f64 = n.trim().parse().map_err(|_| bad())?;
                let den: f64 = d.trim().parse().map_err(|_| bad())?;
                if den == 0.0 {
                    return Err(McdaError::MalformedPairwiseMatrix(format!(
                        "zero denominator in {t:?}"
                    )));
                }
                Ok(PairwiseCell::Ratio { num, den })
            }
            None => t.parse::<f64>().map(PairwiseCell::Numeric).map_err(|_| bad()),
        }
    }
}

impl From<f64> for PairwiseCell {
    fn from(v: f64) -> Self {
        PairwiseCell::Numeric(v)
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawCell> for PairwiseCell {
    type Error = McdaError;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        match raw {
            RawCell::Number(v) => Ok(PairwiseCell::Numeric(v)),
            RawCell::Text(s) => s.parse(),
        }
    }
}

/// Square matrix of positive reals; `[j][k]` is the importance of criterion `j` relative to `k`.
///
/// Reciprocity (`[j][k] == 1 / [k][j]`, unit diagonal) is expected by
/// construction but not enforced; see [`PairwiseMatrix::reciprocity_deviation`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Vec<PairwiseCell>>", into = "Vec<Vec<f64>>"))]
pub struct PairwiseMatrix {
    rows: Vec<Vec<f64>>,
}

impl PairwiseMatrix {
    /// Resolve tagged cells and check shape and positivity.
    pub fn from_cells(cells: Vec<Vec<PairwiseCell>>) -> McdaResult<Self> {
        let rows = cells
            .into_iter()
            .map(|row| row.into_iter().map(PairwiseCell::value).collect())
            .collect();
        Self::from_rows(rows)
    }

    /// Parse a grid of textual cells (`"3"`, `"0.5"`, `"1/3"`).
    pub fn parse<R, S>(grid: &[R]) -> McdaResult<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let cells = grid
            .iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .map(|c| c.as_ref().parse::<PairwiseCell>())
                    .collect::<McdaResult<Vec<_>>>()
            })
            .collect::<McdaResult<Vec<_>>>()?;
        Self::from_cells(cells)
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> McdaResult<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(McdaError::MalformedPairwiseMatrix("matrix is empty".into()));
        }
        for (j, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(McdaError::MalformedPairwiseMatrix(format!(
                    "matrix is not square: row {j} has {} cells, expected {n}",
                    row.len()
                )));
            }
            if let Some((k, v)) = row.iter().enumerate().find(|(_, v)| !v.is_finite() || **v <= 0.0) {
                return Err(McdaError::MalformedPairwiseMatrix(format!(
                    "entry [{j},{k}] = {v} is not a positive finite number"
                )));
            }
        }
        Ok(Self { rows })
    }

    /// Number of criteria compared.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, j: usize, k: usize) -> f64 {
        self.rows[j][k]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Largest `|a[j][k] * a[k][j] - 1|` over all pairs (0 for a perfectly reciprocal matrix).
    pub fn reciprocity_deviation(&self) -> f64 {
        let n = self.size();
        let mut worst = 0.0f64;
        for j in 0..n {
            for k in j..n {
                let d = (self.rows[j][k] * self.rows[k][j] - 1.0).abs();
                worst = worst.max(d);
            }
        }
        worst
    }
}

impl TryFrom<Vec<Vec<PairwiseCell>>> for PairwiseMatrix {
    type Error = McdaError;

    fn try_from(cells: Vec<Vec<PairwiseCell>>) -> Result<Self, Self::Error> {
        Self::from_cells(cells)
    }
}

impl From<PairwiseMatrix> for Vec<Vec<f64>> {
    fn from(m: PairwiseMatrix) -> Self {
        m.rows
    }
}

impl fmt::Display for PairwiseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:.4}")).collect();
            writeln!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}
