//! Normalized, non-negative criterion weights.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{McdaError, McdaResult};

/// Weights sum to 1 within this tolerance after normalization.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Ordered weights, one per criterion. Invariant: every element is finite and
/// non-negative and the elements sum to 1 (±`WEIGHT_SUM_TOLERANCE`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<f64>", into = "Vec<f64>"))]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Validate raw weights and rescale them to sum to 1 when they are off by
    /// more than the tolerance.
    pub fn from_raw(raw: Vec<f64>) -> McdaResult<Self> {
        if raw.is_empty() {
            return Err(McdaError::InvalidWeights("no weights given".into()));
        }
        if let Some((j, w)) = raw.iter().enumerate().find(|(_, w)| !w.is_finite() || **w < 0.0) {
            return Err(McdaError::InvalidWeights(format!(
                "weight {j} is {w}; weights must be finite and non-negative"
            )));
        }
        let sum: f64 = raw.iter().sum();
        if sum <= 0.0 {
            return Err(McdaError::InvalidWeights("weights sum to zero".into()));
        }
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            Ok(Self(raw.into_iter().map(|w| w / sum).collect()))
        } else {
            Ok(Self(raw))
        }
    }

    /// `1/n` for every criterion.
    pub fn equal(n: usize) -> McdaResult<Self> {
        if n == 0 {
            return Err(McdaError::EmptyTable);
        }
        Ok(Self(vec![1.0 / n as f64; n]))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, j: usize) -> Option<f64> {
        self.0.get(j).copied()
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl fmt::Display for WeightVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (j, w) in self.0.iter().enumerate() {
            if j > 0 {
                f.write_str(",")?;
            }
            write!(f, "{w:.4}")?;
        }
        Ok(())
    }
}

/// Comma-separated transport form, e.g. `"0.25,0.25,0.5"`.
impl FromStr for WeightVector {
    type Err = McdaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .split(',')
            .map(|p| {
                let p = p.trim();
                p.parse::<f64>()
                    .map_err(|_| McdaError::InvalidWeights(format!("not a number: {p:?}")))
            })
            .collect::<McdaResult<Vec<f64>>>()?;
        Self::from_raw(raw)
    }
}

impl TryFrom<Vec<f64>> for WeightVector {
    type Error = McdaError;

    fn try_from(raw: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl From<WeightVector> for Vec<f64> {
    fn from(w: WeightVector) -> Self {
        w.0
    }
}
