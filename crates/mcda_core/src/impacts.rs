//! Impact direction per criterion: benefit (higher is better) or cost (lower is better).

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{McdaError, McdaResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Impact {
    Benefit,
    Cost,
}

impl Impact {
    /// Wire symbol used by the comma-separated transport form.
    pub fn symbol(self) -> char {
        match self {
            Impact::Benefit => '+',
            Impact::Cost => '-',
        }
    }

    /// `(ideal, anti_ideal)` for a column whose extremes are `(min, max)`.
    #[inline]
    pub fn extremes(self, min: f64, max: f64) -> (f64, f64) {
        match self {
            Impact::Benefit => (max, min),
            Impact::Cost => (min, max),
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Impact::Benefit => f.write_str("benefit"),
            Impact::Cost => f.write_str("cost"),
        }
    }
}

impl FromStr for Impact {
    type Err = McdaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        match t.to_ascii_lowercase().as_str() {
            "+" | "benefit" | "max" => Ok(Impact::Benefit),
            "-" | "cost" | "min" => Ok(Impact::Cost),
            _ => Err(McdaError::InvalidImpactSymbol(t.to_string())),
        }
    }
}

/// Ordered impact directions, one per criterion.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ImpactVector(Vec<Impact>);

impl ImpactVector {
    pub fn new(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }

    /// Parse one symbol per element; the first unrecognized symbol fails the whole vector.
    pub fn parse<S: AsRef<str>>(symbols: &[S]) -> McdaResult<Self> {
        symbols
            .iter()
            .map(|s| s.as_ref().parse::<Impact>())
            .collect::<McdaResult<Vec<_>>>()
            .map(Self)
    }

    /// Parse the comma-separated transport form, e.g. `"+,-,+"`.
    pub fn parse_list(list: &str) -> McdaResult<Self> {
        if list.trim().is_empty() {
            return Ok(Self(Vec::new()));
        }
        let parts: Vec<&str> = list.split(',').collect();
        Self::parse(&parts)
    }

    pub fn all(n: usize, impact: Impact) -> Self {
        Self(vec![impact; n])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Impact] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Impact> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for ImpactVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (j, i) in self.0.iter().enumerate() {
            if j > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", i.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for ImpactVector {
    type Err = McdaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_list(s)
    }
}

impl From<Vec<Impact>> for ImpactVector {
    fn from(v: Vec<Impact>) -> Self {
        Self(v)
    }
}
