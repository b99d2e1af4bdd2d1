//! Decision tables: raw caller input and the validated numeric `CriteriaTable`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{McdaError, McdaResult};
use crate::validate;

/// One cell of caller input before numeric conversion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RawCell {
    Number(f64),
    Text(String),
}

impl RawCell {
    /// Finite numeric value, parsing text cells if needed.
    pub fn as_number(&self) -> Option<f64> {
        let v = match self {
            RawCell::Number(v) => *v,
            RawCell::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        v.is_finite().then_some(v)
    }

    fn is_label(&self) -> bool {
        matches!(self, RawCell::Text(_)) && self.as_number().is_none()
    }
}

impl From<f64> for RawCell {
    fn from(v: f64) -> Self {
        RawCell::Number(v)
    }
}

impl From<&str> for RawCell {
    fn from(s: &str) -> Self {
        RawCell::Text(s.to_string())
    }
}

/// Caller input as named columns and rows of loosely typed cells.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<RawCell>>) -> Self {
        Self { columns, rows }
    }

    /// Convert to a numeric table.
    ///
    /// A first column made only of non-numeric text becomes the alternative
    /// labels; every other cell must convert to a finite number.
    pub fn to_criteria_table(&self) -> McdaResult<CriteriaTable> {
        let width = self.columns.len();
        if width == 0 || self.rows.is_empty() {
            return Err(McdaError::EmptyTable);
        }
        for row in &self.rows {
            if row.len() != width {
                return Err(McdaError::InvalidDimension {
                    what: "row cells",
                    expected: width,
                    found: row.len(),
                });
            }
        }

        let has_labels = self.rows.iter().all(|r| r[0].is_label());
        let first = usize::from(has_labels);
        if first >= width {
            return Err(McdaError::EmptyTable);
        }

        let mut values = Vec::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            let mut out = Vec::with_capacity(width - first);
            for (c, cell) in row.iter().enumerate().skip(first) {
                let v = cell.as_number().ok_or_else(|| McdaError::InvalidValue {
                    row: i,
                    column: c,
                    reason: format!("{cell:?} is not a finite number"),
                })?;
                out.push(v);
            }
            values.push(out);
        }

        let criteria = self.columns[first..].to_vec();
        let table = CriteriaTable::new(criteria, values)?;
        if has_labels {
            let labels = self
                .rows
                .iter()
                .map(|r| match &r[0] {
                    RawCell::Text(s) => s.clone(),
                    RawCell::Number(v) => v.to_string(),
                })
                .collect();
            table.with_alternatives(labels)
        } else {
            Ok(table)
        }
    }
}

/// `m` alternatives × `n` criteria of finite reals, plus names for both axes.
///
/// Never mutated in place; every transformation yields a new table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CriteriaTable {
    criteria: Vec<String>,
    alternatives: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CriteriaTable {
    /// Build from criterion names and row-major values; alternatives are labelled `A1..Am`.
    pub fn new(criteria: Vec<String>, values: Vec<Vec<f64>>) -> McdaResult<Self> {
        validate::check_matrix(&values, criteria.len())?;
        let alternatives = (1..=values.len()).map(|i| format!("A{i}")).collect();
        Ok(Self { criteria, alternatives, values })
    }

    /// Row-major values with default names `C1..Cn`.
    pub fn from_rows(values: Vec<Vec<f64>>) -> McdaResult<Self> {
        let n = values.first().map_or(0, Vec::len);
        let criteria = (1..=n).map(|j| format!("C{j}")).collect();
        Self::new(criteria, values)
    }

    /// Column-oriented construction, e.g. `[("Cost", vec![250.0, 200.0]), ...]`.
    pub fn from_columns<S: Into<String>>(columns: Vec<(S, Vec<f64>)>) -> McdaResult<Self> {
        let m = columns.first().map_or(0, |(_, c)| c.len());
        let mut criteria = Vec::with_capacity(columns.len());
        let mut values = vec![Vec::with_capacity(columns.len()); m];
        for (name, col) in columns {
            let name = name.into();
            if col.len() != m {
                return Err(McdaError::InvalidDimension {
                    what: "column length",
                    expected: m,
                    found: col.len(),
                });
            }
            for (row, v) in values.iter_mut().zip(col) {
                row.push(v);
            }
            criteria.push(name);
        }
        Self::new(criteria, values)
    }

    /// Replace the alternative labels; count must match the row count.
    pub fn with_alternatives(mut self, labels: Vec<String>) -> McdaResult<Self> {
        if labels.len() != self.values.len() {
            return Err(McdaError::InvalidDimension {
                what: "alternative labels",
                expected: self.values.len(),
                found: labels.len(),
            });
        }
        self.alternatives = labels;
        Ok(self)
    }

    /// Number of alternatives (`m`).
    pub fn n_alternatives(&self) -> usize {
        self.values.len()
    }

    /// Number of criteria (`n`).
    pub fn n_criteria(&self) -> usize {
        self.criteria.len()
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i]
    }

    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().map(move |r| r[j])
    }

    /// `(min, max)` of column `j`.
    pub fn column_extremes(&self, j: usize) -> (f64, f64) {
        self.column(j)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
    }

    /// New table with every value mapped through `f(i, j, value)`; names are kept.
    pub fn map_values(&self, f: impl Fn(usize, usize, f64) -> f64) -> Self {
        let values = self
            .values
            .iter()
            .enumerate()
            .map(|(i, r)| r.iter().enumerate().map(|(j, &v)| f(i, j, v)).collect())
            .collect();
        Self {
            criteria: self.criteria.clone(),
            alternatives: self.alternatives.clone(),
            values,
        }
    }
}
