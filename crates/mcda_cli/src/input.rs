// crates/mcda_cli/src/input.rs
//
// Decision problem file: a raw table plus optional impacts, weights and pairwise
// judgments. Flags override file fields.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use mcda_core::{CriteriaTable, McdaResult, PairwiseMatrix, RawCell, RawTable, WeightVector};
use mcda_pipeline::RunOptions;

use crate::args::{split_list, Args};

/// On-disk problem shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Problem {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
    #[serde(default)]
    pub impacts: Option<Vec<String>>,
    #[serde(default)]
    pub weights: Option<Vec<f64>>,
    #[serde(default)]
    pub pairwise: Option<PairwiseMatrix>,
}

#[derive(Debug)]
pub enum LoadError {
    Read(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Read(e) => write!(f, "read: {e}"),
            LoadError::Json(e) => write!(f, "json: {e}"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Everything the pipeline needs for one invocation.
#[derive(Debug)]
pub struct Resolved {
    pub table: CriteriaTable,
    pub impacts: Vec<String>,
    pub options: RunOptions,
}

impl Problem {
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path).map_err(LoadError::Read)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        serde_json::from_str(text).map_err(LoadError::Json)
    }

    /// Apply flag overrides and convert to engine inputs.
    pub fn resolve(self, args: &Args) -> McdaResult<Resolved> {
        let table = RawTable::new(self.columns, self.rows).to_criteria_table()?;

        let impacts = match &args.impacts {
            Some(flag) => split_list(flag),
            None => self.impacts.unwrap_or_default(),
        };
        let weights = match &args.weights {
            Some(flag) => Some(flag.parse::<WeightVector>()?.into_vec()),
            None => self.weights,
        };

        Ok(Resolved {
            table,
            impacts,
            options: RunOptions { weights, pairwise: self.pairwise, v: args.v },
        })
    }
}
