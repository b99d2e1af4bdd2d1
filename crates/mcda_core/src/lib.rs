//! mcda_core: Core types, input validation, selectors and rank helpers.
//!
//! This crate is **I/O-free**. It defines the stable data model used across the
//! engine (`mcda_algo`, `mcda_pipeline`, `mcda_cli`):
//!
//! - `CriteriaTable` (validated numeric matrix + labels) and `RawTable` (caller input)
//! - `WeightVector`, `Impact` / `ImpactVector`
//! - `PairwiseMatrix` with fraction-literal cells resolved at parse time
//! - Weighting/method selectors and the VIKOR strategy parameter
//! - Minimum-rank assignment (ties share the lowest ordinal)
//! - Matrix Validator
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod errors;
pub mod impacts;
pub mod pairwise;
pub mod params;
pub mod rank;
pub mod table;
pub mod validate;
pub mod weights;

pub use errors::{McdaError, McdaResult};
pub use impacts::{Impact, ImpactVector};
pub use pairwise::{PairwiseCell, PairwiseMatrix};
pub use params::{RankingMethod, VikorParams, WeightingStrategy};
pub use rank::{min_rank, RankOrder};
pub use table::{CriteriaTable, RawCell, RawTable};
pub use weights::{WeightVector, WEIGHT_SUM_TOLERANCE};

/// Small constant added to VIKOR denominators so constant criteria do not divide by zero.
pub const EPSILON: f64 = 1e-10;
