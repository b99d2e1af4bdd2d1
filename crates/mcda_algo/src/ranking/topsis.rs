//! crates/mcda_algo/src/ranking/topsis.rs
//! TOPSIS: vector-normalize, weight, measure Euclidean distance to the ideal and
//! anti-ideal points, rank by closeness coefficient (descending, minimum-rank ties).

use mcda_core::{
    min_rank, validate::check_dimensions, CriteriaTable, ImpactVector, McdaResult, RankOrder,
    WeightVector,
};
use tracing::{debug, trace};

use super::ideal_points;
use crate::result::{MethodDetail, RankingResult, TopsisScores};

/// Closeness when an alternative coincides with both reference points.
const DEGENERATE_CLOSENESS: f64 = 0.5;

pub fn rank_topsis(
    table: &CriteriaTable,
    weights: &WeightVector,
    impacts: &ImpactVector,
) -> McdaResult<RankingResult> {
    check_dimensions(table, weights, impacts)?;

    let weighted = weighted_normalized(table, weights);
    let (ideal, anti_ideal) = ideal_points(&weighted, impacts);
    trace!(target: "mcda::topsis", ?ideal, ?anti_ideal, "reference points");

    let distance_ideal: Vec<f64> = weighted.rows().iter().map(|row| euclidean(row, &ideal)).collect();
    let distance_anti_ideal: Vec<f64> =
        weighted.rows().iter().map(|row| euclidean(row, &anti_ideal)).collect();

    let closeness: Vec<f64> = distance_ideal
        .iter()
        .zip(&distance_anti_ideal)
        .map(|(&dp, &dm)| {
            let denom = dp + dm;
            if denom > 0.0 {
                dm / denom
            } else {
                DEGENERATE_CLOSENESS
            }
        })
        .collect();
    let rank = min_rank(&closeness, RankOrder::Descending);

    debug!(
        target: "mcda::topsis",
        alternatives = table.n_alternatives(),
        ?closeness,
        ?rank,
        "TOPSIS ranking"
    );

    Ok(RankingResult {
        table: table.clone(),
        weights: weights.clone(),
        impacts: impacts.clone(),
        rank,
        consistency: None,
        detail: MethodDetail::Topsis(TopsisScores {
            closeness,
            distance_ideal,
            distance_anti_ideal,
        }),
    })
}

/// `w_j · x_ij / ‖x_·j‖`; a zero-norm column stays all zeros.
fn weighted_normalized(table: &CriteriaTable, weights: &WeightVector) -> CriteriaTable {
    let norms: Vec<f64> = (0..table.n_criteria()).map(|j| column_norm(table, j)).collect();
    let w = weights.as_slice();
    table.map_values(|_, j, x| {
        let normalized = if norms[j] > 0.0 { x / norms[j] } else { x };
        normalized * w[j]
    })
}

/// Squares are summed in sorted order so the norm is bit-identical under any
/// row permutation.
fn column_norm(table: &CriteriaTable, j: usize) -> f64 {
    let mut squares: Vec<f64> = table.column(j).map(|x| x * x).collect();
    squares.sort_by(f64::total_cmp);
    squares.iter().sum::<f64>().sqrt()
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcda_core::{Impact, McdaError};

    fn impacts(s: &str) -> ImpactVector {
        ImpactVector::parse_list(s).unwrap()
    }

    fn sample() -> CriteriaTable {
        CriteriaTable::from_columns(vec![
            ("C1", vec![250.0, 200.0, 300.0]),
            ("C2", vec![16.0, 20.0, 12.0]),
            ("C3", vec![12.0, 8.0, 10.0]),
        ])
        .unwrap()
    }

    #[test]
    fn ranks_three_alternatives() {
        let t = sample();
        let r = rank_topsis(&t, &WeightVector::equal(3).unwrap(), &impacts("-,+,-")).unwrap();
        assert_eq!(r.len(), 3);
        // A2 is cheapest, strongest and lightest: it is the ideal point.
        assert_eq!(r.rank, vec![2, 1, 3]);
        let scores = r.topsis().unwrap();
        assert!((scores.closeness[1] - 1.0).abs() < 1e-12);
        assert!((scores.closeness[0] - 0.383_933_265_724_5).abs() < 1e-9);
        assert!((scores.closeness[2] - 0.230_379_785_206_5).abs() < 1e-9);
        assert_eq!(r.best(), vec![1]);
    }

    #[test]
    fn closeness_in_unit_interval_and_best_is_max() {
        let t = CriteriaTable::from_rows(vec![
            vec![7.0, 9.0, 9.0],
            vec![8.0, 7.0, 6.0],
            vec![6.0, 8.0, 8.0],
            vec![9.0, 6.0, 7.0],
        ])
        .unwrap();
        let w = WeightVector::from_raw(vec![0.33, 0.33, 0.34]).unwrap();
        let r = rank_topsis(&t, &w, &ImpactVector::all(3, Impact::Benefit)).unwrap();
        let c = &r.topsis().unwrap().closeness;
        assert!(c.iter().all(|&x| (0.0..=1.0).contains(&x)));
        let max_i = (0..c.len()).max_by(|&a, &b| c[a].total_cmp(&c[b])).unwrap();
        assert_eq!(r.rank[max_i], 1);
        assert_eq!(r.rank, vec![1, 4, 3, 2]);
    }

    #[test]
    fn identical_rows_tie_at_min_rank() {
        let t = CriteriaTable::from_rows(vec![vec![5.0, 1.0], vec![5.0, 1.0], vec![1.0, 5.0]]).unwrap();
        let r = rank_topsis(&t, &WeightVector::equal(2).unwrap(), &impacts("+,-")).unwrap();
        assert_eq!(r.rank, vec![1, 1, 3]);
    }

    #[test]
    fn reversed_rows_give_bit_identical_closeness() {
        let rows = vec![
            vec![0.2, 0.1],
            vec![0.1, 0.5],
            vec![0.1, 0.4],
            vec![0.1, 0.1],
            vec![0.4, 0.1],
            vec![0.2, 0.2],
        ];
        let w = WeightVector::equal(2).unwrap();
        let imp = impacts("-,-");
        let fwd = rank_topsis(&CriteriaTable::from_rows(rows.clone()).unwrap(), &w, &imp).unwrap();
        let rev_rows: Vec<Vec<f64>> = rows.into_iter().rev().collect();
        let rev = rank_topsis(&CriteriaTable::from_rows(rev_rows).unwrap(), &w, &imp).unwrap();

        let mut back = rev.topsis().unwrap().closeness.clone();
        back.reverse();
        let fwd_bits: Vec<u64> = fwd.topsis().unwrap().closeness.iter().map(|x| x.to_bits()).collect();
        let back_bits: Vec<u64> = back.iter().map(|x| x.to_bits()).collect();
        assert_eq!(fwd_bits, back_bits);

        let mut back_rank = rev.rank.clone();
        back_rank.reverse();
        assert_eq!(fwd.rank, back_rank);
    }

    #[test]
    fn single_point_dataset_is_degenerate() {
        let t = CriteriaTable::from_rows(vec![vec![3.0, 4.0]]).unwrap();
        let r = rank_topsis(&t, &WeightVector::equal(2).unwrap(), &impacts("+,+")).unwrap();
        assert_eq!(r.topsis().unwrap().closeness, vec![0.5]);
        assert_eq!(r.rank, vec![1]);
    }

    #[test]
    fn zero_column_is_left_alone() {
        let t = CriteriaTable::from_rows(vec![vec![0.0, 1.0], vec![0.0, 3.0]]).unwrap();
        let r = rank_topsis(&t, &WeightVector::equal(2).unwrap(), &impacts("+,+")).unwrap();
        let c = &r.topsis().unwrap().closeness;
        assert!(c.iter().all(|x| x.is_finite()));
        assert_eq!(r.rank, vec![2, 1]);
    }

    #[test]
    fn dimension_mismatch_is_rejected() {
        let t = sample();
        let err = rank_topsis(&t, &WeightVector::equal(2).unwrap(), &impacts("-,+,-")).unwrap_err();
        assert!(matches!(err, McdaError::InvalidDimension { what: "weights", .. }));
        let err = rank_topsis(&t, &WeightVector::equal(3).unwrap(), &impacts("-,+")).unwrap_err();
        assert!(matches!(err, McdaError::InvalidDimension { what: "impacts", .. }));
    }

    #[test]
    fn score_columns_follow_table_order() {
        let r = rank_topsis(&sample(), &WeightVector::equal(3).unwrap(), &impacts("-,+,-")).unwrap();
        let names: Vec<_> = r.score_columns().iter().map(|c| c.name).collect();
        assert_eq!(names, ["Distance_Ideal", "Distance_Anti_Ideal", "Topsis_Score", "Rank"]);
    }
}
