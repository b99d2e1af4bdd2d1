//! Minimum-rank assignment.
//!
//! Tied scores share the lowest ordinal they would occupy and the next
//! distinct score skips ahead: `[0.9, 0.9, 0.5]` descending → `[1, 1, 3]`.
//! Ties are exact equality of the computed scores.

use core::cmp::Ordering;

/// Which end of the score range is best.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankOrder {
    /// Higher score is better (TOPSIS closeness).
    Descending,
    /// Lower score is better (VIKOR S, R, Q).
    Ascending,
}

/// Rank `scores` (1 = best) without reordering them; output is parallel to input.
pub fn min_rank(scores: &[f64], order: RankOrder) -> Vec<u32> {
    let mut idx: Vec<usize> = (0..scores.len()).collect();
    // Stable sort: equal scores keep table order.
    idx.sort_by(|&a, &b| cmp_scores(scores[a], scores[b], order));

    let mut ranks = vec![0u32; scores.len()];
    let mut group_rank = 1u32;
    for (pos, &i) in idx.iter().enumerate() {
        if pos > 0 && scores[i] != scores[idx[pos - 1]] {
            group_rank = pos as u32 + 1;
        }
        ranks[i] = group_rank;
    }
    ranks
}

/// Index of the first alternative (in table order) holding rank 1.
pub fn first_best(ranks: &[u32]) -> Option<usize> {
    ranks.iter().position(|&r| r == 1)
}

/// Indices sorted best-first; ties keep table order.
pub fn order_by_rank(ranks: &[u32]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..ranks.len()).collect();
    idx.sort_by_key(|&i| ranks[i]);
    idx
}

fn cmp_scores(a: f64, b: f64, order: RankOrder) -> Ordering {
    let o = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
    match order {
        RankOrder::Ascending => o,
        RankOrder::Descending => o.reverse(),
    }
}
