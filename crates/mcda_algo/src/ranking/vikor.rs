//! crates/mcda_algo/src/ranking/vikor.rs
//! VIKOR compromise ranking: group utility S, individual regret R, compromise
//! index Q (all lower-is-better), then the acceptance conditions
//! C1 (acceptable advantage) and C2 (acceptable stability) that decide the
//! compromise set.
//!
//! Rows are never reordered. `verbose` only changes the level of the audit log.

use mcda_core::{
    min_rank,
    rank::{first_best, order_by_rank},
    validate::check_dimensions,
    CriteriaTable, ImpactVector, McdaResult, RankOrder, VikorParams, WeightVector, EPSILON,
};
use tracing::{debug, info, warn};

use super::ideal_points;
use crate::result::{CompromiseKind, CompromiseStatus, MethodDetail, RankingResult, VikorScores};

/// Audit events: `info!` when verbose, `debug!` otherwise.
macro_rules! audit {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            info!(target: "mcda::vikor", $($arg)+);
        } else {
            debug!(target: "mcda::vikor", $($arg)+);
        }
    };
}

pub fn rank_vikor(
    table: &CriteriaTable,
    weights: &WeightVector,
    impacts: &ImpactVector,
    v: f64,
    verbose: bool,
) -> McdaResult<RankingResult> {
    let v = VikorParams::new(v)?.v();
    check_dimensions(table, weights, impacts)?;

    let (ideal, anti_ideal) = ideal_points(table, impacts);
    let w = weights.as_slice();

    let (s, r): (Vec<f64>, Vec<f64>) = table
        .rows()
        .iter()
        .map(|row| {
            row.iter().enumerate().fold((0.0, f64::NEG_INFINITY), |(sum, max), (j, &x)| {
                let d = w[j] * (ideal[j] - x) / (ideal[j] - anti_ideal[j] + EPSILON);
                (sum + d, max.max(d))
            })
        })
        .unzip();

    let (s_star, s_minus) = extremes(&s);
    let (r_star, r_minus) = extremes(&r);
    let q: Vec<f64> = s
        .iter()
        .zip(&r)
        .map(|(&si, &ri)| {
            v * (si - s_star) / (s_minus - s_star + EPSILON)
                + (1.0 - v) * (ri - r_star) / (r_minus - r_star + EPSILON)
        })
        .collect();

    let q_rank = min_rank(&q, RankOrder::Ascending);
    let s_rank = min_rank(&s, RankOrder::Ascending);
    let r_rank = min_rank(&r, RankOrder::Ascending);

    audit!(verbose, ?s, ?r, ?q, v, "VIKOR scores");

    let status = acceptance(table, &q, &q_rank, &s_rank, &r_rank, verbose);
    let mut is_compromise = vec![false; q.len()];
    for &i in &status.compromise_set {
        is_compromise[i] = true;
    }

    Ok(RankingResult {
        table: table.clone(),
        weights: weights.clone(),
        impacts: impacts.clone(),
        rank: q_rank.clone(),
        consistency: None,
        detail: MethodDetail::Vikor(VikorScores {
            s,
            r,
            q,
            s_rank,
            r_rank,
            q_rank,
            is_compromise,
            status,
        }),
    })
}

/// `(min, max)` of a non-empty slice.
fn extremes(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)))
}

// ---------------- Acceptance conditions ---------------------------------------------------------

fn acceptance(
    table: &CriteriaTable,
    q: &[f64],
    q_rank: &[u32],
    s_rank: &[u32],
    r_rank: &[u32],
    verbose: bool,
) -> CompromiseStatus {
    let m = q.len();
    let dq = if m > 1 { 1.0 / (m - 1) as f64 } else { 1.0 };

    // Table is non-empty, so every rank vector holds a 1.
    let by_q = order_by_rank(q_rank);
    let best_by_q = by_q[0];
    let best_by_s = first_best(s_rank).unwrap_or(best_by_q);
    let best_by_r = first_best(r_rank).unwrap_or(best_by_q);
    let best_by_s_tied = s_rank.iter().filter(|&&k| k == 1).count() > 1;
    let best_by_r_tied = r_rank.iter().filter(|&&k| k == 1).count() > 1;

    let q_advantage = by_q.get(1).map(|&second| q[second] - q[best_by_q]);
    let c1_satisfied = q_advantage.map_or(true, |adv| adv >= dq);
    let c2_satisfied = s_rank[best_by_q] == 1 || r_rank[best_by_q] == 1;

    let (kind, compromise_set) = if c1_satisfied && c2_satisfied {
        (CompromiseKind::Single, vec![best_by_q])
    } else if !c1_satisfied {
        let set = by_q.iter().copied().filter(|&i| q[i] - q[best_by_q] < dq).collect();
        (CompromiseKind::AdvantageNotAcceptable, set)
    } else {
        if best_by_s_tied || best_by_r_tied {
            warn!(
                target: "mcda::vikor",
                best_by_s_tied,
                best_by_r_tied,
                "several alternatives share the best S or R; the first in table order joins the compromise set"
            );
        }
        let mut set = vec![best_by_q];
        for i in [best_by_s, best_by_r] {
            if !set.contains(&i) {
                set.push(i);
            }
        }
        set.sort_by_key(|&i| (q_rank[i], i));
        (CompromiseKind::StabilityNotAcceptable, set)
    };

    let narrative = match kind {
        CompromiseKind::Single => "Single compromise solution (C1 and C2 satisfied)".to_string(),
        CompromiseKind::AdvantageNotAcceptable => format!(
            "Multiple compromise solutions: {} alternatives (C1 not satisfied)",
            compromise_set.len()
        ),
        CompromiseKind::StabilityNotAcceptable => format!(
            "Compromise set: {} alternatives (C2 not satisfied)",
            compromise_set.len()
        ),
    };

    let members: Vec<&str> = compromise_set.iter().map(|&i| table.alternatives()[i].as_str()).collect();
    audit!(
        verbose,
        dq,
        q_advantage = ?q_advantage,
        c1_satisfied,
        c2_satisfied,
        best_by_q = %table.alternatives()[best_by_q],
        best_by_s = %table.alternatives()[best_by_s],
        best_by_r = %table.alternatives()[best_by_r],
        compromise = ?members,
        "{narrative}"
    );

    CompromiseStatus {
        c1_satisfied,
        c2_satisfied,
        dq,
        q_advantage,
        best_by_q,
        best_by_s,
        best_by_r,
        best_by_s_tied,
        best_by_r_tied,
        compromise_set,
        kind,
        narrative,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcda_core::{Impact, McdaError};

    fn benefit(n: usize) -> ImpactVector {
        ImpactVector::all(n, Impact::Benefit)
    }

    fn four_alternatives() -> CriteriaTable {
        CriteriaTable::from_columns(vec![
            ("C1", vec![7.0, 8.0, 6.0, 9.0]),
            ("C2", vec![9.0, 7.0, 8.0, 6.0]),
            ("C3", vec![9.0, 6.0, 8.0, 7.0]),
        ])
        .unwrap()
    }

    fn weights_033() -> WeightVector {
        WeightVector::from_raw(vec![0.33, 0.33, 0.34]).unwrap()
    }

    #[test]
    fn four_alternative_example_has_single_compromise() {
        let r = rank_vikor(&four_alternatives(), &weights_033(), &benefit(3), 0.5, false).unwrap();
        let vk = r.vikor().unwrap();
        assert_eq!(r.len(), 4);
        assert_eq!(vk.s.len(), 4);
        assert_eq!(r.rank, vec![1, 4, 2, 3]);
        assert_eq!(r.rank, vk.q_rank);
        assert!(vk.is_compromise.iter().any(|&c| c));

        let st = r.vikor_status().unwrap();
        assert!((st.dq - 1.0 / 3.0).abs() < 1e-12);
        assert!(st.c1_satisfied && st.c2_satisfied);
        assert_eq!(st.kind, CompromiseKind::Single);
        assert_eq!(st.compromise_set, vec![0]);
        assert_eq!(st.narrative, "Single compromise solution (C1 and C2 satisfied)");
        assert!(!st.best_by_s_tied);
    }

    #[test]
    fn stability_counts_any_shared_best_rank() {
        // S-best shared by A1, A3, A4; R-best shared by A2, A3. Q-best is A3.
        let t = CriteriaTable::from_rows(vec![
            vec![4.0, 10.0],
            vec![6.0, 7.0],
            vec![8.0, 6.0],
            vec![10.0, 4.0],
        ])
        .unwrap();
        let r = rank_vikor(&t, &WeightVector::equal(2).unwrap(), &benefit(2), 0.5, false).unwrap();
        let vk = r.vikor().unwrap();
        assert_eq!(vk.s_rank, vec![1, 4, 1, 1]);
        assert_eq!(vk.r_rank, vec![3, 1, 1, 3]);
        assert_eq!(vk.q_rank, vec![3, 2, 1, 3]);

        let st = &vk.status;
        assert_eq!((st.best_by_q, st.best_by_s, st.best_by_r), (2, 0, 1));
        assert!(st.best_by_s_tied && st.best_by_r_tied);
        assert!(st.c1_satisfied);
        assert!(st.c2_satisfied);
        assert_eq!(st.kind, CompromiseKind::Single);
        assert_eq!(st.compromise_set, vec![2]);
    }

    #[test]
    fn tied_best_utility_contributes_first_in_table_order() {
        // A1 and A5 are identical and share the best S.
        let t = CriteriaTable::from_rows(vec![
            vec![3.0, 10.0],
            vec![7.0, 4.0],
            vec![9.0, 1.0],
            vec![5.0, 6.0],
            vec![3.0, 10.0],
        ])
        .unwrap();
        let r = rank_vikor(&t, &WeightVector::equal(2).unwrap(), &benefit(2), 0.5, false).unwrap();
        let st = r.vikor_status().unwrap();
        assert_eq!((st.best_by_q, st.best_by_s, st.best_by_r), (1, 0, 3));
        assert!(st.best_by_s_tied && !st.best_by_r_tied);
        assert!(st.c1_satisfied && !st.c2_satisfied);
        assert_eq!(st.kind, CompromiseKind::StabilityNotAcceptable);
        assert_eq!(st.compromise_set, vec![1, 3, 0]);
        assert_eq!(r.vikor().unwrap().is_compromise, vec![true, true, false, true, false]);
    }

    #[test]
    fn v_zero_follows_regret_and_v_one_follows_utility() {
        let t = four_alternatives();
        let r0 = rank_vikor(&t, &weights_033(), &benefit(3), 0.0, false).unwrap();
        let vk0 = r0.vikor().unwrap();
        assert_eq!(vk0.q_rank, vk0.r_rank);

        let r1 = rank_vikor(&t, &weights_033(), &benefit(3), 1.0, false).unwrap();
        let vk1 = r1.vikor().unwrap();
        assert_eq!(vk1.q_rank, vk1.s_rank);
    }

    #[test]
    fn verbose_does_not_change_values() {
        let t = four_alternatives();
        let quiet = rank_vikor(&t, &weights_033(), &benefit(3), 0.5, false).unwrap();
        let loud = rank_vikor(&t, &weights_033(), &benefit(3), 0.5, true).unwrap();
        assert_eq!(quiet, loud);
    }

    #[test]
    fn close_competitors_fail_c1() {
        let t = CriteriaTable::from_rows(vec![vec![10.0, 1.0], vec![9.0, 2.0], vec![1.0, 10.0]]).unwrap();
        let r = rank_vikor(&t, &WeightVector::equal(2).unwrap(), &benefit(2), 0.5, false).unwrap();
        let vk = r.vikor().unwrap();
        assert_eq!(vk.q_rank, vec![2, 1, 2]);

        let st = &vk.status;
        assert!(!st.c1_satisfied);
        assert_eq!(st.kind, CompromiseKind::AdvantageNotAcceptable);
        assert_eq!(st.compromise_set, vec![1, 0, 2]);
        assert_eq!(vk.is_compromise, vec![true, true, true]);
        assert_eq!(st.narrative, "Multiple compromise solutions: 3 alternatives (C1 not satisfied)");
    }

    #[test]
    fn unstable_leader_fails_c2() {
        let t = CriteriaTable::from_rows(vec![
            vec![4.0, 4.0, 3.0],
            vec![2.0, 9.0, 9.0],
            vec![7.0, 1.0, 2.0],
            vec![6.0, 2.0, 9.0],
        ])
        .unwrap();
        let r = rank_vikor(&t, &WeightVector::equal(3).unwrap(), &benefit(3), 0.5, false).unwrap();
        let st = r.vikor_status().unwrap();
        assert_eq!((st.best_by_q, st.best_by_s, st.best_by_r), (3, 1, 0));
        assert!(st.c1_satisfied);
        assert!(!st.c2_satisfied);
        assert_eq!(st.kind, CompromiseKind::StabilityNotAcceptable);
        assert_eq!(st.compromise_set, vec![3, 1, 0]);
        assert_eq!(r.vikor().unwrap().is_compromise, vec![true, true, false, true]);
        assert_eq!(st.narrative, "Compromise set: 3 alternatives (C2 not satisfied)");
    }

    #[test]
    fn single_alternative_is_its_own_compromise() {
        let t = CriteriaTable::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        let r = rank_vikor(&t, &WeightVector::equal(2).unwrap(), &benefit(2), 0.5, false).unwrap();
        let st = r.vikor_status().unwrap();
        assert_eq!(st.dq, 1.0);
        assert_eq!(st.q_advantage, None);
        assert_eq!(st.kind, CompromiseKind::Single);
        assert_eq!(r.rank, vec![1]);
    }

    #[test]
    fn cost_criteria_invert_the_reference_points() {
        let t = CriteriaTable::from_rows(vec![vec![1.0], vec![5.0]]).unwrap();
        let imp = ImpactVector::parse_list("-").unwrap();
        let r = rank_vikor(&t, &WeightVector::equal(1).unwrap(), &imp, 0.5, false).unwrap();
        assert_eq!(r.rank, vec![1, 2]);
    }

    #[test]
    fn rejects_v_outside_unit_interval() {
        let err = rank_vikor(&four_alternatives(), &weights_033(), &benefit(3), 1.2, false).unwrap_err();
        assert!(matches!(err, McdaError::InvalidParameter { name: "v", .. }));
    }

    #[test]
    fn score_columns_are_named() {
        let r = rank_vikor(&four_alternatives(), &weights_033(), &benefit(3), 0.5, false).unwrap();
        let names: Vec<_> = r.score_columns().iter().map(|c| c.name).collect();
        assert_eq!(names, ["S", "R", "Q", "Q_Rank", "S_Rank", "R_Rank", "Rank", "Is_Compromise"]);
    }
}
