//! Rank-based k-sparse inhibition.
//!
//! Selects approximately the top `active_ratio * H` atoms by raw activation.
//! The normative rule is pairwise: atom i is active iff fewer than
//! `active_ratio * H` other atoms have activation >= its own. Ties count on
//! both sides, so a tied cluster straddling the cutoff is admitted or
//! rejected as a whole and the realized active count can deviate from the
//! ideal by the cluster size.
//!
//! Implemented with a descending sort and equal-value grouping, O(H log H)
//! instead of the O(H²) pairwise count, with identical results including tie
//! handling: every member of a tied group shares the rank of the group's last
//! sorted position.

use std::cmp::Ordering;

/// Compute firing states from raw activations.
///
/// `states[i]` is true iff `#{j != i : activations[j] >= activations[i]}`
/// is below `active_ratio * H`.
///
/// NaN activations are not defended against; the comparator treats
/// incomparable pairs as equal and the resulting states are unspecified,
/// matching the rest of the crate's divergence policy.
///
/// # Example
///
/// ```
/// use gsdr::compete::rank_sparse_states;
///
/// let activations = vec![0.9, 0.1, 0.5, 0.3];
/// let states = rank_sparse_states(&activations, 0.5);
/// assert_eq!(states, vec![true, false, true, false]);
/// ```
pub fn rank_sparse_states(activations: &[f32], active_ratio: f32) -> Vec<bool> {
    let h = activations.len();
    let cutoff = active_ratio * h as f32;

    let mut order: Vec<usize> = (0..h).collect();
    order.sort_unstable_by(|&a, &b| {
        activations[b]
            .partial_cmp(&activations[a])
            .unwrap_or(Ordering::Equal)
    });

    let mut states = vec![false; h];
    let mut start = 0;
    while start < h {
        let value = activations[order[start]];
        let mut end = start + 1;
        while end < h && activations[order[end]] == value {
            end += 1;
        }

        // Shared rank for the tied group: strictly-greater count plus the
        // other members of the group, i.e. end - 1.
        let active = ((end - 1) as f32) < cutoff;
        for &i in &order[start..end] {
            states[i] = active;
        }
        start = end;
    }

    states
}

/// Ideal number of winners for a given population size and ratio.
///
/// The realized count equals this whenever `active_ratio * h` is an integer
/// and no activations tie at the cutoff.
pub fn ideal_active_count(h: usize, active_ratio: f32) -> usize {
    (active_ratio * h as f32).floor() as usize
}
