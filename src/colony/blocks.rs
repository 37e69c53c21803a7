//! Consecutive period block finder.
//!
//! A multi-period activity needs a run of free periods whose indices step
//! by exactly 1. This is what keeps a duration-2 lab from being split
//! across a lunch break or a non-adjacent pair of free slots.

use crate::models::Period;

/// Enumerates every window of `duration` pairwise-adjacent periods within
/// the given free set.
///
/// The input need not be sorted; windows are produced in ascending index
/// order. Returns an empty list when no window fits, including for a zero
/// `duration` or a free set smaller than `duration`.
pub fn consecutive_blocks(duration: usize, free_periods: &[Period]) -> Vec<Vec<Period>> {
    if duration == 0 || free_periods.len() < duration {
        return Vec::new();
    }

    let mut sorted: Vec<&Period> = free_periods.iter().collect();
    sorted.sort_by_key(|p| p.index);

    let mut blocks = Vec::new();
    for window in sorted.windows(duration) {
        if window.windows(2).all(|w| w[0].precedes(w[1])) {
            blocks.push(window.iter().map(|&p| p.clone()).collect());
        }
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn periods(indices: &[usize]) -> Vec<Period> {
        indices
            .iter()
            .map(|&i| Period::new(format!("P{i}"), i))
            .collect()
    }

    #[test]
    fn test_single_period_blocks() {
        let blocks = consecutive_blocks(1, &periods(&[0, 2, 5]));
        assert_eq!(blocks.len(), 3);
        assert!(blocks.iter().all(|b| b.len() == 1));
    }

    #[test]
    fn test_adjacent_runs_only() {
        // Free: 0 1 2 4 5 — duration 2 fits at (0,1), (1,2), (4,5).
        let blocks = consecutive_blocks(2, &periods(&[0, 1, 2, 4, 5]));
        let starts: Vec<usize> = blocks.iter().map(|b| b[0].index).collect();
        assert_eq!(starts, vec![0, 1, 4]);
        for block in &blocks {
            assert!(block.windows(2).all(|w| w[1].index == w[0].index + 1));
        }
    }

    #[test]
    fn test_gap_blocks_nothing() {
        // Two free periods split by a gap cannot host a duration-3 activity.
        assert!(consecutive_blocks(3, &periods(&[0, 1])).is_empty());
        assert!(consecutive_blocks(2, &periods(&[0, 2])).is_empty());
    }

    #[test]
    fn test_unsorted_input() {
        let blocks = consecutive_blocks(3, &periods(&[4, 2, 3]));
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0][0].index, 2);
        assert_eq!(blocks[0][2].index, 4);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(consecutive_blocks(0, &periods(&[0, 1])).is_empty());
        assert!(consecutive_blocks(2, &[]).is_empty());
    }
}
