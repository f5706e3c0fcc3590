//! Contiguous-run consolidation for episode lists.

use tracing::warn;

/// Collapse episode numbers into contiguous-run display tokens.
///
/// The input is sorted ascending and scanned by run key (`value - position`
/// is constant across one contiguous run). Runs of two or more render as
/// `"{first}→{last}"`, isolated numbers stay bare, and runs come out in
/// ascending order, so a fixed input set always renders identically.
///
/// Duplicate numbers have no defined rendering; they are flagged with a
/// warning and left to break the run they appear in rather than silently
/// deduplicated.
pub fn consolidate(episodes: &[u32]) -> Vec<String> {
    if episodes.is_empty() {
        return Vec::new();
    }

    let mut sorted = episodes.to_vec();
    sorted.sort_unstable();

    if let Some(pair) = sorted.windows(2).find(|w| w[0] == w[1]) {
        warn!(
            episode = pair[0],
            "Duplicate episode number in consolidation input"
        );
    }

    let run_key = |index: usize| sorted[index] as i64 - index as i64;

    let mut tokens = Vec::new();
    let mut run_start = 0;
    for i in 1..=sorted.len() {
        if i == sorted.len() || run_key(i) != run_key(run_start) {
            let first = sorted[run_start];
            let last = sorted[i - 1];
            if first == last {
                tokens.push(first.to_string());
            } else {
                tokens.push(format!("{}→{}", first, last));
            }
            run_start = i;
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_run_then_isolated_number() {
        assert_eq!(consolidate(&[1, 2, 3, 5]), vec!["1→3", "5"]);
    }

    #[test]
    fn test_unsorted_input_is_sorted_first() {
        assert_eq!(consolidate(&[10, 1, 11, 2, 9]), vec!["1→2", "9→11"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(consolidate(&[]).is_empty());
    }

    #[test]
    fn test_single_episode() {
        assert_eq!(consolidate(&[7]), vec!["7"]);
    }

    #[test]
    fn test_single_fully_contiguous_run() {
        assert_eq!(consolidate(&[4, 5, 6, 7]), vec!["4→7"]);
    }

    #[test]
    fn test_all_isolated() {
        assert_eq!(consolidate(&[2, 4, 6]), vec!["2", "4", "6"]);
    }

    #[test]
    fn test_two_member_run_uses_arrow() {
        assert_eq!(consolidate(&[8, 9]), vec!["8→9"]);
    }

    #[test]
    fn test_duplicates_break_the_run_deterministically() {
        // Duplicates are flagged, not deduplicated; the scan output stays
        // deterministic.
        assert_eq!(consolidate(&[1, 1, 2]), vec!["1", "1→2"]);
        assert_eq!(consolidate(&[2, 2]), vec!["2", "2"]);
    }

    #[test]
    fn test_repeated_calls_render_identically() {
        let input = [3, 14, 1, 5, 9, 2, 6, 4];
        assert_eq!(consolidate(&input), consolidate(&input));
        assert_eq!(consolidate(&input), vec!["1→6", "9", "14"]);
    }
}
