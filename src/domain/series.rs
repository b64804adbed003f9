// Pure transforms over parsed usage series
use std::collections::HashSet;

use chrono::NaiveDate;

/// Running total of an ordered byte series; element i is the sum of
/// elements [0..=i]. Empty input produces empty output. Totals saturate
/// at `u64::MAX` rather than wrapping, so the output stays non-decreasing.
pub fn cumulative_sum(values: &[u64]) -> Vec<u64> {
    let mut running = 0u64;
    values
        .iter()
        .map(|value| {
            running = running.saturating_add(*value);
            running
        })
        .collect()
}

/// Reorder (name, bytes) pairs by bytes descending. The sort is stable, so
/// equal byte counts keep their original relative order, and it moves whole
/// pairs; the name/value association is never broken.
pub fn rank_descending<N>(pairs: &mut [(N, u64)]) {
    pairs.sort_by(|a, b| b.1.cmp(&a.1));
}

/// Calendar dates inside the inclusive [min, max] range of the observed
/// series that carry no observation, in ascending order. These become axis
/// range breaks so a calendar axis can skip days without traffic. Empty and
/// single-date input yield an empty set.
pub fn missing_dates(observed: &[NaiveDate]) -> Vec<NaiveDate> {
    let (Some(&first), Some(&last)) = (observed.iter().min(), observed.iter().max()) else {
        return Vec::new();
    };

    let seen: HashSet<NaiveDate> = observed.iter().copied().collect();
    let mut missing = Vec::new();
    let mut day = first;
    while day < last {
        if !seen.contains(&day) {
            missing.push(day);
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_cumulative_sum_basics() {
        assert!(cumulative_sum(&[]).is_empty());
        assert_eq!(cumulative_sum(&[1000, 2000]), vec![1000, 3000]);

        let input = [5, 0, 12, 3];
        let output = cumulative_sum(&input);
        assert_eq!(output.len(), input.len());
        assert_eq!(output[0], input[0]);
        for window in output.windows(2) {
            assert!(window[1] >= window[0]);
        }
    }

    #[test]
    fn test_cumulative_sum_saturates_instead_of_wrapping() {
        let output = cumulative_sum(&[u64::MAX, 1]);
        assert_eq!(output, vec![u64::MAX, u64::MAX]);

        let output = cumulative_sum(&[u64::MAX - 5, 10, 1]);
        assert_eq!(output, vec![u64::MAX - 5, u64::MAX, u64::MAX]);
        for window in output.windows(2) {
            assert!(window[1] >= window[0]);
        }
    }

    #[test]
    fn test_rank_descending_sorts_pairs() {
        let mut pairs = vec![
            ("small".to_string(), 10),
            ("large".to_string(), 5000),
            ("medium".to_string(), 700),
        ];
        rank_descending(&mut pairs);
        assert_eq!(
            pairs,
            vec![
                ("large".to_string(), 5000),
                ("medium".to_string(), 700),
                ("small".to_string(), 10),
            ]
        );
    }

    #[test]
    fn test_rank_descending_is_stable_for_ties() {
        let mut pairs = vec![
            ("first".to_string(), 42),
            ("peak".to_string(), 9000),
            ("second".to_string(), 42),
        ];
        rank_descending(&mut pairs);
        assert_eq!(pairs[0].0, "peak");
        assert_eq!(pairs[1].0, "first");
        assert_eq!(pairs[2].0, "second");
    }

    #[test]
    fn test_missing_dates_empty_and_single_row() {
        assert!(missing_dates(&[]).is_empty());
        assert!(missing_dates(&[date("2024-01-15")]).is_empty());
    }

    #[test]
    fn test_missing_dates_fills_interior_gaps() {
        let observed = [date("2024-01-01"), date("2024-01-03")];
        assert_eq!(missing_dates(&observed), vec![date("2024-01-02")]);
    }

    #[test]
    fn test_missing_dates_counts_for_sparse_range() {
        // 10 calendar days spanned, 4 observed.
        let observed = [
            date("2024-02-01"),
            date("2024-02-04"),
            date("2024-02-05"),
            date("2024-02-10"),
        ];
        let missing = missing_dates(&observed);
        assert_eq!(missing.len(), 10 - 4);
        for day in &missing {
            assert!(!observed.contains(day));
            assert!(*day > observed[0] && *day < observed[3]);
        }
    }

    #[test]
    fn test_missing_dates_handles_unordered_input() {
        let observed = [date("2024-03-05"), date("2024-03-03")];
        assert_eq!(missing_dates(&observed), vec![date("2024-03-04")]);
    }
}
