//! Normalization of sweep rows into per-block rates
//!
//! The rates are plotted against a fixed axis of eleven bit flip
//! probabilities. The axis is a constant of this tool, deliberately
//! independent of whatever the results file contains; the length check
//! at the plot boundary is what keeps the two honest.

use crate::common::{RateSeries, SweepRow};

/// Number of bit flip probabilities on the plot axis.
pub const NOISE_LEVEL_COUNT: usize = 11;

/// The fixed plot axis: 0.1 through 1.1 in steps of 0.1.
pub fn noise_levels() -> Vec<f64> {
    (1..=NOISE_LEVEL_COUNT).map(|i| i as f64 * 0.1).collect()
}

/// Divides each outcome count by its row's block count.
pub fn normalize_rows(rows: &[SweepRow]) -> RateSeries {
    let mut rates = RateSeries::default();

    for row in rows {
        let blocks = row.block_count as f64;
        rates.corrupted.push(row.corrupted / blocks);
        rates.mismatched.push(row.mismatched / blocks);
        rates.uncorrectable.push(row.uncorrectable / blocks);
    }

    rates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_covers_eleven_probabilities() {
        let levels = noise_levels();
        assert_eq!(levels.len(), NOISE_LEVEL_COUNT);
        assert!((levels[0] - 0.1).abs() < 1e-12);
        assert!((levels[10] - 1.1).abs() < 1e-12);
        for pair in levels.windows(2) {
            assert!((pair[1] - pair[0] - 0.1).abs() < 1e-12);
        }
    }

    #[test]
    fn normalization_divides_by_block_count() {
        let rows = [SweepRow {
            corrupted: 10.0,
            mismatched: 20.0,
            uncorrectable: 30.0,
            block_count: 5,
        }];

        let rates = normalize_rows(&rows);
        assert_eq!(rates.corrupted, vec![2.0]);
        assert_eq!(rates.mismatched, vec![4.0]);
        assert_eq!(rates.uncorrectable, vec![6.0]);
    }

    #[test]
    fn series_lengths_track_row_count() {
        let rows: Vec<SweepRow> = (1..=7)
            .map(|i| SweepRow {
                corrupted: i as f64,
                mismatched: i as f64,
                uncorrectable: i as f64,
                block_count: i,
            })
            .collect();

        let rates = normalize_rows(&rows);
        assert_eq!(rates.len(), 7);
        assert_eq!(rates.corrupted.len(), 7);
        assert_eq!(rates.mismatched.len(), 7);
        assert_eq!(rates.uncorrectable.len(), 7);
    }

    #[test]
    fn no_rows_normalize_to_empty_series() {
        let rates = normalize_rows(&[]);
        assert!(rates.is_empty());
    }
}
