//! ASCII table formatting for per-level rates
//!
//! Mirrors the chart contents in the terminal using the [`tabled`] crate.

use crate::common::RateSeries;
use tabled::{Table, Tabled};

/// One row of the rate table
#[derive(Debug, Clone, Tabled)]
pub struct RateEntry {
    /// Bit flip probability for this row
    #[tabled(rename = "Noise Level")]
    pub noise_level: String,
    /// Rate of blocks changed by the channel
    #[tabled(rename = "Corrupted")]
    pub corrupted: String,
    /// Rate of blocks decoded to the wrong data
    #[tabled(rename = "Mismatched")]
    pub mismatched: String,
    /// Rate of blocks rejected as double errors
    #[tabled(rename = "Uncorrectable")]
    pub uncorrectable: String,
}

impl RateEntry {
    fn new(noise_level: f64, corrupted: f64, mismatched: f64, uncorrectable: f64) -> Self {
        Self {
            noise_level: format!("{:.1}", noise_level),
            corrupted: format!("{:.4}", corrupted),
            mismatched: format!("{:.4}", mismatched),
            uncorrectable: format!("{:.4}", uncorrectable),
        }
    }
}

/// Formats the rate series as an ASCII table
///
/// `levels` and `rates` must have matching lengths; the caller validates
/// that before producing any output.
///
/// # Arguments
/// * `levels` - The bit flip probability for each row
/// * `rates` - The normalized rate series
/// * `title` - Optional title for the table
///
/// # Returns
/// A formatted ASCII table as a [`String`]
pub fn format_rate_table(levels: &[f64], rates: &RateSeries, title: Option<&str>) -> String {
    if rates.is_empty() {
        return "No data available".to_string();
    }

    let entries: Vec<RateEntry> = levels
        .iter()
        .zip(rates.corrupted.iter())
        .zip(rates.mismatched.iter())
        .zip(rates.uncorrectable.iter())
        .map(|(((&level, &corrupted), &mismatched), &uncorrectable)| {
            RateEntry::new(level, corrupted, mismatched, uncorrectable)
        })
        .collect();

    let table = Table::new(entries).to_string();

    if let Some(title) = title {
        format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
    } else {
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rates() -> RateSeries {
        RateSeries {
            corrupted: vec![0.5, 0.75],
            mismatched: vec![0.25, 0.5],
            uncorrectable: vec![0.125, 0.25],
        }
    }

    #[test]
    fn table_contains_headers_and_values() {
        let table = format_rate_table(&[0.1, 0.2], &sample_rates(), Some("Rates"));
        assert!(table.contains("Rates"));
        assert!(table.contains("Noise Level"));
        assert!(table.contains("Corrupted"));
        assert!(table.contains("Mismatched"));
        assert!(table.contains("Uncorrectable"));
        assert!(table.contains("0.5000"));
        assert!(table.contains("0.1250"));

        // Without a title only the table itself is emitted
        let table_no_title = format_rate_table(&[0.1, 0.2], &sample_rates(), None);
        assert!(!table_no_title.contains("Rates"));
        assert!(table_no_title.contains("Noise Level"));
    }

    #[test]
    fn empty_series_report_no_data() {
        let table = format_rate_table(&[], &RateSeries::default(), None);
        assert_eq!(table, "No data available");
    }
}
