//! File parsing for noise sweep results
//!
//! This module handles loading the whitespace-separated results file
//! written by make-correction-stats: one row per noise level, three
//! outcome counts followed by the number of simulated blocks.

use crate::common::SweepRow;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading the results file
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Line {line}: expected at least 4 fields, found {found}")]
    MissingFields { line: usize, found: usize },

    #[error("Line {line}: invalid numeric field '{token}'")]
    InvalidNumber { line: usize, token: String },

    #[error("Line {line}: block count must be greater than zero")]
    ZeroBlockCount { line: usize },
}

type Result<T> = core::result::Result<T, ParsingError>;

/// Parse the results file into sweep rows
///
/// Each line must carry at least four whitespace-separated numeric
/// tokens: three outcome counts, then the block count used as the
/// normalization divisor. Tokens past the fourth are ignored. The first
/// malformed line aborts the parse; there is no recovery.
///
/// # Arguments
/// * `file_path` - Path to the results file
///
/// # Returns
/// * `Ok(Vec<SweepRow>)` - One row per input line (empty for an empty file)
/// * `Err(ParsingError)` - If reading or parsing failed
pub fn parse_sweep_results(file_path: &Path) -> Result<Vec<SweepRow>> {
    let contents = fs::read_to_string(file_path)?;
    let mut rows = Vec::new();

    for (index, line) in contents.lines().enumerate() {
        rows.push(parse_line(line, index + 1)?);
    }

    Ok(rows)
}

fn parse_line(line: &str, line_number: usize) -> Result<SweepRow> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(ParsingError::MissingFields {
            line: line_number,
            found: fields.len(),
        });
    }

    let count = |token: &str| -> Result<f64> {
        token.parse().map_err(|_| ParsingError::InvalidNumber {
            line: line_number,
            token: token.to_string(),
        })
    };

    // The divisor is an integer; rejecting zero here keeps the division
    // in normalization from ever producing infinity.
    let block_count: u64 = fields[3].parse().map_err(|_| ParsingError::InvalidNumber {
        line: line_number,
        token: fields[3].to_string(),
    })?;
    if block_count == 0 {
        return Err(ParsingError::ZeroBlockCount { line: line_number });
    }

    Ok(SweepRow {
        corrupted: count(fields[0])?,
        mismatched: count(fields[1])?,
        uncorrectable: count(fields[2])?,
        block_count,
    })
}
