//! Entry point for the noise sweep analyzer.
//!
//! Reads the results file written by make-correction-stats, normalizes
//! each outcome column by its row's block count, prints the per-level
//! rates as a table and renders them as an overlaid line chart.
//!
//! Module organization:
//! - `parsing`: results file loading and validation
//! - `analysis`: normalization and the fixed probability axis
//! - `common`: data structures, plotting, table formatting

mod analysis;
mod common;
mod parsing;

use analysis::{noise_levels, normalize_rows};
use argh::FromArgs;
use common::plots::create_rates_plot;
use common::tables::format_rate_table;
use parsing::parse_sweep_results;
use std::path::PathBuf;

/// Analyzer for Hamming(8,4) noise sweep results
#[derive(FromArgs, Debug)]
pub struct Args {
    /// results file to analyze (default: result.txt)
    #[argh(option, short = 'i', default = "PathBuf::from(\"result.txt\")")]
    input: PathBuf,

    /// path of the chart to write (default: correction-rates.png)
    #[argh(option, short = 'o', default = "PathBuf::from(\"correction-rates.png\")")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();

    let rows = parse_sweep_results(&args.input)?;
    println!(
        "Parsed {} sweep rows from {}",
        rows.len(),
        args.input.display()
    );

    let rates = normalize_rows(&rows);
    let levels = noise_levels();

    if rates.len() != levels.len() {
        return Err(format!(
            "{} has {} rows but the sweep covers {} noise levels",
            args.input.display(),
            rates.len(),
            levels.len()
        )
        .into());
    }

    println!();
    println!(
        "{}",
        format_rate_table(&levels, &rates, Some("Per-block outcome rates"))
    );
    println!();

    create_rates_plot(&levels, &rates, &args.output)?;
    println!("Saved rate chart to {}", args.output.display());

    Ok(())
}
