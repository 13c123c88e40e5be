//! Noise sweep runner for the Hamming(8,4) codec.
//!
//! Simulates transmission of random 4-bit blocks through a binary
//! symmetric channel at eleven bit flip probabilities and writes one row
//! of outcome counts per probability to a results file. The companion
//! analyze-correction-stats tool turns that file into a rate chart.

mod commands;

use argh::FromArgs;
use commands::sweep::{run_sweep, NOISE_LEVELS};
use std::path::PathBuf;

/// Noise sweep runner for the Hamming(8,4) codec
#[derive(FromArgs, Debug)]
pub struct Args {
    /// number of blocks to simulate per noise level (default: 10000)
    #[argh(option, short = 'b', default = "10000")]
    blocks: u64,

    /// path of the results file to write (default: result.txt)
    #[argh(option, short = 'o', default = "PathBuf::from(\"result.txt\")")]
    output: PathBuf,

    /// RNG seed for a reproducible sweep
    #[argh(option, short = 's')]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();

    if args.blocks == 0 {
        return Err("Block count must be greater than zero".into());
    }

    println!("Starting noise sweep:");
    println!("Blocks per level: {}", args.blocks);
    println!("Noise levels: {} (0.1 through 1.1)", NOISE_LEVELS.len());
    println!("Output file: {}", args.output.display());
    if let Some(seed) = args.seed {
        println!("Seed: {}", seed);
    }

    run_sweep(&args)
}
