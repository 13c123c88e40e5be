//! The noise sweep itself: simulate, count, write the results file.

use super::shared::LevelOutcome;
use crate::Args;
use hamming84::{decode, encode, flip_bits, DecodeError};
use indicatif::ProgressBar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Bit flip probabilities covered by the sweep, matching the analyzer's
/// fixed plot axis.
pub const NOISE_LEVELS: [f64; 11] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1];

/// Runs the full sweep and writes one row per noise level.
///
/// Row format: `corrupted mismatched uncorrectable block_count`,
/// whitespace-separated. A mismatched count includes the uncorrectable
/// blocks; a corrupted block that decodes back to its original data
/// counts only as corrupted.
pub fn run_sweep(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let progress = ProgressBar::new(NOISE_LEVELS.len() as u64 * args.blocks);

    let file = File::create(&args.output)?;
    let mut writer = BufWriter::new(file);

    for &noise_level in NOISE_LEVELS.iter() {
        let outcome = simulate_level(noise_level, args.blocks, &mut rng, &progress);
        progress.println(format!(
            "p={:.1}: {} corrupted, {} mismatched, {} uncorrectable",
            outcome.noise_level, outcome.corrupted, outcome.mismatched, outcome.uncorrectable
        ));
        writeln!(
            writer,
            "{} {} {} {}",
            outcome.corrupted, outcome.mismatched, outcome.uncorrectable, outcome.block_count
        )?;
    }

    writer.flush()?;
    progress.finish_and_clear();

    println!(
        "Wrote {} noise levels to {}",
        NOISE_LEVELS.len(),
        args.output.display()
    );
    Ok(())
}

/// Simulates `blocks` random blocks at a single noise level.
fn simulate_level(
    noise_level: f64,
    blocks: u64,
    rng: &mut StdRng,
    progress: &ProgressBar,
) -> LevelOutcome {
    let mut outcome = LevelOutcome {
        noise_level,
        corrupted: 0,
        mismatched: 0,
        uncorrectable: 0,
        block_count: blocks,
    };

    for _ in 0..blocks {
        let data = rng.gen::<u8>() & 0x0F;
        let code = encode(data);
        let distorted = flip_bits(code, noise_level, rng);

        if distorted != code {
            outcome.corrupted += 1;
        }

        match decode(distorted) {
            Ok(decoded) if decoded == data => {}
            Ok(_) => outcome.mismatched += 1,
            Err(DecodeError::DoubleError) => {
                outcome.mismatched += 1;
                outcome.uncorrectable += 1;
            }
        }

        progress.inc(1);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_level(noise_level: f64, blocks: u64) -> LevelOutcome {
        let mut rng = StdRng::seed_from_u64(1234);
        let progress = ProgressBar::hidden();
        simulate_level(noise_level, blocks, &mut rng, &progress)
    }

    #[test]
    fn noiseless_level_has_no_outcomes() {
        let outcome = test_level(0.0, 500);
        assert_eq!(outcome.corrupted, 0);
        assert_eq!(outcome.mismatched, 0);
        assert_eq!(outcome.uncorrectable, 0);
        assert_eq!(outcome.block_count, 500);
    }

    #[test]
    fn counts_stay_consistent() {
        for &noise_level in NOISE_LEVELS.iter() {
            let outcome = test_level(noise_level, 1000);
            assert!(outcome.uncorrectable <= outcome.mismatched);
            assert!(outcome.mismatched <= outcome.corrupted);
            assert!(outcome.corrupted <= outcome.block_count);
        }
    }

    #[test]
    fn saturated_level_corrupts_every_block() {
        // At p >= 1 every codeword becomes its complement. The
        // complement is itself a valid codeword, so decoding accepts it
        // and returns the wrong data without flagging a double error.
        let outcome = test_level(1.1, 300);
        assert_eq!(outcome.corrupted, 300);
        assert_eq!(outcome.mismatched, 300);
        assert_eq!(outcome.uncorrectable, 0);
    }

    #[test]
    fn sweep_writes_one_row_per_level() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("result.txt");
        let args = Args {
            blocks: 50,
            output: output.clone(),
            seed: Some(9),
        };

        run_sweep(&args).expect("sweep should succeed");

        let contents = std::fs::read_to_string(&output).expect("results file");
        let rows: Vec<&str> = contents.lines().collect();
        assert_eq!(rows.len(), NOISE_LEVELS.len());
        for row in rows {
            assert_eq!(row.split_whitespace().count(), 4);
        }
    }
}
