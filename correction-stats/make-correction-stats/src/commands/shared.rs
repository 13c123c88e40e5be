/// Outcome counts for one noise level of the sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelOutcome {
    /// Bit flip probability applied to every codeword
    pub noise_level: f64,
    /// Blocks whose codeword was changed by the channel
    pub corrupted: u64,
    /// Blocks whose decoded data differs from what was encoded
    pub mismatched: u64,
    /// Blocks rejected as double errors
    pub uncorrectable: u64,
    /// Total number of simulated blocks
    pub block_count: u64,
}
