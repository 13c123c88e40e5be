/// A single parsed row of the results file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRow {
    /// Blocks whose codeword was changed by the channel
    pub corrupted: f64,
    /// Blocks whose decoded data differs from what was encoded
    pub mismatched: f64,
    /// Blocks rejected as double errors
    pub uncorrectable: f64,
    /// Number of simulated blocks, used as the normalization divisor
    pub block_count: u64,
}

/// Per-block outcome rates, one entry per sweep row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateSeries {
    /// corrupted / block_count for each row
    pub corrupted: Vec<f64>,
    /// mismatched / block_count for each row
    pub mismatched: Vec<f64>,
    /// uncorrectable / block_count for each row
    pub uncorrectable: Vec<f64>,
}

impl RateSeries {
    /// Number of entries in each series.
    ///
    /// The three series always grow together, so one length describes
    /// all of them.
    pub fn len(&self) -> usize {
        self.corrupted.len()
    }

    /// True when no rows have been normalized yet.
    pub fn is_empty(&self) -> bool {
        self.corrupted.is_empty()
    }
}
