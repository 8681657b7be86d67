// Distributed under terms of the MIT license.

//! Per-phase timing accumulators and the per-parameter-set summary.

use std::time::Duration;

use crate::engine::SigningPath;

/// Timing and success tally for one fixed-count trial loop. The clock is
/// sampled once around the whole loop, so per-operation cost is a mean,
/// not an individually measured latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseStats {
    pub elapsed: Duration,
    pub trials: usize,
    pub ok: usize,
}

impl PhaseStats {
    pub fn new(elapsed: Duration, trials: usize, ok: usize) -> Self {
        PhaseStats { elapsed, trials, ok }
    }

    /// Mean seconds per operation.
    pub fn mean_secs(&self) -> f64 {
        self.elapsed.as_secs_f64() / self.trials as f64
    }

    /// Mean milliseconds per operation.
    pub fn mean_millis(&self) -> f64 {
        1000.0 * self.mean_secs()
    }
}

/// Everything one parameter-set run produced, minus the raw blobs.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub name: &'static str,
    pub privkey_blob_len: usize,
    pub pubkey_blob_len: usize,
    pub packed_sig_len: usize,
    pub path: SigningPath,
    pub keygen: PhaseStats,
    pub sign: PhaseStats,
    pub verify: PhaseStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_is_total_over_trials() {
        let stats = PhaseStats::new(Duration::from_secs(5), 10, 10);
        assert!((stats.mean_secs() - 0.5).abs() < 1e-12);
        assert!((stats.mean_millis() - 500.0).abs() < 1e-9);
    }
}
