// Distributed under terms of the MIT license.

//! Parameter sweep controller: one trial-runner invocation per entry of
//! the fixed parameter-set list, strictly serialized, in list order.

use std::io::Write;

use crate::engine::{RngScope, SignatureEngine};
use crate::error::HarnessError;
use crate::params::{ParamSetId, SWEEP};
use crate::runner::{run_param_set, RunnerConfig};
use crate::stats::RunSummary;

/// Runs every parameter set in [`SWEEP`] order against the engine.
///
/// The engine's randomness state is held for the whole sweep and released
/// even when a run bails out with a fatal error; each run additionally
/// acquires its own scope, which overwrites the outer one.
pub fn run_sweep<E, W>(
    engine: &E,
    cfg: &RunnerConfig,
    out: &mut W,
) -> Result<Vec<RunSummary>, HarnessError>
where
    E: SignatureEngine + ?Sized,
    W: Write,
{
    run_list(engine, cfg, &SWEEP, out)
}

/// [`run_sweep`] over an explicit identifier list.
pub fn run_list<E, W>(
    engine: &E,
    cfg: &RunnerConfig,
    ids: &[ParamSetId],
    out: &mut W,
) -> Result<Vec<RunSummary>, HarnessError>
where
    E: SignatureEngine + ?Sized,
    W: Write,
{
    let _rng = RngScope::acquire(engine);

    let mut summaries = Vec::with_capacity(ids.len());
    for &id in ids {
        summaries.push(run_param_set(engine, cfg, id, out)?);
    }
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::engine::SigningPath;
    use crate::stub::StubEngine;

    fn cfg(trials: usize) -> RunnerConfig {
        RunnerConfig {
            trials,
            path: SigningPath::Reference,
        }
    }

    #[test]
    fn full_sweep_is_idempotent() {
        let engine = StubEngine::from_seed([1; 32]);
        let mut out = io::sink();

        let first = run_sweep(&engine, &cfg(25), &mut out).unwrap();
        let second = run_sweep(&engine, &cfg(25), &mut out).unwrap();

        assert_eq!(first.len(), 9);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.privkey_blob_len, b.privkey_blob_len);
            assert_eq!(a.pubkey_blob_len, b.pubkey_blob_len);
            assert_eq!(a.packed_sig_len, b.packed_sig_len);
            assert_eq!(a.sign.ok, b.sign.ok);
            assert_eq!(a.verify.ok, b.verify.ok);
        }
    }

    #[test]
    fn sweep_visits_ids_in_list_order() {
        let engine = StubEngine::from_seed([2; 32]);
        let mut out = io::sink();
        let summaries = run_sweep(&engine, &cfg(2), &mut out).unwrap();
        let names: Vec<_> = summaries.iter().map(|s| s.name).collect();
        let expected: Vec<_> = SWEEP.iter().map(|id| id.scheme_name()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn fatal_resolution_aborts_the_sweep_and_releases_rng() {
        let engine = StubEngine::from_seed([3; 32]).refusing_resolution();
        let mut out = io::sink();
        let err = run_sweep(&engine, &cfg(2), &mut out).unwrap_err();
        assert!(matches!(err, HarnessError::UnknownParamSet(_)));
        assert!(!engine.rng_active());
    }
}
