// Distributed under terms of the MIT license.

//! Trial runner: the full measurement pipeline for one parameter set.
//!
//! Strictly sequential phases: resolve descriptor, probe key blob sizes,
//! time `trials` key generations, probe the packed signature size, time
//! `trials` signings, time `trials` verifications, tear down. No retries,
//! no early exit from a trial loop.

use std::io::Write;
use std::time::Instant;

use crate::buffers::{KeyBlobPair, MessageBuffer, SignatureBatch};
use crate::engine::{RngScope, SignOutcome, SignatureEngine, SigningPath};
use crate::error::HarnessError;
use crate::params::ParamSetId;
use crate::stats::{PhaseStats, RunSummary};
use crate::TRIALS;

/// Per-run configuration, fixed before any trial starts.
#[derive(Debug, Clone, Copy)]
pub struct RunnerConfig {
    pub trials: usize,
    pub path: SigningPath,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            trials: TRIALS,
            path: SigningPath::Reference,
        }
    }
}

/// Runs the key-generation, signing and verification timing phases for one
/// parameter set, writing the report to `out` and mirroring the banner on
/// stderr.
///
/// Per-trial signing or verification failures are tallied, never retried,
/// and never cut a phase short. The only `Err` values are fatal: an
/// unknown identifier or a broken sizing probe. The engine's randomness
/// state is released on every exit path, fatal ones included.
pub fn run_param_set<E, W>(
    engine: &E,
    cfg: &RunnerConfig,
    id: ParamSetId,
    out: &mut W,
) -> Result<RunSummary, HarnessError>
where
    E: SignatureEngine + ?Sized,
    W: Write,
{
    let _rng = RngScope::acquire(engine);

    let desc = engine
        .resolve_param_set(id)
        .ok_or(HarnessError::UnknownParamSet(id))?;

    eprintln!(
        "------ Testing parameter set {}. {} trials. ------",
        desc.name, cfg.trials
    );
    writeln!(
        out,
        "------ Testing parameter set {}. {} trials. ------",
        desc.name, cfg.trials
    )?;

    let lens = engine.generate_keypair(&desc, None);
    writeln!(out, "privkey_blob_len: {}", lens.privkey)?;
    writeln!(out, "pubkey_blob_len: {}", lens.pubkey)?;

    let mut keys = KeyBlobPair::alloc(lens);
    let mut msg = MessageBuffer::new();

    // Key generation. Every trial overwrites the same blob pair, so only
    // the final key survives into the signing phase. Key generation does
    // not consume the message; the bump is kept so the loop carries the
    // same bookkeeping cost as the signing loop.
    let start = Instant::now();
    for i in 0..cfg.trials {
        msg.bump(i);
        engine.generate_keypair(&desc, Some(keys.blobs_mut()));
    }
    let keygen = PhaseStats::new(start.elapsed(), cfg.trials, cfg.trials);
    writeln!(out, "Time/key: {:.6}s", keygen.mean_secs())?;

    let packed_sig_len = match engine.sign(
        &desc,
        cfg.path,
        keys.privkey(),
        keys.pubkey(),
        msg.bytes(),
        None,
    ) {
        SignOutcome::Signed(len) => len,
        SignOutcome::Rejected => return Err(HarnessError::SizingProbe(id)),
    };
    writeln!(out, "packed_sig_len {}", packed_sig_len)?;

    let mut sigs = SignatureBatch::alloc(cfg.trials, packed_sig_len);

    // Signing. A distinct message per trial, the fixed key pair from the
    // key-generation phase, and the signing path chosen up front for the
    // whole run.
    msg.reset();
    let mut good = 0;
    let start = Instant::now();
    for i in 0..cfg.trials {
        msg.bump(i);
        let outcome = engine.sign(
            &desc,
            cfg.path,
            keys.privkey(),
            keys.pubkey(),
            msg.bytes(),
            Some(sigs.slot_mut(i)),
        );
        if let SignOutcome::Signed(_) = outcome {
            good += 1;
        }
    }
    let sign = PhaseStats::new(start.elapsed(), cfg.trials, good);
    writeln!(out, "Time/signature: {:.6} msec", sign.mean_millis())?;
    writeln!(out, "Good signatures {}/{}", sign.ok, sign.trials)?;

    // Verification replays the identical message sequence, so signature i
    // is checked against exactly the message that produced it.
    msg.reset();
    let mut verified = 0;
    let start = Instant::now();
    for i in 0..cfg.trials {
        msg.bump(i);
        if engine.verify(&desc, sigs.slot(i), keys.pubkey(), msg.bytes()) {
            verified += 1;
        }
    }
    let verify = PhaseStats::new(start.elapsed(), cfg.trials, verified);
    writeln!(out, "Time/verification: {:.6}s", verify.mean_secs())?;
    writeln!(out, "Verified {}/{}\n\n", verify.ok, verify.trials)?;

    Ok(RunSummary {
        name: desc.name,
        privkey_blob_len: lens.privkey,
        pubkey_blob_len: lens.pubkey,
        packed_sig_len,
        path: cfg.path,
        keygen,
        sign,
        verify,
    })
}
