// Distributed under terms of the MIT license.

//! The capability interface the harness consumes from a signature engine,
//! plus the scoped-acquisition guard for its process-wide randomness state.

use crate::params::{ParamSetDescriptor, ParamSetId};

/// Byte lengths of the two key blobs, as reported by a sizing probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBlobLens {
    pub privkey: usize,
    pub pubkey: usize,
}

/// Result of one signing call. `Signed` carries the packed signature
/// length, which is all a sizing probe produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignOutcome {
    Signed(usize),
    Rejected,
}

/// Which signing implementation a run drives. Selected once, before any
/// trial starts, and applied uniformly to every trial of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningPath {
    Reference,
    Accelerated,
}

impl SigningPath {
    /// Capability check against the engine. Prefers the accelerated path
    /// whenever the engine offers one.
    pub fn select<E: SignatureEngine + ?Sized>(engine: &E) -> Self {
        if engine.accelerated_signing_available() {
            return SigningPath::Accelerated;
        }
        return SigningPath::Reference;
    }
}

/// The five operations the harness needs from a signature engine.
///
/// Passing `None` for an output buffer turns `generate_keypair` and `sign`
/// into sizing probes: the call reports exact byte lengths without writing
/// keys or signatures.
pub trait SignatureEngine {
    /// Resolves an identifier to its descriptor, or `None` if unknown.
    fn resolve_param_set(&self, id: ParamSetId) -> Option<ParamSetDescriptor>;

    /// Generates a key pair into `out` (private blob, public blob), or
    /// probes blob sizes when `out` is `None`.
    fn generate_keypair(
        &self,
        desc: &ParamSetDescriptor,
        out: Option<(&mut [u8], &mut [u8])>,
    ) -> KeyBlobLens;

    /// Signs `msg` with the given key blobs into `sig_out`, or probes the
    /// packed signature size when `sig_out` is `None`.
    fn sign(
        &self,
        desc: &ParamSetDescriptor,
        path: SigningPath,
        privkey: &[u8],
        pubkey: &[u8],
        msg: &[u8],
        sig_out: Option<&mut [u8]>,
    ) -> SignOutcome;

    /// Checks a packed signature against the public key blob and message.
    /// No side effects.
    fn verify(&self, desc: &ParamSetDescriptor, sig: &[u8], pubkey: &[u8], msg: &[u8]) -> bool;

    /// Sets up process-wide randomness state. A reentrant acquire
    /// overwrites the previous state.
    fn rng_init(&self);

    /// Tears down process-wide randomness state. Must pair with
    /// [`SignatureEngine::rng_init`].
    fn rng_cleanup(&self);

    /// Whether an accelerated signing path is available on this host.
    fn accelerated_signing_available(&self) -> bool {
        false
    }
}

/// Scoped acquisition of the engine's randomness state. Released on drop,
/// including on the fatal early-return paths of a run.
pub struct RngScope<'a, E: SignatureEngine + ?Sized> {
    engine: &'a E,
}

impl<'a, E: SignatureEngine + ?Sized> RngScope<'a, E> {
    pub fn acquire(engine: &'a E) -> Self {
        engine.rng_init();
        return RngScope { engine };
    }
}

impl<'a, E: SignatureEngine + ?Sized> Drop for RngScope<'a, E> {
    fn drop(&mut self) {
        self.engine.rng_cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub::StubEngine;

    #[test]
    fn path_selection_follows_engine_capability() {
        let plain = StubEngine::from_seed([0; 32]);
        assert_eq!(SigningPath::select(&plain), SigningPath::Reference);

        let fast = StubEngine::from_seed([0; 32]).accelerated();
        assert_eq!(SigningPath::select(&fast), SigningPath::Accelerated);
    }

    #[test]
    fn rng_scope_releases_on_drop() {
        let engine = StubEngine::from_seed([3; 32]);
        {
            let _rng = RngScope::acquire(&engine);
            assert!(engine.rng_active());
        }
        assert!(!engine.rng_active());
    }
}
