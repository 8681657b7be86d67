// Distributed under terms of the MIT license.

//! Deterministic fake engine for exercising the harness without real
//! cryptography. Key material comes from a seeded ChaCha20 keystream, and
//! "signatures" are recomputable from the public key and message, so
//! verification genuinely checks that the verification phase replays the
//! exact messages the signing phase produced.

use std::cell::{Cell, RefCell};

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

use crate::engine::{KeyBlobLens, SignOutcome, SignatureEngine, SigningPath};
use crate::params::{ParamSetDescriptor, ParamSetId};

/// Default blob sizes the stub reports for every parameter set.
pub const PRIVKEY_BLOB_LEN: usize = 64;
pub const PUBKEY_BLOB_LEN: usize = 32;
pub const PACKED_SIG_LEN: usize = 40;

pub struct StubEngine {
    seed: [u8; 32],
    rng: RefCell<Option<ChaCha20Rng>>,
    lens: KeyBlobLens,
    sig_len: usize,
    /// Every n-th real signing call reports failure, if set.
    fail_every: Option<usize>,
    accelerated: bool,
    refuse_resolve: bool,
    signed: Cell<usize>,
    pub keygen_calls: Cell<usize>,
    pub sign_calls: Cell<usize>,
    pub verify_calls: Cell<usize>,
    pub paths_seen: RefCell<Vec<SigningPath>>,
}

impl StubEngine {
    /// Stub seeded from OS entropy.
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        getrandom::getrandom(&mut seed).expect("OS entropy");
        return Self::from_seed(seed);
    }

    /// Fully deterministic stub: the same seed replays the same keystream
    /// on every rng acquisition.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        return StubEngine {
            seed,
            rng: RefCell::new(None),
            lens: KeyBlobLens {
                privkey: PRIVKEY_BLOB_LEN,
                pubkey: PUBKEY_BLOB_LEN,
            },
            sig_len: PACKED_SIG_LEN,
            fail_every: None,
            accelerated: false,
            refuse_resolve: false,
            signed: Cell::new(0),
            keygen_calls: Cell::new(0),
            sign_calls: Cell::new(0),
            verify_calls: Cell::new(0),
            paths_seen: RefCell::new(Vec::new()),
        };
    }

    pub fn with_sizes(mut self, lens: KeyBlobLens, sig_len: usize) -> Self {
        self.lens = lens;
        self.sig_len = sig_len;
        self
    }

    /// Makes every n-th signing call report failure (n >= 1).
    pub fn failing_every(mut self, n: usize) -> Self {
        assert!(n >= 1);
        self.fail_every = Some(n);
        self
    }

    /// Advertises an accelerated signing path.
    pub fn accelerated(mut self) -> Self {
        self.accelerated = true;
        self
    }

    /// Refuses to resolve any identifier, for fatal-path tests.
    pub fn refusing_resolution(mut self) -> Self {
        self.refuse_resolve = true;
        self
    }

    /// Whether randomness state is currently acquired.
    pub fn rng_active(&self) -> bool {
        self.rng.borrow().is_some()
    }

    fn expected_sig(&self, pubkey: &[u8], msg: &[u8], out: &mut [u8]) {
        for (j, byte) in out.iter_mut().enumerate() {
            *byte = pubkey[j % pubkey.len()] ^ msg[j % msg.len()] ^ j as u8;
        }
    }
}

impl Default for StubEngine {
    fn default() -> Self {
        StubEngine::new()
    }
}

impl SignatureEngine for StubEngine {
    fn resolve_param_set(&self, id: ParamSetId) -> Option<ParamSetDescriptor> {
        if self.refuse_resolve {
            return None;
        }
        Some(ParamSetDescriptor {
            id,
            name: id.scheme_name(),
        })
    }

    fn generate_keypair(
        &self,
        _desc: &ParamSetDescriptor,
        out: Option<(&mut [u8], &mut [u8])>,
    ) -> KeyBlobLens {
        self.keygen_calls.set(self.keygen_calls.get() + 1);
        if let Some((priv_out, pub_out)) = out {
            let mut rng = self.rng.borrow_mut();
            let rng = rng.as_mut().expect("rng not acquired");
            rng.fill_bytes(priv_out);
            rng.fill_bytes(pub_out);
        }
        return self.lens;
    }

    fn sign(
        &self,
        _desc: &ParamSetDescriptor,
        path: SigningPath,
        _privkey: &[u8],
        pubkey: &[u8],
        msg: &[u8],
        sig_out: Option<&mut [u8]>,
    ) -> SignOutcome {
        self.sign_calls.set(self.sign_calls.get() + 1);
        self.paths_seen.borrow_mut().push(path);

        let sig_out = match sig_out {
            Some(buf) => buf,
            None => return SignOutcome::Signed(self.sig_len),
        };

        self.signed.set(self.signed.get() + 1);
        if let Some(n) = self.fail_every {
            if self.signed.get() % n == 0 {
                return SignOutcome::Rejected;
            }
        }

        self.expected_sig(pubkey, msg, sig_out);
        return SignOutcome::Signed(self.sig_len);
    }

    fn verify(&self, _desc: &ParamSetDescriptor, sig: &[u8], pubkey: &[u8], msg: &[u8]) -> bool {
        self.verify_calls.set(self.verify_calls.get() + 1);
        let mut expected = vec![0; sig.len()];
        self.expected_sig(pubkey, msg, &mut expected);
        return sig == &expected[..];
    }

    fn rng_init(&self) {
        // Reentrant acquire rewinds to the seed, which is what makes
        // repeated sweeps over the same stub reproducible.
        *self.rng.borrow_mut() = Some(ChaCha20Rng::from_seed(self.seed));
        self.signed.set(0);
    }

    fn rng_cleanup(&self) {
        *self.rng.borrow_mut() = None;
    }

    fn accelerated_signing_available(&self) -> bool {
        self.accelerated
    }
}
