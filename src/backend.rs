// Distributed under terms of the MIT license.

//! Real signature engine backed by the PQClean implementations wrapped
//! by the `pqcrypto` crate.

use pqcrypto::prelude::*;

use crate::engine::{KeyBlobLens, SignOutcome, SignatureEngine, SigningPath};
use crate::params::{ParamSetDescriptor, ParamSetId};

/// Expands to `$body` with `$scheme` bound to the `pqcrypto::sign` module
/// for the given parameter set.
macro_rules! dispatch {
    ($id:expr, $scheme:ident, $body:expr) => {
        match $id {
            ParamSetId::Dilithium2 => {
                use pqcrypto::sign::dilithium2 as $scheme;
                $body
            }
            ParamSetId::Dilithium3 => {
                use pqcrypto::sign::dilithium3 as $scheme;
                $body
            }
            ParamSetId::Dilithium5 => {
                use pqcrypto::sign::dilithium5 as $scheme;
                $body
            }
            ParamSetId::SphincsSha256F128 => {
                use pqcrypto::sign::sphincssha256128fsimple as $scheme;
                $body
            }
            ParamSetId::SphincsSha256F192 => {
                use pqcrypto::sign::sphincssha256192fsimple as $scheme;
                $body
            }
            ParamSetId::SphincsSha256F256 => {
                use pqcrypto::sign::sphincssha256256fsimple as $scheme;
                $body
            }
            ParamSetId::SphincsShake256F128 => {
                use pqcrypto::sign::sphincsshake256128fsimple as $scheme;
                $body
            }
            ParamSetId::SphincsShake256F192 => {
                use pqcrypto::sign::sphincsshake256192fsimple as $scheme;
                $body
            }
            ParamSetId::SphincsShake256F256 => {
                use pqcrypto::sign::sphincsshake256256fsimple as $scheme;
                $body
            }
        }
    };
}

/// Engine over `pqcrypto::sign`. Stateless: the C backends draw their
/// randomness from the operating system directly, so the rng hooks have
/// nothing to manage here. Both signing paths dispatch to the same call;
/// the accelerated one is only offered where the vectorized backends can
/// actually run.
#[derive(Debug, Default, Clone, Copy)]
pub struct PqcryptoEngine;

impl PqcryptoEngine {
    pub fn new() -> Self {
        PqcryptoEngine
    }
}

impl SignatureEngine for PqcryptoEngine {
    fn resolve_param_set(&self, id: ParamSetId) -> Option<ParamSetDescriptor> {
        Some(ParamSetDescriptor {
            id,
            name: id.scheme_name(),
        })
    }

    fn generate_keypair(
        &self,
        desc: &ParamSetDescriptor,
        out: Option<(&mut [u8], &mut [u8])>,
    ) -> KeyBlobLens {
        dispatch!(desc.id, scheme, {
            let lens = KeyBlobLens {
                privkey: scheme::secret_key_bytes(),
                pubkey: scheme::public_key_bytes(),
            };
            if let Some((priv_out, pub_out)) = out {
                let (pk, sk) = scheme::keypair();
                priv_out.copy_from_slice(sk.as_bytes());
                pub_out.copy_from_slice(pk.as_bytes());
            }
            lens
        })
    }

    fn sign(
        &self,
        desc: &ParamSetDescriptor,
        _path: SigningPath,
        privkey: &[u8],
        _pubkey: &[u8],
        msg: &[u8],
        sig_out: Option<&mut [u8]>,
    ) -> SignOutcome {
        dispatch!(desc.id, scheme, {
            let sig_out = match sig_out {
                Some(buf) => buf,
                None => return SignOutcome::Signed(scheme::signature_bytes()),
            };
            let sk = match scheme::SecretKey::from_bytes(privkey) {
                Ok(sk) => sk,
                Err(_) => return SignOutcome::Rejected,
            };
            let sig = scheme::detached_sign(msg, &sk);
            sig_out.copy_from_slice(sig.as_bytes());
            SignOutcome::Signed(sig.as_bytes().len())
        })
    }

    fn verify(&self, desc: &ParamSetDescriptor, sig: &[u8], pubkey: &[u8], msg: &[u8]) -> bool {
        dispatch!(desc.id, scheme, {
            let sig = match scheme::DetachedSignature::from_bytes(sig) {
                Ok(sig) => sig,
                Err(_) => return false,
            };
            let pk = match scheme::PublicKey::from_bytes(pubkey) {
                Ok(pk) => pk,
                Err(_) => return false,
            };
            scheme::verify_detached_signature(&sig, msg, &pk).is_ok()
        })
    }

    fn rng_init(&self) {}

    fn rng_cleanup(&self) {}

    fn accelerated_signing_available(&self) -> bool {
        #[cfg(target_arch = "x86_64")]
        {
            is_x86_feature_detected!("avx2")
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SWEEP;

    #[test]
    fn every_sweep_id_resolves() {
        let engine = PqcryptoEngine::new();
        for &id in SWEEP.iter() {
            let desc = engine.resolve_param_set(id).unwrap();
            assert_eq!(desc.id, id);
            assert_eq!(desc.name, id.scheme_name());
        }
    }

    #[test]
    fn sizing_probes_report_nonzero_lens() {
        let engine = PqcryptoEngine::new();
        for &id in SWEEP.iter() {
            let desc = engine.resolve_param_set(id).unwrap();
            let lens = engine.generate_keypair(&desc, None);
            assert!(lens.privkey > 0);
            assert!(lens.pubkey > 0);
            let probe = engine.sign(&desc, SigningPath::Reference, &[], &[], &[], None);
            assert!(matches!(probe, SignOutcome::Signed(n) if n > 0));
        }
    }

    #[test]
    fn dilithium2_round_trip_through_blob_interface() {
        let engine = PqcryptoEngine::new();
        let desc = engine.resolve_param_set(ParamSetId::Dilithium2).unwrap();

        let lens = engine.generate_keypair(&desc, None);
        let mut privkey = vec![0; lens.privkey];
        let mut pubkey = vec![0; lens.pubkey];
        engine.generate_keypair(&desc, Some((&mut privkey, &mut pubkey)));

        let msg = b"blob interface round trip";
        let sig_len = match engine.sign(&desc, SigningPath::Reference, &privkey, &pubkey, msg, None)
        {
            SignOutcome::Signed(n) => n,
            SignOutcome::Rejected => panic!("sizing probe rejected"),
        };
        let mut sig = vec![0; sig_len];
        let outcome = engine.sign(
            &desc,
            SigningPath::Reference,
            &privkey,
            &pubkey,
            msg,
            Some(&mut sig),
        );
        assert_eq!(outcome, SignOutcome::Signed(sig_len));

        assert!(engine.verify(&desc, &sig, &pubkey, msg));
        assert!(!engine.verify(&desc, &sig, &pubkey, b"a different message"));
    }
}
