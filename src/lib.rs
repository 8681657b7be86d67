// Distributed under terms of the MIT license.

//! Benchmark harness for post-quantum digital-signature schemes.
//!
//! Drives a signature engine through repeated key-generation, signing and
//! verification trials across a fixed list of parameter sets, and reports
//! per-operation wall-clock cost and success rates. The engine itself is
//! opaque: the harness only talks to it through the [`engine::SignatureEngine`]
//! trait, so the same pipeline runs against the real PQClean-backed engine
//! ([`backend::PqcryptoEngine`]) or a deterministic fake ([`stub::StubEngine`]).

pub mod backend;
pub mod buffers;
pub mod engine;
pub mod error;
pub mod params;
pub mod runner;
pub mod stats;
pub mod stub;
pub mod sweep;

/// Number of iterations per timed phase.
pub const TRIALS: usize = 10000;
