// Distributed under terms of the MIT license.

//! Runs the full fixed sweep over the built-in parameter sets against the
//! real engine and writes the report to stdout. No arguments.

use std::io;
use std::process;

use pqbench::backend::PqcryptoEngine;
use pqbench::engine::SigningPath;
use pqbench::runner::RunnerConfig;
use pqbench::sweep::run_sweep;

fn main() {
    let engine = PqcryptoEngine::new();
    let cfg = RunnerConfig {
        path: SigningPath::select(&engine),
        ..RunnerConfig::default()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = run_sweep(&engine, &cfg, &mut out) {
        eprintln!("pqbench: {}", err);
        process::exit(1);
    }
}
