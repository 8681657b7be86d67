// Distributed under terms of the MIT license.

use thiserror::Error;

use crate::params::ParamSetId;

/// Fatal harness errors. A sign or verify call failing on an individual
/// trial is a counted outcome, not an error, and never shows up here.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The static sweep list named an identifier the engine does not know.
    #[error("unknown parameter set {0:?}")]
    UnknownParamSet(ParamSetId),

    /// A null-output sizing probe reported failure, breaking the engine
    /// contract that probes never do real work.
    #[error("sizing probe for {0:?} reported failure")]
    SizingProbe(ParamSetId),

    #[error("report sink: {0}")]
    Io(#[from] std::io::Error),
}
