// Distributed under terms of the MIT license.

//! Named parameter sets of the signature scheme family and the fixed
//! sweep order the benchmark walks through.

/// Identifier for one parameter set, fixing security level and derived sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamSetId {
    Dilithium2,
    Dilithium3,
    Dilithium5,
    SphincsSha256F128,
    SphincsSha256F192,
    SphincsSha256F256,
    SphincsShake256F128,
    SphincsShake256F192,
    SphincsShake256F256,
}

impl ParamSetId {
    /// Canonical algorithm name for this parameter set.
    pub fn scheme_name(self) -> &'static str {
        match self {
            ParamSetId::Dilithium2 => "Dilithium2",
            ParamSetId::Dilithium3 => "Dilithium3",
            ParamSetId::Dilithium5 => "Dilithium5",
            ParamSetId::SphincsSha256F128 => "SPHINCS+-sha256-128f-simple",
            ParamSetId::SphincsSha256F192 => "SPHINCS+-sha256-192f-simple",
            ParamSetId::SphincsSha256F256 => "SPHINCS+-sha256-256f-simple",
            ParamSetId::SphincsShake256F128 => "SPHINCS+-shake256-128f-simple",
            ParamSetId::SphincsShake256F192 => "SPHINCS+-shake256-192f-simple",
            ParamSetId::SphincsShake256F256 => "SPHINCS+-shake256-256f-simple",
        }
    }
}

/// The fixed sweep order. Every benchmark run walks this list front to back.
pub const SWEEP: [ParamSetId; 9] = [
    ParamSetId::Dilithium2,
    ParamSetId::Dilithium3,
    ParamSetId::Dilithium5,
    ParamSetId::SphincsSha256F128,
    ParamSetId::SphincsSha256F192,
    ParamSetId::SphincsSha256F256,
    ParamSetId::SphincsShake256F128,
    ParamSetId::SphincsShake256F192,
    ParamSetId::SphincsShake256F256,
];

/// Parameter-set metadata as resolved by an engine.
/// Immutable once resolved; the runner only ever reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSetDescriptor {
    pub id: ParamSetId,
    pub name: &'static str,
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn sweep_lists_nine_distinct_sets() {
        let unique: HashSet<_> = SWEEP.iter().collect();
        assert_eq!(unique.len(), 9);
    }

    #[test]
    fn scheme_names_are_distinct() {
        let unique: HashSet<_> = SWEEP.iter().map(|id| id.scheme_name()).collect();
        assert_eq!(unique.len(), 9);
    }
}
