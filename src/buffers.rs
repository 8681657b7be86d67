// Distributed under terms of the MIT license.

//! Arenas owned by the trial runner: the key blob pair, the packed
//! signature batch, and the per-trial message buffer. All three are
//! allocated once per parameter set and reused across trials.

use crate::engine::KeyBlobLens;

/// Message length in bytes, fixed for every trial.
pub const MSG_LEN: usize = 256;

/// Exclusively-owned private/public key blob pair. Every key-generation
/// trial overwrites both blobs in place; only the last key survives.
#[derive(Debug)]
pub struct KeyBlobPair {
    privkey: Vec<u8>,
    pubkey: Vec<u8>,
}

impl KeyBlobPair {
    pub fn alloc(lens: KeyBlobLens) -> Self {
        return KeyBlobPair {
            privkey: vec![0; lens.privkey],
            pubkey: vec![0; lens.pubkey],
        };
    }

    pub fn privkey(&self) -> &[u8] {
        &self.privkey
    }

    pub fn pubkey(&self) -> &[u8] {
        &self.pubkey
    }

    /// Both blobs, mutably, for an in-place key-generation call.
    pub fn blobs_mut(&mut self) -> (&mut [u8], &mut [u8]) {
        (&mut self.privkey, &mut self.pubkey)
    }
}

/// Contiguous batch of `trials` packed-signature slots at a fixed stride.
/// The stride is the packed signature size probed from the engine, so
/// slot `i` can never touch bytes belonging to slot `i±1`.
#[derive(Debug)]
pub struct SignatureBatch {
    data: Vec<u8>,
    stride: usize,
}

impl SignatureBatch {
    pub fn alloc(trials: usize, stride: usize) -> Self {
        return SignatureBatch {
            data: vec![0; trials * stride],
            stride,
        };
    }

    pub fn slot(&self, i: usize) -> &[u8] {
        &self.data[i * self.stride..(i + 1) * self.stride]
    }

    pub fn slot_mut(&mut self, i: usize) -> &mut [u8] {
        &mut self.data[i * self.stride..(i + 1) * self.stride]
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Total bytes held by the batch.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Fixed-size message buffer. Incrementing one byte per trial produces a
/// distinct message each time without needing a hash function in the
/// harness; the byte pattern only repeats after 256 * 256 trials.
#[derive(Debug)]
pub struct MessageBuffer([u8; MSG_LEN]);

impl MessageBuffer {
    pub fn new() -> Self {
        MessageBuffer([0; MSG_LEN])
    }

    /// Mutation applied before trial `trial`: increment the byte at
    /// `trial mod 256`, wrapping.
    pub fn bump(&mut self, trial: usize) {
        let byte = &mut self.0[trial & 0xff];
        *byte = byte.wrapping_add(1);
    }

    /// Resets to all-zero, as done between the signing and verification
    /// phases so both replay the identical message sequence.
    pub fn reset(&mut self) {
        self.0 = [0; MSG_LEN];
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Default for MessageBuffer {
    fn default() -> Self {
        MessageBuffer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_slots_do_not_overlap() {
        let mut batch = SignatureBatch::alloc(3, 8);
        for b in batch.slot_mut(1) {
            *b = 0xff;
        }
        assert!(batch.slot(0).iter().all(|&b| b == 0));
        assert!(batch.slot(1).iter().all(|&b| b == 0xff));
        assert!(batch.slot(2).iter().all(|&b| b == 0));
        assert_eq!(batch.len(), 24);
        assert_eq!(batch.stride(), 8);
    }

    #[test]
    fn mutation_sequence_replays_byte_identical() {
        let mut first = MessageBuffer::new();
        let mut snapshots = Vec::new();
        for i in 0..600 {
            first.bump(i);
            snapshots.push(first.bytes().to_vec());
        }

        let mut second = MessageBuffer::new();
        for (i, snap) in snapshots.iter().enumerate() {
            second.bump(i);
            assert_eq!(second.bytes(), &snap[..]);
        }
    }

    #[test]
    fn each_position_bumped_exactly_once_in_256_trials() {
        let mut msg = MessageBuffer::new();
        for i in 0..256 {
            msg.bump(i);
        }
        assert!(msg.bytes().iter().all(|&b| b == 1));
    }

    #[test]
    fn positions_cycle_after_256_trials() {
        let mut msg = MessageBuffer::new();
        for i in 0..512 {
            msg.bump(i);
        }
        assert!(msg.bytes().iter().all(|&b| b == 2));
    }
}
