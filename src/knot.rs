//! Knot hash: a circle of marks is pinched and twisted by a sequence of
//! lengths, then folded into a 16-byte digest.
//!
//! ```
//! use aoc2017::knot::knot_digest;
//!
//! assert_eq!(knot_digest("AoC 2017").unwrap(), "33efeb34ea91902bb2f59c9920caa6cd");
//! ```

use itertools::Itertools;
use tracing::{debug, trace};

use crate::error::KnotError;

/// Marks on the canonical string, and the longest identity ring of bytes.
pub const RING_CAPACITY: usize = 256;
/// Sparse hash values folded into each dense hash byte.
pub const BLOCK_LEN: usize = 16;
/// Passes over the length sequence when building a sparse hash.
pub const ROUNDS: usize = 64;
/// Lengths appended to the character codes of a digest input.
pub const TRAILER: [usize; 5] = [17, 31, 73, 47, 23];

/// A circular sequence of byte values whose length is fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring(Vec<u8>);

impl Ring {
    pub fn new(values: &[u8]) -> Result<Ring, KnotError> {
        if values.is_empty() {
            return Err(KnotError::MalformedRing {len: 0, reason: "a ring needs at least one mark"});
        }
        Ok(Ring(values.to_vec()))
    }

    /// The marks `0, 1, ..., len - 1` in order.
    pub fn identity(len: usize) -> Result<Ring, KnotError> {
        if len == 0 || len > RING_CAPACITY {
            return Err(KnotError::MalformedRing {len, reason: "an identity ring holds between 1 and 256 marks"});
        }
        Ok(Ring((0 .. len).map(|x| x as u8).collect()))
    }

    pub fn len(&self) -> usize {self.0.len()}

    pub fn is_empty(&self) -> bool {self.0.is_empty()}

    pub fn as_slice(&self) -> &[u8] {&self.0}
}

/// The ring together with the cursor and skip size carried between pinches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnotHasher {
    ring: Ring,
    cursor: usize,
    skip: usize,
}

impl KnotHasher {
    pub fn new(ring: Ring) -> KnotHasher {KnotHasher {ring, cursor: 0, skip: 0}}

    pub fn ring(&self) -> &Ring {&self.ring}

    pub fn into_ring(self) -> Ring {self.ring}

    pub fn cursor(&self) -> usize {self.cursor}

    pub fn skip(&self) -> usize {self.skip}

    /// The mark under the cursor.
    pub fn current_value(&self) -> u8 {self.ring.0[self.cursor]}

    /// Reverses the `length` marks starting at the cursor, wrapping past the
    /// end of the ring, then moves the cursor by `length + skip`.
    pub fn tie(&mut self, length: usize) {
        let n = self.ring.len();
        trace!(length, cursor = self.cursor, skip = self.skip, "pinch");
        if length <= n {
            for k in 0 .. length / 2 {
                self.ring.0.swap((self.cursor + k) % n, (self.cursor + length - 1 - k) % n);
            }
        } else {
            // the window laps the ring and the last write to a slot wins, so only
            // the final n window positions matter
            let before = self.ring.0.clone();
            for j in 0 .. n {
                self.ring.0[(self.cursor + length % n + j) % n] = before[(self.cursor + n - 1 - j) % n];
            }
        }
        self.cursor = (self.cursor + length % n + self.skip % n) % n;
        self.skip += 1;
    }

    /// Like [`KnotHasher::tie`], but leaves `self` alone and returns the next state.
    pub fn pinch(&self, length: usize) -> KnotHasher {
        let mut next = self.clone();
        next.tie(length);
        next
    }

    pub fn apply_sequence(mut self, lengths: &[usize]) -> KnotHasher {
        for &length in lengths {
            self.tie(length);
        }
        self
    }
}

/// Runs `lengths` over `initial` [`ROUNDS`] times, keeping cursor and skip
/// size across rounds. The lengths are used as given; see [`byte_lengths`]
/// for the trailer.
pub fn sparse_hash(initial: Ring, lengths: &[usize]) -> Ring {
    let mut hasher = KnotHasher::new(initial);
    for round in 0 .. ROUNDS {
        hasher = hasher.apply_sequence(lengths);
        debug!(round, cursor = hasher.cursor, skip = hasher.skip, "knot round done");
    }
    hasher.into_ring()
}

/// XORs each block of [`BLOCK_LEN`] marks into one byte.
pub fn dense_hash(sparse: &Ring) -> Result<Vec<u8>, KnotError> {
    if sparse.len() % BLOCK_LEN != 0 {
        return Err(KnotError::MalformedRing {len: sparse.len(), reason: "length must be a multiple of 16"});
    }
    Ok(sparse.as_slice().chunks_exact(BLOCK_LEN)
             .map(|block| block.iter().fold(0u8, |acc, &x| acc ^ x))
             .collect())
}

pub fn to_hex(digest: &[u8]) -> String {hex::encode(digest)}

/// Product of the first two marks.
pub fn checksum(ring: &Ring) -> Result<u32, KnotError> {
    let Some((a, b)) = ring.as_slice().iter().copied().take(2).collect_tuple::<(u8, u8)>() else {
        return Err(KnotError::MalformedRing {len: ring.len(), reason: "checksum needs two marks"});
    };
    Ok(a as u32 * b as u32)
}

/// Lengths written as comma-separated decimals, e.g. `3, 4, 1, 5`.
pub fn pinch_lengths(input: &str) -> Result<Vec<usize>, KnotError> {
    input.trim().split(',').map(|token| {
        let token = token.trim();
        token.parse().map_err(|_| KnotError::InvalidInput {token: token.to_string()})
    }).collect()
}

/// Character codes of the trimmed input followed by [`TRAILER`].
pub fn byte_lengths(input: &str) -> Vec<usize> {
    input.trim().bytes().map(usize::from).chain(TRAILER).collect()
}

/// The 32-character lowercase hex knot hash of `input`.
pub fn knot_digest(input: &str) -> Result<String, KnotError> {
    let sparse = sparse_hash(Ring::identity(RING_CAPACITY)?, &byte_lengths(input));
    Ok(to_hex(&dense_hash(&sparse)?))
}
