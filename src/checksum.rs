//! src/checksum.rs
//!
//! Double-SHA256 checksums backed by a shared pool of reusable hashers.

use sha2::{Digest, Sha256};
use std::ops::{Deref, DerefMut};
use std::sync::Mutex;
use tracing::trace;

/// Length of the checksum trailer appended to a Base58Check payload.
pub const CHECKSUM_LEN: usize = 4;

/// Idle hashers kept by the global pool. Extra hashers are dropped on release.
const MAX_IDLE: usize = 64;

static POOL: Sha256Pool = Sha256Pool::new(MAX_IDLE);

/// A thread-safe free list of `Sha256` hashers.
///
/// Renting never waits for another caller: an empty pool hands out a fresh
/// hasher, and the pool grows as rented hashers come back (up to `max_idle`).
pub struct Sha256Pool {
    idle: Mutex<Vec<Sha256>>,
    max_idle: usize,
}

impl Sha256Pool {
    pub const fn new(max_idle: usize) -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
            max_idle,
        }
    }

    /// Rents a hasher for exclusive use until the guard is dropped.
    pub fn rent(&self) -> PooledSha256<'_> {
        let hasher = self.idle.lock().ok().and_then(|mut idle| idle.pop());
        let hasher = hasher.unwrap_or_else(|| {
            trace!("sha256 pool empty, allocating hasher");
            Sha256::new()
        });
        PooledSha256 { hasher, pool: self }
    }

    /// Number of hashers currently waiting in the pool.
    pub fn idle_count(&self) -> usize {
        self.idle.lock().map(|idle| idle.len()).unwrap_or(0)
    }

    fn release(&self, mut hasher: Sha256) {
        Digest::reset(&mut hasher);
        // A poisoned pool just stops recycling.
        if let Ok(mut idle) = self.idle.lock() {
            if idle.len() < self.max_idle {
                idle.push(hasher);
            }
        }
    }
}

/// A hasher rented from a [`Sha256Pool`]. Returned to the pool on drop.
pub struct PooledSha256<'a> {
    hasher: Sha256,
    pool: &'a Sha256Pool,
}

impl PooledSha256<'_> {
    /// Hashes `data` and leaves the hasher reset for the next call.
    pub fn digest(&mut self, data: &[u8]) -> [u8; 32] {
        self.hasher.update(data);
        self.hasher.finalize_reset().into()
    }
}

impl Deref for PooledSha256<'_> {
    type Target = Sha256;

    fn deref(&self) -> &Sha256 {
        &self.hasher
    }
}

impl DerefMut for PooledSha256<'_> {
    fn deref_mut(&mut self) -> &mut Sha256 {
        &mut self.hasher
    }
}

impl Drop for PooledSha256<'_> {
    fn drop(&mut self) {
        let hasher = std::mem::take(&mut self.hasher);
        self.pool.release(hasher);
    }
}

/// The process-wide hasher pool used by the address codec.
pub fn global_pool() -> &'static Sha256Pool {
    &POOL
}

/// SHA-256 of `data`.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    POOL.rent().digest(data)
}

/// SHA-256 applied twice, using a single rented hasher for both rounds.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = POOL.rent();
    let first = hasher.digest(data);
    hasher.digest(&first)
}

/// First four bytes of `double_sha256(payload)`.
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = double_sha256(payload);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&hash[..CHECKSUM_LEN]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn test_sha256_empty_input() {
        assert_eq!(
            hex::encode(sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_double_sha256_matches_two_rounds() {
        let once = Sha256::digest(b"hello");
        let twice = Sha256::digest(once);
        assert_eq!(double_sha256(b"hello"), <[u8; 32]>::from(twice));
    }

    #[test]
    fn test_checksum_is_prefix_of_double_hash() {
        let payload = [0x41u8; 21];
        assert_eq!(checksum(&payload), double_sha256(&payload)[..4]);
    }

    #[test]
    fn test_reused_hasher_carries_no_state() {
        let pool = Sha256Pool::new(4);
        let expected = <[u8; 32]>::from(Sha256::digest(b"second"));

        let mut hasher = pool.rent();
        hasher.update(b"left over, never finalized");
        drop(hasher);
        assert_eq!(pool.idle_count(), 1);

        let mut hasher = pool.rent();
        assert_eq!(pool.idle_count(), 0);
        hasher.digest(b"first");
        assert_eq!(hasher.digest(b"second"), expected);
    }

    #[test]
    fn test_pool_retention_is_bounded() {
        let pool = Sha256Pool::new(2);
        let guards: Vec<_> = (0..5).map(|_| pool.rent()).collect();
        assert_eq!(pool.idle_count(), 0);
        drop(guards);
        assert_eq!(pool.idle_count(), 2);
    }

    #[test]
    fn test_concurrent_digests_are_independent() {
        let inputs: Vec<Vec<u8>> = (0u32..512).map(|i| i.to_le_bytes().repeat(9)).collect();
        let expected: Vec<[u8; 32]> = inputs
            .iter()
            .map(|data| Sha256::digest(Sha256::digest(data)).into())
            .collect();
        let actual: Vec<[u8; 32]> = inputs.par_iter().map(|data| double_sha256(data)).collect();
        assert_eq!(actual, expected);
    }
}
