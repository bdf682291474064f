//! The compressor's duplicate finder: a single fixed-size table mapping a 4-byte fingerprint to
//! the most recent input position that produced it.
//!
//! Unlike the variable, input-size-dependent dictionaries used by higher-ratio LZ4
//! implementations, this table always has exactly [`HASH_TABLE_SIZE`] slots. Collisions simply
//! overwrite the previous entry; callers verify a hit by comparing the actual 4-byte sequences,
//! since a bucket match only means "same fingerprint", not "same bytes".

use super::HASH_TABLE_SIZE;

/// Sentinel stored in a slot that has never been written. `-1` can never collide with a real
/// input position, which is always `>= 0`.
const EMPTY: i64 = -1;

pub(crate) struct HashTable {
    slots: Vec<i64>,
}

impl HashTable {
    #[inline]
    pub(crate) fn new() -> Self {
        HashTable {
            slots: vec![EMPTY; HASH_TABLE_SIZE],
        }
    }

    /// Stores `pos` under `hash`'s bucket and returns whatever was there before, if anything.
    #[inline]
    pub(crate) fn replace(&mut self, hash: u16, pos: usize) -> Option<usize> {
        let slot = &mut self.slots[hash as usize];
        let prev = *slot;
        *slot = pos as i64;
        if prev < 0 {
            None
        } else {
            Some(prev as usize)
        }
    }
}
