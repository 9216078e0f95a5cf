#![cfg(test)]

use std::hash::{BuildHasher, Hash, Hasher};

/// A key with a hash chosen by the test rather than derived from its value. Equality still uses
/// the value, so two different values can be made to collide on purpose.
#[derive(Debug, Clone)]
pub struct ManualHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> ManualHash<T> {
    pub const fn new(hash: u64, value: T) -> ManualHash<T> {
        ManualHash {
            hash,
            value,
        }
    }

    pub fn value(self) -> T {
        self.value
    }
}

impl<T: Eq> Hash for ManualHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl<T: Eq> PartialEq for ManualHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for ManualHash<T> {}

/// A hasher that returns the last `u64` written to it unchanged, making bucket placement
/// predictable in tests: `ManualHash::new(h, _)` lands in bucket `h % bucket_count`.
#[derive(Debug, Default)]
pub struct PassThroughHasher {
    state: u64,
}

impl Hasher for PassThroughHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = (self.state << 8) | *byte as u64;
        }
    }

    fn write_u64(&mut self, i: u64) {
        self.state = i;
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PassThroughBuilder;

impl BuildHasher for PassThroughBuilder {
    type Hasher = PassThroughHasher;

    fn build_hasher(&self) -> Self::Hasher {
        PassThroughHasher::default()
    }
}

/// A key type that violates the hash/equality contract: values are always equal, but hash
/// differently. Used to show what a broken key does to lookups.
#[derive(Debug, Clone, Copy)]
pub struct InconsistentKey(pub u64);

impl Hash for InconsistentKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl PartialEq for InconsistentKey {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for InconsistentKey {}
