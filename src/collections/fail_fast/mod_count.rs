use crate::error::ConcurrentModification;

/// A counter of structural modifications (insertions and removals) made to a collection. Replacing
/// a value in place doesn't count as a structural modification.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModCount(pub(crate) u64);

impl ModCount {
    pub const fn new() -> ModCount {
        ModCount(0)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Records a structural modification. Wraps on overflow, a cursor would need to sit idle
    /// through 2^64 modifications to miss one.
    pub(crate) const fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Checks that `found` matches this snapshot.
    pub const fn check(self, found: ModCount) -> Result<(), ConcurrentModification> {
        if self.0 == found.0 {
            Ok(())
        } else {
            Err(ConcurrentModification {
                expected: self.0,
                found: found.0,
            })
        }
    }
}
