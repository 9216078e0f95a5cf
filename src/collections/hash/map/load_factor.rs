use std::fmt::{self, Display, Formatter};

/// The maximum ratio of entries to buckets that a [`HashMap`](super::HashMap) allows before it
/// doubles its bucket count, stored as a fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadFactor {
    numerator: usize,
    denominator: usize,
}

impl LoadFactor {
    /// The load factor used unless another is provided, 3/4.
    pub const DEFAULT: LoadFactor = LoadFactor {
        numerator: 3,
        denominator: 4,
    };

    /// Creates a load factor of `numerator / denominator`.
    ///
    /// # Panics
    /// Panics if either part is 0.
    ///
    /// # Examples
    /// ```
    /// # use core_collections::collections::hash::LoadFactor;
    /// let factor = LoadFactor::new(1, 2);
    /// assert_eq!(factor.max_len(8), 4);
    /// ```
    pub const fn new(numerator: usize, denominator: usize) -> LoadFactor {
        assert!(numerator != 0 && denominator != 0, "Load factor must be greater than 0!");
        LoadFactor {
            numerator,
            denominator,
        }
    }

    /// Returns the largest number of entries that `bucket_count` buckets can hold.
    pub const fn max_len(self, bucket_count: usize) -> usize {
        bucket_count.saturating_mul(self.numerator) / self.denominator
    }

    /// Returns the smallest bucket count that can hold `len` entries.
    ///
    /// # Panics
    /// Panics if the bucket count would overflow [`usize`].
    pub const fn buckets_for(self, len: usize) -> usize {
        match len.checked_mul(self.denominator) {
            Some(scaled) => scaled.div_ceil(self.numerator),
            None => panic!("Capacity overflow!"),
        }
    }
}

impl Default for LoadFactor {
    fn default() -> Self {
        LoadFactor::DEFAULT
    }
}

impl Display for LoadFactor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
