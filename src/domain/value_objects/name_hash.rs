//! Name Hash Value Object
//!
//! A 32-bit digest of a catalog name. Catalog lookups compare digests only,
//! so two names are "the same" exactly when their digests are equal.

use std::fmt;

/// djb2 digest over the UTF-8 bytes of a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NameHash(u32);

impl NameHash {
    const SEED: u32 = 5381;

    /// Compute the digest of a name
    pub fn of(name: &str) -> Self {
        let hash = name.bytes().fold(Self::SEED, |h, b| {
            (h << 5).wrapping_add(h).wrapping_add(u32::from(b))
        });
        Self(hash)
    }

    /// Raw digest value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for NameHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}
