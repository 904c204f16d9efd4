//! Player identifier generation.
//!
//! Ids are assigned once per player at game start and never reused.
//!
//! - [`UuidIdGenerator`]: random v4 UUIDs, the production default
//! - [`SeededIdGenerator`]: reproducible UUIDs from a ChaCha8 stream
//!
//! ```
//! use rummy_scorer::core::{IdGenerator, SeededIdGenerator};
//!
//! let mut a = SeededIdGenerator::new(42);
//! let mut b = SeededIdGenerator::new(42);
//! assert_eq!(a.next_id(), b.next_id());
//! ```

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::{Builder, Uuid};

use super::player::PlayerId;

/// Source of fresh player identifiers.
pub trait IdGenerator {
    /// Produce an identifier not previously returned by this generator.
    fn next_id(&mut self) -> PlayerId;
}

/// Random v4 UUIDs.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> PlayerId {
        PlayerId::new(Uuid::new_v4().to_string())
    }
}

/// Deterministic UUIDs for fixtures and tests.
///
/// Same seed produces the same id sequence.
#[derive(Clone, Debug)]
pub struct SeededIdGenerator {
    inner: ChaCha8Rng,
}

impl SeededIdGenerator {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl IdGenerator for SeededIdGenerator {
    fn next_id(&mut self) -> PlayerId {
        let mut bytes = [0u8; 16];
        self.inner.fill_bytes(&mut bytes);
        let uuid = Builder::from_random_bytes(bytes).into_uuid();
        PlayerId::new(uuid.to_string())
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> PlayerId {
        (**self).next_id()
    }
}
