//! RNG-backed die source.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{D12_SIDES, DieSource};
use crate::error::{MechError, MechResult};

/// Draws uniform d12 faces from a [`StdRng`].
///
/// Draws are serialized through a mutex, so one source can back a resolver
/// shared between threads.
#[derive(Debug)]
pub struct RngDieSource {
    rng: Mutex<StdRng>,
}

impl RngDieSource {
    /// A source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// A reproducible source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Wrap an existing generator.
    pub fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> MechResult<T> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| MechError::DieSourceUnavailable("random generator lock poisoned".into()))?;
        Ok(f(&mut *rng))
    }
}

impl DieSource for RngDieSource {
    fn draw_d12(&self) -> MechResult<u32> {
        self.with_rng(|rng| rng.random_range(1..=D12_SIDES))
    }

    fn draw_pair(&self) -> MechResult<(u32, u32)> {
        self.with_rng(|rng| {
            let hope = rng.random_range(1..=D12_SIDES);
            let fear = rng.random_range(1..=D12_SIDES);
            (hope, fear)
        })
    }
}
