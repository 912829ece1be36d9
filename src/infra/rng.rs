use crate::engine::RandomSource;

/// Системный RNG поверх `thread_rng` — для обычной игры.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        use rand::Rng;
        rand::thread_rng().gen_range(lo..=hi)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        use rand::thread_rng;

        slice.shuffle(&mut thread_rng());
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Одинаковый seed — одинаковые доски, замедления и исходы.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: rand::rngs::StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        use rand::SeedableRng;
        Self {
            inner: rand::rngs::StdRng::from_seed(seed),
        }
    }

    pub fn from_u64(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        use rand::Rng;
        self.inner.gen_range(lo..=hi)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
