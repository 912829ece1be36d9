//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации (системный и детерминированный);
//! - воспроизводимые seed'ы для реплеев и тестов.

pub mod rng;
pub mod rng_seed;

pub use rng::*;
pub use rng_seed::RngSeed;
