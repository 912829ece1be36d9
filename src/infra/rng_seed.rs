//! RngSeed — воспроизводимый seed для игрового RNG.
//!
//! Позволяет:
//!   - хранить базовый seed (u64 или [u8;32])
//!   - делать детерминированное hash-reseeding:
//!         new = H(domain || old || session_index || spin_index)
//!   - создавать DeterministicRng из seed
//!
//! Нужен, чтобы реплей сессии (и каждый отдельный спин в ней)
//! воспроизводился из одного базового seed'а.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    /// Создать seed из 32 байт.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для удобства тестов).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Доменное хэш-расширение с включением контекста:
    ///   - session_index (номер сессии от рестарта к рестарту)
    ///   - spin_index (номер спина внутри сессии)
    pub fn derive(&self, session_index: u64, spin_index: u64) -> Self {
        let mut hasher = Sha256::new();

        // Доменный префикс
        hasher.update(b"WHEEL_ENGINE_RNG_V1");
        hasher.update(self.bytes);
        hasher.update(session_index.to_le_bytes());
        hasher.update(spin_index.to_le_bytes());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    /// Создать DeterministicRng из seed.
    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }
}
