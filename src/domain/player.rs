use serde::{Deserialize, Serialize};

use crate::domain::cash::Cash;

/// Сколько спинов получает игрок на старте игры.
pub const STARTING_SPINS: u32 = 5;

/// После скольких Whammy игрок выбывает.
pub const ELIMINATION_WHAMMIES: u8 = 4;

/// Статус игрока в рамках одной игровой сессии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Игрок в игре.
    Active,
    /// Игрок собрал четыре Whammy и выбыл; остаток спинов сгорел.
    Eliminated,
}

/// Состояние игрока. Создаётся при старте сессии, мутируется по ходу
/// игры, целиком выбрасывается при рестарте.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    /// Банк. Никогда не отрицательный: Whammy обнуляет, иначе только растёт.
    pub bank: Cash,
    /// Оставшиеся спины.
    pub spins_remaining: u32,
    /// Сколько Whammy игрок уже поймал (выбывание на 4).
    pub whammy_count: u8,
    /// Сколько ходов (серий спинов) игрок уже отыграл.
    pub rounds_used: u32,
    pub status: PlayerStatus,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bank: Cash::ZERO,
            spins_remaining: STARTING_SPINS,
            whammy_count: 0,
            rounds_used: 0,
            status: PlayerStatus::Active,
        }
    }

    pub fn is_eliminated(&self) -> bool {
        matches!(self.status, PlayerStatus::Eliminated)
    }

    pub fn has_spins(&self) -> bool {
        self.spins_remaining > 0
    }
}
