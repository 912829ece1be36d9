//! Игровой движок: генерация доски, спин с замедлением, разрешение
//! призов, ход/выбывание/конец игры.
//!
//! Высокоуровневый объект: `Game` (game.rs).
//! Основные операции:
//!   - `Game::apply` – применить команду игрока (старт/стоп/пас/рестарт)
//!   - `Game::tick` – один шаг спина, вызывается внешним планировщиком
//!   - `resolve_cell` – применить приз приземлившейся ячейки

pub mod board_gen;
pub mod commands;
pub mod errors;
pub mod events;
pub mod game;
pub mod game_loop;
pub mod spin;
pub mod validation;

pub use commands::Command;
pub use errors::EngineError;
pub use events::{EventLog, GameEvent, GameEventKind, GameOutcome};
pub use game::{Game, TickResult};
pub use game_loop::{resolve_cell, GameStatus};
pub use spin::{SpinPhase, SpinState, SpinStep};

/// RNG интерфейс для движка. Реализации — в infra (обёртки над `rand`).
/// Тесты подставляют детерминированные последовательности и проверяют
/// точные исходы.
pub trait RandomSource {
    /// Равномерное целое из [lo, hi] включительно.
    fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32;

    /// Равномерная перестановка среза. Дефолтная реализация — Fisher–Yates
    /// поверх `range_inclusive`; infra-реализации могут заменить на
    /// `SliceRandom::shuffle`.
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.range_inclusive(0, i as u32) as usize;
            slice.swap(i, j);
        }
    }
}
