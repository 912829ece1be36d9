//! Спин-машина: Idle → Running → Decelerating → (приземление) → Idle.
//!
//! Движок не спит сам: каждый шаг — вызов `SpinState::step` внешним
//! планировщиком, который выдерживает возвращённую задержку. Тесты
//! гоняют шаги напрямую, без реального времени.

use serde::{Deserialize, Serialize};

use crate::domain::board::BOARD_SIZE;
use crate::domain::CellIndex;
use crate::engine::RandomSource;

/// Каданс бегущего указателя, мс на шаг.
pub const RUN_STEP_MS: u32 = 60;
/// Прирост задержки на каждый шаг замедления, мс.
pub const DECEL_INCREMENT_MS: u32 = 18;
/// Потолок задержки при замедлении, мс.
pub const DECEL_CAP_MS: u32 = 350;
/// Границы числа шагов замедления после команды «стоп». Число шагов
/// случайно, поэтому игрок не может целиться в конкретную ячейку.
pub const DECEL_MIN_STEPS: u32 = 10;
pub const DECEL_MAX_STEPS: u32 = 17;

/// Фаза спина.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SpinPhase {
    /// Указатель стоит; ждём команду «старт».
    Idle,
    /// Указатель бежит с постоянным кадансом; ждём команду «стоп».
    Running,
    /// После «стоп»: ещё `steps_left` шагов с растущей задержкой.
    Decelerating { steps_left: u32, delay_ms: u32 },
}

/// Результат одного шага спина.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinStep {
    /// Указатель сдвинулся; следующий шаг через `next_delay_ms`.
    Advanced { index: CellIndex, next_delay_ms: u32 },
    /// Замедление закончилось — спин приземлился на ячейку.
    Landed { index: CellIndex },
    /// Спин не активен, шагать нечего.
    NotSpinning,
}

/// Чистая функция одного шага замедления:
/// (сдвиг указателя, новая задержка, закончено ли).
pub fn next_deceleration_step(steps_left: u32, delay_ms: u32) -> (u8, u32, bool) {
    let new_delay = (delay_ms + DECEL_INCREMENT_MS).min(DECEL_CAP_MS);
    (1, new_delay, steps_left <= 1)
}

/// Состояние спин-машины одной сессии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpinState {
    pub phase: SpinPhase,
}

impl SpinState {
    pub fn new() -> Self {
        Self {
            phase: SpinPhase::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, SpinPhase::Idle)
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, SpinPhase::Running)
    }

    /// Запустить спин. Гварды уже проверены (validation.rs).
    pub fn start(&mut self) {
        self.phase = SpinPhase::Running;
    }

    /// Команда «стоп»: разыграть число шагов замедления из [10, 17].
    pub fn request_stop<R: RandomSource>(&mut self, rng: &mut R) {
        let steps = rng.range_inclusive(DECEL_MIN_STEPS, DECEL_MAX_STEPS);
        self.phase = SpinPhase::Decelerating {
            steps_left: steps,
            delay_ms: RUN_STEP_MS,
        };
    }

    /// Один шаг: сдвинуть указатель на +1 по модулю 18.
    /// На последнем шаге замедления возвращает `Landed` и уходит в Idle.
    pub fn step(&mut self, pointer: &mut CellIndex) -> SpinStep {
        match self.phase {
            SpinPhase::Idle => SpinStep::NotSpinning,
            SpinPhase::Running => {
                *pointer = advance(*pointer);
                SpinStep::Advanced {
                    index: *pointer,
                    next_delay_ms: RUN_STEP_MS,
                }
            }
            SpinPhase::Decelerating {
                steps_left,
                delay_ms,
            } => {
                let (delta, new_delay, done) = next_deceleration_step(steps_left, delay_ms);
                *pointer = (*pointer + delta) % BOARD_SIZE as CellIndex;
                if done {
                    self.phase = SpinPhase::Idle;
                    SpinStep::Landed { index: *pointer }
                } else {
                    self.phase = SpinPhase::Decelerating {
                        steps_left: steps_left - 1,
                        delay_ms: new_delay,
                    };
                    SpinStep::Advanced {
                        index: *pointer,
                        next_delay_ms: new_delay,
                    }
                }
            }
        }
    }
}

impl Default for SpinState {
    fn default() -> Self {
        Self::new()
    }
}

fn advance(pointer: CellIndex) -> CellIndex {
    (pointer + 1) % BOARD_SIZE as CellIndex
}
