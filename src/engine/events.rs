use serde::{Deserialize, Serialize};

use crate::domain::cash::Cash;
use crate::domain::prize::Prize;
use crate::domain::{CellIndex, PlayerIndex};

/// Итог завершённой игры.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameOutcome {
    /// Победитель по банку; None — ничья.
    pub winner: Option<PlayerIndex>,
    /// Финальные банки обоих игроков.
    pub final_banks: [Cash; 2],
}

/// Тип события, адресованного презентации.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum GameEventKind {
    /// Активный игрок запустил спин.
    SpinStarted { player: PlayerIndex },

    /// Указатель сдвинулся на новую ячейку (Running и Decelerating).
    CellHighlighted { index: CellIndex },

    /// Спин завершён, приз применён к игроку.
    PrizeResolved {
        player: PlayerIndex,
        prize: Prize,
        /// Изменение банка: +value приза, либо минус потерянный на Whammy банк.
        cash_delta: i64,
        bank_total: Cash,
        spins_remaining: u32,
        whammy_count: u8,
    },

    /// Доска пересобрана после Whammy (указатель сброшен на 0).
    BoardRebuilt { whammy_count: u32 },

    /// Игрок собрал четвёртый Whammy и выбыл.
    PlayerEliminated { player: PlayerIndex },

    /// Игрок передал спины сопернику.
    SpinsPassed {
        from: PlayerIndex,
        to: PlayerIndex,
        amount: u32,
    },

    /// Ход перешёл к другому игроку.
    TurnChanged {
        player: PlayerIndex,
        spins_available: u32,
    },

    /// Игра завершена. Эмитится ровно один раз за сессию.
    GameOver { outcome: GameOutcome },
}

/// Событие с порядковым номером — презентация может проверять, что
/// ничего не потеряла.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// Журнал событий сессии. События добавляются строго в порядке
/// переходов состояния: подсветки ячеек раньше PrizeResolved того же
/// спина, PrizeResolved раньше порождённых им событий хода/конца игры.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
    /// Номер следующего события. Не сбрасывается при `drain`, чтобы
    /// нумерация оставалась сквозной в пределах сессии.
    next_index: u32,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            next_index: 0,
        }
    }

    pub fn push(&mut self, kind: GameEventKind) {
        let idx = self.next_index;
        self.next_index += 1;
        self.events.push(GameEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Забрать накопленные события (для презентации).
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
