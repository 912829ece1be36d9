use serde::{Deserialize, Serialize};

/// Команда от презентации к ядру.
///
/// Каждая либо меняет состояние и порождает события, либо отклоняется
/// как no-op (см. validation.rs) — частичного применения не бывает.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Начать спин активного игрока.
    StartSpin,
    /// Остановить спин — указатель докатится ещё 10–17 шагов.
    StopSpin,
    /// Передать все оставшиеся спины сопернику и закончить ход.
    PassSpins,
    /// Выбросить сессию целиком и начать новую игру.
    Restart,
}
