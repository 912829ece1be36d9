use thiserror::Error;

/// Ошибки движка. Все они — отклонённые команды: состояние игры при
/// этом не меняется, команда либо применяется целиком, либо целиком
/// отвергается.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("У игрока не осталось спинов")]
    NoSpinsRemaining,

    #[error("Спин уже запущен")]
    SpinAlreadyRunning,

    #[error("Сейчас нет активного спина")]
    NoSpinInProgress,

    #[error("Нельзя пасовать, пока идёт спин")]
    PassWhileSpinning,

    #[error("Игра уже завершена")]
    GameAlreadyOver,

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
