//! Доменная модель игры: деньги, призы, каталог, доска, игроки, сессия.

pub mod board;
pub mod cash;
pub mod catalog;
pub mod player;
pub mod prize;
pub mod session;

/// Индекс игрока за столом (всегда 0 или 1).
pub type PlayerIndex = u8;

/// Индекс ячейки на доске (0..BOARD_SIZE).
pub type CellIndex = u8;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Prize и т.п.
pub use board::*;
pub use cash::*;
pub use catalog::*;
pub use player::*;
pub use prize::*;
pub use session::*;
