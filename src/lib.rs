//! Движок настольной игры «колесо фортуны» на двоих.
//!
//! Ядро: доска из 18 призовых ячеек, спин с замедлением до одной ячейки,
//! начисление денег/спинов, Whammy (обнуление банка), выбывание после
//! четырёх Whammy, передача хода и завершение игры.
//!
//! Презентация (DOM, кнопки, попапы) — внешний слой: она шлёт команды
//! (`engine::Command`) и читает события (`engine::GameEvent`).

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use engine::{Command, EngineError, Game, GameStatus};
