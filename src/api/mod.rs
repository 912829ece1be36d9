//! Внешний API движка — то, что видит презентация.
//!
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — удобные структуры для отрисовки;
//! - ошибки (errors.rs) — то, что видит клиент.
//!
//! Команды, меняющие состояние, живут в `engine::Command` — их здесь
//! не дублируем.

pub mod dto;
pub mod errors;
pub mod queries;

pub use dto::*;
pub use errors::*;
pub use queries::*;
