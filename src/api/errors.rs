use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём презентации).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Команда не может быть выполнена в текущем состоянии.
    InvalidCommand(String),

    /// Ошибка движка (гварды спина/паса/конца игры).
    Engine(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::Engine(err.to_string())
    }
}
