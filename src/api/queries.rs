use serde::{Deserialize, Serialize};

use crate::engine::Game;

use super::dto::{build_session_view, SessionViewDto};

/// Запросы «только чтение».
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Получить снимок сессии для отрисовки.
    GetSession,
}

/// Результат запроса «только чтение».
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    Session(SessionViewDto),
}

/// Выполнить запрос над игрой. Состояние не меняется.
pub fn run_query(game: &Game, query: Query) -> QueryResponse {
    match query {
        Query::GetSession => {
            QueryResponse::Session(build_session_view(game.session(), game.spin()))
        }
    }
}
