use serde::{Deserialize, Serialize};

use crate::domain::cash::Cash;
use crate::domain::prize::PrizeKind;
use crate::domain::session::GameSession;
use crate::domain::{CellIndex, PlayerIndex};
use crate::engine::spin::SpinState;

/// Ячейка доски для отрисовки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CellDto {
    pub kind: PrizeKind,
    pub label: String,
    pub value: Cash,
    pub spin_bonus: bool,
    pub bonus_label: Option<String>,
}

/// Карточка игрока на табло.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerViewDto {
    pub name: String,
    pub bank: Cash,
    pub spins_remaining: u32,
    pub whammy_count: u8,
    pub rounds_used: u32,
    pub eliminated: bool,
}

/// Снимок всей сессии для презентации.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionViewDto {
    pub players: Vec<PlayerViewDto>,
    pub board: Vec<CellDto>,
    pub active_player: PlayerIndex,
    pub pointer: CellIndex,
    pub spinning: bool,
    pub game_over: bool,
}

/// Сформировать DTO сессии. `spinning` берём из спин-машины, а не из
/// флага сессии — для презентации важна фактическая фаза.
pub fn build_session_view(session: &GameSession, spin: &SpinState) -> SessionViewDto {
    let players = session
        .players
        .iter()
        .map(|p| PlayerViewDto {
            name: p.name.clone(),
            bank: p.bank,
            spins_remaining: p.spins_remaining,
            whammy_count: p.whammy_count,
            rounds_used: p.rounds_used,
            eliminated: p.is_eliminated(),
        })
        .collect();

    let board = session
        .board
        .cells
        .iter()
        .map(|prize| CellDto {
            kind: prize.kind,
            label: prize.label.clone(),
            value: prize.value,
            spin_bonus: prize.spin_bonus,
            bonus_label: prize.bonus_label.clone(),
        })
        .collect();

    SessionViewDto {
        players,
        board,
        active_player: session.active_player,
        pointer: session.pointer,
        spinning: !spin.is_idle(),
        game_over: session.game_over,
    }
}
