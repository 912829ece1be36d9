use serde::{Deserialize, Serialize};

use crate::domain::board::Board;
use crate::domain::player::Player;
use crate::domain::{CellIndex, PlayerIndex};

/// Состояние одной игровой сессии: два игрока, доска, указатель,
/// чей ход. Единственный экземпляр на сессию; владеет им вызывающий
/// код (никаких глобалов) — каждый тест собирает свою сессию.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameSession {
    pub players: [Player; 2],
    pub board: Board,
    /// Чей сейчас ход (0 или 1).
    pub active_player: PlayerIndex,
    /// Текущая подсвеченная ячейка.
    pub pointer: CellIndex,
    /// Идёт ли сейчас спин (Running или Decelerating).
    pub spinning: bool,
    pub game_over: bool,
}

impl GameSession {
    /// Новая сессия: оба игрока со стартовыми спинами, ход у первого.
    pub fn new(names: [&str; 2], board: Board) -> Self {
        Self {
            players: [Player::new(names[0]), Player::new(names[1])],
            board,
            active_player: 0,
            pointer: 0,
            spinning: false,
            game_over: false,
        }
    }

    pub fn active(&self) -> &Player {
        &self.players[self.active_player as usize]
    }

    pub fn active_mut(&mut self) -> &mut Player {
        &mut self.players[self.active_player as usize]
    }

    /// Индекс соперника активного игрока.
    pub fn other_index(&self) -> PlayerIndex {
        1 - self.active_player
    }

    pub fn other(&self) -> &Player {
        &self.players[self.other_index() as usize]
    }

    /// У обоих игроков кончились спины — условие конца игры.
    pub fn both_out_of_spins(&self) -> bool {
        self.players.iter().all(|p| p.spins_remaining == 0)
    }
}
