//! Разрешение приза и машина хода/раунда: списание спина, Whammy,
//! выбывание, передача хода, конец игры.

use crate::domain::catalog::PrizeCatalog;
use crate::domain::player::{PlayerStatus, ELIMINATION_WHAMMIES};
use crate::domain::session::GameSession;
use crate::domain::CellIndex;
use crate::engine::board_gen::generate_board;
use crate::engine::events::{EventLog, GameEventKind, GameOutcome};
use crate::engine::RandomSource;

/// Статус игры для внешнего кода.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished(GameOutcome),
}

/// Применить приз ячейки, на которую приземлился спин активного игрока.
///
/// Порядок строго такой:
/// 1. списать один спин (спин тратится при любом исходе);
/// 2. Whammy: запомнить и обнулить банк, ++whammy_count, пересобрать
///    доску (всегда, выбыл игрок или нет); на четвёртом Whammy — выбывание;
/// 3. иначе: начислить деньги, при spin_bonus вернуть один спин;
/// 4. обычное продолжение: при 0 спинов — конец хода, иначе ход остаётся.
pub fn resolve_cell<R: RandomSource>(
    session: &mut GameSession,
    catalog: &PrizeCatalog,
    cell: CellIndex,
    rng: &mut R,
    events: &mut EventLog,
) -> GameStatus {
    let prize = session.board.prize_at(cell).clone();
    let player_idx = session.active_player;

    let player = session.active_mut();
    player.spins_remaining = player.spins_remaining.saturating_sub(1);

    if prize.is_whammy() {
        let lost = player.bank;
        player.bank = crate::domain::Cash::ZERO;
        player.whammy_count += 1;

        let eliminated = player.whammy_count >= ELIMINATION_WHAMMIES;

        events.push(GameEventKind::PrizeResolved {
            player: player_idx,
            prize,
            cash_delta: -(lost.0 as i64),
            bank_total: session.players[player_idx as usize].bank,
            spins_remaining: session.players[player_idx as usize].spins_remaining,
            whammy_count: session.players[player_idx as usize].whammy_count,
        });

        // Доска пересобирается на каждом Whammy; старая раскладка
        // выбрасывается, указатель встаёт на 0.
        session.board = generate_board(catalog, rng);
        session.pointer = 0;
        events.push(GameEventKind::BoardRebuilt {
            whammy_count: session.board.whammy_count() as u32,
        });

        if eliminated {
            return eliminate_active(session, events);
        }
        return continue_after_resolution(session, events);
    }

    player.bank += prize.value;
    if prize.spin_bonus {
        player.spins_remaining += 1;
    }
    let cash_delta = prize.value.0 as i64;

    events.push(GameEventKind::PrizeResolved {
        player: player_idx,
        prize,
        cash_delta,
        bank_total: session.players[player_idx as usize].bank,
        spins_remaining: session.players[player_idx as usize].spins_remaining,
        whammy_count: session.players[player_idx as usize].whammy_count,
    });

    continue_after_resolution(session, events)
}

/// Передать все оставшиеся спины сопернику и закончить ход.
/// Гварды уже проверены: очередь пасующего, спины > 0, спин не идёт.
pub fn pass_spins(session: &mut GameSession, events: &mut EventLog) -> GameStatus {
    let from = session.active_player;
    let to = session.other_index();
    let amount = session.active().spins_remaining;

    session.players[to as usize].spins_remaining += amount;
    session.players[from as usize].spins_remaining = 0;

    events.push(GameEventKind::SpinsPassed { from, to, amount });

    // У пасующего теперь 0 спинов, так что ход всегда переходит;
    // конец игры здесь невозможен — соперник только что получил спины.
    end_turn(session, events)
}

/// Обычное продолжение после разрешения приза: при 0 спинов — конец
/// хода, иначе активный игрок сам решает, крутить дальше или пасовать.
fn continue_after_resolution(session: &mut GameSession, events: &mut EventLog) -> GameStatus {
    if session.active().spins_remaining == 0 {
        end_turn(session, events)
    } else {
        GameStatus::Ongoing
    }
}

/// Конец хода: ++rounds_used у ещё активного игрока, ход — сопернику.
/// Если у соперника тоже 0 спинов — игра закончена.
fn end_turn(session: &mut GameSession, events: &mut EventLog) -> GameStatus {
    session.active_mut().rounds_used += 1;
    session.active_player = session.other_index();

    if session.active().spins_remaining == 0 {
        return finish_game(session, events);
    }

    events.push(GameEventKind::TurnChanged {
        player: session.active_player,
        spins_available: session.active().spins_remaining,
    });
    GameStatus::Ongoing
}

/// Выбывание активного игрока (четвёртый Whammy): остаток спинов
/// сгорает; ход сопернику, либо конец игры, если тому нечем крутить.
fn eliminate_active(session: &mut GameSession, events: &mut EventLog) -> GameStatus {
    let eliminated = session.active_player;
    {
        let player = session.active_mut();
        player.spins_remaining = 0;
        player.status = PlayerStatus::Eliminated;
    }
    events.push(GameEventKind::PlayerEliminated { player: eliminated });

    if session.other().spins_remaining == 0 {
        return finish_game(session, events);
    }

    session.active_player = session.other_index();
    events.push(GameEventKind::TurnChanged {
        player: session.active_player,
        spins_available: session.active().spins_remaining,
    });
    GameStatus::Ongoing
}

/// Терминальное состояние: сравнить банки, эмитнуть GameOver один раз.
fn finish_game(session: &mut GameSession, events: &mut EventLog) -> GameStatus {
    debug_assert!(!session.game_over, "finish_game must run at most once");
    session.game_over = true;

    let outcome = outcome_of(session);
    events.push(GameEventKind::GameOver { outcome });
    GameStatus::Finished(outcome)
}

/// Чистое чтение терминального состояния: строго больший банк
/// выигрывает, равные банки — ничья.
pub fn outcome_of(session: &GameSession) -> GameOutcome {
    let banks = [session.players[0].bank, session.players[1].bank];
    let winner = if banks[0] > banks[1] {
        Some(0)
    } else if banks[1] > banks[0] {
        Some(1)
    } else {
        None
    };
    GameOutcome {
        winner,
        final_banks: banks,
    }
}
