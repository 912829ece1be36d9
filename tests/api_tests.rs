//! Тесты API-слоя: DTO сессии, read-only запросы, маппинг ошибок.

use wheel_engine::api::{build_session_view, run_query, ApiError, Query, QueryResponse};
use wheel_engine::domain::{Cash, BOARD_SIZE};
use wheel_engine::engine::{EngineError, Game};
use wheel_engine::infra::DeterministicRng;

/// Снимок свежей сессии: два игрока, 18 ячеек, никто не крутит.
#[test]
fn session_view_reflects_fresh_game() {
    let mut rng = DeterministicRng::from_u64(3);
    let game = Game::new(["PLAYER 1", "PLAYER 2"], &mut rng);

    let view = build_session_view(game.session(), game.spin());

    assert_eq!(view.players.len(), 2);
    assert_eq!(view.players[0].name, "PLAYER 1");
    assert_eq!(view.players[0].bank, Cash::ZERO);
    assert_eq!(view.players[0].spins_remaining, 5);
    assert!(!view.players[0].eliminated);

    assert_eq!(view.board.len(), BOARD_SIZE);
    assert_eq!(view.active_player, 0);
    assert!(!view.spinning);
    assert!(!view.game_over);
}

/// `spinning` в DTO отражает фактическую фазу спин-машины.
#[test]
fn session_view_tracks_spin_phase() {
    let mut rng = DeterministicRng::from_u64(4);
    let mut game = Game::new(["P1", "P2"], &mut rng);

    game.start_spin(&mut rng).unwrap();
    let view = build_session_view(game.session(), game.spin());
    assert!(view.spinning);

    // Замедление — тоже «крутится».
    game.stop_spin(&mut rng).unwrap();
    let view = build_session_view(game.session(), game.spin());
    assert!(view.spinning);
}

/// Запрос GetSession возвращает тот же снимок, что и прямая сборка DTO.
#[test]
fn get_session_query() {
    let mut rng = DeterministicRng::from_u64(5);
    let game = Game::new(["P1", "P2"], &mut rng);

    let QueryResponse::Session(view) = run_query(&game, Query::GetSession);
    assert_eq!(view, build_session_view(game.session(), game.spin()));
}

/// Ошибки движка конвертируются в ApiError с человекочитаемым текстом.
#[test]
fn engine_error_maps_to_api_error() {
    let api_err: ApiError = EngineError::NoSpinsRemaining.into();
    match api_err {
        ApiError::Engine(msg) => assert!(!msg.is_empty()),
        other => panic!("unexpected variant: {other:?}"),
    }
}

/// DTO сериализуется в JSON (контракт с фронтом).
#[test]
fn session_view_serializes_to_json() {
    let mut rng = DeterministicRng::from_u64(6);
    let game = Game::new(["P1", "P2"], &mut rng);
    let view = build_session_view(game.session(), game.spin());

    let json = serde_json::to_string(&view).expect("DTO must serialize");
    assert!(json.contains("\"players\""));
    assert!(json.contains("\"board\""));
}
