//! Интеграционные тесты контроллера `Game`: полная партия на
//! детерминированном RNG, порядок событий, гварды команд, рестарт.

use wheel_engine::domain::{Board, Cash, Prize, PrizeKind, BOARD_SIZE};
use wheel_engine::engine::{
    Command, EngineError, Game, GameEvent, GameEventKind, GameStatus, RandomSource, TickResult,
};
use wheel_engine::infra::{DeterministicRng, RngSeed};

fn money(value: u64) -> Prize {
    Prize {
        kind: PrizeKind::Money,
        label: format!("${value}"),
        value: Cash(value),
        spin_bonus: false,
        bonus_label: None,
        weight: 1,
    }
}

/// Прогнать один спин целиком: старт → несколько беговых тиков →
/// стоп → тики до приземления. Возвращает статус после разрешения.
fn play_one_spin<R: RandomSource>(game: &mut Game, rng: &mut R) -> GameStatus {
    game.start_spin(rng).expect("start must be legal here");
    for _ in 0..5 {
        game.tick(rng);
    }
    game.stop_spin(rng).expect("stop must be legal here");

    loop {
        match game.tick(rng) {
            TickResult::Step { .. } => continue,
            TickResult::Resolved(status) => return status,
            TickResult::Idle => panic!("tick went idle mid-spin"),
        }
    }
}

/// Полная партия на seed'е: завершается, GameOver ровно один и
/// последний, оба игрока без спинов.
#[test]
fn full_deterministic_game_terminates() {
    let mut rng = RngSeed::from_u64(2024).derive(0, 0).to_rng();
    let mut game = Game::new(["PLAYER 1", "PLAYER 2"], &mut rng);
    let mut all_events: Vec<GameEvent> = Vec::new();

    let mut spins = 0;
    loop {
        assert!(spins < 500, "game did not terminate");
        let status = play_one_spin(&mut game, &mut rng);
        all_events.extend(game.drain_events());
        spins += 1;
        if let GameStatus::Finished(outcome) = status {
            // Исход согласуется с банками.
            let banks = [
                game.session().players[0].bank,
                game.session().players[1].bank,
            ];
            assert_eq!(outcome.final_banks, banks);
            match outcome.winner {
                Some(idx) => {
                    assert!(banks[idx as usize] > banks[1 - idx as usize]);
                }
                None => assert_eq!(banks[0], banks[1]),
            }
            break;
        }
    }

    assert!(game.session().game_over);
    assert!(game.session().both_out_of_spins());

    // GameOver один и стоит последним.
    let game_over_positions: Vec<usize> = all_events
        .iter()
        .enumerate()
        .filter(|(_, e)| matches!(e.kind, GameEventKind::GameOver { .. }))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(game_over_positions, vec![all_events.len() - 1]);

    // Индексы событий строго возрастают сквозь все drain'ы.
    assert!(all_events
        .windows(2)
        .all(|w| w[1].index == w[0].index + 1));

    // Подсветки каждого спина предшествуют его PrizeResolved.
    let mut seen_highlight = false;
    for e in &all_events {
        match &e.kind {
            GameEventKind::CellHighlighted { .. } => seen_highlight = true,
            GameEventKind::PrizeResolved { .. } => {
                assert!(seen_highlight, "resolution without pointer advance");
                seen_highlight = false;
            }
            _ => {}
        }
    }
}

/// Одинаковый seed — один и тот же журнал событий.
#[test]
fn same_seed_same_event_log() {
    let run = |seed: u64| -> Vec<GameEvent> {
        let mut rng = RngSeed::from_u64(seed).derive(0, 0).to_rng();
        let mut game = Game::new(["P1", "P2"], &mut rng);
        let mut events = Vec::new();
        for _ in 0..500 {
            let status = play_one_spin(&mut game, &mut rng);
            events.extend(game.drain_events());
            if matches!(status, GameStatus::Finished(_)) {
                break;
            }
        }
        events
    };

    assert_eq!(run(7), run(7));
}

/// Гварды контроллера: команды в неправильной фазе отклоняются и
/// ничего не меняют.
#[test]
fn command_guards_reject_without_mutation() {
    let mut rng = DeterministicRng::from_u64(1);
    let mut game = Game::new(["P1", "P2"], &mut rng);

    // Стоп до старта.
    assert_eq!(
        game.stop_spin(&mut rng),
        Err(EngineError::NoSpinInProgress)
    );

    game.start_spin(&mut rng).unwrap();
    let snapshot = game.session().clone();

    // Повторный старт и пас во время спина.
    assert_eq!(
        game.start_spin(&mut rng),
        Err(EngineError::SpinAlreadyRunning)
    );
    assert_eq!(
        game.pass_spins(&mut rng),
        Err(EngineError::PassWhileSpinning)
    );
    assert_eq!(game.session(), &snapshot, "rejected commands are no-ops");
}

/// Любая команда после конца игры отклоняется; рестарт — нет.
#[test]
fn commands_after_game_over_rejected_restart_allowed() {
    let mut rng = DeterministicRng::from_u64(5);
    let mut game = Game::new(["P1", "P2"], &mut rng);

    // Сводим игру к последнему спину: у активного один спин, у
    // соперника ноль, доска без Whammy.
    {
        let session = game.session_mut();
        session.board = Board::from_cells(vec![money(500); BOARD_SIZE]);
        session.players[0].spins_remaining = 1;
        session.players[1].spins_remaining = 0;
    }

    let status = play_one_spin(&mut game, &mut rng);
    assert!(matches!(status, GameStatus::Finished(_)));
    assert!(game.session().game_over);

    assert_eq!(
        game.start_spin(&mut rng),
        Err(EngineError::GameAlreadyOver)
    );
    assert_eq!(
        game.pass_spins(&mut rng),
        Err(EngineError::GameAlreadyOver)
    );
    assert_eq!(
        game.stop_spin(&mut rng),
        Err(EngineError::GameAlreadyOver)
    );

    // Рестарт законен всегда: свежая сессия, те же имена.
    game.apply(Command::Restart, &mut rng).unwrap();
    let session = game.session();
    assert!(!session.game_over);
    assert_eq!(session.players[0].name, "P1");
    assert_eq!(session.players[0].bank, Cash::ZERO);
    assert_eq!(session.players[0].spins_remaining, 5);
    assert_eq!(session.players[1].spins_remaining, 5);
    assert_eq!(session.active_player, 0);
    assert!(game.drain_events().is_empty(), "event log starts fresh");
}

/// Пас без спинов отклоняется.
#[test]
fn pass_with_zero_spins_rejected() {
    let mut rng = DeterministicRng::from_u64(9);
    let mut game = Game::new(["P1", "P2"], &mut rng);
    game.session_mut().players[0].spins_remaining = 0;

    assert_eq!(
        game.pass_spins(&mut rng),
        Err(EngineError::NoSpinsRemaining)
    );
}

/// Тик без активного спина — Idle, состояние не меняется.
#[test]
fn tick_while_idle_is_noop() {
    let mut rng = DeterministicRng::from_u64(11);
    let mut game = Game::new(["P1", "P2"], &mut rng);

    let before = game.session().clone();
    assert_eq!(game.tick(&mut rng), TickResult::Idle);
    assert_eq!(game.session(), &before);
    assert!(game.drain_events().is_empty());
}

/// Нумерация событий сквозная между drain'ами.
#[test]
fn event_indices_survive_drains() {
    let mut rng = DeterministicRng::from_u64(13);
    let mut game = Game::new(["P1", "P2"], &mut rng);

    game.start_spin(&mut rng).unwrap();
    let first = game.drain_events();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].index, 0);
    assert!(matches!(first[0].kind, GameEventKind::SpinStarted { .. }));

    game.tick(&mut rng);
    let second = game.drain_events();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].index, 1);
    assert!(matches!(
        second[0].kind,
        GameEventKind::CellHighlighted { .. }
    ));
}
