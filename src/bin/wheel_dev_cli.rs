// src/bin/wheel_dev_cli.rs
//
// Dev-CLI: автоматически отыгрывает целую партию без презентации.
// Планировщик здесь синхронный — задержки из tick() не выдерживаем,
// просто печатаем события по мере появления.

use wheel_engine::engine::{Game, GameEvent, GameEventKind, GameStatus, RandomSource, TickResult};
use wheel_engine::infra::{RngSeed, SystemRng};

fn main() {
    println!("wheel_dev_cli: стартуем авто-партию…");

    // Seed можно передать аргументом — тогда партия воспроизводима.
    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse::<u64>().ok());

    match seed {
        Some(seed) => {
            println!("seed = {seed} (детерминированная партия)");
            let mut rng = RngSeed::from_u64(seed).derive(0, 0).to_rng();
            run_game(&mut rng);
        }
        None => {
            let mut rng = SystemRng;
            run_game(&mut rng);
        }
    }
}

fn run_game<R: RandomSource>(rng: &mut R) {
    let mut game = Game::new(["PLAYER 1", "PLAYER 2"], rng);
    let mut all_events: Vec<GameEvent> = Vec::new();
    let mut spins_played = 0u32;

    'game: loop {
        // Страховка от бесконечной партии на спин-бонусах.
        if spins_played >= 500 {
            println!("слишком длинная партия, обрываем");
            break;
        }

        if let Err(e) = game.start_spin(rng) {
            println!("start_spin отклонён: {e}");
            break;
        }
        spins_played += 1;

        // Несколько «беговых» тиков, затем стоп.
        let running_ticks = rng.range_inclusive(3, 25);
        for _ in 0..running_ticks {
            game.tick(rng);
        }
        if let Err(e) = game.stop_spin(rng) {
            println!("stop_spin отклонён: {e}");
            break;
        }

        // Докручиваем замедление до приземления.
        loop {
            match game.tick(rng) {
                TickResult::Step { .. } => continue,
                TickResult::Resolved(status) => {
                    report_events(&mut game, &mut all_events);
                    match status {
                        GameStatus::Ongoing => break,
                        GameStatus::Finished(outcome) => {
                            println!();
                            match outcome.winner {
                                Some(idx) => println!(
                                    "🏆 Победил {} с банком ${}",
                                    game.session().players[idx as usize].name,
                                    outcome.final_banks[idx as usize].0
                                ),
                                None => println!(
                                    "🤝 Ничья: ${} / ${}",
                                    outcome.final_banks[0].0, outcome.final_banks[1].0
                                ),
                            }
                            break 'game;
                        }
                    }
                }
                TickResult::Idle => {
                    println!("tick в Idle — неожиданно");
                    break 'game;
                }
            }
        }
    }

    println!();
    println!("================ EVENT LOG (JSON) =================");
    match serde_json::to_string_pretty(&all_events) {
        Ok(json) => println!("{json}"),
        Err(e) => println!("serde_json error: {e}"),
    }
}

/// Напечатать и накопить свежие события (подсветки ячеек пропускаем,
/// их слишком много для консоли).
fn report_events(game: &mut Game, all_events: &mut Vec<GameEvent>) {
    for event in game.drain_events() {
        match &event.kind {
            GameEventKind::CellHighlighted { .. } => {}
            kind => println!("  [{}] {kind:?}", event.index),
        }
        all_events.push(event);
    }
}
