//! Контроллер сессии: владеет `GameSession`, спин-машиной, каталогом и
//! журналом событий; принимает команды презентации и шаги планировщика.

use crate::domain::catalog::PrizeCatalog;
use crate::domain::session::GameSession;
use crate::engine::board_gen::generate_board;
use crate::engine::commands::Command;
use crate::engine::errors::EngineError;
use crate::engine::events::{EventLog, GameEvent, GameEventKind};
use crate::engine::game_loop::{self, GameStatus};
use crate::engine::spin::{SpinState, SpinStep};
use crate::engine::validation::validate_command;
use crate::engine::RandomSource;

/// Результат одного шага планировщика.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickResult {
    /// Указатель сдвинулся; следующий тик через `next_delay_ms`.
    Step { next_delay_ms: u32 },
    /// Спин приземлился, приз применён; игра идёт дальше или закончилась.
    Resolved(GameStatus),
    /// Спин не активен — тик ничего не делает.
    Idle,
}

/// Одна игровая сессия целиком. RNG передаётся в каждый вызов, как и в
/// остальном движке, — контроллер им не владеет.
pub struct Game {
    session: GameSession,
    spin: SpinState,
    catalog: PrizeCatalog,
    events: EventLog,
}

impl Game {
    /// Новая игра со стандартным каталогом.
    pub fn new<R: RandomSource>(names: [&str; 2], rng: &mut R) -> Self {
        Self::with_catalog(names, PrizeCatalog::standard(), rng)
    }

    pub fn with_catalog<R: RandomSource>(
        names: [&str; 2],
        catalog: PrizeCatalog,
        rng: &mut R,
    ) -> Self {
        let board = generate_board(&catalog, rng);
        Self {
            session: GameSession::new(names, board),
            spin: SpinState::new(),
            catalog,
            events: EventLog::new(),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Мутируемый доступ к сессии. Нужен тестам и dev-инструментам,
    /// чтобы собирать точные сценарии; презентация им не пользуется.
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn spin(&self) -> &SpinState {
        &self.spin
    }

    pub fn catalog(&self) -> &PrizeCatalog {
        &self.catalog
    }

    /// Забрать накопленные события для презентации.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Применить команду игрока. Либо состояние меняется и появляются
    /// события, либо команда отклоняется без изменений.
    pub fn apply<R: RandomSource>(
        &mut self,
        command: Command,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        validate_command(&self.session, &self.spin, &command)?;

        match command {
            Command::StartSpin => {
                self.spin.start();
                self.session.spinning = true;
                self.events.push(GameEventKind::SpinStarted {
                    player: self.session.active_player,
                });
            }
            Command::StopSpin => {
                self.spin.request_stop(rng);
            }
            Command::PassSpins => {
                game_loop::pass_spins(&mut self.session, &mut self.events);
            }
            Command::Restart => {
                self.restart(rng);
            }
        }
        Ok(())
    }

    pub fn start_spin<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        self.apply(Command::StartSpin, rng)
    }

    pub fn stop_spin<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        self.apply(Command::StopSpin, rng)
    }

    pub fn pass_spins<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        self.apply(Command::PassSpins, rng)
    }

    /// Один шаг спина от внешнего планировщика. Между тиками никакой
    /// другой мутации нет — всё строго последовательно.
    pub fn tick<R: RandomSource>(&mut self, rng: &mut R) -> TickResult {
        let mut pointer = self.session.pointer;
        match self.spin.step(&mut pointer) {
            SpinStep::NotSpinning => TickResult::Idle,
            SpinStep::Advanced {
                index,
                next_delay_ms,
            } => {
                self.session.pointer = index;
                self.events.push(GameEventKind::CellHighlighted { index });
                TickResult::Step { next_delay_ms }
            }
            SpinStep::Landed { index } => {
                self.session.pointer = index;
                self.session.spinning = false;
                self.events.push(GameEventKind::CellHighlighted { index });
                let status = game_loop::resolve_cell(
                    &mut self.session,
                    &self.catalog,
                    index,
                    rng,
                    &mut self.events,
                );
                TickResult::Resolved(status)
            }
        }
    }

    /// Рестарт: старая сессия выбрасывается целиком, строится новая с
    /// теми же именами игроков. Журнал событий тоже начинается заново.
    pub fn restart<R: RandomSource>(&mut self, rng: &mut R) {
        let board = generate_board(&self.catalog, rng);
        let names = [
            self.session.players[0].name.clone(),
            self.session.players[1].name.clone(),
        ];
        self.session = GameSession::new([names[0].as_str(), names[1].as_str()], board);
        self.spin = SpinState::new();
        self.events = EventLog::new();
    }
}
