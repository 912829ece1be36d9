use crate::domain::session::GameSession;
use crate::engine::commands::Command;
use crate::engine::errors::EngineError;
use crate::engine::spin::SpinState;

/// Проверка, допустима ли команда в текущем состоянии сессии.
///
/// Любое нарушение — отклонённый no-op: состояние не меняется.
/// `Restart` допустим всегда, включая завершённую игру, — это
/// единственный выход из терминального состояния.
pub fn validate_command(
    session: &GameSession,
    spin: &SpinState,
    command: &Command,
) -> Result<(), EngineError> {
    if matches!(command, Command::Restart) {
        return Ok(());
    }

    if session.game_over {
        return Err(EngineError::GameAlreadyOver);
    }

    match command {
        Command::StartSpin => {
            if !spin.is_idle() {
                return Err(EngineError::SpinAlreadyRunning);
            }
            if !session.active().has_spins() {
                return Err(EngineError::NoSpinsRemaining);
            }
            Ok(())
        }

        Command::StopSpin => {
            // Стоп осмыслен только в Running: в Decelerating спин уже
            // останавливается, в Idle останавливать нечего.
            if !spin.is_running() {
                return Err(EngineError::NoSpinInProgress);
            }
            Ok(())
        }

        Command::PassSpins => {
            if !spin.is_idle() {
                return Err(EngineError::PassWhileSpinning);
            }
            if !session.active().has_spins() {
                return Err(EngineError::NoSpinsRemaining);
            }
            Ok(())
        }

        Command::Restart => Ok(()),
    }
}
