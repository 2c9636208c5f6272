use super::action::Action;
use super::rules::Violation;
use crate::Position;

/// Failures that end (or prevent) a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("a game needs {min} to {max} players, got {got}", min = crate::MIN_PLAYERS, max = crate::MAX_PLAYERS)]
    Configuration { got: usize },
    #[error("bad deal: {0}")]
    Deal(String),
    #[error("automated player {name} (P{position}) made an illegal play {action}: {violation}")]
    IllegalAutomatedPlay {
        position: Position,
        name: String,
        action: Action,
        violation: Violation,
    },
    #[error("the game is already over")]
    Finished,
}
