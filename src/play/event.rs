use crate::Position;
use crate::cards::Card;
use crate::cards::Hand;
use colored::*;

/// Public game events, posted to every seated strategy as they happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Cards are dealt; `position` holds `card` and must open with it.
    Opened { position: Position, card: Card },
    Played { position: Position, hand: Hand },
    Passed { position: Position },
    /// Everyone else passed (or the player went out); `position` leads next.
    TrickWon { position: Position },
    /// `position` has no cards left and finishes in `place` (0 is first).
    Placed { position: Position, place: usize },
    /// Final finish order, winner first.
    Finished { order: Vec<Position> },
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Opened { position, card } => {
                write!(f, "P{} opens, holding {}", position, card)
            }
            Event::Played { position, hand } => {
                write!(f, "P{} {}", position, format!("plays {}", hand).green())
            }
            Event::Passed { position } => write!(f, "P{} {}", position, "passes".cyan()),
            Event::TrickWon { position } => {
                write!(f, "P{} {}", position, "takes the trick".yellow())
            }
            Event::Placed { position, place } => {
                write!(f, "P{} {}", position, format!("finishes #{}", place + 1).magenta())
            }
            Event::Finished { order } => {
                let order = order
                    .iter()
                    .map(|p| format!("P{}", p))
                    .collect::<Vec<_>>()
                    .join(" > ");
                write!(f, "{}", format!("game over: {}", order).bold())
            }
        }
    }
}
