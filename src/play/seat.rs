use crate::cards::Holding;
use colored::Colorize;

/// A player's place at the table: their cards and whether they are still in.
///
/// Owned and mutated only by the game.
#[derive(Debug, Clone, Copy)]
pub struct Seat {
    cards: Holding,
    state: State,
}

impl Seat {
    pub fn new(cards: Holding) -> Seat {
        Seat {
            cards,
            state: State::Playing,
        }
    }
    pub fn cards(&self) -> &Holding {
        &self.cards
    }
    pub fn state(&self) -> State {
        self.state
    }
    pub fn is_playing(&self) -> bool {
        self.state == State::Playing
    }

    pub fn shed(&mut self, cards: Holding) {
        self.cards.subtract(cards);
    }
    pub fn set_state(&mut self, state: State) {
        self.state = state;
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            format!("{:>2}", self.cards.size()).green(),
            self.state,
            self.cards,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Playing,
    /// Went out, finishing in this place (0 is first).
    Placed(usize),
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            State::Playing => write!(f, "{}", "P".green()),
            State::Placed(place) => write!(f, "{}", format!("#{}", place + 1).yellow()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shedding() {
        let mut seat = Seat::new(Holding::try_from("KsKc2c").unwrap());
        seat.shed(Holding::try_from("Kc2c").unwrap());
        assert_eq!(seat.cards().to_string(), "Ks");
        assert!(seat.is_playing());
        seat.set_state(State::Placed(0));
        assert!(!seat.is_playing());
    }
}
