use super::action::Action;
use super::error::GameError;
use super::event::Event;
use super::player::Player;
use super::rules::Rules;
use super::seat::Seat;
use super::seat::State;
use super::spot::Spot;
use crate::CARDS_PER_PLAYER;
use crate::MAX_PLAYERS;
use crate::MIN_PLAYERS;
use crate::Position;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Holding;

/// Where the game is between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting on this position to play or pass.
    Awaiting(Position),
    /// A trick just ended; this position leads the next one.
    Resolved(Position),
    Finished,
}

/// One match, from the deal to a complete finish order.
///
/// The game owns every seat's cards and the play history. Strategies see
/// them only through a [`Spot`]. Progress is driven by [`Game::step`] (one
/// decision), [`Game::trick`] (one trick) or [`Game::run`] (to the end).
#[derive(Debug)]
pub struct Game {
    players: Vec<Player>,
    seats: Vec<Seat>,
    history: Vec<Hand>,
    last: Option<(Position, Hand)>,
    required: Option<Card>,
    order: Vec<Position>,
    phase: Phase,
}

impl Game {
    /// Deals a freshly shuffled deck.
    pub fn new(players: Vec<Player>) -> Result<Self, GameError> {
        Self::shuffled(players, Deck::new())
    }
    /// Deals a deck shuffled from `seed`.
    pub fn seeded(players: Vec<Player>, seed: u64) -> Result<Self, GameError> {
        Self::shuffled(players, Deck::seeded(seed))
    }
    /// Uses fixed hands, one per player in seat order.
    ///
    /// Hands must be non-empty and pairwise disjoint. They need not be full
    /// or equal in size.
    pub fn dealt(players: Vec<Player>, holdings: Vec<Holding>) -> Result<Self, GameError> {
        Self::validate(&players)?;
        if holdings.len() != players.len() {
            return Err(GameError::Deal(format!(
                "{} hands for {} players",
                holdings.len(),
                players.len()
            )));
        }
        if let Some(position) = holdings.iter().position(Holding::is_empty) {
            return Err(GameError::Deal(format!("P{} has no cards", position)));
        }
        let mut seen = Holding::empty();
        for (position, holding) in holdings.iter().enumerate() {
            if u64::from(seen) & u64::from(*holding) != 0 {
                return Err(GameError::Deal(format!("P{} shares cards", position)));
            }
            seen = Holding::add(seen, *holding);
        }
        Self::open(players, holdings)
    }

    fn shuffled(players: Vec<Player>, mut deck: Deck) -> Result<Self, GameError> {
        Self::validate(&players)?;
        let holdings = deck.split(players.len(), CARDS_PER_PLAYER);
        Self::open(players, holdings)
    }
    fn validate(players: &[Player]) -> Result<(), GameError> {
        match players.len() {
            n if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) => Ok(()),
            n => Err(GameError::Configuration { got: n }),
        }
    }
    /// Finds the lowest dealt card; its holder opens and must play it.
    fn open(players: Vec<Player>, holdings: Vec<Holding>) -> Result<Self, GameError> {
        let card = holdings
            .iter()
            .copied()
            .fold(Holding::empty(), Holding::add)
            .lowest()
            .ok_or_else(|| GameError::Deal(String::from("no cards dealt")))?;
        let opener = holdings
            .iter()
            .position(|h| h.contains(&card))
            .ok_or_else(|| GameError::Deal(String::from("opening card not held")))?;
        let mut game = Self {
            players,
            seats: holdings.into_iter().map(Seat::new).collect(),
            history: Vec::new(),
            last: None,
            required: Some(card),
            order: Vec::new(),
            phase: Phase::Awaiting(opener),
        };
        log::info!("[game] P{} ({}) opens with {}", opener, game.players[opener], card);
        game.broadcast(Event::Opened {
            position: opener,
            card,
        });
        Ok(game)
    }
}

impl Game {
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
    /// Position to act next, if anyone.
    pub fn turn(&self) -> Option<Position> {
        match self.phase {
            Phase::Awaiting(position) | Phase::Resolved(position) => Some(position),
            Phase::Finished => None,
        }
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn history(&self) -> &[Hand] {
        &self.history
    }
    /// Hand to beat in the current trick.
    pub fn last(&self) -> Option<&Hand> {
        self.last.as_ref().map(|(_, hand)| hand)
    }
    pub fn required(&self) -> Option<Card> {
        self.required
    }
    /// Finish order so far, winner first.
    pub fn order(&self) -> &[Position] {
        &self.order
    }
}

impl Game {
    /// Plays to the end and returns the finish order, winner first.
    pub fn run(&mut self) -> Result<Vec<Position>, GameError> {
        while !self.is_finished() {
            self.step()?;
        }
        Ok(self.order.clone())
    }
    /// Steps until the current trick resolves or the game ends.
    pub fn trick(&mut self) -> Result<Phase, GameError> {
        if self.is_finished() {
            return Err(GameError::Finished);
        }
        loop {
            match self.step()? {
                Phase::Awaiting(_) => continue,
                phase => return Ok(phase),
            }
        }
    }
    /// Advances by one decision.
    ///
    /// A refused decision from an interactive strategy leaves the phase
    /// unchanged, so the same player is asked again on the next step. A
    /// refused decision from an automated strategy aborts the game.
    pub fn step(&mut self) -> Result<Phase, GameError> {
        match self.phase {
            Phase::Finished => Err(GameError::Finished),
            Phase::Resolved(leader) => {
                self.last = None;
                self.phase = Phase::Awaiting(leader);
                Ok(self.phase)
            }
            Phase::Awaiting(position) => {
                let action = self.decide(position);
                match Rules::admit(
                    self.seats[position].cards(),
                    &action,
                    self.last(),
                    self.required,
                ) {
                    Ok(()) => {
                        self.apply(position, action);
                        Ok(self.phase)
                    }
                    Err(violation) if self.players[position].automated() => {
                        log::error!("[game] P{} illegal {}: {}", position, action, violation);
                        Err(GameError::IllegalAutomatedPlay {
                            position,
                            name: self.players[position].name().to_string(),
                            action,
                            violation,
                        })
                    }
                    Err(violation) => {
                        log::debug!("[game] P{} refused {}: {}", position, action, violation);
                        self.players[position].strategy().rejected(&violation);
                        Ok(self.phase)
                    }
                }
            }
        }
    }

    fn decide(&mut self, position: Position) -> Action {
        let spot = Spot::new(
            self.seats[position].cards(),
            self.last.as_ref().map(|(_, hand)| hand),
            &self.history,
            self.required,
        );
        self.players[position].strategy().decide(&spot)
    }
    fn apply(&mut self, position: Position, action: Action) {
        match action {
            Action::Pass => self.pass(position),
            Action::Play(hand) => self.play(position, hand),
        }
    }
    fn play(&mut self, position: Position, hand: Hand) {
        log::debug!("[game] P{} plays {}", position, hand);
        self.required = None;
        self.history.push(hand);
        self.seats[position].shed(hand.cards());
        self.last = Some((position, hand));
        self.broadcast(Event::Played { position, hand });
        if self.seats[position].cards().is_empty() {
            self.place(position);
        } else {
            self.phase = Phase::Awaiting(self.next(position));
        }
    }
    fn pass(&mut self, position: Position) {
        log::debug!("[game] P{} passes", position);
        self.broadcast(Event::Passed { position });
        let next = self.next(position);
        match self.last {
            Some((winner, _)) if winner == next => self.resolve(winner),
            _ => self.phase = Phase::Awaiting(next),
        }
    }
    /// A player went out: they take the trick, leave the rotation, and the
    /// next player in turn leads.
    fn place(&mut self, position: Position) {
        let place = self.order.len();
        log::info!("[game] P{} ({}) finishes #{}", position, self.players[position], place + 1);
        self.seats[position].set_state(State::Placed(place));
        self.order.push(position);
        self.broadcast(Event::TrickWon { position });
        self.broadcast(Event::Placed { position, place });
        let remaining = (0..self.seats.len())
            .filter(|p| self.seats[*p].is_playing())
            .collect::<Vec<_>>();
        match remaining.as_slice() {
            [last] => {
                let last = *last;
                let place = self.order.len();
                self.seats[last].set_state(State::Placed(place));
                self.order.push(last);
                self.broadcast(Event::Placed {
                    position: last,
                    place,
                });
                self.finish();
            }
            _ => {
                self.last = None;
                self.phase = Phase::Resolved(self.next(position));
            }
        }
    }
    fn resolve(&mut self, winner: Position) {
        log::info!("[game] P{} takes the trick", winner);
        self.broadcast(Event::TrickWon { position: winner });
        self.phase = Phase::Resolved(winner);
    }
    fn finish(&mut self) {
        log::info!("[game] finish order {:?}", self.order);
        self.last = None;
        self.phase = Phase::Finished;
        self.broadcast(Event::Finished {
            order: self.order.clone(),
        });
    }
    /// Next seat still playing after `position`, wrapping around.
    fn next(&self, position: Position) -> Position {
        let n = self.seats.len();
        (1..=n)
            .map(|i| (position + i) % n)
            .find(|p| self.seats[*p].is_playing())
            .unwrap_or(position)
    }
    fn broadcast(&mut self, event: Event) {
        for player in self.players.iter_mut() {
            player.strategy().notify(&event);
        }
    }
}
