use super::card::Card;
use super::holding::Holding;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// A shuffled 52-card sequence, dealt one card at a time from the top.
///
/// Sequential via ::deal(), or as an Iterator.
#[derive(Debug, Clone)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// Shuffled from thread-local entropy.
    pub fn new() -> Self {
        let mut cards = Card::all().collect::<Vec<_>>();
        cards.shuffle(&mut rand::rng());
        Self(cards)
    }
    /// Shuffled deterministically, for replays and tests.
    pub fn seeded(seed: u64) -> Self {
        let mut cards = Card::all().collect::<Vec<_>>();
        cards.shuffle(&mut SmallRng::seed_from_u64(seed));
        Self(cards)
    }
    /// remove the top card
    pub fn deal(&mut self) -> Option<Card> {
        self.0.pop()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    /// Splits the remaining cards round-robin into `n` holdings.
    ///
    /// Leftover cards that do not divide evenly stay in the deck.
    pub fn split(&mut self, n: usize, each: usize) -> Vec<Holding> {
        let mut holdings = vec![Holding::empty(); n];
        for _ in 0..each {
            for holding in holdings.iter_mut() {
                if let Some(card) = self.deal() {
                    holding.insert(card);
                }
            }
        }
        holdings
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        self.deal()
    }
}
