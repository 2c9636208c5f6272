use crate::cards::Hand;
use crate::cards::Holding;
use crate::cards::Plays;
use crate::play::Action;
use crate::play::Spot;
use std::collections::HashMap;

/// Enumerated plays, cached per held set.
///
/// A bot's held set only shrinks, and only when it plays, so the same set
/// comes up on every turn in between.
#[derive(Debug, Default)]
pub struct Memo(HashMap<Holding, Vec<Hand>>);

impl Memo {
    /// Every play legal in this spot, weakest first within each size.
    pub fn legal(&mut self, spot: &Spot) -> Vec<Hand> {
        self.plays(spot.held())
            .iter()
            .copied()
            .filter(|hand| spot.allows(&Action::Play(*hand)))
            .collect()
    }
    fn plays(&mut self, held: &Holding) -> &[Hand] {
        self.0
            .entry(*held)
            .or_insert_with(|| Plays::from(*held).all())
    }
}
