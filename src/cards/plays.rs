use super::card::Card;
use super::hand::Hand;
use super::holding::Holding;
use super::rank::Rank;
use super::suit::Suit;
use crate::MAX_HAND_SIZE;
use std::collections::BTreeSet;

/// Subsets iterates over every k-card subset of a holding.
///
/// Gosper's hack walks the k-bit patterns of an n-bit index space in
/// increasing order; each pattern selects cards from the holding. It holds
/// no more than the n source cards and is deterministic.
pub struct Subsets {
    cards: Vec<Card>,
    next: u64,
}

impl From<(Holding, usize)> for Subsets {
    fn from((holding, k): (Holding, usize)) -> Self {
        let cards = holding.cards();
        let next = match k {
            0 => 0,
            k if k > cards.len() => 0,
            k => (1u64 << k) - 1,
        };
        Self { cards, next }
    }
}

impl Subsets {
    fn exhausted(&self) -> bool {
        self.next == 0 || self.next >> self.cards.len() != 0
    }
    fn permute(&self) -> u64 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }
    fn current(&self) -> Holding {
        self.cards
            .iter()
            .enumerate()
            .filter(|(i, _)| self.next & (1 << i) != 0)
            .map(|(_, c)| *c)
            .collect()
    }
}

impl Iterator for Subsets {
    type Item = Holding;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            return None;
        }
        let subset = self.current();
        self.next = self.permute();
        Some(subset)
    }
}

/// Every legal play that can be made from a held set.
///
/// Candidates are built from same-rank groups, same-suit runs and
/// consecutive-rank windows rather than by classifying every subset, then
/// deduplicated by card set. Every hand returned is valid.
#[derive(Debug, Clone, Copy)]
pub struct Plays(Holding);

impl From<Holding> for Plays {
    fn from(held: Holding) -> Self {
        Self(held)
    }
}

impl Plays {
    /// Legal plays of exactly `size` cards, weakest first.
    pub fn of(&self, size: usize) -> Vec<Hand> {
        let candidates = match size {
            1..=4 => self.n_oak(size),
            MAX_HAND_SIZE => self
                .straights()
                .into_iter()
                .chain(self.flushes())
                .chain(self.full_houses())
                .chain(self.quads_kickers())
                .collect(),
            _ => BTreeSet::new(),
        };
        let mut hands = candidates
            .into_iter()
            .map(Hand::from)
            .inspect(|h| debug_assert!(h.is_valid(), "enumerated {}", h))
            .filter(Hand::is_valid)
            .collect::<Vec<_>>();
        hands.sort_by_key(|h| (h.score(), h.cards()));
        hands
    }
    /// Legal plays of every size, grouped by size then weakest first.
    pub fn all(&self) -> Vec<Hand> {
        (1..=MAX_HAND_SIZE).flat_map(|n| self.of(n)).collect()
    }
    /// Plays that may follow `last`: anything when leading, otherwise
    /// same-size plays that score strictly higher.
    pub fn beating(&self, last: Option<&Hand>) -> Vec<Hand> {
        match last {
            None => self.all(),
            Some(last) => self
                .of(last.size())
                .into_iter()
                .filter(|h| h.beats(last))
                .collect(),
        }
    }

    /// every n-card subset of each rank group
    fn n_oak(&self, n: usize) -> BTreeSet<Holding> {
        Rank::all()
            .iter()
            .map(|r| self.0.at(r))
            .filter(|group| group.size() >= n)
            .flat_map(|group| Subsets::from((group, n)))
            .collect()
    }
    /// every choice of one card from each of five consecutive ranks
    fn straights(&self) -> BTreeSet<Holding> {
        let ranks = Rank::all();
        ranks
            .windows(MAX_HAND_SIZE)
            .filter(|window| window.iter().all(|r| !self.0.at(r).is_empty()))
            .flat_map(|window| {
                window.iter().fold(vec![Holding::empty()], |partials, r| {
                    partials
                        .iter()
                        .flat_map(|p| {
                            self.0
                                .at(r)
                                .map(move |c| Holding::add(*p, Holding::from(c)))
                        })
                        .collect()
                })
            })
            .collect()
    }
    /// every five-card subset of each suit holding five or more
    fn flushes(&self) -> BTreeSet<Holding> {
        Suit::all()
            .iter()
            .map(|s| self.0.of(s))
            .filter(|suited| suited.size() >= MAX_HAND_SIZE)
            .flat_map(|suited| Subsets::from((suited, MAX_HAND_SIZE)))
            .collect()
    }
    /// every triple paired with every pair of a different rank
    fn full_houses(&self) -> BTreeSet<Holding> {
        let mut set = BTreeSet::new();
        for triple in Rank::all() {
            for pair in Rank::all().into_iter().filter(|r| *r != triple) {
                let triples = self.0.at(&triple);
                let pairs = self.0.at(&pair);
                if triples.size() < 3 || pairs.size() < 2 {
                    continue;
                }
                for t in Subsets::from((triples, 3)) {
                    for p in Subsets::from((pairs, 2)) {
                        set.insert(Holding::add(t, p));
                    }
                }
            }
        }
        set
    }
    /// every quad paired with every card of another rank
    fn quads_kickers(&self) -> BTreeSet<Holding> {
        Rank::all()
            .iter()
            .map(|r| self.0.at(r))
            .filter(|quad| quad.size() == 4)
            .flat_map(|quad| {
                let mut rest = self.0;
                rest.subtract(quad);
                rest.map(move |kicker| Holding::add(quad, Holding::from(kicker)))
            })
            .collect()
    }
}
