use super::card::Card;
use super::category::Category;
use super::holding::Holding;
use super::rank::Rank;
use super::score::Score;
use crate::MAX_HAND_SIZE;

/// Classifies a set of 1 to 5 cards into a [`Category`] and a [`Score`].
///
/// Five-card shapes are found from the bitwise union of the cards'
/// strength values: the rank sub-field counts distinct ranks, the suit
/// sub-field counts distinct suits, and a straight is a one-hot shift.
pub struct Evaluator(Holding);
impl From<Holding> for Evaluator {
    fn from(h: Holding) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn evaluate(&self) -> (Category, Score) {
        match self.0.size() {
            1..=4 => self.find_n_oak(),
            MAX_HAND_SIZE => None
                .or_else(|| self.find_4_oak_kicker())
                .or_else(|| self.find_3_oak_2_oak())
                .or_else(|| self.find_straight_or_flush()),
            _ => None,
        }
        .unwrap_or((Category::Invalid, Score::invalid()))
    }

    /// union of strength values: one-hot rank bits over one-hot suit bits
    fn union(&self) -> u32 {
        self.0.map(u32::from).fold(0u32, |a, b| a | b)
    }
    fn ranks(&self) -> u16 {
        ((self.union() & Score::RANK_MASK) >> Card::SUIT_BITS) as u16
    }
    fn suits(&self) -> u32 {
        self.union() & Score::SUIT_MASK
    }
    fn top(&self) -> Option<Card> {
        self.0.highest()
    }
    /// the two ranks of a two-rank five-card set, larger group first
    fn groups(&self) -> Option<(Rank, Rank)> {
        let ranks = self.ranks();
        if ranks.count_ones() != 2 {
            return None;
        }
        let hi = Rank::from(ranks);
        let lo = Rank::from(ranks & !u16::from(hi));
        if self.0.at(&hi).size() > self.0.at(&lo).size() {
            Some((hi, lo))
        } else {
            Some((lo, hi))
        }
    }

    /// 1 to 4 cards, all one rank. singles and pairs break ties by suit,
    /// trips by rank alone, quads by rank in the group band.
    fn find_n_oak(&self) -> Option<(Category, Score)> {
        let n = self.0.size();
        if self.ranks().count_ones() != 1 {
            return None;
        }
        let category = Category::of_a_kind(n);
        let top = self.top()?;
        let rank = top.rank();
        match n {
            1 | 2 => Some((category, Score::card(category, top))),
            3 => Some((category, Score::rank(category, rank))),
            4 => Some((category, Score::group(category, rank))),
            _ => None,
        }
    }
    fn find_4_oak_kicker(&self) -> Option<(Category, Score)> {
        let (quad, single) = self.groups()?;
        if self.0.at(&quad).size() != 4 {
            return None;
        }
        let kicker = self.0.at(&single).highest()?;
        let category = Category::QuadsWithKicker;
        Some((category, Score::group(category, quad).kick(kicker.strength())))
    }
    fn find_3_oak_2_oak(&self) -> Option<(Category, Score)> {
        let (triple, pair) = self.groups()?;
        if self.0.at(&triple).size() != 3 {
            return None;
        }
        let category = Category::FullHouse;
        let pair = Score::rank(category, pair);
        Some((category, Score::group(category, triple).kick(pair.tiebreak() as u32)))
    }
    /// straight and flush are tested independently and then combined
    fn find_straight_or_flush(&self) -> Option<(Category, Score)> {
        let straight = self.is_straight();
        let flush = self.is_flush();
        let category = match (straight, flush) {
            (true, true) => Category::StraightFlush,
            (false, true) => Category::Flush,
            (true, false) => Category::Straight,
            (false, false) => return None,
        };
        Some((category, Score::card(category, self.top()?)))
    }
    /// five distinct ranks whose extremes are exactly four bits apart
    fn is_straight(&self) -> bool {
        let ranks = self.ranks();
        let hi = u16::from(Rank::from(ranks));
        let lo = ranks & ranks.wrapping_neg();
        ranks.count_ones() == 5 && hi >> 4 == lo
    }
    fn is_flush(&self) -> bool {
        self.suits().count_ones() == 1
    }
}
