use super::card::Card;
use super::category::Category;
use super::error::ParseError;
use super::evaluator::Evaluator;
use super::holding::Holding;
use super::score::Score;

/// A classified play: the cards together with their shape and score.
///
/// Classification happens once, at construction. Two hands are equal when
/// their category and score are equal, which is not the same as holding the
/// same cards: `2c2d2h` and `2c2d2s` score identically as trips.
///
/// Ordering compares scores and is only meaningful between hands of the
/// same size. Callers that compare across sizes get an answer, but not one
/// the rules of the game endorse.
#[derive(Debug, Clone, Copy)]
pub struct Hand {
    cards: Holding,
    category: Category,
    score: Score,
}

impl Hand {
    pub fn cards(&self) -> Holding {
        self.cards
    }
    pub fn category(&self) -> Category {
        self.category
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn size(&self) -> usize {
        self.cards.size()
    }
    pub fn is_valid(&self) -> bool {
        self.category != Category::Invalid
    }
    /// Strongest card in the play.
    pub fn top(&self) -> Option<Card> {
        self.cards.highest()
    }
    /// Same size and strictly higher score.
    pub fn beats(&self, other: &Self) -> bool {
        self.size() == other.size() && self.score > other.score
    }
}

impl From<Holding> for Hand {
    fn from(cards: Holding) -> Self {
        let (category, score) = Evaluator::from(cards).evaluate();
        debug_assert!(score.is_valid() == (category != Category::Invalid));
        Self {
            cards,
            category,
            score,
        }
    }
}
impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self::from(Holding::from(card))
    }
}

/// str isomorphism
/// parse errors propagate, shape errors do not: "AcKs" is a valid parse
/// of an invalid hand
impl TryFrom<&str> for Hand {
    type Error = ParseError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Holding::try_from(s).map(Self::from)
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.score == other.score
    }
}
impl Eq for Hand {}
impl std::hash::Hash for Hand {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.category.hash(state);
        self.score.hash(state);
    }
}
impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Hand {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| self.category.cmp(&other.category))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.cards, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        Hand::try_from(s).unwrap()
    }

    #[test]
    fn single_by_rank() {
        assert!(hand("Kd").score() > hand("Js").score());
        assert!(hand("Kd").beats(&hand("Js")));
    }

    #[test]
    fn single_by_suit() {
        assert!(hand("2s").score() > hand("2h").score());
        assert!(hand("2h").score() > hand("2d").score());
        assert!(hand("2d").score() > hand("2c").score());
    }

    #[test]
    fn pair_by_top_suit() {
        assert_eq!(hand("AsAh").category(), Category::Pair);
        assert!(hand("AsAh").score() > hand("AcAd").score());
        assert!(hand("AdAc").score() > hand("KsKh").score());
    }

    #[test]
    fn trips_by_rank_only() {
        let a = hand("9c9d9h");
        let b = hand("9c9d9s");
        assert_eq!(a, b);
        assert!(!a.beats(&b));
        assert!(hand("TcTdTh").beats(&b));
    }

    #[test]
    fn quads_by_rank() {
        assert_eq!(hand("JdJsJcJh").category(), Category::Quads);
        assert!(hand("QdQsQcQh").beats(&hand("JdJsJcJh")));
    }

    #[test]
    fn invalid_hands_score_zero() {
        for s in ["AcKs", "TdTsTcAc", "2c3c4c5c7d", "AsAhKdKcQs"] {
            let h = hand(s);
            assert!(!h.is_valid(), "{}", s);
            assert_eq!(h.category(), Category::Invalid);
            assert_eq!(h.score(), Score::invalid());
        }
    }

    #[test]
    fn dominance_chain() {
        let chain = [
            "2d3s4c5h6h", // straight
            "Td6d4d2dJd", // flush
            "2s2h2d3c3s", // full house
            "2c3d3s3h3c", // quads with kicker
            "2s3s4s5s6s", // straight flush
        ];
        let hands = chain.map(hand);
        assert_eq!(hands[0].category(), Category::Straight);
        assert_eq!(hands[1].category(), Category::Flush);
        assert_eq!(hands[2].category(), Category::FullHouse);
        assert_eq!(hands[3].category(), Category::QuadsWithKicker);
        assert_eq!(hands[4].category(), Category::StraightFlush);
        for pair in hands.windows(2) {
            assert!(pair[1].beats(&pair[0]), "{} vs {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn tier_boundaries() {
        // strongest of each tier still loses to the weakest of the next
        let boundaries = [
            ("9sTsJsQhKs", "2c3c4c5c7c"), // straight < flush
            ("AsKsQsJs9s", "2c2d2h3c3d"), // flush < full house
            ("AsAhAdKsKh", "2c2d2h2s3c"), // full house < quads
            ("AsAhAdAcKs", "2c3c4c5c6c"), // quads < straight flush
        ];
        for (lower, upper) in boundaries {
            assert!(hand(upper).beats(&hand(lower)), "{} vs {}", upper, lower);
        }
    }

    #[test]
    fn straight_ties_by_top_card() {
        assert!(hand("3c4c5c6d7s").beats(&hand("3d4d5d6h7h")));
        assert!(hand("8c4c5c6d7c").beats(&hand("3d4d5d6h7s")));
    }

    #[test]
    fn full_house_ignores_pair_suits() {
        assert_eq!(hand("5c5d5hKcKd"), hand("5c5d5hKhKs"));
        assert!(hand("6c6d6h2c2d").beats(&hand("5c5d5hAcAd")));
    }

    #[test]
    fn kicker_breaks_quads() {
        assert!(hand("7c7d7h7sKs").beats(&hand("7c7d7h7sKh")));
        assert!(hand("8c8d8h8s2c").beats(&hand("7c7d7h7sAs")));
    }

    #[test]
    fn sizes_must_match() {
        assert!(!hand("2c2d").beats(&hand("As")));
        assert!(!hand("As").beats(&hand("2c2d")));
    }

    #[test]
    fn deterministic() {
        let cards = Holding::try_from("Td6d4d2dJd").unwrap();
        assert_eq!(Hand::from(cards), Hand::from(cards));
        assert_eq!(Hand::from(cards).score(), Hand::from(cards).score());
    }
}
