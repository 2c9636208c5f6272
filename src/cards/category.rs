use super::score::Score;

/// The shape of a play.
///
/// Sub-five shapes are "N of a kind"; five-card shapes are the poker
/// shapes that use all five cards. Scores only compare plays of equal
/// size, so the tier ladder below mixes sizes freely.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Invalid,
    HighCard,
    Pair,
    Trips,
    Straight,
    Flush,
    FullHouse,
    Quads,
    QuadsWithKicker,
    StraightFlush,
}

impl Category {
    /// Tier bits, strictly above every tie-break bit.
    ///
    /// Bare quads and quads with a kicker share a tier; they never meet
    /// since they differ in size.
    pub const fn tier(&self) -> u64 {
        match self {
            Category::Invalid => 0,
            Category::HighCard => 1 << (Score::TIER_SHIFT + 0),
            Category::Pair => 1 << (Score::TIER_SHIFT + 1),
            Category::Trips => 1 << (Score::TIER_SHIFT + 2),
            Category::Straight => 1 << (Score::TIER_SHIFT + 3),
            Category::Flush => 1 << (Score::TIER_SHIFT + 4),
            Category::FullHouse => 1 << (Score::TIER_SHIFT + 5),
            Category::Quads => 1 << (Score::TIER_SHIFT + 6),
            Category::QuadsWithKicker => 1 << (Score::TIER_SHIFT + 6),
            Category::StraightFlush => 1 << (Score::TIER_SHIFT + 7),
        }
    }
    /// The N-of-a-kind shape for a sub-five play of `n` cards.
    pub const fn of_a_kind(n: usize) -> Self {
        match n {
            1 => Category::HighCard,
            2 => Category::Pair,
            3 => Category::Trips,
            4 => Category::Quads,
            _ => Category::Invalid,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Category::Invalid => write!(f, "Invalid"),
            Category::HighCard => write!(f, "HighCard"),
            Category::Pair => write!(f, "Pair"),
            Category::Trips => write!(f, "Trips"),
            Category::Straight => write!(f, "Straight"),
            Category::Flush => write!(f, "Flush"),
            Category::FullHouse => write!(f, "FullHouse"),
            Category::Quads => write!(f, "Quads"),
            Category::QuadsWithKicker => write!(f, "QuadsWithKicker"),
            Category::StraightFlush => write!(f, "StraightFlush"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_strictly_increase() {
        let ladder = [
            Category::HighCard,
            Category::Pair,
            Category::Trips,
            Category::Straight,
            Category::Flush,
            Category::FullHouse,
            Category::Quads,
            Category::StraightFlush,
        ];
        for pair in ladder.windows(2) {
            assert!(pair[0].tier() < pair[1].tier());
        }
    }

    #[test]
    fn tiers_are_one_hot() {
        for category in [
            Category::HighCard,
            Category::Trips,
            Category::QuadsWithKicker,
            Category::StraightFlush,
        ] {
            assert_eq!(category.tier().count_ones(), 1);
        }
        assert_eq!(Category::Invalid.tier(), 0);
    }

    #[test]
    fn tiers_clear_tie_breaks() {
        let lowest = Category::HighCard.tier();
        assert_eq!(lowest & Score::BREAK_MASK, 0);
        assert!(lowest > Score::BREAK_MASK);
    }

    #[test]
    fn quads_share_tier() {
        assert_eq!(Category::Quads.tier(), Category::QuadsWithKicker.tier());
    }
}
