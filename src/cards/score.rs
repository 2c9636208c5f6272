use super::card::Card;
use super::category::Category;
use super::rank::Rank;

/// A play's strength packed into one word.
///
/// ```text
/// bit  41..34      33..21          20..17   16..4          3..0
///      tier        group rank      unused   card rank      card suit
///      one-hot     one-hot (<<17)           one-hot        one-hot
/// ```
///
/// The low 17 bits hold a card strength (or a bare rank strength). The
/// group band holds the rank of a repeated group (quads, or the triple of
/// a full house) so that it outranks any kicker beneath it. Tier bits sit
/// above both bands, so a higher tier always wins.
///
/// Comparing two scores is only meaningful for plays of the same size.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(u64);

impl Score {
    /// Shift lifting a strength into the group band.
    pub const GROUP_SHIFT: u32 = 17;
    /// Lowest tier bit.
    pub const TIER_SHIFT: u32 = Self::GROUP_SHIFT * 2;
    /// Every bit below the tiers.
    pub const BREAK_MASK: u64 = (1 << Self::TIER_SHIFT) - 1;
    /// Rank bits of a strength value (suit bits cleared).
    pub const RANK_MASK: u32 = Card::STRENGTH_MASK & !(Self::SUIT_MASK);
    /// Suit bits of a strength value.
    pub const SUIT_MASK: u32 = (1 << Card::SUIT_BITS) - 1;

    pub const fn invalid() -> Self {
        Self(0)
    }
    pub fn is_valid(&self) -> bool {
        self.0 != 0
    }
    /// Tier bits only.
    pub fn tier(&self) -> u64 {
        self.0 & !Self::BREAK_MASK
    }
    /// Tie-break bits only.
    pub fn tiebreak(&self) -> u64 {
        self.0 & Self::BREAK_MASK
    }

    /// Tier plus the exact strength of the deciding card (suit-sensitive).
    pub fn card(category: Category, card: Card) -> Self {
        Self(category.tier() | card.strength() as u64)
    }
    /// Tier plus a rank strength (suit-insensitive).
    pub fn rank(category: Category, rank: Rank) -> Self {
        Self(category.tier() | Self::strength(rank))
    }
    /// Tier plus a group rank lifted above the kicker band.
    pub fn group(category: Category, rank: Rank) -> Self {
        Self(category.tier() | Self::strength(rank) << Self::GROUP_SHIFT)
    }
    /// Adds kicker bits beneath a group score.
    pub fn kick(self, bits: u32) -> Self {
        debug_assert!(bits & !Card::STRENGTH_MASK == 0);
        Self(self.0 | bits as u64)
    }

    /// Rank strength in the same bit positions a card strength uses.
    fn strength(rank: Rank) -> u64 {
        ((u16::from(rank) as u32) << Card::SUIT_BITS) as u64
    }
}

/// u64 isomorphism
impl From<Score> for u64 {
    fn from(s: Score) -> u64 {
        s.0
    }
}
impl From<u64> for Score {
    fn from(n: u64) -> Self {
        Self(n)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:#013x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_do_not_overlap() {
        let ace = Score::strength(Rank::Ace) | Score::SUIT_MASK as u64;
        let group = Score::strength(Rank::Ace) << Score::GROUP_SHIFT;
        assert_eq!(ace & group, 0);
        assert!(group > ace);
        assert!(group < Category::HighCard.tier());
        assert_eq!(group & !Score::BREAK_MASK, 0);
    }

    #[test]
    fn masks_split_strength() {
        assert_eq!(Score::RANK_MASK | Score::SUIT_MASK, Card::STRENGTH_MASK);
        assert_eq!(Score::RANK_MASK & Score::SUIT_MASK, 0);
    }

    #[test]
    fn lowest_group_beats_highest_kicker() {
        let low = Score::group(Category::Quads, Rank::Two);
        let high = Score::group(Category::Quads, Rank::Two).kick(Card::STRENGTH_MASK);
        let next = Score::group(Category::Quads, Rank::Three);
        assert!(low < high);
        assert!(high < next);
    }

    #[test]
    fn rank_score_ignores_suit() {
        let spade = Card::from((Rank::Nine, crate::cards::Suit::S));
        let by_card = Score::card(Category::Trips, spade);
        let by_rank = Score::rank(Category::Trips, Rank::Nine);
        assert!(by_card > by_rank);
        assert_eq!(by_card.tiebreak() & Score::RANK_MASK as u64, by_rank.tiebreak());
    }

    #[test]
    fn split_tier_and_tiebreak() {
        let score = Score::rank(Category::Pair, Rank::Ace);
        assert_eq!(score.tier(), Category::Pair.tier());
        assert_eq!(u64::from(score), score.tier() | score.tiebreak());
        assert!(!Score::invalid().is_valid());
    }
}
