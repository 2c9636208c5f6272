use super::card::Card;
use super::error::ParseError;
use super::rank::Rank;
use super::suit::Suit;

/// An unordered set of distinct cards stored as one 52-bit word.
///
/// Used both for what a player holds and for the cards making up a play.
/// Each bit is one card, indexed by the card's `u8` encoding, so set
/// operations are single bitwise instructions and no heap is touched.
///
/// Iteration runs strongest card first (rank descending, then suit
/// descending), which is also the display order.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Holding(u64);

impl Holding {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    /// True when every card of `other` is also in `self`.
    pub fn covers(&self, other: &Self) -> bool {
        other.0 & !self.0 == 0
    }
    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }
    pub fn insert(&mut self, card: Card) {
        self.0 |= u64::from(card);
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    /// Removes every card of `other` from `self`.
    pub fn subtract(&mut self, other: Self) {
        self.0 &= !other.0;
    }
    /// Cards of the given suit.
    pub fn of(&self, suit: &Suit) -> Self {
        Self(self.0 & u64::from(*suit))
    }
    /// Cards of the given rank.
    pub fn at(&self, rank: &Rank) -> Self {
        Self(self.0 & (0xF << (u8::from(*rank) * 4)))
    }
    pub fn lowest(&self) -> Option<Card> {
        match self.0 {
            0 => None,
            n => Some(Card::from(n.trailing_zeros() as u8)),
        }
    }
    pub fn highest(&self) -> Option<Card> {
        match self.0 {
            0 => None,
            n => Some(Card::from((64 - 1 - n.leading_zeros()) as u8)),
        }
    }
    /// Strongest first.
    pub fn cards(&self) -> Vec<Card> {
        self.into_iter().collect()
    }
}

/// we can empty a holding from high to low
/// by removing the highest card until nothing is left
impl Iterator for Holding {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        let card = self.highest()?;
        self.remove(card);
        Some(card)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size(), Some(self.size()))
    }
}

/// u64 isomorphism
/// we OR the cards to get the bitstring
/// [2c, Ts, Jc, Js]
/// xxxxxxxxxxxx 0000000000001001100000000000000000000000000000000001
impl From<u64> for Holding {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Holding> for u64 {
    fn from(h: Holding) -> Self {
        h.0
    }
}

impl From<Card> for Holding {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// duplicates collapse, order is forgotten
impl FromIterator<Card> for Holding {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().map(u64::from).fold(0u64, |a, b| a | b))
    }
}

/// one-way conversion to u16 Rank masks
/// which ranks are present, regardless of how many times
impl From<Holding> for u16 {
    fn from(h: Holding) -> Self {
        Rank::all()
            .into_iter()
            .filter(|r| !h.at(r).is_empty())
            .map(u16::from)
            .fold(0u16, |a, b| a | b)
    }
}

/// str isomorphism
/// whitespace-separated or concatenated labels. repeated cards are an error
impl TryFrom<&str> for Holding {
    type Error = ParseError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut holding = Self::empty();
        for card in Card::parse(s)? {
            if holding.contains(&card) {
                return Err(ParseError::Duplicate(card));
            }
            holding.insert(card);
        }
        Ok(holding)
    }
}

impl std::fmt::Display for Holding {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u64() {
        let holding = Holding::try_from("Jc Ts 2c Js").unwrap();
        assert_eq!(holding, Holding::from(u64::from(holding)));
    }

    #[test]
    fn strongest_first() {
        let mut iter = Holding::try_from("Jc Ts 2c Js").unwrap().into_iter();
        assert_eq!(iter.next(), Card::try_from("Js").ok());
        assert_eq!(iter.next(), Card::try_from("Jc").ok());
        assert_eq!(iter.next(), Card::try_from("Ts").ok());
        assert_eq!(iter.next(), Card::try_from("2c").ok());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn display_sorted() {
        let holding = Holding::try_from("2c as kd AH").unwrap();
        assert_eq!(holding.to_string(), "AsAhKd2c");
    }

    #[test]
    fn ranks_in_suit() {
        let holding = Holding::try_from("2c 3d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Ac").unwrap();
        assert_eq!(u16::from(holding.of(&Suit::C)), 0b_1000100010001);
        assert_eq!(u16::from(holding.of(&Suit::D)), 0b_0001000100010);
        assert_eq!(u16::from(holding.of(&Suit::H)), 0b_0010001000100);
        assert_eq!(u16::from(holding.of(&Suit::S)), 0b_0100010001000);
    }

    #[test]
    fn cards_at_rank() {
        let holding = Holding::try_from("KsKc2c").unwrap();
        assert_eq!(holding.at(&Rank::King).size(), 2);
        assert_eq!(holding.at(&Rank::Two).size(), 1);
        assert!(holding.at(&Rank::Ace).is_empty());
    }

    #[test]
    fn covering() {
        let held = Holding::try_from("KsKc2c").unwrap();
        let pair = Holding::try_from("KcKs").unwrap();
        let other = Holding::try_from("KcKd").unwrap();
        assert!(held.covers(&pair));
        assert!(!held.covers(&other));
        let mut rest = held;
        rest.subtract(pair);
        assert_eq!(rest.to_string(), "2c");
    }

    #[test]
    fn duplicate_is_error() {
        assert!(matches!(
            Holding::try_from("AsAs"),
            Err(ParseError::Duplicate(_))
        ));
    }

    #[test]
    fn extremes() {
        let holding = Holding::try_from("Th 3d Qs").unwrap();
        assert_eq!(holding.lowest(), Card::try_from("3d").ok());
        assert_eq!(holding.highest(), Card::try_from("Qs").ok());
        assert_eq!(Holding::empty().lowest(), None);
    }
}
