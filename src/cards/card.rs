use super::error::ParseError;
use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. Byte order equals strength order: rank dominates,
/// suit breaks ties, and no two cards compare equal.
///
/// # Representations
///
/// - `u8`: compact index `0..52`
/// - `u32`: the strength value, a one-hot rank bit above a one-hot suit bit
/// - `u64`: single-bit representation for set membership in [`Holding`]
///
/// [`Holding`]: super::holding::Holding
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Bits reserved for the suit one-hot below the rank field.
    pub const SUIT_BITS: u32 = 4;
    /// Every bit a strength value can occupy.
    pub const STRENGTH_MASK: u32 = 0x1FFFF;

    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// Packed strength: `rank bit << 4 | suit bit`.
    ///
    /// Identifies the card, orders cards, and feeds hand scoring directly.
    pub fn strength(&self) -> u32 {
        u32::from(*self)
    }
    /// All 52 cards, weakest first.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..52u8).map(Card)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// u32 isomorphism
/// the strength value. rank one-hot in bits 4..17, suit one-hot in bits 0..4
/// Ts
/// xxxxxxxxxxxxxxx AKQJT98765432 shdc
/// 000000000000000 0000100000000 1000
impl From<Card> for u32 {
    fn from(c: Card) -> u32 {
        let rank = (u16::from(c.rank()) as u32) << Card::SUIT_BITS;
        let suit = 1 << u8::from(c.suit());
        rank | suit
    }
}
impl From<u32> for Card {
    fn from(n: u32) -> Self {
        let rank = Rank::from((n >> Card::SUIT_BITS) as u16);
        let suit = Suit::from((n & Suit::mask() as u32).trailing_zeros() as u8);
        Self::from((rank, suit))
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism, `<rank><suit>` case-insensitive
impl TryFrom<&str> for Card {
    type Error = ParseError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars = s.trim().chars().collect::<Vec<char>>();
        match chars.as_slice() {
            [r, s] => Ok(Card::from((Rank::try_from(*r)?, Suit::try_from(*s)?))),
            other => Err(ParseError::Length(other.len())),
        }
    }
}

impl Card {
    /// Parses whitespace-separated or concatenated card labels.
    ///
    /// Whitespace is ignored and every two characters form one card.
    /// Returns an error if any card fails to parse.
    pub fn parse(s: &str) -> Result<Vec<Self>, ParseError> {
        s.replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}
