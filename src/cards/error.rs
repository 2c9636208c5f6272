use super::card::Card;

/// Failure to read a card label such as `"As"` or `"td"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unrecognized rank '{0}'")]
    Rank(char),
    #[error("unrecognized suit '{0}'")]
    Suit(char),
    #[error("card labels are 2 characters, found {0}")]
    Length(usize),
    #[error("card {0} listed more than once")]
    Duplicate(Card),
}
