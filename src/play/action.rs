use crate::cards::Hand;
use colored::*;

/// What a player does on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Play(Hand),
    Pass,
}

impl Action {
    pub fn hand(&self) -> Option<&Hand> {
        match self {
            Action::Play(hand) => Some(hand),
            Action::Pass => None,
        }
    }
    pub fn is_pass(&self) -> bool {
        matches!(self, Action::Pass)
    }
}

impl From<Hand> for Action {
    fn from(hand: Hand) -> Self {
        Action::Play(hand)
    }
}
impl From<Option<Hand>> for Action {
    fn from(hand: Option<Hand>) -> Self {
        hand.map(Action::Play).unwrap_or(Action::Pass)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Play(hand) => write!(f, "{}", format!("PLAY {}", hand).green()),
            Action::Pass => write!(f, "{}", "PASS".cyan()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_option() {
        let hand = Hand::try_from("AsAh").unwrap();
        assert_eq!(Action::from(Some(hand)), Action::Play(hand));
        assert_eq!(Action::from(None), Action::Pass);
        assert!(Action::Pass.is_pass());
        assert_eq!(Action::Play(hand).hand(), Some(&hand));
    }
}
