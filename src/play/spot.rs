use super::action::Action;
use super::rules::Rules;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Holding;

/// Everything a strategy may see when it is asked to act.
///
/// A read-only view: the game keeps ownership of the held cards and the
/// play history, and a strategy cannot change either.
#[derive(Debug, Clone, Copy)]
pub struct Spot<'a> {
    held: &'a Holding,
    last: Option<&'a Hand>,
    history: &'a [Hand],
    required: Option<Card>,
}

impl<'a> Spot<'a> {
    pub fn new(
        held: &'a Holding,
        last: Option<&'a Hand>,
        history: &'a [Hand],
        required: Option<Card>,
    ) -> Self {
        Self {
            held,
            last,
            history,
            required,
        }
    }
    /// Cards the acting player holds.
    pub fn held(&self) -> &Holding {
        self.held
    }
    /// Hand to beat, or None when leading.
    pub fn last(&self) -> Option<&Hand> {
        self.last
    }
    /// Every successful play of the game so far, oldest first.
    pub fn history(&self) -> &[Hand] {
        self.history
    }
    /// Card the opening play must contain. Only set for the first play.
    pub fn required(&self) -> Option<Card> {
        self.required
    }
    pub fn is_lead(&self) -> bool {
        self.last.is_none()
    }
    /// Would the game accept this action here?
    pub fn allows(&self, action: &Action) -> bool {
        Rules::admit(self.held, action, self.last, self.required).is_ok()
    }
}

impl std::fmt::Display for Spot<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.last {
            Some(last) => write!(f, "to beat {}, holding {}", last, self.held),
            None => write!(f, "leading, holding {}", self.held),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_respects_opening_card() {
        let held = Holding::try_from("KsKc2c").unwrap();
        let two = Card::try_from("2c").ok();
        let spot = Spot::new(&held, None, &[], two);
        assert!(spot.is_lead());
        assert!(spot.allows(&Action::from(Hand::try_from("2c").unwrap())));
        assert!(!spot.allows(&Action::from(Hand::try_from("Ks").unwrap())));
        assert!(!spot.allows(&Action::Pass));
    }

    #[test]
    fn allows_pass_when_following() {
        let held = Holding::try_from("KsKc").unwrap();
        let last = Hand::try_from("Ah").unwrap();
        let history = [last];
        let spot = Spot::new(&held, Some(&last), &history, None);
        assert!(spot.allows(&Action::Pass));
        assert!(!spot.allows(&Action::from(Hand::try_from("Kc").unwrap())));
        assert_eq!(spot.history().len(), 1);
    }
}
