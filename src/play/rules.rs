use super::action::Action;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Holding;

/// Why a proposed action was refused.
///
/// The `Display` text is what an interactive player is shown before being
/// asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("that is not a legal hand")]
    InvalidShape,
    #[error("you do not hold all of those cards")]
    NotHeld,
    #[error("the opening play must include {0}")]
    MissingOpeningCard(Card),
    #[error("play a hand of the same size that beats the last one")]
    DoesNotBeat,
    #[error("you are leading, you cannot pass")]
    MustLead,
}

/// Legality checks for a proposed play.
pub struct Rules;

impl Rules {
    /// Checks a play against what the actor holds, the hand to beat, and
    /// the opening-card constraint, in that order. The first failure wins.
    pub fn check(
        held: &Holding,
        hand: &Hand,
        last: Option<&Hand>,
        required: Option<Card>,
    ) -> Result<(), Violation> {
        if !hand.is_valid() {
            return Err(Violation::InvalidShape);
        }
        if !held.covers(&hand.cards()) {
            return Err(Violation::NotHeld);
        }
        if let Some(card) = required {
            if !hand.cards().contains(&card) {
                return Err(Violation::MissingOpeningCard(card));
            }
        }
        if let Some(last) = last {
            if !hand.beats(last) {
                return Err(Violation::DoesNotBeat);
            }
        }
        Ok(())
    }
    /// Checks either kind of action. Passing is refused only on the lead.
    pub fn admit(
        held: &Holding,
        action: &Action,
        last: Option<&Hand>,
        required: Option<Card>,
    ) -> Result<(), Violation> {
        match (action, last) {
            (Action::Play(hand), _) => Self::check(held, hand, last, required),
            (Action::Pass, None) => Err(Violation::MustLead),
            (Action::Pass, Some(_)) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(s: &str) -> Holding {
        Holding::try_from(s).unwrap()
    }
    fn hand(s: &str) -> Hand {
        Hand::try_from(s).unwrap()
    }

    #[test]
    fn accepts_legal_lead() {
        assert_eq!(Rules::check(&held("KsKc2c"), &hand("KsKc"), None, None), Ok(()));
    }

    #[test]
    fn invalid_shape_first() {
        let verdict = Rules::check(&held("2c"), &hand("AcKs"), None, None);
        assert_eq!(verdict, Err(Violation::InvalidShape));
    }

    #[test]
    fn not_held_even_if_stronger() {
        let last = hand("Kd");
        let verdict = Rules::check(&held("KsKc2c"), &hand("As"), Some(&last), None);
        assert_eq!(verdict, Err(Violation::NotHeld));
    }

    #[test]
    fn opening_card_required() {
        let two = Card::try_from("2c").unwrap();
        let verdict = Rules::check(&held("KsKc2c"), &hand("KsKc"), None, Some(two));
        assert_eq!(verdict, Err(Violation::MissingOpeningCard(two)));
        let verdict = Rules::check(&held("KsKc2c"), &hand("2c"), None, Some(two));
        assert_eq!(verdict, Ok(()));
    }

    #[test]
    fn must_beat_same_size() {
        let last = hand("Ah");
        let h = held("KsKcAs");
        assert_eq!(Rules::check(&h, &hand("Kc"), Some(&last), None), Err(Violation::DoesNotBeat));
        assert_eq!(Rules::check(&h, &hand("KsKc"), Some(&last), None), Err(Violation::DoesNotBeat));
        assert_eq!(Rules::check(&h, &hand("As"), Some(&last), None), Ok(()));
    }

    #[test]
    fn equal_score_does_not_beat() {
        let last = hand("9c9d9h");
        let verdict = Rules::check(&held("9s9c9d"), &hand("9s9c9d"), Some(&last), None);
        assert_eq!(verdict, Err(Violation::DoesNotBeat));
    }

    #[test]
    fn check_order() {
        // not held and does not beat: NotHeld is reported
        let last = hand("As");
        let verdict = Rules::check(&held("2c"), &hand("3c"), Some(&last), None);
        assert_eq!(verdict, Err(Violation::NotHeld));
    }

    #[test]
    fn passing() {
        let last = hand("As");
        assert_eq!(Rules::admit(&held("2c"), &Action::Pass, None, None), Err(Violation::MustLead));
        assert_eq!(Rules::admit(&held("2c"), &Action::Pass, Some(&last), None), Ok(()));
    }

    #[test]
    fn rejection_messages() {
        let two = Card::try_from("2c").unwrap();
        assert_eq!(
            Violation::MissingOpeningCard(two).to_string(),
            "the opening play must include 2c"
        );
        assert!(!Violation::NotHeld.to_string().is_empty());
    }
}
