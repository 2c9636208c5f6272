use super::memo::Memo;
use crate::play::Action;
use crate::play::Spot;
use crate::play::Strategy;

/// CPU player that sheds its weakest cards first.
///
/// Leads its lowest single and follows with the cheapest play that beats
/// the last one, passing only when nothing does.
#[derive(Debug, Default)]
pub struct Grinder {
    memo: Memo,
}

impl Strategy for Grinder {
    fn decide(&mut self, spot: &Spot) -> Action {
        self.memo
            .legal(spot)
            .into_iter()
            .next()
            .map(Action::Play)
            .unwrap_or(Action::Pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::cards::Hand;
    use crate::cards::Holding;

    #[test]
    fn leads_lowest_single() {
        let held = Holding::try_from("KsKc2c").unwrap();
        let spot = Spot::new(&held, None, &[], Card::try_from("2c").ok());
        let action = Grinder::default().decide(&spot);
        assert_eq!(action, Action::from(Hand::try_from("2c").unwrap()));
    }

    #[test]
    fn follows_cheapest() {
        let held = Holding::try_from("AhAdKsKcQd").unwrap();
        let last = Hand::try_from("JsJh").unwrap();
        let spot = Spot::new(&held, Some(&last), &[], None);
        let action = Grinder::default().decide(&spot);
        assert_eq!(action, Action::from(Hand::try_from("KsKc").unwrap()));
    }

    #[test]
    fn passes_when_beaten() {
        let held = Holding::try_from("2c2d").unwrap();
        let last = Hand::try_from("3c3d").unwrap();
        let spot = Spot::new(&held, Some(&last), &[], None);
        assert_eq!(Grinder::default().decide(&spot), Action::Pass);
    }
}
