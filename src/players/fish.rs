use super::memo::Memo;
use crate::play::Action;
use crate::play::Spot;
use crate::play::Strategy;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// CPU player that chooses uniformly from its legal plays.
/// Never passes on a play it could beat.
#[derive(Debug)]
pub struct Fish {
    rng: SmallRng,
    memo: Memo,
}

impl Fish {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            memo: Memo::default(),
        }
    }
}

impl Default for Fish {
    fn default() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
            memo: Memo::default(),
        }
    }
}

impl Strategy for Fish {
    fn decide(&mut self, spot: &Spot) -> Action {
        let ref mut rng = self.rng;
        self.memo
            .legal(spot)
            .choose(rng)
            .copied()
            .map(Action::Play)
            .unwrap_or(Action::Pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hand;
    use crate::cards::Holding;

    #[test]
    fn plays_when_it_can() {
        let held = Holding::try_from("AhAdTh").unwrap();
        let last = Hand::try_from("KsKc").unwrap();
        let spot = Spot::new(&held, Some(&last), &[], None);
        let action = Fish::seeded(0).decide(&spot);
        assert_eq!(action, Action::from(Hand::try_from("AhAd").unwrap()));
    }

    #[test]
    fn passes_when_it_cannot() {
        let held = Holding::try_from("2c3d").unwrap();
        let last = Hand::try_from("As").unwrap();
        let spot = Spot::new(&held, Some(&last), &[], None);
        assert_eq!(Fish::seeded(0).decide(&spot), Action::Pass);
    }

    #[test]
    fn always_legal() {
        let held = Holding::try_from("2c 5d 5h 6s 7c 8d 9h 9s Jc Qd Ks As Ac").unwrap();
        let spot = Spot::new(&held, None, &[], held.lowest());
        let mut fish = Fish::seeded(9);
        for _ in 0..64 {
            assert!(spot.allows(&fish.decide(&spot)));
        }
    }
}
