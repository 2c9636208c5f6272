use super::action::Action;
use super::event::Event;
use super::rules::Violation;
use super::spot::Spot;

/// Trait for anything that chooses plays: bots, a terminal user, a script.
///
/// The game depends only on this trait. Whether an illegal choice is a bug
/// or a typo is decided by [`Strategy::automated`], never by the concrete
/// type behind it.
pub trait Strategy {
    /// Choose a play or a pass. Called when it is this strategy's turn.
    fn decide(&mut self, spot: &Spot) -> Action;
    /// Receive a public game event.
    fn notify(&mut self, _: &Event) {}
    /// The last decision was refused; `decide` will be called again.
    /// Only reached by strategies that are not automated.
    fn rejected(&mut self, _: &Violation) {}
    /// Automated strategies promise every decision is legal, so an illegal
    /// one aborts the game. Interactive strategies are re-prompted instead.
    fn automated(&self) -> bool {
        true
    }
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn decide(&mut self, spot: &Spot) -> Action {
        (**self).decide(spot)
    }
    fn notify(&mut self, event: &Event) {
        (**self).notify(event)
    }
    fn rejected(&mut self, violation: &Violation) {
        (**self).rejected(violation)
    }
    fn automated(&self) -> bool {
        (**self).automated()
    }
}
