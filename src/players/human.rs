use super::grinder::Grinder;
use crate::cards::Hand;
use crate::play::Action;
use crate::play::Event;
use crate::play::Spot;
use crate::play::Strategy;
use crate::play::Violation;
use colored::Colorize;
use dialoguer::Input;

/// Terminal player. Reads `<rank><suit>` labels (`"KsKc"`, `"ks kc"`) or
/// `pass` and is re-prompted when the game refuses the play.
///
/// If the terminal stops answering, the seat falls back to [`Grinder`] so
/// the game can still finish.
#[derive(Debug, Default)]
pub struct Human {
    fallback: Grinder,
}

impl Human {
    /// Reads one action, retrying locally until the input parses.
    fn prompt(spot: &Spot) -> std::io::Result<Action> {
        let input = Input::<String>::new()
            .with_prompt(format!("{} [cards or pass]", spot))
            .validate_with(|i: &String| -> Result<(), String> {
                Self::parse(i).map(|_| ()).map_err(|e| e.to_string())
            })
            .report(false)
            .interact_text()
            .map_err(|e| match e {
                dialoguer::Error::IO(e) => e,
            })?;
        Self::parse(&input).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
    fn parse(input: &str) -> Result<Action, crate::cards::ParseError> {
        match input.trim().to_lowercase().as_str() {
            "pass" | "p" => Ok(Action::Pass),
            cards => Hand::try_from(cards).map(Action::Play),
        }
    }
}

impl Strategy for Human {
    fn decide(&mut self, spot: &Spot) -> Action {
        match Self::prompt(spot) {
            Ok(action) => action,
            Err(e) => {
                log::warn!("[human] input failed ({}), playing automatically", e);
                self.fallback.decide(spot)
            }
        }
    }
    fn notify(&mut self, event: &Event) {
        println!("{}", event);
    }
    fn rejected(&mut self, violation: &Violation) {
        println!("{}", violation.to_string().red());
    }
    fn automated(&self) -> bool {
        false
    }
}
