use super::strategy::Strategy;

/// A named participant and the strategy that plays for them.
pub struct Player {
    name: String,
    strategy: Box<dyn Strategy>,
}

impl Player {
    pub fn new(name: impl Into<String>, strategy: impl Strategy + 'static) -> Self {
        Self {
            name: name.into(),
            strategy: Box::new(strategy),
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn strategy(&mut self) -> &mut dyn Strategy {
        self.strategy.as_mut()
    }
    pub fn automated(&self) -> bool {
        self.strategy.automated()
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("automated", &self.automated())
            .finish()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
