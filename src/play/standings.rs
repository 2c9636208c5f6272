use crate::MAX_PLAYERS;
use crate::Position;
use colored::Colorize;
use serde::Serialize;

/// Placement tally across repeated games between the same players.
///
/// Each finish in place `p` (0 is first) counts once in that column and
/// adds `MAX_PLAYERS - p` to the player's score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standings {
    games: usize,
    rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    name: String,
    places: Vec<usize>,
    score: usize,
}

impl Row {
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Finishes per place, first place first.
    pub fn places(&self) -> &[usize] {
        &self.places
    }
    pub fn score(&self) -> usize {
        self.score
    }
    pub fn wins(&self) -> usize {
        self.places.first().copied().unwrap_or(0)
    }
}

impl Standings {
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            games: 0,
            rows: names
                .into_iter()
                .map(|name| Row {
                    name: name.into(),
                    places: vec![0; MAX_PLAYERS],
                    score: 0,
                })
                .collect(),
        }
    }
    /// Tallies one finish order, winner first.
    pub fn record(&mut self, order: &[Position]) {
        self.games += 1;
        for (place, position) in order.iter().enumerate() {
            if let Some(row) = self.rows.get_mut(*position) {
                row.places[place] += 1;
                row.score += MAX_PLAYERS - place;
            }
        }
    }
    pub fn games(&self) -> usize {
        self.games
    }
    /// Rows in seat order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
    /// Rows by descending score; ties keep seat order.
    pub fn ranked(&self) -> Vec<&Row> {
        let mut rows = self.rows.iter().collect::<Vec<_>>();
        rows.sort_by(|a, b| b.score.cmp(&a.score));
        rows
    }
}

impl std::fmt::Display for Standings {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", format!("{} games", self.games).bold())?;
        write!(f, "{:<12}", "player")?;
        for place in 1..=self.rows.len() {
            write!(f, "{:>7}", format!("#{}", place))?;
        }
        writeln!(f, "{:>8}", "score")?;
        for row in self.ranked() {
            write!(f, "{:<12}", row.name)?;
            for count in row.places.iter().take(self.rows.len()) {
                write!(f, "{:>7}", count)?;
            }
            writeln!(f, "{}", format!("{:>8}", row.score).green())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally() {
        let mut standings = Standings::new(["alice", "bob"]);
        standings.record(&[1, 0]);
        standings.record(&[1, 0]);
        standings.record(&[0, 1]);
        assert_eq!(standings.games(), 3);
        let bob = &standings.rows()[1];
        assert_eq!(bob.places()[..2], [2, 1]);
        assert_eq!(bob.wins(), 2);
        assert_eq!(bob.score(), 2 * MAX_PLAYERS + (MAX_PLAYERS - 1));
        assert_eq!(standings.ranked()[0].name(), "bob");
    }

    #[test]
    fn serializes() {
        let mut standings = Standings::new(["a", "b"]);
        standings.record(&[0, 1]);
        let json = serde_json::to_value(&standings).unwrap();
        assert_eq!(json["games"], 1);
        assert_eq!(json["rows"][0]["name"], "a");
        assert_eq!(json["rows"][0]["score"], MAX_PLAYERS);
    }
}
