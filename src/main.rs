use cardclimb::play::Game;
use cardclimb::play::Player;
use cardclimb::play::Standings;
use cardclimb::players::Fish;
use cardclimb::players::Grinder;
use cardclimb::players::Human;
use clap::Parser;
use clap::ValueEnum;

#[derive(Parser)]
#[command(author, version, about = "Referee a climbing card game between bots and humans", long_about = None)]
struct Args {
    /// Strategy for each seat, in turn order (2 to 4 seats)
    #[arg(short, long, value_enum, value_delimiter = ',', default_values_t = [Kind::Grinder, Kind::Fish])]
    seats: Vec<Kind>,
    /// Number of games to play
    #[arg(short, long, default_value_t = 1)]
    games: usize,
    /// Seed for dealing and random bots; entropy when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Print standings as JSON
    #[arg(long)]
    json: bool,
    /// Log every play
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    Fish,
    Grinder,
    Human,
}

impl Kind {
    fn name(&self, position: usize) -> String {
        format!("P{} {}", position, format!("{:?}", self).to_lowercase())
    }
    fn player(&self, position: usize, seed: Option<u64>) -> Player {
        let name = self.name(position);
        match (self, seed) {
            (Kind::Fish, Some(seed)) => Player::new(name, Fish::seeded(seed ^ position as u64)),
            (Kind::Fish, None) => Player::new(name, Fish::default()),
            (Kind::Grinder, _) => Player::new(name, Grinder::default()),
            (Kind::Human, _) => Player::new(name, Human::default()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    cardclimb::log(level)?;
    let names = args
        .seats
        .iter()
        .enumerate()
        .map(|(position, kind)| kind.name(position))
        .collect::<Vec<_>>();
    let mut standings = Standings::new(names);
    for i in 0..args.games {
        let seed = args.seed.map(|s| s.wrapping_add(i as u64));
        let players = args
            .seats
            .iter()
            .enumerate()
            .map(|(position, kind)| kind.player(position, seed))
            .collect::<Vec<_>>();
        let mut game = match seed {
            Some(seed) => Game::seeded(players, seed)?,
            None => Game::new(players)?,
        };
        let order = game.run()?;
        log::info!("[main] game {} finish order {:?}", i + 1, order);
        standings.record(&order);
    }
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&standings)?),
        false => print!("{}", standings),
    }
    Ok(())
}
