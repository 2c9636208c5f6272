//! Rules engine and referee for a climbing card game.
//!
//! Players shed a 13-card hand by beating the previous play with a
//! stronger play of the same size: singles, pairs, trips, bare quads, or
//! five-card poker shapes. The first player to empty their hand wins;
//! the rest are ranked by the order in which they go out.
pub mod cards;
pub mod play;
pub mod players;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Seat index around the table, in turn order.
pub type Position = usize;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;
pub const CARDS_PER_PLAYER: usize = 13;
/// Largest legal play.
pub const MAX_HAND_SIZE: usize = 5;

/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
}
