pub mod action;
pub use action::*;

pub mod error;
pub use error::*;

pub mod event;
pub use event::*;

pub mod game;
pub use game::*;

pub mod player;
pub use player::*;

pub mod rules;
pub use rules::*;

pub mod seat;
pub use seat::*;

pub mod spot;
pub use spot::*;

pub mod standings;
pub use standings::*;

pub mod strategy;
pub use strategy::*;
