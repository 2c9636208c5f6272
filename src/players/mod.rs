pub mod fish;
pub use fish::*;

pub mod grinder;
pub use grinder::*;

#[cfg(feature = "cli")]
pub mod human;
#[cfg(feature = "cli")]
pub use human::*;

pub mod memo;
pub use memo::*;
