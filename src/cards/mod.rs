pub mod card;
pub use card::*;

pub mod category;
pub use category::*;

pub mod deck;
pub use deck::*;

pub mod error;
pub use error::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod holding;
pub use holding::*;

pub mod plays;
pub use plays::*;

pub mod rank;
pub use rank::*;

pub mod score;
pub use score::*;

pub mod suit;
pub use suit::*;
