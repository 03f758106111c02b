//! Video poker engine: deck, evaluator, paytable, card animation and the
//! round state machine. Keep this crate free of IO and platform concerns.

pub mod animation;
pub mod cards;
pub mod config;
pub mod deck;
pub mod events;
pub mod game;
pub mod hand;
pub mod input;
pub mod layout;
pub mod paytable;
pub mod rng;
pub mod state;

pub use animation::*;
pub use cards::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use game::*;
pub use hand::*;
pub use input::*;
pub use layout::*;
pub use paytable::*;
pub use rng::*;
pub use state::*;
