//! Configuration loading for the game assets directory.

pub mod load;

pub use load::*;
