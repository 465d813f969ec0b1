//! Core types: symbol indices, the shuffling RNG, and errors.
//!
//! Everything here is game-agnostic. The plane construction, decks and
//! game builders all sit on top of these.

pub mod symbol;
pub mod rng;
pub mod error;

pub use symbol::SymbolIndex;
pub use rng::{DeckRng, DeckRngState};
pub use error::{DeckError, GameError, PlaneViolation};
