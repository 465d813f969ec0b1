//! Matching decks over caller symbols.
//!
//! `generate` builds the plane for the symbol count, then copies the
//! caller's symbols onto each line. Shuffling is a separate, explicit step
//! so generation itself stays deterministic.

pub mod card;
pub mod generator;

pub use card::Card;
pub use generator::{generate, Deck};
