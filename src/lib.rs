//! # party-deck
//!
//! Card generation for personalized party games.
//!
//! The centrepiece is the matching deck: given `N = n^2 + n + 1` symbols,
//! `generate` deals `N` cards of `n + 1` symbols each such that any two
//! cards share exactly one symbol. Decks come from finite projective
//! planes, using modular arithmetic for prime orders and GF(p^m) for
//! prime-power orders.
//!
//! ```
//! use party_deck::generate;
//!
//! let images: Vec<String> = (0..13).map(|i| format!("photo{i}.jpg")).collect();
//! let deck = generate(&images).unwrap();
//!
//! assert_eq!(deck.len(), 13);
//! assert_eq!(deck.symbols_per_card(), 4);
//! assert!(deck.verify().is_ok());
//! ```
//!
//! ## Modules
//!
//! - `core`: symbol indices, the seeded shuffling RNG, errors
//! - `plane`: orders, Galois fields, line construction, verification
//! - `deck`: cards and decks over caller symbols
//! - `games`: spot-it, memory, bingo, snakes and ladders, quartets
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod plane;
pub mod deck;
pub mod games;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{DeckError, DeckRng, DeckRngState, GameError, PlaneViolation, SymbolIndex};

pub use crate::plane::{valid_symbol_counts, ConstructionKind, GaloisField, Order};

pub use crate::deck::{generate, Card, Deck};

pub use crate::games::{
    build_bingo, build_memory, build_spot_it,
    BingoConfig, Board, MemoryConfig, QuartetDraft, QuartetSet, SpotItConfig,
};
