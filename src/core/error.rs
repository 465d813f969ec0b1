//! Error types.
//!
//! - `DeckError`: the only way deck generation fails.
//! - `PlaneViolation`: an invariant a deck was checked against and broke.
//! - `GameError`: invalid input to one of the game builders.

use thiserror::Error;

/// Deck generation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The symbol count is not `n^2 + n + 1` for any non-negative integer `n`.
    #[error("invalid deck size: {count} symbols do not form a deck (need n^2 + n + 1, e.g. 7, 13, 21, 31, 43, 57)")]
    InvalidDeckSize {
        /// Number of symbols received.
        count: usize,
    },
}

/// A broken deck invariant, reported by verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaneViolation {
    /// A card does not hold `n + 1` symbols.
    #[error("card {card} holds {actual} symbols, expected {expected}")]
    CardSize {
        card: usize,
        expected: usize,
        actual: usize,
    },

    /// Two cards do not share exactly one symbol.
    #[error("cards {first} and {second} share {shared} symbols, expected exactly 1")]
    Intersection {
        first: usize,
        second: usize,
        shared: usize,
    },

    /// A symbol appears on the wrong number of cards. The symbol is
    /// located by its first appearance.
    #[error("symbol at card {card}, position {position} appears on {appearances} cards, expected {expected}")]
    Coverage {
        card: usize,
        position: usize,
        appearances: usize,
        expected: usize,
    },

    /// The deck holds the wrong number of cards.
    #[error("deck holds {actual} cards, expected {expected}")]
    CardCount { expected: usize, actual: usize },
}

/// Invalid input to a game builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error("exactly {expected} images are required, got {received}")]
    WrongImageCount { expected: usize, received: usize },

    #[error("at least {required} images are required, got {received}")]
    NotEnoughImages { required: usize, received: usize },

    #[error("a spot-it card needs at least one symbol, got {count}")]
    InvalidSymbolsPerCard { count: usize },

    #[error("no deck with {symbols_per_card} symbols per card gives every pair of cards exactly one match")]
    NoSingleMatchDeck { symbols_per_card: usize },

    #[error("unsupported grid size {size}")]
    UnsupportedGridSize { size: usize },

    #[error("a game needs at least one card, got {count}")]
    InvalidCardCount { count: usize },

    #[error("square {square} is not on a board of {total} squares")]
    SquareOffBoard { square: u32, total: u32 },

    #[error("invalid snake {head} -> {tail}: the head must be higher than the tail")]
    InvalidSnake { head: u32, tail: u32 },

    #[error("invalid ladder {bottom} -> {top}: the top must be higher than the bottom")]
    InvalidLadder { bottom: u32, top: u32 },

    #[error("square {square} already starts a snake or ladder")]
    SquareOccupied { square: u32 },

    #[error("quartet title must not be empty")]
    EmptyQuartetTitle,

    #[error("quartet card {card} is incomplete")]
    IncompleteQuartetCard { card: usize },

    #[error("no quartet at index {index} (set holds {len})")]
    QuartetOutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_error_names_count() {
        let err = DeckError::InvalidDeckSize { count: 30 };
        assert!(err.to_string().contains("30 symbols"));
    }

    #[test]
    fn test_game_error_wraps_deck_error() {
        let err: GameError = DeckError::InvalidDeckSize { count: 5 }.into();
        assert_eq!(err, GameError::Deck(DeckError::InvalidDeckSize { count: 5 }));
        assert_eq!(err.to_string(), DeckError::InvalidDeckSize { count: 5 }.to_string());
    }

    #[test]
    fn test_no_single_match_message() {
        let err = GameError::NoSingleMatchDeck { symbols_per_card: 7 };
        assert!(err.to_string().starts_with("no deck with 7 symbols per card"));
    }

    #[test]
    fn test_violation_messages() {
        let err = PlaneViolation::Intersection { first: 2, second: 9, shared: 2 };
        assert_eq!(err.to_string(), "cards 2 and 9 share 2 symbols, expected exactly 1");

        let err = PlaneViolation::CardSize { card: 0, expected: 3, actual: 2 };
        assert_eq!(err.to_string(), "card 0 holds 2 symbols, expected 3");
    }
}
