//! Spot-it: find the one picture two cards have in common.

use serde::{Deserialize, Serialize};

use crate::core::{DeckRng, GameError};
use crate::deck::{generate, Deck};
use crate::plane::Order;

/// Card sizes offered to players: 6, 7 or 8 pictures per card
/// (31, 43 or 57 images). Any size works with `SpotItConfig`.
///
/// 7 pictures per card is order 6, which has no projective plane; it is
/// only built with `allow_imperfect` set.
pub const OFFERED_SYMBOLS_PER_CARD: [usize; 3] = [6, 7, 8];

/// Spot-it configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotItConfig {
    /// Pictures on each card (`n + 1`).
    pub symbols_per_card: usize,

    /// Shuffle the pictures on each card after generation so the shared
    /// picture is not always in the same slot.
    pub shuffle_symbols: bool,

    /// Build decks for orders without a projective plane, where some
    /// cards share no picture or more than one.
    pub allow_imperfect: bool,
}

impl Default for SpotItConfig {
    fn default() -> Self {
        Self {
            symbols_per_card: 8,
            shuffle_symbols: true,
            allow_imperfect: false,
        }
    }
}

impl SpotItConfig {
    pub fn with_symbols_per_card(mut self, count: usize) -> Self {
        self.symbols_per_card = count;
        self
    }

    /// Keep generation order on each card.
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle_symbols = false;
        self
    }

    /// Accept card sizes whose deck cannot guarantee a single match.
    pub fn with_imperfect_decks(mut self) -> Self {
        self.allow_imperfect = true;
        self
    }

    pub fn order(&self) -> Result<Order, GameError> {
        Order::from_symbols_per_card(self.symbols_per_card).ok_or(GameError::InvalidSymbolsPerCard {
            count: self.symbols_per_card,
        })
    }

    /// Images needed: `n^2 + n + 1` for `n = symbols_per_card - 1`.
    pub fn required_images(&self) -> Result<usize, GameError> {
        Ok(self.order()?.symbol_count())
    }
}

/// Build a spot-it deck from exactly `required_images()` images.
///
/// Fails with `GameError::NoSingleMatchDeck` when no deck of this card
/// size gives every pair of cards exactly one match, unless
/// `allow_imperfect` is set. The symbol shuffle draws from the
/// `"spot-it"` context of `rng`.
pub fn build_spot_it<T: Clone>(
    config: &SpotItConfig,
    images: &[T],
    rng: &DeckRng,
) -> Result<Deck<T>, GameError> {
    let order = config.order()?;
    if !config.allow_imperfect && !order.guarantees_single_match() {
        return Err(GameError::NoSingleMatchDeck {
            symbols_per_card: config.symbols_per_card,
        });
    }

    let expected = order.symbol_count();
    if images.len() != expected {
        return Err(GameError::WrongImageCount {
            expected,
            received: images.len(),
        });
    }

    let mut deck = generate(images)?;
    if config.shuffle_symbols {
        deck.shuffle_symbols(&mut rng.for_context("spot-it"));
    }
    Ok(deck)
}
