//! Picture bingo: every player gets a grid of images; odd grids have a
//! free centre square.

use serde::{Deserialize, Serialize};

use crate::core::{DeckRng, GameError};

/// Grid sizes offered to players.
pub const OFFERED_GRID_SIZES: [usize; 3] = [3, 4, 5];

/// Card counts offered to players.
pub const OFFERED_CARD_COUNTS: [usize; 5] = [2, 4, 6, 8, 12];

/// Images required beyond one per square, so cards differ from each other.
pub const EXTRA_IMAGES: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BingoConfig {
    pub grid_size: usize,
    pub card_count: usize,
    /// Printed on every card as `"{title} - Card {k}"`.
    pub title: String,
}

impl Default for BingoConfig {
    fn default() -> Self {
        Self {
            grid_size: 5,
            card_count: 4,
            title: "Family Bingo".to_string(),
        }
    }
}

impl BingoConfig {
    pub fn with_grid_size(mut self, size: usize) -> Self {
        self.grid_size = size;
        self
    }

    pub fn with_card_count(mut self, count: usize) -> Self {
        self.card_count = count;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub const fn has_free_center(&self) -> bool {
        self.grid_size % 2 == 1
    }

    /// Squares per card, `None` if `grid_size^2` overflows.
    #[must_use]
    pub const fn squares(&self) -> Option<usize> {
        self.grid_size.checked_mul(self.grid_size)
    }

    /// Image squares per card: every square except a free centre.
    #[must_use]
    pub fn image_squares(&self) -> Option<usize> {
        let squares = self.squares()?;
        Some(if self.has_free_center() { squares - 1 } else { squares })
    }

    /// Minimum number of images: one per image square plus `EXTRA_IMAGES`.
    pub fn required_images(&self) -> Result<usize, GameError> {
        self.image_squares()
            .filter(|_| self.grid_size > 0)
            .and_then(|squares| squares.checked_add(EXTRA_IMAGES))
            .ok_or(GameError::UnsupportedGridSize { size: self.grid_size })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BingoSquare<T> {
    Free,
    Image(T),
}

impl<T> BingoSquare<T> {
    #[must_use]
    pub fn image(&self) -> Option<&T> {
        match self {
            Self::Free => None,
            Self::Image(image) => Some(image),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BingoCard<T> {
    /// 1-based card number.
    pub number: usize,
    pub title: String,
    pub grid_size: usize,
    /// Squares in row-major order.
    pub squares: Vec<BingoSquare<T>>,
}

impl<T> BingoCard<T> {
    pub fn rows(&self) -> impl Iterator<Item = &[BingoSquare<T>]> {
        self.squares.chunks(self.grid_size.max(1))
    }
}

/// Deal `card_count` bingo cards.
///
/// Each card draws from its own shuffle of the full image pool, so cards
/// overlap but are unlikely to repeat. Uses the `"bingo"` context of `rng`.
pub fn build_bingo<T: Clone>(
    config: &BingoConfig,
    images: &[T],
    rng: &DeckRng,
) -> Result<Vec<BingoCard<T>>, GameError> {
    let required = config.required_images()?;
    let total = config
        .squares()
        .ok_or(GameError::UnsupportedGridSize { size: config.grid_size })?;
    if images.len() < required {
        return Err(GameError::NotEnoughImages {
            required,
            received: images.len(),
        });
    }
    if config.card_count == 0 {
        return Err(GameError::InvalidCardCount { count: 0 });
    }

    let mut rng = rng.for_context("bingo");
    let center = total / 2;
    let free_center = config.has_free_center();

    let cards = (1..=config.card_count)
        .map(|number| {
            let mut pool = rng.shuffled(images).into_iter();
            let squares = (0..total)
                .filter_map(|i| {
                    if free_center && i == center {
                        Some(BingoSquare::Free)
                    } else {
                        pool.next().map(BingoSquare::Image)
                    }
                })
                .collect();

            BingoCard {
                number,
                title: format!("{} - Card {}", config.title, number),
                grid_size: config.grid_size,
                squares,
            }
        })
        .collect();

    Ok(cards)
}
