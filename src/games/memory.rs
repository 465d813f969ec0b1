//! Memory: a face-down grid of picture pairs.

use serde::{Deserialize, Serialize};

use crate::core::{DeckRng, GameError};

/// Grid sizes offered to players: 4x4, 6x6, 8x8.
pub const OFFERED_GRID_SIZES: [usize; 3] = [4, 6, 8];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Cards per side of the square grid. `grid_size^2` must be even.
    pub grid_size: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self { grid_size: 4 }
    }
}

impl MemoryConfig {
    pub fn with_grid_size(mut self, size: usize) -> Self {
        self.grid_size = size;
        self
    }

    /// One image per pair: `grid_size^2 / 2`.
    pub fn required_images(&self) -> Result<usize, GameError> {
        match self.grid_size.checked_mul(self.grid_size) {
            Some(cells) if cells > 0 && cells % 2 == 0 => Ok(cells / 2),
            _ => Err(GameError::UnsupportedGridSize { size: self.grid_size }),
        }
    }
}

/// Which of the two cards of a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairSide {
    A,
    B,
}

/// Identifier printed on the back of a memory card, e.g. `3_b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemoryCardId {
    pub pair: usize,
    pub side: PairSide,
}

impl std::fmt::Display for MemoryCardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side = match self.side {
            PairSide::A => 'a',
            PairSide::B => 'b',
        };
        write!(f, "{}_{}", self.pair, side)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCard<T> {
    pub id: MemoryCardId,
    pub image: T,
}

impl<T> MemoryCard<T> {
    #[must_use]
    pub fn pair_id(&self) -> usize {
        self.id.pair
    }
}

/// Shuffled cards in row-major grid order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryLayout<T> {
    pub grid_size: usize,
    pub cards: Vec<MemoryCard<T>>,
}

impl<T> MemoryLayout<T> {
    /// Cards row by row.
    pub fn rows(&self) -> impl Iterator<Item = &[MemoryCard<T>]> {
        self.cards.chunks(self.grid_size.max(1))
    }

    /// Whether the cards at two grid positions form a pair.
    #[must_use]
    pub fn is_pair(&self, first: usize, second: usize) -> bool {
        match (self.cards.get(first), self.cards.get(second)) {
            (Some(a), Some(b)) => first != second && a.pair_id() == b.pair_id(),
            _ => false,
        }
    }
}

/// Lay out a memory grid from exactly `required_images()` images.
///
/// Uses the `"memory"` context of `rng`.
pub fn build_memory<T: Clone>(
    config: &MemoryConfig,
    images: &[T],
    rng: &DeckRng,
) -> Result<MemoryLayout<T>, GameError> {
    let expected = config.required_images()?;
    if images.len() != expected {
        return Err(GameError::WrongImageCount {
            expected,
            received: images.len(),
        });
    }

    let mut cards = Vec::with_capacity(expected * 2);
    for (pair, image) in images.iter().enumerate() {
        for side in [PairSide::A, PairSide::B] {
            cards.push(MemoryCard {
                id: MemoryCardId { pair, side },
                image: image.clone(),
            });
        }
    }
    rng.for_context("memory").shuffle(&mut cards);

    Ok(MemoryLayout {
        grid_size: config.grid_size,
        cards,
    })
}
