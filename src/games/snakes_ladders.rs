//! Snakes and ladders board with personal pictures on chosen squares.
//!
//! Squares are numbered from 1 at the bottom and snake back and forth up
//! the board; the last square sits in the top-left corner.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// Default board side: 10x10, squares 1..=100.
pub const DEFAULT_BOARD_SIZE: u32 = 10;

/// Snakes of the classic board as (head, tail).
pub const CLASSIC_SNAKES: [(u32, u32); 10] = [
    (98, 78),
    (95, 75),
    (93, 73),
    (87, 24),
    (64, 60),
    (62, 19),
    (56, 53),
    (49, 11),
    (48, 26),
    (16, 6),
];

/// Ladders of the classic board as (bottom, top).
pub const CLASSIC_LADDERS: [(u32, u32); 9] = [
    (1, 38),
    (4, 14),
    (9, 21),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (80, 100),
];

/// A snake or ladder: landing on `from` moves the piece to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jump {
    pub from: u32,
    pub to: u32,
}

/// What a square holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Square {
    Plain,
    SnakeHead { tail: u32 },
    LadderBottom { top: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board<T> {
    size: u32,
    snakes: Vec<Jump>,
    ladders: Vec<Jump>,
    square_images: FxHashMap<u32, T>,
    background: Option<T>,
}

impl<T> Board<T> {
    /// An empty `size` x `size` board. The square count must fit a `u32`.
    pub fn new(size: u32) -> Result<Self, GameError> {
        if size == 0 || size.checked_mul(size).is_none() {
            return Err(GameError::UnsupportedGridSize { size: size as usize });
        }
        Ok(Self {
            size,
            snakes: Vec::new(),
            ladders: Vec::new(),
            square_images: FxHashMap::default(),
            background: None,
        })
    }

    /// The classic 10x10 board with its ten snakes and nine ladders.
    #[must_use]
    pub fn classic() -> Self {
        let jumps = |pairs: &[(u32, u32)]| -> Vec<Jump> {
            pairs.iter().map(|&(from, to)| Jump { from, to }).collect()
        };
        Self {
            size: DEFAULT_BOARD_SIZE,
            snakes: jumps(&CLASSIC_SNAKES[..]),
            ladders: jumps(&CLASSIC_LADDERS[..]),
            square_images: FxHashMap::default(),
            background: None,
        }
    }

    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub const fn total_squares(&self) -> u32 {
        self.size * self.size
    }

    #[must_use]
    pub fn snakes(&self) -> &[Jump] {
        &self.snakes
    }

    #[must_use]
    pub fn ladders(&self) -> &[Jump] {
        &self.ladders
    }

    /// Add a snake from `head` down to `tail`.
    pub fn add_snake(&mut self, head: u32, tail: u32) -> Result<(), GameError> {
        self.check_on_board(head)?;
        self.check_on_board(tail)?;
        if head <= tail {
            return Err(GameError::InvalidSnake { head, tail });
        }
        self.check_free(head)?;
        self.snakes.push(Jump { from: head, to: tail });
        Ok(())
    }

    /// Add a ladder from `bottom` up to `top`.
    pub fn add_ladder(&mut self, bottom: u32, top: u32) -> Result<(), GameError> {
        self.check_on_board(bottom)?;
        self.check_on_board(top)?;
        if top <= bottom {
            return Err(GameError::InvalidLadder { bottom, top });
        }
        self.check_free(bottom)?;
        self.ladders.push(Jump { from: bottom, to: top });
        Ok(())
    }

    /// Put a picture on a square, replacing any earlier one.
    pub fn set_square_image(&mut self, square: u32, image: T) -> Result<Option<T>, GameError> {
        self.check_on_board(square)?;
        Ok(self.square_images.insert(square, image))
    }

    #[must_use]
    pub fn square_image(&self, square: u32) -> Option<&T> {
        self.square_images.get(&square)
    }

    pub fn set_background(&mut self, image: T) {
        self.background = Some(image);
    }

    #[must_use]
    pub fn background(&self) -> Option<&T> {
        self.background.as_ref()
    }

    pub fn square(&self, square: u32) -> Result<Square, GameError> {
        self.check_on_board(square)?;
        if let Some(snake) = self.snakes.iter().find(|j| j.from == square) {
            return Ok(Square::SnakeHead { tail: snake.to });
        }
        if let Some(ladder) = self.ladders.iter().find(|j| j.from == square) {
            return Ok(Square::LadderBottom { top: ladder.to });
        }
        Ok(Square::Plain)
    }

    /// Where a piece landing on `square` ends up after one snake or ladder.
    pub fn destination(&self, square: u32) -> Result<u32, GameError> {
        Ok(match self.square(square)? {
            Square::Plain => square,
            Square::SnakeHead { tail } => tail,
            Square::LadderBottom { top } => top,
        })
    }

    /// Square numbers as printed, top row first, left to right.
    ///
    /// The top row counts down from the last square; every other row
    /// runs the opposite way.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<u32>> {
        let total = self.total_squares();
        (0..self.size)
            .map(|row| {
                let high = total - row * self.size;
                let low = high - self.size + 1;
                if row % 2 == 0 {
                    (low..=high).rev().collect()
                } else {
                    (low..=high).collect()
                }
            })
            .collect()
    }

    fn check_on_board(&self, square: u32) -> Result<(), GameError> {
        let total = self.total_squares();
        if (1..=total).contains(&square) {
            Ok(())
        } else {
            Err(GameError::SquareOffBoard { square, total })
        }
    }

    fn check_free(&self, square: u32) -> Result<(), GameError> {
        let taken = self.snakes.iter().chain(&self.ladders).any(|j| j.from == square);
        if taken {
            Err(GameError::SquareOccupied { square })
        } else {
            Ok(())
        }
    }
}

impl<T> Default for Board<T> {
    fn default() -> Self {
        Self::classic()
    }
}
