//! Game builders.
//!
//! Each builder takes a config snapshot plus the caller's images and
//! returns plain data ready for layout. Shuffles draw from a named
//! context of the caller's `DeckRng`, so one seed reproduces a whole
//! session without the games disturbing each other.

pub mod spot_it;
pub mod memory;
pub mod bingo;
pub mod snakes_ladders;
pub mod quartets;

pub use spot_it::{build_spot_it, SpotItConfig};
pub use memory::{build_memory, MemoryCard, MemoryCardId, MemoryConfig, MemoryLayout, PairSide};
pub use bingo::{build_bingo, BingoCard, BingoConfig, BingoSquare};
pub use snakes_ladders::{Board, Jump, Square};
pub use quartets::{CardDraft, Quartet, QuartetCard, QuartetDraft, QuartetFace, QuartetSet};
