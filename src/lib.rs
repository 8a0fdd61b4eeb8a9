//! Bitboard attack, check and pin primitives for chess.
//!
//! This crate answers the low-level questions a move generator keeps asking:
//! which squares does this piece attack, which pieces check this king, and
//! which pieces are pinned against it.  All lookup tables are generated at
//! build time, so queries are branch-free table lookups with no runtime
//! initialization.  The crate owns no game state: callers pass piece sets
//! and get piece sets back.

pub mod attacks;
pub mod bitboard;
pub mod checks;
pub mod color;
pub mod error;
pub mod file;
pub mod intercepts;
pub mod rank;
pub mod slider;
pub mod square;

mod tables;

pub use crate::attacks::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attackers,
    pawn_attackers_from_capturable, pawn_attacks, queen_attacks, rook_attacks,
};
pub use crate::bitboard::{SquareSet, EMPTY};
pub use crate::checks::{all_attacked_squares, attackers_of, determine_checkers_and_pins};
pub use crate::color::{Color, ALL_COLORS, NUM_COLORS};
pub use crate::error::Error;
pub use crate::file::{File, ALL_FILES, NUM_FILES};
pub use crate::intercepts::{get_intercept_squares, get_ray, pin_check};
pub use crate::rank::{Rank, ALL_RANKS, NUM_RANKS};
pub use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};
