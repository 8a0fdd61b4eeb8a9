//! Slider attacks via classic magic bitboards.
//!
//! The occupancy bits under the square's relevant mask are hashed into a
//! table index by a multiply-and-shift with a precomputed magic number.  The
//! shared MOVES table is overlap-compressed, so the looked-up entry may carry
//! bits belonging to another square's rays; masking with the empty-board rays
//! of the queried square removes them.
//!
//! Never the default backend; kept as the portable cross-check for the
//! extraction-based lookups.

use super::SliderAttacks;
use crate::bitboard::SquareSet;
use crate::square::Square;
use crate::tables::{self, BISHOP, MAGIC_NUMBERS, MOVES, RAYS, ROOK};

pub struct Magic;

#[inline]
fn magic_lookup(slider: usize, sq: Square, occupancy: SquareSet) -> SquareSet {
    unsafe {
        let magic: tables::Magic = *MAGIC_NUMBERS
            .get_unchecked(slider)
            .get_unchecked(sq.to_index());
        *MOVES.get_unchecked(
            (magic.offset as usize)
                + (magic.magic_number * (occupancy & magic.mask)).to_size(magic.rightshift),
        ) & *RAYS.get_unchecked(slider).get_unchecked(sq.to_index())
    }
}

impl SliderAttacks for Magic {
    #[inline]
    fn bishop_attacks(sq: Square, occupancy: SquareSet) -> SquareSet {
        magic_lookup(BISHOP, sq, occupancy)
    }

    #[inline]
    fn rook_attacks(sq: Square, occupancy: SquareSet) -> SquareSet {
        magic_lookup(ROOK, sq, occupancy)
    }
}
