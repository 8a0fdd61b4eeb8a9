//! Slider attacks via BMI2 parallel bit extraction.
//!
//! The occupancy bits under the square's relevant mask are extracted into a
//! dense index with `_pext_u64`, then used to address the square's block of
//! the flat precomputed attack array.  5,248 entries for bishops, 102,400 for
//! rooks, one u64 each.

use super::SliderAttacks;
use crate::bitboard::SquareSet;
use crate::square::Square;
use crate::tables::{
    PEXT_ATTACKS, PEXT_BISHOP_MASKS, PEXT_BISHOP_OFFSETS, PEXT_ROOK_MASKS, PEXT_ROOK_OFFSETS,
};

pub struct Pext;

impl SliderAttacks for Pext {
    #[inline]
    fn bishop_attacks(sq: Square, occupancy: SquareSet) -> SquareSet {
        unsafe {
            let mask = *PEXT_BISHOP_MASKS.get_unchecked(sq.to_index());
            let offset = *PEXT_BISHOP_OFFSETS.get_unchecked(sq.to_index());
            *PEXT_ATTACKS.get_unchecked(offset as usize + occupancy.extract(mask).to_size(0))
        }
    }

    #[inline]
    fn rook_attacks(sq: Square, occupancy: SquareSet) -> SquareSet {
        unsafe {
            let mask = *PEXT_ROOK_MASKS.get_unchecked(sq.to_index());
            let offset = *PEXT_ROOK_OFFSETS.get_unchecked(sq.to_index());
            *PEXT_ATTACKS.get_unchecked(offset as usize + occupancy.extract(mask).to_size(0))
        }
    }
}
