//! Vectorized multi-piece slider expansion.
//!
//! All eight ray directions are expanded simultaneously, one 64-bit lane per
//! direction: the four diagonal lanes carry every bishop, the four orthogonal
//! lanes every rook.  Each iteration rotates the pieces one step along their
//! direction, accumulates the reached squares, and drops the rays that ran
//! into an occupied square or the board edge.  The loop exits once every lane
//! is empty.
//!
//! This answers "which squares do these sliders attack" for whole piece sets
//! at once, which is exactly what `all_attacked_squares` needs.  Single-piece
//! lookups stay on the scalar backends.

use crate::bitboard::{SquareSet, EMPTY};
use std::arch::x86_64::{
    _mm512_and_epi64, _mm512_andnot_epi64, _mm512_load_epi64, _mm512_mask_set1_epi64,
    _mm512_or_epi64, _mm512_reduce_or_epi64, _mm512_rolv_epi64, _mm512_set1_epi64,
    _mm512_test_epi64_mask,
};

// Lane order: advancing top-left, top-right, bottom-left, bottom-right, up,
// down, left, right.  A slider may only advance from a square where the next
// step stays on the board, which is what these masks encode.
const ROW_1: u64 = 0x0000_0000_0000_00FF;
const ROW_8: u64 = 0xFF00_0000_0000_0000;
const COL_A: u64 = 0x0101_0101_0101_0101;
const COL_H: u64 = 0x8080_8080_8080_8080;

#[repr(align(64))]
struct Aligned([i64; 8]);

static ADVANCE_MASKS: Aligned = Aligned([
    !(ROW_8 | COL_A) as i64,
    !(ROW_8 | COL_H) as i64,
    !(ROW_1 | COL_A) as i64,
    !(ROW_1 | COL_H) as i64,
    !ROW_8 as i64,
    !ROW_1 as i64,
    !COL_A as i64,
    !COL_H as i64,
]);

static ROTATE_LEFTS: Aligned = Aligned([7, 9, -9, -7, 8, -8, -1, 1]);

/// The union of the squares attacked by all the given bishops (queens
/// included) and rooks (queens included) over the given occupancy.
#[inline]
pub fn attacked_squares_by_sliders(
    bishops: SquareSet,
    rooks: SquareSet,
    occupancy: SquareSet,
) -> SquareSet {
    if (bishops | rooks) == EMPTY {
        return EMPTY;
    }

    unsafe {
        let rotate_lefts = _mm512_load_epi64(ROTATE_LEFTS.0.as_ptr());
        let advance_masks = _mm512_load_epi64(ADVANCE_MASKS.0.as_ptr());

        // bishops in lanes 0-3, rooks in lanes 4-7
        let mut sliders = _mm512_mask_set1_epi64(
            _mm512_set1_epi64(bishops.to_size(0) as i64),
            0xF0,
            rooks.to_size(0) as i64,
        );

        let occupancies = _mm512_set1_epi64(occupancy.to_size(0) as i64);
        let mut attacks = _mm512_set1_epi64(0);

        sliders = _mm512_and_epi64(sliders, advance_masks);

        loop {
            sliders = _mm512_rolv_epi64(sliders, rotate_lefts);
            attacks = _mm512_or_epi64(attacks, sliders);
            sliders = _mm512_andnot_epi64(occupancies, sliders);
            sliders = _mm512_and_epi64(sliders, advance_masks);

            sliders = _mm512_rolv_epi64(sliders, rotate_lefts);
            attacks = _mm512_or_epi64(attacks, sliders);
            sliders = _mm512_andnot_epi64(occupancies, sliders);

            let exit_cond = _mm512_test_epi64_mask(sliders, advance_masks);

            sliders = _mm512_and_epi64(sliders, advance_masks);

            if exit_cond == 0 {
                break;
            }
        }

        SquareSet::new(_mm512_reduce_or_epi64(attacks) as u64)
    }
}
