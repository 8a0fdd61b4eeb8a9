//! Check interception and pin restriction lookups.

use crate::bitboard::SquareSet;
use crate::square::Square;
use crate::tables::{INTERCEPTS, RAYS_FROM_KING};

/// Get the set of squares that intercept a check by the given checker.
///
/// The intercept squares are the checker itself (assume captured) plus, when
/// the checker is aligned with the king, every square strictly between the
/// two.  A knight check can only be intercepted by capturing the knight.
/// When there is no checker (`Square::NONE`), every square is allowed: a
/// move search can unconditionally mask its destinations with this set.
#[inline]
pub fn get_intercept_squares(king: Square, checker: Square) -> SquareSet {
    debug_assert!(checker <= Square::NONE);
    unsafe {
        *INTERCEPTS
            .get_unchecked(checker.to_index())
            .get_unchecked(king.to_index())
    }
}

/// Get the ray from the king through the given pinned piece, extended to the
/// edge of the board.  These are the only squares the pinned piece may move
/// to.  The two squares must be aligned on a rank, file or diagonal.
#[inline]
pub fn get_ray(king: Square, pinned: Square) -> SquareSet {
    let ray = unsafe {
        *RAYS_FROM_KING
            .get_unchecked(king.to_index())
            .get_unchecked(pinned.to_index())
    };
    debug_assert!(ray != SquareSet::new(0));
    ray
}

/// Is a move from `src` to the destination in `dst_bit` legal with respect to
/// pins?  A piece that is not pinned moves freely; a pinned piece may only
/// move along the pin ray.
#[inline]
pub fn pin_check(src: Square, dst_bit: SquareSet, king: Square, pinned: SquareSet) -> bool {
    if !pinned.is_member(src) {
        return true;
    }
    (get_ray(king, src) & dst_bit) != SquareSet::new(0)
}
