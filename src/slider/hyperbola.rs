//! Portable slider attacks via hyperbola quintessence.
//!
//! A variation of the o^(o-2r) trick: subtracting the piece bit from the
//! masked occupancy flips exactly the bits between the piece and the first
//! blocker, and xoring with the vertically-mirrored computation extends this
//! to the squares below the piece.  Works for the vertical, diagonal and
//! anti-diagonal rays; the horizontal ray does not carry across bytes, so it
//! is answered by a 256x8 first-rank table instead.
//!
//! <https://www.chessprogramming.org/Hyperbola_Quintessence>

use super::SliderAttacks;
use crate::bitboard::SquareSet;
use crate::square::Square;
use crate::tables::{HyperbolaMask, HYPERBOLA, ROOK_HORIZ};

pub struct Hyperbola;

#[inline]
fn hyperbola_mask(sq: Square) -> HyperbolaMask {
    unsafe { *HYPERBOLA.get_unchecked(sq.to_index()) }
}

// One ray pair: piece_bit must be a member of neither ray of mask_ex.
#[inline]
fn slider_ray_attacks(
    piece_bit: SquareSet,
    occupancy: SquareSet,
    ray_mask_ex: SquareSet,
) -> SquareSet {
    let forward = occupancy & ray_mask_ex;
    let reverse = forward.flip_vert();

    let forward = forward - piece_bit;
    let reverse = reverse - piece_bit.flip_vert();

    (forward ^ reverse.flip_vert()) & ray_mask_ex
}

impl Hyperbola {
    /// The horizontal part of the rook attacks, on its own.  The en-passant
    /// legality check uses this to probe for a discovered rank check.
    #[inline]
    pub fn horiz_rook_attacks(sq: Square, occupancy: SquareSet) -> SquareSet {
        let rank_shift = sq.to_int() & 56;
        let sq_column = (sq.to_int() & 7) as usize;
        let occupancy_byte = occupancy.to_size(rank_shift) & 0xFF;

        let attacked_columns =
            unsafe { *ROOK_HORIZ.get_unchecked(occupancy_byte).get_unchecked(sq_column) };
        SquareSet::new(attacked_columns as u64) << rank_shift
    }
}

impl SliderAttacks for Hyperbola {
    #[inline]
    fn bishop_attacks(sq: Square, occupancy: SquareSet) -> SquareSet {
        let masks = hyperbola_mask(sq);

        slider_ray_attacks(masks.sq_bit, occupancy, masks.diag_ex)
            | slider_ray_attacks(masks.sq_bit, occupancy, masks.anti_diag_ex)
    }

    #[inline]
    fn rook_attacks(sq: Square, occupancy: SquareSet) -> SquareSet {
        let masks = hyperbola_mask(sq);

        slider_ray_attacks(masks.sq_bit, occupancy, masks.vert_ex)
            | Hyperbola::horiz_rook_attacks(sq, occupancy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::EMPTY;
    use crate::file::File;
    use crate::rank::Rank;

    #[test]
    fn horiz_attacks_match_rook_attacks_on_rank() {
        let sq = Square::make_square(Rank::Fourth, File::D);
        let occupancy = SquareSet::set(Rank::Fourth, File::B) | SquareSet::set(Rank::Fourth, File::G);

        let horiz = Hyperbola::horiz_rook_attacks(sq, occupancy);
        let full = Hyperbola::rook_attacks(sq, occupancy);

        assert_eq!(horiz, full & SquareSet::rank_set(Rank::Fourth));
        assert_eq!(horiz & SquareSet::file_set(File::A), EMPTY);
        assert_eq!(horiz & SquareSet::set(Rank::Fourth, File::H), EMPTY);
    }
}
