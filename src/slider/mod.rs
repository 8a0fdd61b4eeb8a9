//! Slider attack backends.
//!
//! Every backend answers the same two questions: which squares does a bishop
//! or a rook on `sq` attack, given the set of occupied squares?  Occupied
//! squares block the rays; the first occupied square of a ray is included in
//! the attack set, whoever owns the piece.  The backends are bit-identical
//! and differ only in how they look the answer up.

use crate::bitboard::SquareSet;
use crate::square::Square;

pub mod hyperbola;
pub mod magic;

#[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
pub mod pext;

#[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
pub mod avx512;

/// Single-piece slider attack lookup.
pub trait SliderAttacks {
    fn bishop_attacks(sq: Square, occupancy: SquareSet) -> SquareSet;
    fn rook_attacks(sq: Square, occupancy: SquareSet) -> SquareSet;
}

/// The backend selected at build time.  No runtime feature detection.
#[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
pub type Active = pext::Pext;

/// The backend selected at build time.  No runtime feature detection.
#[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
pub type Active = hyperbola::Hyperbola;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::EMPTY;
    use crate::square::ALL_SQUARES;
    use crate::tables::{BISHOP, MAGIC_NUMBERS, ROOK};

    fn march(sq: Square, occupancy: SquareSet, directions: &[fn(Square) -> Option<Square>]) -> SquareSet {
        let mut attacks = EMPTY;
        for step in directions {
            let mut next = step(sq);
            while let Some(n) = next {
                attacks |= SquareSet::from_square(n);
                if occupancy.is_member(n) {
                    break;
                }
                next = step(n);
            }
        }
        attacks
    }

    fn reference_bishop_attacks(sq: Square, occupancy: SquareSet) -> SquareSet {
        march(
            sq,
            occupancy,
            &[
                |s| s.left().and_then(|s| s.up()),
                |s| s.right().and_then(|s| s.up()),
                |s| s.left().and_then(|s| s.down()),
                |s| s.right().and_then(|s| s.down()),
            ],
        )
    }

    fn reference_rook_attacks(sq: Square, occupancy: SquareSet) -> SquareSet {
        march(
            sq,
            occupancy,
            &[|s| s.left(), |s| s.right(), |s| s.up(), |s| s.down()],
        )
    }

    // Every subset of the relevant-occupancy mask, via deposit.  Blockers
    // outside the mask never change the result, so this is exhaustive.
    fn check_backend<B: SliderAttacks>() {
        for sq in ALL_SQUARES.iter() {
            let bishop_mask = MAGIC_NUMBERS[BISHOP][sq.to_index()].mask;
            for i in 0..(1u64 << bishop_mask.popcnt()) {
                let occupancy = SquareSet::new(i).deposit(bishop_mask);
                assert_eq!(
                    B::bishop_attacks(*sq, occupancy),
                    reference_bishop_attacks(*sq, occupancy),
                    "bishop on {} with occupancy\n{}",
                    sq,
                    occupancy
                );
            }

            let rook_mask = MAGIC_NUMBERS[ROOK][sq.to_index()].mask;
            for i in 0..(1u64 << rook_mask.popcnt()) {
                let occupancy = SquareSet::new(i).deposit(rook_mask);
                assert_eq!(
                    B::rook_attacks(*sq, occupancy),
                    reference_rook_attacks(*sq, occupancy),
                    "rook on {} with occupancy\n{}",
                    sq,
                    occupancy
                );
            }
        }
    }

    #[test]
    fn hyperbola_matches_reference() {
        check_backend::<hyperbola::Hyperbola>();
    }

    #[test]
    fn magic_matches_reference() {
        check_backend::<magic::Magic>();
    }

    #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
    #[test]
    fn pext_matches_reference() {
        check_backend::<pext::Pext>();
    }

    #[test]
    fn empty_board_bishop_corner() {
        use crate::file::File;
        use crate::rank::Rank;

        let a1 = Square::make_square(Rank::First, File::A);
        let attacks = Active::bishop_attacks(a1, SquareSet::from_square(a1));
        assert_eq!(attacks.popcnt(), 7);
        assert!(attacks.is_member(Square::make_square(Rank::Eighth, File::H)));
    }

    #[test]
    fn rook_blocked_both_ways() {
        use crate::file::File;
        use crate::rank::Rank;

        let d4 = Square::make_square(Rank::Fourth, File::D);
        let d7 = Square::make_square(Rank::Seventh, File::D);
        let g4 = Square::make_square(Rank::Fourth, File::G);
        let occupancy = SquareSet::from_square(d4)
            | SquareSet::from_square(d7)
            | SquareSet::from_square(g4);

        let attacks = Active::rook_attacks(d4, occupancy);

        // blockers are attacked, squares beyond them are not
        assert!(attacks.is_member(d7));
        assert!(attacks.is_member(g4));
        assert!(!attacks.is_member(Square::make_square(Rank::Eighth, File::D)));
        assert!(!attacks.is_member(Square::make_square(Rank::Fourth, File::H)));
        assert_eq!(attacks, reference_rook_attacks(d4, occupancy));
    }
}
