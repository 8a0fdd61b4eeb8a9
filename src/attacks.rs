//! The attack query surface.
//!
//! Everything here is a pure function of its inputs: table lookups for the
//! stepping pieces, a backend lookup for the sliders.  Occupancy always means
//! every occupied square on the board, friend and foe alike; the first
//! occupied square of a slider ray is attacked, whoever owns the piece.

use crate::bitboard::{SquareSet, FILE_A, FILE_H, RANK_1, RANK_8};
use crate::color::Color;
use crate::slider::{Active, SliderAttacks};
use crate::square::Square;

pub use crate::tables::{king_attacks, knight_attacks, pawn_attacks, pawn_attackers};

/// For a given set of capturable squares, get the squares from which a pawn
/// of the given color can capture one of them in the given direction.
/// "Right" means towards the H file.
///
/// Pawn placement is not assumed valid: attacker squares are reported for
/// white pawns on the first rank and black pawns on the eighth.
#[inline]
pub fn pawn_attackers_from_capturable(
    capturable: SquareSet,
    color: Color,
    capture_to_right: bool,
) -> SquareSet {
    match (color, capture_to_right) {
        (Color::White, true) => (capturable & !(FILE_A | RANK_1)) >> 9,
        (Color::White, false) => (capturable & !(FILE_H | RANK_1)) >> 7,
        (Color::Black, true) => (capturable & !(FILE_A | RANK_8)) << 7,
        (Color::Black, false) => (capturable & !(FILE_H | RANK_8)) << 9,
    }
}

/// Get the squares a bishop on `sq` attacks, given the set of all occupied
/// squares.  Each diagonal ray extends until and including the first
/// occupied square.  Occupancy of `sq` itself is ignored.
#[inline]
pub fn bishop_attacks(sq: Square, occupancy: SquareSet) -> SquareSet {
    Active::bishop_attacks(sq, occupancy)
}

/// Get the squares a rook on `sq` attacks, given the set of all occupied
/// squares.  Each rank/file ray extends until and including the first
/// occupied square.  Occupancy of `sq` itself is ignored.
#[inline]
pub fn rook_attacks(sq: Square, occupancy: SquareSet) -> SquareSet {
    Active::rook_attacks(sq, occupancy)
}

/// Get the squares a queen on `sq` attacks, given the set of all occupied
/// squares.
#[inline]
pub fn queen_attacks(sq: Square, occupancy: SquareSet) -> SquareSet {
    bishop_attacks(sq, occupancy) | rook_attacks(sq, occupancy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::EMPTY;
    use crate::color::ALL_COLORS;
    use crate::file::File;
    use crate::rank::Rank;
    use crate::square::ALL_SQUARES;

    #[test]
    fn pawn_attack_attacker_duality() {
        // a pawn on A attacks B exactly when a same-colored pawn on B is an
        // attacker of A
        for color in ALL_COLORS.iter() {
            for src in ALL_SQUARES.iter() {
                for dst in pawn_attacks(*src, *color) {
                    assert!(pawn_attackers(dst, *color).is_member(*src));
                }
                for att in pawn_attackers(*src, *color) {
                    assert!(pawn_attacks(att, *color).is_member(*src));
                }
            }
        }
    }

    #[test]
    fn capturable_attackers_match_per_square_attacks() {
        for color in ALL_COLORS.iter() {
            for target in ALL_SQUARES.iter() {
                let capturable = SquareSet::from_square(*target);
                let attackers = pawn_attackers_from_capturable(capturable, *color, true)
                    | pawn_attackers_from_capturable(capturable, *color, false);
                assert_eq!(
                    attackers,
                    pawn_attackers(*target, *color),
                    "{:?} pawns capturing {}",
                    color,
                    target
                );
            }
        }
    }

    #[test]
    fn capture_direction_is_exclusive() {
        let target = SquareSet::set(Rank::Fifth, File::D);
        let right = pawn_attackers_from_capturable(target, Color::White, true);
        let left = pawn_attackers_from_capturable(target, Color::White, false);

        assert_eq!(right, SquareSet::set(Rank::Fourth, File::C));
        assert_eq!(left, SquareSet::set(Rank::Fourth, File::E));
        assert_eq!(right & left, EMPTY);
    }

    #[test]
    fn queen_is_bishop_and_rook() {
        let d4 = Square::make_square(Rank::Fourth, File::D);
        let occupancy = SquareSet::set(Rank::Sixth, File::D) | SquareSet::set(Rank::Sixth, File::F);
        assert_eq!(
            queen_attacks(d4, occupancy),
            bishop_attacks(d4, occupancy) | rook_attacks(d4, occupancy)
        );
    }
}
