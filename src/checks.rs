//! Check and pin detection, and whole-board attack aggregation.
//!
//! The callers own the position; everything here takes plain piece sets.  In
//! every function, `bishops` means bishops and queens, and `rooks` means
//! rooks and queens; `occupancy` is every occupied square of both colors.

use arrayvec::ArrayVec;

use crate::attacks::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attackers, pawn_attacks, rook_attacks,
};
use crate::bitboard::{SquareSet, EMPTY, FILE_A, FILE_H, RANK_1};
use crate::color::Color;
use crate::intercepts::{get_intercept_squares, pin_check};
use crate::slider::hyperbola::Hyperbola;
use crate::square::Square;

/// Get the pieces of the side not to move that attack the given square.
#[inline]
pub fn attackers_of(
    occupancy: SquareSet,
    side_to_move_mask: SquareSet,
    pawns: SquareSet,
    knights: SquareSet,
    bishops: SquareSet,
    rooks: SquareSet,
    kings: SquareSet,
    sq: Square,
    side_to_move: Color,
) -> SquareSet {
    let horiz_vert_hits = rook_attacks(sq, occupancy) & rooks;
    let diag_hits = bishop_attacks(sq, occupancy) & bishops;
    let pawn_hits = pawn_attackers(sq, !side_to_move) & pawns;
    let king_hits = king_attacks(sq) & kings;
    let knight_hits = knight_attacks(sq) & knights;

    (horiz_vert_hits | diag_hits | pawn_hits | king_hits | knight_hits) & !side_to_move_mask
}

/// Get every square attacked by the given pieces, which belong to the side
/// not to move.  Used for king-move and castling legality: a king may not
/// step onto an attacked square.
///
/// `king` is the attacking side's king.  `side_to_move` fixes the pawn
/// attack direction; the attacking pawns advance towards the side to move.
#[inline]
pub fn all_attacked_squares(
    occupancy: SquareSet,
    pawns: SquareSet,
    knights: SquareSet,
    bishops: SquareSet,
    rooks: SquareSet,
    king: Square,
    side_to_move: Color,
) -> SquareSet {
    let mut attacks = EMPTY;

    // Pawn captures for both directions at once.  The attacking pawns have
    // the opposite color, so for white to move they advance down the board:
    // rotate by -9 (i.e. 55) for the left capture, -7 for the right; for
    // black to move, by 7 and 9.  The file masks keep captures from
    // wrapping around the board edge.
    let left_rot = (55 + 16 * side_to_move.to_index() as u32) & 63;
    let right_rot = (left_rot + 2) & 63;

    attacks |= (pawns & !FILE_A).rotl(left_rot);
    attacks |= (pawns & !FILE_H).rotl(right_rot);

    for piece in knights {
        attacks |= knight_attacks(piece);
    }

    #[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
    {
        attacks |= crate::slider::avx512::attacked_squares_by_sliders(bishops, rooks, occupancy);
    }

    #[cfg(not(all(target_arch = "x86_64", target_feature = "avx512f")))]
    {
        for piece in bishops {
            attacks |= bishop_attacks(piece, occupancy);
        }

        for piece in rooks {
            attacks |= rook_attacks(piece, occupancy);
        }
    }

    attacks |= king_attacks(king);

    attacks
}

/// Determine the pieces checking the king of the side to move, and the
/// pieces pinned against it.
///
/// `ep_capturable` is the pawn that just advanced two squares (or empty),
/// `ep_square` the square behind it that a capture would land on.  The
/// en-passant-capturable pawn is included in the pinned set whenever
/// capturing it en passant would be illegal, so a move search only ever has
/// to consult the pinned set.
///
/// No error outcomes: the inputs are assumed to come from a well-formed
/// position.
pub fn determine_checkers_and_pins(
    occupancy: SquareSet,
    side_to_move_mask: SquareSet,
    pawns: SquareSet,
    knights: SquareSet,
    bishops: SquareSet,
    rooks: SquareSet,
    ep_square: Square,
    ep_capturable: SquareSet,
    king_sq: Square,
    side_to_move: Color,
) -> (SquareSet, SquareSet) {
    let opponent_pieces = occupancy ^ side_to_move_mask;

    // a pawn of the side to move attacks exactly the squares from which an
    // opposing pawn gives check
    let mut checkers = pawn_attacks(king_sq, side_to_move) & pawns;
    checkers |= knight_attacks(king_sq) & knights;

    let first_hv_hits = rook_attacks(king_sq, occupancy);
    checkers |= first_hv_hits & rooks;

    let first_diag_hits = bishop_attacks(king_sq, occupancy);
    checkers |= first_diag_hits & bishops;

    checkers &= opponent_pieces;

    // Resolve pinned pieces.  Remove the first hits from the occupancy to
    // x-ray through them, but put every opposing piece back so the x-ray
    // never skips over two of them; the en-passant-capturable pawn stays
    // removed on the diagonals, since a diagonal pin of that pawn is what
    // makes the en-passant capture illegal.  Sliders already counted as
    // checkers cannot also be pinners.
    let second_hv_hits = rook_attacks(king_sq, (occupancy & !first_hv_hits) | opponent_pieces);
    let second_diag_hits = bishop_attacks(
        king_sq,
        (occupancy & !first_diag_hits) | (opponent_pieces & !ep_capturable),
    );

    let pinners =
        ((rooks & second_hv_hits) | (bishops & second_diag_hits)) & opponent_pieces & !checkers;

    let mut pinned = EMPTY;
    for pinner in pinners {
        let in_between = get_intercept_squares(king_sq, pinner);
        pinned |= in_between & (side_to_move_mask | ep_capturable);
    }

    // The rest is en-passant capture legality.  Short-circuit when there is
    // nothing to capture.
    if ep_capturable == EMPTY {
        return (checkers, pinned);
    }

    // a check by anything other than the en-passant pawn cannot be resolved
    // by capturing it
    if checkers & !ep_capturable != EMPTY {
        pinned |= ep_capturable;
    }

    if ep_capturable & !pinned != EMPTY {
        // the at most two friendly pawns that could capture en passant
        let adjacent_pawns = (((ep_capturable & !FILE_A) >> 1) | ((ep_capturable & !FILE_H) << 1))
            & pawns
            & side_to_move_mask;

        let capturers: ArrayVec<Square, 2> = adjacent_pawns.collect();

        // if every capturing pawn is pinned off the en-passant square, the
        // capture is illegal for all of them
        let mut ep_capture_legal = EMPTY;
        for capturer in &capturers {
            if pin_check(
                *capturer,
                SquareSet::from_square(ep_square),
                king_sq,
                pinned,
            ) {
                ep_capture_legal = !EMPTY;
            }
        }
        pinned |= ep_capturable & !ep_capture_legal;

        // Horizontal discovered check: capturing en passant removes two
        // pawns from the rank at once, which neither single-piece pin pass
        // can see.  Only possible when the king shares the rank with the
        // pawn.
        if ep_capturable & (RANK_1 << (king_sq.to_int() & 56)) != EMPTY {
            let adjacent_minus_one = adjacent_pawns.remove_first_square();

            let exposed_horiz_line = Hyperbola::horiz_rook_attacks(
                ep_capturable.first_square(),
                occupancy & !(adjacent_pawns & !adjacent_minus_one),
            );

            let king_bit = SquareSet::from_square(king_sq);
            let opp_rooks = rooks & !side_to_move_mask;

            pinned |= ep_capturable
                & (king_bit & exposed_horiz_line).all_if_any()
                & (opp_rooks & exposed_horiz_line).all_if_any();
        }
    }

    (checkers, pinned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::File;
    use crate::rank::Rank;
    use crate::square::ALL_SQUARES;

    fn sq(rank: Rank, file: File) -> Square {
        Square::make_square(rank, file)
    }

    #[test]
    fn rook_pins_bishop_on_file() {
        let e1 = sq(Rank::First, File::E);
        let e4 = sq(Rank::Fourth, File::E);
        let e8 = sq(Rank::Eighth, File::E);

        let white = SquareSet::from_square(e1) | SquareSet::from_square(e4);
        let black_rook = SquareSet::from_square(e8);
        let occupancy = white | black_rook;

        let (checkers, pinned) = determine_checkers_and_pins(
            occupancy,
            white,
            EMPTY,
            EMPTY,
            SquareSet::from_square(e4),
            black_rook,
            Square::NONE,
            EMPTY,
            e1,
            Color::White,
        );

        assert_eq!(checkers, EMPTY);
        assert_eq!(pinned, SquareSet::from_square(e4));

        // the bishop may slide along the e-file but not leave it
        assert!(pin_check(e4, SquareSet::from_square(e8), e1, pinned));
        assert!(!pin_check(
            e4,
            SquareSet::from_square(sq(Rank::Sixth, File::C)),
            e1,
            pinned
        ));
    }

    #[test]
    fn slider_behind_checker_is_not_a_pinner() {
        // two black rooks stacked on the e-file: the near one checks, the
        // far one must not pin anything
        let e1 = sq(Rank::First, File::E);
        let e5 = sq(Rank::Fifth, File::E);
        let e8 = sq(Rank::Eighth, File::E);

        let white = SquareSet::from_square(e1);
        let black_rooks = SquareSet::from_square(e5) | SquareSet::from_square(e8);
        let occupancy = white | black_rooks;

        let (checkers, pinned) = determine_checkers_and_pins(
            occupancy,
            white,
            EMPTY,
            EMPTY,
            EMPTY,
            black_rooks,
            Square::NONE,
            EMPTY,
            e1,
            Color::White,
        );

        assert_eq!(checkers, SquareSet::from_square(e5));
        assert_eq!(pinned, EMPTY);
    }

    #[test]
    fn ep_capture_exposing_rank_check_marks_ep_pawn_pinned() {
        // White: king a5, pawn e5.  Black: pawn d5 (just double-stepped, so
        // d6 is the en-passant square), rook h5.  Capturing e5xd6 removes
        // both pawns from the fifth rank and exposes the king to the rook,
        // so the en-passant pawn must be marked pinned, even though neither
        // pawn is individually pinned.
        let a5 = sq(Rank::Fifth, File::A);
        let d5 = sq(Rank::Fifth, File::D);
        let d6 = sq(Rank::Sixth, File::D);
        let e5 = sq(Rank::Fifth, File::E);
        let h5 = sq(Rank::Fifth, File::H);

        let white = SquareSet::from_square(a5) | SquareSet::from_square(e5);
        let black = SquareSet::from_square(d5) | SquareSet::from_square(h5);
        let pawns = SquareSet::from_square(e5) | SquareSet::from_square(d5);
        let rooks = SquareSet::from_square(h5);
        let ep_capturable = SquareSet::from_square(d5);

        let (checkers, pinned) = determine_checkers_and_pins(
            white | black,
            white,
            pawns,
            EMPTY,
            EMPTY,
            rooks,
            d6,
            ep_capturable,
            a5,
            Color::White,
        );

        assert_eq!(checkers, EMPTY);
        assert!(pinned.is_member(d5));
        assert!(!pinned.is_member(e5));
    }

    #[test]
    fn checker_other_than_ep_pawn_pins_ep_pawn() {
        // a knight checks the king while a black pawn is en-passant
        // capturable: the capture cannot resolve the check
        let e1 = sq(Rank::First, File::E);
        let f3 = sq(Rank::Third, File::F);
        let d4 = sq(Rank::Fourth, File::D);
        let d5 = sq(Rank::Fifth, File::D);
        let d6 = sq(Rank::Sixth, File::D);

        let white = SquareSet::from_square(e1) | SquareSet::from_square(d4);
        let black = SquareSet::from_square(f3) | SquareSet::from_square(d5);
        let pawns = SquareSet::from_square(d4) | SquareSet::from_square(d5);
        let knights = SquareSet::from_square(f3);
        let ep_capturable = SquareSet::from_square(d5);

        let (checkers, pinned) = determine_checkers_and_pins(
            white | black,
            white,
            pawns,
            knights,
            EMPTY,
            EMPTY,
            d6,
            ep_capturable,
            e1,
            Color::White,
        );

        assert_eq!(checkers, SquareSet::from_square(f3));
        assert!(pinned.is_member(d5));
    }

    #[test]
    fn attacked_squares_match_per_piece_union() {
        // black is attacking (white to move): pawns capture down the board
        let side_to_move = Color::White;
        let attacker_color = !side_to_move;

        let pawns = SquareSet::set(Rank::Fifth, File::C) | SquareSet::set(Rank::Seventh, File::A);
        let knights = SquareSet::set(Rank::Sixth, File::F);
        let bishops = SquareSet::set(Rank::Eighth, File::C);
        let rooks = SquareSet::set(Rank::Fourth, File::H) | SquareSet::set(Rank::Eighth, File::D);
        let king = sq(Rank::Eighth, File::G);
        let own_king = SquareSet::set(Rank::First, File::G);

        let occupancy =
            pawns | knights | bishops | rooks | SquareSet::from_square(king) | own_king;

        let mut expected = EMPTY;
        for p in pawns {
            expected |= pawn_attacks(p, attacker_color);
        }
        for n in knights {
            expected |= knight_attacks(n);
        }
        for b in bishops {
            expected |= bishop_attacks(b, occupancy);
        }
        for r in rooks {
            expected |= rook_attacks(r, occupancy);
        }
        expected |= king_attacks(king);

        assert_eq!(
            all_attacked_squares(occupancy, pawns, knights, bishops, rooks, king, side_to_move),
            expected
        );
    }

    #[test]
    fn attackers_of_matches_attack_symmetry() {
        // a piece attacks the square exactly when it shows up as an attacker
        let white_king = sq(Rank::First, File::G);
        let black_rook = sq(Rank::Fourth, File::D);
        let black_knight = sq(Rank::Third, File::E);
        let black_king = sq(Rank::Eighth, File::G);

        let white = SquareSet::from_square(white_king);
        let black = SquareSet::from_square(black_rook)
            | SquareSet::from_square(black_knight)
            | SquareSet::from_square(black_king);
        let occupancy = white | black;

        for target in ALL_SQUARES.iter() {
            let attackers = attackers_of(
                occupancy,
                white,
                EMPTY,
                SquareSet::from_square(black_knight),
                EMPTY,
                SquareSet::from_square(black_rook),
                SquareSet::from_square(black_king),
                *target,
                Color::White,
            );

            let rook_attacks_target = rook_attacks(black_rook, occupancy).is_member(*target);
            let knight_attacks_target = knight_attacks(black_knight).is_member(*target);
            let king_attacks_target = king_attacks(black_king).is_member(*target);

            assert_eq!(attackers.is_member(black_rook), rook_attacks_target);
            assert_eq!(attackers.is_member(black_knight), knight_attacks_target);
            assert_eq!(attackers.is_member(black_king), king_attacks_target);
        }
    }
}
