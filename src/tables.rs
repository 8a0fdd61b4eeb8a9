use crate::bitboard::SquareSet;
use crate::color::Color;
use crate::square::Square;

/// One entry of the classic magic-number lookup.
#[derive(Copy, Clone)]
pub(crate) struct Magic {
    pub(crate) magic_number: SquareSet,
    pub(crate) mask: SquareSet,
    pub(crate) offset: u32,
    pub(crate) rightshift: u8,
}

/// Per-square masks for the hyperbola quintessence attack computation.
#[derive(Copy, Clone)]
pub(crate) struct HyperbolaMask {
    pub(crate) sq_bit: SquareSet,
    pub(crate) vert_ex: SquareSet,
    pub(crate) diag_ex: SquareSet,
    pub(crate) anti_diag_ex: SquareSet,
}

// The lookup tables, generated by src/build.rs.
include!(concat!(env!("OUT_DIR"), "/tables_gen.rs"));

/// Get the squares a pawn of the given color attacks from the given square.
#[inline]
pub fn pawn_attacks(sq: Square, color: Color) -> SquareSet {
    unsafe {
        *PAWN_ATTACKS
            .get_unchecked(sq.to_index())
            .get_unchecked(color.to_index())
    }
}

/// Get the squares from which a pawn of the given color attacks the given
/// square.  This is the pawn-attack table indexed by the opposite color: a
/// white pawn attacks the given square exactly from the squares a black pawn
/// on it would attack.
#[inline]
pub fn pawn_attackers(sq: Square, color: Color) -> SquareSet {
    unsafe {
        *PAWN_ATTACKS
            .get_unchecked(sq.to_index())
            .get_unchecked((!color).to_index())
    }
}

/// Get the squares a knight attacks from the given square.
#[inline]
pub fn knight_attacks(sq: Square) -> SquareSet {
    unsafe { *KNIGHT_MOVES.get_unchecked(sq.to_index()) }
}

/// Get the squares a king attacks from the given square.
#[inline]
pub fn king_attacks(sq: Square) -> SquareSet {
    unsafe { *KING_MOVES.get_unchecked(sq.to_index()) }
}
