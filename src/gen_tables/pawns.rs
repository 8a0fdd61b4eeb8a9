use std::fs::File;
use std::io::Write;

use crate::bitboard::{SquareSet, EMPTY};
use crate::color::{Color, ALL_COLORS};
use crate::square::{Square, ALL_SQUARES};

// Given a square and a color, what squares does a pawn of that color attack
// from there?  Square-major so a side-to-move lookup stays branchless, and
// tabulated for all 64 squares even though pawns never sit on the first or
// eighth rank.
static mut PAWN_ATTACKS: [[SquareSet; 2]; 64] = [[EMPTY; 2]; 64];

fn forward(sq: Square, color: Color) -> Option<Square> {
    match color {
        Color::White => sq.up(),
        Color::Black => sq.down(),
    }
}

// Generate the PAWN_ATTACKS array.
pub fn gen_pawn_attacks() {
    for src in ALL_SQUARES.iter() {
        for color in ALL_COLORS.iter() {
            unsafe {
                PAWN_ATTACKS[src.to_index()][color.to_index()] = EMPTY;
                if let Some(x) = forward(*src, *color) {
                    if let Some(y) = x.left() {
                        PAWN_ATTACKS[src.to_index()][color.to_index()] ^=
                            SquareSet::from_square(y);
                    }
                    if let Some(y) = x.right() {
                        PAWN_ATTACKS[src.to_index()][color.to_index()] ^=
                            SquareSet::from_square(y);
                    }
                }
            }
        }
    }
}

// Write the PAWN_ATTACKS array to the specified file.
pub fn write_pawn_attacks(f: &mut File) {
    write!(f, "pub(crate) static PAWN_ATTACKS: [[SquareSet; 2]; 64] = [\n").unwrap();
    for i in 0..64 {
        unsafe {
            write!(
                f,
                "    [SquareSet({}), SquareSet({})],\n",
                PAWN_ATTACKS[i][0].to_size(0),
                PAWN_ATTACKS[i][1].to_size(0)
            )
            .unwrap()
        };
    }
    write!(f, "];\n").unwrap();
}
