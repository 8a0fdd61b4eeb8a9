use crate::bitboard::{SquareSet, EMPTY};
use crate::square::{Square, ALL_SQUARES};
use std::fs::File;
use std::io::Write;

/// The two sliding piece kinds.  The discriminants are the first index into
/// the generated MAGIC_NUMBERS array.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum Slider {
    Rook = 0,
    Bishop = 1,
}

pub const ALL_SLIDERS: [Slider; 2] = [Slider::Rook, Slider::Bishop];

// Given a square and a slider kind, what squares would it attack on an empty
// board?  Input to the magic and pext generators, and to the intercept table
// checks.
static mut RAYS: [[SquareSet; 64]; 2] = [[EMPTY; 64]; 2];

// For each square, generate the RAYS for the bishop.
pub fn gen_bishop_rays() {
    for src in ALL_SQUARES.iter() {
        unsafe {
            RAYS[Slider::Bishop as usize][src.to_index()] = ALL_SQUARES
                .iter()
                .filter(|dest| {
                    let src_rank = src.get_rank().to_index() as i8;
                    let src_file = src.get_file().to_index() as i8;
                    let dest_rank = dest.get_rank().to_index() as i8;
                    let dest_file = dest.get_file().to_index() as i8;

                    (src_rank - dest_rank).abs() == (src_file - dest_file).abs() && *src != **dest
                })
                .fold(EMPTY, |b, s| b | SquareSet::from_square(*s));
        }
    }
}

// For each square, generate the RAYS for the rook.
pub fn gen_rook_rays() {
    for src in ALL_SQUARES.iter() {
        unsafe {
            RAYS[Slider::Rook as usize][src.to_index()] = ALL_SQUARES
                .iter()
                .filter(|dest| {
                    let src_rank = src.get_rank().to_index();
                    let src_file = src.get_file().to_index();
                    let dest_rank = dest.get_rank().to_index();
                    let dest_file = dest.get_file().to_index();

                    (src_rank == dest_rank || src_file == dest_file) && *src != **dest
                })
                .fold(EMPTY, |b, s| b | SquareSet::from_square(*s));
        }
    }
}

pub fn get_rays(sq: Square, slider: Slider) -> SquareSet {
    unsafe { RAYS[slider as usize][sq.to_index()] }
}

// Write the RAYS array to the specified file.  The magic lookup masks its
// result with the empty-board rays to undo the MOVES overlap compression.
pub fn write_rays(f: &mut File) {
    write!(f, "pub(crate) static RAYS: [[SquareSet; 64]; 2] = [[\n").unwrap();
    for i in 0..2 {
        for j in 0..64 {
            unsafe { write!(f, "    SquareSet({}),\n", RAYS[i][j].to_size(0)).unwrap() };
        }
        if i != 1 {
            write!(f, "  ], [\n").unwrap();
        }
    }
    write!(f, "]];\n").unwrap();
}
