use std::fs::File;
use std::io::Write;

use crate::bitboard::{SquareSet, EMPTY};
use crate::square::ALL_SQUARES;

const MAIN_DIAG: u64 = 0x8040_2010_0804_0201; // a1-h8
const ANTI_DIAG: u64 = 0x0102_0408_1020_4080; // h1-a8

// Per-square masks for the hyperbola quintessence o^(o-2r) attack
// computation: the square's own bit, and the vertical, diagonal and
// anti-diagonal rays through the square with the square itself excluded.
static mut SQ_BITS: [SquareSet; 64] = [EMPTY; 64];
static mut VERT_EX: [SquareSet; 64] = [EMPTY; 64];
static mut DIAG_EX: [SquareSet; 64] = [EMPTY; 64];
static mut ANTI_DIAG_EX: [SquareSet; 64] = [EMPTY; 64];

fn shift_diag(diag: u64, shift: i8) -> u64 {
    if shift >= 0 {
        diag >> (shift as u32 * 8)
    } else {
        diag << ((-shift) as u32 * 8)
    }
}

// Generate the hyperbola masks.
pub fn gen_hyperbola_masks() {
    for sq in ALL_SQUARES.iter() {
        let col = sq.get_file().to_index() as i8;
        let row = sq.get_rank().to_index() as i8;
        let sq_bit = 1u64 << sq.to_int();

        let vert = 0x0101_0101_0101_0101u64 << col;
        let diag = shift_diag(MAIN_DIAG, col - row);
        let anti_diag = shift_diag(ANTI_DIAG, 7 - col - row);

        unsafe {
            SQ_BITS[sq.to_index()] = SquareSet::new(sq_bit);
            VERT_EX[sq.to_index()] = SquareSet::new(vert ^ sq_bit);
            DIAG_EX[sq.to_index()] = SquareSet::new(diag ^ sq_bit);
            ANTI_DIAG_EX[sq.to_index()] = SquareSet::new(anti_diag ^ sq_bit);
        }
    }
}

// Write the HYPERBOLA array to the specified file.
pub fn write_hyperbola_masks(f: &mut File) {
    write!(f, "pub(crate) static HYPERBOLA: [HyperbolaMask; 64] = [\n").unwrap();
    for i in 0..64 {
        unsafe {
            write!(
                f,
                "    HyperbolaMask {{ sq_bit: SquareSet({}), vert_ex: SquareSet({}), diag_ex: SquareSet({}), anti_diag_ex: SquareSet({}) }},\n",
                SQ_BITS[i].to_size(0),
                VERT_EX[i].to_size(0),
                DIAG_EX[i].to_size(0),
                ANTI_DIAG_EX[i].to_size(0)
            )
            .unwrap()
        };
    }
    write!(f, "];\n").unwrap();
}
