use std::fs::File;
use std::io::Write;

use crate::bitboard::{SquareSet, EMPTY};
use crate::gen_tables::helpers::{questions_and_answers, relevant_mask};
use crate::gen_tables::rays::Slider;
use crate::square::ALL_SQUARES;

// Exact sizes of the dense pext-indexed attack blocks: the sum over all
// squares of 1 << popcnt(relevant mask).
pub const BISHOP_PEXT_SIZE: usize = 5248;
pub const ROOK_PEXT_SIZE: usize = 102400;

static mut BISHOP_MASKS: [SquareSet; 64] = [EMPTY; 64];
static mut ROOK_MASKS: [SquareSet; 64] = [EMPTY; 64];
static mut BISHOP_OFFSETS: [u32; 64] = [0; 64];
static mut ROOK_OFFSETS: [u32; 64] = [0; 64];

// The flat attack array, bishop block first.  The i-th entry of a square's
// block is the attack set for the occupancy whose extract (pext) under the
// square's mask equals i; mask_subsets produces questions in exactly that
// order.
static mut PEXT_ATTACKS: [SquareSet; BISHOP_PEXT_SIZE + ROOK_PEXT_SIZE] =
    [EMPTY; BISHOP_PEXT_SIZE + ROOK_PEXT_SIZE];

// Generate the masks, offsets and attack data for both sliders.
pub fn gen_pext_data() {
    let mut offset: u32 = 0;

    for sq in ALL_SQUARES.iter() {
        let mask = relevant_mask(*sq, Slider::Bishop);
        let (_, answers) = questions_and_answers(*sq, Slider::Bishop);
        unsafe {
            BISHOP_MASKS[sq.to_index()] = mask;
            BISHOP_OFFSETS[sq.to_index()] = offset;
            for (i, answer) in answers.iter().enumerate() {
                PEXT_ATTACKS[offset as usize + i] = *answer;
            }
        }
        offset += 1u32 << mask.popcnt();
    }
    assert_eq!(offset as usize, BISHOP_PEXT_SIZE);

    for sq in ALL_SQUARES.iter() {
        let mask = relevant_mask(*sq, Slider::Rook);
        let (_, answers) = questions_and_answers(*sq, Slider::Rook);
        unsafe {
            ROOK_MASKS[sq.to_index()] = mask;
            ROOK_OFFSETS[sq.to_index()] = offset;
            for (i, answer) in answers.iter().enumerate() {
                PEXT_ATTACKS[offset as usize + i] = *answer;
            }
        }
        offset += 1u32 << mask.popcnt();
    }
    assert_eq!(offset as usize, BISHOP_PEXT_SIZE + ROOK_PEXT_SIZE);
}

// Write the pext masks, offsets and attack data to the specified file.  The
// arrays are unused on targets without BMI2 but generated unconditionally.
pub fn write_pext_data(f: &mut File) {
    write!(f, "#[allow(dead_code)]\n").unwrap();
    write!(f, "pub(crate) static PEXT_BISHOP_MASKS: [SquareSet; 64] = [\n").unwrap();
    for i in 0..64 {
        unsafe { write!(f, "    SquareSet({}),\n", BISHOP_MASKS[i].to_size(0)).unwrap() };
    }
    write!(f, "];\n").unwrap();

    write!(f, "#[allow(dead_code)]\n").unwrap();
    write!(f, "pub(crate) static PEXT_ROOK_MASKS: [SquareSet; 64] = [\n").unwrap();
    for i in 0..64 {
        unsafe { write!(f, "    SquareSet({}),\n", ROOK_MASKS[i].to_size(0)).unwrap() };
    }
    write!(f, "];\n").unwrap();

    write!(f, "#[allow(dead_code)]\n").unwrap();
    write!(f, "pub(crate) static PEXT_BISHOP_OFFSETS: [u32; 64] = [\n").unwrap();
    for i in 0..64 {
        unsafe { write!(f, "    {},\n", BISHOP_OFFSETS[i]).unwrap() };
    }
    write!(f, "];\n").unwrap();

    write!(f, "#[allow(dead_code)]\n").unwrap();
    write!(f, "pub(crate) static PEXT_ROOK_OFFSETS: [u32; 64] = [\n").unwrap();
    for i in 0..64 {
        unsafe { write!(f, "    {},\n", ROOK_OFFSETS[i]).unwrap() };
    }
    write!(f, "];\n").unwrap();

    write!(f, "#[allow(dead_code)]\n").unwrap();
    write!(
        f,
        "pub(crate) static PEXT_ATTACKS: [SquareSet; {}] = [\n",
        BISHOP_PEXT_SIZE + ROOK_PEXT_SIZE
    )
    .unwrap();
    for i in 0..(BISHOP_PEXT_SIZE + ROOK_PEXT_SIZE) {
        unsafe { write!(f, "    SquareSet({}),\n", PEXT_ATTACKS[i].to_size(0)).unwrap() };
    }
    write!(f, "];\n").unwrap();
}
