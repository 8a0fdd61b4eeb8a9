use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::Write;

use crate::bitboard::EMPTY;
use crate::bitboard::SquareSet;
use crate::gen_tables::helpers::{questions_and_answers, random_squareset, relevant_mask, NUM_MOVES};
use crate::gen_tables::rays::{get_rays, Slider};
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};

// This structure is for the "Magic Bitboard" generation
#[derive(Copy, Clone)]
struct Magic {
    magic_number: SquareSet,
    mask: SquareSet,
    offset: u32,
    rightshift: u8,
}

// These numbers allow you to hash a set of blocking pieces, and get an index
// in the MOVES array to return the attacked squares, given that set of
// blocking pieces.
static mut MAGIC_NUMBERS: [[Magic; NUM_SQUARES]; 2] = [[Magic {
    magic_number: EMPTY,
    mask: EMPTY,
    offset: 0,
    rightshift: 0,
}; 64]; 2];

// How far into the MOVES array has the generator written?
static mut GENERATED_NUM_MOVES: usize = 0;

// The attacked-squares lookup table, compressed by overlapping the unused
// slots of neighboring squares.
static mut MOVES: [SquareSet; NUM_MOVES] = [EMPTY; NUM_MOVES];

// When a MOVES entry is updated, update this with the rays that the entry may
// have set.  This helps with compressing the MOVES array.
static mut MOVE_RAYS: [SquareSet; NUM_MOVES] = [EMPTY; NUM_MOVES];

// Find a perfect hashing function for the attack lookup for a particular
// square and slider kind.  Store the resulting attack array in
// MOVES[cur_offset...], and return the next offset to be used.
fn generate_magic(sq: Square, slider: Slider, rng: &mut SmallRng, cur_offset: usize) -> usize {
    let (questions, answers) = questions_and_answers(sq, slider);
    assert_eq!(questions.len().count_ones(), 1);
    assert_eq!(questions.len(), answers.len());
    let mask = relevant_mask(sq, slider);

    assert_eq!(questions.iter().fold(EMPTY, |b, n| b | *n), mask);
    assert_eq!(
        answers.iter().fold(EMPTY, |b, n| b | *n),
        get_rays(sq, slider)
    );
    let mut new_offset = cur_offset;

    for i in 0..cur_offset {
        let mut found = true;
        for j in 0..answers.len() {
            unsafe {
                if MOVE_RAYS[i + j] & get_rays(sq, slider) != EMPTY {
                    found = false;
                    break;
                }
            }
        }
        if found {
            new_offset = i;
            break;
        }
    }

    let mut new_magic = Magic {
        magic_number: EMPTY,
        mask: mask,
        offset: new_offset as u32,
        rightshift: (questions.len().leading_zeros() + 1) as u8,
    };

    let mut done = false;

    while !done {
        let magic_squareset = random_squareset(rng);

        if (mask * magic_squareset).popcnt() < 6 {
            continue;
        }

        let mut new_answers = vec![EMPTY; questions.len()];
        done = true;
        for i in 0..questions.len() {
            let j = (magic_squareset * questions[i]).to_size(new_magic.rightshift);
            if new_answers[j] == EMPTY || new_answers[j] == answers[i] {
                new_answers[j] = answers[i];
            } else {
                done = false;
                break;
            }
        }
        if done {
            new_magic.magic_number = magic_squareset;
        }
    }

    unsafe {
        MAGIC_NUMBERS[slider as usize][sq.to_index()] = new_magic;

        for i in 0..questions.len() {
            let j = (new_magic.magic_number * questions[i]).to_size(new_magic.rightshift);
            MOVES[(new_magic.offset as usize) + j] |= answers[i];
            MOVE_RAYS[(new_magic.offset as usize) + j] |= get_rays(sq, slider);
        }
        if new_offset + questions.len() < cur_offset {
            new_offset = cur_offset;
        } else {
            new_offset += questions.len();
        }
        GENERATED_NUM_MOVES = new_offset;
        new_offset
    }
}

// Generate the magic for each square for both rooks and bishops.  The rng is
// seeded so the generated file is stable between builds.
pub fn gen_all_magic() {
    let mut rng = SmallRng::seed_from_u64(0xDEC0DE_0FF1CE);
    let mut cur_offset = 0;
    for slider in [Slider::Bishop, Slider::Rook].iter() {
        for sq in ALL_SQUARES.iter() {
            cur_offset = generate_magic(*sq, *slider, &mut rng, cur_offset);
        }
    }
}

// Write the MAGIC_NUMBERS and MOVES arrays to the specified file.
pub fn write_magic(f: &mut File) {
    write!(f, "pub(crate) const ROOK: usize = {};\n", Slider::Rook as usize).unwrap();
    write!(
        f,
        "pub(crate) const BISHOP: usize = {};\n",
        Slider::Bishop as usize
    )
    .unwrap();

    write!(
        f,
        "pub(crate) static MAGIC_NUMBERS: [[Magic; 64]; 2] = [[\n"
    )
    .unwrap();
    for i in 0..2 {
        for j in 0..64 {
            unsafe {
                write!(f, "    Magic {{ magic_number: SquareSet({}), mask: SquareSet({}), offset: {}, rightshift: {} }},\n",
                    MAGIC_NUMBERS[i][j].magic_number.to_size(0),
                    MAGIC_NUMBERS[i][j].mask.to_size(0),
                    MAGIC_NUMBERS[i][j].offset,
                    MAGIC_NUMBERS[i][j].rightshift).unwrap();
            }
        }
        if i != 1 {
            write!(f, "], [\n").unwrap();
        }
    }
    write!(f, "]];\n").unwrap();

    unsafe {
        write!(
            f,
            "pub(crate) static MOVES: [SquareSet; {}] = [\n",
            GENERATED_NUM_MOVES
        )
        .unwrap();
        for i in 0..GENERATED_NUM_MOVES {
            write!(f, "    SquareSet({}),\n", MOVES[i].to_size(0)).unwrap();
        }
    }
    write!(f, "];\n").unwrap();
}
