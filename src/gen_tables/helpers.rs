use crate::bitboard::{SquareSet, EMPTY};
use crate::file::File;
use crate::gen_tables::rays::{get_rays, Slider};
use crate::rank::Rank;
use crate::square::{Square, ALL_SQUARES};
use rand::Rng;

// How many squares can a blocking piece be on for the rook?
const ROOK_BITS: usize = 12;
// How many squares can a blocking piece be on for a bishop?
const BISHOP_BITS: usize = 9;
// Staging capacity for the compressed magic MOVES array.
pub const NUM_MOVES: usize = 64 * (1 << ROOK_BITS) /* Rook Moves */ +
                         64 * (1 << BISHOP_BITS) /* Bishop Moves */;

// Return a list of directions for the rook.
fn rook_directions() -> Vec<fn(Square) -> Option<Square>> {
    fn left(sq: Square) -> Option<Square> {
        sq.left()
    }
    fn right(sq: Square) -> Option<Square> {
        sq.right()
    }
    fn up(sq: Square) -> Option<Square> {
        sq.up()
    }
    fn down(sq: Square) -> Option<Square> {
        sq.down()
    }

    vec![left, right, up, down]
}

// Return a list of directions for the bishop.
fn bishop_directions() -> Vec<fn(Square) -> Option<Square>> {
    fn nw(sq: Square) -> Option<Square> {
        sq.left().and_then(|s| s.up())
    }
    fn ne(sq: Square) -> Option<Square> {
        sq.right().and_then(|s| s.up())
    }
    fn sw(sq: Square) -> Option<Square> {
        sq.left().and_then(|s| s.down())
    }
    fn se(sq: Square) -> Option<Square> {
        sq.right().and_then(|s| s.down())
    }

    vec![nw, ne, sw, se]
}

// Generate a random bitboard with a small number of bits.
pub fn random_squareset<R: Rng>(rng: &mut R) -> SquareSet {
    SquareSet::new(rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>())
}

// Generate the edges of the board as a SquareSet
fn gen_edges() -> SquareSet {
    ALL_SQUARES
        .iter()
        .filter(|sq| {
            sq.get_rank() == Rank::First
                || sq.get_rank() == Rank::Eighth
                || sq.get_file() == File::A
                || sq.get_file() == File::H
        })
        .fold(EMPTY, |b, s| b | SquareSet::from_square(*s))
}

// The relevant-occupancy mask: the empty-board rays with the endpoint of each
// ray removed.  A blocker on a ray endpoint cannot change the attack set, so
// both the pext and the magic lookups hash only these squares.
pub fn relevant_mask(sq: Square, slider: Slider) -> SquareSet {
    get_rays(sq, slider)
        & if slider == Slider::Bishop {
            !gen_edges()
        } else {
            !ALL_SQUARES
                .iter()
                .filter(|edge| {
                    (sq.get_rank() == edge.get_rank()
                        && (edge.get_file() == File::A || edge.get_file() == File::H))
                        || (sq.get_file() == edge.get_file()
                            && (edge.get_rank() == Rank::First || edge.get_rank() == Rank::Eighth))
                })
                .fold(EMPTY, |b, s| b | SquareSet::from_square(*s))
        }
}

// Given a mask, generate every subset of it.  Subset i is the deposit of i's
// low bits into the mask, so the result is in pext-index order.
fn mask_subsets(mask: SquareSet) -> Vec<SquareSet> {
    let mut result = vec![];
    let squares = mask.collect::<Vec<_>>();

    for i in 0..(1u64 << mask.popcnt()) {
        let mut current = EMPTY;
        for j in 0..mask.popcnt() {
            if (i & (1u64 << j)) == (1u64 << j) {
                current |= SquareSet::from_square(squares[j as usize]);
            }
        }
        result.push(current);
    }

    result
}

// Generate all the possible combinations of blocking pieces for the
// rook/bishop, and then generate all possible attacks for each set of
// blocking pieces.
pub fn questions_and_answers(sq: Square, slider: Slider) -> (Vec<SquareSet>, Vec<SquareSet>) {
    let mask = relevant_mask(sq, slider);
    let questions = mask_subsets(mask);

    let mut answers = vec![];

    let movement = if slider == Slider::Bishop {
        bishop_directions()
    } else {
        rook_directions()
    };

    for question in questions.iter() {
        let mut answer = EMPTY;
        for m in movement.iter() {
            let mut next = m(sq);
            while let Some(n) = next {
                answer ^= SquareSet::from_square(n);
                if (SquareSet::from_square(n) & *question) != EMPTY {
                    break;
                }
                next = m(n);
            }
        }
        answers.push(answer);
    }

    (questions, answers)
}
