use std::fs::File;
use std::io::Write;

use crate::bitboard::{SquareSet, EMPTY};
use crate::square::{Square, ALL_SQUARES};

// Given a checker and a king, which squares block or capture the checker?
// Row 64 is the no-checker sentinel: everything is allowed.
static mut INTERCEPTS: [[SquareSet; 64]; 65] = [[EMPTY; 64]; 65];

// Given a king and a pinned piece, the full ray from the king through the
// pinned piece to the edge of the board.  Empty when the two squares are not
// aligned; lookups assert that case never happens.
static mut RAYS_FROM_KING: [[SquareSet; 64]; 64] = [[EMPTY; 64]; 64];

fn deltas(from: Square, to: Square) -> (i8, i8) {
    let dx = to.get_file().to_index() as i8 - from.get_file().to_index() as i8;
    let dy = to.get_rank().to_index() as i8 - from.get_rank().to_index() as i8;
    (dx, dy)
}

// Are the two squares on the same rank, file, diagonal or anti-diagonal?
fn is_ray(dx: i8, dy: i8) -> bool {
    dx == 0 || dy == 0 || dx.abs() == dy.abs()
}

fn compute_intercept(king: Square, checker: Square) -> SquareSet {
    if king == checker {
        return EMPTY;
    }

    let (dx, dy) = deltas(king, checker);

    if is_ray(dx, dy) {
        // walk from the king towards the checker; every square on the way is
        // an interception, the checker itself a capture
        let step_x = dx.signum();
        let step_y = dy.signum();

        let mut x = king.get_file().to_index() as i8;
        let mut y = king.get_rank().to_index() as i8;
        let mut intercept = EMPTY;

        loop {
            x += step_x;
            y += step_y;

            let sq = Square::new((y * 8 + x) as u8);
            intercept |= SquareSet::from_square(sq);
            if sq == checker {
                return intercept;
            }
        }
    } else {
        // knight jump: the check can only be resolved by capture
        SquareSet::from_square(checker)
    }
}

fn compute_ray(king: Square, pinned: Square) -> SquareSet {
    if king == pinned {
        return EMPTY;
    }

    let (dx, dy) = deltas(king, pinned);

    if !is_ray(dx, dy) {
        return EMPTY;
    }

    let step_x = dx.signum();
    let step_y = dy.signum();

    let mut x = king.get_file().to_index() as i8;
    let mut y = king.get_rank().to_index() as i8;
    let mut ray = EMPTY;

    loop {
        x += step_x;
        y += step_y;

        if x < 0 || x >= 8 || y < 0 || y >= 8 {
            return ray;
        }

        ray |= SquareSet::from_square(Square::new((y * 8 + x) as u8));
    }
}

// Generate the INTERCEPTS and RAYS_FROM_KING arrays.
pub fn gen_intercepts() {
    for king in ALL_SQUARES.iter() {
        for other in ALL_SQUARES.iter() {
            unsafe {
                INTERCEPTS[other.to_index()][king.to_index()] = compute_intercept(*king, *other);
                RAYS_FROM_KING[king.to_index()][other.to_index()] = compute_ray(*king, *other);
            }
        }
        unsafe {
            INTERCEPTS[64][king.to_index()] = !EMPTY;
        }
    }
}

// Write the INTERCEPTS and RAYS_FROM_KING arrays to the specified file.
pub fn write_intercepts(f: &mut File) {
    write!(f, "pub(crate) static INTERCEPTS: [[SquareSet; 64]; 65] = [\n").unwrap();
    for i in 0..65 {
        write!(f, "    [\n").unwrap();
        for j in 0..64 {
            unsafe { write!(f, "        SquareSet({}),\n", INTERCEPTS[i][j].to_size(0)).unwrap() };
        }
        write!(f, "    ],\n").unwrap();
    }
    write!(f, "];\n").unwrap();

    write!(
        f,
        "pub(crate) static RAYS_FROM_KING: [[SquareSet; 64]; 64] = [\n"
    )
    .unwrap();
    for i in 0..64 {
        write!(f, "    [\n").unwrap();
        for j in 0..64 {
            unsafe {
                write!(f, "        SquareSet({}),\n", RAYS_FROM_KING[i][j].to_size(0)).unwrap()
            };
        }
        write!(f, "    ],\n").unwrap();
    }
    write!(f, "];\n").unwrap();
}
