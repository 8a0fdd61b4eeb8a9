use crate::error::Error;
use crate::file::File;
use crate::rank::Rank;
use std::fmt;
use std::str::FromStr;

/// Represent a square on the chess board, or the `NONE` sentinel.
///
/// Squares are numbered rank-major: A1 is 0, B1 is 1, ..., H8 is 63.
/// `Square::NONE` (64) orders after every real square, so "no square" can be
/// compared and stored without an `Option`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Square(u8);

/// How many squares are there?
pub const NUM_SQUARES: usize = 64;

/// A list of every square on the chessboard.
pub const ALL_SQUARES: [Square; NUM_SQUARES] = {
    let mut result = [Square(0); NUM_SQUARES];
    let mut i = 0;
    while i < NUM_SQUARES {
        result[i] = Square(i as u8);
        i += 1;
    }
    result
};

impl Default for Square {
    fn default() -> Square {
        Square(0)
    }
}

impl Square {
    /// The "no square" sentinel.  Orders after H8.
    pub const NONE: Square = Square(64);

    /// Create a new square, given an index.
    ///
    /// Passing in a number > 64 is invalid, but allowed.  Doing so will crash stuff.
    #[inline]
    pub fn new(sq: u8) -> Square {
        Square(sq)
    }

    /// Make a square, given a rank and a file.
    #[inline]
    pub fn make_square(rank: Rank, file: File) -> Square {
        Square((rank.to_index() as u8) << 3 | (file.to_index() as u8))
    }

    /// Return the rank of this square.  Must not be called on `Square::NONE`.
    #[inline]
    pub fn get_rank(&self) -> Rank {
        Rank::from_index((self.0 >> 3) as usize)
    }

    /// Return the file of this square.  Must not be called on `Square::NONE`.
    #[inline]
    pub fn get_file(&self) -> File {
        File::from_index((self.0 & 7) as usize)
    }

    /// If there is a square above me, return that.  Otherwise, None.
    #[inline]
    pub fn up(&self) -> Option<Square> {
        if self.get_rank() == Rank::Eighth {
            None
        } else {
            Some(Square::make_square(self.get_rank().up(), self.get_file()))
        }
    }

    /// If there is a square below me, return that.  Otherwise, None.
    #[inline]
    pub fn down(&self) -> Option<Square> {
        if self.get_rank() == Rank::First {
            None
        } else {
            Some(Square::make_square(self.get_rank().down(), self.get_file()))
        }
    }

    /// If there is a square to the left of me, return that.  Otherwise, None.
    #[inline]
    pub fn left(&self) -> Option<Square> {
        if self.get_file() == File::A {
            None
        } else {
            Some(Square::make_square(self.get_rank(), self.get_file().left()))
        }
    }

    /// If there is a square to the right of me, return that.  Otherwise, None.
    #[inline]
    pub fn right(&self) -> Option<Square> {
        if self.get_file() == File::H {
            None
        } else {
            Some(Square::make_square(self.get_rank(), self.get_file().right()))
        }
    }

    /// Is this a real board square (not the `NONE` sentinel)?
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0 < 64
    }

    /// Convert this square to an integer.
    #[inline]
    pub fn to_int(&self) -> u8 {
        self.0
    }

    /// Convert this `Square` to a `usize` for table lookup purposes
    #[inline]
    pub fn to_index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "-");
        }
        write!(
            f,
            "{}{}",
            (b'a' + (self.0 & 7)) as char,
            (b'1' + (self.0 >> 3)) as char
        )
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 {
            return Err(Error::InvalidSquare);
        }
        let file = File::from_str(&s[0..1]).map_err(|_| Error::InvalidSquare)?;
        let rank = Rank::from_str(&s[1..2]).map_err(|_| Error::InvalidSquare)?;
        Ok(Square::make_square(rank, file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_ordering() {
        let a1 = Square::from_str("a1").unwrap();
        let b1 = Square::from_str("b1").unwrap();
        let h8 = Square::from_str("h8").unwrap();

        assert!(a1 < b1);
        assert!(b1 < h8);
        assert!(h8 < Square::NONE);
        assert_eq!(h8.to_index(), 63);
    }

    #[test]
    fn square_round_trip() {
        for sq in ALL_SQUARES.iter() {
            assert_eq!(Square::from_str(&format!("{}", sq)).unwrap(), *sq);
            assert_eq!(
                Square::make_square(sq.get_rank(), sq.get_file()),
                *sq
            );
        }
    }

    #[test]
    fn square_from_bad_string() {
        assert!(Square::from_str("").is_err());
        assert!(Square::from_str("i3").is_err());
        assert!(Square::from_str("a9").is_err());
        assert!(Square::from_str("a10").is_err());
    }
}
