use crate::file::File;
use crate::rank::Rank;
use crate::square::*;
use std::fmt;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul, Not, Shl, ShlAssign, Shr,
    ShrAssign, Sub,
};

#[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
use std::arch::x86_64::{_pdep_u64, _pext_u64};

/// A set of squares, implemented as a good old-fashioned bitboard.
///
/// Bit N set means square N is a member.  You *do* have access to the actual
/// value, but you are probably better off using the implemented operators to
/// work with this object.
///
/// ```
/// use chess_attacks::SquareSet;
///
/// let set = SquareSet(7); // lower-left 3 squares
///
/// let mut count = 0;
///
/// // Iterate over each square in the set
/// for _ in set {
///     count += 1;
/// }
///
/// assert_eq!(count, 3);
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Default, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SquareSet(pub u64);

/// An empty square set.  It is sometimes useful to use !EMPTY to get the universe of squares.
///
/// ```
///     use chess_attacks::EMPTY;
///
///     assert_eq!(EMPTY.popcnt(), 0);
///     assert_eq!((!EMPTY).popcnt(), 64);
/// ```
pub const EMPTY: SquareSet = SquareSet(0);

/// All squares on the A file.
pub const FILE_A: SquareSet = SquareSet(0x0101_0101_0101_0101);

/// All squares on the H file.
pub const FILE_H: SquareSet = SquareSet(0x8080_8080_8080_8080);

/// All squares on the first rank.
pub const RANK_1: SquareSet = SquareSet(0x0000_0000_0000_00FF);

/// All squares on the eighth rank.
pub const RANK_8: SquareSet = SquareSet(0xFF00_0000_0000_0000);

impl BitAnd for SquareSet {
    type Output = SquareSet;

    #[inline]
    fn bitand(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0 & other.0)
    }
}

impl BitOr for SquareSet {
    type Output = SquareSet;

    #[inline]
    fn bitor(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0 | other.0)
    }
}

impl BitXor for SquareSet {
    type Output = SquareSet;

    #[inline]
    fn bitxor(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0 ^ other.0)
    }
}

impl BitAndAssign for SquareSet {
    #[inline]
    fn bitand_assign(&mut self, other: SquareSet) {
        self.0 &= other.0;
    }
}

impl BitOrAssign for SquareSet {
    #[inline]
    fn bitor_assign(&mut self, other: SquareSet) {
        self.0 |= other.0;
    }
}

impl BitXorAssign for SquareSet {
    #[inline]
    fn bitxor_assign(&mut self, other: SquareSet) {
        self.0 ^= other.0;
    }
}

// Wrapping multiply, for the magic-number hash.
impl Mul for SquareSet {
    type Output = SquareSet;

    #[inline]
    fn mul(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0.wrapping_mul(other.0))
    }
}

// Wrapping arithmetic subtraction, for the hyperbola-quintessence trick.
impl Sub for SquareSet {
    type Output = SquareSet;

    #[inline]
    fn sub(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0.wrapping_sub(other.0))
    }
}

impl Not for SquareSet {
    type Output = SquareSet;

    #[inline]
    fn not(self) -> SquareSet {
        SquareSet(!self.0)
    }
}

/// Element-wise left shift: every member square's index goes up by `shift`.
/// Members that would leave the board are dropped.  `shift` must be in
/// [0, 63]; anything else is a programming error.
impl Shl<u8> for SquareSet {
    type Output = SquareSet;

    #[inline]
    fn shl(self, shift: u8) -> SquareSet {
        debug_assert!(shift <= 63);
        SquareSet(self.0 << shift)
    }
}

/// Element-wise right shift: every member square's index goes down by `shift`.
/// Members that would leave the board are dropped.  `shift` must be in
/// [0, 63]; anything else is a programming error.
impl Shr<u8> for SquareSet {
    type Output = SquareSet;

    #[inline]
    fn shr(self, shift: u8) -> SquareSet {
        debug_assert!(shift <= 63);
        SquareSet(self.0 >> shift)
    }
}

impl ShlAssign<u8> for SquareSet {
    #[inline]
    fn shl_assign(&mut self, shift: u8) {
        debug_assert!(shift <= 63);
        self.0 <<= shift;
    }
}

impl ShrAssign<u8> for SquareSet {
    #[inline]
    fn shr_assign(&mut self, shift: u8) {
        debug_assert!(shift <= 63);
        self.0 >>= shift;
    }
}

impl fmt::Display for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s: String = "".to_owned();
        for x in 0..64 {
            if self.0 & (1u64 << x) == (1u64 << x) {
                s.push_str("X ");
            } else {
                s.push_str(". ");
            }
            if x % 8 == 7 {
                s.push_str("\n");
            }
        }
        write!(f, "{}", s)
    }
}

impl SquareSet {
    /// Construct a new square set from a u64
    #[inline]
    pub fn new(b: u64) -> SquareSet {
        SquareSet(b)
    }

    /// Construct a new `SquareSet` with a particular `Square` set
    #[inline]
    pub fn set(rank: Rank, file: File) -> SquareSet {
        SquareSet::from_square(Square::make_square(rank, file))
    }

    /// Construct a new `SquareSet` with a particular `Square` set.
    /// The square must be a real board square, not `Square::NONE`.
    #[inline]
    pub fn from_square(sq: Square) -> SquareSet {
        debug_assert!(sq.is_valid());
        SquareSet(1u64 << sq.to_int())
    }

    /// Construct a `SquareSet` of 0 or 1 squares: empty for `Square::NONE`.
    ///
    /// Branchless: the bit to shift is 0 for `NONE`, and rotating by 64 is a
    /// no-op, so the sentinel falls out naturally.
    #[inline]
    pub fn from_square_or_none(sq: Square) -> SquareSet {
        let bit = (sq < Square::NONE) as u64;
        SquareSet(bit.rotate_left(sq.to_int() as u32))
    }

    /// A set of all squares on a particular rank.
    #[inline]
    pub fn rank_set(rank: Rank) -> SquareSet {
        SquareSet(0xFFu64 << (rank.to_index() * 8))
    }

    /// A set of all squares on a particular file.
    #[inline]
    pub fn file_set(file: File) -> SquareSet {
        SquareSet(0x0101_0101_0101_0101u64 << file.to_index())
    }

    /// The first (lowest) square in the set, or `Square::NONE` if the set is empty.
    #[inline]
    pub fn first_square(&self) -> Square {
        Square::new(self.0.trailing_zeros() as u8)
    }

    /// The last (highest) square in the set, or `Square::NONE` if the set is empty.
    #[inline]
    pub fn last_square(&self) -> Square {
        if self.0 == 0 {
            Square::NONE
        } else {
            Square::new(63 - self.0.leading_zeros() as u8)
        }
    }

    /// Clear the first (lowest) square of the set.  No-op on an empty set.
    #[inline]
    pub fn remove_first_square(&self) -> SquareSet {
        SquareSet(self.0 & self.0.wrapping_sub(1))
    }

    /// Is this `Square` a member of the set?  The square must be a real board square.
    #[inline]
    pub fn is_member(&self, sq: Square) -> bool {
        debug_assert!(sq.is_valid());
        self.0 & (1u64 << sq.to_int()) != 0
    }

    /// Count the number of `Squares` set in this `SquareSet`
    #[inline]
    pub fn popcnt(&self) -> u32 {
        self.0.count_ones()
    }

    /// Flip the set vertically: rank 1 becomes rank 8 and so on.  Look at the
    /// board from the opponent's perspective.
    #[inline]
    pub fn flip_vert(&self) -> SquareSet {
        SquareSet(self.0.swap_bytes())
    }

    /// Rotate every member left (up the board) by `shift`, wrapping around.
    /// Any shift amount is valid.
    #[inline]
    pub fn rotl(&self, shift: u32) -> SquareSet {
        SquareSet(self.0.rotate_left(shift))
    }

    /// Rotate every member right (down the board) by `shift`, wrapping around.
    /// Any shift amount is valid.
    #[inline]
    pub fn rotr(&self, shift: u32) -> SquareSet {
        SquareSet(self.0.rotate_right(shift))
    }

    /// The universe of squares if the set is non-empty, otherwise the empty set.
    #[inline]
    pub fn all_if_any(&self) -> SquareSet {
        if self.0 != 0 {
            !EMPTY
        } else {
            EMPTY
        }
    }

    /// The universe of squares if the set is empty, otherwise the empty set.
    #[inline]
    pub fn all_if_none(&self) -> SquareSet {
        if self.0 == 0 {
            !EMPTY
        } else {
            EMPTY
        }
    }

    /// Parallel bit extract: bit k of the result is the k-th set bit of
    /// `*self` counted in ascending order from `mask`'s members.
    ///
    /// `deposit` is the inverse: `x.extract(m).deposit(m) == x & m`.
    #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
    #[inline]
    pub fn extract(&self, mask: SquareSet) -> SquareSet {
        unsafe { SquareSet(_pext_u64(self.0, mask.0)) }
    }

    /// Parallel bit extract: bit k of the result is the k-th set bit of
    /// `*self` counted in ascending order from `mask`'s members.
    ///
    /// `deposit` is the inverse: `x.extract(m).deposit(m) == x & m`.
    #[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
    #[inline]
    pub fn extract(&self, mask: SquareSet) -> SquareSet {
        let mut mask = mask.0;
        let mut result = 0u64;
        let mut count = 1u64;

        while mask != 0 {
            let lowest_bit = mask & mask.wrapping_neg();
            if self.0 & lowest_bit != 0 {
                result |= count;
            }
            mask &= !lowest_bit;
            count = count.wrapping_mul(2);
        }

        SquareSet(result)
    }

    /// Parallel bit deposit: scatter the low `mask.popcnt()` bits of `*self`
    /// into `mask`'s set-bit positions in ascending order.
    #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
    #[inline]
    pub fn deposit(&self, mask: SquareSet) -> SquareSet {
        unsafe { SquareSet(_pdep_u64(self.0, mask.0)) }
    }

    /// Parallel bit deposit: scatter the low `mask.popcnt()` bits of `*self`
    /// into `mask`'s set-bit positions in ascending order.
    #[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
    #[inline]
    pub fn deposit(&self, mask: SquareSet) -> SquareSet {
        let mut mask = mask.0;
        let mut data = self.0;
        let mut result = 0u64;

        while mask != 0 {
            let lowest_bit = mask & mask.wrapping_neg();
            result |= lowest_bit * (data & 1);
            data >>= 1;
            mask ^= lowest_bit;
        }

        SquareSet(result)
    }

    /// Convert this `SquareSet` to a `usize` (for table lookups)
    #[inline]
    pub fn to_size(&self, rightshift: u8) -> usize {
        (self.0 >> rightshift) as usize
    }
}

/// For the `SquareSet`, iterate over every `Square` set, in ascending order.
///
/// The iterator runs on its own copy of the set (a `SquareSet` is `Copy`), so
/// the canonical take-and-clear-the-lowest-bit loop never disturbs the source
/// set, and the consumer may break out early.
impl Iterator for SquareSet {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let result = self.first_square();
            *self ^= SquareSet::from_square(result);
            Some(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tiny deterministic xorshift, enough to get varied bit patterns.
    fn xorshift(state: &mut u64) -> u64 {
        let mut x = *state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        *state = x;
        x
    }

    #[test]
    fn extract_deposit_inverse() {
        let mut state = 0x9E3779B97F4A7C15u64;
        for _ in 0..10_000 {
            let x = SquareSet(xorshift(&mut state));
            let m = SquareSet(xorshift(&mut state) & xorshift(&mut state));
            assert_eq!(x.extract(m).deposit(m), x & m);
        }

        // the worked example from the original documentation: extracting the
        // set bits of a mask itself packs them into the low bits
        let m = SquareSet(0x0000_0404_0404_7A04);
        assert_eq!(m.extract(m), SquareSet((1u64 << m.popcnt()) - 1));
        assert_eq!(SquareSet((1u64 << m.popcnt()) - 1).deposit(m), m);
    }

    #[test]
    fn rotation_closure() {
        let mut state = 0xDEADBEEFCAFEBABEu64;
        for n in 0..=128u32 {
            let x = SquareSet(xorshift(&mut state));
            assert_eq!(x.rotl(n).rotr(n), x);
            assert_eq!(x.rotr(n).rotl(n), x);
        }
        let x = SquareSet(xorshift(&mut state));
        assert_eq!(x.rotl(64), x);
        assert_eq!(x.rotr(64), x);
    }

    #[test]
    fn shifts_drop_overflow() {
        // the A file shifted up one rank loses A8
        let a_file = SquareSet::file_set(File::A);
        assert_eq!((a_file << 8).popcnt(), 7);
        assert_eq!((a_file >> 8).popcnt(), 7);

        // the E file shifted two columns right is the G file
        assert_eq!(
            SquareSet::file_set(File::E) << 2,
            SquareSet::file_set(File::G)
        );
    }

    #[test]
    fn flip_vert_reverses_ranks() {
        assert_eq!(
            SquareSet::rank_set(Rank::First).flip_vert(),
            SquareSet::rank_set(Rank::Eighth)
        );
        let mut state = 0x123456789ABCDEFu64;
        for _ in 0..100 {
            let x = SquareSet(xorshift(&mut state));
            assert_eq!(x.flip_vert().flip_vert(), x);
        }
    }

    #[test]
    fn first_and_last_square() {
        assert_eq!(EMPTY.first_square(), Square::NONE);
        assert_eq!(EMPTY.last_square(), Square::NONE);

        let set = SquareSet::from_square(Square::new(12)) | SquareSet::from_square(Square::new(40));
        assert_eq!(set.first_square(), Square::new(12));
        assert_eq!(set.last_square(), Square::new(40));
        assert_eq!(
            set.remove_first_square(),
            SquareSet::from_square(Square::new(40))
        );
        assert_eq!(EMPTY.remove_first_square(), EMPTY);
    }

    #[test]
    fn from_square_or_none() {
        assert_eq!(SquareSet::from_square_or_none(Square::NONE), EMPTY);
        for sq in ALL_SQUARES.iter() {
            assert_eq!(
                SquareSet::from_square_or_none(*sq),
                SquareSet::from_square(*sq)
            );
        }
    }

    #[test]
    fn enumeration_complete_ascending() {
        let mut state = 0xFEEDFACE0BADF00Du64;
        for _ in 0..200 {
            let set = SquareSet(xorshift(&mut state));

            let mut visited = EMPTY;
            let mut count = 0;
            let mut last = -1i32;
            for sq in set {
                assert!((sq.to_index() as i32) > last);
                last = sq.to_index() as i32;
                assert!(set.is_member(sq));
                visited |= SquareSet::from_square(sq);
                count += 1;
            }
            assert_eq!(count, set.popcnt());
            assert_eq!(visited, set);
        }
    }

    #[test]
    fn enumeration_early_termination() {
        let set = SquareSet(0xFF00_00F0);
        let k = 3;

        let mut visited = EMPTY;
        for sq in set {
            visited |= SquareSet::from_square(sq);
            if visited.popcnt() == k {
                break;
            }
        }
        assert_eq!(visited.popcnt(), k);
        assert_eq!(visited & set, visited);

        // the source set is untouched by iteration
        assert_eq!(set, SquareSet(0xFF00_00F0));
    }

    #[test]
    fn all_if_conditionals() {
        assert_eq!(EMPTY.all_if_any(), EMPTY);
        assert_eq!(EMPTY.all_if_none(), !EMPTY);
        assert_eq!(SquareSet(1).all_if_any(), !EMPTY);
        assert_eq!(SquareSet(1).all_if_none(), EMPTY);
    }

    #[test]
    fn edge_masks_match_line_constructors() {
        assert_eq!(FILE_A, SquareSet::file_set(File::A));
        assert_eq!(FILE_H, SquareSet::file_set(File::H));
        assert_eq!(RANK_1, SquareSet::rank_set(Rank::First));
        assert_eq!(RANK_8, SquareSet::rank_set(Rank::Eighth));
    }
}
