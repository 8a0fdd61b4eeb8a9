use std::fs::File;
use std::io::Write;

// Given the occupancy byte of a rank and the column of a rook on that rank,
// which columns does the rook attack?  The hyperbola backend uses this for
// the horizontal direction, where the o^(o-2r) trick does not work.
static mut ROOK_HORIZ: [[u8; 8]; 256] = [[0; 8]; 256];

// Generate the ROOK_HORIZ array.
pub fn gen_rook_horiz() {
    for rank_bits in 0..256usize {
        for rook_col in 0..8 {
            let mut mask = 0u8;

            for c in (rook_col + 1)..8 {
                let mask_bit = 1u8 << c;
                mask |= mask_bit;
                if rank_bits as u8 & mask_bit != 0 {
                    break;
                }
            }

            for c in (0..rook_col).rev() {
                let mask_bit = 1u8 << c;
                mask |= mask_bit;
                if rank_bits as u8 & mask_bit != 0 {
                    break;
                }
            }

            unsafe {
                ROOK_HORIZ[rank_bits][rook_col] = mask;
            }
        }
    }
}

// Write the ROOK_HORIZ array to the specified file.
pub fn write_rook_horiz(f: &mut File) {
    write!(f, "pub(crate) static ROOK_HORIZ: [[u8; 8]; 256] = [\n").unwrap();
    for i in 0..256 {
        unsafe {
            write!(
                f,
                "    [{}, {}, {}, {}, {}, {}, {}, {}],\n",
                ROOK_HORIZ[i][0],
                ROOK_HORIZ[i][1],
                ROOK_HORIZ[i][2],
                ROOK_HORIZ[i][3],
                ROOK_HORIZ[i][4],
                ROOK_HORIZ[i][5],
                ROOK_HORIZ[i][6],
                ROOK_HORIZ[i][7]
            )
            .unwrap()
        };
    }
    write!(f, "];\n").unwrap();
}
