use std::env;
use std::fs::File;
use std::path::Path;

use crate::gen_tables::horiz::*;
use crate::gen_tables::hyperbola::*;
use crate::gen_tables::intercepts::*;
use crate::gen_tables::king::*;
use crate::gen_tables::knights::*;
use crate::gen_tables::magic::*;
use crate::gen_tables::pawns::*;
use crate::gen_tables::pext_data::*;
use crate::gen_tables::rays::*;

// Generate every lookup table and write them all into tables_gen.rs in
// OUT_DIR, where src/tables.rs includes them.
pub fn generate_all_tables() {
    gen_bishop_rays();
    gen_rook_rays();
    gen_knight_moves();
    gen_king_moves();
    gen_pawn_attacks();
    gen_intercepts();
    gen_rook_horiz();
    gen_hyperbola_masks();
    gen_pext_data();
    gen_all_magic();

    let out_dir = env::var("OUT_DIR").unwrap();
    let tables_path = Path::new(&out_dir).join("tables_gen.rs");
    let mut f = File::create(&tables_path).unwrap();

    write_rays(&mut f);
    write_pawn_attacks(&mut f);
    write_knight_moves(&mut f);
    write_king_moves(&mut f);
    write_intercepts(&mut f);
    write_rook_horiz(&mut f);
    write_hyperbola_masks(&mut f);
    write_pext_data(&mut f);
    write_magic(&mut f);
}
