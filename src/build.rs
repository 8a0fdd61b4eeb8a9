// Build script: generates tables_gen.rs, the lookup tables used by the
// attack and check queries, so no table needs to be initialized at runtime.

#![allow(dead_code)]

extern crate rand;
mod bitboard;
mod color;
mod error;
mod file;
mod gen_tables;
mod rank;
mod square;

use crate::gen_tables::generate_all_tables;

// Generate everything.
fn main() {
    generate_all_tables();
}
