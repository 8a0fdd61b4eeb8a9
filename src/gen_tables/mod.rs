// This module generates tables_gen.rs, the lookup tables used by the attack
// and check queries.  Everything here runs in the build script only.

#![allow(dead_code)]

extern crate rand;

mod generate_all_tables;
mod helpers;
mod horiz;
mod hyperbola;
mod intercepts;
mod king;
mod knights;
mod magic;
mod pawns;
mod pext_data;
mod rays;

pub use self::generate_all_tables::generate_all_tables;
