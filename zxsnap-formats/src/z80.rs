/*
    Copyright (C) 2023  Rafal Michalski

    This file is part of ZXSNAP, a Rust library for restoring ZX Spectrum
    machine state from snapshot files.

    For the full copyright notice, see the lib.rs file.
*/
//! **Z80** snapshot format utilities.
//!
//! See the specification reference on [World of Spectrum](https://worldofspectrum.org/faq/reference/z80format.htm).
//!
//! ## Implementation specifics
//!
//! * Only the page based variant of the format is handled, restricted to the
//!   48k model pages: 8, 4 and 5. Version 1 files, recognizable by a non-zero
//!   program counter at offset 6, are not detected and will fail to load.
//! * A block with an unrecognized page number is loaded into the most recently
//!   selected destination and reported with a warning only.
//! * The border color keeps its full 3 bit value; some legacy loaders reduce
//!   it to a black or blue flag before converting it, losing the color.
mod common;
mod decompress;
mod loader;

pub use common::*;
pub use loader::*;
