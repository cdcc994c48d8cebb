/*
    Copyright (C) 2023  Rafal Michalski

    This file is part of ZXSNAP, a Rust library for restoring ZX Spectrum
    machine state from snapshot files.

    ZXSNAP is free software: you can redistribute it and/or modify it under
    the terms of the GNU Lesser General Public License (LGPL) as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    ZXSNAP is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Lesser General Public License for more details.

    You should have received a copy of the GNU Lesser General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.

    Author contact information: see Cargo.toml file, section [package.authors].
*/
//! ZXSNAP restores the state of ZX Spectrum emulators from snapshot files:
//! CPU registers, memory banks and the screen.
//!
//! The crate glues together the core components with the file format parsers.
//! An emulator provides the CPU (any [z80emu::Cpu] implementation), the
//! [memory::Ram48] image and a display backend implementing
//! [formats::scr::ScreenRenderer]; a snapshot loader fills them all in from
//! a byte buffer.
//!
//! # Example
//!
//! ```
//! use zxsnap::memory::{Ram48, ScreenArray};
//! use zxsnap::video::BorderColor;
//! use zxsnap::z80emu::Z80NMOS;
//! use zxsnap::formats::scr::ScreenRenderer;
//! use zxsnap::formats::z80::load_z80;
//!
//! struct NullScreen;
//!
//! impl ScreenRenderer for NullScreen {
//!     fn render_screen(&mut self, _screen: &ScreenArray) {}
//!     fn set_border_color(&mut self, _border: BorderColor) {}
//! }
//!
//! fn restore(data: &[u8]) -> Result<(Z80NMOS, Ram48), Box<dyn std::error::Error>> {
//!     let mut cpu = Z80NMOS::default();
//!     let mut ram = Ram48::new();
//!     load_z80(data, &mut cpu, &mut ram, &mut NullScreen)?;
//!     Ok((cpu, ram))
//! }
//! # // an empty version 2 header decodes to a reset machine
//! # assert!(restore(&vec![0u8; 32]).is_ok());
//! ```
pub use zxsnap_core::memory;
pub use zxsnap_core::video;
pub use zxsnap_core::z80emu;

#[cfg(feature = "formats")]
pub use zxsnap_formats as formats;
