/*
    Copyright (C) 2023  Rafal Michalski

    This file is part of ZXSNAP, a Rust library for restoring ZX Spectrum
    machine state from snapshot files.

    For the full copyright notice, see the lib.rs file.
*/
//! Video API.
use core::convert::TryFrom;
use core::fmt;

use bitflags::bitflags;

#[cfg(feature = "snapshot")]
use serde::{Serialize, Deserialize};

bitflags! {
    /// Bitflags defining ZX Spectrum's border colors.
    #[cfg_attr(feature = "snapshot", derive(Serialize, Deserialize))]
    #[cfg_attr(feature = "snapshot", serde(try_from = "u8", into = "u8"))]
    #[derive(Default)]
    pub struct BorderColor: u8 {
        const BLACK   = 0b000;
        const BLUE    = 0b001;
        const RED     = 0b010;
        const MAGENTA = 0b011;
        const GREEN   = 0b100;
        const CYAN    = 0b101;
        const YELLOW  = 0b110;
        const WHITE   = 0b111;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TryFromU8BorderColorError(pub u8);

impl std::error::Error for TryFromU8BorderColorError {}

impl fmt::Display for TryFromU8BorderColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "converted integer ({}) out of range for `BorderColor`", self.0)
    }
}

impl TryFrom<u8> for BorderColor {
    type Error = TryFromU8BorderColorError;
    fn try_from(color: u8) -> Result<Self, Self::Error> {
        BorderColor::from_bits(color).ok_or_else(|| TryFromU8BorderColorError(color))
    }
}

impl From<BorderColor> for u8 {
    fn from(color: BorderColor) -> u8 {
        color.bits()
    }
}

/// An interface for converting ZX Spectrum colors to pixel colors of a renderer.
///
/// Implemented by the display backend of an emulator.
pub trait Palette {
    /// Specifies the type used for pixels.
    type Pixel: Copy;
    /// Should return one of ZX Spectrum colors:
    /// ```text
    /// index color   index color
    ///   0 - black     4 - green
    ///   1 - blue      5 - cyan
    ///   2 - red       6 - yellow
    ///   3 - magenta   7 - white
    /// ```
    fn get_pixel(index: u8) -> Self::Pixel;
}
