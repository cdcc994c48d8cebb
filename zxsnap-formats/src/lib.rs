//! ZX Spectrum snapshot related file format utilities.
// http://www.worldofspectrum.org/faq/reference/formats.htm
pub mod scr;
pub mod snapshot;
pub mod z80;
