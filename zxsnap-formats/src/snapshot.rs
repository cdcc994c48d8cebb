/*
    Copyright (C) 2023  Rafal Michalski

    This file is part of ZXSNAP, a Rust library for restoring ZX Spectrum
    machine state from snapshot files.

    For the full copyright notice, see the lib.rs file.
*/
//! Common snapshot format utilities.
use core::fmt;
use std::io;

use zxsnap_core::memory::ZxMemoryError;

/// Errors reported while restoring machine state from a snapshot.
#[non_exhaustive]
#[derive(Debug)]
pub enum SnapshotError {
    /// The buffer is too short or inconsistent with the snapshot header layout.
    MalformedHeader,
    /// A memory block declared more payload than the buffer contains.
    TruncatedBlock,
    /// Decompressed block data would not fit into the destination page.
    CapacityExceeded,
    /// The destination memory rejected the block's address range.
    Memory(ZxMemoryError)
}

impl std::error::Error for SnapshotError {}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            SnapshotError::MalformedHeader => "snapshot header is malformed or incomplete",
            SnapshotError::TruncatedBlock => "snapshot memory block length exceeds the remaining data",
            SnapshotError::CapacityExceeded => "snapshot memory block data exceeds the page capacity",
            SnapshotError::Memory(err) => return err.fmt(f)
        })
    }
}

impl From<ZxMemoryError> for SnapshotError {
    fn from(err: ZxMemoryError) -> Self {
        SnapshotError::Memory(err)
    }
}

impl From<SnapshotError> for io::Error {
    fn from(err: SnapshotError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// The memory destination of a single snapshot page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageDestination {
    /// The page carrying the screen data, decoded through a transient buffer.
    Screen,
    /// A 16k page of the main memory at the given address.
    Ram(u16),
}

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoystickModel {
    Kempston,
    Sinclair1,
    Sinclair2,
    Cursor,
}
