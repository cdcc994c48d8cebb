/*
    Copyright (C) 2023  Rafal Michalski

    This file is part of ZXSNAP, a Rust library for restoring ZX Spectrum
    machine state from snapshot files.

    For the full copyright notice, see the lib.rs file.
*/
/*! **SCR** file format utilities.

A classic **SCR** file is a raw dump of the 6912 byte pixel and attribute
screen data.
*/
use core::convert::TryFrom;
use std::io;

use zxsnap_core::memory::ScreenArray;
use zxsnap_core::video::BorderColor;

/// An interface for the display backend of an emulator.
///
/// Snapshot loaders use it to hand over the screen data and derived display
/// state restored from a file. Conversion to the renderer's pixel format is
/// the implementation's business, see [Palette][zxsnap_core::video::Palette].
pub trait ScreenRenderer {
    /// Should display the given pixel and attribute screen data.
    fn render_screen(&mut self, screen: &ScreenArray);
    /// Should set the border area to the given color.
    fn set_border_color(&mut self, border: BorderColor);
}

/// Attempts to interpret `data` as a classic **SCR** screen dump and
/// displays it with the `renderer`.
///
/// # Errors
/// This function will return an error if `data` is not recognized as an
/// **SCR** file.
pub fn load_scr<S: ScreenRenderer>(data: &[u8], renderer: &mut S) -> io::Result<()> {
    let screen = <&ScreenArray>::try_from(data).map_err(|_| {
        io::Error::new(io::ErrorKind::InvalidData, "Screen format not recognized")
    })?;
    renderer.render_screen(screen);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use zxsnap_core::memory::SCREEN_SIZE;

    #[derive(Default)]
    struct TestRenderer {
        rendered: usize,
        border: Option<BorderColor>
    }

    impl ScreenRenderer for TestRenderer {
        fn render_screen(&mut self, screen: &ScreenArray) {
            assert_eq!(screen.len(), SCREEN_SIZE);
            self.rendered += 1;
        }
        fn set_border_color(&mut self, border: BorderColor) {
            self.border = Some(border);
        }
    }

    #[test]
    fn load_scr_works() {
        let mut renderer = TestRenderer::default();
        let data = vec![0u8; SCREEN_SIZE];
        load_scr(&data, &mut renderer).unwrap();
        assert_eq!(renderer.rendered, 1);
        assert!(renderer.border.is_none());
        assert!(load_scr(&data[..100], &mut renderer).is_err());
        let data = vec![0u8; SCREEN_SIZE + 1];
        assert!(load_scr(&data, &mut renderer).is_err());
        assert_eq!(renderer.rendered, 1);
    }
}
