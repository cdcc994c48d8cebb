use core::convert::TryInto;

use log::{debug, warn};

use zxsnap_core::memory::{Ram48, RAM_BASE_ADDR, SCREEN_SIZE};
use zxsnap_core::z80emu::{Cpu, CpuFlags, Prefix, StkReg16};

use crate::scr::ScreenRenderer;
use crate::snapshot::{PageDestination, SnapshotError};

use super::common::*;
use super::decompress::*;

/// The page number carrying the screen data.
pub const PAGE_SCREEN: u8 = 8;

// 48k model pages: 8: 4000-7fff, 4: 8000-bfff, 5: c000-ffff
fn mem_page_to_destination(page: u8) -> Option<PageDestination> {
    match page {
        PAGE_SCREEN => Some(PageDestination::Screen),
        4 => Some(PageDestination::Ram(0x8000)),
        5 => Some(PageDestination::Ram(0xC000)),
        _ => None
    }
}

/// Copies the decoded `header` registers and flags into the provided `cpu`.
pub fn setup_cpu<C: Cpu>(header: &Header, cpu: &mut C) -> Result<(), SnapshotError> {
    cpu.reset();
    cpu.set_i(header.i);
    cpu.set_reg16(StkReg16::HL, header.hl_alt);
    cpu.set_reg16(StkReg16::DE, header.de_alt);
    cpu.set_reg16(StkReg16::BC, header.bc_alt);
    cpu.exx();
    cpu.set_acc(header.a_alt);
    cpu.set_flags(CpuFlags::from_bits_truncate(header.f_alt));
    cpu.ex_af_af();
    cpu.set_reg16(StkReg16::HL, header.hl);
    cpu.set_reg16(StkReg16::DE, header.de);
    cpu.set_reg16(StkReg16::BC, header.bc);
    cpu.set_index16(Prefix::Yfd, header.iy);
    cpu.set_index16(Prefix::Xdd, header.ix);
    cpu.set_iffs(header.iff1, header.iff2);
    cpu.set_r(header.flags1.mix_r(header.r7));
    cpu.set_acc(header.a);
    cpu.set_flags(CpuFlags::from_bits_truncate(header.f));
    cpu.set_sp(header.sp);
    cpu.set_im(header.flags2.interrupt_mode()?);
    cpu.set_pc(header.pc);
    Ok(())
}

/// Restores the complete machine state from a **Z80** snapshot buffer.
///
/// `data` should contain the entire file. The decoded registers are copied
/// into the `cpu`, the memory pages into `ram` and the screen page together
/// with the border color are handed over to the `renderer` before the
/// non-screen remainder of that page is relocated into `ram`.
///
/// # Errors
/// A failed load leaves whatever state was already applied in place: this is
/// a best effort reader of a legacy format and does not roll back.
pub fn load_z80<C: Cpu, S: ScreenRenderer>(
        data: &[u8],
        cpu: &mut C,
        ram: &mut Ram48,
        renderer: &mut S
    ) -> Result<(), SnapshotError>
{
    let header = Header::from_bytes(data)?;
    setup_cpu(&header, cpu)?;
    renderer.set_border_color(header.flags1.border_color());

    let mut scratch = vec![0u8; PAGE_SIZE];
    let mut data = &data[header.pages_offset()..];
    let mut destination = PageDestination::Ram(RAM_BASE_ADDR);
    while let Some((length, page, is_compressed)) = parse_mem_header(data) {
        match mem_page_to_destination(page) {
            Some(dest) => destination = dest,
            None => warn!("z80: unrecognized memory page: {}", page)
        }
        let payload = data.get(MEM_HEADER_SIZE..MEM_HEADER_SIZE + length)
                          .ok_or(SnapshotError::TruncatedBlock)?;
        match destination {
            PageDestination::Screen => {
                let mut writer = PageWriter::new(&mut scratch);
                if is_compressed {
                    decompress_page(payload, &mut writer)?;
                }
                else {
                    writer.copy_from(payload)?;
                }
                if page == PAGE_SCREEN {
                    debug!("z80: screen page: {} bytes", writer.written());
                    renderer.render_screen(scratch[..SCREEN_SIZE].try_into().unwrap());
                    // the non-screen remainder of the page is ordinary RAM at 0x5B00
                    ram.page_mut(RAM_BASE_ADDR, PAGE_SIZE - SCREEN_SIZE)?
                       .copy_from_slice(&scratch[SCREEN_SIZE..]);
                }
            }
            PageDestination::Ram(address) => {
                let mut writer = PageWriter::new(ram.page_mut(address, PAGE_SIZE)?);
                if is_compressed {
                    decompress_page(payload, &mut writer)?;
                }
                else {
                    writer.copy_from(payload)?;
                }
                debug!("z80: page {} at {:#06x}: {} bytes", page, address, writer.written());
            }
        }
        data = &data[MEM_HEADER_SIZE + length..];
    }
    Ok(())
}

/// Extracts only the screen page from a **Z80** snapshot buffer and displays
/// it with the `renderer`, leaving all machine state untouched.
///
/// Lets a file browser show previews of snapshots without loading them.
pub fn load_z80_screen<S: ScreenRenderer>(
        data: &[u8],
        renderer: &mut S
    ) -> Result<(), SnapshotError>
{
    let header = Header::from_bytes(data)?;
    let mut data = &data[header.pages_offset()..];
    while let Some((length, page, is_compressed)) = parse_mem_header(data) {
        let payload = data.get(MEM_HEADER_SIZE..MEM_HEADER_SIZE + length)
                          .ok_or(SnapshotError::TruncatedBlock)?;
        if page == PAGE_SCREEN {
            let mut scratch = vec![0u8; PAGE_SIZE];
            let mut writer = PageWriter::new(&mut scratch);
            if is_compressed {
                decompress_page(payload, &mut writer)?;
            }
            else {
                writer.copy_from(payload)?;
            }
            renderer.render_screen(scratch[..SCREEN_SIZE].try_into().unwrap());
            return Ok(());
        }
        data = &data[MEM_HEADER_SIZE + length..];
    }
    debug!("z80: no screen page found");
    Ok(())
}
