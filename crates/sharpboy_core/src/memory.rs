//! Flat 64 KiB address space.
//!
//! Regions of the DMG memory map are address conventions over one byte
//! array. The only translation applied on access is the echo-RAM mirror.

use crate::cpu::Bus;

/// Total addressable memory (64 KiB).
pub const MEMORY_SIZE: usize = 0x10000;

pub const ROM_BANK0_START: u16 = 0x0000;
pub const ROM_BANKN_START: u16 = 0x4000;
pub const ROM_END: u16 = 0x7FFF;
pub const VRAM_START: u16 = 0x8000;
pub const VRAM_END: u16 = 0x9FFF;
pub const EXTERNAL_RAM_START: u16 = 0xA000;
pub const WRAM_START: u16 = 0xC000;
pub const ECHO_START: u16 = 0xE000;
pub const ECHO_END: u16 = 0xFDFF;
pub const OAM_START: u16 = 0xFE00;
pub const UNUSABLE_START: u16 = 0xFEA0;
pub const UNUSABLE_END: u16 = 0xFEFF;
pub const IO_START: u16 = 0xFF00;
pub const HRAM_START: u16 = 0xFF80;

/// Boot-ROM disable register; writing 1 hands 0x0000.. over to the cartridge.
pub const BOOT_ROM_SWITCH: u16 = 0xFF50;

pub const REG_LCDC: u16 = 0xFF40;
pub const REG_STAT: u16 = 0xFF41;
pub const REG_LY: u16 = 0xFF44;
pub const REG_LYC: u16 = 0xFF45;
pub const REG_BGP: u16 = 0xFF47;

pub struct Memory {
    bytes: Box<[u8]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    pub fn new() -> Self {
        Self {
            bytes: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    /// Echo RAM reads and writes land in work RAM.
    #[inline]
    fn resolve(addr: u16) -> u16 {
        match addr {
            ECHO_START..=ECHO_END => addr - (ECHO_START - WRAM_START),
            _ => addr,
        }
    }

    pub fn read_byte(&self, addr: u16) -> u8 {
        self.bytes
            .get(usize::from(Self::resolve(addr)))
            .copied()
            .unwrap_or(0)
    }

    /// Little-endian: low byte at `addr`, high byte at `addr + 1`.
    pub fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read_byte(addr);
        let hi = self.read_byte(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    pub fn write_byte(&mut self, addr: u16, value: u8) {
        if let Some(slot) = self.bytes.get_mut(usize::from(Self::resolve(addr))) {
            *slot = value;
        }
    }

    pub fn write_word(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write_byte(addr, lo);
        self.write_byte(addr.wrapping_add(1), hi);
    }

    /// Copy `data` into memory starting at `dest`, without the echo
    /// mirror. Bytes that would run past 0xFFFF are dropped.
    ///
    /// Returns how many bytes were copied.
    pub fn map_buffer(&mut self, data: &[u8], dest: u16) -> usize {
        let start = usize::from(dest);
        let len = data.len().min(MEMORY_SIZE - start);
        if len < data.len() {
            log::warn!(
                "map_buffer: {} of {} bytes at 0x{dest:04X} do not fit, truncating",
                data.len() - len,
                data.len(),
            );
        }
        self.bytes[start..start + len].copy_from_slice(&data[..len]);
        len
    }

    /// Read-only view of a region, for inspection and tests.
    pub fn slice(&self, start: u16, len: usize) -> &[u8] {
        let start = usize::from(start);
        let end = start.saturating_add(len).min(MEMORY_SIZE);
        &self.bytes[start..end]
    }

    /// I/O register values the DMG boot ROM leaves behind at 0x0100.
    pub fn apply_dmg_post_boot_io(&mut self) {
        const POST_BOOT_IO: &[(u16, u8)] = &[
            (0xFF00, 0xCF), // P1
            (0xFF02, 0x7E), // SC
            (0xFF04, 0xAB), // DIV
            (0xFF07, 0xF8), // TAC
            (0xFF0F, 0xE1), // IF
            (0xFF10, 0x80),
            (0xFF11, 0xBF),
            (0xFF12, 0xF3),
            (0xFF13, 0xFF),
            (0xFF14, 0xBF),
            (0xFF16, 0x3F),
            (0xFF18, 0xFF),
            (0xFF19, 0xBF),
            (0xFF1A, 0x7F),
            (0xFF1B, 0xFF),
            (0xFF1C, 0x9F),
            (0xFF1D, 0xFF),
            (0xFF1E, 0xBF),
            (0xFF20, 0xFF),
            (0xFF23, 0xBF),
            (0xFF24, 0x77),
            (0xFF25, 0xF3),
            (0xFF26, 0xF1),
            (REG_LCDC, 0x91),
            (REG_STAT, 0x85),
            (0xFF46, 0xFF), // DMA
            (REG_BGP, 0xFC),
            (BOOT_ROM_SWITCH, 0x01),
            (0xFFFF, 0x00), // IE
        ];

        for &(addr, value) in POST_BOOT_IO {
            self.bytes[usize::from(addr)] = value;
        }
    }
}

impl Bus for Memory {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.read_byte(addr)
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.write_byte(addr, value);
    }
}
