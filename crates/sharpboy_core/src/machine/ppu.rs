use crate::cpu::{request_interrupt, Bus, Interrupt};
use crate::memory::{REG_LCDC, REG_LY, REG_LYC, REG_STAT};

pub const OAM_SEARCH_CYCLES: u32 = 80;
pub const PIXEL_TRANSFER_CYCLES: u32 = 172;
pub const HBLANK_CYCLES: u32 = 204;
/// One scanline: OAM search + pixel transfer + HBlank.
pub const LINE_CYCLES: u32 = OAM_SEARCH_CYCLES + PIXEL_TRANSFER_CYCLES + HBLANK_CYCLES;
pub const VISIBLE_LINES: u8 = 144;
/// 144 visible lines plus 10 lines of VBlank.
pub const LINES_PER_FRAME: u8 = 154;
pub const FRAME_CYCLES: u32 = LINE_CYCLES * LINES_PER_FRAME as u32;

const LCDC_ENABLE: u8 = 0x80;
const STAT_COINCIDENCE: u8 = 0x04;
const STAT_HBLANK_SELECT: u8 = 0x08;
const STAT_VBLANK_SELECT: u8 = 0x10;
const STAT_OAM_SELECT: u8 = 0x20;
const STAT_LYC_SELECT: u8 = 0x40;

/// STAT mode, encoded as it appears in STAT bits 0-1.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum PpuMode {
    #[default]
    HBlank = 0,
    VBlank = 1,
    OamSearch = 2,
    PixelTransfer = 3,
}

/// Scanline timing only; nothing is rendered.
///
/// Keeps LY and the STAT mode/coincidence bits current and raises the
/// VBlank and STAT interrupts.
#[derive(Clone, Debug, Default)]
pub struct Ppu {
    line_cycle: u32,
    ly: u8,
    mode: PpuMode,
    /// OR of the enabled STAT sources; the interrupt fires on its rising edge.
    stat_line: bool,
    frames: u64,
}

impl Ppu {
    pub fn mode(&self) -> PpuMode {
        self.mode
    }

    pub fn ly(&self) -> u8 {
        self.ly
    }

    /// Completed frames (entries into VBlank) since power-on.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance by `cycles` T-cycles.
    pub fn advance<B: Bus>(&mut self, cycles: u32, bus: &mut B) {
        for _ in 0..cycles {
            self.tick(bus);
        }
    }

    fn tick<B: Bus>(&mut self, bus: &mut B) {
        if bus.read8(REG_LCDC) & LCDC_ENABLE == 0 {
            self.lcd_off(bus);
            return;
        }

        self.line_cycle += 1;
        if self.line_cycle == LINE_CYCLES {
            self.line_cycle = 0;
            self.ly = (self.ly + 1) % LINES_PER_FRAME;
            bus.write8(REG_LY, self.ly);

            if self.ly == VISIBLE_LINES {
                self.frames += 1;
                request_interrupt(bus, Interrupt::VBLANK);
                log::debug!("PPU: VBlank, frame {}", self.frames);
            }
        }

        self.mode = self.current_mode();
        self.update_stat(bus);
    }

    fn current_mode(&self) -> PpuMode {
        if self.ly >= VISIBLE_LINES {
            PpuMode::VBlank
        } else if self.line_cycle < OAM_SEARCH_CYCLES {
            PpuMode::OamSearch
        } else if self.line_cycle < OAM_SEARCH_CYCLES + PIXEL_TRANSFER_CYCLES {
            PpuMode::PixelTransfer
        } else {
            PpuMode::HBlank
        }
    }

    /// Rewrite STAT bits 0-2 and raise INT 0x48 on a rising STAT line.
    fn update_stat<B: Bus>(&mut self, bus: &mut B) {
        let coincidence = self.ly == bus.read8(REG_LYC);

        let mut stat = bus.read8(REG_STAT) & !0x07;
        stat |= self.mode as u8;
        if coincidence {
            stat |= STAT_COINCIDENCE;
        }
        bus.write8(REG_STAT, stat);

        let line = (coincidence && stat & STAT_LYC_SELECT != 0)
            || match self.mode {
                PpuMode::HBlank => stat & STAT_HBLANK_SELECT != 0,
                PpuMode::VBlank => stat & STAT_VBLANK_SELECT != 0,
                PpuMode::OamSearch => stat & STAT_OAM_SELECT != 0,
                PpuMode::PixelTransfer => false,
            };

        if line && !self.stat_line {
            request_interrupt(bus, Interrupt::LCD_STAT);
        }
        self.stat_line = line;
    }

    /// LCD disabled: LY is held at 0 and STAT reports mode 0.
    fn lcd_off<B: Bus>(&mut self, bus: &mut B) {
        if self.line_cycle == 0 && self.ly == 0 && self.mode == PpuMode::HBlank {
            return;
        }
        self.line_cycle = 0;
        self.ly = 0;
        self.mode = PpuMode::HBlank;
        self.stat_line = false;
        bus.write8(REG_LY, 0);
        let stat = bus.read8(REG_STAT) & !0x03;
        bus.write8(REG_STAT, stat);
    }
}
