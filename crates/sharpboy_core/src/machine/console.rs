use crate::config::EmulatorConfig;
use crate::cpu::Cpu;
use crate::error::CpuError;
use crate::memory::{Memory, EXTERNAL_RAM_START};

use super::boot::BOOT_ROM;
use super::ppu::{Ppu, FRAME_CYCLES};
use super::{Cartridge, Selector};

/// Size of the external-RAM window at 0xA000..=0xBFFF.
const EXTERNAL_RAM_WINDOW: usize = 0x2000;

/// A DMG console: CPU, memory, cartridge and the periodic components
/// driven by the CPU's cycle count.
pub struct Console {
    pub cpu: Cpu,
    pub memory: Memory,
    cartridge: Cartridge,
    selector: Selector,
    ppu: Ppu,
    config: EmulatorConfig,
}

impl Console {
    pub fn new(config: EmulatorConfig, cartridge: Cartridge) -> Self {
        let mut console = Self {
            cpu: Cpu::new(&config),
            memory: Memory::new(),
            cartridge,
            selector: Selector::default(),
            ppu: Ppu::default(),
            config,
        };
        console.power_on();
        console
    }

    fn power_on(&mut self) {
        self.memory.map_buffer(self.cartridge.fixed_window(), 0x0000);
        let ram = self.cartridge.ram();
        self.memory
            .map_buffer(&ram[..ram.len().min(EXTERNAL_RAM_WINDOW)], EXTERNAL_RAM_START);

        if self.config.run_boot_rom {
            self.memory.map_buffer(&BOOT_ROM, 0x0000);
            log::info!("power on: running boot program");
        } else {
            self.memory.apply_dmg_post_boot_io();
            self.cpu.apply_post_boot_state();
            self.selector.mark_switched();
            log::info!("power on: skipping boot program, PC=0x0100");
        }
    }

    /// Power-cycle the console with the same cartridge and configuration.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.memory = Memory::new();
        self.selector = Selector::default();
        self.ppu = Ppu::default();
        self.power_on();
    }

    /// Run one CPU cycle and advance the periodic components by the
    /// T-cycles it took.
    ///
    /// The returned flag is `cycle()`'s: false while the CPU is parked in
    /// HALT or STOP. Time keeps moving either way.
    pub fn step(&mut self) -> Result<bool, CpuError> {
        let running = self.cpu.cycle(&mut self.memory)?;
        self.ppu.advance(self.cpu.last_cycles(), &mut self.memory);
        self.selector.poll(&mut self.memory, &self.cartridge);
        Ok(running)
    }

    /// Run for one frame's worth of T-cycles (70224).
    pub fn step_frame(&mut self) -> Result<(), CpuError> {
        let mut elapsed = 0u32;
        while elapsed < FRAME_CYCLES {
            self.step()?;
            elapsed = elapsed.saturating_add(self.cpu.last_cycles());
        }
        Ok(())
    }

    /// Step until PC reaches `pc` at an instruction boundary.
    ///
    /// Returns `Ok(false)` if `max_steps` ran out first.
    pub fn run_until(&mut self, pc: u16, max_steps: usize) -> Result<bool, CpuError> {
        for _ in 0..max_steps {
            if self.cpu.regs.pc == pc {
                return Ok(true);
            }
            self.step()?;
        }
        Ok(self.cpu.regs.pc == pc)
    }

    pub fn cartridge(&self) -> &Cartridge {
        &self.cartridge
    }

    pub fn ppu(&self) -> &Ppu {
        &self.ppu
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Emulated time since power-on, at the configured clock.
    pub fn emulated_seconds(&self) -> f64 {
        self.cpu.total_cycles() as f64 / f64::from(self.config.clock_hz)
    }
}
