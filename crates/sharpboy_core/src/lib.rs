//! Sharp LR35902 (DMG) emulation core.
//!
//! [`Cpu`] runs against anything implementing [`Bus`]; [`Console`] wires it
//! to a flat [`Memory`], a [`Cartridge`], the boot-ROM [`Selector`] and a
//! timing-only [`Ppu`].

pub mod config;
pub mod cpu;
pub mod error;
pub mod machine;
pub mod memory;

pub use config::{EmulatorConfig, IllegalOpcodePolicy};
pub use cpu::{Bus, Cpu, CycleState, Flag, Interrupt, LowPower, Registers};
pub use error::{CartridgeError, CpuError};
pub use machine::{Cartridge, Console, Ppu, PpuMode, Selector};
pub use memory::Memory;
