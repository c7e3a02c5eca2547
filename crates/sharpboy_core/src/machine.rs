mod boot;
mod cartridge;
mod console;
mod ppu;
mod selector;

pub use boot::{BOOT_ROM, BOOT_ROM_SIZE};
pub use cartridge::{Cartridge, FIXED_ROM_WINDOW, HEADER_END};
pub use console::Console;
pub use ppu::{Ppu, PpuMode, FRAME_CYCLES, LINE_CYCLES};
pub use selector::Selector;
