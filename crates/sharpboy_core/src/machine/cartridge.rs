use crate::config::EmulatorConfig;
use crate::error::CartridgeError;

/// End of the cartridge header; anything shorter cannot be a ROM image.
pub const HEADER_END: usize = 0x0150;

const TITLE_START: usize = 0x0134;
const TITLE_END: usize = 0x0144;
const CARTRIDGE_TYPE: usize = 0x0147;

/// Bytes of ROM visible at 0x0000..=0x7FFF without a mapper.
pub const FIXED_ROM_WINDOW: usize = 0x8000;

/// ROM image plus its external RAM.
///
/// Only the fixed 32 KiB window is ever mapped; images using a bank
/// controller still boot but switching banks has no effect.
#[derive(Clone, Debug)]
pub struct Cartridge {
    rom: Vec<u8>,
    ram: Vec<u8>,
}

impl Cartridge {
    pub fn new(rom: Vec<u8>, config: &EmulatorConfig) -> Result<Self, CartridgeError> {
        if rom.is_empty() {
            return Err(CartridgeError::Empty);
        }
        if rom.len() < HEADER_END {
            return Err(CartridgeError::TooShort { len: rom.len() });
        }

        let cartridge = Self {
            rom,
            ram: vec![0; config.external_ram_size],
        };
        log::info!(
            "cartridge \"{}\": type=0x{:02X}, {} KiB ROM, {} KiB RAM",
            cartridge.title(),
            cartridge.cartridge_type(),
            cartridge.rom.len() / 1024,
            cartridge.ram.len() / 1024,
        );
        if cartridge.rom.len() > FIXED_ROM_WINDOW {
            log::warn!("ROM larger than 32 KiB; only the first two banks are mapped");
        }
        Ok(cartridge)
    }

    pub fn rom(&self) -> &[u8] {
        &self.rom
    }

    pub fn ram(&self) -> &[u8] {
        &self.ram
    }

    /// The part of the ROM that lives at 0x0000..=0x7FFF.
    pub fn fixed_window(&self) -> &[u8] {
        &self.rom[..self.rom.len().min(FIXED_ROM_WINDOW)]
    }

    /// Header title, trimmed at the first NUL and stripped of non-ASCII.
    pub fn title(&self) -> String {
        self.rom[TITLE_START..TITLE_END]
            .iter()
            .take_while(|&&b| b != 0)
            .filter(|b| b.is_ascii_graphic() || **b == b' ')
            .map(|&b| char::from(b))
            .collect::<String>()
            .trim_end()
            .to_owned()
    }

    pub fn cartridge_type(&self) -> u8 {
        self.rom[CARTRIDGE_TYPE]
    }
}
